use ninth_planet_api::{
    Card, Cards, CommsState, GameState, Mission, MissionConfig, Move, Outcome, Phase, RulesError,
    Seat, SeatView, Seed, Shuffle, Stage, Token, Tokens,
};

fn c(card: &str) -> Card {
    card.parse().unwrap()
}

struct Unshuffled;

impl Shuffle for Unshuffled {
    fn shuffle<T>(&mut self, items: Vec<T>) -> Vec<T> {
        items
    }
}

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct Table {
    state: GameState,
}

impl Table {
    fn new(seats: usize) -> Self {
        init();
        Self {
            state: GameState::new(seats, &mut Unshuffled).unwrap(),
        }
    }

    fn apply(&mut self, seat: usize, action: Move) -> Result<Option<Outcome>, RulesError> {
        let (state, transition) = self.state.apply(Seat::new(seat), &action, &mut Unshuffled)?;
        self.state = state;
        Ok(transition.terminal)
    }

    fn join(&mut self) {
        for seat in 0..self.state.seats() {
            self.apply(
                seat,
                Move::SetName {
                    name: format!("crew-{}", seat),
                },
            )
            .unwrap();
        }
    }

    fn define(&mut self, task_count: usize, tokens: Tokens) {
        self.apply(
            self.state.captain().idx(),
            Move::DefineMission {
                config: MissionConfig { task_count, tokens },
            },
        )
        .unwrap();
    }

    fn play(&mut self, seat: usize, card: Card) -> Option<Outcome> {
        self.apply(seat, Move::PlayCard { card }).unwrap()
    }

    fn pass_all(&mut self) {
        for seat in 0..self.state.seats() {
            if self.state.stage(Seat::new(seat)) == Stage::Wait {
                self.apply(seat, Move::Pass).unwrap();
            }
        }
    }
}

#[test]
fn test_captain_completes_own_task() {
    let mut table = Table::new(3);
    table.join();
    table.define(1, Tokens::from(Token::First));
    assert_eq!(table.state.captain(), Seat::new(0));
    table.apply(0, Move::SelectTask { index: 0 }).unwrap();
    assert_eq!(table.state.phase(), Phase::Play);
    table.pass_all();
    assert_eq!(table.play(0, c("9P")), None);
    assert_eq!(table.play(1, c("1P")), None);
    assert_eq!(table.play(2, c("8P")), Some(Outcome::Success));
    assert_eq!(table.state.phase(), Phase::Complete(Outcome::Success));
    let task = &table.state.team()[0].tasks[0];
    assert_eq!(task.card, c("1P"));
    assert_eq!(task.token, Some(Token::First));
    assert!(task.complete);
}

#[test]
fn test_teammate_takes_task_card() {
    let mut table = Table::new(3);
    table.join();
    table.define(1, Tokens::from(Token::First));
    table.apply(0, Move::SelectTask { index: 0 }).unwrap();
    table.pass_all();
    table.play(0, c("3P"));
    table.play(1, c("1P"));
    assert_eq!(table.play(2, c("8P")), Some(Outcome::Failure));
    assert_eq!(
        table.apply(0, Move::PlayCard { card: c("6P") }),
        Err(RulesError::MissionComplete(Outcome::Failure))
    );
}

#[test]
fn test_signal_then_play() {
    let mut table = Table::new(3);
    table.join();
    table.define(2, Tokens::NONE);
    table.apply(0, Move::SelectTask { index: 0 }).unwrap();
    table.apply(1, Move::SelectTask { index: 0 }).unwrap();
    table.apply(1, Move::InitiateTransmission).unwrap();
    assert_eq!(
        table.apply(1, Move::PlayCard { card: c("4G") }),
        Err(RulesError::NotHighOrLow(c("4G")))
    );
    table.apply(1, Move::PlayCard { card: c("7G") }).unwrap();
    let view = table.state.view(Seat::new(2)).unwrap();
    assert_eq!(view.team[1].comms_card, Some(c("7G")));
    assert_eq!(view.team[1].comms_state, CommsState::InPlayHigh);
    assert_eq!(
        table.apply(1, Move::InitiateTransmission),
        Err(RulesError::WrongStage("initiate transmission", Stage::Play))
    );
    table.pass_all();
    table.play(0, c("3G"));
    table.play(1, c("7G"));
    table.play(2, c("8G"));
    assert_eq!(table.state.team()[1].comms_state, CommsState::Spent);
    assert_eq!(table.state.trick().leader, Seat::new(2));
    for seat in Seat::all(3) {
        assert_eq!(table.state.stage(seat), Stage::Play);
    }
}

#[test]
fn test_views_never_leak_hands() {
    let mut table = Table::new(4);
    table.join();
    for seat in Seat::all(4) {
        let view: SeatView = table.state.view(seat).unwrap();
        let json = serde_json::to_string(&view).unwrap();
        for other in Seat::all(4).filter(|&other| other != seat) {
            for card in table.state.player(other).hand {
                assert!(!json.contains(&format!("\"{}\"", card)));
            }
        }
    }
}

#[test]
fn test_deal_for_every_table_size() {
    init();
    for seats in 3..=5 {
        for i in 0..10 {
            let mission =
                Mission::<()>::new(seats, Seed::chosen(format!("{}-{}", seats, i))).unwrap();
            let state = mission.state();
            assert!(state.is_conserved());
            let hands = Seat::all(seats)
                .map(|seat| state.player(seat).hand)
                .collect::<Vec<_>>();
            assert_eq!(hands.iter().fold(Cards::NONE, |a, &b| a | b), Cards::ALL);
            assert!(hands[state.captain().idx()].contains(Card::ROCKET_FOUR));
            assert_eq!(state.phase(), Phase::Join);
            assert_eq!(state.awaiting().len(), seats);
        }
    }
}

#[test]
fn test_same_seed_same_mission() {
    init();
    let seed = Seed::chosen("determinism");
    let a = Mission::<()>::new(4, seed.clone()).unwrap();
    let b = Mission::<()>::new(4, seed).unwrap();
    assert_eq!(a.state(), b.state());
    assert_eq!(
        bincode::serialize(a.state()).unwrap(),
        bincode::serialize(b.state()).unwrap()
    );
    let bytes = bincode::serialize(a.state()).unwrap();
    let state: GameState = bincode::deserialize(&bytes).unwrap();
    assert_eq!(&state, a.state());
}

#[test]
fn test_redacted_seed_cannot_host() {
    assert_eq!(
        Mission::<()>::new(3, Seed::Redacted).unwrap_err(),
        RulesError::RedactedSeed
    );
}
