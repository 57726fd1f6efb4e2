use crate::{
    classify_signal, deck, is_valid_play, Card, Cards, CommsState, Move, MissionConfig, Outcome, Phase,
    PlayerState, ResolvedTrick, RulesError, Seat, SeatView, Shuffle, Stage, Task, Teammate,
    Transition, Trick, MAX_SEATS, MIN_SEATS,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Data that is never sent to any seat.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Secret {
    pub tricks: Vec<ResolvedTrick>,
}

/// The authoritative state of one mission.
///
/// A `GameState` only changes through [`GameState::apply`], which either
/// returns the next state or rejects the move. `team` is re-derived from
/// `players` after every change and is never edited on its own.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    captain: Seat,
    phase: Phase,
    stages: Vec<Stage>,
    next_actor: Option<Seat>,
    players: Vec<PlayerState>,
    team: Vec<Teammate>,
    tasks: Vec<Task>,
    trick: Trick,
    last_trick: Option<ResolvedTrick>,
    secret: Secret,
}

impl GameState {
    /// Shuffles and deals a fresh deck to `seats` seats, round robin.
    pub fn new<S: Shuffle>(seats: usize, shuffle: &mut S) -> Result<Self, RulesError> {
        if seats < MIN_SEATS || seats > MAX_SEATS {
            return Err(RulesError::IllegalSeatCount(seats));
        }
        let deck = shuffled(shuffle, deck())?;
        let mut hands = vec![Cards::NONE; seats];
        for (i, card) in deck.into_iter().enumerate() {
            hands[i % seats] |= card;
        }
        let captain = hands
            .iter()
            .position(|hand| hand.contains(Card::ROCKET_FOUR))
            .map(Seat::new)
            .ok_or(RulesError::BadShuffle)?;
        let players = hands.into_iter().map(PlayerState::new).collect::<Vec<_>>();
        let team = players
            .iter()
            .map(|player| Teammate::project(player, None))
            .collect();
        debug!("new: seats={}, captain={}", seats, captain);
        Ok(Self {
            captain,
            phase: Phase::Join,
            stages: vec![Stage::Join; seats],
            next_actor: None,
            players,
            team,
            tasks: Vec::new(),
            trick: Trick::new(captain),
            last_trick: None,
            secret: Secret::default(),
        })
    }

    pub fn seats(&self) -> usize {
        self.players.len()
    }

    pub fn captain(&self) -> Seat {
        self.captain
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stage(&self, seat: Seat) -> Stage {
        self.stages[seat.idx()]
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// The seat holding the turn while selecting tasks or playing.
    pub fn next_actor(&self) -> Option<Seat> {
        self.next_actor
    }

    pub fn player(&self, seat: Seat) -> &PlayerState {
        &self.players[seat.idx()]
    }

    pub fn team(&self) -> &[Teammate] {
        &self.team
    }

    /// Tasks drawn for the mission that no seat has taken yet.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn trick(&self) -> &Trick {
        &self.trick
    }

    pub fn last_trick(&self) -> Option<&ResolvedTrick> {
        self.last_trick.as_ref()
    }

    /// Every resolved trick, oldest first. For auditing only.
    pub fn tricks(&self) -> &[ResolvedTrick] {
        &self.secret.tricks
    }

    /// The state as `seat` is allowed to see it.
    pub fn view(&self, seat: Seat) -> Result<SeatView, RulesError> {
        if seat.idx() >= self.seats() {
            return Err(RulesError::UnknownSeat(seat));
        }
        Ok(SeatView {
            seat,
            captain: self.captain,
            phase: self.phase,
            stages: self.stages.clone(),
            next_actor: self.next_actor,
            player: self.players[seat.idx()].clone(),
            team: self.team.clone(),
            tasks: self.tasks.clone(),
            trick: self.trick.clone(),
            last_trick: self.last_trick.clone(),
        })
    }

    /// Seats that may currently make a move.
    pub fn awaiting(&self) -> Vec<Seat> {
        let seats = Seat::all(self.seats());
        match self.phase {
            Phase::Join | Phase::DefineMission => seats
                .filter(|&seat| self.stage(seat) != Stage::Idle)
                .collect(),
            Phase::SelectTasks => self.next_actor.into_iter().collect(),
            Phase::Play => {
                let mut awaiting = self
                    .trick
                    .leader
                    .rotation(self.seats())
                    .filter(|&seat| self.stage(seat).is_signaling())
                    .collect::<Vec<_>>();
                if let Some(actor) = self.next_actor {
                    if self.stage(actor) == Stage::Play {
                        awaiting.push(actor);
                    }
                }
                awaiting
            }
            Phase::Complete(_) => Vec::new(),
        }
    }

    /// Whether `team` matches a fresh projection of `players`.
    pub fn is_consistent(&self) -> bool {
        self.players.len() == self.team.len()
            && self
                .players
                .iter()
                .zip(&self.team)
                .all(|(player, teammate)| Teammate::project(player, Some(teammate)) == *teammate)
    }

    /// Whether every card of the deck is in exactly one hand, the current
    /// trick, or a resolved trick.
    pub fn is_conserved(&self) -> bool {
        let mut seen = Cards::NONE;
        let mut count = 0;
        let hands = self.players.iter().map(|player| player.hand);
        let played = self
            .secret
            .tricks
            .iter()
            .flat_map(|trick| trick.cards.iter().cloned())
            .chain(self.trick.cards.iter().cloned())
            .map(Cards::from);
        for cards in hands.chain(played) {
            if seen.contains_any(cards) {
                return false;
            }
            seen |= cards;
            count += cards.len();
        }
        seen == Cards::ALL && count == Cards::ALL.len()
    }

    /// Validates `action` for `seat` and returns the resulting state.
    pub fn apply<S: Shuffle>(
        &self,
        seat: Seat,
        action: &Move,
        shuffle: &mut S,
    ) -> Result<(GameState, Transition), RulesError> {
        if let Some(outcome) = self.phase.outcome() {
            return Err(RulesError::MissionComplete(outcome));
        }
        if seat.idx() >= self.seats() {
            return Err(RulesError::UnknownSeat(seat));
        }
        let mut next = self.clone();
        let transition = match action {
            Move::SetName { name } => next.set_name(seat, name)?,
            Move::DefineMission { config } => next.define_mission(seat, *config, shuffle)?,
            Move::SelectTask { index } => next.select_task(seat, *index)?,
            Move::InitiateTransmission => next.initiate_transmission(seat)?,
            Move::Pass => next.pass(seat)?,
            Move::Cancel => next.cancel(seat)?,
            Move::PlayCard { card } => next.play_card(seat, *card)?,
        };
        debug_assert!(next.is_consistent());
        Ok((next, transition))
    }

    fn set_name(&mut self, seat: Seat, name: &str) -> Result<Transition, RulesError> {
        if !self.phase.is_joining() {
            return Err(RulesError::IllegalAction("set name", self.phase));
        }
        if self.stage(seat) != Stage::Join {
            return Err(RulesError::AlreadyNamed(seat));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(RulesError::EmptyName);
        }
        self.players[seat.idx()].name = Some(name.to_string());
        self.refresh(seat);
        self.stages[seat.idx()] = Stage::Idle;
        if self.team.iter().all(|teammate| teammate.name.is_some()) {
            self.enter(Phase::DefineMission);
            return Ok(Transition {
                phase: Some(Phase::DefineMission),
                stage: Some(Stage::DefineMission),
                ..Transition::default()
            });
        }
        Ok(Transition {
            stage: Some(Stage::Idle),
            ..Transition::default()
        })
    }

    fn define_mission<S: Shuffle>(
        &mut self,
        seat: Seat,
        config: MissionConfig,
        shuffle: &mut S,
    ) -> Result<Transition, RulesError> {
        if !self.phase.is_defining() {
            return Err(RulesError::IllegalAction("define mission", self.phase));
        }
        self.expect_stage(seat, "define mission", Stage::DefineMission)?;
        if config.task_count == 0 || config.task_count > Cards::COLORED.len() {
            return Err(RulesError::IllegalTaskCount(config.task_count));
        }
        let cards = shuffled(shuffle, Cards::COLORED.into_iter().collect())?;
        let mut tokens = config.tokens.into_iter();
        self.tasks = cards
            .into_iter()
            .take(config.task_count)
            .map(|card| Task {
                card,
                token: tokens.next(),
            })
            .collect();
        debug!("define_mission: seat={}, tasks={:?}", seat, self.tasks);
        self.enter(Phase::SelectTasks);
        Ok(Transition {
            phase: Some(Phase::SelectTasks),
            stage: Some(Stage::Idle),
            ..Transition::default()
        })
    }

    fn select_task(&mut self, seat: Seat, index: usize) -> Result<Transition, RulesError> {
        if !self.phase.is_selecting() {
            return Err(RulesError::IllegalAction("select task", self.phase));
        }
        self.expect_turn(seat, "task selection")?;
        if index >= self.tasks.len() {
            return Err(RulesError::UnknownTask(index));
        }
        let task = self.tasks.remove(index);
        self.update_team(seat, |teammate| teammate.assign(task));
        self.next_actor = Some(seat.next(self.seats()));
        let mut transition = Transition {
            end_turn: true,
            ..Transition::default()
        };
        if self.tasks.is_empty() {
            self.enter(Phase::Play);
            transition.phase = Some(Phase::Play);
            transition.stage = Some(self.stage(seat));
        }
        Ok(transition)
    }

    fn initiate_transmission(&mut self, seat: Seat) -> Result<Transition, RulesError> {
        if !self.phase.is_playing() {
            return Err(RulesError::IllegalAction("transmit", self.phase));
        }
        self.expect_stage(seat, "initiate transmission", Stage::Wait)?;
        self.stages[seat.idx()] = Stage::Transmit;
        Ok(Transition {
            stage: Some(Stage::Transmit),
            ..Transition::default()
        })
    }

    fn pass(&mut self, seat: Seat) -> Result<Transition, RulesError> {
        if !self.phase.is_playing() {
            return Err(RulesError::IllegalAction("pass", self.phase));
        }
        self.expect_stage(seat, "pass", Stage::Wait)?;
        self.players[seat.idx()].radio_silence = true;
        self.refresh(seat);
        self.stages[seat.idx()] = Stage::Play;
        Ok(Transition {
            stage: Some(Stage::Play),
            ..Transition::default()
        })
    }

    fn cancel(&mut self, seat: Seat) -> Result<Transition, RulesError> {
        if !self.phase.is_playing() {
            return Err(RulesError::IllegalAction("cancel", self.phase));
        }
        self.expect_stage(seat, "cancel", Stage::Transmit)?;
        self.stages[seat.idx()] = Stage::Wait;
        Ok(Transition {
            stage: Some(Stage::Wait),
            ..Transition::default()
        })
    }

    fn play_card(&mut self, seat: Seat, card: Card) -> Result<Transition, RulesError> {
        if !self.phase.is_playing() {
            return Err(RulesError::IllegalAction("play card", self.phase));
        }
        match self.stage(seat) {
            Stage::Transmit => self.transmit(seat, card),
            Stage::Play => self.play(seat, card),
            stage => Err(RulesError::WrongStage("play card", stage)),
        }
    }

    fn transmit(&mut self, seat: Seat, card: Card) -> Result<Transition, RulesError> {
        let hand = self.players[seat.idx()].hand;
        if !hand.contains(card) {
            return Err(RulesError::NotYourCard(card));
        }
        if card.is_trump() {
            return Err(RulesError::CannotSignalRocket(card));
        }
        let comms_state = classify_signal(hand, card).ok_or(RulesError::NotHighOrLow(card))?;
        let player = &mut self.players[seat.idx()];
        player.comms_state = comms_state;
        player.comms_card = Some(card);
        self.refresh(seat);
        self.stages[seat.idx()] = Stage::Play;
        debug!("transmit: seat={}, card={}, state={:?}", seat, card, comms_state);
        Ok(Transition {
            stage: Some(Stage::Play),
            ..Transition::default()
        })
    }

    fn play(&mut self, seat: Seat, card: Card) -> Result<Transition, RulesError> {
        self.expect_turn(seat, "play")?;
        let hand = self.players[seat.idx()].hand;
        if !hand.contains(card) {
            return Err(RulesError::NotYourCard(card));
        }
        match self.trick.suit() {
            Some(suit) if !is_valid_play(hand, &self.trick, card) => {
                return Err(RulesError::MustFollowSuit(suit));
            }
            _ => {}
        }
        let player = &mut self.players[seat.idx()];
        player.hand -= card;
        if player.comms_card == Some(card) && player.comms_state.is_in_play() {
            player.comms_state = CommsState::Spent;
        }
        self.refresh(seat);
        self.trick.push(card);
        let mut transition = Transition {
            end_turn: true,
            ..Transition::default()
        };
        if self.trick.len() == self.seats() {
            transition.terminal = self.resolve_trick();
            transition.phase = transition.terminal.map(Phase::Complete);
        } else {
            self.next_actor = Some(self.trick.next_player(self.seats()));
        }
        Ok(transition)
    }

    fn resolve_trick(&mut self) -> Option<Outcome> {
        let seats = self.seats();
        let winner = self.trick.winner(seats)?;
        let cards = self.trick.cards.clone();
        let mut failed = false;
        for &card in &cards {
            let owner = Seat::all(seats).find(|seat| self.team[seat.idx()].outstanding(card));
            match owner {
                Some(owner) if owner == winner => {
                    self.update_team(winner, |teammate| teammate.complete(card));
                }
                Some(owner) => {
                    debug!(
                        "resolve_trick: task {} of seat {} taken by seat {}",
                        card, owner, winner
                    );
                    failed = true;
                    break;
                }
                None => {}
            }
        }
        let resolved = ResolvedTrick {
            leader: self.trick.leader,
            winner,
            cards,
        };
        debug!("resolve_trick: {:?}", resolved);
        self.last_trick = Some(resolved.clone());
        self.secret.tricks.push(resolved);
        self.trick = Trick::new(winner);

        let outcome = if failed {
            Some(Outcome::Failure)
        } else if self.team.iter().all(Teammate::all_complete) {
            Some(Outcome::Success)
        } else if self.players.iter().any(|player| player.hand.is_empty()) {
            // no full trick can be played with an empty hand at the table
            Some(Outcome::Failure)
        } else {
            None
        };
        match outcome {
            Some(outcome) => self.enter(Phase::Complete(outcome)),
            None => {
                self.next_actor = Some(winner);
                self.begin_trick();
            }
        }
        outcome
    }

    fn enter(&mut self, phase: Phase) {
        debug!("enter: phase={:?}", phase);
        self.phase = phase;
        match phase {
            Phase::Join => self.set_stages(Stage::Join),
            Phase::DefineMission => self.set_stages(Stage::DefineMission),
            Phase::SelectTasks => {
                self.set_stages(Stage::Idle);
                self.next_actor = Some(self.trick.leader);
            }
            Phase::Play => {
                self.next_actor = Some(self.trick.leader);
                self.begin_trick();
            }
            Phase::Complete(_) => {
                self.set_stages(Stage::Idle);
                self.next_actor = None;
            }
        }
    }

    /// Opens a signaling window for every seat that can still transmit.
    fn begin_trick(&mut self) {
        for (stage, player) in self.stages.iter_mut().zip(&self.players) {
            *stage = if player.can_transmit() {
                Stage::Wait
            } else {
                Stage::Play
            };
        }
    }

    fn set_stages(&mut self, stage: Stage) {
        for s in &mut self.stages {
            *s = stage;
        }
    }

    fn expect_stage(
        &self,
        seat: Seat,
        action: &'static str,
        expected: Stage,
    ) -> Result<(), RulesError> {
        match self.stage(seat) {
            stage if stage == expected => Ok(()),
            stage => Err(RulesError::WrongStage(action, stage)),
        }
    }

    fn expect_turn(&self, seat: Seat, action: &'static str) -> Result<(), RulesError> {
        match self.next_actor {
            Some(actor) if actor == seat => Ok(()),
            Some(actor) => Err(RulesError::NotYourTurn(actor, action)),
            None => Err(RulesError::IllegalAction(action, self.phase)),
        }
    }

    fn refresh(&mut self, seat: Seat) {
        self.update_team(seat, |teammate| teammate);
    }

    /// Edits the task ledger of `seat` and re-derives its projection.
    fn update_team<F>(&mut self, seat: Seat, f: F)
    where
        F: FnOnce(Teammate) -> Teammate,
    {
        let idx = seat.idx();
        let updated = f(self.team[idx].clone());
        self.team[idx] = Teammate::project(&self.players[idx], Some(&updated));
    }
}

/// Asks `shuffle` for a permutation of `cards`, rejecting anything else.
fn shuffled<S: Shuffle>(shuffle: &mut S, cards: Vec<Card>) -> Result<Vec<Card>, RulesError> {
    let expected = cards.iter().cloned().collect::<Cards>();
    let permutation = shuffle.shuffle(cards);
    if permutation.len() != expected.len()
        || permutation.iter().cloned().collect::<Cards>() != expected
    {
        return Err(RulesError::BadShuffle);
    }
    Ok(permutation)
}
