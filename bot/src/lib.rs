mod config;
mod duck;
mod random;
mod simulate;

pub use config::*;
pub use duck::*;
pub use random::*;
pub use simulate::*;

use ninth_planet_api::{Card, MissionConfig, Move, SeatView, Stage};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotStrategy {
    Duck,
    Random,
}

/// Decisions a bot makes from its own seat's view.
pub trait Algorithm {
    fn select_task(&mut self, view: &SeatView) -> usize;

    /// The card to transmit this trick, or `None` to pass.
    fn signal(&mut self, view: &SeatView) -> Option<Card>;

    /// The card to play into the current trick, `None` only if no card is
    /// legal.
    fn play(&mut self, view: &SeatView) -> Option<Card>;
}

pub enum Bot {
    Duck(DuckBot),
    Random(RandomBot),
}

impl Bot {
    pub fn new(strategy: BotStrategy, seed: u64) -> Self {
        match strategy {
            BotStrategy::Duck => Bot::Duck(DuckBot::new()),
            BotStrategy::Random => Bot::Random(RandomBot::new(seed)),
        }
    }

    fn algorithm(&mut self) -> &mut dyn Algorithm {
        match self {
            Bot::Duck(bot) => bot,
            Bot::Random(bot) => bot,
        }
    }

    /// The move this bot makes next, or `None` if it has nothing to do.
    pub fn next_move(&mut self, view: &SeatView, mission: MissionConfig) -> Option<Move> {
        let phase = view.phase;
        match view.stage() {
            Stage::Join => Some(Move::SetName {
                name: format!("bot {}", view.seat),
            }),
            Stage::DefineMission if view.seat == view.captain => {
                Some(Move::DefineMission { config: mission })
            }
            Stage::Idle if phase.is_selecting() && view.is_my_turn() => {
                let index = self.algorithm().select_task(view);
                Some(Move::SelectTask { index })
            }
            Stage::Wait => Some(match self.algorithm().signal(view) {
                Some(_) => Move::InitiateTransmission,
                None => Move::Pass,
            }),
            Stage::Transmit => Some(match self.algorithm().signal(view) {
                Some(card) => Move::PlayCard { card },
                None => Move::Cancel,
            }),
            Stage::Play if view.is_my_turn() => self
                .algorithm()
                .play(view)
                .map(|card| Move::PlayCard { card }),
            _ => None,
        }
    }
}
