use crate::{
    legal_plays, signal_cards, Cards, Phase, PlayerState, ResolvedTrick, Seat, Stage, Task,
    Teammate, Trick,
};
use serde::{Deserialize, Serialize};

/// Everything one seat is allowed to know. Other seats' hands and the trick
/// history never appear here.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatView {
    pub seat: Seat,
    pub captain: Seat,
    pub phase: Phase,
    pub stages: Vec<Stage>,
    pub next_actor: Option<Seat>,
    pub player: PlayerState,
    pub team: Vec<Teammate>,
    pub tasks: Vec<Task>,
    pub trick: Trick,
    pub last_trick: Option<ResolvedTrick>,
}

impl SeatView {
    pub fn seats(&self) -> usize {
        self.team.len()
    }

    pub fn stage(&self) -> Stage {
        self.stages[self.seat.idx()]
    }

    pub fn is_my_turn(&self) -> bool {
        self.next_actor == Some(self.seat)
    }

    /// Cards this seat may play into the current trick, or nothing when it
    /// may not play right now.
    pub fn legal_plays(&self) -> Cards {
        if self.phase.is_playing() && self.stage() == Stage::Play && self.is_my_turn() {
            legal_plays(self.player.hand, &self.trick)
        } else {
            Cards::NONE
        }
    }

    /// Cards this seat may transmit while in the transmit stage.
    pub fn signals(&self) -> Cards {
        if self.stage() == Stage::Transmit {
            signal_cards(self.player.hand)
        } else {
            Cards::NONE
        }
    }

    /// Seats whose outstanding tasks include any of `cards`.
    pub fn task_owners(&self, cards: Cards) -> Vec<Seat> {
        Seat::all(self.seats())
            .filter(|seat| {
                self.team[seat.idx()]
                    .tasks
                    .iter()
                    .any(|task| !task.complete && cards.contains(task.card))
            })
            .collect()
    }
}
