use crate::{Card, Outcome, Phase, Seat, Stage, Suit};
use thiserror::Error;

/// Reasons a move is rejected. A rejected move never changes the mission.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RulesError {
    #[error("seat {0} has already chosen a name")]
    AlreadyNamed(Seat),
    #[error("the shuffle service did not return a permutation of its input")]
    BadShuffle,
    #[error("rockets cannot be transmitted, {0} is a rocket")]
    CannotSignalRocket(Card),
    #[error("a name must not be empty")]
    EmptyName,
    #[error("cannot {0}, current phase is {1:?}")]
    IllegalAction(&'static str, Phase),
    #[error("missions need between 3 and 5 seats, not {0}")]
    IllegalSeatCount(usize),
    #[error("a mission needs between 1 and 36 tasks, not {0}")]
    IllegalTaskCount(usize),
    #[error("the mission is already over: {0}")]
    MissionComplete(Outcome),
    #[error("suit {0} must be followed")]
    MustFollowSuit(Suit),
    #[error("{0} is neither the highest nor the lowest card of its suit in your hand")]
    NotHighOrLow(Card),
    #[error("your hand does not contain {0}")]
    NotYourCard(Card),
    #[error("seat {0} makes the next {1}")]
    NotYourTurn(Seat, &'static str),
    #[error("a redacted seed cannot be used to shuffle")]
    RedactedSeed,
    #[error("{0} is not a seat at this table")]
    UnknownSeat(Seat),
    #[error("there is no pending task at index {0}")]
    UnknownTask(usize),
    #[error("cannot {0} while in the {1:?} stage")]
    WrongStage(&'static str, Stage),
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("cannot parse cards from {0:?}")]
pub struct CardParseError(pub String);
