use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fmt::{Display, Formatter},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failure,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Success => "success",
            Outcome::Failure => "failed",
        })
    }
}

/// Mission lifecycle. Each phase is entered once, in declaration order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Join,
    DefineMission,
    SelectTasks,
    Play,
    Complete(Outcome),
}

impl Phase {
    pub fn is_joining(self) -> bool {
        self == Phase::Join
    }

    pub fn is_defining(self) -> bool {
        self == Phase::DefineMission
    }

    pub fn is_selecting(self) -> bool {
        self == Phase::SelectTasks
    }

    pub fn is_playing(self) -> bool {
        self == Phase::Play
    }

    pub fn is_complete(self) -> bool {
        self.outcome().is_some()
    }

    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Phase::Complete(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// What a seat may currently do.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Idle,
    Join,
    DefineMission,
    Wait,
    Transmit,
    Play,
}

impl Stage {
    /// Whether the seat still has to pass or transmit before playing.
    pub fn is_signaling(self) -> bool {
        match self {
            Stage::Wait | Stage::Transmit => true,
            _ => false,
        }
    }
}
