use crate::{Card, Token};
use serde::{Deserialize, Serialize};

/// A card that must be won by whichever seat takes the task.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub card: Card,
    pub token: Option<Token>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TeammateTask {
    pub card: Card,
    pub token: Option<Token>,
    pub complete: bool,
}

impl From<Task> for TeammateTask {
    fn from(task: Task) -> Self {
        Self {
            card: task.card,
            token: task.token,
            complete: false,
        }
    }
}
