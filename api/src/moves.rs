use crate::{Card, Outcome, Phase, Stage, Tokens};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MissionConfig {
    pub task_count: usize,
    pub tokens: Tokens,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Move {
    SetName { name: String },
    DefineMission { config: MissionConfig },
    SelectTask { index: usize },
    InitiateTransmission,
    Pass,
    Cancel,
    PlayCard { card: Card },
}

impl Move {
    pub fn name(&self) -> &'static str {
        match self {
            Move::SetName { .. } => "set name",
            Move::DefineMission { .. } => "define mission",
            Move::SelectTask { .. } => "select task",
            Move::InitiateTransmission => "initiate transmission",
            Move::Pass => "pass",
            Move::Cancel => "cancel",
            Move::PlayCard { .. } => "play card",
        }
    }
}

/// What an accepted move did beyond producing the next state, for the host
/// driving the mission.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// The phase that was entered, if the move ended a phase.
    pub phase: Option<Phase>,
    /// The acting seat's stage after the move, if it changed.
    pub stage: Option<Stage>,
    /// Whether the turn passed to another seat.
    pub end_turn: bool,
    pub terminal: Option<Outcome>,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Token;

    #[test]
    fn test_json() {
        let play = Move::PlayCard {
            card: "3P".parse().unwrap(),
        };
        assert_eq!(
            serde_json::to_string(&play).unwrap(),
            r#"{"type":"play_card","card":"3P"}"#
        );
        let define: Move = serde_json::from_str(
            r#"{"type":"define_mission","config":{"task_count":2,"tokens":["last","first"]}}"#,
        )
        .unwrap();
        assert_eq!(
            define,
            Move::DefineMission {
                config: MissionConfig {
                    task_count: 2,
                    tokens: Tokens::from(Token::First) | Token::Last,
                }
            }
        );
        let pass: Move = serde_json::from_str(r#"{"type":"pass"}"#).unwrap();
        assert_eq!(pass, Move::Pass);
    }
}
