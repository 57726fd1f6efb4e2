use crate::{Card, CommsState, PlayerState, Task, TeammateTask};
use serde::{Deserialize, Serialize};

/// What every seat may know about a seat: everything except its hand.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Teammate {
    pub comms_state: CommsState,
    pub comms_card: Option<Card>,
    pub hand_size: usize,
    pub name: Option<String>,
    pub tasks: Vec<TeammateTask>,
}

impl Teammate {
    /// Derives the public projection of `player`.
    ///
    /// Tasks are not part of the private state, so they are carried over from
    /// `existing`.
    pub fn project(player: &PlayerState, existing: Option<&Teammate>) -> Self {
        Self {
            comms_state: player.comms_state,
            comms_card: player.comms_card,
            hand_size: player.hand.len(),
            name: player.name.clone(),
            tasks: existing.map(|t| t.tasks.clone()).unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn assign(mut self, task: Task) -> Self {
        self.tasks.push(task.into());
        self
    }

    #[must_use]
    pub fn complete(mut self, card: Card) -> Self {
        for task in &mut self.tasks {
            if task.card == card {
                task.complete = true;
            }
        }
        self
    }

    pub fn outstanding(&self, card: Card) -> bool {
        self.tasks.iter().any(|t| !t.complete && t.card == card)
    }

    pub fn all_complete(&self) -> bool {
        self.tasks.iter().all(|t| t.complete)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Token;

    fn task(card: &str) -> Task {
        Task {
            card: card.parse().unwrap(),
            token: Some(Token::First),
        }
    }

    #[test]
    fn test_project_hides_hand() {
        let mut player = PlayerState::new("14R 27P".parse().unwrap());
        player.name = Some("kim".to_string());
        let teammate = Teammate::project(&player, None);
        assert_eq!(teammate.hand_size, 4);
        assert_eq!(teammate.name.as_deref(), Some("kim"));
        assert_eq!(teammate.comms_state, CommsState::Unused);
        assert!(teammate.tasks.is_empty());
    }

    #[test]
    fn test_project_keeps_tasks() {
        let mut player = PlayerState::new("14R 27P".parse().unwrap());
        let teammate = Teammate::project(&player, None).assign(task("5B"));
        player.hand -= "1R".parse::<Card>().unwrap();
        player.comms_state = CommsState::InPlayHigh;
        player.comms_card = Some("7P".parse().unwrap());
        let projected = Teammate::project(&player, Some(&teammate));
        assert_eq!(projected.hand_size, 3);
        assert_eq!(projected.comms_state, CommsState::InPlayHigh);
        assert_eq!(projected.tasks, teammate.tasks);
    }

    #[test]
    fn test_complete() {
        let player = PlayerState::new(crate::Cards::NONE);
        let teammate = Teammate::project(&player, None)
            .assign(task("5B"))
            .assign(task("6G"));
        assert!(teammate.outstanding("5B".parse().unwrap()));
        let teammate = teammate.complete("5B".parse().unwrap());
        assert!(!teammate.outstanding("5B".parse().unwrap()));
        assert!(!teammate.all_complete());
        assert!(teammate.complete("6G".parse().unwrap()).all_complete());
    }
}
