use crate::{GameState, Move, RulesError, Seat, SeatView, Seed, SeededShuffle, Transition};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    str::FromStr,
};
use uuid::Uuid;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MissionId(Uuid);

impl MissionId {
    pub fn new() -> MissionId {
        MissionId(Uuid::new_v4())
    }
}

impl Default for MissionId {
    fn default() -> Self {
        MissionId::new()
    }
}

impl Display for MissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for MissionId {
    type Err = <Uuid as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MissionId(s.parse()?))
    }
}

/// Hosts one mission: owns the authoritative state and the shuffle, records
/// every accepted move, and pushes fresh views to subscribers.
#[derive(Clone, Debug)]
pub struct Mission<S> {
    pub id: MissionId,
    pub moves: Vec<(Seat, Move)>,
    pub subscribers: Vec<(Seat, S)>,
    seed: Seed,
    shuffle: SeededShuffle,
    state: GameState,
}

impl<S> Mission<S> {
    pub fn new(seats: usize, seed: Seed) -> Result<Self, RulesError> {
        let mut shuffle = SeededShuffle::new(&seed)?;
        let state = GameState::new(seats, &mut shuffle)?;
        let id = MissionId::new();
        info!(
            "new: mission_id={}, seats={}, captain={}",
            id,
            seats,
            state.captain()
        );
        Ok(Self {
            id,
            moves: Vec::new(),
            subscribers: Vec::new(),
            seed,
            shuffle,
            state,
        })
    }

    /// Rebuilds a mission by applying `moves` in order to a fresh deal.
    pub fn replay<'a, I>(seats: usize, seed: Seed, moves: I) -> Result<Self, RulesError>
    where
        I: IntoIterator<Item = &'a (Seat, Move)>,
    {
        let mut mission = Mission::new(seats, seed)?;
        for (seat, action) in moves {
            mission.apply(*seat, action.clone(), |_, _, _| {})?;
        }
        Ok(mission)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The seed, hidden until the mission is complete unless it was chosen.
    pub fn seed(&self) -> Seed {
        if self.state.phase().is_complete() {
            self.seed.clone()
        } else {
            self.seed.redact()
        }
    }

    pub fn subscribe(&mut self, seat: Seat, subscriber: S) -> Result<SeatView, RulesError> {
        let view = self.state.view(seat)?;
        self.subscribers.push((seat, subscriber));
        Ok(view)
    }

    /// Applies `action` for `seat`. On success the state advances, the move
    /// is recorded, and every subscriber receives its new view through
    /// `broadcast`. On failure nothing changes.
    pub fn apply<F>(
        &mut self,
        seat: Seat,
        action: Move,
        mut broadcast: F,
    ) -> Result<Transition, RulesError>
    where
        F: FnMut(&mut S, &SeatView, &Transition),
    {
        let (state, transition) = match self.state.apply(seat, &action, &mut self.shuffle) {
            Ok(next) => next,
            Err(e) => {
                debug!(
                    "apply: mission_id={}, seat={}, move={}, rejected={}",
                    self.id,
                    seat,
                    action.name(),
                    e
                );
                return Err(e);
            }
        };
        info!(
            "apply: mission_id={}, seat={}, move={}, transition={:?}",
            self.id,
            seat,
            action.name(),
            transition
        );
        if let Some(outcome) = transition.terminal {
            info!("apply: mission_id={}, outcome={}", self.id, outcome);
        }
        self.state = state;
        self.moves.push((seat, action));
        for (seat, subscriber) in &mut self.subscribers {
            if let Ok(view) = self.state.view(*seat) {
                broadcast(subscriber, &view, &transition);
            }
        }
        Ok(transition)
    }
}
