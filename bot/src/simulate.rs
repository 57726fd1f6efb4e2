use crate::{Bot, SimulationConfig};
use log::{debug, info};
use ninth_planet_api::{Mission, Outcome, Phase, RulesError, Seat, Seed};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Rules(#[from] RulesError),
    #[error("no bot can move in phase {0:?}")]
    Stalled(Phase),
}

/// Plays one mission to completion with a bot in every seat.
pub fn run_mission(config: &SimulationConfig, seed: Seed) -> Result<Outcome, SimulationError> {
    let mut mission = Mission::<()>::new(config.seats, seed)?;
    let mut bots = Seat::all(config.seats)
        .map(|seat| Bot::new(config.strategy, seat.idx() as u64))
        .collect::<Vec<_>>();
    loop {
        let state = mission.state();
        if let Some(outcome) = state.phase().outcome() {
            info!(
                "run_mission: mission_id={}, outcome={}, tricks={}",
                mission.id,
                outcome,
                state.tricks().len()
            );
            return Ok(outcome);
        }
        let mut next = None;
        for seat in state.awaiting() {
            let view = state.view(seat)?;
            if let Some(action) = bots[seat.idx()].next_move(&view, config.mission()) {
                next = Some((seat, action));
                break;
            }
        }
        let (seat, action) = next.ok_or_else(|| SimulationError::Stalled(state.phase()))?;
        debug!("run_mission: seat={}, move={:?}", seat, action);
        mission.apply(seat, action, |_, _, _| {})?;
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Tally {
    pub successes: usize,
    pub failures: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Success => self.successes += 1,
            Outcome::Failure => self.failures += 1,
        }
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.successes + self.failures;
        if total == 0 {
            0.0
        } else {
            self.successes as f64 / total as f64
        }
    }
}

/// Runs every mission `config` asks for.
pub fn run_all(config: &SimulationConfig) -> Result<Tally, SimulationError> {
    let mut tally = Tally::default();
    for i in 0..config.missions {
        tally.record(run_mission(config, config.seed(i))?);
    }
    Ok(tally)
}
