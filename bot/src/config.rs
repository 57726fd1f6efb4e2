use crate::BotStrategy;
use ninth_planet_api::{MissionConfig, Seed, Token, Tokens};
use serde::Deserialize;
use std::{fs::File, io::BufReader, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read simulation config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed simulation config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub seats: usize,
    pub missions: usize,
    pub task_count: usize,
    pub tokens: Tokens,
    pub strategy: BotStrategy,
    /// Seeds mission `i` with `"{seed}-{i}"`; random seeds when absent.
    pub seed: Option<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seats: 4,
            missions: 100,
            task_count: 3,
            tokens: Tokens::from(Token::First),
            strategy: BotStrategy::Duck,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn mission(&self) -> MissionConfig {
        MissionConfig {
            task_count: self.task_count,
            tokens: self.tokens,
        }
    }

    pub fn seed(&self, mission: usize) -> Seed {
        match &self.seed {
            Some(seed) => Seed::chosen(format!("{}-{}", seed, mission)),
            None => Seed::random(),
        }
    }
}
