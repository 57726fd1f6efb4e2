use crate::RulesError;
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Seed {
    Chosen { value: String },
    Random { value: String },
    Redacted,
}

impl Seed {
    pub fn chosen<S: Into<String>>(value: S) -> Self {
        Seed::Chosen {
            value: value.into(),
        }
    }

    pub fn random() -> Self {
        Seed::Random {
            value: Uuid::new_v4().to_string(),
        }
    }

    pub fn redact(&self) -> Self {
        match self {
            Seed::Random { .. } => Seed::Redacted,
            _ => self.clone(),
        }
    }

    pub fn as_bytes(&self) -> Result<[u8; 32], RulesError> {
        let value = match self {
            Seed::Chosen { value } => value,
            Seed::Random { value } => value,
            Seed::Redacted => return Err(RulesError::RedactedSeed),
        };
        Ok(Sha256::digest(value.as_bytes()).into())
    }
}

/// Source of uniformly random permutations.
///
/// The engine asks for a permutation twice per mission: once to deal and once
/// to draw the mission's task cards. Implementations must return every input
/// element exactly once.
pub trait Shuffle {
    fn shuffle<T>(&mut self, items: Vec<T>) -> Vec<T>;
}

/// Shuffles with a ChaCha stream keyed by a hashed [`Seed`], so a mission can
/// be replayed from its seed.
#[derive(Clone, Debug)]
pub struct SeededShuffle {
    rng: ChaCha20Rng,
}

impl SeededShuffle {
    pub fn new(seed: &Seed) -> Result<Self, RulesError> {
        Ok(Self {
            rng: ChaCha20Rng::from_seed(seed.as_bytes()?),
        })
    }
}

impl Shuffle for SeededShuffle {
    fn shuffle<T>(&mut self, mut items: Vec<T>) -> Vec<T> {
        items.shuffle(&mut self.rng);
        items
    }
}

/// Leaves every sequence in its original order.
#[cfg(test)]
pub(crate) struct Unshuffled;

#[cfg(test)]
impl Shuffle for Unshuffled {
    fn shuffle<T>(&mut self, items: Vec<T>) -> Vec<T> {
        items
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_same_seed_same_permutation() {
        let seed = Seed::chosen("apollo");
        let mut a = SeededShuffle::new(&seed).unwrap();
        let mut b = SeededShuffle::new(&seed).unwrap();
        let items = (0..40).collect::<Vec<_>>();
        assert_eq!(a.shuffle(items.clone()), b.shuffle(items.clone()));
        assert_eq!(a.shuffle(items.clone()), b.shuffle(items));
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut shuffle = SeededShuffle::new(&Seed::random()).unwrap();
        let mut shuffled = shuffle.shuffle((0..40).collect::<Vec<_>>());
        shuffled.sort();
        assert_eq!(shuffled, (0..40).collect::<Vec<_>>());
    }

    #[test]
    fn test_redact() {
        let seed = Seed::random();
        assert_eq!(seed.redact(), Seed::Redacted);
        assert!(Seed::Redacted.as_bytes().is_err());
        let chosen = Seed::chosen("gemini");
        assert_eq!(chosen.redact(), chosen);
    }
}
