use crate::Algorithm;
use ninth_planet_api::{signal_cards, Card, SeatView, Stage};
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SIGNAL_PROBABILITY: f64 = 0.25;

pub struct RandomBot {
    rng: ChaCha8Rng,
    pending: Option<Card>,
}

impl RandomBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            pending: None,
        }
    }
}

impl Algorithm for RandomBot {
    fn select_task(&mut self, view: &SeatView) -> usize {
        self.rng.gen_range(0..view.tasks.len().max(1))
    }

    fn signal(&mut self, view: &SeatView) -> Option<Card> {
        if view.stage() == Stage::Transmit {
            return self.pending.take();
        }
        let cards = signal_cards(view.player.hand).into_iter().collect::<Vec<_>>();
        self.pending = if self.rng.gen_bool(SIGNAL_PROBABILITY) {
            cards.choose(&mut self.rng).cloned()
        } else {
            None
        };
        self.pending
    }

    fn play(&mut self, view: &SeatView) -> Option<Card> {
        let cards = view.legal_plays().into_iter().collect::<Vec<_>>();
        cards.choose(&mut self.rng).cloned()
    }
}
