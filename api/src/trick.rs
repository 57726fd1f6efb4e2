use crate::{Card, Cards, Seat, Suit};
use serde::{Deserialize, Serialize};

/// The trick in progress, cards in play order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Trick {
    pub leader: Seat,
    pub cards: Vec<Card>,
}

impl Trick {
    pub fn new(leader: Seat) -> Self {
        Self {
            leader,
            cards: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// The led suit, if any card has been played.
    pub fn suit(&self) -> Option<Suit> {
        self.cards.first().map(|card| card.suit())
    }

    pub fn cards(&self) -> Cards {
        self.cards.iter().cloned().collect()
    }

    /// The seat that plays the next card.
    pub fn next_player(&self, seats: usize) -> Seat {
        self.leader.offset(self.len(), seats)
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The highest rocket if any was played, otherwise the highest card of the
    /// led suit.
    pub fn winning_card(&self) -> Option<Card> {
        let suit = self.suit()?;
        let cards = self.cards();
        let rockets = cards & Cards::ROCKETS;
        if rockets.is_empty() {
            Some(cards.of_suit(suit).max())
        } else {
            Some(rockets.max())
        }
    }

    pub fn winner(&self, seats: usize) -> Option<Seat> {
        self.player_of(self.winning_card()?, seats)
    }

    /// The seat that played `card` into this trick.
    pub fn player_of(&self, card: Card, seats: usize) -> Option<Seat> {
        let position = self.cards.iter().position(|&c| c == card)?;
        Some(self.leader.offset(position, seats))
    }
}

/// A completed trick. The full history is kept out of every view.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTrick {
    pub leader: Seat,
    pub winner: Seat,
    pub cards: Vec<Card>,
}

/// Whether `card` may be played from `hand` into `trick`: anything may lead,
/// otherwise the led suit must be followed when possible.
pub fn is_valid_play(hand: Cards, trick: &Trick, card: Card) -> bool {
    match trick.suit() {
        None => true,
        Some(suit) => card.suit() == suit || !hand.contains_any(suit.cards()),
    }
}

pub fn legal_plays(hand: Cards, trick: &Trick) -> Cards {
    match trick.suit() {
        Some(suit) if hand.contains_any(suit.cards()) => hand.of_suit(suit),
        _ => hand,
    }
}
