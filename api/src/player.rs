use crate::{Card, Cards, Suit};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommsState {
    Unused,
    InPlayHigh,
    InPlayLow,
    InPlayOnly,
    Spent,
}

impl CommsState {
    pub fn is_in_play(self) -> bool {
        match self {
            CommsState::InPlayHigh | CommsState::InPlayLow | CommsState::InPlayOnly => true,
            _ => false,
        }
    }
}

/// Private state of one seat. Only the seat itself ever sees its hand.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub hand: Cards,
    pub name: Option<String>,
    pub comms_state: CommsState,
    pub comms_card: Option<Card>,
    pub radio_silence: bool,
}

impl PlayerState {
    pub fn new(hand: Cards) -> Self {
        Self {
            hand,
            name: None,
            comms_state: CommsState::Unused,
            comms_card: None,
            radio_silence: false,
        }
    }

    /// Whether this seat gets a signaling window at the start of a trick.
    pub fn can_transmit(&self) -> bool {
        self.comms_state == CommsState::Unused && !self.radio_silence
    }
}

/// Classifies `card` as a signal from `hand`, or `None` if it may not be
/// transmitted.
pub fn classify_signal(hand: Cards, card: Card) -> Option<CommsState> {
    if card.is_trump() || !hand.contains(card) {
        return None;
    }
    let suit = hand.of_suit(card.suit());
    if suit.len() == 1 {
        Some(CommsState::InPlayOnly)
    } else if suit.min() == card {
        Some(CommsState::InPlayLow)
    } else if suit.max() == card {
        Some(CommsState::InPlayHigh)
    } else {
        None
    }
}

/// Every card in `hand` that may be transmitted.
pub fn signal_cards(hand: Cards) -> Cards {
    let mut cards = Cards::NONE;
    for &suit in &Suit::COLORS {
        let held = hand.of_suit(suit);
        if !held.is_empty() {
            cards |= held.min();
            cards |= held.max();
        }
    }
    cards
}

#[cfg(test)]
mod test {
    use super::*;

    fn c(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn h(s: &str) -> Cards {
        s.parse().unwrap()
    }

    #[test]
    fn test_classify_low_and_high() {
        let hand = h("27P 3B");
        assert_eq!(classify_signal(hand, c("2P")), Some(CommsState::InPlayLow));
        assert_eq!(classify_signal(hand, c("7P")), Some(CommsState::InPlayHigh));
    }

    #[test]
    fn test_classify_not_held() {
        assert_eq!(classify_signal(h("27P"), c("5P")), None);
    }

    #[test]
    fn test_classify_middle() {
        assert_eq!(classify_signal(h("257P"), c("5P")), None);
    }

    #[test]
    fn test_classify_only() {
        assert_eq!(classify_signal(h("27P 5B"), c("5B")), Some(CommsState::InPlayOnly));
        assert_eq!(classify_signal(h("9G"), c("9G")), Some(CommsState::InPlayOnly));
    }

    #[test]
    fn test_classify_rocket() {
        assert_eq!(classify_signal(h("3R 27P"), c("3R")), None);
    }

    #[test]
    fn test_signal_cards() {
        assert_eq!(signal_cards(h("14R 257P 5B")), h("27P 5B"));
        assert_eq!(signal_cards(h("1234R")), Cards::NONE);
    }

    #[test]
    fn test_can_transmit() {
        let mut player = PlayerState::new(h("27P"));
        assert!(player.can_transmit());
        player.radio_silence = true;
        assert!(!player.can_transmit());
        player.radio_silence = false;
        player.comms_state = CommsState::InPlayLow;
        assert!(!player.can_transmit());
    }
}
