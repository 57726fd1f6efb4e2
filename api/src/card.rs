use crate::{CardParseError, Cards, Suit};
use serde::{Deserialize, Serialize};
use std::{
    convert::TryFrom,
    fmt,
    fmt::{Debug, Display, Write},
    ops::BitOr,
    str::FromStr,
};

/// A single card, encoded as `10 * suit + value`.
///
/// The encoding orders cards by suit and then by value, which is the order a
/// hand is shown in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct Card(u8);

impl Card {
    /// The card whose holder captains the mission.
    pub const ROCKET_FOUR: Card = Card(4);

    pub fn new(suit: Suit, value: u8) -> Self {
        debug_assert!(
            value >= 1 && value <= suit.max_value(),
            "suit={}, value={}",
            suit,
            value
        );
        Card(10 * suit as u8 + value)
    }

    pub fn suit(self) -> Suit {
        Suit::from(self.0 / 10)
    }

    pub fn value(self) -> u8 {
        self.0 % 10
    }

    pub fn idx(self) -> usize {
        self.0 as usize
    }

    pub fn is_trump(self) -> bool {
        self.suit().is_trump()
    }
}

impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 50 && n % 10 != 0, "n={}", n);
        Card(n)
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value())?;
        f.write_char(self.suit().char())
    }
}

impl Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let value = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(|| CardParseError(s.to_string()))? as u8;
        let suit = chars
            .next()
            .and_then(|c| Suit::try_from(c).ok())
            .ok_or_else(|| CardParseError(s.to_string()))?;
        if chars.next().is_some() || value == 0 || value > suit.max_value() {
            return Err(CardParseError(s.to_string()));
        }
        Ok(Card::new(suit, value))
    }
}

impl TryFrom<String> for Card {
    type Error = CardParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Card> for String {
    fn from(c: Card) -> Self {
        c.to_string()
    }
}

impl BitOr<Card> for Card {
    type Output = Cards;

    fn bitor(self, rhs: Card) -> Self::Output {
        Cards::from(self) | rhs
    }
}
