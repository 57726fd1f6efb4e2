use crate::{Card, CardParseError, Suit};
use serde::{
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::{
    convert::TryFrom,
    fmt,
    fmt::{Debug, Display, Write},
    iter::FromIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign},
    str::FromStr,
};

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Cards {
    pub bits: u64,
}

impl Serialize for Cards {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for card in *self {
            seq.serialize_element(&card)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Cards {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(CardsVisitor(Cards::NONE))
    }
}

struct CardsVisitor(Cards);

impl<'de> Visitor<'de> for CardsVisitor {
    type Value = Cards;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a sequence of cards")
    }

    fn visit_seq<A>(mut self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while let Some(card) = seq.next_element::<Card>()? {
            self.0 |= card;
        }
        Ok(self.0)
    }
}

impl Cards {
    pub const NONE: Cards = Cards { bits: 0 };
    pub const ROCKETS: Cards = Cards { bits: 0x1e };
    pub const PINK: Cards = Cards { bits: 0x3fe << 10 };
    pub const BLUE: Cards = Cards { bits: 0x3fe << 20 };
    pub const GREEN: Cards = Cards { bits: 0x3fe << 30 };
    pub const YELLOW: Cards = Cards { bits: 0x3fe << 40 };
    pub const COLORED: Cards = Cards {
        bits: Self::PINK.bits | Self::BLUE.bits | Self::GREEN.bits | Self::YELLOW.bits,
    };
    pub const ALL: Cards = Cards {
        bits: Self::ROCKETS.bits | Self::COLORED.bits,
    };

    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn max(self) -> Card {
        debug_assert!(!self.is_empty());
        Card::from(63 - self.bits.leading_zeros() as u8)
    }

    pub fn min(self) -> Card {
        debug_assert!(!self.is_empty());
        Card::from(self.bits.trailing_zeros() as u8)
    }

    pub fn contains(self, other: Card) -> bool {
        self == self | other
    }

    pub fn contains_any(self, other: Cards) -> bool {
        self & other != Self::NONE
    }

    pub fn of_suit(self, suit: Suit) -> Cards {
        self & suit.cards()
    }
}

/// The deck in its unshuffled order, rockets first and then suit by suit.
pub fn deck() -> Vec<Card> {
    Cards::ALL.into_iter().collect()
}

impl Display for Cards {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut iter = self.into_iter();
        let card = match iter.next() {
            Some(card) => card,
            None => return Ok(()),
        };
        write!(f, "{}", card.value())?;
        let mut prev_suit = card.suit();
        for card in iter {
            if card.suit() != prev_suit {
                Display::fmt(&prev_suit, f)?;
                f.write_char(' ')?;
            }
            write!(f, "{}", card.value())?;
            prev_suit = card.suit();
        }
        Display::fmt(&prev_suit, f)
    }
}

impl Debug for Cards {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for Cards {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cards = Cards::NONE;
        let mut values = Vec::new();
        for c in s.chars() {
            if c == ' ' {
                continue;
            }
            if let Some(value) = c.to_digit(10) {
                values.push(value as u8);
                continue;
            }
            let suit = Suit::try_from(c).map_err(|_| CardParseError(s.to_string()))?;
            for value in values.drain(..) {
                if value == 0 || value > suit.max_value() {
                    return Err(CardParseError(s.to_string()));
                }
                cards |= Card::new(suit, value);
            }
        }
        if !values.is_empty() {
            return Err(CardParseError(s.to_string()));
        }
        Ok(cards)
    }
}

impl From<Card> for Cards {
    fn from(card: Card) -> Self {
        Cards {
            bits: 1 << card.idx(),
        }
    }
}

impl FromIterator<Card> for Cards {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut cards = Cards::NONE;
        for card in iter {
            cards |= card;
        }
        cards
    }
}

impl IntoIterator for Cards {
    type Item = Card;
    type IntoIter = CardsIter;

    fn into_iter(self) -> Self::IntoIter {
        CardsIter(self)
    }
}

pub struct CardsIter(Cards);

impl Iterator for CardsIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            return None;
        }
        let card = self.0.min();
        self.0 -= card;
        Some(card)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.len();
        (len, Some(len))
    }
}

impl DoubleEndedIterator for CardsIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            return None;
        }
        let card = self.0.max();
        self.0 -= card;
        Some(card)
    }
}

impl ExactSizeIterator for CardsIter {}

impl BitOr<Cards> for Cards {
    type Output = Self;

    fn bitor(self, rhs: Cards) -> Self::Output {
        Cards {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOr<Card> for Cards {
    type Output = Self;

    fn bitor(self, rhs: Card) -> Self::Output {
        self | Cards::from(rhs)
    }
}

impl BitOrAssign<Cards> for Cards {
    fn bitor_assign(&mut self, rhs: Cards) {
        self.bits |= rhs.bits;
    }
}

impl BitOrAssign<Card> for Cards {
    fn bitor_assign(&mut self, rhs: Card) {
        *self |= Cards::from(rhs);
    }
}

impl BitAnd<Cards> for Cards {
    type Output = Self;

    fn bitand(self, rhs: Cards) -> Self::Output {
        Cards {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitAndAssign<Cards> for Cards {
    fn bitand_assign(&mut self, rhs: Cards) {
        self.bits &= rhs.bits;
    }
}

impl Sub<Cards> for Cards {
    type Output = Self;

    fn sub(self, rhs: Cards) -> Self::Output {
        Cards {
            bits: self.bits & !rhs.bits,
        }
    }
}

impl Sub<Card> for Cards {
    type Output = Self;

    fn sub(self, rhs: Card) -> Self::Output {
        self - Cards::from(rhs)
    }
}

impl SubAssign<Cards> for Cards {
    fn sub_assign(&mut self, rhs: Cards) {
        self.bits &= !rhs.bits;
    }
}

impl SubAssign<Card> for Cards {
    fn sub_assign(&mut self, rhs: Card) {
        *self -= Cards::from(rhs);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_deck() {
        let deck = deck();
        assert_eq!(deck.len(), 40);
        assert_eq!(Cards::ALL.len(), 40);
        assert_eq!(deck.iter().cloned().collect::<Cards>(), Cards::ALL);
        assert_eq!(deck[0], "1R".parse().unwrap());
        assert_eq!(deck[39], "9Y".parse().unwrap());
        assert_eq!((Cards::ALL & Cards::ROCKETS).len(), 4);
        assert_eq!(Cards::COLORED.len(), 36);
    }

    #[test]
    fn test_suits_partition_deck() {
        let mut union = Cards::NONE;
        for &suit in &Suit::VALUES {
            assert!(!union.contains_any(suit.cards()));
            union |= suit.cards();
        }
        assert_eq!(union, Cards::ALL);
        assert_eq!(Suit::Pink.cards(), Cards::PINK);
        assert_eq!(Suit::Yellow.cards(), Cards::YELLOW);
    }

    #[test]
    fn test_display() {
        let cards: Cards = "4R 1379P 2B".parse().unwrap();
        assert_eq!(cards.to_string(), "4R 1379P 2B");
        assert_eq!(Cards::NONE.to_string(), "");
    }

    #[test]
    fn test_parse_errors() {
        assert!("5R".parse::<Cards>().is_err());
        assert!("12".parse::<Cards>().is_err());
        assert!("1Q".parse::<Cards>().is_err());
    }

    #[test]
    fn test_min_max() {
        let cards: Cards = "38P 5G".parse().unwrap();
        assert_eq!(cards.min(), "3P".parse().unwrap());
        assert_eq!(cards.max(), "5G".parse().unwrap());
        assert_eq!(cards.of_suit(Suit::Pink).max(), "8P".parse().unwrap());
    }

    #[test]
    fn test_iter_order() {
        let cards: Cards = "9Y 2R 5P".parse().unwrap();
        let forward = cards.into_iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(forward, vec!["2R", "5P", "9Y"]);
        let back = cards.into_iter().rev().next().unwrap();
        assert_eq!(back.to_string(), "9Y");
    }

    #[test]
    fn test_serde() {
        let cards: Cards = "2R 7B".parse().unwrap();
        assert_tokens(
            &cards,
            &[
                Token::Seq { len: Some(2) },
                Token::Str("2R"),
                Token::Str("7B"),
                Token::SeqEnd,
            ],
        );
    }
}
