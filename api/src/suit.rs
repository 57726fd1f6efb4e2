use crate::Cards;
use serde::{Deserialize, Serialize};
use std::{
    convert::TryFrom,
    fmt,
    fmt::{Debug, Display, Write},
    mem,
};

const SUITS: [char; 5] = ['R', 'P', 'B', 'G', 'Y'];

#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    Rocket,
    Pink,
    Blue,
    Green,
    Yellow,
}

impl Suit {
    pub const VALUES: [Suit; 5] = [
        Suit::Rocket,
        Suit::Pink,
        Suit::Blue,
        Suit::Green,
        Suit::Yellow,
    ];
    pub const COLORS: [Suit; 4] = [Suit::Pink, Suit::Blue, Suit::Green, Suit::Yellow];

    pub fn idx(self) -> usize {
        self as usize
    }

    pub fn char(self) -> char {
        SUITS[self.idx()]
    }

    /// Rockets are the trump suit.
    pub fn is_trump(self) -> bool {
        self == Suit::Rocket
    }

    pub fn max_value(self) -> u8 {
        if self.is_trump() {
            4
        } else {
            9
        }
    }

    pub fn cards(self) -> Cards {
        let values = (2u64 << self.max_value()) - 2;
        Cards {
            bits: values << (10 * self as u64),
        }
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Self {
        assert!(n < 5, "n={}", n);
        unsafe { mem::transmute(n) }
    }
}

impl TryFrom<char> for Suit {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        SUITS
            .iter()
            .position(|&s| s == c)
            .map(|n| Self::from(n as u8))
            .ok_or(c)
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.char())
    }
}

impl Debug for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cards() {
        assert_eq!(Suit::Rocket.cards().len(), 4);
        for &suit in &Suit::COLORS {
            assert_eq!(suit.cards().len(), 9);
        }
        assert_eq!(Suit::Rocket.cards(), "1234R".parse().unwrap());
        assert_eq!(Suit::Green.cards(), "123456789G".parse().unwrap());
    }

    #[test]
    fn test_char() {
        for &suit in &Suit::VALUES {
            assert_eq!(Suit::try_from(suit.char()), Ok(suit));
        }
        assert_eq!(Suit::try_from('S'), Err('S'));
    }
}
