use serde::{
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::{
    fmt,
    fmt::{Debug, Display, Formatter},
    iter::FromIterator,
    mem,
    ops::{BitOr, BitOrAssign},
};

/// Marker attached to a task that constrains when it should be completed.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Last,
    Priority1,
    Priority2,
    Priority3,
    Priority4,
}

impl Token {
    /// Every token in mission priority order.
    pub const VALUES: [Token; 10] = [
        Token::First,
        Token::Second,
        Token::Third,
        Token::Fourth,
        Token::Fifth,
        Token::Last,
        Token::Priority1,
        Token::Priority2,
        Token::Priority3,
        Token::Priority4,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }
}

impl From<u8> for Token {
    fn from(n: u8) -> Self {
        assert!(n < 10, "n={}", n);
        unsafe { mem::transmute(n) }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

/// A selection of tokens. Iterates in priority order.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct Tokens {
    bits: u16,
}

impl Tokens {
    pub const NONE: Tokens = Tokens { bits: 0 };
    pub const ALL: Tokens = Tokens { bits: 0x3ff };

    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }
}

impl From<Token> for Tokens {
    fn from(token: Token) -> Self {
        Tokens {
            bits: 1 << (token as u8),
        }
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        let mut tokens = Tokens::NONE;
        for token in iter {
            tokens |= token;
        }
        tokens
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = TokensIter;

    fn into_iter(self) -> Self::IntoIter {
        TokensIter(self.bits)
    }
}

pub struct TokensIter(u16);

impl Iterator for TokensIter {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let token = Token::from(self.0.trailing_zeros() as u8);
        self.0 &= self.0 - 1;
        Some(token)
    }
}

impl BitOr<Tokens> for Tokens {
    type Output = Self;

    fn bitor(self, rhs: Tokens) -> Self::Output {
        Tokens {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOr<Token> for Tokens {
    type Output = Self;

    fn bitor(self, rhs: Token) -> Self::Output {
        self | Self::from(rhs)
    }
}

impl BitOrAssign<Token> for Tokens {
    fn bitor_assign(&mut self, rhs: Token) {
        *self = *self | rhs;
    }
}

impl fmt::Debug for Tokens {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(*self).finish()
    }
}

impl Serialize for Tokens {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for token in *self {
            seq.serialize_element(&token)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Tokens {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(TokensVisitor)
    }
}

struct TokensVisitor;

impl<'de> Visitor<'de> for TokensVisitor {
    type Value = Tokens;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "a sequence of tokens")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut tokens = Tokens::NONE;
        while let Some(token) = seq.next_element::<Token>()? {
            tokens |= token;
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_tokens, Token as SerdeToken};

    #[test]
    fn test_priority_order() {
        let tokens = Tokens::from(Token::Priority2) | Token::Last | Token::First;
        assert_eq!(
            tokens.into_iter().collect::<Vec<_>>(),
            vec![Token::First, Token::Last, Token::Priority2]
        );
    }

    #[test]
    fn test_all() {
        assert_eq!(Tokens::ALL.len(), 10);
        assert_eq!(
            Tokens::ALL.into_iter().collect::<Vec<_>>(),
            Token::VALUES.to_vec()
        );
        assert_eq!(Token::VALUES.iter().cloned().collect::<Tokens>(), Tokens::ALL);
    }

    #[test]
    fn test_serde() {
        let tokens = Tokens::from(Token::Third) | Token::First;
        assert_tokens(
            &tokens,
            &[
                SerdeToken::Seq { len: Some(2) },
                SerdeToken::UnitVariant {
                    name: "Token",
                    variant: "first",
                },
                SerdeToken::UnitVariant {
                    name: "Token",
                    variant: "third",
                },
                SerdeToken::SeqEnd,
            ],
        );
    }
}
