#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// u64 isomorphism
/// each card is just one bit turned on
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        Self {
            rank: Rank::from((n.trailing_zeros() / 4) as u8),
            suit: Suit::from((n.trailing_zeros() % 4) as u8),
        }
    }
}

/// str isomorphism
/// rank char then suit char, e.g. "Ts" "Ah" "2c"
impl From<&str> for Card {
    fn from(s: &str) -> Self {
        assert!(s.len() == 2, "Invalid card str: {}", s);
        Self {
            rank: Rank::from(&s[0..1]),
            suit: Suit::from(&s[1..2]),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

use super::{rank::Rank, suit::Suit};
use std::fmt::{Display, Formatter, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let card = Card::from("Ts");
        assert_eq!(card, Card::from(u8::from(card)));
    }

    #[test]
    fn bijective_u64() {
        let card = Card::from((Rank::Queen, Suit::Diamond));
        assert_eq!(card, Card::from(u64::from(card)));
    }

    #[test]
    fn str_roundtrip() {
        assert_eq!(Card::from("Ah").to_string(), "Ah");
        assert_eq!(Card::from("2c").rank(), Rank::Two);
        assert_eq!(Card::from("2c").suit(), Suit::Club);
    }
}
