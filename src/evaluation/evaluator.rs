use super::errors::InvalidHand;
use super::kickers::Kickers;
use super::ranking::Ranking;
use super::strength::Strength;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;
const WHEEL_HIGH: Rank = Rank::Five;

/// Classify a showdown hand of 5 to 7 distinct cards.
///
/// The only fallible step is input validation; once the cards collapse
/// into a Hand, evaluation is total and order-independent.
pub fn classify(cards: &[Card]) -> Result<Strength, InvalidHand> {
    if !(5..=7).contains(&cards.len()) {
        return Err(InvalidHand::Size(cards.len()));
    }
    let mut hand = Hand::empty();
    for &card in cards {
        if hand.contains(card) {
            return Err(InvalidHand::Duplicate(card));
        }
        hand = Hand::add(hand, Hand::from(u64::from(card)));
    }
    Ok(Strength::from(hand))
}

/// A lazy evaluator for a hand's strength.
///
/// Using the compact representation of the Hand, we search for
/// the highest Ranking using bitwise operations, probing categories
/// from strongest to weakest so exactly one is ever reported.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .or_else(|| self.find_1_oak())
            .expect("at least one card in Hand")
    }
    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking.n_kickers() {
            0 => Kickers::from(0u16),
            n => {
                let ranks = match ranking {
                    // flush ties are broken inside the flush suit only
                    Ranking::Flush(_) => {
                        let suit = self
                            .find_suit_of_flush()
                            .expect("Flush ranking implies a flush suit");
                        u16::from(self.0.of(&suit))
                    }
                    _ => u16::from(self.0),
                };
                let mut rank = ranks & ranking.mask();
                while n < rank.count_ones() as usize {
                    rank &= rank - 1;
                }
                Kickers::from(rank)
            }
        }
    }

    ///

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1).map(Ranking::HighCard)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).map(Ranking::OnePair) // unreachable
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).and_then(|hi| {
            self.find_rank_of_n_oak_skip(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
                .or_else(|| Some(Ranking::OnePair(hi))) // this makes OnePair unreachable
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).and_then(|triple| {
            self.find_rank_of_n_oak_skip(2, Some(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(self.0).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().map(|suit| {
            let bits = u16::from(self.0.of(&suit));
            let rank = Rank::from(bits);
            Ranking::Flush(rank)
        })
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().and_then(|suit| {
            self.find_rank_of_straight(self.0.of(&suit))
                .map(|rank| match rank {
                    Rank::Ace => Ranking::RoyalFlush,
                    rank => Ranking::StraightFlush(rank),
                })
        })
    }

    /// four successive shift-ANDs leave set only the bits that
    /// head a run of five consecutive ranks; the wheel is the one
    /// straight the cascade cannot see
    fn find_rank_of_straight(&self, hand: Hand) -> Option<Rank> {
        let ranks = u16::from(hand);
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(WHEEL_HIGH)
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .map(|s| u64::from(s))
            .map(|u| u64::from(self.0) & u)
            .map(|n| n.count_ones() as u8)
            .iter()
            .position(|&n| n >= 5)
            .map(|i| Suit::from(i as u8))
    }
    fn find_rank_of_n_oak(&self, n: usize) -> Option<Rank> {
        self.find_rank_of_n_oak_skip(n, None)
    }
    fn find_rank_of_n_oak_skip(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        let mut high = u64::from(Rank::Ace) << 4;
        while high > 0 {
            high >>= 4;
            if let Some(skip) = skip {
                let skip = u64::from(skip);
                let skip = high & skip;
                let skip = skip != 0;
                if skip {
                    continue;
                }
            }
            let mine = u64::from(self.0);
            let mine = high & mine;
            let mine = mine.count_ones() >= n as u32;
            if mine {
                return Some(Rank::from((high.trailing_zeros() / 4) as u8));
            }
        }
        None
    }
}
