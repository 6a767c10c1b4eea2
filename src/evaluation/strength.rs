use super::evaluator::Evaluator;
use super::kickers::Kickers;
use super::ranking::Ranking;
use crate::cards::hand::Hand;

/// A hand's full showdown value: its Ranking plus kicker cards.
///
/// Constructed once per evaluation and immutable; it owns no reference
/// back to the originating cards. Field order gives the derived Ord the
/// comparison the table uses: category and payload ranks first, kickers
/// only when those are equal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Strength {
    ranking: Ranking,
    kickers: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn kickers(&self) -> Kickers {
        self.kickers
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((ranking, kickers): (Ranking, Kickers)) -> Self {
        Self { ranking, kickers }
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let ranking = evaluator.find_ranking();
        let kickers = evaluator.find_kickers(ranking);
        Self { ranking, kickers }
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}", self.ranking)
    }
}
