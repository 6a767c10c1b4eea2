use crate::cards::card::Card;
use thiserror::Error;

/// Rejected showdown input. Both cases are caller bugs: the dealing layer
/// must never construct such hands, so these propagate without retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidHand {
    #[error("hand holds {0} cards, showdown takes 5 to 7")]
    Size(usize),
    #[error("hand holds {0} twice")]
    Duplicate(Card),
}

/// A showdown needs at least one hand to settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no strengths to compare")]
pub struct EmptyShowdown;
