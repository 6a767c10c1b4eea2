use super::errors::EmptyShowdown;
use super::strength::Strength;

/// Settle a showdown: return the indices of every hand tied at the
/// maximum Strength, in ascending input order.
///
/// Strength's total order compares category, then the category's payload
/// ranks, then kickers, each lexicographically, so a single max + filter
/// is the whole resolution. Hands equal at every level are co-winners
/// and split the pot.
pub fn winners(strengths: &[Strength]) -> Result<Vec<usize>, EmptyShowdown> {
    let best = strengths.iter().max().ok_or(EmptyShowdown)?;
    Ok(strengths
        .iter()
        .enumerate()
        .filter(|(_, strength)| *strength == best)
        .map(|(i, _)| i)
        .collect())
}
