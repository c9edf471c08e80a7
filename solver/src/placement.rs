//! Candidate reflection placements and their axis lengths.

use std::ops::Deref;

/// Reflection positions along the normalized axis, sorted and distinct.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Placement {
    positions: Vec<usize>,
    /// Every pairwise distance, sorted, duplicates kept.
    lengths: Vec<usize>,
    demodulatable: bool,
}

impl Placement {
    /// Builds a placement from arbitrary positions; duplicates are dropped.
    #[must_use]
    pub fn new(mut positions: Vec<usize>) -> Self {
        positions.sort_unstable();
        positions.dedup();

        let n = positions.len();
        let mut lengths = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                lengths.push(positions[j] - positions[i]);
            }
        }
        lengths.sort_unstable();
        // Sorted, so only neighbours can collide.
        let demodulatable = lengths.windows(2).all(|w| w[0] != w[1]);

        Self {
            positions,
            lengths,
            demodulatable,
        }
    }

    /// Whether every axis has a distinct length, so no two beat bands coincide.
    #[must_use]
    pub fn is_demodulatable(&self) -> bool {
        self.demodulatable
    }

    /// Sorted axis lengths, duplicates kept.
    #[must_use]
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Largest position.
    #[must_use]
    pub fn span(&self) -> usize {
        self.positions.last().copied().unwrap_or(0)
    }
}

impl Deref for Placement {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_dedups() {
        let p = Placement::new(vec![3, 1, 0, 3]);
        assert_eq!(&*p, &[0, 1, 3]);
        assert_eq!(p.span(), 3);
    }

    #[test]
    fn zero_one_three_is_demodulatable() {
        let p = Placement::new(vec![0, 1, 3]);
        assert_eq!(p.lengths(), &[1, 2, 3]);
        assert!(p.is_demodulatable());
    }

    #[test]
    fn zero_one_two_is_not() {
        let p = Placement::new(vec![0, 1, 2]);
        assert_eq!(p.lengths(), &[1, 1, 2]);
        assert!(!p.is_demodulatable());
    }

    #[test]
    fn empty_placement() {
        let p = Placement::new(Vec::new());
        assert!(p.lengths().is_empty());
        assert!(p.is_demodulatable());
        assert_eq!(p.span(), 0);
    }
}
