//! Exhaustive search for demodulatable placements.
//!
//! A candidate of size `n` always holds `0` and its largest value `L`; the
//! `n - 2` interior positions are every combination of `1..L`. The search
//! raises `L` until at least one candidate is demodulatable and returns all
//! of them for that `L`.

use itertools::Itertools;
use tracing::debug;

use crate::placement::Placement;

/// Candidates of `size` reflections spanning exactly `largest`, in
/// lexicographic order of their interior positions.
pub fn candidates(size: usize, largest: usize) -> Box<dyn Iterator<Item = Placement>> {
    match size {
        0 => Box::new(std::iter::empty()),
        1 => Box::new(std::iter::once(Placement::new(vec![0]))),
        2 => Box::new(std::iter::once(Placement::new(vec![0, largest]))),
        _ => Box::new((1..largest).combinations(size - 2).map(move |mut interior| {
            interior.push(0);
            interior.push(largest);
            Placement::new(interior)
        })),
    }
}

/// Every demodulatable placement of `size` reflections with the smallest
/// span not below `largest`.
///
/// `size` must be at least 2; smaller sizes return an empty list.
#[must_use]
pub fn find_starting_at(size: usize, largest: usize) -> Vec<Placement> {
    if size < 2 {
        return Vec::new();
    }
    let mut span = largest.max(size - 1);
    loop {
        let found: Vec<Placement> = candidates(size, span)
            .filter(Placement::is_demodulatable)
            .collect();
        if !found.is_empty() {
            debug!(size, span, solutions = found.len(), "found placements");
            return found;
        }
        span += 1;
    }
}

/// Placements for every size from 2 to `max_size`, each search starting at
/// the largest span found so far.
#[must_use]
pub fn generate_catalog(max_size: usize) -> Vec<(usize, Vec<Placement>)> {
    let mut largest = 1;
    let mut catalog = Vec::new();
    for size in 2..=max_size {
        let solutions = find_starting_at(size, largest);
        if let Some(span) = solutions.iter().map(Placement::span).max() {
            largest = span;
        }
        largest = largest.max(size);
        catalog.push((size, solutions));
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(placements: &[Placement]) -> Vec<Vec<usize>> {
        placements.iter().map(|p| p.to_vec()).collect()
    }

    #[test]
    fn candidates_in_lexicographic_order() {
        let all: Vec<Placement> = candidates(4, 5).collect();
        assert_eq!(
            positions(&all),
            vec![
                vec![0, 1, 2, 5],
                vec![0, 1, 3, 5],
                vec![0, 1, 4, 5],
                vec![0, 2, 3, 5],
                vec![0, 2, 4, 5],
                vec![0, 3, 4, 5],
            ]
        );
    }

    #[test]
    fn size_two_has_a_single_candidate() {
        assert_eq!(positions(&candidates(2, 1).collect::<Vec<_>>()), vec![vec![0, 1]]);
    }

    #[test]
    fn finds_four_reflection_solutions() {
        assert_eq!(
            positions(&find_starting_at(4, 4)),
            vec![vec![0, 1, 4, 6], vec![0, 2, 5, 6]]
        );
    }

    #[test]
    fn catalog_matches_the_model_table() {
        let generated = generate_catalog(6);
        for ((size, placements), (reflections, rows)) in
            generated.iter().zip(sfm_model::catalog::SOLUTIONS)
        {
            assert_eq!(size, reflections);
            let expected: Vec<Vec<usize>> = rows.iter().map(|r| r.to_vec()).collect();
            assert_eq!(positions(placements), expected, "size {size}");
        }
        assert_eq!(generated.len(), sfm_model::catalog::SOLUTIONS.len());
    }
}
