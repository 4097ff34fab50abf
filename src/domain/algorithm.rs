//! Algorithm enum for selecting how a generation is computed.
//!
//! Both variants run the same sparse rule and produce identical results;
//! they differ only in whether the work is spread over rayon's pool.

use serde::{Deserialize, Serialize};

use super::{CellSpace, generation};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Single-threaded candidate accumulation
    #[default]
    Sequential,
    /// Candidate accumulation and survival checks on rayon
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Sequential, Algorithm::Parallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sequential => "Sparse",
            Algorithm::Parallel => "Sparse+Par",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Sequential => "Row map of column sets, serial",
            Algorithm::Parallel => "Row map of column sets, parallel rows",
        }
    }

    /// The other variant
    pub fn toggled(self) -> Self {
        match self {
            Algorithm::Sequential => Algorithm::Parallel,
            Algorithm::Parallel => Algorithm::Sequential,
        }
    }

    /// Advance `cells` by one generation
    pub fn step(self, cells: &CellSpace) -> CellSpace {
        match self {
            Algorithm::Sequential => generation::next_generation(cells),
            Algorithm::Parallel => generation::next_generation_parallel(cells),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellPos;

    #[test]
    fn test_all_algorithms_returns_two() {
        assert_eq!(Algorithm::all().len(), 2);
    }

    #[test]
    fn test_default_is_sequential() {
        assert_eq!(Algorithm::default(), Algorithm::Sequential);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_toggled_round_trips() {
        for algorithm in Algorithm::all() {
            assert_ne!(algorithm.toggled(), algorithm);
            assert_eq!(algorithm.toggled().toggled(), algorithm);
        }
    }

    #[test]
    fn test_variants_agree() {
        let r_pentomino: CellSpace = [(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)]
            .into_iter()
            .map(CellPos::from)
            .collect();
        let mut seq = r_pentomino.clone();
        let mut par = r_pentomino;
        for _ in 0..50 {
            seq = Algorithm::Sequential.step(&seq);
            par = Algorithm::Parallel.step(&par);
        }
        assert_eq!(seq, par);
    }
}
