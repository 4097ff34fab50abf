use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparse_life::domain::{Algorithm, CellPos, CellSpace, LifeError, next_generation, presets};

fn space(cells: &[(i64, i64)]) -> CellSpace {
    cells.iter().copied().map(CellPos::from).collect()
}

fn random_space(rng: &mut StdRng, count: usize, spread: i64) -> CellSpace {
    (0..count)
        .map(|_| CellPos::new(rng.random_range(-spread..=spread), rng.random_range(-spread..=spread)))
        .collect()
}

fn neighbours_naive(cells: &HashSet<(i64, i64)>, row: i64, col: i64) -> u8 {
    let offsets = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];
    offsets
        .iter()
        .filter(|(dr, dc)| cells.contains(&(row + dr, col + dc)))
        .count() as u8
}

fn step_naive(cells: &HashSet<(i64, i64)>) -> HashSet<(i64, i64)> {
    let mut candidates = HashSet::new();
    for &(row, col) in cells {
        for dr in -1..=1 {
            for dc in -1..=1 {
                candidates.insert((row + dr, col + dc));
            }
        }
    }
    candidates
        .into_iter()
        .filter(|&(row, col)| {
            let n = neighbours_naive(cells, row, col);
            if cells.contains(&(row, col)) { n == 2 || n == 3 } else { n == 3 }
        })
        .collect()
}

fn to_set(cells: &CellSpace) -> HashSet<(i64, i64)> {
    cells.iter().map(|pos| (pos.row, pos.col)).collect()
}

#[test]
fn block_is_still_life_anywhere() {
    for (row, col) in [(0, 0), (-7, 13), (1 << 40, -(1 << 40))] {
        let block = presets::block().to_cell_space().move_cells(col, row);
        assert_eq!(next_generation(&block), block, "block at ({row}, {col}) moved:\n{block}");
    }
}

#[test]
fn isolated_cells_die_out() {
    assert!(next_generation(&space(&[(3, 3)])).is_empty());
    assert!(next_generation(&space(&[(0, 0), (0, 1)])).is_empty());
    assert!(next_generation(&space(&[(0, 0), (1, 1)])).is_empty());
    assert!(next_generation(&space(&[(0, 0), (50, -50)])).is_empty());
}

#[test]
fn empty_stays_empty() {
    assert_eq!(next_generation(&CellSpace::new()), CellSpace::new());
}

#[test]
fn glider_translates_after_four_generations() {
    let glider = presets::glider().to_cell_space().move_cells(-20, 35);
    for algorithm in Algorithm::all() {
        let after = (0..4).fold(glider.clone(), |cells, _| algorithm.step(&cells));
        assert_eq!(after, glider.move_cells(1, 1), "{} glider:\n{after}", algorithm.name());

        let (_, _, start_shape) = glider.normalize();
        let (_, _, end_shape) = after.normalize();
        assert_eq!(start_shape, end_shape);
    }
}

#[test]
fn neighbour_count_matches_naive_reference() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let cells = random_space(&mut rng, 40, 8);
        let set = to_set(&cells);
        for row in -10..=10 {
            for col in -10..=10 {
                assert_eq!(
                    cells.live_neighbours(CellPos::new(row, col)),
                    neighbours_naive(&set, row, col),
                    "at ({row}, {col}) in\n{cells}"
                );
            }
        }
    }
}

#[test]
fn step_matches_naive_reference() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..20 {
        let mut cells = random_space(&mut rng, 60, 6);
        let mut reference = to_set(&cells);
        for _ in 0..8 {
            cells = next_generation(&cells);
            reference = step_naive(&reference);
            assert_eq!(to_set(&cells), reference);
        }
    }
}

#[test]
fn parallel_engine_matches_sequential_on_soups() {
    let mut rng = StdRng::seed_from_u64(99);
    let start = random_space(&mut rng, 2_000, 40);
    let mut seq = start.clone();
    let mut par = start;
    for _ in 0..10 {
        seq = Algorithm::Sequential.step(&seq);
        par = Algorithm::Parallel.step(&par);
    }
    assert_eq!(seq, par);
}

#[test]
fn normalize_then_move_round_trips() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let cells = random_space(&mut rng, 25, 1_000).move_cells(rng.random_range(-50..50), 1 << 30);
        let (x_offset, y_offset, normalized) = cells.normalize();

        let bounds = normalized.bounds().unwrap();
        assert_eq!(bounds.min, CellPos::new(0, 0));
        assert_eq!(normalized.move_cells(x_offset, y_offset), cells);
    }
}

#[test]
fn unweighted_center_lies_in_bounding_box() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let count = rng.random_range(1..30);
        let cells = random_space(&mut rng, count, 100);
        let bounds = cells.bounds().unwrap();
        let (x, y) = cells.center(false).unwrap();
        assert!(bounds.contains_point(x, y), "({x}, {y}) outside {bounds:?}");

        let (wx, wy) = cells.center(true).unwrap();
        assert!(bounds.contains_point(wx, wy), "({wx}, {wy}) outside {bounds:?}");
    }
}

#[test]
fn weighted_center_of_empty_is_an_error() {
    assert_eq!(CellSpace::new().center(true), Err(LifeError::EmptyPattern));
}

#[test]
fn toggle_never_mutates_snapshot() {
    let before = presets::r_pentomino().to_cell_space();
    let copy = before.clone();
    let after = before.toggle(CellPos::new(0, 1)).toggle(CellPos::new(9, 9));
    assert_eq!(before, copy);
    assert_eq!(after.population(), before.population());
    assert!(!after.contains(CellPos::new(0, 1)));
    assert!(after.contains(CellPos::new(9, 9)));
}

#[test]
fn evolution_is_translation_invariant() {
    let seed = presets::seed().to_cell_space();
    let far = seed.move_cells(1 << 20, 1 << 20);
    let near_later = (0..30).fold(seed, |cells, _| next_generation(&cells));
    let far_later = (0..30).fold(far, |cells, _| next_generation(&cells));
    assert_eq!(near_later.move_cells(1 << 20, 1 << 20), far_later);
}
