//! One generation step of Conway's Game of Life over a sparse cell space.
//!
//! Work is proportional to the number of live cells: only cells inside the
//! 3x3 block of a live cell are ever looked at.
//!
//! A step runs in four stages:
//! 1. accumulate neighbour tallies for every candidate cell,
//! 2. births: candidates whose tally is exactly 3,
//! 3. survivors: live cells with 2 or 3 live neighbours, counted directly,
//! 4. union of births and survivors.
//!
//! Stage 2 also picks up live cells with 3 neighbours; stage 4 is a set union
//! so those duplicates are harmless.

use std::collections::HashMap;

use rayon::prelude::*;

use super::{Cell, CellPos, CellSpace, Row};

/// Neighbour tallies keyed by row, then column.
type Candidates = HashMap<i64, HashMap<i64, u8>>;

/// Add every cell of each live cell's 3x3 block to the tally, then take the
/// live cell's own contribution back out so the tally is a neighbour count.
fn accumulate_row(candidates: &mut Candidates, row: i64, columns: &Row) {
    for &col in columns {
        let pos = CellPos::new(row, col);
        for neighbour in pos.block() {
            *candidates
                .entry(neighbour.row)
                .or_default()
                .entry(neighbour.col)
                .or_insert(0) += 1;
        }
        if let Some(tally) = candidates.get_mut(&row).and_then(|r| r.get_mut(&col)) {
            *tally -= 1;
        }
    }
}

fn merge_candidates(mut into: Candidates, from: Candidates) -> Candidates {
    for (row, columns) in from {
        let target = into.entry(row).or_default();
        for (col, tally) in columns {
            *target.entry(col).or_insert(0) += tally;
        }
    }
    into
}

fn cell_candidates(cells: &CellSpace) -> Candidates {
    let mut candidates = Candidates::new();
    for (&row, columns) in cells.rows() {
        accumulate_row(&mut candidates, row, columns);
    }
    candidates
}

fn births_row(columns: &HashMap<i64, u8>) -> Row {
    columns
        .iter()
        .filter(|&(_, &tally)| Cell::Dead.evolve(tally).is_alive())
        .map(|(&col, _)| col)
        .collect()
}

/// Cells whose neighbour tally satisfies the birth rule.
fn cells_from_candidates(candidates: &Candidates) -> CellSpace {
    CellSpace::from_rows(
        candidates
            .iter()
            .map(|(&row, columns)| (row, births_row(columns)))
            .collect(),
    )
}

fn survivors_row(cells: &CellSpace, row: i64, columns: &Row) -> Row {
    columns
        .iter()
        .copied()
        .filter(|&col| {
            let neighbours = cells.live_neighbours(CellPos::new(row, col));
            Cell::Alive.evolve(neighbours).is_alive()
        })
        .collect()
}

/// Live cells that satisfy the survival rule.
fn surviving_cells(cells: &CellSpace) -> CellSpace {
    CellSpace::from_rows(
        cells
            .rows()
            .iter()
            .map(|(&row, columns)| (row, survivors_row(cells, row, columns)))
            .collect(),
    )
}

/// Compute the next generation on the current thread.
pub fn next_generation(cells: &CellSpace) -> CellSpace {
    let births = cells_from_candidates(&cell_candidates(cells));
    let survivors = surviving_cells(cells);
    births.union(&survivors)
}

/// Compute the next generation using rayon.
/// Produces exactly the same result as [`next_generation`]; only pays off
/// for populations in the thousands.
pub fn next_generation_parallel(cells: &CellSpace) -> CellSpace {
    let candidates = cells
        .rows()
        .par_iter()
        .fold(Candidates::new, |mut acc, (&row, columns)| {
            accumulate_row(&mut acc, row, columns);
            acc
        })
        .reduce(Candidates::new, merge_candidates);

    let births = CellSpace::from_rows(
        candidates
            .par_iter()
            .map(|(&row, columns)| (row, births_row(columns)))
            .collect(),
    );

    let survivors = CellSpace::from_rows(
        cells
            .rows()
            .par_iter()
            .map(|(&row, columns)| (row, survivors_row(cells, row, columns)))
            .collect(),
    );

    births.union(&survivors)
}
