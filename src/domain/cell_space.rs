//! Sparse storage for the live cells of an unbounded plane.
//!
//! Live cells are kept as a map from row index to the set of live columns in
//! that row. A row key is only present while it holds at least one live cell,
//! so emptiness checks and iteration cost O(live rows) rather than O(area).
//!
//! Every operation returns a new `CellSpace`; a value handed out is never
//! mutated afterwards and can be shared between threads freely.

use std::collections::{HashMap, HashSet};
use std::fmt;

use super::{Cell, CellPos, LifeError};

/// Live columns of a single row.
pub type Row = HashSet<i64>;

/// Immutable snapshot of every live cell on the plane.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellSpace {
    rows: HashMap<i64, Row>,
}

/// Inclusive bounding box of a non-empty cell space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: CellPos,
    pub max: CellPos,
}

impl Bounds {
    /// Number of columns and rows spanned by the box
    pub const fn size(&self) -> (i64, i64) {
        (self.max.col - self.min.col + 1, self.max.row - self.min.row + 1)
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min.col as f64
            && x <= (self.max.col + 1) as f64
            && y >= self.min.row as f64
            && y <= (self.max.row + 1) as f64
    }
}

impl CellSpace {
    /// Create an empty cell space
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw rows, dropping any row without live columns.
    pub fn from_rows(mut rows: HashMap<i64, Row>) -> Self {
        rows.retain(|_, columns| !columns.is_empty());
        Self { rows }
    }

    pub fn rows(&self) -> &HashMap<i64, Row> {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.rows.values().map(HashSet::len).sum()
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        self.rows
            .get(&pos.row)
            .is_some_and(|columns| columns.contains(&pos.col))
    }

    pub fn cell(&self, pos: CellPos) -> Cell {
        Cell::from_alive(self.contains(pos))
    }

    /// Iterate over live cells in no particular order
    pub fn iter(&self) -> impl Iterator<Item = CellPos> + '_ {
        self.rows
            .iter()
            .flat_map(|(&row, columns)| columns.iter().map(move |&col| CellPos::new(row, col)))
    }

    /// Flip a single cell, returning the new space.
    pub fn toggle(&self, pos: CellPos) -> Self {
        let mut rows = self.rows.clone();
        match self.cell(pos).toggle() {
            Cell::Alive => {
                rows.entry(pos.row).or_default().insert(pos.col);
            }
            Cell::Dead => {
                if let Some(columns) = rows.get_mut(&pos.row) {
                    columns.remove(&pos.col);
                    if columns.is_empty() {
                        rows.remove(&pos.row);
                    }
                }
            }
        }
        Self { rows }
    }

    /// Per-row union of two spaces.
    pub fn union(&self, other: &CellSpace) -> Self {
        let (mut rows, smaller) = if self.rows.len() >= other.rows.len() {
            (self.rows.clone(), &other.rows)
        } else {
            (other.rows.clone(), &self.rows)
        };
        for (&row, columns) in smaller {
            rows.entry(row).or_default().extend(columns.iter().copied());
        }
        Self { rows }
    }

    /// Count live cells among the 8 neighbours of `pos`.
    ///
    /// Scans the 3x3 block row by row, then takes the centre back out when it
    /// is itself alive.
    pub fn live_neighbours(&self, pos: CellPos) -> u8 {
        let block: u8 = (pos.row - 1..=pos.row + 1)
            .filter_map(|row| self.rows.get(&row))
            .map(|columns| {
                (pos.col - 1..=pos.col + 1)
                    .filter(|col| columns.contains(col))
                    .count() as u8
            })
            .sum();
        block - u8::from(self.contains(pos))
    }

    /// Translate every live cell by `dx` columns and `dy` rows.
    pub fn move_cells(&self, dx: i64, dy: i64) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|(&row, columns)| (row + dy, columns.iter().map(|&col| col + dx).collect()))
            .collect();
        Self { rows }
    }

    /// Shift the pattern so its minimum column and row are both zero.
    ///
    /// Returns `(x_offset, y_offset, shifted)`; `shifted.move_cells(x_offset,
    /// y_offset)` reproduces `self`. An empty space normalizes to itself with
    /// zero offsets.
    pub fn normalize(&self) -> (i64, i64, Self) {
        match self.bounds() {
            Some(bounds) => {
                let (x_offset, y_offset) = (bounds.min.col, bounds.min.row);
                (x_offset, y_offset, self.move_cells(-x_offset, -y_offset))
            }
            None => (0, 0, Self::new()),
        }
    }

    /// Inclusive bounding box, `None` when there are no live cells.
    pub fn bounds(&self) -> Option<Bounds> {
        let min_row = *self.rows.keys().min()?;
        let max_row = *self.rows.keys().max()?;
        let columns = self.rows.values().flatten();
        let min_col = *columns.clone().min()?;
        let max_col = *columns.max()?;
        Some(Bounds {
            min: CellPos::new(min_row, min_col),
            max: CellPos::new(max_row, max_col),
        })
    }

    /// Representative `(x, y)` world position of the pattern.
    ///
    /// Unweighted: midpoint of the bounding box, where a cell spans from its
    /// coordinate to coordinate + 1.
    /// Weighted: mean of every live cell's centre (`coordinate + 0.5`).
    pub fn center(&self, weighted: bool) -> Result<(f64, f64), LifeError> {
        if weighted {
            let population = self.population();
            if population == 0 {
                return Err(LifeError::EmptyPattern);
            }
            let (sum_x, sum_y) = self.iter().fold((0.0, 0.0), |(sx, sy), pos| {
                (sx + pos.col as f64 + 0.5, sy + pos.row as f64 + 0.5)
            });
            Ok((sum_x / population as f64, sum_y / population as f64))
        } else {
            let bounds = self.bounds().ok_or(LifeError::EmptyPattern)?;
            let (width, height) = bounds.size();
            Ok((
                bounds.min.col as f64 + width as f64 / 2.0,
                bounds.min.row as f64 + height as f64 / 2.0,
            ))
        }
    }
}

impl FromIterator<CellPos> for CellSpace {
    fn from_iter<I: IntoIterator<Item = CellPos>>(iter: I) -> Self {
        let mut rows: HashMap<i64, Row> = HashMap::new();
        for pos in iter {
            rows.entry(pos.row).or_default().insert(pos.col);
        }
        Self { rows }
    }
}

/// Bordered ASCII dump of the bounding box, `#` for live and `.` for dead.
impl fmt::Display for CellSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(bounds) = self.bounds() else {
            return writeln!(f, "(empty)");
        };
        let (width, _) = bounds.size();
        let border = "-".repeat(width as usize + 2);

        writeln!(f, "{border}")?;
        for row in bounds.min.row..=bounds.max.row {
            let line: String = (bounds.min.col..=bounds.max.col)
                .map(|col| if self.contains(CellPos::new(row, col)) { '#' } else { '.' })
                .collect();
            writeln!(f, "|{line}|")?;
        }
        writeln!(f, "{border}")
    }
}
