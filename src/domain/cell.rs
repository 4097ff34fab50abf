use std::ops::{Add, Sub};

/// Cell represents the state of one point on the plane.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Toggle the cell state
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Conway's rule (B3/S23):
    /// 1. Live cell with 2-3 neighbours survives
    /// 2. Dead cell with exactly 3 neighbours becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbours: u8) -> Self {
        match (self, neighbours) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Position of a cell on the unbounded plane.
/// Rows grow downwards and columns grow to the right; both may be negative.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct CellPos {
    pub row: i64,
    pub col: i64,
}

impl CellPos {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// The 3x3 block centred on this position, the position itself included.
    pub fn block(self) -> impl Iterator<Item = CellPos> {
        (-1..=1).flat_map(move |dr| (-1..=1).map(move |dc| CellPos::new(self.row + dr, self.col + dc)))
    }
}

impl Add for CellPos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        CellPos::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for CellPos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        CellPos::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl From<(i64, i64)> for CellPos {
    fn from((row, col): (i64, i64)) -> Self {
        CellPos::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive.evolve(0), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.evolve(2), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(Cell::Alive.evolve(4), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(8), Cell::Dead);
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Cell::Dead.evolve(3), Cell::Alive);
        assert_eq!(Cell::Dead.evolve(2), Cell::Dead);
        assert_eq!(Cell::Dead.evolve(4), Cell::Dead);
    }

    #[test]
    fn test_block() {
        let pos = CellPos::new(-1, 5);
        let block: Vec<_> = pos.block().collect();
        assert_eq!(block.len(), 9);
        assert!(block.contains(&pos));
        assert!(block.contains(&CellPos::new(-2, 4)));
        assert!(block.contains(&CellPos::new(0, 6)));
        assert!(!block.contains(&CellPos::new(1, 5)));
    }

    #[test]
    fn test_pos_arithmetic() {
        let a = CellPos::new(3, -2);
        let b = CellPos::new(1, 1);
        assert_eq!(a + b, CellPos::new(4, -1));
        assert_eq!(a - b, CellPos::new(2, -3));
        assert_eq!(CellPos::from((7, 8)), CellPos::new(7, 8));
    }
}
