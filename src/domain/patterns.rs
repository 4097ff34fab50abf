use super::{CellPos, CellSpace};

/// Represents a pattern that can be stamped onto a cell space
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: i64,
    pub height: i64,
    pub cells: Vec<(i64, i64)>, // Relative (row, col) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i64, i64)>) -> Self {
        let height = cells.iter().map(|(row, _)| *row).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, col)| *col).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// The pattern anchored at the origin
    pub fn to_cell_space(&self) -> CellSpace {
        self.cells.iter().copied().map(CellPos::from).collect()
    }

    /// Stamp the pattern centred on `origin`, keeping whatever is already live.
    pub fn place_at(&self, cells: &CellSpace, origin: CellPos) -> CellSpace {
        let stamp = self
            .to_cell_space()
            .move_cells(origin.col - self.width / 2, origin.row - self.height / 2);
        cells.union(&stamp)
    }
}

/// Classic Game of Life patterns, coordinates are (row, col)
pub mod presets {
    use super::*;

    /// Starting configuration shown on launch and after a reset
    pub fn seed() -> Pattern {
        Pattern::new(
            "Seed",
            "Seven cell starting configuration",
            vec![
                (0, 1),
                (1, 0), (1, 2),
                (2, 0), (2, 1), (2, 2),
                (3, 1),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(1, 0), (1, 1), (1, 2)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (0, 1),
                (1, 3),
                (2, 0), (2, 1), (2, 4), (2, 5), (2, 6),
            ],
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            vec![
                // Left square
                (4, 0), (5, 0),
                (4, 1), (5, 1),

                // Left circle
                (4, 10), (5, 10), (6, 10),
                (3, 11), (7, 11),
                (2, 12), (8, 12),
                (2, 13), (8, 13),
                (5, 14),
                (3, 15), (7, 15),
                (4, 16), (5, 16), (6, 16),
                (5, 17),

                // Middle pieces
                (2, 20), (3, 20), (4, 20),
                (2, 21), (3, 21), (4, 21),
                (1, 22), (5, 22),
                (0, 24), (1, 24), (5, 24), (6, 24),

                // Right square
                (2, 34), (3, 34),
                (2, 35), (3, 35),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            seed(),
            glider(),
            blinker(),
            toad(),
            beacon(),
            block(),
            lwss(),
            r_pentomino(),
            acorn(),
            glider_gun(),
        ]
    }
}
