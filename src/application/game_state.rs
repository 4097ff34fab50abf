use rand::Rng;
use tracing::{debug, info};

use crate::domain::{Algorithm, CellPos, CellSpace, Pattern};

use super::Config;

/// Probability of a cell being alive in a random soup
const SOUP_DENSITY: f64 = 0.3;

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic; every
/// transition takes the state by value and hands back the next one.
pub struct GameState {
    pub cells: CellSpace,
    /// Pattern restored by a reset
    pub seed: CellSpace,
    pub algorithm: Algorithm,
    pub is_running: bool,
    /// Whether the last reset restored the seed; the next reset clears.
    pub did_reset: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_evolution_time_ms: f32,
    pub last_render_time_ms: f32,
}

impl GameState {
    /// Create a paused game showing the configured seed
    pub fn new(config: &Config) -> Self {
        let seed = config.seed_cells();
        info!(population = seed.population(), "seeded initial pattern");
        Self {
            cells: seed.clone(),
            seed,
            algorithm: config.algorithm,
            is_running: false,
            did_reset: true,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: config.updates_per_second,
            last_evolution_time_ms: 0.0,
            last_render_time_ms: 0.0,
        }
    }

    pub fn toggle_algorithm(mut self) -> Self {
        self.algorithm = self.algorithm.toggled();
        info!(algorithm = self.algorithm.name(), "switched algorithm");
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self.did_reset = false;
        self
    }

    /// First press restores the seed, a second press in a row clears.
    pub fn reset(mut self) -> Self {
        self.update_timer = 0.0;
        if self.did_reset {
            info!("cleared cells");
            return self.clear();
        }
        self.cells = self.seed.clone();
        self.generation = 0;
        self.is_running = false;
        self.did_reset = true;
        info!(population = self.cells.population(), "restored seed");
        self
    }

    /// Clear cells and reset generation counter
    pub fn clear(mut self) -> Self {
        self.cells = CellSpace::new();
        self.generation = 0;
        self.is_running = false;
        self.did_reset = false;
        self
    }

    /// Fill the square of side `2 * radius + 1` around `center` with random
    /// cells, keeping cells outside it.
    pub fn randomize(self, center: CellPos, radius: i64) -> Self {
        self.randomize_with(&mut rand::rng(), center, radius)
    }

    pub fn randomize_with<R: Rng>(mut self, rng: &mut R, center: CellPos, radius: i64) -> Self {
        let soup: CellSpace = (center.row - radius..=center.row + radius)
            .flat_map(|row| (center.col - radius..=center.col + radius).map(move |col| CellPos::new(row, col)))
            .filter(|_| rng.random_bool(SOUP_DENSITY))
            .collect();
        let outside: CellSpace = self
            .cells
            .iter()
            .filter(|pos| (pos.row - center.row).abs() > radius || (pos.col - center.col).abs() > radius)
            .collect();

        self.cells = outside.union(&soup);
        self.generation = 0;
        self.is_running = false;
        self.did_reset = false;
        info!(population = self.cells.population(), radius, "randomized region");
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Flip the cell at `pos`
    pub fn toggle_cell(mut self, pos: CellPos) -> Self {
        self.cells = self.cells.toggle(pos);
        self.did_reset = false;
        self
    }

    /// Stamp a pattern centred on `pos`
    pub fn place_pattern(mut self, pattern: &Pattern, pos: CellPos) -> Self {
        self.cells = pattern.place_at(&self.cells, pos);
        self.did_reset = false;
        debug!(pattern = pattern.name, row = pos.row, col = pos.col, "placed pattern");
        self
    }

    /// Advance exactly one generation, regardless of the running flag
    pub fn step(mut self) -> Self {
        let start = std::time::Instant::now();
        self.cells = self.algorithm.step(&self.cells);
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.cells.population(),
            elapsed_ms = self.last_evolution_time_ms,
            "advanced generation"
        );
        self
    }

    /// Update simulation by one frame
    /// This is the main game loop coordination
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.update_timer = 0.0;
            self = self.step();
        }

        self
    }
}
