use crate::domain::CellPos;

use super::Config;

/// Viewport maps between pixels on the canvas and world coordinates on the
/// cell plane.
///
/// `x`/`y` is the fractional world position (column, row) sitting under the
/// canvas' top-left pixel. The fractional part is the sub-cell scroll offset.
/// Every transform returns a new viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
    base_cell_side: f64,
    base_cell_spacing: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl Viewport {
    pub fn new(config: &Config) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: config.initial_zoom,
            base_cell_side: config.base_cell_side,
            base_cell_spacing: config.base_cell_spacing,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
        }
    }

    /// Same geometry, camera moved to `(x, y)`
    pub fn at(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    pub fn cell_side(&self) -> f64 {
        self.zoom * self.base_cell_side
    }

    pub fn cell_spacing(&self) -> f64 {
        self.zoom * self.base_cell_spacing
    }

    /// Distance in pixels from one cell's edge to the next
    pub fn pitch(&self) -> f64 {
        self.cell_side() + self.cell_spacing()
    }

    /// Pixel distance to fractional cell units. The camera is not added, so
    /// this works for deltas as well as absolute positions.
    pub fn pixel_to_cell_offset(&self, px: f64, py: f64) -> (f64, f64) {
        let pitch = self.pitch();
        (px / pitch, py / pitch)
    }

    /// The cell under an absolute canvas pixel.
    pub fn resolve_cell(&self, px: f64, py: f64) -> CellPos {
        let (fx, fy) = self.pixel_to_cell_offset(px, py);
        CellPos::new((fy + self.y).floor() as i64, (fx + self.x).floor() as i64)
    }

    /// How many cells fit across and down a canvas at `zoom`.
    pub fn visible_extent_at(&self, width: f64, height: f64, zoom: f64) -> (f64, f64) {
        let pitch = zoom * (self.base_cell_side + self.base_cell_spacing);
        (width / pitch, height / pitch)
    }

    pub fn visible_extent(&self, width: f64, height: f64) -> (f64, f64) {
        self.visible_extent_at(width, height, self.zoom)
    }

    /// Move the camera against a pointer drag of `(dx, dy)` pixels so the
    /// content follows the pointer.
    pub fn pan(self, dx: f64, dy: f64) -> Self {
        let (fx, fy) = self.pixel_to_cell_offset(dx, dy);
        self.at(self.x - fx, self.y - fy)
    }

    /// Change zoom while keeping the world point under pixel `(px, py)`
    /// fixed on screen.
    ///
    /// The camera shifts by half the change in visible extent, plus the same
    /// amount scaled by the pointer's offset from the canvas centre
    /// (-1 at the left/top edge, +1 at the right/bottom edge).
    /// Zoom values outside the configured range leave the viewport unchanged.
    pub fn zoom_at(self, zoom: f64, px: f64, py: f64, width: f64, height: f64) -> Self {
        if !zoom.is_finite() || zoom < self.min_zoom || zoom > self.max_zoom {
            return self;
        }

        let (old_w, old_h) = self.visible_extent(width, height);
        let (new_w, new_h) = self.visible_extent_at(width, height, zoom);
        let (dw, dh) = (old_w - new_w, old_h - new_h);
        let nx = normalized_offset(px, width);
        let ny = normalized_offset(py, height);

        Self {
            x: self.x + dw / 2.0 + nx * dw / 2.0,
            y: self.y + dh / 2.0 + ny * dh / 2.0,
            zoom,
            ..self
        }
    }

    /// Multiply the zoom by `factor` about a pointer; see [`Viewport::zoom_at`].
    pub fn zoom_by(self, factor: f64, px: f64, py: f64, width: f64, height: f64) -> Self {
        self.zoom_at(self.zoom * factor, px, py, width, height)
    }

    /// Pixel position of a cell's top-left corner relative to the canvas
    /// origin, honouring the camera's sub-cell offset.
    pub fn cell_to_pixel(&self, pos: CellPos) -> (f64, f64) {
        let pitch = self.pitch();
        (
            pitch * (cell_delta(pos.col, self.x) - fract(self.x)),
            pitch * (cell_delta(pos.row, self.y) - fract(self.y)),
        )
    }

    /// Pixel offset of the first cell boundary at or left of/above the canvas
    /// origin. Grid lines repeat every [`Viewport::pitch`] from here.
    pub fn grid_phase(&self) -> (f64, f64) {
        let pitch = self.pitch();
        (-fract(self.x) * pitch, -fract(self.y) * pitch)
    }

    /// Inclusive range of cells that intersect a `width` x `height` canvas.
    pub fn visible_cells(&self, width: f64, height: f64) -> (CellPos, CellPos) {
        let (cells_wide, cells_tall) = self.visible_extent(width, height);
        (
            CellPos::new(self.y.floor() as i64, self.x.floor() as i64),
            CellPos::new(
                (self.y + cells_tall).floor() as i64,
                (self.x + cells_wide).floor() as i64,
            ),
        )
    }

    /// Put world point `(x, y)` at the centre of the canvas.
    pub fn center_on(self, x: f64, y: f64, width: f64, height: f64) -> Self {
        let (cells_wide, cells_tall) = self.visible_extent(width, height);
        self.at(x - cells_wide / 2.0, y - cells_tall / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

fn fract(value: f64) -> f64 {
    value - value.floor()
}

/// Whole cells between the camera's cell and `coord`
fn cell_delta(coord: i64, camera: f64) -> f64 {
    (coord - camera.floor() as i64) as f64
}

/// Pointer position mapped to [-1, 1] across a canvas dimension
fn normalized_offset(pixel: f64, extent: f64) -> f64 {
    if extent > 0.0 { 2.0 * pixel / extent - 1.0 } else { 0.0 }
}
