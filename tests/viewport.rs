use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparse_life::{CellPos, Config, Viewport};

const WIDTH: f64 = 1020.0;
const HEIGHT: f64 = 740.0;

fn assert_close(a: f64, b: f64, what: &str) {
    assert!((a - b).abs() < 1e-9, "{what}: {a} != {b}");
}

#[test]
fn zoom_never_leaves_configured_range() {
    let config = Config::default();
    let mut viewport = Viewport::new(&config).at(1_000.25, -30.5);

    for _ in 0..100 {
        let before = viewport;
        viewport = viewport.zoom_by(1.3, 200.0, 100.0, WIDTH, HEIGHT);
        assert!(viewport.zoom <= config.max_zoom);
        if viewport.zoom == before.zoom {
            assert_eq!(viewport, before, "rejected zoom must not move the camera");
        }
    }

    for _ in 0..100 {
        let before = viewport;
        viewport = viewport.zoom_by(0.7, 900.0, 10.0, WIDTH, HEIGHT);
        assert!(viewport.zoom >= config.min_zoom);
        if viewport.zoom == before.zoom {
            assert_eq!(viewport, before, "rejected zoom must not move the camera");
        }
    }
}

#[test]
fn zoom_in_then_out_restores_camera() {
    let mut rng = StdRng::seed_from_u64(3);
    let start = Viewport::default().at(1_048_570.75, 1_048_571.5);

    for _ in 0..100 {
        let px = rng.random_range(0.0..WIDTH);
        let py = rng.random_range(0.0..HEIGHT);
        let factor = rng.random_range(1.01..2.5);

        let zoomed = start.zoom_by(factor, px, py, WIDTH, HEIGHT);
        let restored = zoomed.zoom_at(start.zoom, px, py, WIDTH, HEIGHT);

        assert_close(restored.zoom, start.zoom, "zoom");
        assert!((restored.x - start.x).abs() < 1e-6, "x drifted: {} vs {}", restored.x, start.x);
        assert!((restored.y - start.y).abs() < 1e-6, "y drifted: {} vs {}", restored.y, start.y);
    }
}

#[test]
fn zoom_keeps_cell_under_pointer() {
    let viewport = Viewport::default().at(-12.4, 7.9);
    let (px, py) = (321.0, 654.0);
    let cell = viewport.resolve_cell(px, py);

    for zoom in [0.25, 0.5, 1.5, 2.0, 3.0] {
        let zoomed = viewport.zoom_at(zoom, px, py, WIDTH, HEIGHT);
        assert_eq!(zoomed.resolve_cell(px, py), cell, "zoom {zoom}");
    }
}

#[test]
fn drawn_cells_resolve_back_to_themselves() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..200 {
        let viewport = Viewport::default()
            .at(rng.random_range(-500.0..500.0), rng.random_range(-500.0..500.0))
            .zoom_at(rng.random_range(0.2..3.0), 0.0, 0.0, WIDTH, HEIGHT);
        let (min, max) = viewport.visible_cells(WIDTH, HEIGHT);
        let pos = CellPos::new(rng.random_range(min.row..=max.row), rng.random_range(min.col..=max.col));

        let (px, py) = viewport.cell_to_pixel(pos);
        let inset = viewport.cell_side() * 0.25;
        assert_eq!(viewport.resolve_cell(px + inset, py + inset), pos);
    }
}

#[test]
fn pan_is_reversible() {
    let viewport = Viewport::default().at(10.0, 10.0);
    let back = viewport.pan(137.0, -59.0).pan(-137.0, 59.0);
    assert_close(back.x, viewport.x, "x");
    assert_close(back.y, viewport.y, "y");
}

#[test]
fn centering_on_pattern_centroid() {
    let config = Config::default();
    let cells = config.seed_cells();
    let (cx, cy) = cells.center(true).unwrap();
    let viewport = Viewport::new(&config).center_on(cx, cy, WIDTH, HEIGHT);

    let middle = viewport.resolve_cell(WIDTH / 2.0, HEIGHT / 2.0);
    let bounds = cells.bounds().unwrap();
    assert!(middle.row >= bounds.min.row && middle.row <= bounds.max.row);
    assert!(middle.col >= bounds.min.col && middle.col <= bounds.max.col);
}
