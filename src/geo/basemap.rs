//! Stylized world base map rendering.
//!
//! Draws the ocean background and stylized continents, then overlays a
//! latitude/longitude grid. The base map is a full-surface redraw with no
//! retained state: rendering it twice from a cleared surface produces the
//! identical result, which is what the per-frame repaint relies on.

use eframe::egui::{Color32, Pos2, Rect, Stroke};

use super::projection::MapProjection;
use super::surface::Surface;

const OCEAN: Color32 = Color32::from_rgb(212, 232, 247);
const LAND: Color32 = Color32::from_rgb(168, 213, 186);
const LAND_OUTLINE: Color32 = Color32::from_rgb(107, 158, 127);
const GRID: Color32 = Color32::from_rgb(184, 217, 232);

/// Number of vertical grid divisions across the map.
const GRID_COLUMNS: u32 = 8;
/// Number of horizontal grid divisions down the map.
const GRID_ROWS: u32 = 6;

/// Simplified continent outlines in map-plane coordinates.
const NORTH_AMERICA: &[(f32, f32)] = &[
    (100.0, 100.0),
    (150.0, 80.0),
    (200.0, 100.0),
    (250.0, 150.0),
    (230.0, 200.0),
    (180.0, 250.0),
    (120.0, 230.0),
    (80.0, 180.0),
];

const SOUTH_AMERICA: &[(f32, f32)] = &[
    (200.0, 280.0),
    (230.0, 260.0),
    (240.0, 300.0),
    (250.0, 380.0),
    (230.0, 420.0),
    (210.0, 430.0),
    (190.0, 410.0),
    (180.0, 350.0),
];

const EUROPE: &[(f32, f32)] = &[
    (380.0, 120.0),
    (420.0, 110.0),
    (450.0, 130.0),
    (460.0, 160.0),
    (440.0, 180.0),
    (400.0, 170.0),
    (370.0, 150.0),
];

const AFRICA: &[(f32, f32)] = &[
    (400.0, 200.0),
    (450.0, 190.0),
    (490.0, 220.0),
    (500.0, 280.0),
    (480.0, 350.0),
    (450.0, 380.0),
    (420.0, 390.0),
    (390.0, 360.0),
    (380.0, 280.0),
    (390.0, 220.0),
];

const ASIA: &[(f32, f32)] = &[
    (480.0, 100.0),
    (550.0, 90.0),
    (620.0, 110.0),
    (680.0, 140.0),
    (700.0, 180.0),
    (680.0, 220.0),
    (640.0, 240.0),
    (580.0, 250.0),
    (520.0, 230.0),
    (490.0, 200.0),
    (470.0, 150.0),
];

const AUSTRALIA: &[(f32, f32)] = &[
    (620.0, 350.0),
    (680.0, 340.0),
    (710.0, 360.0),
    (720.0, 390.0),
    (700.0, 420.0),
    (650.0, 430.0),
    (610.0, 410.0),
    (600.0, 380.0),
];

const CONTINENTS: &[&[(f32, f32)]] = &[
    NORTH_AMERICA,
    SOUTH_AMERICA,
    EUROPE,
    AFRICA,
    ASIA,
    AUSTRALIA,
];

/// Renders the complete base map into the canvas rect.
///
/// Draw order: ocean fill, continents, grid. Callers paint markers after
/// this so the base map always sits beneath them within a frame.
pub fn render_base_map<S: Surface>(surface: &mut S, rect: Rect) {
    surface.clear(OCEAN);

    let projection = MapProjection::new(rect);
    let outline = Stroke::new(1.0, LAND_OUTLINE);

    for vertices in CONTINENTS {
        let points: Vec<Pos2> = vertices
            .iter()
            .map(|&(x, y)| projection.plane_to_screen(Pos2::new(x, y)))
            .collect();
        surface.fill_polygon(&points, LAND, outline);
    }

    render_grid(surface, rect);
}

/// Overlays the latitude/longitude grid lines.
fn render_grid<S: Surface>(surface: &mut S, rect: Rect) {
    let stroke = Stroke::new(0.5, GRID);

    let column_step = rect.width() / GRID_COLUMNS as f32;
    for i in 0..=GRID_COLUMNS {
        let x = rect.left() + i as f32 * column_step;
        surface.line(
            Pos2::new(x, rect.top()),
            Pos2::new(x, rect.bottom()),
            stroke,
        );
    }

    let row_step = rect.height() / GRID_ROWS as f32;
    for i in 0..=GRID_ROWS {
        let y = rect.top() + i as f32 * row_step;
        surface.line(
            Pos2::new(rect.left(), y),
            Pos2::new(rect.right(), y),
            stroke,
        );
    }
}
