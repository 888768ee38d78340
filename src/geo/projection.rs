//! Map projection and coordinate transformation.
//!
//! Handles converting between geographic coordinates (lat/lon) and
//! screen coordinates for rendering on the canvas.

use eframe::egui::{Pos2, Rect};
use geo_types::Coord;

/// Width of the fixed map plane in pixels.
pub const MAP_WIDTH: f32 = 800.0;
/// Height of the fixed map plane in pixels.
pub const MAP_HEIGHT: f32 = 600.0;

/// Equirectangular projection onto a fixed 800x600 map plane, scaled into
/// the current canvas rect.
#[derive(Debug, Clone)]
pub struct MapProjection {
    /// Screen rectangle for the canvas
    pub screen_rect: Rect,
}

impl MapProjection {
    /// Creates a projection targeting the given canvas rect.
    pub fn new(screen_rect: Rect) -> Self {
        Self { screen_rect }
    }

    /// Projects latitude/longitude onto the fixed map plane.
    ///
    /// Total over all inputs: out-of-range coordinates project outside the
    /// plane rather than erroring.
    pub fn project(lat: f64, lon: f64) -> Pos2 {
        let x = (lon + 180.0) / 360.0 * MAP_WIDTH as f64;
        let y = (90.0 - lat) / 180.0 * MAP_HEIGHT as f64;
        Pos2::new(x as f32, y as f32)
    }

    /// Scales a map-plane position into the canvas rect.
    pub fn plane_to_screen(&self, plane: Pos2) -> Pos2 {
        Pos2::new(
            self.screen_rect.left() + plane.x / MAP_WIDTH * self.screen_rect.width(),
            self.screen_rect.top() + plane.y / MAP_HEIGHT * self.screen_rect.height(),
        )
    }

    /// Converts geographic coordinates (lon, lat) to screen position.
    pub fn geo_to_screen(&self, coord: Coord<f64>) -> Pos2 {
        self.plane_to_screen(Self::project(coord.y, coord.x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Vec2;

    #[test]
    fn test_plane_corners() {
        assert_eq!(
            MapProjection::project(-90.0, -180.0),
            Pos2::new(0.0, MAP_HEIGHT)
        );
        assert_eq!(
            MapProjection::project(90.0, 180.0),
            Pos2::new(MAP_WIDTH, 0.0)
        );
        assert_eq!(
            MapProjection::project(0.0, 0.0),
            Pos2::new(MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0)
        );
    }

    #[test]
    fn test_deterministic() {
        let a = MapProjection::project(-14.6919, 145.6331);
        let b = MapProjection::project(-14.6919, 145.6331);
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_range_projects_off_plane() {
        let p = MapProjection::project(120.0, 400.0);
        assert!(p.x > MAP_WIDTH);
        assert!(p.y < 0.0);
    }

    #[test]
    fn test_screen_scaling() {
        // At the native plane size, screen == plane.
        let projection = MapProjection::new(Rect::from_min_size(
            Pos2::ZERO,
            Vec2::new(MAP_WIDTH, MAP_HEIGHT),
        ));
        let screen = projection.geo_to_screen(Coord { x: 0.0, y: 0.0 });
        assert_eq!(screen, Pos2::new(MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0));

        // A rect of half the size scales positions by half.
        let projection = MapProjection::new(Rect::from_min_size(
            Pos2::ZERO,
            Vec2::new(MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0),
        ));
        let screen = projection.geo_to_screen(Coord { x: 0.0, y: 0.0 });
        assert_eq!(screen, Pos2::new(MAP_WIDTH / 4.0, MAP_HEIGHT / 4.0));
    }
}
