//! Drawing surface abstraction.
//!
//! All map painting goes through the [`Surface`] trait so the rendering
//! routines can run against a recording implementation in tests instead of
//! a live egui painter.

use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};

/// Minimal drawing capability used by the map and marker renderers.
pub trait Surface {
    /// Fills the entire surface with a single color.
    fn clear(&mut self, color: Color32);

    /// Draws a closed polygon with fill and outline.
    fn fill_polygon(&mut self, points: &[Pos2], fill: Color32, outline: Stroke);

    /// Draws a straight line segment.
    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke);

    /// Draws a filled disc.
    fn circle_filled(&mut self, center: Pos2, radius: f32, fill: Color32);

    /// Draws a circle outline.
    fn circle_stroke(&mut self, center: Pos2, radius: f32, stroke: Stroke);

    /// Draws anchored text.
    fn text(&mut self, pos: Pos2, anchor: Align2, text: &str, font: FontId, color: Color32);
}

/// [`Surface`] backed by an egui [`Painter`] clipped to a canvas rect.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.rect, 0.0, color);
    }

    fn fill_polygon(&mut self, points: &[Pos2], fill: Color32, outline: Stroke) {
        self.painter
            .add(Shape::convex_polygon(points.to_vec(), fill, Stroke::NONE));

        // Close the ring and stroke it segment by segment.
        for window in points.windows(2) {
            if let [p1, p2] = window {
                self.painter.line_segment([*p1, *p2], outline);
            }
        }
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            self.painter.line_segment([*last, *first], outline);
        }
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.painter.line_segment([from, to], stroke);
    }

    fn circle_filled(&mut self, center: Pos2, radius: f32, fill: Color32) {
        self.painter.circle_filled(center, radius, fill);
    }

    fn circle_stroke(&mut self, center: Pos2, radius: f32, stroke: Stroke) {
        self.painter.circle_stroke(center, radius, stroke);
    }

    fn text(&mut self, pos: Pos2, anchor: Align2, text: &str, font: FontId, color: Color32) {
        self.painter.text(pos, anchor, text, font, color);
    }
}

#[cfg(test)]
pub mod recording {
    //! Recording surface for render tests.

    use super::*;

    /// One recorded draw call, with positions/colors flattened for comparison.
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawOp {
        Clear(Color32),
        FillPolygon(Vec<(f32, f32)>, Color32),
        Line((f32, f32), (f32, f32)),
        CircleFilled((f32, f32), f32, Color32),
        CircleStroke((f32, f32), f32),
        Text((f32, f32), String),
    }

    /// [`Surface`] that records operations instead of painting.
    #[derive(Default)]
    pub struct RecordingSurface {
        pub ops: Vec<DrawOp>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, color: Color32) {
            self.ops.push(DrawOp::Clear(color));
        }

        fn fill_polygon(&mut self, points: &[Pos2], fill: Color32, _outline: Stroke) {
            self.ops.push(DrawOp::FillPolygon(
                points.iter().map(|p| (p.x, p.y)).collect(),
                fill,
            ));
        }

        fn line(&mut self, from: Pos2, to: Pos2, _stroke: Stroke) {
            self.ops
                .push(DrawOp::Line((from.x, from.y), (to.x, to.y)));
        }

        fn circle_filled(&mut self, center: Pos2, radius: f32, fill: Color32) {
            self.ops
                .push(DrawOp::CircleFilled((center.x, center.y), radius, fill));
        }

        fn circle_stroke(&mut self, center: Pos2, radius: f32, _stroke: Stroke) {
            self.ops
                .push(DrawOp::CircleStroke((center.x, center.y), radius));
        }

        fn text(&mut self, pos: Pos2, _anchor: Align2, text: &str, _font: FontId, _color: Color32) {
            self.ops.push(DrawOp::Text((pos.x, pos.y), text.to_string()));
        }
    }
}
