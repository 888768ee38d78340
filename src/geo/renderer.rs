//! Dive marker rendering.
//!
//! Draws the map markers and their transient effects (selection highlight,
//! reveal pulse) onto a drawing surface. Everything here is side-effect
//! only; positions come pre-projected from the caller.

use eframe::egui::{Align2, Color32, FontId, Pos2, Stroke, Vec2};

use super::surface::Surface;

/// Marker disc radius in screen pixels.
pub const MARKER_RADIUS: f32 = 8.0;
/// Radius of the selection highlight disc.
pub const HIGHLIGHT_RADIUS: f32 = 15.0;
/// Pulse ring radius at the start of the effect.
pub const PULSE_START_RADIUS: f32 = 8.0;
/// Pulse ring radius at which the effect ends.
pub const PULSE_END_RADIUS: f32 = 20.0;

const MARKER_FILL: Color32 = Color32::from_rgb(255, 107, 107);
const MARKER_LABEL: Color32 = Color32::WHITE;

fn marker_shadow() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 51)
}

fn highlight_fill() -> Color32 {
    // Translucent gold
    Color32::from_rgba_unmultiplied(255, 215, 0, 128)
}

/// Draws a single labeled dive marker.
///
/// Draw order: shadow disc offset by (+2,+2), solid fill, white outline,
/// centered label. Labels are passed pre-formatted so any numeric value
/// renders after string conversion.
pub fn render_marker<S: Surface>(surface: &mut S, pos: Pos2, label: &str) {
    surface.circle_filled(pos + Vec2::new(2.0, 2.0), MARKER_RADIUS, marker_shadow());
    surface.circle_filled(pos, MARKER_RADIUS, MARKER_FILL);
    surface.circle_stroke(pos, MARKER_RADIUS, Stroke::new(2.0, Color32::WHITE));
    surface.text(
        pos,
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(10.0),
        MARKER_LABEL,
    );
}

/// Draws the selection highlight disc beneath a marker.
///
/// Callers must issue this before [`render_marker`] at the same position so
/// the marker sits on top.
pub fn render_highlight<S: Surface>(surface: &mut S, pos: Pos2) {
    surface.circle_filled(pos, HIGHLIGHT_RADIUS, highlight_fill());
}

/// Opacity of the pulse ring at a given radius, fading linearly to zero as
/// the ring expands from 8 to 20 pixels.
pub fn pulse_opacity(radius: f32) -> f32 {
    (1.0 - (radius - PULSE_START_RADIUS) / (PULSE_END_RADIUS - PULSE_START_RADIUS))
        .clamp(0.0, 1.0)
}

/// Draws the expanding reveal pulse ring around a marker.
pub fn render_pulse<S: Surface>(surface: &mut S, pos: Pos2, radius: f32) {
    let alpha = (pulse_opacity(radius) * 255.0) as u8;
    let color = Color32::from_rgba_unmultiplied(255, 107, 107, alpha);
    surface.circle_stroke(pos, radius, Stroke::new(3.0, color));
}
