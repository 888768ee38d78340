//! Central canvas UI: the world map and dive markers.

use eframe::egui::{self, CursorIcon, Pos2, RichText, Sense};

use crate::api::Dive;
use crate::geo::{self, MapProjection, PainterSurface};
use crate::state::AppState;
use crate::ui::colors;

/// Pointer distance (px) within which a marker counts as hovered.
const HIT_RADIUS: f32 = 10.0;

pub fn render_map_canvas(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();

        let (response, painter) = ui.allocate_painter(available_size, Sense::click());
        let rect = response.rect;

        let projection = MapProjection::new(rect);
        let mut surface = PainterSurface::new(&painter, rect);

        // Base map always precedes markers within a frame.
        geo::render_base_map(&mut surface, rect);

        let frame = state.reveal_frame.clone();
        for dive in state.dive_store.iter().take(frame.visible) {
            let Some(coord) = dive.coord() else { continue };
            let pos = projection.geo_to_screen(coord);
            if state.viz.selected_dive == Some(dive.id) {
                geo::render_highlight(&mut surface, pos);
            }
            geo::render_marker(&mut surface, pos, &dive.dive_number.to_string());
        }

        if let Some(pulse) = frame.pulse {
            if let Some(coord) = state.dive_store.get(pulse.index).and_then(Dive::coord) {
                geo::render_pulse(&mut surface, projection.geo_to_screen(coord), pulse.radius);
            }
        }

        state.viz.hovered = response
            .hover_pos()
            .and_then(|pos| hit_test(state.dive_store.as_slice(), &projection, pos));

        if let Some(index) = state.viz.hovered {
            ctx.set_cursor_icon(CursorIcon::PointingHand);
            if let Some(dive) = state.dive_store.get(index) {
                show_dive_tooltip(ctx, ui, dive);
            }
        } else if response.hovered() {
            ctx.set_cursor_icon(CursorIcon::Crosshair);
        }

        if response.clicked() {
            if let Some(index) = state.viz.hovered {
                if let Some(dive_id) = state.dive_store.get(index).map(|d| d.id) {
                    state.viz.request_detail(dive_id);
                }
            }
        }
    });
}

/// Finds the first store-order dive whose projected marker is strictly
/// within the hit radius of the pointer. Entries without coordinates never
/// match; an exact boundary distance is a miss.
pub fn hit_test(dives: &[Dive], projection: &MapProjection, pointer: Pos2) -> Option<usize> {
    for (index, dive) in dives.iter().enumerate() {
        let Some(coord) = dive.coord() else { continue };
        let pos = projection.geo_to_screen(coord);
        if pos.distance(pointer) < HIT_RADIUS {
            return Some(index);
        }
    }
    None
}

fn show_dive_tooltip(ctx: &egui::Context, ui: &egui::Ui, dive: &Dive) {
    egui::Tooltip::always_open(
        ctx.clone(),
        ui.layer_id(),
        egui::Id::new("dive_tooltip"),
        egui::PopupAnchor::Pointer,
    )
    .gap(12.0)
    .show(|ui| {
        ui.label(
            RichText::new(format!("Dive #{}", dive.dive_number))
                .strong()
                .color(colors::list::NUMBER),
        );
        ui.label(RichText::new(&dive.location).strong());
        ui.label(&dive.dive_site);
        ui.label(
            RichText::new(format!("Date: {}", dive.formatted_date()))
                .small()
                .color(colors::ui::VALUE),
        );
        if let (Some(depth), Some(duration)) = (dive.max_depth, dive.duration) {
            ui.label(
                RichText::new(format!("Depth: {}m | Duration: {}min", depth, duration))
                    .small()
                    .color(colors::ui::VALUE),
            );
        }
    });
}
