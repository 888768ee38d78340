//! Detail modal and error notification windows.

use eframe::egui::{self, Align2, RichText, Vec2};

use crate::api::Dive;
use crate::state::AppState;
use crate::ui::colors;

pub fn render_detail_modal(ctx: &egui::Context, state: &mut AppState) {
    if !state.viz.detail_open {
        return;
    }
    let Some(dive) = state.viz.detail.clone() else {
        return;
    };

    let mut open = true;
    egui::Window::new(format!("Dive #{} - {}", dive.dive_number, dive.dive_site))
        .id(egui::Id::new("dive_detail"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .open(&mut open)
        .show(ctx, |ui| {
            egui::Grid::new("dive_detail_grid")
                .num_columns(2)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    detail_row(ui, "Date", dive.formatted_date());
                    detail_row(ui, "Location", dive.location.clone());
                    detail_row(ui, "Dive Site", dive.dive_site.clone());
                    detail_row(ui, "Maximum Depth", measurement(dive.max_depth, "meters"));
                    detail_row(ui, "Duration", measurement(dive.duration, "minutes"));
                    detail_row(
                        ui,
                        "Water Temperature",
                        measurement(dive.water_temp, "°C"),
                    );
                    detail_row(ui, "Visibility", measurement(dive.visibility, "meters"));
                    detail_row(ui, "Coordinates", coordinates(&dive));
                });

            // The notes row is omitted entirely when absent or empty.
            if let Some(notes) = dive.notes_text() {
                ui.add_space(10.0);
                ui.label(RichText::new("Notes").strong().color(colors::ui::LABEL));
                ui.label(notes);
            }
        });

    if !open || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        state.viz.close_detail();
    }
}

pub fn render_error_modal(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = state.viz.error.clone() else {
        return;
    };

    egui::Window::new("Load Error")
        .id(egui::Id::new("load_error"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                state.viz.error = None;
            }
        });
}

fn detail_row(ui: &mut egui::Ui, label: &str, value: String) {
    ui.label(RichText::new(label).strong().color(colors::ui::LABEL));
    ui.label(value);
    ui.end_row();
}

/// Formats an optional measurement with its unit, "—" when absent.
fn measurement(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{:.0} {}", v, unit),
        Some(v) => format!("{} {}", v, unit),
        None => "—".to_string(),
    }
}

fn coordinates(dive: &Dive) -> String {
    match (dive.latitude, dive.longitude) {
        (Some(lat), Some(lon)) => format!("{:.4}, {:.4}", lat, lon),
        _ => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_formatting() {
        assert_eq!(measurement(Some(18.5), "meters"), "18.5 meters");
        assert_eq!(measurement(Some(45.0), "minutes"), "45 minutes");
        assert_eq!(measurement(None, "meters"), "—");
    }

    #[test]
    fn test_coordinates_formatting() {
        let dive = Dive {
            id: 1,
            dive_number: 1,
            date: "2023-06-15".to_string(),
            location: "Great Barrier Reef".to_string(),
            dive_site: "Cod Hole".to_string(),
            latitude: Some(-14.6919),
            longitude: Some(145.6331),
            max_depth: None,
            duration: None,
            water_temp: None,
            visibility: None,
            notes: None,
        };
        assert_eq!(coordinates(&dive), "-14.6919, 145.6331");

        let missing = Dive {
            latitude: None,
            ..dive
        };
        assert_eq!(coordinates(&missing), "—");
    }
}
