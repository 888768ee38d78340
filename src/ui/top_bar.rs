//! Top bar UI: app title, stat tiles, reload, and status.

use eframe::egui::{self, RichText};
use web_time::Instant;

use crate::state::AppState;
use crate::ui::colors;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState, now: Instant) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(40.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new(format!(
                        "{} Dive Log Dashboard",
                        egui_phosphor::regular::ANCHOR
                    ))
                    .strong()
                    .size(16.0)
                    .color(colors::ui::TITLE),
                );

                ui.separator();

                let values = state.counters.values(now);
                stat_tile(
                    ui,
                    egui_phosphor::regular::WAVES,
                    "Dives",
                    values.total_dives.to_string(),
                );
                stat_tile(
                    ui,
                    egui_phosphor::regular::CLOCK,
                    "Minutes",
                    values.total_dive_time.to_string(),
                );
                stat_tile(
                    ui,
                    egui_phosphor::regular::ARROW_LINE_DOWN,
                    "Max Depth",
                    format!("{} m", values.max_depth),
                );
                stat_tile(
                    ui,
                    egui_phosphor::regular::MAP_PIN,
                    "Locations",
                    values.locations.to_string(),
                );

                ui.separator();

                if ui
                    .button(RichText::new(egui_phosphor::regular::ARROW_CLOCKWISE).size(14.0))
                    .on_hover_text("Reload dives and stats")
                    .clicked()
                {
                    state.reload_requested = true;
                }

                ui.separator();

                ui.label(
                    RichText::new(&state.status_message)
                        .size(13.0)
                        .color(colors::ui::STATUS),
                );
            });
        });
}

fn stat_tile(ui: &mut egui::Ui, icon: &str, label: &str, value: String) {
    ui.label(
        RichText::new(format!("{} {}", icon, value))
            .strong()
            .size(14.0)
            .color(colors::stats::VALUE),
    );
    ui.label(
        RichText::new(label)
            .size(11.0)
            .color(colors::stats::LABEL),
    );
    ui.add_space(8.0);
}
