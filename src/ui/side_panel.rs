//! Side panel UI: the dive list.

use eframe::egui::{self, CursorIcon, RichText, Sense};

use crate::api::Dive;
use crate::state::{AppState, DiveStore};
use crate::ui::colors;

/// What the list renders: either the records or a single placeholder.
pub enum ListContent<'a> {
    Placeholder,
    Entries(&'a [Dive]),
}

/// Resolves the list content from the store; an empty store gets exactly
/// one placeholder instead of an empty list.
pub fn list_content(store: &DiveStore) -> ListContent<'_> {
    if store.is_empty() {
        ListContent::Placeholder
    } else {
        ListContent::Entries(store.as_slice())
    }
}

pub fn render_side_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::left("dive_list_panel")
        .resizable(true)
        .default_width(260.0)
        .min_width(200.0)
        .max_width(400.0)
        .show(ctx, |ui| {
            ui.heading("Dive Log");
            ui.separator();

            let mut clicked = None;

            egui::ScrollArea::vertical().show(ui, |ui| match list_content(&state.dive_store) {
                ListContent::Placeholder => {
                    ui.label(
                        RichText::new("No dives recorded yet.")
                            .italics()
                            .color(colors::ui::LABEL),
                    );
                }
                ListContent::Entries(dives) => {
                    for dive in dives {
                        if render_entry(ui, dive) {
                            clicked = Some(dive.id);
                        }
                        ui.add_space(4.0);
                    }
                }
            });

            if let Some(dive_id) = clicked {
                state.viz.request_detail(dive_id);
            }
        });
}

/// Renders one list entry; returns true when it was clicked.
fn render_entry(ui: &mut egui::Ui, dive: &Dive) -> bool {
    let response = ui
        .group(|ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("Dive #{}", dive.dive_number))
                        .strong()
                        .color(colors::list::NUMBER),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(dive.formatted_date())
                            .small()
                            .color(colors::list::DATE),
                    );
                });
            });
            ui.label(&dive.location);
            ui.label(
                RichText::new(&dive.dive_site)
                    .small()
                    .color(colors::ui::VALUE),
            );
        })
        .response
        .interact(Sense::click());

    if response.hovered() {
        ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
    }

    response.clicked()
}
