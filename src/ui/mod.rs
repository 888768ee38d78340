//! UI modules for the dive log dashboard.
//!
//! The UI is split into distinct panels:
//! - Top bar: title, animated stat tiles, reload, and status
//! - Side panel: the dive list
//! - Central canvas: world map with dive markers
//! - Detail modal: full record for a selected dive

mod canvas;
mod colors;
mod detail;
mod side_panel;
mod top_bar;

pub use canvas::render_map_canvas;
pub use detail::{render_detail_modal, render_error_modal};
pub use side_panel::render_side_panel;
pub use top_bar::render_top_bar;
