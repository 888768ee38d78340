//! Centralized color constants for the UI.
//!
//! Map and marker paint colors live next to their renderers in `geo`;
//! these cover the surrounding panel chrome.

use eframe::egui::Color32;

/// General UI colors for labels and values.
pub mod ui {
    use super::Color32;

    /// Muted gray for labels and secondary text.
    pub const LABEL: Color32 = Color32::from_rgb(110, 110, 120);
    /// Slightly brighter for values.
    pub const VALUE: Color32 = Color32::from_rgb(160, 160, 170);
    /// Status line text.
    pub const STATUS: Color32 = Color32::GRAY;
    /// App title.
    pub const TITLE: Color32 = Color32::WHITE;
}

/// Colors for the stat tiles in the top bar.
pub mod stats {
    use super::Color32;

    /// Counter value.
    pub const VALUE: Color32 = Color32::from_rgb(100, 180, 255);
    /// Tile label.
    pub const LABEL: Color32 = Color32::from_rgb(140, 140, 150);
}

/// Colors for the dive list entries.
pub mod list {
    use super::Color32;

    /// Dive number accent.
    pub const NUMBER: Color32 = Color32::from_rgb(255, 107, 107);
    /// Entry date.
    pub const DATE: Color32 = Color32::from_rgb(130, 130, 140);
}
