//! Application state management.
//!
//! All state is owned by the root [`AppState`] and threaded through the
//! view code explicitly; there are no ambient globals.

mod counters;
mod dives;
mod reveal;
mod viz;

pub use counters::StatCounters;
pub use dives::DiveStore;
pub use reveal::{RevealAnimator, RevealFrame};
pub use viz::VizState;

/// Root application state containing all sub-states.
#[derive(Default)]
pub struct AppState {
    /// Ordered dive records fetched from the backend
    pub dive_store: DiveStore,

    /// Hover/selection/modal state
    pub viz: VizState,

    /// Animated summary statistic counters
    pub counters: StatCounters,

    /// Reveal animation snapshot for the current frame
    pub reveal_frame: RevealFrame,

    /// Application status message displayed in the top bar
    pub status_message: String,

    /// Full reload requested from the top bar
    pub reload_requested: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            status_message: "Loading dives...".to_string(),
            ..Default::default()
        }
    }
}
