//! View interaction state: hover, selection, and the detail modal.

use crate::api::Dive;

/// Transient view state for the map and detail modal.
#[derive(Default)]
pub struct VizState {
    /// Store index of the dive under the pointer, recomputed every frame.
    pub hovered: Option<usize>,

    /// Id of the dive highlighted on the map while its detail is shown.
    pub selected_dive: Option<i64>,

    /// Full record shown in the detail modal.
    pub detail: Option<Dive>,

    /// Whether the detail modal is open.
    pub detail_open: bool,

    /// Detail fetch requested by a click, consumed by the update loop.
    pub pending_detail: Option<i64>,

    /// Blocking error notification, if a primary load failed.
    pub error: Option<String>,
}

impl VizState {
    /// Queues a detail fetch for the given dive id.
    pub fn request_detail(&mut self, dive_id: i64) {
        self.pending_detail = Some(dive_id);
    }

    /// Opens the detail modal and highlights the matching marker.
    pub fn open_detail(&mut self, dive: Dive) {
        self.selected_dive = Some(dive.id);
        self.detail = Some(dive);
        self.detail_open = true;
    }

    /// Closes the modal and removes the marker highlight.
    pub fn close_detail(&mut self) {
        self.detail_open = false;
        self.detail = None;
        self.selected_dive = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dive(id: i64) -> Dive {
        Dive {
            id,
            dive_number: 1,
            date: "2024-01-01".to_string(),
            location: "Test".to_string(),
            dive_site: "Test Site".to_string(),
            latitude: Some(0.0),
            longitude: Some(0.0),
            max_depth: None,
            duration: None,
            water_temp: None,
            visibility: None,
            notes: None,
        }
    }

    #[test]
    fn test_open_detail_selects_marker() {
        let mut viz = VizState::default();
        viz.open_detail(dive(42));

        assert!(viz.detail_open);
        assert_eq!(viz.selected_dive, Some(42));
    }

    #[test]
    fn test_close_detail_clears_highlight() {
        let mut viz = VizState::default();
        viz.open_detail(dive(42));
        viz.close_detail();

        assert!(!viz.detail_open);
        assert!(viz.detail.is_none());
        assert!(viz.selected_dive.is_none());
    }
}
