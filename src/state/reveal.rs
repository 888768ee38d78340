//! Marker reveal animation controller.
//!
//! Plays the timed reveal: one marker appears every fixed interval, each
//! accompanied by an expanding ring pulse. A single explicit state machine
//! advanced from the frame loop stands in for per-marker timers, so
//! tearing the view down cannot leave one running.

use std::time::Duration;

use web_time::Instant;

use crate::api::Dive;
use crate::geo::{PULSE_END_RADIUS, PULSE_START_RADIUS};

/// Delay between consecutive marker reveals.
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(500);
/// Cadence of pulse ring growth.
pub const PULSE_TICK: Duration = Duration::from_millis(30);

const PULSE_STEP: f32 = 1.0;

enum Phase {
    Idle,
    /// Waiting out the reveal delay before marker `index` appears.
    Revealing { index: usize, since: Instant },
    /// Marker `index` is revealed and its pulse ring is expanding.
    Pulsing {
        index: usize,
        radius: f32,
        revealed_at: Instant,
        last_tick: Instant,
    },
    Done,
}

/// Pulse ring parameters for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseRing {
    /// Store index of the marker being pulsed.
    pub index: usize,
    pub radius: f32,
}

/// Snapshot of the reveal animation for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealFrame {
    /// Number of leading store entries that may be drawn.
    pub visible: usize,
    /// Active pulse ring, if one is expanding this frame.
    pub pulse: Option<PulseRing>,
    /// Whether the sequence is still running.
    pub active: bool,
}

/// State machine sequencing the marker reveal animation.
pub struct RevealAnimator {
    phase: Phase,
    total: usize,
}

impl Default for RevealAnimator {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            total: 0,
        }
    }
}

impl RevealAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins the reveal sequence over `dive_count` store entries.
    pub fn start(&mut self, dive_count: usize, now: Instant) {
        self.total = dive_count;
        self.phase = if dive_count == 0 {
            Phase::Done
        } else {
            Phase::Revealing {
                index: 0,
                since: now,
            }
        };
    }

    /// Stops the sequence; all markers become visible immediately.
    pub fn cancel(&mut self) {
        self.phase = Phase::Done;
    }

    /// Advances the machine to `now` and returns the frame snapshot.
    ///
    /// Entries without coordinates are skipped: the index advances on the
    /// same cadence but no pulse plays for them.
    pub fn tick(&mut self, now: Instant, dives: &[Dive]) -> RevealFrame {
        loop {
            match self.phase {
                Phase::Idle | Phase::Done => break,

                Phase::Revealing { index, since } => {
                    if now.saturating_duration_since(since) < REVEAL_INTERVAL {
                        break;
                    }
                    let revealed_at = since + REVEAL_INTERVAL;
                    let has_coord = dives.get(index).and_then(|d| d.coord()).is_some();
                    self.phase = if has_coord {
                        Phase::Pulsing {
                            index,
                            radius: PULSE_START_RADIUS,
                            revealed_at,
                            last_tick: revealed_at,
                        }
                    } else {
                        self.advance(index, revealed_at)
                    };
                }

                Phase::Pulsing {
                    index,
                    ref mut radius,
                    revealed_at,
                    ref mut last_tick,
                } => {
                    let mut advanced = false;
                    while now.saturating_duration_since(*last_tick) >= PULSE_TICK {
                        *last_tick += PULSE_TICK;
                        *radius += PULSE_STEP;
                        if *radius >= PULSE_END_RADIUS {
                            advanced = true;
                            break;
                        }
                    }
                    if !advanced {
                        break;
                    }
                    self.phase = self.advance(index, revealed_at);
                }
            }
        }

        self.frame()
    }

    /// Transition after marker `index` finished (or was skipped), keeping
    /// the one-reveal-per-interval cadence anchored at `revealed_at`.
    fn advance(&self, index: usize, revealed_at: Instant) -> Phase {
        if index + 1 >= self.total {
            Phase::Done
        } else {
            Phase::Revealing {
                index: index + 1,
                since: revealed_at,
            }
        }
    }

    fn frame(&self) -> RevealFrame {
        match self.phase {
            Phase::Idle => RevealFrame::default(),
            Phase::Revealing { index, .. } => RevealFrame {
                visible: index,
                pulse: None,
                active: true,
            },
            Phase::Pulsing { index, radius, .. } => RevealFrame {
                visible: index + 1,
                pulse: Some(PulseRing { index, radius }),
                active: true,
            },
            Phase::Done => RevealFrame {
                visible: self.total,
                pulse: None,
                active: false,
            },
        }
    }

    /// How long until the machine next needs a repaint, if it is running.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        match self.phase {
            Phase::Idle | Phase::Done => None,
            Phase::Revealing { since, .. } => {
                Some((since + REVEAL_INTERVAL).saturating_duration_since(now))
            }
            Phase::Pulsing { last_tick, .. } => {
                Some((last_tick + PULSE_TICK).saturating_duration_since(now))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dive(id: i64, coords: Option<(f64, f64)>) -> Dive {
        Dive {
            id,
            dive_number: id,
            date: "2024-01-01".to_string(),
            location: "Test".to_string(),
            dive_site: "Test Site".to_string(),
            latitude: coords.map(|(lat, _)| lat),
            longitude: coords.map(|(_, lon)| lon),
            max_depth: None,
            duration: None,
            water_temp: None,
            visibility: None,
            notes: None,
        }
    }

    fn dives(n: i64) -> Vec<Dive> {
        (0..n).map(|i| dive(i, Some((10.0, 20.0)))).collect()
    }

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn test_pulse_only_after_reveal_delay() {
        let store = dives(3);
        let t0 = Instant::now();
        let mut animator = RevealAnimator::new();
        animator.start(store.len(), t0);

        let frame = animator.tick(at(t0, 499), &store);
        assert_eq!(frame.visible, 0);
        assert!(frame.pulse.is_none());

        let frame = animator.tick(at(t0, 500), &store);
        assert_eq!(frame.visible, 1);
        let pulse = frame.pulse.unwrap();
        assert_eq!(pulse.index, 0);
        assert_eq!(pulse.radius, 8.0);
    }

    #[test]
    fn test_pulse_grows_on_cadence() {
        let store = dives(1);
        let t0 = Instant::now();
        let mut animator = RevealAnimator::new();
        animator.start(store.len(), t0);

        let frame = animator.tick(at(t0, 530), &store);
        assert_eq!(frame.pulse.unwrap().radius, 9.0);

        let frame = animator.tick(at(t0, 500 + 11 * 30), &store);
        assert_eq!(frame.pulse.unwrap().radius, 19.0);

        // Twelfth tick reaches the end radius and the pulse stops.
        let frame = animator.tick(at(t0, 500 + 12 * 30), &store);
        assert!(frame.pulse.is_none());
        assert!(!frame.active);
        assert_eq!(frame.visible, 1);
    }

    #[test]
    fn test_index_advances_monotonically() {
        let store = dives(4);
        let t0 = Instant::now();
        let mut animator = RevealAnimator::new();
        animator.start(store.len(), t0);

        let mut last_visible = 0;
        let mut pulsed = Vec::new();
        for ms in (0..3000).step_by(10) {
            let frame = animator.tick(at(t0, ms), &store);
            assert!(frame.visible >= last_visible, "visible count regressed");
            last_visible = frame.visible;
            if let Some(pulse) = frame.pulse {
                if pulsed.last() != Some(&pulse.index) {
                    pulsed.push(pulse.index);
                }
            }
        }

        // Every present entry pulses exactly once, in order.
        assert_eq!(pulsed, vec![0, 1, 2, 3]);
        assert_eq!(last_visible, 4);
        assert!(!animator.tick(at(t0, 3000), &store).active);
    }

    #[test]
    fn test_reveal_cadence_is_fixed() {
        let store = dives(3);
        let t0 = Instant::now();
        let mut animator = RevealAnimator::new();
        animator.start(store.len(), t0);

        // Marker i reveals at t0 + (i+1) * 500ms.
        assert_eq!(animator.tick(at(t0, 999), &store).visible, 1);
        assert_eq!(animator.tick(at(t0, 1000), &store).visible, 2);
        assert_eq!(animator.tick(at(t0, 1499), &store).visible, 2);
        assert_eq!(animator.tick(at(t0, 1500), &store).visible, 3);
    }

    #[test]
    fn test_missing_coordinates_skipped() {
        let store = vec![
            dive(0, Some((10.0, 20.0))),
            dive(1, None),
            dive(2, Some((30.0, 40.0))),
        ];
        let t0 = Instant::now();
        let mut animator = RevealAnimator::new();
        animator.start(store.len(), t0);

        // Entry 1 has no coordinates: the index advances with no pulse.
        let frame = animator.tick(at(t0, 1000), &store);
        assert_eq!(frame.visible, 2);
        assert!(frame.pulse.is_none());

        // The cadence is undisturbed; entry 2 pulses at the usual time.
        let frame = animator.tick(at(t0, 1500), &store);
        assert_eq!(frame.pulse.unwrap().index, 2);
    }

    #[test]
    fn test_empty_store_completes_immediately() {
        let t0 = Instant::now();
        let mut animator = RevealAnimator::new();
        animator.start(0, t0);

        let frame = animator.tick(t0, &[]);
        assert_eq!(frame.visible, 0);
        assert!(!frame.active);
    }

    #[test]
    fn test_cancel_stops_sequence() {
        let store = dives(5);
        let t0 = Instant::now();
        let mut animator = RevealAnimator::new();
        animator.start(store.len(), t0);
        animator.tick(at(t0, 600), &store);

        animator.cancel();
        assert!(animator.next_deadline(at(t0, 700)).is_none());

        let frame = animator.tick(at(t0, 700), &store);
        assert_eq!(frame.visible, 5);
        assert!(frame.pulse.is_none());
        assert!(!frame.active);
    }

    #[test]
    fn test_next_deadline_tracks_phase() {
        let store = dives(2);
        let t0 = Instant::now();
        let mut animator = RevealAnimator::new();
        animator.start(store.len(), t0);

        animator.tick(at(t0, 100), &store);
        assert_eq!(
            animator.next_deadline(at(t0, 100)),
            Some(Duration::from_millis(400))
        );

        animator.tick(at(t0, 500), &store);
        assert_eq!(
            animator.next_deadline(at(t0, 500)),
            Some(Duration::from_millis(30))
        );
    }
}
