//! Animated summary statistic counters.
//!
//! The four stat tiles count up from zero to their fetched targets over a
//! fixed duration. Displayed values are a pure function of elapsed time:
//! linear interpolation rounded to the nearest integer, landing exactly on
//! the target at the end so floating-point increments can never over- or
//! undershoot.

use std::time::Duration;

use web_time::Instant;

use crate::api::DiveStats;

/// How long the count-up runs.
pub const COUNTER_DURATION: Duration = Duration::from_millis(1000);

/// Integer counter values for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterValues {
    pub total_dives: i64,
    pub total_dive_time: i64,
    pub max_depth: i64,
    pub locations: i64,
}

/// Drives the stat tile count-up animation.
#[derive(Default)]
pub struct StatCounters {
    started: Option<Instant>,
    targets: DiveStats,
}

impl StatCounters {
    /// Starts (or restarts) the count-up toward new targets.
    pub fn start(&mut self, targets: DiveStats, now: Instant) {
        self.targets = targets;
        self.started = Some(now);
    }

    /// Counter values at `now`. Before any fetch completes all four stay
    /// at zero.
    pub fn values(&self, now: Instant) -> CounterValues {
        let Some(started) = self.started else {
            return CounterValues::default();
        };

        let elapsed = now.saturating_duration_since(started);
        let progress = (elapsed.as_secs_f64() / COUNTER_DURATION.as_secs_f64()).min(1.0);

        CounterValues {
            total_dives: animated(self.targets.total_dives, progress),
            total_dive_time: animated(self.targets.total_dive_time, progress),
            max_depth: animated(self.targets.max_depth, progress),
            locations: animated(self.targets.locations, progress),
        }
    }

    /// Whether the count-up is still in progress (drives repaint requests).
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started
            .map(|started| now.saturating_duration_since(started) < COUNTER_DURATION)
            .unwrap_or(false)
    }
}

fn animated(target: f64, progress: f64) -> i64 {
    (target * progress).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total_dives: f64) -> DiveStats {
        DiveStats {
            total_dives,
            total_dive_time: 462.0,
            max_depth: 30.0,
            locations: 9.0,
        }
    }

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn test_lands_exactly_on_target() {
        let t0 = Instant::now();
        let mut counters = StatCounters::default();
        counters.start(stats(37.0), t0);

        assert_eq!(counters.values(at(t0, 1000)).total_dives, 37);
        // Stays pinned after the animation ends.
        assert_eq!(counters.values(at(t0, 5000)).total_dives, 37);
    }

    #[test]
    fn test_never_overshoots() {
        let t0 = Instant::now();
        let mut counters = StatCounters::default();
        counters.start(stats(37.0), t0);

        for ms in (0..2000).step_by(16) {
            let values = counters.values(at(t0, ms));
            assert!(values.total_dives <= 37);
            assert!(values.total_dive_time <= 462);
        }
    }

    #[test]
    fn test_starts_from_zero_and_counts_up() {
        let t0 = Instant::now();
        let mut counters = StatCounters::default();
        counters.start(stats(37.0), t0);

        assert_eq!(counters.values(t0).total_dives, 0);

        let mut last = 0;
        for ms in (0..=1000).step_by(16) {
            let value = counters.values(at(t0, ms)).total_dives;
            assert!(value >= last, "counter regressed");
            last = value;
        }
        assert!(counters.is_animating(at(t0, 999)));
        assert!(!counters.is_animating(at(t0, 1000)));
    }

    #[test]
    fn test_zero_before_start() {
        let counters = StatCounters::default();
        assert_eq!(counters.values(Instant::now()), CounterValues::default());
        assert!(!counters.is_animating(Instant::now()));
    }
}
