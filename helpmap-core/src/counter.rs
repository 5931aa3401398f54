//! Animated statistic counters.
//!
//! A counter climbs from zero to its target over roughly two seconds of
//! 10 ms frames, showing the ceiling of the running total and landing exactly
//! on the target on the last frame.

use crate::motion::ObserverOptions;

/// Total animation length in milliseconds.
pub const COUNTER_DURATION_MS: u32 = 2000;
/// Length of one frame in milliseconds.
pub const COUNTER_FRAME_MS: u32 = 10;
/// Counters start once the stats row is 10% above the bottom edge.
pub const COUNTER_OBSERVER: ObserverOptions = ObserverOptions::REVEAL;

/// Frame-by-frame counter values.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    count: f64,
    finished: bool,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: u64) -> Self {
        Self::with_duration(target, COUNTER_DURATION_MS)
    }

    #[must_use]
    pub fn with_duration(target: u64, duration_ms: u32) -> Self {
        let frames = f64::from((duration_ms / COUNTER_FRAME_MS).max(1));
        #[allow(clippy::cast_precision_loss)]
        let increment = target as f64 / frames;
        Self {
            target,
            increment,
            count: 0.0,
            finished: false,
        }
    }

    #[must_use]
    pub const fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Iterator for CounterAnimation {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.finished {
            return None;
        }
        self.count += self.increment;
        #[allow(clippy::cast_precision_loss)]
        let target = self.target as f64;
        if self.count < target {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let shown = self.count.ceil() as u64;
            Some(shown)
        } else {
            self.finished = true;
            Some(self.target)
        }
    }
}

/// Parse a `data-target` attribute. Blank or malformed values yield `None`.
#[must_use]
pub fn parse_target(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_trigger_with_the_section_margin() {
        assert_eq!(COUNTER_OBSERVER.root_margin, "0px 0px -10% 0px");
        assert!(COUNTER_OBSERVER.threshold.abs() < f64::EPSILON);
    }

    #[test]
    fn climbs_monotonically_and_lands_on_target() {
        let frames: Vec<u64> = CounterAnimation::new(1500).collect();
        assert!(frames.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(frames.last().copied(), Some(1500));
        assert!(frames.len() >= 200 && frames.len() <= 201);
        assert_eq!(frames[0], 8); // ceil(7.5)
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let frames: Vec<u64> = CounterAnimation::new(0).collect();
        assert_eq!(frames, vec![0]);
    }

    #[test]
    fn short_duration_still_yields_target() {
        let mut anim = CounterAnimation::with_duration(5, 1);
        assert_eq!(anim.next(), Some(5));
        assert!(anim.is_finished());
        assert_eq!(anim.next(), None);
    }

    #[test]
    fn parses_attribute_values() {
        assert_eq!(parse_target(" 250 "), Some(250));
        assert_eq!(parse_target("abc"), None);
        assert_eq!(parse_target(""), None);
    }
}
