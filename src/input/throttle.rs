use egui::Pos2;

use crate::geometry;

/// Minimum pixel distance between forwarded samples unless configured otherwise
pub const DEFAULT_MIN_POINT_DISTANCE: f32 = 3.0;

/// Drops pointer samples that are too close to the last forwarded one.
///
/// Dropped samples are not lost entirely: the most recent one is kept as a
/// pending tail and handed back by [`PointThrottler::finish`], so the stroke
/// ends exactly where the pointer was released.
#[derive(Debug, Clone)]
pub struct PointThrottler {
    min_distance: f32,
    last_forwarded: Option<Pos2>,
    pending: Option<Pos2>,
}

impl Default for PointThrottler {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_POINT_DISTANCE)
    }
}

impl PointThrottler {
    pub fn new(min_distance: f32) -> Self {
        Self {
            min_distance: min_distance.max(0.0),
            last_forwarded: None,
            pending: None,
        }
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    /// Start a gesture. The seed point is delivered by the caller itself, so
    /// it is only recorded here as the reference for the next sample.
    pub fn begin(&mut self, seed: Pos2) {
        self.last_forwarded = Some(seed);
        self.pending = None;
    }

    pub fn is_active(&self) -> bool {
        self.last_forwarded.is_some()
    }

    /// Returns the sample if it should be forwarded
    pub fn accept(&mut self, point: Pos2) -> Option<Pos2> {
        let last = self.last_forwarded?;
        if geometry::distance(last, point) >= self.min_distance {
            self.last_forwarded = Some(point);
            self.pending = None;
            Some(point)
        } else {
            self.pending = Some(point);
            None
        }
    }

    /// End the gesture, returning the last held-back sample if there is one
    pub fn finish(&mut self) -> Option<Pos2> {
        self.last_forwarded = None;
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_accept_without_begin_is_ignored() {
        let mut throttler = PointThrottler::default();
        assert_eq!(throttler.accept(pos2(100.0, 100.0)), None);
        assert_eq!(throttler.finish(), None);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut throttler = PointThrottler::new(3.0);
        throttler.begin(pos2(0.0, 0.0));
        assert_eq!(throttler.accept(pos2(3.0, 0.0)), Some(pos2(3.0, 0.0)));
        assert_eq!(throttler.accept(pos2(4.0, 0.0)), None);
    }
}
