use crate::frame::Frame;

/// Sorted timestamp index over a frame sequence for O(log n) seek
/// queries during scrubbing.
///
/// `build` copies the timestamps once; queries never touch the frame
/// list again until the next build. All queries on an unbuilt, cleared
/// or empty index return 0: callers routinely query mid-transition and
/// expect an index back, not an error.
#[derive(Debug, Default)]
pub struct FrameIndexCache {
    timestamps: Vec<f32>,
}

impl FrameIndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the index. Frames arrive in non-decreasing timestamp
    /// order (crate-wide precondition), so a plain copy is sorted.
    pub fn build(&mut self, frames: &[Frame]) {
        self.timestamps.clear();
        self.timestamps.extend(frames.iter().map(|f| f.timestamp));
    }

    pub fn clear(&mut self) {
        self.timestamps.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Largest index with timestamp <= t; 0 when every timestamp is
    /// greater than t.
    pub fn find_previous(&self, t: f32) -> usize {
        if self.timestamps.is_empty() {
            return 0;
        }

        let upper = self.timestamps.partition_point(|&ts| ts <= t);
        upper.saturating_sub(1)
    }

    /// Smallest index with timestamp >= t, clamped to the last index
    /// when t lies past the end.
    pub fn find_next(&self, t: f32) -> usize {
        if self.timestamps.is_empty() {
            return 0;
        }

        let lower = self.timestamps.partition_point(|&ts| ts < t);
        lower.min(self.timestamps.len() - 1)
    }

    /// Whichever of previous/next is nearer in time, the earlier index
    /// on an exact tie.
    pub fn find_closest(&self, t: f32) -> usize {
        if self.timestamps.is_empty() {
            return 0;
        }

        let prev = self.find_previous(t);
        let next = self.find_next(t);

        let d_prev = (t - self.timestamps[prev]).abs();
        let d_next = (self.timestamps[next] - t).abs();

        if d_prev <= d_next {
            prev
        } else {
            next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(timestamps: &[f32]) -> FrameIndexCache {
        let frames: Vec<Frame> = timestamps
            .iter()
            .enumerate()
            .map(|(i, &ts)| Frame::new(i as u32, ts, Vec::new()))
            .collect();

        let mut c = FrameIndexCache::new();
        c.build(&frames);
        c
    }

    #[test]
    fn unbuilt_and_cleared_return_zero() {
        let c = FrameIndexCache::new();
        assert_eq!(c.find_previous(1.0), 0);
        assert_eq!(c.find_next(1.0), 0);
        assert_eq!(c.find_closest(1.0), 0);

        let mut c = cache(&[0.0, 0.5, 1.0]);
        c.clear();
        assert_eq!(c.find_closest(0.5), 0);
    }

    #[test]
    fn previous_and_next_bracket_the_query() {
        let c = cache(&[0.0, 0.1, 0.2, 0.3, 0.4]);

        assert_eq!(c.find_previous(0.25), 2);
        assert_eq!(c.find_next(0.25), 3);

        // exact hit lands on the same index from both sides
        assert_eq!(c.find_previous(0.2), 2);
        assert_eq!(c.find_next(0.2), 2);

        // out of range clamps
        assert_eq!(c.find_previous(-1.0), 0);
        assert_eq!(c.find_next(-1.0), 0);
        assert_eq!(c.find_previous(9.0), 4);
        assert_eq!(c.find_next(9.0), 4);
    }

    #[test]
    fn previous_never_exceeds_next() {
        let c = cache(&[0.0, 0.04, 0.08, 0.12, 0.16, 0.2]);

        let mut t = -0.05;
        while t < 0.3 {
            assert!(c.find_previous(t) <= c.find_next(t), "t = {}", t);
            t += 0.005;
        }
    }

    #[test]
    fn closest_picks_smaller_delta_with_ties_earlier() {
        let c = cache(&[0.0, 0.1, 0.2]);

        assert_eq!(c.find_closest(0.04), 0);
        assert_eq!(c.find_closest(0.06), 1);
        // equidistant between index 0 and 1 -> earlier index
        assert_eq!(c.find_closest(0.05), 0);
        assert_eq!(c.find_closest(0.3), 2);
    }
}
