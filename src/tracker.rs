use nalgebra as na;
use tracing::debug;

use crate::detection::{Detection, RawDetection};
use crate::track::Track;

#[derive(Debug, Clone, Copy)]
pub struct TrackerConfig {
    /// Maximum center-to-center distance, in pixels, for a detection to
    /// claim an existing track.
    pub max_distance: f32,
    /// Consecutive frames a track may go unmatched before eviction.
    pub max_frames_missing: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_distance: 100.0,
            max_frames_missing: 10,
        }
    }
}

/// Greedy nearest-neighbor multi-object tracker.
///
/// The track table is a `Vec`, so iteration order is insertion order and
/// nearest-match ties resolve deterministically to the oldest track.
/// Evicted ids are never reassigned within one tracker's lifetime: a
/// re-appearing object gets a fresh identity instead of a guessed one.
///
/// The only stateful component of the crate. Frames must be delivered
/// in order by a single writer; this is a precondition, not checked.
pub struct ObjectTracker {
    config: TrackerConfig,
    tracks: Vec<Track>,
    next_id: u32,
}

impl ObjectTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            tracks: Vec::new(),
            next_id: 1,
        }
    }

    /// Assign track ids to one frame's detections.
    ///
    /// Emits exactly one `Detection` per input, in input order. Each
    /// track is claimed by at most one detection per frame; unmatched
    /// tracks age and are evicted past the missing-frame budget.
    pub fn update(&mut self, detections: &[RawDetection]) -> Vec<Detection> {
        let mut claimed = vec![false; self.tracks.len()];
        let mut out = Vec::with_capacity(detections.len());

        for det in detections {
            let center = det.bbox.center();

            match self.nearest_track(&center, &claimed) {
                Some(idx) => {
                    claimed[idx] = true;
                    self.tracks[idx].hit(det.bbox);
                    out.push(Detection::from_raw(self.tracks[idx].id, det));
                }
                None => {
                    let id = self.next_id;
                    self.next_id += 1;

                    debug!(id, x = center.x, y = center.y, "new track");
                    self.tracks.push(Track::new(id, det.bbox));
                    claimed.push(true);
                    out.push(Detection::from_raw(id, det));
                }
            }
        }

        for (track, was_claimed) in self.tracks.iter_mut().zip(claimed.iter()) {
            if !was_claimed {
                track.frames_missing += 1;
            }
        }

        let budget = self.config.max_frames_missing;
        self.tracks.retain(|t| {
            if t.frames_missing > budget {
                debug!(id = t.id, "track evicted");
                false
            } else {
                true
            }
        });

        out
    }

    /// Index of the nearest unclaimed track within `max_distance`.
    /// Strict `<` keeps the first (oldest) track on exact ties.
    fn nearest_track(&self, center: &na::Point2<f32>, claimed: &[bool]) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;

        for (idx, track) in self.tracks.iter().enumerate() {
            if claimed[idx] {
                continue;
            }

            let d = na::distance(&track.last_bbox.center(), center);
            if d > self.config.max_distance {
                continue;
            }

            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((idx, d)),
            }
        }

        best.map(|(idx, _)| idx)
    }

    /// Live tracks, oldest first.
    #[inline]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

impl Default for ObjectTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}
