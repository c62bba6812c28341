//! Trajectory analysis and shot-outcome engine for basketball video.
//!
//! Consumes per-frame object-detection boxes (ball, hoop, person) from
//! an external detector and produces a structured shot record: stable
//! track identities, a segmented ball trajectory, a make/miss call by
//! rim-crossing interpolation, a corrected-arc overlay, and a 0-100
//! shot-quality score with feedback.
//!
//! The whole core is synchronous and single-threaded. Frame sequences
//! must be presented in non-decreasing timestamp order; this is a
//! precondition, not checked. [`tracker::ObjectTracker`] is the only
//! stateful component and requires single-writer discipline; everything
//! else is a pure function over its arguments and degrades to neutral
//! values (empty list, zero score, MISS) instead of failing.

pub mod analyzer;
pub mod bbox;
pub mod detection;
pub mod error;
pub mod frame;
pub mod frame_index;
pub mod math;
pub mod predictor;
pub mod quality;
pub mod segmenter;
pub mod tracker;
pub mod trajectory;

mod track;

pub use analyzer::{AnalyzerConfig, ShotAnalysis, ShotAnalyzer, ShotTier};
pub use bbox::BBox;
pub use detection::{Detection, Label, RawDetection};
pub use error::Error;
pub use frame::Frame;
pub use frame_index::FrameIndexCache;
pub use predictor::ShotOutcome;
pub use quality::ShotQualityResult;
pub use segmenter::SegmenterConfig;
pub use track::Track;
pub use tracker::{ObjectTracker, TrackerConfig};
pub use trajectory::TrajectoryPoint;
