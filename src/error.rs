use thiserror::Error;

/// Failures of the analysis façade, raised only when no result can be
/// produced at all. Numeric degradation inside the pipeline never
/// surfaces here; it falls back to documented neutral values instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("no ball detections in the frame sequence")]
    NoBallTrajectory,

    #[error("no hoop supplied and none detected in the frame sequence")]
    NoHoop,

    #[error("no shot segment long enough to analyze")]
    NoShotSegment,
}
