use serde_derive::{Deserialize, Serialize};

use crate::bbox::BBox;

/// Object class, resolved once at ingestion time from the detector's
/// free-form label string. Downstream code matches on the enum instead
/// of re-scanning label substrings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Ball,
    Hoop,
    Person,
    Other(String),
}

impl Label {
    /// Case-insensitive substring match: "Basketball" -> Ball,
    /// "rim" / "Hoop" / "basket" -> Hoop, "person" -> Person.
    pub fn parse(raw: &str) -> Self {
        let lower = raw.to_lowercase();

        if lower.contains("ball") {
            Label::Ball
        } else if lower.contains("hoop") || lower.contains("rim") || lower.contains("basket") {
            Label::Hoop
        } else if lower.contains("person") {
            Label::Person
        } else {
            Label::Other(raw.to_string())
        }
    }

    #[inline(always)]
    pub fn is_ball(&self) -> bool {
        matches!(self, Label::Ball)
    }

    #[inline(always)]
    pub fn is_hoop(&self) -> bool {
        matches!(self, Label::Hoop)
    }
}

/// Output of the external detector for one object in one frame,
/// before any identity is assigned.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawDetection {
    pub bbox: BBox,
    pub confidence: f32,
    pub timestamp: f32,
    pub label: Label,
}

impl RawDetection {
    pub fn new(bbox: BBox, confidence: f32, timestamp: f32, label: &str) -> Self {
        Self {
            bbox,
            confidence,
            timestamp,
            label: Label::parse(label),
        }
    }
}

/// A detection with a stable track identity attached by the tracker.
/// Immutable after creation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Detection {
    pub track_id: u32,
    pub bbox: BBox,
    pub confidence: f32,
    pub timestamp: f32,
    pub label: Label,
}

impl Detection {
    pub fn from_raw(track_id: u32, raw: &RawDetection) -> Self {
        Self {
            track_id,
            bbox: raw.bbox,
            confidence: raw.confidence,
            timestamp: raw.timestamp,
            label: raw.label.clone(),
        }
    }
}
