use crate::bbox::BBox;

/// Persistent identity of one physical object across frames.
#[derive(Debug, Clone)]
pub struct Track {
    pub id: u32,
    pub last_bbox: BBox,
    pub frames_missing: u32,
}

impl Track {
    pub fn new(id: u32, bbox: BBox) -> Self {
        Self {
            id,
            last_bbox: bbox,
            frames_missing: 0,
        }
    }

    pub fn hit(&mut self, bbox: BBox) {
        self.last_bbox = bbox;
        self.frames_missing = 0;
    }
}
