use crate::error::Result;
use crate::features::process_landmarks;
use crate::types::{FeatureRecord, Landmark, PoseAnchors};

/// A hand tracker that turns a frame into 21 raw keypoints.
pub trait HandDetector {
    type Frame;

    /// Keypoints of the first detected hand, or `None` when no hand is visible.
    fn detect(&mut self, frame: &Self::Frame) -> Option<Vec<[f64; 3]>>;
}

/// Owns a detector for the lifetime of the process and feeds its
/// detections through the feature pipeline.
pub struct FrameExtractor<D: HandDetector> {
    detector: D,
}

impl<D: HandDetector> FrameExtractor<D> {
    pub fn new(detector: D) -> FrameExtractor<D> {
        FrameExtractor { detector }
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// `Ok(None)` when the frame contains no hand.
    pub fn extract(
        &mut self,
        frame: &D::Frame,
        pose_anchors: Option<&PoseAnchors>,
    ) -> Result<Option<FeatureRecord>> {
        let Some(points) = self.detector.detect(frame) else {
            log::trace!("no hand detected");
            return Ok(None);
        };
        let landmarks: Vec<Landmark> = points
            .into_iter()
            .enumerate()
            .map(|(i, p)| Landmark::from_detection(i, p))
            .collect();
        process_landmarks(&landmarks, pose_anchors).map(Some)
    }
}
