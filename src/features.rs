use log::trace;

use crate::error::{FeatureError, Result};
use crate::geometry::{angle_between_points, centroid, compute_palm_normal, point_at};
use crate::normalize::normalize_landmarks;
use crate::projection::to_point_matrix;
use crate::topology::{ANGLE_ORDER, HAND_LANDMARK_COUNT};
use crate::types::{FeatureRecord, Landmark, PointMatrix, PoseAnchors};

/// Length of [`FeatureRecord::to_vector`] for a 21-point hand.
pub const FEATURE_VECTOR_LEN: usize = HAND_LANDMARK_COUNT * 3 + 5 + 3 + 3;

/// Bend angle of each finger in degrees, in [`ANGLE_ORDER`].
pub fn finger_angles(points: &PointMatrix) -> Result<[f64; 5]> {
    let mut angles = [0.0; 5];
    for (angle, finger) in angles.iter_mut().zip(ANGLE_ORDER) {
        let (a, b, c) = finger.angle_triplet();
        *angle = angle_between_points(
            &point_at(points, a)?,
            &point_at(points, b)?,
            &point_at(points, c)?,
        );
    }
    Ok(angles)
}

/// Runs the full pipeline on one hand.
///
/// Angles come from the normalized points; palm normal and centroid
/// are reported in the detector's raw coordinates.
pub fn process_landmarks(
    landmarks: &[Landmark],
    pose_anchors: Option<&PoseAnchors>,
) -> Result<FeatureRecord> {
    if landmarks.len() < HAND_LANDMARK_COUNT {
        return Err(FeatureError::InvalidLandmarkSet {
            expected: HAND_LANDMARK_COUNT,
            found: landmarks.len(),
        });
    }

    let raw = to_point_matrix(landmarks);
    let normalized = normalize_landmarks(&raw, pose_anchors);
    let angles = finger_angles(&normalized)?;
    let palm_normal = compute_palm_normal(&raw)?;
    let center = centroid(&raw);
    trace!("angles {:?}, palm normal {:?}", angles, palm_normal.as_slice());

    Ok(FeatureRecord {
        landmarks_norm: normalized
            .row_iter()
            .map(|r| [r[0], r[1], r[2]])
            .collect(),
        angles,
        palm_normal: [palm_normal.x, palm_normal.y, palm_normal.z],
        centroid: center.into(),
    })
}

impl FeatureRecord {
    /// Flattens the record into a classifier input:
    /// normalized landmarks row by row, angles, palm normal, centroid.
    pub fn to_vector(&self) -> Vec<f64> {
        let mut v = Vec::with_capacity(self.landmarks_norm.len() * 3 + 11);
        v.extend(self.landmarks_norm.iter().flatten());
        v.extend(self.angles);
        v.extend(self.palm_normal);
        v.extend([self.centroid.x, self.centroid.y, self.centroid.z]);
        v
    }
}
