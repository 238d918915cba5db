use log::{debug, trace};

use crate::geometry::{EPSILON, centroid};
use crate::types::{PointMatrix, PoseAnchors};

/// How the centered landmarks are scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormalizationMode {
    /// Divide by the shoulder width.
    Anthropometric { shoulder_distance: f64 },
    /// Divide by the mean distance of the points from their centroid.
    CentroidScale,
}

impl NormalizationMode {
    /// Shoulder scaling needs both shoulders; anything less falls back to the hand's own extent.
    pub fn select(anchors: Option<&PoseAnchors>) -> NormalizationMode {
        match anchors.and_then(PoseAnchors::shoulder_distance) {
            Some(shoulder_distance) => NormalizationMode::Anthropometric { shoulder_distance },
            None => NormalizationMode::CentroidScale,
        }
    }
}

/// Recenters the points on their centroid and rescales them.
///
/// Not idempotent: a second pass in centroid mode re-centers at the origin
/// but divides by the new mean radius (about 1) plus epsilon.
pub fn normalize_landmarks(points: &PointMatrix, anchors: Option<&PoseAnchors>) -> PointMatrix {
    let mode = NormalizationMode::select(anchors);
    trace!("normalizing {} points with {:?}", points.nrows(), mode);
    normalize_with_mode(points, mode)
}

pub fn normalize_with_mode(points: &PointMatrix, mode: NormalizationMode) -> PointMatrix {
    let center = centroid(points).transpose();
    let mut centered = points.clone();
    for mut row in centered.row_iter_mut() {
        row -= center;
    }

    let spread = match mode {
        NormalizationMode::Anthropometric { shoulder_distance } => shoulder_distance,
        NormalizationMode::CentroidScale => mean_radius(&centered),
    };
    if spread < EPSILON {
        debug!("degenerate normalization scale {:e}", spread);
    }
    centered / (spread + EPSILON)
}

fn mean_radius(centered: &PointMatrix) -> f64 {
    if centered.nrows() == 0 {
        return 0.0;
    }
    centered.row_iter().map(|r| r.norm()).sum::<f64>() / centered.nrows() as f64
}
