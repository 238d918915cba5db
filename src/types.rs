use nalgebra as na;
use serde::{Deserialize, Serialize};

/// Dense N x 3 matrix, one row per landmark in input order.
pub type PointMatrix = na::MatrixXx3<f64>;

/// A single tracked hand keypoint as produced by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default = "default_visibility")]
    pub visibility: f64,
}

fn default_visibility() -> f64 {
    1.0
}

impl Landmark {
    pub fn new(id: u32, x: f64, y: f64, z: f64) -> Landmark {
        Landmark {
            id,
            x,
            y,
            z,
            visibility: 1.0,
        }
    }

    /// Builds a landmark from the `index`-th point of a detection.
    ///
    /// Hand detectors don't report visibility, so it is fixed at 1.0.
    pub fn from_detection(index: usize, p: [f64; 3]) -> Landmark {
        Landmark::new(index as u32, p[0], p[1], p[2])
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl AnchorPoint {
    pub fn new(x: f64, y: f64, z: f64) -> AnchorPoint {
        AnchorPoint { x, y, z }
    }

    pub fn to_na(&self) -> na::Vector3<f64> {
        na::Vector3::new(self.x, self.y, self.z)
    }
}

/// Body reference points used for anthropometric scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PoseAnchors {
    Full {
        nose: AnchorPoint,
        left_shoulder: AnchorPoint,
        right_shoulder: AnchorPoint,
    },
    /// Anchors were sent but a shoulder lacked `x` or `y`.
    Partial,
}

impl PoseAnchors {
    pub fn full(nose: AnchorPoint, left_shoulder: AnchorPoint, right_shoulder: AnchorPoint) -> Self {
        PoseAnchors::Full {
            nose,
            left_shoulder,
            right_shoulder,
        }
    }

    /// Euclidean distance between the shoulders, `None` unless both are known.
    pub fn shoulder_distance(&self) -> Option<f64> {
        match self {
            PoseAnchors::Full {
                left_shoulder,
                right_shoulder,
                ..
            } => Some((left_shoulder.to_na() - right_shoulder.to_na()).norm()),
            PoseAnchors::Partial => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<na::Vector3<f64>> for Centroid {
    fn from(v: na::Vector3<f64>) -> Self {
        Centroid {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// Output of the feature pipeline for one landmark set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub landmarks_norm: Vec<[f64; 3]>,
    /// Degrees, ordered index, middle, ring, pinky, thumb.
    pub angles: [f64; 5],
    pub palm_normal: [f64; 3],
    /// Mean of the raw (unnormalized) landmarks.
    pub centroid: Centroid,
}
