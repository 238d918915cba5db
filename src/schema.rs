//! Wire records exchanged with the capture client.
//!
//! Loosely typed anchors are resolved here so the numeric core only ever
//! sees a [`PoseAnchors`] value.

use serde::{Deserialize, Serialize};

use crate::error::{FeatureError, Result};
use crate::features::process_landmarks;
use crate::types::{AnchorPoint, FeatureRecord, Landmark, PoseAnchors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAnchor {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl RawAnchor {
    pub fn new(x: f64, y: f64) -> RawAnchor {
        RawAnchor {
            x: Some(x),
            y: Some(y),
            z: None,
        }
    }

    /// `None` when `x` or `y` is missing. `z` defaults to 0.
    pub fn to_point(&self) -> Option<AnchorPoint> {
        Some(AnchorPoint::new(self.x?, self.y?, self.z.unwrap_or(0.0)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPoseAnchors {
    #[serde(default)]
    pub nose: Option<RawAnchor>,
    #[serde(default)]
    pub left_shoulder: Option<RawAnchor>,
    #[serde(default)]
    pub right_shoulder: Option<RawAnchor>,
}

impl RawPoseAnchors {
    pub fn to_pose_anchors(&self) -> PoseAnchors {
        let resolve = |a: &Option<RawAnchor>| a.as_ref().and_then(RawAnchor::to_point);
        match (resolve(&self.left_shoulder), resolve(&self.right_shoulder)) {
            (Some(left_shoulder), Some(right_shoulder)) => PoseAnchors::full(
                resolve(&self.nose).unwrap_or_default(),
                left_shoulder,
                right_shoulder,
            ),
            _ => PoseAnchors::Partial,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapturePayload {
    pub sign_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub device_id: String,
    pub timestamp: String,
    #[serde(default)]
    pub landmarks: Option<Vec<Landmark>>,
    #[serde(default)]
    pub pose_anchors: Option<RawPoseAnchors>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum ExtractResponse {
    #[serde(rename = "OK")]
    Ok { features: FeatureRecord },
    #[serde(rename = "ERROR")]
    Error { detail: String },
}

/// Handles one capture: a payload without landmarks is rejected, a pipeline
/// failure is reported inside the response.
pub fn extract(payload: &CapturePayload) -> Result<ExtractResponse> {
    let landmarks = match &payload.landmarks {
        Some(l) if !l.is_empty() => l,
        _ => return Err(FeatureError::MissingLandmarks),
    };
    let anchors = payload
        .pose_anchors
        .as_ref()
        .map(RawPoseAnchors::to_pose_anchors);

    match process_landmarks(landmarks, anchors.as_ref()) {
        Ok(features) => Ok(ExtractResponse::Ok { features }),
        Err(e) => {
            log::error!("failed to process landmarks for sign {}: {}", payload.sign_id, e);
            Ok(ExtractResponse::Error {
                detail: e.to_string(),
            })
        }
    }
}
