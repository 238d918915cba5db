use nalgebra as na;

use crate::error::{FeatureError, Result};
use crate::topology::PALM_PLANE;
use crate::types::PointMatrix;

/// Added to every denominator in the pipeline.
pub const EPSILON: f64 = 1e-8;

/// Row `idx` of the matrix as a 3-vector.
pub fn point_at(points: &PointMatrix, idx: usize) -> Result<na::Vector3<f64>> {
    if idx >= points.nrows() {
        return Err(FeatureError::InvalidLandmarkSet {
            expected: idx + 1,
            found: points.nrows(),
        });
    }
    Ok(points.row(idx).transpose())
}

/// Interior angle a-b-c at vertex `b`, in degrees within [0, 180].
///
/// Zero-length arms give a cosine of 0 and therefore 90 degrees.
pub fn angle_between_points(
    a: &na::Vector3<f64>,
    b: &na::Vector3<f64>,
    c: &na::Vector3<f64>,
) -> f64 {
    let ba = a - b;
    let bc = c - b;
    let cos_angle = ba.dot(&bc) / (ba.norm() * bc.norm() + EPSILON);
    cos_angle.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Unit normal of the plane through wrist, index knuckle and pinky knuckle.
///
/// Expects raw detector coordinates. A collinear palm yields the zero vector.
pub fn compute_palm_normal(points: &PointMatrix) -> Result<na::Vector3<f64>> {
    let (wrist, index_mcp, pinky_mcp) = PALM_PLANE;
    let p0 = point_at(points, wrist)?;
    let p5 = point_at(points, index_mcp)?;
    let p17 = point_at(points, pinky_mcp)?;

    let normal = (p5 - p0).cross(&(p17 - p0));
    Ok(normal / (normal.norm() + EPSILON))
}

/// Column-wise mean of the points. Zero for an empty matrix.
pub fn centroid(points: &PointMatrix) -> na::Vector3<f64> {
    if points.nrows() == 0 {
        return na::Vector3::zeros();
    }
    na::Vector3::new(
        points.column(0).mean(),
        points.column(1).mean(),
        points.column(2).mean(),
    )
}
