pub mod batch;
pub mod detector;
pub mod error;
pub mod features;
pub mod geometry;
pub mod io;
pub mod normalize;
pub mod projection;
pub mod schema;
pub mod topology;
pub mod types;

pub use error::{FeatureError, Result};
pub use features::{FEATURE_VECTOR_LEN, finger_angles, process_landmarks};
pub use geometry::{EPSILON, angle_between_points, centroid, compute_palm_normal};
pub use normalize::{NormalizationMode, normalize_landmarks};
pub use projection::to_point_matrix;
pub use types::{AnchorPoint, Centroid, FeatureRecord, Landmark, PointMatrix, PoseAnchors};
