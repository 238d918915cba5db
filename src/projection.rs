use crate::types::{Landmark, PointMatrix};

/// Stacks landmark positions into an N x 3 matrix, keeping input order.
pub fn to_point_matrix(landmarks: &[Landmark]) -> PointMatrix {
    PointMatrix::from_fn(landmarks.len(), |r, c| match c {
        0 => landmarks[r].x,
        1 => landmarks[r].y,
        _ => landmarks[r].z,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_columns() {
        let landmarks = vec![
            Landmark::new(0, 1.0, 2.0, 3.0),
            Landmark::new(1, -4.0, 5.0, -6.0),
        ];
        let m = to_point_matrix(&landmarks);
        assert_eq!(m.nrows(), 2);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], -4.0);
        assert_eq!(m[(1, 1)], 5.0);
    }

    #[test]
    fn empty_input() {
        let m = to_point_matrix(&[]);
        assert_eq!(m.nrows(), 0);
    }
}
