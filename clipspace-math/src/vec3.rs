use crate::scalar::{Scalar, NORMALIZE_EPSILON};

/// A 3D vector, used for points, directions, and camera parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> Scalar {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(self) -> Scalar {
        self.dot(self).sqrt()
    }

    pub fn distance(self, other: Vec3) -> Scalar {
        (self - other).length()
    }

    /// Unit vector, or [`Vec3::ZERO`] when the length is within epsilon of
    /// zero. Degenerate camera setups (eye == target, up parallel to the
    /// view direction) surface through this fallback rather than as NaN.
    pub fn normalize(self) -> Vec3 {
        let len = self.length();
        if len > NORMALIZE_EPSILON {
            Vec3::new(self.x / len, self.y / len, self.z / len)
        } else {
            Vec3::ZERO
        }
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_cross_follows_right_hand_rule() {
        let z = Vec3::new(1.0, 0.0, 0.0).cross(Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(z, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_cross_of_parallel_vectors_is_zero() {
        let v = Vec3::new(2.0, -1.0, 3.0);
        assert_eq!(v.cross(v), Vec3::ZERO);
    }

    #[test]
    fn test_normalize_zero_fallback() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    }

    #[test]
    fn test_normalize_unit_length() {
        let v = Vec3::new(1.0, 2.0, 2.0).normalize();
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-6);
    }
}
