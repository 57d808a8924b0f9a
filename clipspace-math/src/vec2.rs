use crate::scalar::{Scalar, NORMALIZE_EPSILON};

/// A 2D vector. Plain value type; every operation returns a fresh vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: Scalar,
    pub y: Scalar,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Vec2) -> Scalar {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> Scalar {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(self, other: Vec2) -> Scalar {
        (self - other).length()
    }

    /// Returns the unit vector in this direction, or [`Vec2::ZERO`] when the
    /// length is within epsilon of zero. The zero fallback is the one place
    /// the library guards against NaN propagation.
    pub fn normalize(self) -> Vec2 {
        let len = self.length();
        if len > NORMALIZE_EPSILON {
            Vec2::new(self.x / len, self.y / len)
        } else {
            Vec2::ZERO
        }
    }

    /// Reflects this incident vector about `normal`: `I - 2*dot(N, I)*N`.
    pub fn reflect(self, normal: Vec2) -> Vec2 {
        let d = normal.dot(self);
        Vec2::new(self.x - 2.0 * d * normal.x, self.y - 2.0 * d * normal.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_normalize_zero_vector_returns_zero() {
        let v = Vec2::new(0.0, 0.0).normalize();
        assert_eq!(v, Vec2::ZERO);

        // below the epsilon threshold counts as zero too
        let v = Vec2::new(1e-6, -1e-6).normalize();
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn test_normalize_unit_length() {
        let v = Vec2::new(3.0, 4.0).normalize();
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v.x, 0.6, epsilon = 1e-6);
        assert_abs_diff_eq!(v.y, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_reflect_about_y_axis() {
        // incident pointing down-right, normal pointing up
        let reflected = Vec2::new(1.0, -1.0).reflect(Vec2::new(0.0, 1.0));
        assert_abs_diff_eq!(reflected.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(reflected.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_dot_and_distance() {
        assert_abs_diff_eq!(Vec2::new(1.0, 2.0).dot(Vec2::new(3.0, 4.0)), 11.0, epsilon = 1e-6);
        assert_abs_diff_eq!(
            Vec2::new(1.0, 1.0).distance(Vec2::new(4.0, 5.0)),
            5.0,
            epsilon = 1e-6
        );
    }
}
