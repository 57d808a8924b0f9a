//! Scalar type selection and angle conversions.

/// Storage type for all matrices and vectors in this crate.
///
/// Defaults to `f32` to match WebGL uniform uploads; the `f64` cargo feature
/// switches every value the crate constructs to double precision. The choice
/// is fixed at compile time and never changes under a running program.
#[cfg(not(feature = "f64"))]
pub type Scalar = f32;

#[cfg(feature = "f64")]
pub type Scalar = f64;

/// Lengths at or below this normalize to the zero vector instead of
/// dividing by a near-zero magnitude.
pub const NORMALIZE_EPSILON: Scalar = 1e-5;

/// Converts degrees to radians.
pub fn deg_to_rad(degrees: Scalar) -> Scalar {
    degrees * std::f64::consts::PI as Scalar / 180.0
}

/// Converts radians to degrees.
pub fn rad_to_deg(radians: Scalar) -> Scalar {
    radians * 180.0 / std::f64::consts::PI as Scalar
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_degree_radian_round_trip() {
        assert_abs_diff_eq!(deg_to_rad(180.0), std::f64::consts::PI as Scalar, epsilon = 1e-6);
        assert_abs_diff_eq!(rad_to_deg(deg_to_rad(90.0)), 90.0, epsilon = 1e-4);
    }
}
