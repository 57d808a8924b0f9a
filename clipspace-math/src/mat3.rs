use crate::{scalar::Scalar, vec2::Vec2};

/// A 3x3 homogeneous transform for 2D rendering, stored as a flat row-major
/// array of nine scalars. Points transform as row vectors `(x, y, 1)`, so the
/// translation terms live at indices 6 and 7 and the array uploads verbatim
/// as a `mat3` uniform.
///
/// Two call forms cover every operation: value-returning constructors and
/// combinators always produce fresh storage, while the `set_*` methods
/// overwrite the receiver so a caller can reuse one matrix across frames.
/// Nothing here errors or panics; a singular input to [`Mat3::inverse`]
/// produces non-finite entries that propagate silently (see crate docs).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3(pub [Scalar; 9]);

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3([
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        0.0, 0.0, 1.0,
    ]);

    /// Returns the multiplicative identity.
    pub fn identity() -> Mat3 {
        Self::IDENTITY
    }

    /// A transform that adds `(tx, ty)` to a point.
    pub fn translation(tx: Scalar, ty: Scalar) -> Mat3 {
        Mat3([
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            tx, ty, 1.0,
        ])
    }

    /// Counter-clockwise rotation by `angle_radians`.
    pub fn rotation(angle_radians: Scalar) -> Mat3 {
        let c = angle_radians.cos();
        let s = angle_radians.sin();

        Mat3([
            c, -s, 0.0, //
            s, c, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    /// Independent x/y scale.
    pub fn scaling(sx: Scalar, sy: Scalar) -> Mat3 {
        Mat3([
            sx, 0.0, 0.0, //
            0.0, sy, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    /// Maps pixel space `[0,width] x [0,height]` (origin top-left, Y down)
    /// to clip space `[-1,1] x [-1,1]` (Y up). The negated Y scale term is
    /// what flips the axis: `(0,0)` lands on `(-1,1)` and `(width,height)`
    /// on `(1,-1)`. Callers depend on this flip; zero dimensions are not
    /// validated and produce non-finite entries.
    pub fn projection(width: Scalar, height: Scalar) -> Mat3 {
        Mat3([
            2.0 / width, 0.0, 0.0, //
            0.0, -2.0 / height, 0.0, //
            -1.0, 1.0, 1.0,
        ])
    }

    /// Computes the product that pre-composes `b` with `self`: applying the
    /// result to a point applies `b` first, then `self`. Written out
    /// index-by-index so the row-vector convention is explicit.
    pub fn multiply(&self, b: &Mat3) -> Mat3 {
        let a = &self.0;
        let b = &b.0;
        let a00 = a[0];
        let a01 = a[1];
        let a02 = a[2];
        let a10 = a[3];
        let a11 = a[4];
        let a12 = a[5];
        let a20 = a[6];
        let a21 = a[7];
        let a22 = a[8];
        let b00 = b[0];
        let b01 = b[1];
        let b02 = b[2];
        let b10 = b[3];
        let b11 = b[4];
        let b12 = b[5];
        let b20 = b[6];
        let b21 = b[7];
        let b22 = b[8];

        Mat3([
            b00 * a00 + b01 * a10 + b02 * a20,
            b00 * a01 + b01 * a11 + b02 * a21,
            b00 * a02 + b01 * a12 + b02 * a22,
            b10 * a00 + b11 * a10 + b12 * a20,
            b10 * a01 + b11 * a11 + b12 * a21,
            b10 * a02 + b11 * a12 + b12 * a22,
            b20 * a00 + b21 * a10 + b22 * a20,
            b20 * a01 + b21 * a11 + b22 * a21,
            b20 * a02 + b21 * a12 + b22 * a22,
        ])
    }

    /// Inverse via cofactor expansion. A zero determinant divides through to
    /// Infinity/NaN entries; no error is raised and nothing is clamped.
    /// Callers that need early detection can check [`Mat3::determinant`] or
    /// [`Mat3::is_finite`] on the result.
    pub fn inverse(&self) -> Mat3 {
        let m = &self.0;
        let m00 = m[0];
        let m01 = m[1];
        let m02 = m[2];
        let m10 = m[3];
        let m11 = m[4];
        let m12 = m[5];
        let m20 = m[6];
        let m21 = m[7];
        let m22 = m[8];

        let b01 = m22 * m11 - m12 * m21;
        let b11 = -m22 * m10 + m12 * m20;
        let b21 = m21 * m10 - m11 * m20;

        let det = m00 * b01 + m01 * b11 + m02 * b21;
        let inv_det = 1.0 / det;

        Mat3([
            b01 * inv_det,
            (-m22 * m01 + m02 * m21) * inv_det,
            (m12 * m01 - m02 * m11) * inv_det,
            b11 * inv_det,
            (m22 * m00 - m02 * m20) * inv_det,
            (-m12 * m00 + m02 * m10) * inv_det,
            b21 * inv_det,
            (-m21 * m00 + m01 * m20) * inv_det,
            (m11 * m00 - m01 * m10) * inv_det,
        ])
    }

    /// Post-multiplies a translation onto this transform: the translation
    /// applies to a point before `self` does.
    pub fn translate(&self, tx: Scalar, ty: Scalar) -> Mat3 {
        self.multiply(&Mat3::translation(tx, ty))
    }

    /// Post-multiplies a rotation onto this transform.
    pub fn rotate(&self, angle_radians: Scalar) -> Mat3 {
        self.multiply(&Mat3::rotation(angle_radians))
    }

    /// Post-multiplies a scale onto this transform.
    pub fn scale(&self, sx: Scalar, sy: Scalar) -> Mat3 {
        self.multiply(&Mat3::scaling(sx, sy))
    }

    /// Post-multiplies a pixel-to-clip projection onto this transform.
    pub fn project(&self, width: Scalar, height: Scalar) -> Mat3 {
        self.multiply(&Mat3::projection(width, height))
    }

    /// Applies the full homogeneous transform to a 2D point, including the
    /// perspective divide by the resulting `w`.
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        let m = &self.0;
        let Vec2 { x, y } = point;
        let d = x * m[2] + y * m[5] + m[8];
        Vec2::new(
            (x * m[0] + y * m[3] + m[6]) / d,
            (x * m[1] + y * m[4] + m[7]) / d,
        )
    }

    pub fn determinant(&self) -> Scalar {
        let m = &self.0;
        m[0] * (m[8] * m[4] - m[5] * m[7]) + m[1] * (-m[8] * m[3] + m[5] * m[6])
            + m[2] * (m[7] * m[3] - m[4] * m[6])
    }

    /// True when every entry is finite. Opt-in check for callers that want
    /// to catch a degenerate inverse or projection before uploading it.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    /// The flat row-major storage, suitable for `uniform_matrix3fv` uploads
    /// without reordering or transposition.
    pub fn as_slice(&self) -> &[Scalar] {
        &self.0
    }

    // In-place forms: each overwrites the receiver and returns it, letting a
    // render loop reuse one matrix instead of building fresh values.

    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    pub fn set_translation(&mut self, tx: Scalar, ty: Scalar) -> &mut Self {
        *self = Self::translation(tx, ty);
        self
    }

    pub fn set_rotation(&mut self, angle_radians: Scalar) -> &mut Self {
        *self = Self::rotation(angle_radians);
        self
    }

    pub fn set_scaling(&mut self, sx: Scalar, sy: Scalar) -> &mut Self {
        *self = Self::scaling(sx, sy);
        self
    }

    pub fn set_projection(&mut self, width: Scalar, height: Scalar) -> &mut Self {
        *self = Self::projection(width, height);
        self
    }

    pub fn set_multiply(&mut self, a: &Mat3, b: &Mat3) -> &mut Self {
        *self = a.multiply(b);
        self
    }

    pub fn set_inverse(&mut self, m: &Mat3) -> &mut Self {
        *self = m.inverse();
        self
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AsRef<[Scalar]> for Mat3 {
    fn as_ref(&self) -> &[Scalar] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::scalar::deg_to_rad;

    const EPSILON: Scalar = 1e-5;

    fn assert_mat3_eq(a: &Mat3, b: &Mat3) {
        for (x, y) in a.0.iter().zip(b.0.iter()) {
            assert_abs_diff_eq!(*x, *y, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_identity_is_multiplicative_identity() {
        let m = Mat3::projection(400.0, 300.0).translate(45.0, 150.0).rotate(0.7);

        assert_mat3_eq(&m.multiply(&Mat3::identity()), &m);
        assert_mat3_eq(&Mat3::identity().multiply(&m), &m);
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = Mat3::translation(12.0, -3.0).rotate(deg_to_rad(31.0)).scale(2.0, 0.5);

        assert_mat3_eq(&m.multiply(&m.inverse()), &Mat3::identity());
    }

    #[test]
    fn test_singular_matrix_inverse_is_not_finite() {
        // zero scale collapses a dimension, determinant is zero
        let m = Mat3::scaling(0.0, 1.0);

        assert_abs_diff_eq!(m.determinant(), 0.0, epsilon = EPSILON);
        assert!(!m.inverse().is_finite());
    }

    #[test]
    fn test_zero_dimension_projection_is_not_finite() {
        assert!(!Mat3::projection(0.0, 300.0).is_finite());
        assert!(!Mat3::projection(400.0, 0.0).is_finite());
    }

    #[test]
    fn test_rotation_round_trip_on_point() {
        let angle = deg_to_rad(73.0);
        let p = Vec2::new(5.0, -2.0);

        let rotated = Mat3::rotation(angle).transform_point(p);
        let restored = Mat3::rotation(-angle).transform_point(rotated);

        assert_abs_diff_eq!(restored.x, p.x, epsilon = EPSILON);
        assert_abs_diff_eq!(restored.y, p.y, epsilon = EPSILON);
    }

    #[test]
    fn test_translate_moves_origin() {
        let p = Mat3::identity().translate(7.0, -4.0).transform_point(Vec2::ZERO);

        assert_abs_diff_eq!(p.x, 7.0, epsilon = EPSILON);
        assert_abs_diff_eq!(p.y, -4.0, epsilon = EPSILON);
    }

    #[test]
    fn test_translation_applied_to_point() {
        let p = Mat3::translation(100.0, 150.0).transform_point(Vec2::new(10.0, 20.0));

        assert_abs_diff_eq!(p.x, 110.0, epsilon = EPSILON);
        assert_abs_diff_eq!(p.y, 170.0, epsilon = EPSILON);
    }

    #[test]
    fn test_projection_flips_y() {
        let projection = Mat3::projection(400.0, 300.0);

        let top_left = projection.transform_point(Vec2::ZERO);
        assert_abs_diff_eq!(top_left.x, -1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(top_left.y, 1.0, epsilon = EPSILON);

        let bottom_right = projection.transform_point(Vec2::new(400.0, 300.0));
        assert_abs_diff_eq!(bottom_right.x, 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(bottom_right.y, -1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_translate_and_rotate_do_not_commute() {
        let angle = deg_to_rad(30.0);
        let a = Mat3::identity().rotate(angle).translate(10.0, 0.0);
        let b = Mat3::identity().translate(10.0, 0.0).rotate(angle);

        let pa = a.transform_point(Vec2::new(1.0, 1.0));
        let pb = b.transform_point(Vec2::new(1.0, 1.0));
        assert!((pa.x - pb.x).abs() > 1e-3 || (pa.y - pb.y).abs() > 1e-3);
    }

    #[test]
    fn test_multiply_pre_composes_second_argument() {
        // translation applies before rotation: the point moves out along x,
        // then the whole thing rotates 90 degrees
        let angle = deg_to_rad(90.0);
        let m = Mat3::rotation(angle).multiply(&Mat3::translation(10.0, 0.0));
        let manual = Mat3::translation(10.0, 0.0)
            .transform_point(Vec2::ZERO);
        let composed = m.transform_point(Vec2::ZERO);
        let expected = Mat3::rotation(angle).transform_point(manual);

        assert_abs_diff_eq!(composed.x, expected.x, epsilon = EPSILON);
        assert_abs_diff_eq!(composed.y, expected.y, epsilon = EPSILON);
    }

    #[test]
    fn test_set_forms_match_value_forms() {
        let mut m = Mat3::identity();
        m.set_projection(400.0, 300.0);
        assert_mat3_eq(&m, &Mat3::projection(400.0, 300.0));

        let a = Mat3::rotation(0.4);
        let b = Mat3::translation(3.0, 4.0);
        let mut dst = Mat3::identity();
        dst.set_multiply(&a, &b);
        assert_mat3_eq(&dst, &a.multiply(&b));

        dst.set_inverse(&a);
        assert_mat3_eq(&dst, &a.inverse());
    }
}
