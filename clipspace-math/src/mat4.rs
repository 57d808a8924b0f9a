use crate::{scalar::Scalar, vec3::Vec3};

/// A 4x4 homogeneous transform for 3D rendering, stored as a flat row-major
/// array of sixteen scalars. Structurally [`Mat3`](crate::Mat3) one dimension
/// higher: points transform as row vectors `(x, y, z, 1)`, translation lives
/// at indices 12/13/14, and the array uploads verbatim as a `mat4` uniform.
///
/// The composition, storage-reuse, and silent-degeneracy contracts are the
/// same as Mat3's: `a.multiply(b)` applies `b` first, `set_*` methods
/// overwrite the receiver, and singular or out-of-range inputs produce
/// non-finite entries instead of errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4(pub [Scalar; 16]);

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    pub fn identity() -> Mat4 {
        Self::IDENTITY
    }

    /// A transform that adds `(tx, ty, tz)` to a point.
    pub fn translation(tx: Scalar, ty: Scalar, tz: Scalar) -> Mat4 {
        Mat4([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            tx, ty, tz, 1.0,
        ])
    }

    /// Rotation about the X axis.
    pub fn x_rotation(angle_radians: Scalar) -> Mat4 {
        let c = angle_radians.cos();
        let s = angle_radians.sin();

        Mat4([
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, s, 0.0, //
            0.0, -s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation about the Y axis.
    pub fn y_rotation(angle_radians: Scalar) -> Mat4 {
        let c = angle_radians.cos();
        let s = angle_radians.sin();

        Mat4([
            c, 0.0, -s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation about the Z axis.
    pub fn z_rotation(angle_radians: Scalar) -> Mat4 {
        let c = angle_radians.cos();
        let s = angle_radians.sin();

        Mat4([
            c, s, 0.0, 0.0, //
            -s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Independent x/y/z scale.
    pub fn scaling(sx: Scalar, sy: Scalar, sz: Scalar) -> Mat4 {
        Mat4([
            sx, 0.0, 0.0, 0.0, //
            0.0, sy, 0.0, 0.0, //
            0.0, 0.0, sz, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Maps a `width x height x depth` pixel-space box into clip space with
    /// Y flipped, the 3D analogue of `Mat3::projection`: `(0,0)` lands on
    /// `(-1,1)` in XY. Z is scaled by `2/depth` with no offset, so
    /// `[-depth/2, depth/2]` maps to `[-1,1]`; the consumer's vertex stage
    /// pairs this with a `u_fudge_factor` divide rather than a true
    /// perspective matrix. Dimensions are not validated.
    pub fn projection(width: Scalar, height: Scalar, depth: Scalar) -> Mat4 {
        Mat4([
            2.0 / width, 0.0, 0.0, 0.0, //
            0.0, -2.0 / height, 0.0, 0.0, //
            0.0, 0.0, 2.0 / depth, 0.0, //
            -1.0, 1.0, 0.0, 1.0,
        ])
    }

    /// Orthographic projection of the box bounded by the six planes into
    /// clip space.
    pub fn orthographic(
        left: Scalar,
        right: Scalar,
        bottom: Scalar,
        top: Scalar,
        near: Scalar,
        far: Scalar,
    ) -> Mat4 {
        Mat4([
            2.0 / (right - left), 0.0, 0.0, 0.0, //
            0.0, 2.0 / (top - bottom), 0.0, 0.0, //
            0.0, 0.0, 2.0 / (near - far), 0.0, //
            (left + right) / (left - right),
            (bottom + top) / (bottom - top),
            (near + far) / (near - far),
            1.0,
        ])
    }

    /// Standard perspective projection. The near plane maps to `z/w = -1`
    /// and the far plane to `z/w = 1`. Degenerate when `near == far` or
    /// `near <= 0`; as everywhere else, the failure is silent non-finite
    /// (or sign-inverted) entries, not an error.
    pub fn perspective(
        field_of_view_radians: Scalar,
        aspect: Scalar,
        near: Scalar,
        far: Scalar,
    ) -> Mat4 {
        let f = (std::f64::consts::FRAC_PI_2 as Scalar - 0.5 * field_of_view_radians).tan();
        let range_inv = 1.0 / (near - far);

        Mat4([
            f / aspect, 0.0, 0.0, 0.0, //
            0.0, f, 0.0, 0.0, //
            0.0, 0.0, (near + far) * range_inv, -1.0, //
            0.0, 0.0, near * far * range_inv * 2.0, 0.0,
        ])
    }

    /// Builds a camera-orientation matrix: the camera sits at
    /// `camera_position` with its -Z axis pointing at `target`. Invert the
    /// result to get a view matrix. When the camera coincides with the
    /// target, or `up` is parallel to the view direction, the zero-vector
    /// normalize fallback produces a degenerate (rank-deficient) matrix.
    pub fn look_at(camera_position: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let z_axis = (camera_position - target).normalize();
        let x_axis = up.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis).normalize();

        Mat4([
            x_axis.x, x_axis.y, x_axis.z, 0.0, //
            y_axis.x, y_axis.y, y_axis.z, 0.0, //
            z_axis.x, z_axis.y, z_axis.z, 0.0, //
            camera_position.x, camera_position.y, camera_position.z, 1.0,
        ])
    }

    /// Computes the product that pre-composes `b` with `self`; same
    /// contract as `Mat3::multiply`, one dimension higher.
    pub fn multiply(&self, b: &Mat4) -> Mat4 {
        let a = &self.0;
        let b = &b.0;
        let mut dst = [0.0; 16];

        for row in 0..4 {
            let b0 = b[row * 4];
            let b1 = b[row * 4 + 1];
            let b2 = b[row * 4 + 2];
            let b3 = b[row * 4 + 3];
            for col in 0..4 {
                dst[row * 4 + col] =
                    b0 * a[col] + b1 * a[4 + col] + b2 * a[8 + col] + b3 * a[12 + col];
            }
        }

        Mat4(dst)
    }

    /// Inverse via the cofactor/adjugate method. A zero determinant divides
    /// through to Infinity/NaN entries; check [`Mat4::determinant`] or
    /// [`Mat4::is_finite`] if early detection is needed.
    pub fn inverse(&self) -> Mat4 {
        let m = &self.0;
        let m00 = m[0];
        let m01 = m[1];
        let m02 = m[2];
        let m03 = m[3];
        let m10 = m[4];
        let m11 = m[5];
        let m12 = m[6];
        let m13 = m[7];
        let m20 = m[8];
        let m21 = m[9];
        let m22 = m[10];
        let m23 = m[11];
        let m30 = m[12];
        let m31 = m[13];
        let m32 = m[14];
        let m33 = m[15];

        let tmp_0 = m22 * m33;
        let tmp_1 = m32 * m23;
        let tmp_2 = m12 * m33;
        let tmp_3 = m32 * m13;
        let tmp_4 = m12 * m23;
        let tmp_5 = m22 * m13;
        let tmp_6 = m02 * m33;
        let tmp_7 = m32 * m03;
        let tmp_8 = m02 * m23;
        let tmp_9 = m22 * m03;
        let tmp_10 = m02 * m13;
        let tmp_11 = m12 * m03;
        let tmp_12 = m20 * m31;
        let tmp_13 = m30 * m21;
        let tmp_14 = m10 * m31;
        let tmp_15 = m30 * m11;
        let tmp_16 = m10 * m21;
        let tmp_17 = m20 * m11;
        let tmp_18 = m00 * m31;
        let tmp_19 = m30 * m01;
        let tmp_20 = m00 * m21;
        let tmp_21 = m20 * m01;
        let tmp_22 = m00 * m11;
        let tmp_23 = m10 * m01;

        let t0 =
            (tmp_0 * m11 + tmp_3 * m21 + tmp_4 * m31) - (tmp_1 * m11 + tmp_2 * m21 + tmp_5 * m31);
        let t1 =
            (tmp_1 * m01 + tmp_6 * m21 + tmp_9 * m31) - (tmp_0 * m01 + tmp_7 * m21 + tmp_8 * m31);
        let t2 =
            (tmp_2 * m01 + tmp_7 * m11 + tmp_10 * m31) - (tmp_3 * m01 + tmp_6 * m11 + tmp_11 * m31);
        let t3 =
            (tmp_5 * m01 + tmp_8 * m11 + tmp_11 * m21) - (tmp_4 * m01 + tmp_9 * m11 + tmp_10 * m21);

        let d = 1.0 / (m00 * t0 + m10 * t1 + m20 * t2 + m30 * t3);

        Mat4([
            d * t0,
            d * t1,
            d * t2,
            d * t3,
            d * ((tmp_1 * m10 + tmp_2 * m20 + tmp_5 * m30)
                - (tmp_0 * m10 + tmp_3 * m20 + tmp_4 * m30)),
            d * ((tmp_0 * m00 + tmp_7 * m20 + tmp_8 * m30)
                - (tmp_1 * m00 + tmp_6 * m20 + tmp_9 * m30)),
            d * ((tmp_3 * m00 + tmp_6 * m10 + tmp_11 * m30)
                - (tmp_2 * m00 + tmp_7 * m10 + tmp_10 * m30)),
            d * ((tmp_4 * m00 + tmp_9 * m10 + tmp_10 * m20)
                - (tmp_5 * m00 + tmp_8 * m10 + tmp_11 * m20)),
            d * ((tmp_12 * m13 + tmp_15 * m23 + tmp_16 * m33)
                - (tmp_13 * m13 + tmp_14 * m23 + tmp_17 * m33)),
            d * ((tmp_13 * m03 + tmp_18 * m23 + tmp_21 * m33)
                - (tmp_12 * m03 + tmp_19 * m23 + tmp_20 * m33)),
            d * ((tmp_14 * m03 + tmp_19 * m13 + tmp_22 * m33)
                - (tmp_15 * m03 + tmp_18 * m13 + tmp_23 * m33)),
            d * ((tmp_17 * m03 + tmp_20 * m13 + tmp_23 * m23)
                - (tmp_16 * m03 + tmp_21 * m13 + tmp_22 * m23)),
            d * ((tmp_14 * m22 + tmp_17 * m32 + tmp_13 * m12)
                - (tmp_16 * m32 + tmp_12 * m12 + tmp_15 * m22)),
            d * ((tmp_20 * m32 + tmp_12 * m02 + tmp_19 * m22)
                - (tmp_18 * m22 + tmp_21 * m32 + tmp_13 * m02)),
            d * ((tmp_18 * m12 + tmp_23 * m32 + tmp_15 * m02)
                - (tmp_22 * m32 + tmp_14 * m02 + tmp_19 * m12)),
            d * ((tmp_22 * m22 + tmp_16 * m02 + tmp_21 * m12)
                - (tmp_20 * m12 + tmp_23 * m22 + tmp_17 * m02)),
        ])
    }

    pub fn transpose(&self) -> Mat4 {
        let m = &self.0;
        Mat4([
            m[0], m[4], m[8], m[12], //
            m[1], m[5], m[9], m[13], //
            m[2], m[6], m[10], m[14], //
            m[3], m[7], m[11], m[15],
        ])
    }

    /// Post-multiplies a translation onto this transform.
    pub fn translate(&self, tx: Scalar, ty: Scalar, tz: Scalar) -> Mat4 {
        self.multiply(&Mat4::translation(tx, ty, tz))
    }

    /// Post-multiplies an X-axis rotation onto this transform.
    pub fn x_rotate(&self, angle_radians: Scalar) -> Mat4 {
        self.multiply(&Mat4::x_rotation(angle_radians))
    }

    /// Post-multiplies a Y-axis rotation onto this transform.
    pub fn y_rotate(&self, angle_radians: Scalar) -> Mat4 {
        self.multiply(&Mat4::y_rotation(angle_radians))
    }

    /// Post-multiplies a Z-axis rotation onto this transform.
    pub fn z_rotate(&self, angle_radians: Scalar) -> Mat4 {
        self.multiply(&Mat4::z_rotation(angle_radians))
    }

    /// Post-multiplies a scale onto this transform.
    pub fn scale(&self, sx: Scalar, sy: Scalar, sz: Scalar) -> Mat4 {
        self.multiply(&Mat4::scaling(sx, sy, sz))
    }

    /// Applies the full transform to a point, including the perspective
    /// divide by the resulting `w`.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let m = &self.0;
        let Vec3 { x, y, z } = point;
        let d = x * m[3] + y * m[7] + z * m[11] + m[15];
        Vec3::new(
            (x * m[0] + y * m[4] + z * m[8] + m[12]) / d,
            (x * m[1] + y * m[5] + z * m[9] + m[13]) / d,
            (x * m[2] + y * m[6] + z * m[10] + m[14]) / d,
        )
    }

    /// Applies the transform to a direction vector (`w = 0`): rotation and
    /// scale only, translation ignored, no divide.
    pub fn transform_direction(&self, direction: Vec3) -> Vec3 {
        let m = &self.0;
        let Vec3 { x, y, z } = direction;
        Vec3::new(
            x * m[0] + y * m[4] + z * m[8],
            x * m[1] + y * m[5] + z * m[9],
            x * m[2] + y * m[6] + z * m[10],
        )
    }

    /// Applies the inverse-transpose of the transform to a surface normal,
    /// which keeps normals perpendicular under non-uniform scaling. The
    /// result is not re-normalized.
    pub fn transform_normal(&self, normal: Vec3) -> Vec3 {
        let mi = self.inverse().0;
        let Vec3 { x, y, z } = normal;
        Vec3::new(
            x * mi[0] + y * mi[1] + z * mi[2],
            x * mi[4] + y * mi[5] + z * mi[6],
            x * mi[8] + y * mi[9] + z * mi[10],
        )
    }

    pub fn determinant(&self) -> Scalar {
        let m = &self.0;
        let (m00, m01, m02, m03) = (m[0], m[1], m[2], m[3]);
        let (m10, m11, m12, m13) = (m[4], m[5], m[6], m[7]);
        let (m20, m21, m22, m23) = (m[8], m[9], m[10], m[11]);
        let (m30, m31, m32, m33) = (m[12], m[13], m[14], m[15]);

        (m00 * m11 - m01 * m10) * (m22 * m33 - m23 * m32)
            - (m00 * m12 - m02 * m10) * (m21 * m33 - m23 * m31)
            + (m00 * m13 - m03 * m10) * (m21 * m32 - m22 * m31)
            + (m01 * m12 - m02 * m11) * (m20 * m33 - m23 * m30)
            - (m01 * m13 - m03 * m11) * (m20 * m32 - m22 * m30)
            + (m02 * m13 - m03 * m12) * (m20 * m31 - m21 * m30)
    }

    /// True when every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    /// The flat row-major storage, suitable for `uniform_matrix4fv` uploads
    /// without reordering or transposition.
    pub fn as_slice(&self) -> &[Scalar] {
        &self.0
    }

    // In-place forms, mirroring Mat3.

    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    pub fn set_translation(&mut self, tx: Scalar, ty: Scalar, tz: Scalar) -> &mut Self {
        *self = Self::translation(tx, ty, tz);
        self
    }

    pub fn set_x_rotation(&mut self, angle_radians: Scalar) -> &mut Self {
        *self = Self::x_rotation(angle_radians);
        self
    }

    pub fn set_y_rotation(&mut self, angle_radians: Scalar) -> &mut Self {
        *self = Self::y_rotation(angle_radians);
        self
    }

    pub fn set_z_rotation(&mut self, angle_radians: Scalar) -> &mut Self {
        *self = Self::z_rotation(angle_radians);
        self
    }

    pub fn set_scaling(&mut self, sx: Scalar, sy: Scalar, sz: Scalar) -> &mut Self {
        *self = Self::scaling(sx, sy, sz);
        self
    }

    pub fn set_projection(&mut self, width: Scalar, height: Scalar, depth: Scalar) -> &mut Self {
        *self = Self::projection(width, height, depth);
        self
    }

    pub fn set_perspective(
        &mut self,
        field_of_view_radians: Scalar,
        aspect: Scalar,
        near: Scalar,
        far: Scalar,
    ) -> &mut Self {
        *self = Self::perspective(field_of_view_radians, aspect, near, far);
        self
    }

    pub fn set_look_at(&mut self, camera_position: Vec3, target: Vec3, up: Vec3) -> &mut Self {
        *self = Self::look_at(camera_position, target, up);
        self
    }

    pub fn set_multiply(&mut self, a: &Mat4, b: &Mat4) -> &mut Self {
        *self = a.multiply(b);
        self
    }

    pub fn set_inverse(&mut self, m: &Mat4) -> &mut Self {
        *self = m.inverse();
        self
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AsRef<[Scalar]> for Mat4 {
    fn as_ref(&self) -> &[Scalar] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::scalar::deg_to_rad;

    const EPSILON: Scalar = 1e-4;

    fn assert_mat4_eq(a: &Mat4, b: &Mat4) {
        for (x, y) in a.0.iter().zip(b.0.iter()) {
            assert_abs_diff_eq!(*x, *y, epsilon = EPSILON);
        }
    }

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = EPSILON);
        assert_abs_diff_eq!(a.y, b.y, epsilon = EPSILON);
        assert_abs_diff_eq!(a.z, b.z, epsilon = EPSILON);
    }

    #[test]
    fn test_identity_is_multiplicative_identity() {
        let m = Mat4::projection(400.0, 300.0, 400.0)
            .translate(45.0, 150.0, 126.0)
            .y_rotate(0.3);

        assert_mat4_eq(&m.multiply(&Mat4::identity()), &m);
        assert_mat4_eq(&Mat4::identity().multiply(&m), &m);
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = Mat4::translation(5.0, -2.0, 9.0)
            .x_rotate(deg_to_rad(20.0))
            .y_rotate(deg_to_rad(-65.0))
            .scale(1.5, 2.0, 0.25);

        assert_mat4_eq(&m.multiply(&m.inverse()), &Mat4::identity());
    }

    #[test]
    fn test_singular_matrix_inverse_is_not_finite() {
        let m = Mat4::scaling(1.0, 0.0, 1.0);

        assert_abs_diff_eq!(m.determinant(), 0.0, epsilon = EPSILON);
        assert!(!m.inverse().is_finite());
    }

    #[test]
    fn test_translate_moves_origin() {
        let p = Mat4::identity()
            .translate(3.0, -8.0, 12.0)
            .transform_point(Vec3::ZERO);

        assert_vec3_eq(p, Vec3::new(3.0, -8.0, 12.0));
    }

    #[test]
    fn test_projection_flips_y() {
        let projection = Mat4::projection(400.0, 300.0, 400.0);

        let top_left = projection.transform_point(Vec3::ZERO);
        assert_vec3_eq(top_left, Vec3::new(-1.0, 1.0, 0.0));

        let bottom_right = projection.transform_point(Vec3::new(400.0, 300.0, 0.0));
        assert_vec3_eq(bottom_right, Vec3::new(1.0, -1.0, 0.0));
    }

    #[test]
    fn test_zero_dimension_projection_is_not_finite() {
        assert!(!Mat4::projection(0.0, 300.0, 400.0).is_finite());
        assert!(!Mat4::projection(400.0, 300.0, 0.0).is_finite());
    }

    #[test]
    fn test_orthographic_maps_box_corners() {
        let m = Mat4::orthographic(0.0, 400.0, 300.0, 0.0, -1.0, 1.0);

        // same Y-flip contract as projection: top-left pixel to (-1, 1)
        let top_left = m.transform_point(Vec3::ZERO);
        assert_vec3_eq(top_left, Vec3::new(-1.0, 1.0, 0.0));

        let bottom_right = m.transform_point(Vec3::new(400.0, 300.0, 0.0));
        assert_vec3_eq(bottom_right, Vec3::new(1.0, -1.0, 0.0));
    }

    #[test]
    fn test_zero_x_rotation_leaves_composition_unchanged() {
        // the worked scene: projection, translate, then a no-op X rotation
        let base = Mat4::projection(400.0, 300.0, 400.0).translate(45.0, 150.0, 126.0);
        let rotated = base.x_rotate(0.0);

        assert_mat4_eq(&rotated, &base);
    }

    #[test]
    fn test_axis_rotation_round_trips() {
        let angle = deg_to_rad(40.0);
        let p = Vec3::new(1.0, 2.0, 3.0);

        for (rot, inv) in [
            (Mat4::x_rotation(angle), Mat4::x_rotation(-angle)),
            (Mat4::y_rotation(angle), Mat4::y_rotation(-angle)),
            (Mat4::z_rotation(angle), Mat4::z_rotation(-angle)),
        ] {
            assert_vec3_eq(inv.transform_point(rot.transform_point(p)), p);
        }
    }

    #[test]
    fn test_translate_and_rotate_do_not_commute() {
        let angle = deg_to_rad(45.0);
        let a = Mat4::identity().y_rotate(angle).translate(10.0, 0.0, 0.0);
        let b = Mat4::identity().translate(10.0, 0.0, 0.0).y_rotate(angle);

        let pa = a.transform_point(Vec3::ZERO);
        let pb = b.transform_point(Vec3::ZERO);
        assert!(pa.distance(pb) > 1e-3);
    }

    #[test]
    fn test_perspective_maps_near_and_far_planes() {
        let m = Mat4::perspective(deg_to_rad(60.0), 4.0 / 3.0, 1.0, 100.0);

        // camera looks down -Z; the near plane lands on z = -1, far on z = 1
        let near = m.transform_point(Vec3::new(0.0, 0.0, -1.0));
        assert_abs_diff_eq!(near.z, -1.0, epsilon = EPSILON);

        let far = m.transform_point(Vec3::new(0.0, 0.0, -100.0));
        assert_abs_diff_eq!(far.z, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_degenerate_perspective_range_is_not_finite() {
        // near == far divides the depth range by zero
        let m = Mat4::perspective(deg_to_rad(60.0), 1.0, 5.0, 5.0);
        assert!(!m.is_finite());
    }

    #[test]
    fn test_look_at_down_z_axis_is_pure_translation() {
        let m = Mat4::look_at(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::ZERO,
            Vec3::new(0.0, 1.0, 0.0),
        );

        assert_mat4_eq(&m, &Mat4::translation(0.0, 0.0, 10.0));
    }

    #[test]
    fn test_look_at_inverse_maps_camera_to_origin() {
        let camera = Vec3::new(4.0, 7.0, -3.0);
        let view = Mat4::look_at(camera, Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0)).inverse();

        assert_vec3_eq(view.transform_point(camera), Vec3::ZERO);
    }

    #[test]
    fn test_degenerate_look_at_collapses() {
        // camera on top of target: the view axis normalizes to zero
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let m = Mat4::look_at(eye, eye, Vec3::new(0.0, 1.0, 0.0));

        assert_abs_diff_eq!(m.determinant(), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_transform_direction_ignores_translation() {
        let m = Mat4::translation(100.0, 200.0, 300.0);
        let d = m.transform_direction(Vec3::new(0.0, 0.0, -1.0));

        assert_vec3_eq(d, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_transform_normal_counters_non_uniform_scale() {
        // a surface stretched 2x along X keeps its X-facing normal
        // perpendicular only if the normal shrinks by the same factor
        let m = Mat4::scaling(2.0, 1.0, 1.0);
        let n = m.transform_normal(Vec3::new(1.0, 0.0, 0.0));

        assert_vec3_eq(n, Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_transpose_involution() {
        let m = Mat4::translation(1.0, 2.0, 3.0).z_rotate(0.5);
        assert_mat4_eq(&m.transpose().transpose(), &m);
    }

    #[test]
    fn test_set_forms_match_value_forms() {
        let mut m = Mat4::identity();
        m.set_perspective(deg_to_rad(60.0), 1.5, 1.0, 200.0);
        assert_mat4_eq(&m, &Mat4::perspective(deg_to_rad(60.0), 1.5, 1.0, 200.0));

        let a = Mat4::y_rotation(0.4);
        let b = Mat4::translation(3.0, 4.0, 5.0);
        let mut dst = Mat4::identity();
        dst.set_multiply(&a, &b);
        assert_mat4_eq(&dst, &a.multiply(&b));

        dst.set_inverse(&a);
        assert_mat4_eq(&dst, &a.inverse());
    }
}
