mod error;
mod gl;

pub(crate) mod dom;

pub use clipspace_math::{deg_to_rad, rad_to_deg, Mat3, Mat4, Scalar, Vec2, Vec3};

pub use crate::{
    error::Error,
    gl::{
        rectangle, Camera, Projection3d, Renderer, Shape2d, Shape3d, Transform2d, Transform3d,
        F_2D, F_3D, F_3D_COLORS,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transforms_are_identity_parameters() {
        let t2 = Transform2d::default();
        assert_eq!(t2.translation, (0.0, 0.0));
        assert_eq!(t2.scale, (1.0, 1.0));

        let t3 = Transform3d::default();
        assert_eq!(t3.rotation_radians, (0.0, 0.0, 0.0));
        assert_eq!(t3.scale, (1.0, 1.0, 1.0));
    }
}
