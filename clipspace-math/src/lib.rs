//! Homogeneous transform matrices for WebGL rendering.
//!
//! Two structurally parallel libraries: [`Mat3`] builds 3x3 matrices for 2D
//! rendering, [`Mat4`] builds 4x4 matrices for 3D rendering. Both are flat
//! row-major arrays whose layout uploads verbatim as a shader uniform.
//!
//! Everything here is a pure computation: no matrix is cached or shared, and
//! nothing in this crate panics or returns a `Result`. Degenerate inputs
//! (singular matrices, zero-size projections) flow through as non-finite
//! values; callers that want early detection can use `is_finite()` or
//! `determinant()` before uploading.

mod mat3;
mod mat4;
mod scalar;
mod vec2;
mod vec3;

pub use mat3::Mat3;
pub use mat4::Mat4;
pub use scalar::{deg_to_rad, rad_to_deg, Scalar, NORMALIZE_EPSILON};
pub use vec2::Vec2;
pub use vec3::Vec3;
