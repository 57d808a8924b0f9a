//! Demo vertex data: an "F" glyph in 2D and 3D, plus a rectangle helper.
//!
//! The F is the classic asymmetric test shape for transform pipelines: it has
//! no rotational symmetry, so a wrong composition order or a missing Y-flip
//! is immediately visible. Coordinates are in pixel space with the origin at
//! the top-left, matching what `Mat3::projection`/`Mat4::projection` expect.

/// 2D "F" outline: 18 vertices, 2 components each, drawn as triangles.
pub const F_2D: [f32; 36] = [
    // left column
    0.0, 0.0, 30.0, 0.0, 0.0, 150.0, 0.0, 150.0, 30.0, 0.0, 30.0, 150.0,
    // top rung
    30.0, 0.0, 100.0, 0.0, 30.0, 30.0, 30.0, 30.0, 100.0, 0.0, 100.0, 30.0,
    // middle rung
    30.0, 60.0, 67.0, 60.0, 30.0, 90.0, 30.0, 90.0, 67.0, 60.0, 67.0, 90.0,
];

/// 3D "F": 16 faces of 6 vertices each, 3 components per vertex.
pub const F_3D: [f32; 288] = [
    // left column front
    0.0, 0.0, 0.0, 0.0, 150.0, 0.0, 30.0, 0.0, 0.0, 0.0, 150.0, 0.0, 30.0, 150.0, 0.0, 30.0, 0.0,
    0.0, // top rung front
    30.0, 0.0, 0.0, 30.0, 30.0, 0.0, 100.0, 0.0, 0.0, 30.0, 30.0, 0.0, 100.0, 30.0, 0.0, 100.0,
    0.0, 0.0, // middle rung front
    30.0, 60.0, 0.0, 30.0, 90.0, 0.0, 67.0, 60.0, 0.0, 30.0, 90.0, 0.0, 67.0, 90.0, 0.0, 67.0,
    60.0, 0.0, // left column back
    0.0, 0.0, 30.0, 30.0, 0.0, 30.0, 0.0, 150.0, 30.0, 0.0, 150.0, 30.0, 30.0, 0.0, 30.0, 30.0,
    150.0, 30.0, // top rung back
    30.0, 0.0, 30.0, 100.0, 0.0, 30.0, 30.0, 30.0, 30.0, 30.0, 30.0, 30.0, 100.0, 0.0, 30.0,
    100.0, 30.0, 30.0, // middle rung back
    30.0, 60.0, 30.0, 67.0, 60.0, 30.0, 30.0, 90.0, 30.0, 30.0, 90.0, 30.0, 67.0, 60.0, 30.0,
    67.0, 90.0, 30.0, // top
    0.0, 0.0, 0.0, 100.0, 0.0, 0.0, 100.0, 0.0, 30.0, 0.0, 0.0, 0.0, 100.0, 0.0, 30.0, 0.0, 0.0,
    30.0, // top rung right
    100.0, 0.0, 0.0, 100.0, 30.0, 0.0, 100.0, 30.0, 30.0, 100.0, 0.0, 0.0, 100.0, 30.0, 30.0,
    100.0, 0.0, 30.0, // under top rung
    30.0, 30.0, 0.0, 30.0, 30.0, 30.0, 100.0, 30.0, 30.0, 30.0, 30.0, 0.0, 100.0, 30.0, 30.0,
    100.0, 30.0, 0.0, // between top rung and middle
    30.0, 30.0, 0.0, 30.0, 60.0, 30.0, 30.0, 30.0, 30.0, 30.0, 30.0, 0.0, 30.0, 60.0, 0.0, 30.0,
    60.0, 30.0, // top of middle rung
    30.0, 60.0, 0.0, 67.0, 60.0, 30.0, 30.0, 60.0, 30.0, 30.0, 60.0, 0.0, 67.0, 60.0, 0.0, 67.0,
    60.0, 30.0, // right of middle rung
    67.0, 60.0, 0.0, 67.0, 90.0, 30.0, 67.0, 60.0, 30.0, 67.0, 60.0, 0.0, 67.0, 90.0, 0.0, 67.0,
    90.0, 30.0, // bottom of middle rung
    30.0, 90.0, 0.0, 30.0, 90.0, 30.0, 67.0, 90.0, 30.0, 30.0, 90.0, 0.0, 67.0, 90.0, 30.0, 67.0,
    90.0, 0.0, // right of bottom
    30.0, 90.0, 0.0, 30.0, 150.0, 30.0, 30.0, 90.0, 30.0, 30.0, 90.0, 0.0, 30.0, 150.0, 0.0,
    30.0, 150.0, 30.0, // bottom
    0.0, 150.0, 0.0, 0.0, 150.0, 30.0, 30.0, 150.0, 30.0, 0.0, 150.0, 0.0, 30.0, 150.0, 30.0,
    30.0, 150.0, 0.0, // left side
    0.0, 0.0, 0.0, 0.0, 0.0, 30.0, 0.0, 150.0, 30.0, 0.0, 0.0, 0.0, 0.0, 150.0, 30.0, 0.0,
    150.0, 0.0,
];

/// Per-vertex colors for [`F_3D`], one RGB byte triple per vertex, uploaded
/// as normalized unsigned bytes.
pub const F_3D_COLORS: [u8; 288] = [
    // left column front
    200, 70, 120, 200, 70, 120, 200, 70, 120, 200, 70, 120, 200, 70, 120, 200, 70, 120,
    // top rung front
    200, 70, 120, 200, 70, 120, 200, 70, 120, 200, 70, 120, 200, 70, 120, 200, 70, 120,
    // middle rung front
    200, 70, 120, 200, 70, 120, 200, 70, 120, 200, 70, 120, 200, 70, 120, 200, 70, 120,
    // left column back
    80, 70, 200, 80, 70, 200, 80, 70, 200, 80, 70, 200, 80, 70, 200, 80, 70, 200,
    // top rung back
    80, 70, 200, 80, 70, 200, 80, 70, 200, 80, 70, 200, 80, 70, 200, 80, 70, 200,
    // middle rung back
    80, 70, 200, 80, 70, 200, 80, 70, 200, 80, 70, 200, 80, 70, 200, 80, 70, 200,
    // top
    70, 200, 210, 70, 200, 210, 70, 200, 210, 70, 200, 210, 70, 200, 210, 70, 200, 210,
    // top rung right
    200, 200, 70, 200, 200, 70, 200, 200, 70, 200, 200, 70, 200, 200, 70, 200, 200, 70,
    // under top rung
    210, 100, 70, 210, 100, 70, 210, 100, 70, 210, 100, 70, 210, 100, 70, 210, 100, 70,
    // between top rung and middle
    210, 160, 70, 210, 160, 70, 210, 160, 70, 210, 160, 70, 210, 160, 70, 210, 160, 70,
    // top of middle rung
    70, 180, 210, 70, 180, 210, 70, 180, 210, 70, 180, 210, 70, 180, 210, 70, 180, 210,
    // right of middle rung
    100, 70, 210, 100, 70, 210, 100, 70, 210, 100, 70, 210, 100, 70, 210, 100, 70, 210,
    // bottom of middle rung
    76, 210, 100, 76, 210, 100, 76, 210, 100, 76, 210, 100, 76, 210, 100, 76, 210, 100,
    // right of bottom
    140, 210, 80, 140, 210, 80, 140, 210, 80, 140, 210, 80, 140, 210, 80, 140, 210, 80,
    // bottom
    90, 130, 110, 90, 130, 110, 90, 130, 110, 90, 130, 110, 90, 130, 110, 90, 130, 110,
    // left side
    160, 160, 220, 160, 160, 220, 160, 160, 220, 160, 160, 220, 160, 160, 220, 160, 160, 220,
];

/// Two triangles covering an axis-aligned rectangle.
pub fn rectangle(x: f32, y: f32, width: f32, height: f32) -> [f32; 12] {
    let x1 = x;
    let x2 = x + width;
    let y1 = y;
    let y2 = y + height;

    [x1, y1, x2, y1, x1, y2, x1, y2, x2, y1, x2, y2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f_2d_vertex_count() {
        // three quads of two triangles each
        assert_eq!(F_2D.len(), 18 * 2);
    }

    #[test]
    fn test_f_3d_has_color_per_vertex() {
        assert_eq!(F_3D.len(), 16 * 6 * 3);
        assert_eq!(F_3D_COLORS.len(), F_3D.len());
    }

    #[test]
    fn test_rectangle_corners() {
        let verts = rectangle(10.0, 20.0, 30.0, 40.0);
        // both triangles share the (x2, y1) corner
        assert_eq!(&verts[2..4], &[40.0, 20.0]);
        assert_eq!(&verts[10..12], &[40.0, 60.0]);
    }
}
