use clipspace_math::{Mat4, Vec3};
use web_sys::{WebGl2RenderingContext, WebGlBuffer, WebGlUniformLocation, WebGlVertexArrayObject};

use crate::{
    error::Error,
    gl::{buffer_upload_array, Drawable, RenderContext, ShaderProgram, GL},
};

/// Per-frame transform parameters for a 3D shape, in pixel units.
#[derive(Debug, Clone, Copy)]
pub struct Transform3d {
    pub translation: (f32, f32, f32),
    /// Rotation around each principal axis, applied in x, y, z order.
    pub rotation_radians: (f32, f32, f32),
    pub scale: (f32, f32, f32),
}

impl Default for Transform3d {
    fn default() -> Self {
        Self {
            translation: (0.0, 0.0, 0.0),
            rotation_radians: (0.0, 0.0, 0.0),
            scale: (1.0, 1.0, 1.0),
        }
    }
}

/// Look-at camera for the perspective path.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub field_of_view_radians: f32,
    pub near: f32,
    pub far: f32,
}

/// How a 3D shape reaches clip space.
#[derive(Debug, Clone, Copy)]
pub enum Projection3d {
    /// Pixel-space box via `Mat4::projection`, with foreshortening applied
    /// by the vertex stage's `u_fudge_factor` divide. A fudge factor of 0
    /// gives a plain orthographic look.
    Pixel { depth: f32, fudge_factor: f32 },
    /// True perspective projection through an inverted look-at matrix.
    Camera(Camera),
}

/// A per-vertex-colored 3D triangle mesh positioned by a composed `mat4`
/// uniform, rebuilt each frame as
/// `projection -> translate -> x/y/z rotate -> scale`.
#[derive(Debug)]
pub struct Shape3d {
    shader: ShaderProgram,
    vao: WebGlVertexArrayObject,
    position_buffer: WebGlBuffer,
    color_buffer: WebGlBuffer,
    vertex_count: i32,
    matrix_loc: WebGlUniformLocation,
    fudge_factor_loc: WebGlUniformLocation,
    pub transform: Transform3d,
    pub projection: Projection3d,
}

impl Shape3d {
    const FRAGMENT_GLSL: &'static str = include_str!("../shaders/shape3d.frag");
    const VERTEX_GLSL: &'static str = include_str!("../shaders/shape3d.vert");

    /// Creates a 3D shape from interleaved `(x, y, z)` vertex positions and
    /// one RGB byte triple per vertex.
    pub fn new(
        gl: &WebGl2RenderingContext,
        vertices: &[f32],
        colors: &[u8],
    ) -> Result<Self, Error> {
        let shader = ShaderProgram::create(gl, Self::VERTEX_GLSL, Self::FRAGMENT_GLSL)?;

        let vao = gl.create_vertex_array().ok_or(Error::vertex_array_creation_failed())?;
        gl.bind_vertex_array(Some(&vao));

        let position_buffer = gl.create_buffer().ok_or(Error::buffer_creation_failed("position"))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&position_buffer));
        buffer_upload_array(gl, GL::ARRAY_BUFFER, vertices, GL::STATIC_DRAW);

        let position_loc = shader.attrib_location(gl, "a_position")?;
        gl.enable_vertex_attrib_array(position_loc);
        gl.vertex_attrib_pointer_with_i32(position_loc, 3, GL::FLOAT, false, 0, 0);

        let color_buffer = gl.create_buffer().ok_or(Error::buffer_creation_failed("color"))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&color_buffer));
        buffer_upload_array(gl, GL::ARRAY_BUFFER, colors, GL::STATIC_DRAW);

        let color_loc = shader.attrib_location(gl, "a_color")?;
        gl.enable_vertex_attrib_array(color_loc);
        gl.vertex_attrib_pointer_with_i32(color_loc, 3, GL::UNSIGNED_BYTE, true, 0, 0);

        // unbind VAO to prevent accidental modification
        gl.bind_vertex_array(None);

        let matrix_loc = shader.uniform_location(gl, "u_matrix")?;
        let fudge_factor_loc = shader.uniform_location(gl, "u_fudge_factor")?;

        Ok(Self {
            shader,
            vao,
            position_buffer,
            color_buffer,
            vertex_count: (vertices.len() / 3) as i32,
            matrix_loc,
            fudge_factor_loc,
            transform: Transform3d::default(),
            projection: Projection3d::Pixel { depth: 400.0, fudge_factor: 0.0 },
        })
    }

    /// The projection half of the transform, plus the fudge factor to hand
    /// to the vertex stage.
    fn view_projection(&self, canvas_size: (i32, i32)) -> (Mat4, f32) {
        let (width, height) = (canvas_size.0 as f32, canvas_size.1 as f32);

        match self.projection {
            Projection3d::Pixel { depth, fudge_factor } => {
                (Mat4::projection(width, height, depth), fudge_factor)
            },
            Projection3d::Camera(camera) => {
                let projection = Mat4::perspective(
                    camera.field_of_view_radians,
                    width / height,
                    camera.near,
                    camera.far,
                );
                // the camera matrix orients the camera; its inverse moves
                // the world in front of it
                let view = Mat4::look_at(camera.position, camera.target, camera.up).inverse();
                (projection.multiply(&view), 0.0)
            },
        }
    }

    /// Composes the full 3D transform for the current canvas size, along
    /// with the fudge factor for the vertex stage.
    fn matrix(&self, canvas_size: (i32, i32)) -> (Mat4, f32) {
        let (tx, ty, tz) = self.transform.translation;
        let (rx, ry, rz) = self.transform.rotation_radians;
        let (sx, sy, sz) = self.transform.scale;

        let (view_projection, fudge_factor) = self.view_projection(canvas_size);
        let matrix = view_projection
            .translate(tx, ty, tz)
            .x_rotate(rx)
            .y_rotate(ry)
            .z_rotate(rz)
            .scale(sx, sy, sz);

        (matrix, fudge_factor)
    }
}

impl Drawable for Shape3d {
    fn prepare(&self, context: &mut RenderContext) {
        let gl = context.gl;

        self.shader.use_program(gl);
        gl.bind_vertex_array(Some(&self.vao));

        let (matrix, fudge_factor) = self.matrix(context.canvas_size);
        gl.uniform_matrix4fv_with_f32_array(Some(&self.matrix_loc), false, matrix.as_slice());
        gl.uniform1f(Some(&self.fudge_factor_loc), fudge_factor);

        context.state.depth_test(gl, true).cull_face(gl, true);
    }

    fn draw(&self, context: &mut RenderContext) {
        context.gl.draw_arrays(GL::TRIANGLES, 0, self.vertex_count);
    }

    fn cleanup(&self, context: &mut RenderContext) {
        context.gl.bind_vertex_array(None);
    }
}
