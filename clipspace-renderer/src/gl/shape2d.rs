use clipspace_math::Mat3;
use web_sys::{WebGl2RenderingContext, WebGlBuffer, WebGlUniformLocation, WebGlVertexArrayObject};

use crate::{
    error::Error,
    gl::{buffer_upload_array, Drawable, RenderContext, ShaderProgram, GL},
};

/// Per-frame transform parameters for a 2D shape, in pixel units.
#[derive(Debug, Clone, Copy)]
pub struct Transform2d {
    pub translation: (f32, f32),
    pub rotation_radians: f32,
    pub scale: (f32, f32),
}

impl Default for Transform2d {
    fn default() -> Self {
        Self {
            translation: (0.0, 0.0),
            rotation_radians: 0.0,
            scale: (1.0, 1.0),
        }
    }
}

/// A flat-colored 2D triangle mesh positioned by a composed `mat3` uniform.
///
/// Each frame the transform matrix is rebuilt from scratch in the fixed
/// order `projection -> translate -> rotate -> scale` and uploaded verbatim;
/// nothing about the previous frame is retained.
#[derive(Debug)]
pub struct Shape2d {
    shader: ShaderProgram,
    vao: WebGlVertexArrayObject,
    position_buffer: WebGlBuffer,
    vertex_count: i32,
    matrix_loc: WebGlUniformLocation,
    color_loc: WebGlUniformLocation,
    pub transform: Transform2d,
    /// RGBA, each component in [0, 1].
    pub color: [f32; 4],
}

impl Shape2d {
    const FRAGMENT_GLSL: &'static str = include_str!("../shaders/shape2d.frag");
    const VERTEX_GLSL: &'static str = include_str!("../shaders/shape2d.vert");

    /// Creates a 2D shape from interleaved `(x, y)` vertex positions in
    /// pixel space, drawn as triangles.
    pub fn new(gl: &WebGl2RenderingContext, vertices: &[f32]) -> Result<Self, Error> {
        let shader = ShaderProgram::create(gl, Self::VERTEX_GLSL, Self::FRAGMENT_GLSL)?;

        let vao = gl.create_vertex_array().ok_or(Error::vertex_array_creation_failed())?;
        gl.bind_vertex_array(Some(&vao));

        let position_buffer = gl.create_buffer().ok_or(Error::buffer_creation_failed("position"))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&position_buffer));
        buffer_upload_array(gl, GL::ARRAY_BUFFER, vertices, GL::STATIC_DRAW);

        let position_loc = shader.attrib_location(gl, "a_position")?;
        gl.enable_vertex_attrib_array(position_loc);
        gl.vertex_attrib_pointer_with_i32(position_loc, 2, GL::FLOAT, false, 0, 0);

        // unbind VAO to prevent accidental modification
        gl.bind_vertex_array(None);

        let matrix_loc = shader.uniform_location(gl, "u_matrix")?;
        let color_loc = shader.uniform_location(gl, "u_color")?;

        Ok(Self {
            shader,
            vao,
            position_buffer,
            vertex_count: (vertices.len() / 2) as i32,
            matrix_loc,
            color_loc,
            transform: Transform2d::default(),
            color: [0.3, 0.3, 0.8, 1.0],
        })
    }

    /// Replaces the vertex data, keeping shader and transform state.
    pub fn set_vertices(&mut self, gl: &WebGl2RenderingContext, vertices: &[f32]) {
        gl.bind_vertex_array(Some(&self.vao));
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.position_buffer));
        buffer_upload_array(gl, GL::ARRAY_BUFFER, vertices, GL::STATIC_DRAW);
        gl.bind_vertex_array(None);

        self.vertex_count = (vertices.len() / 2) as i32;
    }

    /// Composes the full 2D transform for the current canvas size.
    fn matrix(&self, canvas_size: (i32, i32)) -> Mat3 {
        let (width, height) = canvas_size;
        let (tx, ty) = self.transform.translation;
        let (sx, sy) = self.transform.scale;

        Mat3::projection(width as f32, height as f32)
            .translate(tx, ty)
            .rotate(self.transform.rotation_radians)
            .scale(sx, sy)
    }
}

impl Drawable for Shape2d {
    fn prepare(&self, context: &mut RenderContext) {
        let gl = context.gl;

        self.shader.use_program(gl);
        gl.bind_vertex_array(Some(&self.vao));

        let matrix = self.matrix(context.canvas_size);
        gl.uniform_matrix3fv_with_f32_array(Some(&self.matrix_loc), false, matrix.as_slice());
        gl.uniform4fv_with_f32_array(Some(&self.color_loc), &self.color);

        context.state.depth_test(gl, false).cull_face(gl, false);
    }

    fn draw(&self, context: &mut RenderContext) {
        context.gl.draw_arrays(GL::TRIANGLES, 0, self.vertex_count);
    }

    fn cleanup(&self, context: &mut RenderContext) {
        context.gl.bind_vertex_array(None);
    }
}
