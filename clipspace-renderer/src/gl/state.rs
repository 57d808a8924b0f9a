use crate::gl::GL;

/// Manages simple WebGL state to reduce redundant state changes
#[derive(Debug)]
pub struct GlState {
    // Viewport dimensions
    viewport: [i32; 4], // [x, y, width, height]

    // Clear color
    clear_color: [f32; 4],

    // Capabilities toggled by the 3D pass
    depth_test: bool,
    cull_face: bool,
}

impl GlState {
    /// Create a new GlState object with WebGL defaults
    pub fn new(_gl: &GL) -> Self {
        Self {
            viewport: [0, 0, 0, 0],
            clear_color: [0.0, 0.0, 0.0, 0.0],
            depth_test: false,
            cull_face: false,
        }
    }

    /// Set viewport dimensions
    pub fn viewport(&mut self, gl: &GL, x: i32, y: i32, width: i32, height: i32) -> &mut Self {
        let new_viewport = [x, y, width, height];
        if self.viewport != new_viewport {
            gl.viewport(x, y, width, height);
            self.viewport = new_viewport;
        }
        self
    }

    /// Set clear color
    pub fn clear_color(&mut self, gl: &GL, r: f32, g: f32, b: f32, a: f32) -> &mut Self {
        let new_color = [r, g, b, a];
        if self.clear_color != new_color {
            gl.clear_color(r, g, b, a);
            self.clear_color = new_color;
        }
        self
    }

    /// Enable or disable depth testing
    pub fn depth_test(&mut self, gl: &GL, enable: bool) -> &mut Self {
        if self.depth_test != enable {
            self.capability(gl, GL::DEPTH_TEST, enable);
            self.depth_test = enable;
        }
        self
    }

    /// Enable or disable back-face culling
    pub fn cull_face(&mut self, gl: &GL, enable: bool) -> &mut Self {
        if self.cull_face != enable {
            self.capability(gl, GL::CULL_FACE, enable);
            self.cull_face = enable;
        }
        self
    }

    fn capability(&self, gl: &GL, capability: u32, enable: bool) {
        if enable {
            gl.enable(capability);
        } else {
            gl.disable(capability);
        }
    }
}
