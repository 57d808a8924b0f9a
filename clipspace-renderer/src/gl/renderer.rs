use web_sys::{console, HtmlCanvasElement};

use crate::{
    dom,
    error::Error,
    gl::{state::GlState, GL},
};

/// Rendering context that provides access to WebGL state.
pub(super) struct RenderContext<'a> {
    pub gl: &'a web_sys::WebGl2RenderingContext,
    pub state: &'a mut GlState,
    /// Canvas size in pixels, fed to projection-matrix construction each
    /// frame. The renderer is the only source of these dimensions.
    pub canvas_size: (i32, i32),
}

/// WebGL2 renderer that owns the canvas, context, and cached GL state.
///
/// The renderer has no retained scene: each frame a caller clears, then
/// renders drawables which rebuild their transform matrix from scratch out of
/// primitive parameters and the current canvas size.
#[derive(Debug)]
pub struct Renderer {
    gl: web_sys::WebGl2RenderingContext,
    canvas: web_sys::HtmlCanvasElement,
    state: GlState,
    clear_color: (f32, f32, f32),
}

impl Renderer {
    /// Creates a new renderer by querying for a canvas element with the given ID.
    ///
    /// # Parameters
    /// * `canvas_id` - CSS selector for the canvas element (e.g., "canvas" or "#my-canvas")
    ///
    /// # Errors
    /// * `Error::Initialization` - canvas element not found, or WebGL2 not available
    pub fn create(canvas_id: &str) -> Result<Self, Error> {
        let canvas = dom::find_canvas(canvas_id)?;
        Self::create_with_canvas(canvas)
    }

    /// Creates a new renderer from an existing HTML canvas element.
    pub fn create_with_canvas(canvas: HtmlCanvasElement) -> Result<Self, Error> {
        let (width, height) = (canvas.width(), canvas.height());

        // initialize WebGL context
        let gl = dom::webgl2_context(&canvas)?;
        let state = GlState::new(&gl);

        console::log_1(&format!("canvas size {width}x{height}").into());

        let mut renderer = Self {
            gl,
            canvas,
            state,
            clear_color: (0.0, 0.0, 0.0),
        };
        renderer.resize(width as _, height as _);
        Ok(renderer)
    }

    /// Sets the background color used by [`Renderer::begin_frame`].
    pub fn clear_color(mut self, color: u32) -> Self {
        let r = ((color >> 16) & 0xFF) as f32 / 255.0;
        let g = ((color >> 8) & 0xFF) as f32 / 255.0;
        let b = (color & 0xFF) as f32 / 255.0;
        self.clear_color = (r, g, b);
        self
    }

    /// Resizes the canvas and updates the viewport.
    ///
    /// Projection matrices are rebuilt by drawables on the next frame from
    /// the new dimensions; nothing is cached across the resize.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.state.viewport(&self.gl, 0, 0, width, height);
    }

    /// Clears the framebuffer with the specified color.
    pub fn clear(&mut self, r: f32, g: f32, b: f32) {
        self.state.clear_color(&self.gl, r, g, b, 1.0);
        self.gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }

    /// Begins a new rendering frame.
    pub fn begin_frame(&mut self) {
        let (r, g, b) = self.clear_color;
        self.clear(r, g, b);
    }

    /// Renders a drawable object.
    ///
    /// Calls the drawable's prepare, draw, and cleanup methods in sequence,
    /// providing a render context with the GL handle, cached state, and the
    /// current canvas dimensions.
    #[allow(private_bounds)]
    pub fn render(&mut self, drawable: &impl Drawable) {
        let canvas_size = (self.canvas.width() as i32, self.canvas.height() as i32);
        let mut context = RenderContext {
            gl: &self.gl,
            state: &mut self.state,
            canvas_size,
        };

        drawable.prepare(&mut context);
        drawable.draw(&mut context);
        drawable.cleanup(&mut context);
    }

    /// Returns a reference to the WebGL2 rendering context.
    pub fn gl(&self) -> &GL {
        &self.gl
    }

    /// Returns the underlying canvas element.
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Returns the current canvas dimensions as a (width, height) tuple.
    pub fn canvas_size(&self) -> (i32, i32) {
        (self.canvas.width() as i32, self.canvas.height() as i32)
    }
}

/// Trait for objects that can be rendered by the renderer.
pub(super) trait Drawable {
    /// Sets up GL state, binds shaders and vertex data, and uploads the
    /// per-frame transform uniform.
    fn prepare(&self, context: &mut RenderContext);

    /// Issues draw calls. State is assumed set up by `prepare()`.
    fn draw(&self, context: &mut RenderContext);

    /// Restores GL state and unbinds resources bound during `prepare()`.
    fn cleanup(&self, context: &mut RenderContext);
}
