use js_sys::wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::error::Error;

/// Finds a canvas element by CSS selector.
pub(crate) fn find_canvas(selector: &str) -> Result<HtmlCanvasElement, Error> {
    let document = web_sys::window()
        .ok_or(Error::window_not_found())?
        .document()
        .ok_or(Error::document_not_found())?;

    document
        .query_selector(selector)
        .map_err(|_| Error::canvas_not_found())?
        .ok_or(Error::canvas_not_found())?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| Error::canvas_not_found())
}

/// Retrieves the WebGL2 context from a canvas element.
pub(crate) fn webgl2_context(
    canvas: &HtmlCanvasElement,
) -> Result<web_sys::WebGl2RenderingContext, Error> {
    canvas
        .get_context("webgl2")
        .map_err(|_| Error::canvas_context_failed())?
        .ok_or(Error::webgl_context_failed())?
        .dyn_into::<web_sys::WebGl2RenderingContext>()
        .map_err(|_| Error::webgl_context_failed())
}
