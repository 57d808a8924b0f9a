#![allow(unused)]

mod buffer;
mod geometry;
mod program;
mod renderer;
mod shape2d;
mod shape3d;
mod state;

use buffer::*;
pub use geometry::*;
pub(crate) use program::*;
pub use renderer::*;
pub use shape2d::*;
pub use shape3d::*;

pub(crate) type GL = web_sys::WebGl2RenderingContext;
