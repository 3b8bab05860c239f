//! Rendering module
//!
//! The simulation emits one `RenderFrame` per tick; a renderer clears and
//! redraws from it. Styling lives entirely on this side.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod text;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use text::TextRenderer;

use crate::sim::RenderFrame;

/// Something that can draw a frame
pub trait Renderer {
    fn draw(&mut self, frame: &RenderFrame);
}

