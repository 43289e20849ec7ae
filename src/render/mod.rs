mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, FontStyle, LineSegment, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::PlaneResult;

/// Contract implemented by any painting backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from layout logic and from whatever toolkit hosts the surface.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlaneResult<()>;
}
