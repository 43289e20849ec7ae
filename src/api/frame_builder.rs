use tracing::debug;

use crate::core::{CoordinateMapper, DrawingSurface};
use crate::render::{RectPrimitive, RenderFrame};

use super::Profile;
use super::layout::layout_segments;
use super::tic_labels::tic_labels;

/// Materializes the full scene for one pass: background fill, line segments
/// in layout order, then tic labels.
///
/// An empty surface produces an empty frame.
#[must_use]
pub fn build_frame(surface: DrawingSurface, profile: &Profile) -> RenderFrame {
    let frame = RenderFrame::new(surface);
    if surface.is_empty() {
        return frame;
    }

    let mapper = CoordinateMapper::new(surface, profile.grid_unit());
    let main_window = profile.main_window();
    let frame = frame
        .with_rect(RectPrimitive::new(
            0.0,
            0.0,
            surface.width_px(),
            surface.height_px(),
            main_window.bg_color(),
        ))
        .with_lines(layout_segments(surface, profile))
        .with_texts(tic_labels(mapper, profile.tic_major(), main_window));

    debug!(
        rects = frame.rects.len(),
        lines = frame.lines.len(),
        texts = frame.texts.len(),
        "build render frame"
    );
    frame
}
