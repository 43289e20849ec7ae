use tracing::trace;

use crate::core::CoordinateMapper;
use crate::render::{TextHAlign, TextPrimitive};

use super::layout::{PlaneAxis, unit_positions};
use super::{LinePropertySet, MainWindowProperties};

/// Gap between an X-axis tic end and the top of its label.
pub const X_LABEL_PADDING_PX: f64 = 3.0;
/// Gap between a Y-axis tic end and the left edge of its label.
pub const Y_LABEL_PADDING_PX: f64 = 5.0;

/// Unit-value labels at every major tic position on both axes.
///
/// X-axis labels are centered below the tic; Y-axis labels sit right of it.
/// Positions follow the major-tic spacing even when the tics themselves are
/// hidden; the main window's label flag alone decides whether any are made.
#[must_use]
pub fn tic_labels(
    mapper: CoordinateMapper,
    tic_major: &LinePropertySet,
    main_window: &MainWindowProperties,
) -> Vec<TextPrimitive> {
    if !main_window.font_draw() || mapper.surface().is_empty() {
        return Vec::new();
    }
    let Some(spacing) = tic_major.spacing() else {
        return Vec::new();
    };

    let origin = mapper.origin();
    let half_length = tic_major.length().unwrap_or(0.0) / 2.0;
    let font_size = main_window.font_size();
    let label = |unit: f64, x: f64, y: f64, h_align: TextHAlign| {
        TextPrimitive::new(
            format_unit(unit),
            x,
            y,
            main_window.font_name(),
            font_size,
            main_window.fg_color(),
            h_align,
        )
        .with_font_style(main_window.font_style())
    };

    let mut labels: Vec<TextPrimitive> = unit_positions(mapper, PlaneAxis::X, spacing)
        .into_iter()
        .map(|unit_x| {
            label(
                unit_x,
                mapper.unit_x_to_pixel(unit_x),
                origin.y + half_length + font_size + X_LABEL_PADDING_PX,
                TextHAlign::Center,
            )
        })
        .collect();
    labels.extend(
        unit_positions(mapper, PlaneAxis::Y, spacing)
            .into_iter()
            .map(|unit_y| {
                label(
                    unit_y,
                    origin.x + half_length + Y_LABEL_PADDING_PX,
                    mapper.unit_y_to_pixel(unit_y) + font_size / 2.0,
                    TextHAlign::Left,
                )
            }),
    );

    trace!(count = labels.len(), "tic labels");
    labels
}

fn format_unit(unit: f64) -> String {
    format!("{unit:.2}")
}
