use tracing::{debug, trace, warn};

use crate::core::{CoordinateMapper, DrawingSurface};
use crate::render::LineSegment;

use super::{LinePropertySet, Profile};

/// Upper bound on lines emitted per axis per category.
///
/// A category whose spacing would exceed it is skipped.
pub const MAX_LINES_PER_AXIS: i64 = 100_000;

/// Slack when checking whether a boundary line still falls on the surface.
const BOUNDARY_EPSILON: f64 = 1e-9;

/// Cartesian axis a run of lines is positioned along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneAxis {
    /// Positions along X; the lines they produce are vertical.
    X,
    /// Positions along Y; the lines they produce are horizontal.
    Y,
}

/// Computes every line segment for one render pass.
///
/// Order is grid lines, axes, major tics, minor tics, so later categories
/// paint on top. A zero-size surface yields an empty sequence.
#[must_use]
pub fn layout_segments(surface: DrawingSurface, profile: &Profile) -> Vec<LineSegment> {
    if surface.is_empty() {
        warn!(
            width = surface.width,
            height = surface.height,
            "skipping layout for empty surface"
        );
        return Vec::new();
    }

    let mapper = CoordinateMapper::new(surface, profile.grid_unit());
    let mut segments = grid_line_segments(mapper, profile.grid_lines());
    segments.extend(axis_segments(mapper, profile.axes()));
    segments.extend(tic_segments(mapper, profile.tic_major()));
    segments.extend(tic_segments(mapper, profile.tic_minor()));

    debug!(
        width = surface.width,
        height = surface.height,
        grid_unit = profile.grid_unit().get(),
        segment_count = segments.len(),
        "layout segments"
    );
    segments
}

/// Horizontal axis at `y = 0` followed by the vertical axis at `x = 0`.
///
/// Axes are unconditional: only an empty surface suppresses them.
#[must_use]
pub fn axis_segments(mapper: CoordinateMapper, set: &LinePropertySet) -> Vec<LineSegment> {
    let surface = mapper.surface();
    if surface.is_empty() {
        return Vec::new();
    }
    let origin = mapper.origin();
    let stroke = set.stroke();
    let color = set.color();
    vec![
        LineSegment::new(0.0, origin.y, surface.width_px(), origin.y, stroke, color),
        LineSegment::new(origin.x, 0.0, origin.x, surface.height_px(), stroke, color),
    ]
}

/// Full-span lines at every non-zero multiple of the spacing.
///
/// Vertical lines (positions along X) come first, then horizontal lines
/// (positions along Y), each in increasing unit order.
#[must_use]
pub fn grid_line_segments(mapper: CoordinateMapper, set: &LinePropertySet) -> Vec<LineSegment> {
    let Some(spacing) = active_spacing(mapper, set) else {
        return Vec::new();
    };
    let surface = mapper.surface();
    let stroke = set.stroke();
    let color = set.color();

    let vertical = unit_positions(mapper, PlaneAxis::X, spacing)
        .into_iter()
        .map(|unit_x| {
            let x = mapper.unit_x_to_pixel(unit_x);
            LineSegment::new(x, 0.0, x, surface.height_px(), stroke, color)
        });
    let horizontal = unit_positions(mapper, PlaneAxis::Y, spacing)
        .into_iter()
        .map(|unit_y| {
            let y = mapper.unit_y_to_pixel(unit_y);
            LineSegment::new(0.0, y, surface.width_px(), y, stroke, color)
        });

    let segments: Vec<_> = vertical.chain(horizontal).collect();
    trace!(
        category = set.category().name(),
        count = segments.len(),
        "grid line segments"
    );
    segments
}

/// Short marks of the set's length centered on each axis, perpendicular to it.
///
/// Marks crossing the X axis come first, then marks crossing the Y axis, each
/// in increasing unit order.
#[must_use]
pub fn tic_segments(mapper: CoordinateMapper, set: &LinePropertySet) -> Vec<LineSegment> {
    let Some(spacing) = active_spacing(mapper, set) else {
        return Vec::new();
    };
    let origin = mapper.origin();
    let half_length = set.length().unwrap_or(0.0) / 2.0;
    let stroke = set.stroke();
    let color = set.color();

    let on_x_axis = unit_positions(mapper, PlaneAxis::X, spacing)
        .into_iter()
        .map(|unit_x| {
            let x = mapper.unit_x_to_pixel(unit_x);
            LineSegment::new(
                x,
                origin.y - half_length,
                x,
                origin.y + half_length,
                stroke,
                color,
            )
        });
    let on_y_axis = unit_positions(mapper, PlaneAxis::Y, spacing)
        .into_iter()
        .map(|unit_y| {
            let y = mapper.unit_y_to_pixel(unit_y);
            LineSegment::new(
                origin.x - half_length,
                y,
                origin.x + half_length,
                y,
                stroke,
                color,
            )
        });

    let segments: Vec<_> = on_x_axis.chain(on_y_axis).collect();
    trace!(
        category = set.category().name(),
        count = segments.len(),
        "tic segments"
    );
    segments
}

/// Unit coordinates `k * spacing`, `k != 0`, whose pixel position lies on the
/// surface, in increasing order of `k`.
///
/// Returns nothing for a non-positive or non-finite spacing.
#[must_use]
pub fn unit_positions(mapper: CoordinateMapper, axis: PlaneAxis, spacing: f64) -> Vec<f64> {
    let Some(max_k) = max_multiple(mapper, axis, spacing) else {
        return Vec::new();
    };
    (-max_k..=max_k)
        .filter(|k| *k != 0)
        .map(|k| k as f64 * spacing)
        .collect()
}

/// Largest `k` with `k * spacing` inside the half extent of `axis`.
fn max_multiple(mapper: CoordinateMapper, axis: PlaneAxis, spacing: f64) -> Option<i64> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return None;
    }
    let step_px = spacing * mapper.grid_unit().get();
    if !step_px.is_finite() || step_px <= 0.0 {
        return None;
    }
    let origin = mapper.origin();
    // The origin is centered, so both half extents along an axis are equal.
    let half_extent = match axis {
        PlaneAxis::X => origin.x,
        PlaneAxis::Y => origin.y,
    };
    let max_k = (half_extent / step_px + BOUNDARY_EPSILON).floor();
    if max_k > MAX_LINES_PER_AXIS as f64 {
        warn!(
            spacing,
            step_px,
            limit = MAX_LINES_PER_AXIS,
            "spacing too dense, skipping lines"
        );
        return None;
    }
    Some(max_k as i64)
}

/// Spacing to lay out with, or `None` when the set contributes nothing.
fn active_spacing(mapper: CoordinateMapper, set: &LinePropertySet) -> Option<f64> {
    if mapper.surface().is_empty() || !set.is_drawn() {
        return None;
    }
    match set.spacing() {
        Some(spacing) if spacing.is_finite() && spacing > 0.0 => Some(spacing),
        spacing => {
            trace!(
                category = set.category().name(),
                ?spacing,
                "no usable spacing, category skipped"
            );
            None
        }
    }
}
