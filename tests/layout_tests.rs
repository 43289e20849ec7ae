use approx::assert_abs_diff_eq;
use cartesian_plane::api::{
    LineCategory, Profile, ProfileEditor, axis_segments, grid_line_segments, tic_segments,
};
use cartesian_plane::core::{CoordinateMapper, DrawingSurface};
use cartesian_plane::layout_segments;
use cartesian_plane::render::{Color, LineSegment};

const GRID_COLOR: Color = Color::rgb(0xCB, 0xCB, 0xCB);
const AXIS_COLOR: Color = Color::rgb(0x10, 0x10, 0x10);
const MAJOR_COLOR: Color = Color::rgb(0x20, 0x00, 0x00);
const MINOR_COLOR: Color = Color::rgb(0x00, 0x00, 0x30);

fn profile_with(grid_unit: f64, grid_spacing: f64) -> Profile {
    let mut editor = ProfileEditor::default();
    editor.set_grid_unit(grid_unit).expect("valid grid unit");
    editor
        .line_property_set_mut(LineCategory::GridLines)
        .set_spacing(grid_spacing)
        .expect("valid spacing");
    editor.apply()
}

fn offsets_from(center: f64, xs: impl IntoIterator<Item = f64>) -> Vec<f64> {
    xs.into_iter().map(|x| x - center).collect()
}

fn vertical_xs(segments: &[LineSegment]) -> Vec<f64> {
    segments
        .iter()
        .filter(|s| s.is_vertical() && !s.is_horizontal())
        .map(|s| s.x1)
        .collect()
}

#[test]
fn unit_spacing_places_lines_every_hundred_pixels() {
    let surface = DrawingSurface::new(601, 601);
    let profile = profile_with(100.0, 1.0);
    let mapper = CoordinateMapper::new(surface, profile.grid_unit());

    let lines = grid_line_segments(mapper, profile.grid_lines());
    let xs = vertical_xs(&lines);
    let offsets = offsets_from(300.5, xs);
    assert_eq!(offsets, vec![-300.0, -200.0, -100.0, 100.0, 200.0, 300.0]);
    assert_eq!(lines.len(), 12, "six vertical and six horizontal lines");

    for line in lines.iter().filter(|s| s.is_vertical()) {
        assert_eq!(line.y1, 0.0);
        assert_eq!(line.y2, 601.0);
    }
}

#[test]
fn half_unit_spacing_doubles_line_density() {
    let surface = DrawingSurface::new(601, 601);
    let profile = profile_with(100.0, 0.5);
    let mapper = CoordinateMapper::new(surface, profile.grid_unit());

    let xs = vertical_xs(&grid_line_segments(mapper, profile.grid_lines()));
    let right: Vec<f64> = offsets_from(300.5, xs)
        .into_iter()
        .filter(|offset| *offset > 0.0)
        .collect();
    assert_eq!(right, vec![50.0, 100.0, 150.0, 200.0, 250.0, 300.0]);
}

#[test]
fn horizontal_grid_lines_run_bottom_to_top() {
    let surface = DrawingSurface::new(400, 400);
    let profile = profile_with(100.0, 1.0);
    let mapper = CoordinateMapper::new(surface, profile.grid_unit());

    let ys: Vec<f64> = grid_line_segments(mapper, profile.grid_lines())
        .into_iter()
        .filter(|s| s.is_horizontal())
        .map(|s| s.y1)
        .collect();
    // Increasing unit y means decreasing pixel y.
    assert_eq!(ys, vec![400.0, 300.0, 100.0, 0.0]);
}

#[test]
fn axes_always_produce_two_full_span_segments() {
    let surface = DrawingSurface::new(300, 200);
    let profile = Profile::default();
    let mapper = CoordinateMapper::new(surface, profile.grid_unit());

    let axes = axis_segments(mapper, profile.axes());
    assert_eq!(axes.len(), 2);
    assert_eq!(
        axes[0],
        LineSegment::new(0.0, 100.0, 300.0, 100.0, 2.0, Color::BLACK)
    );
    assert_eq!(
        axes[1],
        LineSegment::new(150.0, 0.0, 150.0, 200.0, 2.0, Color::BLACK)
    );
}

#[test]
fn tics_are_centered_on_axes_with_configured_length() {
    let surface = DrawingSurface::new(500, 500);
    let mut editor = ProfileEditor::default();
    editor.set_grid_unit(100.0).expect("valid grid unit");
    let mut major = editor.line_property_set_mut(LineCategory::TicMajor);
    major.set_spacing(1.0).expect("valid spacing");
    major.set_length(20.0).expect("valid length");
    let profile = editor.apply();
    let mapper = CoordinateMapper::new(surface, profile.grid_unit());

    let tics = tic_segments(mapper, profile.tic_major());
    assert_eq!(tics.len(), 8);

    let first = tics[0];
    assert!(first.is_vertical());
    assert_eq!(first.x1, 50.0);
    assert_eq!((first.y1, first.y2), (240.0, 260.0));

    let first_on_y = tics[4];
    assert!(first_on_y.is_horizontal());
    assert_eq!(first_on_y.y1, 450.0);
    assert_eq!((first_on_y.x1, first_on_y.x2), (240.0, 260.0));

    for tic in &tics {
        assert_abs_diff_eq!(tic.length(), 20.0, epsilon = 1e-9);
        assert_eq!(tic.stroke_width, 5.0);
    }
}

#[test]
fn categories_are_emitted_grid_axes_major_minor() {
    let surface = DrawingSurface::new(400, 400);
    let mut editor = ProfileEditor::default();
    editor.set_grid_unit(100.0).expect("valid grid unit");
    for (category, color) in [
        (LineCategory::GridLines, GRID_COLOR),
        (LineCategory::Axes, AXIS_COLOR),
        (LineCategory::TicMajor, MAJOR_COLOR),
        (LineCategory::TicMinor, MINOR_COLOR),
    ] {
        editor.line_property_set_mut(category).set_color(color);
    }
    let profile = editor.apply();

    let colors: Vec<Color> = layout_segments(surface, &profile)
        .into_iter()
        .map(|s| s.color)
        .collect();
    let mut runs: Vec<Color> = colors.clone();
    runs.dedup();
    assert_eq!(runs, vec![GRID_COLOR, AXIS_COLOR, MAJOR_COLOR, MINOR_COLOR]);
    assert_eq!(colors.iter().filter(|c| **c == AXIS_COLOR).count(), 2);
}

#[test]
fn hidden_categories_contribute_nothing() {
    let surface = DrawingSurface::new(400, 400);
    let mut editor = ProfileEditor::default();
    for category in [
        LineCategory::GridLines,
        LineCategory::TicMajor,
        LineCategory::TicMinor,
    ] {
        editor
            .line_property_set_mut(category)
            .set_draw(false)
            .expect("category supports draw");
    }
    let profile = editor.apply();

    let segments = layout_segments(surface, &profile);
    assert_eq!(segments.len(), 2, "only the axes remain");
}

#[test]
fn zero_spacing_is_a_no_op() {
    let surface = DrawingSurface::new(400, 400);
    let mut editor = ProfileEditor::default();
    editor
        .line_property_set_mut(LineCategory::TicMinor)
        .set_spacing(0.0)
        .expect("zero spacing is accepted");
    let profile = editor.apply();
    let mapper = CoordinateMapper::new(surface, profile.grid_unit());

    assert!(tic_segments(mapper, profile.tic_minor()).is_empty());
    assert!(!layout_segments(surface, &profile).is_empty());
}

#[test]
fn spacing_wider_than_half_extent_emits_nothing() {
    let surface = DrawingSurface::new(200, 200);
    let profile = profile_with(100.0, 1.5);
    let mapper = CoordinateMapper::new(surface, profile.grid_unit());

    assert!(grid_line_segments(mapper, profile.grid_lines()).is_empty());
}

#[test]
fn zero_size_surface_yields_empty_layout() {
    let profile = Profile::default();
    assert!(layout_segments(DrawingSurface::new(0, 601), &profile).is_empty());
    assert!(layout_segments(DrawingSurface::new(601, 0), &profile).is_empty());
}

#[test]
fn layout_is_deterministic_per_snapshot() {
    let surface = DrawingSurface::new(640, 480);
    let profile = Profile::default();
    assert_eq!(
        layout_segments(surface, &profile),
        layout_segments(surface, &profile)
    );
}
