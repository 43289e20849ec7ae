use cartesian_plane::api::{LineCategory, ProfileEditor, grid_line_segments};
use cartesian_plane::core::{CoordinateMapper, DrawingSurface, GridUnit, UnitPoint};
use cartesian_plane::layout_segments;
use proptest::prelude::*;

fn mapper(width: u32, height: u32, grid_unit: f64) -> CoordinateMapper {
    CoordinateMapper::new(
        DrawingSurface::new(width, height),
        GridUnit::new(grid_unit).expect("valid grid unit"),
    )
}

proptest! {
    #[test]
    fn unit_pixel_round_trip_property(
        width in 0u32..4096,
        height in 0u32..4096,
        grid_unit in 0.01f64..1_000.0,
        x in -10_000.0f64..10_000.0,
        y in -10_000.0f64..10_000.0
    ) {
        let m = mapper(width, height, grid_unit);
        let back = m.to_unit(m.to_pixel(UnitPoint::new(x, y)));
        prop_assert!((back.x - x).abs() <= 1e-6);
        prop_assert!((back.y - y).abs() <= 1e-6);
    }

    #[test]
    fn origin_is_surface_center_property(
        width in 0u32..10_000,
        height in 0u32..10_000,
        grid_unit in 0.01f64..1_000.0
    ) {
        let origin = mapper(width, height, grid_unit).to_pixel(UnitPoint::new(0.0, 0.0));
        prop_assert_eq!(origin.x, f64::from(width) / 2.0);
        prop_assert_eq!(origin.y, f64::from(height) / 2.0);
    }

    #[test]
    fn vertical_grid_lines_are_symmetric_about_center(
        width in 1u32..2000,
        grid_unit in 1.0f64..200.0,
        spacing in 0.05f64..5.0
    ) {
        let mut editor = ProfileEditor::default();
        editor
            .line_property_set_mut(LineCategory::GridLines)
            .set_spacing(spacing)
            .expect("valid spacing");
        let profile = editor.apply();
        let m = mapper(width, 1, grid_unit);
        let center = f64::from(width) / 2.0;

        let xs: Vec<f64> = grid_line_segments(m, profile.grid_lines())
            .into_iter()
            .filter(|s| s.is_vertical())
            .map(|s| s.x1)
            .collect();
        let left = xs.iter().filter(|x| **x < center).count();
        let right = xs.iter().filter(|x| **x > center).count();
        prop_assert_eq!(left, right);
        for (low, high) in xs.iter().zip(xs.iter().rev()) {
            prop_assert!(((center - low) - (high - center)).abs() <= 1e-6);
        }
    }

    #[test]
    fn larger_grid_unit_spreads_grid_lines(
        grid_unit in 1.0f64..100.0,
        growth in 0.5f64..100.0
    ) {
        let surface = DrawingSurface::new(4000, 4000);
        let gap = |unit: f64| {
            let mut editor = ProfileEditor::default();
            editor.set_grid_unit(unit).expect("valid grid unit");
            editor
                .line_property_set_mut(LineCategory::GridLines)
                .set_spacing(1.0)
                .expect("valid spacing");
            let profile = editor.apply();
            let m = CoordinateMapper::new(surface, profile.grid_unit());
            let lines = grid_line_segments(m, profile.grid_lines());
            lines[1].x1 - lines[0].x1
        };
        prop_assert!(gap(grid_unit + growth) > gap(grid_unit));
    }

    #[test]
    fn hidden_grid_lines_never_emit(
        width in 0u32..2000,
        height in 0u32..2000,
        spacing in 0.0f64..10.0,
        stroke in 0.0f64..20.0
    ) {
        let mut editor = ProfileEditor::default();
        let mut grid = editor.line_property_set_mut(LineCategory::GridLines);
        grid.set_draw(false).expect("grid lines support draw");
        grid.set_spacing(spacing).expect("valid spacing");
        grid.set_stroke(stroke).expect("valid stroke");
        let profile = editor.apply();

        let grid_color = profile.grid_lines().color();
        let segments = layout_segments(DrawingSurface::new(width, height), &profile);
        let m = mapper(width, height, profile.grid_unit().get());
        prop_assert!(grid_line_segments(m, profile.grid_lines()).is_empty());
        prop_assert!(segments.iter().all(|s| s.color != grid_color));
    }
}
