use crate::core::types::{DrawingSurface, GridUnit, PixelPoint, UnitPoint};

/// Maps Cartesian units to surface pixels and back.
///
/// The origin sits at the surface center and the Y axis is inverted, since
/// pixel rows grow downward. Both directions are infallible: the grid unit is
/// validated when it is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    surface: DrawingSurface,
    grid_unit: GridUnit,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(surface: DrawingSurface, grid_unit: GridUnit) -> Self {
        Self { surface, grid_unit }
    }

    #[must_use]
    pub fn surface(self) -> DrawingSurface {
        self.surface
    }

    #[must_use]
    pub fn grid_unit(self) -> GridUnit {
        self.grid_unit
    }

    #[must_use]
    pub fn origin(self) -> PixelPoint {
        self.surface.origin()
    }

    #[must_use]
    pub fn unit_x_to_pixel(self, unit_x: f64) -> f64 {
        self.origin().x + unit_x * self.grid_unit.get()
    }

    #[must_use]
    pub fn unit_y_to_pixel(self, unit_y: f64) -> f64 {
        self.origin().y - unit_y * self.grid_unit.get()
    }

    #[must_use]
    pub fn pixel_x_to_unit(self, pixel_x: f64) -> f64 {
        (pixel_x - self.origin().x) / self.grid_unit.get()
    }

    #[must_use]
    pub fn pixel_y_to_unit(self, pixel_y: f64) -> f64 {
        (self.origin().y - pixel_y) / self.grid_unit.get()
    }

    #[must_use]
    pub fn to_pixel(self, point: UnitPoint) -> PixelPoint {
        PixelPoint::new(self.unit_x_to_pixel(point.x), self.unit_y_to_pixel(point.y))
    }

    #[must_use]
    pub fn to_unit(self, point: PixelPoint) -> UnitPoint {
        UnitPoint::new(self.pixel_x_to_unit(point.x), self.pixel_y_to_unit(point.y))
    }
}
