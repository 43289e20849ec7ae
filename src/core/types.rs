use serde::{Deserialize, Serialize};

use crate::error::{PlaneError, PlaneResult};

/// Pixel rectangle a render pass lays out into.
///
/// A zero width or height is legal and yields an empty layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawingSurface {
    pub width: u32,
    pub height: u32,
}

impl DrawingSurface {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }

    /// Pixel position of the Cartesian origin: the center of the surface.
    #[must_use]
    pub fn origin(self) -> PixelPoint {
        PixelPoint::new(self.width_px() / 2.0, self.height_px() / 2.0)
    }
}

/// Point in pixel space; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Point in Cartesian units; `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitPoint {
    pub x: f64,
    pub y: f64,
}

impl UnitPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixels per one Cartesian unit. Always finite and `> 0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct GridUnit(f64);

impl GridUnit {
    /// Stock scale of 65 pixels per unit.
    pub const DEFAULT: Self = Self(65.0);

    pub fn new(pixels_per_unit: f64) -> PlaneResult<Self> {
        if !pixels_per_unit.is_finite() || pixels_per_unit <= 0.0 {
            return Err(PlaneError::InvalidGridUnit {
                value: pixels_per_unit,
            });
        }
        Ok(Self(pixels_per_unit))
    }

    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for GridUnit {
    type Error = PlaneError;

    fn try_from(value: f64) -> PlaneResult<Self> {
        Self::new(value)
    }
}

impl From<GridUnit> for f64 {
    fn from(unit: GridUnit) -> Self {
        unit.0
    }
}
