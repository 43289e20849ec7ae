use crate::core::{CoordinateMapper, DrawingSurface, PixelPoint, UnitPoint};
use crate::error::PlaneResult;
use crate::render::{RenderFrame, Renderer};

use super::Profile;
use super::frame_builder::build_frame;

/// Facade pairing a profile snapshot with a painting backend.
///
/// Each pass is recomputed from scratch; the host calls `render` whenever its
/// surface size or profile changes.
pub struct GraphEngine<R: Renderer> {
    renderer: R,
    profile: Profile,
}

impl<R: Renderer> GraphEngine<R> {
    #[must_use]
    pub fn new(renderer: R, profile: Profile) -> Self {
        Self { renderer, profile }
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Swaps in a new snapshot, typically from `ProfileEditor::apply`.
    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = profile;
    }

    #[must_use]
    pub fn mapper(&self, surface: DrawingSurface) -> CoordinateMapper {
        CoordinateMapper::new(surface, self.profile.grid_unit())
    }

    #[must_use]
    pub fn map_unit_to_pixel(&self, surface: DrawingSurface, point: UnitPoint) -> PixelPoint {
        self.mapper(surface).to_pixel(point)
    }

    #[must_use]
    pub fn map_pixel_to_unit(&self, surface: DrawingSurface, point: PixelPoint) -> UnitPoint {
        self.mapper(surface).to_unit(point)
    }

    #[must_use]
    pub fn build_frame(&self, surface: DrawingSurface) -> RenderFrame {
        build_frame(surface, &self.profile)
    }

    pub fn render(&mut self, surface: DrawingSurface) -> PlaneResult<()> {
        let frame = build_frame(surface, &self.profile);
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
