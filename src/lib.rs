//! cartesian-plane: headless layout engine for a Cartesian plane.
//!
//! Given a drawing surface, a grid unit (pixels per Cartesian unit) and a
//! profile of line property sets, the engine computes the pixel-space line
//! segments for axes, grid lines and tic marks. Painting is left to a
//! [`render::Renderer`] supplied by the host.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{GraphEngine, Profile, ProfileEditor, layout_segments};
pub use error::{PlaneError, PlaneResult};
