pub mod mapper;
pub mod types;

pub use mapper::CoordinateMapper;
pub use types::{DrawingSurface, GridUnit, PixelPoint, UnitPoint};
