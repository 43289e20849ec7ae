mod engine;
mod frame_builder;
mod json_contract;
mod layout;
mod main_window;
mod profile;
mod property_set;
mod tic_labels;
mod validation;

pub use engine::GraphEngine;
pub use frame_builder::build_frame;
pub use json_contract::{PROFILE_JSON_SCHEMA_V1, ProfileJsonContractV1};
pub use layout::{
    MAX_LINES_PER_AXIS, PlaneAxis, axis_segments, grid_line_segments, layout_segments,
    tic_segments, unit_positions,
};
pub use main_window::MainWindowProperties;
pub use profile::{Profile, ProfileEditor};
pub use property_set::{
    Capabilities, Capability, LineCategory, LinePropertySet, LinePropertySetMut,
};
pub use tic_labels::{X_LABEL_PADDING_PX, Y_LABEL_PADDING_PX, tic_labels};
