//! Primitive value types shared by the DOM, parser and serializer

pub mod attributes;
pub mod color;
pub mod coordinates;
pub mod date_time;
pub mod enums;
pub mod vec2;

pub use attributes::Attributes;
pub use color::Color32;
pub use coordinates::{Coordinate, Coordinates};
pub use date_time::DateTime;
pub use enums::{
    AltitudeMode, ColorMode, DisplayMode, GridOrigin, ItemIconState, ListItemType, RefreshMode,
    Shape, StyleState, Units, ViewRefreshMode,
};
pub use vec2::Vec2;
