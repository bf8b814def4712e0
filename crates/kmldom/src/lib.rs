//! kmldom - typed document object model for KML
//!
//! Elements are created through [`KmlFactory`], mutated with typed
//! accessors, parsed from text with [`parse`] and written back with
//! [`serialize_pretty`] or [`serialize_raw`]. Serializing a parsed tree is
//! a fixed point: parsing the output and serializing again yields the same
//! bytes.
//!
//! # Quick Start
//!
//! ```
//! use kmldom::prelude::*;
//! # fn main() -> Result<(), kmldom::Error> {
//! let mut placemark = KmlFactory::create_placemark();
//! placemark.set_name("Pier 39");
//! let mut coordinates = Coordinates::new();
//! coordinates.add_latlng(37.8087, -122.4098);
//! let mut point = KmlFactory::create_point();
//! point.set_coordinates(coordinates);
//! placemark.set_geometry(point);
//!
//! let mut folder = KmlFactory::create_folder();
//! folder.add_feature(placemark.into());
//!
//! let text = kmldom::serialize_raw(&folder);
//! let root = kmldom::parse(&text)?;
//! let name = root
//!     .as_container()
//!     .and_then(|folder| folder.features().first())
//!     .map(|feature| feature.name().to_string())
//!     .unwrap_or_default();
//! assert_eq!(name, "Pier 39");
//! assert_eq!(kmldom::serialize_raw(&root), text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod base;
pub use base::{
    AltitudeMode, Attributes, Color32, ColorMode, Coordinate, Coordinates, DateTime, DisplayMode,
    GridOrigin, ItemIconState, ListItemType, RefreshMode, Shape, StyleState, Units, Vec2,
    ViewRefreshMode,
};

pub mod dom;
pub use dom::{
    ColorStyleObject, ContainerObject, Element, ElementKind, FeatureObject, KmlDomType, Node,
    Object, OverlayObject, Visitor,
};

pub mod factory;
pub use factory::KmlFactory;

pub mod parser;
pub use parser::{Config, Parser, Strictness};

pub mod serializer;
pub use serializer::{Mode, SerializeKml};

pub mod xml;

/// Everything needed to build, inspect and write trees
pub mod prelude {
    pub use crate::base::{
        AltitudeMode, Color32, ColorMode, Coordinate, Coordinates, DateTime, DisplayMode,
        GridOrigin, ItemIconState, ListItemType, RefreshMode, Shape, StyleState, Units, Vec2,
        ViewRefreshMode,
    };
    pub use crate::dom::{
        AbstractView, ColorStyleObject, ContainerObject, Element, ElementKind, Feature,
        FeatureObject, Geometry, KmlDomType, Node, Object, OverlayObject, StyleSelector,
        SubStyle, TimePrimitive, UpdateOperation, Visitor,
    };
    pub use crate::factory::KmlFactory;
    pub use crate::parser::{Config, Strictness};
    pub use crate::serializer::{Mode, SerializeKml};
}

/// Parse KML text with the default (lenient) configuration
pub fn parse(input: &str) -> Result<Element> {
    parser::parse(input)
}

/// Parse KML bytes with the default configuration
pub fn parse_bytes(input: &[u8]) -> Result<Element> {
    Parser::new(input).parse()
}

/// Parse with custom configuration
pub fn parse_with_config(input: &str, config: Config) -> Result<Element> {
    parser::parse_with_config(input, config)
}

/// Serialize in the given layout
pub fn serialize<T: SerializeKml + ?Sized>(element: &T, mode: Mode) -> String {
    serializer::serialize(element, mode)
}

/// Serialize with one element per line
pub fn serialize_pretty<T: SerializeKml + ?Sized>(element: &T) -> String {
    serializer::serialize_pretty(element)
}

/// Serialize without inserted whitespace
pub fn serialize_raw<T: SerializeKml + ?Sized>(element: &T) -> String {
    serializer::serialize_raw(element)
}
