//! Typed KML object model.
//!
//! Every kind is a plain struct with `Option` fields; capabilities shared
//! across kinds are traits ([`Object`], [`FeatureObject`],
//! [`ContainerObject`], [`OverlayObject`], [`ColorStyleObject`]). Children
//! are owned by value, so a tree cannot contain cycles. [`walk()`] visits a
//! tree read-only through the [`Node`] view every kind provides.

#[macro_use]
mod macros;

pub mod container;
pub mod element;
pub mod extended_data;
pub mod feature;
pub mod geometry;
pub mod kind;
pub mod kml;
pub mod link;
pub mod model;
pub mod object;
pub mod overlay;
pub mod placemark;
pub(crate) mod layout;
pub mod region;
pub mod snippet;
pub mod style;
pub mod time;
pub mod update;
pub mod vec2;
pub mod view;
pub mod walk;

pub use container::{ContainerObject, Document, Folder};
pub use element::{
    AbstractView, Element, ElementKind, Feature, Geometry, StyleSelector, SubStyle,
    TimePrimitive, UpdateOperation,
};
pub use extended_data::{Data, ExtendedData, Schema, SchemaData, SimpleData, SimpleField};
pub use feature::{FeatureData, FeatureObject};
pub use geometry::{
    InnerBoundaryIs, LineString, LinearRing, MultiGeometry, OuterBoundaryIs, Point, Polygon,
};
pub use kind::KmlDomType;
pub use kml::Kml;
pub use link::{Icon, Link, Url};
pub use model::{Alias, Location, Model, Orientation, ResourceMap, Scale};
pub use object::{Object, ObjectData};
pub use overlay::{
    GroundOverlay, ImagePyramid, OverlayData, OverlayObject, PhotoOverlay, ScreenOverlay,
    ViewVolume,
};
pub use placemark::{NetworkLink, Placemark};
pub use region::{LatLonAltBox, LatLonBox, Lod, Region};
pub use snippet::{LinkSnippet, Snippet};
pub use style::{
    BalloonStyle, ColorStyleData, ColorStyleObject, IconStyle, ItemIcon, LabelStyle, LineStyle,
    ListStyle, Pair, PolyStyle, Style, StyleMap,
};
pub use time::{TimeSpan, TimeStamp};
pub use update::{Change, Create, Delete, NetworkLinkControl, Update};
pub use vec2::{HotSpot, OverlayXY, RotationXY, ScreenXY, Size};
pub use view::{Camera, LookAt};
pub use walk::{elements_of, elements_of_kind, walk, Node, Visitor};
