//! Regions and bounding boxes

use crate::base::AltitudeMode;
use crate::dom::layout::{parse_value, push_node, write_child, write_value, Layout};
use crate::dom::{Element, Node, ObjectData};
use crate::error::Result;
use crate::xml::XmlWriter;

/// Bounding box plus level of detail that gate a feature's activation
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Region {
    pub(crate) object: ObjectData,
    pub(crate) lat_lon_alt_box: Option<LatLonAltBox>,
    pub(crate) lod: Option<Lod>,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    child_field!(
        lat_lon_alt_box, lat_lon_alt_box_mut, set_lat_lon_alt_box, has_lat_lon_alt_box,
        clear_lat_lon_alt_box: LatLonAltBox
    );
    child_field!(lod, lod_mut, set_lod, has_lod, clear_lod: Lod);
}

impl_object!(Region => Region);

impl Layout for Region {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_child(writer, self.lat_lon_alt_box.as_ref());
        write_child(writer, self.lod.as_ref());
    }

    fn parse_field(&mut self, _name: &str, _text: &str) -> Result<bool> {
        Ok(false)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match child {
            Element::LatLonAltBox(bounds) => self.lat_lon_alt_box = Some(*bounds),
            Element::Lod(lod) => self.lod = Some(*lod),
            other => return Some(other),
        }
        None
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        let mut nodes = Vec::new();
        push_node(&mut nodes, self.lat_lon_alt_box.as_ref());
        push_node(&mut nodes, self.lod.as_ref());
        nodes
    }
}

/// Generates the north/south/east/west fields and their parse arms
macro_rules! bounds {
    ($(#[$meta:meta])* $name:ident { $( $field:ident, $set:ident, $has:ident, $clear:ident: $ty:ty = $default:expr => $tag:literal ),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            pub(crate) object: ObjectData,
            pub(crate) north: Option<f64>,
            pub(crate) south: Option<f64>,
            pub(crate) east: Option<f64>,
            pub(crate) west: Option<f64>,
            $( pub(crate) $field: Option<$ty>, )*
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            value_field!(north, set_north, has_north, clear_north: f64 = 180.0);
            value_field!(south, set_south, has_south, clear_south: f64 = -180.0);
            value_field!(east, set_east, has_east, clear_east: f64 = 180.0);
            value_field!(west, set_west, has_west, clear_west: f64 = -180.0);
            $( value_field!($field, $set, $has, $clear: $ty = $default); )*
        }

        impl_object!($name => $name);

        impl Layout for $name {
            fn write_fields(&self, writer: &mut XmlWriter) {
                write_value(writer, "north", self.north.as_ref());
                write_value(writer, "south", self.south.as_ref());
                write_value(writer, "east", self.east.as_ref());
                write_value(writer, "west", self.west.as_ref());
                $( write_value(writer, $tag, self.$field.as_ref()); )*
            }

            fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
                match name {
                    "north" => self.north = Some(parse_value(name, text)?),
                    "south" => self.south = Some(parse_value(name, text)?),
                    "east" => self.east = Some(parse_value(name, text)?),
                    "west" => self.west = Some(parse_value(name, text)?),
                    $( $tag => self.$field = Some(parse_value(name, text)?), )*
                    _ => return Ok(false),
                }
                Ok(true)
            }

            fn add_child(&mut self, child: Element) -> Option<Element> {
                Some(child)
            }
        }
    };
}

bounds!(
    /// Extruded box bounding a Region
    LatLonAltBox {
        min_altitude, set_min_altitude, has_min_altitude, clear_min_altitude: f64 = 0.0 => "minAltitude",
        max_altitude, set_max_altitude, has_max_altitude, clear_max_altitude: f64 = 0.0 => "maxAltitude",
        altitude_mode, set_altitude_mode, has_altitude_mode,
            clear_altitude_mode: AltitudeMode = AltitudeMode::ClampToGround => "altitudeMode",
    }
);
bounds!(
    /// Where a GroundOverlay is draped
    LatLonBox {
        rotation, set_rotation, has_rotation, clear_rotation: f64 = 0.0 => "rotation",
    }
);

/// Level of detail, in screen pixels
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lod {
    pub(crate) object: ObjectData,
    pub(crate) min_lod_pixels: Option<f64>,
    pub(crate) max_lod_pixels: Option<f64>,
    pub(crate) min_fade_extent: Option<f64>,
    pub(crate) max_fade_extent: Option<f64>,
}

impl Lod {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(min_lod_pixels, set_min_lod_pixels, has_min_lod_pixels, clear_min_lod_pixels: f64 = 0.0);
    value_field!(
        /// -1 means visible at any size
        max_lod_pixels, set_max_lod_pixels, has_max_lod_pixels, clear_max_lod_pixels: f64 = -1.0
    );
    value_field!(
        min_fade_extent, set_min_fade_extent, has_min_fade_extent,
        clear_min_fade_extent: f64 = 0.0
    );
    value_field!(
        max_fade_extent, set_max_fade_extent, has_max_fade_extent,
        clear_max_fade_extent: f64 = 0.0
    );
}

impl_object!(Lod => Lod);

impl Layout for Lod {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_value(writer, "minLodPixels", self.min_lod_pixels.as_ref());
        write_value(writer, "maxLodPixels", self.max_lod_pixels.as_ref());
        write_value(writer, "minFadeExtent", self.min_fade_extent.as_ref());
        write_value(writer, "maxFadeExtent", self.max_fade_extent.as_ref());
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "minLodPixels" => self.min_lod_pixels = Some(parse_value(name, text)?),
            "maxLodPixels" => self.max_lod_pixels = Some(parse_value(name, text)?),
            "minFadeExtent" => self.min_fade_extent = Some(parse_value(name, text)?),
            "maxFadeExtent" => self.max_fade_extent = Some(parse_value(name, text)?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        Some(child)
    }
}
