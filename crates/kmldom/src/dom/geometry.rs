//! Geometries and polygon boundaries

use crate::base::{AltitudeMode, Coordinates};
use crate::dom::layout::{
    parse_bool, parse_value, push_node, push_nodes, write_bool, write_child, write_children,
    write_value, Layout,
};
use crate::dom::{Element, Geometry, Node, ObjectData};
use crate::error::Result;
use crate::xml::XmlWriter;

/// Single position
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub(crate) object: ObjectData,
    pub(crate) extrude: Option<bool>,
    pub(crate) altitude_mode: Option<AltitudeMode>,
    pub(crate) coordinates: Option<Coordinates>,
}

impl Point {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(extrude, set_extrude, has_extrude, clear_extrude: bool = false);
    value_field!(
        altitude_mode, set_altitude_mode, has_altitude_mode,
        clear_altitude_mode: AltitudeMode = AltitudeMode::ClampToGround
    );
    child_field!(
        coordinates, coordinates_mut, set_coordinates, has_coordinates,
        clear_coordinates: Coordinates
    );
}

impl_object!(Point => Point);

impl Layout for Point {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_bool(writer, "extrude", self.extrude);
        write_value(writer, "altitudeMode", self.altitude_mode.as_ref());
        write_value(writer, "coordinates", self.coordinates.as_ref());
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "extrude" => self.extrude = Some(parse_bool(name, text)?),
            "altitudeMode" => self.altitude_mode = Some(parse_value(name, text)?),
            "coordinates" => self.coordinates = Some(text.parse()?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        Some(child)
    }
}

macro_rules! path_geometry {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            pub(crate) object: ObjectData,
            pub(crate) extrude: Option<bool>,
            pub(crate) tessellate: Option<bool>,
            pub(crate) altitude_mode: Option<AltitudeMode>,
            pub(crate) coordinates: Option<Coordinates>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            value_field!(extrude, set_extrude, has_extrude, clear_extrude: bool = false);
            value_field!(tessellate, set_tessellate, has_tessellate, clear_tessellate: bool = false);
            value_field!(
                altitude_mode, set_altitude_mode, has_altitude_mode,
                clear_altitude_mode: AltitudeMode = AltitudeMode::ClampToGround
            );
            child_field!(
                coordinates, coordinates_mut, set_coordinates, has_coordinates,
                clear_coordinates: Coordinates
            );
        }

        impl_object!($name => $name);

        impl Layout for $name {
            fn write_fields(&self, writer: &mut XmlWriter) {
                write_bool(writer, "extrude", self.extrude);
                write_bool(writer, "tessellate", self.tessellate);
                write_value(writer, "altitudeMode", self.altitude_mode.as_ref());
                write_value(writer, "coordinates", self.coordinates.as_ref());
            }

            fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
                match name {
                    "extrude" => self.extrude = Some(parse_bool(name, text)?),
                    "tessellate" => self.tessellate = Some(parse_bool(name, text)?),
                    "altitudeMode" => self.altitude_mode = Some(parse_value(name, text)?),
                    "coordinates" => self.coordinates = Some(text.parse()?),
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

path_geometry!(
    /// Connected line segments
    LineString
);
path_geometry!(
    /// Closed line string; first and last coordinates should coincide
    LinearRing
);

/// Area bounded by one outer ring and any number of holes
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub(crate) object: ObjectData,
    pub(crate) extrude: Option<bool>,
    pub(crate) tessellate: Option<bool>,
    pub(crate) altitude_mode: Option<AltitudeMode>,
    pub(crate) outer_boundary_is: Option<OuterBoundaryIs>,
    pub(crate) inner_boundary_is: Vec<InnerBoundaryIs>,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(extrude, set_extrude, has_extrude, clear_extrude: bool = false);
    value_field!(tessellate, set_tessellate, has_tessellate, clear_tessellate: bool = false);
    value_field!(
        altitude_mode, set_altitude_mode, has_altitude_mode,
        clear_altitude_mode: AltitudeMode = AltitudeMode::ClampToGround
    );
    child_field!(
        outer_boundary_is, outer_boundary_is_mut, set_outer_boundary_is,
        has_outer_boundary_is, clear_outer_boundary_is: OuterBoundaryIs
    );
    child_array!(inner_boundary_is: InnerBoundaryIs;
        add_inner_boundary_is, inner_boundary_is_array_size, inner_boundary_is_array_at,
        inner_boundary_is_array_at_mut, remove_inner_boundary_is_at);
}

impl_object!(Polygon => Polygon);

impl Layout for Polygon {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_bool(writer, "extrude", self.extrude);
        write_bool(writer, "tessellate", self.tessellate);
        write_value(writer, "altitudeMode", self.altitude_mode.as_ref());
        write_child(writer, self.outer_boundary_is.as_ref());
        write_children(writer, &self.inner_boundary_is);
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "extrude" => self.extrude = Some(parse_bool(name, text)?),
            "tessellate" => self.tessellate = Some(parse_bool(name, text)?),
            "altitudeMode" => self.altitude_mode = Some(parse_value(name, text)?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match child {
            Element::OuterBoundaryIs(outer) => self.outer_boundary_is = Some(*outer),
            Element::InnerBoundaryIs(inner) => self.inner_boundary_is.push(*inner),
            other => return Some(other),
        }
        None
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        let mut nodes = Vec::new();
        push_node(&mut nodes, self.outer_boundary_is.as_ref());
        push_nodes(&mut nodes, &self.inner_boundary_is);
        nodes
    }
}

/// Ordered collection of child geometries
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiGeometry {
    pub(crate) object: ObjectData,
    pub(crate) geometries: Vec<Geometry>,
}

impl MultiGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    child_array!(geometries: Geometry;
        add_geometry, geometry_array_size, geometry_array_at, geometry_array_at_mut,
        remove_geometry_at);
}

impl_object!(MultiGeometry => MultiGeometry);

impl Layout for MultiGeometry {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_children(writer, &self.geometries);
    }

    fn parse_field(&mut self, _name: &str, _text: &str) -> Result<bool> {
        Ok(false)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match child {
            Element::Geometry(geometry) => {
                self.geometries.push(geometry);
                None
            }
            other => Some(other),
        }
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        self.geometries.iter().map(Geometry::as_node).collect()
    }
}

macro_rules! boundary {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            pub(crate) object: ObjectData,
            pub(crate) linear_ring: Option<LinearRing>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            child_field!(
                linear_ring, linear_ring_mut, set_linear_ring, has_linear_ring,
                clear_linear_ring: LinearRing
            );
        }

        impl_object!($name => $name);

        impl Layout for $name {
            fn write_fields(&self, writer: &mut XmlWriter) {
                write_child(writer, self.linear_ring.as_ref());
            }

            fn parse_field(&mut self, _name: &str, _text: &str) -> Result<bool> {
                Ok(false)
            }

            fn add_child(&mut self, child: Element) -> Option<Element> {
                match child {
                    Element::Geometry(Geometry::LinearRing(ring)) => {
                        self.linear_ring = Some(*ring);
                        None
                    }
                    other => Some(other),
                }
            }

            fn child_nodes(&self) -> Vec<&dyn Node> {
                let mut nodes = Vec::new();
                push_node(&mut nodes, self.linear_ring.as_ref());
                nodes
            }
        }
    };
}

boundary!(
    /// Exterior ring of a Polygon
    OuterBoundaryIs
);
boundary!(
    /// One hole of a Polygon
    InnerBoundaryIs
);
