//! 3D models placed by a Model geometry

use crate::base::AltitudeMode;
use crate::dom::layout::{
    parse_value, push_node, push_nodes, write_child, write_children, write_string, write_value,
    Layout,
};
use crate::dom::{Element, Link, Node, ObjectData};
use crate::error::Result;
use crate::xml::XmlWriter;

/// COLLADA model positioned, rotated and scaled in the scene
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    pub(crate) object: ObjectData,
    pub(crate) altitude_mode: Option<AltitudeMode>,
    pub(crate) location: Option<Location>,
    pub(crate) orientation: Option<Orientation>,
    pub(crate) scale: Option<Scale>,
    pub(crate) link: Option<Link>,
    pub(crate) resource_map: Option<ResourceMap>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(
        altitude_mode, set_altitude_mode, has_altitude_mode,
        clear_altitude_mode: AltitudeMode = AltitudeMode::ClampToGround
    );
    child_field!(location, location_mut, set_location, has_location, clear_location: Location);
    child_field!(
        orientation, orientation_mut, set_orientation, has_orientation,
        clear_orientation: Orientation
    );
    child_field!(scale, scale_mut, set_scale, has_scale, clear_scale: Scale);
    child_field!(
        /// Model file, usually a `.dae`
        link, link_mut, set_link, has_link, clear_link: Link
    );
    child_field!(
        resource_map, resource_map_mut, set_resource_map, has_resource_map,
        clear_resource_map: ResourceMap
    );
}

impl_object!(Model => Model);

impl Layout for Model {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_value(writer, "altitudeMode", self.altitude_mode.as_ref());
        write_child(writer, self.location.as_ref());
        write_child(writer, self.orientation.as_ref());
        write_child(writer, self.scale.as_ref());
        write_child(writer, self.link.as_ref());
        write_child(writer, self.resource_map.as_ref());
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "altitudeMode" => self.altitude_mode = Some(parse_value(name, text)?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match child {
            Element::Location(location) => self.location = Some(*location),
            Element::Orientation(orientation) => self.orientation = Some(*orientation),
            Element::Scale(scale) => self.scale = Some(*scale),
            Element::Link(link) => self.link = Some(*link),
            Element::ResourceMap(map) => self.resource_map = Some(*map),
            other => return Some(other),
        }
        None
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        let mut nodes = Vec::new();
        push_node(&mut nodes, self.location.as_ref());
        push_node(&mut nodes, self.orientation.as_ref());
        push_node(&mut nodes, self.scale.as_ref());
        push_node(&mut nodes, self.link.as_ref());
        push_node(&mut nodes, self.resource_map.as_ref());
        nodes
    }
}

/// Kinds made of three numeric fields
macro_rules! triple {
    (
        $(#[$meta:meta])*
        $name:ident = $default:literal {
            $( $field:ident, $set:ident, $has:ident, $clear:ident => $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            pub(crate) object: ObjectData,
            $( pub(crate) $field: Option<f64>, )+
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            $( value_field!($field, $set, $has, $clear: f64 = $default); )+
        }

        impl_object!($name => $name);

        impl Layout for $name {
            fn write_fields(&self, writer: &mut XmlWriter) {
                $( write_value(writer, $tag, self.$field.as_ref()); )+
            }

            fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
                match name {
                    $( $tag => self.$field = Some(parse_value(name, text)?), )+
                    _ => return Ok(false),
                }
                Ok(true)
            }
        }
    };
}

triple!(
    /// Where the model origin sits
    Location = 0.0 {
        longitude, set_longitude, has_longitude, clear_longitude => "longitude",
        latitude, set_latitude, has_latitude, clear_latitude => "latitude",
        altitude, set_altitude, has_altitude, clear_altitude => "altitude",
    }
);
triple!(
    /// Rotation of the model in degrees
    Orientation = 0.0 {
        heading, set_heading, has_heading, clear_heading => "heading",
        tilt, set_tilt, has_tilt, clear_tilt => "tilt",
        roll, set_roll, has_roll, clear_roll => "roll",
    }
);
triple!(
    /// Per-axis scale factors
    Scale = 1.0 {
        x, set_x, has_x, clear_x => "x",
        y, set_y, has_y, clear_y => "y",
        z, set_z, has_z, clear_z => "z",
    }
);

/// Texture path rewrites for a model
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceMap {
    pub(crate) object: ObjectData,
    pub(crate) aliases: Vec<Alias>,
}

impl ResourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    child_array!(aliases: Alias;
        add_alias, alias_array_size, alias_array_at, alias_array_at_mut, remove_alias_at);
}

impl_object!(ResourceMap => ResourceMap);

impl Layout for ResourceMap {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_children(writer, &self.aliases);
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match child {
            Element::Alias(alias) => {
                self.aliases.push(*alias);
                None
            }
            other => Some(other),
        }
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        let mut nodes = Vec::new();
        push_nodes(&mut nodes, &self.aliases);
        nodes
    }
}

/// Maps a texture path inside the model file to where it is found
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Alias {
    pub(crate) object: ObjectData,
    pub(crate) target_href: Option<String>,
    pub(crate) source_href: Option<String>,
}

impl Alias {
    pub fn new() -> Self {
        Self::default()
    }

    string_field!(target_href, set_target_href, has_target_href, clear_target_href);
    string_field!(source_href, set_source_href, has_source_href, clear_source_href);
}

impl_object!(Alias => Alias);

impl Layout for Alias {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_string(writer, "targetHref", self.target_href.as_ref());
        write_string(writer, "sourceHref", self.source_href.as_ref());
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "targetHref" => self.target_href = Some(text.to_string()),
            "sourceHref" => self.source_href = Some(text.to_string()),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::layout::write_element;
    use crate::dom::Object;

    #[test]
    fn test_model_parts_in_order() -> Result<()> {
        let mut model = Model::new();
        let mut scale = Scale::new();
        assert!((scale.z() - 1.0).abs() < f64::EPSILON);
        assert!(scale.parse_field("z", "2")?);
        assert!(!scale.parse_field("w", "2")?);

        let mut alias = Alias::new();
        alias.set_target_href("../textures/wall.jpg");
        alias.set_source_href("wall.jpg");
        let mut map = ResourceMap::new();
        map.add_alias(alias);

        assert!(model.add_child(map.into()).is_none());
        assert!(model.add_child(scale.into()).is_none());
        assert!(model.add_child(Location::new().into()).is_none());
        assert!(model.add_child(crate::dom::Point::new().into()).is_some());

        let mut writer = XmlWriter::compact();
        write_element(&model, &mut writer);
        assert_eq!(
            writer.finish(),
            "<Model><Location/><Scale><z>2</z></Scale><ResourceMap><Alias>\
             <targetHref>../textures/wall.jpg</targetHref><sourceHref>wall.jpg</sourceHref>\
             </Alias></ResourceMap></Model>"
        );
        let kinds: Vec<_> = model.child_nodes().iter().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            [
                crate::dom::KmlDomType::Location,
                crate::dom::KmlDomType::Scale,
                crate::dom::KmlDomType::ResourceMap,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_orientation_rejects_text() -> Result<()> {
        let mut orientation = Orientation::new();
        assert!(orientation.parse_field("heading", "45")?);
        assert!(orientation.parse_field("tilt", "steep").is_err());
        assert!((orientation.heading() - 45.0).abs() < f64::EPSILON);
        assert!(!orientation.has_tilt());
        Ok(())
    }
}
