//! hotSpot, overlayXY, screenXY, rotationXY and size

use crate::base::{Units, Vec2};
use crate::dom::layout::{parse_value, Layout};
use crate::dom::{Element, ObjectData};
use crate::error::Result;
use crate::xml::XmlWriter;

macro_rules! vec2_kind {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {$(
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            pub(crate) object: ObjectData,
            pub(crate) vec2: Vec2,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn vec2(&self) -> &Vec2 {
                &self.vec2
            }

            pub fn set_vec2(&mut self, vec2: Vec2) {
                self.vec2 = vec2;
            }

            pub fn x(&self) -> f64 {
                self.vec2.x()
            }

            pub fn set_x(&mut self, x: f64) {
                self.vec2.x = Some(x);
            }

            pub fn y(&self) -> f64 {
                self.vec2.y()
            }

            pub fn set_y(&mut self, y: f64) {
                self.vec2.y = Some(y);
            }

            pub fn xunits(&self) -> Units {
                self.vec2.xunits()
            }

            pub fn set_xunits(&mut self, units: Units) {
                self.vec2.xunits = Some(units);
            }

            pub fn yunits(&self) -> Units {
                self.vec2.yunits()
            }

            pub fn set_yunits(&mut self, units: Units) {
                self.vec2.yunits = Some(units);
            }
        }

        impl_object!($name => $name);

        impl Layout for $name {
            fn write_fields(&self, _writer: &mut XmlWriter) {}

            fn parse_field(&mut self, _name: &str, _text: &str) -> Result<bool> {
                Ok(false)
            }

            fn add_child(&mut self, child: Element) -> Option<Element> {
                Some(child)
            }

            fn parse_attribute(&mut self, name: &str, value: &str) -> Result<bool> {
                parse_vec2_attribute(&mut self.vec2, name, value)
            }

            fn schema_attributes(&self) -> Vec<(&'static str, String)> {
                vec2_attributes(&self.vec2)
            }
        }
    )+};
}

fn parse_vec2_attribute(vec2: &mut Vec2, name: &str, value: &str) -> Result<bool> {
    match name {
        "x" => vec2.x = Some(parse_value(name, value)?),
        "y" => vec2.y = Some(parse_value(name, value)?),
        "xunits" => vec2.xunits = Some(parse_value(name, value)?),
        "yunits" => vec2.yunits = Some(parse_value(name, value)?),
        _ => return Ok(false),
    }
    Ok(true)
}

fn vec2_attributes(vec2: &Vec2) -> Vec<(&'static str, String)> {
    let mut attributes = Vec::new();
    if let Some(x) = vec2.x {
        attributes.push(("x", x.to_string()));
    }
    if let Some(y) = vec2.y {
        attributes.push(("y", y.to_string()));
    }
    if let Some(units) = vec2.xunits {
        attributes.push(("xunits", units.to_string()));
    }
    if let Some(units) = vec2.yunits {
        attributes.push(("yunits", units.to_string()));
    }
    attributes
}

vec2_kind!(
    /// Anchor point inside an icon
    HotSpot,
    /// Point on the overlay image mapped to `screenXY`
    OverlayXY,
    /// Point on the screen where `overlayXY` is placed
    ScreenXY,
    RotationXY,
    Size,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::layout::write_element;

    #[test]
    fn test_attributes_only() -> Result<()> {
        let mut hot_spot = HotSpot::new();
        assert!(hot_spot.parse_attribute("x", "0.5")?);
        assert!(hot_spot.parse_attribute("xunits", "fraction")?);
        assert!(hot_spot.parse_attribute("y", "32")?);
        assert!(hot_spot.parse_attribute("yunits", "insetPixels")?);
        assert!(!hot_spot.parse_attribute("z", "1")?);
        assert!(hot_spot.parse_attribute("xunits", "inches").is_err());

        let mut writer = XmlWriter::compact();
        write_element(&hot_spot, &mut writer);
        assert_eq!(
            writer.finish(),
            "<hotSpot x=\"0.5\" y=\"32\" xunits=\"fraction\" yunits=\"insetPixels\"/>"
        );
        Ok(())
    }

    #[test]
    fn test_setters() {
        let mut size = Size::new();
        size.set_x(-1.0);
        size.set_yunits(Units::Pixels);
        assert!((size.x() + 1.0).abs() < f64::EPSILON);
        assert_eq!(size.yunits(), Units::Pixels);
        assert_eq!(size.xunits(), Units::Fraction);
        assert!(size.vec2().y.is_none());
    }
}
