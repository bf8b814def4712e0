//! Abstract views: LookAt and Camera

use crate::base::AltitudeMode;
use crate::dom::layout::{parse_value, write_value, Layout};
use crate::dom::{Element, ObjectData};
use crate::error::Result;
use crate::xml::XmlWriter;

macro_rules! view {
    (
        $(#[$meta:meta])*
        $name:ident { $third:ident, $set_third:ident, $has_third:ident, $clear_third:ident => $tag:literal }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            pub(crate) object: ObjectData,
            pub(crate) longitude: Option<f64>,
            pub(crate) latitude: Option<f64>,
            pub(crate) altitude: Option<f64>,
            pub(crate) heading: Option<f64>,
            pub(crate) tilt: Option<f64>,
            pub(crate) $third: Option<f64>,
            pub(crate) altitude_mode: Option<AltitudeMode>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            value_field!(longitude, set_longitude, has_longitude, clear_longitude: f64 = 0.0);
            value_field!(latitude, set_latitude, has_latitude, clear_latitude: f64 = 0.0);
            value_field!(altitude, set_altitude, has_altitude, clear_altitude: f64 = 0.0);
            value_field!(heading, set_heading, has_heading, clear_heading: f64 = 0.0);
            value_field!(tilt, set_tilt, has_tilt, clear_tilt: f64 = 0.0);
            value_field!($third, $set_third, $has_third, $clear_third: f64 = 0.0);
            value_field!(
                altitude_mode, set_altitude_mode, has_altitude_mode,
                clear_altitude_mode: AltitudeMode = AltitudeMode::ClampToGround
            );
        }

        impl_object!($name => $name);

        impl Layout for $name {
            fn write_fields(&self, writer: &mut XmlWriter) {
                write_value(writer, "longitude", self.longitude.as_ref());
                write_value(writer, "latitude", self.latitude.as_ref());
                write_value(writer, "altitude", self.altitude.as_ref());
                write_value(writer, "heading", self.heading.as_ref());
                write_value(writer, "tilt", self.tilt.as_ref());
                write_value(writer, $tag, self.$third.as_ref());
                write_value(writer, "altitudeMode", self.altitude_mode.as_ref());
            }

            fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
                match name {
                    "longitude" => self.longitude = Some(parse_value(name, text)?),
                    "latitude" => self.latitude = Some(parse_value(name, text)?),
                    "altitude" => self.altitude = Some(parse_value(name, text)?),
                    "heading" => self.heading = Some(parse_value(name, text)?),
                    "tilt" => self.tilt = Some(parse_value(name, text)?),
                    $tag => self.$third = Some(parse_value(name, text)?),
                    "altitudeMode" => self.altitude_mode = Some(parse_value(name, text)?),
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

view!(
    /// Viewpoint looking at a target position from `range` meters away
    LookAt { range, set_range, has_range, clear_range => "range" }
);
view!(
    /// Viewpoint placed at a position, oriented by heading, tilt and roll
    Camera { roll, set_roll, has_roll, clear_roll => "roll" }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_look_at_range() -> Result<()> {
        let mut look_at = LookAt::new();
        assert!(look_at.parse_field("range", "1500.5")?);
        assert!(look_at.parse_field("tilt", "45")?);
        assert!(!look_at.parse_field("roll", "10")?);
        assert!((look_at.range() - 1500.5).abs() < f64::EPSILON);
        assert!(!look_at.has_heading());
        Ok(())
    }

    #[test]
    fn test_camera_roll() -> Result<()> {
        let mut camera = Camera::new();
        camera.set_roll(-3.5);
        camera.set_altitude_mode(AltitudeMode::Absolute);
        assert!(camera.has_roll());
        assert!(!camera.parse_field("range", "10")?);
        assert!(camera.parse_field("latitude", "north").is_err());
        Ok(())
    }
}
