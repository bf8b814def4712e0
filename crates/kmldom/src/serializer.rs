//! KML serializer: typed tree to markup text.
//!
//! Fields are written in the canonical order of each kind, absent optional
//! fields are omitted and passthrough elements follow the known content.
//! The output of [`serialize`] is a fixed point under [`crate::parse`].

use crate::dom::layout::{write_element, Layout};
use crate::xml::XmlWriter;

/// Output layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// One element per line, children indented by two spaces
    #[default]
    Pretty,
    /// No inserted whitespace
    Compact,
}

impl Mode {
    fn writer(self) -> XmlWriter {
        match self {
            Self::Pretty => XmlWriter::pretty(),
            Self::Compact => XmlWriter::compact(),
        }
    }
}

/// Anything that can be written as a KML element: every element kind, the
/// family enums and [`crate::Element`]
pub trait SerializeKml {
    #[doc(hidden)]
    fn write_kml(&self, writer: &mut XmlWriter);
}

impl<T: Layout + ?Sized> SerializeKml for T {
    fn write_kml(&self, writer: &mut XmlWriter) {
        write_element(self, writer);
    }
}

pub fn serialize<T: SerializeKml + ?Sized>(element: &T, mode: Mode) -> String {
    let mut writer = mode.writer();
    element.write_kml(&mut writer);
    writer.finish()
}

/// Indented output, one element per line
pub fn serialize_pretty<T: SerializeKml + ?Sized>(element: &T) -> String {
    serialize(element, Mode::Pretty)
}

/// Compact output without inserted whitespace
pub fn serialize_raw<T: SerializeKml + ?Sized>(element: &T) -> String {
    serialize(element, Mode::Compact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Coordinates;
    use crate::dom::{ContainerObject, FeatureObject, Folder, Object, Placemark, Point};

    fn sample() -> Folder {
        let mut point = Point::new();
        let mut coordinates = Coordinates::new();
        coordinates.add_latlng(37.0, -122.0);
        point.set_coordinates(coordinates);

        let mut placemark = Placemark::new();
        placemark.set_id("pm");
        placemark.set_name("here");
        placemark.set_geometry(point);

        let mut folder = Folder::new();
        folder.set_open(true);
        folder.add_feature(placemark.into());
        folder
    }

    #[test]
    fn test_compact() {
        assert_eq!(
            serialize_raw(&sample()),
            "<Folder><open>1</open><Placemark id=\"pm\"><name>here</name>\
             <Point><coordinates>-122,37</coordinates></Point></Placemark></Folder>"
        );
    }

    #[test]
    fn test_pretty() {
        let expected = "<Folder>\n  <open>1</open>\n  <Placemark id=\"pm\">\n    \
                        <name>here</name>\n    <Point>\n      \
                        <coordinates>-122,37</coordinates>\n    </Point>\n  \
                        </Placemark>\n</Folder>\n";
        assert_eq!(serialize_pretty(&sample()), expected);
    }

    #[test]
    fn test_empty_element_is_self_closing() {
        assert_eq!(serialize_raw(&Placemark::new()), "<Placemark/>");
        assert_eq!(serialize_pretty(&Placemark::new()), "<Placemark/>\n");
    }

    #[test]
    fn test_order_is_independent_of_set_order() {
        let mut first = Placemark::new();
        first.set_description("d");
        first.set_name("n");
        let mut second = Placemark::new();
        second.set_name("n");
        second.set_description("d");
        assert_eq!(serialize_raw(&first), serialize_raw(&second));
        assert_eq!(
            serialize_raw(&first),
            "<Placemark><name>n</name><description>d</description></Placemark>"
        );
    }

    #[test]
    fn test_escaping() {
        let mut placemark = Placemark::new();
        placemark.set_name("a<b & \"c\"");
        placemark.attributes_mut().set("note", "it's");
        assert_eq!(
            serialize_raw(&placemark),
            "<Placemark note=\"it&apos;s\"><name>a&lt;b &amp; &quot;c&quot;</name></Placemark>"
        );
    }
}
