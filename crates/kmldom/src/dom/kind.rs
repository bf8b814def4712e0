//! Closed enumeration of element kinds

use std::fmt;

macro_rules! kinds {
    ($( $kind:ident => $tag:literal ),+ $(,)?) => {
        /// Runtime type tag of a DOM element
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum KmlDomType {
            $( $kind, )+
        }

        impl KmlDomType {
            /// Every kind, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$kind),+];

            /// Element name used in markup
            pub const fn tag_name(self) -> &'static str {
                match self {
                    $( Self::$kind => $tag, )+
                }
            }

            /// Kind for an element name; names are case-sensitive
            pub fn from_tag_name(tag: &str) -> Option<Self> {
                match tag {
                    $( $tag => Some(Self::$kind), )+
                    _ => None,
                }
            }
        }
    };
}

kinds! {
    Kml => "kml",
    NetworkLinkControl => "NetworkLinkControl",
    Update => "Update",
    Create => "Create",
    Delete => "Delete",
    Change => "Change",
    Document => "Document",
    Folder => "Folder",
    Placemark => "Placemark",
    NetworkLink => "NetworkLink",
    GroundOverlay => "GroundOverlay",
    ScreenOverlay => "ScreenOverlay",
    PhotoOverlay => "PhotoOverlay",
    Point => "Point",
    LineString => "LineString",
    LinearRing => "LinearRing",
    Polygon => "Polygon",
    MultiGeometry => "MultiGeometry",
    Model => "Model",
    Style => "Style",
    StyleMap => "StyleMap",
    Pair => "Pair",
    IconStyle => "IconStyle",
    LabelStyle => "LabelStyle",
    LineStyle => "LineStyle",
    PolyStyle => "PolyStyle",
    BalloonStyle => "BalloonStyle",
    ListStyle => "ListStyle",
    ItemIcon => "ItemIcon",
    TimeStamp => "TimeStamp",
    TimeSpan => "TimeSpan",
    LookAt => "LookAt",
    Camera => "Camera",
    Region => "Region",
    LatLonAltBox => "LatLonAltBox",
    Lod => "Lod",
    LatLonBox => "LatLonBox",
    Link => "Link",
    Icon => "Icon",
    Url => "Url",
    Snippet => "Snippet",
    LinkSnippet => "linkSnippet",
    ExtendedData => "ExtendedData",
    Data => "Data",
    Schema => "Schema",
    SimpleField => "SimpleField",
    SchemaData => "SchemaData",
    SimpleData => "SimpleData",
    ViewVolume => "ViewVolume",
    ImagePyramid => "ImagePyramid",
    Location => "Location",
    Orientation => "Orientation",
    Scale => "Scale",
    ResourceMap => "ResourceMap",
    Alias => "Alias",
    OuterBoundaryIs => "outerBoundaryIs",
    InnerBoundaryIs => "innerBoundaryIs",
    HotSpot => "hotSpot",
    OverlayXY => "overlayXY",
    ScreenXY => "screenXY",
    RotationXY => "rotationXY",
    Size => "size",
}

impl KmlDomType {
    pub const fn is_feature(self) -> bool {
        matches!(
            self,
            Self::Document
                | Self::Folder
                | Self::Placemark
                | Self::NetworkLink
                | Self::GroundOverlay
                | Self::ScreenOverlay
                | Self::PhotoOverlay
        )
    }

    pub const fn is_container(self) -> bool {
        matches!(self, Self::Document | Self::Folder)
    }

    pub const fn is_overlay(self) -> bool {
        matches!(
            self,
            Self::GroundOverlay | Self::ScreenOverlay | Self::PhotoOverlay
        )
    }

    pub const fn is_geometry(self) -> bool {
        matches!(
            self,
            Self::Point
                | Self::LineString
                | Self::LinearRing
                | Self::Polygon
                | Self::MultiGeometry
                | Self::Model
        )
    }

    pub const fn is_style_selector(self) -> bool {
        matches!(self, Self::Style | Self::StyleMap)
    }

    pub const fn is_sub_style(self) -> bool {
        self.is_color_style() || matches!(self, Self::BalloonStyle | Self::ListStyle)
    }

    pub const fn is_color_style(self) -> bool {
        matches!(
            self,
            Self::IconStyle | Self::LabelStyle | Self::LineStyle | Self::PolyStyle
        )
    }

    pub const fn is_time_primitive(self) -> bool {
        matches!(self, Self::TimeStamp | Self::TimeSpan)
    }

    pub const fn is_abstract_view(self) -> bool {
        matches!(self, Self::LookAt | Self::Camera)
    }

    /// Create, Delete or Change inside an Update
    pub const fn is_update_operation(self) -> bool {
        matches!(self, Self::Create | Self::Delete | Self::Change)
    }

    /// Kinds whose element body is character data rather than fields
    pub const fn has_text_content(self) -> bool {
        matches!(self, Self::Snippet | Self::LinkSnippet | Self::SimpleData)
    }

    /// Unit-vector kinds whose content lives entirely in attributes
    pub const fn is_vec2(self) -> bool {
        matches!(
            self,
            Self::HotSpot | Self::OverlayXY | Self::ScreenXY | Self::RotationXY | Self::Size
        )
    }
}

impl fmt::Display for KmlDomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names_round_trip() {
        for kind in KmlDomType::ALL {
            assert_eq!(KmlDomType::from_tag_name(kind.tag_name()), Some(*kind));
        }
        assert_eq!(KmlDomType::ALL.len(), 62);
    }

    #[test]
    fn test_tag_lookup_is_case_sensitive() {
        assert_eq!(KmlDomType::from_tag_name("placemark"), None);
        assert_eq!(KmlDomType::from_tag_name("Kml"), None);
        assert_eq!(KmlDomType::from_tag_name("hotSpot"), Some(KmlDomType::HotSpot));
        assert_eq!(KmlDomType::from_tag_name("coordinates"), None);
        assert_eq!(KmlDomType::from_tag_name("Scale"), Some(KmlDomType::Scale));
        assert_eq!(KmlDomType::from_tag_name("scale"), None);
        assert_eq!(KmlDomType::from_tag_name("linkSnippet"), Some(KmlDomType::LinkSnippet));
    }

    #[test]
    fn test_families() {
        assert!(KmlDomType::Folder.is_feature());
        assert!(KmlDomType::Folder.is_container());
        assert!(!KmlDomType::Placemark.is_container());
        assert!(KmlDomType::GroundOverlay.is_overlay());
        assert!(KmlDomType::LinearRing.is_geometry());
        assert!(KmlDomType::BalloonStyle.is_sub_style());
        assert!(!KmlDomType::BalloonStyle.is_color_style());
        assert!(KmlDomType::PolyStyle.is_color_style());
        assert!(KmlDomType::TimeSpan.is_time_primitive());
        assert!(KmlDomType::Camera.is_abstract_view());
        assert!(KmlDomType::Size.is_vec2());
        assert!(!KmlDomType::Kml.is_feature());
        assert!(KmlDomType::PhotoOverlay.is_overlay());
        assert!(KmlDomType::Model.is_geometry());
        assert!(KmlDomType::ListStyle.is_sub_style());
        assert!(!KmlDomType::ListStyle.is_color_style());
        assert!(KmlDomType::Delete.is_update_operation());
        assert!(!KmlDomType::Update.is_update_operation());
        assert!(KmlDomType::SimpleData.has_text_content());
        assert!(!KmlDomType::SimpleField.has_text_content());
    }
}
