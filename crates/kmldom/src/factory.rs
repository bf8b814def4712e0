//! Element construction by kind or tag name

use crate::dom::{
    Alias, BalloonStyle, Camera, Change, Create, Data, Delete, Document, Element, ExtendedData,
    Folder, GroundOverlay, HotSpot, Icon, IconStyle, ImagePyramid, InnerBoundaryIs, ItemIcon, Kml,
    KmlDomType, LabelStyle, LatLonAltBox, LatLonBox, LineString, LineStyle, LinearRing, Link,
    LinkSnippet, ListStyle, Location, Lod, LookAt, Model, MultiGeometry, NetworkLink,
    NetworkLinkControl, Orientation, OuterBoundaryIs, OverlayXY, Pair, PhotoOverlay, Placemark,
    Point, PolyStyle, Polygon, Region, ResourceMap, RotationXY, Scale, Schema, SchemaData,
    ScreenOverlay, ScreenXY, SimpleData, SimpleField, Size, Snippet, Style, StyleMap, TimeSpan,
    TimeStamp, Update, Url, ViewVolume,
};

type Constructor = fn() -> Element;

fn construct<T: Default + Into<Element>>() -> Element {
    T::default().into()
}

/// Every constructible kind; the parser allocates through this table too
static REGISTRY: &[(KmlDomType, Constructor)] = &[
    (KmlDomType::Kml, construct::<Kml>),
    (KmlDomType::NetworkLinkControl, construct::<NetworkLinkControl>),
    (KmlDomType::Update, construct::<Update>),
    (KmlDomType::Create, construct::<Create>),
    (KmlDomType::Delete, construct::<Delete>),
    (KmlDomType::Change, construct::<Change>),
    (KmlDomType::Document, construct::<Document>),
    (KmlDomType::Folder, construct::<Folder>),
    (KmlDomType::Placemark, construct::<Placemark>),
    (KmlDomType::NetworkLink, construct::<NetworkLink>),
    (KmlDomType::GroundOverlay, construct::<GroundOverlay>),
    (KmlDomType::ScreenOverlay, construct::<ScreenOverlay>),
    (KmlDomType::PhotoOverlay, construct::<PhotoOverlay>),
    (KmlDomType::Point, construct::<Point>),
    (KmlDomType::LineString, construct::<LineString>),
    (KmlDomType::LinearRing, construct::<LinearRing>),
    (KmlDomType::Polygon, construct::<Polygon>),
    (KmlDomType::MultiGeometry, construct::<MultiGeometry>),
    (KmlDomType::Model, construct::<Model>),
    (KmlDomType::Style, construct::<Style>),
    (KmlDomType::StyleMap, construct::<StyleMap>),
    (KmlDomType::Pair, construct::<Pair>),
    (KmlDomType::IconStyle, construct::<IconStyle>),
    (KmlDomType::LabelStyle, construct::<LabelStyle>),
    (KmlDomType::LineStyle, construct::<LineStyle>),
    (KmlDomType::PolyStyle, construct::<PolyStyle>),
    (KmlDomType::BalloonStyle, construct::<BalloonStyle>),
    (KmlDomType::ListStyle, construct::<ListStyle>),
    (KmlDomType::ItemIcon, construct::<ItemIcon>),
    (KmlDomType::TimeStamp, construct::<TimeStamp>),
    (KmlDomType::TimeSpan, construct::<TimeSpan>),
    (KmlDomType::LookAt, construct::<LookAt>),
    (KmlDomType::Camera, construct::<Camera>),
    (KmlDomType::Region, construct::<Region>),
    (KmlDomType::LatLonAltBox, construct::<LatLonAltBox>),
    (KmlDomType::Lod, construct::<Lod>),
    (KmlDomType::LatLonBox, construct::<LatLonBox>),
    (KmlDomType::Link, construct::<Link>),
    (KmlDomType::Icon, construct::<Icon>),
    (KmlDomType::Url, construct::<Url>),
    (KmlDomType::Snippet, construct::<Snippet>),
    (KmlDomType::LinkSnippet, construct::<LinkSnippet>),
    (KmlDomType::ExtendedData, construct::<ExtendedData>),
    (KmlDomType::Data, construct::<Data>),
    (KmlDomType::Schema, construct::<Schema>),
    (KmlDomType::SimpleField, construct::<SimpleField>),
    (KmlDomType::SchemaData, construct::<SchemaData>),
    (KmlDomType::SimpleData, construct::<SimpleData>),
    (KmlDomType::ViewVolume, construct::<ViewVolume>),
    (KmlDomType::ImagePyramid, construct::<ImagePyramid>),
    (KmlDomType::Location, construct::<Location>),
    (KmlDomType::Orientation, construct::<Orientation>),
    (KmlDomType::Scale, construct::<Scale>),
    (KmlDomType::ResourceMap, construct::<ResourceMap>),
    (KmlDomType::Alias, construct::<Alias>),
    (KmlDomType::OuterBoundaryIs, construct::<OuterBoundaryIs>),
    (KmlDomType::InnerBoundaryIs, construct::<InnerBoundaryIs>),
    (KmlDomType::HotSpot, construct::<HotSpot>),
    (KmlDomType::OverlayXY, construct::<OverlayXY>),
    (KmlDomType::ScreenXY, construct::<ScreenXY>),
    (KmlDomType::RotationXY, construct::<RotationXY>),
    (KmlDomType::Size, construct::<Size>),
];

/// Single entry point for creating default-initialized elements
#[derive(Clone, Copy, Debug, Default)]
pub struct KmlFactory;

macro_rules! typed_constructors {
    ($($name:ident => $ty:ident),+ $(,)?) => {
        impl KmlFactory {
            $(
                pub fn $name() -> $ty {
                    $ty::default()
                }
            )+
        }
    };
}

impl KmlFactory {
    /// New element of `kind` with every optional field absent
    pub fn create_element(kind: KmlDomType) -> Option<Element> {
        REGISTRY
            .iter()
            .find(|(registered, _)| *registered == kind)
            .map(|(_, constructor)| constructor())
    }

    /// New element for a markup tag name; `None` for unknown names
    pub fn create_element_by_tag(tag: &str) -> Option<Element> {
        KmlDomType::from_tag_name(tag).and_then(Self::create_element)
    }

    /// Kinds this factory can construct
    pub fn kinds() -> impl Iterator<Item = KmlDomType> {
        REGISTRY.iter().map(|(kind, _)| *kind)
    }
}

typed_constructors! {
    create_kml => Kml,
    create_network_link_control => NetworkLinkControl,
    create_update => Update,
    create_create => Create,
    create_delete => Delete,
    create_change => Change,
    create_document => Document,
    create_folder => Folder,
    create_placemark => Placemark,
    create_network_link => NetworkLink,
    create_ground_overlay => GroundOverlay,
    create_screen_overlay => ScreenOverlay,
    create_photo_overlay => PhotoOverlay,
    create_point => Point,
    create_line_string => LineString,
    create_linear_ring => LinearRing,
    create_polygon => Polygon,
    create_multi_geometry => MultiGeometry,
    create_model => Model,
    create_style => Style,
    create_style_map => StyleMap,
    create_pair => Pair,
    create_icon_style => IconStyle,
    create_label_style => LabelStyle,
    create_line_style => LineStyle,
    create_poly_style => PolyStyle,
    create_balloon_style => BalloonStyle,
    create_list_style => ListStyle,
    create_item_icon => ItemIcon,
    create_time_stamp => TimeStamp,
    create_time_span => TimeSpan,
    create_look_at => LookAt,
    create_camera => Camera,
    create_region => Region,
    create_lat_lon_alt_box => LatLonAltBox,
    create_lod => Lod,
    create_lat_lon_box => LatLonBox,
    create_link => Link,
    create_icon => Icon,
    create_url => Url,
    create_snippet => Snippet,
    create_link_snippet => LinkSnippet,
    create_extended_data => ExtendedData,
    create_data => Data,
    create_schema => Schema,
    create_simple_field => SimpleField,
    create_schema_data => SchemaData,
    create_simple_data => SimpleData,
    create_view_volume => ViewVolume,
    create_image_pyramid => ImagePyramid,
    create_location => Location,
    create_orientation => Orientation,
    create_scale => Scale,
    create_resource_map => ResourceMap,
    create_alias => Alias,
    create_outer_boundary_is => OuterBoundaryIs,
    create_inner_boundary_is => InnerBoundaryIs,
    create_hot_spot => HotSpot,
    create_overlay_xy => OverlayXY,
    create_screen_xy => ScreenXY,
    create_rotation_xy => RotationXY,
    create_size => Size,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Object;

    #[test]
    fn test_every_kind_is_registered() {
        for kind in KmlDomType::ALL {
            let element = KmlFactory::create_element(*kind);
            assert_eq!(element.map(|e| e.kind()), Some(*kind), "{kind}");
        }
        assert_eq!(KmlFactory::kinds().count(), KmlDomType::ALL.len());
    }

    #[test]
    fn test_by_tag() {
        let element = KmlFactory::create_element_by_tag("LineString");
        assert!(element.is_some_and(|e| e.as_line_string().is_some()));
        assert!(KmlFactory::create_element_by_tag("linestring").is_none());
        assert!(KmlFactory::create_element_by_tag("").is_none());
    }

    #[test]
    fn test_created_elements_are_blank() {
        let placemark = KmlFactory::create_placemark();
        assert!(!placemark.has_id());
        assert!(!placemark.has_target_id());
        assert!(placemark.attributes().is_empty());
        assert!(placemark.unknown_elements().is_empty());
    }
}
