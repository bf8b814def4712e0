//! Polymorphic element handles and safe narrowing.
//!
//! `Element` owns any element. Kinds that share a capability are grouped in
//! family enums (`Feature`, `Geometry`, ...) which appear as single variants
//! of `Element`; the remaining kinds are direct variants. Narrowing never
//! fails loudly: `as_x` returns `None` and `into_x` hands the element back
//! when the runtime kind does not match.

use crate::dom::layout::Layout;
use crate::dom::walk::{self, Node, Visitor};
use crate::dom::{
    Alias, BalloonStyle, Camera, Change, ColorStyleObject, ContainerObject, Create, Data,
    Delete, Document, ExtendedData, FeatureData, FeatureObject, Folder, GroundOverlay, HotSpot,
    Icon, IconStyle, ImagePyramid, InnerBoundaryIs, ItemIcon, Kml, KmlDomType, LabelStyle,
    LatLonAltBox, LatLonBox, LineString, LineStyle, LinearRing, Link, LinkSnippet, ListStyle,
    Location, Lod, LookAt, Model, MultiGeometry, NetworkLink, NetworkLinkControl, Object,
    ObjectData, Orientation, OuterBoundaryIs, OverlayObject, OverlayXY, Pair, PhotoOverlay,
    Placemark, Point, PolyStyle, Polygon, Region, ResourceMap, RotationXY, Scale, Schema,
    SchemaData, ScreenOverlay, ScreenXY, SimpleData, SimpleField, Size, Snippet, Style, StyleMap,
    TimeSpan, TimeStamp, Update, Url, ViewVolume,
};
use crate::error::Result;
use crate::xml::XmlWriter;

/// Concrete element kind reachable from an [`Element`]
pub trait ElementKind: Object + Node + Into<Element> + Sized + 'static {
    const KIND: KmlDomType;

    fn from_element(element: &Element) -> Option<&Self>;

    fn from_element_mut(element: &mut Element) -> Option<&mut Self>;
}

macro_rules! family {
    (
        $(#[$meta:meta])*
        $family:ident {
            $( $kind:ident => $as:ident, $as_mut:ident, $into:ident; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub enum $family {
            $( $kind(Box<$kind>), )+
        }

        impl Object for $family {
            fn kind(&self) -> KmlDomType {
                match self {
                    $( Self::$kind(inner) => inner.kind(), )+
                }
            }

            fn object_data(&self) -> &ObjectData {
                match self {
                    $( Self::$kind(inner) => inner.object_data(), )+
                }
            }

            fn object_data_mut(&mut self) -> &mut ObjectData {
                match self {
                    $( Self::$kind(inner) => inner.object_data_mut(), )+
                }
            }
        }

        impl Layout for $family {
            fn write_fields(&self, writer: &mut XmlWriter) {
                match self {
                    $( Self::$kind(inner) => inner.write_fields(writer), )+
                }
            }

            fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
                match self {
                    $( Self::$kind(inner) => inner.parse_field(name, text), )+
                }
            }

            fn add_child(&mut self, child: Element) -> Option<Element> {
                match self {
                    $( Self::$kind(inner) => inner.add_child(child), )+
                }
            }

            fn parse_attribute(&mut self, name: &str, value: &str) -> Result<bool> {
                match self {
                    $( Self::$kind(inner) => inner.parse_attribute(name, value), )+
                }
            }

            fn schema_attributes(&self) -> Vec<(&'static str, String)> {
                match self {
                    $( Self::$kind(inner) => inner.schema_attributes(), )+
                }
            }

            fn child_nodes(&self) -> Vec<&dyn Node> {
                match self {
                    $( Self::$kind(inner) => inner.child_nodes(), )+
                }
            }

            fn text_content(&self) -> Option<&str> {
                match self {
                    $( Self::$kind(inner) => inner.text_content(), )+
                }
            }

            fn parse_text(&mut self, text: &str) -> Result<bool> {
                match self {
                    $( Self::$kind(inner) => inner.parse_text(text), )+
                }
            }
        }

        impl $family {
            /// The held kind as a walk node
            pub fn as_node(&self) -> &dyn Node {
                match self {
                    $( Self::$kind(inner) => &**inner, )+
                }
            }

            $(
                pub fn $as(&self) -> Option<&$kind> {
                    match self {
                        Self::$kind(inner) => Some(&**inner),
                        _ => None,
                    }
                }

                pub fn $as_mut(&mut self) -> Option<&mut $kind> {
                    match self {
                        Self::$kind(inner) => Some(&mut **inner),
                        _ => None,
                    }
                }

                pub fn $into(self) -> std::result::Result<$kind, Self> {
                    match self {
                        Self::$kind(inner) => Ok(*inner),
                        other => Err(other),
                    }
                }
            )+
        }

        impl From<$family> for Element {
            fn from(value: $family) -> Self {
                Self::$family(value)
            }
        }

        impl Element {
            $(
                pub fn $as(&self) -> Option<&$kind> {
                    match self {
                        Self::$family(family) => family.$as(),
                        _ => None,
                    }
                }

                pub fn $as_mut(&mut self) -> Option<&mut $kind> {
                    match self {
                        Self::$family(family) => family.$as_mut(),
                        _ => None,
                    }
                }

                pub fn $into(self) -> std::result::Result<$kind, Self> {
                    match self {
                        Self::$family(family) => family.$into().map_err(Self::$family),
                        other => Err(other),
                    }
                }
            )+
        }

        $(
            impl From<$kind> for $family {
                fn from(value: $kind) -> Self {
                    Self::$kind(Box::new(value))
                }
            }

            impl From<$kind> for Element {
                fn from(value: $kind) -> Self {
                    Self::$family($family::from(value))
                }
            }

            impl ElementKind for $kind {
                const KIND: KmlDomType = KmlDomType::$kind;

                fn from_element(element: &Element) -> Option<&Self> {
                    element.$as()
                }

                fn from_element_mut(element: &mut Element) -> Option<&mut Self> {
                    element.$as_mut()
                }
            }
        )+
    };
}

family! {
    /// Any feature kind
    Feature {
        Placemark => as_placemark, as_placemark_mut, into_placemark;
        Document => as_document, as_document_mut, into_document;
        Folder => as_folder, as_folder_mut, into_folder;
        NetworkLink => as_network_link, as_network_link_mut, into_network_link;
        GroundOverlay => as_ground_overlay, as_ground_overlay_mut, into_ground_overlay;
        ScreenOverlay => as_screen_overlay, as_screen_overlay_mut, into_screen_overlay;
        PhotoOverlay => as_photo_overlay, as_photo_overlay_mut, into_photo_overlay;
    }
}

family! {
    /// Any geometry kind
    Geometry {
        Point => as_point, as_point_mut, into_point;
        LineString => as_line_string, as_line_string_mut, into_line_string;
        LinearRing => as_linear_ring, as_linear_ring_mut, into_linear_ring;
        Polygon => as_polygon, as_polygon_mut, into_polygon;
        MultiGeometry => as_multi_geometry, as_multi_geometry_mut, into_multi_geometry;
        Model => as_model, as_model_mut, into_model;
    }
}

family! {
    /// Style or StyleMap
    StyleSelector {
        Style => as_style, as_style_mut, into_style;
        StyleMap => as_style_map, as_style_map_mut, into_style_map;
    }
}

family! {
    /// Any child of a Style
    SubStyle {
        IconStyle => as_icon_style, as_icon_style_mut, into_icon_style;
        LabelStyle => as_label_style, as_label_style_mut, into_label_style;
        LineStyle => as_line_style, as_line_style_mut, into_line_style;
        PolyStyle => as_poly_style, as_poly_style_mut, into_poly_style;
        BalloonStyle => as_balloon_style, as_balloon_style_mut, into_balloon_style;
        ListStyle => as_list_style, as_list_style_mut, into_list_style;
    }
}

family! {
    /// TimeStamp or TimeSpan
    TimePrimitive {
        TimeStamp => as_time_stamp, as_time_stamp_mut, into_time_stamp;
        TimeSpan => as_time_span, as_time_span_mut, into_time_span;
    }
}

family! {
    /// LookAt or Camera
    AbstractView {
        LookAt => as_look_at, as_look_at_mut, into_look_at;
        Camera => as_camera, as_camera_mut, into_camera;
    }
}

family! {
    /// Create, Delete or Change inside an Update
    UpdateOperation {
        Create => as_create, as_create_mut, into_create;
        Delete => as_delete, as_delete_mut, into_delete;
        Change => as_change, as_change_mut, into_change;
    }
}

impl FeatureObject for Feature {
    fn feature_data(&self) -> &FeatureData {
        match self {
            Self::Placemark(inner) => inner.feature_data(),
            Self::Document(inner) => inner.feature_data(),
            Self::Folder(inner) => inner.feature_data(),
            Self::NetworkLink(inner) => inner.feature_data(),
            Self::GroundOverlay(inner) => inner.feature_data(),
            Self::ScreenOverlay(inner) => inner.feature_data(),
            Self::PhotoOverlay(inner) => inner.feature_data(),
        }
    }

    fn feature_data_mut(&mut self) -> &mut FeatureData {
        match self {
            Self::Placemark(inner) => inner.feature_data_mut(),
            Self::Document(inner) => inner.feature_data_mut(),
            Self::Folder(inner) => inner.feature_data_mut(),
            Self::NetworkLink(inner) => inner.feature_data_mut(),
            Self::GroundOverlay(inner) => inner.feature_data_mut(),
            Self::ScreenOverlay(inner) => inner.feature_data_mut(),
            Self::PhotoOverlay(inner) => inner.feature_data_mut(),
        }
    }
}

impl Feature {
    /// Document or Folder
    pub fn as_container(&self) -> Option<&dyn ContainerObject> {
        match self {
            Self::Document(inner) => Some(&**inner),
            Self::Folder(inner) => Some(&**inner),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut dyn ContainerObject> {
        match self {
            Self::Document(inner) => Some(&mut **inner),
            Self::Folder(inner) => Some(&mut **inner),
            _ => None,
        }
    }

    /// GroundOverlay, ScreenOverlay or PhotoOverlay
    pub fn as_overlay(&self) -> Option<&dyn OverlayObject> {
        match self {
            Self::GroundOverlay(inner) => Some(&**inner),
            Self::ScreenOverlay(inner) => Some(&**inner),
            Self::PhotoOverlay(inner) => Some(&**inner),
            _ => None,
        }
    }

    pub fn as_overlay_mut(&mut self) -> Option<&mut dyn OverlayObject> {
        match self {
            Self::GroundOverlay(inner) => Some(&mut **inner),
            Self::ScreenOverlay(inner) => Some(&mut **inner),
            Self::PhotoOverlay(inner) => Some(&mut **inner),
            _ => None,
        }
    }
}

impl SubStyle {
    /// Every sub style except BalloonStyle and ListStyle
    pub fn as_color_style(&self) -> Option<&dyn ColorStyleObject> {
        match self {
            Self::IconStyle(inner) => Some(&**inner),
            Self::LabelStyle(inner) => Some(&**inner),
            Self::LineStyle(inner) => Some(&**inner),
            Self::PolyStyle(inner) => Some(&**inner),
            Self::BalloonStyle(_) | Self::ListStyle(_) => None,
        }
    }

    pub fn as_color_style_mut(&mut self) -> Option<&mut dyn ColorStyleObject> {
        match self {
            Self::IconStyle(inner) => Some(&mut **inner),
            Self::LabelStyle(inner) => Some(&mut **inner),
            Self::LineStyle(inner) => Some(&mut **inner),
            Self::PolyStyle(inner) => Some(&mut **inner),
            Self::BalloonStyle(_) | Self::ListStyle(_) => None,
        }
    }
}

macro_rules! element {
    (
        families {
            $( $family:ident => $as_family:ident, $as_family_mut:ident, $into_family:ident; )+
        }
        kinds {
            $( $kind:ident => $as:ident, $as_mut:ident, $into:ident; )+
        }
    ) => {
        /// Owning handle to an element of any kind
        #[derive(Clone, Debug, PartialEq)]
        pub enum Element {
            $( $family($family), )+
            $( $kind(Box<$kind>), )+
        }

        impl Object for Element {
            fn kind(&self) -> KmlDomType {
                match self {
                    $( Self::$family(inner) => inner.kind(), )+
                    $( Self::$kind(inner) => inner.kind(), )+
                }
            }

            fn object_data(&self) -> &ObjectData {
                match self {
                    $( Self::$family(inner) => inner.object_data(), )+
                    $( Self::$kind(inner) => inner.object_data(), )+
                }
            }

            fn object_data_mut(&mut self) -> &mut ObjectData {
                match self {
                    $( Self::$family(inner) => inner.object_data_mut(), )+
                    $( Self::$kind(inner) => inner.object_data_mut(), )+
                }
            }
        }

        impl Layout for Element {
            fn write_fields(&self, writer: &mut XmlWriter) {
                match self {
                    $( Self::$family(inner) => inner.write_fields(writer), )+
                    $( Self::$kind(inner) => inner.write_fields(writer), )+
                }
            }

            fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
                match self {
                    $( Self::$family(inner) => inner.parse_field(name, text), )+
                    $( Self::$kind(inner) => inner.parse_field(name, text), )+
                }
            }

            fn add_child(&mut self, child: Element) -> Option<Element> {
                match self {
                    $( Self::$family(inner) => inner.add_child(child), )+
                    $( Self::$kind(inner) => inner.add_child(child), )+
                }
            }

            fn parse_attribute(&mut self, name: &str, value: &str) -> Result<bool> {
                match self {
                    $( Self::$family(inner) => inner.parse_attribute(name, value), )+
                    $( Self::$kind(inner) => inner.parse_attribute(name, value), )+
                }
            }

            fn schema_attributes(&self) -> Vec<(&'static str, String)> {
                match self {
                    $( Self::$family(inner) => inner.schema_attributes(), )+
                    $( Self::$kind(inner) => inner.schema_attributes(), )+
                }
            }

            fn child_nodes(&self) -> Vec<&dyn Node> {
                match self {
                    $( Self::$family(inner) => inner.child_nodes(), )+
                    $( Self::$kind(inner) => inner.child_nodes(), )+
                }
            }

            fn text_content(&self) -> Option<&str> {
                match self {
                    $( Self::$family(inner) => inner.text_content(), )+
                    $( Self::$kind(inner) => inner.text_content(), )+
                }
            }

            fn parse_text(&mut self, text: &str) -> Result<bool> {
                match self {
                    $( Self::$family(inner) => inner.parse_text(text), )+
                    $( Self::$kind(inner) => inner.parse_text(text), )+
                }
            }
        }

        impl Element {
            /// The held kind as a walk node
            pub fn as_node(&self) -> &dyn Node {
                match self {
                    $( Self::$family(inner) => inner.as_node(), )+
                    $( Self::$kind(inner) => &**inner, )+
                }
            }

            $(
                pub fn $as_family(&self) -> Option<&$family> {
                    match self {
                        Self::$family(inner) => Some(inner),
                        _ => None,
                    }
                }

                pub fn $as_family_mut(&mut self) -> Option<&mut $family> {
                    match self {
                        Self::$family(inner) => Some(inner),
                        _ => None,
                    }
                }

                pub fn $into_family(self) -> std::result::Result<$family, Self> {
                    match self {
                        Self::$family(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            )+

            $(
                pub fn $as(&self) -> Option<&$kind> {
                    match self {
                        Self::$kind(inner) => Some(&**inner),
                        _ => None,
                    }
                }

                pub fn $as_mut(&mut self) -> Option<&mut $kind> {
                    match self {
                        Self::$kind(inner) => Some(&mut **inner),
                        _ => None,
                    }
                }

                pub fn $into(self) -> std::result::Result<$kind, Self> {
                    match self {
                        Self::$kind(inner) => Ok(*inner),
                        other => Err(other),
                    }
                }
            )+
        }

        $(
            impl From<$kind> for Element {
                fn from(value: $kind) -> Self {
                    Self::$kind(Box::new(value))
                }
            }

            impl ElementKind for $kind {
                const KIND: KmlDomType = KmlDomType::$kind;

                fn from_element(element: &Element) -> Option<&Self> {
                    element.$as()
                }

                fn from_element_mut(element: &mut Element) -> Option<&mut Self> {
                    element.$as_mut()
                }
            }
        )+
    };
}

element! {
    families {
        Feature => as_feature, as_feature_mut, into_feature;
        Geometry => as_geometry, as_geometry_mut, into_geometry;
        StyleSelector => as_style_selector, as_style_selector_mut, into_style_selector;
        SubStyle => as_sub_style, as_sub_style_mut, into_sub_style;
        TimePrimitive => as_time_primitive, as_time_primitive_mut, into_time_primitive;
        AbstractView => as_abstract_view, as_abstract_view_mut, into_abstract_view;
        UpdateOperation => as_update_operation, as_update_operation_mut, into_update_operation;
    }
    kinds {
        Kml => as_kml, as_kml_mut, into_kml;
        NetworkLinkControl => as_network_link_control, as_network_link_control_mut,
            into_network_link_control;
        Update => as_update, as_update_mut, into_update;
        Pair => as_pair, as_pair_mut, into_pair;
        ItemIcon => as_item_icon, as_item_icon_mut, into_item_icon;
        Region => as_region, as_region_mut, into_region;
        LatLonAltBox => as_lat_lon_alt_box, as_lat_lon_alt_box_mut, into_lat_lon_alt_box;
        Lod => as_lod, as_lod_mut, into_lod;
        LatLonBox => as_lat_lon_box, as_lat_lon_box_mut, into_lat_lon_box;
        Link => as_link, as_link_mut, into_link;
        Icon => as_icon, as_icon_mut, into_icon;
        Url => as_url, as_url_mut, into_url;
        Snippet => as_snippet, as_snippet_mut, into_snippet;
        LinkSnippet => as_link_snippet, as_link_snippet_mut, into_link_snippet;
        ExtendedData => as_extended_data, as_extended_data_mut, into_extended_data;
        Data => as_data, as_data_mut, into_data;
        Schema => as_schema, as_schema_mut, into_schema;
        SimpleField => as_simple_field, as_simple_field_mut, into_simple_field;
        SchemaData => as_schema_data, as_schema_data_mut, into_schema_data;
        SimpleData => as_simple_data, as_simple_data_mut, into_simple_data;
        ViewVolume => as_view_volume, as_view_volume_mut, into_view_volume;
        ImagePyramid => as_image_pyramid, as_image_pyramid_mut, into_image_pyramid;
        Location => as_location, as_location_mut, into_location;
        Orientation => as_orientation, as_orientation_mut, into_orientation;
        Scale => as_scale, as_scale_mut, into_scale;
        ResourceMap => as_resource_map, as_resource_map_mut, into_resource_map;
        Alias => as_alias, as_alias_mut, into_alias;
        OuterBoundaryIs => as_outer_boundary_is, as_outer_boundary_is_mut, into_outer_boundary_is;
        InnerBoundaryIs => as_inner_boundary_is, as_inner_boundary_is_mut, into_inner_boundary_is;
        HotSpot => as_hot_spot, as_hot_spot_mut, into_hot_spot;
        OverlayXY => as_overlay_xy, as_overlay_xy_mut, into_overlay_xy;
        ScreenXY => as_screen_xy, as_screen_xy_mut, into_screen_xy;
        RotationXY => as_rotation_xy, as_rotation_xy_mut, into_rotation_xy;
        Size => as_size, as_size_mut, into_size;
    }
}

impl Element {
    /// Document or Folder
    pub fn as_container(&self) -> Option<&dyn ContainerObject> {
        self.as_feature().and_then(Feature::as_container)
    }

    pub fn as_container_mut(&mut self) -> Option<&mut dyn ContainerObject> {
        self.as_feature_mut().and_then(Feature::as_container_mut)
    }

    /// GroundOverlay, ScreenOverlay or PhotoOverlay
    pub fn as_overlay(&self) -> Option<&dyn OverlayObject> {
        self.as_feature().and_then(Feature::as_overlay)
    }

    pub fn as_overlay_mut(&mut self) -> Option<&mut dyn OverlayObject> {
        self.as_feature_mut().and_then(Feature::as_overlay_mut)
    }

    /// IconStyle, LabelStyle, LineStyle or PolyStyle
    pub fn as_color_style(&self) -> Option<&dyn ColorStyleObject> {
        self.as_sub_style().and_then(SubStyle::as_color_style)
    }

    pub fn as_color_style_mut(&mut self) -> Option<&mut dyn ColorStyleObject> {
        self.as_sub_style_mut().and_then(SubStyle::as_color_style_mut)
    }

    /// Typed view of this element if its kind is `T`
    pub fn downcast_ref<T: ElementKind>(&self) -> Option<&T> {
        T::from_element(self)
    }

    pub fn downcast_mut<T: ElementKind>(&mut self) -> Option<&mut T> {
        T::from_element_mut(self)
    }

    /// True if this element's kind is `T`
    pub fn is<T: ElementKind>(&self) -> bool {
        self.kind() == T::KIND
    }

    /// Walks the tree rooted at this element, see [`walk::walk`]
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        walk::walk(self.as_node(), visitor);
    }

    /// Every node of `kind` in this tree, this element included
    pub fn elements_of_kind(&self, kind: KmlDomType) -> Vec<&dyn Node> {
        walk::elements_of_kind(self.as_node(), kind)
    }

    /// Every `T` in this tree, this element included
    pub fn elements<T: ElementKind>(&self) -> Vec<&T> {
        walk::elements_of::<T>(self.as_node())
    }
}
