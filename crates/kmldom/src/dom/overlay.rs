//! Image overlays draped on the globe or fixed to the screen

use crate::base::{AltitudeMode, Color32, GridOrigin, Shape};
use crate::dom::feature::{
    add_feature_child, feature_nodes, parse_feature_field, write_feature_fields,
};
use crate::dom::layout::{parse_value, push_node, write_child, write_value, Layout};
use crate::dom::{
    Element, FeatureData, FeatureObject, Geometry, Icon, LatLonBox, Node, ObjectData, OverlayXY,
    Point, RotationXY, ScreenXY, Size,
};
use crate::error::Result;
use crate::xml::XmlWriter;

/// Fields shared by overlay kinds
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayData {
    pub(crate) color: Option<Color32>,
    pub(crate) draw_order: Option<i32>,
    pub(crate) icon: Option<Icon>,
}

pub trait OverlayObject: FeatureObject {
    fn overlay_data(&self) -> &OverlayData;

    fn overlay_data_mut(&mut self) -> &mut OverlayData;

    value_field!(via overlay_data, overlay_data_mut;
        color, set_color, has_color, clear_color: Color32 = Color32::new(0xffff_ffff));
    value_field!(via overlay_data, overlay_data_mut;
        /// Stacking order among overlapping overlays
        draw_order, set_draw_order, has_draw_order, clear_draw_order: i32 = 0);
    child_field!(via overlay_data, overlay_data_mut; icon, icon_mut, set_icon, has_icon, clear_icon: Icon);
}

fn write_overlay_fields(feature: &FeatureData, overlay: &OverlayData, writer: &mut XmlWriter) {
    write_feature_fields(feature, writer);
    write_value(writer, "color", overlay.color.as_ref());
    write_value(writer, "drawOrder", overlay.draw_order.as_ref());
    write_child(writer, overlay.icon.as_ref());
}

fn overlay_nodes<'a>(feature: &'a FeatureData, overlay: &'a OverlayData) -> Vec<&'a dyn Node> {
    let mut nodes = feature_nodes(feature);
    push_node(&mut nodes, overlay.icon.as_ref());
    nodes
}

fn parse_overlay_field(
    feature: &mut FeatureData,
    overlay: &mut OverlayData,
    name: &str,
    text: &str,
) -> Result<bool> {
    match name {
        "color" => overlay.color = Some(parse_value(name, text)?),
        "drawOrder" => overlay.draw_order = Some(parse_value(name, text)?),
        _ => return parse_feature_field(feature, name, text),
    }
    Ok(true)
}

fn add_overlay_child(
    feature: &mut FeatureData,
    overlay: &mut OverlayData,
    child: Element,
) -> Option<Element> {
    match add_feature_child(feature, child)? {
        Element::Icon(icon) => {
            overlay.icon = Some(*icon);
            None
        }
        other => Some(other),
    }
}

macro_rules! impl_overlay {
    ($($ty:ident),+) => {$(
        impl OverlayObject for $ty {
            fn overlay_data(&self) -> &OverlayData {
                &self.overlay
            }

            fn overlay_data_mut(&mut self) -> &mut OverlayData {
                &mut self.overlay
            }
        }
    )+};
}

/// Image draped over the terrain inside a LatLonBox
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroundOverlay {
    pub(crate) object: ObjectData,
    pub(crate) feature: FeatureData,
    pub(crate) overlay: OverlayData,
    pub(crate) altitude: Option<f64>,
    pub(crate) altitude_mode: Option<AltitudeMode>,
    pub(crate) lat_lon_box: Option<LatLonBox>,
}

impl GroundOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(altitude, set_altitude, has_altitude, clear_altitude: f64 = 0.0);
    value_field!(
        altitude_mode, set_altitude_mode, has_altitude_mode,
        clear_altitude_mode: AltitudeMode = AltitudeMode::ClampToGround
    );
    child_field!(
        lat_lon_box, lat_lon_box_mut, set_lat_lon_box, has_lat_lon_box,
        clear_lat_lon_box: LatLonBox
    );
}

impl_object!(GroundOverlay => GroundOverlay);
impl_feature!(GroundOverlay);
impl_overlay!(GroundOverlay);

impl Layout for GroundOverlay {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_overlay_fields(&self.feature, &self.overlay, writer);
        write_value(writer, "altitude", self.altitude.as_ref());
        write_value(writer, "altitudeMode", self.altitude_mode.as_ref());
        write_child(writer, self.lat_lon_box.as_ref());
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        let mut nodes = overlay_nodes(&self.feature, &self.overlay);
        push_node(&mut nodes, self.lat_lon_box.as_ref());
        nodes
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "altitude" => self.altitude = Some(parse_value(name, text)?),
            "altitudeMode" => self.altitude_mode = Some(parse_value(name, text)?),
            _ => return parse_overlay_field(&mut self.feature, &mut self.overlay, name, text),
        }
        Ok(true)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match add_overlay_child(&mut self.feature, &mut self.overlay, child)? {
            Element::LatLonBox(lat_lon_box) => {
                self.lat_lon_box = Some(*lat_lon_box);
                None
            }
            other => Some(other),
        }
    }
}

/// Image fixed to the screen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScreenOverlay {
    pub(crate) object: ObjectData,
    pub(crate) feature: FeatureData,
    pub(crate) overlay: OverlayData,
    pub(crate) overlay_xy: Option<OverlayXY>,
    pub(crate) screen_xy: Option<ScreenXY>,
    pub(crate) rotation_xy: Option<RotationXY>,
    pub(crate) size: Option<Size>,
    pub(crate) rotation: Option<f64>,
}

impl ScreenOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    child_field!(overlay_xy, overlay_xy_mut, set_overlay_xy, has_overlay_xy, clear_overlay_xy: OverlayXY);
    child_field!(screen_xy, screen_xy_mut, set_screen_xy, has_screen_xy, clear_screen_xy: ScreenXY);
    child_field!(
        rotation_xy, rotation_xy_mut, set_rotation_xy, has_rotation_xy,
        clear_rotation_xy: RotationXY
    );
    child_field!(size, size_mut, set_size, has_size, clear_size: Size);
    value_field!(rotation, set_rotation, has_rotation, clear_rotation: f64 = 0.0);
}

impl_object!(ScreenOverlay => ScreenOverlay);
impl_feature!(ScreenOverlay);
impl_overlay!(ScreenOverlay);

impl Layout for ScreenOverlay {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_overlay_fields(&self.feature, &self.overlay, writer);
        write_child(writer, self.overlay_xy.as_ref());
        write_child(writer, self.screen_xy.as_ref());
        write_child(writer, self.rotation_xy.as_ref());
        write_child(writer, self.size.as_ref());
        write_value(writer, "rotation", self.rotation.as_ref());
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        let mut nodes = overlay_nodes(&self.feature, &self.overlay);
        push_node(&mut nodes, self.overlay_xy.as_ref());
        push_node(&mut nodes, self.screen_xy.as_ref());
        push_node(&mut nodes, self.rotation_xy.as_ref());
        push_node(&mut nodes, self.size.as_ref());
        nodes
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "rotation" => self.rotation = Some(parse_value(name, text)?),
            _ => return parse_overlay_field(&mut self.feature, &mut self.overlay, name, text),
        }
        Ok(true)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match add_overlay_child(&mut self.feature, &mut self.overlay, child)? {
            Element::OverlayXY(xy) => self.overlay_xy = Some(*xy),
            Element::ScreenXY(xy) => self.screen_xy = Some(*xy),
            Element::RotationXY(xy) => self.rotation_xy = Some(*xy),
            Element::Size(size) => self.size = Some(*size),
            other => return Some(other),
        }
        None
    }
}

/// Photo placed in the scene, optionally tiled as an image pyramid
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhotoOverlay {
    pub(crate) object: ObjectData,
    pub(crate) feature: FeatureData,
    pub(crate) overlay: OverlayData,
    pub(crate) rotation: Option<f64>,
    pub(crate) view_volume: Option<ViewVolume>,
    pub(crate) image_pyramid: Option<ImagePyramid>,
    pub(crate) point: Option<Point>,
    pub(crate) shape: Option<Shape>,
}

impl PhotoOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(rotation, set_rotation, has_rotation, clear_rotation: f64 = 0.0);
    child_field!(
        view_volume, view_volume_mut, set_view_volume, has_view_volume,
        clear_view_volume: ViewVolume
    );
    child_field!(
        image_pyramid, image_pyramid_mut, set_image_pyramid, has_image_pyramid,
        clear_image_pyramid: ImagePyramid
    );
    child_field!(
        /// Camera position the photo was taken from
        point, point_mut, set_point, has_point, clear_point: Point
    );
    value_field!(shape, set_shape, has_shape, clear_shape: Shape = Shape::Rectangle);
}

impl_object!(PhotoOverlay => PhotoOverlay);
impl_feature!(PhotoOverlay);
impl_overlay!(PhotoOverlay);

impl Layout for PhotoOverlay {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_overlay_fields(&self.feature, &self.overlay, writer);
        write_value(writer, "rotation", self.rotation.as_ref());
        write_child(writer, self.view_volume.as_ref());
        write_child(writer, self.image_pyramid.as_ref());
        write_child(writer, self.point.as_ref());
        write_value(writer, "shape", self.shape.as_ref());
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "rotation" => self.rotation = Some(parse_value(name, text)?),
            "shape" => self.shape = Some(parse_value(name, text)?),
            _ => return parse_overlay_field(&mut self.feature, &mut self.overlay, name, text),
        }
        Ok(true)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match add_overlay_child(&mut self.feature, &mut self.overlay, child)? {
            Element::ViewVolume(volume) => self.view_volume = Some(*volume),
            Element::ImagePyramid(pyramid) => self.image_pyramid = Some(*pyramid),
            Element::Geometry(Geometry::Point(point)) => self.point = Some(*point),
            other => return Some(other),
        }
        None
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        let mut nodes = overlay_nodes(&self.feature, &self.overlay);
        push_node(&mut nodes, self.view_volume.as_ref());
        push_node(&mut nodes, self.image_pyramid.as_ref());
        push_node(&mut nodes, self.point.as_ref());
        nodes
    }
}

/// Field of view of a PhotoOverlay, in degrees from the view direction
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewVolume {
    pub(crate) object: ObjectData,
    pub(crate) left_fov: Option<f64>,
    pub(crate) right_fov: Option<f64>,
    pub(crate) bottom_fov: Option<f64>,
    pub(crate) top_fov: Option<f64>,
    pub(crate) near: Option<f64>,
}

impl ViewVolume {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(left_fov, set_left_fov, has_left_fov, clear_left_fov: f64 = 0.0);
    value_field!(right_fov, set_right_fov, has_right_fov, clear_right_fov: f64 = 0.0);
    value_field!(bottom_fov, set_bottom_fov, has_bottom_fov, clear_bottom_fov: f64 = 0.0);
    value_field!(top_fov, set_top_fov, has_top_fov, clear_top_fov: f64 = 0.0);
    value_field!(
        /// Distance from the camera to the image plane
        near, set_near, has_near, clear_near: f64 = 0.0
    );
}

impl_object!(ViewVolume => ViewVolume);

impl Layout for ViewVolume {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_value(writer, "leftFov", self.left_fov.as_ref());
        write_value(writer, "rightFov", self.right_fov.as_ref());
        write_value(writer, "bottomFov", self.bottom_fov.as_ref());
        write_value(writer, "topFov", self.top_fov.as_ref());
        write_value(writer, "near", self.near.as_ref());
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "leftFov" => self.left_fov = Some(parse_value(name, text)?),
            "rightFov" => self.right_fov = Some(parse_value(name, text)?),
            "bottomFov" => self.bottom_fov = Some(parse_value(name, text)?),
            "topFov" => self.top_fov = Some(parse_value(name, text)?),
            "near" => self.near = Some(parse_value(name, text)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Tiling of a large PhotoOverlay image
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImagePyramid {
    pub(crate) object: ObjectData,
    pub(crate) tile_size: Option<u32>,
    pub(crate) max_width: Option<u32>,
    pub(crate) max_height: Option<u32>,
    pub(crate) grid_origin: Option<GridOrigin>,
}

impl ImagePyramid {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(tile_size, set_tile_size, has_tile_size, clear_tile_size: u32 = 256);
    value_field!(max_width, set_max_width, has_max_width, clear_max_width: u32 = 0);
    value_field!(max_height, set_max_height, has_max_height, clear_max_height: u32 = 0);
    value_field!(
        grid_origin, set_grid_origin, has_grid_origin,
        clear_grid_origin: GridOrigin = GridOrigin::LowerLeft
    );
}

impl_object!(ImagePyramid => ImagePyramid);

impl Layout for ImagePyramid {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_value(writer, "tileSize", self.tile_size.as_ref());
        write_value(writer, "maxWidth", self.max_width.as_ref());
        write_value(writer, "maxHeight", self.max_height.as_ref());
        write_value(writer, "gridOrigin", self.grid_origin.as_ref());
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "tileSize" => self.tile_size = Some(parse_value(name, text)?),
            "maxWidth" => self.max_width = Some(parse_value(name, text)?),
            "maxHeight" => self.max_height = Some(parse_value(name, text)?),
            "gridOrigin" => self.grid_origin = Some(parse_value(name, text)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Units;
    use crate::dom::Object;

    #[test]
    fn test_overlay_defaults() {
        let overlay = GroundOverlay::new();
        assert_eq!(overlay.color(), Color32::default());
        assert_eq!(overlay.draw_order(), 0);
        assert!(!overlay.has_icon());
        assert_eq!(overlay.altitude_mode(), AltitudeMode::ClampToGround);
    }

    #[test]
    fn test_parse_overlay_fields() -> Result<()> {
        let mut overlay = ScreenOverlay::new();
        assert!(overlay.parse_field("drawOrder", " 2 ")?);
        assert!(overlay.parse_field("color", "7fffffff")?);
        assert!(overlay.parse_field("rotation", "45")?);
        assert!(!overlay.parse_field("altitude", "3")?);
        assert_eq!(overlay.draw_order(), 2);
        assert_eq!(overlay.color().alpha(), 0x7f);
        assert!(overlay.parse_field("drawOrder", "first").is_err());
        Ok(())
    }

    #[test]
    fn test_photo_overlay_children() -> Result<()> {
        let mut photo = PhotoOverlay::new();
        assert_eq!(photo.shape(), Shape::Rectangle);
        assert!(photo.parse_field("shape", "sphere")?);
        assert!(photo.parse_field("shape", "cube").is_err());
        assert!(photo.parse_field("drawOrder", "3")?);

        let mut pyramid = ImagePyramid::new();
        assert_eq!(pyramid.tile_size(), 256);
        assert!(pyramid.parse_field("gridOrigin", "upperLeft")?);
        assert!(pyramid.parse_field("maxWidth", "-4").is_err());
        assert!(photo.add_child(pyramid.into()).is_none());
        assert!(photo.add_child(ViewVolume::new().into()).is_none());
        assert!(photo.add_child(Point::new().into()).is_none());
        assert!(photo.add_child(crate::dom::LineString::new().into()).is_some());

        let kinds: Vec<_> = photo.child_nodes().iter().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            [
                crate::dom::KmlDomType::ViewVolume,
                crate::dom::KmlDomType::ImagePyramid,
                crate::dom::KmlDomType::Point,
            ]
        );
        assert_eq!(photo.draw_order(), 3);
        Ok(())
    }

    #[test]
    fn test_screen_overlay_vectors() {
        let mut overlay = ScreenOverlay::new();
        let mut xy = OverlayXY::new();
        xy.set_vec2(crate::base::Vec2::new(0.0, 1.0, Units::Fraction));
        assert!(overlay.add_child(xy.into()).is_none());
        assert!(overlay.add_child(Size::new().into()).is_none());
        assert!(overlay.has_overlay_xy());
        assert!(overlay.has_size());
        assert!(!overlay.has_screen_xy());
    }
}
