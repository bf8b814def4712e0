//! Placemark and NetworkLink

use crate::dom::feature::{
    add_feature_child, feature_nodes, parse_feature_field, write_feature_fields,
};
use crate::dom::layout::{parse_bool, push_node, write_bool, write_child, write_element, Layout};
use crate::dom::{Element, FeatureData, Geometry, Link, Node, ObjectData, Url};
use crate::error::Result;
use crate::xml::XmlWriter;

/// Feature with at most one geometry
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Placemark {
    pub(crate) object: ObjectData,
    pub(crate) feature: FeatureData,
    pub(crate) geometry: Option<Geometry>,
}

impl Placemark {
    pub fn new() -> Self {
        Self::default()
    }

    child_field!(geometry, geometry_mut, set_geometry, has_geometry, clear_geometry: Geometry);
}

impl_object!(Placemark => Placemark);
impl_feature!(Placemark);

impl Layout for Placemark {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_feature_fields(&self.feature, writer);
        if let Some(geometry) = &self.geometry {
            write_element(geometry, writer);
        }
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        parse_feature_field(&mut self.feature, name, text)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match add_feature_child(&mut self.feature, child)? {
            Element::Geometry(geometry) => {
                self.geometry = Some(geometry);
                None
            }
            other => Some(other),
        }
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        let mut nodes = feature_nodes(&self.feature);
        nodes.extend(self.geometry.iter().map(Geometry::as_node));
        nodes
    }
}

/// Feature that references remote KML through a Link
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkLink {
    pub(crate) object: ObjectData,
    pub(crate) feature: FeatureData,
    pub(crate) refresh_visibility: Option<bool>,
    pub(crate) fly_to_view: Option<bool>,
    pub(crate) url: Option<Url>,
    pub(crate) link: Option<Link>,
}

impl NetworkLink {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(
        refresh_visibility, set_refresh_visibility, has_refresh_visibility,
        clear_refresh_visibility: bool = false
    );
    value_field!(fly_to_view, set_fly_to_view, has_fly_to_view, clear_fly_to_view: bool = false);
    child_field!(
        /// KML 2.0 spelling of `link`, kept when a document uses it
        url, url_mut, set_url, has_url, clear_url: Url
    );
    child_field!(link, link_mut, set_link, has_link, clear_link: Link);
}

impl_object!(NetworkLink => NetworkLink);
impl_feature!(NetworkLink);

impl Layout for NetworkLink {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_feature_fields(&self.feature, writer);
        write_bool(writer, "refreshVisibility", self.refresh_visibility);
        write_bool(writer, "flyToView", self.fly_to_view);
        write_child(writer, self.url.as_ref());
        write_child(writer, self.link.as_ref());
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "refreshVisibility" => self.refresh_visibility = Some(parse_bool(name, text)?),
            "flyToView" => self.fly_to_view = Some(parse_bool(name, text)?),
            _ => return parse_feature_field(&mut self.feature, name, text),
        }
        Ok(true)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match add_feature_child(&mut self.feature, child)? {
            Element::Url(url) => self.url = Some(*url),
            Element::Link(link) => self.link = Some(*link),
            other => return Some(other),
        }
        None
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        let mut nodes = feature_nodes(&self.feature);
        push_node(&mut nodes, self.url.as_ref());
        push_node(&mut nodes, self.link.as_ref());
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{FeatureObject, Object, Point};

    #[test]
    fn test_single_geometry_is_replaced() {
        let mut placemark = Placemark::new();
        let mut first = Point::new();
        first.set_id("first");
        placemark.set_geometry(first);
        placemark.set_geometry(crate::dom::LineString::new());
        assert!(placemark.geometry().is_some_and(|g| g.as_line_string().is_some()));

        let detached = placemark.clear_geometry();
        assert!(detached.is_some());
        assert!(!placemark.has_geometry());
    }

    #[test]
    fn test_network_link_fields() {
        let mut link = NetworkLink::new();
        assert!(!link.fly_to_view());
        link.set_fly_to_view(true);
        link.set_name("remote");
        let mut href = Link::new();
        href.set_href("http://example.com/a.kml");
        link.set_link(href);
        assert!(link.fly_to_view());
        assert_eq!(link.link().map(Link::href), Some("http://example.com/a.kml"));
        assert_eq!(link.name(), "remote");
    }

    #[test]
    fn test_network_link_keeps_url_apart_from_link() {
        let mut network_link = NetworkLink::new();
        let mut url = Url::new();
        url.set_href("old.kml");
        assert!(network_link.add_child(url.into()).is_none());
        assert!(network_link.add_child(Link::new().into()).is_none());
        assert_eq!(network_link.url().map(Url::href), Some("old.kml"));
        assert!(network_link.has_link());
        assert_eq!(network_link.child_nodes().len(), 2);
        assert!(network_link.add_child(crate::dom::Icon::new().into()).is_some());
    }

    #[test]
    fn test_placemark_rejects_second_level_kinds() {
        let mut placemark = Placemark::new();
        let rejected = placemark.add_child(crate::dom::Folder::new().into());
        assert!(rejected.is_some());
        assert!(placemark.add_child(Point::new().into()).is_none());
        assert!(placemark.has_geometry());
    }
}
