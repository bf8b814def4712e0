//! NetworkLinkControl and incremental updates of previously loaded KML

use crate::base::DateTime;
use crate::dom::layout::{
    parse_value, push_node, write_child, write_children, write_element, write_string,
    write_value, Layout,
};
use crate::dom::{
    AbstractView, Element, Feature, LinkSnippet, Node, Object, ObjectData, UpdateOperation,
};
use crate::error::Result;
use crate::xml::XmlWriter;

/// Controls how a NetworkLink refreshes, sent by the server in the
/// fetched document
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkLinkControl {
    pub(crate) object: ObjectData,
    pub(crate) min_refresh_period: Option<f64>,
    pub(crate) max_session_length: Option<f64>,
    pub(crate) cookie: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) link_name: Option<String>,
    pub(crate) link_description: Option<String>,
    pub(crate) link_snippet: Option<LinkSnippet>,
    pub(crate) expires: Option<DateTime>,
    pub(crate) update: Option<Update>,
    pub(crate) abstract_view: Option<AbstractView>,
}

impl NetworkLinkControl {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(
        /// Seconds the client waits between fetches at the least
        min_refresh_period, set_min_refresh_period, has_min_refresh_period,
        clear_min_refresh_period: f64 = 0.0
    );
    value_field!(
        /// Seconds; -1 keeps the session alive indefinitely
        max_session_length, set_max_session_length, has_max_session_length,
        clear_max_session_length: f64 = -1.0
    );
    string_field!(
        /// Appended to the query string of the next fetch
        cookie, set_cookie, has_cookie, clear_cookie
    );
    string_field!(message, set_message, has_message, clear_message);
    string_field!(link_name, set_link_name, has_link_name, clear_link_name);
    string_field!(link_description, set_link_description, has_link_description, clear_link_description);
    child_field!(
        link_snippet, link_snippet_mut, set_link_snippet, has_link_snippet,
        clear_link_snippet: LinkSnippet
    );
    child_field!(expires, expires_mut, set_expires, has_expires, clear_expires: DateTime);
    child_field!(update, update_mut, set_update, has_update, clear_update: Update);
    child_field!(
        abstract_view, abstract_view_mut, set_abstract_view, has_abstract_view,
        clear_abstract_view: AbstractView
    );
}

impl_object!(NetworkLinkControl => NetworkLinkControl);

impl Layout for NetworkLinkControl {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_value(writer, "minRefreshPeriod", self.min_refresh_period.as_ref());
        write_value(writer, "maxSessionLength", self.max_session_length.as_ref());
        write_string(writer, "cookie", self.cookie.as_ref());
        write_string(writer, "message", self.message.as_ref());
        write_string(writer, "linkName", self.link_name.as_ref());
        write_string(writer, "linkDescription", self.link_description.as_ref());
        write_child(writer, self.link_snippet.as_ref());
        write_value(writer, "expires", self.expires.as_ref());
        write_child(writer, self.update.as_ref());
        if let Some(view) = &self.abstract_view {
            write_element(view, writer);
        }
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "minRefreshPeriod" => self.min_refresh_period = Some(parse_value(name, text)?),
            "maxSessionLength" => self.max_session_length = Some(parse_value(name, text)?),
            "cookie" => self.cookie = Some(text.to_string()),
            "message" => self.message = Some(text.to_string()),
            "linkName" => self.link_name = Some(text.to_string()),
            "linkDescription" => self.link_description = Some(text.to_string()),
            "expires" => self.expires = Some(parse_value(name, text)?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match child {
            Element::LinkSnippet(snippet) => self.link_snippet = Some(*snippet),
            Element::Update(update) => self.update = Some(*update),
            Element::AbstractView(view) => self.abstract_view = Some(view),
            other => return Some(other),
        }
        None
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        let mut nodes = Vec::new();
        push_node(&mut nodes, self.link_snippet.as_ref());
        push_node(&mut nodes, self.update.as_ref());
        nodes.extend(self.abstract_view.iter().map(AbstractView::as_node));
        nodes
    }
}

/// Ordered Create, Delete and Change operations against the document
/// loaded from `targetHref`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Update {
    pub(crate) object: ObjectData,
    pub(crate) target_href: Option<String>,
    pub(crate) operations: Vec<UpdateOperation>,
}

impl Update {
    pub fn new() -> Self {
        Self::default()
    }

    string_field!(target_href, set_target_href, has_target_href, clear_target_href);
    child_array!(operations: UpdateOperation;
        add_operation, operation_array_size, operation_array_at, operation_array_at_mut,
        remove_operation_at);
}

impl_object!(Update => Update);

impl Layout for Update {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_string(writer, "targetHref", self.target_href.as_ref());
        write_children(writer, &self.operations);
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        if name == "targetHref" {
            self.target_href = Some(text.to_string());
            return Ok(true);
        }
        Ok(false)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match child {
            Element::UpdateOperation(operation) => {
                self.operations.push(operation);
                None
            }
            other => Some(other),
        }
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        self.operations.iter().map(UpdateOperation::as_node).collect()
    }
}

/// Adds features to the Document or Folder named by each child's `targetId`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Create {
    pub(crate) object: ObjectData,
    pub(crate) containers: Vec<Feature>,
}

impl Create {
    pub fn new() -> Self {
        Self::default()
    }

    child_array!(containers: Feature;
        add_container, container_array_size, container_array_at, container_array_at_mut,
        remove_container_at);
}

impl_object!(Create => Create);

impl Layout for Create {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_children(writer, &self.containers);
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match child {
            Element::Feature(feature) if feature.kind().is_container() => {
                self.containers.push(feature);
                None
            }
            other => Some(other),
        }
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        self.containers.iter().map(Feature::as_node).collect()
    }
}

/// Removes the features named by each child's `targetId`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Delete {
    pub(crate) object: ObjectData,
    pub(crate) features: Vec<Feature>,
}

impl Delete {
    pub fn new() -> Self {
        Self::default()
    }

    child_array!(features: Feature;
        add_feature, feature_array_size, feature_array_at, feature_array_at_mut,
        remove_feature_at);
}

impl_object!(Delete => Delete);

impl Layout for Delete {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_children(writer, &self.features);
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match child {
            Element::Feature(feature) => {
                self.features.push(feature);
                None
            }
            other => Some(other),
        }
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        self.features.iter().map(Feature::as_node).collect()
    }
}

/// Replaces fields of the objects named by each child's `targetId`; a
/// child carries only the fields being changed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Change {
    pub(crate) object: ObjectData,
    pub(crate) objects: Vec<Element>,
}

impl Change {
    pub fn new() -> Self {
        Self::default()
    }

    child_array!(objects: Element;
        add_object, object_array_size, object_array_at, object_array_at_mut, remove_object_at);
}

impl_object!(Change => Change);

impl Layout for Change {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_children(writer, &self.objects);
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        self.objects.push(child);
        None
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        self.objects.iter().map(Element::as_node).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Document, Object, Placemark, Point};

    #[test]
    fn test_update_keeps_operation_order() -> Result<()> {
        let mut placemark = Placemark::new();
        placemark.set_target_id("pa");
        let mut delete = Delete::new();
        delete.add_feature(placemark);

        let mut point = Point::new();
        point.set_target_id("pb");
        let mut change = Change::new();
        change.add_object(point);

        let mut update = Update::new();
        update.set_target_href("http://example.com/points.kml");
        update.add_operation(change);
        update.add_operation(delete);

        let mut writer = XmlWriter::compact();
        write_element(&update, &mut writer);
        assert_eq!(
            writer.finish(),
            "<Update><targetHref>http://example.com/points.kml</targetHref>\
             <Change><Point targetId=\"pb\"/></Change>\
             <Delete><Placemark targetId=\"pa\"/></Delete></Update>"
        );
        assert_eq!(update.operation_array_at(1)?.kind(), crate::dom::KmlDomType::Delete);
        assert!(update.operation_array_at(2).is_err());
        Ok(())
    }

    #[test]
    fn test_create_takes_containers_only() {
        let mut create = Create::new();
        let mut document = Document::new();
        document.set_target_id("d");
        assert!(create.add_child(document.into()).is_none());
        assert!(create.add_child(Placemark::new().into()).is_some());
        assert_eq!(create.container_array_size(), 1);

        let mut delete = Delete::new();
        assert!(delete.add_child(Placemark::new().into()).is_none());
        assert!(delete.add_child(Point::new().into()).is_some());
    }

    #[test]
    fn test_network_link_control_fields() -> Result<()> {
        let mut control = NetworkLinkControl::new();
        assert!((control.max_session_length() + 1.0).abs() < f64::EPSILON);
        assert!(control.parse_field("minRefreshPeriod", "30")?);
        assert!(control.parse_field("expires", "2008-05-30")?);
        assert!(control.parse_field("expires", "soon").is_err());
        assert!(control.parse_field("cookie", "session=1&page=2")?);

        let mut snippet = LinkSnippet::new();
        snippet.set_text("updated");
        assert!(control.add_child(snippet.into()).is_none());
        assert!(control.add_child(Update::new().into()).is_none());
        assert!(control.add_child(crate::dom::Camera::new().into()).is_none());
        assert!(control.add_child(Placemark::new().into()).is_some());

        let kinds: Vec<_> = control.child_nodes().iter().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            [
                crate::dom::KmlDomType::LinkSnippet,
                crate::dom::KmlDomType::Update,
                crate::dom::KmlDomType::Camera,
            ]
        );
        assert_eq!(control.expires().map(|e| e.to_string()).as_deref(), Some("2008-05-30"));
        assert_eq!(control.cookie(), "session=1&page=2");
        Ok(())
    }
}
