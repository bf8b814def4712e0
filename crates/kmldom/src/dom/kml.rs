//! `<kml>` document root

use crate::dom::layout::{push_node, write_child, write_element, Layout};
use crate::dom::{Element, Feature, NetworkLinkControl, Node, ObjectData};
use crate::error::Result;
use crate::xml::XmlWriter;

/// Root element holding at most one feature, optionally preceded by a
/// NetworkLinkControl
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Kml {
    pub(crate) object: ObjectData,
    pub(crate) hint: Option<String>,
    pub(crate) network_link_control: Option<NetworkLinkControl>,
    pub(crate) feature: Option<Feature>,
}

impl Kml {
    pub fn new() -> Self {
        Self::default()
    }

    string_field!(
        /// `hint` attribute, e.g. `target=sky`
        hint, set_hint, has_hint, clear_hint
    );
    child_field!(
        network_link_control, network_link_control_mut, set_network_link_control,
        has_network_link_control, clear_network_link_control: NetworkLinkControl
    );
    child_field!(feature, feature_mut, set_feature, has_feature, clear_feature: Feature);
}

impl_object!(Kml => Kml);

impl Layout for Kml {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_child(writer, self.network_link_control.as_ref());
        if let Some(feature) = &self.feature {
            write_element(feature, writer);
        }
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match child {
            Element::NetworkLinkControl(control) => self.network_link_control = Some(*control),
            Element::Feature(feature) => self.feature = Some(feature),
            other => return Some(other),
        }
        None
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        let mut nodes = Vec::new();
        push_node(&mut nodes, self.network_link_control.as_ref());
        nodes.extend(self.feature.iter().map(Feature::as_node));
        nodes
    }

    fn parse_attribute(&mut self, name: &str, value: &str) -> Result<bool> {
        if name == "hint" {
            self.hint = Some(value.to_string());
            return Ok(true);
        }
        Ok(false)
    }

    fn schema_attributes(&self) -> Vec<(&'static str, String)> {
        self.hint
            .iter()
            .map(|hint| ("hint", hint.clone()))
            .collect()
    }
}
