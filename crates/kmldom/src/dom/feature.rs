//! Feature capability: named, optionally visible, styled, time-bounded

use crate::dom::layout::{
    parse_bool, push_node, write_bool, write_child, write_children, write_element, write_string,
};
use crate::dom::{
    AbstractView, Element, ExtendedData, Node, Object, Region, Snippet, StyleSelector,
    TimePrimitive,
};
use crate::error::Result;
use crate::xml::XmlWriter;

/// Fields shared by every feature kind
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureData {
    pub(crate) name: Option<String>,
    pub(crate) visibility: Option<bool>,
    pub(crate) open: Option<bool>,
    pub(crate) address: Option<String>,
    pub(crate) phone_number: Option<String>,
    pub(crate) snippet: Option<Snippet>,
    pub(crate) description: Option<String>,
    pub(crate) abstract_view: Option<AbstractView>,
    pub(crate) time_primitive: Option<TimePrimitive>,
    pub(crate) style_url: Option<String>,
    pub(crate) style_selectors: Vec<StyleSelector>,
    pub(crate) region: Option<Region>,
    pub(crate) extended_data: Option<ExtendedData>,
}

/// Accessors shared by Placemark, NetworkLink, containers and overlays
pub trait FeatureObject: Object {
    fn feature_data(&self) -> &FeatureData;

    fn feature_data_mut(&mut self) -> &mut FeatureData;

    string_field!(via feature_data, feature_data_mut; name, set_name, has_name, clear_name);
    value_field!(via feature_data, feature_data_mut;
        /// Defaults to visible
        visibility, set_visibility, has_visibility, clear_visibility: bool = true);
    value_field!(via feature_data, feature_data_mut; open, set_open, has_open, clear_open: bool = false);
    string_field!(via feature_data, feature_data_mut; address, set_address, has_address, clear_address);
    string_field!(via feature_data, feature_data_mut;
        phone_number, set_phone_number, has_phone_number, clear_phone_number);
    child_field!(via feature_data, feature_data_mut;
        snippet, snippet_mut, set_snippet, has_snippet, clear_snippet: Snippet);
    string_field!(via feature_data, feature_data_mut;
        /// Free text, frequently HTML; written back escaped
        description, set_description, has_description, clear_description);
    child_field!(via feature_data, feature_data_mut;
        abstract_view, abstract_view_mut, set_abstract_view, has_abstract_view,
        clear_abstract_view: AbstractView);
    child_field!(via feature_data, feature_data_mut;
        time_primitive, time_primitive_mut, set_time_primitive, has_time_primitive,
        clear_time_primitive: TimePrimitive);
    string_field!(via feature_data, feature_data_mut; style_url, set_style_url, has_style_url, clear_style_url);
    child_array!(via feature_data, feature_data_mut; style_selectors: StyleSelector;
        add_style_selector, style_selector_array_size, style_selector_array_at,
        style_selector_array_at_mut, remove_style_selector_at);
    child_field!(via feature_data, feature_data_mut;
        region, region_mut, set_region, has_region, clear_region: Region);
    child_field!(via feature_data, feature_data_mut;
        extended_data, extended_data_mut, set_extended_data, has_extended_data,
        clear_extended_data: ExtendedData);
}

pub(crate) fn write_feature_fields(data: &FeatureData, writer: &mut XmlWriter) {
    write_string(writer, "name", data.name.as_ref());
    write_bool(writer, "visibility", data.visibility);
    write_bool(writer, "open", data.open);
    write_string(writer, "address", data.address.as_ref());
    write_string(writer, "phoneNumber", data.phone_number.as_ref());
    write_child(writer, data.snippet.as_ref());
    write_string(writer, "description", data.description.as_ref());
    if let Some(view) = &data.abstract_view {
        write_element(view, writer);
    }
    if let Some(time) = &data.time_primitive {
        write_element(time, writer);
    }
    write_string(writer, "styleUrl", data.style_url.as_ref());
    write_children(writer, &data.style_selectors);
    write_child(writer, data.region.as_ref());
    write_child(writer, data.extended_data.as_ref());
}

/// Typed children of the shared feature fields, in written order
pub(crate) fn feature_nodes(data: &FeatureData) -> Vec<&dyn Node> {
    let mut nodes = Vec::new();
    push_node(&mut nodes, data.snippet.as_ref());
    nodes.extend(data.abstract_view.iter().map(AbstractView::as_node));
    nodes.extend(data.time_primitive.iter().map(TimePrimitive::as_node));
    nodes.extend(data.style_selectors.iter().map(StyleSelector::as_node));
    push_node(&mut nodes, data.region.as_ref());
    push_node(&mut nodes, data.extended_data.as_ref());
    nodes
}

pub(crate) fn parse_feature_field(data: &mut FeatureData, name: &str, text: &str) -> Result<bool> {
    match name {
        "name" => data.name = Some(text.to_string()),
        "visibility" => data.visibility = Some(parse_bool(name, text)?),
        "open" => data.open = Some(parse_bool(name, text)?),
        "address" => data.address = Some(text.to_string()),
        "phoneNumber" => data.phone_number = Some(text.to_string()),
        "description" => data.description = Some(text.to_string()),
        "styleUrl" => data.style_url = Some(text.to_string()),
        _ => return Ok(false),
    }
    Ok(true)
}

pub(crate) fn add_feature_child(data: &mut FeatureData, child: Element) -> Option<Element> {
    match child {
        Element::Snippet(snippet) => data.snippet = Some(*snippet),
        Element::AbstractView(view) => data.abstract_view = Some(view),
        Element::TimePrimitive(time) => data.time_primitive = Some(time),
        Element::StyleSelector(selector) => data.style_selectors.push(selector),
        Element::Region(region) => data.region = Some(*region),
        Element::ExtendedData(extended) => data.extended_data = Some(*extended),
        other => return Some(other),
    }
    None
}
