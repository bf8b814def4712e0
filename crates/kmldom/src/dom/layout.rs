//! Per-kind knowledge of how fields map to markup.
//!
//! `Layout` is implemented for every element kind and for the element
//! enums. It lives in a private module so it cannot be implemented outside
//! the crate.

use std::fmt::Display;
use std::str::FromStr;

use crate::dom::{Element, Node, Object};
use crate::error::{Error, Result};
use crate::xml::XmlWriter;

pub trait Layout: Object {
    /// Known content in canonical order; attributes and passthrough
    /// children are written by [`write_element`]
    fn write_fields(&self, writer: &mut XmlWriter);

    /// Store the text of the simple field `name`; `Ok(false)` if the kind
    /// has no such field
    fn parse_field(&mut self, _name: &str, _text: &str) -> Result<bool> {
        Ok(false)
    }

    /// Attach a parsed child; the child comes back if this kind does not
    /// accept it
    fn add_child(&mut self, child: Element) -> Option<Element> {
        Some(child)
    }

    /// Typed children in the order they are written
    fn child_nodes(&self) -> Vec<&dyn Node> {
        Vec::new()
    }

    /// Character content, for the kinds whose element body is text
    fn text_content(&self) -> Option<&str> {
        None
    }

    /// Store character content; `Ok(false)` if the kind holds none
    fn parse_text(&mut self, _text: &str) -> Result<bool> {
        Ok(false)
    }

    /// Store a kind-specific attribute; `Ok(false)` if unrecognized
    fn parse_attribute(&mut self, _name: &str, _value: &str) -> Result<bool> {
        Ok(false)
    }

    /// Kind-specific attributes, written after `id` and `targetId`
    fn schema_attributes(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Write one element: tag, attributes, fields, passthrough children
pub fn write_element<T: Layout + ?Sized>(element: &T, writer: &mut XmlWriter) {
    let object = element.object_data();
    let mut attributes: Vec<(&str, String)> = Vec::new();
    if let Some(id) = &object.id {
        attributes.push(("id", id.clone()));
    }
    if let Some(target_id) = &object.target_id {
        attributes.push(("targetId", target_id.clone()));
    }
    attributes.extend(element.schema_attributes());
    for (name, value) in object.attributes.iter() {
        if !attributes.iter().any(|(known, _)| *known == name.as_str()) {
            attributes.push((name.as_str(), value.clone()));
        }
    }

    writer.begin(
        element.kind().tag_name(),
        attributes.iter().map(|(name, value)| (*name, value.as_str())),
    );
    if let Some(text) = element.text_content() {
        writer.text(text);
    }
    element.write_fields(writer);
    for unknown in &object.unknown_elements {
        writer.passthrough(unknown);
    }
    writer.end();
}

pub fn write_child<T: Layout>(writer: &mut XmlWriter, child: Option<&T>) {
    if let Some(child) = child {
        write_element(child, writer);
    }
}

pub fn write_children<T: Layout>(writer: &mut XmlWriter, children: &[T]) {
    for child in children {
        write_element(child, writer);
    }
}

/// Append `child` as a node if present
pub fn push_node<'a, T: Node>(nodes: &mut Vec<&'a dyn Node>, child: Option<&'a T>) {
    if let Some(child) = child {
        nodes.push(child);
    }
}

pub fn push_nodes<'a, T: Node>(nodes: &mut Vec<&'a dyn Node>, children: &'a [T]) {
    nodes.extend(children.iter().map(|child| child as &dyn Node));
}

pub fn write_string(writer: &mut XmlWriter, name: &str, value: Option<&String>) {
    if let Some(value) = value {
        writer.field(name, value);
    }
}

pub fn write_value<T: Display>(writer: &mut XmlWriter, name: &str, value: Option<&T>) {
    if let Some(value) = value {
        writer.field(name, &value.to_string());
    }
}

pub fn write_bool(writer: &mut XmlWriter, name: &str, value: Option<bool>) {
    if let Some(value) = value {
        writer.field(name, if value { "1" } else { "0" });
    }
}

/// Parse trimmed field text, reporting failures against `field`
pub fn parse_value<T: FromStr>(field: &str, text: &str) -> Result<T> {
    text.trim()
        .parse()
        .map_err(|_| Error::invalid_value(field, text))
}

/// `1`/`0`/`true`/`false`
pub fn parse_bool(field: &str, text: &str) -> Result<bool> {
    match text.trim() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(Error::invalid_value(field, text)),
    }
}
