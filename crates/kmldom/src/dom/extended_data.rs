//! Custom data attached to features: untyped `Data` pairs and typed
//! `SchemaData` values declared by a `Schema`

use crate::dom::layout::{push_nodes, write_children, write_string, Layout};
use crate::dom::{Element, Node, ObjectData};
use crate::error::Result;
use crate::xml::XmlWriter;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtendedData {
    pub(crate) object: ObjectData,
    pub(crate) data: Vec<Data>,
    pub(crate) schema_data: Vec<SchemaData>,
}

impl ExtendedData {
    pub fn new() -> Self {
        Self::default()
    }

    child_array!(data: Data;
        add_data, data_array_size, data_array_at, data_array_at_mut, remove_data_at);
    child_array!(schema_data: SchemaData;
        add_schema_data, schema_data_array_size, schema_data_array_at,
        schema_data_array_at_mut, remove_schema_data_at);
}

impl_object!(ExtendedData => ExtendedData);

impl Layout for ExtendedData {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_children(writer, &self.data);
        write_children(writer, &self.schema_data);
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match child {
            Element::Data(data) => self.data.push(*data),
            Element::SchemaData(data) => self.schema_data.push(*data),
            other => return Some(other),
        }
        None
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        let mut nodes = Vec::new();
        push_nodes(&mut nodes, &self.data);
        push_nodes(&mut nodes, &self.schema_data);
        nodes
    }
}

/// `<Data name="...">` entry
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Data {
    pub(crate) object: ObjectData,
    pub(crate) name: Option<String>,
    pub(crate) display_name: Option<String>,
    pub(crate) value: Option<String>,
}

impl Data {
    pub fn new() -> Self {
        Self::default()
    }

    string_field!(
        /// Written as the `name` attribute
        name, set_name, has_name, clear_name
    );
    string_field!(display_name, set_display_name, has_display_name, clear_display_name);
    string_field!(value, set_value, has_value, clear_value);
}

impl_object!(Data => Data);

impl Layout for Data {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_string(writer, "displayName", self.display_name.as_ref());
        write_string(writer, "value", self.value.as_ref());
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "displayName" => self.display_name = Some(text.to_string()),
            "value" => self.value = Some(text.to_string()),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn parse_attribute(&mut self, name: &str, value: &str) -> Result<bool> {
        Ok(parse_name(&mut self.name, name, value))
    }

    fn schema_attributes(&self) -> Vec<(&'static str, String)> {
        name_attribute(self.name.as_ref())
    }
}

/// Takes a `name` attribute into `slot`
fn parse_name(slot: &mut Option<String>, name: &str, value: &str) -> bool {
    if name == "name" {
        *slot = Some(value.to_string());
        return true;
    }
    false
}

fn name_attribute(name: Option<&String>) -> Vec<(&'static str, String)> {
    name.iter().map(|name| ("name", (*name).clone())).collect()
}

/// Declaration of a custom data type, referenced by `SchemaData`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema {
    pub(crate) object: ObjectData,
    pub(crate) name: Option<String>,
    pub(crate) simple_fields: Vec<SimpleField>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    string_field!(name, set_name, has_name, clear_name);
    child_array!(simple_fields: SimpleField;
        add_simple_field, simple_field_array_size, simple_field_array_at,
        simple_field_array_at_mut, remove_simple_field_at);
}

impl_object!(Schema => Schema);

impl Layout for Schema {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_children(writer, &self.simple_fields);
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match child {
            Element::SimpleField(field) => {
                self.simple_fields.push(*field);
                None
            }
            other => Some(other),
        }
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        let mut nodes = Vec::new();
        push_nodes(&mut nodes, &self.simple_fields);
        nodes
    }

    fn parse_attribute(&mut self, name: &str, value: &str) -> Result<bool> {
        Ok(parse_name(&mut self.name, name, value))
    }

    fn schema_attributes(&self) -> Vec<(&'static str, String)> {
        name_attribute(self.name.as_ref())
    }
}

/// One typed field of a Schema
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimpleField {
    pub(crate) object: ObjectData,
    pub(crate) field_type: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) display_name: Option<String>,
}

impl SimpleField {
    pub fn new() -> Self {
        Self::default()
    }

    string_field!(
        /// `type` attribute, e.g. `string`, `int`, `double`
        field_type, set_field_type, has_field_type, clear_field_type
    );
    string_field!(name, set_name, has_name, clear_name);
    string_field!(display_name, set_display_name, has_display_name, clear_display_name);
}

impl_object!(SimpleField => SimpleField);

impl Layout for SimpleField {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_string(writer, "displayName", self.display_name.as_ref());
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        if name == "displayName" {
            self.display_name = Some(text.to_string());
            return Ok(true);
        }
        Ok(false)
    }

    fn parse_attribute(&mut self, name: &str, value: &str) -> Result<bool> {
        if name == "type" {
            self.field_type = Some(value.to_string());
            return Ok(true);
        }
        Ok(parse_name(&mut self.name, name, value))
    }

    fn schema_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attributes: Vec<(&'static str, String)> = self
            .field_type
            .iter()
            .map(|field_type| ("type", field_type.clone()))
            .collect();
        attributes.extend(name_attribute(self.name.as_ref()));
        attributes
    }
}

/// Values for the fields of the Schema named by `schemaUrl`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaData {
    pub(crate) object: ObjectData,
    pub(crate) schema_url: Option<String>,
    pub(crate) simple_data: Vec<SimpleData>,
}

impl SchemaData {
    pub fn new() -> Self {
        Self::default()
    }

    string_field!(
        /// `schemaUrl` attribute, usually `#` plus a Schema id
        schema_url, set_schema_url, has_schema_url, clear_schema_url
    );
    child_array!(simple_data: SimpleData;
        add_simple_data, simple_data_array_size, simple_data_array_at,
        simple_data_array_at_mut, remove_simple_data_at);
}

impl_object!(SchemaData => SchemaData);

impl Layout for SchemaData {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_children(writer, &self.simple_data);
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match child {
            Element::SimpleData(data) => {
                self.simple_data.push(*data);
                None
            }
            other => Some(other),
        }
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        let mut nodes = Vec::new();
        push_nodes(&mut nodes, &self.simple_data);
        nodes
    }

    fn parse_attribute(&mut self, name: &str, value: &str) -> Result<bool> {
        if name == "schemaUrl" {
            self.schema_url = Some(value.to_string());
            return Ok(true);
        }
        Ok(false)
    }

    fn schema_attributes(&self) -> Vec<(&'static str, String)> {
        self.schema_url
            .iter()
            .map(|url| ("schemaUrl", url.clone()))
            .collect()
    }
}

/// Value of one SimpleField; the element body is the value text
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimpleData {
    pub(crate) object: ObjectData,
    pub(crate) name: Option<String>,
    pub(crate) text: Option<String>,
}

impl SimpleData {
    pub fn new() -> Self {
        Self::default()
    }

    string_field!(name, set_name, has_name, clear_name);
    string_field!(text, set_text, has_text, clear_text);
}

impl_object!(SimpleData => SimpleData);

impl Layout for SimpleData {
    fn write_fields(&self, _writer: &mut XmlWriter) {}

    fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn parse_text(&mut self, text: &str) -> Result<bool> {
        self.text = Some(text.to_string());
        Ok(true)
    }

    fn parse_attribute(&mut self, name: &str, value: &str) -> Result<bool> {
        Ok(parse_name(&mut self.name, name, value))
    }

    fn schema_attributes(&self) -> Vec<(&'static str, String)> {
        name_attribute(self.name.as_ref())
    }
}
