//! Generic markup tree produced by the reader

use crate::base::Attributes;
use crate::error::Pos;
use crate::xml::writer::escape;

/// Markup element with its source position
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Attributes,
    pub children: Vec<Content>,
    pub pos: Pos,
}

/// Markup content node
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Element(Element),
    Text(String),
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
            pos: Pos::default(),
        }
    }

    /// True if any child is an element
    pub fn has_child_elements(&self) -> bool {
        self.children
            .iter()
            .any(|child| matches!(child, Content::Element(_)))
    }

    /// Concatenated text children, verbatim
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Content::Text(text) => Some(text.as_str()),
                Content::Element(_) => None,
            })
            .collect()
    }

    /// Text children plus child elements written back as markup
    pub fn inner_markup(&self) -> String {
        let mut output = String::new();
        for child in &self.children {
            match child {
                Content::Text(text) => output.push_str(&escape(text)),
                Content::Element(element) => element.write_compact(&mut output),
            }
        }
        output
    }

    /// Element written without inserted whitespace
    pub fn to_compact_string(&self) -> String {
        let mut output = String::new();
        self.write_compact(&mut output);
        output
    }

    fn write_compact(&self, output: &mut String) {
        output.push('<');
        output.push_str(&self.name);
        for (key, value) in self.attributes.iter() {
            output.push(' ');
            output.push_str(key);
            output.push_str("=\"");
            output.push_str(&escape(value));
            output.push('"');
        }

        if self.children.is_empty() {
            output.push_str("/>");
            return;
        }

        output.push('>');
        for child in &self.children {
            match child {
                Content::Element(child) => child.write_compact(output),
                Content::Text(text) => output.push_str(&escape(text)),
            }
        }
        output.push_str("</");
        output.push_str(&self.name);
        output.push('>');
    }
}
