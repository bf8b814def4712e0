//! KML parser: markup text to a typed element tree.
//!
//! Parsing runs in two stages. The generic reader in [`crate::xml`] turns
//! bytes into a positioned markup tree; the builder here maps every tag to
//! its kind, allocates through [`KmlFactory`] and fills fields, attributes
//! and children.

use tracing::{debug, warn};

use crate::dom::layout::Layout;
use crate::dom::{Element, KmlDomType, Object};
use crate::error::{Error, ErrorKind, Result, Span};
use crate::factory::KmlFactory;
use crate::xml::{self, Content};

/// How to treat content the schema does not place
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Unknown or misplaced elements and stray text fail the parse
    Strict,
    /// Unknown and misplaced elements are kept verbatim, stray text is dropped
    #[default]
    Lenient,
}

/// Configuration for the KML parser
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub strictness: Strictness,
    /// Maximum nesting depth (0 means unlimited)
    pub max_depth: u16,
    /// Maximum input size in bytes (0 means unlimited)
    pub max_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strictness: Strictness::Lenient,
            max_depth: 128,
            max_size: 10 * 1024 * 1024, // 10 MB default
        }
    }
}

impl Config {
    /// Default limits with strict handling of unknown content
    pub fn strict() -> Self {
        Self {
            strictness: Strictness::Strict,
            ..Self::default()
        }
    }

    /// Lenient, with unlimited depth and size
    pub const fn unlimited() -> Self {
        Self {
            strictness: Strictness::Lenient,
            max_depth: 0,
            max_size: 0,
        }
    }

    #[must_use]
    pub const fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub const fn is_strict(&self) -> bool {
        matches!(self.strictness, Strictness::Strict)
    }
}

/// Builds a typed tree from KML text
#[derive(Debug)]
pub struct Parser<'a> {
    input: &'a [u8],
    config: Config,
}

impl<'a> Parser<'a> {
    /// Create a new parser with default configuration
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, Config::default())
    }

    pub fn with_config(input: &'a [u8], config: Config) -> Self {
        Self { input, config }
    }

    /// Parse the complete input into its root element
    pub fn parse(&self) -> Result<Element> {
        if self.config.max_size > 0 && self.input.len() > self.config.max_size {
            return Err(Error::new(
                ErrorKind::MaxSizeExceeded {
                    max: self.config.max_size,
                },
                Span::empty(),
            ));
        }

        debug!(
            bytes = self.input.len(),
            strictness = ?self.config.strictness,
            "parsing kml"
        );
        let markup = xml::Parser::with_max_depth(self.input, self.config.max_depth).parse()?;
        let Some(mut root) = KmlFactory::create_element_by_tag(&markup.name) else {
            return Err(Error::at(
                ErrorKind::UnknownElement {
                    tag: markup.name.clone(),
                },
                markup.pos,
            ));
        };
        self.fill(&mut root, &markup)?;
        debug!(root = %root.kind(), "parsed kml");
        Ok(root)
    }

    /// Populate `target` from the attributes and children of `markup`
    fn fill(&self, target: &mut Element, markup: &xml::Element) -> Result<()> {
        for (name, value) in markup.attributes.iter() {
            self.apply_attribute(target, name, value)
                .map_err(|err| err.or_at(markup.pos))?;
        }

        if target.kind().has_text_content() {
            let text = match markup.has_child_elements() {
                true => markup.inner_markup(),
                false => markup.text(),
            };
            target
                .parse_text(&text)
                .map_err(|err| err.or_at(markup.pos))?;
            return Ok(());
        }

        for child in &markup.children {
            match child {
                Content::Text(text) => self.stray_text(target.kind(), markup, text)?,
                Content::Element(child) => self.add_child(target, child)?,
            }
        }
        Ok(())
    }

    fn apply_attribute(&self, target: &mut Element, name: &str, value: &str) -> Result<()> {
        match name {
            "id" => target.set_id(value),
            "targetId" => target.set_target_id(value),
            _ => {
                if !target.parse_attribute(name, value)? {
                    target.attributes_mut().set(name, value);
                }
            }
        }
        Ok(())
    }

    fn add_child(&self, target: &mut Element, child: &xml::Element) -> Result<()> {
        if let Some(kind) = KmlDomType::from_tag_name(&child.name) {
            // A misplaced subtree is never typed, so bad values inside it
            // cannot fail a lenient parse
            if !accepts(target.kind(), kind) {
                return self.misplaced(target, child);
            }
            if let Some(mut element) = KmlFactory::create_element(kind) {
                self.fill(&mut element, child)?;
                return match target.add_child(element) {
                    None => Ok(()),
                    Some(_) => self.misplaced(target, child),
                };
            }
        }

        let handled = match field_text(child) {
            Some(text) => target
                .parse_field(&child.name, &text)
                .map_err(|err| err.or_at(child.pos))?,
            None => false,
        };
        if handled {
            return Ok(());
        }
        self.unknown(target, child)
    }

    fn misplaced(&self, target: &mut Element, child: &xml::Element) -> Result<()> {
        let parent = target.kind().tag_name();
        if self.config.is_strict() {
            return Err(Error::at(
                ErrorKind::MisplacedElement {
                    tag: child.name.clone(),
                    parent: parent.to_string(),
                },
                child.pos,
            ));
        }
        warn!(tag = %child.name, parent, pos = %child.pos, "keeping misplaced element verbatim");
        target.add_unknown_element(child.clone());
        Ok(())
    }

    fn unknown(&self, target: &mut Element, child: &xml::Element) -> Result<()> {
        if self.config.is_strict() {
            return Err(Error::at(
                ErrorKind::UnknownElement {
                    tag: child.name.clone(),
                },
                child.pos,
            ));
        }
        warn!(
            tag = %child.name,
            parent = target.kind().tag_name(),
            pos = %child.pos,
            "keeping unknown element verbatim"
        );
        target.add_unknown_element(child.clone());
        Ok(())
    }

    /// Character data directly inside a complex element
    fn stray_text(&self, parent: KmlDomType, markup: &xml::Element, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Ok(());
        }
        if self.config.is_strict() {
            return Err(Error::at(
                ErrorKind::UnexpectedCharData {
                    parent: parent.tag_name().to_string(),
                },
                markup.pos,
            ));
        }
        warn!(parent = parent.tag_name(), pos = %markup.pos, "dropping character data");
        Ok(())
    }
}

/// True if an element of kind `parent` takes a child of kind `child`
fn accepts(parent: KmlDomType, child: KmlDomType) -> bool {
    match (
        KmlFactory::create_element(parent),
        KmlFactory::create_element(child),
    ) {
        (Some(mut parent), Some(child)) => parent.add_child(child).is_none(),
        _ => false,
    }
}

/// Text of a simple field. Markup inside `description` and balloon `text`
/// is kept as text; any other field holding elements is not simple.
fn field_text(field: &xml::Element) -> Option<String> {
    if !field.has_child_elements() {
        return Some(field.text());
    }
    match field.name.as_str() {
        "description" | "text" => Some(field.inner_markup()),
        _ => None,
    }
}

/// Parse KML text with the default (lenient) configuration
pub fn parse(input: &str) -> Result<Element> {
    Parser::new(input.as_bytes()).parse()
}

pub fn parse_with_config(input: &str, config: Config) -> Result<Element> {
    Parser::with_config(input.as_bytes(), config).parse()
}
