//! Short descriptions whose body is plain text

use crate::dom::layout::{parse_value, Layout};
use crate::dom::ObjectData;
use crate::error::Result;
use crate::xml::XmlWriter;

macro_rules! snippet {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            pub(crate) object: ObjectData,
            pub(crate) max_lines: Option<u32>,
            pub(crate) text: Option<String>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            value_field!(
                /// `maxLines` attribute
                max_lines, set_max_lines, has_max_lines, clear_max_lines: u32 = 2
            );
            string_field!(text, set_text, has_text, clear_text);
        }

        impl_object!($name => $name);

        impl Layout for $name {
            fn write_fields(&self, _writer: &mut XmlWriter) {}

            fn text_content(&self) -> Option<&str> {
                self.text.as_deref()
            }

            fn parse_text(&mut self, text: &str) -> Result<bool> {
                self.text = Some(text.to_string());
                Ok(true)
            }

            fn parse_attribute(&mut self, name: &str, value: &str) -> Result<bool> {
                if name == "maxLines" {
                    self.max_lines = Some(parse_value(name, value)?);
                    return Ok(true);
                }
                Ok(false)
            }

            fn schema_attributes(&self) -> Vec<(&'static str, String)> {
                self.max_lines
                    .iter()
                    .map(|lines| ("maxLines", lines.to_string()))
                    .collect()
            }
        }
    };
}

snippet!(
    /// Feature summary shown in list views in place of the description
    Snippet
);
snippet!(
    /// Summary a NetworkLinkControl pushes onto its NetworkLink
    LinkSnippet
);
