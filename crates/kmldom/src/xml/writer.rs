//! Markup writer with compact and indented output

use crate::xml::model::Element;

/// Streaming markup writer.
///
/// Start tags stay open until the first child arrives so that elements
/// without content can be closed as `<tag/>`.
#[derive(Debug)]
pub struct XmlWriter {
    output: String,
    newline: &'static str,
    indent: &'static str,
    stack: Vec<Frame>,
}

#[derive(Debug)]
struct Frame {
    name: String,
    open: bool,
    /// Body is text written on the start tag's line
    inline: bool,
}

impl XmlWriter {
    /// Writer that inserts no whitespace
    pub fn compact() -> Self {
        Self::new("", "")
    }

    /// Writer that puts every element on its own line, indented two spaces
    /// per level
    pub fn pretty() -> Self {
        Self::new("\n", "  ")
    }

    pub fn new(newline: &'static str, indent: &'static str) -> Self {
        Self {
            output: String::new(),
            newline,
            indent,
            stack: Vec::new(),
        }
    }

    /// Open an element; attribute values are escaped
    pub fn begin<'a, I>(&mut self, name: &str, attributes: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.close_pending_start();
        self.write_indent();
        self.output.push('<');
        self.output.push_str(name);
        for (key, value) in attributes {
            self.output.push(' ');
            self.output.push_str(key);
            self.output.push_str("=\"");
            self.output.push_str(&escape(value));
            self.output.push('"');
        }
        self.stack.push(Frame {
            name: name.to_string(),
            open: true,
            inline: false,
        });
    }

    /// Close the innermost element
    pub fn end(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        if frame.open {
            self.output.push_str("/>");
        } else if frame.inline {
            self.output.push_str("</");
            self.output.push_str(&frame.name);
            self.output.push('>');
        } else {
            self.write_indent();
            self.output.push_str("</");
            self.output.push_str(&frame.name);
            self.output.push('>');
        }
        self.output.push_str(self.newline);
    }

    /// Simple element holding escaped text on one line
    pub fn field(&mut self, name: &str, text: &str) {
        self.close_pending_start();
        self.write_indent();
        self.output.push('<');
        self.output.push_str(name);
        if text.is_empty() {
            self.output.push_str("/>");
        } else {
            self.output.push('>');
            self.output.push_str(&escape(text));
            self.output.push_str("</");
            self.output.push_str(name);
            self.output.push('>');
        }
        self.output.push_str(self.newline);
    }

    /// Escaped character content of the innermost element. Must come
    /// before any child; empty text leaves the element self-closing.
    pub fn text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(frame) = self.stack.last_mut() {
            if frame.open {
                frame.open = false;
                frame.inline = true;
                self.output.push('>');
            }
        }
        self.output.push_str(&escape(text));
    }

    /// Passthrough element, always written compactly on its own line
    pub fn passthrough(&mut self, element: &Element) {
        self.close_pending_start();
        self.write_indent();
        self.output.push_str(&element.to_compact_string());
        self.output.push_str(self.newline);
    }

    /// Finish writing and return the text; unclosed elements are closed
    pub fn finish(mut self) -> String {
        while !self.stack.is_empty() {
            self.end();
        }
        self.output
    }

    fn close_pending_start(&mut self) {
        if let Some(frame) = self.stack.last_mut() {
            if frame.open {
                frame.open = false;
                self.output.push('>');
                self.output.push_str(self.newline);
            }
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.stack.len() {
            self.output.push_str(self.indent);
        }
    }
}

/// Escape the five predefined markup characters
pub fn escape(input: &str) -> String {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return input.to_string();
    }
    let mut output = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&apos;"),
            _ => output.push(ch),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_nesting() {
        let mut writer = XmlWriter::pretty();
        writer.begin("Placemark", [("id", "pm123")]);
        writer.field("name", "placemark name");
        writer.begin("Point", []);
        writer.field("coordinates", "2,1");
        writer.end();
        writer.end();
        assert_eq!(
            writer.finish(),
            "<Placemark id=\"pm123\">\n  <name>placemark name</name>\n  <Point>\n    <coordinates>2,1</coordinates>\n  </Point>\n</Placemark>\n"
        );
    }

    #[test]
    fn test_empty_element_self_closes() {
        let mut writer = XmlWriter::pretty();
        writer.begin("Placemark", [("id", "hi")]);
        writer.end();
        assert_eq!(writer.finish(), "<Placemark id=\"hi\"/>\n");

        let mut writer = XmlWriter::compact();
        writer.begin("Placemark", []);
        writer.field("name", "");
        writer.end();
        assert_eq!(writer.finish(), "<Placemark><name/></Placemark>");
    }

    #[test]
    fn test_text_body_stays_on_one_line() {
        let mut writer = XmlWriter::pretty();
        writer.begin("Placemark", []);
        writer.begin("Snippet", [("maxLines", "1")]);
        writer.text("a < b");
        writer.end();
        writer.begin("Snippet", []);
        writer.text("");
        writer.end();
        writer.end();
        assert_eq!(
            writer.finish(),
            "<Placemark>\n  <Snippet maxLines=\"1\">a &lt; b</Snippet>\n  <Snippet/>\n</Placemark>\n"
        );
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a&b<c>\"d'"), "a&amp;b&lt;c&gt;&quot;d&apos;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_finish_closes_open_elements() {
        let mut writer = XmlWriter::compact();
        writer.begin("kml", []);
        writer.begin("Folder", []);
        assert_eq!(writer.finish(), "<kml><Folder/></kml>");
    }
}
