//! Markup reader: bytes to a positioned generic element tree

use crate::base::Attributes;
use crate::error::{Error, ErrorKind, Result, Span};
use crate::xml::cursor::Cursor;
use crate::xml::model::{Content, Element};

/// Markup reader
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    max_depth: u16,
}

impl<'a> Parser<'a> {
    /// Create a new reader with no depth limit
    pub const fn new(input: &'a [u8]) -> Self {
        Self::with_max_depth(input, 0)
    }

    /// Create a reader that rejects nesting deeper than `max_depth` (0 = unlimited)
    pub const fn with_max_depth(input: &'a [u8], max_depth: u16) -> Self {
        Self {
            cursor: Cursor::new(input),
            max_depth,
        }
    }

    /// Parse a document and return its root element
    pub fn parse(&mut self) -> Result<Element> {
        // optional byte order mark
        self.cursor.consume_str(b"\xEF\xBB\xBF");
        self.skip_misc()?;
        if self.cursor.is_eof() {
            return Err(self.error_here("no root element"));
        }
        if self.cursor.current() != Some(b'<') {
            return Err(self.error_here("expected '<'"));
        }

        let root = self.parse_element(1)?;
        self.skip_misc()?;

        if !self.cursor.is_eof() {
            return Err(self.error_here("content after root element"));
        }

        Ok(root)
    }

    /// Skip whitespace, comments, processing instructions and doctype
    fn skip_misc(&mut self) -> Result<()> {
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.starts_with(b"<?") {
                self.skip_past(b"?>")?;
            } else if self.cursor.starts_with(b"<!--") {
                self.skip_past(b"-->")?;
            } else if self.cursor.starts_with(b"<!") && !self.cursor.starts_with(b"<![CDATA[") {
                self.skip_past(b">")?;
            } else {
                return Ok(());
            }
        }
    }

    fn parse_element(&mut self, depth: u16) -> Result<Element> {
        if self.max_depth > 0 && depth > self.max_depth {
            return Err(Error::at(
                ErrorKind::MaxDepthExceeded {
                    max: self.max_depth,
                },
                self.cursor.position(),
            ));
        }

        let pos = self.cursor.position();
        self.expect_byte(b'<')?;
        let name = self.parse_name()?;
        let attributes = self.parse_attributes()?;

        if self.cursor.consume(b'/') {
            self.expect_byte(b'>')?;
            return Ok(Element {
                name,
                attributes,
                children: Vec::new(),
                pos,
            });
        }
        self.expect_byte(b'>')?;

        let mut children = Vec::new();
        let mut text = String::new();
        loop {
            if self.cursor.is_eof() {
                return Err(Error::with_message(
                    ErrorKind::InvalidMarkup,
                    Span::at(pos),
                    format!("unterminated element <{name}>"),
                ));
            }

            if self.cursor.starts_with(b"</") {
                let close_pos = self.cursor.position();
                self.cursor.advance_by(2);
                let close_name = self.parse_name()?;
                if close_name != name {
                    return Err(Error::at(
                        ErrorKind::MismatchedTag {
                            expected: name,
                            found: close_name,
                        },
                        close_pos,
                    ));
                }
                self.cursor.skip_whitespace();
                self.expect_byte(b'>')?;
                break;
            }

            if self.cursor.starts_with(b"<![CDATA[") {
                self.cursor.advance_by(9);
                let raw = self
                    .cursor
                    .take_until(b"]]>")
                    .ok_or_else(|| self.error_here("unterminated CDATA section"))?;
                text.push_str(&bytes_to_string(raw)?);
                continue;
            }

            if self.cursor.starts_with(b"<!--") {
                self.skip_past(b"-->")?;
                continue;
            }

            if self.cursor.starts_with(b"<?") {
                self.skip_past(b"?>")?;
                continue;
            }

            if self.cursor.current() == Some(b'<') {
                flush_text(&mut text, &mut children);
                let child = self.parse_element(depth.saturating_add(1))?;
                children.push(Content::Element(child));
                continue;
            }

            self.parse_text(&mut text)?;
        }

        flush_text(&mut text, &mut children);
        Ok(Element {
            name,
            attributes,
            children,
            pos,
        })
    }

    fn parse_attributes(&mut self) -> Result<Attributes> {
        let mut attrs = Attributes::new();

        loop {
            let had_space = matches!(self.cursor.current(), Some(b' ' | b'\t' | b'\r' | b'\n'));
            self.cursor.skip_whitespace();
            match self.cursor.current() {
                Some(b'/' | b'>') => break,
                Some(_) if !had_space => {
                    return Err(self.error_here("expected whitespace before attribute"));
                }
                Some(_) => {}
                None => return Err(self.error_here("unexpected end of input")),
            }

            let pos = self.cursor.position();
            let name = self.parse_name()?;
            self.cursor.skip_whitespace();
            self.expect_byte(b'=')?;
            self.cursor.skip_whitespace();
            let value = self.parse_attribute_value()?;

            if attrs.contains(&name) {
                return Err(Error::with_message(
                    ErrorKind::InvalidMarkup,
                    Span::at(pos),
                    format!("duplicate attribute {name}"),
                ));
            }
            attrs.set(name, value);
        }

        Ok(attrs)
    }

    fn parse_attribute_value(&mut self) -> Result<String> {
        let quote = match self.cursor.current() {
            Some(b'"') => b'"',
            Some(b'\'') => b'\'',
            _ => return Err(self.error_here("expected quoted attribute value")),
        };
        self.cursor.advance();

        let pos = self.cursor.position();
        let start = self.cursor.offset();
        while let Some(b) = self.cursor.current() {
            if b == quote {
                let raw = self.cursor.slice_from(start);
                self.cursor.advance();
                return decode_entities(&bytes_to_string(raw)?).map_err(|err| err.or_at(pos));
            }
            if b == b'<' {
                return Err(self.error_here("'<' in attribute value"));
            }
            self.cursor.advance();
        }

        Err(self.error_here("unterminated attribute value"))
    }

    fn parse_text(&mut self, text: &mut String) -> Result<()> {
        let pos = self.cursor.position();
        let start = self.cursor.offset();
        while let Some(b) = self.cursor.current() {
            if b == b'<' {
                break;
            }
            self.cursor.advance();
        }

        let raw = self.cursor.slice_from(start);
        let decoded = decode_entities(&bytes_to_string(raw)?).map_err(|err| err.or_at(pos))?;
        text.push_str(&decoded);
        Ok(())
    }

    fn parse_name(&mut self) -> Result<String> {
        let start = self.cursor.offset();

        match self.cursor.current() {
            Some(first) if is_name_start(first) => self.cursor.advance(),
            _ => return Err(self.error_here("expected name")),
        }

        while let Some(b) = self.cursor.current() {
            if is_name_char(b) {
                self.cursor.advance();
            } else {
                break;
            }
        }

        bytes_to_string(self.cursor.slice_from(start))
    }

    fn skip_past(&mut self, pattern: &[u8]) -> Result<()> {
        let pos = self.cursor.position();
        match self.cursor.take_until(pattern) {
            Some(_) => Ok(()),
            None => Err(Error::with_message(
                ErrorKind::InvalidMarkup,
                Span::at(pos),
                "unterminated markup".to_string(),
            )),
        }
    }

    fn expect_byte(&mut self, expected: u8) -> Result<()> {
        if self.cursor.consume(expected) {
            Ok(())
        } else {
            Err(self.error_here("unexpected token"))
        }
    }

    fn error_here(&self, message: &str) -> Error {
        Error::with_message(
            ErrorKind::InvalidMarkup,
            Span::at(self.cursor.position()),
            message.to_string(),
        )
    }
}

fn flush_text(text: &mut String, children: &mut Vec<Content>) {
    if !text.is_empty() {
        children.push(Content::Text(std::mem::take(text)));
    }
}

fn bytes_to_string(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|_| Error::with_message(ErrorKind::InvalidMarkup, Span::empty(), "invalid utf-8"))
}

fn is_name_start(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'_' | b':') || b >= 0x80
}

fn is_name_char(b: u8) -> bool {
    is_name_start(b) || matches!(b, b'0'..=b'9' | b'-' | b'.')
}

fn decode_entities(input: &str) -> Result<String> {
    if !input.contains('&') {
        return Ok(input.to_string());
    }

    let mut result = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        let (before, after) = rest.split_at(amp);
        result.push_str(before);

        let Some(semi) = after.find(';') else {
            return Err(invalid_entity(after));
        };
        let entity = after.get(1..semi).unwrap_or_default();
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => decode_numeric_entity(entity),
        };
        match decoded {
            Some(ch) => result.push(ch),
            None => return Err(invalid_entity(entity)),
        }
        rest = after.get(semi + 1..).unwrap_or_default();
    }
    result.push_str(rest);

    Ok(result)
}

fn invalid_entity(entity: &str) -> Error {
    let shown: String = entity.chars().take(16).collect();
    Error::with_message(
        ErrorKind::InvalidMarkup,
        Span::empty(),
        format!("invalid entity reference &{shown}"),
    )
}

fn decode_numeric_entity(entity: &str) -> Option<char> {
    if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fail<T>(message: &str) -> Result<T> {
        Err(Error::with_message(
            ErrorKind::InvalidMarkup,
            Span::empty(),
            message.to_string(),
        ))
    }

    #[test]
    fn test_parse_simple_element() -> Result<()> {
        let root = Parser::new(b"<kml></kml>").parse()?;
        assert_eq!(root.name, "kml");
        assert!(root.children.is_empty());
        Ok(())
    }

    #[test]
    fn test_parse_with_declaration_and_comments() -> Result<()> {
        let input = b"<?xml version=\"1.0\"?>\n<!-- c --><kml><!-- inner --><Folder/></kml>\n";
        let root = Parser::new(input).parse()?;
        assert_eq!(root.children.len(), 1);
        Ok(())
    }

    #[test]
    fn test_parse_with_attributes() -> Result<()> {
        let root = Parser::new(b"<Placemark id=\"p1\" targetId='t &amp; u'/>").parse()?;
        assert_eq!(root.attributes.get("id"), Some("p1"));
        assert_eq!(root.attributes.get("targetId"), Some("t & u"));
        Ok(())
    }

    #[test]
    fn test_text_is_kept_verbatim() -> Result<()> {
        let root = Parser::new(b"<name>  a &lt;b&gt; \n</name>").parse()?;
        match root.children.first() {
            Some(Content::Text(text)) => assert_eq!(text, "  a <b> \n"),
            _ => return fail("expected text"),
        }
        Ok(())
    }

    #[test]
    fn test_cdata_joins_text() -> Result<()> {
        let root = Parser::new(b"<description>x<![CDATA[<b>&</b>]]>y</description>").parse()?;
        assert_eq!(root.text(), "x<b>&</b>y");
        assert_eq!(root.children.len(), 1);
        Ok(())
    }

    #[test]
    fn test_positions_are_recorded() -> Result<()> {
        let root = Parser::new(b"<kml>\n  <Folder/>\n</kml>").parse()?;
        match root.children.get(1) {
            Some(Content::Element(child)) => {
                assert_eq!(child.pos.line, 2);
                assert_eq!(child.pos.col, 3);
            }
            _ => return fail("expected child element"),
        }
        Ok(())
    }

    #[test]
    fn test_mismatched_tag() {
        let result = Parser::new(b"<kml><Folder></kml>").parse();
        assert!(matches!(
            result.map_err(|e| e.kind().clone()),
            Err(ErrorKind::MismatchedTag { .. })
        ));
    }

    #[test]
    fn test_rejects_junk() {
        assert!(Parser::new(b"This is not even xml").parse().is_err());
        assert!(Parser::new(b"<Document><name>&</name></Document>").parse().is_err());
        assert!(Parser::new(b"<kml><Placemark>").parse().is_err());
        assert!(Parser::new(b"<kml/><kml/>").parse().is_err());
        assert!(Parser::new(b"").parse().is_err());
    }

    #[test]
    fn test_depth_limit() {
        let result = Parser::with_max_depth(b"<a><b><c/></b></a>", 2).parse();
        assert!(matches!(
            result.map_err(|e| e.kind().clone()),
            Err(ErrorKind::MaxDepthExceeded { max: 2 })
        ));
        assert!(Parser::with_max_depth(b"<a><b/></a>", 2).parse().is_ok());
    }

    #[test]
    fn test_numeric_entities() -> Result<()> {
        let root = Parser::new(b"<name>&#65;&#x42;</name>").parse()?;
        assert_eq!(root.text(), "AB");
        Ok(())
    }
}
