//! Error types for kmldom

use std::fmt;
use thiserror::Error;

/// Position in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub const fn at(pos: Pos) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.start.line == 0 && self.end.line == 0
    }
}

/// What went wrong, independent of where
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input is not well-formed markup
    InvalidMarkup,
    /// Closing tag does not match the open element
    MismatchedTag { expected: String, found: String },
    /// Element name is not part of the KML schema
    UnknownElement { tag: String },
    /// Known element appearing where its parent does not accept it
    MisplacedElement { tag: String, parent: String },
    /// Non-whitespace text inside an element that only holds elements
    UnexpectedCharData { parent: String },
    /// Field text that does not parse as the field's type
    InvalidValue { field: String, text: String },
    /// Child list index outside `[0, size)`
    IndexOutOfRange { index: usize, size: usize },
    MaxDepthExceeded { max: u16 },
    MaxSizeExceeded { max: usize },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMarkup => write!(f, "invalid markup"),
            Self::MismatchedTag { expected, found } => {
                write!(f, "mismatched closing tag: expected </{expected}>, found </{found}>")
            }
            Self::UnknownElement { tag } => write!(f, "unknown element <{tag}>"),
            Self::MisplacedElement { tag, parent } => {
                write!(f, "element <{tag}> is not allowed inside <{parent}>")
            }
            Self::UnexpectedCharData { parent } => {
                write!(f, "unexpected character data inside <{parent}>")
            }
            Self::InvalidValue { field, text } => {
                write!(f, "invalid value for <{field}>: {text:?}")
            }
            Self::IndexOutOfRange { index, size } => {
                write!(f, "index {index} out of range for size {size}")
            }
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
            Self::MaxSizeExceeded { max } => write!(f, "max size exceeded: {max}"),
        }
    }
}

/// Main error type for kmldom
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Error whose span is the single point `pos`
    pub fn at(kind: ErrorKind, pos: Pos) -> Self {
        Self::new(kind, Span::at(pos))
    }

    /// Field text that failed to parse
    pub fn invalid_value(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::InvalidValue {
                field: field.into(),
                text: text.into(),
            },
            Span::empty(),
        )
    }

    pub fn out_of_range(index: usize, size: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfRange { index, size }, Span::empty())
    }

    /// Attach a location unless one is already known
    #[must_use]
    pub fn or_at(mut self, pos: Pos) -> Self {
        if self.span.is_empty() {
            self.span = Span::at(pos);
        }
        self
    }

    /// Malformed markup, unknown or misplaced elements and parser limits
    pub fn is_syntax(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidMarkup
                | ErrorKind::MismatchedTag { .. }
                | ErrorKind::UnknownElement { .. }
                | ErrorKind::MisplacedElement { .. }
                | ErrorKind::UnexpectedCharData { .. }
                | ErrorKind::MaxDepthExceeded { .. }
                | ErrorKind::MaxSizeExceeded { .. }
        )
    }

    /// Field text that does not parse as its declared type
    pub fn is_value(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidValue { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.span.is_empty() {
            write!(f, "error: {}", self.message)
        } else {
            write!(f, "error at {}: {}", self.span.start, self.message)
        }
    }
}

/// Result type alias for kmldom
pub type Result<T> = std::result::Result<T, Error>;
