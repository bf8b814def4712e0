//! Generic markup layer underneath the KML builder and serializer

pub mod cursor;
pub mod model;
pub mod parser;
pub mod writer;

pub use cursor::Cursor;
pub use model::{Content, Element};
pub use parser::Parser;
pub use writer::{escape, XmlWriter};
