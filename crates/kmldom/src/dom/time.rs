//! Time primitives

use crate::base::DateTime;
use crate::dom::layout::{parse_value, write_value, Layout};
use crate::dom::{Element, ObjectData};
use crate::error::Result;
use crate::xml::XmlWriter;

/// Single moment
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeStamp {
    pub(crate) object: ObjectData,
    pub(crate) when: Option<DateTime>,
}

impl TimeStamp {
    pub fn new() -> Self {
        Self::default()
    }

    child_field!(when, when_mut, set_when, has_when, clear_when: DateTime);
}

impl_object!(TimeStamp => TimeStamp);

impl Layout for TimeStamp {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_value(writer, "when", self.when.as_ref());
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "when" => self.when = Some(parse_value(name, text)?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        Some(child)
    }
}

/// Interval; either end may be open
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeSpan {
    pub(crate) object: ObjectData,
    pub(crate) begin: Option<DateTime>,
    pub(crate) end: Option<DateTime>,
}

impl TimeSpan {
    pub fn new() -> Self {
        Self::default()
    }

    child_field!(begin, begin_mut, set_begin, has_begin, clear_begin: DateTime);
    child_field!(end, end_mut, set_end, has_end, clear_end: DateTime);
}

impl_object!(TimeSpan => TimeSpan);

impl Layout for TimeSpan {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_value(writer, "begin", self.begin.as_ref());
        write_value(writer, "end", self.end.as_ref());
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "begin" => self.begin = Some(parse_value(name, text)?),
            "end" => self.end = Some(parse_value(name, text)?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        Some(child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_time_stamp_when() -> Result<()> {
        let mut stamp = TimeStamp::new();
        assert!(!stamp.has_when());
        assert!(stamp.parse_field("when", "2008-10-03T09:25:42Z")?);
        assert_eq!(stamp.when().map(DateTime::unix_timestamp), Some(1_223_025_942));
        Ok(())
    }

    #[test]
    fn test_time_span_open_end() -> Result<()> {
        let mut span = TimeSpan::new();
        span.set_begin("1876-08".parse::<DateTime>()?);
        assert!(span.has_begin());
        assert!(!span.has_end());
        Ok(())
    }

    #[test]
    fn test_bad_time_names_field() {
        let mut span = TimeSpan::new();
        let err = span.parse_field("end", "soon").map_err(|e| e.kind().clone());
        assert_eq!(
            err,
            Err(ErrorKind::InvalidValue {
                field: "end".to_string(),
                text: "soon".to_string(),
            })
        );
    }
}
