//! Link, Icon and Url: references to remote resources

use crate::base::{RefreshMode, ViewRefreshMode};
use crate::dom::layout::{parse_value, write_string, write_value, Layout};
use crate::dom::ObjectData;
use crate::error::Result;
use crate::xml::XmlWriter;

macro_rules! link {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            pub(crate) object: ObjectData,
            pub(crate) href: Option<String>,
            pub(crate) refresh_mode: Option<RefreshMode>,
            pub(crate) refresh_interval: Option<f64>,
            pub(crate) view_refresh_mode: Option<ViewRefreshMode>,
            pub(crate) view_refresh_time: Option<f64>,
            pub(crate) view_bound_scale: Option<f64>,
            pub(crate) view_format: Option<String>,
            pub(crate) http_query: Option<String>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            string_field!(href, set_href, has_href, clear_href);
            value_field!(
                refresh_mode, set_refresh_mode, has_refresh_mode,
                clear_refresh_mode: RefreshMode = RefreshMode::OnChange
            );
            value_field!(
                /// Seconds between refreshes in `onInterval` mode
                refresh_interval, set_refresh_interval, has_refresh_interval,
                clear_refresh_interval: f64 = 4.0
            );
            value_field!(
                view_refresh_mode, set_view_refresh_mode, has_view_refresh_mode,
                clear_view_refresh_mode: ViewRefreshMode = ViewRefreshMode::Never
            );
            value_field!(
                view_refresh_time, set_view_refresh_time, has_view_refresh_time,
                clear_view_refresh_time: f64 = 4.0
            );
            value_field!(
                view_bound_scale, set_view_bound_scale, has_view_bound_scale,
                clear_view_bound_scale: f64 = 1.0
            );
            string_field!(view_format, set_view_format, has_view_format, clear_view_format);
            string_field!(http_query, set_http_query, has_http_query, clear_http_query);
        }

        impl_object!($name => $name);

        impl Layout for $name {
            fn write_fields(&self, writer: &mut XmlWriter) {
                write_string(writer, "href", self.href.as_ref());
                write_value(writer, "refreshMode", self.refresh_mode.as_ref());
                write_value(writer, "refreshInterval", self.refresh_interval.as_ref());
                write_value(writer, "viewRefreshMode", self.view_refresh_mode.as_ref());
                write_value(writer, "viewRefreshTime", self.view_refresh_time.as_ref());
                write_value(writer, "viewBoundScale", self.view_bound_scale.as_ref());
                write_string(writer, "viewFormat", self.view_format.as_ref());
                write_string(writer, "httpQuery", self.http_query.as_ref());
            }

            fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
                match name {
                    "href" => self.href = Some(text.to_string()),
                    "refreshMode" => self.refresh_mode = Some(parse_value(name, text)?),
                    "refreshInterval" => self.refresh_interval = Some(parse_value(name, text)?),
                    "viewRefreshMode" => self.view_refresh_mode = Some(parse_value(name, text)?),
                    "viewRefreshTime" => self.view_refresh_time = Some(parse_value(name, text)?),
                    "viewBoundScale" => self.view_bound_scale = Some(parse_value(name, text)?),
                    "viewFormat" => self.view_format = Some(text.to_string()),
                    "httpQuery" => self.http_query = Some(text.to_string()),
                    _ => return Ok(false),
                }
                Ok(true)
            }

        }
    };
}

link!(
    /// Location of a NetworkLink target
    Link
);
link!(
    /// Image reference of an overlay or IconStyle
    Icon
);
link!(
    /// Older name for a NetworkLink's Link
    Url
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_fields() -> Result<()> {
        let mut link = Link::new();
        assert!(link.parse_field("href", "http://example.com/a.kml?x=1&y=2")?);
        assert!(link.parse_field("refreshMode", "onInterval")?);
        assert!(link.parse_field("viewRefreshMode", "onStop")?);
        assert_eq!(link.href(), "http://example.com/a.kml?x=1&y=2");
        assert_eq!(link.refresh_mode(), RefreshMode::OnInterval);
        assert!((link.refresh_interval() - 4.0).abs() < f64::EPSILON);
        assert!(!link.has_refresh_interval());
        Ok(())
    }

    #[test]
    fn test_icon_rejects_unknown_refresh_mode() {
        let mut icon = Icon::new();
        assert!(icon.parse_field("refreshMode", "onDemand").is_err());
        assert!(!icon.has_refresh_mode());
    }
}
