//! Style selectors and sub styles

use crate::base::{Color32, ColorMode, DisplayMode, ItemIconState, ListItemType, StyleState};
use crate::dom::layout::{
    parse_bool, parse_value, push_node, push_nodes, write_bool, write_child, write_children,
    write_element, write_string, write_value, Layout,
};
use crate::dom::{Element, HotSpot, Icon, Node, Object, ObjectData, StyleSelector, SubStyle};
use crate::error::Error;
use crate::error::Result;
use crate::xml::XmlWriter;

/// Color and color mode shared by IconStyle, LabelStyle, LineStyle and PolyStyle
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorStyleData {
    pub(crate) color: Option<Color32>,
    pub(crate) color_mode: Option<ColorMode>,
}

pub trait ColorStyleObject: Object {
    fn color_style_data(&self) -> &ColorStyleData;

    fn color_style_data_mut(&mut self) -> &mut ColorStyleData;

    value_field!(via color_style_data, color_style_data_mut;
        color, set_color, has_color, clear_color: Color32 = Color32::new(0xffff_ffff));
    value_field!(via color_style_data, color_style_data_mut;
        color_mode, set_color_mode, has_color_mode, clear_color_mode: ColorMode = ColorMode::Normal);
}

fn write_color_style_fields(data: &ColorStyleData, writer: &mut XmlWriter) {
    write_value(writer, "color", data.color.as_ref());
    write_value(writer, "colorMode", data.color_mode.as_ref());
}

fn parse_color_style_field(data: &mut ColorStyleData, name: &str, text: &str) -> Result<bool> {
    match name {
        "color" => data.color = Some(parse_value(name, text)?),
        "colorMode" => data.color_mode = Some(parse_value(name, text)?),
        _ => return Ok(false),
    }
    Ok(true)
}

macro_rules! impl_color_style {
    ($($ty:ident),+) => {$(
        impl ColorStyleObject for $ty {
            fn color_style_data(&self) -> &ColorStyleData {
                &self.color_style
            }

            fn color_style_data_mut(&mut self) -> &mut ColorStyleData {
                &mut self.color_style
            }
        }
    )+};
}

/// Shared style referenced from features by `styleUrl`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub(crate) object: ObjectData,
    pub(crate) icon_style: Option<IconStyle>,
    pub(crate) label_style: Option<LabelStyle>,
    pub(crate) line_style: Option<LineStyle>,
    pub(crate) poly_style: Option<PolyStyle>,
    pub(crate) balloon_style: Option<BalloonStyle>,
    pub(crate) list_style: Option<ListStyle>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    child_field!(icon_style, icon_style_mut, set_icon_style, has_icon_style, clear_icon_style: IconStyle);
    child_field!(
        label_style, label_style_mut, set_label_style, has_label_style,
        clear_label_style: LabelStyle
    );
    child_field!(line_style, line_style_mut, set_line_style, has_line_style, clear_line_style: LineStyle);
    child_field!(poly_style, poly_style_mut, set_poly_style, has_poly_style, clear_poly_style: PolyStyle);
    child_field!(
        balloon_style, balloon_style_mut, set_balloon_style, has_balloon_style,
        clear_balloon_style: BalloonStyle
    );
    child_field!(
        list_style, list_style_mut, set_list_style, has_list_style,
        clear_list_style: ListStyle
    );
}

impl_object!(Style => Style);

impl Layout for Style {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_child(writer, self.icon_style.as_ref());
        write_child(writer, self.label_style.as_ref());
        write_child(writer, self.line_style.as_ref());
        write_child(writer, self.poly_style.as_ref());
        write_child(writer, self.balloon_style.as_ref());
        write_child(writer, self.list_style.as_ref());
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        let mut nodes = Vec::new();
        push_node(&mut nodes, self.icon_style.as_ref());
        push_node(&mut nodes, self.label_style.as_ref());
        push_node(&mut nodes, self.line_style.as_ref());
        push_node(&mut nodes, self.poly_style.as_ref());
        push_node(&mut nodes, self.balloon_style.as_ref());
        push_node(&mut nodes, self.list_style.as_ref());
        nodes
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        let sub_style = match child {
            Element::SubStyle(sub_style) => sub_style,
            other => return Some(other),
        };
        match sub_style {
            SubStyle::IconStyle(style) => self.icon_style = Some(*style),
            SubStyle::LabelStyle(style) => self.label_style = Some(*style),
            SubStyle::LineStyle(style) => self.line_style = Some(*style),
            SubStyle::PolyStyle(style) => self.poly_style = Some(*style),
            SubStyle::BalloonStyle(style) => self.balloon_style = Some(*style),
            SubStyle::ListStyle(style) => self.list_style = Some(*style),
        }
        None
    }
}

/// Normal/highlight pair of styles
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleMap {
    pub(crate) object: ObjectData,
    pub(crate) pairs: Vec<Pair>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    child_array!(pairs: Pair;
        add_pair, pair_array_size, pair_array_at, pair_array_at_mut, remove_pair_at);
}

impl_object!(StyleMap => StyleMap);

impl Layout for StyleMap {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_children(writer, &self.pairs);
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        let mut nodes = Vec::new();
        push_nodes(&mut nodes, &self.pairs);
        nodes
    }

    fn parse_field(&mut self, _name: &str, _text: &str) -> Result<bool> {
        Ok(false)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match child {
            Element::Pair(pair) => {
                self.pairs.push(*pair);
                None
            }
            other => Some(other),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pair {
    pub(crate) object: ObjectData,
    pub(crate) key: Option<StyleState>,
    pub(crate) style_url: Option<String>,
    pub(crate) style_selector: Option<StyleSelector>,
}

impl Pair {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(key, set_key, has_key, clear_key: StyleState = StyleState::Normal);
    string_field!(style_url, set_style_url, has_style_url, clear_style_url);
    child_field!(
        /// Inline style, used instead of `styleUrl`
        style_selector, style_selector_mut, set_style_selector, has_style_selector,
        clear_style_selector: StyleSelector
    );
}

impl_object!(Pair => Pair);

impl Layout for Pair {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_value(writer, "key", self.key.as_ref());
        write_string(writer, "styleUrl", self.style_url.as_ref());
        if let Some(selector) = &self.style_selector {
            write_element(selector, writer);
        }
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        self.style_selector.iter().map(StyleSelector::as_node).collect()
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "key" => self.key = Some(parse_value(name, text)?),
            "styleUrl" => self.style_url = Some(text.to_string()),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match child {
            Element::StyleSelector(selector) => {
                self.style_selector = Some(selector);
                None
            }
            other => Some(other),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IconStyle {
    pub(crate) object: ObjectData,
    pub(crate) color_style: ColorStyleData,
    pub(crate) scale: Option<f64>,
    pub(crate) heading: Option<f64>,
    pub(crate) icon: Option<Icon>,
    pub(crate) hot_spot: Option<HotSpot>,
}

impl IconStyle {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(scale, set_scale, has_scale, clear_scale: f64 = 1.0);
    value_field!(
        /// Rotation in degrees
        heading, set_heading, has_heading, clear_heading: f64 = 0.0
    );
    child_field!(icon, icon_mut, set_icon, has_icon, clear_icon: Icon);
    child_field!(hot_spot, hot_spot_mut, set_hot_spot, has_hot_spot, clear_hot_spot: HotSpot);
}

impl_object!(IconStyle => IconStyle);
impl_color_style!(IconStyle);

impl Layout for IconStyle {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_color_style_fields(&self.color_style, writer);
        write_value(writer, "scale", self.scale.as_ref());
        write_value(writer, "heading", self.heading.as_ref());
        write_child(writer, self.icon.as_ref());
        write_child(writer, self.hot_spot.as_ref());
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        let mut nodes = Vec::new();
        push_node(&mut nodes, self.icon.as_ref());
        push_node(&mut nodes, self.hot_spot.as_ref());
        nodes
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "scale" => self.scale = Some(parse_value(name, text)?),
            "heading" => self.heading = Some(parse_value(name, text)?),
            _ => return parse_color_style_field(&mut self.color_style, name, text),
        }
        Ok(true)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match child {
            Element::Icon(icon) => self.icon = Some(*icon),
            Element::HotSpot(hot_spot) => self.hot_spot = Some(*hot_spot),
            other => return Some(other),
        }
        None
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelStyle {
    pub(crate) object: ObjectData,
    pub(crate) color_style: ColorStyleData,
    pub(crate) scale: Option<f64>,
}

impl LabelStyle {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(scale, set_scale, has_scale, clear_scale: f64 = 1.0);
}

impl_object!(LabelStyle => LabelStyle);
impl_color_style!(LabelStyle);

impl Layout for LabelStyle {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_color_style_fields(&self.color_style, writer);
        write_value(writer, "scale", self.scale.as_ref());
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "scale" => self.scale = Some(parse_value(name, text)?),
            _ => return parse_color_style_field(&mut self.color_style, name, text),
        }
        Ok(true)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        Some(child)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineStyle {
    pub(crate) object: ObjectData,
    pub(crate) color_style: ColorStyleData,
    pub(crate) width: Option<f64>,
}

impl LineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(
        /// Line width in pixels
        width, set_width, has_width, clear_width: f64 = 1.0
    );
}

impl_object!(LineStyle => LineStyle);
impl_color_style!(LineStyle);

impl Layout for LineStyle {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_color_style_fields(&self.color_style, writer);
        write_value(writer, "width", self.width.as_ref());
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "width" => self.width = Some(parse_value(name, text)?),
            _ => return parse_color_style_field(&mut self.color_style, name, text),
        }
        Ok(true)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        Some(child)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolyStyle {
    pub(crate) object: ObjectData,
    pub(crate) color_style: ColorStyleData,
    pub(crate) fill: Option<bool>,
    pub(crate) outline: Option<bool>,
}

impl PolyStyle {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(fill, set_fill, has_fill, clear_fill: bool = true);
    value_field!(outline, set_outline, has_outline, clear_outline: bool = true);
}

impl_object!(PolyStyle => PolyStyle);
impl_color_style!(PolyStyle);

impl Layout for PolyStyle {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_color_style_fields(&self.color_style, writer);
        write_bool(writer, "fill", self.fill);
        write_bool(writer, "outline", self.outline);
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "fill" => self.fill = Some(parse_bool(name, text)?),
            "outline" => self.outline = Some(parse_bool(name, text)?),
            _ => return parse_color_style_field(&mut self.color_style, name, text),
        }
        Ok(true)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        Some(child)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BalloonStyle {
    pub(crate) object: ObjectData,
    pub(crate) bg_color: Option<Color32>,
    pub(crate) text_color: Option<Color32>,
    pub(crate) text: Option<String>,
    pub(crate) display_mode: Option<DisplayMode>,
}

impl BalloonStyle {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(bg_color, set_bg_color, has_bg_color, clear_bg_color: Color32 = Color32::new(0xffff_ffff));
    value_field!(
        text_color, set_text_color, has_text_color,
        clear_text_color: Color32 = Color32::new(0xff00_0000)
    );
    string_field!(
        /// Balloon template; `$[name]` style entities are left as written
        text, set_text, has_text, clear_text
    );
    value_field!(
        display_mode, set_display_mode, has_display_mode,
        clear_display_mode: DisplayMode = DisplayMode::Default
    );
}

impl_object!(BalloonStyle => BalloonStyle);

impl Layout for BalloonStyle {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_value(writer, "bgColor", self.bg_color.as_ref());
        write_value(writer, "textColor", self.text_color.as_ref());
        write_string(writer, "text", self.text.as_ref());
        write_value(writer, "displayMode", self.display_mode.as_ref());
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "bgColor" => self.bg_color = Some(parse_value(name, text)?),
            "textColor" => self.text_color = Some(parse_value(name, text)?),
            "text" => self.text = Some(text.to_string()),
            "displayMode" => self.display_mode = Some(parse_value(name, text)?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        Some(child)
    }
}

/// How a container and its children appear in a list view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListStyle {
    pub(crate) object: ObjectData,
    pub(crate) list_item_type: Option<ListItemType>,
    pub(crate) bg_color: Option<Color32>,
    pub(crate) item_icons: Vec<ItemIcon>,
    pub(crate) max_snippet_lines: Option<u32>,
}

impl ListStyle {
    pub fn new() -> Self {
        Self::default()
    }

    value_field!(
        list_item_type, set_list_item_type, has_list_item_type,
        clear_list_item_type: ListItemType = ListItemType::Check
    );
    value_field!(bg_color, set_bg_color, has_bg_color, clear_bg_color: Color32 = Color32::new(0xffff_ffff));
    child_array!(item_icons: ItemIcon;
        add_item_icon, item_icon_array_size, item_icon_array_at, item_icon_array_at_mut,
        remove_item_icon_at);
    value_field!(
        max_snippet_lines, set_max_snippet_lines, has_max_snippet_lines,
        clear_max_snippet_lines: u32 = 2
    );
}

impl_object!(ListStyle => ListStyle);

impl Layout for ListStyle {
    fn write_fields(&self, writer: &mut XmlWriter) {
        write_value(writer, "listItemType", self.list_item_type.as_ref());
        write_value(writer, "bgColor", self.bg_color.as_ref());
        write_children(writer, &self.item_icons);
        write_value(writer, "maxSnippetLines", self.max_snippet_lines.as_ref());
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "listItemType" => self.list_item_type = Some(parse_value(name, text)?),
            "bgColor" => self.bg_color = Some(parse_value(name, text)?),
            "maxSnippetLines" => self.max_snippet_lines = Some(parse_value(name, text)?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn add_child(&mut self, child: Element) -> Option<Element> {
        match child {
            Element::ItemIcon(icon) => {
                self.item_icons.push(*icon);
                None
            }
            other => Some(other),
        }
    }

    fn child_nodes(&self) -> Vec<&dyn Node> {
        let mut nodes = Vec::new();
        push_nodes(&mut nodes, &self.item_icons);
        nodes
    }
}

/// List-view icon for a set of fetch/open states
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemIcon {
    pub(crate) object: ObjectData,
    pub(crate) state: Option<Vec<ItemIconState>>,
    pub(crate) href: Option<String>,
}

impl ItemIcon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Space separated in markup, e.g. `open error`
    pub fn state(&self) -> &[ItemIconState] {
        self.state.as_deref().unwrap_or_default()
    }

    pub fn set_state(&mut self, state: Vec<ItemIconState>) {
        self.state = Some(state);
    }

    pub fn has_state(&self) -> bool {
        self.state.is_some()
    }

    pub fn clear_state(&mut self) {
        self.state = None;
    }

    string_field!(href, set_href, has_href, clear_href);
}

impl_object!(ItemIcon => ItemIcon);

impl Layout for ItemIcon {
    fn write_fields(&self, writer: &mut XmlWriter) {
        if let Some(state) = &self.state {
            let words: Vec<&str> = state.iter().map(|s| s.as_str()).collect();
            writer.field("state", &words.join(" "));
        }
        write_string(writer, "href", self.href.as_ref());
    }

    fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
        match name {
            "state" => {
                let state = text
                    .split_ascii_whitespace()
                    .map(str::parse)
                    .collect::<Result<Vec<ItemIconState>>>()
                    .map_err(|_| Error::invalid_value(name, text))?;
                self.state = Some(state);
            }
            "href" => self.href = Some(text.to_string()),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_holds_one_of_each_sub_style() {
        let mut style = Style::new();
        let mut line = LineStyle::new();
        line.set_width(4.0);
        assert!(style.add_child(line.into()).is_none());
        assert!(style.add_child(LineStyle::new().into()).is_none());
        assert!(style.line_style().is_some_and(|l| !l.has_width()));
        assert!(style.add_child(Pair::new().into()).is_some());
    }

    #[test]
    fn test_color_style_defaults() -> Result<()> {
        let mut poly = PolyStyle::new();
        assert!(poly.fill());
        assert!(poly.outline());
        assert_eq!(poly.color(), Color32::new(0xffff_ffff));
        assert!(poly.parse_field("color", "7f00ff00")?);
        assert!(poly.parse_field("colorMode", "random")?);
        assert_eq!(poly.color().green(), 0xff);
        assert_eq!(poly.color_mode(), ColorMode::Random);
        assert!(!poly.parse_field("width", "2")?);
        Ok(())
    }

    #[test]
    fn test_style_map_pairs() -> Result<()> {
        let mut map = StyleMap::new();
        let mut normal = Pair::new();
        normal.set_key(StyleState::Normal);
        normal.set_style_url("#n");
        let mut highlight = Pair::new();
        highlight.set_key(StyleState::Highlight);
        highlight.set_style_selector(Style::new());
        map.add_pair(normal);
        map.add_pair(highlight);

        assert_eq!(map.pair_array_size(), 2);
        assert_eq!(map.pair_array_at(0)?.style_url(), "#n");
        assert!(map.pair_array_at(1)?.style_selector().is_some());
        assert!(map.pair_array_at(2).is_err());
        Ok(())
    }

    #[test]
    fn test_list_style_item_icons() -> Result<()> {
        let mut list = ListStyle::new();
        assert_eq!(list.list_item_type(), ListItemType::Check);
        assert!(list.parse_field("listItemType", "radioFolder")?);
        assert!(list.parse_field("maxSnippetLines", "0")?);

        let mut icon = ItemIcon::new();
        assert!(icon.parse_field("state", " open  error ")?);
        assert!(icon.parse_field("state", "open shut").is_err());
        assert_eq!(icon.state(), [ItemIconState::Open, ItemIconState::Error]);
        icon.set_href("folder.png");
        assert!(list.add_child(icon.into()).is_none());
        assert!(list.add_child(Icon::new().into()).is_some());

        let mut writer = XmlWriter::compact();
        write_element(&list, &mut writer);
        assert_eq!(
            writer.finish(),
            "<ListStyle><listItemType>radioFolder</listItemType><ItemIcon>\
             <state>open error</state><href>folder.png</href></ItemIcon>\
             <maxSnippetLines>0</maxSnippetLines></ListStyle>"
        );
        Ok(())
    }

    #[test]
    fn test_style_takes_list_style_last() {
        let mut style = Style::new();
        assert!(style.add_child(ListStyle::new().into()).is_none());
        assert!(style.add_child(IconStyle::new().into()).is_none());
        let kinds: Vec<_> = style.child_nodes().iter().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            [crate::dom::KmlDomType::IconStyle, crate::dom::KmlDomType::ListStyle]
        );
    }

    #[test]
    fn test_balloon_style_fields() -> Result<()> {
        let mut balloon = BalloonStyle::new();
        assert_eq!(balloon.text_color(), Color32::new(0xff00_0000));
        assert!(balloon.parse_field("displayMode", "hide")?);
        assert!(balloon.parse_field("displayMode", "hidden").is_err());
        assert_eq!(balloon.display_mode(), DisplayMode::Hide);
        Ok(())
    }
}
