use kmldom::dom::{
    BalloonStyle, Data, ExtendedData, GroundOverlay, Icon, LatLonBox, LookAt, Pair, Placemark,
    ScreenOverlay, ScreenXY, Style, StyleMap, TimeStamp,
};
use kmldom::prelude::*;
use kmldom::{parse, serialize, serialize_pretty, serialize_raw};

#[test]
fn test_feature_field_order() -> Result<(), Box<dyn std::error::Error>> {
    let mut placemark = Placemark::new();
    let mut data = ExtendedData::new();
    let mut item = Data::new();
    item.set_name("k");
    item.set_value("v");
    data.add_data(item);
    placemark.set_extended_data(data);
    placemark.set_style_url("#s");
    let mut stamp = TimeStamp::new();
    stamp.set_when("2024-05-01".parse::<DateTime>()?);
    placemark.set_time_primitive(stamp.into());
    let mut look_at = LookAt::new();
    look_at.set_range(250.5);
    placemark.set_abstract_view(look_at.into());
    placemark.set_description("d");
    placemark.set_visibility(false);
    placemark.set_name("n");
    placemark.set_id("p");

    assert_eq!(
        serialize_raw(&placemark),
        "<Placemark id=\"p\"><name>n</name><visibility>0</visibility>\
         <description>d</description><LookAt><range>250.5</range></LookAt>\
         <TimeStamp><when>2024-05-01</when></TimeStamp><styleUrl>#s</styleUrl>\
         <ExtendedData><Data name=\"k\"><value>v</value></Data></ExtendedData></Placemark>"
    );
    Ok(())
}

#[test]
fn test_overlay_field_order() {
    let mut overlay = GroundOverlay::new();
    let mut bounds = LatLonBox::new();
    bounds.set_north(1.0);
    bounds.set_rotation(45.0);
    overlay.set_lat_lon_box(bounds);
    overlay.set_altitude(12.0);
    let mut icon = Icon::new();
    icon.set_href("a.png");
    overlay.set_icon(icon);
    overlay.set_draw_order(2);
    overlay.set_color(Color32::new(0x7fff_ffff));
    overlay.set_name("o");

    assert_eq!(
        serialize_raw(&overlay),
        "<GroundOverlay><name>o</name><color>7fffffff</color><drawOrder>2</drawOrder>\
         <Icon><href>a.png</href></Icon><altitude>12</altitude>\
         <LatLonBox><north>1</north><rotation>45</rotation></LatLonBox></GroundOverlay>"
    );
}

#[test]
fn test_vec2_attributes() {
    let mut overlay = ScreenOverlay::new();
    let mut screen = ScreenXY::new();
    screen.set_x(0.0);
    screen.set_y(1.0);
    screen.set_xunits(Units::Fraction);
    screen.set_yunits(Units::Fraction);
    overlay.set_screen_xy(screen);
    overlay.set_rotation(-10.0);
    assert_eq!(
        serialize_raw(&overlay),
        "<ScreenOverlay><screenXY x=\"0\" y=\"1\" xunits=\"fraction\" yunits=\"fraction\"/>\
         <rotation>-10</rotation></ScreenOverlay>"
    );
}

#[test]
fn test_style_map_and_balloon() {
    let mut balloon = BalloonStyle::new();
    balloon.set_text("<b>$[name]</b>");
    balloon.set_bg_color(Color32::new(0xffff_ffbb));
    let mut style = Style::new();
    style.set_balloon_style(balloon);

    let mut pair = Pair::new();
    pair.set_key(StyleState::Highlight);
    pair.set_style_selector(style);
    let mut map = StyleMap::new();
    map.set_id("m");
    map.add_pair(pair);

    assert_eq!(
        serialize_pretty(&map),
        "<StyleMap id=\"m\">\n  <Pair>\n    <key>highlight</key>\n    <Style>\n      \
         <BalloonStyle>\n        <bgColor>ffffffbb</bgColor>\n        \
         <text>&lt;b&gt;$[name]&lt;/b&gt;</text>\n      </BalloonStyle>\n    </Style>\n  \
         </Pair>\n</StyleMap>\n"
    );
}

#[test]
fn test_passthrough_follows_known_content() -> Result<(), Box<dyn std::error::Error>> {
    let root = parse("<Folder><Rating>s</Rating><name>n</name></Folder>")?;
    assert_eq!(
        serialize_raw(&root),
        "<Folder><name>n</name><Rating>s</Rating></Folder>"
    );
    assert_eq!(
        serialize_pretty(&root),
        "<Folder>\n  <name>n</name>\n  <Rating>s</Rating>\n</Folder>\n"
    );
    Ok(())
}

#[test]
fn test_passthrough_attributes_after_known() {
    let mut placemark = Placemark::new();
    placemark.attributes_mut().set("xmlns:gx", "http://www.google.com/kml/ext/2.2");
    placemark.attributes_mut().set("id", "shadowed");
    placemark.set_id("p");
    assert_eq!(
        serialize_raw(&placemark),
        "<Placemark id=\"p\" xmlns:gx=\"http://www.google.com/kml/ext/2.2\"/>"
    );
}

#[test]
fn test_empty_string_field() {
    let mut placemark = Placemark::new();
    placemark.set_name("");
    assert_eq!(serialize_raw(&placemark), "<Placemark><name/></Placemark>");
}

#[test]
fn test_mode_selects_layout() {
    let mut placemark = Placemark::new();
    placemark.set_name("n");
    assert_eq!(serialize(&placemark, Mode::Compact), "<Placemark><name>n</name></Placemark>");
    assert_eq!(
        serialize(&placemark, Mode::Pretty),
        "<Placemark>\n  <name>n</name>\n</Placemark>\n"
    );
    assert_eq!(Mode::default(), Mode::Pretty);
}

#[test]
fn test_family_and_element_handles_serialize_alike() {
    let mut placemark = Placemark::new();
    placemark.set_name("same");
    let direct = serialize_raw(&placemark);
    let feature: Feature = placemark.clone().into();
    let element: Element = placemark.into();
    assert_eq!(serialize_raw(&feature), direct);
    assert_eq!(serialize_raw(&element), direct);
}
