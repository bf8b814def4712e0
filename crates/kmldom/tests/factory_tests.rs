use kmldom::prelude::*;
use kmldom::{serialize_raw, ErrorKind};

#[test]
fn test_create_every_kind() {
    for kind in KmlDomType::ALL {
        let element = KmlFactory::create_element(*kind);
        assert_eq!(element.as_ref().map(Object::kind), Some(*kind));
        // a fresh element carries nothing but its tag
        let text = element.map(|e| serialize_raw(&e)).unwrap_or_default();
        assert_eq!(text, format!("<{}/>", kind.tag_name()));
    }
}

#[test]
fn test_unknown_tag_gives_nothing() {
    assert!(KmlFactory::create_element_by_tag("Rating").is_none());
    assert!(KmlFactory::create_element_by_tag("gx:Track").is_none());
    assert!(KmlFactory::create_element_by_tag("Placemark").is_some());
}

#[test]
fn test_defaults_when_fields_are_absent() {
    let placemark = KmlFactory::create_placemark();
    assert!(placemark.visibility());
    assert!(!placemark.has_visibility());
    assert!(!placemark.open());
    assert_eq!(placemark.name(), "");

    let style = KmlFactory::create_line_style();
    assert_eq!(style.color(), Color32::new(0xffff_ffff));
    assert_eq!(style.color_mode(), ColorMode::Normal);
    assert!((style.width() - 1.0).abs() < f64::EPSILON);

    let balloon = KmlFactory::create_balloon_style();
    assert_eq!(balloon.text_color().to_string(), "ff000000");
    assert_eq!(balloon.display_mode(), DisplayMode::Default);

    let lod = KmlFactory::create_lod();
    assert!((lod.max_lod_pixels() + 1.0).abs() < f64::EPSILON);

    let link = KmlFactory::create_link();
    assert_eq!(link.refresh_mode(), RefreshMode::OnChange);
    assert_eq!(link.view_refresh_mode(), ViewRefreshMode::Never);
}

#[test]
fn test_set_has_clear() {
    let mut point = KmlFactory::create_point();
    point.set_altitude_mode(AltitudeMode::Absolute);
    assert!(point.has_altitude_mode());
    assert_eq!(point.altitude_mode(), AltitudeMode::Absolute);
    point.clear_altitude_mode();
    assert!(!point.has_altitude_mode());
    assert_eq!(point.altitude_mode(), AltitudeMode::ClampToGround);
}

#[test]
fn test_child_lists_move_ownership() -> Result<(), Box<dyn std::error::Error>> {
    let mut document = KmlFactory::create_document();
    for name in ["a", "b", "c"] {
        let mut placemark = KmlFactory::create_placemark();
        placemark.set_name(name);
        document.add_feature(placemark.into());
    }
    assert_eq!(document.feature_array_size(), 3);

    let detached = document.remove_feature_at(1)?;
    assert_eq!(detached.name(), "b");
    assert_eq!(document.feature_array_size(), 2);
    assert_eq!(document.feature_array_at(1)?.name(), "c");

    let mut folder = KmlFactory::create_folder();
    folder.add_feature(detached);
    document.add_feature(folder.into());
    assert_eq!(document.feature_array_at(2)?.kind(), KmlDomType::Folder);
    Ok(())
}

#[test]
fn test_out_of_range_access() {
    let mut document = KmlFactory::create_document();
    document.add_feature(KmlFactory::create_placemark().into());

    let err = document.feature_array_at(1).map(|_| ()).map_err(|e| e.kind().clone());
    assert_eq!(err, Err(ErrorKind::IndexOutOfRange { index: 1, size: 1 }));
    assert!(document.remove_feature_at(5).is_err());
    assert_eq!(document.feature_array_size(), 1);

    let mut multi = KmlFactory::create_multi_geometry();
    assert!(multi.geometry_array_at(0).is_err());
    multi.add_geometry(KmlFactory::create_point());
    assert!(multi.geometry_array_at(0).is_ok());
}

#[test]
fn test_clear_child_returns_it() {
    let mut placemark = KmlFactory::create_placemark();
    placemark.set_geometry(KmlFactory::create_polygon());
    let geometry = placemark.clear_geometry();
    assert!(geometry.is_some_and(|g| g.kind() == KmlDomType::Polygon));
    assert!(!placemark.has_geometry());
    assert!(placemark.clear_geometry().is_none());
}

#[test]
fn test_newer_kind_defaults() {
    let snippet = KmlFactory::create_snippet();
    assert_eq!(snippet.max_lines(), 2);
    assert!(!snippet.has_text());

    let list = KmlFactory::create_list_style();
    assert_eq!(list.list_item_type(), ListItemType::Check);
    assert_eq!(list.max_snippet_lines(), 2);
    assert!(KmlFactory::create_item_icon().state().is_empty());

    let photo = KmlFactory::create_photo_overlay();
    assert_eq!(photo.shape(), Shape::Rectangle);
    let pyramid = KmlFactory::create_image_pyramid();
    assert_eq!(pyramid.tile_size(), 256);
    assert_eq!(pyramid.grid_origin(), GridOrigin::LowerLeft);

    let model = KmlFactory::create_model();
    assert_eq!(model.altitude_mode(), AltitudeMode::ClampToGround);
    assert!((KmlFactory::create_scale().x() - 1.0).abs() < f64::EPSILON);
    assert!(KmlFactory::create_orientation().heading().abs() < f64::EPSILON);

    let control = KmlFactory::create_network_link_control();
    assert!((control.max_session_length() + 1.0).abs() < f64::EPSILON);
    assert!(control.min_refresh_period().abs() < f64::EPSILON);
}

#[test]
fn test_newer_tags_resolve() {
    for (tag, kind) in [
        ("Snippet", KmlDomType::Snippet),
        ("linkSnippet", KmlDomType::LinkSnippet),
        ("Url", KmlDomType::Url),
        ("Scale", KmlDomType::Scale),
        ("PhotoOverlay", KmlDomType::PhotoOverlay),
        ("NetworkLinkControl", KmlDomType::NetworkLinkControl),
        ("SimpleData", KmlDomType::SimpleData),
    ] {
        let element = KmlFactory::create_element_by_tag(tag);
        assert_eq!(element.map(|e| e.kind()), Some(kind), "{tag}");
    }
    assert!(KmlFactory::create_element_by_tag("LinkSnippet").is_none());
}
