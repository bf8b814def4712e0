//! Property-based tests for KML serialization
//!
//! These tests use proptest to verify:
//! 1. Round trip: parse(serialize(tree)) == tree
//! 2. Idempotence: serialize(parse(serialize(tree))) == serialize(tree)
//! 3. Arbitrary input never panics the parser

use kmldom::dom::{Folder, LineString, Placemark, Point};
use kmldom::prelude::*;
use kmldom::{parse, parse_with_config, serialize};
use proptest::prelude::*;

/// Printable text including the characters that need escaping
fn arb_text() -> impl Strategy<Value = String> {
    "[ -~]{0,24}"
}

fn arb_coordinate() -> impl Strategy<Value = Coordinate> {
    (
        -180.0f64..180.0,
        -90.0f64..90.0,
        proptest::option::of(-500.0f64..9000.0),
    )
        .prop_map(|(longitude, latitude, altitude)| Coordinate {
            longitude,
            latitude,
            altitude,
        })
}

fn arb_geometry() -> impl Strategy<Value = Geometry> {
    prop_oneof![
        arb_coordinate().prop_map(|coordinate| {
            let mut point = Point::new();
            point.set_coordinates(Coordinates::from(vec![coordinate]));
            Geometry::from(point)
        }),
        (
            prop::collection::vec(arb_coordinate(), 0..6),
            any::<bool>(),
            prop::sample::select(AltitudeMode::ALL.to_vec()),
        )
            .prop_map(|(coordinates, tessellate, mode)| {
                let mut line = LineString::new();
                line.set_coordinates(Coordinates::from(coordinates));
                line.set_tessellate(tessellate);
                line.set_altitude_mode(mode);
                Geometry::from(line)
            }),
    ]
}

fn arb_placemark() -> impl Strategy<Value = Placemark> {
    (
        proptest::option::of(arb_text()),
        proptest::option::of(arb_text()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(arb_geometry()),
        proptest::option::of("[a-z][a-z0-9_]{0,8}"),
    )
        .prop_map(|(name, description, visibility, geometry, id)| {
            let mut placemark = Placemark::new();
            if let Some(name) = name {
                placemark.set_name(&name);
            }
            if let Some(description) = description {
                placemark.set_description(&description);
            }
            if let Some(visibility) = visibility {
                placemark.set_visibility(visibility);
            }
            if let Some(geometry) = geometry {
                placemark.set_geometry(geometry);
            }
            if let Some(id) = id {
                placemark.set_id(&id);
            }
            placemark
        })
}

fn arb_folder() -> impl Strategy<Value = Folder> {
    let leaf = arb_placemark().prop_map(Feature::from);
    let tree = leaf.prop_recursive(3, 24, 4, |inner| {
        (arb_text(), prop::collection::vec(inner, 0..4)).prop_map(|(name, children)| {
            let mut folder = Folder::new();
            folder.set_name(&name);
            for child in children {
                folder.add_feature(child);
            }
            Feature::from(folder)
        })
    });
    prop::collection::vec(tree, 0..4).prop_map(|children| {
        let mut folder = Folder::new();
        for child in children {
            folder.add_feature(child);
        }
        folder
    })
}

proptest! {
    #[test]
    fn test_round_trip(folder in arb_folder()) {
        let expected: Element = folder.clone().into();
        for mode in [Mode::Pretty, Mode::Compact] {
            let text = serialize(&folder, mode);
            let parsed = parse_with_config(&text, Config::strict());
            prop_assert!(parsed.is_ok(), "{text}");
            if let Ok(parsed) = parsed {
                prop_assert_eq!(&parsed, &expected);
                prop_assert_eq!(serialize(&parsed, mode), text);
            }
        }
    }

    #[test]
    fn test_color_text_round_trip(value in any::<u32>()) {
        let color = Color32::new(value);
        let text = color.to_string();
        prop_assert_eq!(text.len(), 8);
        prop_assert_eq!(text.parse::<Color32>().ok(), Some(color));
        prop_assert_eq!(text.to_uppercase().parse::<Color32>().ok(), Some(color));
    }

    #[test]
    fn test_parser_never_panics(input in "\\PC{0,64}") {
        let _ = parse(&input);
    }

    #[test]
    fn test_markup_like_input_never_panics(
        input in "(<[A-Za-z]{1,10}( [a-z]{1,3}=\"[^\"<]{0,5}\")?/?>|</[A-Za-z]{1,10}>|[a-z &;#0-9]{0,6}){0,12}"
    ) {
        if let Ok(tree) = parse(&input) {
            let first = serialize(&tree, Mode::Compact);
            let reparsed = parse(&first);
            prop_assert!(reparsed.is_ok(), "{first}");
            if let Ok(reparsed) = reparsed {
                prop_assert_eq!(serialize(&reparsed, Mode::Compact), first);
            }
        }
    }
}
