//! Read-only traversal of a typed tree.
//!
//! Every concrete kind is a [`Node`]. A walk visits nodes depth first in
//! the order they are serialized, parent before children. Family enums
//! are never visited themselves; the walk goes straight to the kind they
//! hold. Passthrough elements are not part of the walk.

use std::any::Any;

use crate::dom::{ElementKind, KmlDomType, Object};

/// One element of a typed tree seen during a walk
pub trait Node: Object {
    fn as_any(&self) -> &dyn Any;

    /// Typed children in document order
    fn children(&self) -> Vec<&dyn Node>;
}

impl dyn Node + '_ {
    /// Concrete view of this node if its kind is `T`
    pub fn downcast_ref<T: ElementKind>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn is<T: ElementKind>(&self) -> bool {
        self.kind() == T::KIND
    }
}

/// Callbacks for [`walk`]
pub trait Visitor {
    /// Called before the children of `node`; `false` skips them
    fn enter(&mut self, node: &dyn Node) -> bool;

    /// Called after the children of `node`, or right after `enter` when
    /// they were skipped
    fn leave(&mut self, _node: &dyn Node) {}
}

/// Depth-first walk from `root`, root included
pub fn walk(root: &dyn Node, visitor: &mut dyn Visitor) {
    if visitor.enter(root) {
        for child in root.children() {
            walk(child, visitor);
        }
    }
    visitor.leave(root);
}

/// Every node of `kind` under `root`, root included, in document order
pub fn elements_of_kind(root: &dyn Node, kind: KmlDomType) -> Vec<&dyn Node> {
    let mut found = Vec::new();
    collect(root, &mut |node| node.kind() == kind, &mut found);
    found
}

/// Every `T` under `root`, root included, in document order
pub fn elements_of<T: ElementKind>(root: &dyn Node) -> Vec<&T> {
    let mut found = Vec::new();
    collect(root, &mut |node| node.is::<T>(), &mut found);
    found
        .into_iter()
        .filter_map(|node| node.downcast_ref::<T>())
        .collect()
}

fn collect<'a>(
    node: &'a dyn Node,
    matches: &mut dyn FnMut(&dyn Node) -> bool,
    found: &mut Vec<&'a dyn Node>,
) {
    if matches(node) {
        found.push(node);
    }
    for child in node.children() {
        collect(child, matches, found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Coordinates;
    use crate::dom::{
        ContainerObject, Document, FeatureObject, Folder, LineStyle, Placemark, Point, Style,
    };

    fn sample() -> Document {
        let mut style = Style::new();
        style.set_line_style(LineStyle::new());

        let mut first = Placemark::new();
        first.set_name("first");
        let mut point = Point::new();
        point.set_coordinates(Coordinates::new());
        first.set_geometry(point);

        let mut second = Placemark::new();
        second.set_name("second");

        let mut folder = Folder::new();
        folder.add_feature(second.into());

        let mut document = Document::new();
        document.add_style_selector(style.into());
        document.add_feature(first.into());
        document.add_feature(folder.into());
        document
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        skip: Option<KmlDomType>,
    }

    impl Visitor for Recorder {
        fn enter(&mut self, node: &dyn Node) -> bool {
            self.events.push(format!("+{}", node.kind()));
            self.skip != Some(node.kind())
        }

        fn leave(&mut self, node: &dyn Node) {
            self.events.push(format!("-{}", node.kind()));
        }
    }

    #[test]
    fn test_walk_order() {
        let document = sample();
        let mut recorder = Recorder::default();
        walk(&document, &mut recorder);
        assert_eq!(
            recorder.events.join(" "),
            "+Document +Style +LineStyle -LineStyle -Style +Placemark +Point -Point -Placemark \
             +Folder +Placemark -Placemark -Folder -Document"
        );
    }

    #[test]
    fn test_walk_can_skip_children() {
        let document = sample();
        let mut recorder = Recorder {
            skip: Some(KmlDomType::Folder),
            ..Recorder::default()
        };
        walk(&document, &mut recorder);
        assert!(recorder.events.iter().any(|e| e == "+Folder"));
        assert_eq!(recorder.events.iter().filter(|e| *e == "+Placemark").count(), 1);
    }

    #[test]
    fn test_find_by_kind() {
        let document = sample();
        let placemarks = elements_of_kind(&document, KmlDomType::Placemark);
        assert_eq!(placemarks.len(), 2);
        assert!(elements_of_kind(&document, KmlDomType::Camera).is_empty());
        assert_eq!(elements_of_kind(&document, KmlDomType::Document).len(), 1);

        let names: Vec<&str> = elements_of::<Placemark>(&document)
            .into_iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn test_node_downcast() {
        let document = sample();
        let node: &dyn Node = &document;
        assert!(node.is::<Document>());
        assert!(node.downcast_ref::<Folder>().is_none());
        assert_eq!(node.downcast_ref::<Document>().map(|d| d.feature_array_size()), Some(2));
    }
}
