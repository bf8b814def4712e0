//! Containers: Document and Folder

use crate::dom::feature::{
    add_feature_child, feature_nodes, parse_feature_field, write_feature_fields,
};
use crate::dom::layout::{push_nodes, write_children, Layout};
use crate::dom::{Element, Feature, FeatureData, FeatureObject, Node, ObjectData, Schema};
use crate::error::{Error, Result};
use crate::xml::XmlWriter;

/// Feature owning an ordered list of child features
pub trait ContainerObject: FeatureObject {
    fn features(&self) -> &[Feature];

    fn features_mut(&mut self) -> &mut Vec<Feature>;

    /// Append a child; ownership moves into the container.
    ///
    /// A container can never become its own descendant: while a child is
    /// attached it is owned by the tree, so it cannot be moved again.
    ///
    /// ```compile_fail
    /// use kmldom::prelude::*;
    ///
    /// let mut folder = KmlFactory::create_folder();
    /// let child = folder.feature_array_at_mut(0).unwrap();
    /// child.as_folder_mut().unwrap().add_feature(folder.into());
    /// ```
    fn add_feature(&mut self, feature: Feature) {
        self.features_mut().push(feature);
    }

    fn feature_array_size(&self) -> usize {
        self.features().len()
    }

    fn feature_array_at(&self, index: usize) -> Result<&Feature> {
        let features = self.features();
        features
            .get(index)
            .ok_or_else(|| Error::out_of_range(index, features.len()))
    }

    fn feature_array_at_mut(&mut self, index: usize) -> Result<&mut Feature> {
        let features = self.features_mut();
        let size = features.len();
        features
            .get_mut(index)
            .ok_or_else(|| Error::out_of_range(index, size))
    }

    /// Detach the child at `index`, handing ownership back
    fn remove_feature_at(&mut self, index: usize) -> Result<Feature> {
        let features = self.features_mut();
        if index < features.len() {
            Ok(features.remove(index))
        } else {
            Err(Error::out_of_range(index, features.len()))
        }
    }
}

macro_rules! container {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $field:ident: $ty:ident; $add:ident, $size:ident, $at:ident, $at_mut:ident, $remove:ident )?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            pub(crate) object: ObjectData,
            pub(crate) feature: FeatureData,
            $( pub(crate) $field: Vec<$ty>, )?
            pub(crate) features: Vec<Feature>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            $( child_array!($field: $ty; $add, $size, $at, $at_mut, $remove); )?
        }

        impl_object!($name => $name);
        impl_feature!($name);

        impl ContainerObject for $name {
            fn features(&self) -> &[Feature] {
                &self.features
            }

            fn features_mut(&mut self) -> &mut Vec<Feature> {
                &mut self.features
            }
        }

        impl Layout for $name {
            fn write_fields(&self, writer: &mut XmlWriter) {
                write_feature_fields(&self.feature, writer);
                $( write_children(writer, &self.$field); )?
                write_children(writer, &self.features);
            }

            fn parse_field(&mut self, name: &str, text: &str) -> Result<bool> {
                parse_feature_field(&mut self.feature, name, text)
            }

            fn add_child(&mut self, child: Element) -> Option<Element> {
                match add_feature_child(&mut self.feature, child)? {
                    Element::Feature(feature) => self.features.push(feature),
                    $( Element::$ty(child) => self.$field.push(*child), )?
                    other => return Some(other),
                }
                None
            }

            fn child_nodes(&self) -> Vec<&dyn Node> {
                let mut nodes = feature_nodes(&self.feature);
                $( push_nodes(&mut nodes, &self.$field); )?
                nodes.extend(self.features.iter().map(Feature::as_node));
                nodes
            }
        }
    };
}

container!(
    /// Top-level container, usually the single child of `<kml>`
    Document {
        schemas: Schema; add_schema, schema_array_size, schema_array_at, schema_array_at_mut,
            remove_schema_at
    }
);
container!(Folder {});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Object, Placemark};
    use crate::error::ErrorKind;

    #[test]
    fn test_children_keep_order() -> Result<()> {
        let mut folder = Folder::new();
        for id in ["a", "b", "c"] {
            let mut placemark = Placemark::new();
            placemark.set_id(id);
            folder.add_feature(placemark.into());
        }
        assert_eq!(folder.feature_array_size(), 3);
        assert_eq!(folder.feature_array_at(2)?.id(), "c");

        let removed = folder.remove_feature_at(0)?;
        assert_eq!(removed.id(), "a");
        assert_eq!(folder.feature_array_at(0)?.id(), "b");
        Ok(())
    }

    #[test]
    fn test_out_of_range() {
        let mut document = Document::new();
        assert_eq!(
            document.feature_array_at(0).map(|_| ()).map_err(|e| e.kind().clone()),
            Err(ErrorKind::IndexOutOfRange { index: 0, size: 0 })
        );
        assert!(document.feature_array_at_mut(5).is_err());
        assert!(document.remove_feature_at(0).is_err());
    }

    #[test]
    fn test_nested_containers_move_ownership() -> Result<()> {
        let mut inner = Folder::new();
        inner.set_name("inner");
        inner.add_feature(Placemark::new().into());

        let mut outer = Document::new();
        outer.add_feature(inner.into());

        let detached = outer.remove_feature_at(0)?;
        assert_eq!(outer.feature_array_size(), 0);
        let folder = detached.as_folder().map(|f| f.feature_array_size());
        assert_eq!(folder, Some(1));
        Ok(())
    }

    #[test]
    fn test_add_child_accepts_features_only() {
        let mut folder = Folder::new();
        assert!(folder.add_child(Placemark::new().into()).is_none());
        let rejected = folder.add_child(crate::dom::Point::new().into());
        assert!(rejected.is_some_and(|el| el.as_point().is_some()));
        assert_eq!(folder.feature_array_size(), 1);
    }

    #[test]
    fn test_only_documents_hold_schemas() -> Result<()> {
        let mut document = Document::new();
        let mut schema = Schema::new();
        schema.set_name("TrailHead");
        assert!(document.add_child(schema.into()).is_none());
        assert!(document.add_child(Placemark::new().into()).is_none());
        assert_eq!(document.schema_array_at(0)?.name(), "TrailHead");

        let kinds: Vec<_> = document.child_nodes().iter().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            [crate::dom::KmlDomType::Schema, crate::dom::KmlDomType::Placemark]
        );

        let mut folder = Folder::new();
        assert!(folder.add_child(Schema::new().into()).is_some());
        Ok(())
    }
}
