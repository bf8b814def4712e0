//! Identity and passthrough data carried by every element

use crate::base::Attributes;
use crate::dom::KmlDomType;
use crate::xml;

/// Fields common to every element
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectData {
    pub(crate) id: Option<String>,
    pub(crate) target_id: Option<String>,
    pub(crate) attributes: Attributes,
    pub(crate) unknown_elements: Vec<xml::Element>,
}

/// Capability shared by every element kind
pub trait Object {
    /// Runtime type tag; fixed at construction
    fn kind(&self) -> KmlDomType;

    fn object_data(&self) -> &ObjectData;

    fn object_data_mut(&mut self) -> &mut ObjectData;

    string_field!(via object_data, object_data_mut; id, set_id, has_id, clear_id);
    string_field!(via object_data, object_data_mut;
        /// Id of the object an update targets
        target_id, set_target_id, has_target_id, clear_target_id);

    /// Unrecognized attributes, kept in source order
    fn attributes(&self) -> &Attributes {
        &self.object_data().attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.object_data_mut().attributes
    }

    /// Child elements the parser kept verbatim
    fn unknown_elements(&self) -> &[xml::Element] {
        &self.object_data().unknown_elements
    }

    fn add_unknown_element(&mut self, element: xml::Element) {
        self.object_data_mut().unknown_elements.push(element);
    }

    fn clear_unknown_elements(&mut self) -> Vec<xml::Element> {
        std::mem::take(&mut self.object_data_mut().unknown_elements)
    }
}
