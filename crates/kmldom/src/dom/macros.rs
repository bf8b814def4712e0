//! Accessor generators.
//!
//! Every simple field is an `Option` so presence is tracked apart from the
//! value. Each macro has an inherent form operating on `self.field` and a
//! `via` form that reaches the field through a shared data record, used for
//! provided trait methods.

/// `&str` getter ("" when absent), setter, presence test and clear
macro_rules! string_field {
    ($(#[$meta:meta])* $field:ident, $set:ident, $has:ident, $clear:ident) => {
        $(#[$meta])*
        pub fn $field(&self) -> &str {
            self.$field.as_deref().unwrap_or_default()
        }

        pub fn $set(&mut self, value: &str) {
            self.$field = Some(value.to_string());
        }

        pub fn $has(&self) -> bool {
            self.$field.is_some()
        }

        pub fn $clear(&mut self) {
            self.$field = None;
        }
    };
    (via $data:ident, $data_mut:ident; $(#[$meta:meta])* $field:ident, $set:ident, $has:ident, $clear:ident) => {
        $(#[$meta])*
        fn $field(&self) -> &str {
            self.$data().$field.as_deref().unwrap_or_default()
        }

        fn $set(&mut self, value: &str) {
            self.$data_mut().$field = Some(value.to_string());
        }

        fn $has(&self) -> bool {
            self.$data().$field.is_some()
        }

        fn $clear(&mut self) {
            self.$data_mut().$field = None;
        }
    };
}

/// Copy-valued field with a schema default
macro_rules! value_field {
    ($(#[$meta:meta])* $field:ident, $set:ident, $has:ident, $clear:ident: $ty:ty = $default:expr) => {
        $(#[$meta])*
        pub fn $field(&self) -> $ty {
            self.$field.unwrap_or($default)
        }

        pub fn $set(&mut self, value: $ty) {
            self.$field = Some(value);
        }

        pub fn $has(&self) -> bool {
            self.$field.is_some()
        }

        pub fn $clear(&mut self) {
            self.$field = None;
        }
    };
    (via $data:ident, $data_mut:ident; $(#[$meta:meta])* $field:ident, $set:ident, $has:ident, $clear:ident: $ty:ty = $default:expr) => {
        $(#[$meta])*
        fn $field(&self) -> $ty {
            self.$data().$field.unwrap_or($default)
        }

        fn $set(&mut self, value: $ty) {
            self.$data_mut().$field = Some(value);
        }

        fn $has(&self) -> bool {
            self.$data().$field.is_some()
        }

        fn $clear(&mut self) {
            self.$data_mut().$field = None;
        }
    };
}

/// Owned child or non-Copy value; `clear` hands the old value back
macro_rules! child_field {
    ($(#[$meta:meta])* $field:ident, $field_mut:ident, $set:ident, $has:ident, $clear:ident: $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<&$ty> {
            self.$field.as_ref()
        }

        pub fn $field_mut(&mut self) -> Option<&mut $ty> {
            self.$field.as_mut()
        }

        pub fn $set(&mut self, value: impl Into<$ty>) {
            self.$field = Some(value.into());
        }

        pub fn $has(&self) -> bool {
            self.$field.is_some()
        }

        pub fn $clear(&mut self) -> Option<$ty> {
            self.$field.take()
        }
    };
    (via $data:ident, $data_mut:ident; $(#[$meta:meta])* $field:ident, $field_mut:ident, $set:ident, $has:ident, $clear:ident: $ty:ty) => {
        $(#[$meta])*
        fn $field(&self) -> Option<&$ty> {
            self.$data().$field.as_ref()
        }

        fn $field_mut(&mut self) -> Option<&mut $ty> {
            self.$data_mut().$field.as_mut()
        }

        fn $set(&mut self, value: $ty) {
            self.$data_mut().$field = Some(value);
        }

        fn $has(&self) -> bool {
            self.$data().$field.is_some()
        }

        fn $clear(&mut self) -> Option<$ty> {
            self.$data_mut().$field.take()
        }
    };
}

/// Ordered list of owned children with bounds-checked access
macro_rules! child_array {
    ($field:ident: $ty:ty; $add:ident, $size:ident, $at:ident, $at_mut:ident, $remove:ident) => {
        pub fn $add(&mut self, value: impl Into<$ty>) {
            self.$field.push(value.into());
        }

        pub fn $size(&self) -> usize {
            self.$field.len()
        }

        pub fn $at(&self, index: usize) -> $crate::error::Result<&$ty> {
            let size = self.$field.len();
            self.$field
                .get(index)
                .ok_or_else(|| $crate::error::Error::out_of_range(index, size))
        }

        pub fn $at_mut(&mut self, index: usize) -> $crate::error::Result<&mut $ty> {
            let size = self.$field.len();
            self.$field
                .get_mut(index)
                .ok_or_else(|| $crate::error::Error::out_of_range(index, size))
        }

        /// Detach the child at `index`, shifting later children down
        pub fn $remove(&mut self, index: usize) -> $crate::error::Result<$ty> {
            if index < self.$field.len() {
                Ok(self.$field.remove(index))
            } else {
                Err($crate::error::Error::out_of_range(index, self.$field.len()))
            }
        }
    };
    (via $data:ident, $data_mut:ident; $field:ident: $ty:ty; $add:ident, $size:ident, $at:ident, $at_mut:ident, $remove:ident) => {
        fn $add(&mut self, value: $ty) {
            self.$data_mut().$field.push(value);
        }

        fn $size(&self) -> usize {
            self.$data().$field.len()
        }

        fn $at(&self, index: usize) -> $crate::error::Result<&$ty> {
            let list = &self.$data().$field;
            list.get(index)
                .ok_or_else(|| $crate::error::Error::out_of_range(index, list.len()))
        }

        fn $at_mut(&mut self, index: usize) -> $crate::error::Result<&mut $ty> {
            let list = &mut self.$data_mut().$field;
            let size = list.len();
            list.get_mut(index)
                .ok_or_else(|| $crate::error::Error::out_of_range(index, size))
        }

        fn $remove(&mut self, index: usize) -> $crate::error::Result<$ty> {
            let list = &mut self.$data_mut().$field;
            if index < list.len() {
                Ok(list.remove(index))
            } else {
                Err($crate::error::Error::out_of_range(index, list.len()))
            }
        }
    };
}

/// `Object` and `Node` for structs holding an `object: ObjectData` field
macro_rules! impl_object {
    ($($ty:ident => $kind:ident),+ $(,)?) => {$(
        impl $crate::dom::Object for $ty {
            fn kind(&self) -> $crate::dom::KmlDomType {
                $crate::dom::KmlDomType::$kind
            }

            fn object_data(&self) -> &$crate::dom::ObjectData {
                &self.object
            }

            fn object_data_mut(&mut self) -> &mut $crate::dom::ObjectData {
                &mut self.object
            }
        }

        impl $crate::dom::Node for $ty {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            fn children(&self) -> Vec<&dyn $crate::dom::Node> {
                $crate::dom::layout::Layout::child_nodes(self)
            }
        }
    )+};
}

/// `FeatureObject` for structs holding a `feature: FeatureData` field
macro_rules! impl_feature {
    ($($ty:ident),+ $(,)?) => {$(
        impl $crate::dom::FeatureObject for $ty {
            fn feature_data(&self) -> &$crate::dom::FeatureData {
                &self.feature
            }

            fn feature_data_mut(&mut self) -> &mut $crate::dom::FeatureData {
                &mut self.feature
            }
        }
    )+};
}
