//! Ordered attribute map preserved across parse and serialize

use indexmap::map::Iter;
use indexmap::IndexMap;

/// Order-preserving map of attribute names to values
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    /// Creates an empty attribute set
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Returns the number of attributes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no attributes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns true if `name` is present
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Sets `name`, keeping its original position if it already exists
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Removes `name`, preserving the order of the remaining attributes
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.shift_remove(name)
    }

    /// Copies every attribute of `other` into `self`; `other` wins on conflicts
    pub fn merge(&mut self, other: &Self) {
        for (name, value) in other.iter() {
            self.set(name.clone(), value.clone());
        }
    }

    /// Attributes in insertion order
    pub fn iter(&self) -> Iter<'_, String, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let mut attrs = Attributes::new();
        attrs.set("z", "1");
        attrs.set("a", "2");
        attrs.set("m", "3");
        attrs.set("z", "4");
        let names: Vec<&str> = attrs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, ["z", "a", "m"]);
        assert_eq!(attrs.get("z"), Some("4"));
    }

    #[test]
    fn test_remove_and_merge() {
        let mut attrs: Attributes = [("xmlns", "http://www.opengis.net/kml/2.2"), ("a", "1")]
            .into_iter()
            .collect();
        assert_eq!(attrs.remove("a"), Some("1".to_string()));
        assert!(!attrs.contains("a"));

        let other: Attributes = [("a", "9"), ("xmlns", "urn:x")].into_iter().collect();
        attrs.merge(&other);
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("xmlns"), Some("urn:x"));
        assert_eq!(attrs.get("a"), Some("9"));
    }
}
