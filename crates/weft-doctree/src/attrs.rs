//! Ordered attribute sets.

/// One attribute: a name and its non-empty value-token sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Attr {
    name: String,
    values: Vec<String>,
}

/// Ordered mapping from attribute name to value tokens.
///
/// Names are stored with the case they were authored in, and compared
/// exactly. Insertion order is serialization order. Duplicate names are not
/// permitted: writing an existing name replaces its tokens in place, so the
/// attribute keeps its original position.
///
/// Every attribute holds at least one value token. Multi-token values are
/// joined with single spaces at render time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttrSet {
    entries: Vec<Attr>,
}

impl AttrSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no attributes are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value tokens for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.values.as_slice())
    }

    /// First value token for `name`, if present.
    #[must_use]
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|values| values.first()).map(String::as_str)
    }

    /// Value tokens for `name`, or `default` if the attribute is absent.
    ///
    /// Every pass resolves its inputs through this so default handling is
    /// uniform: a missing attribute falls back, an authored attribute wins.
    #[must_use]
    pub fn values_or(&self, name: &str, default: &[&str]) -> Vec<String> {
        match self.get(name) {
            Some(values) => values.to_vec(),
            None => default.iter().map(|&v| v.to_owned()).collect(),
        }
    }

    /// True if `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Write `name` = `values`.
    ///
    /// Replaces in place if the name exists (position preserved), appends
    /// otherwise. `values` must be non-empty.
    pub fn set(&mut self, name: impl Into<String>, values: Vec<String>) {
        debug_assert!(!values.is_empty(), "attribute values must be non-empty");
        let name = name.into();
        if let Some(attr) = self.entries.iter_mut().find(|attr| attr.name == name) {
            attr.values = values;
        } else {
            self.entries.push(Attr { name, values });
        }
    }

    /// Write a single-token attribute.
    pub fn set_one(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.set(name, vec![value.into()]);
    }

    /// Write `name` = `values` as the FIRST attribute.
    ///
    /// Any prior entry under the name is dropped, so this both overwrites
    /// and moves to the front. Used for attributes that must serialize
    /// before everything else (`xmlns` on an XHTML root).
    pub fn prepend(&mut self, name: impl Into<String>, values: Vec<String>) {
        debug_assert!(!values.is_empty(), "attribute values must be non-empty");
        let name = name.into();
        self.entries.retain(|attr| attr.name != name);
        self.entries.insert(0, Attr { name, values });
    }

    /// Delete `name` if present. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|attr| attr.name != name);
        self.entries.len() != before
    }

    /// Delete each named attribute; absent names are no-ops.
    pub fn remove_all(&mut self, names: &[&str]) {
        self.entries.retain(|attr| !names.contains(&attr.name.as_str()));
    }

    /// Iterate `(name, value tokens)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|attr| (attr.name.as_str(), attr.values.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(attrs: &AttrSet) -> Vec<&str> {
        attrs.iter().map(|(name, _)| name).collect()
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut attrs = AttrSet::new();
        attrs.set_one("b", "2");
        attrs.set_one("a", "1");
        attrs.set_one("c", "3");
        assert_eq!(names(&attrs), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut attrs = AttrSet::new();
        attrs.set_one("a", "1");
        attrs.set_one("b", "2");
        attrs.set_one("a", "9");
        assert_eq!(names(&attrs), vec!["a", "b"]);
        assert_eq!(attrs.first_value("a"), Some("9"));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn test_values_or_default() {
        let mut attrs = AttrSet::new();
        attrs.set("rel", vec!["shortcut".to_owned(), "icon".to_owned()]);
        assert_eq!(
            attrs.values_or("rel", &["x"]),
            vec!["shortcut".to_owned(), "icon".to_owned()]
        );
        assert_eq!(attrs.values_or("href", &["/favicon.ico"]), vec![
            "/favicon.ico".to_owned()
        ]);
    }

    #[test]
    fn test_prepend_moves_to_front() {
        let mut attrs = AttrSet::new();
        attrs.set_one("lang", "en");
        attrs.set_one("xmlns", "old");
        attrs.prepend("xmlns", vec!["http://www.w3.org/1999/xhtml".to_owned()]);
        assert_eq!(names(&attrs), vec!["xmlns", "lang"]);
        assert_eq!(attrs.first_value("xmlns"), Some("http://www.w3.org/1999/xhtml"));
    }

    #[test]
    fn test_remove_all_tolerates_absent() {
        let mut attrs = AttrSet::new();
        attrs.set_one("type", "html401-strict");
        attrs.set_one("class", "page");
        attrs.remove_all(&["type", "encoding", "language"]);
        assert_eq!(names(&attrs), vec!["class"]);
    }

    #[test]
    fn test_case_sensitive_lookup() {
        let mut attrs = AttrSet::new();
        attrs.set_one("Type", "x");
        assert!(attrs.contains("Type"));
        assert!(!attrs.contains("type"));
    }
}
