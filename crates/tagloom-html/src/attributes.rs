//! Element Attributes
//!
//! Raw attribute bags as supplied by callers, and the flat attribute map
//! they normalize into for markup emission.

use std::collections::HashMap;

use crate::BuildError;

/// Character stripped from both ends of raw attribute names.
///
/// Lets a caller spell `class_` or `_type` for names that read badly in code.
pub const NAME_DELIMITER: char = '_';

/// Raw attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Plain string value
    Text(String),
    /// Attribute family (`data-*`, `aria-*`): subkey → value, in order
    Family(Vec<(String, String)>),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Text(value.clone())
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for AttrValue {
    fn from(family: [(K, V); N]) -> Self {
        AttrValue::Family(family.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for AttrValue {
    fn from(family: Vec<(K, V)>) -> Self {
        AttrValue::Family(family.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Strip the delimiter from both ends of a raw attribute name.
pub fn normalize_name(raw: &str) -> &str {
    raw.trim_matches(NAME_DELIMITER)
}

/// Raw attribute bag, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Attributes::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a raw entry. An identical raw key is replaced in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Number of raw entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a raw entry by its normalized name
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| normalize_name(k) == name)
            .map(|(_, v)| v)
    }

    /// String value of the entry whose normalized name is `name`
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            AttrValue::Text(value) => Some(value),
            AttrValue::Family(_) => None,
        }
    }

    /// Overwrite the entry whose normalized name is `name`, or append one.
    pub fn set(&mut self, name: &str, value: impl Into<AttrValue>) {
        let value = value.into();
        match self.entries.iter_mut().rev().find(|(k, _)| normalize_name(k) == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Iterate raw entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Flatten into emission form. Colliding names: last write wins, at the
    /// position of the first occurrence.
    pub fn normalize(&self) -> AttributeMap {
        let mut map = AttributeMap::new();
        for (name, value) in self.flattened() {
            if let Some(old) = map.set_named_item(Attr::new(name, value)) {
                tracing::debug!("Attribute '{}' normalized more than once; keeping last value", old.name);
            }
        }
        map
    }

    /// Like [`Attributes::normalize`] but rejects colliding names.
    pub fn try_normalize(&self) -> Result<AttributeMap, BuildError> {
        let mut map = AttributeMap::new();
        for (name, value) in self.flattened() {
            if map.has_attribute(&name) {
                return Err(BuildError::AttributeCollision { name });
            }
            map.set_named_item(Attr::new(name, value));
        }
        Ok(map)
    }

    fn flattened(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.entries.iter().flat_map(|(raw, value)| {
            let key = normalize_name(raw);
            let pairs: Vec<(String, String)> = match value {
                AttrValue::Text(text) => vec![(key.to_string(), text.clone())],
                AttrValue::Family(family) => family
                    .iter()
                    .map(|(sub, v)| (format!("{key}-{sub}"), v.clone()))
                    .collect(),
            };
            pairs
        })
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// Build an [`Attributes`] bag.
///
/// ```
/// use tagloom_html::attrs;
///
/// let bag = attrs! { "class_" => "dropdown-toggle", "data" => [("toggle", "dropdown")] };
/// assert_eq!(bag.normalize().get_attribute("data-toggle"), Some("dropdown"));
/// ```
#[macro_export]
macro_rules! attrs {
    () => { $crate::Attributes::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut bag = $crate::Attributes::new();
        $( bag.insert($key, $value); )+
        bag
    }};
}

/// Normalized attribute map (emission order)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    attributes: Vec<Attr>,
    by_name: HashMap<String, usize>,
}

/// Single normalized attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of attributes
    pub fn length(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Get attribute by name
    pub fn get_named_item(&self, name: &str) -> Option<&Attr> {
        self.by_name.get(name).and_then(|&i| self.attributes.get(i))
    }

    /// Get attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.get_named_item(name).map(|a| a.value.as_str())
    }

    /// Set attribute, returning the one it replaced
    pub fn set_named_item(&mut self, attr: Attr) -> Option<Attr> {
        if let Some(&index) = self.by_name.get(&attr.name) {
            Some(std::mem::replace(&mut self.attributes[index], attr))
        } else {
            let index = self.attributes.len();
            self.by_name.insert(attr.name.clone(), index);
            self.attributes.push(attr);
            None
        }
    }

    /// Set attribute by name/value
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.set_named_item(Attr::new(name, value));
    }

    /// Check if attribute exists
    pub fn has_attribute(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Get attribute names
    pub fn get_attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }

    /// Iterate over attributes
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = &'a Attr;
    type IntoIter = std::slice::Iter<'a, Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}
