use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, StoreError};

/// One row of table data: a mapping from field name to value.
///
/// The `name` field identifies the row for [`TableStore::update_item`].
/// Uniqueness of names is assumed by callers, never enforced. Field order is kept as inserted.
///
/// Serializes as a plain JSON object.
///
/// ```
/// use tablestore::Item;
/// use serde_json::json;
///
/// let item = Item::named("x").with("age", 10);
/// assert_eq!(item.name(), Some(&json!("x")));
/// assert_eq!(item.get("age"), Some(&json!(10)));
/// ```
///
/// [`TableStore::update_item`]: crate::TableStore::update_item
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl Item {
    /// The field used as the row identifier.
    pub const NAME_FIELD: &'static str = "name";

    /// An item with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// An item with only its `name` set.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new().with(Self::NAME_FIELD, name.into())
    }

    /// Builder-style field insertion.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// The value of the `name` field, if present.
    pub fn name(&self) -> Option<&Value> {
        self.0.get(Self::NAME_FIELD)
    }

    /// The value of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Set a field, returning its previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    /// All fields, in insertion order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Unwrap into the underlying field map.
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the item has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Item {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl TryFrom<Value> for Item {
    type Error = StoreError;

    /// Fails unless the value is a JSON object.
    fn try_from(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Item {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_keeps_field_order() {
        let item = Item::named("x").with("age", 10).with("city", "Oslo");
        let keys: Vec<&str> = item.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "age", "city"]);
    }

    #[test]
    fn insert_overwrites_and_returns_previous() {
        let mut item = Item::named("x").with("age", 10);
        assert_eq!(item.insert("age", 11), Some(json!(10)));
        assert_eq!(item.get("age"), Some(&json!(11)));
        assert_eq!(item.len(), 2);
    }

    #[test]
    fn missing_name_is_none() {
        let item = Item::new().with("age", 1);
        assert_eq!(item.name(), None);
        assert!(Item::new().is_empty());
    }

    #[test]
    fn try_from_rejects_non_objects() {
        assert!(Item::try_from(json!([1, 2])).is_err());
        assert!(Item::try_from(json!("x")).is_err());

        let item = Item::try_from(json!({"name": "y", "age": 20})).unwrap();
        assert_eq!(item, Item::named("y").with("age", 20));
    }

    #[test]
    fn serializes_as_plain_object() {
        let item = Item::named("x").with("age", 10);
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({"name": "x", "age": 10}));
    }

    #[test]
    fn collects_from_pairs() {
        let item: Item = [("name", json!("z")), ("n", json!(1))].into_iter().collect();
        assert_eq!(item.name(), Some(&json!("z")));
    }
}
