use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A column descriptor for the table view.
///
/// The descriptor is opaque: whatever object was loaded is kept and
/// serialized back verbatim. [`title`](Header::title) and
/// [`key`](Header::key) read the label and the [`Item`](crate::Item) field
/// shown in the column, accepting both the `{title, key}` and the older
/// `{text, value}` spelling.
///
/// ```
/// use tablestore::Header;
/// use serde_json::json;
///
/// let header: Header = serde_json::from_value(json!({
///     "text": "Age",
///     "value": "age",
///     "align": "end",
/// })).unwrap();
///
/// assert_eq!(header.title(), Some("Age"));
/// assert_eq!(header.key(), Some("age"));
/// assert_eq!(header.get("align"), Some(&json!("end")));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Header(Map<String, Value>);

impl Header {
    /// A header with a `title` label for the item field `key`.
    pub fn new(title: impl Into<String>, key: impl Into<String>) -> Self {
        Self::default()
            .with_attribute("title", title.into())
            .with_attribute("key", key.into())
    }

    /// Builder-style attribute insertion.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Column label: `title`, else `text`.
    pub fn title(&self) -> Option<&str> {
        self.first_str(&["title", "text"])
    }

    /// Item field shown in the column: `key`, else `value`.
    pub fn key(&self) -> Option<&str> {
        self.first_str(&["key", "value"])
    }

    /// Any descriptor attribute by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// All attributes, in load order.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.0
    }

    fn first_str(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.0.get(*name)?.as_str())
    }
}

impl From<Map<String, Value>> for Header {
    fn from(attributes: Map<String, Value>) -> Self {
        Self(attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn any_object_shape_round_trips_unchanged() {
        let shapes = [
            json!({"text": "Name", "value": "name"}),
            json!({"key": "x"}),
            json!({"title": "Age", "key": "age", "sortable": false, "width": 80}),
            json!({}),
        ];
        for shape in shapes {
            let header: Header = serde_json::from_value(shape.clone()).unwrap();
            assert_eq!(serde_json::to_value(&header).unwrap(), shape);
        }
    }

    #[test]
    fn accessors_accept_both_spellings() {
        let legacy = Header::default()
            .with_attribute("text", "Name")
            .with_attribute("value", "name");
        assert_eq!(legacy.title(), Some("Name"));
        assert_eq!(legacy.key(), Some("name"));

        let current = Header::new("Age", "age");
        assert_eq!(current.title(), Some("Age"));
        assert_eq!(current.key(), Some("age"));
    }

    #[test]
    fn missing_label_is_none() {
        let header = Header::default().with_attribute("key", "x");
        assert_eq!(header.title(), None);
        assert_eq!(header.attributes().len(), 1);
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(serde_json::from_value::<Header>(json!("name")).is_err());
    }
}
