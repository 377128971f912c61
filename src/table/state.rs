use std::collections::HashMap;

use serde_json::{Number, Value};

use super::{Header, Item};

/// Hashable form of a scalar `name` value.
///
/// Arrays and objects are not indexed; lookups for them fall back to a scan.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum NameKey {
    Missing,
    Null,
    Bool(bool),
    // Integers and floats never compare equal as `Value`s, so they get
    // separate variants: `1` and `1.0` are distinct names.
    UInt(u64),
    Int(i64),
    // Bit pattern with `-0.0` folded into `0.0`, since the two are equal.
    Float(u64),
    String(String),
}

impl NameKey {
    fn of(name: Option<&Value>) -> Option<Self> {
        match name {
            None => Some(Self::Missing),
            Some(Value::Null) => Some(Self::Null),
            Some(Value::Bool(b)) => Some(Self::Bool(*b)),
            Some(Value::Number(n)) => Some(Self::number(n)),
            Some(Value::String(s)) => Some(Self::String(s.clone())),
            Some(Value::Array(_) | Value::Object(_)) => None,
        }
    }

    fn number(n: &Number) -> Self {
        if let Some(u) = n.as_u64() {
            Self::UInt(u)
        } else if let Some(i) = n.as_i64() {
            Self::Int(i)
        } else {
            let f = n.as_f64().unwrap_or_default();
            Self::Float(if f == 0.0 { 0.0f64 } else { f }.to_bits())
        }
    }
}

/// The headers and items held by a [`TableStore`](crate::TableStore).
///
/// Alongside the items it keeps an index from each scalar name to the
/// position of its first occurrence, rebuilt whenever the item list is
/// replaced.
#[derive(Clone, Debug, Default)]
pub struct TableState {
    headers: Vec<Header>,
    items: Vec<Item>,
    first_by_name: HashMap<NameKey, usize>,
}

impl TableState {
    pub fn new(headers: Vec<Header>, items: Vec<Item>) -> Self {
        let mut state = Self {
            headers,
            ..Self::default()
        };
        state.replace_items(items);
        state
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub(crate) fn replace_headers(&mut self, headers: Vec<Header>) {
        self.headers = headers;
    }

    pub(crate) fn replace_items(&mut self, items: Vec<Item>) {
        self.first_by_name.clear();
        for (position, item) in items.iter().enumerate() {
            if let Some(key) = NameKey::of(item.name()) {
                self.first_by_name.entry(key).or_insert(position);
            }
        }
        self.items = items;
    }

    /// Position of the first item whose name equals `name`.
    pub(crate) fn position_of(&self, name: Option<&Value>) -> Option<usize> {
        match NameKey::of(name) {
            Some(key) => self.first_by_name.get(&key).copied(),
            None => self.items.iter().position(|item| item.name() == name),
        }
    }

    /// Replace the first item sharing `updated`'s name. Returns the position
    /// written, or `None` when no item matched and nothing changed.
    pub(crate) fn update_item(&mut self, updated: Item) -> Option<usize> {
        let position = self.position_of(updated.name())?;
        // Same name at the same position, so the index stays valid.
        self.items[position] = updated;
        Some(position)
    }
}

impl PartialEq for TableState {
    fn eq(&self, other: &Self) -> bool {
        self.headers == other.headers && self.items == other.items
    }
}
