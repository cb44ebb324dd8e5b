//! Filter trees.
//!
//! A filter tree maps field names (or the logical keys `$and`/`$or`/`$not`)
//! to nested trees, operator objects such as `{ "$eq": 5 }`, or lists of
//! sub-trees. Key order is insertion order and is kept in the encoded output.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strapi_query_types::LogicalOperator;

/// Nested filter mapping stored under `filters` in a query document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filters(Map<String, Value>);

impl Filters {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Top-level entry for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Walks a dotted path (`"author.name.$eq"`) through nested mappings.
    ///
    /// Numeric segments index into lists, so `"$or.0.title"` reaches into the
    /// first `$or` branch.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        segments.try_fold(self.0.get(first)?, |value, segment| match value {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?),
            _ => None,
        })
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Shallow merge: every top-level key of `other` replaces the entry of
    /// the same name. Nested values are not merged.
    pub fn merge(&mut self, other: Filters) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    /// Deep-sets `value` at a dotted `path`.
    ///
    /// Missing intermediate mappings are created and non-mapping values found
    /// along the way are replaced by mappings. Branches off the path are left
    /// untouched. A numeric segment that lands on a list indexes into it, or
    /// appends when it equals the length. Any index further out turns the
    /// list into a mapping keyed by position, so no placeholder entries are
    /// ever created.
    pub fn set_path(&mut self, path: &str, value: Value) {
        let segments: Vec<&str> = path.split('.').collect();
        let [head, tail @ ..] = segments.as_slice() else {
            return;
        };
        let slot = self.0.entry(*head).or_insert(Value::Null);
        set_value(slot, tail, value);
    }

    /// Appends `trees` to the list under a logical operator key.
    ///
    /// Existing entries are kept in front. A non-list value already stored
    /// under the key becomes the first element of the list.
    pub fn push_logical<I>(&mut self, op: LogicalOperator, trees: I)
    where
        I: IntoIterator<Item = Value>,
    {
        let slot = self.0.entry(op.as_str()).or_insert(Value::Null);
        match slot {
            Value::Array(_) => {}
            Value::Null => *slot = Value::Array(Vec::new()),
            _ => {
                let previous = slot.take();
                *slot = Value::Array(vec![previous]);
            }
        }
        if let Value::Array(list) = slot {
            list.extend(trees);
        }
    }
}

fn set_value(slot: &mut Value, segments: &[&str], value: Value) {
    let [head, tail @ ..] = segments else {
        *slot = value;
        return;
    };

    if let Value::Array(items) = slot
        && let Some(index) = list_index(head)
        && index <= items.len()
    {
        if index == items.len() {
            items.push(Value::Null);
        }
        set_value(&mut items[index], tail, value);
        return;
    }

    match slot {
        Value::Object(_) => {}
        // an index past the end keys the list by position instead of padding it
        Value::Array(items) => {
            let keyed = std::mem::take(items)
                .into_iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item))
                .collect();
            *slot = Value::Object(keyed);
        }
        _ => *slot = Value::Object(Map::new()),
    }
    if let Value::Object(map) = slot {
        set_value(map.entry(*head).or_insert(Value::Null), tail, value);
    }
}

/// Canonical decimal list position: `"0"`, `"12"`, but not `"012"` or `"+1"`.
fn list_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical { segment.parse().ok() } else { None }
}

impl From<Map<String, Value>> for Filters {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Anything but an object converts to an empty tree.
impl From<Value> for Filters {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::new(),
        }
    }
}

impl From<Filters> for Value {
    fn from(filters: Filters) -> Self {
        Value::Object(filters.0)
    }
}

impl IntoIterator for Filters {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
