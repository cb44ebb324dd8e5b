//! The query document assembled by [`QueryBuilder`](crate::QueryBuilder).
//!
//! Every section is optional and absent sections are left out of both the
//! JSON and the query-string form. Sections are always emitted in the order
//! `sort`, `filters`, `populate`, `fields`, `pagination`, `status`, `locale`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use strapi_query_types::Status;

use crate::error::{QueryError, Result};
use crate::filters::Filters;

/// Top-level and pagination key names as they appear on the wire.
pub mod keys {
    pub const SORT: &str = "sort";
    pub const FILTERS: &str = "filters";
    pub const POPULATE: &str = "populate";
    pub const FIELDS: &str = "fields";
    pub const PAGINATION: &str = "pagination";
    pub const STATUS: &str = "status";
    pub const LOCALE: &str = "locale";

    pub const PAGE: &str = "page";
    pub const PAGE_SIZE: &str = "pageSize";
    pub const WITH_COUNT: &str = "withCount";
    pub const START: &str = "start";
    pub const LIMIT: &str = "limit";
}

/// Structured query parameters for one resource.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDocument {
    pub sort: Option<Vec<String>>,
    pub filters: Option<Filters>,
    pub populate: Option<Populate>,
    pub fields: Option<Vec<String>>,
    pub pagination: Option<Pagination>,
    pub status: Option<Status>,
    pub locale: Option<String>,
}

impl QueryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when no section has been set.
    pub fn is_empty(&self) -> bool {
        self.sort.is_none()
            && self.filters.is_none()
            && self.populate.is_none()
            && self.fields.is_none()
            && self.pagination.is_none()
            && self.status.is_none()
            && self.locale.is_none()
    }

    /// Renders the document as a JSON object tree.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        if let Some(sort) = &self.sort {
            map.insert(keys::SORT.into(), string_list(sort));
        }
        if let Some(filters) = &self.filters {
            map.insert(keys::FILTERS.into(), Value::Object(filters.as_map().clone()));
        }
        if let Some(populate) = &self.populate {
            map.insert(keys::POPULATE.into(), populate.to_value());
        }
        if let Some(fields) = &self.fields {
            map.insert(keys::FIELDS.into(), string_list(fields));
        }
        if let Some(pagination) = &self.pagination {
            map.insert(keys::PAGINATION.into(), pagination.to_value());
        }
        if let Some(status) = self.status {
            map.insert(keys::STATUS.into(), Value::from(status.as_str()));
        }
        if let Some(locale) = &self.locale {
            map.insert(keys::LOCALE.into(), Value::from(locale.as_str()));
        }
        Value::Object(map)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_value())?)
    }

    /// Reads a document from JSON text.
    ///
    /// ```
    /// use strapi_query_core::QueryDocument;
    ///
    /// let doc = QueryDocument::from_json(r#"{ "fields": ["id"] }"#).unwrap();
    /// assert_eq!(doc.fields, Some(vec!["id".to_string()]));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::try_from(value)
    }

    /// Inserts `entry` under `relation`, switching `populate` to mapping form.
    pub(crate) fn insert_populate(&mut self, relation: String, entry: PopulateEntry) {
        self.populate
            .get_or_insert_with(|| Populate::Nested(IndexMap::new()))
            .insert(relation, entry);
    }
}

impl Serialize for QueryDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl TryFrom<Value> for QueryDocument {
    type Error = QueryError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(QueryError::InvalidDocument(format!(
                "expected a JSON object, found {}",
                kind(&other)
            ))),
        }
    }
}

impl core::fmt::Display for QueryDocument {
    /// Formats the document as a bracket-notation query string.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&crate::qs::stringify(&self.to_value()))
    }
}

/// Pagination parameters. Page-based and offset-based keys may be mixed;
/// the server decides which pair wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub with_count: Option<bool>,
    pub start: Option<u32>,
    /// `-1` asks for every entry.
    pub limit: Option<i32>,
}

impl Pagination {
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        if let Some(page) = self.page {
            map.insert(keys::PAGE.into(), Value::from(page));
        }
        if let Some(page_size) = self.page_size {
            map.insert(keys::PAGE_SIZE.into(), Value::from(page_size));
        }
        if let Some(with_count) = self.with_count {
            map.insert(keys::WITH_COUNT.into(), Value::from(with_count));
        }
        if let Some(start) = self.start {
            map.insert(keys::START.into(), Value::from(start));
        }
        if let Some(limit) = self.limit {
            map.insert(keys::LIMIT.into(), Value::from(limit));
        }
        Value::Object(map)
    }
}

/// Relations to load alongside the primary resource.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Populate {
    /// Plain relation paths, `["author", "readers.books"]`.
    Relations(Vec<String>),
    /// Per-relation sub-queries keyed by relation name.
    Nested(IndexMap<String, PopulateEntry>),
}

impl Populate {
    /// Inserts `entry` under `relation`, converting a relation list into
    /// mapping form first. An existing entry with the same name is replaced
    /// in place.
    pub fn insert(&mut self, relation: String, entry: PopulateEntry) {
        match self {
            Populate::Nested(nested) => {
                nested.insert(relation, entry);
            }
            Populate::Relations(paths) => {
                let mut nested = nest_relations(std::mem::take(paths));
                nested.insert(relation, entry);
                *self = Populate::Nested(nested);
            }
        }
    }

    pub fn get(&self, relation: &str) -> Option<&PopulateEntry> {
        match self {
            Populate::Nested(nested) => nested.get(relation),
            Populate::Relations(_) => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Populate::Relations(paths) => string_list(paths),
            Populate::Nested(nested) => Value::Object(
                nested
                    .iter()
                    .map(|(name, entry)| (name.clone(), entry.to_value()))
                    .collect(),
            ),
        }
    }
}

/// One relation in mapping-form `populate`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PopulateEntry {
    /// `populate[author]=true`
    Flag(bool),
    /// `populate[author][0]=avatar`, relation paths to load under `author`
    Relations(Vec<String>),
    /// `populate[author][fields][0]=name`
    Query(QueryDocument),
}

impl PopulateEntry {
    pub fn to_value(&self) -> Value {
        match self {
            PopulateEntry::Flag(flag) => Value::Bool(*flag),
            PopulateEntry::Relations(paths) => string_list(paths),
            PopulateEntry::Query(document) => document.to_value(),
        }
    }

    pub fn as_query(&self) -> Option<&QueryDocument> {
        match self {
            PopulateEntry::Query(document) => Some(document),
            PopulateEntry::Flag(_) | PopulateEntry::Relations(_) => None,
        }
    }
}

impl From<QueryDocument> for PopulateEntry {
    fn from(document: QueryDocument) -> Self {
        PopulateEntry::Query(document)
    }
}

/// Turns relation paths into mapping entries. `a` becomes `a: true`, `a.b.c`
/// becomes `a: { populate: ["b.c"] }`; paths sharing a head are grouped.
fn nest_relations(paths: Vec<String>) -> IndexMap<String, PopulateEntry> {
    let mut nested = IndexMap::new();
    for path in paths {
        let split = path
            .split_once('.')
            .map(|(head, rest)| (head.to_string(), rest.to_string()));
        let Some((head, rest)) = split else {
            nested.entry(path).or_insert(PopulateEntry::Flag(true));
            continue;
        };

        let entry = nested
            .entry(head)
            .or_insert_with(|| PopulateEntry::Query(QueryDocument::new()));
        if let PopulateEntry::Flag(_) = entry {
            *entry = PopulateEntry::Query(QueryDocument::new());
        }
        if let PopulateEntry::Query(document) = entry {
            match document
                .populate
                .get_or_insert_with(|| Populate::Relations(Vec::new()))
            {
                Populate::Relations(list) => list.push(rest),
                Populate::Nested(children) => {
                    children.entry(rest).or_insert(PopulateEntry::Flag(true));
                }
            }
        }
    }
    nested
}

fn string_list(items: &[String]) -> Value {
    Value::Array(items.iter().map(|item| Value::from(item.as_str())).collect())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
