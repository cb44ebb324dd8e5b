use percent_encoding::percent_decode_str;
use serde_json::{Map, Value};

/// Decoder configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of bracket segments split out of one key. Whatever
    /// follows is kept as a single literal segment.
    pub depth: usize,
    /// Highest numeric index still treated as a list position. Larger
    /// indices keep their mapping form.
    pub array_limit: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            depth: 16,
            array_limit: 20,
        }
    }
}

/// Decodes `input` with [`ParseOptions::default`].
pub fn parse(input: &str) -> Value {
    parse_with(input, &ParseOptions::default())
}

/// Decodes a bracket-notation query string into a JSON object tree.
///
/// Every leaf is a string. Repeated plain keys collect into a list, `[]`
/// appends, and mappings keyed only by small indices become lists ordered by
/// index. A leading `?` is ignored.
///
/// ```
/// use serde_json::json;
/// use strapi_query_core::qs::parse;
///
/// assert_eq!(
///     parse("sort[0]=id%3Aasc&filters[title][$eq]=a+b"),
///     json!({ "sort": ["id:asc"], "filters": { "title": { "$eq": "a b" } } })
/// );
/// ```
pub fn parse_with(input: &str, options: &ParseOptions) -> Value {
    let input = input.strip_prefix('?').unwrap_or(input);

    let mut root = Value::Object(Map::new());
    for part in input.split('&').filter(|part| !part.is_empty()) {
        let (raw_key, raw_value) = part.split_once('=').unwrap_or((part, ""));
        let key = decode(raw_key);
        if key.is_empty() {
            continue;
        }
        let segments = split_key(&key, options.depth);
        insert(&mut root, &segments, Value::String(decode(raw_value)));
    }

    match root {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, compact(value, options.array_limit)))
                .collect(),
        ),
        other => other,
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// `a[b][0][]` -> `["a", "b", "0", ""]`
fn split_key(key: &str, depth: usize) -> Vec<String> {
    let Some(open) = key.find('[') else {
        return vec![key.to_string()];
    };

    let mut segments = Vec::new();
    if open > 0 {
        segments.push(key[..open].to_string());
    }

    let mut rest = &key[open..];
    while segments.len() <= depth && rest.starts_with('[') {
        let Some(close) = rest.find(']') else {
            break;
        };
        let inner = &rest[1..close];
        if inner.contains('[') {
            break;
        }
        segments.push(inner.to_string());
        rest = &rest[close + 1..];
    }

    if !rest.is_empty() {
        segments.push(rest.to_string());
    }
    segments
}

fn insert(slot: &mut Value, segments: &[String], value: Value) {
    let [head, tail @ ..] = segments else {
        combine(slot, value);
        return;
    };

    if !slot.is_object() {
        let previous = slot.take();
        *slot = Value::Object(indexed(previous));
    }
    if let Value::Object(map) = slot {
        let key = if head.is_empty() {
            next_index(map).to_string()
        } else {
            head.clone()
        };
        insert(map.entry(key).or_insert(Value::Null), tail, value);
    }
}

/// Position after the largest numeric key, so `[]` appends behind `[5]`.
fn next_index(map: &Map<String, Value>) -> usize {
    map.keys()
        .filter_map(|key| key.parse::<usize>().ok())
        .max()
        .map_or(0, |last| last.saturating_add(1))
}

fn combine(slot: &mut Value, value: Value) {
    match slot {
        Value::Null => *slot = value,
        Value::Array(items) => items.push(value),
        _ => {
            let previous = slot.take();
            *slot = Value::Array(vec![previous, value]);
        }
    }
}

/// Mapping form of a value that is about to receive keyed children.
fn indexed(previous: Value) -> Map<String, Value> {
    match previous {
        Value::Null => Map::new(),
        Value::Object(map) => map,
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item))
            .collect(),
        scalar => Map::from_iter([("0".to_string(), scalar)]),
    }
}

fn compact(value: Value, array_limit: usize) -> Value {
    match value {
        Value::Object(map) => {
            let is_list = !map.is_empty() && map.keys().all(|key| is_index(key, array_limit));
            if is_list {
                let mut entries: Vec<(usize, Value)> = map
                    .into_iter()
                    .filter_map(|(key, item)| Some((key.parse().ok()?, item)))
                    .collect();
                entries.sort_by_key(|(index, _)| *index);
                Value::Array(
                    entries
                        .into_iter()
                        .map(|(_, item)| compact(item, array_limit))
                        .collect(),
                )
            } else {
                Value::Object(
                    map.into_iter()
                        .map(|(key, item)| (key, compact(item, array_limit)))
                        .collect(),
                )
            }
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| compact(item, array_limit))
                .collect(),
        ),
        scalar => scalar,
    }
}

fn is_index(key: &str, array_limit: usize) -> bool {
    key.parse::<usize>()
        .is_ok_and(|index| index <= array_limit && index.to_string() == key)
}
