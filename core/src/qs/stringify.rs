use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;

/// Everything except the RFC 3986 unreserved characters.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// How list entries are keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayFormat {
    /// `a[0]=x&a[1]=y`
    #[default]
    Indices,
    /// `a[]=x&a[]=y`
    Brackets,
    /// `a=x&a=y`
    Repeat,
}

/// Encoder configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringifyOptions {
    /// Leave keys (and their brackets) unencoded and encode values only.
    pub encode_values_only: bool,
    pub array_format: ArrayFormat,
    /// Drop `null` leaves instead of writing `key=`.
    pub skip_nulls: bool,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self {
            encode_values_only: true,
            array_format: ArrayFormat::Indices,
            skip_nulls: false,
        }
    }
}

/// Encodes `value` with [`StringifyOptions::default`].
pub fn stringify(value: &Value) -> String {
    stringify_with(value, &StringifyOptions::default())
}

/// Encodes the entries of a JSON object as a query string.
///
/// Non-object input, empty objects and empty lists produce no pairs.
///
/// ```
/// use serde_json::json;
/// use strapi_query_core::qs::stringify;
///
/// let qs = stringify(&json!({ "filters": { "title": { "$eq": "a b" } }, "sort": ["id:asc"] }));
/// assert_eq!(qs, "filters[title][$eq]=a%20b&sort[0]=id%3Aasc");
/// ```
pub fn stringify_with(value: &Value, options: &StringifyOptions) -> String {
    let Value::Object(map) = value else {
        return String::new();
    };

    let mut pairs = Vec::new();
    for (key, value) in map {
        write_pairs(&mut pairs, key.clone(), value, options);
    }
    pairs.join("&")
}

fn write_pairs(pairs: &mut Vec<String>, prefix: String, value: &Value, options: &StringifyOptions) {
    match value {
        Value::Null => {
            if !options.skip_nulls {
                pairs.push(format!("{}=", encode_key(&prefix, options)));
            }
        }
        Value::Bool(flag) => pairs.push(pair(&prefix, if *flag { "true" } else { "false" }, options)),
        Value::Number(number) => pairs.push(pair(&prefix, &number.to_string(), options)),
        Value::String(text) => pairs.push(pair(&prefix, text, options)),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let key = match options.array_format {
                    ArrayFormat::Indices => format!("{prefix}[{index}]"),
                    ArrayFormat::Brackets => format!("{prefix}[]"),
                    ArrayFormat::Repeat => prefix.clone(),
                };
                write_pairs(pairs, key, item, options);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                write_pairs(pairs, format!("{prefix}[{key}]"), item, options);
            }
        }
    }
}

fn pair(key: &str, value: &str, options: &StringifyOptions) -> String {
    format!(
        "{}={}",
        encode_key(key, options),
        utf8_percent_encode(value, COMPONENT)
    )
}

fn encode_key<'a>(key: &'a str, options: &StringifyOptions) -> Cow<'a, str> {
    if options.encode_values_only {
        Cow::Borrowed(key)
    } else {
        utf8_percent_encode(key, COMPONENT).into()
    }
}
