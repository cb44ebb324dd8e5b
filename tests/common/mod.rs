#![allow(dead_code)]

use serde_json::{Map, Value};
use strapi_query::QueryBuilder;

/// Asserts that a builder's document renders to the expected JSON tree.
#[macro_export]
macro_rules! assert_doc {
    ($builder:expr, $($expected:tt)+) => {
        assert_eq!($builder.document().to_value(), serde_json::json!($($expected)+));
    };
}

/// The tree a query-string parser yields for `value`: scalars as strings,
/// empty lists and mappings dropped.
pub fn wire_shape(value: &Value) -> Option<Value> {
    match value {
        Value::Null => Some(Value::String(String::new())),
        Value::Bool(flag) => Some(Value::String(flag.to_string())),
        Value::Number(number) => Some(Value::String(number.to_string())),
        Value::String(_) => Some(value.clone()),
        Value::Array(items) => {
            let items: Vec<Value> = items.iter().filter_map(wire_shape).collect();
            (!items.is_empty()).then_some(Value::Array(items))
        }
        Value::Object(map) => {
            let map: Map<String, Value> = map
                .iter()
                .filter_map(|(key, item)| Some((key.clone(), wire_shape(item)?)))
                .collect();
            (!map.is_empty()).then_some(Value::Object(map))
        }
    }
}

/// Encodes the builder and decodes the result again.
pub fn round_trip(builder: &QueryBuilder) -> Value {
    strapi_query::qs::parse(&builder.to_query_string())
}

/// Expected decode result for the builder's document.
pub fn expected_wire(builder: &QueryBuilder) -> Value {
    wire_shape(&builder.document().to_value()).unwrap_or_else(|| Value::Object(Map::new()))
}
