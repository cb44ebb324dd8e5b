//! Bracket-notation query strings.
//!
//! Nested mappings are written as `key[sub]`, list entries as `key[0]`:
//!
//! ```text
//! filters[$and][0][title][$eq]=Hello%20World&pagination[page]=1
//! ```
//!
//! [`stringify`] produces this form from a JSON tree and [`parse`] reads it
//! back into one, with every leaf as a string.

mod parse;
mod stringify;

pub use parse::{ParseOptions, parse, parse_with};
pub use stringify::{ArrayFormat, StringifyOptions, stringify, stringify_with};
