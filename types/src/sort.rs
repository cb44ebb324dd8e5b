//! Sort entries
//!
//! A sort entry is a field name with a direction suffix, `createdAt:desc`.

use std::borrow::Cow;

/// Sort direction for a `field:direction` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a direction (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("asc") {
            Some(SortDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Some(SortDirection::Desc)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl core::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single sort entry: field plus direction
///
/// ```
/// use strapi_query_types::{Sort, SortDirection};
///
/// let sort: Sort = "createdAt:desc".parse().unwrap();
/// assert_eq!(sort.field, "createdAt");
/// assert_eq!(sort.direction, SortDirection::Desc);
/// assert_eq!(Sort::new("id", SortDirection::Asc).to_string(), "id:asc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Splits a `field:direction` string into its field and direction.
    ///
    /// Returns `None` for the direction when the suffix is missing or is not
    /// a known direction, in which case the whole input is the field.
    #[must_use]
    pub fn split(input: &str) -> (&str, Option<SortDirection>) {
        match input.rsplit_once(':') {
            Some((field, dir)) => match SortDirection::parse(dir) {
                Some(direction) => (field, Some(direction)),
                None => (input, None),
            },
            None => (input, None),
        }
    }

    /// Renders the wire form of `field` sorted in `direction`.
    ///
    /// A field that already carries an explicit direction suffix is returned
    /// unchanged.
    #[must_use]
    pub fn render(field: &str, direction: SortDirection) -> Cow<'_, str> {
        match Self::split(field) {
            (_, Some(_)) => Cow::Borrowed(field),
            (_, None) => Cow::Owned(format!("{field}:{direction}")),
        }
    }
}

impl core::fmt::Display for Sort {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.field, self.direction)
    }
}

impl core::str::FromStr for Sort {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = Self::split(s);
        if field.is_empty() {
            return Err(SortParseError);
        }
        Ok(Self::new(field, direction.unwrap_or_default()))
    }
}

/// Error returned when a sort entry has no field name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortParseError;

impl core::fmt::Display for SortParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("sort entry has an empty field name")
    }
}

impl std::error::Error for SortParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        assert_eq!(Sort::split("id"), ("id", None));
        assert_eq!(Sort::split("id:desc"), ("id", Some(SortDirection::Desc)));
        assert_eq!(Sort::split("id:ASC"), ("id", Some(SortDirection::Asc)));
        assert_eq!(Sort::split("author.name:asc"), ("author.name", Some(SortDirection::Asc)));
        // unknown suffixes belong to the field
        assert_eq!(Sort::split("time:zone"), ("time:zone", None));
    }

    #[test]
    fn test_render() {
        assert_eq!(Sort::render("id", SortDirection::Asc), "id:asc");
        assert_eq!(Sort::render("id", SortDirection::Desc), "id:desc");
        assert_eq!(Sort::render("id:desc", SortDirection::Asc), "id:desc");
        assert!(matches!(Sort::render("id:asc", SortDirection::Asc), Cow::Borrowed(_)));
    }

    #[test]
    fn test_parse() {
        let sort: Sort = "title".parse().unwrap();
        assert_eq!(sort, Sort::new("title", SortDirection::Asc));
        assert_eq!(":desc".parse::<Sort>(), Err(SortParseError));
    }
}
