//! Filter operator keys
//!
//! Comparison operators terminate a filter path (`title.$containsi`), logical
//! operators hold lists of nested filter trees (`$or: [..]`).

/// Comparison operator appended to a field path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    NotIn,
    Contains,
    ContainsInsensitive,
    Null,
    NotNull,
    Between,
    StartsWith,
    EndsWith,
}

impl FilterOperator {
    pub const ALL: [FilterOperator; 15] = [
        FilterOperator::Eq,
        FilterOperator::Ne,
        FilterOperator::Lt,
        FilterOperator::Lte,
        FilterOperator::Gt,
        FilterOperator::Gte,
        FilterOperator::In,
        FilterOperator::NotIn,
        FilterOperator::Contains,
        FilterOperator::ContainsInsensitive,
        FilterOperator::Null,
        FilterOperator::NotNull,
        FilterOperator::Between,
        FilterOperator::StartsWith,
        FilterOperator::EndsWith,
    ];

    /// The `$`-prefixed key used in filter trees
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "$eq",
            FilterOperator::Ne => "$ne",
            FilterOperator::Lt => "$lt",
            FilterOperator::Lte => "$lte",
            FilterOperator::Gt => "$gt",
            FilterOperator::Gte => "$gte",
            FilterOperator::In => "$in",
            FilterOperator::NotIn => "$nin",
            FilterOperator::Contains => "$contains",
            FilterOperator::ContainsInsensitive => "$containsi",
            FilterOperator::Null => "$null",
            FilterOperator::NotNull => "$notNull",
            FilterOperator::Between => "$between",
            FilterOperator::StartsWith => "$startsWith",
            FilterOperator::EndsWith => "$endsWith",
        }
    }

    /// Look up an operator by its key (`"$eq"`)
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == key)
    }

    /// Dotted path selecting this operator on `field`
    ///
    /// ```
    /// use strapi_query_types::FilterOperator;
    ///
    /// assert_eq!(FilterOperator::Eq.path("author.name"), "author.name.$eq");
    /// ```
    #[must_use]
    pub fn path(&self, field: &str) -> String {
        format!("{field}.{}", self.as_str())
    }
}

impl core::fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical operator combining filter trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    And,
    Or,
    Not,
}

impl LogicalOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LogicalOperator::And => "$and",
            LogicalOperator::Or => "$or",
            LogicalOperator::Not => "$not",
        }
    }
}

impl core::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_keys_round_trip() {
        for op in FilterOperator::ALL {
            assert_eq!(FilterOperator::parse(op.as_str()), Some(op));
        }
        assert_eq!(FilterOperator::parse("eq"), None);
        assert_eq!(FilterOperator::parse("$unknown"), None);
    }

    #[test]
    fn test_logical_display() {
        assert_eq!(LogicalOperator::And.to_string(), "$and");
        assert_eq!(LogicalOperator::Or.to_string(), "$or");
        assert_eq!(LogicalOperator::Not.to_string(), "$not");
    }
}
