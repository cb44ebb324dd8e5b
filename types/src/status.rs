//! Publication status of a content entry
//!
//! Content endpoints serve either the draft or the published version of an
//! entry. The status is sent as a plain `status=draft|published` parameter.

/// Publication status selector
///
/// # Examples
///
/// ```
/// use strapi_query_types::Status;
///
/// assert_eq!(Status::parse("draft"), Some(Status::Draft));
/// assert_eq!(Status::Published.as_str(), "published");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    /// Latest draft version of each entry
    Draft,

    /// Published version of each entry (the server default)
    #[default]
    Published,
}

impl Status {
    /// Parse a status from a string (case-insensitive)
    ///
    /// ```
    /// use strapi_query_types::Status;
    ///
    /// assert_eq!(Status::parse("PUBLISHED"), Some(Status::Published));
    /// assert_eq!(Status::parse("archived"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("draft") {
            Some(Status::Draft)
        } else if s.eq_ignore_ascii_case("published") {
            Some(Status::Published)
        } else {
            None
        }
    }

    /// Get the wire value for this status
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "draft",
            Status::Published => "published",
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Status {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::parse(s).ok_or(StatusParseError)
    }
}

/// Error returned when parsing an unknown status string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusParseError;

impl core::fmt::Display for StatusParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown status, expected `draft` or `published`")
    }
}

impl std::error::Error for StatusParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(Status::parse("draft"), Some(Status::Draft));
        assert_eq!(Status::parse("Draft"), Some(Status::Draft));
        assert_eq!(Status::parse("published"), Some(Status::Published));
        assert_eq!(Status::parse("PUBLISHED"), Some(Status::Published));

        assert_eq!(Status::parse("archived"), None);
        assert_eq!(Status::parse(""), None);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("draft".parse::<Status>(), Ok(Status::Draft));
        assert_eq!("nope".parse::<Status>(), Err(StatusParseError));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(format!("{}", Status::Draft), "draft");
        assert_eq!(format!("{}", Status::Published), "published");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_status_serde() {
        assert_eq!(
            serde_json::to_string(&Status::Draft).unwrap(),
            r#""draft""#
        );
        let status: Status = serde_json::from_str(r#""published""#).unwrap();
        assert_eq!(status, Status::Published);
    }
}
