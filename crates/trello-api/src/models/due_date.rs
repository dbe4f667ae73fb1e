//! Due date parsing for cards.
//!
//! Trello sends due dates such as `2016-04-10T16:00:00.000Z`. A string that
//! does not match the format decodes to `None` instead of failing the card.
//! A value of any other JSON type still fails the card.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// The fixed, locale-independent format used for card due dates.
///
/// Equivalent to the pattern `yyyy-MM-dd'T'HH:mm:ss.SSSZ`.
///
/// # Examples
///
/// ```
/// use trello_api_rs::models::DueDateFormat;
///
/// let due = DueDateFormat::TRELLO.parse("2016-04-10T16:00:00.000Z").unwrap();
/// assert_eq!(due.to_rfc3339(), "2016-04-10T16:00:00+00:00");
///
/// assert!(DueDateFormat::TRELLO.parse("next tuesday").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueDateFormat {
    pattern: &'static str,
}

impl DueDateFormat {
    /// The format the Trello API uses for `due`.
    pub const TRELLO: Self = Self {
        pattern: "%Y-%m-%dT%H:%M:%S.%3f%z",
    };

    /// Returns the chrono format string.
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Parses a raw due date, returning `None` if it does not match.
    pub fn parse(&self, raw: &str) -> Option<DateTime<Utc>> {
        if !has_millis(raw) {
            return None;
        }

        // `Z` is the zero offset designator; chrono's %z only takes numeric offsets.
        let normalized = match raw.strip_suffix('Z') {
            Some(prefix) => format!("{prefix}+0000"),
            None => raw.to_string(),
        };

        DateTime::parse_from_str(&normalized, self.pattern)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Formats an instant so that [`DueDateFormat::parse`] yields it back.
    pub fn format(&self, due: &DateTime<Utc>) -> String {
        due.format(self.pattern).to_string()
    }
}

/// Checks for exactly three fraction digits after `yyyy-MM-ddTHH:mm:ss`.
fn has_millis(raw: &str) -> bool {
    match raw.as_bytes().get(19..) {
        Some([b'.', a, b, c, rest @ ..]) => {
            [a, b, c].iter().all(|d| d.is_ascii_digit())
                && !rest.first().is_some_and(u8::is_ascii_digit)
        }
        _ => false,
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| DueDateFormat::TRELLO.parse(&s)))
}

pub(crate) fn serialize<S>(due: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match due {
        Some(due) => serializer.serialize_str(&DueDateFormat::TRELLO.format(due)),
        None => serializer.serialize_none(),
    }
}
