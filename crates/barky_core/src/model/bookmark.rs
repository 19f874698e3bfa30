//! Bookmark domain model.
//!
//! # Responsibility
//! - Define the canonical saved title/url/notes/date record.
//! - Validate required fields and the `date_added` text before persistence.
//! - Parse `date_added` into a comparable timestamp for date ordering.
//!
//! # Invariants
//! - `id` is owned by the repository; callers may leave it as `0`.
//! - `title` and `url` are never blank once a record is persisted.
//! - `date_added` always parses with one of [`DATE_FORMATS`].

use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Repository-assigned bookmark identifier.
pub type BookmarkId = i64;

/// Format used when stamping `date_added` with the current time.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Date-time layouts accepted in `date_added`, tried in order.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Date-only layouts accepted in `date_added`, tried in order.
/// Two-digit years go first; `%Y` would otherwise read `22` as year 22.
const DATE_ONLY_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y"];

/// All accepted `date_added` layouts, for diagnostics.
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d",
    "%m/%d/%y",
    "%m/%d/%Y",
];

/// Validation errors for bookmark invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkValidationError {
    EmptyTitle,
    EmptyUrl,
    EmptyDate,
    InvalidDate(String),
}

impl Display for BookmarkValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "bookmark title must not be blank"),
            Self::EmptyUrl => write!(f, "bookmark url must not be blank"),
            Self::EmptyDate => write!(f, "bookmark date_added must not be blank"),
            Self::InvalidDate(value) => {
                write!(f, "bookmark date_added `{value}` is not a recognized date")
            }
        }
    }
}

impl Error for BookmarkValidationError {}

/// A saved title/url/notes/date record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Assigned by the repository on add; any caller value is overwritten.
    #[serde(default)]
    pub id: BookmarkId,
    pub title: String,
    pub url: String,
    pub notes: Option<String>,
    /// Date-formatted text. Defaults to creation time.
    pub date_added: String,
}

impl Bookmark {
    /// Creates an unsaved bookmark stamped with the current UTC time.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            url: url.into(),
            notes: None,
            date_added: now_date_added(),
        }
    }

    /// Sets optional notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Replaces the default creation timestamp.
    pub fn with_date_added(mut self, date_added: impl Into<String>) -> Self {
        self.date_added = date_added.into();
        self
    }

    /// Checks required fields and the `date_added` format.
    pub fn validate(&self) -> Result<(), BookmarkValidationError> {
        validate_title(&self.title)?;
        validate_url(&self.url)?;
        validate_date_added(&self.date_added)?;
        Ok(())
    }

    /// Returns the parsed `date_added`, or `None` when it is unrecognized.
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        parse_date_added(&self.date_added)
    }
}

/// Field replacements applied by an update.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub date_added: Option<String>,
}

impl BookmarkPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.notes.is_none()
            && self.date_added.is_none()
    }

    /// Validates only the supplied fields.
    pub fn validate(&self) -> Result<(), BookmarkValidationError> {
        if let Some(title) = self.title.as_deref() {
            validate_title(title)?;
        }
        if let Some(url) = self.url.as_deref() {
            validate_url(url)?;
        }
        if let Some(date_added) = self.date_added.as_deref() {
            validate_date_added(date_added)?;
        }
        Ok(())
    }

    /// Applies supplied fields onto `bookmark` in place.
    pub fn apply_to(&self, bookmark: &mut Bookmark) {
        if let Some(title) = self.title.as_ref() {
            bookmark.title = title.clone();
        }
        if let Some(url) = self.url.as_ref() {
            bookmark.url = url.clone();
        }
        if let Some(notes) = self.notes.as_ref() {
            bookmark.notes = Some(notes.clone());
        }
        if let Some(date_added) = self.date_added.as_ref() {
            bookmark.date_added = date_added.clone();
        }
    }
}

/// Renders the current UTC time in [`DEFAULT_DATE_FORMAT`].
pub fn now_date_added() -> String {
    Utc::now()
        .naive_utc()
        .format(DEFAULT_DATE_FORMAT)
        .to_string()
}

/// Parses `date_added` text into a naive date-time.
///
/// Date-only values resolve to midnight.
pub fn parse_date_added(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }

    DATE_ONLY_FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(trimmed, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
}

fn validate_title(title: &str) -> Result<(), BookmarkValidationError> {
    if title.trim().is_empty() {
        return Err(BookmarkValidationError::EmptyTitle);
    }
    Ok(())
}

fn validate_url(url: &str) -> Result<(), BookmarkValidationError> {
    if url.trim().is_empty() {
        return Err(BookmarkValidationError::EmptyUrl);
    }
    Ok(())
}

fn validate_date_added(date_added: &str) -> Result<(), BookmarkValidationError> {
    if date_added.trim().is_empty() {
        return Err(BookmarkValidationError::EmptyDate);
    }
    if parse_date_added(date_added).is_none() {
        return Err(BookmarkValidationError::InvalidDate(date_added.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_date_added, DATE_FORMATS, DATE_ONLY_FORMATS, DATE_TIME_FORMATS};
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn short_us_dates_parse_to_midnight() {
        let parsed = parse_date_added("02/10/22").expect("short US date should parse");
        assert_eq!(
            parsed.date(),
            NaiveDate::from_ymd_opt(2022, 2, 10).expect("valid date")
        );
        assert_eq!(parsed.hour(), 0);
    }

    #[test]
    fn four_digit_us_years_parse() {
        let parsed = parse_date_added("02/10/2022").expect("long US date should parse");
        assert_eq!(
            parsed.date(),
            NaiveDate::from_ymd_opt(2022, 2, 10).expect("valid date")
        );
    }

    #[test]
    fn iso_timestamps_keep_time_of_day() {
        let parsed =
            parse_date_added("2023-02-24T10:11:12.123456").expect("iso timestamp should parse");
        assert_eq!(parsed.hour(), 10);
        assert_eq!(parsed.minute(), 11);

        let zulu = parse_date_added("2023-02-24T10:11:12Z").expect("zulu suffix should parse");
        assert_eq!(zulu.second(), 12);
    }

    #[test]
    fn garbage_and_blank_do_not_parse() {
        assert!(parse_date_added("yesterday").is_none());
        assert!(parse_date_added("   ").is_none());
        assert!(parse_date_added("13/45/22").is_none());
    }

    #[test]
    fn format_table_lists_every_layout() {
        assert_eq!(
            DATE_FORMATS.len(),
            DATE_TIME_FORMATS.len() + DATE_ONLY_FORMATS.len()
        );
    }
}
