//! Validated request parameters shared by the facade and connectors.

use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::GazetteError;

/// Wire format for calendar dates accepted by date-range searches.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// ISO language code of a request, e.g. `"en"`.
///
/// Surrounding whitespace is trimmed; case is preserved so routing compares
/// codes exactly as the caller sent them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language(String);

impl Language {
    /// Validate and wrap a language code.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the code is blank.
    pub fn new(code: impl AsRef<str>) -> Result<Self, GazetteError> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return Err(GazetteError::invalid_arg("language must not be empty"));
        }
        Ok(Self(code.to_string()))
    }

    /// Borrow the code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl TryFrom<String> for Language {
    type Error = GazetteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Language> for String {
    fn from(l: Language) -> Self {
        l.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inclusive calendar date range.
///
/// Deserialization goes through [`DateRange::new`], so an inverted range is
/// rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DateRangeRepr")]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

#[derive(Deserialize)]
struct DateRangeRepr {
    from: NaiveDate,
    to: NaiveDate,
}

impl TryFrom<DateRangeRepr> for DateRange {
    type Error = GazetteError;

    fn try_from(raw: DateRangeRepr) -> Result<Self, Self::Error> {
        Self::new(raw.from, raw.to)
    }
}

impl DateRange {
    /// Build a range from already-parsed dates.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `from` is after `to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, GazetteError> {
        if from > to {
            return Err(GazetteError::invalid_arg(format!(
                "date range is inverted: {from} > {to}"
            )));
        }
        Ok(Self { from, to })
    }

    /// Parse `YYYY-MM-DD` bounds.
    ///
    /// # Errors
    /// Returns `InvalidArg` if either bound is not a valid `YYYY-MM-DD` date
    /// or the range is inverted.
    pub fn parse(from: &str, to: &str) -> Result<Self, GazetteError> {
        let parse = |label: &str, s: &str| {
            NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|e| {
                GazetteError::invalid_arg(format!("{label} date '{s}' is not YYYY-MM-DD: {e}"))
            })
        };
        Self::new(parse("from", from)?, parse("to", to)?)
    }

    /// First day of the range.
    #[must_use]
    pub const fn from(&self) -> NaiveDate {
        self.from
    }

    /// Last day of the range.
    #[must_use]
    pub const fn to(&self) -> NaiveDate {
        self.to
    }
}

/// Reject blank free-text parameters (query, source, category, sentiment).
///
/// # Errors
/// Returns `InvalidArg` naming `what` when `value` is blank.
pub fn require_text<'a>(what: &str, value: &'a str) -> Result<&'a str, GazetteError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(GazetteError::invalid_arg(format!("{what} must not be empty")));
    }
    Ok(v)
}
