//! Read-only views projected from person records.

use crate::person::Person;
use chrono::{DateTime, SecondsFormat, Utc};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Schema-shaped view of a single record, computed at read time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonView {
    /// Identifier, copied from the record
    pub id: String,

    /// Display name, copied from the record
    pub name: String,

    /// Record timestamp, copied from the record
    pub date: DateTime<Utc>,

    /// Whole days between the record timestamp and `now`, e.g. `"3 days ago"`
    pub days_ago: String,
}

impl PersonView {
    /// Project a record relative to `now`
    pub fn project(person: &Person, now: DateTime<Utc>) -> Self {
        Self {
            id: person.id.clone(),
            name: person.name.clone(),
            date: person.date,
            days_ago: days_ago(person.date, now),
        }
    }
}

/// Render the elapsed whole days between `date` and `now`.
///
/// The distance is absolute: a date after `now` still reads "N days ago".
pub fn days_ago(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(date);
    // num_seconds truncates toward zero, so abs() of it is the floor of |elapsed|.
    let days = elapsed.num_seconds().abs() / SECONDS_PER_DAY;
    format!("{} days ago", days)
}

/// Format a timestamp as RFC 3339 with whole seconds and a `Z` suffix
pub fn format_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}
