//! Person records.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A single person record held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Identifier. Empty for records created through the mutation.
    pub id: String,

    /// Display name
    pub name: String,

    /// Record timestamp
    pub date: DateTime<Utc>,
}

impl Person {
    /// Create a new record
    pub fn new(id: impl Into<String>, name: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date,
        }
    }
}

fn seed_date(year: i32, nanos: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 2, 3, 4, 5, 6)
        .single()
        .unwrap_or_default()
        + chrono::Duration::nanoseconds(i64::from(nanos))
}

/// The example records a fresh store is seeded with
pub fn seed_people() -> Vec<Person> {
    vec![
        Person::new("1000", "Luke Skywalker", seed_date(1951, 0)),
        Person::new("1001", "Leia Organa", seed_date(1951, 1)),
        Person::new("1002", "Darth Vader", seed_date(1931, 0)),
        Person::new("1003", "Han Solo", seed_date(1946, 1)),
        Person::new("1004", "Wilhuff Tarkin", seed_date(1942, 1)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_seed_people() {
        let people = seed_people();
        assert_eq!(people.len(), 5);

        let ids: Vec<&str> = people.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1000", "1001", "1002", "1003", "1004"]);

        assert_eq!(people[0].name, "Luke Skywalker");
        assert_eq!(people[0].date.year(), 1951);
        assert_eq!(people[0].date.nanosecond(), 0);
        assert_eq!(people[1].date.nanosecond(), 1);
        assert_eq!(people[2].date.year(), 1931);
    }
}
