//! Append-only in-memory person store.

use crate::person::{seed_people, Person};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

/// Ordered, append-only collection of person records.
///
/// Insertion order is preserved and records are never removed or edited.
/// Reads return owned snapshots, so callers cannot reach stored state.
#[derive(Debug, Default)]
pub struct PersonStore {
    people: RwLock<Vec<Person>>,
}

impl PersonStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given records, in order
    pub fn with_people(people: Vec<Person>) -> Self {
        Self {
            people: RwLock::new(people),
        }
    }

    /// Create a store holding the example records
    pub fn seeded() -> Self {
        Self::with_people(seed_people())
    }

    /// Snapshot of every record in insertion order
    pub fn list(&self) -> Vec<Person> {
        self.people.read().clone()
    }

    /// Append a record and return a copy of it.
    ///
    /// The new record carries an empty identifier.
    pub fn append(&self, name: impl Into<String>, date: DateTime<Utc>) -> Person {
        let person = Person::new(String::new(), name, date);

        let mut people = self.people.write();
        people.push(person.clone());

        tracing::debug!(name = %person.name, total = people.len(), "Person appended");

        person
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.people.read().len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.people.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_store_is_empty() {
        let store = PersonStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_seeded_store() {
        let store = PersonStore::seeded();
        assert_eq!(store.len(), 5);
        assert_eq!(store.list(), seed_people());
    }

    #[test]
    fn test_append_preserves_order() {
        let store = PersonStore::seeded();
        let date = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

        let names = ["first", "second", "third"];
        for name in names {
            store.append(name, date);
        }

        let people = store.list();
        assert_eq!(people.len(), 8);
        assert_eq!(&people[..5], seed_people().as_slice());
        let appended: Vec<&str> = people[5..].iter().map(|p| p.name.as_str()).collect();
        assert_eq!(appended, names);
    }

    #[test]
    fn test_append_returns_record() {
        let store = PersonStore::new();
        let date = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

        let person = store.append("Jyn Erso", date);
        assert_eq!(person.name, "Jyn Erso");
        assert_eq!(person.date, date);
        // Appended records are never given an identifier.
        assert_eq!(person.id, "");
        assert_eq!(store.list(), vec![person]);
    }

    #[test]
    fn test_append_accepts_empty_and_duplicate_names() {
        let store = PersonStore::new();
        let date = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

        store.append("", date);
        store.append("Han Solo", date);
        store.append("Han Solo", date);

        let people = store.list();
        assert_eq!(people.len(), 3);
        assert_eq!(people[0].name, "");
        assert_eq!(people[1], people[2]);
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let store = PersonStore::seeded();

        let mut snapshot = store.list();
        snapshot[0].name = "Mutated".to_string();
        snapshot.clear();

        let people = store.list();
        assert_eq!(people.len(), 5);
        assert_eq!(people[0].name, "Luke Skywalker");
    }
}
