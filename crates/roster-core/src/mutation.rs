//! Record creation.

use crate::clock::Clock;
use crate::error::CoreError;
use crate::store::PersonStore;
use crate::view::PersonView;

/// Input accepted when creating a person
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatePersonInput {
    /// Display name. Accepted as given, including the empty string.
    pub name: String,
}

impl CreatePersonInput {
    /// Input carrying `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Append a person stamped with the clock's current time and return its view
pub fn create_person(
    store: &PersonStore,
    clock: &dyn Clock,
    input: CreatePersonInput,
) -> Result<PersonView, CoreError> {
    let now = clock.now();
    let person = store.append(input.name, now);

    tracing::info!(name = %person.name, "Person created");

    Ok(PersonView::project(&person, now))
}
