//! GraphQL resolver surface.
//!
//! Binds `allPeople` and `createPerson` to the store, and exposes
//! [`PersonView`] as the `Person` object type.

use crate::clock::{Clock, SystemClock};
use crate::mutation::{self, CreatePersonInput};
use crate::store::PersonStore;
use crate::view::{format_rfc3339, PersonView};
use async_graphql::{
    Context, EmptySubscription, InputValueError, InputValueResult, Object, Scalar, ScalarType,
    Schema, Value, ID,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// GraphQL schema type
pub type RosterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// State shared by every resolver
#[derive(Clone)]
pub struct RosterContext {
    /// Records read and written by the resolvers
    pub store: Arc<PersonStore>,
    /// Time source for `daysAgo` and new record dates
    pub clock: Arc<dyn Clock>,
}

impl RosterContext {
    /// Context over `store` reading time from `clock`
    pub fn new(store: Arc<PersonStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Context reading the system clock
    pub fn with_system_clock(store: Arc<PersonStore>) -> Self {
        Self::new(store, Arc::new(SystemClock))
    }
}

/// Build the schema with the given resolver state
pub fn build_schema(context: RosterContext) -> RosterSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(context)
        .finish()
}

/// SDL of the types and fields the resolvers serve
pub fn served_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

/// RFC 3339 date-time scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time(pub DateTime<Utc>);

#[Scalar]
impl ScalarType for Time {
    fn parse(value: Value) -> InputValueResult<Self> {
        if let Value::String(s) = &value {
            return DateTime::parse_from_rfc3339(s)
                .map(|date| Time(date.with_timezone(&Utc)))
                .map_err(InputValueError::custom);
        }
        Err(InputValueError::expected_type(value))
    }

    fn to_value(&self) -> Value {
        Value::String(format_rfc3339(self.0))
    }
}

/// Root query type
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Every person, in the order they were added
    async fn all_people(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<PersonView>> {
        let roster = ctx.data::<RosterContext>()?;
        let now = roster.clock.now();

        Ok(roster
            .store
            .list()
            .iter()
            .map(|person| PersonView::project(person, now))
            .collect())
    }
}

/// Root mutation type
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a person dated now
    async fn create_person(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<PersonView> {
        let roster = ctx.data::<RosterContext>()?;
        let view = mutation::create_person(
            &roster.store,
            roster.clock.as_ref(),
            CreatePersonInput::new(name),
        )?;
        Ok(view)
    }
}

#[Object(name = "Person")]
impl PersonView {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn date(&self) -> Time {
        Time(self.date)
    }

    /// Whole days between `date` and now
    async fn days_ago(&self) -> &str {
        &self.days_ago
    }
}
