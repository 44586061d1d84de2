//! Roster Core Components
//!
//! This crate holds the in-memory person registry, the read-only views
//! projected from it, and the GraphQL resolver surface bound to both.

mod clock;
mod config;
mod error;
mod graphql;
mod mutation;
mod person;
mod store;
mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ServerConfig;
pub use error::CoreError;
pub use graphql::{
    build_schema, served_sdl, MutationRoot, QueryRoot, RosterContext, RosterSchema, Time,
};
pub use mutation::{create_person, CreatePersonInput};
pub use person::{seed_people, Person};
pub use store::PersonStore;
pub use view::{days_ago, format_rfc3339, PersonView};
