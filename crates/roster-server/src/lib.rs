//! Roster Server
//!
//! HTTP front end for the Roster GraphQL API: checks the schema document,
//! serves the query explorer and routes GraphQL requests to the resolvers.

mod routes;
mod schema_file;
mod server;
mod signals;

pub use routes::{router, AppState, ENDPOINT_TOKEN};
pub use schema_file::{check_schema, load_schema_document, SchemaDocument, SchemaFileError};
pub use server::Server;
