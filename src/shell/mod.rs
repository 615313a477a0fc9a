// Composition root for the activities bounded context.
//
// - Read config from environment.
// - Instantiate the in-memory activity registry.
// - Wire it into the use case handlers and expose the HTTP router.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
