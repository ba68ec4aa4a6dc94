//! A small client for the Cato Networks GraphQL API.
//!
//! ```no_run
//! use cato_api::Api;
//! use serde_json::Map;
//!
//! let api = Api::new("my-api-key");
//! let (success, payload) =
//! 	api.send("GetSites", &Map::new(), "query GetSites { sites { id } }");
//!
//! if success {
//! 	println!("{}", payload["data"]);
//! }
//! ```

mod agent;
mod api;
mod gql;

pub use api::{Api, ENDPOINT};
pub use gql::GraphQLRequest;
