use std::{io::Read, time::Duration};

use anyhow::Result;
use flate2::read::MultiGzDecoder;
use log::debug;
use serde_json::{json, Map, Value};
use ureq::Agent;

use crate::{agent::build_agent, gql::GraphQLRequest};

pub const ENDPOINT: &str = "https://api.catonetworks.com/api/v1/graphql2";

const TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Cato GraphQL API.
///
/// The only state is the API key and the HTTP agent; every call to
/// [`Api::send`] is independent.
pub struct Api {
	key: String,
	endpoint: String,
	agent: Agent,
}

impl Api {
	pub fn new(key: &str) -> Self {
		Self::with_endpoint(key, ENDPOINT)
	}

	pub fn with_endpoint(key: &str, endpoint: &str) -> Self {
		let agent = build_agent(endpoint, TIMEOUT);

		Self {
			key: key.to_string(),
			endpoint: endpoint.to_string(),
			agent,
		}
	}

	#[cfg(test)]
	fn with_timeout(self, timeout: Duration) -> Self {
		let agent = build_agent(&self.endpoint, timeout);

		Self {
			agent,
			..self
		}
	}

	/// Sends one GraphQL operation.
	///
	/// Returns `(true, body)` when the decoded body has no top-level
	/// `errors` key, `(false, body)` when it does, and
	/// `(false, {"error": "..."})` when the request, decompression or
	/// parsing fails.
	pub fn send(
		&self,
		operation: &str,
		variables: &Map<String, Value>,
		query: &str,
	) -> (bool, Value) {
		let request = GraphQLRequest::new(operation, query, variables);

		let response = match self.request(&request) {
			Ok(response) => response,
			Err(err) => {
				debug!("operation `{}` failed: {:#}", operation, err);
				return (false, json!({ "error": err.to_string() }));
			}
		};

		if response.get("errors").is_some() {
			return (false, response);
		}

		(true, response)
	}

	fn request(&self, request: &GraphQLRequest) -> Result<Value> {
		let body = request.to_ascii_json()?;

		debug!("request body: {}", String::from_utf8_lossy(&body));

		let response = self
			.agent
			.post(&self.endpoint)
			.set("Content-Type", "application/json")
			.set("Accept-Encoding", "gzip, deflate, br")
			.set("X-api-key", &self.key)
			.send_bytes(&body)?;

		let mut compressed = Vec::new();
		response.into_reader().read_to_end(&mut compressed)?;

		let mut decompressed = Vec::new();
		MultiGzDecoder::new(compressed.as_slice())
			.read_to_end(&mut decompressed)?;

		let value: Value =
			serde_json::from_str(&String::from_utf8_lossy(&decompressed))?;

		debug!("response: {:#}", value);

		Ok(value)
	}
}
