use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
	#[command(subcommand)]
	pub command: Command,

	/// Use debug output
	#[arg(long, global = true)]
	pub debug: bool,

	/// Specify the Cato API key
	#[arg(long, global = true, env = "CATO_API_KEY", hide_env_values = true)]
	pub key: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
	/// Send a GraphQL operation to the Cato API
	Send(SendArgs),

	/// Configure or display your Cato API key
	Key(KeyArgs),
}

#[derive(Args, Debug)]
pub struct SendArgs {
	/// Name of the operation to execute
	pub operation: String,

	/// GraphQL query document
	#[arg(
		short,
		long,
		conflicts_with = "file",
		required_unless_present = "file"
	)]
	pub query: Option<String>,

	/// Read the query document from a file
	#[arg(short, long)]
	pub file: Option<PathBuf>,

	/// Operation variables, as a JSON object
	#[arg(long, default_value = "{}", value_parser = parse_variables)]
	pub variables: Map<String, Value>,
}

#[derive(Args, Debug)]
pub struct KeyArgs {
	#[arg(value_name = "KEY")]
	pub value: Option<String>,
}

fn parse_variables(s: &str) -> Result<Map<String, Value>, String> {
	match serde_json::from_str(s) {
		Ok(Value::Object(map)) => Ok(map),
		Ok(_) => Err("variables must be a JSON object".to_string()),
		Err(err) => Err(err.to_string()),
	}
}

#[cfg(test)]
mod tests {
	use std::env;

	use clap::{CommandFactory, Parser};
	use serde_json::json;
	use similar_asserts::assert_eq;

	use super::{parse_variables, Cli, Command};

	#[test]
	fn verify_cli() {
		Cli::command().debug_assert();
	}

	#[test]
	fn test_parse_variables() {
		let map =
			parse_variables(r#"{"accountID": "1234", "limit": 10}"#).unwrap();

		assert_eq!(map.len(), 2);
		assert_eq!(map["accountID"], json!("1234"));
		assert_eq!(map["limit"], json!(10));

		assert!(parse_variables("[1, 2]").is_err());
		assert!(parse_variables("{").is_err());
	}

	#[test]
	fn test_send_args() {
		let cli = Cli::try_parse_from([
			"cato",
			"send",
			"GetSites",
			"--query",
			"query GetSites { sites { id } }",
			"--variables",
			r#"{"accountID": "1234"}"#,
		])
		.unwrap();

		let Command::Send(args) = cli.command else {
			panic!("expected send command");
		};

		assert_eq!(args.operation, "GetSites");
		assert_eq!(
			args.query.as_deref(),
			Some("query GetSites { sites { id } }")
		);
		assert_eq!(args.file, None);
		assert_eq!(args.variables["accountID"], json!("1234"));
	}

	#[test]
	fn test_send_args_default_variables() {
		let cli = Cli::try_parse_from([
			"cato",
			"send",
			"GetSites",
			"-q",
			"query { x }",
		])
		.unwrap();

		let Command::Send(args) = cli.command else {
			panic!("expected send command");
		};

		assert!(args.variables.is_empty());
	}

	#[test]
	fn test_send_args_query_source() {
		assert!(Cli::try_parse_from(["cato", "send", "GetSites"]).is_err());
		assert!(Cli::try_parse_from([
			"cato",
			"send",
			"GetSites",
			"-q",
			"query { x }",
			"-f",
			"query.graphql",
		])
		.is_err());
	}

	#[test]
	fn test_key_from_env() {
		env::set_var("CATO_API_KEY", "from-env");

		let from_env =
			Cli::try_parse_from(["cato", "send", "GetSites", "-q", "q"])
				.unwrap();
		let from_flag = Cli::try_parse_from([
			"cato", "--key", "from-flag", "send", "GetSites", "-q", "q",
		])
		.unwrap();

		env::remove_var("CATO_API_KEY");

		assert_eq!(from_env.key.as_deref(), Some("from-env"));
		assert_eq!(from_flag.key.as_deref(), Some("from-flag"));
	}

	#[test]
	fn test_key_args() {
		let cli = Cli::try_parse_from(["cato", "key", "secret"]).unwrap();

		let Command::Key(args) = cli.command else {
			panic!("expected key command");
		};

		assert_eq!(args.value.as_deref(), Some("secret"));
	}
}
