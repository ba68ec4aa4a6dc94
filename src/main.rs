mod cli;
mod colorize;
mod config;
mod json;
mod logger;

use std::process;

use anyhow::{Context, Result};
use cato_api::Api;
use clap::Parser;
use cli::{Cli, Command, KeyArgs, SendArgs};
use colorize::Colorize;
use config::Config;
use directories::BaseDirs;
use fs_err as fs;
use log::debug;
use owo_colors::Stream;

const ROOT_DIR_NAME: &str = ".cato";

fn main() {
	let result = run();

	if let Err(ref err) = result {
		eprintln!("{} {:#}", "error:".red(Stream::Stderr), err);
	}

	process::exit(exit_code(&result));
}

fn exit_code(result: &Result<bool>) -> i32 {
	match result {
		Ok(true) => 0,
		Ok(false) | Err(_) => 1,
	}
}

fn run() -> Result<bool> {
	let Cli {
		command,
		debug,
		key,
	} = Cli::parse();

	logger::init(debug);

	let Some(base_dirs) = BaseDirs::new() else {
		anyhow::bail!("Impossible to get your home dir");
	};

	let root_dir = base_dirs.home_dir().join(ROOT_DIR_NAME);

	if !root_dir.exists() {
		fs::create_dir_all(&root_dir)?;
	}

	debug!("root dir: {}", root_dir.display());

	let mut config = Config::new(&root_dir)?;

	match command {
		Command::Send(args) => {
			let api = Api::new(resolve_key(key.as_deref(), &config)?);
			send(args, &api)
		}
		Command::Key(args) => {
			set_or_display_key(&mut config, args)?;
			Ok(true)
		}
	}
}

/// `key` is `--key`, or `CATO_API_KEY` when the flag is absent.
fn resolve_key<'a>(
	key: Option<&'a str>,
	config: &'a Config,
) -> Result<&'a str> {
	let Some(key) = key.or_else(|| config.key()) else {
		anyhow::bail!(
			"No Cato API key configured, run `cato key <KEY>` or set \
			 CATO_API_KEY"
		);
	};

	Ok(key)
}

fn send(args: SendArgs, api: &Api) -> Result<bool> {
	debug!("args: {:#?}", args);

	let query = match (args.query, args.file) {
		(Some(query), _) => query,
		(None, Some(file)) => {
			fs::read_to_string(&file).with_context(|| {
				format!("Failed to read query from `{}`", file.display())
			})?
		}
		(None, None) => anyhow::bail!("No query document provided"),
	};

	let (success, payload) =
		api.send(&args.operation, &args.variables, &query);
	let output = serde_json::to_string_pretty(&payload)?;

	if success {
		println!("{}", output);
	} else {
		eprintln!("{}", "error".red(Stream::Stderr));
		eprintln!("{}", output);
	}

	Ok(success)
}

fn set_or_display_key(config: &mut Config, args: KeyArgs) -> Result<()> {
	match args.value {
		Some(key) => {
			config.set_key(&key);
			config.save()?;
		}
		None => {
			if let Some(key) = config.key() {
				println!("{}", key);
			}
		}
	}

	Ok(())
}
