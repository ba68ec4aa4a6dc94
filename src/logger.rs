use std::io::Write;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use owo_colors::Stream;

use crate::colorize::Colorize;

pub fn init(debug: bool) {
	let env = Env::default().default_filter_or("warn");
	let mut builder = Builder::from_env(env);

	if debug {
		builder.filter_level(LevelFilter::Debug);
	}

	builder
		.format(|buf, record| {
			writeln!(
				buf,
				"[{}] {}",
				record.level().as_str().cyan(Stream::Stderr),
				record.args()
			)
		})
		.target(Target::Stderr)
		.init();
}
