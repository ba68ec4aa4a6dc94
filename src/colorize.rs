use owo_colors::{colors::xterm, OwoColorize, Stream};

pub trait Colorize {
	fn red(&self, stream: Stream) -> String;

	fn cyan(&self, stream: Stream) -> String;
}

impl Colorize for str {
	fn red(&self, stream: Stream) -> String {
		self.if_supports_color(stream, |v| v.fg::<xterm::UserRed>())
			.to_string()
	}

	fn cyan(&self, stream: Stream) -> String {
		self.if_supports_color(stream, |v| v.fg::<xterm::UserCyan>())
			.to_string()
	}
}
