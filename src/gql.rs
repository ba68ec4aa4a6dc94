use std::io;

use serde::Serialize;
use serde_json::{ser::Formatter, Map, Value};

/// The JSON body posted to the GraphQL endpoint.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest<'a> {
	pub operation_name: &'a str,
	pub query: &'a str,
	pub variables: &'a Map<String, Value>,
}

impl<'a> GraphQLRequest<'a> {
	pub fn new(
		operation_name: &'a str,
		query: &'a str,
		variables: &'a Map<String, Value>,
	) -> Self {
		Self {
			operation_name,
			query,
			variables,
		}
	}

	/// Compact JSON in which every non-ASCII character is written as a
	/// `\uXXXX` escape, so the body is plain 7-bit ASCII.
	pub fn to_ascii_json(&self) -> serde_json::Result<Vec<u8>> {
		let mut buf = Vec::new();
		let mut ser =
			serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
		self.serialize(&mut ser)?;

		Ok(buf)
	}
}

struct AsciiFormatter;

impl Formatter for AsciiFormatter {
	fn write_string_fragment<W>(
		&mut self,
		writer: &mut W,
		fragment: &str,
	) -> io::Result<()>
	where
		W: ?Sized + io::Write,
	{
		let mut start = 0;

		for (idx, ch) in fragment.char_indices() {
			if ch.is_ascii() {
				continue;
			}

			writer.write_all(fragment[start..idx].as_bytes())?;

			let mut units = [0u16; 2];
			for unit in ch.encode_utf16(&mut units) {
				write!(writer, "\\u{:04x}", unit)?;
			}

			start = idx + ch.len_utf8();
		}

		writer.write_all(fragment[start..].as_bytes())
	}
}
