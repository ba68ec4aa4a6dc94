use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::json::JsonContent;

#[derive(Deserialize, Serialize, Default)]
struct ConfigContent {
	key: Option<String>,
}

impl JsonContent for ConfigContent {}

pub struct Config {
	path: PathBuf,
	content: ConfigContent,
}

impl Config {
	const FILE_NAME: &'static str = "config.json";

	pub fn new(root_dir: &Path) -> Result<Self> {
		let path = root_dir.join(Self::FILE_NAME);
		let content = ConfigContent::load(&path)?;

		Ok(Self { path, content })
	}

	pub fn save(&self) -> Result<()> {
		self.content.save(&self.path)
	}

	pub fn set_key(&mut self, key: &str) {
		self.content.key = Some(key.to_string());
	}

	pub fn key(&self) -> Option<&str> {
		self.content.key.as_deref()
	}
}
