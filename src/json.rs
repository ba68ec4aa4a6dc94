use std::path::Path;

use anyhow::Result;
use fs_err as fs;
use serde::{de::DeserializeOwned, Serialize};

/// A value persisted as a pretty-printed JSON file.
pub trait JsonContent
where
	Self: DeserializeOwned + Serialize + Default,
{
	/// Missing or empty files yield `Default`, which is written back.
	fn load(file_path: &Path) -> Result<Self> {
		if file_path.exists() {
			let content = fs::read_to_string(file_path)?;
			if !content.trim().is_empty() {
				return Ok(serde_json::from_str(&content)?);
			}
		}

		let default = Self::default();
		default.save(file_path)?;

		Ok(default)
	}

	fn save(&self, file_path: &Path) -> Result<()> {
		fs::write(file_path, serde_json::to_string_pretty(self)?)?;

		Ok(())
	}
}
