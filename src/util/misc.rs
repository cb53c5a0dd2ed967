//! This module is the general place for utilities that don't need their own module.

use std::path::{Path, PathBuf};

use crate::prelude::*;

/// Replaces a path's prefix of '~' with the user's home directory.
/// If a path does not start with '~', this function will return a unchanged copy of that path instead.
pub fn replace_path_home_prefix(path: impl AsRef<Path>) -> AppResult<PathBuf> {
	let path = path.as_ref();

	let Ok(rest) = path.strip_prefix("~") else { return Ok(path.to_owned()); };

	let Some(home) = dirs::home_dir() else {
		let error = Notice::from_preset(NoticePreset::Error, "Setup")
			.add_field("Description", "Failed to retrieve the user's home directory.")
			.add_field("Suggestion", "Pass the mods directory as an absolute path.");

		return Err(AppError::Custom(error));
	};

	Ok(home.join(rest))
}
