//! This module defines the configuration shared by every callback in this crate.

use std::path::{Path, PathBuf};

use crate::{prelude::*, structs::spec::default_store_ids};

/// Configuration for the game, built once at startup and passed around by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameData {
    /// The IDs this game is searched for under, in order.
    pub store_ids: Vec<StoreAppId>,

    /// The directory the game loads mods from.
	/// Unlike most games, this is in the user's documents rather than the game's root.
    pub mods_path: PathBuf,
}

impl GameData {
	/// Builds the default configuration, which places mods under the user's documents directory.
	pub fn new() -> AppResult<Self> {
		let Some(documents) = dirs::document_dir() else {
			return Err(SetupError::MissingDocuments.into());
		};

		Ok(Self::with_mods_path(default_mods_path(documents)))
	}

	/// Builds a configuration that uses a custom mods directory.
	pub fn with_mods_path(mods_path: impl Into<PathBuf>) -> Self {
		Self {
			store_ids: default_store_ids(),
			mods_path: mods_path.into(),
		}
	}
}

/// Returns where the game expects its mods, relative to the provided documents directory.
pub fn default_mods_path(documents: impl AsRef<Path>) -> PathBuf {
	documents.as_ref()
		.join("My Games")
		.join("FarmingSimulator2019")
		.join("mods")
}
