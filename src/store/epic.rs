//! Epic Games Store lookup.
//! The launcher writes one JSON manifest per installed game, so finding a game is just a matter of reading those.

use std::{env, ffi::OsStr, fs, path::{Path, PathBuf}};

use serde::Deserialize;

use crate::{prelude::*, structs::spec::StoreKind};

use super::GameStore;

/// The parts of an Epic manifest ('*.item') that matter here.
#[derive(Deserialize, Debug)]
struct EpicManifest {
	#[serde(rename = "AppName")]
	app_name: String,

	#[serde(rename = "InstallLocation")]
	install_location: PathBuf,
}

/// Finds games installed through the Epic Games Launcher.
pub struct EpicStore {
	/// The directory holding the launcher's manifests.
	manifest_dir: PathBuf,
}

impl Default for EpicStore {
	fn default() -> Self {
		let program_data = env::var_os("PROGRAMDATA")
			.map(PathBuf::from)
			.unwrap_or_else(|| PathBuf::from("C:\\ProgramData"));

		Self::new(program_data.join("Epic").join("EpicGamesLauncher").join("Data").join("Manifests"))
	}
}

impl EpicStore {
	/// Builds a store that reads manifests from a custom directory.
	pub fn new(manifest_dir: impl Into<PathBuf>) -> Self {
		Self { manifest_dir: manifest_dir.into() }
	}
}

impl GameStore for EpicStore {
	fn kind(&self) -> StoreKind {
		StoreKind::Epic
	}

	fn find(&self, id: &StoreAppId) -> AppResult<Option<PathBuf>> {
		let StoreAppId::Epic(app_name) = id else { return Ok(None) };

		// No manifest directory simply means the launcher isn't installed.
		if !self.manifest_dir.is_dir() { return Ok(None); }

		let manifests = fs::read_dir(&self.manifest_dir)?
			.filter_map(|r| r.ok())
			.map(|e| e.path())
			.filter(|p| p.extension() == Some(OsStr::new("item")))
			.sorted();

		for path in manifests {
			// A single broken manifest shouldn't hide every other game.
			let manifest = match read_manifest(&path) {
				Ok(manifest) => manifest,
				Err(error) => {
					warn!("Skipping unreadable Epic manifest '{}': {error}", path.display());
					continue;
				},
			};

			if manifest.app_name == *app_name {
				return Ok(Some(manifest.install_location));
			}
		}

		Ok(None)
	}
}

fn read_manifest(path: &Path) -> AppResult<EpicManifest> {
	let text = fs::read_to_string(path)?;
	let manifest = serde_json::from_str(&text)?;
	Ok(manifest)
}
