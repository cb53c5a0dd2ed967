//! Steam game path resolution, powered by *steamlocate*.

use std::path::PathBuf;

use steamlocate::SteamDir;

use crate::{prelude::*, structs::spec::StoreKind};

use super::GameStore;

/// Finds games in any of the local Steam installation's library folders.
pub struct SteamStore;

impl GameStore for SteamStore {
	fn kind(&self) -> StoreKind {
		StoreKind::Steam
	}

	fn find(&self, id: &StoreAppId) -> AppResult<Option<PathBuf>> {
		let StoreAppId::Steam(app_id) = id else { return Ok(None) };

		let steam_dir = SteamDir::locate().map_err(DiscoveryError::Steam)?;

		let Some((app, library)) = steam_dir.find_app(*app_id).map_err(DiscoveryError::Steam)? else {
			return Ok(None);
		};

		let path = library.resolve_app_dir(&app);

		// Steam keeps manifests around for games that were deleted by hand.
		if !path.exists() {
			debug!("Steam lists app {app_id} at '{}', but that path is missing.", path.display());
			return Ok(None);
		}

		Ok(Some(path))
	}
}
