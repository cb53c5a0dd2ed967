//! This module defines the fixed facts about Farming Simulator 19.
//! Everything the host needs to recognize the game lives here as constants.

use std::fmt::Display;

/// The game's domain on the Nexus, which doubles as its identifier with the host.
pub const GAME_ID: &str = "farmingsimulator19";

/// The game's display name.
pub const GAME_NAME: &str = "Farming Simulator 19";

/// The game's executable, relative to its root.
pub const EXECUTABLE: &str = "FarmingSimulator2019.exe";

/// Files that must exist in a directory for it to be considered the game's root.
pub const REQUIRED_FILES: &[&str] = &[EXECUTABLE];

/// Artwork shown by the host for this game.
pub const LOGO: &str = "gameart.jpg";

/// Steam application ID, as listed on SteamDB.
pub const STEAM_APP_ID: u32 = 787860;

/// Epic Games Store application name.
pub const EPIC_APP_ID: &str = "Stellula";

/// Xbox app package family prefix.
pub const XBOX_APP_ID: &str = "FocusHomeInteractiveSA.FarmingSimulator19-Window10";

/// Identifier of this crate's installer.
pub const INSTALLER_ID: &str = "farmingsimulator-mod";

/// Priority of this crate's installer, where lower values are tried first by the host.
pub const INSTALLER_PRIORITY: u32 = 25;

/// Extension of the archives the game loads mods from.
/// This is compared against a path's extension, so it has no leading dot.
pub const MOD_EXT: &str = "zip";

/// Suffix the host appends to staging directories while an install is in progress.
pub const STAGING_MARKER: &str = ".installing";

/// Name of the file in the game's root that holds its version.
pub const VERSION_FILE: &str = "VERSION";

/// Executable name handed to the Xbox app when it launches the game.
pub const XBOX_EXEC_NAME: &str = "Game";

/// The storefronts this game can be bought on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StoreKind {
	Steam,
	Epic,
	Xbox,
}

impl Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			StoreKind::Steam => "steam",
			StoreKind::Epic => "epic",
			StoreKind::Xbox => "xbox",
		};

		write!(f, "{name}")
    }
}

/// An application identifier on a specific store.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StoreAppId {
	/// A numeric Steam app ID.
	Steam(u32),

	/// An Epic Games Store app name.
	Epic(String),

	/// An Xbox app package family name, or a prefix of one.
	Xbox(String),
}

impl StoreAppId {
	/// Returns the store this ID belongs to.
	pub fn kind(&self) -> StoreKind {
		match self {
			StoreAppId::Steam(_) => StoreKind::Steam,
			StoreAppId::Epic(_) => StoreKind::Epic,
			StoreAppId::Xbox(_) => StoreKind::Xbox,
		}
	}
}

impl Display for StoreAppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
			StoreAppId::Steam(id) => write!(f, "{id} ({})", self.kind()),
			StoreAppId::Epic(id) | StoreAppId::Xbox(id) => write!(f, "{id} ({})", self.kind()),
		}
    }
}

/// Builds the store IDs for this game in the order they should be searched.
pub fn default_store_ids() -> Vec<StoreAppId> {
	vec![
		StoreAppId::Epic(EPIC_APP_ID.to_owned()),
		StoreAppId::Steam(STEAM_APP_ID),
		StoreAppId::Xbox(XBOX_APP_ID.to_owned()),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn store_ids_follow_search_order() {
		let kinds: Vec<StoreKind> = default_store_ids().iter().map(StoreAppId::kind).collect();
		assert_eq!(kinds, vec![StoreKind::Epic, StoreKind::Steam, StoreKind::Xbox]);
	}

	#[test]
	fn store_id_display_names_its_store() {
		assert_eq!(StoreAppId::Steam(STEAM_APP_ID).to_string(), "787860 (steam)");
		assert_eq!(StoreAppId::Epic(EPIC_APP_ID.to_owned()).to_string(), "Stellula (epic)");
	}
}
