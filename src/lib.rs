//! Support for Farming Simulator 19 in a host mod manager.
//! The host calls *register* once, then drives everything through the returned descriptors.

pub mod archive;
pub mod game;
pub mod installer;
pub mod prelude;
pub mod store;
pub mod structs;
pub mod util;


use crate::{
	prelude::*,
	structs::{
		descriptor::{GameDescriptor, InstallerDescriptor, Registration},
		spec::{EPIC_APP_ID, GAME_ID, GAME_NAME, INSTALLER_ID, INSTALLER_PRIORITY, LOGO, REQUIRED_FILES, STEAM_APP_ID, XBOX_APP_ID},
	},
};

/// Builds everything this crate registers with the host.
pub fn register() -> Registration {
	let game = GameDescriptor {
		id: GAME_ID,
		name: GAME_NAME,
		merge_mods: true,
		supported_tools: Vec::new(),
		logo: LOGO,
		required_files: REQUIRED_FILES.to_vec(),

		environment: IndexMap::from([
			("SteamAPPId", STEAM_APP_ID.to_string()),
		]),

		details: IndexMap::from([
			("steamAppId", STEAM_APP_ID.to_string()),
			("epicAppId", EPIC_APP_ID.to_owned()),
			("xboxAppId", XBOX_APP_ID.to_owned()),
		]),

		query_path: game::find_game,
		query_mod_path: game::query_mod_path,
		executable: game::executable,
		setup: game::prepare_for_modding,
		requires_launcher: game::requires_launcher,
		get_game_version: game::get_game_version,
	};

	let installer = InstallerDescriptor {
		id: INSTALLER_ID,
		priority: INSTALLER_PRIORITY,
		test_supported: installer::test_supported_content,
		install: installer::install_content,
	};

	debug!("Registering {GAME_NAME} with installer '{INSTALLER_ID}'.");
	Registration { game, installer }
}
