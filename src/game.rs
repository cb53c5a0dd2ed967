//! This module contains the callbacks the host uses to find, set up, and launch the game.

use std::{fs, io, path::{Path, PathBuf}};

use crate::{
	prelude::*,
	store::GameStoreHelper,
	structs::{descriptor::{LaunchParameter, LauncherInfo}, spec::{StoreKind, EXECUTABLE, GAME_NAME, VERSION_FILE, XBOX_APP_ID, XBOX_EXEC_NAME}},
};

/// Finds the game's root by searching every storefront it is sold on.
pub fn find_game(data: &GameData) -> AppResult<PathBuf> {
	find_game_with(&GameStoreHelper::default(), data)
}

/// Same as *find_game*, but searches through the provided helper.
pub fn find_game_with(helper: &GameStoreHelper, data: &GameData) -> AppResult<PathBuf> {
	let entry = helper.find_by_app_ids(&data.store_ids)?;
	info!("Found {GAME_NAME} through {} at '{}'.", entry.store, entry.game_path.display());
	Ok(entry.game_path)
}

/// Returns the directory the game loads mods from.
pub fn query_mod_path(data: &GameData) -> PathBuf {
	data.mods_path.clone()
}

/// Returns the game's executable, relative to its root.
pub fn executable() -> &'static str {
	EXECUTABLE
}

/// Creates the mods directory if it's missing, and ensures it can be written to.
/// Running this on an already prepared game does nothing.
pub fn prepare_for_modding(data: &GameData) -> AppResult<()> {
	let path = &data.mods_path;

	fs::create_dir_all(path).map_err(|e| match e.kind() {
		io::ErrorKind::PermissionDenied => SetupError::NotWritable(path.clone()).into(),
		_ => AppError::IO(e),
	})?;

	if is_writable(path) { return Ok(()); }

	debug!("Mods directory '{}' is not writable, attempting to fix.", path.display());

	if grant_owner_write(path).is_err() || !is_writable(path) {
		return Err(SetupError::NotWritable(path.clone()).into());
	}

	Ok(())
}

/// Checks if a file can actually be created inside a directory.
/// Permission bits alone can't answer this, as they depend on who owns the directory.
fn is_writable(dir: &Path) -> bool {
	tempfile::NamedTempFile::new_in(dir).is_ok()
}

/// Gives the directory's owner write access, leaving every other bit alone.
#[cfg(unix)]
fn grant_owner_write(dir: &Path) -> io::Result<()> {
	use std::os::unix::fs::PermissionsExt;

	let mut permissions = fs::metadata(dir)?.permissions();
	permissions.set_mode(permissions.mode() | 0o200);
	fs::set_permissions(dir, permissions)
}

#[cfg(not(unix))]
fn grant_owner_write(dir: &Path) -> io::Result<()> {
	let mut permissions = fs::metadata(dir)?.permissions();

	#[allow(clippy::permissions_set_readonly_false)]
	permissions.set_readonly(false);

	fs::set_permissions(dir, permissions)
}

/// Checks if the game must be started through the Xbox app.
/// This is only the case when the Xbox app owns the installation at *game_path*.
pub fn requires_launcher(game_path: &Path) -> Option<LauncherInfo> {
	requires_launcher_with(&GameStoreHelper::default(), game_path)
}

/// Same as *requires_launcher*, but searches through the provided helper.
/// A failed lookup is treated the same as the game not being an Xbox install.
pub fn requires_launcher_with(helper: &GameStoreHelper, game_path: &Path) -> Option<LauncherInfo> {
	let ids = [StoreAppId::Xbox(XBOX_APP_ID.to_owned())];

	let entry = match helper.find_by_app_ids_in(&ids, StoreKind::Xbox) {
		Ok(entry) => entry,
		Err(error) => {
			debug!("No Xbox launcher needed for '{}': {error}", game_path.display());
			return None;
		},
	};

	let is_same_install = entry.game_path.to_string_lossy().to_lowercase()
		== game_path.to_string_lossy().to_lowercase();

	if !is_same_install { return None; }

	Some(LauncherInfo {
		launcher: StoreKind::Xbox,
		app_id: XBOX_APP_ID.to_owned(),
		parameters: vec![LaunchParameter::AppExecName(XBOX_EXEC_NAME.to_owned())],
	})
}

/// Reads the game's version from the 'VERSION' file in its root.
/// If that file can't be read, a warning is logged and *None* is returned.
pub fn get_game_version(discovery_path: &Path) -> Option<String> {
	let version_file = discovery_path.join(VERSION_FILE);

	match fs::read_to_string(&version_file) {
		Ok(version) => Some(version.trim().to_owned()),
		Err(error) => {
			warn!("Unable to determine game version for {GAME_NAME}. ({}: {error})", version_file.display());
			None
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::tests::FakeStore;

	fn xbox_helper(install: &str) -> GameStoreHelper {
		GameStoreHelper::new(vec![Box::new(FakeStore::new(
			StoreKind::Xbox,
			vec![(StoreAppId::Xbox(XBOX_APP_ID.to_owned()), install.into())],
		))])
	}

	#[test]
	fn game_is_found_through_stores() {
		let helper = GameStoreHelper::new(vec![Box::new(FakeStore::new(
			StoreKind::Steam,
			vec![(StoreAppId::Steam(787860), "/steam/Farming Simulator 19".into())],
		))]);

		let data = GameData::with_mods_path("/tmp/mods");
		assert_eq!(find_game_with(&helper, &data).unwrap(), PathBuf::from("/steam/Farming Simulator 19"));
	}

	#[test]
	fn missing_game_is_a_discovery_error() {
		let helper = GameStoreHelper::new(Vec::new());
		let data = GameData::with_mods_path("/tmp/mods");

		assert!(matches!(find_game_with(&helper, &data), Err(AppError::Discovery(DiscoveryError::NotFound(_)))));
	}

	#[test]
	fn mod_path_and_executable() {
		let data = GameData::with_mods_path("/docs/My Games/FarmingSimulator2019/mods");

		assert_eq!(query_mod_path(&data), data.mods_path);
		assert_eq!(executable(), "FarmingSimulator2019.exe");
	}

	#[test]
	fn setup_creates_mods_directory() {
		let dir = tempfile::tempdir().unwrap();
		let data = GameData::with_mods_path(dir.path().join("My Games/FarmingSimulator2019/mods"));

		prepare_for_modding(&data).unwrap();
		assert!(data.mods_path.is_dir());

		// Running it again shouldn't change anything.
		prepare_for_modding(&data).unwrap();
		assert!(data.mods_path.is_dir());
	}

	#[test]
	fn setup_fails_when_path_is_a_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("mods");
		fs::write(&path, "not a directory").unwrap();

		assert!(prepare_for_modding(&GameData::with_mods_path(path)).is_err());
	}

	#[cfg(unix)]
	#[test]
	fn setup_fixes_read_only_directory_for_owner_only() {
		use std::os::unix::fs::PermissionsExt;

		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("mods");
		fs::create_dir(&path).unwrap();
		fs::set_permissions(&path, fs::Permissions::from_mode(0o555)).unwrap();

		prepare_for_modding(&GameData::with_mods_path(&path)).unwrap();

		let mode = fs::metadata(&path).unwrap().permissions().mode();
		assert_eq!(mode & 0o022, 0, "group and others must not gain write access");
		assert!(fs::write(path.join("FS19_Tractor.zip"), "zip").is_ok());
	}

	#[test]
	fn xbox_install_requires_launcher() {
		let helper = xbox_helper("C:\\XboxGames\\Farming Simulator 19\\Content");
		let info = requires_launcher_with(&helper, Path::new("c:\\xboxgames\\farming simulator 19\\content")).unwrap();

		assert_eq!(info, LauncherInfo {
			launcher: StoreKind::Xbox,
			app_id: XBOX_APP_ID.to_owned(),
			parameters: vec![LaunchParameter::AppExecName("Game".to_owned())],
		});
	}

	#[test]
	fn other_install_needs_no_launcher() {
		let helper = xbox_helper("C:\\XboxGames\\Farming Simulator 19\\Content");
		assert_eq!(requires_launcher_with(&helper, Path::new("D:\\Steam\\steamapps\\common\\Farming Simulator 19")), None);
	}

	#[test]
	fn failed_lookup_needs_no_launcher() {
		let mut broken = FakeStore::new(StoreKind::Xbox, Vec::new());
		broken.fail = true;

		let helper = GameStoreHelper::new(vec![Box::new(broken)]);
		assert_eq!(requires_launcher_with(&helper, Path::new("C:\\Games\\FS19")), None);
	}

	#[test]
	fn version_is_trimmed() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("VERSION"), "1.7.1.0\r\n").unwrap();

		assert_eq!(get_game_version(dir.path()), Some("1.7.1.0".to_owned()));
	}

	#[test]
	fn missing_version_is_none() {
		let dir = tempfile::tempdir().unwrap();
		assert_eq!(get_game_version(dir.path()), None);
	}
}
