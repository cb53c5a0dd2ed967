//! Xbox app (Microsoft Store) lookup.
//! Packaged apps are listed in the registry's AppModel repository, which only exists on Windows.

use std::path::PathBuf;

use crate::{prelude::*, structs::spec::StoreKind};

use super::GameStore;

/// Finds games installed through the Xbox app.
pub struct XboxStore;

impl GameStore for XboxStore {
	fn kind(&self) -> StoreKind {
		StoreKind::Xbox
	}

	fn find(&self, id: &StoreAppId) -> AppResult<Option<PathBuf>> {
		let StoreAppId::Xbox(app_id) = id else { return Ok(None) };
		find_package(app_id)
	}
}

#[cfg(windows)]
fn find_package(app_id: &str) -> AppResult<Option<PathBuf>> {
	use anyhow::Context;
	use winreg::{enums::HKEY_CLASSES_ROOT, RegKey};

	const REPOSITORY: &str = r"Local Settings\Software\Microsoft\Windows\CurrentVersion\AppModel\Repository\Packages";

	let repository = RegKey::predef(HKEY_CLASSES_ROOT).open_subkey(REPOSITORY)?;

	// Full package names look like '<app id>_<version>_<arch>__<publisher hash>'.
	let Some(package) = repository.enum_keys()
		.filter_map(|r| r.ok())
		.find(|name| name.starts_with(app_id)) else {
			return Ok(None);
		};

	let root: String = repository.open_subkey(&package)?
		.get_value("PackageRootFolder")
		.with_context(|| format!("Xbox package '{package}' has no root folder"))?;

	let path = PathBuf::from(root);
	if !path.exists() {
		debug!("Xbox package '{package}' points to missing path '{}'.", path.display());
		return Ok(None);
	}

	Ok(Some(path))
}

#[cfg(not(windows))]
fn find_package(app_id: &str) -> AppResult<Option<PathBuf>> {
	debug!("Skipping Xbox lookup for {app_id}, as the Xbox app only exists on Windows.");
	Ok(None)
}
