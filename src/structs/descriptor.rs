//! This module defines the values exchanged with the host.
//! The descriptors are plain data: callbacks are stored as function pointers.

use std::{fmt::Display, path::{Path, PathBuf}};

use crate::{prelude::*, structs::spec::StoreKind};

/// The kind of a single install instruction.
/// Only copies are ever produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionKind {
	Copy,
}

/// A request for the host to copy one file into the mod's final folder.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CopyInstruction {
	pub kind: InstructionKind,

	/// Path of the file to copy.
	/// This is either absolute or relative to the staging directory.
	pub source: PathBuf,

	/// Path of the copy, relative to the mod's final folder.
	pub destination: PathBuf,
}

impl CopyInstruction {
	/// Builds a new copy instruction.
	pub fn copy(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
		Self {
			kind: InstructionKind::Copy,
			source: source.into(),
			destination: destination.into(),
		}
	}
}

impl Display for CopyInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "copy '{}' -> '{}'", self.source.display(), self.destination.display())
    }
}

/// The ordered instructions the host executes to install a mod.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstallPlan {
	pub instructions: Vec<CopyInstruction>,
}

/// Answer to the host asking if this crate's installer can handle some content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SupportedResult {
	pub supported: bool,

	/// Files the installer needs beyond the ones it was shown.
	pub required_files: Vec<PathBuf>,
}

/// A parameter passed to a launcher when starting the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LaunchParameter {
	/// The executable name registered with the Xbox app.
	AppExecName(String),
}

/// Tells the host that the game must be started through a store's launcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LauncherInfo {
	pub launcher: StoreKind,
	pub app_id: String,
	pub parameters: Vec<LaunchParameter>,
}

/// Describes the game to the host.
pub struct GameDescriptor {
	pub id: &'static str,
	pub name: &'static str,

	/// Whether every mod is deployed into a single shared folder.
	pub merge_mods: bool,

	/// Tools the host may offer to launch alongside the game.
	pub supported_tools: Vec<String>,

	pub logo: &'static str,
	pub required_files: Vec<&'static str>,

	/// Environment variables set when the game is started.
	pub environment: IndexMap<&'static str, String>,

	/// Store IDs and other details, keyed by the names the host expects.
	pub details: IndexMap<&'static str, String>,

	pub query_path: fn(&GameData) -> AppResult<PathBuf>,
	pub query_mod_path: fn(&GameData) -> PathBuf,
	pub executable: fn() -> &'static str,
	pub setup: fn(&GameData) -> AppResult<()>,
	pub requires_launcher: fn(&Path) -> Option<LauncherInfo>,
	pub get_game_version: fn(&Path) -> Option<String>,
}

/// Describes this crate's mod installer to the host.
pub struct InstallerDescriptor {
	pub id: &'static str,

	/// Lower priorities are tried first.
	pub priority: u32,

	/// Checks if the installer can handle content for the provided game ID.
	pub test_supported: fn(&[PathBuf], &str) -> SupportedResult,

	/// Plans the installation of a staged mod.
	pub install: fn(&[PathBuf], &Path) -> AppResult<InstallPlan>,
}

/// Everything this crate registers with the host.
pub struct Registration {
	pub game: GameDescriptor,
	pub installer: InstallerDescriptor,
}
