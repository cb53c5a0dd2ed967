//! This module decides how a staged mod is installed.
//!
//! # Summary of Install Process
//! 1. Look for zip archives among the staged files.
//! 2. If there are any, each one is copied as-is to the root of the mod's folder.
//! 3. Otherwise, everything in the staging directory is packed into a new archive named after the mod, and only that archive is copied.
//!
//! Loose files are never copied one by one, as the host cannot copy very large files through its own instructions.

use std::{ffi::OsStr, fs, path::{Path, PathBuf}};

use walkdir::WalkDir;

use crate::{
	archive::{ArchiveOptions, Archiver, ZipArchiver},
	prelude::*,
	structs::{descriptor::{CopyInstruction, InstallPlan, SupportedResult}, spec::{GAME_ID, MOD_EXT, STAGING_MARKER}},
};

/// Checks if the installer should handle content for the provided game.
/// The content itself is never inspected.
pub fn test_supported_content(_files: &[PathBuf], game_id: &str) -> SupportedResult {
	SupportedResult {
		supported: game_id == GAME_ID,
		required_files: Vec::new(),
	}
}

/// Plans the installation of a staged mod, repacking it with the default zip archiver when needed.
pub fn install_content(files: &[PathBuf], staging: &Path) -> AppResult<InstallPlan> {
	plan_install(&ZipArchiver, files, staging)
}

/// Plans the installation of a staged mod.
///
/// # Parameters
/// *archiver* - Used to repack loose files. It is called at most once.
/// *files* - Every file extracted from the mod.
/// *staging* - The directory holding the extracted files.
pub fn plan_install(archiver: &impl Archiver, files: &[PathBuf], staging: &Path) -> AppResult<InstallPlan> {
	let archives = files.iter()
		.filter(|f| f.extension() == Some(OsStr::new(MOD_EXT)))
		.collect_vec();

	// The mod was already zipped, so there's nothing to repack.
	if !archives.is_empty() {
		debug!("Found {} prebuilt archive(s), skipping repack.", archives.len());

		let instructions = archives.into_iter()
			.filter_map(|f| f.file_name().map(|name| CopyInstruction::copy(f, name)))
			.collect();

		return Ok(InstallPlan { instructions });
	}

	let name = archive_name(staging)?;
	let archive_path = staging.join(&name);

	let entries = fs::read_dir(staging)?
		.map(|r| r.map(|e| e.path()))
		.collect::<Result<Vec<_>, _>>()?
		.tap_mut(|e| e.sort());

	archiver.create_archive(&archive_path, &entries, ArchiveOptions { recursive: true })?;
	info!("Repacked loose files into '{name}'.");

	Ok(InstallPlan { instructions: vec![CopyInstruction::copy(&name, &name)] })
}

/// Lists every file under the staging directory, the way the host passes them to the installer.
/// Any entry that can't be read fails the whole listing, so a plan is never made from partial content.
pub fn staged_files(staging: &Path) -> AppResult<Vec<PathBuf>> {
	let files = WalkDir::new(staging)
		.sort_by_file_name()
		.into_iter()
		.filter_ok(|e| e.file_type().is_file())
		.map_ok(|e| e.into_path())
		.collect::<Result<_, _>>()?;

	Ok(files)
}

/// Derives the name of the archive a loose mod is repacked into.
/// This is the staging directory's name, minus the host's in-progress marker, with the archive extension added.
pub fn archive_name(staging: &Path) -> AppResult<String> {
	let Some(dir_name) = staging.file_name() else {
		return Err(InstallError::InvalidStagingPath(staging.to_owned()).into());
	};

	let dir_name = dir_name.to_string_lossy();

	// A directory named only after the marker keeps its name.
	let stem = match dir_name.strip_suffix(STAGING_MARKER) {
		Some(stem) if !stem.is_empty() => stem,
		_ => dir_name.as_ref(),
	};

	Ok(format!("{stem}.{MOD_EXT}"))
}

#[cfg(test)]
pub(crate) mod tests {
	use std::cell::RefCell;

	use super::*;

	/// An archiver that records its calls instead of writing anything.
	#[derive(Default)]
	pub struct RecordingArchiver {
		pub calls: RefCell<Vec<(PathBuf, Vec<PathBuf>, ArchiveOptions)>>,
	}

	impl Archiver for RecordingArchiver {
		fn create_archive(&self, archive_path: &Path, entries: &[PathBuf], options: ArchiveOptions) -> AppResult<()> {
			self.calls.borrow_mut().push((archive_path.to_owned(), entries.to_vec(), options));
			Ok(())
		}
	}

	/// An archiver that always fails, like one running on a full disk.
	pub struct FailingArchiver;

	impl Archiver for FailingArchiver {
		fn create_archive(&self, _: &Path, _: &[PathBuf], _: ArchiveOptions) -> AppResult<()> {
			Err(std::io::Error::new(std::io::ErrorKind::Other, "no space left on device").into())
		}
	}

	#[test]
	fn content_test_only_checks_game_id() {
		let files = vec![PathBuf::from("mod.zip"), PathBuf::from("readme.txt")];

		assert_eq!(test_supported_content(&files, "farmingsimulator19"), SupportedResult { supported: true, required_files: Vec::new() });
		assert_eq!(test_supported_content(&[], "farmingsimulator19"), SupportedResult { supported: true, required_files: Vec::new() });
		assert!(!test_supported_content(&files, "farmingsimulator22").supported);
		assert!(test_supported_content(&files, "skyrimse").required_files.is_empty());
	}

	#[test]
	fn archive_name_strips_marker() {
		assert_eq!(archive_name(Path::new("/tmp/ModName.installing")).unwrap(), "ModName.zip");
		assert_eq!(archive_name(Path::new("/tmp/ModName")).unwrap(), "ModName.zip");
		assert_eq!(archive_name(Path::new("/tmp/ModName.installing/")).unwrap(), "ModName.zip");
	}

	#[test]
	fn archive_name_only_strips_trailing_marker() {
		assert_eq!(archive_name(Path::new("/tmp/My.installing.Mod")).unwrap(), "My.installing.Mod.zip");
		assert_eq!(archive_name(Path::new("/tmp/.installing")).unwrap(), ".installing.zip");
	}

	#[test]
	fn archive_name_needs_a_directory() {
		assert!(matches!(archive_name(Path::new("/")), Err(AppError::Install(InstallError::InvalidStagingPath(_)))));
	}

	#[test]
	fn prebuilt_archives_are_copied_flat() {
		let archiver = RecordingArchiver::default();
		let files = vec![
			PathBuf::from("/stage/Pack/FS19_Tractor.zip"),
			PathBuf::from("/stage/Pack/readme.txt"),
			PathBuf::from("/stage/Pack/extras/FS19_Trailer.zip"),
		];

		let plan = plan_install(&archiver, &files, Path::new("/stage/Pack.installing")).unwrap();

		assert_eq!(plan.instructions, vec![
			CopyInstruction::copy("/stage/Pack/FS19_Tractor.zip", "FS19_Tractor.zip"),
			CopyInstruction::copy("/stage/Pack/extras/FS19_Trailer.zip", "FS19_Trailer.zip"),
		]);
		assert!(archiver.calls.borrow().is_empty());
	}

	#[test]
	fn only_exact_zip_extension_counts_as_archive() {
		let dir = tempfile::tempdir().unwrap();
		let staging = dir.path().join("Loud.installing");
		fs::create_dir(&staging).unwrap();
		fs::write(staging.join("MOD.ZIP"), "zip?").unwrap();

		let archiver = RecordingArchiver::default();
		let files = vec![staging.join("MOD.ZIP"), PathBuf::from("/stage/.zip")];
		let plan = plan_install(&archiver, &files, &staging).unwrap();

		assert_eq!(plan.instructions, vec![CopyInstruction::copy("Loud.zip", "Loud.zip")]);
		assert_eq!(archiver.calls.borrow().len(), 1);
	}

	#[test]
	fn loose_files_are_repacked_once() {
		let dir = tempfile::tempdir().unwrap();
		let staging = dir.path().join("ModName.installing");
		fs::create_dir_all(staging.join("data")).unwrap();
		fs::write(staging.join("readme.txt"), "hi").unwrap();
		fs::write(staging.join("data/crops.xml"), "<crops/>").unwrap();

		let archiver = RecordingArchiver::default();
		let files = vec![staging.join("readme.txt"), staging.join("data/crops.xml")];
		let plan = plan_install(&archiver, &files, &staging).unwrap();

		assert_eq!(plan.instructions, vec![CopyInstruction::copy("ModName.zip", "ModName.zip")]);

		let calls = archiver.calls.borrow();
		assert_eq!(calls.len(), 1);

		let (archive_path, entries, options) = &calls[0];
		assert_eq!(archive_path, &staging.join("ModName.zip"));
		assert_eq!(entries, &vec![staging.join("data"), staging.join("readme.txt")]);
		assert!(options.recursive);
	}

	#[test]
	fn archiver_failure_propagates() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("readme.txt"), "hi").unwrap();

		let result = plan_install(&FailingArchiver, &[], dir.path());
		assert!(matches!(result, Err(AppError::IO(_))));
	}

	#[test]
	fn staged_files_are_listed_in_order() {
		let dir = tempfile::tempdir().unwrap();
		fs::create_dir_all(dir.path().join("data")).unwrap();
		fs::write(dir.path().join("readme.txt"), "hi").unwrap();
		fs::write(dir.path().join("data/crops.xml"), "<crops/>").unwrap();

		assert_eq!(staged_files(dir.path()).unwrap(), vec![dir.path().join("data/crops.xml"), dir.path().join("readme.txt")]);
	}

	#[test]
	fn unreadable_staging_fails_listing() {
		let dir = tempfile::tempdir().unwrap();
		assert!(matches!(staged_files(&dir.path().join("Gone.installing")), Err(AppError::Walk(_))));
	}

	#[test]
	fn missing_staging_directory_propagates() {
		let dir = tempfile::tempdir().unwrap();
		let archiver = RecordingArchiver::default();

		let result = plan_install(&archiver, &[], &dir.path().join("Gone.installing"));

		assert!(matches!(result, Err(AppError::IO(_))));
		assert!(archiver.calls.borrow().is_empty());
	}
}
