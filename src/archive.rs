//! This module builds the archives used when repacking loose mods.

use std::{fs::{self, File}, io, path::{Path, PathBuf}};

use walkdir::WalkDir;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::prelude::*;

/// Options that change how an archive is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArchiveOptions {
	/// If set, directories are added along with everything inside them.
	pub recursive: bool,
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self { recursive: true }
    }
}

/// Something capable of packing files into a new archive.
pub trait Archiver {
	/// Builds a new archive at *archive_path* containing the provided entries.
	/// Each entry is stored under its own file name, so entries from the same directory end up at the archive's root.
	fn create_archive(&self, archive_path: &Path, entries: &[PathBuf], options: ArchiveOptions) -> AppResult<()>;
}

/// Builds deflate-compressed zip archives.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZipArchiver;

impl Archiver for ZipArchiver {
	fn create_archive(&self, archive_path: &Path, entries: &[PathBuf], options: ArchiveOptions) -> AppResult<()> {
		info!("Packing {} entries into '{}'.", entries.len(), archive_path.display());

		let result = write_zip(archive_path, entries, options);

		// A half-written archive would otherwise be picked up by the host's copy step.
		if result.is_err() && archive_path.exists() {
			if let Err(error) = fs::remove_file(archive_path) {
				warn!("Failed to remove partial archive '{}': {error}", archive_path.display());
			}
		}

		result
	}
}

fn write_zip(archive_path: &Path, entries: &[PathBuf], options: ArchiveOptions) -> AppResult<()> {
	let mut zip = ZipWriter::new(File::create(archive_path)?);

	// Some mods hold single files larger than 4GB, so zip64 is always enabled.
	let file_options = SimpleFileOptions::default()
		.compression_method(CompressionMethod::Deflated)
		.large_file(true);

	for entry in entries {
		if entry == archive_path {
			debug!("Skipping '{}', as it is the archive being built.", entry.display());
			continue;
		}

		// Names are relative to the entry's parent, so the entry itself is kept.
		let root = entry.parent().unwrap_or(Path::new(""));

		if entry.is_dir() && options.recursive {
			// Symlinked folders are packed as their contents, like top-level entries are.
			for item in WalkDir::new(entry).follow_links(true).sort_by_file_name() {
				let item = item?;
				add_path(&mut zip, root, item.path(), item.file_type().is_dir(), file_options)?;
			}
		}

		else {
			add_path(&mut zip, root, entry, entry.is_dir(), file_options)?;
		}
	}

	zip.finish()?;
	Ok(())
}

/// Adds a single file or empty directory to the archive.
/// File contents are streamed, as mods can be far larger than available memory.
fn add_path(zip: &mut ZipWriter<File>, root: &Path, path: &Path, is_dir: bool, options: SimpleFileOptions) -> AppResult<()> {
	let name = entry_name(root, path);

	if is_dir {
		zip.add_directory(name, options)?;
		return Ok(());
	}

	debug!("Adding '{name}' to archive.");
	zip.start_file(name, options)?;
	let mut source = File::open(path)?;
	io::copy(&mut source, zip)?;

	Ok(())
}

/// Builds an archive entry's name, which always uses forward slashes.
fn entry_name(root: &Path, path: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.components()
		.map(|c| c.as_os_str().to_string_lossy())
		.join("/")
}
