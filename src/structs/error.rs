//! This module contains the errors used all over this codebase.

use std::{io, path::PathBuf};

use crate::prelude::*;

/// Convenience wrapper around *Result<T, AppError>*.
pub type AppResult<T> = Result<T, AppError>;

/// Error returned by several functions in this crate.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error returned by failing IO operations.
    /// Most of these will occur during filesystem interactions.
    #[error(transparent)]
    IO(#[from] io::Error),

	/// Error returned while writing a mod archive.
	#[error(transparent)]
	Zip(#[from] zip::result::ZipError),

	/// Error returned while recursively walking a directory.
	#[error(transparent)]
	Walk(#[from] walkdir::Error),

	/// Error returned when a store's metadata could not be parsed.
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// Error returned when the game's installation could not be found.
	#[error(transparent)]
	Discovery(DiscoveryError),

	/// Error returned while preparing the game for modding.
	#[error(transparent)]
	Setup(SetupError),

	/// Error returned while planning a mod's installation.
	#[error(transparent)]
	Install(InstallError),

	/// Custom error that simply wraps a *Notice*.
	#[error("{0}")]
	Custom(Notice),

    /// Error converted from any error that does not have a matching *AppError* variant.
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

/// An error returned while searching the storefronts for the game.
#[derive(Error, Debug)]
pub enum DiscoveryError {
	/// None of the game's store IDs matched an installed game.
	#[error("No installation found for any of these store IDs: {}", .0.iter().join(", "))]
	NotFound(Vec<StoreAppId>),

	/// Steam itself could not be located or queried.
	#[error(transparent)]
	Steam(#[from] steamlocate::Error),
}

/// An error returned while getting the game ready to accept mods.
#[derive(Error, Debug)]
pub enum SetupError {
	/// The user's documents directory, which holds the mods directory, could not be found.
	#[error("Failed to locate the user's documents directory.")]
	MissingDocuments,

	/// The mods directory exists, but it cannot be written to.
	#[error("The mods directory '{}' is not writable.", .0.display())]
	NotWritable(PathBuf),
}

/// An error returned while planning how a mod is installed.
#[derive(Error, Debug)]
pub enum InstallError {
	/// The staging path has no final component to derive an archive name from.
	#[error("The staging path '{}' does not name a directory.", .0.display())]
	InvalidStagingPath(PathBuf),
}

impl From<DiscoveryError> for AppError {
    fn from(value: DiscoveryError) -> Self {
        AppError::Discovery(value)
    }
}

impl From<SetupError> for AppError {
    fn from(value: SetupError) -> Self {
        AppError::Setup(value)
    }
}

impl From<InstallError> for AppError {
    fn from(value: InstallError) -> Self {
        AppError::Install(value)
    }
}
