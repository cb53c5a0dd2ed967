//! This module provides the *Notice* struct, which is used for pretty-printing warnings, errors, or other messages to users.

use std::{fmt::Display, io};

use crate::{prelude::*, util::text::{TextColor, TextStyle}};

/// Notices allow you to easily pretty-print warning, errors, and other various information.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Notice {
    color: TextColor,
    prefix: String,
    header: String,
    fields: Vec<(String, String)>,
}

/// Presets to use while making a notice, allowing you to quickly recreate common forms of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoticePreset {
	/// A red notice with the prefix "ERROR".
    Error,

	/// A yellow notice with the prefix "WARN".
    Warning,

	/// A green notice with the prefix "DONE".
	Success,

	/// A cyan notice with the prefix "INFO".
	Info,
}

impl Notice {
	/// Builds a new notice from raw components.
    pub fn new(color: TextColor, prefix: &str, header: &str) -> Self {
        Self {
            color,
            prefix: prefix.to_owned(),
            header: header.to_owned(),
            fields: Vec::new(),
        }
    }

	/// Builds a new notice from a preset and a header.
    pub fn from_preset(preset: NoticePreset, header: &str) -> Self {
        match preset {
            NoticePreset::Error => Notice::new(TextColor::Red, "ERROR", header),
            NoticePreset::Warning => Notice::new(TextColor::Yellow, "WARN", header),
			NoticePreset::Success => Notice::new(TextColor::Green, "DONE", header),
			NoticePreset::Info => Notice::new(TextColor::Cyan, "INFO", header),
        }
    }

	/// Adds a new field to this notice, which will be printed after any other fields.
	/// A field will be presented in the form of `"{label}: {content}"`.
	pub fn add_field(mut self, label: &str, content: &str) -> Self {
		self.fields.push((label.to_owned(), content.to_owned()));
		self
	}

	/// Returns the fields added to this notice, in order.
	pub fn fields(&self) -> &[(String, String)] {
		&self.fields
	}

	/// Convenience method to allow printing a notice at the end of a dot-call chain.
	pub fn print(self) {
		println!("{self}");
	}
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let title = format!("[{} - {}]", self.prefix, self.header).stylize(Some(TextStyle::Bold), Some(self.color));
        writeln!(f, "{title}")?;

		for (label, content) in self.fields.iter() {
			let label = format!("  {label}: ").stylize(Some(TextStyle::Bold), Some(self.color));
			writeln!(f, "{label}{content}")?;
		}

		Ok(())
    }
}

// Beyond this point is just conversions between errors and notices.

impl From<AppError> for Notice {
    fn from(value: AppError) -> Self {
        match value {
            AppError::IO(error) => error.into(),
			AppError::Discovery(error) => error.into(),
			AppError::Setup(error) => error.into(),
			AppError::Install(error) => error.into(),
			AppError::Custom(notice) => notice,

			AppError::Zip(error) => Notice::from_preset(NoticePreset::Error, "Archive")
				.add_field("Description", "Failed to write the mod's archive.")
				.add_field("Details", &error.to_string())
				.add_field("Suggestion", "Ensure there is enough free space for a second copy of the mod."),

			AppError::Walk(error) => Notice::from_preset(NoticePreset::Error, "IO")
				.add_field("Description", "Failed to read a directory while packing a mod.")
				.pipe(|n| match error.path() { Some(path) => n.add_field("Path", &path.display().to_string()), None => n })
				.add_field("Details", &error.to_string()),

			AppError::Json(error) => Notice::from_preset(NoticePreset::Error, "Store")
				.add_field("Description", "Failed to read a game store's metadata.")
				.add_field("Details", &error.to_string()),

            AppError::Unknown(error) => Notice::from_preset(NoticePreset::Error, "Unknown")
				.add_field("Message", "An unknown error has occurred!")
				.add_field("Details", &error.to_string()),
        }
    }
}

impl From<io::Error> for Notice {
    fn from(value: io::Error) -> Self {
		let notice = Notice::from_preset(NoticePreset::Error, "IO");

        match value.kind() {
            io::ErrorKind::NotFound => notice
				.add_field("Description", "Tried to access a file that doesn't exist.")
				.add_field("Suggestion", "Ensure the mod was fully extracted before installing it."),

            io::ErrorKind::PermissionDenied => notice
				.add_field("Description", "Tried to access a file, but didn't have the right permissions.")
				.add_field("Suggestion", "Ensure you have full permissions for the staging and mods directories."),

            io::ErrorKind::AlreadyExists => notice
				.add_field("Description", "Tried to create a new file, but that file already exists.")
				.add_field("Note", "This error is likely a bug, or a leftover from an interrupted install.")
				.add_field("Details", &value.to_string()),

            _ => notice
				.add_field("Description", "An unknown error has occurred!")
				.add_field("Details", &value.to_string()),
        }
    }
}

impl From<DiscoveryError> for Notice {
    fn from(value: DiscoveryError) -> Self {
        let notice = Notice::from_preset(NoticePreset::Error, "Game");

		match value {
			DiscoveryError::NotFound(ids) => notice
				.add_field("Description", "Farming Simulator 19 could not be found.")
				.add_field("Searched", &ids.iter().join(", "))
				.add_field("Suggestion", "Install the game through Steam, the Epic Games Store, or the Xbox app."),

			DiscoveryError::Steam(error) => notice
				.add_field("Description", "Failed to search Steam's libraries.")
				.add_field("Details", &error.to_string()),
		}
    }
}

impl From<SetupError> for Notice {
    fn from(value: SetupError) -> Self {
        let notice = Notice::from_preset(NoticePreset::Error, "Setup");

		match value {
			SetupError::MissingDocuments => notice
				.add_field("Description", "Failed to locate your documents directory, which is where the game keeps its mods.")
				.add_field("Suggestion", "Pass the mods directory explicitly with '--mods-path'."),

			SetupError::NotWritable(path) => notice
				.add_field("Description", &format!("The mods directory '{}' can't be written to.", path.display()))
				.add_field("Suggestion", "Ensure you have write permissions for this directory."),
		}
    }
}

impl From<InstallError> for Notice {
    fn from(value: InstallError) -> Self {
		let notice = Notice::from_preset(NoticePreset::Error, "Install");

		match value {
			InstallError::InvalidStagingPath(path) => notice
				.add_field("Description", &format!("The staging path '{}' does not name a directory.", path.display()))
				.add_field("Note", "The archive for a repacked mod is named after its staging directory."),
		}
    }
}
