//! A small command-line host for the Farming Simulator 19 support crate.
//! It drives the registered callbacks the same way a mod manager would.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use fs19_support::{installer, prelude::*, register, structs::{descriptor::Registration, spec::GAME_ID}, util::misc::replace_path_home_prefix};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Use this directory for mods instead of the one in your documents.
    #[arg(short, long, env = "FS19_MODS_PATH")]
    mods_path: Option<PathBuf>,

	/// Print debug logs.
	#[arg(short, long)]
	verbose: bool,

    /// The command to execute.
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
enum Command {
	/// Show what gets registered with the host.
	Info,

	/// Search the game stores for the game's installation.
	Discover,

	/// Create the mods directory and ensure it is writable.
	Setup,

	/// Print the version of the game installed at a path.
	Version {
		/// The game's root directory.
		path: PathBuf,
	},

	/// Check if the game at a path must be started through a launcher.
	Launcher {
		/// The game's root directory.
		path: PathBuf,
	},

	/// Plan the installation of an extracted mod.
	Plan {
		/// The directory holding the extracted mod.
		staging: PathBuf,

		/// The game the mod is being installed for.
		#[arg(short, long, default_value = GAME_ID)]
		game: String,
	},
}

/// Entrypoint for the CLI.
fn main() {
    let args = Cli::parse();

	let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
	if let Err(error) = SimpleLogger::new().with_colors(true).with_level(level).init() {
		eprintln!("Failed to start logger: {error}");
	}

	if let Err(error) = run_command(args) { error.conv::<Notice>().print(); }
}

/// Runs the command specified by the passed CLI arguements.
fn run_command(args: Cli) -> AppResult<()> {
	let data = match args.mods_path {
		Some(path) => GameData::with_mods_path(replace_path_home_prefix(path)?),
		None => GameData::new()?,
	};

	let Registration { game, installer } = register();

    match args.cmd {
        Command::Info => {
			Notice::from_preset(NoticePreset::Info, game.name)
				.add_field("ID", game.id)
				.add_field("Executable", (game.executable)())
				.add_field("Required Files", &game.required_files.iter().join(", "))
				.add_field("Mods Path", &(game.query_mod_path)(&data).display().to_string())
				.add_field("Environment", &game.environment.iter().map(|(k, v)| format!("{k}={v}")).join(", "))
				.add_field("Details", &game.details.iter().map(|(k, v)| format!("{k}={v}")).join(", "))
				.add_field("Installer", &format!("{} (priority {})", installer.id, installer.priority))
				.print();
		},

		Command::Discover => {
			let path = (game.query_path)(&data)?;

			Notice::from_preset(NoticePreset::Success, "Discover")
				.add_field("Game Path", &path.display().to_string())
				.print();
		},

		Command::Setup => {
			(game.setup)(&data)?;

			Notice::from_preset(NoticePreset::Success, "Setup")
				.add_field("Mods Path", &data.mods_path.display().to_string())
				.print();
		},

		Command::Version { path } => {
			let version = (game.get_game_version)(&path).unwrap_or_else(|| "unknown".to_owned());

			Notice::from_preset(NoticePreset::Info, "Version")
				.add_field("Version", &version)
				.print();
		},

		Command::Launcher { path } => {
			let notice = Notice::from_preset(NoticePreset::Info, "Launcher");

			let notice = match (game.requires_launcher)(&path) {
				Some(info) => notice
					.add_field("Launcher", &info.launcher.to_string())
					.add_field("App ID", &info.app_id)
					.add_field("Parameters", &format!("{:?}", info.parameters)),

				None => notice.add_field("Launcher", "none"),
			};

			notice.print();
		},

		Command::Plan { staging, game: game_id } => {
			// The host hands installers every file extracted from the mod.
			let files = installer::staged_files(&staging)?;

			if !(installer.test_supported)(&files, &game_id).supported {
				Notice::from_preset(NoticePreset::Warning, "Plan")
					.add_field("Description", &format!("The installer does not handle mods for '{game_id}'."))
					.print();

				return Ok(());
			}

			let plan = (installer.install)(&files, &staging)?;

			plan.instructions.iter()
				.enumerate()
				.fold(Notice::from_preset(NoticePreset::Success, "Plan"), |n, (i, instruction)| {
					n.add_field(&format!("#{}", i + 1), &instruction.to_string())
				})
				.print();
		},
    }

    Ok(())
}
