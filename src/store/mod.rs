//! This module finds the game's installation through the storefronts it is sold on.

pub mod epic;
pub mod steam;
pub mod xbox;

use std::path::PathBuf;

use crate::{prelude::*, structs::spec::StoreKind};

pub use epic::EpicStore;
pub use steam::SteamStore;
pub use xbox::XboxStore;

/// A storefront that can be asked where one of its games is installed.
pub trait GameStore {
	/// The storefront this is.
	fn kind(&self) -> StoreKind;

	/// Returns the root path of the game with this ID, if installed.
	/// IDs belonging to other storefronts always return *None*.
	fn find(&self, id: &StoreAppId) -> AppResult<Option<PathBuf>>;
}

/// An installation found by the *GameStoreHelper*.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEntry {
	pub game_path: PathBuf,
	pub store: StoreKind,
}

/// Searches several storefronts at once.
pub struct GameStoreHelper {
	stores: Vec<Box<dyn GameStore>>,
}

impl Default for GameStoreHelper {
	/// Builds a helper over every storefront this crate knows about.
	fn default() -> Self {
		Self::new(vec![
			Box::new(SteamStore),
			Box::new(EpicStore::default()),
			Box::new(XboxStore),
		])
	}
}

impl GameStoreHelper {
	/// Builds a helper over a custom set of storefronts.
	pub fn new(stores: Vec<Box<dyn GameStore>>) -> Self {
		Self { stores }
	}

	/// Tries each ID in order, returning the first installation found.
	/// A store that fails is skipped rather than aborting the search.
	pub fn find_by_app_ids(&self, ids: &[StoreAppId]) -> AppResult<GameEntry> {
		self.search(ids, None)
	}

	/// Same as *GameStoreHelper::find_by_app_ids*, but only asks a single storefront.
	pub fn find_by_app_ids_in(&self, ids: &[StoreAppId], kind: StoreKind) -> AppResult<GameEntry> {
		self.search(ids, Some(kind))
	}

	fn search(&self, ids: &[StoreAppId], only: Option<StoreKind>) -> AppResult<GameEntry> {
		let stores = self.stores.iter()
			.filter(|s| only.map_or(true, |k| s.kind() == k))
			.collect_vec();

		for id in ids {
			for store in stores.iter().filter(|s| s.kind() == id.kind()) {
				match store.find(id) {
					Ok(Some(game_path)) => {
						debug!("Found {id} at '{}'.", game_path.display());
						return Ok(GameEntry { game_path, store: store.kind() });
					},

					Ok(None) => debug!("{id} is not installed through {}.", store.kind()),
					Err(error) => debug!("Failed to query {} for {id}: {error}", store.kind()),
				}
			}
		}

		Err(DiscoveryError::NotFound(ids.to_vec()).into())
	}
}
