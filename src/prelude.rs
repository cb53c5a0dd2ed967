//! This module re-exports a bunch of utilities used across this crate.

#![allow(unused_imports)]

pub use tap::prelude::*;

pub use indexmap::{IndexMap, IndexSet};
pub use itertools::Itertools;
pub use thiserror::Error;

pub use log::debug;
pub use log::error;
pub use log::info;
pub use log::warn;

pub use crate::structs::error::AppError;
pub use crate::structs::error::AppResult;
pub use crate::structs::error::{DiscoveryError, InstallError, SetupError};
pub use crate::structs::data::GameData;
pub use crate::structs::spec::StoreAppId;
pub use crate::util::text::FancyText;
pub use crate::util::notice::Notice;
pub use crate::util::notice::NoticePreset;
