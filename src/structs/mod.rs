//! This is the parent module over several of this crate's structs, such as *GameData* or *AppError*.

pub mod data;
pub mod descriptor;
pub mod spec;
pub mod error;
