//! This is the parent module over small helpers, mostly for presenting output to users.

pub mod misc;
pub mod notice;
pub mod text;
