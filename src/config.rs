//! Configuration loader and schema types.
//!
//! This module exposes the settings that drive a run (pass counts, the
//! fixed playlist, scanning options) and helpers to load them from disk.

mod load;
mod schema;

pub use schema::*;
