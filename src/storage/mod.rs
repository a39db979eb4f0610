//! Storage layer for persisted locations.
//!
//! This module provides the location store, its backend abstraction, the name
//! matching rules, and the seed dataset loaded into a fresh collection.
//!
//! # Modules
//!
//! - `store`: [`LocationStore`], the locked handle callers use
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `search`: Case-insensitive exact and substring name matching
//! - `seed`: Seed dataset of Greater Toronto Area points of interest
//! - `models`: Storage row type separate from the domain model

pub mod backend;
pub mod json;
pub mod models;
pub mod search;
pub mod seed;
pub mod store;

pub use backend::Storage;
pub use json::{JsonStorage, OpenOutcome};
pub use models::LocationRecord;
pub use search::NameQuery;
pub use seed::{seed_drafts, SEED_LOCATIONS};
pub use store::{LocationStore, SCHEMA_VERSION};
