//! Database Layer
//!
//! Flat JSON-file collections behind the [`store::RecordStore`] seam, with
//! typed repositories on top. One document per collection, rewritten in
//! full on every mutation.

pub mod models;
pub mod repository;
pub mod store;

pub use store::{JsonStore, MemoryStore, RecordStore, StoreHandle};
