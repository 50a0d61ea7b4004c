//! Core Module
//!
//! Configuration, shared state, and server lifecycle.

pub mod config;
pub mod middleware;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::{Server, build_app};
pub use state::ServerState;
