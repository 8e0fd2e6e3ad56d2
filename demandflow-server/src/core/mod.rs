//! Core module: configuration, shared state and the HTTP server
//!
//! - [`Config`] - environment-driven configuration
//! - [`ServerState`] - state handed to every handler
//! - [`Server`] - listener and graceful shutdown

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;
