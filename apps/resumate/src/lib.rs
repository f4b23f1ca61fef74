//! Client core for the Resumate resume builder.
//!
//! The view layer renders; this crate holds the state behind it: the
//! seven-step builder wizard and its validators, the HTTP client for the
//! remote resume service, the signed-in session and the list of generated
//! resumes.

pub mod api_client;
pub mod config;
pub mod errors;
pub mod library;
pub mod models;
pub mod opener;
pub mod session;
pub mod state;
pub mod telemetry;
pub mod validation;
pub mod wizard;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use errors::{AppError, Notice, Operation};
pub use state::AppState;
