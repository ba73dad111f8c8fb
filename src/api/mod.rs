//! HTTP API module
//!
//! This module exposes the thesaurus query surface as a JSON REST API.

pub mod http;
pub mod rest;
pub mod state;

pub use http::{create_router, serve};
pub use state::AppState;
