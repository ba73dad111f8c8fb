//! Medical Thesaurus
//!
//! Synonym expansion and ambiguity resolution over a medical terminology
//! thesaurus, served over MCP (JSON-RPC on stdio) or a REST API.
//!
//! # Features
//!
//! - **Exact lookup**: term → concepts, with an ambiguity flag
//! - **Synonym expansion**: union of every synonym of a term's concepts,
//!   rendered as a boolean OR query
//! - **Consistency checks**: the thesaurus and its inverted index must be
//!   exact transposes, or loading fails
//! - **Ambiguity policy**: union all meanings, or require the caller to pick one
//!
//! # Modules
//!
//! - `types`: Core data structures (TermInfo, ExpansionResult, QueryPlan)
//! - `index`: The term index with lookup and expansion
//! - `store`: Loading and writing the dataset files
//! - `protocol`: MCP and JSON-RPC protocol types
//! - `tools`: MCP tool implementations
//! - `server`: MCP server implementation
//! - `api`: HTTP REST API
//! - `cli`: Command line arguments for the server binary
//! - `utils`: Atomic file writes
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use clap::Parser;
//! use medical_thesaurus::cli::ServerArgs;
//! use medical_thesaurus::{load_term_index, McpServer};
//! use medical_thesaurus::tools::register_all_tools;
//!
//! fn main() -> medical_thesaurus::ThesaurusResult<()> {
//!     let config = ServerArgs::parse().config();
//!     let index = Arc::new(load_term_index(&config)?);
//!     let mut server = McpServer::new();
//!     register_all_tools(&mut server, index);
//!     server.run()
//! }
//! ```

pub mod api;
pub mod cli;
pub mod index;
pub mod protocol;
pub mod server;
pub mod store;
pub mod tools;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use index::{ExpansionPolicy, IndexError, IndexResult, TermIndex};
pub use protocol::{McpTool, ServerInfo, Tool};
pub use server::McpServer;
pub use store::{load_term_index, StoreError, ThesaurusConfig};
pub use types::{
    AmbiguousTerm, Concept, ConceptMap, ExpansionResult, IndexStats, InvertedIndex, QueryPlan,
    TermInfo, ThesaurusResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
