//! Command line arguments for the thesaurus server
//!
//! Every option can also come from a `THESAURUS_*` environment variable.
//! Flags win over the environment.

use std::env;
use std::path::PathBuf;

use clap::Parser;

use crate::index::ExpansionPolicy;
use crate::store::{ThesaurusConfig, DEFAULT_INDEX_FILE, DEFAULT_THESAURUS_FILE};

/// Port used by `--http` when no port is given
pub const DEFAULT_HTTP_PORT: u16 = 3030;

/// Medical thesaurus server: MCP over stdio, or a REST API with `--http`
#[derive(Parser, Debug, Clone)]
#[command(name = "thesaurus-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ServerArgs {
    /// Master thesaurus JSON (concept id → synonyms)
    #[arg(long, env = "THESAURUS_FILE_PATH", default_value = DEFAULT_THESAURUS_FILE)]
    pub thesaurus: PathBuf,

    /// Inverted index JSON, derived from the thesaurus when missing
    #[arg(long, env = "THESAURUS_INDEX_PATH", default_value = DEFAULT_INDEX_FILE)]
    pub index: PathBuf,

    /// How ambiguous terms expand: union_all or require_disambiguation
    #[arg(long, env = "THESAURUS_EXPANSION_POLICY", default_value_t = ExpansionPolicy::UnionAll)]
    pub policy: ExpansionPolicy,

    /// Serve the REST API instead of stdio, on PORT (default 3030)
    #[arg(
        long,
        value_name = "PORT",
        env = "THESAURUS_HTTP_PORT",
        num_args = 0..=1,
        default_missing_value = "3030",
        conflicts_with = "write_index"
    )]
    pub http: Option<u16>,

    /// Derive the inverted index from the thesaurus, write it and exit
    #[arg(long)]
    pub write_index: bool,
}

impl ServerArgs {
    /// Build the server configuration, resolving relative paths against
    /// the current directory
    pub fn config(&self) -> ThesaurusConfig {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        let mut config = ThesaurusConfig::with_paths(&self.thesaurus, &self.index)
            .with_policy(self.policy)
            .resolve_against(&current_dir);
        if let Some(port) = self.http {
            config = config.with_http_port(port);
        }
        config
    }
}
