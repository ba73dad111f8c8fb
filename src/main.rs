//! Medical Thesaurus Server - Binary Entry Point
//!
//! Usage:
//!
//! ```text
//! thesaurus-server                 # MCP over stdio
//! thesaurus-server --http [PORT]   # REST API (default port 3030)
//! thesaurus-server --write-index   # derive the inverted index file and exit
//! thesaurus-server --help
//! ```

use std::sync::Arc;

use clap::Parser;

use medical_thesaurus::api::{self, AppState};
use medical_thesaurus::cli::ServerArgs;
use medical_thesaurus::store::{self, ThesaurusConfig};
use medical_thesaurus::tools::register_all_tools;
use medical_thesaurus::{McpServer, TermIndex, ThesaurusResult};

fn main() -> ThesaurusResult<()> {
    let args = ServerArgs::parse();
    let config = args.config();

    if args.write_index {
        return write_index(&config);
    }

    let index = match store::load_term_index(&config) {
        Ok(index) => Arc::new(index),
        Err(e) => {
            eprintln!(
                "[Store] Failed to load {}: {}",
                config.thesaurus_path.display(),
                e
            );
            return Err(e.into());
        }
    };

    match config.http_port {
        Some(port) => run_http(index, port),
        None => run_stdio(index),
    }
}

/// Serve MCP tools over stdio
fn run_stdio(index: Arc<TermIndex>) -> ThesaurusResult<()> {
    ctrlc::set_handler(|| {
        eprintln!("[Server] Interrupted, shutting down");
        std::process::exit(0);
    })?;

    let mut server = McpServer::new();

    register_all_tools(&mut server, index);
    eprintln!("[Server] Ready with {} tools", server.tool_count());

    server.run()
}

/// Serve the REST API
fn run_http(index: Arc<TermIndex>, port: u16) -> ThesaurusResult<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(api::serve(Arc::new(AppState::new(index)), port))
}

/// Derive the inverted index from the thesaurus and write it
fn write_index(config: &ThesaurusConfig) -> ThesaurusResult<()> {
    let concepts = store::load_concept_map(&config.thesaurus_path)?;
    let inverted = store::build_inverted_index(&concepts);

    // Refuse to write an index that would not load back
    TermIndex::new(concepts, inverted.clone())?;

    store::write_inverted_index(&config.index_path, &inverted)?;

    let ambiguous = inverted.values().filter(|info| info.is_ambiguous).count();
    eprintln!(
        "[Store] Wrote {} terms ({} ambiguous) to {}",
        inverted.len(),
        ambiguous,
        config.index_path.display()
    );
    Ok(())
}
