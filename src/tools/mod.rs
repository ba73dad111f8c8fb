//! MCP Tools implementation
//!
//! This module contains the thesaurus tools organized by category:
//! - Term tools (4): lookup, concepts, ambiguity report, statistics
//! - Expansion tools (2): synonym expansion and query planning

pub mod expansion;
pub mod terms;

use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::index::TermIndex;
use crate::server::McpServer;

pub use expansion::{ExpandQueryTool, ExpandTermTool};
pub use terms::{GetConceptTool, IndexStatsTool, ListAmbiguousTermsTool, LookupTermTool};

/// Register all tools with the MCP server
pub fn register_all_tools<R: BufRead, W: Write>(server: &mut McpServer<R, W>, index: Arc<TermIndex>) {
    // Term tools (4)
    server.register_tool(Box::new(LookupTermTool::new(index.clone())));
    server.register_tool(Box::new(GetConceptTool::new(index.clone())));
    server.register_tool(Box::new(ListAmbiguousTermsTool::new(index.clone())));
    server.register_tool(Box::new(IndexStatsTool::new(index.clone())));

    // Expansion tools (2)
    server.register_tool(Box::new(ExpandTermTool::new(index.clone())));
    server.register_tool(Box::new(ExpandQueryTool::new(index)));
}
