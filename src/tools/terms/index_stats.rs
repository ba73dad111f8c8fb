//! Index statistics tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::index::TermIndex;
use crate::protocol::{McpTool, Tool};
use crate::server::json_text_response;
use crate::types::ThesaurusResult;

/// Tool for reporting thesaurus statistics
pub struct IndexStatsTool {
    index: Arc<TermIndex>,
}

impl IndexStatsTool {
    pub fn new(index: Arc<TermIndex>) -> Self {
        Self { index }
    }
}

impl Tool for IndexStatsTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "index_stats",
            "Get thesaurus statistics: concept and term counts, ambiguity and terms per concept.",
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        )
    }

    fn execute(&self, _params: Value) -> ThesaurusResult<Value> {
        json_text_response(&json!({
            "policy": self.index.policy(),
            "stats": self.index.stats()
        }))
    }
}
