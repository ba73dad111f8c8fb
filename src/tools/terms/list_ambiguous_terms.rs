//! List ambiguous terms tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::index::TermIndex;
use crate::protocol::{McpTool, Tool};
use crate::server::json_text_response;
use crate::types::ThesaurusResult;

/// Tool for listing terms that belong to several concepts
pub struct ListAmbiguousTermsTool {
    index: Arc<TermIndex>,
}

impl ListAmbiguousTermsTool {
    pub fn new(index: Arc<TermIndex>) -> Self {
        Self { index }
    }
}

impl Tool for ListAmbiguousTermsTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "list_ambiguous_terms",
            "List terms that denote more than one concept, ordered alphabetically.",
            json!({
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of terms to return (default: no limit)"
                    }
                },
                "required": []
            }),
        )
    }

    fn execute(&self, params: Value) -> ThesaurusResult<Value> {
        let limit = params
            .get("limit")
            .and_then(|v| v.as_u64())
            .map(|v| v as usize);

        let mut terms = self.index.ambiguous_terms();
        let total = terms.len();
        if let Some(lim) = limit {
            terms.truncate(lim);
        }

        json_text_response(&json!({
            "total": total,
            "terms": terms
        }))
    }
}
