//! Expand term tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::index::TermIndex;
use crate::protocol::{McpTool, Tool};
use crate::server::{json_text_response, required_str};
use crate::types::ThesaurusResult;

/// Tool for expanding a term to its synonyms
pub struct ExpandTermTool {
    index: Arc<TermIndex>,
}

impl ExpandTermTool {
    pub fn new(index: Arc<TermIndex>) -> Self {
        Self { index }
    }
}

impl Tool for ExpandTermTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "expand_term",
            "Expand a term to all synonyms of its concepts and build a boolean OR query. Pass conceptId to restrict an ambiguous term to one meaning.",
            json!({
                "type": "object",
                "properties": {
                    "term": {
                        "type": "string",
                        "description": "Term exactly as written in the thesaurus"
                    },
                    "conceptId": {
                        "type": "string",
                        "description": "Expand only within this concept (optional)"
                    }
                },
                "required": ["term"]
            }),
        )
    }

    fn execute(&self, params: Value) -> ThesaurusResult<Value> {
        let term = required_str(&params, "term")?;
        let concept_id = params.get("conceptId").and_then(|v| v.as_str());

        let result = match concept_id {
            Some(id) => self.index.expand_in_concept(term, id)?,
            None => self.index.expand(term)?,
        };

        json_text_response(&result)
    }
}
