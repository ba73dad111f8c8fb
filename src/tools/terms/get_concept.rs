//! Get concept tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::index::TermIndex;
use crate::protocol::{McpTool, Tool};
use crate::server::{json_text_response, required_str};
use crate::types::ThesaurusResult;

/// Tool for reading the synonyms of one concept
pub struct GetConceptTool {
    index: Arc<TermIndex>,
}

impl GetConceptTool {
    pub fn new(index: Arc<TermIndex>) -> Self {
        Self { index }
    }
}

impl Tool for GetConceptTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "get_concept",
            "Get all synonyms of a concept. The first term is the canonical label.",
            json!({
                "type": "object",
                "properties": {
                    "conceptId": {
                        "type": "string",
                        "description": "Concept identifier, e.g. C0026"
                    }
                },
                "required": ["conceptId"]
            }),
        )
    }

    fn execute(&self, params: Value) -> ThesaurusResult<Value> {
        let concept_id = required_str(&params, "conceptId")?;
        let concept = self
            .index
            .get_concept(concept_id)
            .ok_or_else(|| format!("Concept not found: '{}'", concept_id))?;

        json_text_response(&concept)
    }
}
