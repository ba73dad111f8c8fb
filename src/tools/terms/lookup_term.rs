//! Lookup term tool

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::index::TermIndex;
use crate::protocol::{McpTool, Tool};
use crate::server::{json_text_response, required_str};
use crate::types::ThesaurusResult;

/// Tool for resolving a term to its concepts
pub struct LookupTermTool {
    index: Arc<TermIndex>,
}

impl LookupTermTool {
    pub fn new(index: Arc<TermIndex>) -> Self {
        Self { index }
    }
}

impl Tool for LookupTermTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "lookup_term",
            "Look up a term (exact, case-sensitive match) and return the concepts it belongs to and whether it is ambiguous.",
            json!({
                "type": "object",
                "properties": {
                    "term": {
                        "type": "string",
                        "description": "Term, phrase or acronym exactly as written in the thesaurus"
                    }
                },
                "required": ["term"]
            }),
        )
    }

    fn execute(&self, params: Value) -> ThesaurusResult<Value> {
        let term = required_str(&params, "term")?;
        let info = self.index.lookup(term)?;

        // Canonical label of each concept, for display
        let labels: BTreeMap<&str, &str> = info
            .concept_ids
            .iter()
            .filter_map(|id| {
                self.index
                    .canonical_label(id)
                    .map(|label| (id.as_str(), label))
            })
            .collect();

        json_text_response(&json!({
            "term": term,
            "concept_ids": info.concept_ids,
            "is_ambiguous": info.is_ambiguous,
            "labels": labels
        }))
    }
}
