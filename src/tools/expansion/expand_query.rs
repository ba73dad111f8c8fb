//! Expand query tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::index::TermIndex;
use crate::protocol::{McpTool, Tool};
use crate::server::{json_text_response, required_str};
use crate::types::ThesaurusResult;

/// Tool for turning a user query into a boolean search
pub struct ExpandQueryTool {
    index: Arc<TermIndex>,
}

impl ExpandQueryTool {
    pub fn new(index: Arc<TermIndex>) -> Self {
        Self { index }
    }
}

impl Tool for ExpandQueryTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "expand_query",
            "Build a boolean search query from user input. Known terms expand to their synonyms; unknown terms are searched literally.",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Single search term (surrounding whitespace is ignored)"
                    }
                },
                "required": ["query"]
            }),
        )
    }

    fn execute(&self, params: Value) -> ThesaurusResult<Value> {
        let query = required_str(&params, "query")?;
        let plan = self.index.expand_query(query)?;
        json_text_response(&plan)
    }
}
