//! Expansion policy for ambiguous terms

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How `expand` treats a term that belongs to several concepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionPolicy {
    /// Union the synonyms of every concept (favors recall)
    #[default]
    UnionAll,
    /// Refuse and make the caller pick a concept
    RequireDisambiguation,
}

impl ExpansionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpansionPolicy::UnionAll => "union_all",
            ExpansionPolicy::RequireDisambiguation => "require_disambiguation",
        }
    }
}

impl fmt::Display for ExpansionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpansionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "union_all" | "union" => Ok(ExpansionPolicy::UnionAll),
            "require_disambiguation" | "disambiguate" => {
                Ok(ExpansionPolicy::RequireDisambiguation)
            }
            other => Err(format!(
                "Unknown expansion policy '{}'. Expected one of: union_all, require_disambiguation",
                other
            )),
        }
    }
}
