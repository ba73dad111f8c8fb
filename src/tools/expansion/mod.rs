//! Expansion tools

mod expand_query;
mod expand_term;

pub use expand_query::ExpandQueryTool;
pub use expand_term::ExpandTermTool;
