//! Boolean query synthesis

/// Escape backslashes and double quotes inside a term
fn escape(term: &str) -> String {
    term.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Quote a term with double quotes if it contains whitespace
///
/// Embedded `"` and `\` are backslash-escaped either way.
pub fn quote_term(term: &str) -> String {
    if term.chars().any(char::is_whitespace) {
        format!("\"{}\"", escape(term))
    } else {
        escape(term)
    }
}

/// Build `(t1 OR t2 OR "t3 with space")` over the given terms, in order
pub fn build_boolean_query<S: AsRef<str>>(terms: &[S]) -> String {
    let quoted: Vec<String> = terms.iter().map(|t| quote_term(t.as_ref())).collect();
    format!("({})", quoted.join(" OR "))
}

/// Literal search for a term that could not be expanded
pub fn literal_query(term: &str) -> String {
    format!("\"{}\"", escape(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_term() {
        assert_eq!(quote_term("CIL"), "CIL");
        assert_eq!(quote_term("No mejora"), "\"No mejora\"");
        assert_eq!(quote_term("tab\tseparated"), "\"tab\tseparated\"");
        assert_eq!(quote_term("Agudeza-visual"), "Agudeza-visual");
    }

    #[test]
    fn test_build_boolean_query() {
        let query = build_boolean_query(&["CIL", "CYL", "Cilindro or astigmatismo"]);
        assert_eq!(query, "(CIL OR CYL OR \"Cilindro or astigmatismo\")");
    }

    #[test]
    fn test_single_term_query() {
        assert_eq!(build_boolean_query(&["AV"]), "(AV)");
    }

    #[test]
    fn test_embedded_quotes_are_escaped() {
        assert_eq!(quote_term(r#"Lente "Toric""#), r#""Lente \"Toric\"""#);
        assert_eq!(quote_term(r#"5""#), r#"5\""#);
        assert_eq!(quote_term(r"OD\OI"), r"OD\\OI");
        assert_eq!(
            build_boolean_query(&["LT", r#"Lente "Toric""#]),
            r#"(LT OR "Lente \"Toric\"")"#
        );
        assert_eq!(literal_query(r#"Lente "Toric""#), r#""Lente \"Toric\"""#);
    }

    #[test]
    fn test_literal_query_always_quotes() {
        assert_eq!(literal_query("XYZ123"), "\"XYZ123\"");
    }
}
