//! Integration tests for the medical thesaurus

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use serde_json::Value;

use medical_thesaurus::store::{self, ThesaurusConfig};
use medical_thesaurus::tools::register_all_tools;
use medical_thesaurus::{
    ConceptMap, ExpansionPolicy, IndexError, McpServer, ServerInfo, StoreError, TermIndex,
    TermInfo,
};

fn data_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
}

fn sample_config() -> ThesaurusConfig {
    ThesaurusConfig::with_paths(
        data_path("lista_sinonimos.json"),
        data_path("indice_invertido.json"),
    )
}

fn sample_index() -> TermIndex {
    store::load_term_index(&sample_config()).unwrap()
}

fn concept_map(entries: &[(&str, &[&str])]) -> ConceptMap {
    entries
        .iter()
        .map(|(id, terms)| {
            (
                id.to_string(),
                terms.iter().map(|t| t.to_string()).collect(),
            )
        })
        .collect()
}

#[test]
fn test_sample_dataset_loads() {
    let index = sample_index();
    assert_eq!(index.concept_count(), 12);
    assert_eq!(index.term_count(), 25);
    assert_eq!(index.policy(), ExpansionPolicy::UnionAll);
}

#[test]
fn test_shipped_index_matches_derivation() {
    let concepts = store::load_concept_map(data_path("lista_sinonimos.json")).unwrap();
    let shipped = store::load_inverted_index(data_path("indice_invertido.json")).unwrap();
    assert_eq!(store::build_inverted_index(&concepts), shipped);
}

#[test]
fn test_transpose_invariant() {
    let index = sample_index();

    for (concept_id, terms) in index.concepts() {
        for term in terms {
            let info = index.lookup(term).unwrap();
            assert!(
                info.concept_ids.contains(concept_id),
                "'{}' should map back to {}",
                term,
                concept_id
            );
        }
    }

    for (term, info) in index.to_inverted_index() {
        for concept_id in &info.concept_ids {
            let terms = index.concept(concept_id).unwrap();
            assert!(terms.contains(&term), "{} should list '{}'", concept_id, term);
        }
    }
}

#[test]
fn test_ambiguity_flag_matches_concept_count() {
    let index = sample_index();
    for (term, info) in index.to_inverted_index() {
        assert_eq!(info.is_ambiguous, info.concept_ids.len() > 1, "term '{}'", term);
    }
}

#[test]
fn test_expansion_contains_original_and_is_stable() {
    let index = sample_index();
    for term in index.to_inverted_index().keys() {
        let first = index.expand(term).unwrap();
        assert!(first.contains(term));
        assert_eq!(first, index.expand(term).unwrap());
    }
}

#[test]
fn test_lookup_unambiguous_acronym() {
    let index = sample_index();
    let info = index.lookup("CIL").unwrap();
    assert_eq!(info.concept_ids, vec!["C0026"]);
    assert!(!info.is_ambiguous);
}

#[test]
fn test_expand_ambiguous_acronym() {
    let index = sample_index();
    let result = index.expand("NM").unwrap();

    assert!(result.is_ambiguous);
    assert_eq!(result.concept_ids, vec!["C0108", "C0109"]);
    assert_eq!(
        result.expanded_terms,
        vec!["NM", "No mejora", "Nistagmus manifiesto"]
    );
}

#[test]
fn test_expand_builds_quoted_query() {
    let index = sample_index();
    let result = index.expand("CIL").unwrap();

    assert_eq!(
        result.expanded_terms,
        vec!["CIL", "CYL", "Cilindro or astigmatismo"]
    );
    assert_eq!(result.query, "(CIL OR CYL OR \"Cilindro or astigmatismo\")");
}

#[test]
fn test_expand_three_meanings_in_concept_order() {
    let index = sample_index();
    let result = index.expand("DP").unwrap();

    assert_eq!(result.concept_ids, vec!["C0040", "C0041", "C0042"]);
    assert_eq!(
        result.query,
        "(DP OR \"Distancia pupilar\" OR DIP OR \"Dioptría prismática\" OR Δ OR \"Desprendimiento de placenta\")"
    );
}

#[test]
fn test_unknown_term() {
    let index = sample_index();
    assert_eq!(
        index.lookup("XYZ123").unwrap_err(),
        IndexError::TermNotFound("XYZ123".to_string())
    );
    assert!(index.expand("XYZ123").is_err());

    let plan = index.expand_query("XYZ123").unwrap();
    assert!(!plan.found);
    assert_eq!(plan.query(), "\"XYZ123\"");
}

#[test]
fn test_asymmetric_index_rejected() {
    let concepts = concept_map(&[("C1", &["A"]), ("C2", &["A", "B"])]);
    let inverted = vec![
        ("A".to_string(), TermInfo::new(vec!["C2".to_string()])),
        ("B".to_string(), TermInfo::new(vec!["C2".to_string()])),
    ];

    match TermIndex::new(concepts, inverted) {
        Err(IndexError::InconsistentIndex(msg)) => assert!(msg.contains("C1")),
        other => panic!("expected inconsistent index, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_require_disambiguation_from_config() {
    let config = sample_config().with_policy(ExpansionPolicy::RequireDisambiguation);
    let index = store::load_term_index(&config).unwrap();

    assert!(matches!(
        index.expand("AR"),
        Err(IndexError::AmbiguousTerm { .. })
    ));
    let result = index.expand_in_concept("AR", "C0003").unwrap();
    assert_eq!(result.expanded_terms, vec!["AR", "Artritis reumatoide"]);
}

#[test]
fn test_write_index_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();
    let index_path = dir.path().join("out").join("indice_invertido.json");

    let concepts = store::load_concept_map(data_path("lista_sinonimos.json")).unwrap();
    store::write_inverted_index(&index_path, &store::build_inverted_index(&concepts)).unwrap();

    let config = ThesaurusConfig::with_paths(data_path("lista_sinonimos.json"), &index_path);
    let index = store::load_term_index(&config).unwrap();
    assert_eq!(index.stats(), sample_index().stats());
}

#[test]
fn test_tampered_index_file_fails_to_load() {
    let dir = tempfile::TempDir::new().unwrap();
    let index_path = dir.path().join("indice_invertido.json");

    let mut inverted = store::load_inverted_index(data_path("indice_invertido.json")).unwrap();
    inverted.remove("Ojo derecho");
    store::write_inverted_index(&index_path, &inverted).unwrap();

    let config = ThesaurusConfig::with_paths(data_path("lista_sinonimos.json"), &index_path);
    assert!(matches!(
        store::load_term_index(&config),
        Err(StoreError::Index(IndexError::InconsistentIndex(_)))
    ));
}

#[test]
fn test_stale_ambiguity_flags_are_recomputed() {
    let dir = tempfile::TempDir::new().unwrap();
    let index_path = dir.path().join("indice_invertido.json");

    let content = fs::read_to_string(data_path("indice_invertido.json")).unwrap();
    fs::write(&index_path, content.replace("\"is_ambiguous\": true", "\"is_ambiguous\": false"))
        .unwrap();

    let config = ThesaurusConfig::with_paths(data_path("lista_sinonimos.json"), &index_path);
    let index = store::load_term_index(&config).unwrap();
    assert!(index.lookup("NM").unwrap().is_ambiguous);
    assert_eq!(index.stats().ambiguous_terms, 3);
}

#[test]
fn test_stats_on_sample() {
    let stats = sample_index().stats();
    assert_eq!(stats.total_concepts, 12);
    assert_eq!(stats.total_terms, 25);
    assert_eq!(stats.ambiguous_terms, 3);
    assert_eq!(stats.unambiguous_terms, 22);
    assert_eq!(stats.most_ambiguous_term.as_deref(), Some("DP"));
    assert_eq!(stats.max_concepts_per_term, 3);
    assert_eq!(stats.min_terms_per_concept, 2);
    assert_eq!(stats.max_terms_per_concept, 3);
}

#[test]
fn test_concurrent_readers() {
    let index = Arc::new(sample_index());
    let expected = index.expand("DP").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                (0..100)
                    .map(|_| index.expand("DP").unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for result in handle.join().unwrap() {
            assert_eq!(result, expected);
        }
    }
}

/// Run a list of JSON-RPC requests against a server with all tools
fn call_tools(index: TermIndex, requests: &[Value]) -> Vec<Value> {
    let input: String = requests.iter().map(|r| format!("{}\n", r)).collect();
    let mut server = McpServer::with_io(
        ServerInfo::default(),
        Cursor::new(input.into_bytes()),
        Vec::new(),
    );
    register_all_tools(&mut server, Arc::new(index));
    assert_eq!(server.tool_count(), 6);
    server.run().unwrap();

    String::from_utf8(server.into_writer())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn tool_call(id: u64, name: &str, arguments: Value) -> Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": { "name": name, "arguments": arguments }
    })
}

/// Parse the JSON text payload of a tool result
fn tool_payload(response: &Value) -> Value {
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

#[test]
fn test_tools_over_json_rpc() {
    use serde_json::json;

    let responses = call_tools(
        sample_index(),
        &[
            json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"}),
            tool_call(2, "lookup_term", json!({"term": "NM"})),
            tool_call(3, "expand_term", json!({"term": "CIL"})),
            tool_call(4, "expand_term", json!({"term": "NM", "conceptId": "C0108"})),
            tool_call(5, "expand_query", json!({"query": " XYZ123 "})),
            tool_call(6, "get_concept", json!({"conceptId": "C0121"})),
            tool_call(7, "list_ambiguous_terms", json!({"limit": 2})),
            tool_call(8, "index_stats", json!({})),
        ],
    );

    let names: Vec<&str> = responses[0]["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "expand_query",
            "expand_term",
            "get_concept",
            "index_stats",
            "list_ambiguous_terms",
            "lookup_term"
        ]
    );

    let lookup = tool_payload(&responses[1]);
    assert_eq!(lookup["is_ambiguous"], true);
    assert_eq!(lookup["labels"]["C0109"], "NM");

    let expanded = tool_payload(&responses[2]);
    assert_eq!(expanded["query"], "(CIL OR CYL OR \"Cilindro or astigmatismo\")");

    let restricted = tool_payload(&responses[3]);
    assert_eq!(restricted["expanded_terms"], json!(["NM", "No mejora"]));

    let literal = tool_payload(&responses[4]);
    assert_eq!(literal["found"], false);
    assert_eq!(literal["query"], "\"XYZ123\"");

    let concept = tool_payload(&responses[5]);
    assert_eq!(concept["terms"], json!(["OI", "Ojo izquierdo", "OS"]));

    let ambiguous = tool_payload(&responses[6]);
    assert_eq!(ambiguous["total"], 3);
    assert_eq!(ambiguous["terms"].as_array().unwrap().len(), 2);
    assert_eq!(ambiguous["terms"][0]["term"], "AR");

    let stats = tool_payload(&responses[7]);
    assert_eq!(stats["policy"], "union_all");
    assert_eq!(stats["stats"]["total_terms"], 25);
}

#[test]
fn test_tool_errors_over_json_rpc() {
    use serde_json::json;

    let index = sample_index().with_policy(ExpansionPolicy::RequireDisambiguation);
    let responses = call_tools(
        index,
        &[
            tool_call(1, "lookup_term", json!({"term": "XYZ123"})),
            tool_call(2, "expand_term", json!({"term": "DP"})),
            tool_call(3, "expand_term", json!({"term": "CIL", "conceptId": "C0001"})),
            tool_call(4, "get_concept", json!({"conceptId": "C9999"})),
            tool_call(5, "lookup_term", json!({})),
        ],
    );

    for response in &responses {
        assert_eq!(response["error"]["code"], -32603);
    }
    let details = |i: usize| responses[i]["error"]["data"]["details"].as_str().unwrap().to_string();
    assert_eq!(details(0), "Term not found: 'XYZ123'");
    assert!(details(1).starts_with("Ambiguous term 'DP' belongs to 3 concepts"));
    assert!(details(2).contains("not listed under concept 'C0001'"));
    assert_eq!(details(3), "Concept not found: 'C9999'");
    assert_eq!(details(4), "Missing term");
}
