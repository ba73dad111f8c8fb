//! JSON loading and writing of the thesaurus files

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use super::{StoreResult, ThesaurusConfig};
use crate::index::{derive_inverted_index, TermIndex};
use crate::types::{ConceptMap, InvertedIndex};
use crate::utils::atomic_write_with;

/// Load the master thesaurus (concept id → synonyms)
pub fn load_concept_map<P: AsRef<Path>>(path: P) -> StoreResult<ConceptMap> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    Ok(serde_json::from_reader(reader)?)
}

/// Load an inverted index file (term → concept ids)
pub fn load_inverted_index<P: AsRef<Path>>(path: P) -> StoreResult<InvertedIndex> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    Ok(serde_json::from_reader(reader)?)
}

/// Derive the inverted index of a thesaurus in serialized form
pub fn build_inverted_index(concepts: &ConceptMap) -> InvertedIndex {
    derive_inverted_index(concepts).into_iter().collect()
}

/// Atomically write an inverted index as pretty-printed JSON
pub fn write_inverted_index<P: AsRef<Path>>(path: P, index: &InvertedIndex) -> StoreResult<()> {
    atomic_write_with(path, |file| {
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, index)?;
        writeln!(writer)?;
        writer.flush()
    })?;
    Ok(())
}

/// Load and validate a term index as described by `config`
///
/// The inverted index file is optional: when it does not exist the index is
/// derived from the thesaurus.
pub fn load_term_index(config: &ThesaurusConfig) -> StoreResult<TermIndex> {
    let concepts = load_concept_map(&config.thesaurus_path)?;

    let index = if config.index_path.exists() {
        let inverted = load_inverted_index(&config.index_path)?;
        TermIndex::new(concepts, inverted)?
    } else {
        eprintln!(
            "[Store] {} not found, deriving inverted index from thesaurus",
            config.index_path.display()
        );
        TermIndex::from_concepts(concepts)?
    };

    eprintln!(
        "[Store] Loaded {} concepts, {} terms",
        index.concept_count(),
        index.term_count()
    );

    Ok(index.with_policy(config.policy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{ExpansionPolicy, IndexError};
    use crate::store::StoreError;
    use std::fs;
    use tempfile::TempDir;

    const THESAURUS: &str = r#"{
  "C0026": ["CIL", "CYL", "Cilindro or astigmatismo"],
  "C0108": ["NM", "No mejora"],
  "C0109": ["NM", "Nistagmus manifiesto"]
}"#;

    fn write_thesaurus(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("lista_sinonimos.json");
        fs::write(&path, THESAURUS).unwrap();
        path
    }

    #[test]
    fn test_load_concept_map_keeps_term_order() {
        let dir = TempDir::new().unwrap();
        let concepts = load_concept_map(write_thesaurus(&dir)).unwrap();
        assert_eq!(concepts.len(), 3);
        assert_eq!(concepts["C0026"], vec!["CIL", "CYL", "Cilindro or astigmatismo"]);
    }

    #[test]
    fn test_write_then_load_inverted_index() {
        let dir = TempDir::new().unwrap();
        let concepts = load_concept_map(write_thesaurus(&dir)).unwrap();
        let index_path = dir.path().join("indice_invertido.json");

        let inverted = build_inverted_index(&concepts);
        write_inverted_index(&index_path, &inverted).unwrap();

        let content = fs::read_to_string(&index_path).unwrap();
        assert!(content.contains("\"is_ambiguous\": true"));
        assert!(content.ends_with("}\n"));

        let loaded = load_inverted_index(&index_path).unwrap();
        assert_eq!(loaded, inverted);
        assert_eq!(loaded["NM"].concept_ids, vec!["C0108", "C0109"]);
    }

    #[test]
    fn test_write_preserves_non_ascii() {
        let dir = TempDir::new().unwrap();
        let mut concepts = ConceptMap::new();
        concepts.insert("C0001".to_string(), vec!["Autorrefractómetro".to_string()]);
        let index_path = dir.path().join("indice_invertido.json");

        write_inverted_index(&index_path, &build_inverted_index(&concepts)).unwrap();
        let content = fs::read_to_string(&index_path).unwrap();
        assert!(content.contains("Autorrefractómetro"));
    }

    #[test]
    fn test_load_term_index_derives_missing_index() {
        let dir = TempDir::new().unwrap();
        let config = ThesaurusConfig::with_paths(
            write_thesaurus(&dir),
            dir.path().join("missing.json"),
        )
        .with_policy(ExpansionPolicy::RequireDisambiguation);

        let index = load_term_index(&config).unwrap();
        assert_eq!(index.term_count(), 6);
        assert_eq!(index.policy(), ExpansionPolicy::RequireDisambiguation);
    }

    #[test]
    fn test_load_term_index_rejects_inconsistent_file() {
        let dir = TempDir::new().unwrap();
        let index_path = dir.path().join("indice_invertido.json");
        fs::write(
            &index_path,
            r#"{
  "CIL": {"concept_ids": ["C0026"], "is_ambiguous": false},
  "CYL": {"concept_ids": ["C0026"], "is_ambiguous": false},
  "Cilindro or astigmatismo": {"concept_ids": ["C0026"], "is_ambiguous": false},
  "NM": {"concept_ids": ["C0108"], "is_ambiguous": false},
  "No mejora": {"concept_ids": ["C0108"], "is_ambiguous": false},
  "Nistagmus manifiesto": {"concept_ids": ["C0109"], "is_ambiguous": false}
}"#,
        )
        .unwrap();
        let config = ThesaurusConfig::with_paths(write_thesaurus(&dir), &index_path);

        match load_term_index(&config) {
            Err(StoreError::Index(IndexError::InconsistentIndex(msg))) => {
                assert!(msg.contains("C0109"));
            }
            other => panic!("expected inconsistent index, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_missing_thesaurus_is_io_error() {
        let dir = TempDir::new().unwrap();
        let config = ThesaurusConfig::with_paths(
            dir.path().join("nope.json"),
            dir.path().join("index.json"),
        );
        assert!(matches!(load_term_index(&config), Err(StoreError::Io(_))));
    }

    #[test]
    fn test_malformed_thesaurus_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_concept_map(&path), Err(StoreError::Json(_))));
    }
}
