//! Thesaurus configuration

use std::path::{Path, PathBuf};

use crate::index::ExpansionPolicy;

/// Default thesaurus file name
pub const DEFAULT_THESAURUS_FILE: &str = "lista_sinonimos.json";

/// Default inverted index file name
pub const DEFAULT_INDEX_FILE: &str = "indice_invertido.json";

/// Where the dataset lives and how to serve it
#[derive(Debug, Clone, PartialEq)]
pub struct ThesaurusConfig {
    /// Path to the master thesaurus (concept id → synonyms)
    pub thesaurus_path: PathBuf,
    /// Path to the inverted index (derived when missing)
    pub index_path: PathBuf,
    /// Policy applied to ambiguous terms
    pub policy: ExpansionPolicy,
    /// Port for the HTTP API, if enabled
    pub http_port: Option<u16>,
}

impl Default for ThesaurusConfig {
    fn default() -> Self {
        Self {
            thesaurus_path: PathBuf::from(DEFAULT_THESAURUS_FILE),
            index_path: PathBuf::from(DEFAULT_INDEX_FILE),
            policy: ExpansionPolicy::default(),
            http_port: None,
        }
    }
}

impl ThesaurusConfig {
    /// Create config with explicit file paths
    pub fn with_paths<P1: AsRef<Path>, P2: AsRef<Path>>(thesaurus_path: P1, index_path: P2) -> Self {
        Self {
            thesaurus_path: thesaurus_path.as_ref().to_path_buf(),
            index_path: index_path.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Set the expansion policy
    pub fn with_policy(mut self, policy: ExpansionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Resolve relative file paths against `base`
    pub fn resolve_against(mut self, base: &Path) -> Self {
        self.thesaurus_path = resolve_path(base, &self.thesaurus_path);
        self.index_path = resolve_path(base, &self.index_path);
        self
    }

    /// Enable the HTTP API on the given port
    pub fn with_http_port(mut self, port: u16) -> Self {
        self.http_port = Some(port);
        self
    }
}

/// Resolve a path against `base` unless it is already absolute
fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
