//! Loading and lookup for the word catalog
//!
//! The catalog is read-only input to the scheduler. It keeps the order the
//! words were given in, which is the order due words are presented.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

use super::models::{WordEntry, WordId};

const BUILTIN_WORDS: &str = include_str!("../../data/words.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate word id: {0}")]
    DuplicateId(WordId),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Ordered, immutable list of vocabulary entries with unique ids
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<WordEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<WordEntry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Parse a JSON array of word entries
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<WordEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        log::info!("Loaded {} words from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// The sample word list bundled with the application
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_WORDS)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&WordEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_rejects_duplicate_ids() {
        let entries = vec![
            WordEntry::new("1", "apple", "苹果"),
            WordEntry::new("1", "banana", "香蕉"),
        ];
        let err = Catalog::new(entries).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn test_load_preserves_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("words.json");
        fs::write(
            &path,
            r#"[{"id":3,"word":"c","meaningZh":"丙"},{"id":1,"word":"a","meaningZh":"甲"}]"#,
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        let ids: Vec<&str> = catalog.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
        assert_eq!(catalog.get("1").unwrap().word, "a");
        assert!(!catalog.contains("2"));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Catalog::load(&temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.len() >= 4);
    }
}
