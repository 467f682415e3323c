//! Record access for page rows

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;

use super::record::{PageId, PageRecord};

/// Source of page rows
///
/// A missing row is `None`; callers treat it like reaching the root.
pub trait PageRepository {
    fn find_page(&self, uid: PageId) -> Option<PageRecord>;
}

impl<F> PageRepository for F
where
    F: Fn(PageId) -> Option<PageRecord>,
{
    fn find_page(&self, uid: PageId) -> Option<PageRecord> {
        self(uid)
    }
}

/// In-memory page table keyed by uid
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    pages: HashMap<PageId, PageRecord>,
}

/// TOML structure for deserializing page trees
#[derive(Deserialize)]
struct TomlPageTree {
    #[serde(default)]
    pages: Vec<PageRecord>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from records, rejecting duplicate uids
    pub fn from_records(records: impl IntoIterator<Item = PageRecord>) -> Result<Self, LoadError> {
        let mut repository = Self::new();
        for record in records {
            repository.insert(record)?;
        }
        Ok(repository)
    }

    /// Load a page tree from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a page tree from a TOML string with a `[[pages]]` array
    pub fn from_str(content: &str) -> Result<Self, LoadError> {
        let parsed: TomlPageTree = toml::from_str(content)?;
        Self::from_records(parsed.pages)
    }

    pub fn insert(&mut self, record: PageRecord) -> Result<(), LoadError> {
        let uid = record.uid;
        if self.pages.contains_key(&uid) {
            return Err(LoadError::DuplicatePage { uid });
        }
        self.pages.insert(uid, record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageRepository for MemoryRepository {
    fn find_page(&self, uid: PageId) -> Option<PageRecord> {
        self.pages.get(&uid).cloned()
    }
}
