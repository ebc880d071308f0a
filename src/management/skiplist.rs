use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::utils;

/// Optional exclusion list, one entry per line. Entries are normalized the
/// same way filenames are, so membership is compared post-normalization.
pub struct SkipList {
    entries: HashSet<String>,
}

impl SkipList {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| utils::normalize_filename(e.as_ref()))
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Reads the skip list file; a missing file simply yields an empty list.
    pub async fn load() -> Self {
        Self::load_from(&Self::skiplist_path()).await
    }

    pub async fn load_from(path: &Path) -> Self {
        match async_fs::read_to_string(path).await {
            Ok(content) => Self::from_entries(content.lines()),
            Err(_) => Self {
                entries: HashSet::new(),
            },
        }
    }

    /// Expects an already-normalized query.
    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains(query)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.as_str())
    }

    fn skiplist_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spofolcli/skiplist");
        path
    }
}
