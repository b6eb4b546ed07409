// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

/// Runtime configuration for the engine and its HTTP client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Directory holding the cache, the JSON export and the debug log.
    pub store_dir: PathBuf,
    pub wiki_root: String,
    pub api_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// List pages scraped on rebuild, in order.
    pub source_pages: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(STORE_DIR),
            wiki_root: s!(WIKI_ROOT),
            api_url: s!(API_URL),
            user_agent: s!(USER_AGENT),
            timeout_secs: TIMEOUT_SECS,
            source_pages: vec![s!(CLASS_LIST_PAGE)],
        }
    }
}

impl Options {
    pub fn with_store_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.store_dir = dir.into();
        self
    }

    pub fn with_source_pages<I, S>(mut self, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_pages = pages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn cache_path(&self) -> PathBuf { self.store_dir.join(CACHE_FILE) }
    pub fn export_path(&self) -> PathBuf { self.store_dir.join(EXPORT_FILE) }
    pub fn log_path(&self) -> PathBuf { self.store_dir.join(LOG_FILE) }
    pub fn store_dir(&self) -> &Path { &self.store_dir }
}
