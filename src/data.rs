// src/data.rs
//
// The data model shared by the pipeline stages.
//
// - RawRow:      one decoded table row, straight off the page. Never persisted.
// - ClassRecord: the canonical, deduplicated unit that gets cached and served.
// - Cache:       records plus their category index; replaced wholesale on rebuild.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::index::CategoryIndex;

/// Six positional cells from one data row, plus the first cell's detail link.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    pub name: String,
    pub category: String,
    pub group: String,
    pub date_range: String,
    pub displacement: String,
    pub count: String,
    pub detail_link: Option<String>,
}

/// One ship class.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    /// Hull type, e.g. "Battleship".
    pub category: String,
    /// Operating navy, e.g. "Royal Navy".
    pub group: String,
    pub date_range: String,
    pub displacement: String,
    pub count: String,
    /// Title of the article describing this class, if it has one.
    pub detail_link: Option<String>,
}

impl ClassRecord {
    /// Merge key: the detail link when present, else the name.
    pub fn key(&self) -> &str {
        self.detail_link.as_deref().unwrap_or(&self.name)
    }
}

/// Records keyed by `ClassRecord::key`.
pub type Records = BTreeMap<String, ClassRecord>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cache {
    pub records: Records,
    pub indices: CategoryIndex,
}

impl Cache {
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn len(&self) -> usize { self.records.len() }
}
