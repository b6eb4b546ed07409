// src/index.rs
//
// Category indices over built records: one bucket per known navy and per known
// hull type, plus the "minor" / "other" fallbacks. Every record lands in
// exactly one navy bucket and exactly one hull bucket.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::data::{ClassRecord, Records};

/// Operating navy. Anything outside the six majors is `Minor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    UnitedStatesNavy,
    RoyalNavy,
    ImperialJapaneseNavy,
    Kriegsmarine,
    RegiaMarina,
    FrenchNavy,
    Minor,
}

impl Group {
    pub const ALL: [Group; 7] = [
        Group::UnitedStatesNavy,
        Group::RoyalNavy,
        Group::ImperialJapaneseNavy,
        Group::Kriegsmarine,
        Group::RegiaMarina,
        Group::FrenchNavy,
        Group::Minor,
    ];

    /// Index key; also the canonical spelling on the source page.
    pub fn key(self) -> &'static str {
        match self {
            Group::UnitedStatesNavy => "United States Navy",
            Group::RoyalNavy => "Royal Navy",
            Group::ImperialJapaneseNavy => "Imperial Japanese Navy",
            Group::Kriegsmarine => "Kriegsmarine",
            Group::RegiaMarina => "Regia Marina",
            Group::FrenchNavy => "French Navy",
            Group::Minor => "minor",
        }
    }

    /// Short code accepted on the command line.
    pub fn code(self) -> &'static str {
        match self {
            Group::UnitedStatesNavy => "usn",
            Group::RoyalNavy => "rn",
            Group::ImperialJapaneseNavy => "ijn",
            Group::Kriegsmarine => "km",
            Group::RegiaMarina => "rm",
            Group::FrenchNavy => "fn",
            Group::Minor => "minor",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Group::UnitedStatesNavy => &["united states navy", "us navy", "u.s. navy"],
            Group::RoyalNavy => &["royal navy"],
            Group::ImperialJapaneseNavy => &["imperial japanese navy"],
            Group::Kriegsmarine => &["kriegsmarine"],
            Group::RegiaMarina => &["regia marina"],
            Group::FrenchNavy => &["french navy", "marine nationale"],
            Group::Minor => &[],
        }
    }

    pub fn from_code(code: &str) -> Option<Group> {
        Group::ALL.into_iter().find(|g| g.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Bucket for a normalized navy field.
    pub fn classify(navy: &str) -> Group {
        let lc = navy.trim().to_lowercase();
        Group::ALL
            .into_iter()
            .find(|g| g.aliases().contains(&lc.as_str()))
            .unwrap_or(Group::Minor)
    }
}

/// Hull type. Anything unrecognized is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    AircraftCarrier,
    Battleship,
    Battlecruiser,
    HeavyCruiser,
    LightCruiser,
    Destroyer,
    Submarine,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::AircraftCarrier,
        Category::Battleship,
        Category::Battlecruiser,
        Category::HeavyCruiser,
        Category::LightCruiser,
        Category::Destroyer,
        Category::Submarine,
        Category::Other,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::AircraftCarrier => "Aircraft carrier",
            Category::Battleship => "Battleship",
            Category::Battlecruiser => "Battlecruiser",
            Category::HeavyCruiser => "Heavy cruiser",
            Category::LightCruiser => "Light cruiser",
            Category::Destroyer => "Destroyer",
            Category::Submarine => "Submarine",
            Category::Other => "other",
        }
    }

    /// Hull classification symbol accepted on the command line.
    pub fn code(self) -> &'static str {
        match self {
            Category::AircraftCarrier => "cv",
            Category::Battleship => "bb",
            Category::Battlecruiser => "bc",
            Category::HeavyCruiser => "ca",
            Category::LightCruiser => "cl",
            Category::Destroyer => "dd",
            Category::Submarine => "ss",
            Category::Other => "other",
        }
    }

    pub fn from_code(code: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Bucket for a normalized type field. Case-insensitive, plural-tolerant.
    pub fn classify(hull: &str) -> Category {
        let lc = hull.trim().to_lowercase();
        let singular = lc.strip_suffix('s').unwrap_or(&lc);
        Category::ALL
            .into_iter()
            .filter(|c| *c != Category::Other)
            .find(|c| {
                let k = c.key().to_lowercase();
                k == lc || k == singular
            })
            .unwrap_or(Category::Other)
    }
}

/// Category key → record keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryIndex(BTreeMap<String, BTreeSet<String>>);

impl CategoryIndex {
    pub fn insert(&mut self, bucket: &str, record_key: &str) {
        self.0.entry(s!(bucket)).or_default().insert(s!(record_key));
    }

    pub fn bucket(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.0.get(key)
    }

    /// Number of records filed under `key` (0 for unknown keys).
    pub fn population(&self, key: &str) -> usize {
        self.bucket(key).map_or(0, BTreeSet::len)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

/// File every record under its navy bucket and its hull bucket.
pub fn build_indices(records: &Records) -> CategoryIndex {
    let mut idx = CategoryIndex::default();
    for (key, rec) in records {
        index_record(&mut idx, key, rec);
    }
    idx
}

fn index_record(idx: &mut CategoryIndex, key: &str, rec: &ClassRecord) {
    let group = Group::classify(&rec.group);
    let category = Category::classify(&rec.category);
    if group == Group::Minor {
        tracing::trace!(navy = %rec.group, key, "filed under minor");
    }
    idx.insert(group.key(), key);
    idx.insert(category.key(), key);
}
