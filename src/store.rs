// src/store.rs
//
// On-disk cache of the built dataset.
//
// Layout: `<store_dir>/cache.bin` = bincode(schema: u32) ++ bincode(Cache).
// A missing, unreadable or foreign-schema file loads as the empty cache, which
// the engine treats as a cold start. Saves replace the file atomically.

use std::fs::{self, File};
use std::io::{BufWriter, Write};

use bincode::Options as _;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::consts::SCHEMA;
use crate::config::options::Options;
use crate::data::Cache;
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct CacheStore {
    path: PathBuf,
    export_path: PathBuf,
}

impl CacheStore {
    pub fn new(opts: &Options) -> Self {
        Self { path: opts.cache_path(), export_path: opts.export_path() }
    }

    pub fn path(&self) -> &Path { &self.path }

    /// Persisted cache, or `Cache::default()` when there is nothing usable.
    pub fn load(&self) -> Cache {
        match self.try_load() {
            Ok(Some(cache)) => {
                tracing::debug!(path = %self.path.display(), records = cache.len(), "cache loaded");
                cache
            }
            Ok(None) => Cache::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "ignoring unreadable cache: {e}");
                Cache::default()
            }
        }
    }

    fn try_load(&self) -> Result<Option<Cache>> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        // Length prefixes are checked against the file size, so a corrupt
        // body is a decode error rather than a huge allocation.
        let limit = bytes.len() as u64;
        let mut rest = bytes.as_slice();

        let schema: u32 = decoder(limit).deserialize_from(&mut rest)?;
        if schema != SCHEMA {
            tracing::info!(found = schema, expected = SCHEMA, "cache schema changed; treating as absent");
            return Ok(None);
        }
        Ok(Some(decoder(limit).deserialize(rest)?))
    }

    /// Replace the persisted cache with `cache`. Readers see either the old
    /// file or the new one, never a partial write.
    pub fn save(&self, cache: &Cache) -> Result<()> {
        let dir = parent_dir(&self.path);
        fs::create_dir_all(dir)?;

        let tmp = NamedTempFile::new_in(dir)?;
        {
            let mut out = BufWriter::new(tmp.as_file());
            bincode::serialize_into(&mut out, &SCHEMA)?;
            bincode::serialize_into(&mut out, cache)?;
            out.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!(path = %self.path.display(), records = cache.len(), "cache saved");
        Ok(())
    }

    /// Pretty JSON dump for eyeballing the data. Not read back by anything.
    pub fn export_json(&self, cache: &Cache) -> Result<PathBuf> {
        fs::create_dir_all(parent_dir(&self.export_path))?;
        let file = File::create(&self.export_path)?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, cache)?;
        out.flush()?;
        Ok(self.export_path.clone())
    }
}

/// Same wire format as `bincode::serialize`, bounded to `limit` bytes.
fn decoder(limit: u64) -> impl bincode::Options {
    bincode::options()
        .with_fixint_encoding()
        .allow_trailing_bytes()
        .with_limit(limit)
}

fn parent_dir(p: &Path) -> &Path {
    match p.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    }
}
