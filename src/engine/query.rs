// src/engine/query.rs
//
// The entry point the command layer talks to. Owns the in-memory cache; loads
// it from disk on first use and rebuilds it from the wiki on cold start or when
// asked to refresh.

use rand::Rng;

use crate::config::consts::{SAMPLE_DRAW_FACTOR, SAMPLE_MIN_DRAWS};
use crate::config::options::Options;
use crate::core::net::{WikiClient, WikiSource};
use crate::data::{Cache, ClassRecord};
use crate::error::{Error, Result};
use crate::index::build_indices;
use crate::progress::{NullProgress, Progress};
use crate::records;
use crate::specs::class_list;
use crate::store::CacheStore;

use super::filter::Filter;

pub struct QueryEngine<S: WikiSource = WikiClient> {
    source: S,
    store: CacheStore,
    pages: Vec<String>,
    /// `None` until the store has been consulted.
    cache: Option<Cache>,
    /// Set once a rebuild succeeds, even one that found no classes, so an
    /// empty source table is scraped once rather than on every query.
    built: bool,
    ingestions: usize,
}

impl QueryEngine<WikiClient> {
    /// Engine backed by the live wiki.
    pub fn from_options(opts: &Options) -> Result<Self> {
        let client = WikiClient::new(opts).map_err(|e| Error::SourceUnavailable {
            page: s!("<client>"),
            reason: e.to_string(),
        })?;
        Ok(Self::new(client, opts))
    }
}

impl<S: WikiSource> QueryEngine<S> {
    pub fn new(source: S, opts: &Options) -> Self {
        Self {
            source,
            store: CacheStore::new(opts),
            pages: opts.source_pages.clone(),
            cache: None,
            built: false,
            ingestions: 0,
        }
    }

    pub fn source(&self) -> &S { &self.source }
    pub fn store(&self) -> &CacheStore { &self.store }

    /// Number of full scrape runs this engine has performed.
    pub fn ingestions(&self) -> usize { self.ingestions }

    /// Currently loaded data, if any has been loaded or built.
    pub fn cache(&self) -> Option<&Cache> {
        self.cache.as_ref().filter(|c| !c.is_empty())
    }

    /// Cached data, rebuilding first when `force_refresh` is set or nothing is
    /// cached yet. Blocks for the duration of the scrape when it rebuilds.
    pub fn get_data(&mut self, force_refresh: bool) -> Result<&Cache> {
        self.get_data_with(force_refresh, &mut NullProgress)
    }

    pub fn get_data_with(&mut self, force_refresh: bool, progress: &mut dyn Progress) -> Result<&Cache> {
        if self.cache.is_none() {
            self.cache = Some(self.store.load());
        }
        let cold = !self.built && self.cache.as_ref().is_none_or(Cache::is_empty);

        if force_refresh || cold {
            if cold {
                tracing::info!("no cached data; scraping");
            }
            self.rebuild(progress)?;
        } else {
            tracing::debug!("serving cached data");
        }
        Ok(&*self.cache.get_or_insert_with(Cache::default))
    }

    /// Scrape every source page, rebuild records and indices, persist.
    ///
    /// On failure the previously loaded cache stays in place, in memory and on disk.
    pub fn rebuild(&mut self, progress: &mut dyn Progress) -> Result<&Cache> {
        tracing::info!(pages = self.pages.len(), "rebuilding class data");
        self.ingestions += 1;
        progress.begin(self.pages.len());

        let mut rows = Vec::new();
        for page in &self.pages {
            progress.log(&format!("Scraping {page}…"));
            match class_list::scrape_table(&self.source, page) {
                Ok(scan) => {
                    progress.item_done(page, scan.rows.len(), scan.malformed);
                    rows.extend(scan.rows);
                }
                Err(e) => {
                    tracing::error!("refresh failed: {e}");
                    progress.item_failed(page, &e.to_string());
                    progress.finish();
                    return Err(e);
                }
            }
        }

        let records = records::build(rows);
        let indices = build_indices(&records);
        let cache = Cache { records, indices };

        if let Err(e) = self.store.save(&cache) {
            tracing::warn!("could not persist cache: {e}");
        }
        if cache.is_empty() {
            tracing::warn!("source table yielded no classes");
        }
        tracing::info!(records = cache.len(), "class data rebuilt");
        self.built = true;
        progress.finish();

        Ok(&*self.cache.insert(cache))
    }

    /// Uniformly random class, or a random class matching `filter`.
    pub fn random_record(&self, filter: Option<Filter>) -> Result<&ClassRecord> {
        self.random_record_with(filter, &mut rand::thread_rng())
    }

    /// Same as [`random_record`](Self::random_record) with a caller-supplied RNG.
    ///
    /// With a filter this is rejection sampling over the whole population.
    /// A populated bucket always has a member to hit, so the draw cap only
    /// trips if the index and the records disagree.
    pub fn random_record_with<R: Rng + ?Sized>(
        &self,
        filter: Option<Filter>,
        rng: &mut R,
    ) -> Result<&ClassRecord> {
        let cache = self.cache().ok_or(Error::EmptyCache)?;
        let pool: Vec<&ClassRecord> = cache.records.values().collect();

        let Some(filter) = filter else {
            return Ok(pool[rng.gen_range(0..pool.len())]);
        };

        if cache.indices.population(filter.key()) == 0 {
            return Err(Error::NoMatch(s!(filter.key())));
        }

        let cap = SAMPLE_MIN_DRAWS.max(SAMPLE_DRAW_FACTOR * pool.len());
        for _ in 0..cap {
            let rec = pool[rng.gen_range(0..pool.len())];
            if filter.matches(rec) {
                return Ok(rec);
            }
        }
        tracing::error!(key = filter.key(), draws = cap, "sampling cap hit");
        Err(Error::SamplingExhausted { key: s!(filter.key()), draws: cap })
    }

    /// Class whose canonical name is exactly `name` (case-sensitive).
    pub fn exact_record(&self, name: &str) -> Option<&ClassRecord> {
        self.cache()?.records.values().find(|r| r.name == name)
    }
}
