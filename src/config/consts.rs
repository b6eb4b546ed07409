// src/config/consts.rs

// Net config
pub const WIKI_ROOT: &str = "https://en.wikipedia.org/wiki/";
pub const API_URL: &str = "https://en.wikipedia.org/w/api.php";
pub const USER_AGENT: &str = "warship_scrape/0.1 (+https://en.wikipedia.org/wiki/User_agent_policy)";
pub const TIMEOUT_SECS: u64 = 30;

// Source
pub const CLASS_LIST_PAGE: &str = "List of ship classes of World War II";
pub const DATA_TABLE: &str = "table.wikitable";
pub const INFOBOX_TABLE: &str = "table.infobox";
pub const MIN_CELLS: usize = 6;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const CACHE_FILE: &str = "cache.bin";
pub const EXPORT_FILE: &str = "data.json";
pub const LOG_FILE: &str = "debug.log";
/// Bump when `Cache` changes shape; older stores then load as absent.
pub const SCHEMA: u32 = 1;

// Sampling
/// Rejection sampling gives up after `SAMPLE_DRAW_FACTOR * records` draws.
pub const SAMPLE_DRAW_FACTOR: usize = 64;
pub const SAMPLE_MIN_DRAWS: usize = 1_000;

// Summaries
pub const MANUAL_SUMMARY_MARK: &str = " [m]";
pub const NO_DETAIL_PAGE: &str = "No Wikipedia article for this ship exists.";
