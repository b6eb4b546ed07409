//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec knows *where the ground
//! truth lives in one page's HTML* and how to pull it out; nothing here decides
//! when to fetch, how to cache, or how to present.
//!
//! ## Typical call chain
//! ```text
//! engine::QueryEngine::rebuild → specs::class_list::scrape_table(page)
//!                                  ↘ Vec<RawRow>
//!                     records::build → index::build_indices → store::save
//!
//! summary::fetch → WikiSource::intro_extract, else specs::article::first_paragraph
//!               ↘ specs::article::infobox_image
//! ```
//!
//! ## Conventions
//! - Parse with `scraper`; selectors are compiled once (`LazyLock`).
//! - Every spec has a pure `&str -> …` entry point so it can be tested offline
//!   against captured HTML.
//! - Malformed rows are logged and skipped, never fatal.
pub mod article;
pub mod class_list;
