// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod engine;
pub mod error;
pub mod index;
pub mod log;
pub mod progress;
pub mod records;
pub mod session;
pub mod specs;
pub mod store;
pub mod summary;

pub use config::options::Options;
pub use core::net::{WikiClient, WikiSource};
pub use data::{Cache, ClassRecord, RawRow};
pub use engine::{Filter, Query, QueryEngine};
pub use error::{Error, FetchError, Result};
pub use index::{Category, CategoryIndex, Group};
pub use session::{Continuation, Lead, Session};
pub use summary::{ImageLink, PaginationCursor, SummaryPage};
