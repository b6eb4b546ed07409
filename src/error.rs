// src/error.rs
use std::io;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures that cross the library boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// The list page could not be fetched or does not carry the data table.
    /// The cache is left at its prior state.
    #[error("source unavailable: {page}: {reason}")]
    SourceUnavailable { page: String, reason: String },

    /// Caller-supplied filter key is not a known navy or hull type.
    #[error("invalid specification: {0}")]
    InvalidSpecification(String),

    #[error("no records loaded")]
    EmptyCache,

    /// Valid filter, but the current data has nothing filed under it.
    #[error("no records filed under {0:?}")]
    NoMatch(String),

    /// Rejection sampling gave up. Every populated bucket has at least one
    /// member, so this means the index and the records disagree.
    #[error("no record matched {key:?} after {draws} draws")]
    SamplingExhausted { key: String, draws: usize },

    #[error("store I/O: {0}")]
    Store(#[from] io::Error),

    #[error("store encoding: {0}")]
    Encode(#[from] bincode::Error),

    #[error("json export: {0}")]
    Json(#[from] serde_json::Error),
}

/// Network-level outcome of a single fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("page not found")]
    NotFound,
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("transport: {0}")]
    Transport(String),
}

/// A table row that does not match the column contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("malformed row: {cells} data cells, expected at least {expected}")]
    Malformed { cells: usize, expected: usize },
}
