// src/engine/mod.rs
//
// Query side of the crate: the cache-owning engine and the filters it accepts.

pub mod filter;
pub mod query;

pub use filter::{Filter, Query};
pub use query::QueryEngine;
