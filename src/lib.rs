//! Food Search Service Library
//!
//! This library crate defines the modules behind the food search binary (`main.rs`).
//!
//! ## Architecture Modules
//! - **`storage`**: The record store. A schemaless document collection queried with
//!   field-level equality and pattern predicates, plus its in-memory implementation.
//! - **`search`**: The core query logic. Sanitizes user input, enforces result limits,
//!   and shapes raw documents into `SearchResult`s. Also hosts the HTTP handlers.
//! - **`ingestion`**: Loads foods into the store at startup (data file or sample set).
//! - **`config`**: Command-line and environment configuration.

pub mod config;
pub mod ingestion;
pub mod search;
pub mod storage;
