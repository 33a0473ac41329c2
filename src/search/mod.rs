//! Food Search Module
//!
//! Turns a raw, untrusted text query into a bounded list of food records.
//!
//! ## Overview
//! Matching is a case-insensitive substring test on the food name, optionally
//! narrowed by a category substring. There is no ranking: results come back in
//! whatever order the record store yields them.
//!
//! ## Responsibilities
//! - **Sanitization**: Trimming queries, rejecting blank ones, escaping pattern metacharacters.
//! - **Limits**: Defaulting and capping the number of results.
//! - **Shaping**: Mapping schemaless documents into `SearchResult` without the storage id.
//! - **API**: Exposing search, categories, lookup and popular foods over HTTP.
//!
//! ## Submodules
//! - **`engine`**: `FoodSearchService`, the read-only query logic.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`query`**: Query normalization and limit policy.
//! - **`types`**: Records, results and response envelopes.

pub mod engine;
pub mod handlers;
pub mod query;
pub mod types;
