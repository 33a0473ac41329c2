//! Ingestion Module
//!
//! Fills the record store before the search service starts answering.
//!
//! ## Workflow
//! 1. **Import**: If a data file is configured, its JSON array of foods is validated and inserted.
//! 2. **Seed**: Otherwise, an empty store receives the built-in sample foods.
//!
//! The search layer never writes; this is the only place records are created.

pub mod loader;

#[cfg(test)]
mod tests;
