//! Record Store Module
//!
//! Implements the document collection that holds food records.
//!
//! ## Core Concepts
//! - **Documents**: Records are schemaless JSON objects. The store assigns each one an
//!   opaque `_id` on insertion and never hands out mutable access afterwards.
//! - **Filters**: Queries are a conjunction of per-field predicates (equality or
//!   regex pattern). Missing fields never satisfy a predicate.
//! - **Projection**: Callers choose which fields come back, so storage handles can be
//!   kept out of results.
//! - **Lifecycle**: A store is connected once at startup, health-checked with `ping`,
//!   and closed on shutdown. A closed store fails every call with `Disconnected`.

pub mod error;
pub mod memory;
pub mod store;
pub mod types;
