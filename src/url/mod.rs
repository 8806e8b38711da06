//! URL handling module for sitegrep
//!
//! This module provides link resolution against a base URL and the scope
//! membership predicate that decides which discovered links are eligible for
//! further crawling.

mod resolve;
mod scope;

pub use resolve::resolve;
pub use scope::{in_scope, ScopePolicy};
