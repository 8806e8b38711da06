//! Configuration module for sitegrep
//!
//! Loads and validates the TOML configuration that describes where a crawl
//! starts, how scope is decided, and how the HTTP client behaves.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, HttpConfig};
pub use validation::validate;
