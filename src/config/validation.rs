use crate::config::types::{parse_http_url, Config};
use crate::ConfigError;

/// Validates a parsed configuration.
///
/// Checks:
/// - start-url and scope-base (if set) parse as http(s) URLs with a host
/// - max-pages is at least 1 (a zero ceiling would crawl nothing)
/// - timeouts are non-zero
/// - the user agent is non-empty
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    parse_http_url(&config.crawler.start_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", config.crawler.start_url, e)))?;

    if let Some(scope_base) = &config.crawler.scope_base {
        parse_http_url(scope_base)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", scope_base, e)))?;
    }

    if config.crawler.max_pages == 0 {
        return Err(ConfigError::Validation(
            "max-pages must be at least 1".to_string(),
        ));
    }

    if config.http.request_timeout == 0 {
        return Err(ConfigError::Validation(
            "request-timeout must be non-zero".to_string(),
        ));
    }

    if config.http.connect_timeout == 0 {
        return Err(ConfigError::Validation(
            "connect-timeout must be non-zero".to_string(),
        ));
    }

    if config.http.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent must not be empty".to_string(),
        ));
    }

    Ok(())
}
