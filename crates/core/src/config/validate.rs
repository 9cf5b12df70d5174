use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Ranking band is positive
/// - Store page size is within the store's 1..=1000 window
/// - Token thresholds are non-zero
/// - Proxy URL (if any) is an http(s) URL
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.ranking.band <= 0 {
        return Err(ConfigError::ValidationError(format!(
            "ranking.band must be positive, got {}",
            config.ranking.band
        )));
    }

    if !(1..=1000).contains(&config.store.page_size) {
        return Err(ConfigError::ValidationError(format!(
            "store.page_size must be between 1 and 1000, got {}",
            config.store.page_size
        )));
    }

    if config.query.min_strong_tokens == 0 {
        return Err(ConfigError::ValidationError(
            "query.min_strong_tokens cannot be 0".to_string(),
        ));
    }

    if config.filter.phrase_max_tokens == 0 {
        return Err(ConfigError::ValidationError(
            "filter.phrase_max_tokens cannot be 0".to_string(),
        ));
    }

    if let Some(proxy) = &config.links.proxy_url {
        if !(proxy.starts_with("http://") || proxy.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "links.proxy_url must be an http(s) URL, got {:?}",
                proxy
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LinksConfig, RankingConfig, StoreConfig};

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_zero_band_fails() {
        let config = Config {
            ranking: RankingConfig {
                band: 0,
                prefer_larger_on_tie: false,
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_page_size_bounds() {
        let config = Config {
            store: StoreConfig {
                page_size: 5000,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_proxy_scheme() {
        let config = Config {
            links: LinksConfig {
                proxy_url: Some("proxy.example.com".to_string()),
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            links: LinksConfig {
                proxy_url: Some("https://proxy.example.com".to_string()),
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }
}
