use std::env;
use url::Url;

use crate::errors::AppError;
use crate::store::http::DEFAULT_BASE_URL;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_base_url: Url,
    pub bind_address: String,
}

impl Config {
    /// Reads `STORE_BASE_URL` and `BIND_ADDRESS` from the process environment.
    pub fn from_env() -> Result<Config, AppError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("STORE_BASE_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let store_base_url = Url::parse(raw_url.trim())
            .map_err(|err| AppError::ConfigError(format!("STORE_BASE_URL {:?}: {}", raw_url, err)))?;
        if !matches!(store_base_url.scheme(), "http" | "https") {
            return Err(AppError::ConfigError(format!(
                "STORE_BASE_URL must be http or https, got {}",
                store_base_url.scheme()
            )));
        }

        let bind_address = lookup("BIND_ADDRESS")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Config {
            store_base_url,
            bind_address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.store_base_url.as_str(), "http://localhost:1000/");
        assert_eq!(config.bind_address, "127.0.0.1:8080");
    }

    #[test]
    fn overrides_are_read() {
        let config = Config::from_lookup(lookup_from(&[
            ("STORE_BASE_URL", "https://store.internal:9000"),
            ("BIND_ADDRESS", "0.0.0.0:3000"),
        ]))
        .unwrap();
        assert_eq!(config.store_base_url.host_str(), Some("store.internal"));
        assert_eq!(config.store_base_url.port(), Some(9000));
        assert_eq!(config.bind_address, "0.0.0.0:3000");
    }

    #[test]
    fn invalid_urls_are_rejected() {
        assert_matches!(
            Config::from_lookup(lookup_from(&[("STORE_BASE_URL", "not a url")])),
            Err(AppError::ConfigError(_))
        );
        assert_matches!(
            Config::from_lookup(lookup_from(&[("STORE_BASE_URL", "ftp://files")])),
            Err(AppError::ConfigError(msg)) if msg.contains("ftp")
        );
    }
}
