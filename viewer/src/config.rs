use anyhow::{bail, Result};
use films_core::{Lifecycle, DEFAULT_BASE_URL};

pub const API_URL_VAR: &str = "FILMS_API_URL";
pub const LIFECYCLE_VAR: &str = "FILMS_LIFECYCLE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub lifecycle: Lifecycle,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup(API_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let lifecycle = match lookup(LIFECYCLE_VAR).as_deref().map(str::trim) {
            None | Some("") | Some("mount") => Lifecycle::FetchOnMount,
            Some("manual") => Lifecycle::Manual,
            Some(other) => bail!("{LIFECYCLE_VAR} must be `manual` or `mount`, got `{other}`"),
        };
        Ok(Self { api_url, lifecycle })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_public_api_and_fetch_on_mount() {
        let config = config(&[]).unwrap();
        assert_eq!(config.api_url, "https://swapi.dev/api");
        assert_eq!(config.lifecycle, Lifecycle::FetchOnMount);
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[(API_URL_VAR, "http://127.0.0.1:3000"), (LIFECYCLE_VAR, "manual")]).unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:3000");
        assert_eq!(config.lifecycle, Lifecycle::Manual);
    }

    #[test]
    fn blank_url_falls_back_to_default() {
        let config = config(&[(API_URL_VAR, "  ")]).unwrap();
        assert_eq!(config.api_url, "https://swapi.dev/api");
    }

    #[test]
    fn rejects_unknown_lifecycle() {
        let err = config(&[(LIFECYCLE_VAR, "eager")]).unwrap_err();
        assert!(err.to_string().contains("eager"));
    }
}
