//! Service configuration loaded from the environment.
//!
//! Recognized variables (all optional):
//! - HOST: bind address (default "0.0.0.0")
//! - PORT: bind port (default 3000)
//! - REDPEN_LOOKAHEAD: resynchronization window (default 3)
//! - REDPEN_PUNCTUATION: punctuation set as a string of characters
//! - REDPEN_MAX_TEXT_CHARS: per-text size limit (default 20000)

use redpen_core::AlignerConfig;
use thiserror::Error;

pub const DEFAULT_MAX_TEXT_CHARS: usize = 20_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Aligner configuration error: {0}")]
    Aligner(#[from] redpen_core::ConfigError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub aligner: AlignerConfig,
    pub max_text_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            aligner: AlignerConfig::default(),
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
        }
    }
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);
        let max_text_chars =
            parse_var(&lookup, "REDPEN_MAX_TEXT_CHARS")?.unwrap_or(defaults.max_text_chars);
        if max_text_chars == 0 {
            return Err(ConfigError::Invalid {
                key: "REDPEN_MAX_TEXT_CHARS",
                value: "0".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        let lookahead =
            parse_var(&lookup, "REDPEN_LOOKAHEAD")?.unwrap_or(defaults.aligner.lookahead);
        let punctuation: Vec<char> = match lookup("REDPEN_PUNCTUATION") {
            Some(raw) => raw.chars().collect(),
            None => defaults.aligner.punctuation,
        };
        let aligner = AlignerConfig::new(lookahead, punctuation)?;

        Ok(Self {
            host,
            port,
            aligner,
            max_text_chars,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.aligner, AlignerConfig::default());
        assert_eq!(config.max_text_chars, DEFAULT_MAX_TEXT_CHARS);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("REDPEN_LOOKAHEAD", "5"),
            ("REDPEN_PUNCTUATION", ".,"),
            ("REDPEN_MAX_TEXT_CHARS", "100"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.aligner.lookahead, 5);
        assert_eq!(config.aligner.punctuation, vec!['.', ',']);
        assert_eq!(config.max_text_chars, 100);
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn test_zero_lookahead_rejected() {
        let err = load(&[("REDPEN_LOOKAHEAD", "0")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Aligner(redpen_core::ConfigError::InvalidLookahead { value: 0 })
        ));
    }

    #[test]
    fn test_max_lookahead_accepted() {
        let config = load(&[("REDPEN_LOOKAHEAD", "18446744073709551615")]).unwrap();
        assert_eq!(config.aligner.lookahead, usize::MAX);
        let aligner = redpen_core::Aligner::new(config.aligner);
        assert_eq!(aligner.align("a d", "a b c d").len(), 4);
    }

    #[test]
    fn test_invalid_punctuation_rejected() {
        let err = load(&[("REDPEN_PUNCTUATION", ". x")]).unwrap_err();
        assert!(matches!(err, ConfigError::Aligner(_)));
    }

    #[test]
    fn test_zero_text_limit_rejected() {
        let err = load(&[("REDPEN_MAX_TEXT_CHARS", "0")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "REDPEN_MAX_TEXT_CHARS",
                ..
            }
        ));
    }
}
