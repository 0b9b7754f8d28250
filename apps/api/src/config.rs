use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::scoring::weights::MissingInterviewPolicy;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_RANK_BATCH: usize = 1000;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// How candidates without an interview score are blended.
    pub missing_interview_policy: MissingInterviewPolicy,
    /// Largest candidate list accepted by the ranking endpoint.
    pub max_rank_batch: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            missing_interview_policy: MissingInterviewPolicy::default(),
            max_rank_batch: DEFAULT_MAX_RANK_BATCH,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. `from_env` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let port = parse_or("PORT", &lookup, defaults.port)
            .context("PORT must be a valid port number")?;
        let rust_log = lookup("RUST_LOG").unwrap_or(defaults.rust_log);
        let missing_interview_policy = match lookup("MISSING_INTERVIEW_POLICY") {
            Some(raw) => MissingInterviewPolicy::from_str(&raw)
                .map_err(|e| anyhow!(e))
                .context("MISSING_INTERVIEW_POLICY is invalid")?,
            None => defaults.missing_interview_policy,
        };
        let max_rank_batch = parse_or("MAX_RANK_BATCH", &lookup, defaults.max_rank_batch)
            .context("MAX_RANK_BATCH must be a positive integer")?;
        if max_rank_batch == 0 {
            return Err(anyhow!("MAX_RANK_BATCH must be a positive integer"));
        }

        Ok(Config {
            port,
            rust_log,
            missing_interview_policy,
            max_rank_batch,
        })
    }
}

fn parse_or<T>(key: &str, lookup: &impl Fn(&str) -> Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.missing_interview_policy,
            MissingInterviewPolicy::Renormalize
        );
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "9090"),
            ("RUST_LOG", "debug"),
            ("MISSING_INTERVIEW_POLICY", "zero"),
            ("MAX_RANK_BATCH", "25"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(
            config.missing_interview_policy,
            MissingInterviewPolicy::ZeroFill
        );
        assert_eq!(config.max_rank_batch, 25);
    }

    #[test]
    fn test_bad_port_fails() {
        assert!(Config::from_lookup(lookup(&[("PORT", "eighty")])).is_err());
    }

    #[test]
    fn test_bad_policy_fails() {
        let err = Config::from_lookup(lookup(&[("MISSING_INTERVIEW_POLICY", "average")]))
            .unwrap_err();
        assert!(format!("{err:#}").contains("MISSING_INTERVIEW_POLICY"));
    }

    #[test]
    fn test_zero_batch_limit_fails() {
        assert!(Config::from_lookup(lookup(&[("MAX_RANK_BATCH", "0")])).is_err());
    }
}
