//! Middleware configuration
//!
//! `PaginateConfig` carries the page size bounds the middleware enforces.
//! It can be built in code or loaded from YAML:
//!
//! ```yaml
//! limit: 20
//! max_limit: 100
//! min_limit: 1
//! ```
//!
//! Every value is coerced leniently: integers and numeric strings are
//! accepted, while zero, absent, or non-numeric values fall back to the
//! defaults.

use crate::error::{Error, Result};
use crate::pagination::parse_int_or;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Page size used when the request does not ask for one
pub const DEFAULT_LIMIT: i64 = 10;

/// Largest page size a request may ask for
pub const DEFAULT_MAX_LIMIT: i64 = 50;

/// Smallest page size a request may ask for
pub const DEFAULT_MIN_LIMIT: i64 = 0;

// ============================================================================
// PaginateConfig
// ============================================================================

/// Limits applied by the pagination middleware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPaginateConfig")]
pub struct PaginateConfig {
    /// Page size when `limit` is absent or invalid
    #[serde(rename = "limit")]
    pub default_limit: i64,

    /// Upper bound for `limit`
    pub max_limit: i64,

    /// Lower bound for `limit`
    pub min_limit: i64,
}

impl Default for PaginateConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
            min_limit: DEFAULT_MIN_LIMIT,
        }
    }
}

impl PaginateConfig {
    /// Create a config from a default limit and a max limit
    ///
    /// `None` or zero selects the built-in default for that value.
    pub fn new(limit: Option<i64>, max_limit: Option<i64>) -> Self {
        Self {
            default_limit: coerce_limit(limit, DEFAULT_LIMIT),
            max_limit: coerce_limit(max_limit, DEFAULT_MAX_LIMIT),
            min_limit: DEFAULT_MIN_LIMIT,
        }
    }

    /// Set the lower bound for `limit`
    pub fn with_min_limit(mut self, min_limit: Option<i64>) -> Self {
        self.min_limit = coerce_limit(min_limit, DEFAULT_MIN_LIMIT);
        self
    }

    /// Clamp a requested limit into `[min_limit, max_limit]`
    ///
    /// `max_limit` wins when the bounds are inverted.
    pub fn clamp_limit(&self, limit: i64) -> i64 {
        limit.max(self.min_limit).min(self.max_limit)
    }

    /// Parse a config from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }
}

fn coerce_limit(value: Option<i64>, default: i64) -> i64 {
    match value {
        Some(0) | None => default,
        Some(n) => n,
    }
}

// ============================================================================
// Lenient YAML form
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct RawPaginateConfig {
    #[serde(default)]
    limit: Option<serde_yaml::Value>,
    #[serde(default)]
    max_limit: Option<serde_yaml::Value>,
    #[serde(default)]
    min_limit: Option<serde_yaml::Value>,
}

impl From<RawPaginateConfig> for PaginateConfig {
    fn from(raw: RawPaginateConfig) -> Self {
        Self {
            default_limit: lenient_int(raw.limit.as_ref(), DEFAULT_LIMIT),
            max_limit: lenient_int(raw.max_limit.as_ref(), DEFAULT_MAX_LIMIT),
            min_limit: lenient_int(raw.min_limit.as_ref(), DEFAULT_MIN_LIMIT),
        }
    }
}

fn lenient_int(value: Option<&serde_yaml::Value>, default: i64) -> i64 {
    let text = match value {
        Some(serde_yaml::Value::Number(n)) => n.to_string(),
        Some(serde_yaml::Value::String(s)) => s.clone(),
        _ => return default,
    };
    parse_int_or(Some(&text), default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use test_case::test_case;

    #[test]
    fn test_default_config() {
        let config = PaginateConfig::default();
        assert_eq!(config.default_limit, 10);
        assert_eq!(config.max_limit, 50);
        assert_eq!(config.min_limit, 0);
    }

    #[test]
    fn test_new_falls_back_on_zero_and_none() {
        assert_eq!(PaginateConfig::new(None, None), PaginateConfig::default());
        assert_eq!(PaginateConfig::new(Some(0), Some(0)), PaginateConfig::default());

        let config = PaginateConfig::new(Some(25), Some(100)).with_min_limit(Some(5));
        assert_eq!(config.default_limit, 25);
        assert_eq!(config.max_limit, 100);
        assert_eq!(config.min_limit, 5);
    }

    #[test_case(1000, 50; "above max")]
    #[test_case(-5, 0; "below min")]
    #[test_case(20, 20; "within bounds")]
    #[test_case(50, 50; "at max")]
    fn test_clamp_limit(requested: i64, expected: i64) {
        assert_eq!(PaginateConfig::default().clamp_limit(requested), expected);
    }

    #[test]
    fn test_clamp_limit_inverted_bounds() {
        let config = PaginateConfig::new(Some(10), Some(5)).with_min_limit(Some(8));
        assert_eq!(config.clamp_limit(1), 5);
        assert_eq!(config.clamp_limit(100), 5);
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r#"
limit: 20
max_limit: "100"
min_limit: 1
"#;
        let config = PaginateConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config,
            PaginateConfig {
                default_limit: 20,
                max_limit: 100,
                min_limit: 1,
            }
        );
    }

    #[test]
    fn test_from_yaml_str_lenient_values() {
        let yaml = r#"
limit: "twenty"
max_limit: 0
min_limit: [1, 2]
"#;
        let config = PaginateConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config, PaginateConfig::default());

        assert_eq!(
            PaginateConfig::from_yaml_str("").unwrap(),
            PaginateConfig::default()
        );
        assert_eq!(
            PaginateConfig::from_yaml_str("limit: 15.9").unwrap().default_limit,
            15
        );
    }

    #[test]
    fn test_from_yaml_str_rejects_scalar() {
        let err = PaginateConfig::from_yaml_str("not a mapping").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "limit: 30\nmax_limit: 60").unwrap();

        let config = PaginateConfig::from_file(file.path()).unwrap();
        assert_eq!(config.default_limit, 30);
        assert_eq!(config.max_limit, 60);
        assert_eq!(config.min_limit, 0);
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = PaginateConfig::from_file(dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().contains("missing.yaml"));
    }
}
