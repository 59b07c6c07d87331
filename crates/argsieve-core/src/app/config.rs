//! SieveConfig - 実行時設定
//!
//! Loaded from a JSON file; every field is optional.
//!
//! ```json
//! { "unknown_keys": "reject", "times": 3, "log_filter": "argsieve_core=debug" }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::partition::UnknownKeyPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SieveConfig {
    /// Policy for keys that no registered schema recognizes.
    pub unknown_keys: UnknownKeyPolicy,

    /// Number of dispatch rounds per run.
    pub times: u32,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            unknown_keys: UnknownKeyPolicy::Drop,
            times: 1,
            log_filter: "info".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SieveConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_drops_silently_once() {
        let c = SieveConfig::default();
        assert_eq!(c.unknown_keys, UnknownKeyPolicy::Drop);
        assert_eq!(c.times, 1);
        assert_eq!(c.log_filter, "info");
    }

    #[test]
    fn empty_object_gets_defaults() {
        let c: SieveConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(c, SieveConfig::default());
    }

    #[test]
    fn partial_config_overrides_only_given_fields() {
        let json = r#"{ "unknown_keys": "reject", "times": 5 }"#;
        let c: SieveConfig = serde_json::from_str(json).unwrap();
        assert_eq!(c.unknown_keys, UnknownKeyPolicy::Reject);
        assert_eq!(c.times, 5);
        assert_eq!(c.log_filter, "info");
    }

    #[test]
    fn unknown_config_field_is_an_error() {
        let r: Result<SieveConfig, _> = serde_json::from_str(r#"{ "tims": 5 }"#);
        assert!(r.is_err());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = SieveConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "unknown_keys": "warn" }}"#).unwrap();
        let c = SieveConfig::load(file.path()).unwrap();
        assert_eq!(c.unknown_keys, UnknownKeyPolicy::Warn);
        assert_eq!(c.times, 1);
    }

    #[test]
    fn load_bad_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = SieveConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
