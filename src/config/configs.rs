use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{defaults, envconfig::EnvConfig, validate};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
    pub data: DataConfig,
    pub http: HttpConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        <Self as EnvConfig>::from_env()
    }
}

impl EnvConfig for AppConfig {
    fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT as u16,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
        }
    }
}

/// Location of the description document read at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    pub description_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            description_path: PathBuf::from(defaults::DEFAULT_DESCRIPTION_PATH),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    /// Answer CORS preflights for any origin, method and header.
    pub cors_allow_any: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            cors_allow_any: defaults::DEFAULT_CORS_ALLOW_ANY,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::config::EnvVars;

    fn vars(pairs: &[(&str, &str)]) -> EnvVars {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let cfg = <AppConfig as EnvConfig>::from_vars(Some(EnvVars::new())).unwrap();
        assert_eq!(cfg.general.host, "127.0.0.1");
        assert_eq!(cfg.general.port, 5000);
        assert_eq!(
            cfg.data.description_path,
            Path::new("../frontend/public/description.json")
        );
        assert!(!cfg.http.cors_allow_any);
    }

    #[test]
    fn nested_keys_override_defaults() {
        let cfg = <AppConfig as EnvConfig>::from_vars(Some(vars(&[
            ("APP_GENERAL__PORT", "8081"),
            ("APP_DATA__DESCRIPTION_PATH", "/srv/data/description.json"),
            ("APP_HTTP__CORS_ALLOW_ANY", "true"),
        ])))
        .unwrap();

        assert_eq!(cfg.general.port, 8081);
        assert_eq!(
            cfg.data.description_path,
            Path::new("/srv/data/description.json")
        );
        assert!(cfg.http.cors_allow_any);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = <AppConfig as EnvConfig>::from_vars(Some(vars(&[("APP_GENERAL__HOSTNAME", "x")])))
            .unwrap_err();
        assert!(format!("{err:#}").contains("hostname"));
    }

    #[test]
    fn unrelated_app_variable_stops_loading() {
        let result = <AppConfig as EnvConfig>::from_vars(Some(vars(&[("APP_ENV", "prod")])));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_values_fail_validation() {
        let err = <AppConfig as EnvConfig>::from_vars(Some(vars(&[("APP_GENERAL__PORT", "0")])))
            .unwrap_err();
        assert!(err.to_string().contains("general.port must be > 0"));
    }
}
