use std::path::{Path, PathBuf};

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Variables as `KEY=value` pairs, used in place of the process environment.
pub type EnvVars = config_rs::Map<String, String>;

/// `.env` files to try, in order. Only debug builds look in the crate root.
pub fn dotenv_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".env")];
    if cfg!(debug_assertions) {
        paths.push(Path::new(env!("CARGO_MANIFEST_DIR")).join(".env"));
    }
    paths
}

pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";

    fn load_dotenv() {
        for path in dotenv_paths() {
            if dotenvy::from_path(&path).is_ok() {
                break;
            }
        }
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn from_env() -> Result<Self> {
        Self::load_dotenv();
        Self::from_vars(None)
    }

    /// `vars: None` reads the process environment.
    fn from_vars(vars: Option<EnvVars>) -> Result<Self> {
        let environment = config_rs::Environment::with_prefix(Self::PREFIX)
            .prefix_separator("_")
            .separator(Self::SEPARATOR)
            .try_parsing(true)
            .source(vars);

        let cfg = config_rs::Config::builder()
            .add_source(environment)
            .build()
            .context("failed to read environment variables for config")?
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn working_directory_env_file_comes_first() {
        let paths = dotenv_paths();
        assert_eq!(paths[0], PathBuf::from(".env"));
        if cfg!(debug_assertions) {
            assert_eq!(paths[1], Path::new(env!("CARGO_MANIFEST_DIR")).join(".env"));
        } else {
            assert_eq!(paths.len(), 1);
        }
    }
}
