use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;
use tinta::SyncConfig;

/// Contents of a `--config` file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sync: SyncConfig,
}

impl Config {
    /// Reads the file at `path`, or returns the defaults when no file was given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        Self::parse(&contents).wrap_err_with(|| format!("failed to parse {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use tinta::config::DEFAULT_COLOR;

    use super::*;

    #[test]
    fn reads_initial_color() {
        let config = Config::parse("[sync]\ninitial = \"#FF5722\"\n").unwrap();
        assert_eq!(config.sync.initial, "#FF5722");
    }

    #[test]
    fn missing_table_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.sync.initial, DEFAULT_COLOR);

        let config = Config::parse("[sync]\n").unwrap();
        assert_eq!(config.sync.initial, DEFAULT_COLOR);
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(Config::load(None).unwrap().sync, SyncConfig::default());
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = Config::load(Some(Path::new("/nonexistent/tinta.toml"))).unwrap_err();
        assert_eq!(error.to_string(), "failed to read /nonexistent/tinta.toml");
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(Config::parse("[sync]\ninitial = 3\n").is_err());
    }
}
