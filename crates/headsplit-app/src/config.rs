use std::{
    io::Write,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use headsplit::{io::DEFAULT_INPUT_LIMIT, split::SplitConfig};
use serde::Deserialize;

const TEMPLATE: &[u8] = include_bytes!("../data/config_template.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub remove_lines: NonZeroUsize,
    pub keep_trailing_newline: bool,
    pub max_input_size: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let split_config = SplitConfig::default();

        Self {
            remove_lines: split_config.lines_to_remove,
            keep_trailing_newline: split_config.keep_trailing_newline,
            max_input_size: DEFAULT_INPUT_LIMIT,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content =
            std::fs::read_to_string(path).context("Failed to open configuration file")?;
        let config =
            toml::from_str::<AppConfig>(&content).context("Failed to read configuration file")?;

        tracing::debug!(?path, ?config, "loaded config");

        Ok(config)
    }

    pub fn load_or_default(path: Option<&PathBuf>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn split_config(&self) -> SplitConfig {
        SplitConfig::new(self.remove_lines).with_keep_trailing_newline(self.keep_trailing_newline)
    }
}

pub fn create_command() -> Command<'static> {
    Command::new("new-config")
        .about("Create a new configuration file")
        .arg(
            Arg::new("path")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Path to where the file will be written"),
        )
}

pub fn run(sub_matches: &ArgMatches) -> anyhow::Result<()> {
    let path = sub_matches
        .get_one::<PathBuf>("path")
        .context("missing path")?;

    new_config(path)
}

pub fn new_config(path: &Path) -> anyhow::Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .context("Failed to create file")?;
    file.write_all(TEMPLATE)?;

    tracing::info!(?path, "wrote config template");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_matches_default() {
        let config = toml::from_slice::<AppConfig>(TEMPLATE).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = toml::from_str::<AppConfig>("remove_lines = 3").unwrap();

        assert_eq!(config.remove_lines.get(), 3);
        assert!(config.keep_trailing_newline);
    }

    #[test]
    fn test_invalid_config() {
        assert!(toml::from_str::<AppConfig>("remove_lines = 0").is_err());
        assert!(toml::from_str::<AppConfig>("lines = 1").is_err());
    }

    #[test]
    fn test_new_config() {
        let dir = tempdir::TempDir::new("headsplit").unwrap();
        let path = dir.path().join("config.toml");

        new_config(&path).unwrap();
        assert_eq!(AppConfig::load(&path).unwrap(), AppConfig::default());

        assert!(new_config(&path).is_err());
    }
}
