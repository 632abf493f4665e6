use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use terminal_hack_core::DifficultyTier;

const SUPPORTED_CONFIG_VERSION: u32 = 1;

/// Lock tier accepted on the command line and in config files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum TierArg {
    VeryEasy,
    Easy,
    Average,
    Hard,
    VeryHard,
}

impl From<TierArg> for DifficultyTier {
    fn from(tier: TierArg) -> Self {
        match tier {
            TierArg::VeryEasy => Self::VeryEasy,
            TierArg::Easy => Self::Easy,
            TierArg::Average => Self::Average,
            TierArg::Hard => Self::Hard,
            TierArg::VeryHard => Self::VeryHard,
        }
    }
}

/// Defaults loaded from a TOML file; command-line flags take precedence.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    #[serde(default = "default_version")]
    pub(crate) version: u32,
    pub(crate) tier: Option<TierArg>,
    pub(crate) skill: Option<u32>,
    pub(crate) seed: Option<u64>,
    pub(crate) attempts: Option<u32>,
    pub(crate) sampling_draw_cap: Option<u32>,
}

impl FileConfig {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("invalid config at {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context("failed to parse config toml")?;
        if config.version != SUPPORTED_CONFIG_VERSION {
            bail!(
                "config version {} is not supported (expected {SUPPORTED_CONFIG_VERSION})",
                config.version
            );
        }
        Ok(config)
    }
}

fn default_version() -> u32 {
    SUPPORTED_CONFIG_VERSION
}
