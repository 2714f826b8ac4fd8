use anyhow::{Context, Result};
use cutback_advice::DEFAULT_HORIZON_MONTHS;
use cutback_core::RecommendConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::ensure_cutback_home;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Keyword dictionary; relative paths resolve against the working directory
    pub dictionary: PathBuf,
    pub recommend: RecommendConfig,
    pub report: ReportSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// Months the projected saving covers
    pub horizon_months: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from("dictionary.txt"),
            recommend: RecommendConfig::default(),
            report: ReportSection::default(),
        }
    }
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_cutback_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_at(&config_path()?)
}

/// Missing file means defaults
pub fn load_config_at(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config_at(p: &Path, cfg: &Config) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_at(&p, &Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

pub fn show_config() -> Result<()> {
    let p = config_path()?;
    let cfg = load_config_at(&p)?;
    println!("# {}", p.display());
    print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
    Ok(())
}
