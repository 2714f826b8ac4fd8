use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Override for the config directory, mainly for tests and CI
pub const HOME_ENV: &str = "CUTBACK_HOME";

pub fn cutback_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".cutback"))
}

pub fn ensure_cutback_home() -> Result<PathBuf> {
    let dir = cutback_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
