use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$GASTO_HOME`, or `~/.gasto`
pub fn gasto_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("GASTO_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".gasto"))
}

pub fn ensure_gasto_home() -> Result<PathBuf> {
    let dir = gasto_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
