use anyhow::{Context, Result};
use payclose_core::DEFAULT_BUSINESS_KEYWORDS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// IANA timezone used to resolve "today".
    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(default)]
    pub api: ApiSection,

    /// Substrings marking a card as a business product. Overrides the
    /// built-in list when set.
    #[serde(default = "default_business_keywords")]
    pub business_keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub token: Option<String>,
}

fn default_timezone() -> String {
    "America/Chicago".to_string()
}

fn default_business_keywords() -> Vec<String> {
    DEFAULT_BUSINESS_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            api: ApiSection::default(),
            business_keywords: default_business_keywords(),
        }
    }
}

pub fn payclose_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".payclose"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(payclose_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    let cfg: Config = toml::from_str(&text).with_context(|| format!("parse {}", p.display()))?;
    Ok(cfg)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let dir = payclose_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    let p = config_path()?;
    let text = toml::to_string_pretty(cfg)?;
    fs::write(&p, text).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roundtrips_through_toml() {
        let cfg = Config::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.timezone, cfg.timezone);
        assert_eq!(back.business_keywords, cfg.business_keywords);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let cfg: Config = toml::from_str("timezone = \"Europe/Madrid\"").unwrap();
        assert_eq!(cfg.timezone, "Europe/Madrid");
        assert!(cfg.api.base_url.is_none());
        assert!(!cfg.business_keywords.is_empty());
    }
}
