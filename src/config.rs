use crate::error::{PayrollError, Result};
use crate::output::{default_output_dir, DEFAULT_SUFFIX};
use payroll_merge_common::Week;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where processed workbooks go (default: Downloads)
    pub output_dir: Option<PathBuf>,
    pub output_suffix: String,
    /// Used when `merge` is run without `--week`
    pub default_week: Option<Week>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            output_suffix: DEFAULT_SUFFIX.into(),
            default_week: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PayrollError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("payroll-merge").join("config.json"))
    }

    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(default_output_dir)
    }

    pub fn set_output_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.output_dir = Some(dir);
        self.save()
    }

    pub fn set_default_week(&mut self, week: &str) -> Result<()> {
        self.default_week = Some(Week::parse(week)?);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_returns_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.output_suffix, "_processed");
        assert!(config.output_dir.is_none());
        assert!(config.default_week.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            output_dir: Some(PathBuf::from("/srv/payroll")),
            output_suffix: "_merged".into(),
            default_week: Some(Week::Two),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.output_dir, Some(PathBuf::from("/srv/payroll")));
        assert_eq!(loaded.output_suffix, "_merged");
        assert_eq!(loaded.default_week, Some(Week::Two));
        assert_eq!(loaded.resolved_output_dir(), PathBuf::from("/srv/payroll"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "default_week": "Week 1" }"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.default_week, Some(Week::One));
        assert_eq!(loaded.output_suffix, "_processed");
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ nope").unwrap();
        assert!(matches!(Config::load_from(&path), Err(PayrollError::JsonParse(_))));
    }
}
