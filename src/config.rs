use crate::error::{Result, SprayPlanError};
use crate::models::Region;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The region catalog: every jurisdiction the engine can plan for, with its
/// vocabulary, season table, rainy calendar, and dataset path. Loaded once
/// at startup; adding a region means editing the YAML, not the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub regions: Vec<Region>,
}

impl Catalog {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(SprayPlanError::Config(format!(
                "Region catalog not found at {:?}. Provide one with --config.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| SprayPlanError::Config(format!("Failed to read catalog: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let catalog: Catalog = serde_yaml::from_str(&config_str)
            .map_err(|e| SprayPlanError::Config(format!("Failed to parse catalog: {}", e)))?;

        catalog.validate()?;
        Ok(catalog)
    }

    /// Search for regions.yaml in standard locations.
    /// Returns the path of the first found catalog, or the XDG default path.
    fn find_config_path() -> Result<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/regions.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        // Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("sprayplan").join("regions.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        // Return XDG path as the default (will trigger "not found" in load)
        let default_path = dirs::config_dir()
            .ok_or_else(|| SprayPlanError::Config("Cannot determine config directory".into()))?
            .join("sprayplan")
            .join("regions.yaml");
        Ok(default_path)
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }

    fn validate(&self) -> Result<()> {
        if self.regions.is_empty() {
            return Err(SprayPlanError::Config(
                "Region catalog defines no regions".into(),
            ));
        }
        for region in &self.regions {
            if region.name.trim().is_empty() {
                return Err(SprayPlanError::Config("Region with empty name".into()));
            }
            for (season, months) in &region.seasons {
                if months.is_empty() {
                    return Err(SprayPlanError::Config(format!(
                        "Season '{}' in region '{}' has no months",
                        season, region.name
                    )));
                }
            }
            let duplicates = self
                .regions
                .iter()
                .filter(|r| r.name.eq_ignore_ascii_case(&region.name))
                .count();
            if duplicates > 1 {
                return Err(SprayPlanError::Config(format!(
                    "Region '{}' is defined more than once",
                    region.name
                )));
            }
        }
        Ok(())
    }

    /// Case-insensitive region lookup.
    pub fn region(&self, name: &str) -> Result<&Region> {
        self.regions
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| SprayPlanError::UnknownRegion(name.to_string()))
    }

    pub fn region_names(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.name.as_str()).collect()
    }
}
