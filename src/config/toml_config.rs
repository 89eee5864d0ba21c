use crate::adapters::dataset::FileDataset;
use crate::core::sort::BreedSort;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    pub breeds_path: Option<String>,
    pub facts_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    pub default_breed_sort: Option<BreedSort>,
    pub random_fact_count: Option<usize>,
    pub related_breed_limit: Option<usize>,
    pub highlight_limit: Option<usize>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_breed_sort: Some(BreedSort::PopularityDesc),
            random_fact_count: Some(3),
            related_breed_limit: Some(3),
            highlight_limit: Some(3),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl CatalogConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_DATA_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(path) = &self.data.breeds_path {
            validate_path("data.breeds_path", path)?;
        }
        if let Some(path) = &self.data.facts_path {
            validate_path("data.facts_path", path)?;
        }

        if let Some(count) = self.listing.random_fact_count {
            validate_positive_number("listing.random_fact_count", count, 1)?;
        }
        if let Some(limit) = self.listing.related_breed_limit {
            validate_positive_number("listing.related_breed_limit", limit, 1)?;
        }
        if let Some(limit) = self.listing.highlight_limit {
            validate_positive_number("listing.highlight_limit", limit, 1)?;
        }

        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level) {
                return Err(CatalogError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }

    /// 資料來源；未設定路徑時使用內嵌種子資料
    pub fn dataset_source(&self) -> FileDataset {
        FileDataset::new(
            self.data.breeds_path.as_ref().map(PathBuf::from),
            self.data.facts_path.as_ref().map(PathBuf::from),
        )
    }

    pub fn default_breed_sort(&self) -> BreedSort {
        self.listing.default_breed_sort.unwrap_or_default()
    }

    pub fn random_fact_count(&self) -> usize {
        self.listing.random_fact_count.unwrap_or(3)
    }

    pub fn related_breed_limit(&self) -> usize {
        self.listing.related_breed_limit.unwrap_or(3)
    }

    pub fn highlight_limit(&self) -> usize {
        self.listing.highlight_limit.unwrap_or(3)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[data]
breeds_path = "data/breeds.json"

[listing]
default_breed_sort = "name-asc"
random_fact_count = 5

[logging]
level = "debug"
"#;

        let config = CatalogConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.data.breeds_path.as_deref(), Some("data/breeds.json"));
        assert_eq!(config.data.facts_path, None);
        assert_eq!(config.default_breed_sort(), BreedSort::NameAsc);
        assert_eq!(config.random_fact_count(), 5);
        assert_eq!(config.related_breed_limit(), 3);
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CatalogConfig::from_toml_str("").unwrap();
        assert_eq!(config.default_breed_sort(), BreedSort::PopularityDesc);
        assert_eq!(config.random_fact_count(), 3);
        assert_eq!(config.highlight_limit(), 3);
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_CATALOG_FACTS", "/srv/catalog/facts.json");

        let toml_content = r#"
[data]
facts_path = "${TEST_CATALOG_FACTS}"
"#;

        let config = CatalogConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.data.facts_path.as_deref(),
            Some("/srv/catalog/facts.json")
        );

        std::env::remove_var("TEST_CATALOG_FACTS");
    }

    #[test]
    fn test_unknown_sort_key_fails_parsing() {
        let toml_content = r#"
[listing]
default_breed_sort = "newest"
"#;
        let err = CatalogConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, CatalogError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[listing]
random_fact_count = 0
"#;
        let config = CatalogConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let toml_content = r#"
[logging]
level = "loud"
"#;
        let config = CatalogConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[listing]
related_breed_limit = 2
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = CatalogConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.related_breed_limit(), 2);
    }
}
