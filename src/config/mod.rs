//! Engine configuration loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};

/// How the name sort treats names without a numeric suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingKeyPolicy {
    /// Treat a missing key as 0
    #[default]
    Zero,
    /// Place names without a key after every keyed name, in both directions
    Last,
}

/// Configuration for the query engine
///
/// # Example
///
/// ```yaml
/// page_size_options: [5, 10, 25, 50]
/// default_rows_per_page: 10
/// missing_name_key: zero
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Page sizes a caller may select
    pub page_size_options: Vec<usize>,

    /// Page size used by fresh query parameters
    pub default_rows_per_page: usize,

    /// Fallback for names lacking a parseable numeric suffix
    pub missing_name_key: MissingKeyPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size_options: vec![5, 10, 25, 50],
            default_rows_per_page: 10,
            missing_name_key: MissingKeyPolicy::Zero,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_string(),
            },
            _ => ConfigError::IoError {
                message: e.to_string(),
            },
        })?;

        Self::parse(&content, Some(path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse(yaml, None)
    }

    fn parse(yaml: &str, file: Option<&str>) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: file.map(str::to_string),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the page-size settings are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size_options.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "page_size_options".to_string(),
                value: "[]".to_string(),
                message: "at least one page size is required".to_string(),
            });
        }

        if let Some(zero) = self.page_size_options.iter().find(|&&size| size == 0) {
            return Err(ConfigError::InvalidValue {
                field: "page_size_options".to_string(),
                value: zero.to_string(),
                message: "page sizes must be greater than zero".to_string(),
            });
        }

        if !self.allows_rows_per_page(self.default_rows_per_page) {
            return Err(ConfigError::InvalidValue {
                field: "default_rows_per_page".to_string(),
                value: self.default_rows_per_page.to_string(),
                message: format!("must be one of {:?}", self.page_size_options),
            });
        }

        Ok(())
    }

    /// Whether `rows_per_page` is one of the configured page sizes
    pub fn allows_rows_per_page(&self, rows_per_page: usize) -> bool {
        self.page_size_options.contains(&rows_per_page)
    }
}
