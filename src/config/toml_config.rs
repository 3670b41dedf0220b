use crate::core::pagination::PAGE_SIZE;
use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/advocates";
pub const MAX_PAGE_SIZE: usize = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_page_size() -> usize {
    PAGE_SIZE
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            format: OutputFormat::default(),
        }
    }
}

impl DirectoryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DirectoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ADVOCATES_API})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DirectoryError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for DirectoryConfig {
    fn api_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn page_size(&self) -> usize {
        self.display.page_size
    }

    fn output_format(&self) -> OutputFormat {
        self.display.format
    }
}

impl Validate for DirectoryConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.endpoint", &self.source.endpoint)?;
        validate_range("display.page_size", self.display.page_size, 1, MAX_PAGE_SIZE)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[source]
endpoint = "https://advocates.example.com/api/advocates"

[display]
page_size = 10
format = "csv"
"#;

        let config = DirectoryConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api_endpoint(), "https://advocates.example.com/api/advocates");
        assert_eq!(config.page_size(), 10);
        assert_eq!(config.output_format(), OutputFormat::Csv);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DirectoryConfig::from_toml_str("").unwrap();
        assert_eq!(config, DirectoryConfig::default());
        assert_eq!(config.page_size(), PAGE_SIZE);
        assert_eq!(config.api_endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.output_format(), OutputFormat::Table);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_ADVOCATES_ENDPOINT", "https://test.api.com/api/advocates");

        let toml_content = r#"
[source]
endpoint = "${TEST_ADVOCATES_ENDPOINT}"
"#;

        let config = DirectoryConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.endpoint, "https://test.api.com/api/advocates");

        std::env::remove_var("TEST_ADVOCATES_ENDPOINT");
    }

    #[test]
    fn test_config_validation() {
        let bad_url = DirectoryConfig::from_toml_str(
            r#"
[source]
endpoint = "invalid-url"
"#,
        )
        .unwrap();
        assert!(bad_url.validate().is_err());

        let bad_page = DirectoryConfig::from_toml_str(
            r#"
[display]
page_size = 0
"#,
        )
        .unwrap();
        assert!(bad_page.validate().is_err());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = DirectoryConfig::from_toml_str(
            r#"
[display]
format = "xml"
"#,
        );
        assert!(matches!(
            result,
            Err(DirectoryError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[display]\npage_size = 50\n")
            .unwrap();

        let config = DirectoryConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.page_size(), 50);
    }
}
