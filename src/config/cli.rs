use super::DirectoryConfig;
use crate::core::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "advocates")]
#[command(about = "Browse and search the advocates directory from the terminal")]
pub struct CliConfig {
    /// Advocates endpoint (overrides the config file)
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Initial search query
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Pages to reveal before the first render
    #[arg(long, default_value = "1")]
    pub pages: usize,

    /// Rows per page (overrides the config file)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Render once and exit instead of starting the interactive session
    #[arg(long)]
    pub once: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 載入設定檔 (如有)，再套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<DirectoryConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                DirectoryConfig::from_file(path)?
            }
            None => DirectoryConfig::default(),
        };

        if let Some(endpoint) = &self.api_endpoint {
            config.source.endpoint = endpoint.clone();
        }
        if let Some(page_size) = self.page_size {
            config.display.page_size = page_size;
        }
        if let Some(format) = self.format {
            config.display.format = format;
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("pages", self.pages, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let cli = CliConfig::parse_from(["advocates"]);
        assert_eq!(cli.query, "");
        assert_eq!(cli.pages, 1);
        assert!(!cli.once);

        let config = cli.resolve().unwrap();
        assert_eq!(config, DirectoryConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[source]\nendpoint = \"https://file.example.com/api/advocates\"\n\n[display]\npage_size = 10\nformat = \"json\"\n",
            )
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "advocates",
            "--config",
            &path,
            "--page-size",
            "5",
            "--format",
            "csv",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.api_endpoint(), "https://file.example.com/api/advocates");
        assert_eq!(config.page_size(), 5);
        assert_eq!(config.output_format(), OutputFormat::Csv);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let cli = CliConfig::parse_from(["advocates", "--api-endpoint", "not a url"]);
        assert!(cli.resolve().is_err());

        let cli = CliConfig::parse_from(["advocates", "--pages", "0"]);
        assert!(cli.validate().is_err());
    }
}
