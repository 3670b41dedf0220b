use crate::domain::model::AdvocateRow;
use crate::utils::error::LoadError;
use async_trait::async_trait;

/// advocate 清單的來源，整份清單一次取回
#[async_trait]
pub trait AdvocateSource: Send + Sync {
    async fn fetch_advocates(&self) -> std::result::Result<Vec<AdvocateRow>, LoadError>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn page_size(&self) -> usize;
    fn output_format(&self) -> OutputFormat;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}
