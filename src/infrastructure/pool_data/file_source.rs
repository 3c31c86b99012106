use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use crate::domain::pool::PoolData;
use crate::domain::PoolDataSource;
use crate::shared::errors::SourceError;

/// Pool metadata read from a local JSON object keyed by pool name
pub struct FilePoolDataSource {
    path: PathBuf,
}

impl FilePoolDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

pub fn parse_pool_map(json: &str) -> Result<BTreeMap<String, PoolData>, SourceError> {
    Ok(serde_json::from_str(json)?)
}

#[async_trait]
impl PoolDataSource for FilePoolDataSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self) -> Result<BTreeMap<String, PoolData>, SourceError> {
        info!("📂 Reading pool data from {}", self.path.display());
        let json = tokio::fs::read_to_string(&self.path).await?;
        parse_pool_map(&json)
    }
}
