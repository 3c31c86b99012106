use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::pool::PoolData;
use crate::domain::PoolDataSource;
use crate::shared::errors::SourceError;

pub const DEFAULT_POOLS_URL: &str =
    "https://api.github.com/repos/curvefi/curve-contract/contents/contracts/pools";
pub const DEFAULT_RAW_BASE_URL: &str =
    "https://raw.githubusercontent.com/curvefi/curve-contract/master/contracts/pools";

/// Entry of the GitHub contents API listing
#[derive(Debug, Deserialize)]
struct ContentEntry {
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

/// Pool metadata published as one `pooldata.json` per pool directory
pub struct GithubPoolDataSource {
    http_client: Client,
    pools_url: String,
    raw_base_url: String,
}

impl GithubPoolDataSource {
    pub fn new(pools_url: String, raw_base_url: String) -> Result<Self, SourceError> {
        // The contents API rejects requests without a user agent
        let http_client = Client::builder()
            .user_agent(concat!("pool-registrar/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http_client,
            pools_url,
            raw_base_url: raw_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn pooldata_url(&self, pool: &str) -> String {
        format!("{}/{}/pooldata.json", self.raw_base_url, pool)
    }

    async fn list_pools(&self) -> Result<Vec<String>, SourceError> {
        info!("🔍 Listing pools from {}", self.pools_url);

        let response = self.http_client.get(&self.pools_url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Request(format!(
                "pool listing failed with status: {}",
                response.status()
            )));
        }

        let entries: Vec<ContentEntry> = response.json().await?;
        Ok(pool_directories(entries))
    }

    async fn fetch_pool(&self, pool: &str) -> Result<PoolData, SourceError> {
        let url = self.pooldata_url(pool);
        debug!("Fetching {}", url);

        let response = self.http_client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Request(format!(
                "{} failed with status: {}",
                url,
                response.status()
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SourceError::Malformed {
            pool: pool.to_string(),
            reason: e.to_string(),
        })
    }
}

fn pool_directories(entries: Vec<ContentEntry>) -> Vec<String> {
    entries
        .into_iter()
        .filter(|entry| entry.kind == "dir")
        .map(|entry| entry.name)
        .collect()
}

#[async_trait]
impl PoolDataSource for GithubPoolDataSource {
    fn name(&self) -> &str {
        "github"
    }

    async fn fetch(&self) -> Result<BTreeMap<String, PoolData>, SourceError> {
        let mut pools = BTreeMap::new();
        for name in self.list_pools().await? {
            let data = self.fetch_pool(&name).await?;
            pools.insert(name, data);
        }
        info!("✅ Fetched pool data for {} pools", pools.len());
        Ok(pools)
    }
}
