use gloo_net::http::{Request, Response};
use serde::Deserialize;
use url::Url;

use super::{LeadStore, StoreError, SIGNUPS_TABLE};
use crate::config::{self, ConfigError, StoreConfig};
use crate::funnel::lead::{Lead, StoredLead};

/// Client for the hosted table's REST interface (`/rest/v1/<table>`).
#[derive(Clone, Debug)]
pub struct RestStore {
    config: Result<StoreConfig, ConfigError>,
    table: &'static str,
}

// Error body returned by the REST gateway
#[derive(Deserialize)]
struct GatewayError {
    message: String,
}

impl RestStore {
    pub fn from_env() -> Self {
        Self::new(config::store_config())
    }

    pub fn new(config: Result<StoreConfig, ConfigError>) -> Self {
        Self {
            config,
            table: SIGNUPS_TABLE,
        }
    }

    fn config(&self) -> Result<&StoreConfig, StoreError> {
        self.config
            .as_ref()
            .map_err(|e| StoreError::NotConfigured(e.clone()))
    }

    fn authorized(&self, request: Request) -> Result<Request, StoreError> {
        let config = self.config()?;
        Ok(request
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {}", config.anon_key)))
    }

    async fn write(&self, lead: &Lead, prefer: &str) -> Result<Response, StoreError> {
        let url = self.config()?.table_url(self.table);
        let request = self
            .authorized(Request::post(url.as_str()))?
            .header("Prefer", prefer)
            .json(&[lead])
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        ensure_success(response).await
    }

    async fn read(&self, url: Url, prefer: Option<&str>) -> Result<Response, StoreError> {
        let mut request = self.authorized(Request::get(url.as_str()))?;
        if let Some(prefer) = prefer {
            request = request.header("Prefer", prefer);
        }
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        ensure_success(response).await
    }
}

impl LeadStore for RestStore {
    async fn insert(&self, lead: &Lead) -> Result<(), StoreError> {
        self.write(lead, "return=minimal").await?;
        Ok(())
    }

    async fn insert_returning(&self, lead: &Lead) -> Result<Vec<StoredLead>, StoreError> {
        let response = self.write(lead, "return=representation").await?;
        response
            .json::<Vec<StoredLead>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let url = count_url(self.config()?, self.table);
        let response = self.read(url, Some("count=exact")).await?;
        let range = response
            .headers()
            .get("content-range")
            .ok_or_else(|| StoreError::Decode("missing Content-Range header".to_string()))?;
        parse_content_range_total(&range)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<StoredLead>, StoreError> {
        let url = recent_url(self.config()?, self.table, limit);
        let response = self.read(url, None).await?;
        response
            .json::<Vec<StoredLead>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

async fn ensure_success(response: Response) -> Result<Response, StoreError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let fallback = response.status_text();
    let message = match response.json::<GatewayError>().await {
        Ok(body) => body.message,
        Err(_) => fallback,
    };
    Err(StoreError::Rejected { status, message })
}

fn count_url(config: &StoreConfig, table: &str) -> Url {
    let mut url = config.table_url(table);
    url.query_pairs_mut()
        .append_pair("select", "id")
        .append_pair("limit", "1");
    url
}

fn recent_url(config: &StoreConfig, table: &str, limit: usize) -> Url {
    let mut url = config.table_url(table);
    url.query_pairs_mut()
        .append_pair("select", "*")
        .append_pair("order", "created_at.desc")
        .append_pair("limit", &limit.to_string());
    url
}

/// Total row count from a `Content-Range` header such as `0-0/7` or `*/0`.
fn parse_content_range_total(header: &str) -> Result<u64, StoreError> {
    let total = header
        .rsplit_once('/')
        .map(|(_, total)| total.trim())
        .ok_or_else(|| StoreError::Decode(format!("malformed Content-Range: {}", header)))?;
    total
        .parse::<u64>()
        .map_err(|_| StoreError::Decode(format!("Content-Range has no exact total: {}", header)))
}
