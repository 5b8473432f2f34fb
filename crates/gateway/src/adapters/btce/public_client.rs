use std::sync::Arc;

use log::debug;
use serde::de::DeserializeOwned;

use crate::error::GatewayError;
use crate::http::HttpTransport;

/// Unauthenticated GETs against the BTC-e public API
pub struct PublicApiClient {
    http: Arc<dyn HttpTransport>,
    base_url: String,
}

impl PublicApiClient {
    pub fn new(http: Arc<dyn HttpTransport>, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// GET `{base}/{path}` and parse the JSON body
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, GatewayError> {
        let url = self.endpoint(path);
        debug!(target: "helios::btce::md", "GET {} {:?}", url, query);

        let body = self.http.get(&url, query).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
