//! HTTP transport port
//!
//! Exchange clients talk HTTP through [`HttpTransport`] so that the signing,
//! parsing and status-translation logic can be exercised without a network.

mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;

use crate::error::TransportError;
use async_trait::async_trait;

/// Minimal HTTP surface needed by REST exchange clients.
///
/// Implementations return the raw response body for any HTTP status: the
/// exchanges report business errors inside the body, so interpreting it is
/// left to the caller. Only failures to complete the exchange are errors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// GET `url` with the given query parameters
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String, TransportError>;

    /// POST an already url-encoded form body with extra headers
    async fn post_form(
        &self,
        url: &str,
        headers: &[(&str, String)],
        body: String,
    ) -> Result<String, TransportError>;
}
