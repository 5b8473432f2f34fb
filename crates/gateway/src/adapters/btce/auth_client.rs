//! Signed calls to the BTC-e trade API
//!
//! Every call is a form POST to `{trade_base}/{method}` whose body carries the
//! method fields, a `nonce` and the `method` name. The body is signed with
//! HMAC-SHA512 over its exact bytes; the signature and API key travel in the
//! `Sign` and `Key` headers.

use std::fmt;
use std::sync::Arc;

use helios_ports::Clock;
use hmac::{Hmac, Mac};
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::Sha512;

use super::nonce::NonceGenerator;
use crate::error::GatewayError;
use crate::http::HttpTransport;

const LOG_TARGET: &str = "helios::btce::auth";

/// API key and secret. Values never show up in `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a form body with the secret
    pub fn sign(&self, body: &str) -> Result<String, GatewayError> {
        sign_form(&self.api_secret, body)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<REDACTED>")
            .field("api_secret", &"<REDACTED>")
            .finish()
    }
}

/// Lowercase hex HMAC-SHA512 of `body` keyed by `secret`
pub fn sign_form(secret: &str, body: &str) -> Result<String, GatewayError> {
    let mut mac = Hmac::<Sha512>::new_from_slice(secret.as_bytes())
        .map_err(|e| GatewayError::Signing(e.to_string()))?;
    mac.update(body.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Response envelope of every trade API call
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// 1 on success, 0 on a business rejection
    pub success: u8,
    #[serde(rename = "return")]
    pub result: Option<T>,
    pub error: Option<String>,
}

/// What an [`ApiResponse`] amounts to
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Success(T),
    /// The exchange declined; carries its message verbatim (empty if none)
    Failure(String),
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.success == 1
    }

    pub fn into_outcome(self) -> Result<ApiOutcome<T>, GatewayError> {
        if !self.is_success() {
            return Ok(ApiOutcome::Failure(self.error.unwrap_or_default()));
        }
        self.result.map(ApiOutcome::Success).ok_or_else(|| {
            GatewayError::Conversion("successful response without a return value".to_string())
        })
    }
}

/// Client for the authenticated trade API
///
/// Owns the nonce sequence for its API key: two clients sharing a key would
/// race each other's nonces.
pub struct AuthenticatedApiClient {
    http: Arc<dyn HttpTransport>,
    base_url: String,
    credentials: Credentials,
    nonces: NonceGenerator,
}

impl AuthenticatedApiClient {
    pub fn new(
        http: Arc<dyn HttpTransport>,
        base_url: &str,
        credentials: Credentials,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            nonces: NonceGenerator::new(clock),
        }
    }

    pub fn endpoint(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    /// Encode `params` followed by a fresh `nonce` and the `method` name
    pub fn build_form<P: Serialize>(&self, method: &str, params: &P) -> Result<String, GatewayError> {
        let fields = serde_urlencoded::to_string(params)?;
        let trailer = serde_urlencoded::to_string(vec![
            ("nonce", self.nonces.next().to_string()),
            ("method", method.to_string()),
        ])?;

        if fields.is_empty() {
            Ok(trailer)
        } else {
            Ok(format!("{}&{}", fields, trailer))
        }
    }

    /// Sign and POST one trade API call
    ///
    /// `Ok` covers business rejections too; branch on
    /// [`ApiResponse::into_outcome`].
    pub async fn post<P, T>(&self, method: &str, params: &P) -> Result<ApiResponse<T>, GatewayError>
    where
        P: Serialize + Sync,
        T: DeserializeOwned,
    {
        let form = self.build_form(method, params)?;
        let headers = [
            ("Key", self.credentials.api_key().to_string()),
            ("Sign", self.credentials.sign(&form)?),
        ];
        let url = self.endpoint(method);

        debug!(target: LOG_TARGET, "POST {} {}", url, form);
        let body = self.http.post_form(&url, &headers, form).await?;
        debug!(target: LOG_TARGET, "{} answered {}", method, body);

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use async_trait::async_trait;
    use helios_clock::ManualClock;
    use parking_lot::Mutex;
    use serde_json::Value;

    #[test]
    fn test_sign_reference_vectors() {
        assert_eq!(
            sign_form("key", "The quick brown fox jumps over the lazy dog").unwrap(),
            "b42af09057bac1e2d41708e48a902e09b5ff7f12ab428a4fe86653c73dd248fb\
             82f948a549f7b791a5b41915ee4d1ec3935357e4e2317250d0372afa2ebeeb3a"
        );
        assert_eq!(
            sign_form("Jefe", "what do ya want for nothing?").unwrap(),
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_credentials_debug_redacted() {
        let printed = format!("{:?}", Credentials::new("my-key", "my-secret"));
        assert!(!printed.contains("my-key"));
        assert!(!printed.contains("my-secret"));
    }

    #[test]
    fn test_outcome() {
        let ok: ApiResponse<Value> =
            serde_json::from_str(r#"{"success":1,"return":{"order_id":7}}"#).unwrap();
        assert!(matches!(ok.into_outcome(), Ok(ApiOutcome::Success(_))));

        let rejected: ApiResponse<Value> =
            serde_json::from_str(r#"{"success":0,"error":"invalid nonce parameter"}"#).unwrap();
        assert_eq!(
            rejected.into_outcome().unwrap(),
            ApiOutcome::Failure("invalid nonce parameter".to_string())
        );

        let silent: ApiResponse<Value> = serde_json::from_str(r#"{"success":0}"#).unwrap();
        assert_eq!(silent.into_outcome().unwrap(), ApiOutcome::Failure(String::new()));

        let empty: ApiResponse<Value> = serde_json::from_str(r#"{"success":1}"#).unwrap();
        assert!(matches!(empty.into_outcome(), Err(GatewayError::Conversion(_))));
    }

    #[derive(Default)]
    struct RecordingTransport {
        posts: Mutex<Vec<(String, Vec<(String, String)>, String)>>,
    }

    #[async_trait]
    impl HttpTransport for RecordingTransport {
        async fn get(&self, _url: &str, _query: &[(&str, String)]) -> Result<String, TransportError> {
            Err(TransportError::Request("unexpected GET".into()))
        }

        async fn post_form(
            &self,
            url: &str,
            headers: &[(&str, String)],
            body: String,
        ) -> Result<String, TransportError> {
            let headers = headers.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
            self.posts.lock().push((url.to_string(), headers, body));
            Ok(r#"{"success":1,"return":{"order_id":3}}"#.to_string())
        }
    }

    #[derive(Serialize)]
    struct Fields {
        pair: &'static str,
        amount: u32,
    }

    fn client(http: Arc<RecordingTransport>, base: &str) -> AuthenticatedApiClient {
        AuthenticatedApiClient::new(
            http,
            base,
            Credentials::new("api-key", "secret"),
            Arc::new(ManualClock::from_millis(1_400_000_000_000)),
        )
    }

    #[test]
    fn test_form_layout() {
        let client = client(Arc::new(RecordingTransport::default()), "https://x/tapi");

        let form = client
            .build_form("Trade", &Fields { pair: "btc_usd", amount: 2 })
            .unwrap();
        assert_eq!(form, "pair=btc_usd&amount=2&nonce=140000000000000&method=Trade");

        let form = client.build_form("getInfo", &()).unwrap();
        assert_eq!(form, "nonce=140000000000001&method=getInfo");
    }

    #[tokio::test]
    async fn test_post_signs_exact_body() {
        let http = Arc::new(RecordingTransport::default());
        let client = client(http.clone(), "https://x/tapi/");

        let response: ApiResponse<Value> = client
            .post("CancelOrder", &Fields { pair: "ltc_btc", amount: 1 })
            .await
            .unwrap();
        assert!(response.is_success());

        let posts = http.posts.lock();
        let (url, headers, body) = &posts[0];
        assert_eq!(url, "https://x/tapi/CancelOrder");
        assert_eq!(headers[0], ("Key".to_string(), "api-key".to_string()));
        assert_eq!(headers[1].0, "Sign");
        assert_eq!(headers[1].1, sign_form("secret", body).unwrap());
        assert!(body.ends_with("&method=CancelOrder"));
    }
}
