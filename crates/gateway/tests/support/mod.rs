//! Scripted HTTP transport for driving the BTC-e adapter without a network

#![allow(dead_code)]

use async_trait::async_trait;
use helios_clock::{ManualClock, ManualTimer};
use helios_gateway::{BtceConfig, HttpTransport, TransportError};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

pub const PUBLIC_URL: &str = "http://btce.test/api/3";
pub const TRADE_URL: &str = "http://btce.test/tapi";

/// Clock start for tests: 2014-05-13T16:53:20Z
pub const START_MILLIS: i64 = 1_400_000_000_000;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    /// Decoded form fields, in body order
    pub fn form(&self) -> Vec<(String, String)> {
        serde_urlencoded::from_str(&self.body).unwrap()
    }

    pub fn form_value(&self, name: &str) -> Option<String> {
        self.form().into_iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone)]
enum Scripted {
    Body(String),
    Fail,
}

/// Answers by URL from scripted queues; the last answer for a URL repeats.
/// Unscripted URLs fail with a connection error.
#[derive(Default)]
pub struct MockTransport {
    scripts: Mutex<HashMap<String, VecDeque<Scripted>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, url: &str, body: &str) {
        self.push(url, Scripted::Body(body.to_string()));
    }

    pub fn fail(&self, url: &str) {
        self.push(url, Scripted::Fail);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    pub fn requests_to(&self, url: &str) -> Vec<RecordedRequest> {
        self.requests().into_iter().filter(|r| r.url == url).collect()
    }

    fn push(&self, url: &str, answer: Scripted) {
        self.scripts
            .lock()
            .entry(url.to_string())
            .or_default()
            .push_back(answer);
    }

    fn answer(&self, request: RecordedRequest) -> Result<String, TransportError> {
        let url = request.url.clone();
        self.requests.lock().push(request);

        let mut scripts = self.scripts.lock();
        let answer = match scripts.get_mut(&url) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };
        match answer {
            Some(Scripted::Body(body)) => Ok(body),
            Some(Scripted::Fail) | None => {
                Err(TransportError::Connection(format!("{}: connection refused", url)))
            }
        }
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String, TransportError> {
        self.answer(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            query: query.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
            headers: Vec::new(),
            body: String::new(),
        })
    }

    async fn post_form(
        &self,
        url: &str,
        headers: &[(&str, String)],
        body: String,
    ) -> Result<String, TransportError> {
        self.answer(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            query: Vec::new(),
            headers: headers.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
            body,
        })
    }
}

pub fn test_config() -> BtceConfig {
    BtceConfig {
        public_rest_url: PUBLIC_URL.to_string(),
        trade_rest_url: TRADE_URL.to_string(),
        api_key: "test-key".to_string(),
        api_secret: "test-secret".to_string(),
        ..BtceConfig::default()
    }
}

pub fn manual_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::from_millis(START_MILLIS))
}

pub fn manual_timer() -> ManualTimer {
    ManualTimer::new()
}

pub fn depth_url(pair_key: &str) -> String {
    format!("{}/depth/{}", PUBLIC_URL, pair_key)
}

pub fn trades_url(pair_key: &str) -> String {
    format!("{}/trades/{}", PUBLIC_URL, pair_key)
}

pub fn trade_api(method: &str) -> String {
    format!("{}/{}", TRADE_URL, method)
}
