//! HTTP transport seam.
//!
//! The search client only needs "GET this URL, give me status and body".
//! Keeping that behind a trait lets tests script responses without a network.

use crate::model::TransportError;
use reqwest::Url;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Raw HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// 200 response with `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Black-box request/response function.
///
/// Implementations must be `Send` so the client can live on the fetch
/// worker thread.
pub trait Transport: Send {
    /// Perform a GET request.
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}

/// Blocking `reqwest` transport.
///
/// No timeout is configured: an in-flight request runs until the server
/// answers or the connection fails.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("pixscroll/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| TransportError::new(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| TransportError::new(e.without_url().to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| TransportError::new(e.without_url().to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

/// Transport that replays queued responses in order and records every
/// requested URL. Used by tests and the acceptance harness.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requested: Mutex<Vec<Url>>,
}

impl ScriptedTransport {
    /// Transport that answers with `responses`, in order.
    pub fn new(responses: Vec<Result<HttpResponse, TransportError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Queue one more response.
    pub fn push(&self, response: Result<HttpResponse, TransportError>) {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(response);
        }
    }

    /// URLs requested so far, oldest first.
    pub fn requested(&self) -> Vec<Url> {
        self.requested
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }

    /// The `page` parameter of every request so far.
    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested()
            .iter()
            .filter_map(|url| {
                url.query_pairs()
                    .find(|(k, _)| k == "page")
                    .and_then(|(_, v)| v.parse().ok())
            })
            .collect()
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        if let Ok(mut urls) = self.requested.lock() {
            urls.push(url.clone());
        }
        self.responses
            .lock()
            .map_err(|_| TransportError::new("scripted transport poisoned"))?
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted response left")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_2xx_only() {
        assert!(HttpResponse::ok("").is_success());
        assert!(HttpResponse { status: 204, body: String::new() }.is_success());
        assert!(!HttpResponse { status: 301, body: String::new() }.is_success());
        assert!(!HttpResponse { status: 400, body: String::new() }.is_success());
        assert!(!HttpResponse { status: 500, body: String::new() }.is_success());
    }

    #[test]
    fn http_transport_builds() {
        assert!(HttpTransport::new().is_ok());
    }

    #[test]
    fn scripted_transport_replays_in_order_then_errors() {
        let transport = ScriptedTransport::new(vec![
            Ok(HttpResponse::ok("first")),
            Err(TransportError::new("boom")),
        ]);
        let url = Url::parse("https://example.test/?page=7").unwrap();

        assert_eq!(transport.get(&url).unwrap().body, "first");
        assert_eq!(transport.get(&url).unwrap_err().message(), "boom");
        assert!(transport.get(&url).is_err(), "Exhausted script should error");
        assert_eq!(transport.requested_pages(), vec![7, 7, 7]);
    }
}
