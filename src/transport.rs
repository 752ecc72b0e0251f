// Transport seam between the fetch cache and the network.
// Defines the request options model, the canonical identity encoding, and the
// production HTTP transport backed by reqwest.

use std::collections::BTreeMap;
use std::future::Future;

use reqwest::{
    Client,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::{Deserialize, Serialize};

use crate::error::{QuarryError, Result};

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

/// Options attached to a request: method, headers, and optional body.
///
/// Headers use an ordered map so the serialized form is deterministic; the
/// serialization participates in the cache identity, so two option values
/// that differ only in header insertion order still produce the same
/// identity. Semantically equivalent options expressed differently (say, an
/// explicit `GET` method versus relying on the default) still hash the same
/// here because serialization is structural, but distinct header or body
/// content always yields a distinct identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl RequestOptions {
    /// Options for a plain GET request.
    pub fn get() -> Self {
        Self::default()
    }

    /// Set a header, returning the modified options.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the request body, returning the modified options.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Canonical cache identity for these options against a target address.
    ///
    /// The encoding is the JSON serialization of the options concatenated
    /// with the address, in that order. The ordering is part of the identity
    /// contract: it must stay stable across calls for caching to work.
    pub fn identity(&self, url: &str) -> String {
        // Serializing a struct of strings cannot fail.
        let opts = serde_json::to_string(self).unwrap_or_default();
        format!("{opts}{url}")
    }
}

/// Asynchronous request transport.
///
/// The fetch cache is generic over this trait; production code uses
/// [`HttpTransport`], tests substitute a counting mock. Implementations
/// resolve to the raw response body text. Whether a non-success status is a
/// fault or just an unexpected body is up to the implementation; the cache
/// core never inspects status codes.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// HTTP transport backed by a shared reqwest client.
///
/// Relative addresses are joined to the base URL; absolute addresses pass
/// through untouched. Response bodies are returned for every status code —
/// upstream-reported failures arrive as data, not faults.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport with default JSON headers against a base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("quarry"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(QuarryError::Transport)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Resolve an address against the base URL.
    fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}{}", self.base_url, url)
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, url: &str, options: &RequestOptions) -> Result<String> {
        let url = self.resolve(url);

        let mut request = match options.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        for (name, value) in &options.headers {
            let value = HeaderValue::from_str(value)
                .map_err(|e| QuarryError::Header(e.to_string()))?;
            request = request.header(name.as_str(), value);
        }

        if let Some(body) = &options.body {
            request = request.body(body.clone());
        }

        let response = request.send().await.map_err(QuarryError::Transport)?;
        let text = response.text().await.map_err(QuarryError::Transport)?;
        Ok(text)
    }
}
