// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! HTTP client wrapper over `reqwest`.
//!
//! Owns the connection pool, merges per-client default headers with per-request
//! headers, and normalizes transport failures into [`HttpClientError`]. The
//! timeout configured at construction applies uniformly; callers do not
//! override it per request.

use std::{collections::HashMap, fmt::Debug, time::Duration};

use bytes::Bytes;
use reqwest::{Method, StatusCode, multipart::Form};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum HttpClientError {
    #[error("HTTP error: {0}")]
    Error(String),

    #[error("HTTP request timed out: {0}")]
    TimeoutError(String),

    #[error("Invalid proxy configuration: {0}")]
    InvalidProxy(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuildError(String),
}

impl From<reqwest::Error> for HttpClientError {
    fn from(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::TimeoutError(source.to_string())
        } else {
            Self::Error(source.to_string())
        }
    }
}

/// A materialized HTTP response with the body fully read.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

/// Shared HTTP transport for API clients.
pub struct HttpClient {
    client: reqwest::Client,
    default_headers: HashMap<String, String>,
}

impl Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(HttpClient))
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a new [`HttpClient`].
    ///
    /// # Errors
    ///
    /// - Returns [`HttpClientError::InvalidProxy`] if the proxy URL is malformed.
    /// - Returns [`HttpClientError::ClientBuildError`] if building the client fails.
    pub fn new(
        default_headers: HashMap<String, String>,
        timeout_secs: Option<u64>,
        proxy_url: Option<String>,
    ) -> Result<Self, HttpClientError> {
        let mut builder = reqwest::Client::builder();

        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if let Some(url) = proxy_url {
            let proxy = reqwest::Proxy::all(&url)
                .map_err(|e| HttpClientError::InvalidProxy(e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| HttpClientError::ClientBuildError(e.to_string()))?;

        Ok(Self {
            client,
            default_headers,
        })
    }

    /// Sends a request with an optional byte body.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or times out. Non-2xx statuses
    /// are NOT errors at this layer; callers inspect [`HttpResponse::status`].
    pub async fn request(
        &self,
        method: Method,
        url: String,
        headers: Option<HashMap<String, String>>,
        body: Option<Bytes>,
    ) -> Result<HttpResponse, HttpClientError> {
        let mut request = self.client.request(method, &url);

        for (key, value) in self.default_headers.iter().chain(headers.iter().flatten()) {
            request = request.header(key.as_str(), value.as_str());
        }

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        Self::into_response(response).await
    }

    /// Sends a multipart form request.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or times out.
    pub async fn request_multipart(
        &self,
        method: Method,
        url: String,
        headers: Option<HashMap<String, String>>,
        form: Form,
    ) -> Result<HttpResponse, HttpClientError> {
        let mut request = self.client.request(method, &url);

        for (key, value) in self.default_headers.iter().chain(headers.iter().flatten()) {
            request = request.header(key.as_str(), value.as_str());
        }

        let response = request.multipart(form).send().await?;
        Self::into_response(response).await
    }

    async fn into_response(response: reqwest::Response) -> Result<HttpResponse, HttpClientError> {
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(key, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (key.to_string(), value.to_string()))
            })
            .collect();
        let body = response.bytes().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_client_creation() {
        let client = HttpClient::new(HashMap::new(), Some(60), None);
        assert!(client.is_ok());
    }

    #[rstest]
    fn test_invalid_proxy_rejected() {
        let result = HttpClient::new(HashMap::new(), None, Some("::not a proxy::".to_string()));
        assert!(matches!(result, Err(HttpClientError::InvalidProxy(_))));
    }

    #[rstest]
    fn test_timeout_error_display() {
        let error = HttpClientError::TimeoutError("deadline elapsed".to_string());
        assert_eq!(error.to_string(), "HTTP request timed out: deadline elapsed");
    }
}
