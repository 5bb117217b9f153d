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

//! HTTP client for the Mercato marketplace REST API.
//!
//! This module exports two complementary HTTP clients following the
//! standardized two-layer architecture:
//!
//! - [`MercatoRawHttpClient`]: low-level methods matching the backend
//!   endpoints, plus the envelope plumbing every operation shares.
//! - [`MercatoHttpClient`]: wraps the raw client in an `Arc` for cheap
//!   cloning across concurrent UI tasks, normalizes attachments, and exposes
//!   session helpers.
//!
//! ## Protocol
//!
//! Every authenticated call reads the bearer token from the injected
//! [`TokenStore`] and fails fast, before any encryption or network I/O,
//! when no token is present. Request payloads are encrypted and wrapped as
//! `{"data": "<ciphertext>"}` (or carried as the `data` text part of a
//! multipart form alongside raw file parts); responses arrive in the same
//! envelope and are decrypted and parsed back into [`serde_json::Value`].
//! The invoice download is the one endpoint returning a raw binary body.
//!
//! Operations are stateless and independent; callers sequence dependent
//! calls themselves. There is no retry, no backoff, and no caching of which
//! fallback route served the previous call.

use std::{
    collections::HashMap,
    fmt::{Debug, Formatter},
    sync::Arc,
};

use bytes::Bytes;
use mercato_cryptography::PayloadCodec;
use mercato_network::{fallback, http::HttpClient};
use reqwest::{
    Method,
    header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    multipart::{Form, Part},
};
use serde::Serialize;
use serde_json::{Value, json};

use super::{
    error::MercatoHttpError,
    models::{Attachments, EncryptedEnvelope, FilePart, ProductsPage},
    parse,
    query::{CATALOG_PAGE_LIMIT, CatalogParams, DEFAULT_PAGE, DEFAULT_PAGE_LIMIT, ListParams},
};
use crate::common::{
    consts::MERCATO_USER_AGENT, credential::TokenStore, enums::MercatoEnvironment,
    urls::get_http_base_url,
};

/// Candidate routes for [`MercatoRawHttpClient::get_notifications`], in
/// priority order.
pub const NOTIFICATION_ROUTES: &[&str] = &[
    "/account/get_notifications/",
    "/client/notifications/",
    "/client/notifications",
];

/// Candidate routes for [`MercatoRawHttpClient::mark_notification_as_read`],
/// in priority order.
pub const MARK_NOTIFICATION_READ_ROUTES: &[&str] = &[
    "/client/notifications/mark_read/",
    "/account/mark_notification_read/",
];

/// Provides a raw HTTP client for the Mercato marketplace REST API.
///
/// Holds the transport, the payload codec, and the injected token store, and
/// implements one async method per backend operation. All envelope handling
/// is consolidated in `get_encrypted` / `post_encrypted` / `post_multipart`.
pub struct MercatoRawHttpClient {
    base_url: String,
    client: HttpClient,
    codec: PayloadCodec,
    token_store: Arc<dyn TokenStore>,
}

impl Debug for MercatoRawHttpClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(MercatoRawHttpClient))
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl MercatoRawHttpClient {
    /// Creates a new [`MercatoRawHttpClient`] using the production base URL,
    /// optionally overridden with a custom one.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: Option<String>,
        encryption_key: [u8; 32],
        token_store: Arc<dyn TokenStore>,
        timeout_secs: Option<u64>,
        proxy_url: Option<String>,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            base_url: base_url
                .unwrap_or_else(|| get_http_base_url(MercatoEnvironment::Production).to_string()),
            client: HttpClient::new(Self::default_headers(), timeout_secs, proxy_url)
                .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {e}"))?,
            codec: PayloadCodec::new(encryption_key),
            token_store,
        })
    }

    fn default_headers() -> HashMap<String, String> {
        HashMap::from([(USER_AGENT.to_string(), MERCATO_USER_AGENT.to_string())])
    }

    fn auth_headers(token: &str) -> HashMap<String, String> {
        HashMap::from([(AUTHORIZATION.to_string(), format!("Bearer {token}"))])
    }

    /// Reads the bearer token, failing fast when no session exists.
    async fn bearer_token(&self) -> Result<String, MercatoHttpError> {
        match self.token_store.get().await {
            Ok(Some(token)) => Ok(token),
            Ok(None) => Err(MercatoHttpError::MissingToken),
            Err(error) => Err(MercatoHttpError::TokenStore(error.to_string())),
        }
    }

    fn check_status(
        status: reqwest::StatusCode,
        body: &[u8],
    ) -> Result<(), MercatoHttpError> {
        if status.is_success() {
            Ok(())
        } else {
            Err(MercatoHttpError::HttpStatus {
                status: status.as_u16(),
                message: String::from_utf8_lossy(body).to_string(),
            })
        }
    }

    /// Opens the `{data: <ciphertext>}` envelope and parses the plaintext.
    fn decode_envelope(&self, endpoint: &str, body: &[u8]) -> Result<Value, MercatoHttpError> {
        let envelope: Value =
            serde_json::from_slice(body).map_err(|e| MercatoHttpError::Deserialization {
                error: e.to_string(),
                body: String::from_utf8_lossy(body).to_string(),
            })?;

        let ciphertext = envelope.get("data").and_then(Value::as_str).ok_or_else(|| {
            MercatoHttpError::MissingEnvelope {
                endpoint: endpoint.to_string(),
            }
        })?;

        let plaintext = self.codec.decrypt_payload(ciphertext)?;

        serde_json::from_str(&plaintext).map_err(|e| MercatoHttpError::Deserialization {
            error: e.to_string(),
            body: plaintext,
        })
    }

    async fn get_encrypted(
        &self,
        endpoint: &str,
        query: Option<&str>,
    ) -> Result<Value, MercatoHttpError> {
        let result: Result<Value, MercatoHttpError> = async {
            let token = self.bearer_token().await?;
            let url = match query {
                Some(query) if !query.is_empty() => {
                    format!("{}{endpoint}?{query}", self.base_url)
                }
                _ => format!("{}{endpoint}", self.base_url),
            };

            let response = self
                .client
                .request(Method::GET, url, Some(Self::auth_headers(&token)), None)
                .await
                .map_err(|e| MercatoHttpError::NetworkError(e.to_string()))?;

            Self::check_status(response.status, &response.body)?;
            self.decode_envelope(endpoint, &response.body)
        }
        .await;

        result.inspect_err(|error| tracing::error!("GET {endpoint} failed: {error}"))
    }

    async fn post_encrypted<T: Serialize>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> Result<Value, MercatoHttpError> {
        let result: Result<Value, MercatoHttpError> = async {
            let token = self.bearer_token().await?;
            let envelope = EncryptedEnvelope {
                data: self.codec.encrypt_payload(payload)?,
            };
            let body = serde_json::to_vec(&envelope)
                .map_err(|e| MercatoHttpError::Serialization {
                    error: e.to_string(),
                })?;

            let mut headers = Self::auth_headers(&token);
            headers.insert(CONTENT_TYPE.to_string(), "application/json".to_string());

            let url = format!("{}{endpoint}", self.base_url);
            let response = self
                .client
                .request(Method::POST, url, Some(headers), Some(Bytes::from(body)))
                .await
                .map_err(|e| MercatoHttpError::NetworkError(e.to_string()))?;

            Self::check_status(response.status, &response.body)?;
            self.decode_envelope(endpoint, &response.body)
        }
        .await;

        result.inspect_err(|error| tracing::error!("POST {endpoint} failed: {error}"))
    }

    /// Sends a multipart form: one `data` text part carrying the ciphertext
    /// of the non-file payload, plus one part per file under `file_field`.
    async fn post_multipart<T: Serialize>(
        &self,
        endpoint: &str,
        payload: &T,
        file_field: &str,
        files: &[FilePart],
    ) -> Result<Value, MercatoHttpError> {
        let result: Result<Value, MercatoHttpError> = async {
            let token = self.bearer_token().await?;
            let mut form = Form::new().text("data", self.codec.encrypt_payload(payload)?);

            for file in files {
                let part = Part::bytes(file.bytes.to_vec())
                    .file_name(file.file_name.clone())
                    .mime_str(&file.mime_type)
                    .map_err(|e| MercatoHttpError::InvalidAttachment(e.to_string()))?;
                form = form.part(file_field.to_string(), part);
            }

            let url = format!("{}{endpoint}", self.base_url);
            let response = self
                .client
                .request_multipart(Method::POST, url, Some(Self::auth_headers(&token)), form)
                .await
                .map_err(|e| MercatoHttpError::NetworkError(e.to_string()))?;

            Self::check_status(response.status, &response.body)?;
            self.decode_envelope(endpoint, &response.body)
        }
        .await;

        result.inspect_err(|error| tracing::error!("POST {endpoint} (multipart) failed: {error}"))
    }

    /// Fetches a raw binary body (no envelope).
    async fn get_raw(&self, endpoint: &str) -> Result<Bytes, MercatoHttpError> {
        let result: Result<Bytes, MercatoHttpError> = async {
            let token = self.bearer_token().await?;
            let url = format!("{}{endpoint}", self.base_url);

            let response = self
                .client
                .request(Method::GET, url, Some(Self::auth_headers(&token)), None)
                .await
                .map_err(|e| MercatoHttpError::NetworkError(e.to_string()))?;

            Self::check_status(response.status, &response.body)?;
            Ok(response.body)
        }
        .await;

        result.inspect_err(|error| tracing::error!("GET {endpoint} failed: {error}"))
    }

    // ========================================================================
    // Dashboard & Profile
    // ========================================================================

    pub async fn get_dashboard(&self) -> Result<Value, MercatoHttpError> {
        self.get_encrypted("/client/dashboard/", None).await
    }

    pub async fn get_client_profile(&self) -> Result<Value, MercatoHttpError> {
        self.get_encrypted("/client/profile/", None).await
    }

    /// Updates the profile; `profile_image` carries zero or one image file.
    pub async fn update_client_profile(
        &self,
        payload: &Value,
        profile_image: &[FilePart],
    ) -> Result<Value, MercatoHttpError> {
        self.post_multipart("/client/profile/", payload, "profile_image", profile_image)
            .await
    }

    pub async fn change_password(&self, payload: &Value) -> Result<Value, MercatoHttpError> {
        self.post_encrypted("/client/change_password/", payload).await
    }

    pub async fn upload_client_docs(&self, docs: &[FilePart]) -> Result<Value, MercatoHttpError> {
        self.post_multipart("/client/upload_docs/", &json!({}), "docs", docs)
            .await
    }

    // ========================================================================
    // Jobs
    // ========================================================================

    pub async fn create_job(
        &self,
        payload: &Value,
        docs: &[FilePart],
    ) -> Result<Value, MercatoHttpError> {
        self.post_multipart("/client/create_jobs/", payload, "docs", docs)
            .await
    }

    pub async fn get_my_jobs(&self, params: &ListParams) -> Result<Value, MercatoHttpError> {
        let query = params.to_query(DEFAULT_PAGE_LIMIT);
        self.get_encrypted("/client/my_jobs/", Some(&query)).await
    }

    pub async fn get_job_details(&self, job_id: &str) -> Result<Value, MercatoHttpError> {
        let query = format!("job_id={}", urlencoding::encode(job_id));
        self.get_encrypted("/client/job_details/", Some(&query)).await
    }

    pub async fn update_job(
        &self,
        payload: &Value,
        docs: &[FilePart],
    ) -> Result<Value, MercatoHttpError> {
        self.post_multipart("/client/update_job/", payload, "docs", docs)
            .await
    }

    pub async fn delete_job(&self, job_id: &str) -> Result<Value, MercatoHttpError> {
        self.post_encrypted("/client/delete_job/", &json!({"job_id": job_id}))
            .await
    }

    pub async fn save_job(&self, job_id: &str) -> Result<Value, MercatoHttpError> {
        self.post_encrypted("/client/save_job/", &json!({"job_id": job_id}))
            .await
    }

    // ========================================================================
    // Orders
    // ========================================================================

    pub async fn get_orders(&self, params: &ListParams) -> Result<Value, MercatoHttpError> {
        let query = params.to_query(DEFAULT_PAGE_LIMIT);
        self.get_encrypted("/client/orders/", Some(&query)).await
    }

    /// Fetches one order. Unlike its siblings this endpoint surfaces the
    /// server-provided failure message when the backend rejects the request.
    pub async fn get_order_details(&self, order_id: &str) -> Result<Value, MercatoHttpError> {
        match self
            .post_encrypted("/client/get_order_details/", &json!({"order_id": order_id}))
            .await
        {
            Err(MercatoHttpError::HttpStatus { status, message }) => {
                let message = parse::extract_server_message(&message).unwrap_or(message);
                Err(MercatoHttpError::HttpStatus { status, message })
            }
            other => other,
        }
    }

    pub async fn cancel_order(&self, order_id: &str) -> Result<Value, MercatoHttpError> {
        self.post_encrypted("/client/cancel_order/", &json!({"order_id": order_id}))
            .await
    }

    pub async fn place_order(&self, payload: &Value) -> Result<Value, MercatoHttpError> {
        self.post_encrypted("/client/place_order/", payload).await
    }

    // ========================================================================
    // Products & Services
    // ========================================================================

    /// Lists products, normalizing the backend's response variants into one
    /// guaranteed page shape.
    pub async fn get_products(
        &self,
        params: &CatalogParams,
    ) -> Result<ProductsPage, MercatoHttpError> {
        let page = params.page.unwrap_or(DEFAULT_PAGE);
        let limit = params.limit.unwrap_or(CATALOG_PAGE_LIMIT);
        let response = self
            .get_encrypted("/client/products/", Some(&params.to_query()))
            .await?;
        Ok(parse::normalize_catalog_page(response, page, limit))
    }

    pub async fn get_product(&self, product_id: &str) -> Result<Value, MercatoHttpError> {
        self.post_encrypted("/client/product/", &json!({"product_id": product_id}))
            .await
    }

    /// Lists services; shares the catalog normalizer with [`Self::get_products`].
    pub async fn get_services(
        &self,
        params: &CatalogParams,
    ) -> Result<ProductsPage, MercatoHttpError> {
        let page = params.page.unwrap_or(DEFAULT_PAGE);
        let limit = params.limit.unwrap_or(CATALOG_PAGE_LIMIT);
        let response = self
            .get_encrypted("/client/services/", Some(&params.to_query()))
            .await?;
        Ok(parse::normalize_catalog_page(response, page, limit))
    }

    pub async fn get_service(&self, service_id: &str) -> Result<Value, MercatoHttpError> {
        self.post_encrypted("/client/service/", &json!({"service_id": service_id}))
            .await
    }

    // ========================================================================
    // Conversations & Messages
    // ========================================================================

    pub async fn get_conversations(&self, params: &ListParams) -> Result<Value, MercatoHttpError> {
        let query = params.to_query(DEFAULT_PAGE_LIMIT);
        self.get_encrypted("/client/conversations/", Some(&query))
            .await
    }

    pub async fn get_messages(
        &self,
        conversation_id: &str,
        params: &ListParams,
    ) -> Result<Value, MercatoHttpError> {
        let endpoint = format!("/client/conversations/{conversation_id}/messages/");
        let query = params.to_query(DEFAULT_PAGE_LIMIT);
        self.get_encrypted(&endpoint, Some(&query)).await
    }

    pub async fn send_message(&self, payload: &Value) -> Result<Value, MercatoHttpError> {
        self.post_encrypted("/client/conversations/send_message/", payload)
            .await
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    /// Fetches notifications, probing [`NOTIFICATION_ROUTES`] in order until
    /// one succeeds.
    pub async fn get_notifications(&self, params: &ListParams) -> Result<Value, MercatoHttpError> {
        self.bearer_token().await?;
        let query = params.to_query(DEFAULT_PAGE_LIMIT);

        fallback::first_success("get_notifications", NOTIFICATION_ROUTES, |route| {
            let query = query.clone();
            async move { self.get_encrypted(route, Some(&query)).await }
        })
        .await
    }

    /// Marks one notification read, probing [`MARK_NOTIFICATION_READ_ROUTES`]
    /// in order until one succeeds.
    pub async fn mark_notification_as_read(
        &self,
        notification_id: &str,
    ) -> Result<Value, MercatoHttpError> {
        self.bearer_token().await?;
        let payload = json!({"notification_id": notification_id});

        fallback::first_success(
            "mark_notification_as_read",
            MARK_NOTIFICATION_READ_ROUTES,
            |route| {
                let payload = payload.clone();
                async move { self.post_encrypted(route, &payload).await }
            },
        )
        .await
    }

    // ========================================================================
    // Reviews & Favorites
    // ========================================================================

    pub async fn get_reviews(&self, params: &ListParams) -> Result<Value, MercatoHttpError> {
        let query = params.to_query(DEFAULT_PAGE_LIMIT);
        self.get_encrypted("/client/reviews/", Some(&query)).await
    }

    pub async fn create_review(&self, payload: &Value) -> Result<Value, MercatoHttpError> {
        self.post_encrypted("/client/create_review/", payload).await
    }

    pub async fn get_favorites(&self, params: &ListParams) -> Result<Value, MercatoHttpError> {
        let query = params.to_query(DEFAULT_PAGE_LIMIT);
        self.get_encrypted("/client/favorites/", Some(&query)).await
    }

    pub async fn add_favorite(&self, item_id: &str, kind: &str) -> Result<Value, MercatoHttpError> {
        self.post_encrypted("/client/add_favorite/", &json!({"item_id": item_id, "type": kind}))
            .await
    }

    pub async fn remove_favorite(
        &self,
        item_id: &str,
        kind: &str,
    ) -> Result<Value, MercatoHttpError> {
        self.post_encrypted(
            "/client/remove_favorite/",
            &json!({"item_id": item_id, "type": kind}),
        )
        .await
    }

    // ========================================================================
    // Support & Invoices
    // ========================================================================

    pub async fn get_support_tickets(
        &self,
        params: &ListParams,
    ) -> Result<Value, MercatoHttpError> {
        let query = params.to_query(DEFAULT_PAGE_LIMIT);
        self.get_encrypted("/client/support_tickets/", Some(&query))
            .await
    }

    pub async fn create_support_ticket(&self, payload: &Value) -> Result<Value, MercatoHttpError> {
        self.post_encrypted("/client/create_support_ticket/", payload)
            .await
    }

    pub async fn get_invoice_list(&self, params: &ListParams) -> Result<Value, MercatoHttpError> {
        let query = params.to_query(DEFAULT_PAGE_LIMIT);
        self.get_encrypted("/client/get_invoice_list/", Some(&query))
            .await
    }

    /// Downloads an invoice document as raw bytes; the one endpoint that does
    /// not reply with the encrypted envelope.
    pub async fn download_invoice(&self, invoice_id: &str) -> Result<Bytes, MercatoHttpError> {
        let endpoint = format!("/client/invoice/{invoice_id}/");
        self.get_raw(&endpoint).await
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Stores the session token (called after login).
    pub async fn set_auth_token(&self, token: &str) -> Result<(), MercatoHttpError> {
        self.token_store
            .set(token)
            .await
            .map_err(|e| MercatoHttpError::TokenStore(e.to_string()))
    }

    /// Returns the stored token; storage failures degrade to `None` so the
    /// caller can treat the result as a session guard.
    pub async fn get_auth_token(&self) -> Option<String> {
        match self.token_store.get().await {
            Ok(token) => token,
            Err(error) => {
                tracing::warn!("Token read failed: {error}");
                None
            }
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.get_auth_token().await.is_some()
    }

    /// Clears the session token. Storage failures are logged but never
    /// propagated; logout must not be blocked.
    pub async fn clear_auth_token(&self) {
        if let Err(error) = self.token_store.clear().await {
            tracing::error!("Token clear failed: {error}");
        }
    }
}

/// Provides a higher-level HTTP client for the Mercato marketplace REST API.
///
/// Wraps the raw client in an `Arc` so UI tasks can clone it freely, accepts
/// flexible attachment arguments (a single file or a list) for upload
/// operations, and re-exposes the full operation surface.
#[derive(Clone)]
pub struct MercatoHttpClient {
    inner: Arc<MercatoRawHttpClient>,
}

impl Debug for MercatoHttpClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(MercatoHttpClient))
            .field("inner", &self.inner)
            .finish()
    }
}

impl MercatoHttpClient {
    /// Creates a new [`MercatoHttpClient`].
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: Option<String>,
        encryption_key: [u8; 32],
        token_store: Arc<dyn TokenStore>,
        timeout_secs: Option<u64>,
        proxy_url: Option<String>,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            inner: Arc::new(MercatoRawHttpClient::new(
                base_url,
                encryption_key,
                token_store,
                timeout_secs,
                proxy_url,
            )?),
        })
    }

    /// Access to the raw client for low-level calls.
    #[must_use]
    pub fn raw_client(&self) -> &Arc<MercatoRawHttpClient> {
        &self.inner
    }

    // ========================================================================
    // Dashboard & Profile
    // ========================================================================

    pub async fn get_dashboard(&self) -> Result<Value, MercatoHttpError> {
        self.inner.get_dashboard().await
    }

    pub async fn get_client_profile(&self) -> Result<Value, MercatoHttpError> {
        self.inner.get_client_profile().await
    }

    pub async fn update_client_profile(
        &self,
        payload: &Value,
        profile_image: impl Into<Attachments>,
    ) -> Result<Value, MercatoHttpError> {
        let profile_image = profile_image.into();
        self.inner
            .update_client_profile(payload, profile_image.as_slice())
            .await
    }

    pub async fn change_password(&self, payload: &Value) -> Result<Value, MercatoHttpError> {
        self.inner.change_password(payload).await
    }

    pub async fn upload_client_docs(
        &self,
        docs: impl Into<Attachments>,
    ) -> Result<Value, MercatoHttpError> {
        let docs = docs.into();
        self.inner.upload_client_docs(docs.as_slice()).await
    }

    // ========================================================================
    // Jobs
    // ========================================================================

    pub async fn create_job(
        &self,
        payload: &Value,
        docs: impl Into<Attachments>,
    ) -> Result<Value, MercatoHttpError> {
        let docs = docs.into();
        self.inner.create_job(payload, docs.as_slice()).await
    }

    pub async fn get_my_jobs(&self, params: &ListParams) -> Result<Value, MercatoHttpError> {
        self.inner.get_my_jobs(params).await
    }

    pub async fn get_job_details(&self, job_id: &str) -> Result<Value, MercatoHttpError> {
        self.inner.get_job_details(job_id).await
    }

    pub async fn update_job(
        &self,
        payload: &Value,
        docs: impl Into<Attachments>,
    ) -> Result<Value, MercatoHttpError> {
        let docs = docs.into();
        self.inner.update_job(payload, docs.as_slice()).await
    }

    pub async fn delete_job(&self, job_id: &str) -> Result<Value, MercatoHttpError> {
        self.inner.delete_job(job_id).await
    }

    pub async fn save_job(&self, job_id: &str) -> Result<Value, MercatoHttpError> {
        self.inner.save_job(job_id).await
    }

    // ========================================================================
    // Orders
    // ========================================================================

    pub async fn get_orders(&self, params: &ListParams) -> Result<Value, MercatoHttpError> {
        self.inner.get_orders(params).await
    }

    pub async fn get_order_details(&self, order_id: &str) -> Result<Value, MercatoHttpError> {
        self.inner.get_order_details(order_id).await
    }

    pub async fn cancel_order(&self, order_id: &str) -> Result<Value, MercatoHttpError> {
        self.inner.cancel_order(order_id).await
    }

    pub async fn place_order(&self, payload: &Value) -> Result<Value, MercatoHttpError> {
        self.inner.place_order(payload).await
    }

    // ========================================================================
    // Products & Services
    // ========================================================================

    pub async fn get_products(
        &self,
        params: &CatalogParams,
    ) -> Result<ProductsPage, MercatoHttpError> {
        self.inner.get_products(params).await
    }

    pub async fn get_product(&self, product_id: &str) -> Result<Value, MercatoHttpError> {
        self.inner.get_product(product_id).await
    }

    pub async fn get_services(
        &self,
        params: &CatalogParams,
    ) -> Result<ProductsPage, MercatoHttpError> {
        self.inner.get_services(params).await
    }

    pub async fn get_service(&self, service_id: &str) -> Result<Value, MercatoHttpError> {
        self.inner.get_service(service_id).await
    }

    // ========================================================================
    // Conversations & Messages
    // ========================================================================

    pub async fn get_conversations(&self, params: &ListParams) -> Result<Value, MercatoHttpError> {
        self.inner.get_conversations(params).await
    }

    pub async fn get_messages(
        &self,
        conversation_id: &str,
        params: &ListParams,
    ) -> Result<Value, MercatoHttpError> {
        self.inner.get_messages(conversation_id, params).await
    }

    pub async fn send_message(&self, payload: &Value) -> Result<Value, MercatoHttpError> {
        self.inner.send_message(payload).await
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    pub async fn get_notifications(&self, params: &ListParams) -> Result<Value, MercatoHttpError> {
        self.inner.get_notifications(params).await
    }

    pub async fn mark_notification_as_read(
        &self,
        notification_id: &str,
    ) -> Result<Value, MercatoHttpError> {
        self.inner.mark_notification_as_read(notification_id).await
    }

    // ========================================================================
    // Reviews & Favorites
    // ========================================================================

    pub async fn get_reviews(&self, params: &ListParams) -> Result<Value, MercatoHttpError> {
        self.inner.get_reviews(params).await
    }

    pub async fn create_review(&self, payload: &Value) -> Result<Value, MercatoHttpError> {
        self.inner.create_review(payload).await
    }

    pub async fn get_favorites(&self, params: &ListParams) -> Result<Value, MercatoHttpError> {
        self.inner.get_favorites(params).await
    }

    pub async fn add_favorite(&self, item_id: &str, kind: &str) -> Result<Value, MercatoHttpError> {
        self.inner.add_favorite(item_id, kind).await
    }

    pub async fn remove_favorite(
        &self,
        item_id: &str,
        kind: &str,
    ) -> Result<Value, MercatoHttpError> {
        self.inner.remove_favorite(item_id, kind).await
    }

    // ========================================================================
    // Support & Invoices
    // ========================================================================

    pub async fn get_support_tickets(
        &self,
        params: &ListParams,
    ) -> Result<Value, MercatoHttpError> {
        self.inner.get_support_tickets(params).await
    }

    pub async fn create_support_ticket(&self, payload: &Value) -> Result<Value, MercatoHttpError> {
        self.inner.create_support_ticket(payload).await
    }

    pub async fn get_invoice_list(&self, params: &ListParams) -> Result<Value, MercatoHttpError> {
        self.inner.get_invoice_list(params).await
    }

    pub async fn download_invoice(&self, invoice_id: &str) -> Result<Bytes, MercatoHttpError> {
        self.inner.download_invoice(invoice_id).await
    }

    // ========================================================================
    // Session
    // ========================================================================

    pub async fn set_auth_token(&self, token: &str) -> Result<(), MercatoHttpError> {
        self.inner.set_auth_token(token).await
    }

    pub async fn get_auth_token(&self) -> Option<String> {
        self.inner.get_auth_token().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.is_authenticated().await
    }

    pub async fn clear_auth_token(&self) {
        self.inner.clear_auth_token().await;
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::common::credential::MemoryTokenStore;

    fn test_client() -> MercatoHttpClient {
        MercatoHttpClient::new(
            None,
            [1u8; 32],
            Arc::new(MemoryTokenStore::new()),
            Some(60),
            None,
        )
        .unwrap()
    }

    #[rstest]
    fn test_client_creation_uses_production_url() {
        let client = test_client();
        assert!(
            format!("{:?}", client.raw_client()).contains("https://api.mercato.app/api/v1")
        );
    }

    #[rstest]
    fn test_debug_omits_secrets() {
        let client = test_client();
        let output = format!("{client:?}");
        assert!(!output.contains("key"));
        assert!(!output.contains("token:"));
    }

    #[rstest]
    fn test_notification_route_priority() {
        assert_eq!(NOTIFICATION_ROUTES[0], "/account/get_notifications/");
        assert_eq!(NOTIFICATION_ROUTES.len(), 3);
        assert_eq!(MARK_NOTIFICATION_READ_ROUTES.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn test_session_helpers() {
        let client = test_client();
        assert!(!client.is_authenticated().await);

        client.set_auth_token("tok").await.unwrap();
        assert!(client.is_authenticated().await);
        assert_eq!(client.get_auth_token().await.as_deref(), Some("tok"));

        client.clear_auth_token().await;
        assert!(!client.is_authenticated().await);
    }
}
