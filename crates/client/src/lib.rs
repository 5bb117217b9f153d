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

//! API access core for the Mercato marketplace mobile client.
//!
//! This crate provides the client-side counterpart of the marketplace REST
//! backend: jobs, orders, products, services, messaging, notifications,
//! reviews, favorites, support tickets, and invoices. It exports two
//! complementary HTTP clients following the standardized two-layer
//! architecture:
//!
//! - [`http::client::MercatoRawHttpClient`]: low-level methods matching the
//!   backend endpoints, including the encrypted envelope plumbing.
//! - [`http::client::MercatoHttpClient`]: cheaply cloneable client for
//!   concurrent UI tasks, adding attachment normalization and session
//!   helpers.
//!
//! Every authenticated call reads the bearer token from an injected
//! [`common::credential::TokenStore`], encrypts its payload through
//! `mercato-cryptography`, and decodes the `{data: <ciphertext>}` response
//! envelope. Server entities are passed through as [`serde_json::Value`]
//! without client-side modeling or caching.

pub mod common;
pub mod http;

pub use common::credential::{FileTokenStore, MemoryTokenStore, TokenStore, TokenStoreError};
pub use http::{
    client::{MercatoHttpClient, MercatoRawHttpClient},
    error::MercatoHttpError,
    models::{Attachments, FilePart, Pagination, ProductsPage},
    query::{CatalogParams, ListParams},
};
