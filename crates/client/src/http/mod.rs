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

//! HTTP/REST client implementation for the Mercato marketplace backend.
//!
//! This module provides the client for the backend's REST endpoints, including:
//!
//! - Dashboard, profile, and password operations.
//! - Job posting, listing, update, and deletion (with document uploads).
//! - Orders, products, and services (with response normalization).
//! - Conversations, messages, notifications, reviews, favorites, support
//!   tickets, and invoices.
//!
//! Every request and response travels inside the encrypted
//! `{data: <ciphertext>}` envelope; see the crate docs for the protocol
//! contract. Notification routes are still migrating between services, so the
//! affected operations probe an ordered candidate list (first success wins).

pub mod client;
pub mod error;
pub mod models;
pub mod parse;
pub mod query;
