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

//! Error types for Mercato HTTP client operations.

use mercato_cryptography::CryptoError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum MercatoHttpError {
    /// Raised locally before any network I/O when the token store is empty.
    #[error("No access token found")]
    MissingToken,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("HTTP error {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Serialization failed: {error}")]
    Serialization { error: String },

    #[error("Failed to deserialize response: {error}")]
    Deserialization { error: String, body: String },

    /// The response carried no `{data: <ciphertext>}` envelope.
    #[error("Missing response envelope for {endpoint}")]
    MissingEnvelope { endpoint: String },

    #[error("Invalid attachment: {0}")]
    InvalidAttachment(String),

    #[error("Token store error: {0}")]
    TokenStore(String),
}
