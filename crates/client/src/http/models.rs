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

//! Data models for the Mercato envelope protocol and normalized responses.
//!
//! Server entities (jobs, orders, messages, ...) are intentionally NOT
//! modeled here; they are opaque server-owned JSON passed through as
//! [`serde_json::Value`]. Only the wire envelope and the shapes this client
//! guarantees to its callers are typed.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The uniform request/response wrapper: `{"data": "<ciphertext>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedEnvelope {
    pub data: String,
}

/// Pagination block guaranteed by the catalog normalizers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(alias = "current_page")]
    pub current_page: u32,
    #[serde(alias = "has_next_page")]
    pub has_next_page: bool,
    #[serde(alias = "total_products", alias = "total")]
    pub total_products: u64,
}

/// Normalized catalog page: one guaranteed shape regardless of the field
/// naming the backend used in its response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsPage {
    pub products_list: Vec<Value>,
    pub pagination: Pagination,
}

/// A binary attachment for multipart operations.
#[derive(Debug, Clone)]
pub struct FilePart {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl FilePart {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// Attachment list accepting either a single file or many; a single file is
/// normalized to a one-element list so uploads always iterate uniformly.
#[derive(Debug, Clone, Default)]
pub struct Attachments(Vec<FilePart>);

impl Attachments {
    #[must_use]
    pub fn as_slice(&self) -> &[FilePart] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<FilePart> for Attachments {
    fn from(file: FilePart) -> Self {
        Self(vec![file])
    }
}

impl From<Vec<FilePart>> for Attachments {
    fn from(files: Vec<FilePart>) -> Self {
        Self(files)
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
    fn test_single_file_normalized_to_list() {
        let attachments: Attachments =
            FilePart::new("cv.pdf", "application/pdf", vec![1u8, 2, 3]).into();
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments.as_slice()[0].file_name, "cv.pdf");
    }

    #[rstest]
    fn test_pagination_serializes_camel_case() {
        let pagination = Pagination {
            current_page: 1,
            has_next_page: false,
            total_products: 2,
        };
        let value = serde_json::to_value(&pagination).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"currentPage": 1, "hasNextPage": false, "totalProducts": 2})
        );
    }

    #[rstest]
    fn test_pagination_accepts_snake_case_aliases() {
        let pagination: Pagination = serde_json::from_value(serde_json::json!({
            "current_page": 3, "has_next_page": true, "total": 61
        }))
        .unwrap();
        assert_eq!(pagination.current_page, 3);
        assert!(pagination.has_next_page);
        assert_eq!(pagination.total_products, 61);
    }
}
