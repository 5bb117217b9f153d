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

//! Response normalization for endpoints whose shape is still evolving.
//!
//! The catalog endpoints have been observed to reply with any of:
//!
//! - a bare JSON array of entries,
//! - `{"products": [...]}` / `{"products_list": [...]}` / `{"services": [...]}`,
//! - `{"data": [...]}`,
//!
//! with or without a `pagination` block. [`normalize_catalog_page`] accepts
//! every variant and guarantees one output shape.

use serde_json::Value;

use crate::http::models::{Pagination, ProductsPage};

/// Keys under which the backend has been observed to nest the entry list.
const LIST_KEYS: &[&str] = &["products_list", "products", "services", "items", "data"];

/// Normalizes a decrypted catalog response into a [`ProductsPage`].
///
/// `page` and `limit` are the values the request was issued with; they seed
/// the computed pagination when the server provides none. A server-provided
/// `pagination` block wins when it parses; a malformed one falls back to the
/// computed block.
#[must_use]
pub fn normalize_catalog_page(response: Value, page: u32, limit: u32) -> ProductsPage {
    let (products_list, server_pagination) = match response {
        Value::Array(items) => (items, None),
        Value::Object(mut map) => {
            let items = LIST_KEYS
                .iter()
                .find_map(|key| match map.remove(*key) {
                    Some(Value::Array(items)) => Some(items),
                    _ => None,
                })
                .unwrap_or_default();
            (items, map.remove("pagination"))
        }
        _ => (Vec::new(), None),
    };

    let computed = Pagination {
        current_page: page,
        has_next_page: products_list.len() as u32 == limit,
        total_products: products_list.len() as u64,
    };

    let pagination = match server_pagination {
        Some(block) => serde_json::from_value(block).unwrap_or_else(|error| {
            tracing::debug!("Unusable pagination block, computing locally: {error}");
            computed
        }),
        None => computed,
    };

    ProductsPage {
        products_list,
        pagination,
    }
}

/// Pulls a human-readable `message` out of an error response body, when the
/// backend provided one.
#[must_use]
pub fn extract_server_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(ToString::to_string)
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn test_bare_array_normalized() {
        let page = normalize_catalog_page(json!([{"id": 1}, {"id": 2}]), 1, 20);

        assert_eq!(page.products_list.len(), 2);
        assert_eq!(
            page.pagination,
            Pagination {
                current_page: 1,
                has_next_page: false,
                total_products: 2,
            }
        );
    }

    #[rstest]
    #[case("products")]
    #[case("products_list")]
    #[case("services")]
    #[case("data")]
    fn test_nested_list_keys_accepted(#[case] key: &str) {
        let page = normalize_catalog_page(json!({key: [{"id": 1}]}), 1, 20);
        assert_eq!(page.products_list.len(), 1);
    }

    #[rstest]
    fn test_full_page_signals_next() {
        let items: Vec<Value> = (0..20).map(|i| json!({"id": i})).collect();
        let page = normalize_catalog_page(Value::Array(items), 3, 20);

        assert!(page.pagination.has_next_page);
        assert_eq!(page.pagination.current_page, 3);
        assert_eq!(page.pagination.total_products, 20);
    }

    #[rstest]
    fn test_server_pagination_wins() {
        let page = normalize_catalog_page(
            json!({
                "products": [{"id": 1}],
                "pagination": {"currentPage": 4, "hasNextPage": true, "totalProducts": 61},
            }),
            1,
            20,
        );

        assert_eq!(
            page.pagination,
            Pagination {
                current_page: 4,
                has_next_page: true,
                total_products: 61,
            }
        );
    }

    #[rstest]
    fn test_malformed_pagination_falls_back_to_computed() {
        let page = normalize_catalog_page(
            json!({"products": [{"id": 1}], "pagination": "n/a"}),
            2,
            20,
        );

        assert_eq!(page.pagination.current_page, 2);
        assert_eq!(page.pagination.total_products, 1);
    }

    #[rstest]
    fn test_unknown_shape_yields_empty_page() {
        let page = normalize_catalog_page(json!({"unexpected": true}), 1, 20);
        assert!(page.products_list.is_empty());
        assert_eq!(page.pagination.total_products, 0);
    }

    #[rstest]
    fn test_server_message_extracted() {
        let body = r#"{"message": "Order already shipped", "code": 409}"#;
        assert_eq!(
            extract_server_message(body).as_deref(),
            Some("Order already shipped")
        );
        assert_eq!(extract_server_message("<html>bad gateway</html>"), None);
        assert_eq!(extract_server_message(r#"{"error": "nope"}"#), None);
    }
}
