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

//! Query-string construction for list and search endpoints.
//!
//! Defaults (`page=1`, endpoint-specific `limit`) are always applied; optional
//! filters are included only when present and non-empty; absent or falsy
//! values are omitted entirely rather than sent as empty parameters.

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const CATALOG_PAGE_LIMIT: u32 = 20;

/// Parameters for paginated list endpoints (jobs, orders, conversations, ...).
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<String>,
}

impl ListParams {
    #[must_use]
    pub fn to_query(&self, default_limit: u32) -> String {
        let mut parts = vec![
            format!("page={}", self.page.unwrap_or(DEFAULT_PAGE)),
            format!("limit={}", self.limit.unwrap_or(default_limit)),
        ];
        push_text(&mut parts, "status", self.status.as_deref());
        parts.join("&")
    }
}

/// Filter parameters for the product and service catalogs.
#[derive(Debug, Clone, Default)]
pub struct CatalogParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub rating: Option<f64>,
    pub sort_by: Option<String>,
    pub featured: Option<bool>,
    /// Catalog entry kind; sent as the `type` query parameter.
    pub kind: Option<String>,
}

impl CatalogParams {
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut parts = vec![
            format!("page={}", self.page.unwrap_or(DEFAULT_PAGE)),
            format!("limit={}", self.limit.unwrap_or(CATALOG_PAGE_LIMIT)),
        ];
        push_text(&mut parts, "search", self.search.as_deref());
        push_text(&mut parts, "category", self.category.as_deref());
        push_text(&mut parts, "brand", self.brand.as_deref());
        push_number(&mut parts, "price_min", self.price_min);
        push_number(&mut parts, "price_max", self.price_max);
        push_number(&mut parts, "rating", self.rating);
        push_text(&mut parts, "sort_by", self.sort_by.as_deref());
        if self.featured == Some(true) {
            parts.push("featured=true".to_string());
        }
        push_text(&mut parts, "type", self.kind.as_deref());
        parts.join("&")
    }
}

fn push_text(parts: &mut Vec<String>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            parts.push(format!("{key}={}", urlencoding::encode(value)));
        }
    }
}

fn push_number(parts: &mut Vec<String>, key: &str, value: Option<f64>) {
    if let Some(value) = value {
        if value > 0.0 {
            parts.push(format!("{key}={value}"));
        }
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
    fn test_list_defaults_applied() {
        let query = ListParams::default().to_query(DEFAULT_PAGE_LIMIT);
        assert_eq!(query, "page=1&limit=10");
    }

    #[rstest]
    fn test_list_explicit_values() {
        let params = ListParams {
            page: Some(2),
            status: Some("open".to_string()),
            ..Default::default()
        };
        assert_eq!(params.to_query(DEFAULT_PAGE_LIMIT), "page=2&limit=10&status=open");
    }

    #[rstest]
    fn test_empty_status_omitted() {
        let params = ListParams {
            status: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(params.to_query(DEFAULT_PAGE_LIMIT), "page=1&limit=10");
    }

    #[rstest]
    fn test_catalog_defaults_applied() {
        assert_eq!(CatalogParams::default().to_query(), "page=1&limit=20");
    }

    #[rstest]
    fn test_catalog_filters_included_verbatim() {
        let params = CatalogParams {
            category: Some("tools".to_string()),
            brand: Some("acme".to_string()),
            price_min: Some(10.5),
            price_max: Some(99.0),
            rating: Some(4.0),
            sort_by: Some("price_asc".to_string()),
            featured: Some(true),
            kind: Some("physical".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.to_query(),
            "page=1&limit=20&category=tools&brand=acme&price_min=10.5&price_max=99&rating=4&sort_by=price_asc&featured=true&type=physical"
        );
    }

    #[rstest]
    fn test_falsy_filters_omitted() {
        let params = CatalogParams {
            price_min: Some(0.0),
            rating: Some(0.0),
            featured: Some(false),
            kind: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(params.to_query(), "page=1&limit=20");
    }

    #[rstest]
    fn test_search_values_url_encoded() {
        let params = CatalogParams {
            search: Some("drill bits & sets".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.to_query(),
            "page=1&limit=20&search=drill%20bits%20%26%20sets"
        );
    }
}
