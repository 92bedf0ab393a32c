use serde::Serialize;

use storefront_products::{Product, ProductPage, ProductQuery};

// -------------------------
// Request DTOs
// -------------------------

/// Raw list query string. Every value stays textual; numeric parsing is lenient.
#[derive(Debug, Default, PartialEq)]
pub struct ListProductsParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListProductsParams {
    /// Collect the known keys from decoded query pairs. The first occurrence of
    /// a repeated key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "category" => &mut params.category,
                "search" => &mut params.search,
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }

    pub fn to_query(&self) -> ProductQuery {
        ProductQuery::from_params(
            self.category.as_deref(),
            self.search.as_deref(),
            self.page.as_deref(),
            self.limit.as_deref(),
        )
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub total_products: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub products: Vec<Product>,
}

impl From<ProductPage> for ProductListResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            total_products: page.total_products,
            current_page: page.current_page,
            total_pages: page.total_pages,
            products: page.products,
        }
    }
}
