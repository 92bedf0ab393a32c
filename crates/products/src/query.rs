//! List queries: category filter, name search, offset/limit pagination.

use crate::product::Product;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// A parsed list query.
///
/// Filters run in a fixed order (category, then search) and pagination is
/// applied last, over the filtered result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    /// Case-insensitive exact match on `category`.
    pub category: Option<String>,
    /// Case-insensitive substring match on `name`.
    pub search: Option<String>,
    /// 1-based page number.
    pub page: usize,
    /// Page size; no upper bound.
    pub limit: usize,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    /// Number of products matching the filters, across all pages.
    pub total_products: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub products: Vec<Product>,
}

impl ProductQuery {
    /// Build a query from raw query-string values.
    ///
    /// Empty filters are ignored. `page`/`limit` are read from their leading
    /// digits (`"2.5"` is 2, `"3abc"` is 3); values with no leading digits, or
    /// that read as zero, fall back to their defaults.
    pub fn from_params(
        category: Option<&str>,
        search: Option<&str>,
        page: Option<&str>,
        limit: Option<&str>,
    ) -> Self {
        Self {
            category: non_empty(category),
            search: non_empty(search),
            page: positive_or(page, DEFAULT_PAGE),
            limit: positive_or(limit, DEFAULT_LIMIT),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_page(mut self, page: usize, limit: usize) -> Self {
        self.page = page.max(1);
        self.limit = limit.max(1);
        self
    }

    /// Index of the first product on the requested page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Whether a product passes both filters.
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|c| product.category().to_lowercase() == c.to_lowercase());
        let search_ok = self
            .search
            .as_deref()
            .is_none_or(|s| product.name().to_lowercase().contains(&s.to_lowercase()));
        category_ok && search_ok
    }

    /// Run the query over a snapshot of products, in store order.
    pub fn apply<'a, I>(&self, products: I) -> ProductPage
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let matching: Vec<&Product> = products.into_iter().filter(|p| self.matches(p)).collect();
        let total_products = matching.len();

        let products = matching
            .into_iter()
            .skip(self.offset())
            .take(self.limit)
            .cloned()
            .collect();

        ProductPage {
            total_products,
            current_page: self.page,
            total_pages: total_products.div_ceil(self.limit),
            products,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn positive_or(value: Option<&str>, default: usize) -> usize {
    value
        .and_then(leading_integer)
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

// A negative sign yields `None`, same as a non-positive value.
fn leading_integer(raw: &str) -> Option<usize> {
    let raw = raw.trim_start();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn ids(page: &ProductPage) -> Vec<&str> {
        page.products.iter().map(|p| p.id().as_str()).collect()
    }

    #[test]
    fn defaults_return_everything_on_one_page() {
        let catalog = seed::default_catalog();
        let page = ProductQuery::default().apply(&catalog);
        assert_eq!(page.total_products, 5);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(ids(&page), ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn second_page_of_two() {
        let catalog = seed::default_catalog();
        let page = ProductQuery::default().with_page(2, 2).apply(&catalog);
        assert_eq!(ids(&page), ["3", "4"]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_products, 5);
        assert_eq!(page.current_page, 2);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let catalog = seed::default_catalog();
        let page = ProductQuery::default().with_page(4, 2).apply(&catalog);
        assert!(page.products.is_empty());
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 4);
    }

    #[test]
    fn category_match_ignores_case() {
        let catalog = seed::default_catalog();
        let page = ProductQuery::default()
            .with_category("Electronics")
            .apply(&catalog);
        assert_eq!(ids(&page), ["1", "2", "4"]);
    }

    #[test]
    fn category_is_exact_not_substring() {
        let catalog = seed::default_catalog();
        let page = ProductQuery::default().with_category("elec").apply(&catalog);
        assert_eq!(page.total_products, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn search_is_case_insensitive_substring_of_name() {
        let catalog = seed::default_catalog();
        let page = ProductQuery::default().with_search("PHONE").apply(&catalog);
        assert_eq!(ids(&page), ["2", "4"]);
    }

    #[test]
    fn category_then_search_then_pagination() {
        let catalog = seed::default_catalog();
        let page = ProductQuery::default()
            .with_category("electronics")
            .with_search("o")
            .with_page(2, 1)
            .apply(&catalog);
        // Laptop, Smartphone, Headphones all contain "o"; page 2 of size 1.
        assert_eq!(page.total_products, 3);
        assert_eq!(ids(&page), ["2"]);
    }

    #[test]
    fn params_fall_back_to_defaults() {
        let q = ProductQuery::from_params(None, None, Some("abc"), Some("0"));
        assert_eq!(q.page, DEFAULT_PAGE);
        assert_eq!(q.limit, DEFAULT_LIMIT);

        let q = ProductQuery::from_params(None, None, Some("-2"), Some(""));
        assert_eq!(q.page, DEFAULT_PAGE);
        assert_eq!(q.limit, DEFAULT_LIMIT);

        let q = ProductQuery::from_params(Some(""), Some(""), Some("3"), Some("500"));
        assert_eq!(q.category, None);
        assert_eq!(q.search, None);
        assert_eq!(q.page, 3);
        assert_eq!(q.limit, 500);
    }

    #[test]
    fn params_read_leading_digits() {
        let q = ProductQuery::from_params(None, None, Some("2.5"), Some("3abc"));
        assert_eq!(q.page, 2);
        assert_eq!(q.limit, 3);

        let q = ProductQuery::from_params(None, None, Some(" +4"), Some("0.9"));
        assert_eq!(q.page, 4);
        assert_eq!(q.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let catalog = seed::default_catalog();
        let page = ProductQuery::default()
            .with_page(usize::MAX, usize::MAX)
            .apply(&catalog);
        assert!(page.products.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use crate::product::{Product, ProductDraft, ProductId};
        use proptest::prelude::*;

        fn catalog(categories: &[u8]) -> Vec<Product> {
            categories
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    let draft = ProductDraft::try_new(
                        format!("item {i}"),
                        "generated",
                        1.0 + i as f64,
                        format!("cat{}", c % 3),
                        i % 2 == 0,
                    )
                    .unwrap();
                    Product::new(ProductId::generate(), draft)
                })
                .collect()
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: walking every page yields each match exactly once, in order.
            #[test]
            fn pages_partition_the_filtered_result(
                categories in proptest::collection::vec(any::<u8>(), 0..40),
                limit in 1usize..8,
            ) {
                let products = catalog(&categories);
                let base = ProductQuery::default().with_category("CAT1");
                let expected: Vec<_> = products.iter().filter(|p| base.matches(p)).cloned().collect();

                let first = base.clone().with_page(1, limit).apply(&products);
                prop_assert_eq!(first.total_products, expected.len());
                prop_assert_eq!(first.total_pages, expected.len().div_ceil(limit));

                let mut walked = Vec::new();
                for page in 1..=first.total_pages + 1 {
                    let result = base.clone().with_page(page, limit).apply(&products);
                    prop_assert!(result.products.len() <= limit);
                    walked.extend(result.products);
                }
                prop_assert_eq!(walked, expected);
            }

            /// Property: running the same query twice over the same snapshot is stable.
            #[test]
            fn apply_is_deterministic(
                categories in proptest::collection::vec(any::<u8>(), 0..20),
                page in 1usize..5,
                limit in 1usize..5,
            ) {
                let products = catalog(&categories);
                let query = ProductQuery::default().with_page(page, limit);
                prop_assert_eq!(query.apply(&products), query.apply(&products));
            }
        }
    }
}
