use std::collections::BTreeMap;

use crate::product::Product;

/// Product count per category, keyed by the category as stored.
pub type CategoryCounts = BTreeMap<String, usize>;

pub fn category_counts<'a, I>(products: I) -> CategoryCounts
where
    I: IntoIterator<Item = &'a Product>,
{
    products.into_iter().fold(CategoryCounts::new(), |mut counts, p| {
        *counts.entry(p.category().to_string()).or_default() += 1;
        counts
    })
}
