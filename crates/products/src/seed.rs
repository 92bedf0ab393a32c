//! Fixed catalog the store starts with.

use crate::product::Product;

/// The five products every fresh store is seeded with, in order.
pub fn default_catalog() -> Vec<Product> {
    vec![
        Product::seeded("1", "Laptop", "High-performance laptop with 16GB RAM", 1200, "electronics", true),
        Product::seeded("2", "Smartphone", "Latest model with 128GB storage", 800, "electronics", true),
        Product::seeded("3", "Coffee Maker", "Programmable coffee maker with timer", 50, "kitchen", false),
        Product::seeded("4", "Headphones", "Noise-cancelling over-ear headphones", 150, "electronics", true),
        Product::seeded("5", "Blender", "High-speed blender for smoothies", 75, "kitchen", true),
    ]
}
