//! Mock data builders for creating test products and categories.
//!
//! This module provides builder patterns for creating test data without
//! needing a live backend.

use stockroom::catalog::{Category, CategoryRef, Product};

/// Builder for creating test products
pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    /// Create a new product builder with the given id and name
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            product: Product {
                id: id.to_string(),
                name: name.to_string(),
                price: 10.0,
                description: format!("Test product {name}"),
                category: None,
                image: None,
                stock: 5,
            },
        }
    }

    /// Set the price
    pub fn price(mut self, price: f64) -> Self {
        self.product.price = price;
        self
    }

    /// Set the description
    pub fn description(mut self, description: &str) -> Self {
        self.product.description = description.to_string();
        self
    }

    /// Attach a category reference
    pub fn category(mut self, id: &str, name: &str) -> Self {
        self.product.category = Some(CategoryRef {
            id: id.to_string(),
            name: name.to_string(),
        });
        self
    }

    /// Set the stored image URL
    pub fn image(mut self, image: &str) -> Self {
        self.product.image = Some(image.to_string());
        self
    }

    /// Set the stock count
    pub fn stock(mut self, stock: u32) -> Self {
        self.product.stock = stock;
        self
    }

    /// Build the product
    pub fn build(self) -> Product {
        self.product
    }
}

/// Create a basic product with minimal setup
pub fn mock_product(id: &str, name: &str) -> Product {
    ProductBuilder::new(id, name).build()
}

/// Create multiple products from (id, name) pairs
pub fn mock_products(specs: &[(&str, &str)]) -> Vec<Product> {
    specs
        .iter()
        .map(|(id, name)| mock_product(id, name))
        .collect()
}

/// Create a basic category
pub fn mock_category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("Test category {name}"),
    }
}
