use serde::{Deserialize, Serialize};
use serde_json::Number;

use storefront_core::{Entity, RecordId};

use crate::validation::{Field, ProductPayload, ValidationError};

/// Product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub RecordId);

impl ProductId {
    /// Fresh id for a newly created product.
    pub fn generate() -> Self {
        Self(RecordId::generate())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for ProductId {
    type Err = storefront_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Strictly positive price.
///
/// Keeps the JSON number exactly as the client sent it, so `1200` is echoed back
/// as `1200` rather than `1200.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Number);

impl Price {
    /// Accepts the number only if it is strictly positive.
    pub fn new(value: Number) -> Option<Self> {
        let positive = value.as_f64().is_some_and(|v| v > 0.0);
        positive.then_some(Self(value))
    }

    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).and_then(Self::new)
    }

    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or_default()
    }

    pub fn as_number(&self) -> &Number {
        &self.0
    }

    pub(crate) fn from_units(units: u64) -> Self {
        Self(Number::from(units))
    }
}

/// A validated set of product fields, without an id.
///
/// Only obtainable through validation, so every draft satisfies the product
/// predicate: non-empty texts and a strictly positive price.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) price: Price,
    pub(crate) category: String,
    pub(crate) in_stock: bool,
}

impl ProductDraft {
    /// Build a draft from typed values, running the same checks as a payload.
    pub fn try_new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        in_stock: bool,
    ) -> Result<Self, ValidationError> {
        ProductPayload {
            name: Field::Present(name.into()),
            description: Field::Present(description.into()),
            price: Number::from_f64(price).map_or(Field::Invalid, Field::Present),
            category: Field::Present(category.into()),
            in_stock: Field::Present(in_stock),
        }
        .validate()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }
}

/// A stored product record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Price,
    category: String,
    in_stock: bool,
}

impl Product {
    /// Materialize a draft under the given id.
    pub fn new(id: ProductId, draft: ProductDraft) -> Self {
        let ProductDraft {
            name,
            description,
            price,
            category,
            in_stock,
        } = draft;
        Self {
            id,
            name,
            description,
            price,
            category,
            in_stock,
        }
    }

    /// Replace every field except the id.
    pub fn replace(&mut self, draft: ProductDraft) {
        let id = self.id.clone();
        *self = Self::new(id, draft);
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub(crate) fn seeded(
        id: &'static str,
        name: &str,
        description: &str,
        price: u64,
        category: &str,
        in_stock: bool,
    ) -> Self {
        Self {
            id: ProductId(RecordId::from_static(id)),
            name: name.to_string(),
            description: description.to_string(),
            price: Price::from_units(price),
            category: category.to_string(),
            in_stock,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
