//! Product payload validation.
//!
//! A create/update body is decoded into [`ProductPayload`], where each field is
//! either missing, of the wrong type, or present with the expected type. Decoding
//! itself never fails on field contents; [`ProductPayload::validate`] then checks
//! the fields in a fixed order and reports the first violation.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Number, Value};
use thiserror::Error;

use crate::product::{Price, ProductDraft};

/// One decoded payload field.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// Absent, or explicitly `null`.
    Missing,
    /// Present but not of the expected JSON type.
    Invalid,
    Present(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Missing
    }
}

impl<T: DeserializeOwned> Field<T> {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Field::Missing,
            other => serde_json::from_value(other).map_or(Field::Invalid, Field::Present),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Field::from_value)
    }
}

/// Raw create/update body.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[serde(default)]
    pub name: Field<String>,
    #[serde(default)]
    pub description: Field<String>,
    #[serde(default)]
    pub price: Field<Number>,
    #[serde(default)]
    pub category: Field<String>,
    #[serde(default)]
    pub in_stock: Field<bool>,
}

/// Product fields in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Description,
    Price,
    Category,
    InStock,
}

impl ProductField {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Description => "description",
            ProductField::Price => "price",
            ProductField::Category => "category",
            ProductField::InStock => "inStock",
        }
    }

    /// Caller-facing description of what the field requires.
    pub fn requirement(self) -> &'static str {
        match self {
            ProductField::Name => "Product name is required and must be a string.",
            ProductField::Description => "Product description is required and must be a string.",
            ProductField::Price => "Product price is required and must be a positive number.",
            ProductField::Category => "Product category is required and must be a string.",
            ProductField::InStock => "Product inStock status is required and must be a boolean.",
        }
    }
}

/// The first field, in validation order, that failed its check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", .field.requirement())]
pub struct ValidationError {
    field: ProductField,
}

impl ValidationError {
    pub fn new(field: ProductField) -> Self {
        Self { field }
    }

    pub fn field(&self) -> ProductField {
        self.field
    }
}

impl ProductPayload {
    /// Decode a raw request body.
    ///
    /// Only unparseable JSON is an error. An empty body, or a JSON value that
    /// is not an object, carries no fields and decodes as an empty payload.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        match serde_json::from_slice::<Value>(body)? {
            value @ Value::Object(_) => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }

    /// Check every field in order, returning the first violation.
    pub fn validate(self) -> Result<ProductDraft, ValidationError> {
        let name = non_empty_text(self.name, ProductField::Name)?;
        let description = non_empty_text(self.description, ProductField::Description)?;
        let price = match self.price {
            Field::Present(n) => Price::new(n),
            _ => None,
        }
        .ok_or(ValidationError::new(ProductField::Price))?;
        let category = non_empty_text(self.category, ProductField::Category)?;
        let Field::Present(in_stock) = self.in_stock else {
            return Err(ValidationError::new(ProductField::InStock));
        };

        Ok(ProductDraft {
            name,
            description,
            price,
            category,
            in_stock,
        })
    }
}

fn non_empty_text(field: Field<String>, which: ProductField) -> Result<String, ValidationError> {
    match field {
        Field::Present(text) if !text.is_empty() => Ok(text),
        _ => Err(ValidationError::new(which)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> ProductPayload {
        ProductPayload::from_json(value.to_string().as_bytes()).unwrap()
    }

    fn valid() -> Value {
        json!({
            "name": "Kettle",
            "description": "Electric kettle, 1.7l",
            "price": 35,
            "category": "kitchen",
            "inStock": true
        })
    }

    fn failing_field(value: Value) -> ProductField {
        payload(value).validate().unwrap_err().field()
    }

    #[test]
    fn accepts_a_complete_payload() {
        let draft = payload(valid()).validate().unwrap();
        assert_eq!(draft.name(), "Kettle");
        assert_eq!(draft.price().as_f64(), 35.0);
        assert!(draft.in_stock());
    }

    #[test]
    fn rejects_zero_and_negative_price() {
        for price in [json!(0), json!(-5), json!(0.0)] {
            let mut body = valid();
            body["price"] = price;
            assert_eq!(failing_field(body), ProductField::Price);
        }
    }

    #[test]
    fn rejects_price_given_as_string() {
        let mut body = valid();
        body["price"] = json!("35");
        assert_eq!(failing_field(body), ProductField::Price);
    }

    #[test]
    fn reports_first_failure_in_field_order() {
        assert_eq!(failing_field(json!({})), ProductField::Name);

        let body = json!({ "name": "Kettle", "price": -1, "inStock": "yes" });
        assert_eq!(failing_field(body), ProductField::Description);

        let body = json!({
            "name": "Kettle",
            "description": "d",
            "price": 1,
            "category": 7,
            "inStock": "yes"
        });
        assert_eq!(failing_field(body), ProductField::Category);
    }

    #[test]
    fn empty_and_null_text_count_as_missing() {
        let mut body = valid();
        body["name"] = json!("");
        assert_eq!(failing_field(body), ProductField::Name);

        let mut body = valid();
        body["description"] = Value::Null;
        assert_eq!(failing_field(body), ProductField::Description);
    }

    #[test]
    fn in_stock_must_be_boolean() {
        let mut body = valid();
        body["inStock"] = json!(1);
        let err = payload(body).validate().unwrap_err();
        assert_eq!(err.field(), ProductField::InStock);
        assert_eq!(
            err.to_string(),
            "Product inStock status is required and must be a boolean."
        );
    }

    #[test]
    fn message_cites_the_price_field() {
        let mut body = valid();
        body["price"] = json!(0);
        let err = payload(body).validate().unwrap_err();
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn empty_body_reads_as_empty_object() {
        let payload = ProductPayload::from_json(b"  ").unwrap();
        assert_eq!(payload, ProductPayload::default());
    }

    #[test]
    fn unparseable_json_is_a_decode_error() {
        assert!(ProductPayload::from_json(b"{not json").is_err());
        assert!(ProductPayload::from_json(b"{\"name\": ").is_err());
    }

    #[test]
    fn non_object_json_fails_on_the_first_field() {
        let bodies: [&[u8]; 5] = [b"[1, 2]", b"42", b"\"Kettle\"", b"null", b"true"];
        for body in bodies {
            let payload = ProductPayload::from_json(body).unwrap();
            assert_eq!(payload, ProductPayload::default());
            assert_eq!(
                payload.validate().unwrap_err().to_string(),
                "Product name is required and must be a string."
            );
        }
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut body = valid();
        body["id"] = json!("client-chosen");
        body["colour"] = json!("red");
        assert!(payload(body).validate().is_ok());
    }
}
