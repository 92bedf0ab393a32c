use storefront_products::ProductDraft;

/// Product payload that passed validation for the current request.
///
/// Inserted into request extensions by the validation middleware; create and
/// update handlers read it instead of the raw body.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProduct(pub ProductDraft);
