use serde::{Deserialize, Serialize};

use farmstand_core::{DomainError, Entity, ProductId};

/// A purchasable product.
///
/// Products are catalog-defined and immutable: the catalog supplies them at
/// startup and nothing mutates them afterwards. Cart lines copy these fields
/// at insertion time, which is sound precisely because of that immutability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Free-form grouping label ("Honey", "Preserves", ...). Open set — new
    /// categories appear by adding products, not by registering them anywhere.
    pub category: String,
    /// Price in whole currency units.
    pub price: u64,
    pub image_url: String,
    pub description: String,
}

impl Product {
    /// Validate a product record at the catalog boundary.
    ///
    /// The catalog is the only supplier of products, so this is the single
    /// place malformed records can be caught.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::validation("product category cannot be empty"));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
