use std::collections::HashMap;

use farmstand_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;

/// The immutable product catalog.
///
/// Construction validates every record and rejects duplicate ids; after that
/// the collection never changes. Iteration order is definition order, which
/// is also the order the storefront renders.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut by_id = HashMap::with_capacity(products.len());
        for (idx, product) in products.iter().enumerate() {
            product.validate()?;
            if by_id.insert(product.id, idx).is_some() {
                return Err(DomainError::validation(format!(
                    "duplicate product id {} in catalog",
                    product.id
                )));
            }
        }
        Ok(Self { products, by_id })
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id).map(|&idx| &self.products[idx])
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// All products, in definition order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products of one category, in definition order.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Distinct categories, in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(product.category.as_str());
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The compiled-in storefront catalog.
    pub fn builtin() -> Self {
        fn product(
            id: u64,
            name: &str,
            category: &str,
            price: u64,
            image_url: &str,
            description: &str,
        ) -> Product {
            Product {
                id: ProductId::new(id),
                name: name.to_string(),
                category: category.to_string(),
                price,
                image_url: image_url.to_string(),
                description: description.to_string(),
            }
        }

        let products = vec![
            product(
                1,
                "Linden Honey",
                "Honey",
                350,
                "/assets/linden-honey.jpg",
                "Raw linden honey from Carpathian apiaries",
            ),
            product(
                2,
                "Buckwheat Honey",
                "Honey",
                380,
                "/assets/buckwheat-honey.jpg",
                "Dark, aromatic buckwheat honey",
            ),
            product(
                3,
                "Raspberry Preserve",
                "Preserves",
                180,
                "/assets/raspberry-preserve.jpg",
                "Homemade preserve from fresh raspberries",
            ),
            product(
                4,
                "Cherry Preserve",
                "Preserves",
                190,
                "/assets/cherry-preserve.jpg",
                "Thick cherry preserve, stones left in",
            ),
            product(
                5,
                "Sauerkraut",
                "Pickles",
                120,
                "/assets/sauerkraut.jpg",
                "Crunchy sauerkraut made to a family recipe",
            ),
            product(
                6,
                "Pickled Cucumbers",
                "Pickles",
                140,
                "/assets/pickled-cucumbers.jpg",
                "Crisp pickled cucumbers with dill",
            ),
            product(
                7,
                "Hearth Loaf",
                "Bakery",
                85,
                "/assets/hearth-loaf.jpg",
                "Fresh sourdough hearth loaf",
            ),
            product(
                8,
                "Honey Cake",
                "Bakery",
                220,
                "/assets/honey-cake.jpg",
                "Classic honey cake with butter cream",
            ),
        ];

        Self::new(products).expect("builtin catalog is well-formed")
    }
}
