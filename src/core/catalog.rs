//! Product catalog
//!
//! The catalog is an ordered, immutable list of rice products. Insertion order
//! is both display order in the grid and navigation order in the lightbox.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::Serialize;

/// Light warm-beige placeholder (8x10 SVG, #f5f0e8) shown behind images while they load
pub const RICE_BLUR_PLACEHOLDER: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHZpZXdCb3g9IjAgMCA4IDEwIj48cmVjdCB3aWR0aD0iOCIgaGVpZ2h0PSIxMCIgZmlsbD0iI2Y1ZjBlOCIvPjwvc3ZnPg==";

/// Catalog construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog must contain at least one product")]
    Empty,

    #[error("Duplicate product id: {0}")]
    DuplicateId(String),
}

/// A single product shown in the grid and the lightbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Unique, stable identifier
    pub id: String,
    /// Display name shown on the card and in the lightbox
    pub name: String,
    /// Optional secondary name / variety name
    pub subtitle: Option<String>,
    /// Small WebP thumbnail used on the grid card
    pub thumbnail: String,
    /// Full-resolution image shown inside the lightbox
    pub image: String,
    pub is_flagship: bool,
    pub is_popular: bool,
}

impl Product {
    /// Create a new product with no subtitle and no flags
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        thumbnail: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subtitle: None,
            thumbnail: thumbnail.into(),
            image: image.into(),
            is_flagship: false,
            is_popular: false,
        }
    }

    /// Set the subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Mark as the flagship product
    pub fn flagship(mut self) -> Self {
        self.is_flagship = true;
        self
    }

    /// Mark as a popular product
    pub fn popular(mut self) -> Self {
        self.is_popular = true;
        self
    }

    /// Badge to overlay on the card, flagship wins over popular
    pub fn badge(&self) -> Option<ProductBadge> {
        if self.is_flagship {
            Some(ProductBadge::Flagship)
        } else if self.is_popular {
            Some(ProductBadge::Popular)
        } else {
            None
        }
    }
}

/// Badge variants rendered over product images
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ProductBadge {
    #[display("Flagship")]
    Flagship,
    #[display("Popular")]
    Popular,
}

/// Ordered, validated list of products
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists and duplicate ids
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        Ok(Self { products })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Always false for a constructed catalog; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Position of the product with the given id
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    /// Look up a product by id
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.position_of(id).and_then(|i| self.get(i))
    }
}

/// The company's rice varieties in display order
pub fn rice_products() -> Vec<Product> {
    vec![
        Product::new(
            "jeerakhasala",
            "Gobindobhog Rice",
            "/images/thumbnails/jeera.webp",
            "/images/jeera.jpg",
        )
        .flagship()
        .popular(),
        Product::new(
            "miniket",
            "Miniket Rice",
            "/images/thumbnails/miniket.webp",
            "/images/miniket.jpg",
        ),
        Product::new(
            "swarna",
            "Swarna Rice",
            "/images/thumbnails/swarna.webp",
            "/images/swarna.jpg",
        )
        .popular(),
        Product::new(
            "kuruva",
            "Kuruva Rice",
            "/images/thumbnails/kuruva.webp",
            "/images/kuruva.jpg",
        ),
        Product::new(
            "ir36",
            "IR-36 Rice",
            "/images/thumbnails/ir36.webp",
            "/images/ir36.jpg",
        ),
        Product::new(
            "banshkathi",
            "Banshkathi Rice",
            "/images/thumbnails/banshkathi.webp",
            "/images/banshkathi.jpg",
        )
        .popular(),
        Product::new(
            "jeerakathi",
            "Jeerakathi Rice",
            "/images/thumbnails/jeerakathi.webp",
            "/images/jeerakathi.jpg",
        ),
    ]
}

static RICE_CATALOG: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::new(rice_products()).expect("built-in rice catalog is valid"));

/// Shared, process-wide rice catalog
pub fn rice_catalog() -> &'static Catalog {
    &RICE_CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product::new(id, id.to_uppercase(), format!("/t/{id}.webp"), format!("/i/{id}.jpg"))
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(Catalog::new(vec![]), Err(CatalogError::Empty));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![product("a"), product("b"), product("a")]);
        assert_eq!(result, Err(CatalogError::DuplicateId("a".to_string())));
    }

    #[test]
    fn test_position_follows_insertion_order() {
        let catalog = Catalog::new(vec![product("a"), product("b"), product("c")]).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.position_of("a"), Some(0));
        assert_eq!(catalog.position_of("c"), Some(2));
        assert_eq!(catalog.position_of("z"), None);
        assert_eq!(catalog.find("b").map(|p| p.name.as_str()), Some("B"));
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = rice_catalog();

        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.get(0).map(|p| p.id.as_str()), Some("jeerakhasala"));
        assert_eq!(catalog.iter().filter(|p| p.is_flagship).count(), 1);
    }

    #[test]
    fn test_badge_priority() {
        let both = product("a").flagship().popular();
        let popular = product("b").popular();
        let plain = product("c");

        assert_eq!(both.badge(), Some(ProductBadge::Flagship));
        assert_eq!(popular.badge(), Some(ProductBadge::Popular));
        assert_eq!(plain.badge(), None);
        assert_eq!(ProductBadge::Flagship.to_string(), "Flagship");
    }

    #[test]
    fn test_subtitle_builder() {
        let p = product("a").with_subtitle("Bodhana");
        assert_eq!(p.subtitle.as_deref(), Some("Bodhana"));
    }
}
