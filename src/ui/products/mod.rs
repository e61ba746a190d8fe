//! Product grid and the lightbox it opens

pub mod card;
pub mod grid;
pub mod lightbox;

pub use card::ProductCard;
pub use grid::ProductGrid;
pub use lightbox::Lightbox;
