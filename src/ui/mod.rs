pub mod common;
pub mod dialogs;
pub mod hooks;
pub mod icon;
pub mod motion;
pub mod pages;
pub mod products;
pub mod reveal;
pub mod sections;
pub mod seo;

pub use icon::{Icon, icons};
pub use motion::{MotionContext, provide_motion_context, use_motion_context};
pub use pages::{HomePage, NotFoundPage};
pub use products::{Lightbox, ProductCard, ProductGrid};
pub use reveal::Reveal;
