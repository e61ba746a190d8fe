//! Framework-free domain logic: catalog, lightbox navigation, input mapping,
//! motion presets, form validation and site metadata

pub mod animation;
pub mod catalog;
#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod content;
pub mod format;
pub mod gesture;
pub mod lightbox;
pub mod og_image;
pub mod seo;
#[cfg(test)]
mod tests;

pub use animation::{Ease, EntrancePreset, EntranceTransition, MotionConfig, trigger_at};
pub use catalog::{
    Catalog, CatalogError, Product, ProductBadge, RICE_BLUR_PLACEHOLDER, rice_catalog,
};
pub use contact::{
    ContactForm, ContactSubject, ContactSubmission, Field, FieldError, FormErrors, InquiryForm,
    NewsletterSignup, ProductInquiry,
};
pub use gesture::{DEFAULT_SWIPE_THRESHOLD, SwipeDetector, classify_swipe, command_for_key};
pub use lightbox::{
    CLOSE_GRACE_MS, CloseToken, CommandOutcome, Direction, ImageState, ImageTicket,
    LightboxCommand, LightboxSession, LightboxState,
};
pub use og_image::SocialCard;
