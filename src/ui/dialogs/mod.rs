pub mod inquiry;

pub use inquiry::{InquiryContext, InquiryDialog, provide_inquiry_context, use_inquiry_context};
