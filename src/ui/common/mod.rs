//! Common reusable UI components shared by the page sections

pub mod form;
pub mod modal;
pub mod spinner;

pub use form::{FormField, SelectField, TextAreaField, bind_text, error_for};
pub use modal::{BaseModal, SuccessDialog};
pub use spinner::{Skeleton, Spinner, SpinnerSize};
