//! Contact, inquiry and newsletter forms
//!
//! Field validation for the three forms on the site. Submissions are never
//! persisted; the UI waits a short simulated delay, logs the payload and shows
//! a confirmation.

use serde::Serialize;

/// Simulated network delay for the contact and newsletter forms (ms)
pub const SUBMIT_DELAY_MS: u64 = 1500;

/// Time the inquiry dialog shows its success view before closing (ms)
pub const INQUIRY_AUTO_CLOSE_MS: u64 = 2000;

/// Delay after closing before the inquiry dialog resets to the form (ms)
pub const RESET_DELAY_MS: u64 = 300;

/// Minimum length of the sender's name
pub const MIN_NAME_LENGTH: usize = 2;

/// Form fields that can carry an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Field {
    #[display("name")]
    Name,
    #[display("email")]
    Email,
    #[display("phone")]
    Phone,
    #[display("subject")]
    Subject,
    #[display("message")]
    Message,
}

/// Per-field validation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name must be at least {min} characters.")]
    TooShort { min: usize },

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please select a subject.")]
    MissingSubject,

    #[error("Please fill out this field.")]
    Required,
}

/// Errors collected for a whole form, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<(Field, FieldError)>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn add(&mut self, field: Field, error: FieldError) {
        self.errors.push((field, error));
    }

    /// First error recorded for `field`
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, e)| e)
    }

    /// Message for `field`, ready to render under the input
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Field, FieldError)> {
        self.errors.iter()
    }
}

/// Loose email check: one `@`, non-empty local part, dotted domain, no spaces
pub fn validate_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

fn trimmed_or_none(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Subjects offered by the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "kebab-case")]
pub enum ContactSubject {
    #[display("Product Inquiry")]
    ProductInquiry,
    #[display("Order Information")]
    OrderInformation,
    #[display("Bulk Purchase")]
    BulkPurchase,
    #[display("Become a Distributor")]
    Distribution,
    #[display("Other")]
    Other,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 5] = [
        ContactSubject::ProductInquiry,
        ContactSubject::OrderInformation,
        ContactSubject::BulkPurchase,
        ContactSubject::Distribution,
        ContactSubject::Other,
    ];

    /// Value used in the `<select>` element
    pub fn value(&self) -> &'static str {
        match self {
            ContactSubject::ProductInquiry => "product-inquiry",
            ContactSubject::OrderInformation => "order-information",
            ContactSubject::BulkPurchase => "bulk-purchase",
            ContactSubject::Distribution => "distribution",
            ContactSubject::Other => "other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }
}

/// Raw contact form input as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Validated contact form payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: ContactSubject,
    pub message: Option<String>,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactSubmission, FormErrors> {
        let mut errors = FormErrors::new();

        let name = self.name.trim();
        if name.chars().count() < MIN_NAME_LENGTH {
            errors.add(
                Field::Name,
                FieldError::TooShort {
                    min: MIN_NAME_LENGTH,
                },
            );
        }

        if !validate_email(&self.email) {
            errors.add(Field::Email, FieldError::InvalidEmail);
        }

        let subject = ContactSubject::from_value(self.subject.trim());
        if subject.is_none() {
            errors.add(Field::Subject, FieldError::MissingSubject);
        }

        match subject {
            Some(subject) if errors.is_empty() => Ok(ContactSubmission {
                name: name.to_string(),
                email: self.email.trim().to_string(),
                phone: trimmed_or_none(&self.phone),
                subject,
                message: trimmed_or_none(&self.message),
            }),
            _ => Err(errors),
        }
    }
}

/// Raw input of the product inquiry dialog; every field is required
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// Validated product inquiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductInquiry {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub product: Option<String>,
}

impl InquiryForm {
    pub fn validate(&self, product: Option<&str>) -> Result<ProductInquiry, FormErrors> {
        let mut errors = FormErrors::new();

        for (field, value) in [
            (Field::Name, &self.name),
            (Field::Phone, &self.phone),
            (Field::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                errors.add(field, FieldError::Required);
            }
        }

        if self.email.trim().is_empty() {
            errors.add(Field::Email, FieldError::Required);
        } else if !validate_email(&self.email) {
            errors.add(Field::Email, FieldError::InvalidEmail);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProductInquiry {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
            product: product.map(str::to_string),
        })
    }
}

/// Footer newsletter signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsletterSignup {
    pub email: String,
}

impl NewsletterSignup {
    pub fn parse(email: &str) -> Result<Self, FieldError> {
        if !validate_email(email) {
            return Err(FieldError::InvalidEmail);
        }

        Ok(Self {
            email: email.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_contact() -> ContactForm {
        ContactForm {
            name: "Ravi Das".to_string(),
            email: "ravi@example.com".to_string(),
            phone: String::new(),
            subject: "bulk-purchase".to_string(),
            message: "  ".to_string(),
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("industries.annadaataagro@gmail.com"));
        assert!(validate_email("  a@b.in "));
        assert!(!validate_email(""));
        assert!(!validate_email("no-at-sign.com"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("a@localhost"));
        assert!(!validate_email("a@b..com"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("a@b@c.com"));
    }

    #[test]
    fn test_contact_form_valid() {
        let submission = valid_contact().validate().unwrap();

        assert_eq!(submission.name, "Ravi Das");
        assert_eq!(submission.subject, ContactSubject::BulkPurchase);
        assert_eq!(submission.phone, None);
        assert_eq!(submission.message, None);
    }

    #[test]
    fn test_contact_form_collects_all_errors() {
        let form = ContactForm {
            name: " R ".to_string(),
            email: "not-an-email".to_string(),
            ..ContactForm::default()
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.message(Field::Name).as_deref(),
            Some("Name must be at least 2 characters.")
        );
        assert_eq!(
            errors.message(Field::Email).as_deref(),
            Some("Please enter a valid email address.")
        );
        assert_eq!(
            errors.message(Field::Subject).as_deref(),
            Some("Please select a subject.")
        );
        assert!(errors.get(Field::Phone).is_none());
    }

    #[test]
    fn test_unknown_subject_rejected() {
        let form = ContactForm {
            subject: "spam".to_string(),
            ..valid_contact()
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::Subject), Some(&FieldError::MissingSubject));
    }

    #[test]
    fn test_subject_values_round_trip() {
        for subject in ContactSubject::ALL {
            assert_eq!(ContactSubject::from_value(subject.value()), Some(subject));
        }
        assert_eq!(ContactSubject::Distribution.to_string(), "Become a Distributor");
    }

    #[test]
    fn test_submission_serializes_subject_as_value() {
        let submission = valid_contact().validate().unwrap();
        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(json["subject"], "bulk-purchase");
        assert!(json["phone"].is_null());
    }

    #[test]
    fn test_inquiry_requires_every_field() {
        let errors = InquiryForm::default().validate(None).unwrap_err();

        assert_eq!(errors.len(), 4);
        for field in [Field::Name, Field::Phone, Field::Email, Field::Message] {
            assert_eq!(errors.get(field), Some(&FieldError::Required));
        }
    }

    #[test]
    fn test_inquiry_carries_product_name() {
        let form = InquiryForm {
            name: "Mita".to_string(),
            phone: "9064389085".to_string(),
            email: "mita@example.com".to_string(),
            message: "Need 50 bags".to_string(),
        };

        let inquiry = form.validate(Some("Gobindobhog Rice")).unwrap();
        assert_eq!(inquiry.product.as_deref(), Some("Gobindobhog Rice"));
    }

    #[test]
    fn test_inquiry_bad_email() {
        let form = InquiryForm {
            name: "Mita".to_string(),
            phone: "9064389085".to_string(),
            email: "mita".to_string(),
            message: "Hi".to_string(),
        };

        let errors = form.validate(None).unwrap_err();
        assert_eq!(errors.get(Field::Email), Some(&FieldError::InvalidEmail));
    }

    #[test]
    fn test_newsletter_signup() {
        assert_eq!(
            NewsletterSignup::parse(" me@example.org ").unwrap().email,
            "me@example.org"
        );
        assert_eq!(
            NewsletterSignup::parse("nope"),
            Err(FieldError::InvalidEmail)
        );
    }
}
