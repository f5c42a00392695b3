//! Required-field checks shared by the availability and contact forms.
//!
//! These mirror what the browser enforces for `required` and `type=email`
//! inputs, so a form that the browser would refuse is refused here too.

use shared::{ContactRequest, FormRequest, RequiredField};

/// A form that can be checked before submission
pub trait Submittable: Clone {
    /// Required fields that are empty or whitespace-only
    fn missing_fields(&self) -> Vec<RequiredField>;

    /// First present field whose format is wrong
    fn invalid_field(&self) -> Option<RequiredField> {
        None
    }
}

/// True when the trimmed value is empty
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Browser-style email shape check: `local@domain`, no whitespace
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

impl Submittable for FormRequest {
    fn missing_fields(&self) -> Vec<RequiredField> {
        [
            (RequiredField::FullName, &self.full_name),
            (RequiredField::Email, &self.email),
            (RequiredField::Phone, &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(field, _)| field)
        .collect()
    }

    fn invalid_field(&self) -> Option<RequiredField> {
        (!looks_like_email(&self.email)).then_some(RequiredField::Email)
    }
}

impl Submittable for ContactRequest {
    fn missing_fields(&self) -> Vec<RequiredField> {
        [
            (RequiredField::Name, &self.name),
            (RequiredField::Email, &self.email),
            (RequiredField::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(field, _)| field)
        .collect()
    }

    fn invalid_field(&self) -> Option<RequiredField> {
        (!looks_like_email(&self.email)).then_some(RequiredField::Email)
    }
}
