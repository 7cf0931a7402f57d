//! Checkout form validation.
//!
//! Validation runs every rule and collects all violations, so the UI can
//! surface the whole list at once instead of one error per submission. The
//! credit-card section is checked as a single composite rule reported under
//! the `creditCard` path: an incomplete card section is one coherent problem,
//! not three disconnected field errors.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// 5-digit or 5+4-digit US postal code.
static POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("valid postal code pattern"));

/// E.164-like: optional `+`, first digit 1-9, 2 to 15 digits total.
static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("valid phone pattern"));

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    CreditCard,
    Paypal,
    Cash,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreditCard => write!(f, "creditCard"),
            Self::Paypal => write!(f, "paypal"),
            Self::Cash => write!(f, "cash"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "creditCard" => Ok(Self::CreditCard),
            "paypal" => Ok(Self::Paypal),
            "cash" => Ok(Self::Cash),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

/// The raw checkout form as collected from the user, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub full_name: String,
    pub street_address: String,
    pub city: String,
    pub postal_code: String,
    pub phone_number: String,
    /// `None` until the user picks one of the radio options.
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub card_number: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub cvv: Option<String>,
    #[serde(default)]
    pub delivery_instructions: Option<String>,
}

/// A single field-level validation failure.
///
/// `field` is the form's wire name (`fullName`, `postalCode`, ...), or the
/// grouped `creditCard` path for the composite card rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Wire name of the offending field or group.
    pub field: String,
    /// Human-readable message for the user.
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_owned(),
            message: message.to_owned(),
        }
    }
}

/// Payment details carried by a validated form.
///
/// Card fields only exist on the `CreditCard` variant, so card data entered
/// before the user switched to another method is dropped structurally rather
/// than lingering in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum PaymentDetails {
    #[serde(rename_all = "camelCase")]
    CreditCard {
        card_number: String,
        expiry_date: String,
        cvv: String,
    },
    Paypal,
    Cash,
}

/// A checkout form that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedForm {
    pub full_name: String,
    pub street_address: String,
    pub city: String,
    pub postal_code: String,
    pub phone_number: String,
    pub payment: PaymentDetails,
    pub delivery_instructions: Option<String>,
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a checkout form.
///
/// Runs all rules; on failure returns every collected violation, never just
/// the first.
///
/// # Errors
///
/// Returns the full list of [`ValidationError`]s when any rule fails.
pub fn validate(form: &CheckoutForm) -> Result<ValidatedForm, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if form.full_name.trim().len() < 2 {
        errors.push(ValidationError::new("fullName", "Full name is required"));
    }
    if form.street_address.trim().len() < 5 {
        errors.push(ValidationError::new(
            "streetAddress",
            "Street address is required",
        ));
    }
    if form.city.trim().len() < 2 {
        errors.push(ValidationError::new("city", "City is required"));
    }
    if !POSTAL_CODE.is_match(&form.postal_code) {
        errors.push(ValidationError::new("postalCode", "Invalid postal code"));
    }
    if !PHONE_NUMBER.is_match(&form.phone_number) {
        errors.push(ValidationError::new("phoneNumber", "Invalid phone number"));
    }

    let payment = match form.payment_method {
        None => {
            errors.push(ValidationError::new(
                "paymentMethod",
                "Payment method is required",
            ));
            None
        }
        Some(PaymentMethod::CreditCard) => {
            // Composite rule: the card section passes or fails as a whole.
            let card_number = form.card_number.as_deref().unwrap_or("");
            let expiry_date = form.expiry_date.as_deref().unwrap_or("");
            let cvv = form.cvv.as_deref().unwrap_or("");

            if is_digits(card_number, 16) && !expiry_date.is_empty() && is_digits(cvv, 3) {
                Some(PaymentDetails::CreditCard {
                    card_number: card_number.to_owned(),
                    expiry_date: expiry_date.to_owned(),
                    cvv: cvv.to_owned(),
                })
            } else {
                errors.push(ValidationError::new(
                    "creditCard",
                    "Credit card details are incomplete or invalid.",
                ));
                None
            }
        }
        Some(PaymentMethod::Paypal) => Some(PaymentDetails::Paypal),
        Some(PaymentMethod::Cash) => Some(PaymentDetails::Cash),
    };

    match (payment, errors.is_empty()) {
        (Some(payment), true) => Ok(ValidatedForm {
            full_name: form.full_name.clone(),
            street_address: form.street_address.clone(),
            city: form.city.clone(),
            postal_code: form.postal_code.clone(),
            phone_number: form.phone_number.clone(),
            payment,
            delivery_instructions: form.delivery_instructions.clone(),
        }),
        _ => Err(errors),
    }
}
