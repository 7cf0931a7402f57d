//! Validate a checkout form from a JSON file.
//!
//! # Usage
//!
//! ```bash
//! foodie-cli validate checkout-form.json
//! ```
//!
//! The file holds a `CheckoutForm` in its wire shape, e.g.:
//!
//! ```json
//! {
//!   "fullName": "John Doe",
//!   "streetAddress": "123 Main St",
//!   "city": "Anytown",
//!   "postalCode": "12345",
//!   "phoneNumber": "+12345678900",
//!   "paymentMethod": "cash"
//! }
//! ```

use std::path::Path;

use foodie_core::{CheckoutForm, checkout};
use thiserror::Error;

/// Errors that can occur while validating a form file.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The file could not be read.
    #[error("Cannot read {0}: {1}")]
    Read(String, std::io::Error),

    /// The file is not a valid `CheckoutForm` JSON document.
    #[error("Invalid form JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a form file and report every validation failure.
///
/// # Errors
///
/// Returns [`ValidateError`] if the file cannot be read or parsed. Failing
/// form *rules* is not an error here; the violations are logged instead.
pub fn run(path: &Path) -> Result<(), ValidateError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ValidateError::Read(path.display().to_string(), e))?;
    let form: CheckoutForm = serde_json::from_str(&raw)?;

    match checkout::validate(&form) {
        Ok(validated) => {
            tracing::info!(customer = %validated.full_name, "Form is valid");
        }
        Err(errors) => {
            tracing::warn!("Form has {} problem(s):", errors.len());
            for error in errors {
                tracing::warn!("  {error}");
            }
        }
    }

    Ok(())
}
