//! Sign-up input validation.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Minimum password length accepted at sign-up.
pub const MIN_PASSWORD_LENGTH: u64 = 6;

/// Maximum username length.
pub const MAX_USERNAME_LENGTH: u64 = 64;

/// Validated sign-up data. Construct via [`SignupInput::new`].
#[derive(Debug, Clone, Validate)]
pub struct SignupInput {
    #[validate(email(message = "Unable to validate email address: invalid format"))]
    pub email: String,
    #[validate(length(min = MIN_PASSWORD_LENGTH, message = "Password should be at least 6 characters"))]
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(length(max = MAX_USERNAME_LENGTH, message = "Username is too long"))]
    pub username: String,
}

impl SignupInput {
    /// Check required fields, normalize, and validate formats.
    ///
    /// Email, password, and username must be present and non-empty. The
    /// email is trimmed and lowercased; blank optional names become `None`.
    pub fn new(
        email: Option<String>,
        password: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
        username: Option<String>,
    ) -> Result<Self, CoreError> {
        let (Some(email), Some(password), Some(username)) = (
            non_empty(email),
            password.filter(|p| !p.is_empty()),
            non_empty(username),
        ) else {
            return Err(CoreError::Validation("Missing required fields".to_string()));
        };

        let input = Self {
            email: normalize_email(&email),
            password,
            first_name: non_empty(first_name),
            last_name: non_empty(last_name),
            username,
        };

        input.validate().map_err(first_error)?;
        Ok(input)
    }
}

/// Canonical form used for storage and lookups.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Report the first failing field, checked in a fixed order.
fn first_error(errors: ValidationErrors) -> CoreError {
    let fields = errors.field_errors();
    let message = ["email", "password", "username"]
        .iter()
        .filter_map(|field| fields.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid sign-up data".to_string());
    CoreError::Validation(message)
}
