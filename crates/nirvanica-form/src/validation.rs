//! Batch form validation.
//!
//! Violations are collected across the whole form and returned together;
//! nothing is fail-fast. Error keys are the form field names, so the
//! rendering layer can place each message next to the offending input.

use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::dates::StayDates;

/// The four guest identity inputs.
#[derive(Debug, Clone, Default, Validate)]
pub struct GuestIdentity {
    /// First name.
    #[validate(length(min = 1, message = "This field is required"))]
    pub first_name: String,
    /// Last name.
    #[validate(length(min = 1, message = "This field is required"))]
    pub last_name: String,
    /// Email address.
    #[validate(length(min = 1, message = "This field is required"))]
    pub email: String,
    /// Phone number.
    #[validate(length(min = 1, message = "This field is required"))]
    pub phone: String,
}

/// Phone check: optional leading `+`, then digits, spaces, hyphens, and
/// parentheses, with at least ten digits once formatting is stripped.
pub fn phone_is_valid(phone: &str) -> bool {
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    if !rest
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
    {
        return false;
    }
    rest.chars().filter(char::is_ascii_digit).count() >= 10
}

pub(crate) fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Validate the whole form, collecting every violation.
pub fn validate(
    identity: &GuestIdentity,
    dates: &StayDates,
    rooms_selected: u32,
    terms_accepted: bool,
) -> Result<(), ValidationErrors> {
    let mut errors = identity
        .validate()
        .err()
        .unwrap_or_else(ValidationErrors::new);

    if !identity.email.is_empty() && !identity.email.validate_email() {
        errors.add(
            "email",
            field_error("email", "Please enter a valid email address"),
        );
    }

    if !identity.phone.is_empty() && !phone_is_valid(&identity.phone) {
        errors.add(
            "phone",
            field_error("phone", "Please enter a valid phone number"),
        );
    }

    match (dates.check_in(), dates.check_out()) {
        (Some(check_in), Some(check_out)) => {
            if check_in < dates.today() {
                errors.add(
                    "check_in",
                    field_error("past", "Check-in date cannot be in the past"),
                );
            }
            if check_out <= check_in {
                errors.add(
                    "check_out",
                    field_error("order", "Check-out date must be after check-in date"),
                );
            }
        }
        _ => {
            errors.add(
                "check_in",
                field_error(
                    "required",
                    "Please select both check-in and check-out dates",
                ),
            );
        }
    }

    if rooms_selected == 0 {
        errors.add(
            "rooms",
            field_error("required", "Please select at least one room"),
        );
    }

    if !terms_accepted {
        errors.add(
            "terms",
            field_error("required", "Please accept the terms and conditions"),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
