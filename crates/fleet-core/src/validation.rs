//! Validation utilities.

use crate::FleetError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `FleetError` on failure.
    fn validate_request(&self) -> Result<(), FleetError> {
        self.validate().map_err(validation_errors_to_fleet_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Collects the messages of every failed rule, ordered by field name.
#[must_use]
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error.message.as_ref().map_or_else(
                    || format!("{}: {}", field, error.code),
                    ToString::to_string,
                )
            })
        })
        .collect()
}

/// Converts `validator::ValidationErrors` to `FleetError::InvalidArgument`.
#[must_use]
pub fn validation_errors_to_fleet_error(errors: ValidationErrors) -> FleetError {
    FleetError::InvalidArgument(validation_messages(&errors).join("; "))
}
