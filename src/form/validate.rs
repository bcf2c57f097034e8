use super::types::{FieldType, FieldValidation};

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const NUMERIC_MESSAGE: &str = "Please enter a valid positive number.";

/// Interactive (on-blur) validation for a single field.
///
/// The advisory range checks for age, duration and campaign live only here;
/// the normalizer re-checks required/numeric constraints but not the ranges.
pub fn validate_field(value: &str, name: &str, field_type: FieldType) -> FieldValidation {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return FieldValidation::fail(REQUIRED_MESSAGE);
    }

    if field_type == FieldType::Numeric {
        let number = match trimmed.parse::<f64>() {
            Ok(n) if n >= 0.0 => n,
            _ => return FieldValidation::fail(NUMERIC_MESSAGE),
        };

        match name {
            "age" if !(18.0..=100.0).contains(&number) => {
                return FieldValidation::fail("Age must be between 18 and 100.");
            }
            "duration" if number > 3600.0 => {
                return FieldValidation::fail("Call duration cannot exceed 3600 seconds.");
            }
            "campaign" if number > 50.0 => {
                return FieldValidation::fail("Number of contacts cannot exceed 50.");
            }
            _ => {}
        }
    }

    FieldValidation::ok()
}
