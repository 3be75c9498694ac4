//! Validation error types.

use thiserror::Error;

/// Validation result
pub type ValidationResult<T> = Result<T, ValidationError>;

/// An error describing why a field value was rejected.
///
/// Every variant is recoverable by correcting the input; validation never
/// panics on a malformed value. The `Display` form of each variant is the
/// message shown next to the offending input.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
	/// Value has fewer characters than the configured minimum
	#[error("Minimum {min} characters")]
	TooShort { length: usize, min: usize },

	/// Value has more characters than the configured maximum
	#[error("Maximum {max} characters")]
	TooLong { length: usize, max: usize },

	/// Value does not match the required shape
	#[error("Invalid format")]
	PatternMismatch,

	/// Value could not be parsed as a finite number
	#[error("Must be a valid number")]
	NotANumber(String),

	/// Parsed value is below the configured minimum
	#[error("Minimum value: {min}")]
	BelowMinimum { value: f64, min: f64 },

	/// Parsed value is above the configured maximum
	#[error("Maximum value: {max}")]
	AboveMaximum { value: f64, max: f64 },

	/// Fractional digit count exceeds the configured precision
	#[error("Maximum {max} decimal places")]
	TooManyDecimals { places: usize, max: usize },

	/// Field-level message configured on the descriptor, replacing the
	/// default message of whichever check failed
	#[error("{0}")]
	Custom(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_messages_name_the_violated_bound() {
		let error = ValidationError::TooShort { length: 2, min: 5 };
		assert_eq!(error.to_string(), "Minimum 5 characters");

		let error = ValidationError::TooLong { length: 12, max: 10 };
		assert_eq!(error.to_string(), "Maximum 10 characters");

		let error = ValidationError::BelowMinimum { value: -1.0, min: 0.0 };
		assert_eq!(error.to_string(), "Minimum value: 0");

		let error = ValidationError::AboveMaximum { value: 101.0, max: 100.0 };
		assert_eq!(error.to_string(), "Maximum value: 100");

		let error = ValidationError::TooManyDecimals { places: 3, max: 2 };
		assert_eq!(error.to_string(), "Maximum 2 decimal places");
	}

	#[test]
	fn test_pattern_and_number_messages() {
		assert_eq!(ValidationError::PatternMismatch.to_string(), "Invalid format");
		assert_eq!(
			ValidationError::NotANumber("12abc".to_string()).to_string(),
			"Must be a valid number"
		);
	}

	#[test]
	fn test_custom_message_passes_through() {
		let error = ValidationError::Custom("Plate must look like ABC-1234".to_string());
		assert_eq!(error.to_string(), "Plate must look like ABC-1234");
	}
}
