//! Generic field validation.

use crate::descriptor::RuleDescriptor;
use crate::errors::{ValidationError, ValidationResult};

/// Validates a field value against a rule descriptor.
///
/// Checks run in a fixed order and the first failure wins: minimum
/// length, maximum length, pattern, then numeric range. The numeric range
/// is only evaluated when the descriptor carries `min` or `max`, and the
/// value must then parse as a finite number in its entirety: `"12abc"`
/// is rejected rather than read as `12`. Length bounds count characters,
/// not bytes.
///
/// A missing descriptor means the field has no rules and any value is
/// accepted.
///
/// # Examples
///
/// ```
/// use motoshop_validators::{RuleDescriptor, ValidationError, validate_field};
///
/// let rules = RuleDescriptor::new().with_min_length(5);
/// assert!(validate_field("brake pads", Some(&rules)).is_ok());
/// assert_eq!(
///     validate_field("oil", Some(&rules)),
///     Err(ValidationError::TooShort { length: 3, min: 5 })
/// );
/// assert!(validate_field("anything", None).is_ok());
/// ```
pub fn validate_field(value: &str, descriptor: Option<&RuleDescriptor>) -> ValidationResult<()> {
	let Some(rules) = descriptor else {
		return Ok(());
	};
	run_checks(value, rules).map_err(|error| override_message(error, rules))
}

fn run_checks(value: &str, rules: &RuleDescriptor) -> ValidationResult<()> {
	let length = value.chars().count();

	if let Some(min) = rules.min_length
		&& length < min
	{
		return Err(ValidationError::TooShort { length, min });
	}

	if let Some(max) = rules.max_length
		&& length > max
	{
		return Err(ValidationError::TooLong { length, max });
	}

	if let Some(pattern) = &rules.pattern
		&& !pattern.is_full_match(value)
	{
		return Err(ValidationError::PatternMismatch);
	}

	if rules.min.is_some() || rules.max.is_some() {
		let number = parse_number(value)?;

		if let Some(min) = rules.min
			&& number < min
		{
			return Err(ValidationError::BelowMinimum { value: number, min });
		}

		if let Some(max) = rules.max
			&& number > max
		{
			return Err(ValidationError::AboveMaximum { value: number, max });
		}
	}

	Ok(())
}

/// Strict whole-string numeric parse. NaN and the infinities parse as
/// floats but are not acceptable field values.
pub(crate) fn parse_number(value: &str) -> ValidationResult<f64> {
	let number: f64 = value
		.trim()
		.parse()
		.map_err(|_| ValidationError::NotANumber(value.to_string()))?;

	if !number.is_finite() {
		return Err(ValidationError::NotANumber(value.to_string()));
	}

	Ok(number)
}

pub(crate) fn override_message(
	error: ValidationError,
	rules: &RuleDescriptor,
) -> ValidationError {
	match &rules.error_message {
		Some(message) => ValidationError::Custom(message.clone()),
		None => error,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::descriptor::FieldPattern;

	fn digits() -> FieldPattern {
		FieldPattern::new(r"\d+").unwrap()
	}

	#[test]
	fn test_missing_descriptor_accepts_everything() {
		assert!(validate_field("", None).is_ok());
		assert!(validate_field("anything at all", None).is_ok());
	}

	#[test]
	fn test_empty_descriptor_accepts_everything() {
		let rules = RuleDescriptor::new();
		assert!(validate_field("", Some(&rules)).is_ok());
		assert!(validate_field("no constraints", Some(&rules)).is_ok());
	}

	#[test]
	fn test_length_bounds_are_inclusive() {
		let rules = RuleDescriptor::new().with_length(3, 5);
		assert!(validate_field("abc", Some(&rules)).is_ok());
		assert!(validate_field("abcde", Some(&rules)).is_ok());
		assert_eq!(
			validate_field("ab", Some(&rules)),
			Err(ValidationError::TooShort { length: 2, min: 3 })
		);
		assert_eq!(
			validate_field("abcdef", Some(&rules)),
			Err(ValidationError::TooLong { length: 6, max: 5 })
		);
	}

	#[test]
	fn test_length_counts_characters_not_bytes() {
		// Accented characters are multi-byte but single characters
		let rules = RuleDescriptor::new().with_max_length(5);
		assert!(validate_field("Núñez", Some(&rules)).is_ok());

		let rules = RuleDescriptor::new().with_min_length(5);
		assert_eq!(
			validate_field("Ñato", Some(&rules)),
			Err(ValidationError::TooShort { length: 4, min: 5 })
		);
	}

	#[test]
	fn test_pattern_rejects_partial_matches() {
		let rules = RuleDescriptor::new().with_pattern(digits());
		assert!(validate_field("123456", Some(&rules)).is_ok());
		assert_eq!(
			validate_field("abc123", Some(&rules)),
			Err(ValidationError::PatternMismatch)
		);
		assert_eq!(
			validate_field("123abc", Some(&rules)),
			Err(ValidationError::PatternMismatch)
		);
	}

	#[test]
	fn test_check_order_is_length_then_pattern_then_range() {
		let rules = RuleDescriptor::new()
			.with_min_length(3)
			.with_pattern(digits())
			.with_range(100.0, 999.0);

		// Too short and non-numeric: length failure reported first
		assert_eq!(
			validate_field("a", Some(&rules)),
			Err(ValidationError::TooShort { length: 1, min: 3 })
		);
		// Long enough but not digits: pattern failure before range
		assert_eq!(
			validate_field("abcd", Some(&rules)),
			Err(ValidationError::PatternMismatch)
		);
		// Digits outside range
		assert_eq!(
			validate_field("1000", Some(&rules)),
			Err(ValidationError::AboveMaximum { value: 1000.0, max: 999.0 })
		);
		assert!(validate_field("500", Some(&rules)).is_ok());
	}

	#[test]
	fn test_range_requires_a_parseable_number() {
		let rules = RuleDescriptor::new().with_range(0.0, 100.0);
		assert_eq!(
			validate_field("12abc", Some(&rules)),
			Err(ValidationError::NotANumber("12abc".to_string()))
		);
		assert_eq!(
			validate_field("", Some(&rules)),
			Err(ValidationError::NotANumber(String::new()))
		);
	}

	#[test]
	fn test_range_rejects_non_finite_numbers() {
		let rules = RuleDescriptor::new().with_range(0.0, 100.0);
		assert!(matches!(
			validate_field("inf", Some(&rules)),
			Err(ValidationError::NotANumber(_))
		));
		assert!(matches!(
			validate_field("NaN", Some(&rules)),
			Err(ValidationError::NotANumber(_))
		));
	}

	#[test]
	fn test_range_bounds_are_inclusive() {
		let rules = RuleDescriptor::new().with_range(0.0, 100.0);
		assert!(validate_field("0", Some(&rules)).is_ok());
		assert!(validate_field("100", Some(&rules)).is_ok());
		assert_eq!(
			validate_field("-0.5", Some(&rules)),
			Err(ValidationError::BelowMinimum { value: -0.5, min: 0.0 })
		);
	}

	#[test]
	fn test_only_min_or_only_max_still_checks_range() {
		let rules = RuleDescriptor::new().with_min(18.0);
		assert!(validate_field("18", Some(&rules)).is_ok());
		assert!(validate_field("17", Some(&rules)).is_err());

		let rules = RuleDescriptor::new().with_max(10.0);
		assert!(validate_field("10", Some(&rules)).is_ok());
		assert!(validate_field("11", Some(&rules)).is_err());
	}

	#[test]
	fn test_error_message_overrides_every_default() {
		let rules = RuleDescriptor::new()
			.with_length(3, 5)
			.with_pattern(digits())
			.with_error_message("Code must be 3 to 5 digits");

		for bad in ["ab", "abcdef", "abc"] {
			assert_eq!(
				validate_field(bad, Some(&rules)),
				Err(ValidationError::Custom("Code must be 3 to 5 digits".to_string()))
			);
		}
		assert!(validate_field("123", Some(&rules)).is_ok());
	}

	#[test]
	fn test_validation_is_idempotent() {
		let rules = RuleDescriptor::new().with_length(3, 5).with_pattern(digits());
		for value in ["12", "123", "123456", "abc"] {
			assert_eq!(
				validate_field(value, Some(&rules)),
				validate_field(value, Some(&rules))
			);
		}
	}
}
