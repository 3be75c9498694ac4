//! Decimal amount validation and display formatting.

use std::sync::LazyLock;

use crate::descriptor::RuleDescriptor;
use crate::errors::{ValidationError, ValidationResult};
use crate::validate::{override_message, parse_number};

/// Default rules for money amounts: non-negative, up to 9,999,999,999.99,
/// two decimal places.
pub static AMOUNT_RULES: LazyLock<RuleDescriptor> = LazyLock::new(|| {
	RuleDescriptor::new()
		.with_range(0.0, 9_999_999_999.99)
		.with_decimals(2)
});

/// Validates a decimal amount against a rule descriptor, defaulting to
/// [`AMOUNT_RULES`] when none is given.
///
/// Checks run in a fixed order and the first failure wins: numeric parse,
/// minimum, maximum, then fractional precision. The precision check
/// counts the digits after the decimal point as the value was written,
/// never on the rounded float, so `"12.345"` fails a two-decimal rule
/// even though it would round to `12.35` for display.
///
/// # Examples
///
/// ```
/// use motoshop_validators::{ValidationError, validate_decimal};
///
/// assert!(validate_decimal("149.90", None).is_ok());
/// assert_eq!(
///     validate_decimal("12.345", None),
///     Err(ValidationError::TooManyDecimals { places: 3, max: 2 })
/// );
/// assert!(matches!(
///     validate_decimal("12abc", None),
///     Err(ValidationError::NotANumber(_))
/// ));
/// ```
pub fn validate_decimal(value: &str, descriptor: Option<&RuleDescriptor>) -> ValidationResult<()> {
	let rules = descriptor.unwrap_or(&AMOUNT_RULES);
	run_checks(value, rules).map_err(|error| override_message(error, rules))
}

fn run_checks(value: &str, rules: &RuleDescriptor) -> ValidationResult<()> {
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

	if let Some(max) = rules.decimals {
		let places = decimal_places(value.trim());
		if places > max {
			return Err(ValidationError::TooManyDecimals { places, max });
		}
	}

	Ok(())
}

/// Digits after the decimal point in the value as written.
fn decimal_places(value: &str) -> usize {
	value.split('.').nth(1).map(str::len).unwrap_or(0)
}

/// Rounds a numeric string to a fixed number of decimal places for
/// display. Unparseable input is returned unchanged.
///
/// This is a rendering helper only. It must never feed a validation
/// decision: rounding before [`validate_decimal`] would hide precision
/// violations the validator exists to report.
///
/// # Examples
///
/// ```
/// use motoshop_validators::format_decimal;
///
/// assert_eq!(format_decimal("12.345", 2), "12.35");
/// assert_eq!(format_decimal("7", 2), "7.00");
/// assert_eq!(format_decimal("n/a", 2), "n/a");
/// ```
pub fn format_decimal(value: &str, decimals: usize) -> String {
	match value.trim().parse::<f64>() {
		Ok(number) if number.is_finite() => format!("{number:.decimals$}"),
		_ => value.to_string(),
	}
}
