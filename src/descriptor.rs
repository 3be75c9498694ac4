//! Field rule descriptors.

use regex::Regex;

/// A compiled field pattern.
///
/// Patterns are stored as data in the field rule registry. Validation
/// always matches the whole value, regardless of anchors in the source:
/// the matcher is compiled from `^(?:source)$`. The original source string
/// is kept only so the attribute projection can hand it to a native
/// `pattern` attribute unchanged.
#[derive(Debug, Clone)]
pub struct FieldPattern {
	source: String,
	matcher: Regex,
}

impl FieldPattern {
	/// Compiles a pattern from its source string.
	///
	/// # Examples
	///
	/// ```
	/// use motoshop_validators::FieldPattern;
	///
	/// let pattern = FieldPattern::new(r"\d+").unwrap();
	/// assert!(pattern.is_full_match("12345"));
	/// assert!(!pattern.is_full_match("12345abc"));
	/// ```
	///
	/// # Errors
	///
	/// Returns an error if the source is not a valid regular expression.
	/// An invalid pattern in the rule registry is a programming error and
	/// is surfaced at registry construction, not at validation time.
	pub fn new(source: &str) -> Result<Self, regex::Error> {
		let matcher = Regex::new(&format!("^(?:{})$", source))?;
		Ok(Self {
			source: source.to_string(),
			matcher,
		})
	}

	/// Whether the pattern matches the entire value.
	pub fn is_full_match(&self, value: &str) -> bool {
		self.matcher.is_match(value)
	}

	/// The pattern source as originally written.
	pub fn source(&self) -> &str {
		&self.source
	}
}

/// Constraints for one field.
///
/// Every constraint is independently optional; an absent constraint is
/// simply not checked, so the default descriptor validates everything.
///
/// # Examples
///
/// ```
/// use motoshop_validators::{RuleDescriptor, validate_field};
///
/// let rules = RuleDescriptor::new().with_length(3, 30);
/// assert!(validate_field("oil change", Some(&rules)).is_ok());
/// assert!(validate_field("ab", Some(&rules)).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleDescriptor {
	/// Minimum value length in characters
	pub min_length: Option<usize>,
	/// Maximum value length in characters
	pub max_length: Option<usize>,
	/// Minimum numeric value
	pub min: Option<f64>,
	/// Maximum numeric value
	pub max: Option<f64>,
	/// Shape the whole value must match
	pub pattern: Option<FieldPattern>,
	/// Maximum fractional digits, as written in the input
	pub decimals: Option<usize>,
	/// Message replacing the per-check defaults on any failure
	pub error_message: Option<String>,
}

impl RuleDescriptor {
	/// Creates a descriptor with no constraints.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the minimum length in characters.
	pub fn with_min_length(mut self, min: usize) -> Self {
		self.min_length = Some(min);
		self
	}

	/// Sets the maximum length in characters.
	pub fn with_max_length(mut self, max: usize) -> Self {
		self.max_length = Some(max);
		self
	}

	/// Sets both length bounds.
	pub fn with_length(mut self, min: usize, max: usize) -> Self {
		self.min_length = Some(min);
		self.max_length = Some(max);
		self
	}

	/// Sets the minimum numeric value.
	pub fn with_min(mut self, min: f64) -> Self {
		self.min = Some(min);
		self
	}

	/// Sets the maximum numeric value.
	pub fn with_max(mut self, max: f64) -> Self {
		self.max = Some(max);
		self
	}

	/// Sets both numeric bounds.
	pub fn with_range(mut self, min: f64, max: f64) -> Self {
		self.min = Some(min);
		self.max = Some(max);
		self
	}

	/// Sets the pattern the whole value must match.
	///
	/// # Examples
	///
	/// ```
	/// use motoshop_validators::{FieldPattern, RuleDescriptor, validate_field};
	///
	/// let rules = RuleDescriptor::new()
	///     .with_pattern(FieldPattern::new(r"\d+").unwrap());
	/// assert!(validate_field("123456", Some(&rules)).is_ok());
	/// assert!(validate_field("abc123", Some(&rules)).is_err());
	/// ```
	pub fn with_pattern(mut self, pattern: FieldPattern) -> Self {
		self.pattern = Some(pattern);
		self
	}

	/// Sets the maximum number of fractional digits.
	pub fn with_decimals(mut self, decimals: usize) -> Self {
		self.decimals = Some(decimals);
		self
	}

	/// Sets a message replacing the per-check defaults on any failure.
	pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
		self.error_message = Some(message.into());
		self
	}
}
