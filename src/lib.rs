//! Field validation for the Motoshop workshop manager.
//!
//! This crate is the validation core shared by the application's CRUD
//! screens: a process-wide registry of per-entity field rules, a generic
//! field validator, an amount validator, and a projection of rules onto
//! native input attributes. Everything here is pure computation, with no
//! I/O and no shared mutable state, so a form can call it on every
//! keystroke from any number of concurrent contexts.
//!
//! # Examples
//!
//! ```
//! use motoshop_validators::{registry, validate_field, input_attributes};
//!
//! let rules = registry().descriptor("client", "document_id");
//!
//! assert!(validate_field("1712345678", rules).is_ok());
//! let error = validate_field("12345A", rules).unwrap_err();
//! assert_eq!(error.to_string(), "Identity document must be 6 to 13 digits");
//!
//! // Pre-populate the native constraints of the matching input element
//! let attrs = input_attributes(rules);
//! assert_eq!(attrs.maxlength, Some(13));
//! ```

pub mod attributes;
pub mod decimal;
pub mod descriptor;
pub mod errors;
pub mod registry;
pub mod validate;

pub use attributes::{InputAttributes, input_attributes};
pub use decimal::{AMOUNT_RULES, format_decimal, validate_decimal};
pub use descriptor::{FieldPattern, RuleDescriptor};
pub use errors::{ValidationError, ValidationResult};
pub use registry::{FieldRuleRegistry, FieldRules, registry};
pub use validate::validate_field;

/// Re-export of the commonly used surface
pub mod prelude {
	pub use crate::attributes::{InputAttributes, input_attributes};
	pub use crate::decimal::{AMOUNT_RULES, format_decimal, validate_decimal};
	pub use crate::descriptor::{FieldPattern, RuleDescriptor};
	pub use crate::errors::{ValidationError, ValidationResult};
	pub use crate::registry::{FieldRuleRegistry, FieldRules, registry};
	pub use crate::validate::validate_field;
}

#[cfg(test)]
mod tests {
	use super::prelude::*;

	#[test]
	fn test_prelude_exports() {
		let rules = RuleDescriptor::new().with_length(1, 10);
		assert!(validate_field("ok", Some(&rules)).is_ok());
		assert!(validate_decimal("9.99", None).is_ok());
		assert_eq!(format_decimal("1.005", 1), "1.0");
		assert!(input_attributes(None).is_empty());
		assert!(registry().standalone("email").is_some());
	}
}
