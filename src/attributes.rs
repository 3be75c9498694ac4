//! Projection of rule descriptors onto native input attributes.

use serde::Serialize;

use crate::descriptor::RuleDescriptor;

/// The subset of a rule descriptor expressible as native input
/// attributes.
///
/// Serializes with absent constraints skipped, so the UI layer can splat
/// the projection onto an input element as-is. Pre-populating attributes
/// is a usability aid only; the validator remains the authority on what
/// is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InputAttributes {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub minlength: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub maxlength: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub min: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pattern: Option<String>,
}

impl InputAttributes {
	/// Whether no constraint survived the projection.
	pub fn is_empty(&self) -> bool {
		self.minlength.is_none()
			&& self.maxlength.is_none()
			&& self.min.is_none()
			&& self.max.is_none()
			&& self.pattern.is_none()
	}
}

/// Projects the constraints of a descriptor that native inputs can
/// express. The pattern is exposed as its source string, exactly as
/// written in the rules.
///
/// Never validates and never fails: a missing descriptor projects to the
/// empty attribute set.
///
/// # Examples
///
/// ```
/// use motoshop_validators::{RuleDescriptor, input_attributes};
///
/// let rules = RuleDescriptor::new().with_length(3, 50);
/// let attrs = input_attributes(Some(&rules));
/// assert_eq!(attrs.minlength, Some(3));
/// assert_eq!(attrs.maxlength, Some(50));
/// assert!(attrs.pattern.is_none());
///
/// assert!(input_attributes(None).is_empty());
/// ```
pub fn input_attributes(descriptor: Option<&RuleDescriptor>) -> InputAttributes {
	let Some(rules) = descriptor else {
		return InputAttributes::default();
	};

	InputAttributes {
		minlength: rules.min_length,
		maxlength: rules.max_length,
		min: rules.min,
		max: rules.max,
		pattern: rules.pattern.as_ref().map(|p| p.source().to_string()),
	}
}
