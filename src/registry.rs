//! Field rules for the workshop's domain entities.
//!
//! The registry is process-wide immutable configuration: built once on
//! first access, never mutated afterwards, so lookups need no
//! synchronization from any number of concurrent callers.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::descriptor::{FieldPattern, RuleDescriptor};

/// Rules for the fields of one entity, keyed by field name.
pub type FieldRules = HashMap<&'static str, RuleDescriptor>;

// Shared pattern sources. Kept as plain source strings so the attribute
// projection hands them to a native `pattern` attribute unchanged; the
// matcher anchors them to the whole value at compile time.
const LETTERS_AND_SPACES: &str = r"[A-Za-zÁÉÍÓÚÜáéíóúüÑñ ]+";
const DIGITS: &str = r"[0-9]+";
const PHONE: &str = r"\+?[0-9]{7,15}";
const EMAIL: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";
const USERNAME: &str = r"[A-Za-z0-9_]+";
const PLATE: &str = r"[A-Z]{2,3}-?[0-9]{3,4}";
const VIN: &str = r"[A-HJ-NPR-Z0-9]{11,17}";
const CODE: &str = r"[A-Z0-9][A-Z0-9-]*";
const INVOICE_NUMBER: &str = r"[0-9]{3}-[0-9]{3}-[0-9]{9}";
const PROFORMA_NUMBER: &str = r"PRO-[0-9]{4,8}";
const YEAR: &str = r"[0-9]{4}";

/// Rules for every editable field, keyed first by entity then by field.
///
/// A few standalone fields (`username`, `password`, `email`) live outside
/// any entity; see [`FieldRuleRegistry::standalone`].
pub struct FieldRuleRegistry {
	entities: HashMap<&'static str, FieldRules>,
	standalone: FieldRules,
}

impl FieldRuleRegistry {
	/// Looks up the rules for one entity field.
	///
	/// # Examples
	///
	/// ```
	/// use motoshop_validators::{registry, validate_field};
	///
	/// let rules = registry().descriptor("motorcycle", "plate");
	/// assert!(rules.is_some());
	/// assert!(validate_field("ABC-1234", rules).is_ok());
	/// ```
	pub fn descriptor(&self, entity: &str, field: &str) -> Option<&RuleDescriptor> {
		self.entities.get(entity)?.get(field)
	}

	/// Looks up the rules for a standalone field.
	pub fn standalone(&self, field: &str) -> Option<&RuleDescriptor> {
		self.standalone.get(field)
	}

	/// All rules for one entity.
	pub fn entity(&self, entity: &str) -> Option<&FieldRules> {
		self.entities.get(entity)
	}

	/// Names of every registered entity.
	pub fn entity_names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.entities.keys().copied()
	}

	/// Every registered descriptor: `(entity, field, rules)` triples, with
	/// `None` as the entity for standalone fields.
	pub fn iter(
		&self,
	) -> impl Iterator<Item = (Option<&'static str>, &'static str, &RuleDescriptor)> + '_ {
		let nested = self.entities.iter().flat_map(|(entity, fields)| {
			fields
				.iter()
				.map(move |(field, rules)| (Some(*entity), *field, rules))
		});
		let flat = self
			.standalone
			.iter()
			.map(|(field, rules)| (None, *field, rules));
		nested.chain(flat)
	}
}

static REGISTRY: LazyLock<FieldRuleRegistry> = LazyLock::new(build_registry);

/// The process-wide field rule registry.
pub fn registry() -> &'static FieldRuleRegistry {
	&REGISTRY
}

/// Invalid pattern sources are programming errors; the registry refuses
/// to build rather than silently skipping a rule.
fn pattern(source: &str) -> FieldPattern {
	FieldPattern::new(source).expect("field rules: invalid pattern")
}

fn build_registry() -> FieldRuleRegistry {
	let mut entities = HashMap::new();
	entities.insert("client", client_rules());
	entities.insert("motorcycle", motorcycle_rules());
	entities.insert("tool", tool_rules());
	entities.insert("work_order", work_order_rules());
	entities.insert("user", user_rules());
	entities.insert("invoice", invoice_rules());
	entities.insert("inventory", inventory_rules());
	entities.insert("service", service_rules());
	entities.insert("proforma", proforma_rules());

	FieldRuleRegistry {
		entities,
		standalone: standalone_rules(),
	}
}

fn client_rules() -> FieldRules {
	HashMap::from([
		(
			"first_name",
			RuleDescriptor::new()
				.with_length(2, 50)
				.with_pattern(pattern(LETTERS_AND_SPACES))
				.with_error_message("First name must be 2 to 50 letters"),
		),
		(
			"last_name",
			RuleDescriptor::new()
				.with_length(2, 50)
				.with_pattern(pattern(LETTERS_AND_SPACES))
				.with_error_message("Last name must be 2 to 50 letters"),
		),
		(
			"document_id",
			RuleDescriptor::new()
				.with_length(6, 13)
				.with_pattern(pattern(DIGITS))
				.with_error_message("Identity document must be 6 to 13 digits"),
		),
		(
			"phone",
			RuleDescriptor::new().with_length(7, 16).with_pattern(pattern(PHONE)),
		),
		(
			"email",
			RuleDescriptor::new().with_max_length(100).with_pattern(pattern(EMAIL)),
		),
		("address", RuleDescriptor::new().with_length(5, 120)),
	])
}

fn motorcycle_rules() -> FieldRules {
	HashMap::from([
		(
			"plate",
			RuleDescriptor::new()
				.with_length(6, 8)
				.with_pattern(pattern(PLATE))
				.with_error_message("Plate must look like ABC-1234"),
		),
		("brand", RuleDescriptor::new().with_length(2, 30)),
		("model", RuleDescriptor::new().with_length(1, 30)),
		(
			"year",
			RuleDescriptor::new()
				.with_pattern(pattern(YEAR))
				.with_range(1950.0, 2100.0),
		),
		(
			"color",
			RuleDescriptor::new()
				.with_length(3, 20)
				.with_pattern(pattern(LETTERS_AND_SPACES)),
		),
		(
			"vin",
			RuleDescriptor::new()
				.with_pattern(pattern(VIN))
				.with_error_message("Chassis number must be 11 to 17 characters, no I, O or Q"),
		),
		(
			"mileage",
			RuleDescriptor::new()
				.with_pattern(pattern(DIGITS))
				.with_range(0.0, 1_000_000.0),
		),
	])
}

fn tool_rules() -> FieldRules {
	HashMap::from([
		("name", RuleDescriptor::new().with_length(2, 40)),
		(
			"code",
			RuleDescriptor::new().with_length(3, 15).with_pattern(pattern(CODE)),
		),
		("location", RuleDescriptor::new().with_length(2, 40)),
		(
			"quantity",
			RuleDescriptor::new()
				.with_pattern(pattern(DIGITS))
				.with_range(0.0, 10_000.0),
		),
	])
}

fn work_order_rules() -> FieldRules {
	HashMap::from([
		("description", RuleDescriptor::new().with_length(5, 500)),
		("diagnosis", RuleDescriptor::new().with_max_length(500)),
		(
			"labor_cost",
			RuleDescriptor::new()
				.with_range(0.0, 9_999_999_999.99)
				.with_decimals(2),
		),
		(
			"discount",
			RuleDescriptor::new()
				.with_range(0.0, 100.0)
				.with_decimals(2)
				.with_error_message("Discount must be between 0 and 100 percent"),
		),
	])
}

fn user_rules() -> FieldRules {
	HashMap::from([
		(
			"username",
			RuleDescriptor::new()
				.with_length(4, 20)
				.with_pattern(pattern(USERNAME))
				.with_error_message("Username must be 4 to 20 letters, digits or underscores"),
		),
		(
			"full_name",
			RuleDescriptor::new()
				.with_length(3, 60)
				.with_pattern(pattern(LETTERS_AND_SPACES)),
		),
		(
			"email",
			RuleDescriptor::new().with_max_length(100).with_pattern(pattern(EMAIL)),
		),
		(
			"password",
			RuleDescriptor::new()
				.with_length(8, 64)
				.with_error_message("Password must be 8 to 64 characters"),
		),
	])
}

fn invoice_rules() -> FieldRules {
	HashMap::from([
		(
			"number",
			RuleDescriptor::new()
				.with_pattern(pattern(INVOICE_NUMBER))
				.with_error_message("Invoice number must look like 001-001-000000123"),
		),
		(
			"subtotal",
			RuleDescriptor::new()
				.with_range(0.0, 9_999_999_999.99)
				.with_decimals(2),
		),
		(
			"tax",
			RuleDescriptor::new().with_range(0.0, 100.0).with_decimals(2),
		),
		(
			"total",
			RuleDescriptor::new()
				.with_range(0.0, 9_999_999_999.99)
				.with_decimals(2),
		),
	])
}

fn inventory_rules() -> FieldRules {
	HashMap::from([
		("name", RuleDescriptor::new().with_length(2, 60)),
		(
			"sku",
			RuleDescriptor::new().with_length(3, 20).with_pattern(pattern(CODE)),
		),
		(
			"stock",
			RuleDescriptor::new()
				.with_pattern(pattern(DIGITS))
				.with_range(0.0, 100_000.0),
		),
		(
			"unit_price",
			RuleDescriptor::new()
				.with_range(0.0, 9_999_999_999.99)
				.with_decimals(2),
		),
	])
}

fn service_rules() -> FieldRules {
	HashMap::from([
		("name", RuleDescriptor::new().with_length(3, 60)),
		("description", RuleDescriptor::new().with_max_length(300)),
		(
			"price",
			RuleDescriptor::new()
				.with_range(0.0, 9_999_999_999.99)
				.with_decimals(2),
		),
	])
}

fn proforma_rules() -> FieldRules {
	HashMap::from([
		(
			"number",
			RuleDescriptor::new()
				.with_pattern(pattern(PROFORMA_NUMBER))
				.with_error_message("Proforma number must look like PRO-0042"),
		),
		(
			"valid_days",
			RuleDescriptor::new()
				.with_pattern(pattern(DIGITS))
				.with_range(1.0, 365.0),
		),
		(
			"total",
			RuleDescriptor::new()
				.with_range(0.0, 9_999_999_999.99)
				.with_decimals(2),
		),
		("notes", RuleDescriptor::new().with_max_length(300)),
	])
}

fn standalone_rules() -> FieldRules {
	HashMap::from([
		(
			"username",
			RuleDescriptor::new()
				.with_length(4, 20)
				.with_pattern(pattern(USERNAME))
				.with_error_message("Username must be 4 to 20 letters, digits or underscores"),
		),
		(
			"password",
			RuleDescriptor::new()
				.with_length(8, 64)
				.with_error_message("Password must be 8 to 64 characters"),
		),
		(
			"email",
			RuleDescriptor::new().with_max_length(100).with_pattern(pattern(EMAIL)),
		),
	])
}
