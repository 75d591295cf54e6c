use std::collections::BTreeMap;

/// Form controls the popover reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
	/// The search text input.
	Search,
}

impl FormField {
	/// Name of the control inside the storefront's search form.
	#[must_use]
	pub fn name(self) -> &'static str {
		match self {
			Self::Search => "search",
		}
	}
}

/// Snapshot of the storefront search form, keyed by known fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
	fields: BTreeMap<FormField, String>,
}

impl SearchForm {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Form with the search input holding `query`.
	#[must_use]
	pub fn with_query(query: impl Into<String>) -> Self {
		let mut form = Self::new();
		form.set(FormField::Search, query);
		form
	}

	/// Current value of `field`, or `None` if the form has no such control.
	#[must_use]
	pub fn get(&self, field: FormField) -> Option<&str> {
		self.fields.get(&field).map(String::as_str)
	}

	pub fn set(&mut self, field: FormField, value: impl Into<String>) {
		self.fields.insert(field, value.into());
	}

	/// Trimmed search input, empty when the control is missing.
	#[must_use]
	pub fn query(&self) -> &str {
		self.get(FormField::Search).map_or("", str::trim)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_search_field_reads_as_empty_query() {
		let form = SearchForm::new();
		assert_eq!(form.get(FormField::Search), None);
		assert_eq!(form.query(), "");
	}

	#[test]
	fn query_is_trimmed() {
		let form = SearchForm::with_query("  desk lamp \n");
		assert_eq!(form.get(FormField::Search), Some("  desk lamp \n"));
		assert_eq!(form.query(), "desk lamp");
		assert_eq!(FormField::Search.name(), "search");
	}
}
