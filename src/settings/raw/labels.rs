use livesearch::Labels;
use serde::Deserialize;

/// Overrides for the strings shown around the results.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LabelsSection {
	pub(super) suggestions: Option<String>,
	pub(super) products: Option<String>,
	pub(super) view_all: Option<String>,
	pub(super) unit_price: Option<String>,
	pub(super) suggestions_aria: Option<String>,
}

impl LabelsSection {
	pub(super) fn finalize(self) -> Labels {
		let mut labels = Labels::default();
		if let Some(value) = self.suggestions {
			labels.suggestions = value;
		}
		if let Some(value) = self.products {
			labels.products = value;
		}
		if let Some(value) = self.view_all {
			labels.view_all = value;
		}
		if let Some(value) = self.unit_price {
			labels.unit_price = value;
		}
		if let Some(value) = self.suggestions_aria {
			labels.suggestions_aria = value;
		}
		labels
	}
}
