use serde::Serialize;

use crate::price::CurrencyRate;

/// Number of products shown when the caller does not choose a page size.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Per-render settings supplied by the embedding storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
	pub page_size: usize,
	pub currency_symbol_override: Option<String>,
	pub currency_rate: CurrencyRate,
	pub labels: Labels,
}

impl Default for RenderConfig {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			currency_symbol_override: None,
			currency_rate: CurrencyRate::default(),
			labels: Labels::default(),
		}
	}
}

impl RenderConfig {
	#[must_use]
	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size;
		self
	}

	#[must_use]
	pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
		self.currency_symbol_override = Some(symbol.into());
		self
	}

	#[must_use]
	pub fn with_currency_rate(mut self, rate: CurrencyRate) -> Self {
		self.currency_rate = rate;
		self
	}

	#[must_use]
	pub fn with_labels(mut self, labels: Labels) -> Self {
		self.labels = labels;
		self
	}
}

/// Static strings shown around the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Labels {
	pub suggestions: String,
	pub products: String,
	pub view_all: String,
	pub unit_price: String,
	/// Accessible description of the suggestion list.
	pub suggestions_aria: String,
}

impl Default for Labels {
	fn default() -> Self {
		Self {
			suggestions: "Sugerencias".to_string(),
			products: "Productos".to_string(),
			view_all: "Ver todo".to_string(),
			unit_price: "Precio/Unidad".to_string(),
			suggestions_aria: "Sugerencias de términos de búsqueda".to_string(),
		}
	}
}
