use serde::Serialize;

/// Ranked result set returned by the upstream search provider for one query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResult {
	pub items: Vec<Product>,
	pub suggestions: Vec<String>,
	pub total_count: u64,
}

impl SearchResult {
	/// Create an empty [`SearchResult`].
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the product list, keeping the provider's ranking order.
	#[must_use]
	pub fn with_items(mut self, items: Vec<Product>) -> Self {
		self.items = items;
		self
	}

	/// Replace the term suggestions.
	#[must_use]
	pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.suggestions = suggestions.into_iter().map(Into::into).collect();
		self
	}

	/// Set the cardinality reported by the provider.
	#[must_use]
	pub fn with_total_count(mut self, total_count: u64) -> Self {
		self.total_count = total_count;
		self
	}
}

/// A single product hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
	pub sku: String,
	/// Display name as delivered upstream; may still carry HTML entities.
	pub name: String,
	pub canonical_url: Option<String>,
	pub image_url: Option<String>,
	pub price_info: PriceInfo,
}

impl Product {
	#[must_use]
	pub fn new(sku: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			sku: sku.into(),
			name: name.into(),
			canonical_url: None,
			image_url: None,
			price_info: PriceInfo::default(),
		}
	}

	/// Attach the product page URL. Empty URLs are treated as missing.
	#[must_use]
	pub fn with_canonical_url(mut self, url: impl Into<String>) -> Self {
		self.canonical_url = non_empty(url.into());
		self
	}

	/// Attach the product image URL. Empty URLs are treated as missing.
	#[must_use]
	pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
		self.image_url = non_empty(url.into());
		self
	}

	#[must_use]
	pub fn with_price_info(mut self, price_info: PriceInfo) -> Self {
		self.price_info = price_info;
		self
	}
}

/// Price data as reported upstream, before conversion.
///
/// `final_price` and `max_regular_price` are sourced independently, so no
/// ordering between them may be assumed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceInfo {
	pub currency_code: String,
	pub final_price: Option<f64>,
	pub max_regular_price: f64,
}

impl PriceInfo {
	#[must_use]
	pub fn new(currency_code: impl Into<String>, final_price: f64, max_regular_price: f64) -> Self {
		Self {
			currency_code: currency_code.into(),
			final_price: Some(final_price),
			max_regular_price,
		}
	}
}

pub(crate) fn non_empty(value: String) -> Option<String> {
	if value.trim().is_empty() {
		None
	} else {
		Some(value)
	}
}
