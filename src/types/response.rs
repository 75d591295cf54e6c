//! Decoding of the storefront search service payload.
//!
//! Every level of the payload is optional. Missing collections decode as
//! empty and a missing count as zero. A field with an unexpected type falls
//! back to its default and a list entry that cannot be read is skipped, so
//! only syntactically broken JSON is reported as an error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

use super::product::{PriceInfo, Product, SearchResult, non_empty};

/// Errors raised while decoding a provider payload.
#[derive(Debug, Error)]
pub enum ResponseError {
	#[error("search response is not valid JSON: {0}")]
	Json(#[from] serde_json::Error),
}

impl SearchResult {
	/// Decode a provider payload into a [`SearchResult`].
	///
	/// Fails only when `payload` is not JSON at all.
	pub fn from_json(payload: &str) -> Result<Self, ResponseError> {
		let value: Value = serde_json::from_str(payload)?;
		Ok(Self::from_value(value))
	}

	/// Decode a provider payload that has already been parsed into a JSON value.
	///
	/// A payload that is not shaped like a search response yields an empty result.
	#[must_use]
	pub fn from_value(value: Value) -> Self {
		ProductSearchResponse::deserialize(value)
			.unwrap_or_else(|err| {
				tracing::debug!(%err, "payload is not a search response");
				ProductSearchResponse::default()
			})
			.into_result()
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProductSearchResponse {
	#[serde(deserialize_with = "lenient")]
	data: Option<ResponseData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResponseData {
	#[serde(rename = "productSearch", deserialize_with = "lenient")]
	product_search: Option<ProductSearch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProductSearch {
	#[serde(deserialize_with = "lenient_vec")]
	items: Vec<ProductItem>,
	#[serde(deserialize_with = "lenient_vec")]
	suggestions: Vec<String>,
	#[serde(deserialize_with = "lenient")]
	total_count: Option<Count>,
}

/// The count is a number in current payloads, older ones send a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Count {
	Number(u64),
	Float(f64),
	Text(String),
}

impl Count {
	fn value(&self) -> u64 {
		match self {
			Self::Number(value) => *value,
			Self::Float(value) if value.is_finite() && *value > 0.0 => value.trunc() as u64,
			Self::Float(_) => 0,
			Self::Text(text) => text.trim().parse().unwrap_or(0),
		}
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProductItem {
	#[serde(deserialize_with = "lenient")]
	product: Option<RawProduct>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawProduct {
	#[serde(deserialize_with = "lenient")]
	sku: Option<String>,
	#[serde(deserialize_with = "lenient")]
	name: Option<String>,
	#[serde(deserialize_with = "lenient")]
	canonical_url: Option<String>,
	#[serde(deserialize_with = "lenient")]
	image: Option<RawImage>,
	#[serde(deserialize_with = "lenient")]
	small_image: Option<RawImage>,
	#[serde(deserialize_with = "lenient")]
	thumbnail: Option<RawImage>,
	#[serde(deserialize_with = "lenient")]
	price_range: Option<PriceRange>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawImage {
	#[serde(deserialize_with = "lenient")]
	url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PriceRange {
	#[serde(deserialize_with = "lenient")]
	minimum_price: Option<RangeBound>,
	#[serde(deserialize_with = "lenient")]
	maximum_price: Option<RangeBound>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RangeBound {
	#[serde(deserialize_with = "lenient")]
	final_price: Option<Money>,
	#[serde(deserialize_with = "lenient")]
	regular_price: Option<Money>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Money {
	#[serde(deserialize_with = "lenient")]
	value: Option<Amount>,
	#[serde(deserialize_with = "lenient")]
	currency: Option<String>,
}

/// Amounts are numbers, but some gateways quote them as strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Amount {
	Number(f64),
	Text(String),
}

impl Amount {
	fn value(&self) -> Option<f64> {
		let value = match self {
			Self::Number(value) => *value,
			Self::Text(text) => text.trim().parse().ok()?,
		};
		value.is_finite().then_some(value)
	}
}

/// Decode a field, falling back to its default when it has an unexpected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned + Default,
{
	let value = Value::deserialize(deserializer)?;
	Ok(T::deserialize(value).unwrap_or_else(|err| {
		tracing::debug!(%err, "ignoring malformed field in search response");
		T::default()
	}))
}

/// Decode a list element by element, dropping the elements that do not fit.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	let elements = match Value::deserialize(deserializer)? {
		Value::Array(elements) => elements,
		Value::Null => return Ok(Vec::new()),
		other => {
			tracing::debug!(value = %other, "expected a list in search response");
			return Ok(Vec::new());
		}
	};

	Ok(elements
		.into_iter()
		.filter_map(|element| match T::deserialize(element) {
			Ok(decoded) => Some(decoded),
			Err(err) => {
				tracing::debug!(%err, "skipping malformed entry in search response");
				None
			}
		})
		.collect())
}

impl ProductSearchResponse {
	fn into_result(self) -> SearchResult {
		let Some(search) = self.data.and_then(|data| data.product_search) else {
			return SearchResult::default();
		};

		let items = search
			.items
			.into_iter()
			.filter_map(|item| item.product)
			.map(RawProduct::into_product)
			.collect();

		SearchResult {
			items,
			suggestions: search.suggestions,
			total_count: search.total_count.map_or(0, |count| count.value()),
		}
	}
}

impl RawProduct {
	fn into_product(self) -> Product {
		let image_url = [self.image, self.small_image, self.thumbnail]
			.into_iter()
			.flatten()
			.filter_map(|image| image.url)
			.find_map(non_empty);

		let range = self.price_range.unwrap_or_default();
		let minimum = range.minimum_price.unwrap_or_default();
		let maximum = range.maximum_price.unwrap_or_default();

		let currency_code = minimum
			.regular_price
			.as_ref()
			.and_then(|money| money.currency.clone())
			.unwrap_or_default();
		let final_price = minimum.final_price.and_then(|money| money.amount());
		let max_regular_price = maximum
			.regular_price
			.and_then(|money| money.amount())
			.unwrap_or_default();

		Product {
			sku: self.sku.unwrap_or_default(),
			name: self.name.unwrap_or_default(),
			canonical_url: self.canonical_url.and_then(non_empty),
			image_url,
			price_info: PriceInfo {
				currency_code,
				final_price,
				max_regular_price,
			},
		}
	}
}

impl Money {
	fn amount(&self) -> Option<f64> {
		self.value.as_ref().and_then(Amount::value)
	}
}
