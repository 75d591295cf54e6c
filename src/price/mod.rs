//! Currency conversion and display formatting for product prices.
//!
//! Amounts are rounded to two decimals, half away from zero, on the shortest
//! decimal representation of the converted value. `10.005` therefore renders
//! as `10.01` even though the nearest double sits just below the tie.

mod currency;

use std::fmt;

use serde::Serialize;

use crate::types::PriceInfo;

pub use currency::symbol_for;

/// Multiplier from the catalog currency to the display currency.
///
/// Always finite and strictly positive. Anything else degrades to the
/// identity rate instead of failing the render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyRate(f64);

impl CurrencyRate {
	pub const IDENTITY: Self = Self(1.0);

	/// Parse a rate as configured by the storefront, e.g. `"1.23"`.
	#[must_use]
	pub fn parse(raw: &str) -> Self {
		let trimmed = raw.trim();
		if trimmed.is_empty() {
			return Self::IDENTITY;
		}
		match trimmed.parse::<f64>() {
			Ok(value) => Self::from(value),
			Err(_) => {
				tracing::debug!(rate = raw, "currency rate is not numeric, using 1");
				Self::IDENTITY
			}
		}
	}

	/// Parse an optional rate; an unset rate is the identity.
	#[must_use]
	pub fn from_optional(raw: Option<&str>) -> Self {
		raw.map_or(Self::IDENTITY, Self::parse)
	}

	#[must_use]
	pub fn value(self) -> f64 {
		self.0
	}
}

impl Default for CurrencyRate {
	fn default() -> Self {
		Self::IDENTITY
	}
}

impl From<f64> for CurrencyRate {
	fn from(value: f64) -> Self {
		if value.is_finite() && value > 0.0 {
			Self(value)
		} else {
			tracing::debug!(rate = value, "currency rate out of range, using 1");
			Self::IDENTITY
		}
	}
}

impl fmt::Display for CurrencyRate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Formatted price, with the regular price when it exceeds the final one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceDisplay {
	pub price_text: String,
	pub discount_text: Option<String>,
}

/// Convert and format the price of a product.
///
/// Returns `None` when the product carries no final price.
#[must_use]
pub fn format_price(
	info: &PriceInfo,
	symbol_override: Option<&str>,
	rate: CurrencyRate,
) -> Option<PriceDisplay> {
	let final_price = info.final_price?;
	let symbol = display_symbol(&info.currency_code, symbol_override);

	let price = final_price * rate.value();
	if !price.is_finite() {
		tracing::debug!(price, "converted price is not finite");
		return None;
	}
	let price_fixed = to_fixed_2(price);

	let discount = info.max_regular_price * rate.value();
	let discount_text = discount
		.is_finite()
		.then(|| to_fixed_2(discount))
		.filter(|discount_fixed| exceeds(discount_fixed, &price_fixed))
		.map(|discount_fixed| format!("{symbol}{discount_fixed}"));

	Some(PriceDisplay {
		price_text: format!("{symbol}{price_fixed}"),
		discount_text,
	})
}

/// Pick the override when set, else the symbol of `currency_code`, else nothing.
#[must_use]
pub fn display_symbol<'a>(currency_code: &str, symbol_override: Option<&'a str>) -> &'a str {
	if let Some(symbol) = symbol_override.filter(|symbol| !symbol.is_empty()) {
		return symbol;
	}
	match symbol_for(currency_code) {
		Some(symbol) => symbol,
		None => {
			if !currency_code.is_empty() {
				tracing::debug!(currency_code, "no symbol known for currency");
			}
			""
		}
	}
}

// Compared on the rounded amounts so that values which display the same never
// show up as a discount.
fn exceeds(discount: &str, price: &str) -> bool {
	matches!(
		(discount.parse::<f64>(), price.parse::<f64>()),
		(Ok(discount), Ok(price)) if discount > price
	)
}

/// Render a finite value with exactly two decimals, rounding half up.
fn to_fixed_2(value: f64) -> String {
	let repr = value.abs().to_string();
	let (whole, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

	let mut digits: Vec<u8> = whole.bytes().map(|byte| byte - b'0').collect();
	let mut fraction = fraction.bytes().map(|byte| byte - b'0');
	digits.push(fraction.next().unwrap_or(0));
	digits.push(fraction.next().unwrap_or(0));

	if fraction.next().is_some_and(|digit| digit >= 5) {
		let mut idx = digits.len();
		loop {
			if idx == 0 {
				digits.insert(0, 1);
				break;
			}
			idx -= 1;
			if digits[idx] == 9 {
				digits[idx] = 0;
			} else {
				digits[idx] += 1;
				break;
			}
		}
	}

	let negative = value < 0.0 && digits.iter().any(|&digit| digit != 0);
	let split = digits.len() - 2;
	let render = |slice: &[u8]| -> String {
		slice.iter().map(|&digit| char::from(b'0' + digit)).collect()
	};

	format!(
		"{}{}.{}",
		if negative { "-" } else { "" },
		render(&digits[..split]),
		render(&digits[split..])
	)
}
