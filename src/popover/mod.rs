//! Compose the popover view from a search result.
//!
//! The popover is either rendered in full or not at all: the visibility gate
//! is checked before any product is formatted.

mod route;

use serde::Serialize;

use crate::constants::PLACEHOLDER_IMAGE;
use crate::highlight::{Highlighter, Segment};
use crate::html::decode_entities;
use crate::price::{PriceDisplay, format_price};
use crate::types::{Labels, Product, RenderConfig, SearchResult};

pub use route::{RouteResolver, RouteTemplate};

/// Number of term suggestions offered at most.
pub const MAX_SUGGESTIONS: usize = 5;

/// Conditions under which the popover may be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityGate {
	pub active: bool,
	pub min_query_length_hit: bool,
}

impl VisibilityGate {
	#[must_use]
	pub fn new(active: bool, min_query_length_hit: bool) -> Self {
		Self {
			active,
			min_query_length_hit,
		}
	}

	/// Gate for an active popover, checking `query` against `min_query_length`
	/// characters.
	#[must_use]
	pub fn for_query(query: &str, min_query_length: usize) -> Self {
		Self::new(true, query.trim().chars().count() >= min_query_length)
	}

	/// Same gate with the popover opened or closed.
	#[must_use]
	pub fn with_active(mut self, active: bool) -> Self {
		self.active = active;
		self
	}

	/// Whether a result with `product_count` products may be shown.
	#[must_use]
	pub fn allows(&self, product_count: usize) -> bool {
		product_count > 0 && self.active && self.min_query_length_hit
	}
}

/// Fully composed popover, ready for a presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopoverView {
	pub query: String,
	pub labels: Labels,
	pub suggestions: Vec<SuggestionView>,
	pub products: Vec<ProductView>,
	pub footer: Footer,
}

impl PopoverView {
	/// Find a rendered product by sku.
	#[must_use]
	pub fn product(&self, sku: &str) -> Option<&ProductView> {
		self.products.iter().find(|product| product.sku == sku)
	}

	/// Find a rendered suggestion by its submitted term.
	#[must_use]
	pub fn suggestion(&self, term: &str) -> Option<&SuggestionView> {
		self.suggestions.iter().find(|suggestion| suggestion.term == term)
	}
}

/// A clickable term suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionView {
	/// Term submitted when clicked, as received from the provider.
	pub term: String,
	/// Decoded text for display.
	pub text: String,
}

/// One rendered product row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
	pub sku: String,
	pub name: String,
	pub segments: Vec<Segment>,
	pub price: Option<PriceDisplay>,
	pub image: ImageSource,
	pub href: Option<String>,
	pub click: ClickTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "snake_case")]
pub enum ImageSource {
	Url(String),
	Placeholder,
}

impl ImageSource {
	#[must_use]
	pub fn src(&self) -> &str {
		match self {
			Self::Url(url) => url,
			Self::Placeholder => PLACEHOLDER_IMAGE,
		}
	}
}

/// What clicking a product does after its click has been tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum ClickTarget {
	/// Follow the product link.
	Navigate(String),
	/// Put the product name in the search field and submit the form.
	Resubmit(String),
	/// A custom route left the product without a page; nothing happens.
	Stay,
}

/// "View all" footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
	pub label: String,
	/// Products reported upstream beyond the rendered page.
	pub remaining: Option<u64>,
}

impl Footer {
	fn new(label: &str, total_count: u64, page_size: usize) -> Self {
		let page_size = u64::try_from(page_size).unwrap_or(u64::MAX);
		let remaining = (total_count > page_size).then(|| total_count - page_size);
		Self {
			label: label.to_string(),
			remaining,
		}
	}

	/// Remaining count as displayed, e.g. `+14`.
	#[must_use]
	pub fn remaining_text(&self) -> Option<String> {
		self.remaining.map(|remaining| format!("+{remaining}"))
	}

	/// Full footer text, e.g. `Ver todo (+14)`.
	#[must_use]
	pub fn text(&self) -> String {
		match self.remaining_text() {
			Some(remaining) => format!("{} ({remaining})", self.label),
			None => self.label.clone(),
		}
	}
}

/// Renders search results into a [`PopoverView`].
pub struct Popover<'a> {
	config: &'a RenderConfig,
	gate: VisibilityGate,
	route: Option<&'a dyn RouteResolver>,
}

impl<'a> Popover<'a> {
	/// Create a renderer for an active popover with the given settings.
	#[must_use]
	pub fn new(config: &'a RenderConfig) -> Self {
		Self {
			config,
			gate: VisibilityGate::new(true, true),
			route: None,
		}
	}

	#[must_use]
	pub fn with_gate(mut self, gate: VisibilityGate) -> Self {
		self.gate = gate;
		self
	}

	/// Resolve product links through `route` instead of their canonical URL.
	#[must_use]
	pub fn with_route(mut self, route: &'a dyn RouteResolver) -> Self {
		self.route = Some(route);
		self
	}

	/// Compose the view for `result` and the current search input.
	///
	/// Returns `None` when the gate hides the popover.
	#[must_use]
	pub fn render(&self, result: &SearchResult, query: &str) -> Option<PopoverView> {
		if !self.gate.allows(result.items.len()) {
			tracing::trace!(
				products = result.items.len(),
				active = self.gate.active,
				min_query_length_hit = self.gate.min_query_length_hit,
				"popover hidden"
			);
			return None;
		}

		let query = query.trim();
		let highlighter = Highlighter::new(query);
		let products = result
			.items
			.iter()
			.take(self.config.page_size)
			.map(|product| self.product_view(product, &highlighter))
			.collect();

		let suggestions = result
			.suggestions
			.iter()
			.take(MAX_SUGGESTIONS)
			.map(|term| SuggestionView {
				term: term.clone(),
				text: decode_entities(term),
			})
			.collect();

		Some(PopoverView {
			query: query.to_string(),
			labels: self.config.labels.clone(),
			suggestions,
			products,
			footer: Footer::new(
				&self.config.labels.view_all,
				result.total_count,
				self.config.page_size,
			),
		})
	}

	fn product_view(&self, product: &Product, highlighter: &Highlighter) -> ProductView {
		let name = decode_entities(&product.name);
		let href = match self.route {
			Some(route) => route.resolve(&product.sku).filter(|url| !url.is_empty()),
			None => product.canonical_url.clone(),
		};
		let click = match (&href, self.route) {
			(Some(url), _) => ClickTarget::Navigate(url.clone()),
			(None, None) => ClickTarget::Resubmit(name.clone()),
			(None, Some(_)) => ClickTarget::Stay,
		};
		let image = match &product.image_url {
			Some(url) => ImageSource::Url(url.clone()),
			None => ImageSource::Placeholder,
		};
		let price = format_price(
			&product.price_info,
			self.config.currency_symbol_override.as_deref(),
			self.config.currency_rate,
		);

		ProductView {
			sku: product.sku.clone(),
			segments: highlighter.segments(&product.name),
			name,
			price,
			image,
			href,
			click,
		}
	}
}

/// Render `result` for `query` behind `gate`, without a custom route.
#[must_use]
pub fn render_popover(
	result: &SearchResult,
	query: &str,
	gate: VisibilityGate,
	config: &RenderConfig,
) -> Option<PopoverView> {
	Popover::new(config).with_gate(gate).render(result, query)
}

#[cfg(test)]
mod tests;
