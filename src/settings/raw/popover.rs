use livesearch::{CurrencyRate, Labels, RenderConfig, types::DEFAULT_PAGE_SIZE};
use serde::Deserialize;

use super::super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

/// Minimum query length used when none is configured.
const DEFAULT_MIN_QUERY_LENGTH: usize = 3;

/// Popover behaviour prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PopoverSection {
	pub(super) page_size: Option<usize>,
	pub(super) currency_symbol: Option<String>,
	pub(super) currency_rate: Option<String>,
	pub(super) min_query_length: Option<usize>,
	pub(super) active: Option<bool>,
	pub(super) route_template: Option<String>,
}

impl PopoverSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(page_size) = cli.page_size {
			self.page_size = Some(page_size);
		}
		if let Some(symbol) = cli.currency_symbol.clone() {
			self.currency_symbol = Some(symbol);
		}
		if let Some(rate) = cli.currency_rate.clone() {
			self.currency_rate = Some(rate);
		}
		if let Some(length) = cli.min_query_length {
			self.min_query_length = Some(length);
		}
		if let Some(active) = cli.active {
			self.active = Some(active);
		}
		if let Some(template) = cli.route_template.clone() {
			self.route_template = Some(template);
		}
	}

	pub(super) fn finalize(self, labels: Labels) -> ResolvedConfig {
		let currency_symbol_override = self
			.currency_symbol
			.filter(|symbol| !symbol.is_empty());
		let currency_rate = CurrencyRate::from_optional(self.currency_rate.as_deref());
		let route_template = self
			.route_template
			.map(|template| template.trim().to_string())
			.filter(|template| !template.is_empty());

		ResolvedConfig {
			render: RenderConfig {
				page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
				currency_symbol_override,
				currency_rate,
				labels,
			},
			min_query_length: self.min_query_length.unwrap_or(DEFAULT_MIN_QUERY_LENGTH),
			active: self.active.unwrap_or(true),
			route_template,
		}
	}
}
