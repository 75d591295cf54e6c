use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Page size: {}", config.render.page_size);
	println!(
		"  Currency symbol: {}",
		config
			.render
			.currency_symbol_override
			.as_deref()
			.unwrap_or("(from currency code)")
	);
	println!("  Currency rate: {}", config.render.currency_rate);
	println!("  Min query length: {}", config.min_query_length);
	println!("  Active: {}", bool_to_word(config.active));
	match &config.route_template {
		Some(template) => println!("  Route template: {template}"),
		None => println!("  Route template: (canonical URL)"),
	}
	let labels = &config.render.labels;
	println!(
		"  Labels: {} / {} / {} / {}",
		labels.suggestions, labels.products, labels.view_all, labels.unit_price
	);
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use livesearch::RenderConfig;

	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(super::bool_to_word(true), "yes");
		assert_eq!(super::bool_to_word(false), "no");
	}

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			render: RenderConfig::default().with_currency_symbol("€"),
			min_query_length: 3,
			active: false,
			route_template: Some("/p/{sku}".into()),
		};

		print_summary(&config);
	}
}
