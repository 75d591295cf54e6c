use super::*;
use crate::price::CurrencyRate;
use crate::types::PriceInfo;

fn product(sku: &str, name: &str) -> Product {
	Product::new(sku, name)
		.with_canonical_url(format!("https://shop.test/{sku}.html"))
		.with_price_info(PriceInfo::new("USD", 50.0, 80.0))
}

fn result_with(count: usize, total_count: u64) -> SearchResult {
	let items = (0..count)
		.map(|idx| product(&format!("sku-{idx}"), &format!("Lamp {idx}")))
		.collect();
	SearchResult::new()
		.with_items(items)
		.with_total_count(total_count)
}

#[test]
fn any_failing_gate_condition_hides_the_popover() {
	let config = RenderConfig::default();
	for products in [0, 3] {
		for active in [false, true] {
			for hit in [false, true] {
				let result = result_with(products, products as u64);
				let view = render_popover(&result, "lamp", VisibilityGate::new(active, hit), &config);
				let expected = products > 0 && active && hit;
				assert_eq!(
					view.is_some(),
					expected,
					"products={products} active={active} hit={hit}"
				);
			}
		}
	}
}

#[test]
fn products_are_truncated_to_page_size_in_order() {
	let config = RenderConfig::default();
	let result = result_with(10, 10);
	let view = render_popover(&result, "lamp", VisibilityGate::new(true, true), &config)
		.expect("visible");
	let skus: Vec<_> = view.products.iter().map(|p| p.sku.as_str()).collect();
	assert_eq!(skus, vec!["sku-0", "sku-1", "sku-2", "sku-3", "sku-4", "sku-5"]);
}

#[test]
fn footer_shows_remaining_count() {
	let config = RenderConfig::default();
	let view = render_popover(&result_with(6, 20), "lamp", VisibilityGate::new(true, true), &config)
		.expect("visible");
	assert_eq!(view.footer.remaining, Some(14));
	assert_eq!(view.footer.remaining_text().as_deref(), Some("+14"));
	assert_eq!(view.footer.text(), "Ver todo (+14)");

	let view = render_popover(&result_with(4, 4), "lamp", VisibilityGate::new(true, true), &config)
		.expect("visible");
	assert_eq!(view.footer.remaining, None);
	assert_eq!(view.footer.text(), "Ver todo");
}

#[test]
fn footer_trusts_reported_total() {
	let config = RenderConfig::default().with_page_size(2);
	let view = render_popover(&result_with(1, 9), "lamp", VisibilityGate::new(true, true), &config)
		.expect("visible");
	assert_eq!(view.products.len(), 1);
	assert_eq!(view.footer.remaining, Some(7));
}

#[test]
fn suggestions_are_capped_and_decoded() {
	let config = RenderConfig::default();
	let result = result_with(1, 1).with_suggestions([
		"lamp", "lamp &amp; shade", "lamps", "lamp post", "lava lamp", "lampion",
	]);
	let view = render_popover(&result, "lamp", VisibilityGate::new(true, true), &config)
		.expect("visible");
	assert_eq!(view.suggestions.len(), MAX_SUGGESTIONS);
	assert_eq!(view.suggestions[1].term, "lamp &amp; shade");
	assert_eq!(view.suggestions[1].text, "lamp & shade");
	assert!(view.suggestion("lampion").is_none());
}

#[test]
fn product_rows_carry_highlight_and_price() {
	let config = RenderConfig::default();
	let result = result_with(1, 1);
	let view = render_popover(&result, "  LAMP ", VisibilityGate::new(true, true), &config)
		.expect("visible");
	assert_eq!(view.query, "LAMP");

	let row = view.product("sku-0").expect("row");
	assert_eq!(
		row.segments,
		vec![Segment::plain(""), Segment::matched("Lamp"), Segment::plain(" 0")]
	);
	let price = row.price.as_ref().expect("price");
	assert_eq!(price.price_text, "$50.00");
	assert_eq!(price.discount_text.as_deref(), Some("$80.00"));
	assert_eq!(row.image, ImageSource::Placeholder);
	assert_eq!(row.image.src(), PLACEHOLDER_IMAGE);
}

#[test]
fn config_overrides_apply_to_prices() {
	let config = RenderConfig::default()
		.with_currency_symbol("€")
		.with_currency_rate(CurrencyRate::parse("2"));
	let view = render_popover(&result_with(1, 1), "", VisibilityGate::new(true, true), &config)
		.expect("visible");
	let price = view.products[0].price.as_ref().expect("price");
	assert_eq!(price.price_text, "€100.00");
	assert_eq!(price.discount_text.as_deref(), Some("€160.00"));
}

#[test]
fn canonical_url_is_followed() {
	let config = RenderConfig::default();
	let view = render_popover(&result_with(1, 1), "lamp", VisibilityGate::new(true, true), &config)
		.expect("visible");
	assert_eq!(
		view.products[0].click,
		ClickTarget::Navigate("https://shop.test/sku-0.html".into())
	);
}

#[test]
fn missing_url_without_route_resubmits_name() {
	let config = RenderConfig::default();
	let result = SearchResult::new()
		.with_items(vec![Product::new("sku-x", "Tom &amp; Jerry Mug")])
		.with_total_count(1);
	let view = render_popover(&result, "mug", VisibilityGate::new(true, true), &config)
		.expect("visible");
	let row = &view.products[0];
	assert_eq!(row.href, None);
	assert_eq!(row.click, ClickTarget::Resubmit("Tom & Jerry Mug".into()));
	assert_eq!(row.price, None);
}

#[test]
fn custom_route_takes_precedence() {
	let config = RenderConfig::default();
	let route = RouteTemplate::new("/catalog/{sku}");
	let view = Popover::new(&config)
		.with_route(&route)
		.render(&result_with(1, 1), "lamp")
		.expect("visible");
	assert_eq!(view.products[0].href.as_deref(), Some("/catalog/sku-0"));
	assert_eq!(view.products[0].click, ClickTarget::Navigate("/catalog/sku-0".into()));
}

#[test]
fn custom_route_without_page_stays() {
	let config = RenderConfig::default();
	let route = |_: &str| -> Option<String> { None };
	let result = SearchResult::new()
		.with_items(vec![Product::new("sku-x", "Mug")])
		.with_total_count(1);
	let view = Popover::new(&config)
		.with_route(&route)
		.render(&result, "mug")
		.expect("visible");
	assert_eq!(view.products[0].click, ClickTarget::Stay);
}

#[test]
fn closed_gate_hides_long_queries() {
	let gate = VisibilityGate::for_query("lamp", 3).with_active(false);
	assert!(gate.min_query_length_hit);
	assert!(!gate.allows(4));
	assert!(VisibilityGate::for_query("lamp", 3).with_active(true).allows(4));
}

#[test]
fn gate_for_query_counts_characters() {
	assert!(VisibilityGate::for_query("lám", 3).min_query_length_hit);
	assert!(!VisibilityGate::for_query(" la ", 3).min_query_length_hit);
}
