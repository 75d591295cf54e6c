use livesearch::actions::{
	ClickController, ClickOutcome, HostAction, RecordingHost, RecordingReporter, SearchForm,
	TrackedKind,
};
use livesearch::render::{render_html, render_plain};
use livesearch::{
	ClickTarget, CurrencyRate, ImageSource, PopoverView, RenderConfig, SearchResult,
	VisibilityGate, render_popover,
};

const RESPONSE: &str = include_str!("fixtures/response.json");

fn result() -> SearchResult {
	SearchResult::from_json(RESPONSE).expect("fixture decodes")
}

fn visible(config: &RenderConfig) -> PopoverView {
	render_popover(&result(), "lamp", VisibilityGate::for_query("lamp", 3), config)
		.expect("popover is visible")
}

#[test]
fn fixture_renders_products_suggestions_and_footer() {
	let view = visible(&RenderConfig::default());

	let skus: Vec<_> = view.products.iter().map(|product| product.sku.as_str()).collect();
	assert_eq!(skus, ["LMP-1", "LMP-2", "RUG-1"]);
	assert_eq!(view.suggestions.len(), 5);
	assert_eq!(view.footer.text(), "Ver todo (+14)");
}

#[test]
fn prices_are_rounded_half_up_with_discount() {
	let view = visible(&RenderConfig::default());

	let desk = view.product("LMP-1").expect("desk lamp");
	let price = desk.price.as_ref().expect("priced");
	assert_eq!(price.price_text, "$10.01");
	assert_eq!(price.discount_text.as_deref(), Some("$12.00"));

	let floor = view.product("LMP-2").expect("floor lamp");
	let price = floor.price.as_ref().expect("priced");
	assert_eq!(price.price_text, "€25.00");
	assert_eq!(price.discount_text, None);

	assert!(view.product("RUG-1").expect("rug").price.is_none());
}

#[test]
fn overrides_apply_to_every_price() {
	let config = RenderConfig::default()
		.with_currency_symbol("R$")
		.with_currency_rate(CurrencyRate::parse("2"));
	let view = visible(&config);

	let floor = view.product("LMP-2").expect("floor lamp");
	assert_eq!(floor.price.as_ref().expect("priced").price_text, "R$50.00");
}

#[test]
fn names_are_decoded_and_highlighted() {
	let view = visible(&RenderConfig::default());

	let desk = view.product("LMP-1").expect("desk lamp");
	assert_eq!(desk.name, "Desk Lamp & Bulb");
	let matched: Vec<_> = desk
		.segments
		.iter()
		.filter(|segment| segment.matched)
		.map(|segment| segment.text.as_str())
		.collect();
	assert_eq!(matched, ["Lamp"]);

	let floor = view.product("LMP-2").expect("floor lamp");
	assert!(floor.segments.iter().any(|segment| segment.matched && segment.text == "LAMP"));
}

#[test]
fn images_and_click_targets_follow_product_data() {
	let view = visible(&RenderConfig::default());

	let desk = view.product("LMP-1").expect("desk lamp");
	assert_eq!(desk.image, ImageSource::Url("https://cdn.test/desk-lamp.jpg".into()));
	assert_eq!(
		desk.click,
		ClickTarget::Navigate("https://shop.test/desk-lamp.html".into())
	);

	let rug = view.product("RUG-1").expect("rug");
	assert_eq!(rug.image.src(), "NoImage.svg");
	assert_eq!(rug.click, ClickTarget::Resubmit("Wool Rug".into()));
}

#[test]
fn popover_is_hidden_for_short_queries_and_empty_results() {
	let config = RenderConfig::default();
	assert!(render_popover(&result(), "la", VisibilityGate::for_query("la", 3), &config).is_none());
	assert!(
		render_popover(
			&SearchResult::default(),
			"lamp",
			VisibilityGate::for_query("lamp", 3),
			&config
		)
		.is_none()
	);
	assert!(render_popover(&result(), "lamp", VisibilityGate::new(false, true), &config).is_none());
}

#[test]
fn product_click_tracks_then_resubmits_after_pending_work() {
	let view = visible(&RenderConfig::default());
	let reporter = RecordingReporter::new();
	let mut host = RecordingHost::new();
	let mut controller = ClickController::new(&reporter, SearchForm::with_query("lamp"));

	let outcome = controller.product_click(view.product("RUG-1").expect("rug"), &mut host);
	assert_eq!(outcome, ClickOutcome::Resubmit("Wool Rug".into()));
	assert_eq!(host.actions(), [HostAction::SubmitEvent("Wool Rug".into())]);

	controller.run_pending(&mut host);
	assert_eq!(
		host.actions(),
		[
			HostAction::SubmitEvent("Wool Rug".into()),
			HostAction::Submit("Wool Rug".into()),
		]
	);

	let events = reporter.events();
	assert_eq!(events.len(), 1);
	assert_eq!(events[0].kind, TrackedKind::ProductClick);
	assert_eq!(events[0].key, "RUG-1");
}

#[test]
fn renderers_show_the_view() {
	let view = visible(&RenderConfig::default());

	let html = render_html(&view);
	assert!(html.contains("livesearch popover-container"));
	assert!(html.contains("Desk Lamp &amp; Bulb") || html.contains("Lamp</span> &amp; Bulb"));
	assert!(html.contains("Ver todo (+14)"));

	let plain = render_plain(&view, 60);
	assert!(plain.contains("$10.01"));
	assert!(plain.contains("Ver todo (+14)"));
}
