//! HTML rendering of the popover, using the storefront's styling classes.

use std::fmt::Write;

use crate::constants::{ACTIVE_CLASS, styling};
use crate::highlight::Segment;
use crate::html::escape;
use crate::popover::{PopoverView, ProductView};

/// Render the popover as an HTML fragment.
///
/// Only visible popovers reach this point, so the container always carries
/// the active class.
#[must_use]
pub fn render_html(view: &PopoverView) -> String {
	let mut out = String::new();
	let _ = writeln!(out, r#"<div class="{} {ACTIVE_CLASS}">"#, styling::POPOVER);

	if !view.suggestions.is_empty() {
		let _ = writeln!(
			out,
			r#"  <div class="{}" aria-label="{}">"#,
			styling::SUGGESTIONS,
			escape(&view.labels.suggestions_aria)
		);
		let _ = writeln!(
			out,
			r#"    <div class="{}">{}</div>"#,
			styling::SUGGESTIONS_HEADER,
			escape(&view.labels.suggestions)
		);
		for suggestion in &view.suggestions {
			let _ = writeln!(
				out,
				r#"    <div class="{}" data-term="{}">{}</div>"#,
				styling::SUGGESTION,
				escape(&suggestion.term),
				escape(&suggestion.text)
			);
		}
		let _ = writeln!(out, "  </div>");
	}

	let _ = writeln!(out, r#"  <div class="{}">"#, styling::PRODUCTS);
	let _ = writeln!(
		out,
		r#"    <div class="{}">{}</div>"#,
		styling::PRODUCTS_HEADER,
		escape(&view.labels.products)
	);
	let _ = writeln!(out, r#"    <div class="{}">"#, styling::PRODUCTS_WRAPPER);
	for product in &view.products {
		write_product(&mut out, product, &view.labels.unit_price);
	}
	let _ = writeln!(out, "    </div>");
	let _ = writeln!(
		out,
		r#"    <div class="{}">{}</div>"#,
		styling::VIEW_ALL,
		escape(&view.footer.text())
	);
	let _ = writeln!(out, "  </div>");
	let _ = writeln!(out, "</div>");
	out
}

fn write_product(out: &mut String, product: &ProductView, unit_label: &str) {
	let href = product.href.as_deref().unwrap_or("");
	let _ = writeln!(
		out,
		r#"      <a href="{}" rel="noopener noreferrer">"#,
		escape(href)
	);
	let _ = writeln!(
		out,
		r#"        <div class="{}" data-sku="{}">"#,
		styling::PRODUCT,
		escape(&product.sku)
	);
	let _ = writeln!(
		out,
		r#"          <img class="{}" src="{}" alt="">"#,
		styling::PRODUCTS_IMAGE,
		escape(product.image.src())
	);
	let _ = writeln!(out, r#"          <div class="{}">"#, styling::PRODUCTS_INFO_WRAPPER);
	let _ = writeln!(
		out,
		r#"            <div class="{}">{}</div>"#,
		styling::PRODUCT_NAME,
		name_markup(&product.segments)
	);

	let mut price = String::new();
	if let Some(display) = &product.price {
		let _ = write!(price, r#"<span class="price">{}</span>"#, escape(&display.price_text));
		if let Some(discount) = &display.discount_text {
			let _ = write!(price, r#"<span class="discount">{}</span>"#, escape(discount));
		}
	}
	let _ = writeln!(
		out,
		r#"            <div class="{}">{price}</div>"#,
		styling::PRODUCT_PRICE
	);
	let _ = writeln!(
		out,
		r#"            <span class="{}">{}</span>"#,
		styling::PRODUCT_PRICE_UNIT,
		escape(unit_label)
	);
	let _ = writeln!(out, "          </div>");
	let _ = writeln!(out, "        </div>");
	let _ = writeln!(out, "      </a>");
}

/// Escaped name with matched segments wrapped in a mark span.
fn name_markup(segments: &[Segment]) -> String {
	let mut out = String::new();
	for segment in segments {
		if segment.matched {
			let _ = write!(
				out,
				r#"<span class="{}">{}</span>"#,
				styling::NAME_MARK,
				escape(&segment.text)
			);
		} else {
			out.push_str(&escape(&segment.text));
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::popover::{VisibilityGate, render_popover};
	use crate::types::{PriceInfo, Product, RenderConfig, SearchResult};

	#[test]
	fn name_markup_escapes_and_marks() {
		let markup = name_markup(&[
			Segment::plain("Tom & "),
			Segment::matched("<Jerry>"),
			Segment::plain(""),
		]);
		assert_eq!(
			markup,
			r#"Tom &amp; <span class="livesearch name-mark">&lt;Jerry&gt;</span>"#
		);
	}

	#[test]
	fn fragment_uses_styling_classes() {
		let result = SearchResult::new()
			.with_items(vec![
				Product::new("LMP-1", "Desk Lamp")
					.with_canonical_url("https://shop.test/lamp.html")
					.with_image_url("https://cdn.test/lamp.jpg")
					.with_price_info(PriceInfo::new("EUR", 19.999, 25.0)),
			])
			.with_suggestions(["lamp"])
			.with_total_count(8);
		let view = render_popover(&result, "lamp", VisibilityGate::new(true, true), &RenderConfig::default())
			.expect("visible");
		let html = render_html(&view);

		assert!(html.starts_with(r#"<div class="livesearch popover-container active">"#));
		assert!(html.contains(r#"<div class="livesearch suggestion" data-term="lamp">lamp</div>"#));
		assert!(html.contains(r#"<a href="https://shop.test/lamp.html" rel="noopener noreferrer">"#));
		assert!(html.contains(r#"src="https://cdn.test/lamp.jpg""#));
		assert!(html.contains(r#"<span class="price">€20.00</span><span class="discount">€25.00</span>"#));
		assert!(html.contains(r#"<div class="livesearch view-all-footer">Ver todo (+2)</div>"#));
	}
}
