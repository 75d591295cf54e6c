/// Resolves the page a product links to, overriding its canonical URL.
pub trait RouteResolver {
	/// Return the URL for `sku`, or `None` when the product has no page.
	fn resolve(&self, sku: &str) -> Option<String>;
}

impl<F> RouteResolver for F
where
	F: Fn(&str) -> Option<String>,
{
	fn resolve(&self, sku: &str) -> Option<String> {
		self(sku)
	}
}

/// Route resolver built from a URL template containing a `{sku}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
	template: String,
}

impl RouteTemplate {
	pub const PLACEHOLDER: &'static str = "{sku}";

	#[must_use]
	pub fn new(template: impl Into<String>) -> Self {
		Self {
			template: template.into(),
		}
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.template
	}
}

impl RouteResolver for RouteTemplate {
	fn resolve(&self, sku: &str) -> Option<String> {
		let url = self.template.replace(Self::PLACEHOLDER, sku);
		(!url.trim().is_empty()).then_some(url)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn template_substitutes_sku() {
		let route = RouteTemplate::new("https://shop.test/p/{sku}.html");
		assert_eq!(
			route.resolve("LMP-1").as_deref(),
			Some("https://shop.test/p/LMP-1.html")
		);
	}

	#[test]
	fn closures_are_resolvers() {
		let route = |sku: &str| (sku != "hidden").then(|| format!("/{sku}"));
		assert_eq!(route.resolve("a").as_deref(), Some("/a"));
		assert_eq!(route.resolve("hidden"), None);
	}

	#[test]
	fn empty_template_resolves_to_nothing() {
		assert_eq!(RouteTemplate::new("").resolve("sku"), None);
	}
}
