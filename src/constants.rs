//! Identifiers shared with the storefront.

/// Unit identifier attached to every tracking signal the popover emits.
pub const SEARCH_UNIT_ID: &str = "livesearch-popover";

/// Image shown for products without one.
pub const PLACEHOLDER_IMAGE: &str = "NoImage.svg";

/// CSS class names used by storefront themes to style the popover.
///
/// Changing any of these breaks existing custom styling.
pub mod styling {
	pub const POPOVER: &str = "livesearch popover-container";
	pub const PRODUCT: &str = "livesearch product-result";
	pub const PRODUCTS: &str = "livesearch products-container";
	pub const PRODUCTS_WRAPPER: &str = "livesearch products-wrapper";
	pub const PRODUCTS_HEADER: &str = "livesearch product-header";
	pub const PRODUCTS_IMAGE: &str = "livesearch products-image";
	pub const PRODUCTS_INFO_WRAPPER: &str = "livesearch products-info-wrapper";
	pub const PRODUCT_NAME: &str = "livesearch product-name";
	pub const PRODUCT_PRICE: &str = "livesearch product-price";
	pub const PRODUCT_PRICE_UNIT: &str = "livesearch product-price-unit";
	pub const SUGGESTION: &str = "livesearch suggestion";
	pub const SUGGESTIONS: &str = "livesearch suggestions-container";
	pub const SUGGESTIONS_HEADER: &str = "livesearch suggestions-header";
	pub const NAME_MARK: &str = "livesearch name-mark";
	pub const VIEW_ALL: &str = "livesearch view-all-footer";
}

/// Class toggled on the popover container while it is open.
pub const ACTIVE_CLASS: &str = "active";
