//! HTML text helpers.
//!
//! Product names and suggestions arrive with entities already applied by the
//! catalog (`&amp;`, `&#39;`, `&iquest;`, ...). They are decoded once before
//! display and escaped again only by the HTML renderer.

/// Decode named and numeric character references in `text`.
///
/// Every HTML5 named entity is recognised. Unknown or malformed references
/// are kept verbatim.
pub fn decode_entities(text: &str) -> String {
	html_escape::decode_html_entities(text).into_owned()
}

/// Escape text for use inside HTML element content or quoted attributes.
pub fn escape(text: &str) -> String {
	html_escape::encode_quoted_attribute(text).into_owned()
}
