//! Core of the storefront live search popover.
//!
//! Given a ranked [`SearchResult`] and the text typed into the search box,
//! the crate highlights the query inside product names, converts and formats
//! prices, and composes the popover shown under the input. Click handling is
//! exposed through [`actions::ClickController`], and [`render`] turns a
//! composed view into terminal or HTML output.

pub mod actions;
pub mod app_dirs;
pub mod constants;
pub mod highlight;
pub mod html;
pub mod logging;
pub mod popover;
pub mod price;
pub mod render;
pub mod types;

pub use highlight::{Highlighter, Segment, highlight};
pub use popover::{
	ClickTarget, Footer, ImageSource, Popover, PopoverView, ProductView, RouteResolver,
	RouteTemplate, SuggestionView, VisibilityGate, render_popover,
};
pub use price::{CurrencyRate, PriceDisplay, format_price};
pub use types::{Labels, PriceInfo, Product, RenderConfig, ResponseError, SearchResult};
