//! Data shared by the highlighter, the price formatter and the popover.

mod config;
mod product;
mod response;

pub use config::{DEFAULT_PAGE_SIZE, Labels, RenderConfig};
pub use product::{PriceInfo, Product, SearchResult};
pub use response::ResponseError;
