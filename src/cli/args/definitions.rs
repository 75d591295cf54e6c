use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{ClickArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `livesearch` binary.
#[derive(Parser, Debug)]
#[command(
    name = "livesearch",
    version,
    long_version = long_version(),
    about = "Render a live search popover from a storefront search response",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "LIVESEARCH_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'r',
        long,
        value_name = "FILE",
        help = "Search response JSON to render, `-` for stdin (default: stdin)"
    )]
    pub(crate) response: Option<PathBuf>,
    #[arg(
        short = 'q',
        long,
        value_name = "QUERY",
        help = "Text currently typed into the search input (default: empty)"
    )]
    pub(crate) query: Option<String>,
    #[arg(
        short = 's',
        long = "page-size",
        value_name = "NUM",
        help = "Number of products to show (default: 6)"
    )]
    pub(crate) page_size: Option<usize>,
    #[arg(
        long = "currency-symbol",
        value_name = "SYMBOL",
        help = "Symbol shown before prices (default: derived from the currency code)"
    )]
    pub(crate) currency_symbol: Option<String>,
    #[arg(
        long = "currency-rate",
        value_name = "RATE",
        help = "Conversion rate applied to prices (default: 1)"
    )]
    pub(crate) currency_rate: Option<String>,
    #[arg(
        short = 'm',
        long = "min-query-length",
        value_name = "NUM",
        help = "Characters required before the popover opens (default: 3)"
    )]
    pub(crate) min_query_length: Option<usize>,
    #[arg(
        short = 'a',
        long = "active",
        value_parser = BoolishValueParser::new(),
        help = "Whether the popover is open (default: enabled)"
    )]
    pub(crate) active: Option<bool>,
    #[arg(
        long = "route-template",
        value_name = "URL",
        help = "Product link template with a {sku} placeholder (default: canonical URL)"
    )]
    pub(crate) route_template: Option<String>,
    #[arg(
        long = "click-product",
        value_name = "SKU",
        conflicts_with_all = ["click_suggestion", "click_view_all"],
        help = "Simulate a click on the product with this sku"
    )]
    pub(crate) click_product: Option<String>,
    #[arg(
        long = "click-suggestion",
        value_name = "TERM",
        conflicts_with = "click_view_all",
        help = "Simulate a click on this suggestion"
    )]
    pub(crate) click_suggestion: Option<String>,
    #[arg(
        long = "click-view-all",
        help = "Simulate a click on the view all footer"
    )]
    pub(crate) click_view_all: bool,
    #[arg(
        short = 'w',
        long,
        value_name = "COLUMNS",
        default_value_t = 60,
        help = "Width of the plain text rendering"
    )]
    pub(crate) width: u16,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'v',
        long,
        help = "Log debug details to stderr (default: disabled)"
    )]
    pub(crate) verbose: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
}

impl CliArgs {
    /// The click requested on the command line, if any.
    pub(crate) fn click(&self) -> Option<ClickArg> {
        if let Some(sku) = &self.click_product {
            return Some(ClickArg::Product(sku.clone()));
        }
        if let Some(term) = &self.click_suggestion {
            return Some(ClickArg::Suggestion(term.clone()));
        }
        self.click_view_all.then_some(ClickArg::ViewAll)
    }
}
