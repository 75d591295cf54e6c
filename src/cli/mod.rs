mod args;
mod output;

pub(crate) use args::{CliArgs, ClickArg, OutputFormat, parse_cli};
pub(crate) use output::{print_html, print_json, print_plain};
