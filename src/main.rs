mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_html, print_json, print_plain};
use workflow::PopoverWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	livesearch::logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let outcome = PopoverWorkflow::from_cli(&cli, resolved).run()?;

	match cli.output {
		OutputFormat::Plain => print_plain(&outcome, cli.width),
		OutputFormat::Json => print_json(&outcome)?,
		OutputFormat::Html => print_html(&outcome),
	}

	Ok(())
}
