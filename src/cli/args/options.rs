use clap::ValueEnum;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
	Html,
}

/// Click to simulate once the popover has been rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ClickArg {
	Product(String),
	Suggestion(String),
	ViewAll,
}
