use anyhow::Result;
use livesearch::actions::{HostAction, TrackedKind};
use livesearch::render::{render_html, render_plain};

use crate::workflow::{ClickReport, WorkflowOutcome};

/// Print the popover as drawn in a terminal, followed by the click report.
pub(crate) fn print_plain(outcome: &WorkflowOutcome, width: u16) {
	if let Some(view) = &outcome.popover {
		println!("{}", render_plain(view, width));
	}
	if let Some(click) = &outcome.click {
		for line in click_lines(click) {
			println!("{line}");
		}
	}
}

/// Print the popover as an HTML fragment. Nothing is printed when hidden.
pub(crate) fn print_html(outcome: &WorkflowOutcome) {
	if let Some(view) = &outcome.popover {
		print!("{}", render_html(view));
	}
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &WorkflowOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &WorkflowOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

fn click_lines(click: &ClickReport) -> Vec<String> {
	let mut lines = Vec::new();
	for event in &click.tracked {
		let kind = match event.kind {
			TrackedKind::ProductClick => "product click",
			TrackedKind::SuggestionClick => "suggestion click",
		};
		lines.push(format!("tracked {kind} ({}): {}", event.unit_id, event.key));
	}
	for action in &click.host_actions {
		lines.push(match action {
			HostAction::SubmitEvent(query) => format!("submit event: {query}"),
			HostAction::Submit(query) => format!("submit: {query}"),
			HostAction::Navigate(url) => format!("navigate: {url}"),
		});
	}
	lines
}
