use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use livesearch::actions::{
	ClickController, ClickOutcome, HostAction, RecordingHost, RecordingReporter, SearchForm,
	TrackedEvent,
};
use livesearch::{Popover, PopoverView, RouteTemplate, SearchResult, VisibilityGate};
use serde::Serialize;

use crate::cli::{CliArgs, ClickArg};
use crate::settings::ResolvedConfig;

/// Where the search response is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ResponseSource {
	Stdin,
	File(PathBuf),
}

impl ResponseSource {
	fn from_arg(path: Option<PathBuf>) -> Self {
		match path {
			Some(path) if path.as_os_str() != "-" => Self::File(path),
			_ => Self::Stdin,
		}
	}

	fn read(&self) -> Result<String> {
		match self {
			Self::Stdin => {
				let mut payload = String::new();
				io::stdin()
					.read_to_string(&mut payload)
					.context("failed to read search response from stdin")?;
				Ok(payload)
			}
			Self::File(path) => fs::read_to_string(path)
				.with_context(|| format!("failed to read search response {}", path.display())),
		}
	}
}

/// What a simulated click did.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ClickReport {
	pub(crate) outcome: ClickOutcome,
	pub(crate) tracked: Vec<TrackedEvent>,
	pub(crate) host_actions: Vec<HostAction>,
}

/// Result of one run: the popover (if visible) and the click, if requested.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct WorkflowOutcome {
	pub(crate) popover: Option<PopoverView>,
	pub(crate) click: Option<ClickReport>,
}

/// Renders one search response and optionally replays a click on it.
pub(crate) struct PopoverWorkflow {
	settings: ResolvedConfig,
	response: ResponseSource,
	query: String,
	click: Option<ClickArg>,
}

impl PopoverWorkflow {
	pub(crate) fn from_cli(cli: &CliArgs, settings: ResolvedConfig) -> Self {
		Self {
			settings,
			response: ResponseSource::from_arg(cli.response.clone()),
			query: cli.query.clone().unwrap_or_default(),
			click: cli.click(),
		}
	}

	pub(crate) fn run(self) -> Result<WorkflowOutcome> {
		let payload = self.response.read()?;
		let result = SearchResult::from_json(&payload)?;
		tracing::debug!(
			products = result.items.len(),
			suggestions = result.suggestions.len(),
			total_count = result.total_count,
			"search response decoded"
		);
		self.render(&result)
	}

	fn render(&self, result: &SearchResult) -> Result<WorkflowOutcome> {
		let form = SearchForm::with_query(self.query.as_str());
		let gate = VisibilityGate::for_query(form.query(), self.settings.min_query_length)
			.with_active(self.settings.active);

		let route = self.settings.route_template.as_deref().map(RouteTemplate::new);
		let mut popover = Popover::new(&self.settings.render).with_gate(gate);
		if let Some(route) = &route {
			popover = popover.with_route(route);
		}
		let view = popover.render(result, form.query());

		let click = match &self.click {
			Some(click) => {
				let view = view
					.as_ref()
					.ok_or_else(|| anyhow!("the popover is hidden, there is nothing to click"))?;
				Some(replay_click(view, form, click)?)
			}
			None => None,
		};

		Ok(WorkflowOutcome {
			popover: view,
			click,
		})
	}
}

fn replay_click(view: &PopoverView, form: SearchForm, click: &ClickArg) -> Result<ClickReport> {
	let reporter = RecordingReporter::new();
	let mut host = RecordingHost::new();
	let mut controller = ClickController::new(&reporter, form);

	let outcome = match click {
		ClickArg::Product(sku) => {
			let product = view
				.product(sku)
				.ok_or_else(|| anyhow!("no rendered product with sku '{sku}'"))?;
			controller.product_click(product, &mut host)
		}
		ClickArg::Suggestion(term) => {
			let suggestion = view
				.suggestion(term)
				.ok_or_else(|| anyhow!("no rendered suggestion '{term}'"))?;
			controller.suggestion_click(&suggestion.term, &mut host)
		}
		ClickArg::ViewAll => controller.view_all_click(&mut host),
	};
	controller.run_pending(&mut host);

	Ok(ClickReport {
		outcome,
		tracked: reporter.events(),
		host_actions: host.actions().to_vec(),
	})
}
