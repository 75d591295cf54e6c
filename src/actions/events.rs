use std::cell::RefCell;

use serde::Serialize;

/// Receives click tracking signals emitted by the popover.
pub trait SearchEventReporter {
	fn search_product_click(&self, unit_id: &str, sku: &str);
	fn search_suggestion_click(&self, unit_id: &str, suggestion: &str);
}

/// Reporter used when no analytics backend is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl SearchEventReporter for NoopReporter {
	fn search_product_click(&self, _unit_id: &str, _sku: &str) {}

	fn search_suggestion_click(&self, _unit_id: &str, _suggestion: &str) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackedKind {
	ProductClick,
	SuggestionClick,
}

/// A tracking signal as it was emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackedEvent {
	pub kind: TrackedKind,
	pub unit_id: String,
	/// Product sku or suggestion term.
	pub key: String,
}

/// Reporter that keeps every signal in memory and logs it.
#[derive(Debug, Default)]
pub struct RecordingReporter {
	events: RefCell<Vec<TrackedEvent>>,
}

impl RecordingReporter {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn events(&self) -> Vec<TrackedEvent> {
		self.events.borrow().clone()
	}

	fn record(&self, kind: TrackedKind, unit_id: &str, key: &str) {
		tracing::info!(?kind, unit_id, key, "tracking signal");
		self.events.borrow_mut().push(TrackedEvent {
			kind,
			unit_id: unit_id.to_string(),
			key: key.to_string(),
		});
	}
}

impl SearchEventReporter for RecordingReporter {
	fn search_product_click(&self, unit_id: &str, sku: &str) {
		self.record(TrackedKind::ProductClick, unit_id, sku);
	}

	fn search_suggestion_click(&self, unit_id: &str, suggestion: &str) {
		self.record(TrackedKind::SuggestionClick, unit_id, suggestion);
	}
}

impl<R: SearchEventReporter + ?Sized> SearchEventReporter for &R {
	fn search_product_click(&self, unit_id: &str, sku: &str) {
		(**self).search_product_click(unit_id, sku);
	}

	fn search_suggestion_click(&self, unit_id: &str, suggestion: &str) {
		(**self).search_suggestion_click(unit_id, suggestion);
	}
}
