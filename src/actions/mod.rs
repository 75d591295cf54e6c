//! Click handling for the popover.
//!
//! Every handler works in two steps. The tracking signal is emitted
//! synchronously, together with the form's submit event. Anything that leaves
//! the page (following a link, submitting the form) is pushed on a
//! [`DeferredQueue`] and only happens once the host calls
//! [`ClickController::run_pending`] after the handler returned. Tracking thus
//! always happens before navigation.

mod events;
mod form;
mod host;

use serde::Serialize;

use crate::constants::SEARCH_UNIT_ID;
use crate::popover::{ClickTarget, ProductView};

pub use events::{NoopReporter, RecordingReporter, SearchEventReporter, TrackedEvent, TrackedKind};
pub use form::{FormField, SearchForm};
pub use host::{Deferred, DeferredQueue, FormHost, HostAction, RecordingHost};

/// Result of a click, as scheduled by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum ClickOutcome {
	/// A navigation to this URL is pending.
	Navigate(String),
	/// A form submission with this query is pending.
	Resubmit(String),
	/// Nothing was scheduled.
	Stay,
}

/// Handles clicks on products, suggestions and the footer.
#[derive(Debug)]
pub struct ClickController<R> {
	reporter: R,
	form: SearchForm,
	pending: DeferredQueue,
}

impl ClickController<NoopReporter> {
	/// Controller that does not report clicks anywhere.
	#[must_use]
	pub fn untracked(form: SearchForm) -> Self {
		Self::new(NoopReporter, form)
	}
}

impl<R: SearchEventReporter> ClickController<R> {
	#[must_use]
	pub fn new(reporter: R, form: SearchForm) -> Self {
		Self {
			reporter,
			form,
			pending: DeferredQueue::default(),
		}
	}

	#[must_use]
	pub fn form(&self) -> &SearchForm {
		&self.form
	}

	#[must_use]
	pub fn reporter(&self) -> &R {
		&self.reporter
	}

	/// Number of deferred tasks waiting for [`run_pending`](Self::run_pending).
	#[must_use]
	pub fn pending(&self) -> usize {
		self.pending.len()
	}

	/// Track a product click and schedule what follows it.
	pub fn product_click(&mut self, product: &ProductView, host: &mut impl FormHost) -> ClickOutcome {
		self.reporter
			.search_product_click(SEARCH_UNIT_ID, &product.sku);

		match &product.click {
			ClickTarget::Navigate(url) => {
				self.pending.push(Deferred::Navigate(url.clone()));
				ClickOutcome::Navigate(url.clone())
			}
			ClickTarget::Resubmit(name) => self.update_and_submit(Some(name.as_str()), host),
			ClickTarget::Stay => ClickOutcome::Stay,
		}
	}

	/// Track a suggestion click and resubmit the search with it.
	pub fn suggestion_click(&mut self, suggestion: &str, host: &mut impl FormHost) -> ClickOutcome {
		self.reporter
			.search_suggestion_click(SEARCH_UNIT_ID, suggestion);
		self.update_and_submit(Some(suggestion), host)
	}

	/// Submit the current query unchanged.
	pub fn view_all_click(&mut self, host: &mut impl FormHost) -> ClickOutcome {
		self.update_and_submit(None, host)
	}

	/// Run deferred work in the order it was scheduled. Returns the number of
	/// tasks run.
	pub fn run_pending(&mut self, host: &mut impl FormHost) -> usize {
		let mut ran = 0;
		while let Some(task) = self.pending.pop() {
			match task {
				Deferred::Submit => host.submit(&self.form),
				Deferred::Navigate(url) => host.navigate(&url),
			}
			ran += 1;
		}
		ran
	}

	fn update_and_submit(&mut self, phrase: Option<&str>, host: &mut impl FormHost) -> ClickOutcome {
		if let Some(phrase) = phrase.filter(|phrase| !phrase.is_empty()) {
			self.form.set(FormField::Search, phrase);
		}
		host.dispatch_submit_event(&self.form);
		self.pending.push(Deferred::Submit);
		ClickOutcome::Resubmit(self.form.query().to_string())
	}
}
