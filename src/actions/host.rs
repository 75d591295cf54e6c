use std::collections::VecDeque;

use serde::Serialize;

use super::form::SearchForm;

/// The page hosting the search form.
pub trait FormHost {
	/// Announce a submission to listeners on the form, without leaving the page.
	fn dispatch_submit_event(&mut self, form: &SearchForm);
	/// Submit the form for real.
	fn submit(&mut self, form: &SearchForm);
	/// Leave the page for `url`.
	fn navigate(&mut self, url: &str);
}

/// Work postponed until the current click handler has returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
	Submit,
	Navigate(String),
}

/// FIFO of [`Deferred`] work, drained by the host after each handler.
#[derive(Debug, Default)]
pub struct DeferredQueue {
	tasks: VecDeque<Deferred>,
}

impl DeferredQueue {
	pub fn push(&mut self, task: Deferred) {
		self.tasks.push_back(task);
	}

	pub fn pop(&mut self) -> Option<Deferred> {
		self.tasks.pop_front()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.tasks.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.tasks.is_empty()
	}
}

/// Everything a [`RecordingHost`] was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum HostAction {
	SubmitEvent(String),
	Submit(String),
	Navigate(String),
}

/// Host that records requests instead of acting on them.
#[derive(Debug, Default)]
pub struct RecordingHost {
	actions: Vec<HostAction>,
}

impl RecordingHost {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn actions(&self) -> &[HostAction] {
		&self.actions
	}
}

impl FormHost for RecordingHost {
	fn dispatch_submit_event(&mut self, form: &SearchForm) {
		self.actions.push(HostAction::SubmitEvent(form.query().to_string()));
	}

	fn submit(&mut self, form: &SearchForm) {
		self.actions.push(HostAction::Submit(form.query().to_string()));
	}

	fn navigate(&mut self, url: &str) {
		self.actions.push(HostAction::Navigate(url.to_string()));
	}
}
