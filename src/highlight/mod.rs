//! Split product names into matched and unmatched segments for a query term.

use std::ops::Range;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::html::decode_entities;

/// A contiguous run of a product name, tagged as matching the term or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
	pub text: String,
	pub matched: bool,
}

impl Segment {
	#[must_use]
	pub fn plain(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			matched: false,
		}
	}

	#[must_use]
	pub fn matched(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			matched: true,
		}
	}
}

/// Highlighter for one search term, reusable across every product of a render.
///
/// The term is matched as literal text, case-insensitively.
#[derive(Debug, Clone)]
pub struct Highlighter {
	term_lower: String,
	pattern: Option<Pattern>,
}

impl Highlighter {
	#[must_use]
	pub fn new(term: &str) -> Self {
		let pattern = if term.is_empty() {
			None
		} else {
			Some(Pattern::for_term(term, PATTERN_SIZE_LIMIT))
		};
		Self {
			term_lower: term.to_lowercase(),
			pattern,
		}
	}

	/// Split `name` around every occurrence of the term.
	///
	/// Separators are kept in place, so concatenating the returned texts gives
	/// back the decoded name. Empty pieces produced by matches at the edges or
	/// next to each other are kept as well.
	#[must_use]
	pub fn segments(&self, name: &str) -> Vec<Segment> {
		let name = decode_entities(name);
		let Some(pattern) = &self.pattern else {
			return vec![Segment::plain(name)];
		};

		let mut pieces = Vec::new();
		let mut last = 0;
		for found in pattern.find_all(&name) {
			pieces.push(&name[last..found.start]);
			pieces.push(&name[found.clone()]);
			last = found.end;
		}
		pieces.push(&name[last..]);

		pieces
			.into_iter()
			.map(|piece| Segment {
				matched: piece.to_lowercase() == self.term_lower,
				text: piece.to_string(),
			})
			.collect()
	}
}

/// Split `name` into segments, marking those equal to `term` ignoring case.
#[must_use]
pub fn highlight(name: &str, term: &str) -> Vec<Segment> {
	Highlighter::new(term).segments(name)
}

// Compiled size allowed for a term's pattern, well above any realistic query.
const PATTERN_SIZE_LIMIT: usize = 64 * (1 << 20);

/// How occurrences of the term are located.
#[derive(Debug, Clone)]
enum Pattern {
	Regex(Regex),
	/// Char-by-char comparison, used when the term cannot be compiled.
	Folded(Vec<char>),
}

impl Pattern {
	fn for_term(term: &str, size_limit: usize) -> Self {
		match RegexBuilder::new(&regex::escape(term))
			.case_insensitive(true)
			.size_limit(size_limit)
			.build()
		{
			Ok(regex) => Self::Regex(regex),
			Err(err) => {
				tracing::debug!(%err, "search term not compiled, comparing chars instead");
				Self::Folded(term.chars().collect())
			}
		}
	}

	/// Byte ranges of non-overlapping occurrences, left to right.
	fn find_all(&self, haystack: &str) -> Vec<Range<usize>> {
		match self {
			Self::Regex(regex) => regex.find_iter(haystack).map(|found| found.range()).collect(),
			Self::Folded(needle) => folded_matches(haystack, needle),
		}
	}
}

fn folded_matches(haystack: &str, needle: &[char]) -> Vec<Range<usize>> {
	let mut found = Vec::new();
	let mut resume = 0;
	for (start, _) in haystack.char_indices() {
		if start < resume {
			continue;
		}
		let mut rest = haystack[start..].char_indices();
		let matched = needle
			.iter()
			.all(|want| rest.next().is_some_and(|(_, got)| same_ignoring_case(got, *want)));
		if matched {
			let end = rest
				.next()
				.map_or(haystack.len(), |(offset, _)| start + offset);
			found.push(start..end);
			resume = end;
		}
	}
	found
}

fn same_ignoring_case(a: char, b: char) -> bool {
	a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod proptests;
