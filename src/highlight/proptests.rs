use proptest::prelude::*;

use super::*;

/// Names without `&`, so entity decoding leaves them unchanged.
fn name_strategy() -> impl Strategy<Value = String> {
	"[a-zA-Z0-9 .*+?^${}()|\\[\\]\\\\-]{0,40}"
}

fn term_strategy() -> impl Strategy<Value = String> {
	"[a-zA-Z0-9 .*+?^${}()|\\[\\]\\\\-]{1,6}"
}

fn metachar_term_strategy() -> impl Strategy<Value = String> {
	"[.*+?^${}()|\\[\\]\\\\]{1,6}"
}

fn joined(segments: &[Segment]) -> String {
	segments.iter().map(|segment| segment.text.as_str()).collect()
}

proptest! {
	/// An empty term never splits the name.
	#[test]
	fn prop_empty_term_yields_single_plain_segment(name in name_strategy()) {
		let segments = highlight(&name, "");
		prop_assert_eq!(segments, vec![Segment::plain(name)]);
	}

	/// Segments always reconstruct the name.
	#[test]
	fn prop_segments_reconstruct_name(name in name_strategy(), term in term_strategy()) {
		let segments = highlight(&name, &term);
		prop_assert_eq!(joined(&segments), name);
	}

	/// A term contained in the name produces at least one matched segment.
	#[test]
	fn prop_contained_term_is_marked(
		prefix in name_strategy(),
		term in term_strategy(),
		suffix in name_strategy(),
		upper in any::<bool>(),
	) {
		let inner = if upper { term.to_uppercase() } else { term.to_lowercase() };
		let name = format!("{prefix}{inner}{suffix}");
		let segments = highlight(&name, &term);
		prop_assert_eq!(joined(&segments), name);
		prop_assert!(segments.iter().any(|segment| segment.matched));
	}

	/// Matched segments are exactly the term, ignoring case.
	#[test]
	fn prop_matched_segments_equal_term(name in name_strategy(), term in term_strategy()) {
		for segment in highlight(&name, &term).iter().filter(|segment| segment.matched) {
			prop_assert_eq!(segment.text.to_lowercase(), term.to_lowercase());
		}
	}

	/// Metacharacter-only terms only match their literal text.
	#[test]
	fn prop_metachar_terms_are_literal(name in name_strategy(), term in metachar_term_strategy()) {
		let segments = highlight(&name, &term);
		let matched = segments.iter().filter(|segment| segment.matched).count();
		prop_assert_eq!(matched, name.matches(term.as_str()).count());
	}

	/// The char-by-char fallback finds the same ranges as the compiled pattern.
	#[test]
	fn prop_folded_fallback_agrees_with_regex(name in name_strategy(), term in term_strategy()) {
		let needle: Vec<char> = term.chars().collect();
		let compiled = Pattern::for_term(&term, PATTERN_SIZE_LIMIT);
		prop_assert_eq!(compiled.find_all(&name), folded_matches(&name, &needle));
	}
}
