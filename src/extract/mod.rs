//! Best-effort recovery of a JSON value from a model reply.
//!
//! The reply is expected to be a single JSON blob, possibly wrapped in
//! code fences or prose. This is not a brace-balancing parser: only the
//! span from the first opening delimiter to the last closing one is tried.

use std::sync::OnceLock;
use regex::Regex;
use serde_json::Value;

/// Top-level shape the caller is prepared to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
	Object,
	/// Object attempts first, then the same attempts with `[` / `]`.
	ObjectOrArray,
}

/// Which delimiter pair recovered the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
	Object,
	Array,
}

fn fence_json() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| Regex::new(r"```json\s*").expect("valid regex"))
}

fn fence_bare() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| Regex::new(r"```\s*").expect("valid regex"))
}

fn object_pattern() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"))
}

fn array_pattern() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| Regex::new(r"(?s)\[.*\]").expect("valid regex"))
}

/// Removes every "```json" / "```" marker (with trailing whitespace) and trims.
pub fn strip_fences(text: &str) -> String {
	let without_tagged = fence_json().replace_all(text, "");
	let without_bare = fence_bare().replace_all(&without_tagged, "");
	without_bare.trim().to_string()
}

/// Recovers a JSON value from `text`, or `None` when nothing parses.
pub fn extract_json(text: &str, expect: Expect) -> Option<Value> {
	extract_json_with_attempt(text, expect).map(|(value, _)| value)
}

/// Same as [`extract_json`] but also reports which attempt succeeded.
pub fn extract_json_with_attempt(text: &str, expect: Expect) -> Option<(Value, Attempt)> {
	let cleaned = strip_fences(text);

	if let Some(value) = try_delimited(&cleaned, object_pattern()) {
		return Some((value, Attempt::Object));
	}
	if expect == Expect::ObjectOrArray {
		if let Some(value) = try_delimited(&cleaned, array_pattern()) {
			return Some((value, Attempt::Array));
		}
	}
	None
}

// The leftmost-greedy match already spans first opening to last closing
// delimiter, so it doubles as the plain substring fallback.
fn try_delimited(text: &str, pattern: &Regex) -> Option<Value> {
	let matched = pattern.find(text)?;
	serde_json::from_str::<Value>(matched.as_str()).ok()
}
