use serde_json::json;
use crate::config::{Settings, DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::helpers::{truncate_chars, value_text, TemplateProcessor};
use std::collections::HashMap;
use std::time::Duration;

#[test]
fn template_replaces_known_keys() {
	let processor = TemplateProcessor::new().with("name", "Nike").with("count", "3");
	assert_eq!(processor.process_template("{% name %} has {%count%} forms"), "Nike has 3 forms");
}

#[test]
fn template_leaves_json_braces_alone() {
	let processor = TemplateProcessor::new().with("n", "2");
	let template = "{\n  \"total\": {% n %},\n  \"nested\": {\"a\": {}}\n}";
	assert_eq!(processor.process_template(template), "{\n  \"total\": 2,\n  \"nested\": {\"a\": {}}\n}");
}

#[test]
fn template_keeps_unknown_and_unterminated_tags() {
	let processor = TemplateProcessor::new();
	assert_eq!(processor.process_template("a {%missing%} b"), "a {%missing%} b");
	assert_eq!(processor.process_template("open {% key"), "open {% key");
	assert_eq!(processor.process_template("trailing {"), "trailing {");
}

#[test]
fn template_double_brace_still_opens_tag() {
	let processor = TemplateProcessor::new().with("x", "1");
	assert_eq!(processor.process_template("{{% x %}}"), "{1}");
}

#[test]
fn replacement_values_are_not_reprocessed() {
	let processor = TemplateProcessor::new().with("a", "{% b %}").with("b", "nope");
	assert_eq!(processor.process_template("{% a %}"), "{% b %}");
	assert_eq!(processor.get_replacement("b").map(String::as_str), Some("nope"));
}

#[test]
fn truncate_respects_char_boundaries() {
	assert_eq!(truncate_chars("héllo", 2), "hé");
	assert_eq!(truncate_chars("short", 500), "short");
	let long = "é".repeat(600);
	assert_eq!(truncate_chars(&long, 500).chars().count(), 500);
}

#[test]
fn value_text_renders_answers() {
	assert_eq!(value_text(&json!("Too high")), "Too high");
	assert_eq!(value_text(&json!(null)), "");
	assert_eq!(value_text(&json!(4)), "4");
	assert_eq!(value_text(&json!(["a", "b"])), "[\"a\",\"b\"]");
}

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
	let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
	move |name: &str| map.get(name).cloned()
}

#[test]
fn settings_defaults() {
	let settings = Settings::from_lookup(lookup(&[]));
	assert_eq!(settings.api_key, None);
	assert_eq!(settings.api_base, DEFAULT_API_BASE);
	assert_eq!(settings.model, DEFAULT_MODEL);
	assert_eq!(settings.timeout, None);
	assert_eq!(settings.completions_url(), "https://api.groq.com/openai/v1/chat/completions");
}

#[test]
fn settings_blank_key_counts_as_missing() {
	let settings = Settings::from_lookup(lookup(&[("GROQ_API", "   ")]));
	assert_eq!(settings.api_key, None);
}

#[test]
fn settings_overrides() {
	let settings = Settings::from_lookup(lookup(&[
		("GROQ_API", "gsk_123"),
		("GROQ_API_BASE", "http://localhost:8080/v1/"),
		("GROQ_MODEL", "llama-3.3-70b-versatile"),
		("GROQ_TIMEOUT_SECS", "30"),
	]));
	assert_eq!(settings.api_key.as_deref(), Some("gsk_123"));
	assert_eq!(settings.model, "llama-3.3-70b-versatile");
	assert_eq!(settings.timeout, Some(Duration::from_secs(30)));
	assert_eq!(settings.completions_url(), "http://localhost:8080/v1/chat/completions");
}

#[test]
fn settings_bad_timeout_is_ignored() {
	let settings = Settings::from_lookup(lookup(&[("GROQ_TIMEOUT_SECS", "soon")]));
	assert_eq!(settings.timeout, None);
}
