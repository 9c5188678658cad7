use std::collections::HashMap;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
	Normal,
	PossibleOpen,
	InKey,
	PossibleClose,
}

/// Fills `{% key %}` placeholders in a prompt template.
///
/// Plain braces pass through untouched, which lets the templates carry
/// literal JSON examples. Unknown keys are written back as-is.
pub struct TemplateProcessor {
	replacements: HashMap<String, String>,
}

impl TemplateProcessor {
	pub fn new() -> Self {
		Self {
			replacements: HashMap::new(),
		}
	}

	pub fn add_replacement<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
		self.replacements.insert(key.into(), value.into());
	}

	/// Builder form of `add_replacement`.
	pub fn with<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
		self.add_replacement(key, value);
		self
	}

	pub fn get_replacement(&self, key: &str) -> Option<&String> {
		self.replacements.get(key)
	}

	pub fn process_template(&self, template: &str) -> String {
		let mut output = String::with_capacity(template.len());
		let mut state = State::Normal;
		let mut current_key = String::new();

		for ch in template.chars() {
			match state {
				State::Normal => {
					if ch == '{' {
						state = State::PossibleOpen;
					} else {
						output.push(ch);
					}
				}
				State::PossibleOpen => {
					if ch == '%' {
						state = State::InKey;
						current_key.clear();
					} else if ch == '{' {
						// "{{%" still opens a tag on the second brace
						output.push('{');
					} else {
						output.push('{');
						output.push(ch);
						state = State::Normal;
					}
				}
				State::InKey => {
					if ch == '%' {
						state = State::PossibleClose;
					} else {
						current_key.push(ch);
					}
				}
				State::PossibleClose => {
					if ch == '}' {
						let key = current_key.trim();
						if let Some(replacement) = self.replacements.get(key) {
							output.push_str(replacement);
						} else {
							output.push_str("{%");
							output.push_str(&current_key);
							output.push_str("%}");
						}
						state = State::Normal;
					} else if ch == '%' {
						current_key.push('%');
					} else {
						current_key.push('%');
						current_key.push(ch);
						state = State::InKey;
					}
				}
			}
		}

		match state {
			State::PossibleOpen => {
				output.push('{');
			}
			State::InKey => {
				output.push_str("{%");
				output.push_str(&current_key);
			}
			State::PossibleClose => {
				output.push_str("{%");
				output.push_str(&current_key);
				output.push('%');
			}
			State::Normal => {}
		}

		output
	}
}

impl Default for TemplateProcessor {
	fn default() -> Self {
		Self::new()
	}
}

/// Keeps at most `max` characters, never splitting a UTF-8 sequence.
pub fn truncate_chars(text: &str, max: usize) -> String {
	match text.char_indices().nth(max) {
		Some((idx, _)) => text[..idx].to_string(),
		None => text.to_string(),
	}
}

/// Renders an answer the way it is shown to the model: strings raw,
/// `null` empty, anything else as compact JSON.
pub fn value_text(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}
