use serde::de::DeserializeOwned;
use tracing::debug;

use crate::envelope::{TaskError, INVALID_JSON_INPUT, MISSING_INPUT_DATA};
use crate::extract::Expect;

pub mod followup;
pub mod form;
pub mod report;
pub mod strategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
	Pretty,
	Compact,
}

/// One prompt→completion→extraction job. Implementors are unit types;
/// everything that varies between runners is a constant or a pure function.
pub trait Task {
	type Input;

	const NAME: &'static str;
	const SYSTEM_PROMPT: &'static str;
	const TEMPERATURE: f64;
	const EXPECT: Expect = Expect::Object;
	const OUTPUT: OutputStyle = OutputStyle::Pretty;
	/// Error text when no argument was supplied at all.
	const MISSING_INPUT: &'static str = MISSING_INPUT_DATA;

	fn parse_input(raw: &str) -> Result<Self::Input, TaskError>;
	fn render_prompt(input: &Self::Input) -> String;
}

/// Decodes a JSON argument, collapsing every failure to the same message.
pub fn parse_json_input<T: DeserializeOwned>(raw: &str) -> Result<T, TaskError> {
	serde_json::from_str(raw).map_err(|err| {
		debug!(error = %err, "rejecting input argument");
		TaskError::invalid(INVALID_JSON_INPUT)
	})
}
