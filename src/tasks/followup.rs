use serde_derive::Deserialize;
use serde_json::Value;

use crate::envelope::TaskError;
use crate::helpers::{self, TemplateProcessor};
use crate::model::{Question, Response};
use super::{parse_json_input, Task};

const TEMPLATE: &str = include_str!("../../data/prompts/followup.md");

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpInput {
	#[serde(default)]
	pub question: Option<Question>,
	#[serde(default)]
	pub answer: Value,
	#[serde(default)]
	pub all_responses: Vec<Response>,
}

/// Generates one or two follow-up questions for a single answer.
pub struct FollowUp;

impl Task for FollowUp {
	type Input = FollowUpInput;

	const NAME: &'static str = "followup";
	const SYSTEM_PROMPT: &'static str = "You are an expert at creating contextual follow-up questions. Always return valid JSON only. Generate questions that directly address what the user said in their answer.";
	const TEMPERATURE: f64 = 0.5;

	fn parse_input(raw: &str) -> Result<FollowUpInput, TaskError> {
		parse_json_input(raw)
	}

	fn render_prompt(input: &FollowUpInput) -> String {
		let question = input.question.as_ref().map(|q| q.question.as_str()).unwrap_or("");
		TemplateProcessor::new()
			.with("question", question)
			.with("answer", helpers::value_text(&input.answer))
			.with("context", format_context(&input.all_responses))
			.process_template(TEMPLATE)
	}
}

/// `Q: ...\nA: ...` per earlier response, newline separated.
pub fn format_context(responses: &[Response]) -> String {
	responses
		.iter()
		.map(|r| format!("Q: {}\nA: {}", r.question, r.answer_text()))
		.collect::<Vec<_>>()
		.join("\n")
}
