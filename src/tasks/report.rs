use std::fmt::Write;
use serde_derive::Deserialize;

use crate::envelope::TaskError;
use crate::extract::Expect;
use crate::helpers::TemplateProcessor;
use crate::model::{FormSpec, Submission};
use super::{parse_json_input, OutputStyle, Task};

const TEMPLATE: &str = include_str!("../../data/prompts/report.md");
const DEFAULT_TITLE: &str = "Product Review Form";

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ReportInput {
	#[serde(default)]
	pub form: FormSpec,
	#[serde(default)]
	pub submissions: Vec<Submission>,
}

/// Summarises every submission of a form into an analyst report.
pub struct Report;

impl Task for Report {
	type Input = ReportInput;

	const NAME: &'static str = "report";
	const SYSTEM_PROMPT: &'static str = "You are an expert data analyst. Always return valid JSON only, no markdown.";
	const TEMPERATURE: f64 = 0.3;
	const EXPECT: Expect = Expect::ObjectOrArray;
	const OUTPUT: OutputStyle = OutputStyle::Compact;

	fn parse_input(raw: &str) -> Result<ReportInput, TaskError> {
		parse_json_input(raw)
	}

	fn render_prompt(input: &ReportInput) -> String {
		TemplateProcessor::new()
			.with("title", input.form.title.as_deref().unwrap_or(DEFAULT_TITLE))
			.with("description", input.form.description.as_deref().unwrap_or(""))
			.with("total_submissions", input.submissions.len().to_string())
			.with("submissions", format_submissions(&input.submissions))
			.process_template(TEMPLATE)
	}
}

pub fn format_submissions(submissions: &[Submission]) -> String {
	let mut text = String::new();
	for (idx, submission) in submissions.iter().enumerate() {
		let _ = write!(text, "\n\nSubmission #{}:\n", idx + 1);
		for response in &submission.responses {
			let _ = write!(text, "  Q: {}\n  A: {}\n", response.question, response.answer_text());
		}
	}
	text
}
