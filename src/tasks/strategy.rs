use std::fmt::Write;

use crate::envelope::TaskError;
use crate::helpers::TemplateProcessor;
use crate::model::{FeedbackInput, Submission};
use super::{parse_json_input, Task};

const TEMPLATE: &str = include_str!("../../data/prompts/strategy.md");

pub const NO_FEEDBACK: &str = "No feedback data provided";

/// Turns customer feedback into business strategies. Accepts a single
/// feedback item or a list, in the current or legacy shape.
pub struct StrategyAnalysis;

impl Task for StrategyAnalysis {
	type Input = Vec<Submission>;

	const NAME: &'static str = "strategy";
	const SYSTEM_PROMPT: &'static str = "You are an expert product strategist. Analyze product reviews and generate actionable business strategies. Always return valid JSON only.";
	const TEMPERATURE: f64 = 0.4;

	fn parse_input(raw: &str) -> Result<Vec<Submission>, TaskError> {
		let input: FeedbackInput = parse_json_input(raw)?;
		if matches!(&input, FeedbackInput::Many(items) if items.is_empty()) {
			return Err(TaskError::invalid(NO_FEEDBACK));
		}
		Ok(input.into_submissions())
	}

	fn render_prompt(submissions: &Vec<Submission>) -> String {
		TemplateProcessor::new()
			.with("feedback", format_feedback(submissions))
			.process_template(TEMPLATE)
	}
}

pub fn format_feedback(submissions: &[Submission]) -> String {
	let mut text = String::new();
	for (idx, submission) in submissions.iter().enumerate() {
		let _ = write!(text, "\n### Customer Review {} ###\n", idx + 1);
		for response in &submission.responses {
			let _ = writeln!(text, "- {}: {}", response.question, response.answer_text());
		}
		text.push_str("\n\n");
	}
	text
}
