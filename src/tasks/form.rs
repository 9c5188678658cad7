use crate::envelope::TaskError;
use crate::helpers::TemplateProcessor;
use super::Task;

const TEMPLATE: &str = include_str!("../../data/prompts/form.md");

/// Builds a feedback form from a free-text business description.
pub struct FormGenerator;

impl Task for FormGenerator {
	// the argument is the description itself, not JSON
	type Input = String;

	const NAME: &'static str = "form";
	const SYSTEM_PROMPT: &'static str = "You are an expert form builder. Always return valid JSON only.";
	const TEMPERATURE: f64 = 0.3;
	const MISSING_INPUT: &'static str = "Missing business description";

	fn parse_input(raw: &str) -> Result<String, TaskError> {
		Ok(raw.to_string())
	}

	fn render_prompt(description: &String) -> String {
		TemplateProcessor::new()
			.with("description", description.as_str())
			.process_template(TEMPLATE)
	}
}
