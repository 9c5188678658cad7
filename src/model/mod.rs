use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

use crate::helpers;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
	Text,
	Textarea,
	Radio,
	Select,
	Rating,
	Email,
	Number,
	Checkbox,
}

/// Choice list for radio/select questions, or a numeric scale for ratings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum QuestionOptions {
	Choices(Vec<String>),
	Scale { min: Value, max: Value },
}

/// A form question. Only `question` matters for prompting; the rest is
/// carried so that a whole form round-trips.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub question_id: Option<String>,
	#[serde(default)]
	pub question: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub input_type: Option<InputType>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub options: Option<QuestionOptions>,
	#[serde(default)]
	pub required: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub order: Option<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub placeholder: Option<String>,
}

/// One answer plus the text of the question it answers.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Response {
	#[serde(default)]
	pub question: String,
	#[serde(default)]
	pub answer: Value,
}

impl Response {
	pub fn new<Q: Into<String>, A: Into<Value>>(question: Q, answer: A) -> Self {
		Response { question: question.into(), answer: answer.into() }
	}

	pub fn answer_text(&self) -> String {
		helpers::value_text(&self.answer)
	}
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Submission {
	#[serde(default)]
	pub responses: Vec<Response>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FormSpec {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default)]
	pub questions: Vec<Question>,
}

/// Legacy feedback entry: a question carrying its own answer.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AnsweredQuestion {
	pub question: String,
	pub answer: Value,
}

/// A feedback item in either the current (`responses`) or the legacy
/// (`questions`) shape. `responses` wins when both are present.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FeedbackItem {
	#[serde(default)]
	pub responses: Option<Vec<Response>>,
	#[serde(default)]
	pub questions: Option<Vec<AnsweredQuestion>>,
}

impl FeedbackItem {
	pub fn into_submission(self) -> Submission {
		let responses = match (self.responses, self.questions) {
			(Some(responses), _) => responses,
			(None, Some(questions)) => questions
				.into_iter()
				.map(|q| Response { question: q.question, answer: q.answer })
				.collect(),
			(None, None) => Vec::new(),
		};
		Submission { responses }
	}
}

/// Strategy input: one feedback item or a list of them.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FeedbackInput {
	Many(Vec<FeedbackItem>),
	One(FeedbackItem),
}

impl FeedbackInput {
	pub fn into_submissions(self) -> Vec<Submission> {
		match self {
			FeedbackInput::Many(items) => items.into_iter().map(FeedbackItem::into_submission).collect(),
			FeedbackInput::One(item) => vec![item.into_submission()],
		}
	}
}
