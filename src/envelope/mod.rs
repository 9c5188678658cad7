use serde_derive::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::helpers;
use crate::openaiapi::ApiError;

/// Characters of the model reply kept for diagnostics.
pub const RAW_RESPONSE_LIMIT: usize = 500;

pub const INVALID_JSON_INPUT: &str = "Invalid JSON input";
pub const MISSING_INPUT_DATA: &str = "Missing input data";

#[derive(Debug, Error)]
pub enum TaskError {
	#[error("Missing GROQ_API key")]
	CredentialMissing,
	#[error("{0}")]
	InvalidInput(String),
	#[error("AI API error: {0}")]
	Upstream(#[from] ApiError),
	#[error("Failed to parse AI response")]
	ParseFailure { raw_response: String },
}

impl TaskError {
	pub fn invalid<M: Into<String>>(msg: M) -> Self {
		TaskError::InvalidInput(msg.into())
	}

	pub fn parse_failure(reply: &str) -> Self {
		TaskError::ParseFailure { raw_response: helpers::truncate_chars(reply, RAW_RESPONSE_LIMIT) }
	}

	pub fn kind(&self) -> &'static str {
		match self {
			TaskError::CredentialMissing => "credential_missing",
			TaskError::InvalidInput(_) => "invalid_input",
			TaskError::Upstream(_) => "upstream_error",
			TaskError::ParseFailure { .. } => "parse_failure",
		}
	}

	/// Only a bad argument fails the process; everything else is reported in-band.
	pub fn exit_code(&self) -> i32 {
		match self {
			TaskError::InvalidInput(_) => 1,
			_ => 0,
		}
	}

	pub fn envelope(&self) -> ErrorEnvelope {
		let raw_response = match self {
			TaskError::ParseFailure { raw_response } => Some(raw_response.clone()),
			_ => None,
		};
		ErrorEnvelope { error: self.to_string(), raw_response }
	}
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ErrorEnvelope {
	pub error: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub raw_response: Option<String>,
}

impl ErrorEnvelope {
	pub fn to_value(&self) -> Value {
		serde_json::to_value(self).unwrap_or_else(|_| Value::String(self.error.clone()))
	}
}
