use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_derive::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::helpers;

#[derive(Debug, Error)]
pub enum ApiError {
	#[error("request failed: {0}")]
	Http(#[from] reqwest::Error),
	#[error("invalid endpoint url: {0}")]
	Url(#[from] url::ParseError),
	#[error("malformed response: {0}")]
	Serde(#[from] serde_json::Error),
	#[error("service returned {status}: {body}")]
	Status { status: u16, body: String },
	#[error("No valid response from AI")]
	NoChoices,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
	pub role: String,
	pub content: Option<String>,
}

impl Message {
	pub fn system<S: Into<String>>(content: S) -> Self {
		Message { role: "system".to_string(), content: Some(content.into()) }
	}

	pub fn user<S: Into<String>>(content: S) -> Self {
		Message { role: "user".to_string(), content: Some(content.into()) }
	}
}

/// Body of one chat-completion request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Chat {
	pub model: String,
	pub messages: Vec<Message>,
	pub temperature: f64,
}

impl Chat {
	pub fn new(model: &str, system_prompt: &str, user_prompt: &str, temperature: f64) -> Self {
		Chat {
			model: model.to_string(),
			messages: vec![Message::system(system_prompt), Message::user(user_prompt)],
			temperature,
		}
	}
}

/// Takes the first choice's message out of a chat-completion body.
pub fn parse_response(response: &str) -> Result<Message, ApiError> {
	let mut json: serde_json::Value = serde_json::from_str(response)?;
	let message = json
		.get_mut("choices")
		.and_then(|choices| choices.get_mut(0))
		.and_then(|choice| choice.get_mut("message"))
		.map(serde_json::Value::take)
		.ok_or(ApiError::NoChoices)?;
	Ok(serde_json::from_value(message)?)
}

/// The one capability a runner needs from the language-model service.
#[async_trait]
pub trait CompletionClient: Send + Sync {
	async fn complete(&self, system_prompt: &str, user_prompt: &str, temperature: f64) -> Result<String, ApiError>;
}

/// OpenAI-compatible chat-completion client (Groq by default).
pub struct ChatClient {
	http: reqwest::Client,
	endpoint: String,
	api_key: String,
	model: String,
}

impl ChatClient {
	pub fn new(settings: &Settings) -> Result<Self, ApiError> {
		let mut builder = reqwest::Client::builder();
		if let Some(timeout) = settings.timeout {
			builder = builder.timeout(timeout);
		}
		Ok(ChatClient {
			http: builder.build()?,
			endpoint: settings.completions_url(),
			api_key: settings.api_key.clone().unwrap_or_default(),
			model: settings.model.clone(),
		})
	}
}

#[async_trait]
impl CompletionClient for ChatClient {
	async fn complete(&self, system_prompt: &str, user_prompt: &str, temperature: f64) -> Result<String, ApiError> {
		let url = url::Url::parse(&self.endpoint)?;
		let chat = Chat::new(&self.model, system_prompt, user_prompt, temperature);
		debug!(url = %url, model = %self.model, temperature, "sending chat completion");

		let resp = self.http
			.post(url)
			.header(AUTHORIZATION, format!("Bearer {}", self.api_key))
			.header(CONTENT_TYPE, "application/json")
			.json(&chat)
			.send()
			.await?;
		let status = resp.status();
		let body = resp.text().await?;
		if !status.is_success() {
			warn!(status = status.as_u16(), "chat completion rejected");
			return Err(ApiError::Status {
				status: status.as_u16(),
				body: helpers::truncate_chars(body.trim(), 500),
			});
		}

		let message = parse_response(&body)?;
		Ok(message.content.unwrap_or_default())
	}
}
