use std::sync::Mutex;
use async_trait::async_trait;

use crate::config::Settings;
use crate::openaiapi::{ApiError, CompletionClient};

mod helpers;
mod openaiapi;

/// Arguments of one `complete` call.
#[derive(Debug, Clone)]
pub struct Call {
	pub system_prompt: String,
	pub user_prompt: String,
	pub temperature: f64,
}

/// Upstream stand-in returning a canned reply and recording what it was asked.
pub struct StubClient {
	reply: Result<String, String>,
	pub calls: Mutex<Vec<Call>>,
}

impl StubClient {
	pub fn replying(reply: &str) -> Self {
		StubClient { reply: Ok(reply.to_string()), calls: Mutex::new(Vec::new()) }
	}

	pub fn rejecting(status_body: &str) -> Self {
		StubClient { reply: Err(status_body.to_string()), calls: Mutex::new(Vec::new()) }
	}

	pub fn calls(&self) -> Vec<Call> {
		self.calls.lock().unwrap().clone()
	}
}

#[async_trait]
impl CompletionClient for StubClient {
	async fn complete(&self, system_prompt: &str, user_prompt: &str, temperature: f64) -> Result<String, ApiError> {
		self.calls.lock().unwrap().push(Call {
			system_prompt: system_prompt.to_string(),
			user_prompt: user_prompt.to_string(),
			temperature,
		});
		match &self.reply {
			Ok(text) => Ok(text.clone()),
			Err(body) => Err(ApiError::Status { status: 429, body: body.clone() }),
		}
	}
}

pub fn settings_with_key() -> Settings {
	Settings { api_key: Some("test-key".to_string()), ..Settings::default() }
}

// lets a test keep the stub after handing it to a client factory
#[async_trait]
impl<'c> CompletionClient for &'c StubClient {
	async fn complete(&self, system_prompt: &str, user_prompt: &str, temperature: f64) -> Result<String, ApiError> {
		(**self).complete(system_prompt, user_prompt, temperature).await
	}
}
