use std::env;
use std::time::Duration;
use tracing::warn;

pub const API_KEY_VAR: &str = "GROQ_API";
pub const API_BASE_VAR: &str = "GROQ_API_BASE";
pub const MODEL_VAR: &str = "GROQ_MODEL";
pub const TIMEOUT_VAR: &str = "GROQ_TIMEOUT_SECS";

pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Everything a runner needs from its environment, resolved once.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
	pub api_key: Option<String>,
	pub api_base: String,
	pub model: String,
	pub timeout: Option<Duration>,
}

impl Settings {
	pub fn from_env() -> Self {
		Self::from_lookup(|name| env::var(name).ok())
	}

	pub fn from_lookup<F>(lookup: F) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

		let timeout = non_empty(TIMEOUT_VAR).and_then(|raw| match raw.trim().parse::<u64>() {
			Ok(secs) => Some(Duration::from_secs(secs)),
			Err(err) => {
				warn!(var = TIMEOUT_VAR, value = %raw, error = %err, "ignoring unparseable timeout");
				None
			}
		});

		Settings {
			api_key: non_empty(API_KEY_VAR),
			api_base: non_empty(API_BASE_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
			model: non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
			timeout,
		}
	}

	pub fn completions_url(&self) -> String {
		format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
	}
}

impl Default for Settings {
	fn default() -> Self {
		Settings {
			api_key: None,
			api_base: DEFAULT_API_BASE.to_string(),
			model: DEFAULT_MODEL.to_string(),
			timeout: None,
		}
	}
}
