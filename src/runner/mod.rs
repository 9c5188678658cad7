use std::ffi::OsString;
use std::io::IsTerminal;
use clap::Parser;
use serde_json::Value;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::envelope::{TaskError, INVALID_JSON_INPUT};
use crate::extract;
use crate::openaiapi::{ApiError, ChatClient, CompletionClient};
use crate::tasks::{OutputStyle, Task};

pub const LOG_FILTER_VAR: &str = "AIFORMS_LOG";

/// Command line shared by every runner: one input, anything after it ignored.
/// `-h` is data here, not a help request.
#[derive(Parser, Debug)]
#[command(disable_help_flag = true)]
struct Cli {
	#[arg(allow_hyphen_values = true)]
	input: Option<OsString>,
	#[arg(allow_hyphen_values = true, trailing_var_arg = true)]
	ignored: Vec<OsString>,
}

/// The runner's single argument as it arrived on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
	Missing,
	Text(String),
	NotUtf8,
}

impl From<Option<&str>> for Argument {
	fn from(arg: Option<&str>) -> Self {
		match arg {
			Some(text) => Argument::Text(text.to_string()),
			None => Argument::Missing,
		}
	}
}

/// Picks the input out of the full argv (program name first). Never exits.
pub fn read_argument(args: Vec<OsString>) -> Argument {
	let raw = match Cli::try_parse_from(args.clone()) {
		Ok(cli) => {
			if !cli.ignored.is_empty() {
				debug!(count = cli.ignored.len(), "ignoring extra arguments");
			}
			cli.input
		}
		Err(err) => {
			debug!(error = %err, "argument parsing failed, taking first argument verbatim");
			args.into_iter().nth(1)
		}
	};
	match raw {
		None => Argument::Missing,
		Some(os) => match os.into_string() {
			Ok(text) => Argument::Text(text),
			Err(_) => Argument::NotUtf8,
		},
	}
}

/// What a runner prints and how it exits.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
	pub body: Value,
	pub exit_code: i32,
}

impl Outcome {
	pub fn from_error(err: &TaskError) -> Self {
		Outcome { body: err.envelope().to_value(), exit_code: err.exit_code() }
	}

	pub fn render(&self, style: OutputStyle) -> String {
		match style {
			OutputStyle::Pretty => serde_json::to_string_pretty(&self.body).unwrap_or_else(|_| self.body.to_string()),
			OutputStyle::Compact => self.body.to_string(),
		}
	}
}

/// Decodes the argument and checks the credential; no network involved.
pub fn prepare<T: Task>(settings: &Settings, arg: &Argument) -> Result<T::Input, TaskError> {
	let raw = match arg {
		Argument::Text(raw) => raw.as_str(),
		Argument::Missing => return Err(TaskError::invalid(T::MISSING_INPUT)),
		Argument::NotUtf8 => return Err(TaskError::invalid(INVALID_JSON_INPUT)),
	};
	let input = T::parse_input(raw)?;

	if settings.api_key.is_none() {
		return Err(TaskError::CredentialMissing);
	}
	Ok(input)
}

fn finish<T: Task>(result: Result<Value, TaskError>) -> Outcome {
	match result {
		Ok(body) => Outcome { body, exit_code: 0 },
		Err(err) => {
			warn!(task = T::NAME, kind = err.kind(), error = %err, "task failed");
			Outcome::from_error(&err)
		}
	}
}

pub struct Runner<'a> {
	settings: &'a Settings,
	client: &'a dyn CompletionClient,
}

impl<'a> Runner<'a> {
	pub fn new(settings: &'a Settings, client: &'a dyn CompletionClient) -> Self {
		Runner { settings, client }
	}

	/// Runs one task to completion. Never fails: every error becomes an envelope.
	pub async fn run<T: Task>(&self, arg: Option<&str>) -> Outcome {
		let result = match prepare::<T>(self.settings, &Argument::from(arg)) {
			Ok(input) => self.execute::<T>(&input).await,
			Err(err) => Err(err),
		};
		finish::<T>(result)
	}

	pub async fn execute<T: Task>(&self, input: &T::Input) -> Result<Value, TaskError> {
		let prompt = T::render_prompt(input);
		info!(task = T::NAME, temperature = T::TEMPERATURE, prompt_len = prompt.len(), "requesting completion");

		let reply = self.client.complete(T::SYSTEM_PROMPT, &prompt, T::TEMPERATURE).await?;
		match extract::extract_json_with_attempt(&reply, T::EXPECT) {
			Some((value, attempt)) => {
				debug!(task = T::NAME, ?attempt, "recovered JSON from reply");
				Ok(value)
			}
			None => Err(TaskError::parse_failure(&reply)),
		}
	}
}

/// Full invocation from argv: the client is only built once the input
/// has been accepted, so a bad argument is always `invalid_input`.
pub async fn run_args<T, C, F>(settings: &Settings, args: Vec<OsString>, connect: F) -> Outcome
where
	T: Task,
	C: CompletionClient,
	F: FnOnce(&Settings) -> Result<C, ApiError>,
{
	let arg = read_argument(args);
	let result = match prepare::<T>(settings, &arg) {
		Ok(input) => match connect(settings) {
			Ok(client) => Runner::new(settings, &client).execute::<T>(&input).await,
			Err(err) => Err(TaskError::Upstream(err)),
		},
		Err(err) => Err(err),
	};
	finish::<T>(result)
}

/// Colour only for an interactive stderr, and never when `NO_COLOR` is set.
pub fn ansi_enabled(stderr_is_terminal: bool, no_color: Option<&str>) -> bool {
	stderr_is_terminal && no_color.map_or(true, str::is_empty)
}

/// Logs go to stderr; stdout is reserved for the single JSON document.
pub fn init_logging() {
	let filter = EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
	let no_color = std::env::var("NO_COLOR").ok();
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_ansi(ansi_enabled(std::io::stderr().is_terminal(), no_color.as_deref()))
		.with_writer(std::io::stderr)
		.try_init();
}

/// Shared body of every binary: resolve settings from the environment,
/// run the task against the live service, print, and return the exit code.
pub async fn main_for<T: Task>() -> i32 {
	init_logging();
	let settings = Settings::from_env();
	let outcome = run_args::<T, _, _>(&settings, std::env::args_os().collect(), ChatClient::new).await;
	println!("{}", outcome.render(T::OUTPUT));
	outcome.exit_code
}
