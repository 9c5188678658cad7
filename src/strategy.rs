//! Derive business strategies from one feedback object or an array of them ("responses" or legacy "questions").

use aiforms::runner;
use aiforms::tasks::strategy::StrategyAnalysis;

#[tokio::main(flavor = "current_thread")]
async fn main() {
	let code = runner::main_for::<StrategyAnalysis>().await;
	std::process::exit(code);
}
