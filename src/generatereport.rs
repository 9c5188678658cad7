//! Generate an analyst report from form submissions. Input: {"form": {...}, "submissions": [...]}

use aiforms::runner;
use aiforms::tasks::report::Report;

#[tokio::main(flavor = "current_thread")]
async fn main() {
	let code = runner::main_for::<Report>().await;
	std::process::exit(code);
}
