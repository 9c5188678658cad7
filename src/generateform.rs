//! Generate a feedback form from a business description given as plain text.

use aiforms::runner;
use aiforms::tasks::form::FormGenerator;

#[tokio::main(flavor = "current_thread")]
async fn main() {
	let code = runner::main_for::<FormGenerator>().await;
	std::process::exit(code);
}
