//! Generate follow-up questions tailored to one answer. Input: {"question": {...}, "answer": ..., "allResponses": [...]}

use aiforms::runner;
use aiforms::tasks::followup::FollowUp;

#[tokio::main(flavor = "current_thread")]
async fn main() {
	let code = runner::main_for::<FollowUp>().await;
	std::process::exit(code);
}
