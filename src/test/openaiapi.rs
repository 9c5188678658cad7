use serde_json::json;
use crate::config::Settings;
use crate::openaiapi::{parse_response, ApiError, Chat, ChatClient, CompletionClient};

#[test]
fn chat_request_body() {
	let chat = Chat::new("llama-3.1-8b-instant", "be terse", "hello", 0.3);
	let body = serde_json::to_value(&chat).unwrap();
	assert_eq!(body, json!({
		"model": "llama-3.1-8b-instant",
		"messages": [
			{"role": "system", "content": "be terse"},
			{"role": "user", "content": "hello"}
		],
		"temperature": 0.3
	}));
}

#[test]
fn parse_first_choice() {
	let body = r#"{
		"id": "chatcmpl-1",
		"object": "chat.completion",
		"choices": [
			{"index": 0, "message": {"role": "assistant", "content": "{\"ok\": true}"}, "finish_reason": "stop"},
			{"index": 1, "message": {"role": "assistant", "content": "second"}, "finish_reason": "stop"}
		],
		"usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
	}"#;
	let message = parse_response(body).unwrap();
	assert_eq!(message.role, "assistant");
	assert_eq!(message.content.as_deref(), Some("{\"ok\": true}"));
}

#[test]
fn parse_without_choices() {
	assert!(matches!(parse_response(r#"{"choices": []}"#), Err(ApiError::NoChoices)));
	assert!(matches!(parse_response(r#"{"error": {"message": "quota"}}"#), Err(ApiError::NoChoices)));
	assert!(matches!(parse_response("<html>bad gateway</html>"), Err(ApiError::Serde(_))));
}

#[test]
fn null_content_is_allowed() {
	let message = parse_response(r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#).unwrap();
	assert_eq!(message.content, None);
}

#[tokio::test]
async fn bad_endpoint_is_an_error_not_a_panic() {
	let settings = Settings {
		api_key: Some("k".to_string()),
		api_base: "not a url".to_string(),
		..Settings::default()
	};
	let client = ChatClient::new(&settings).unwrap();
	let result = client.complete("s", "u", 0.3).await;
	assert!(matches!(result, Err(ApiError::Url(_))));
}
