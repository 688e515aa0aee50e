//! Result formatting shared by every tool.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

use super::client::UpstreamError;

/// Prefix of every flagged upstream failure.
const UPSTREAM_ERROR_PREFIX: &str = "LTA API error";

/// Wrap a DataMall body as a successful result.
///
/// JSON bodies are pretty-printed; anything else is relayed verbatim.
pub fn success_result(body: &str) -> CallToolResult {
    let text = serde_json::from_str::<serde_json::Value>(body)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| body.to_string());

    let mut result = CallToolResult::success(vec![Content::text(text)]);
    // `isError` is only sent on failure.
    result.is_error = None;
    result
}

/// Turn an upstream failure into a flagged result the agent can read.
pub fn upstream_error_result(tool: &str, err: &UpstreamError) -> CallToolResult {
    let message = format!("{}: {}", UPSTREAM_ERROR_PREFIX, err);
    warn!("{} failed: {}", tool, message);
    CallToolResult::error(vec![Content::text(message)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_success_result_pretty_prints_json() {
        let result = success_result(r#"{"value":[{"Line":"NSL"}]}"#);
        assert!(result.is_error.is_none());
        assert_eq!(result.content.len(), 1);
        assert_eq!(
            text_of(&result),
            "{\n  \"value\": [\n    {\n      \"Line\": \"NSL\"\n    }\n  ]\n}"
        );
    }

    #[test]
    fn test_success_result_relays_non_json() {
        let result = success_result("plain text");
        assert_eq!(text_of(&result), "plain text");
    }
}
