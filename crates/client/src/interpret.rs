//! Response-shape normalization for the two endpoints.
//!
//! The primary endpoint is best-effort: absence, server errors, and malformed
//! bodies all escalate silently to the secondary endpoint. Only the secondary
//! endpoint can produce a user-visible failure.

use crate::types::{ChatReply, EndpointReply, McpReply};

/// Rendered when the secondary reply carries neither `answer` nor `answer_html`.
pub const MISSING_ANSWER_PLACEHOLDER: &str = "No answer returned.";

/// What a primary reply amounts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryVerdict {
    /// Usable answer HTML; the fallback is skipped
    Answered(String),
    /// Escalate to the secondary endpoint, silently
    Fallback,
}

/// What a secondary reply amounts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecondaryVerdict {
    /// Answer HTML to render
    Answered(String),
    /// Terminal, user-visible failure
    Failed(String),
}

/// Normalize a primary reply. Anything short of a well-formed `status: "ok"`
/// body with a non-empty answer is a fallback, never an error.
pub fn interpret_primary(reply: &EndpointReply) -> PrimaryVerdict {
    if reply.is_not_found() {
        tracing::debug!(status = reply.status, "primary endpoint absent, falling back");
        return PrimaryVerdict::Fallback;
    }

    if !reply.is_success() {
        // The error body is only good for the log line.
        let detail = serde_json::from_str::<McpReply>(&reply.body)
            .ok()
            .and_then(|r| r.error)
            .unwrap_or_default();
        tracing::debug!(status = reply.status, %detail, "primary endpoint errored, falling back");
        return PrimaryVerdict::Fallback;
    }

    match serde_json::from_str::<McpReply>(&reply.body) {
        Ok(McpReply { status: Some(status), answer: Some(answer), .. })
            if status == "ok" && !answer.is_empty() =>
        {
            PrimaryVerdict::Answered(answer)
        }
        Ok(_) => {
            tracing::debug!("primary reply lacked an ok status or answer, falling back");
            PrimaryVerdict::Fallback
        }
        Err(e) => {
            tracing::debug!(error = %e, "primary reply unparsable, falling back");
            PrimaryVerdict::Fallback
        }
    }
}

/// Normalize a secondary reply. Non-success status or an unreadable success
/// body is terminal; `route` names the endpoint in the failure message.
pub fn interpret_secondary(reply: &EndpointReply, route: &str) -> SecondaryVerdict {
    if !reply.is_success() {
        return SecondaryVerdict::Failed(format!("{} returned {}", route, reply.status));
    }

    match serde_json::from_str::<ChatReply>(&reply.body) {
        Ok(parsed) => {
            let answer = parsed
                .answer
                .or(parsed.answer_html)
                .unwrap_or_else(|| MISSING_ANSWER_PLACEHOLDER.to_string());
            SecondaryVerdict::Answered(answer)
        }
        Err(e) => SecondaryVerdict::Failed(format!("{} reply unreadable: {}", route, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_not_found_falls_back() {
        let reply = EndpointReply::new(404, "");
        assert_eq!(interpret_primary(&reply), PrimaryVerdict::Fallback);
    }

    #[test]
    fn test_primary_server_error_falls_back() {
        let reply = EndpointReply::new(500, r#"{"status":"error","error":"index down"}"#);
        assert_eq!(interpret_primary(&reply), PrimaryVerdict::Fallback);
    }

    #[test]
    fn test_primary_server_error_with_garbage_body_falls_back() {
        let reply = EndpointReply::new(502, "<html>Bad Gateway</html>");
        assert_eq!(interpret_primary(&reply), PrimaryVerdict::Fallback);
    }

    #[test]
    fn test_primary_ok_with_answer() {
        let reply = EndpointReply::new(200, r#"{"status":"ok","answer":"<b>hi</b>"}"#);
        assert_eq!(
            interpret_primary(&reply),
            PrimaryVerdict::Answered("<b>hi</b>".to_string())
        );
    }

    #[test]
    fn test_primary_error_status_in_body_falls_back() {
        let reply = EndpointReply::new(200, r#"{"status":"error","error":"no query"}"#);
        assert_eq!(interpret_primary(&reply), PrimaryVerdict::Fallback);
    }

    #[test]
    fn test_primary_missing_answer_falls_back() {
        let reply = EndpointReply::new(200, r#"{"status":"ok"}"#);
        assert_eq!(interpret_primary(&reply), PrimaryVerdict::Fallback);
    }

    #[test]
    fn test_primary_empty_answer_falls_back() {
        let reply = EndpointReply::new(200, r#"{"status":"ok","answer":""}"#);
        assert_eq!(interpret_primary(&reply), PrimaryVerdict::Fallback);
    }

    #[test]
    fn test_primary_unparsable_success_body_falls_back() {
        let reply = EndpointReply::new(200, "not json at all");
        assert_eq!(interpret_primary(&reply), PrimaryVerdict::Fallback);
    }

    #[test]
    fn test_secondary_failure_names_route_and_status() {
        let reply = EndpointReply::new(500, "");
        match interpret_secondary(&reply, "/chat") {
            SecondaryVerdict::Failed(message) => {
                assert_eq!(message, "/chat returned 500");
            }
            other => panic!("Expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_secondary_answer_field() {
        let reply = EndpointReply::new(200, r#"{"answer":"<p>found it</p>"}"#);
        assert_eq!(
            interpret_secondary(&reply, "/chat"),
            SecondaryVerdict::Answered("<p>found it</p>".to_string())
        );
    }

    #[test]
    fn test_secondary_answer_html_when_answer_absent() {
        let reply = EndpointReply::new(200, r#"{"answer_html":"fallback text"}"#);
        assert_eq!(
            interpret_secondary(&reply, "/chat"),
            SecondaryVerdict::Answered("fallback text".to_string())
        );
    }

    #[test]
    fn test_secondary_answer_wins_over_answer_html() {
        let reply = EndpointReply::new(200, r#"{"answer":"a","answer_html":"b"}"#);
        assert_eq!(
            interpret_secondary(&reply, "/chat"),
            SecondaryVerdict::Answered("a".to_string())
        );
    }

    #[test]
    fn test_secondary_placeholder_when_both_absent() {
        let reply = EndpointReply::new(200, "{}");
        assert_eq!(
            interpret_secondary(&reply, "/chat"),
            SecondaryVerdict::Answered(MISSING_ANSWER_PLACEHOLDER.to_string())
        );
    }

    #[test]
    fn test_secondary_unparsable_success_body_fails() {
        let reply = EndpointReply::new(200, "<html></html>");
        match interpret_secondary(&reply, "/chat") {
            SecondaryVerdict::Failed(message) => {
                assert!(message.contains("/chat"));
            }
            other => panic!("Expected Failed, got {:?}", other),
        }
    }
}
