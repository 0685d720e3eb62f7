//! Status Messages
//!
//! The user-facing texts and the rules for turning an API outcome into the
//! status line shown under the signup form.

use crate::error::ClientError;

/// How long a signup result stays visible
pub const STATUS_HIDE_DELAY_MS: u32 = 5000;

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS: &str = "No participants yet.";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const GENERIC_API_ERROR: &str = "An error occurred";
pub const UNREGISTER_REJECTED: &str = "Failed to unregister participant.";
pub const UNREGISTER_FAILED: &str = "Error unregistering participant.";
pub const UNREGISTER_TITLE: &str = "Unregister participant";

/// Confirmation asked before unregistering
pub fn unregister_prompt(email: &str, activity: &str) -> String {
    format!("Unregister {} from {}?", email, activity)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// CSS class applied to the message element
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// A status line with its style
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
    /// Whether the message hides itself after [`STATUS_HIDE_DELAY_MS`]
    pub auto_hide: bool,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
            auto_hide: true,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
            auto_hide: true,
        }
    }

    /// Map a signup outcome to what the user sees.
    ///
    /// A server rejection shows the server's `detail`; transport and body
    /// failures show a generic text and stay on screen.
    pub fn from_signup(outcome: &Result<String, ClientError>) -> Self {
        match outcome {
            Ok(message) => Self::success(message.clone()),
            Err(ClientError::Api { detail, .. }) => {
                let text = detail.as_deref().filter(|d| !d.is_empty());
                Self::error(text.unwrap_or(GENERIC_API_ERROR))
            }
            Err(_) => Self {
                auto_hide: false,
                ..Self::error(SIGNUP_FAILED)
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == MessageKind::Success
    }
}

/// Alert text for a failed unregister
pub fn unregister_failure(err: &ClientError) -> &'static str {
    match err {
        ClientError::Api { .. } => UNREGISTER_REJECTED,
        _ => UNREGISTER_FAILED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_success() {
        let msg = StatusMessage::from_signup(&Ok("Signed up emma@example.edu for Chess Club".into()));
        assert!(msg.is_success());
        assert_eq!(msg.kind.css_class(), "success");
        assert_eq!(msg.text, "Signed up emma@example.edu for Chess Club");
        assert!(msg.auto_hide);
    }

    #[test]
    fn test_signup_rejected_with_detail() {
        let msg = StatusMessage::from_signup(&Err(ClientError::Api {
            status: 400,
            detail: Some("Student already signed up for this activity".into()),
        }));
        assert_eq!(msg.kind, MessageKind::Error);
        assert_eq!(msg.text, "Student already signed up for this activity");
        assert!(msg.auto_hide);
    }

    #[test]
    fn test_signup_rejected_without_detail() {
        let msg = StatusMessage::from_signup(&Err(ClientError::Api { status: 404, detail: None }));
        assert_eq!(msg.text, GENERIC_API_ERROR);
        assert_eq!(msg.kind.css_class(), "error");

        let msg = StatusMessage::from_signup(&Err(ClientError::Api {
            status: 400,
            detail: Some(String::new()),
        }));
        assert_eq!(msg.text, GENERIC_API_ERROR);
    }

    #[test]
    fn test_signup_rejected_with_structured_detail() {
        let body: crate::ApiMessage = serde_json::from_str(
            r#"{"detail": [{"loc": ["query", "email"], "msg": "field required"}]}"#,
        )
        .unwrap();
        let msg = StatusMessage::from_signup(&Err(ClientError::Api {
            status: 422,
            detail: body.detail,
        }));
        assert!(msg.text.contains("field required"));
        assert!(msg.auto_hide);
    }

    #[test]
    fn test_signup_network_failure_stays_visible() {
        for err in [
            ClientError::Network("connection refused".into()),
            ClientError::Timeout,
            ClientError::Parse("expected value".into()),
        ] {
            let msg = StatusMessage::from_signup(&Err(err));
            assert_eq!(msg.text, SIGNUP_FAILED);
            assert_eq!(msg.kind, MessageKind::Error);
            assert!(!msg.auto_hide);
        }
    }

    #[test]
    fn test_unregister_texts() {
        assert_eq!(
            unregister_prompt("michael@example.edu", "Chess Club"),
            "Unregister michael@example.edu from Chess Club?"
        );
        assert_eq!(
            unregister_failure(&ClientError::Api { status: 404, detail: None }),
            UNREGISTER_REJECTED
        );
        assert_eq!(unregister_failure(&ClientError::Timeout), UNREGISTER_FAILED);
    }
}
