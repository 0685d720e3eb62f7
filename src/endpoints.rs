//! Endpoint URLs
//!
//! - `GET  {base}/activities`
//! - `POST {base}/activities/{name}/signup?email=...`
//! - `POST {base}/activities/{name}/unregister?email=...`
//!
//! `base` may be empty, giving same-origin relative URLs. Activity names and
//! emails are percent-encoded as URI components.

use urlencoding::encode;

/// Strip trailing slashes so paths can be appended directly
pub fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

pub fn activities_url(base: &str) -> String {
    format!("{}/activities", normalize_base(base))
}

pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    action_url(base, activity, "signup", email)
}

pub fn unregister_url(base: &str, activity: &str, email: &str) -> String {
    action_url(base, activity, "unregister", email)
}

fn action_url(base: &str, activity: &str, action: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/{}?email={}",
        normalize_base(base),
        encode(activity),
        action,
        encode(email)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_urls() {
        assert_eq!(activities_url(""), "/activities");
        assert_eq!(
            signup_url("", "Chess Club", "emma@example.edu"),
            "/activities/Chess%20Club/signup?email=emma%40example.edu"
        );
    }

    #[test]
    fn test_base_trailing_slash() {
        assert_eq!(activities_url("http://localhost:8000/"), "http://localhost:8000/activities");
        assert_eq!(normalize_base("  http://host//  "), "http://host");
    }

    #[test]
    fn test_unregister_encodes_components() {
        assert_eq!(
            unregister_url("http://api", "Art/Design & Co", "a+b@x.edu"),
            "http://api/activities/Art%2FDesign%20%26%20Co/unregister?email=a%2Bb%40x.edu"
        );
    }
}
