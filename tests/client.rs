//! Client tests against an in-process stub of the activities API.

use activities::{
    ActivitiesClient, ActivityCard, ActivityDetails, Activities, ApiConfig, ClientError,
    MessageKind, StatusMessage,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Store = Arc<Mutex<Vec<(String, ActivityDetails)>>>;

fn seed() -> Vec<(String, ActivityDetails)> {
    vec![
        (
            "Chess Club".to_string(),
            ActivityDetails {
                description: "Learn strategies and compete in chess tournaments".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 12.0,
                participants: vec!["michael@example.edu".to_string()],
            },
        ),
        (
            "Art/Design Studio".to_string(),
            ActivityDetails {
                description: "Painting & drawing".to_string(),
                schedule: "Thursdays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 1.0,
                participants: vec![],
            },
        ),
    ]
}

async fn list(State(store): State<Store>) -> Json<Activities> {
    Json(Activities::new(store.lock().unwrap().clone()))
}

async fn signup(
    State(store): State<Store>,
    Path(name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let email = params.get("email").cloned().unwrap_or_default();
    let mut store = store.lock().unwrap();
    let Some((_, details)) = store.iter_mut().find(|(n, _)| *n == name) else {
        return (StatusCode::NOT_FOUND, Json(json!({ "detail": "Activity not found" })));
    };
    if details.participants.contains(&email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Student is already signed up" })),
        );
    }
    details.participants.push(email.clone());
    (
        StatusCode::OK,
        Json(json!({ "message": format!("Signed up {} for {}", email, name) })),
    )
}

async fn unregister(
    State(store): State<Store>,
    Path(name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let email = params.get("email").cloned().unwrap_or_default();
    let mut store = store.lock().unwrap();
    let Some((_, details)) = store.iter_mut().find(|(n, _)| *n == name) else {
        return (StatusCode::NOT_FOUND, Json(json!({ "detail": "Activity not found" })));
    };
    let before = details.participants.len();
    details.participants.retain(|p| *p != email);
    if details.participants.len() == before {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Student is not signed up for this activity" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({ "message": format!("Unregistered {} from {}", email, name) })),
    )
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn start_stub() -> String {
    let store: Store = Arc::new(Mutex::new(seed()));
    let router = Router::new()
        .route("/activities", get(list))
        .route("/activities/:name/signup", post(signup))
        .route("/activities/:name/unregister", post(unregister))
        .with_state(store);
    spawn(router).await
}

fn client_for(base_url: &str) -> ActivitiesClient {
    ActivitiesClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_list_keeps_order_and_derives_cards() {
    let client = client_for(&start_stub().await);

    let activities = client.list().await.unwrap();
    let cards = ActivityCard::from_activities(&activities);

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].name, "Chess Club");
    assert_eq!(cards[0].spots_left, 11.0);
    assert_eq!(cards[0].participants[0].avatar, "M");
    assert_eq!(cards[1].name, "Art/Design Studio");
    assert!(!cards[1].has_participants());
}

#[tokio::test]
async fn test_signup_then_refetch() {
    let client = client_for(&start_stub().await);

    let message = client.signup("Art/Design Studio", "emma+art@example.edu").await.unwrap();
    assert_eq!(message, "Signed up emma+art@example.edu for Art/Design Studio");

    let activities = client.list().await.unwrap();
    let studio = activities.get("Art/Design Studio").unwrap();
    assert_eq!(studio.participants, vec!["emma+art@example.edu".to_string()]);
    assert_eq!(studio.spots_left(), 0.0);
}

#[tokio::test]
async fn test_signup_rejected_shows_detail() {
    let client = client_for(&start_stub().await);

    let outcome = client.signup("Chess Club", "michael@example.edu").await;
    assert_eq!(
        outcome,
        Err(ClientError::Api {
            status: 400,
            detail: Some("Student is already signed up".to_string()),
        })
    );

    let status = StatusMessage::from_signup(&outcome);
    assert_eq!(status.kind, MessageKind::Error);
    assert_eq!(status.text, "Student is already signed up");
}

#[tokio::test]
async fn test_signup_unknown_activity() {
    let client = client_for(&start_stub().await);

    let err = client.signup("Underwater Basket Weaving", "a@b.edu").await.unwrap_err();
    assert_eq!(err.detail(), Some("Activity not found"));
}

#[tokio::test]
async fn test_unregister() {
    let client = client_for(&start_stub().await);

    let message = client.unregister("Chess Club", "michael@example.edu").await.unwrap();
    assert_eq!(
        message.as_deref(),
        Some("Unregistered michael@example.edu from Chess Club")
    );

    let activities = client.list().await.unwrap();
    assert!(activities.get("Chess Club").unwrap().participants.is_empty());

    let err = client.unregister("Chess Club", "michael@example.edu").await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 400, .. }));
}

#[tokio::test]
async fn test_non_json_bodies() {
    let router = Router::new()
        .route(
            "/activities",
            get(|| async { (StatusCode::OK, "<html>maintenance</html>") }),
        )
        .route(
            "/activities/:name/signup",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
        );
    let client = client_for(&spawn(router).await);

    assert!(matches!(client.list().await, Err(ClientError::Parse(_))));

    let outcome = client.signup("Chess Club", "a@b.edu").await;
    assert!(matches!(outcome, Err(ClientError::Parse(_))));
    let status = StatusMessage::from_signup(&outcome);
    assert_eq!(status.text, activities::message::SIGNUP_FAILED);
    assert!(!status.auto_hide);
}

#[tokio::test]
async fn test_unreachable_server() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{}", addr));
    let err = client.list().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}
