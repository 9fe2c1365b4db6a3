use std::sync::Arc;

use serde_json::json;
use slated::api::{ApiClient, ApiConfig};
use slated::error::ApiError;
use slated::models::{AuthUser, ContentPlanIdea, NewPost, Platform, PostType};
use slated::planner::Planner;
use slated::session::{Session, SessionStore};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Opt-in log output while debugging these flows: RUST_LOG=slated=debug.
fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn signed_in(session: &SessionStore) {
    session.set(Session {
        token: "tok-123".to_string(),
        user: AuthUser {
            id: "u1".to_string(),
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
        },
    });
}

fn planner_for(server: &MockServer) -> Planner {
    init_logs();
    let session = SessionStore::new();
    signed_in(&session);
    let client = ApiClient::new(ApiConfig::new(&server.uri()), session.clone());
    Planner::new(Arc::new(client), session)
}

fn post_json(id: &str, date: &str) -> serde_json::Value {
    json!({
        "id": id, "type": "Text", "caption": "body", "date": date, "time": "09:00",
        "platforms": ["Twitter"], "views": 0, "likes": 0, "shares": 0
    })
}

#[tokio::test]
async fn login_switches_from_demo_to_backend_data() {
    init_logs();
    let server = MockServer::start().await;
    let session = SessionStore::new();
    let client = ApiClient::new(ApiConfig::new(&server.uri()), session.clone());
    let mut p = Planner::new(Arc::new(client), session);
    assert!(!p.is_authenticated());
    assert!(!p.schedule().is_empty());

    let month = p.view().key();
    let in_month = format!("{}-14", month);
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "user": { "id": "u1", "name": "Dana", "email": "dana@example.com" },
                "token": "tok-1"
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .and(query_param("month", month.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "posts": [
                { "id": "s1", "type": "Text", "caption": "from server", "date": in_month,
                  "time": "08:00", "platforms": ["LinkedIn"], "views": 5, "likes": 2, "shares": 1 }
            ]}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .and(query_param("recent", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "posts": [post_json("r9", "2026-02-01")] }
        })))
        .mount(&server)
        .await;

    let user = p.login("dana@example.com", "hunter2").await.unwrap();
    assert_eq!(user.name, "Dana");
    assert!(p.is_authenticated());
    assert_eq!(p.session().token(), Some("tok-1".to_string()));
    // the demo schedule is gone, replaced by the fetched month
    assert_eq!(p.schedule().len(), 1);
    assert_eq!(p.schedule().posts_on(&in_month)[0].caption, "from server");
    assert_eq!(p.recent_posts().len(), 1);
    assert_eq!(p.recent_posts()[0].id, "r9");
}

#[tokio::test]
async fn create_refetch_reconciles_the_viewed_month() {
    let server = MockServer::start().await;
    let mut p = planner_for(&server);
    let month = p.view().key();
    let d1 = format!("{}-10", month);
    let d2 = format!("{}-12", month);

    let first_snapshot = Mock::given(method("GET"))
        .and(path("/api/posts"))
        .and(query_param("month", month.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "posts": [post_json("old", &d1)] }
        })))
        .mount_as_scoped(&server)
        .await;
    p.refresh_month().await.unwrap();
    assert!(p.schedule().contains_date(&d1));
    drop(first_snapshot);

    // after the create, the backend's month no longer includes the old post
    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "post": post_json("new", &d2) }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .and(query_param("month", month.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "posts": [post_json("new", &d2)] }
        })))
        .mount(&server)
        .await;

    let created = p
        .create_post(NewPost {
            kind: PostType::Text,
            caption: "body".to_string(),
            date: d2.clone(),
            time: "09:00".to_string(),
            platforms: vec![Platform::Twitter],
        })
        .await
        .unwrap();
    assert_eq!(created.id, "new");
    // the refetch replaced the whole month: no stale post, no duplicate
    assert!(!p.schedule().contains_date(&d1));
    assert_eq!(p.schedule().posts_on(&d2).len(), 1);
    assert_eq!(p.schedule().posts_on(&d2)[0].id, "new");
}

#[tokio::test]
async fn expired_token_surfaces_unauthorized_and_clears_the_session() {
    let server = MockServer::start().await;
    let mut p = planner_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false, "error": "expired"
        })))
        .mount(&server)
        .await;

    let err = p.refresh_month().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
    assert!(!p.is_authenticated());
}

#[tokio::test]
async fn inserting_an_empty_plan_is_a_no_op() {
    // no mocks mounted: any request would 404 and fail the call
    let server = MockServer::start().await;
    let mut p = planner_for(&server);
    assert_eq!(p.insert_plan(&[]).await.unwrap(), 0);
}

#[tokio::test]
async fn inserted_plan_lands_on_the_calendar_after_refetch() {
    let server = MockServer::start().await;
    let mut p = planner_for(&server);
    let month = p.view().key();
    let d1 = format!("{}-03", month);
    let d2 = format!("{}-05", month);

    Mock::given(method("POST"))
        .and(path("/api/content-plan/insert"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "data": { "inserted": 2 }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .and(query_param("month", month.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "posts": [post_json("i1", &d1), post_json("i2", &d2)] }
        })))
        .mount(&server)
        .await;

    let ideas = vec![
        ContentPlanIdea {
            date: d1.clone(),
            kind: PostType::Text,
            caption: "kickoff".to_string(),
            platforms: vec!["Instagram".to_string()],
        },
        ContentPlanIdea {
            date: d2.clone(),
            kind: PostType::Text,
            caption: "follow up".to_string(),
            platforms: vec!["Instagram".to_string()],
        },
    ];
    assert_eq!(p.insert_plan(&ideas).await.unwrap(), 2);
    assert_eq!(p.schedule().len(), 2);
    assert!(p.schedule().contains_date(&d1));
    assert!(p.schedule().contains_date(&d2));
}

#[test]
fn logout_restores_demo_data() {
    init_logs();
    let session = SessionStore::new();
    signed_in(&session);
    let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:9"), session.clone());
    let mut p = Planner::new(Arc::new(client), session);
    assert!(p.schedule().is_empty());

    p.logout();
    assert!(!p.is_authenticated());
    assert_eq!(p.schedule().len(), 4);
    assert!(p.schedule().contains_date("2026-02-10"));
}
