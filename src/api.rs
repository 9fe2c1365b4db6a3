use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{AuthResponse, ContentPlanIdea, NewPost, Platform, PlanRequest, Post, PostPatch, PostType};
use crate::session::SessionStore;

pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Where the backend lives.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Trailing slashes are stripped so request paths can always start with one.
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    /// Reads `SLATED_API_BASE`, falling back to localhost. Blank values count
    /// as unset.
    pub fn from_env() -> Self {
        fn str_env(name: &str, default: &str) -> String {
            match std::env::var(name) {
                Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
                _ => default.to_string(),
            }
        }
        Self::new(&str_env("SLATED_API_BASE", DEFAULT_API_BASE))
    }
}

/// Filters for listing posts, mirrored onto query parameters.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    pub date: Option<String>,
    pub month: Option<String>,
    pub recent: bool,
    pub limit: Option<u32>,
}

impl PostQuery {
    pub fn for_date(key: &str) -> Self {
        Self { date: Some(key.to_string()), ..Self::default() }
    }

    pub fn for_month(key: &str) -> Self {
        Self { month: Some(key.to_string()), ..Self::default() }
    }

    pub fn recent(limit: u32) -> Self {
        Self { recent: true, limit: Some(limit), ..Self::default() }
    }

    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(date) = &self.date {
            pairs.push(("date", date.clone()));
        }
        if let Some(month) = &self.month {
            pairs.push(("month", month.clone()));
        }
        if self.recent {
            pairs.push(("recent", "1".to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Backend operations the planner drives. `ApiClient` implements this against
/// the HTTP API; tests substitute their own.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError>;
    async fn register(&self, name: &str, email: &str, password: &str)
        -> Result<AuthResponse, ApiError>;
    async fn fetch_posts(&self, query: PostQuery) -> Result<Vec<Post>, ApiError>;
    async fn create_post(&self, post: NewPost) -> Result<Post, ApiError>;
    async fn update_post(&self, id: &str, patch: PostPatch) -> Result<Post, ApiError>;
    async fn delete_post(&self, id: &str) -> Result<(), ApiError>;
    async fn generate_plan(&self, request: PlanRequest) -> Result<Vec<ContentPlanIdea>, ApiError>;
    async fn insert_plan(&self, ideas: &[ContentPlanIdea]) -> Result<u64, ApiError>;
    async fn polish_caption(&self, description: &str) -> Result<String, ApiError>;
}

/// Every response arrives wrapped in `{ success, data, error }`.
#[derive(Deserialize)]
struct Envelope<T> {
    #[allow(dead_code)]
    success: Option<bool>, // Keep for completeness even if unused
    data: Option<T>,
    error: Option<String>,
}

/// Post as the backend sends it. Some deployments send a Mongo-style `_id`
/// instead of `id`; an empty string counts as missing either way.
#[derive(Deserialize)]
struct WirePost {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    raw_id: Option<String>,
    #[serde(rename = "type")]
    kind: PostType,
    #[serde(default)]
    caption: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    time: String,
    #[serde(default)]
    platforms: Vec<Platform>,
    #[serde(default)]
    views: u64,
    #[serde(default)]
    likes: u64,
    #[serde(default)]
    shares: u64,
    #[serde(default)]
    comments: Option<u64>,
}

impl WirePost {
    fn into_post(self) -> Post {
        let id = self
            .id
            .filter(|v| !v.is_empty())
            .or(self.raw_id.filter(|v| !v.is_empty()))
            .unwrap_or_default();
        Post {
            id,
            kind: self.kind,
            caption: self.caption,
            date: self.date,
            time: self.time,
            platforms: self.platforms,
            views: self.views,
            likes: self.likes,
            shares: self.shares,
            comments: self.comments,
        }
    }
}

#[derive(Deserialize)]
struct PostsPayload {
    #[serde(default)]
    posts: Vec<WirePost>,
}

#[derive(Deserialize)]
struct PostPayload {
    post: WirePost,
}

#[derive(Deserialize)]
struct DeletePayload {
    #[serde(default)]
    deleted: bool,
}

#[derive(Deserialize)]
struct IdeasPayload {
    ideas: Vec<ContentPlanIdea>,
}

#[derive(Deserialize)]
struct InsertedPayload {
    inserted: u64,
}

#[derive(Deserialize)]
struct CaptionPayload {
    caption: String,
}

/// HTTP client for the scheduling backend. Cheap to clone; clones share the
/// session store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: SessionStore) -> Self {
        Self { http: reqwest::Client::new(), base: config.base_url, session }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Sends one request and unwraps the response envelope. A 401 clears the
    /// stored session before returning, since it means the token is no longer
    /// good for any request.
    async fn send<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        let url = format!("{}{}", self.base, path);
        debug!("{} {}", method, path);
        let mut request = self.http.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| ApiError::Unreachable {
            base: self.base.clone(),
            source: e,
        })?;
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            warn!("backend returned 401 for {path}; clearing session");
            self.session.clear();
            return Err(ApiError::Unauthorized);
        }
        let envelope: Envelope<T> = response.json().await.map_err(|e| {
            if status.is_success() {
                ApiError::Malformed(e.to_string())
            } else {
                ApiError::Status {
                    status: status.as_u16(),
                    message: format!("request failed: {}", status.as_u16()),
                }
            }
        })?;
        let Envelope { data, error, .. } = envelope;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error.unwrap_or_else(|| format!("request failed: {}", status.as_u16())),
            });
        }
        data.ok_or_else(|| {
            ApiError::Malformed(error.unwrap_or_else(|| "missing data".to_string()))
        })
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        self.send(Method::POST, "/api/auth/login", &[], Some(&body)).await
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let body = serde_json::json!({ "name": name, "email": email, "password": password });
        self.send(Method::POST, "/api/auth/register", &[], Some(&body)).await
    }

    async fn fetch_posts(&self, query: PostQuery) -> Result<Vec<Post>, ApiError> {
        let payload: PostsPayload = self
            .send(Method::GET, "/api/posts", &query.to_pairs(), None::<&serde_json::Value>)
            .await?;
        Ok(payload.posts.into_iter().map(WirePost::into_post).collect())
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, ApiError> {
        let payload: PostPayload = self.send(Method::POST, "/api/posts", &[], Some(&post)).await?;
        Ok(payload.post.into_post())
    }

    async fn update_post(&self, id: &str, patch: PostPatch) -> Result<Post, ApiError> {
        let path = format!("/api/posts/{}", id);
        let payload: PostPayload = self.send(Method::PATCH, &path, &[], Some(&patch)).await?;
        Ok(payload.post.into_post())
    }

    async fn delete_post(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/posts/{}", id);
        let payload: DeletePayload =
            self.send(Method::DELETE, &path, &[], None::<&serde_json::Value>).await?;
        if !payload.deleted {
            return Err(ApiError::Malformed("delete not acknowledged".to_string()));
        }
        Ok(())
    }

    async fn generate_plan(&self, request: PlanRequest) -> Result<Vec<ContentPlanIdea>, ApiError> {
        let payload: IdeasPayload = self
            .send(Method::POST, "/api/content-plan/generate", &[], Some(&request))
            .await?;
        Ok(payload.ideas)
    }

    async fn insert_plan(&self, ideas: &[ContentPlanIdea]) -> Result<u64, ApiError> {
        let body = serde_json::json!({ "ideas": ideas });
        let payload: InsertedPayload = self
            .send(Method::POST, "/api/content-plan/insert", &[], Some(&body))
            .await?;
        Ok(payload.inserted)
    }

    async fn polish_caption(&self, description: &str) -> Result<String, ApiError> {
        let body = serde_json::json!({ "description": description });
        let payload: CaptionPayload = self
            .send(Method::POST, "/api/content-plan/polish-caption", &[], Some(&body))
            .await?;
        Ok(payload.caption)
    }
}
