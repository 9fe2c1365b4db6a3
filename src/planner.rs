use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::api::{Backend, PostQuery};
use crate::calendar::{self, date_key, DayCell, MonthCursor};
use crate::demo;
use crate::error::ApiError;
use crate::models::{
    AuthResponse, AuthUser, ContentPlanIdea, EngagementStats, NewPost, Platform, PlatformStats,
    PlanRequest, Post, PostPatch,
};
use crate::schedule::Schedule;
use crate::session::{Session, SessionStore};
use crate::stats;

/// How many posts the recent-performance panel shows.
pub const RECENT_LIMIT: u32 = 4;

/// Drives one scheduling dashboard: the month being viewed, the selected day,
/// everything scheduled, and the recent-posts panel.
///
/// With a live session every mutation goes through the backend and the viewed
/// month is refetched afterwards, so local state converges on what the
/// backend holds. Without one the planner runs entirely locally, seeded with
/// demo data.
pub struct Planner {
    backend: Arc<dyn Backend>,
    session: SessionStore,
    schedule: Schedule,
    recent: Vec<Post>,
    view: MonthCursor,
    selected: Option<NaiveDate>,
}

impl Planner {
    /// Starts on the current month with today selected. An unauthenticated
    /// planner begins on demo data; an authenticated one begins empty and
    /// fills on the first `refresh_month`.
    pub fn new(backend: Arc<dyn Backend>, session: SessionStore) -> Self {
        let schedule = if session.is_authenticated() {
            Schedule::new()
        } else {
            demo::sample_schedule()
        };
        Self {
            backend,
            session,
            schedule,
            recent: demo::sample_recent(),
            view: MonthCursor::current(),
            selected: Some(calendar::today()),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.session.get().map(|s| s.user)
    }

    /// Refetches the viewed month and replaces that month's buckets with the
    /// result, so deletions made elsewhere actually disappear. Does nothing
    /// without a session.
    pub async fn refresh_month(&mut self) -> Result<(), ApiError> {
        if !self.session.is_authenticated() {
            return Ok(());
        }
        let month = self.view.key();
        let posts = self.backend.fetch_posts(PostQuery::for_month(&month)).await?;
        debug!("refreshed month {} ({} posts)", month, posts.len());
        self.schedule.replace_month(&month, posts);
        Ok(())
    }

    /// Refetches the recent-posts panel. Does nothing without a session.
    pub async fn refresh_recent(&mut self) -> Result<(), ApiError> {
        if !self.session.is_authenticated() {
            return Ok(());
        }
        self.recent = self.backend.fetch_posts(PostQuery::recent(RECENT_LIMIT)).await?;
        Ok(())
    }

    /// Schedules a new post. With a session the backend assigns the id, the
    /// post lands locally right away, and the viewed month is refetched.
    /// Without one the post is stored locally under a generated id,
    /// defaulting to Twitter when no platform was picked.
    pub async fn create_post(&mut self, form: NewPost) -> Result<Post, ApiError> {
        if self.session.is_authenticated() {
            let post = self.backend.create_post(form).await?;
            self.schedule.insert(post.clone());
            self.refresh_month().await?;
            return Ok(post);
        }
        let post = Post {
            id: local_post_id(),
            kind: form.kind,
            caption: form.caption,
            date: form.date,
            time: form.time,
            platforms: if form.platforms.is_empty() {
                vec![Platform::Twitter]
            } else {
                form.platforms
            },
            views: 0,
            likes: 0,
            shares: 0,
            comments: Some(0),
        };
        self.schedule.insert(post.clone());
        Ok(post)
    }

    /// Applies a partial edit. With a session the backend's copy replaces the
    /// local one and the viewed month is refetched. Without one the patch is
    /// applied in place; an empty platform selection leaves the platforms
    /// alone, matching the fallback on creation.
    pub async fn update_post(&mut self, id: &str, patch: PostPatch) -> Result<Post, ApiError> {
        if self.session.is_authenticated() {
            let post = self.backend.update_post(id, patch).await?;
            if self.schedule.remove(id).is_some() {
                self.schedule.insert(post.clone());
            }
            self.refresh_month().await?;
            return Ok(post);
        }
        let Some(mut post) = self.schedule.remove(id) else {
            return Err(ApiError::NotFound);
        };
        if let Some(kind) = patch.kind {
            post.kind = kind;
        }
        if let Some(caption) = patch.caption {
            post.caption = caption;
        }
        if let Some(date) = patch.date {
            post.date = date;
        }
        if let Some(time) = patch.time {
            post.time = time;
        }
        if let Some(platforms) = patch.platforms {
            if !platforms.is_empty() {
                post.platforms = platforms;
            }
        }
        self.schedule.insert(post.clone());
        Ok(post)
    }

    /// Deletes a post. With a session the backend delete happens first, then
    /// the viewed month is refetched; the local copy goes away in both modes.
    pub async fn delete_post(&mut self, id: &str) -> Result<(), ApiError> {
        if self.session.is_authenticated() {
            self.backend.delete_post(id).await?;
            self.schedule.remove(id);
            self.refresh_month().await?;
            return Ok(());
        }
        self.schedule.remove(id).map(|_| ()).ok_or(ApiError::NotFound)
    }

    /// Authenticates with existing credentials and switches from demo data to
    /// backend data.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<AuthUser, ApiError> {
        let auth = self.backend.login(email, password).await?;
        self.start_session(auth).await
    }

    /// Creates an account and signs straight in.
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, ApiError> {
        let auth = self.backend.register(name, email, password).await?;
        self.start_session(auth).await
    }

    /// The demo schedule is dropped before the first fetch so nothing local
    /// leaks into the signed-in view.
    async fn start_session(&mut self, auth: AuthResponse) -> Result<AuthUser, ApiError> {
        info!("signed in as {}", auth.user.email);
        self.session.set(Session { token: auth.token, user: auth.user.clone() });
        self.schedule = Schedule::new();
        self.refresh_month().await?;
        self.refresh_recent().await?;
        Ok(auth.user)
    }

    /// Drops the session and goes back to demo data.
    pub fn logout(&mut self) {
        self.session.clear();
        self.schedule = demo::sample_schedule();
        self.recent = demo::sample_recent();
    }

    /// Asks the backend for a content plan. Pure passthrough; nothing lands
    /// on the calendar until the ideas are inserted.
    pub async fn generate_plan(
        &self,
        request: PlanRequest,
    ) -> Result<Vec<ContentPlanIdea>, ApiError> {
        self.backend.generate_plan(request).await
    }

    /// Inserts generated ideas into the calendar through the backend, then
    /// refetches the viewed month so they show up. No-op for an empty list.
    pub async fn insert_plan(&mut self, ideas: &[ContentPlanIdea]) -> Result<u64, ApiError> {
        if ideas.is_empty() {
            return Ok(0);
        }
        let inserted = self.backend.insert_plan(ideas).await?;
        info!("inserted {} planned posts", inserted);
        self.refresh_month().await?;
        Ok(inserted)
    }

    /// Rewrites a rough description into a polished caption.
    pub async fn polish_caption(&self, description: &str) -> Result<String, ApiError> {
        self.backend.polish_caption(description.trim()).await
    }

    /// Navigation is local; call `refresh_month` afterwards to load the newly
    /// viewed month.
    pub fn prev_month(&mut self) {
        self.view = self.view.prev();
    }

    pub fn next_month(&mut self) {
        self.view = self.view.next();
    }

    /// Jumps the view back to the current month and selects today.
    pub fn goto_today(&mut self) {
        let today = calendar::today();
        self.view = MonthCursor::new(today.year(), today.month0());
        self.selected = Some(today);
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn view(&self) -> MonthCursor {
        self.view
    }

    pub fn grid(&self) -> Vec<DayCell> {
        self.view.grid()
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn recent_posts(&self) -> &[Post] {
        &self.recent
    }

    /// Date keys to mark on the calendar.
    pub fn dates_with_posts(&self) -> BTreeSet<String> {
        stats::dates_with_posts(&self.schedule)
    }

    /// Posts on the selected day, or nothing when no day is selected.
    pub fn posts_for_selected(&self) -> &[Post] {
        match self.selected {
            Some(date) => self.schedule.posts_on(&date_key(date)),
            None => &[],
        }
    }

    pub fn engagement_for_selected(&self) -> EngagementStats {
        stats::aggregate_engagement(self.posts_for_selected())
    }

    /// Rows for the platform performance table, one per known platform.
    pub fn platform_stats(&self) -> Vec<PlatformStats> {
        stats::platform_totals(&self.schedule, &Platform::ALL)
    }
}

/// Ids for posts created without a session, unique enough for local use.
fn local_post_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("post-{}-{}", Utc::now().timestamp_millis(), &suffix[..7])
}
