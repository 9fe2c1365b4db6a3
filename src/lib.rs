pub mod api;
pub mod calendar;
pub mod demo; // seed data for the signed-out planner
pub mod error;
pub mod models;
pub mod planner;
pub mod schedule;
pub mod session;
pub mod stats;

// Re-export commonly used items for tests / embedding applications
pub use api::{ApiClient, ApiConfig, Backend, PostQuery, DEFAULT_API_BASE};
pub use calendar::{month_grid, DayCell, MonthCursor};
pub use error::ApiError;
pub use models::{
    AuthResponse, AuthUser, ContentPlanIdea, EngagementStats, NewPost, Platform, PlatformStats,
    PlanRequest, Post, PostPatch, PostType,
};
pub use planner::{Planner, RECENT_LIMIT};
pub use schedule::Schedule;
pub use session::{Session, SessionStore};
