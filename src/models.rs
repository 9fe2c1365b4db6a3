use serde::{Deserialize, Serialize};

/// Content format of a scheduled post. Serialized capitalized on the wire
/// ("Video", "Image", "Text").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostType {
    Video,
    Image,
    Text,
}

/// Publishing target a post can be scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Twitter,
    LinkedIn,
    Instagram,
}

impl Platform {
    /// Every known platform, in the order stat tables render them.
    pub const ALL: [Platform; 3] = [Platform::Twitter, Platform::LinkedIn, Platform::Instagram];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PostType,
    pub caption: String,
    pub date: String, // YYYY-MM-DD
    pub time: String, // HH:mm
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
}

/// Body for creating a post. The backend assigns the id and zeroes the counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    #[serde(rename = "type")]
    pub kind: PostType,
    pub caption: String,
    pub date: String,
    pub time: String,
    pub platforms: Vec<Platform>,
}

/// Partial update body; only the present fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PostType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<Platform>>,
}

/// Engagement totals over a set of posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementStats {
    pub total_views: u64,
    pub total_likes: u64,
    pub total_shares: u64,
    pub comments: u64,
}

/// Per-platform totals. A post tagged with several platforms counts fully
/// toward each of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub platform: Platform,
    pub posts: u64,
    pub views: u64,
    pub likes: u64,
}

/// One suggested post from a generated content plan. Platforms stay free-form
/// strings here: the plan form offers options (like YouTube) beyond the
/// platforms posts can be scheduled on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPlanIdea {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: PostType,
    pub caption: String,
    pub platforms: Vec<String>,
}

/// Inputs for generating a content plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub goal: String,
    pub duration: u32,
    pub platforms: Vec<String>,
    pub niche: String,
    pub start_date: String,
}

impl PlanRequest {
    /// Builds a request with the plan form's fallbacks applied: no platforms
    /// selected means Instagram, a blank niche means General.
    pub fn new(goal: &str, duration: u32, platforms: Vec<String>, niche: &str, start_date: &str) -> Self {
        let niche = niche.trim();
        Self {
            goal: goal.to_string(),
            duration,
            platforms: if platforms.is_empty() {
                vec!["Instagram".to_string()]
            } else {
                platforms
            },
            niche: if niche.is_empty() { "General" } else { niche }.to_string(),
            start_date: start_date.to_string(),
        }
    }
}

// Choices the plan form offers.
pub const PLAN_GOALS: [&str; 4] = ["Followers", "Leads", "Sales", "Branding"];
pub const PLAN_DURATIONS: [u32; 3] = [7, 30, 90];
pub const DEFAULT_PLAN_DURATION: u32 = 30;
pub const PLAN_PLATFORM_OPTIONS: [&str; 4] = ["Instagram", "LinkedIn", "Twitter", "YouTube"];
pub const PLAN_NICHES: [&str; 17] = [
    "Tech",
    "Education",
    "Startup",
    "Personal Brand",
    "Health & Fitness",
    "Food & Cooking",
    "Travel",
    "Finance",
    "Fashion & Beauty",
    "Marketing",
    "E-commerce",
    "Photography",
    "Music",
    "Gaming",
    "Lifestyle",
    "Art & Design",
    "Other",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: AuthUser,
    pub token: String,
}
