use std::collections::BTreeSet;

use crate::models::{EngagementStats, Platform, PlatformStats, Post};
use crate::schedule::Schedule;

/// Date keys that have at least one post scheduled. Feeds the calendar's
/// per-day marker dots.
pub fn dates_with_posts(schedule: &Schedule) -> BTreeSet<String> {
    schedule.dates().map(str::to_string).collect()
}

/// Sums engagement counters over a set of posts. A post without a comment
/// count contributes zero comments.
pub fn aggregate_engagement(posts: &[Post]) -> EngagementStats {
    posts.iter().fold(EngagementStats::default(), |acc, p| EngagementStats {
        total_views: acc.total_views + p.views,
        total_likes: acc.total_likes + p.likes,
        total_shares: acc.total_shares + p.shares,
        comments: acc.comments + p.comments.unwrap_or(0),
    })
}

/// Totals per platform over everything scheduled. The result has one row per
/// platform in `universe`, in that order, zero rows included. A post tagged
/// with several platforms counts fully toward each of them; tags outside
/// `universe` are ignored.
pub fn platform_totals(schedule: &Schedule, universe: &[Platform]) -> Vec<PlatformStats> {
    let mut rows: Vec<PlatformStats> = universe
        .iter()
        .map(|&platform| PlatformStats { platform, posts: 0, views: 0, likes: 0 })
        .collect();
    for post in schedule.all_posts() {
        for tag in &post.platforms {
            if let Some(row) = rows.iter_mut().find(|r| r.platform == *tag) {
                row.posts += 1;
                row.views += post.views;
                row.likes += post.likes;
            }
        }
    }
    rows
}
