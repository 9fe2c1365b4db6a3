use std::collections::BTreeMap;

use crate::models::Post;

/// Posts bucketed by their `YYYY-MM-DD` date key.
///
/// A key is present exactly when its bucket holds at least one post; every
/// mutation maintains that, so iterating the keys doubles as "which dates
/// have posts". Buckets keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    by_date: BTreeMap<String, Vec<Post>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_posts(posts: Vec<Post>) -> Self {
        let mut schedule = Self::new();
        for post in posts {
            schedule.insert(post);
        }
        schedule
    }

    /// Buckets a post under its date. A post without a date cannot be shown
    /// anywhere, so it is dropped rather than indexed under an empty key.
    pub fn insert(&mut self, post: Post) {
        if post.date.is_empty() {
            log::debug!("dropping post {} with empty date", post.id);
            return;
        }
        self.by_date.entry(post.date.clone()).or_default().push(post);
    }

    /// Removes the post with the given id, dropping its date bucket when that
    /// was the last post in it.
    pub fn remove(&mut self, id: &str) -> Option<Post> {
        let key = self
            .by_date
            .iter()
            .find_map(|(key, bucket)| bucket.iter().any(|p| p.id == id).then(|| key.clone()))?;
        let bucket = self.by_date.get_mut(&key)?;
        let idx = bucket.iter().position(|p| p.id == id)?;
        let post = bucket.remove(idx);
        if bucket.is_empty() {
            self.by_date.remove(&key);
        }
        Some(post)
    }

    /// Replaces everything scheduled in a `YYYY-MM` month with the given
    /// posts. Dates of that month absent from `posts` end up with no bucket,
    /// so a fetch that reflects a deletion actually clears the day instead of
    /// leaving the old bucket behind. Dates outside the month are untouched.
    pub fn replace_month(&mut self, month: &str, posts: Vec<Post>) {
        self.by_date
            .retain(|key, _| !key.strip_prefix(month).is_some_and(|rest| rest.starts_with('-')));
        for post in posts {
            self.insert(post);
        }
    }

    /// Posts scheduled on the given date key, in insertion order.
    pub fn posts_on(&self, key: &str) -> &[Post] {
        self.by_date.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_date(&self, key: &str) -> bool {
        self.by_date.contains_key(key)
    }

    /// Date keys that have at least one post, ascending.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.by_date.keys().map(String::as_str)
    }

    pub fn all_posts(&self) -> impl Iterator<Item = &Post> {
        self.by_date.values().flatten()
    }

    /// Total number of posts across all dates.
    pub fn len(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Platform, PostType};

    fn post(id: &str, date: &str) -> Post {
        Post {
            id: id.into(),
            kind: PostType::Text,
            caption: String::new(),
            date: date.into(),
            time: "09:00".into(),
            platforms: vec![Platform::Twitter],
            views: 0,
            likes: 0,
            shares: 0,
            comments: None,
        }
    }

    #[test]
    fn remove_drops_emptied_bucket() {
        let mut s = Schedule::new();
        s.insert(post("a", "2026-02-10"));
        s.insert(post("b", "2026-02-10"));
        assert!(s.remove("a").is_some());
        assert!(s.contains_date("2026-02-10"));
        assert!(s.remove("b").is_some());
        assert!(!s.contains_date("2026-02-10"));
        assert!(s.is_empty());
    }

    #[test]
    fn replace_month_only_touches_that_month() {
        let mut s = Schedule::new();
        s.insert(post("jan", "2026-01-31"));
        s.insert(post("feb", "2026-02-01"));
        s.replace_month("2026-02", vec![post("feb2", "2026-02-02")]);
        assert!(s.contains_date("2026-01-31"));
        assert!(!s.contains_date("2026-02-01"));
        assert!(s.contains_date("2026-02-02"));
    }

    #[test]
    fn dateless_post_is_not_indexed() {
        let mut s = Schedule::new();
        s.insert(post("x", ""));
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }
}
