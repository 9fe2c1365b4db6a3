use crate::models::{Platform, Post, PostType};
use crate::schedule::Schedule;

fn post(
    id: &str,
    kind: PostType,
    caption: &str,
    date: &str,
    time: &str,
    platforms: Vec<Platform>,
    comments: Option<u64>,
) -> Post {
    Post {
        id: id.to_string(),
        kind,
        caption: caption.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        platforms,
        views: 0,
        likes: 0,
        shares: 0,
        comments,
    }
}

/// Posts shown on the calendar before anyone signs in. February 2026, so the
/// data is stable for tests and screenshots.
pub fn sample_posts() -> Vec<Post> {
    use Platform::{Instagram, LinkedIn, Twitter};
    vec![
        post(
            "1",
            PostType::Video,
            "Show up for yourself today. One honest hour of work beats a week of waiting for motivation. 💪 #discipline #growth",
            "2026-02-10",
            "09:00",
            vec![Twitter, LinkedIn, Instagram],
            Some(0),
        ),
        post(
            "2",
            PostType::Video,
            "Consistency is a superpower. Post, learn, adjust, repeat. What are you shipping this week? 🚀",
            "2026-02-11",
            "09:00",
            vec![Twitter, LinkedIn, Instagram],
            Some(0),
        ),
        post(
            "3",
            PostType::Image,
            "Rest is part of the work. Step away, recharge, and come back sharper than you left. #balance #creatorlife",
            "2026-02-15",
            "12:00",
            vec![LinkedIn, Instagram],
            Some(0),
        ),
        post(
            "4",
            PostType::Text,
            "Your first draft doesn't have to be good. It has to exist. Start there. ✍️ #writing #momentum",
            "2026-02-18",
            "10:00",
            vec![Twitter, Instagram],
            Some(0),
        ),
    ]
}

pub fn sample_schedule() -> Schedule {
    Schedule::from_posts(sample_posts())
}

/// Seed for the recent-performance panel.
pub fn sample_recent() -> Vec<Post> {
    use Platform::{Instagram, LinkedIn, Twitter};
    vec![
        post(
            "r1",
            PostType::Text,
            "The audience you want is built one useful post at a time. Keep showing up. #contentstrategy",
            "2026-02-09",
            "09:00",
            vec![LinkedIn],
            None,
        ),
        post(
            "r2",
            PostType::Image,
            "Behind every overnight success is a feed full of posts nobody saw. Keep going. 📈",
            "2026-02-08",
            "10:00",
            vec![Twitter, Instagram],
            None,
        ),
        post(
            "r3",
            PostType::Video,
            "Talk to one person, not everyone. Specific beats generic every single time. #marketing",
            "2026-02-07",
            "14:00",
            vec![LinkedIn, Instagram],
            None,
        ),
        post(
            "r4",
            PostType::Text,
            "Done is better than perfect. Hit publish. 🎯 #shipit",
            "2026-02-06",
            "08:00",
            vec![Twitter],
            None,
        ),
    ]
}
