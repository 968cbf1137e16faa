use serde::Deserialize;

/// A subreddit (`t5`).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Subreddit {
    pub id: Option<String>,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub display_name_prefixed: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub public_description: Option<String>,
    pub description: Option<String>,
    pub subscribers: Option<u64>,
    pub active_user_count: Option<u64>,
    /// `public`, `private`, `restricted`, `gold_restricted` or `archived`.
    pub subreddit_type: Option<String>,
    pub lang: Option<String>,
    pub over18: Option<bool>,
    pub quarantine: Option<bool>,
    pub icon_img: Option<String>,
    pub created: Option<f64>,
    pub created_utc: Option<f64>,
    pub user_is_subscriber: Option<bool>,
    pub user_is_moderator: Option<bool>,
    pub user_is_banned: Option<bool>,
    pub user_is_contributor: Option<bool>,
}

/// Today's trending subreddits. Served without an envelope from the web host.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TrendingSubreddits {
    pub subreddit_names: Option<Vec<String>>,
    pub comment_count: Option<u64>,
    pub comment_url: Option<String>,
}
