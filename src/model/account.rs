//! Account-related records: accounts, preferences, karma, trophies and the
//! entries of user lists.
//!
//! Every field is optional. Reddit leaves fields out depending on who is
//! asking (`has_mail` only appears on the authenticated account), and a
//! missing count must stay distinguishable from a count of zero.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::envelope::{self, DecodeError};
use crate::listing::FlatList;
use crate::thing::Kind;

/// A user account (`t2`), as seen by anyone.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Account {
    /// Base-36 id without the `t2_` prefix.
    pub id: Option<String>,
    pub name: Option<String>,
    /// Creation time in the server's local time.
    pub created: Option<f64>,
    /// Creation time in UTC seconds.
    pub created_utc: Option<f64>,
    pub link_karma: Option<i64>,
    pub comment_karma: Option<i64>,
    pub total_karma: Option<i64>,
    pub awardee_karma: Option<i64>,
    pub awarder_karma: Option<i64>,
    pub is_gold: Option<bool>,
    pub is_mod: Option<bool>,
    pub is_employee: Option<bool>,
    /// Only meaningful when asked by an authenticated user.
    pub is_friend: Option<bool>,
    pub is_suspended: Option<bool>,
    pub verified: Option<bool>,
    pub has_verified_email: Option<bool>,
    pub hide_from_robots: Option<bool>,
    pub icon_img: Option<String>,
    pub pref_show_snoovatar: Option<bool>,
    /// The profile subreddit; its layout changes too often to pin down.
    pub subreddit: Option<Value>,
}

/// The authenticated account, as returned by `/api/v1/me`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SelfAccount {
    /// The fields every account view shares.
    #[serde(flatten)]
    pub account: Account,
    pub has_mail: Option<bool>,
    pub has_mod_mail: Option<bool>,
    pub inbox_count: Option<u64>,
    pub num_friends: Option<u64>,
    pub over_18: Option<bool>,
    pub in_beta: Option<bool>,
    pub gold_creddits: Option<u64>,
    pub gold_expiration: Option<f64>,
    pub coins: Option<u64>,
    pub pref_nightmode: Option<bool>,
}

impl std::ops::Deref for SelfAccount {
    type Target = Account;

    fn deref(&self) -> &Self::Target {
        &self.account
    }
}

/// Account preferences from `/api/v1/me/prefs`.
///
/// The same type is sent back when updating preferences; only fields that
/// are `Some` are serialized, so untouched preferences are left alone.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub over_18: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_include_over_18: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_link_flair: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_flair: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_trending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_ups: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_downs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_from_robots: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_votes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_link_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_comment_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_comments: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numsites: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_comment_sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threaded_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapse_read_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_messages: Option<bool>,
    /// Who may send private messages: `everyone` or `whitelisted`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_pms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nightmode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta: Option<bool>,
    /// Whether thumbnails are shown: `on`, `off` or `subreddit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

/// Karma earned in one subreddit, an element of a `KarmaList`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Karma {
    /// Subreddit display name.
    pub sr: Option<String>,
    pub comment_karma: Option<i64>,
    pub link_karma: Option<i64>,
}

/// A trophy (`t6`), an element of a `TrophyList`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trophy {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub award_id: Option<String>,
    pub icon_40: Option<String>,
    pub icon_70: Option<String>,
    pub url: Option<String>,
    pub granted_at: Option<f64>,
}

impl Trophy {
    /// Maps one element of a `TrophyList`.
    ///
    /// Elements arrive either as bare records or wrapped as `t6` Things; both
    /// are accepted.
    pub fn from_item(item: Value) -> Result<Trophy, DecodeError> {
        if item.get("kind").is_some() && item.get("data").is_some() {
            envelope::decode_thing(item, envelope::of_kind(Kind::Award))
        } else {
            envelope::decode_plain(item)
        }
    }
}

/// An entry of a `UserList`: friends, blocked users, moderators, banned
/// users and so on.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    /// Fullname of the account, e.g. `t2_abc`.
    pub id: Option<String>,
    pub name: Option<String>,
    /// When the relationship was created, in UTC seconds.
    pub date: Option<f64>,
    /// Fullname of the relationship itself.
    pub rel_id: Option<String>,
    pub note: Option<String>,
    /// Moderator permissions, present on moderator lists.
    pub mod_permissions: Option<Vec<String>>,
}

/// A flat list of [`User`] entries.
pub type UserList = FlatList<User>;

/// A flat list of [`Karma`] breakdowns.
pub type KarmaList = FlatList<Karma>;

/// A flat list of [`Trophy`] records.
pub type TrophyList = FlatList<Trophy>;
