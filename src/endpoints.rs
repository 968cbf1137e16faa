//! The registry of REST endpoints this crate calls.
//!
//! Each constant is one operation. Templates that only differ from a more
//! general one in a trailing value are derived from it, so
//! `GET_R_SUBREDDIT_ABOUT_BANNED` is `GET_R_SUBREDDIT_ABOUT_WHERE` with
//! `{where}` fixed to `banned`. Derived templates are built on first use.

use std::sync::LazyLock;

use crate::endpoint::Endpoint;

macro_rules! endpoint {
    ($method:ident, $host:ident, [$($segment:literal),* $(,)?]) => {
        $crate::endpoint::Endpoint::new(
            http::Method::$method,
            $crate::endpoint::Host::$host,
            &[$($segment),*],
        )
    };
    ($method:ident, [$($segment:literal),* $(,)?]) => {
        endpoint!($method, OAuth, [$($segment),*])
    };
}

// account

pub const GET_ME: Endpoint = endpoint!(GET, ["api", "v1", "me"]);
pub const GET_ME_KARMA: Endpoint = endpoint!(GET, ["api", "v1", "me", "karma"]);
pub const GET_ME_TROPHIES: Endpoint = endpoint!(GET, ["api", "v1", "me", "trophies"]);
pub const GET_ME_PREFS: Endpoint = endpoint!(GET, ["api", "v1", "me", "prefs"]);
pub const PATCH_ME_PREFS: Endpoint = endpoint!(PATCH, ["api", "v1", "me", "prefs"]);
pub const GET_ME_FRIENDS: Endpoint = endpoint!(GET, ["api", "v1", "me", "friends"]);
#[deprecated(note = "superseded by GET_PREFS_BLOCKED")]
pub const GET_ME_BLOCKED: Endpoint = endpoint!(GET, ["api", "v1", "me", "blocked"]);
pub const GET_PREFS_WHERE: Endpoint = endpoint!(GET, ["prefs", "{where}"]);
pub static GET_PREFS_FRIENDS: LazyLock<Endpoint> =
    LazyLock::new(|| GET_PREFS_WHERE.derive(&[&"friends"], &[]));
pub static GET_PREFS_BLOCKED: LazyLock<Endpoint> =
    LazyLock::new(|| GET_PREFS_WHERE.derive(&[&"blocked"], &[]));
pub static GET_PREFS_TRUSTED: LazyLock<Endpoint> =
    LazyLock::new(|| GET_PREFS_WHERE.derive(&[&"trusted"], &[]));
pub const GET_SCOPES: Endpoint = endpoint!(GET, ["api", "v1", "scopes"]);
pub const GET_NEEDS_CAPTCHA: Endpoint = endpoint!(GET, ["api", "needs_captcha"]);

// users

pub const GET_USER_USERNAME_ABOUT: Endpoint = endpoint!(GET, ["user", "{username}", "about"]);
pub const GET_USER_USERNAME_TROPHIES: Endpoint =
    endpoint!(GET, ["api", "v1", "user", "{username}", "trophies"]);
pub const GET_USER_USERNAME_WHERE: Endpoint = endpoint!(GET, ["user", "{username}", "{where}"]);
pub static GET_USER_USERNAME_SUBMITTED: LazyLock<Endpoint> =
    LazyLock::new(|| GET_USER_USERNAME_WHERE.derive(&[&"{username}", &"submitted"], &[]));
pub static GET_USER_USERNAME_COMMENTS: LazyLock<Endpoint> =
    LazyLock::new(|| GET_USER_USERNAME_WHERE.derive(&[&"{username}", &"comments"], &[]));
pub const GET_USERNAME_AVAILABLE: Endpoint = endpoint!(GET, ["api", "username_available"]);
pub const GET_ME_FRIENDS_USERNAME: Endpoint =
    endpoint!(GET, ["api", "v1", "me", "friends", "{username}"]);
pub const PUT_ME_FRIENDS_USERNAME: Endpoint =
    endpoint!(PUT, ["api", "v1", "me", "friends", "{username}"]);
pub const DELETE_ME_FRIENDS_USERNAME: Endpoint =
    endpoint!(DELETE, ["api", "v1", "me", "friends", "{username}"]);
pub const POST_BLOCK_USER: Endpoint = endpoint!(POST, ["api", "block_user"]);

// subreddits

pub const GET_R_SUBREDDIT_ABOUT: Endpoint = endpoint!(GET, ["r", "{subreddit}", "about"]);
pub const GET_R_SUBREDDIT_SORT: Endpoint = endpoint!(GET, ["r", "{subreddit}", "{sort}"]);
pub const GET_SUBREDDITS_WHERE: Endpoint = endpoint!(GET, ["subreddits", "{where}"]);
pub const GET_SUBREDDITS_MINE_WHERE: Endpoint =
    endpoint!(GET, ["subreddits", "mine", "{where}"]);
pub const GET_R_SUBREDDIT_ABOUT_WHERE: Endpoint =
    endpoint!(GET, ["r", "{subreddit}", "about", "{where}"]);
pub static GET_R_SUBREDDIT_ABOUT_BANNED: LazyLock<Endpoint> =
    LazyLock::new(|| GET_R_SUBREDDIT_ABOUT_WHERE.derive(&[&"{subreddit}", &"banned"], &[]));
pub static GET_R_SUBREDDIT_ABOUT_MODERATORS: LazyLock<Endpoint> =
    LazyLock::new(|| GET_R_SUBREDDIT_ABOUT_WHERE.derive(&[&"{subreddit}", &"moderators"], &[]));
/// Only served by the web host; the OAuth host answers 404.
pub const GET_API_TRENDING_SUBREDDITS: Endpoint =
    endpoint!(GET, Web, ["api", "trending_subreddits.json"]);

// links and comments

pub const GET_COMMENTS_ARTICLE: Endpoint = endpoint!(GET, ["comments", "{article}"]);
pub const GET_DUPLICATES_ARTICLE: Endpoint = endpoint!(GET, ["duplicates", "{article}"]);
pub const GET_BY_ID_NAMES: Endpoint = endpoint!(GET, ["by_id", "{names}"]);
pub const GET_API_INFO: Endpoint = endpoint!(GET, ["api", "info"]);
pub const POST_API_VOTE: Endpoint = endpoint!(POST, ["api", "vote"]);
pub const POST_API_SAVE: Endpoint = endpoint!(POST, ["api", "save"]);
pub const POST_API_UNSAVE: Endpoint = endpoint!(POST, ["api", "unsave"]);
pub const POST_API_HIDE: Endpoint = endpoint!(POST, ["api", "hide"]);
pub const POST_API_UNHIDE: Endpoint = endpoint!(POST, ["api", "unhide"]);
pub const POST_API_DEL: Endpoint = endpoint!(POST, ["api", "del"]);

// messages

pub const GET_MESSAGE_WHERE: Endpoint = endpoint!(GET, ["message", "{where}"]);
pub const POST_API_READ_MESSAGE: Endpoint = endpoint!(POST, ["api", "read_message"]);
pub const POST_API_UNREAD_MESSAGE: Endpoint = endpoint!(POST, ["api", "unread_message"]);
pub const POST_API_COMPOSE: Endpoint = endpoint!(POST, ["api", "compose"]);
