//! Query parameters and the named path values Reddit accepts.
//!
//! The enums here render to the exact strings that go into `{where}`,
//! `{sort}` and similar placeholders, so an invalid location cannot be
//! requested by accident.

use std::fmt;

use crate::listing::Listing;

/// Paging and filtering options shared by every Listing endpoint.
///
/// # Examples
///
/// ```
/// use redwire::params::{ListingParams, TimeFilter};
///
/// let params = ListingParams::new().limit(100).time(TimeFilter::Week);
/// let pairs = params.to_query();
/// assert!(pairs.contains(&("limit".to_string(), "100".to_string())));
/// assert!(pairs.contains(&("t".to_string(), "week".to_string())));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingParams {
    /// Anchor the page after this fullname.
    pub after: Option<String>,
    /// Anchor the page before this fullname.
    pub before: Option<String>,
    /// Page size; Reddit caps it at 100.
    pub limit: Option<u32>,
    /// Number of items already seen, used by Reddit to number the page.
    pub count: Option<u32>,
    /// Include items the user has hidden or filtered out.
    pub show_all: bool,
    /// Time window for `top` and `controversial`.
    pub time: Option<TimeFilter>,
}

impl ListingParams {
    /// Parameters that leave every option at Reddit's default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the page following the given fullname.
    pub fn after(mut self, fullname: impl Into<String>) -> Self {
        self.after = Some(fullname.into());
        self
    }

    /// Requests the page preceding the given fullname.
    pub fn before(mut self, fullname: impl Into<String>) -> Self {
        self.before = Some(fullname.into());
        self
    }

    /// Maximum number of items to return.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of items already seen in this listing.
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Sends `show=all`, disabling filters such as hidden links.
    pub fn show_all(mut self) -> Self {
        self.show_all = true;
        self
    }

    /// Time window for `top` and `controversial` sorts.
    pub fn time(mut self, time: TimeFilter) -> Self {
        self.time = Some(time);
        self
    }

    /// Builds the request for the page following `page`.
    ///
    /// Returns `None` when `page` has no `after` cursor, meaning there is
    /// nothing further in that direction. `count` is advanced by the number
    /// of children on `page`.
    ///
    /// ```
    /// use redwire::{Listing, params::ListingParams};
    ///
    /// let mut page = Listing::new(vec!["a", "b"]);
    /// assert!(ListingParams::new().next_page(&page).is_none());
    ///
    /// page.after = Some("t3_b".to_string());
    /// let next = ListingParams::new().limit(2).next_page(&page).unwrap();
    /// assert_eq!(next.after.as_deref(), Some("t3_b"));
    /// assert_eq!(next.count, Some(2));
    /// ```
    pub fn next_page<T>(&self, page: &Listing<T>) -> Option<ListingParams> {
        let after = page.after.clone()?;
        let seen = u32::try_from(page.len()).unwrap_or(u32::MAX);
        Some(ListingParams {
            after: Some(after),
            before: None,
            count: Some(self.count.unwrap_or(0).saturating_add(seen)),
            ..self.clone()
        })
    }

    /// The query pairs for these options. Unset options are left out.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(after) = &self.after {
            query.push(("after".to_string(), after.clone()));
        }
        if let Some(before) = &self.before {
            query.push(("before".to_string(), before.clone()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(count) = self.count {
            query.push(("count".to_string(), count.to_string()));
        }
        if self.show_all {
            query.push(("show".to_string(), "all".to_string()));
        }
        if let Some(time) = self.time {
            query.push(("t".to_string(), time.to_string()));
        }
        query
    }
}

macro_rules! path_value {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $value:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// The string Reddit expects for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

path_value! {
    /// Time window for the `top` and `controversial` sorts.
    TimeFilter {
        Hour => "hour",
        Day => "day",
        Week => "week",
        Month => "month",
        Year => "year",
        All => "all",
    }
}

path_value! {
    /// Sort order of a subreddit's links.
    Sort {
        Hot => "hot",
        New => "new",
        Rising => "rising",
        Top => "top",
        Controversial => "controversial",
    }
}

path_value! {
    /// Sections of `/user/{username}/{where}`.
    UserWhere {
        Overview => "overview",
        Submitted => "submitted",
        Comments => "comments",
        Upvoted => "upvoted",
        Downvoted => "downvoted",
        Hidden => "hidden",
        Saved => "saved",
        Gilded => "gilded",
    }
}

path_value! {
    /// Sections of `/subreddits/{where}`.
    SubredditsWhere {
        Popular => "popular",
        New => "new",
        Default => "default",
        Gold => "gold",
    }
}

path_value! {
    /// Sections of `/subreddits/mine/{where}`.
    MineWhere {
        Subscriber => "subscriber",
        Contributor => "contributor",
        Moderator => "moderator",
    }
}

path_value! {
    /// User lists under `/r/{subreddit}/about/{where}`.
    AboutWhere {
        Banned => "banned",
        Muted => "muted",
        Contributors => "contributors",
        Moderators => "moderators",
        WikiBanned => "wikibanned",
        WikiContributors => "wikicontributors",
    }
}

path_value! {
    /// Folders under `/message/{where}`.
    MessageWhere {
        Inbox => "inbox",
        Unread => "unread",
        Sent => "sent",
        Messages => "messages",
        Comments => "comments",
        SelfReply => "selfreply",
        Mentions => "mentions",
    }
}

/// Direction of a vote cast through `/api/vote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteDirection {
    /// Upvote, sent as `1`.
    Up,
    /// Withdraws an earlier vote, sent as `0`.
    None,
    /// Downvote, sent as `-1`.
    Down,
}

impl VoteDirection {
    /// The `dir` value Reddit expects: `1`, `0` or `-1`.
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteDirection::Up => "1",
            VoteDirection::None => "0",
            VoteDirection::Down => "-1",
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
