//! Links, comments and the composite responses built from them.

use serde::Deserialize;
use serde_json::Value;

use crate::envelope::{self, DecodeError};
use crate::listing::Listing;
use crate::model::Content;
use crate::thing::Kind;

/// Either `false` or the time the post was last edited.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Edited {
    /// Plain flag; Reddit sends `false` for posts that were never edited.
    Flag(bool),
    /// Time of the last edit in UTC seconds.
    At(f64),
}

impl Edited {
    /// The edit timestamp in UTC seconds, if the post was edited.
    pub fn timestamp(&self) -> Option<f64> {
        match self {
            Edited::At(at) => Some(*at),
            Edited::Flag(_) => None,
        }
    }

    /// `true` if the post was edited, whichever form Reddit used.
    pub fn is_edited(&self) -> bool {
        !matches!(self, Edited::Flag(false))
    }
}

/// A link or self post (`t3`).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Submission {
    pub id: Option<String>,
    /// Fullname, e.g. `t3_abc123`.
    pub name: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub author_fullname: Option<String>,
    pub subreddit: Option<String>,
    pub subreddit_id: Option<String>,
    pub selftext: Option<String>,
    pub selftext_html: Option<String>,
    pub url: Option<String>,
    pub permalink: Option<String>,
    pub domain: Option<String>,
    pub thumbnail: Option<String>,
    pub score: Option<i64>,
    pub ups: Option<i64>,
    pub downs: Option<i64>,
    pub upvote_ratio: Option<f64>,
    pub num_comments: Option<u64>,
    pub num_crossposts: Option<u64>,
    pub gilded: Option<u64>,
    pub created: Option<f64>,
    pub created_utc: Option<f64>,
    pub edited: Option<Edited>,
    /// `Some(true)` for an upvote, `Some(false)` for a downvote.
    pub likes: Option<bool>,
    pub over_18: Option<bool>,
    pub spoiler: Option<bool>,
    pub stickied: Option<bool>,
    pub locked: Option<bool>,
    pub archived: Option<bool>,
    pub is_self: Option<bool>,
    pub is_video: Option<bool>,
    pub saved: Option<bool>,
    pub hidden: Option<bool>,
    pub link_flair_text: Option<String>,
    pub author_flair_text: Option<String>,
    pub distinguished: Option<String>,
}

/// A comment (`t1`).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Comment {
    pub id: Option<String>,
    pub name: Option<String>,
    pub author: Option<String>,
    pub body: Option<String>,
    pub body_html: Option<String>,
    /// Fullname of the link the comment belongs to.
    pub link_id: Option<String>,
    /// Fullname of the parent link or comment.
    pub parent_id: Option<String>,
    pub subreddit: Option<String>,
    pub subreddit_id: Option<String>,
    pub permalink: Option<String>,
    pub score: Option<i64>,
    pub ups: Option<i64>,
    pub downs: Option<i64>,
    pub gilded: Option<u64>,
    pub depth: Option<u32>,
    pub created: Option<f64>,
    pub created_utc: Option<f64>,
    pub edited: Option<Edited>,
    pub likes: Option<bool>,
    pub saved: Option<bool>,
    pub score_hidden: Option<bool>,
    pub stickied: Option<bool>,
    pub distinguished: Option<String>,
    /// Direct replies, decoded together with the comment. Empty when Reddit
    /// sends `""` or leaves the field out.
    #[serde(default, deserialize_with = "crate::model::nested_replies")]
    pub replies: Listing<Content>,
}

/// A stub for comments that were not included in a comment tree.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct More {
    pub id: Option<String>,
    pub name: Option<String>,
    pub parent_id: Option<String>,
    pub count: Option<u64>,
    pub depth: Option<u32>,
    /// Base-36 ids of the comments left out.
    pub children: Option<Vec<String>>,
}

/// A link together with its comment tree, from `/comments/{article}`.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentTree {
    pub submission: Submission,
    pub comments: Listing<Content>,
}

impl CommentTree {
    /// Decodes the `[link listing, comment listing]` pair.
    pub fn decode(value: Value) -> Result<CommentTree, DecodeError> {
        let (submission, comments) = envelope::decode_pair(
            value,
            single_link,
            |v| envelope::decode_listing(v, Content::from_thing),
        )?;
        Ok(CommentTree {
            submission,
            comments,
        })
    }
}

/// A link and the other posts of the same URL, from `/duplicates/{article}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Duplicates {
    pub original: Submission,
    pub duplicates: Listing<Submission>,
}

impl Duplicates {
    /// Decodes the `[original listing, duplicates listing]` pair.
    pub fn decode(value: Value) -> Result<Duplicates, DecodeError> {
        let (original, duplicates) = envelope::decode_pair(value, single_link, |v| {
            envelope::decode_listing(v, envelope::of_kind(Kind::Link))
        })?;
        Ok(Duplicates {
            original,
            duplicates,
        })
    }
}

fn single_link(value: Value) -> Result<Submission, DecodeError> {
    let listing = envelope::decode_listing(value, envelope::of_kind::<Submission>(Kind::Link))?;
    listing
        .into_iter()
        .next()
        .ok_or_else(|| DecodeError::UnexpectedShape("the link listing is empty".to_string()))
}
