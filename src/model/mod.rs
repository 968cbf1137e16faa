//! Typed records for the `data` payloads of each kind.

mod account;
mod link;
mod message;
mod subreddit;

pub use account::{
    Account, Karma, KarmaList, Preferences, SelfAccount, Trophy, TrophyList, User, UserList,
};
pub use link::{Comment, CommentTree, Duplicates, Edited, More, Submission};
pub use message::Message;
pub use subreddit::{Subreddit, TrendingSubreddits};

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::envelope::{self, DecodeError};
use crate::listing::Listing;
use crate::thing::Kind;

/// A child of a Listing whose children may be of mixed kinds, such as a
/// user's overview, saved items, a comment tree or `/api/info`.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// A `t1` comment.
    Comment(Comment),
    /// A `t3` link.
    Link(Submission),
    /// A `t4` private message.
    Message(Message),
    /// A `t5` subreddit.
    Subreddit(Subreddit),
    /// A `t2` account.
    Account(Account),
    /// A `more` stub for comments that were not loaded.
    More(More),
}

impl Content {
    /// Mapping function selecting the record type from the child's kind.
    ///
    /// Kinds that cannot appear inside a Listing are rejected.
    pub fn from_thing(kind: Kind, data: Value) -> Result<Content, DecodeError> {
        let content = match kind {
            Kind::Comment => Content::Comment(payload(kind, data)?),
            Kind::Link => Content::Link(payload(kind, data)?),
            Kind::Message => Content::Message(payload(kind, data)?),
            Kind::Subreddit => Content::Subreddit(payload(kind, data)?),
            Kind::Account => Content::Account(payload(kind, data)?),
            Kind::More => Content::More(payload(kind, data)?),
            other => {
                return Err(DecodeError::UnexpectedShape(format!(
                    "{other} cannot appear as listing content"
                )))
            }
        };
        Ok(content)
    }

    /// The kind this content was decoded from.
    pub fn kind(&self) -> Kind {
        match self {
            Content::Comment(_) => Kind::Comment,
            Content::Link(_) => Kind::Link,
            Content::Message(_) => Kind::Message,
            Content::Subreddit(_) => Kind::Subreddit,
            Content::Account(_) => Kind::Account,
            Content::More(_) => Kind::More,
        }
    }

    /// The comment, if this child is one.
    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Content::Comment(comment) => Some(comment),
            _ => None,
        }
    }

    /// The link, if this child is one.
    pub fn as_link(&self) -> Option<&Submission> {
        match self {
            Content::Link(link) => Some(link),
            _ => None,
        }
    }
}

fn payload<T: DeserializeOwned>(kind: Kind, data: Value) -> Result<T, DecodeError> {
    serde_json::from_value(data).map_err(|source| DecodeError::Payload { kind, source })
}

/// Decodes the Listing nested under a comment's or message's `replies`.
///
/// Reddit sends `""` instead of an empty Listing. Any failure inside the
/// nested Listing fails the enclosing record.
pub(crate) fn nested_replies<'de, D>(deserializer: D) -> Result<Listing<Content>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Listing::default()),
        Value::String(s) if s.is_empty() => Ok(Listing::default()),
        value => envelope::decode_listing(value, Content::from_thing).map_err(D::Error::custom),
    }
}
