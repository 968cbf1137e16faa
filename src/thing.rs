//! The generic `kind`/`data` envelope that Reddit wraps around almost every
//! response, and the identifiers built from it.

use std::fmt;
use std::str::FromStr;

use crate::envelope::DecodeError;

/// A discriminator identifying what a [`Thing`]'s `data` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `t1`
    Comment,
    /// `t2`
    Account,
    /// `t3`
    Link,
    /// `t4`
    Message,
    /// `t5`
    Subreddit,
    /// `t6`
    Award,
    /// `t8`
    PromoCampaign,
    /// A paginated collection of child things.
    Listing,
    /// A stub standing in for comments that were not loaded.
    More,
    /// A flat list of user relationships, such as friends or banned users.
    UserList,
    /// A flat list of per-subreddit karma breakdowns.
    KarmaList,
    /// A flat list of trophies awarded to an account.
    TrophyList,
    /// A multireddit.
    LabeledMulti,
    /// An entry of a subreddit's moderation log (`modaction` on the wire).
    ModAction,
    /// A subreddit wiki page (`wikipage` on the wire).
    WikiPage,
}

impl Kind {
    /// The wire representation of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Comment => "t1",
            Kind::Account => "t2",
            Kind::Link => "t3",
            Kind::Message => "t4",
            Kind::Subreddit => "t5",
            Kind::Award => "t6",
            Kind::PromoCampaign => "t8",
            Kind::Listing => "Listing",
            Kind::More => "more",
            Kind::UserList => "UserList",
            Kind::KarmaList => "KarmaList",
            Kind::TrophyList => "TrophyList",
            Kind::LabeledMulti => "LabeledMulti",
            Kind::ModAction => "modaction",
            Kind::WikiPage => "wikipage",
        }
    }

    /// `true` for the `tN` kinds that can prefix a [`Fullname`].
    pub fn has_fullname(&self) -> bool {
        self.as_str().starts_with('t') && self.as_str().len() == 2
    }
}

impl FromStr for Kind {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "t1" => Kind::Comment,
            "t2" => Kind::Account,
            "t3" => Kind::Link,
            "t4" => Kind::Message,
            "t5" => Kind::Subreddit,
            "t6" => Kind::Award,
            "t8" => Kind::PromoCampaign,
            "Listing" => Kind::Listing,
            "more" => Kind::More,
            "UserList" => Kind::UserList,
            "KarmaList" => Kind::KarmaList,
            "TrophyList" => Kind::TrophyList,
            "LabeledMulti" => Kind::LabeledMulti,
            "modaction" => Kind::ModAction,
            "wikipage" => Kind::WikiPage,
            other => return Err(DecodeError::UnknownKind(other.to_owned())),
        };
        Ok(kind)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded envelope: the kind discriminator plus its payload.
///
/// Decoding functions in [`envelope`](crate::envelope) produce
/// `Thing<serde_json::Value>` first and then hand the payload to a mapping
/// function that knows the target type.
#[derive(Debug, Clone, PartialEq)]
pub struct Thing<T> {
    /// What `data` represents.
    pub kind: Kind,
    /// The kind-specific payload.
    pub data: T,
}

impl<T> Thing<T> {
    /// Creates a new `Thing`.
    pub fn new(kind: Kind, data: T) -> Self {
        Self { kind, data }
    }

    /// Transforms the payload while keeping the kind.
    pub fn map<U, F>(self, f: F) -> Thing<U>
    where
        F: FnOnce(T) -> U,
    {
        Thing {
            kind: self.kind,
            data: f(self.data),
        }
    }
}

/// A globally unique identifier such as `t3_abc123`: a kind prefix and a
/// base-36 id.
///
/// ```
/// use redwire::{Fullname, Kind};
///
/// let name: Fullname = "t3_abc123".parse().unwrap();
/// assert_eq!(name.kind(), Kind::Link);
/// assert_eq!(name.id(), "abc123");
/// assert_eq!(Fullname::new(Kind::Comment, "xyz").to_string(), "t1_xyz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fullname {
    kind: Kind,
    id: String,
}

impl Fullname {
    /// Creates a fullname from a kind and a base-36 id.
    pub fn new(kind: Kind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    /// The type prefix, e.g. [`Kind::Link`] for `t3_abc`.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The base-36 id without the type prefix.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl FromStr for Fullname {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, id) = s
            .split_once('_')
            .ok_or_else(|| DecodeError::UnexpectedShape(format!("not a fullname: {s:?}")))?;
        let kind: Kind = prefix.parse()?;
        let valid_id = !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric());
        if !kind.has_fullname() || !valid_id {
            return Err(DecodeError::UnexpectedShape(format!("not a fullname: {s:?}")));
        }
        Ok(Fullname::new(kind, id.to_ascii_lowercase()))
    }
}

impl fmt::Display for Fullname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind, self.id)
    }
}
