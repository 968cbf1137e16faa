use serde::Deserialize;

use crate::listing::Listing;
use crate::model::Content;

/// A private message or a comment reply shown in the inbox (`t4`).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Message {
    pub id: Option<String>,
    pub name: Option<String>,
    pub author: Option<String>,
    /// Recipient name.
    pub dest: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub body_html: Option<String>,
    pub context: Option<String>,
    pub subreddit: Option<String>,
    pub parent_id: Option<String>,
    pub first_message_name: Option<String>,
    pub distinguished: Option<String>,
    pub created: Option<f64>,
    pub created_utc: Option<f64>,
    /// `true` while the message is unread.
    pub new: Option<bool>,
    pub was_comment: Option<bool>,
    /// The rest of the conversation, decoded together with the message.
    #[serde(default, deserialize_with = "crate::model::nested_replies")]
    pub replies: Listing<Content>,
}
