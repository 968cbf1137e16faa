use serde_json::Value;
use std::collections::HashMap;

use crate::{
    endpoints,
    envelope::{self, decode_flat_list, decode_plain},
    metadata::RequestMetadata,
    model::{KarmaList, Preferences, SelfAccount, Trophy, TrophyList, User, UserList},
    thing::Kind,
    Client, Response, Result,
};

impl Client {
    /// The authenticated account. `/api/v1/me` answers without an envelope.
    pub async fn me(&self) -> Result<Response<SelfAccount>> {
        let request = RequestMetadata::for_endpoint(&endpoints::GET_ME, &[])?;
        self.call(request, decode_plain).await
    }

    /// Karma broken down by subreddit.
    pub async fn karma(&self) -> Result<Response<KarmaList>> {
        let request = RequestMetadata::for_endpoint(&endpoints::GET_ME_KARMA, &[])?;
        self.call(request, |json| {
            decode_flat_list(json, Kind::KarmaList, decode_plain)
        })
        .await
    }

    /// Trophies of the authenticated account.
    pub async fn trophies(&self) -> Result<Response<TrophyList>> {
        let request = RequestMetadata::for_endpoint(&endpoints::GET_ME_TROPHIES, &[])?;
        self.call(request, |json| {
            decode_flat_list(json, Kind::TrophyList, Trophy::from_item)
        })
        .await
    }

    /// Preferences of the authenticated account.
    pub async fn prefs(&self) -> Result<Response<Preferences>> {
        let request = RequestMetadata::for_endpoint(&endpoints::GET_ME_PREFS, &[])?;
        self.call(request, decode_plain).await
    }

    /// Updates the preferences that are `Some` in `prefs` and returns the
    /// full set afterwards.
    pub async fn update_prefs(&self, prefs: &Preferences) -> Result<Response<Preferences>> {
        let request =
            RequestMetadata::for_endpoint(&endpoints::PATCH_ME_PREFS, &[])?.with_json(prefs)?;
        self.call(request, decode_plain).await
    }

    /// Friends of the authenticated account, from `/prefs/friends`.
    ///
    /// Reddit answers with two UserLists: friends first, then a second list
    /// that has always been empty. Both are returned; a non-empty second
    /// list fails the decode with
    /// [`DecodeError::BlockedListNotEmpty`](crate::envelope::DecodeError::BlockedListNotEmpty).
    pub async fn prefs_friends(&self) -> Result<Response<(UserList, UserList)>> {
        let request = RequestMetadata::for_endpoint(&endpoints::GET_PREFS_FRIENDS, &[])?;
        self.call(request, envelope::decode_friends::<User>).await
    }

    /// Users blocked by the authenticated account.
    pub async fn prefs_blocked(&self) -> Result<Response<UserList>> {
        let request = RequestMetadata::for_endpoint(&endpoints::GET_PREFS_BLOCKED, &[])?;
        self.call(request, decode_user_list).await
    }

    /// Users allowed to message the authenticated account when messages are
    /// restricted to trusted users.
    pub async fn prefs_trusted(&self) -> Result<Response<UserList>> {
        let request = RequestMetadata::for_endpoint(&endpoints::GET_PREFS_TRUSTED, &[])?;
        self.call(request, decode_user_list).await
    }

    /// Friends of the authenticated account, from `/api/v1/me/friends`.
    pub async fn me_friends(&self) -> Result<Response<UserList>> {
        let request = RequestMetadata::for_endpoint(&endpoints::GET_ME_FRIENDS, &[])?;
        self.call(request, decode_user_list).await
    }

    /// Users blocked by the authenticated account.
    #[deprecated(note = "superseded by `Client::prefs_blocked`")]
    pub async fn me_blocked(&self) -> Result<Response<UserList>> {
        #[allow(deprecated)]
        let request = RequestMetadata::for_endpoint(&endpoints::GET_ME_BLOCKED, &[])?;
        self.call(request, decode_user_list).await
    }

    /// OAuth scopes, keyed by scope id.
    pub async fn scopes(&self) -> Result<Response<HashMap<String, Value>>> {
        let request = RequestMetadata::for_endpoint(&endpoints::GET_SCOPES, &[])?;
        self.call(request, decode_plain).await
    }

    /// Whether the authenticated account has to solve captchas.
    pub async fn needs_captcha(&self) -> Result<Response<bool>> {
        let request = RequestMetadata::for_endpoint(&endpoints::GET_NEEDS_CAPTCHA, &[])?;
        self.call(request, decode_plain).await
    }
}

pub(super) fn decode_user_list(
    json: Value,
) -> std::result::Result<UserList, envelope::DecodeError> {
    decode_flat_list(json, Kind::UserList, decode_plain)
}
