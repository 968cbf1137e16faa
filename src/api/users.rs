use serde_json::json;

use crate::{
    endpoints,
    envelope::{decode_flat_list, decode_listing, decode_plain, decode_thing, of_kind},
    metadata::RequestMetadata,
    model::{Account, Comment, Content, Submission, Trophy, TrophyList, User},
    params::{ListingParams, UserWhere},
    thing::Kind,
    Client, Listing, Response, Result,
};

impl Client {
    /// Public profile of `username`.
    pub async fn user_about(&self, username: &str) -> Result<Response<Account>> {
        let request =
            RequestMetadata::for_endpoint(&endpoints::GET_USER_USERNAME_ABOUT, &[&username])?;
        self.call(request, |json| decode_thing(json, of_kind(Kind::Account)))
            .await
    }

    /// Trophies of `username`.
    pub async fn user_trophies(&self, username: &str) -> Result<Response<TrophyList>> {
        let request =
            RequestMetadata::for_endpoint(&endpoints::GET_USER_USERNAME_TROPHIES, &[&username])?;
        self.call(request, |json| {
            decode_flat_list(json, Kind::TrophyList, Trophy::from_item)
        })
        .await
    }

    /// One section of a user's history. Sections such as `overview` and
    /// `saved` mix links and comments, so children are [`Content`].
    pub async fn user_content(
        &self,
        username: &str,
        section: UserWhere,
        params: &ListingParams,
    ) -> Result<Response<Listing<Content>>> {
        let request = RequestMetadata::for_endpoint(
            &endpoints::GET_USER_USERNAME_WHERE,
            &[&username, &section],
        )?
        .with_query_params(params.to_query());
        self.call(request, |json| decode_listing(json, Content::from_thing))
            .await
    }

    /// Links submitted by `username`.
    pub async fn user_submitted(
        &self,
        username: &str,
        params: &ListingParams,
    ) -> Result<Response<Listing<Submission>>> {
        let request =
            RequestMetadata::for_endpoint(&endpoints::GET_USER_USERNAME_SUBMITTED, &[&username])?
                .with_query_params(params.to_query());
        self.call(request, |json| decode_listing(json, of_kind(Kind::Link)))
            .await
    }

    /// Comments written by `username`.
    pub async fn user_comments(
        &self,
        username: &str,
        params: &ListingParams,
    ) -> Result<Response<Listing<Comment>>> {
        let request =
            RequestMetadata::for_endpoint(&endpoints::GET_USER_USERNAME_COMMENTS, &[&username])?
                .with_query_params(params.to_query());
        self.call(request, |json| decode_listing(json, of_kind(Kind::Comment)))
            .await
    }

    /// `true` if `username` is free to register.
    pub async fn username_available(&self, username: &str) -> Result<Response<bool>> {
        let request = RequestMetadata::for_endpoint(&endpoints::GET_USERNAME_AVAILABLE, &[])?
            .with_query_param("user", username);
        self.call(request, decode_plain).await
    }

    /// The friend relationship with `username`.
    pub async fn friend(&self, username: &str) -> Result<Response<User>> {
        let request =
            RequestMetadata::for_endpoint(&endpoints::GET_ME_FRIENDS_USERNAME, &[&username])?;
        self.call(request, decode_plain).await
    }

    /// Adds `username` as a friend, optionally with a note.
    pub async fn add_friend(&self, username: &str, note: Option<&str>) -> Result<Response<User>> {
        let mut body = json!({ "name": username });
        if let Some(note) = note {
            body["note"] = json!(note);
        }
        let request =
            RequestMetadata::for_endpoint(&endpoints::PUT_ME_FRIENDS_USERNAME, &[&username])?
                .with_json(&body)?;
        self.call(request, decode_plain).await
    }

    /// Removes `username` from the friend list.
    pub async fn remove_friend(&self, username: &str) -> Result<Response<()>> {
        let request =
            RequestMetadata::for_endpoint(&endpoints::DELETE_ME_FRIENDS_USERNAME, &[&username])?;
        self.send(request).await
    }

    /// Blocks `username`.
    pub async fn block_user(&self, username: &str) -> Result<Response<()>> {
        let request = RequestMetadata::for_endpoint(&endpoints::POST_BLOCK_USER, &[])?
            .with_form_param("name", username);
        self.send(request).await
    }
}
