use crate::{
    api::join_fullnames,
    endpoint::Endpoint,
    endpoints,
    envelope::{decode_listing, of_kind},
    metadata::RequestMetadata,
    model::{CommentTree, Content, Duplicates, Submission},
    params::{ListingParams, VoteDirection},
    thing::{Fullname, Kind},
    Client, Listing, Response, Result,
};

impl Client {
    /// A link and its comment tree. `article` is the base-36 id without the
    /// `t3_` prefix.
    pub async fn comments(
        &self,
        article: &str,
        params: &ListingParams,
    ) -> Result<Response<CommentTree>> {
        let request = RequestMetadata::for_endpoint(&endpoints::GET_COMMENTS_ARTICLE, &[&article])?
            .with_query_params(params.to_query());
        self.call(request, CommentTree::decode).await
    }

    /// Other submissions of the same URL as `article`.
    pub async fn duplicates(
        &self,
        article: &str,
        params: &ListingParams,
    ) -> Result<Response<Duplicates>> {
        let request =
            RequestMetadata::for_endpoint(&endpoints::GET_DUPLICATES_ARTICLE, &[&article])?
                .with_query_params(params.to_query());
        self.call(request, Duplicates::decode).await
    }

    /// Links by fullname.
    pub async fn by_id(&self, names: &[Fullname]) -> Result<Response<Listing<Submission>>> {
        let names = join_fullnames(names);
        let request = RequestMetadata::for_endpoint(&endpoints::GET_BY_ID_NAMES, &[&names])?;
        self.call(request, |json| decode_listing(json, of_kind(Kind::Link)))
            .await
    }

    /// Links, comments or subreddits by fullname.
    pub async fn info(&self, names: &[Fullname]) -> Result<Response<Listing<Content>>> {
        let request = RequestMetadata::for_endpoint(&endpoints::GET_API_INFO, &[])?
            .with_query_param("id", join_fullnames(names));
        self.call(request, |json| decode_listing(json, Content::from_thing))
            .await
    }

    /// Votes on a link or comment.
    pub async fn vote(&self, name: &Fullname, direction: VoteDirection) -> Result<Response<()>> {
        let request = RequestMetadata::for_endpoint(&endpoints::POST_API_VOTE, &[])?
            .with_form_param("id", name.to_string())
            .with_form_param("dir", direction.as_str());
        self.send(request).await
    }

    /// Saves a link or comment to the authenticated account.
    pub async fn save(&self, name: &Fullname) -> Result<Response<()>> {
        self.act_on(&endpoints::POST_API_SAVE, &[name.clone()]).await
    }

    /// Removes a link or comment from the saved items.
    pub async fn unsave(&self, name: &Fullname) -> Result<Response<()>> {
        self.act_on(&endpoints::POST_API_UNSAVE, &[name.clone()]).await
    }

    /// Hides links from the authenticated account's listings.
    pub async fn hide(&self, names: &[Fullname]) -> Result<Response<()>> {
        self.act_on(&endpoints::POST_API_HIDE, names).await
    }

    /// Shows previously hidden links again.
    pub async fn unhide(&self, names: &[Fullname]) -> Result<Response<()>> {
        self.act_on(&endpoints::POST_API_UNHIDE, names).await
    }

    /// Deletes a link or comment written by the authenticated account.
    pub async fn delete(&self, name: &Fullname) -> Result<Response<()>> {
        self.act_on(&endpoints::POST_API_DEL, &[name.clone()]).await
    }

    async fn act_on(&self, endpoint: &Endpoint, names: &[Fullname]) -> Result<Response<()>> {
        let request = RequestMetadata::for_endpoint(endpoint, &[])?
            .with_form_param("id", join_fullnames(names));
        self.send(request).await
    }
}
