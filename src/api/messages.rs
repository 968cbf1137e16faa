use crate::{
    api::join_fullnames,
    endpoints,
    envelope::decode_listing,
    metadata::RequestMetadata,
    model::Content,
    params::{ListingParams, MessageWhere},
    thing::Fullname,
    Client, Listing, Response, Result,
};

impl Client {
    /// A message folder. The inbox mixes private messages with comment
    /// replies, so children are [`Content`].
    pub async fn messages(
        &self,
        folder: MessageWhere,
        params: &ListingParams,
    ) -> Result<Response<Listing<Content>>> {
        let request = RequestMetadata::for_endpoint(&endpoints::GET_MESSAGE_WHERE, &[&folder])?
            .with_query_params(params.to_query());
        self.call(request, |json| decode_listing(json, Content::from_thing))
            .await
    }

    /// Marks messages as read.
    pub async fn read_message(&self, names: &[Fullname]) -> Result<Response<()>> {
        let request = RequestMetadata::for_endpoint(&endpoints::POST_API_READ_MESSAGE, &[])?
            .with_form_param("id", join_fullnames(names));
        self.send(request).await
    }

    /// Marks messages as unread.
    pub async fn unread_message(&self, names: &[Fullname]) -> Result<Response<()>> {
        let request = RequestMetadata::for_endpoint(&endpoints::POST_API_UNREAD_MESSAGE, &[])?
            .with_form_param("id", join_fullnames(names));
        self.send(request).await
    }

    /// Sends a private message to `to`, a username or `/r/{subreddit}`.
    pub async fn compose(&self, to: &str, subject: &str, text: &str) -> Result<Response<()>> {
        let request = RequestMetadata::for_endpoint(&endpoints::POST_API_COMPOSE, &[])?
            .with_form_param("api_type", "json")
            .with_form_param("to", to)
            .with_form_param("subject", subject)
            .with_form_param("text", text);
        self.send(request).await
    }
}
