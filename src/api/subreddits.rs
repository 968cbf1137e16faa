use crate::{
    api::account::decode_user_list,
    endpoints,
    envelope::{decode_listing, decode_plain, decode_thing, of_kind},
    metadata::RequestMetadata,
    model::{Submission, Subreddit, TrendingSubreddits, UserList},
    params::{AboutWhere, ListingParams, MineWhere, Sort, SubredditsWhere},
    thing::Kind,
    Client, Listing, Response, Result,
};

impl Client {
    /// Information about `/r/{subreddit}`.
    pub async fn subreddit_about(&self, subreddit: &str) -> Result<Response<Subreddit>> {
        let request =
            RequestMetadata::for_endpoint(&endpoints::GET_R_SUBREDDIT_ABOUT, &[&subreddit])?;
        self.call(request, |json| decode_thing(json, of_kind(Kind::Subreddit)))
            .await
    }

    /// Links of `/r/{subreddit}` in the given sort order.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use redwire::{Client, params::{ListingParams, Sort}};
    ///
    /// # async fn example(client: Client) -> Result<(), redwire::Error> {
    /// let mut params = ListingParams::new().limit(100);
    /// loop {
    ///     let page = client.subreddit_listing("rust", Sort::New, &params).await?;
    ///     for link in page.iter() {
    ///         println!("{:?}", link.title);
    ///     }
    ///     match params.next_page(&page) {
    ///         Some(next) => params = next,
    ///         None => break,
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn subreddit_listing(
        &self,
        subreddit: &str,
        sort: Sort,
        params: &ListingParams,
    ) -> Result<Response<Listing<Submission>>> {
        let request =
            RequestMetadata::for_endpoint(&endpoints::GET_R_SUBREDDIT_SORT, &[&subreddit, &sort])?
                .with_query_params(params.to_query());
        self.call(request, |json| decode_listing(json, of_kind(Kind::Link)))
            .await
    }

    /// Subreddits in one of the site-wide directories.
    pub async fn subreddits(
        &self,
        section: SubredditsWhere,
        params: &ListingParams,
    ) -> Result<Response<Listing<Subreddit>>> {
        let request = RequestMetadata::for_endpoint(&endpoints::GET_SUBREDDITS_WHERE, &[&section])?
            .with_query_params(params.to_query());
        self.call(request, |json| decode_listing(json, of_kind(Kind::Subreddit)))
            .await
    }

    /// Subreddits the authenticated account subscribes to, contributes to
    /// or moderates.
    pub async fn my_subreddits(
        &self,
        section: MineWhere,
        params: &ListingParams,
    ) -> Result<Response<Listing<Subreddit>>> {
        let request =
            RequestMetadata::for_endpoint(&endpoints::GET_SUBREDDITS_MINE_WHERE, &[&section])?
                .with_query_params(params.to_query());
        self.call(request, |json| decode_listing(json, of_kind(Kind::Subreddit)))
            .await
    }

    /// A user list of `/r/{subreddit}`, such as its banned users.
    ///
    /// The result is a flat list; `params` only limits what Reddit sends.
    pub async fn subreddit_users(
        &self,
        subreddit: &str,
        section: AboutWhere,
        params: &ListingParams,
    ) -> Result<Response<UserList>> {
        let request = RequestMetadata::for_endpoint(
            &endpoints::GET_R_SUBREDDIT_ABOUT_WHERE,
            &[&subreddit, &section],
        )?
        .with_query_params(params.to_query());
        self.call(request, decode_user_list).await
    }

    /// Users banned from `/r/{subreddit}`.
    pub async fn subreddit_banned(
        &self,
        subreddit: &str,
        params: &ListingParams,
    ) -> Result<Response<UserList>> {
        let request =
            RequestMetadata::for_endpoint(&endpoints::GET_R_SUBREDDIT_ABOUT_BANNED, &[&subreddit])?
                .with_query_params(params.to_query());
        self.call(request, decode_user_list).await
    }

    /// Moderators of `/r/{subreddit}`.
    pub async fn subreddit_moderators(&self, subreddit: &str) -> Result<Response<UserList>> {
        let request = RequestMetadata::for_endpoint(
            &endpoints::GET_R_SUBREDDIT_ABOUT_MODERATORS,
            &[&subreddit],
        )?;
        self.call(request, decode_user_list).await
    }

    /// Today's trending subreddits.
    ///
    /// Served by the web host rather than the OAuth host, and without an
    /// envelope.
    pub async fn trending_subreddits(&self) -> Result<Response<TrendingSubreddits>> {
        let request =
            RequestMetadata::for_endpoint(&endpoints::GET_API_TRENDING_SUBREDDITS, &[])?;
        self.call(request, decode_plain).await
    }
}
