//! Typed operations, one per endpoint, as methods on [`Client`].
//!
//! Every operation follows the same steps: pick its template from
//! [`endpoints`](crate::endpoints), resolve the path with its arguments,
//! attach query or body parameters, send the request and decode the body
//! with the mapping function for the kind the endpoint returns.

mod account;
mod links;
mod messages;
mod subreddits;
mod users;

use crate::{
    client::reject_api_errors, envelope, metadata::RequestMetadata, thing::Fullname, Client,
    Response, Result,
};

impl Client {
    /// Sends an action whose response carries no data.
    ///
    /// Reddit still reports refused actions in the body, as
    /// `{"json": {"errors": [...]}}` with status 200; those fail with
    /// [`Error::Rejected`](crate::Error::Rejected).
    pub(crate) async fn send(&self, metadata: RequestMetadata) -> Result<Response<()>> {
        let response = self.execute(&metadata).await?;
        match envelope::parse(&response.raw_body) {
            Ok(json) => reject_api_errors(&metadata, &json, response),
            // Some actions answer with an empty body.
            Err(_) => Ok(response),
        }
    }
}

/// Comma-separated fullnames, as `/by_id`, `/api/info` and the bulk
/// actions expect.
fn join_fullnames(names: &[Fullname]) -> String {
    names
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
