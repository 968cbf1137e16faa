//! # Redwire - A typed client for the Reddit REST API
//!
//! Redwire binds Reddit's OAuth API endpoints to typed Rust operations. It is
//! built on top of `reqwest` and rests on two mechanisms:
//!
//! - **Endpoint templates** ([`endpoint`], [`endpoints`]): every endpoint is a
//!   method plus a path such as `/r/{subreddit}/about/{where}`. Placeholders
//!   are substituted positionally, and specialised endpoints are derived from
//!   generic ones by pinning a placeholder and appending segments.
//! - **Envelope decoding** ([`envelope`]): Reddit wraps almost every payload
//!   as a `{"kind": ..., "data": ...}` Thing. Responses are single Things,
//!   paginated [`Listing`]s or cursor-less [`FlatList`]s, and are unwrapped
//!   into the [`model`] records before they reach the caller.
//!
//! ## Quick Start
//!
//! ```no_run
//! use redwire::params::{ListingParams, Sort};
//! use redwire::Client;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), redwire::Error> {
//!     let client = Client::builder()
//!         .user_agent("linux:redwire-example:v0.1.0 (by /u/example)")?
//!         .access_token("token")?
//!         .timeout(Duration::from_secs(30))
//!         .build()?;
//!
//!     let me = client.me().await?;
//!     println!("Logged in as {:?}", me.name);
//!
//!     let page = client
//!         .subreddit_listing("rust", Sort::Top, &ListingParams::new().limit(25))
//!         .await?;
//!     for link in page.iter() {
//!         println!("{:?} ({:?} points)", link.title, link.score);
//!     }
//!     println!("Next page starts after {:?}", page.after);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Typed operations** - One method per endpoint, returning decoded records
//! - **Template registry** - Every supported endpoint as an inspectable [`Endpoint`] constant
//! - **Rich error handling** - Decode failures keep the raw body and status for inspection
//! - **Automatic logging** - Structured logging with `tracing` for observability
//! - **Response metadata** - Access latency, status codes, headers and raw response bodies
//!
//! Obtaining OAuth tokens is out of scope: pass an already issued bearer
//! token to [`ClientBuilder::access_token`].
//!
//! ## Error Handling
//!
//! ```no_run
//! use redwire::{Client, Error};
//!
//! # async fn example(client: Client) -> Result<(), Error> {
//! match client.user_about("spez").await {
//!     Ok(account) => println!("{:?} has {:?} link karma", account.name, account.link_karma),
//!     Err(Error::DecodeFailed { source, raw_response, status }) => {
//!         eprintln!("Failed to decode (status {}): {}", status, source);
//!         eprintln!("  Raw response: {}", raw_response);
//!     }
//!     Err(e) if e.is_unauthorized() => eprintln!("Token expired"),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
pub mod endpoint;
pub mod endpoints;
pub mod envelope;
mod error;
pub mod listing;
pub mod metadata;
pub mod model;
pub mod params;
mod response;
pub mod thing;

pub use client::{Client, ClientBuilder, DEFAULT_OAUTH_BASE_URL, DEFAULT_WEB_BASE_URL};
pub use endpoint::{Endpoint, Host};
pub use envelope::ApiError;
pub use error::{Error, Result};
pub use listing::{FlatList, Listing};
pub use model::*;
pub use response::Response;
pub use thing::{Fullname, Kind, Thing};
