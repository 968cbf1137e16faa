//! Integration tests using wiremock to simulate the Reddit API.

use redwire::endpoint::ResolveError;
use redwire::envelope::DecodeError;
use redwire::params::{AboutWhere, ListingParams, Sort, VoteDirection};
use redwire::{Client, Error, Fullname, Kind, Preferences};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USER_AGENT: &str = "test:redwire:v0.1.0 (by /u/tester)";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn client_for(server: &MockServer) -> Client {
    init_tracing();
    Client::builder()
        .oauth_base_url(server.uri())
        .unwrap()
        .web_base_url(server.uri())
        .unwrap()
        .user_agent(USER_AGENT)
        .unwrap()
        .access_token("secret-token")
        .unwrap()
        .build()
        .unwrap()
}

fn user_list(users: serde_json::Value) -> serde_json::Value {
    json!({ "kind": "UserList", "data": { "children": users } })
}

#[tokio::test]
async fn test_successful_thing_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/spez/about"))
        .and(header("authorization", "bearer secret-token"))
        .and(header("user-agent", USER_AGENT))
        .and(query_param("raw_json", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "t2",
            "data": { "name": "spez", "created_utc": 1134104400.0, "link_karma": 10 }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.user_about("spez").await.unwrap();

    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(response.name.as_deref(), Some("spez"));
    assert_eq!(response.created_utc, Some(1134104400.0));
    assert!(response.raw_body.contains("\"t2\""));
}

#[tokio::test]
async fn test_listing_request_with_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/r/rust/new"))
        .and(query_param("limit", "2"))
        .and(query_param("after", "t3_x"))
        .and(query_param("count", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "Listing",
            "data": {
                "before": null,
                "after": "t3_b",
                "children": [
                    { "kind": "t3", "data": { "id": "a", "title": "one" } },
                    { "kind": "t3", "data": { "id": "b", "title": "two" } }
                ]
            }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = ListingParams::new().limit(2).after("t3_x").count(25);
    let page = client
        .subreddit_listing("rust", Sort::New, &params)
        .await
        .unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.after.as_deref(), Some("t3_b"));

    let next = params.next_page(&page).unwrap();
    assert_eq!(next.after.as_deref(), Some("t3_b"));
    assert_eq!(next.count, Some(27));
}

#[tokio::test]
async fn test_trending_subreddits_uses_web_host() {
    let oauth_server = MockServer::start().await;
    let web_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/trending_subreddits.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subreddit_names": ["rust", "programming"],
            "comment_count": 42,
            "comment_url": "/r/trendingsubreddits/comments/abc/"
        })))
        .expect(1)
        .mount(&web_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(0)
        .mount(&oauth_server)
        .await;

    init_tracing();
    let client = Client::builder()
        .oauth_base_url(oauth_server.uri())
        .unwrap()
        .web_base_url(web_server.uri())
        .unwrap()
        .user_agent(USER_AGENT)
        .unwrap()
        .build()
        .unwrap();

    let trending = client.trending_subreddits().await.unwrap();
    assert_eq!(
        trending.subreddit_names,
        Some(vec!["rust".to_string(), "programming".to_string()])
    );
    assert_eq!(trending.comment_count, Some(42));
}

#[tokio::test]
async fn test_flat_list_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/me/karma"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "KarmaList",
            "data": [{ "sr": "rust", "comment_karma": 5, "link_karma": 1 }]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let karma = client.karma().await.unwrap();

    assert_eq!(karma.kind(), Kind::KarmaList);
    assert_eq!(karma.len(), 1);
    assert_eq!(karma[0].comment_karma, Some(5));
}

#[tokio::test]
async fn test_derived_endpoint_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/r/rust/about/banned"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_list(json!([
            { "name": "troll", "id": "t2_t", "note": "spam" }
        ]))))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let derived = client
        .subreddit_banned("rust", &ListingParams::new())
        .await
        .unwrap();
    let generic = client
        .subreddit_users("rust", AboutWhere::Banned, &ListingParams::new())
        .await
        .unwrap();

    assert_eq!(derived.items(), generic.items());
    assert_eq!(derived[0].note.as_deref(), Some("spam"));
}

#[tokio::test]
async fn test_friends_double_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/prefs/friends"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            user_list(json!([{ "name": "alice" }, { "name": "bob" }])),
            user_list(json!([]))
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.prefs_friends().await.unwrap();
    let (friends, blocked) = &response.data;

    assert_eq!(friends.len(), 2);
    assert_eq!(friends[1].name.as_deref(), Some("bob"));
    assert!(blocked.is_empty());
}

#[tokio::test]
async fn test_friends_double_list_with_blocked_entries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/prefs/friends"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            user_list(json!([])),
            user_list(json!([{ "name": "mallory" }]))
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.prefs_friends().await;

    match result {
        Err(Error::DecodeFailed {
            source: DecodeError::BlockedListNotEmpty(1),
            raw_response,
            ..
        }) => {
            assert!(raw_response.contains("mallory"));
        }
        _ => panic!("Expected DecodeFailed, got {:?}", result),
    }
}

#[tokio::test]
async fn test_deprecated_endpoint_still_works() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/me/blocked"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_list(json!([
            { "name": "mallory" }
        ]))))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    #[allow(deprecated)]
    let blocked = client.me_blocked().await.unwrap();

    assert_eq!(blocked.len(), 1);
}

#[tokio::test]
async fn test_http_error_4xx() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/r/doesnotexist/about"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"message": "Not Found", "error": 404}"#))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.subreddit_about("doesnotexist").await;

    match result {
        Err(Error::HttpError {
            status,
            raw_response,
            ..
        }) => {
            assert_eq!(status.as_u16(), 404);
            assert!(raw_response.contains("Not Found"));
        }
        _ => panic!("Expected HttpError, got {:?}", result),
    }
}

#[tokio::test]
async fn test_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/me"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.me().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.raw_response(), Some("Unauthorized"));
}

#[tokio::test]
async fn test_decode_error_keeps_raw_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/spez/about"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "kind": "t99", "data": {} })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.user_about("spez").await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(200));
    assert!(err.raw_response().unwrap().contains("t99"));
    assert!(matches!(
        err.decode_error(),
        Some(DecodeError::UnknownKind(kind)) if kind == "t99"
    ));
}

#[tokio::test]
async fn test_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.me().await.unwrap_err();

    assert!(matches!(err.decode_error(), Some(DecodeError::Json(_))));
    assert_eq!(err.raw_response(), Some("<html>oops</html>"));
}

#[tokio::test]
async fn test_vote_sends_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/vote"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("id=t3_abc"))
        .and(body_string_contains("dir=-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let name: Fullname = "t3_abc".parse().unwrap();
    let response = client.vote(&name, VoteDirection::Down).await.unwrap();

    assert_eq!(response.status.as_u16(), 200);
}

#[tokio::test]
async fn test_compose_rejected_in_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/compose"))
        .and(body_string_contains("api_type=json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "json": {
                "errors": [["USER_DOESNT_EXIST", "that user doesn't exist", "to"]]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.compose("nobody", "s", "t").await.unwrap_err();

    match &err {
        Error::Rejected { errors, status, .. } => {
            assert_eq!(status.as_u16(), 200);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].code, "USER_DOESNT_EXIST");
            assert_eq!(errors[0].message, "that user doesn't exist");
            assert_eq!(errors[0].field.as_deref(), Some("to"));
        }
        _ => panic!("Expected Rejected, got {:?}", err),
    }
    assert_eq!(err.api_errors().len(), 1);
    assert!(err.raw_response().unwrap().contains("USER_DOESNT_EXIST"));
}

#[tokio::test]
async fn test_compose_with_empty_error_list_succeeds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/compose"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "json": { "errors": [] } })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.compose("spez", "s", "t").await.unwrap();

    assert_eq!(response.status.as_u16(), 200);
}

#[tokio::test]
async fn test_decoded_call_rejected_in_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/me/friends/nobody"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "json": { "errors": [["USER_DOESNT_EXIST", "that user doesn't exist", "name"]] }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.add_friend("nobody", None).await.unwrap_err();

    assert!(matches!(err, Error::Rejected { .. }), "got {:?}", err);
    assert_eq!(err.api_errors()[0].field.as_deref(), Some("name"));
}

#[tokio::test]
async fn test_unusable_path_argument_is_not_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    for subreddit in ["", ".", ".."] {
        let result = client.subreddit_about(subreddit).await;
        match result {
            Err(Error::Resolve(ResolveError::InvalidSegment { value, position, .. })) => {
                assert_eq!(value, subreddit);
                assert_eq!(position, 0);
            }
            _ => panic!("Expected InvalidSegment for {:?}, got {:?}", subreddit, result),
        }
    }
}

#[tokio::test]
async fn test_info_joins_fullnames() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/info"))
        .and(query_param("id", "t3_a,t1_b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "Listing",
            "data": {
                "after": null,
                "children": [
                    { "kind": "t3", "data": { "id": "a" } },
                    { "kind": "t1", "data": { "id": "b" } }
                ]
            }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let names = vec![Fullname::new(Kind::Link, "a"), Fullname::new(Kind::Comment, "b")];
    let page = client.info(&names).await.unwrap();

    let kinds: Vec<Kind> = page.iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, vec![Kind::Link, Kind::Comment]);
}

#[tokio::test]
async fn test_update_prefs_sends_only_set_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/me/prefs"))
        .and(body_json(json!({ "nightmode": true })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "nightmode": true, "lang": "en" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let update = Preferences {
        nightmode: Some(true),
        ..Default::default()
    };
    let prefs = client.update_prefs(&update).await.unwrap();

    assert_eq!(prefs.lang.as_deref(), Some("en"));
}

#[tokio::test]
async fn test_raw_json_can_be_disabled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/needs_captcha"))
        .and(query_param("raw_json", "1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/needs_captcha"))
        .respond_with(ResponseTemplate::new(200).set_body_string("false"))
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .oauth_base_url(mock_server.uri())
        .unwrap()
        .user_agent(USER_AGENT)
        .unwrap()
        .raw_json(false)
        .build()
        .unwrap();

    let needs_captcha = client.needs_captcha().await.unwrap();
    assert!(!needs_captcha.data);
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/me"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .oauth_base_url(mock_server.uri())
        .unwrap()
        .user_agent(USER_AGENT)
        .unwrap()
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let result = client.me().await;
    assert!(matches!(result, Err(Error::Timeout)), "got {:?}", result);
}

#[test]
fn test_user_agent_is_required() {
    let result = Client::builder().access_token("secret-token").unwrap().build();

    match result {
        Err(Error::ConfigurationError(message)) => {
            assert!(message.contains("User agent"));
        }
        _ => panic!("Expected ConfigurationError"),
    }
}

#[test]
fn test_url_for_routes_by_host() {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .unwrap()
        .build()
        .unwrap();

    let request = redwire::metadata::RequestMetadata::for_endpoint(
        &redwire::endpoints::GET_API_TRENDING_SUBREDDITS,
        &[],
    )
    .unwrap();
    let url = client.url_for(&request).unwrap();
    assert_eq!(
        url.as_str(),
        "https://www.reddit.com/api/trending_subreddits.json?raw_json=1"
    );

    let request = redwire::metadata::RequestMetadata::for_endpoint(
        &redwire::endpoints::GET_R_SUBREDDIT_ABOUT,
        &[&"rust"],
    )
    .unwrap()
    .with_query_param("b", "2")
    .with_query_param("a", "1");
    let url = client.url_for(&request).unwrap();
    assert_eq!(
        url.as_str(),
        "https://oauth.reddit.com/r/rust/about?a=1&b=2&raw_json=1"
    );
}
