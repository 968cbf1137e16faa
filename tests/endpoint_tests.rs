//! Tests for path templates and the endpoint registry.

use http::Method;
use redwire::endpoint::{is_placeholder, Endpoint, Host, ResolveError};
use redwire::endpoints;

const COMMENTS: Endpoint = Endpoint::new(
    Method::GET,
    Host::OAuth,
    &["r", "{subreddit}", "comments", "{article}"],
);

#[test]
fn test_substitution_is_left_to_right() {
    let path = COMMENTS.resolve(&[&"bananapics", &"abc123"]);
    assert_eq!(path.to_string(), "/r/bananapics/comments/abc123");
    assert_eq!(path.segments(), ["r", "bananapics", "comments", "abc123"]);

    let swapped = COMMENTS.resolve(&[&"abc123", &"bananapics"]);
    assert_eq!(swapped.to_string(), "/r/abc123/comments/bananapics");
}

#[test]
fn test_static_template_resolves_to_itself() {
    assert_eq!(endpoints::GET_ME.placeholders(), 0);
    assert_eq!(endpoints::GET_ME.resolve(&[]).to_string(), "/api/v1/me");
}

#[test]
fn test_arity_mismatch_is_reported() {
    let too_few = COMMENTS.try_resolve(&[&"bananapics"]).unwrap_err();
    assert_eq!(
        too_few,
        ResolveError::Arity {
            template: "GET /r/{subreddit}/comments/{article}".to_string(),
            expected: 2,
            supplied: 1,
        }
    );

    let too_many = endpoints::GET_ME.try_resolve(&[&"extra"]).unwrap_err();
    assert!(matches!(
        too_many,
        ResolveError::Arity {
            expected: 0,
            supplied: 1,
            ..
        }
    ));
}

#[test]
fn test_empty_argument_is_rejected() {
    let err = COMMENTS.try_resolve(&[&"", &"abc123"]).unwrap_err();
    assert!(matches!(
        err,
        ResolveError::InvalidSegment { position: 0, ref value, .. } if value.is_empty()
    ));
}

#[test]
fn test_dot_segments_are_rejected() {
    let err = COMMENTS.try_resolve(&[&"bananapics", &"."]).unwrap_err();
    assert!(matches!(
        err,
        ResolveError::InvalidSegment { position: 1, ref value, .. } if value == "."
    ));

    let err = endpoints::GET_R_SUBREDDIT_ABOUT
        .try_resolve(&[&".."])
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::InvalidSegment { position: 0, ref value, .. } if value == ".."
    ));
}

#[test]
fn test_dots_inside_an_argument_are_kept() {
    let path = COMMENTS.resolve(&[&"a.b", &"..."]);
    assert_eq!(path.to_string(), "/r/a.b/comments/...");
}

#[test]
#[should_panic(expected = "not a valid path segment")]
fn test_resolve_panics_on_invalid_segment() {
    COMMENTS.resolve(&[&"bananapics", &""]);
}

#[test]
#[should_panic(expected = "expects 2 path arguments, 3 supplied")]
fn test_resolve_panics_on_arity_mismatch() {
    COMMENTS.resolve(&[&"a", &"b", &"c"]);
}

#[test]
fn test_arguments_of_any_display_type() {
    let page = 3u32;
    let path = COMMENTS.resolve(&[&"rust", &page]);
    assert_eq!(path.to_string(), "/r/rust/comments/3");
}

#[test]
fn test_derived_template_matches_hand_written_one() {
    let hand_written = Endpoint::new(
        Method::GET,
        Host::OAuth,
        &["r", "{subreddit}", "about", "banned"],
    );

    assert_eq!(
        endpoints::GET_R_SUBREDDIT_ABOUT_BANNED.to_string(),
        hand_written.to_string()
    );
    assert_eq!(endpoints::GET_R_SUBREDDIT_ABOUT_BANNED.placeholders(), 1);
    assert_eq!(
        endpoints::GET_R_SUBREDDIT_ABOUT_BANNED.resolve(&[&"rust"]),
        hand_written.resolve(&[&"rust"])
    );
    assert_eq!(
        endpoints::GET_R_SUBREDDIT_ABOUT_BANNED.resolve(&[&"rust"]),
        endpoints::GET_R_SUBREDDIT_ABOUT_WHERE.resolve(&[&"rust", &"banned"])
    );
}

#[test]
fn test_derive_appends_tail() {
    let derived = endpoints::GET_R_SUBREDDIT_ABOUT.derive(&[&"{subreddit}"], &["rules"]);
    assert_eq!(derived.to_string(), "GET /r/{subreddit}/about/rules");
    assert_eq!(derived.method(), &Method::GET);
    assert_eq!(derived.resolve(&[&"rust"]).to_string(), "/r/rust/about/rules");
}

#[test]
fn test_derived_templates_keep_method_and_host() {
    let submitted = &*endpoints::GET_USER_USERNAME_SUBMITTED;
    assert_eq!(submitted.method(), &Method::GET);
    assert_eq!(submitted.host(), Host::OAuth);
    assert_eq!(
        submitted.resolve(&[&"spez"]).to_string(),
        "/user/spez/submitted"
    );
    assert_eq!(
        endpoints::GET_PREFS_FRIENDS.resolve(&[]).to_string(),
        "/prefs/friends"
    );
}

#[test]
fn test_trending_subreddits_is_routed_to_web_host() {
    assert_eq!(endpoints::GET_API_TRENDING_SUBREDDITS.host(), Host::Web);
    assert_eq!(endpoints::GET_ME.host(), Host::OAuth);
}

#[test]
fn test_placeholder_detection() {
    assert!(is_placeholder("{subreddit}"));
    assert!(is_placeholder("{where}"));
    assert!(!is_placeholder("{}"));
    assert!(!is_placeholder("subreddit"));
    assert!(!is_placeholder("{sub reddit}"));
    assert!(!is_placeholder("trending_subreddits.json"));
}

#[test]
fn test_every_registered_template_is_well_formed() {
    let templates = vec![
        endpoints::GET_ME,
        endpoints::GET_ME_KARMA,
        endpoints::GET_PREFS_WHERE,
        endpoints::GET_USER_USERNAME_WHERE,
        endpoints::GET_R_SUBREDDIT_SORT,
        endpoints::GET_SUBREDDITS_MINE_WHERE,
        endpoints::GET_COMMENTS_ARTICLE,
        endpoints::GET_BY_ID_NAMES,
        endpoints::POST_API_VOTE,
        endpoints::GET_MESSAGE_WHERE,
        endpoints::GET_R_SUBREDDIT_ABOUT_MODERATORS.clone(),
        endpoints::GET_USER_USERNAME_COMMENTS.clone(),
    ];

    for template in &templates {
        let args: Vec<String> = (0..template.placeholders())
            .map(|i| format!("arg{i}"))
            .collect();
        let args: Vec<&dyn std::fmt::Display> =
            args.iter().map(|a| a as &dyn std::fmt::Display).collect();
        let path = template.resolve(&args);
        assert!(path.segments().iter().all(|s| !is_placeholder(s)));
    }
}
