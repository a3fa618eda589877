use super::*;

/// Tests a request without a token.
///
/// Expected: Identity::Anonymous
#[test]
fn absent_token_is_anonymous() {
    let tokens = token_service();

    assert_eq!(AuthGuard::resolve_token(&tokens, None), Identity::Anonymous);
}

/// Tests a valid token.
///
/// Expected: Identity::Authenticated with the token subject
#[test]
fn valid_token_yields_subject() {
    let tokens = token_service();
    let token = tokens.issue_at("a@x.com", Utc::now()).unwrap();

    assert_eq!(
        AuthGuard::resolve_token(&tokens, Some(&token)),
        Identity::Authenticated("a@x.com".to_string())
    );
}

/// Tests tokens that must not authenticate anyone.
///
/// Verifies that garbage, expired and foreign-signed tokens all resolve to
/// anonymous instead of failing.
///
/// Expected: Identity::Anonymous for each
#[test]
fn invalid_tokens_are_anonymous() {
    let tokens = token_service();
    let expired = tokens
        .issue_at("a@x.com", Utc::now() - Duration::hours(2))
        .unwrap();
    let foreign = TokenService::new("some-other-secret-also-32-chars-long", Duration::hours(1))
        .issue_at("a@x.com", Utc::now())
        .unwrap();

    for token in ["garbage", expired.as_str(), foreign.as_str()] {
        assert_eq!(
            AuthGuard::resolve_token(&tokens, Some(token)),
            Identity::Anonymous
        );
    }
}
