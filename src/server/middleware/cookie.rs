//! Access token cookie handling.
//!
//! The token travels in one HTTP-only cookie. This wrapper keeps the cookie name and
//! attributes in one place so login, signup, logout and the auth guard agree on them.

use tower_cookies::{
    cookie::{time::Duration, SameSite},
    Cookie, Cookies,
};

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

pub struct AccessTokenCookie<'a> {
    cookies: &'a Cookies,
}

impl<'a> AccessTokenCookie<'a> {
    pub fn new(cookies: &'a Cookies) -> Self {
        Self { cookies }
    }

    /// Token sent by the client, if any. Empty values count as absent.
    pub fn token(&self) -> Option<String> {
        self.cookies
            .get(ACCESS_TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.is_empty())
    }

    /// Hands a freshly issued token to the client.
    pub fn set_token(&self, token: String) {
        self.cookies.add(build(token).build());
    }

    /// Tells the client to drop its token by sending an empty cookie with `Max-Age=0`.
    pub fn clear(&self) {
        self.cookies
            .add(build(String::new()).max_age(Duration::ZERO).build());
    }
}

fn build(value: String) -> tower_cookies::cookie::CookieBuilder<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
}
