//! Cookie-backed session state.
//!
//! Two cookies carry everything: the opaque token issued by the clinic
//! API and the role it was issued for. No token means unauthenticated.
//! The role only decides which dashboard a browser lands on; the
//! upstream re-checks the token on every authenticated call.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::fmt;

pub const TOKEN_COOKIE: &str = "caredesk_token";
pub const ROLE_COOKIE: &str = "caredesk_role";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Doctor,
    Patient,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Patient => "patient",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "doctor" => Some(Role::Doctor),
            "patient" => Some(Role::Patient),
            _ => None,
        }
    }

    /// Where a fresh login of this role lands.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Doctor => "/doctor",
            Role::Patient => "/patient/home",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

impl Session {
    /// Read the session out of the cookie jar, if both cookies are
    /// present and the role is one we know.
    pub fn from_jar(jar: &CookieJar) -> Option<Self> {
        let token = jar.get(TOKEN_COOKIE)?.value().to_string();
        if token.is_empty() {
            return None;
        }
        let role = Role::parse(jar.get(ROLE_COOKIE)?.value())?;
        Some(Self { token, role })
    }

    /// Store a freshly issued token and its role.
    pub fn issue(jar: CookieJar, token: &str, role: Role) -> CookieJar {
        jar.add(session_cookie(TOKEN_COOKIE, token.to_string()))
            .add(session_cookie(ROLE_COOKIE, role.as_str().to_string()))
    }

    /// Drop both cookies. The removal cookies carry the same path the
    /// session cookies were issued with, or browsers keep the originals.
    pub fn clear(jar: CookieJar) -> CookieJar {
        jar.remove(Cookie::build(TOKEN_COOKIE).path("/").build())
            .remove(Cookie::build(ROLE_COOKIE).path("/").build())
    }

    pub fn is(&self, role: Role) -> bool {
        self.role == role
    }
}

fn session_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
