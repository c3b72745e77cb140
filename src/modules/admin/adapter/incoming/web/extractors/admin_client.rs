use actix_web::{
    cookie::{Cookie, SameSite},
    dev::Payload,
    http::header,
    FromRequest, HttpRequest, HttpResponse,
};
use std::{
    convert::Infallible,
    future::{ready, Ready},
};

use crate::admin::application::domain::SessionId;

pub const SESSION_COOKIE: &str = "admin_session";

/// The browser behind a request, identified by its admin session cookie.
///
/// A request without a usable cookie gets a fresh id that no session knows,
/// so it is anonymous until a login hands the cookie out.
#[derive(Debug, Clone)]
pub struct AdminClient {
    session: SessionId,
}

impl AdminClient {
    pub fn from_request_cookie(req: &HttpRequest) -> Self {
        let session = req
            .cookie(SESSION_COOKIE)
            .and_then(|cookie| SessionId::parse(cookie.value()))
            .unwrap_or_else(SessionId::generate);
        Self { session }
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }

    fn cookie(&self) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, self.session.to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish()
    }

    /// 303 that hands this browser its session cookie.
    pub fn see_other_with_session(&self, location: &str) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location))
            .cookie(self.cookie())
            .finish()
    }

    /// 303 that makes the browser drop its session cookie.
    pub fn see_other_clearing_session(&self, location: &str) -> HttpResponse {
        let mut cookie = self.cookie();
        cookie.make_removal();
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location))
            .cookie(cookie)
            .finish()
    }
}

impl FromRequest for AdminClient {
    type Error = Infallible;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_request_cookie(req)))
    }
}
