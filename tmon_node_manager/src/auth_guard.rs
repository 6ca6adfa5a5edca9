use anyhow::Error;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use rocket::http::{Cookie, CookieJar, Status};
use rocket::request::{FromRequest, Outcome};
use rocket::response::Redirect;
use rocket::serde::{json::Json, Deserialize};
use rocket::{Request, State};
use std::time::{Duration, Instant};
use tmon_config::TmonConfig;
use uuid::Uuid;

pub const TOKEN_COOKIE: &str = "User-Token";

/// Tokens handed out by a successful login, with their expiry. Sessions
/// live only as long as the process; a restart logs everyone out.
static SESSIONS: Lazy<DashMap<String, Instant>> = Lazy::new(DashMap::new);

/// Request guard for everything behind the login form. Requests without
/// a live session token are bounced with a 401, which the catcher turns
/// into the login page.
pub struct AuthGuard;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthGuard {
  type Error = anyhow::Error; // Decorated because Error=Error looks odd

  async fn from_request(
    request: &'r Request<'_>,
  ) -> Outcome<Self, Self::Error> {
    if let Some(token) = request.cookies().get(TOKEN_COOKIE) {
      let live = SESSIONS
        .get(token.value())
        .map(|expires| Instant::now() < *expires)
        .unwrap_or(false);
      if live {
        return Outcome::Success(AuthGuard);
      }
      // Stale or forged token; drop it so the table doesn't grow.
      SESSIONS.remove(token.value());
    }

    Outcome::Error((Status::Unauthorized, Error::msg("Access Denied")))
  }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(crate = "rocket::serde")]
pub struct LoginAttempt {
  pub username: String,
  pub password: String,
}

#[post("/api/login", data = "<info>")]
pub fn login(
  cookies: &CookieJar,
  info: Json<LoginAttempt>,
  config: &State<TmonConfig>,
) -> Json<String> {
  if info.username == config.web_username
    && info.password == config.web_password
  {
    let token = Uuid::new_v4().to_string();
    let lifetime = Duration::from_secs(config.session_duration_secs);
    SESSIONS.insert(token.clone(), Instant::now() + lifetime);
    cookies.add(Cookie::new(TOKEN_COOKIE, token));
    return Json("OK".to_string());
  }
  Json("ERROR".to_string())
}

#[get("/logout")]
pub fn logout(cookies: &CookieJar) -> Redirect {
  if let Some(token) = cookies.get(TOKEN_COOKIE) {
    SESSIONS.remove(token.value());
  }
  cookies.remove(TOKEN_COOKIE);
  Redirect::to(uri!(crate::static_pages::login_page))
}
