use crate::auth_guard::AuthGuard;
use crate::cache_control::NoCache;
use rocket::fs::NamedFile;

// Everything here is refreshed by the in-page poller, so the browser
// cache is kept out of the way.
#[get("/")]
pub async fn index<'a>(_auth: AuthGuard) -> NoCache<Option<NamedFile>> {
  NoCache::new(NamedFile::open("static/main.html").await.ok())
}

#[catch(401)]
pub async fn login<'a>() -> NoCache<Option<NamedFile>> {
  NoCache::new(NamedFile::open("static/login.html").await.ok())
}

#[get("/login")]
pub async fn login_page<'a>() -> NoCache<Option<NamedFile>> {
  NoCache::new(NamedFile::open("static/login.html").await.ok())
}

#[get("/tmon.js")]
pub async fn tmon_js<'a>() -> NoCache<Option<NamedFile>> {
  NoCache::new(NamedFile::open("static/tmon.js").await.ok())
}

#[get("/tmon.css")]
pub async fn tmon_css<'a>() -> NoCache<Option<NamedFile>> {
  NoCache::new(NamedFile::open("static/tmon.css").await.ok())
}
