use rocket::http::Header;
use rocket::response::Responder;

/// Use to wrap a responder when you want to tell the user's
/// browser to keep data private and never cache it.
///
/// For example:
///
/// ```
/// pub async fn index<'a>() -> NoCache<Option<NamedFile>> {
///     NoCache::new(NamedFile::open("static/main.html").await.ok())
/// }
/// ```
#[derive(Responder)]
pub struct NoCache<T> {
    inner: T,
    my_header: Header<'static>,
}
impl<'r, 'o: 'r, T: Responder<'r, 'o>> NoCache<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            my_header: Header::new("cache-control", "no-cache, private"),
        }
    }
}
