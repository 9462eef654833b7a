use url::Url;

/// Moves the user agent to another page.
pub trait Navigator {
    fn navigate(&self, url: &Url);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, url: &Url) {
        (**self).navigate(url)
    }
}

/// The current page with `error=<message>` appended; existing query pairs are kept.
pub fn error_redirect_url(current: &Url, message: &str) -> Url {
    let mut url = current.clone();
    url.query_pairs_mut().append_pair("error", message);
    url
}
