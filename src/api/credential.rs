//! Request augmentation: fixed API credential as a query parameter
//!
//! Installed once on the outermost client so every outgoing request,
//! regardless of path or method, carries the credential exactly once.

use http::Extensions;
use reqwest::{Request, Response, Url};
use reqwest_middleware::{Middleware, Next};

/// Middleware that appends the fixed `appid` credential to every request
pub struct ApiKeyMiddleware {
    key: String,
}

impl ApiKeyMiddleware {
    /// Create a new credential middleware for the given API key
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Append the credential to a URL's query string, leaving all existing
/// parameters in place. Pure transformation; cannot fail.
fn append_credential(url: &mut Url, key: &str) {
    url.query_pairs_mut().append_pair("appid", key);
}

#[async_trait::async_trait]
impl Middleware for ApiKeyMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        append_credential(req.url_mut(), &self.key);
        next.run(req, extensions).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_credential_to_bare_url() {
        let mut url = Url::parse("https://api.example.com/data/2.5/weather").unwrap();
        append_credential(&mut url, "secret123");
        assert_eq!(url.query(), Some("appid=secret123"));
    }

    #[test]
    fn test_preserves_existing_query_parameters() {
        let mut url =
            Url::parse("https://api.example.com/data/2.5/weather?q=Kazan&units=metric").unwrap();
        append_credential(&mut url, "secret123");
        assert_eq!(url.query(), Some("q=Kazan&units=metric&appid=secret123"));
    }

    #[test]
    fn test_credential_is_percent_encoded() {
        let mut url = Url::parse("https://api.example.com/weather").unwrap();
        append_credential(&mut url, "se cret&key");
        assert_eq!(url.query(), Some("appid=se+cret%26key"));
    }
}
