use crate::store::{Namespace, Store};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:46.0) Gecko/20100101 Firefox/46.0";
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";
const CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";
const NO_CACHE: &str = "no-cache";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP client error")]
    Http(#[from] reqwest::Error),
    #[error("Store error")]
    Store(#[from] crate::store::Error),
}

/// A parsed page, with where its markup came from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Page<T> {
    /// Read from the page cache without a request.
    Cached(T),
    /// Downloaded and written to the page cache.
    Fetched(T),
    /// Downloaded but not accepted for caching.
    Rejected(T),
    /// The request returned a bad status or an empty body.
    Unavailable,
}

impl<T> Page<T> {
    #[must_use]
    pub fn into_parsed(self) -> Option<T> {
        match self {
            Self::Cached(parsed) | Self::Fetched(parsed) | Self::Rejected(parsed) => Some(parsed),
            Self::Unavailable => None,
        }
    }

    /// Whether obtaining this page involved a network request.
    #[must_use]
    pub const fn is_requested(&self) -> bool {
        !matches!(self, Self::Cached(_))
    }
}

/// Page fetcher presenting itself as a desktop browser.
#[derive(Clone)]
pub struct Client {
    underlying: reqwest::Client,
}

impl Client {
    /// Build a client, optionally bounding each request by `timeout`.
    ///
    /// `Accept-Encoding` is left to reqwest so that compressed bodies are decoded.
    pub fn new(timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .user_agent(USER_AGENT);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            underlying: builder.build()?,
        })
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE),
        );
        headers.insert(HeaderName::from_static("dnt"), HeaderValue::from_static("1"));
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE));
        headers.insert(header::PRAGMA, HeaderValue::from_static(NO_CACHE));
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(NO_CACHE));

        headers
    }

    /// The scheme and host of the given URL, with a trailing slash.
    #[must_use]
    pub fn referer(url: &str) -> Option<String> {
        let parsed = url::Url::parse(url).ok()?;
        let host = parsed.host_str()?;

        Some(format!("{}://{host}/", parsed.scheme()))
    }

    /// Download a page, returning `None` for a non-OK status or an empty body.
    pub async fn fetch(&self, url: &str) -> Result<Option<String>, Error> {
        log::info!("Downloading {url}");

        let mut request = self.underlying.get(url);

        if let Some(referer) = Self::referer(url) {
            request = request.header(header::REFERER, referer);
        }

        let response = request.send().await?;
        let status_code = response.status();

        if status_code != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            log::error!("HTTP error {} {body}", status_code.as_u16());

            return Ok(None);
        }

        let body = response.text().await?;

        if body.is_empty() {
            log::error!("Empty response body for {url}");

            Ok(None)
        } else {
            Ok(Some(body))
        }
    }

    /// Download a page through the page cache and parse it.
    ///
    /// The markup is parsed once, and freshly downloaded markup is only cached if `accept`
    /// returns true for the parsed value.
    pub async fn fetch_cached<T, P, A>(
        &self,
        store: &Store,
        url: &str,
        parse: P,
        accept: A,
    ) -> Result<Page<T>, Error>
    where
        P: Fn(&str) -> T,
        A: Fn(&T) -> bool,
    {
        if let Some(markup) = store
            .read(url, Namespace::Pages)?
            .filter(|markup| !markup.trim().is_empty())
        {
            return Ok(Page::Cached(parse(&markup)));
        }

        match self.fetch(url).await? {
            Some(markup) => {
                let parsed = parse(&markup);

                if accept(&parsed) {
                    store.write(url, Namespace::Pages, markup)?;

                    Ok(Page::Fetched(parsed))
                } else {
                    Ok(Page::Rejected(parsed))
                }
            }
            None => Ok(Page::Unavailable),
        }
    }
}
