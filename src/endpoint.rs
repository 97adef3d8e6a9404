use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::client::RequestError;

/// RFC 3986 unreserved characters pass through; everything else is escaped,
/// so a space becomes `%20` rather than `+`.
const SEARCH_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A path segment under the API root plus an optional free-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoint {
    pub term: String,
    pub search: String,
}

impl Endpoint {
    pub fn new(term: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            search: search.into(),
        }
    }

    pub fn root() -> Self {
        Self::default()
    }
}

/// Resolve `endpoint` against `base`.
///
/// The term is appended verbatim; only the search term is encoded, into a
/// single `search` query parameter. Nothing is validated beyond what
/// [`Url::parse`] rejects.
pub fn build_url(base: &str, endpoint: &Endpoint) -> Result<Url, RequestError> {
    if endpoint.term.is_empty() && endpoint.search.is_empty() {
        return Ok(Url::parse(base)?);
    }

    let mut url = Url::parse(&format!("{}{}", base, endpoint.term))?;
    if !endpoint.search.is_empty() {
        let encoded = utf8_percent_encode(&endpoint.search, SEARCH_VALUE);
        url.set_query(Some(&format!("search={}", encoded)));
    }

    Ok(url)
}
