/// MediaWiki `action=query` response shapes
///
/// Only the fields the tools read are modelled. Requests are always made
/// with `formatversion=2`, so `pages` is an array and boolean flags such as
/// `missing` are real booleans.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Envelope of a `query` response, generic over the page shape
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse<P> {
    /// Absent when the API could not run the query at all
    #[serde(default)]
    pub query: Option<QueryBody<P>>,

    /// Parameters to send back to fetch the next batch
    #[serde(default, rename = "continue")]
    pub continuation: Option<Map<String, Value>>,
}

/// Body of a `query` response
#[derive(Debug, Clone, Deserialize)]
pub struct QueryBody<P> {
    /// Redirects followed because of `redirects=1`
    #[serde(default)]
    pub redirects: Vec<Redirect>,

    #[serde(default)]
    pub pages: Vec<P>,
}

/// One followed redirect
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Redirect {
    pub to: String,
}

/// Page returned by `prop=info`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InfoPage {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub missing: bool,

    /// Content length in bytes; absent for missing pages
    #[serde(default)]
    pub length: Option<u64>,
}

/// Page returned by `prop=linkshere`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LinksHerePage {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub missing: bool,

    #[serde(default)]
    pub linkshere: Vec<LinkHere>,
}

/// A page linking to (here: redirecting to) the queried page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkHere {
    pub title: String,
}

impl<P> QueryResponse<P> {
    /// First page of the response, if any
    pub fn first_page(&self) -> Option<&P> {
        self.query.as_ref().and_then(|q| q.pages.first())
    }

    /// Target of the first followed redirect, if any
    pub fn redirect_target(&self) -> Option<&str> {
        self.query
            .as_ref()
            .and_then(|q| q.redirects.first())
            .map(|r| r.to.as_str())
    }
}
