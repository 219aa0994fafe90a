/// WikiProject Lookup Service
///
/// Builds the two queries the tools make against the action API:
/// - page info for `Wikipedia:<name>` (existence, redirect, length)
/// - redirects to `Template:<name>` (template aliases), following `continue`
///
/// ## Usage
/// ```rust,ignore
/// use wikiproject_taxonomy::application::services::WikiProjectLookup;
/// use wikiproject_taxonomy::infrastructure::MediaWikiClient;
/// use wikiproject_taxonomy::shared::ApiConfig;
///
/// let client = MediaWikiClient::new(&ApiConfig::default())?;
/// let lookup = WikiProjectLookup::new(client);
/// let info = lookup.page_info("WikiProject Physics")?;
/// ```

use serde_json::Value;

use crate::domain::templates::{TemplateLookup, TEMPLATE_NAMESPACE, TEMPLATE_PREFIX};
use crate::infrastructure::mediawiki::{QueryParams, WikiApi};
use crate::shared::error::ApiError;
use crate::shared::protocol::{InfoPage, LinksHerePage, QueryResponse};

/// Namespace prefix of WikiProject pages
pub const PROJECT_PREFIX: &str = "Wikipedia:";

/// Redirects requested per batch
pub const LINKSHERE_LIMIT: u32 = 500;

/// Upper bound on `continue` round trips for one template
const MAX_BATCHES: usize = 100;

/// Lookup service, generic over the API implementation
pub struct WikiProjectLookup<A: WikiApi> {
    api: A,
}

impl<A: WikiApi> WikiProjectLookup<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Page info of `Wikipedia:<name>`, following redirects
    pub fn page_info(&self, name: &str) -> Result<QueryResponse<InfoPage>, ApiError> {
        let params: QueryParams = vec![
            ("action", "query".to_string()),
            ("prop", "info".to_string()),
            ("titles", format!("{}{}", PROJECT_PREFIX, name)),
            ("redirects", "1".to_string()),
            ("formatversion", "2".to_string()),
        ];
        self.api.query_as(&params)
    }

    /// Templates associated with WikiProject `name`
    pub fn templates(&self, name: &str) -> Result<TemplateLookup, ApiError> {
        tracing::debug!("Requesting redirects to {}{}", TEMPLATE_PREFIX, name);

        let base: QueryParams = vec![
            ("action", "query".to_string()),
            ("prop", "linkshere".to_string()),
            ("lhshow", "redirect".to_string()),
            ("lhnamespace", TEMPLATE_NAMESPACE.to_string()),
            ("lhlimit", LINKSHERE_LIMIT.to_string()),
            ("redirects", "1".to_string()),
            ("titles", format!("{}{}", TEMPLATE_PREFIX, name)),
            ("formatversion", "2".to_string()),
        ];

        let mut lookup = TemplateLookup::default();
        let mut params = base.clone();

        for batch in 0..MAX_BATCHES {
            let response: QueryResponse<LinksHerePage> = self.api.query_as(&params)?;
            let page = response.first_page().ok_or_else(|| {
                ApiError::Malformed(format!("no pages for {}{}", TEMPLATE_PREFIX, name))
            })?;
            lookup.absorb(page, batch == 0);

            let Some(continuation) = response.continuation else {
                return Ok(lookup);
            };
            params = base.clone();
            params.extend(continuation_params(&continuation));
        }

        tracing::warn!(
            "Stopped following continuation for {}{} after {} batches",
            TEMPLATE_PREFIX,
            name,
            MAX_BATCHES
        );
        Ok(lookup)
    }
}

/// Converts a `continue` object into query parameters
///
/// Only the `continue` keys the linkshere query can produce are forwarded;
/// parameter names must be `'static`.
fn continuation_params(continuation: &serde_json::Map<String, Value>) -> QueryParams {
    const KNOWN: [&str; 2] = ["continue", "lhcontinue"];

    KNOWN
        .iter()
        .filter_map(|key| {
            let value = continuation.get(*key)?;
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some((*key, value))
        })
        .collect()
}
