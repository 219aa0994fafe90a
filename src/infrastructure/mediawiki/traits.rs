/// MediaWiki API trait definitions

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::error::ApiError;

/// Query string parameters of one API request
pub type QueryParams = Vec<(&'static str, String)>;

/// Read-only access to a MediaWiki action API
///
/// Implementations are shared by reference across worker threads.
pub trait WikiApi: Send + Sync {
    /// Performs one request and returns the raw JSON document
    ///
    /// `format=json` is implied. Implementations do not need to inspect the
    /// document for API-level errors; [`WikiApi::query_as`] does that.
    fn query(&self, params: &QueryParams) -> Result<Value, ApiError>;

    /// Performs one request and decodes the document into `T`
    ///
    /// A document carrying an `error` object becomes [`ApiError::Api`].
    fn query_as<T: DeserializeOwned>(&self, params: &QueryParams) -> Result<T, ApiError>
    where
        Self: Sized,
    {
        let doc = self.query(params)?;
        let doc = check_api_error(doc)?;
        Ok(serde_json::from_value(doc)?)
    }
}

/// Maps an `{"error": {"code": .., "info": ..}}` document to an error
pub fn check_api_error(doc: Value) -> Result<Value, ApiError> {
    if let Some(error) = doc.get("error") {
        let field = |name: &str| {
            error
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string()
        };
        return Err(ApiError::Api {
            code: field("code"),
            info: field("info"),
        });
    }
    Ok(doc)
}
