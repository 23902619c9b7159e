//! Query parameter merging

use crate::builder::core::{RequestBuilder, Step};

/// Multi-valued query parameter input keyed by parameter name
pub type Params = hashbrown::HashMap<String, Vec<String>>;

impl RequestBuilder {
    /// Append `params` to the request's query string
    ///
    /// Values already in the URL are kept and the new ones follow them under
    /// the same key. The query is re-encoded with keys in ascending order.
    /// The resulting URL length is not checked.
    ///
    /// # Examples
    /// ```
    /// use apiclient::{RequestBuilder, must_get};
    ///
    /// let request = RequestBuilder::new()
    ///     .with_params([("tag", ["b", "c"]), ("limit", ["10", "20"])])
    ///     .must_apply(must_get("https://example.com/search?tag=a"));
    /// assert_eq!(request.url().query(), Some("limit=10&limit=20&tag=a&tag=b&tag=c"));
    /// ```
    ///
    /// Arrays in one literal must share a length. Use `Vec` when keys carry
    /// different numbers of values:
    /// ```
    /// use apiclient::{RequestBuilder, must_get};
    ///
    /// let request = RequestBuilder::new()
    ///     .with_params([("page", vec!["1"]), ("tag", vec!["rust", "http"])])
    ///     .must_apply(must_get("https://example.com/search"));
    /// assert_eq!(request.url().query(), Some("page=1&tag=rust&tag=http"));
    /// ```
    #[must_use]
    pub fn with_params<I, K, T, V>(self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let params: Vec<(String, Vec<String>)> = params
            .into_iter()
            .map(|(key, values)| {
                let values = values.into_iter().map(|v| v.as_ref().to_owned()).collect();
                (key.as_ref().to_owned(), values)
            })
            .collect();
        self.push(Step::AppendParams(params))
    }
}
