//! Shared query infrastructure: the [`Query`] trait.

use url::Url;

/// Trait implemented by all filter builders. Unset fields are omitted from
/// the query string entirely, matching the API's treatment of absent
/// parameters.
pub trait Query {
    /// Appends this filter's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}
