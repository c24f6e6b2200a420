//! GitHub gist lookups: wire types, errors, and the HTTP client.

mod client;
mod error;
mod types;

use std::future::Future;

pub use client::GistClient;
pub use error::{FetchError, INIT_FAILED_MESSAGE, Result, SEARCH_FAILED_MESSAGE};
pub use types::{ForkOwner, Gist, GistFile, GistFork, GistRecord};

use crate::languages::LanguageEntry;

/// The outbound calls the fetch worker depends on.
///
/// The real implementation is [`GistClient`]; tests drive the worker with a
/// stub so the whole pipeline runs without a network.
pub trait GistSource: Send + Sync + 'static {
    /// List a user's public gists.
    fn user_gists(&self, username: &str) -> impl Future<Output = Result<Vec<Gist>>> + Send;

    /// List the forks of one gist via its `forks_url`.
    fn gist_forks(&self, forks_url: &str) -> impl Future<Output = Result<Vec<GistFork>>> + Send;

    /// Load the static extension-to-language document.
    fn language_entries(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<Vec<LanguageEntry>>> + Send;
}
