//! Typed views of the GitHub gist API payloads.
//!
//! Deserialization happens at the response boundary; anything that does not
//! fit these shapes surfaces as a `MalformedResponse` error instead of being
//! poked at dynamically.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One public gist as returned by `GET /users/{username}/gists`.
#[derive(Debug, Clone, Deserialize)]
pub struct Gist {
    pub id: String,
    /// May be `null` or empty; such gists are kept in the result list but
    /// skipped by the renderer.
    pub description: Option<String>,
    pub html_url: String,
    /// Filenames to per-file metadata. `BTreeMap` keeps iteration (and thus
    /// label derivation) deterministic.
    #[serde(default)]
    pub files: BTreeMap<String, GistFile>,
    pub forks_url: String,
}

/// Per-file metadata within a gist. Only fields the UI can use are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GistFile {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub raw_url: Option<String>,
}

/// One fork as returned by the gist's `forks_url`.
#[derive(Debug, Clone, Deserialize)]
pub struct GistFork {
    pub html_url: String,
    pub owner: ForkOwner,
}

/// The owner of a fork.
#[derive(Debug, Clone, Deserialize)]
pub struct ForkOwner {
    pub login: String,
    pub avatar_url: String,
}

/// A gist with its fork listing attached, in original listing order.
///
/// Immutable once assembled; each query cycle replaces records wholesale.
#[derive(Debug, Clone)]
pub struct GistRecord {
    pub gist: Gist,
    pub forks: Vec<GistFork>,
}

impl GistRecord {
    /// Description suitable for display, or `None` when absent or empty.
    #[must_use]
    pub fn display_description(&self) -> Option<&str> {
        self.gist
            .description
            .as_deref()
            .filter(|text| !text.is_empty())
    }

    /// Filenames in deterministic order.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.gist.files.keys().map(String::as_str)
    }
}
