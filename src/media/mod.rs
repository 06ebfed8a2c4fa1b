//! Session-scoped registry for ephemeral image references.
//!
//! When the user names a local file in the add-item form, the plugin does not
//! read or copy it. Instead the [`MediaStore`] issues an opaque `media://`
//! URI bound to the source path for the lifetime of the session, and the URI
//! is what flows into staged form state and, on submission, into the item
//! itself.
//!
//! Handles follow an explicit acquire/release discipline:
//!
//! - the form releases staged handles that are removed or abandoned before
//!   submission;
//! - submission transfers staged handles into the new item, after which they
//!   live until the session ends (nothing releases an item's images; the
//!   whole registry is discarded with the process).
//!
//! Releasing is idempotent per URI; resolving a released URI yields `None`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Opaque session-scoped image reference issued by [`MediaStore::acquire`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaUri(String);

impl MediaUri {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the handle, yielding the raw URI string.
    ///
    /// Used when a staged handle transfers into an item on submission.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for MediaUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registry mapping live `media://` URIs back to their source paths.
#[derive(Debug, Default)]
pub struct MediaStore {
    next_handle: u64,
    entries: HashMap<String, PathBuf>,
}

impl MediaStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh URI for a user-named source path.
    ///
    /// The same path acquired twice yields two distinct URIs with independent
    /// lifetimes, mirroring how each file selection in the original flow got
    /// its own reference.
    pub fn acquire(&mut self, source: PathBuf) -> MediaUri {
        let uri = format!("media://{}", self.next_handle);
        self.next_handle += 1;

        tracing::debug!(uri = %uri, source = %source.display(), "acquired media handle");
        self.entries.insert(uri.clone(), source);
        MediaUri(uri)
    }

    /// Frees a handle. Returns `false` when the URI was already released.
    pub fn release(&mut self, uri: &MediaUri) -> bool {
        let released = self.entries.remove(&uri.0).is_some();
        tracing::debug!(uri = %uri, released, "released media handle");
        released
    }

    /// Maps a live URI back to its source path for display.
    ///
    /// Accepts the raw URI string so item-held references (plain strings)
    /// resolve the same way staged handles do. Non-`media://` URIs and
    /// released handles yield `None`.
    #[must_use]
    pub fn resolve(&self, uri: &str) -> Option<&Path> {
        self.entries.get(uri).map(PathBuf::as_path)
    }

    /// Number of live handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_resolve_release_round_trip() {
        let mut media = MediaStore::new();
        let uri = media.acquire(PathBuf::from("/home/user/photos/shirt.jpg"));

        assert!(uri.as_str().starts_with("media://"));
        assert_eq!(
            media.resolve(uri.as_str()),
            Some(Path::new("/home/user/photos/shirt.jpg"))
        );

        assert!(media.release(&uri));
        assert!(media.resolve(uri.as_str()).is_none());
    }

    #[test]
    fn release_is_idempotent_per_uri() {
        let mut media = MediaStore::new();
        let uri = media.acquire(PathBuf::from("/tmp/a.png"));

        assert!(media.release(&uri));
        assert!(!media.release(&uri));
        assert!(media.is_empty());
    }

    #[test]
    fn same_path_gets_independent_handles() {
        let mut media = MediaStore::new();
        let first = media.acquire(PathBuf::from("/tmp/a.png"));
        let second = media.acquire(PathBuf::from("/tmp/a.png"));

        assert_ne!(first, second);
        assert!(media.release(&first));
        // The second handle survives the first one's release.
        assert!(media.resolve(second.as_str()).is_some());
    }

    #[test]
    fn foreign_uris_do_not_resolve() {
        let media = MediaStore::new();
        assert!(media.resolve("https://example.com/cover.jpg").is_none());
    }
}
