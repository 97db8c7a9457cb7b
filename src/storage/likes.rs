//! Persisted set of media liked by the local viewer.
//!
//! The liked set is stored as a JSON array of media ids under a single key
//! ([`LIKED_MEDIA_KEY`]). It only ever grows: there is no unlike, only a full
//! [`reset_all`](LikeStateStore::reset_all).
//!
//! Every read goes back to the key-value store, so the set is never cached and a
//! mutation is visible to the next read in program order. Reads fail soft: an
//! unavailable store, a missing key or a corrupt blob all read as the empty set.

use crate::domain::media::MediaId;
use crate::storage::backend::KeyValueStore;

/// Key the liked set is persisted under.
pub const LIKED_MEDIA_KEY: &str = "fisheye_liked_media";

/// Owner of the persisted liked set.
pub struct LikeStateStore {
    store: Box<dyn KeyValueStore>,
}

impl LikeStateStore {
    /// Wraps a key-value store.
    #[must_use]
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Reads the persisted ids, deduplicated, in insertion order.
    fn load(&self) -> Vec<MediaId> {
        let raw = match self.store.get(LIKED_MEDIA_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::debug!(error = %e, "like storage unreadable, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<MediaId>>(&raw) {
            Ok(ids) => {
                let mut unique: Vec<MediaId> = Vec::with_capacity(ids.len());
                for id in ids {
                    if !unique.contains(&id) {
                        unique.push(id);
                    }
                }
                unique
            }
            Err(e) => {
                tracing::warn!(error = %e, "corrupt liked media blob, treating as empty");
                Vec::new()
            }
        }
    }

    /// Returns `true` if `id` is in the persisted liked set.
    #[must_use]
    pub fn is_liked(&self, id: MediaId) -> bool {
        self.load().contains(&id)
    }

    /// Adds `id` to the liked set and persists it.
    ///
    /// Idempotent: liking an already liked id changes nothing. Returns `true` when
    /// the id was newly added. A failure to persist is logged and swallowed; the id
    /// is then not considered persisted.
    ///
    /// # Examples
    ///
    /// ```
    /// use fisheye::domain::MediaId;
    /// use fisheye::storage::{LikeStateStore, MemoryStore};
    ///
    /// let mut likes = LikeStateStore::new(Box::new(MemoryStore::default()));
    /// assert!(likes.mark_liked(MediaId(42)));
    /// assert!(!likes.mark_liked(MediaId(42)));
    /// assert!(likes.is_liked(MediaId(42)));
    /// ```
    pub fn mark_liked(&mut self, id: MediaId) -> bool {
        let _span = tracing::debug_span!("mark_liked", media_id = %id).entered();

        let mut ids = self.load();
        if ids.contains(&id) {
            tracing::debug!("media already liked, ignoring");
            return false;
        }
        ids.push(id);

        let blob = match serde_json::to_string(&ids) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize liked media");
                return false;
            }
        };

        match self.store.set(LIKED_MEDIA_KEY, &blob) {
            Ok(()) => {
                tracing::debug!(liked_count = ids.len(), "media liked");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to persist liked media");
                false
            }
        }
    }

    /// Clears the persisted liked set entirely.
    pub fn reset_all(&mut self) {
        if let Err(e) = self.store.remove(LIKED_MEDIA_KEY) {
            tracing::warn!(error = %e, "failed to reset liked media");
        } else {
            tracing::info!("all likes have been reset");
        }
    }

    /// The deduplicated liked ids in the order they were liked.
    #[must_use]
    pub fn liked_ids(&self) -> Vec<MediaId> {
        self.load()
    }
}

impl std::fmt::Debug for LikeStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LikeStateStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::{MemoryStore, UnavailableStore};

    fn store_with(raw: &str) -> LikeStateStore {
        let mut backend = MemoryStore::default();
        backend.set(LIKED_MEDIA_KEY, raw).expect("set");
        LikeStateStore::new(Box::new(backend))
    }

    #[test]
    fn mark_liked_is_idempotent() {
        let mut likes = LikeStateStore::new(Box::new(MemoryStore::default()));

        assert!(likes.mark_liked(MediaId(1)));
        let once = likes.liked_ids();
        assert!(!likes.mark_liked(MediaId(1)));

        assert_eq!(likes.liked_ids(), once);
        assert_eq!(once, vec![MediaId(1)]);
    }

    #[test]
    fn persisted_blob_is_a_json_array_of_ids() {
        let mut backend = MemoryStore::default();
        backend.set(LIKED_MEDIA_KEY, "[5]").expect("set");
        let mut likes = LikeStateStore::new(Box::new(backend));

        likes.mark_liked(MediaId(9));

        assert_eq!(likes.liked_ids(), vec![MediaId(5), MediaId(9)]);
        assert_eq!(
            likes.store.get(LIKED_MEDIA_KEY).expect("get").as_deref(),
            Some("[5,9]")
        );
    }

    #[test]
    fn corrupt_blob_reads_as_empty() {
        assert!(store_with("{").liked_ids().is_empty());
        assert!(store_with(r#"[1,"x"]"#).liked_ids().is_empty());
        assert!(!store_with(r#"{"ids":[1]}"#).is_liked(MediaId(1)));
    }

    #[test]
    fn corrupt_blob_is_replaced_on_next_like() {
        let mut likes = store_with("not json");

        assert!(likes.mark_liked(MediaId(3)));
        assert_eq!(likes.liked_ids(), vec![MediaId(3)]);
    }

    #[test]
    fn duplicate_ids_on_disk_collapse() {
        assert_eq!(store_with("[4,4,2,4]").liked_ids(), vec![MediaId(4), MediaId(2)]);
    }

    #[test]
    fn reset_all_forgets_everything() {
        let mut likes = LikeStateStore::new(Box::new(MemoryStore::default()));
        likes.mark_liked(MediaId(1));
        likes.mark_liked(MediaId(2));

        likes.reset_all();

        assert!(!likes.is_liked(MediaId(1)));
        assert!(!likes.is_liked(MediaId(2)));
    }

    #[test]
    fn unavailable_storage_means_nothing_is_liked() {
        let mut likes = LikeStateStore::new(Box::new(UnavailableStore::new("no storage")));

        assert!(!likes.is_liked(MediaId(1)));
        assert!(!likes.mark_liked(MediaId(1)));
        likes.reset_all();
        assert!(likes.liked_ids().is_empty());
    }
}
