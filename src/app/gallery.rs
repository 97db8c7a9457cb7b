//! Media of the current photographer page, in display order.
//!
//! [`GalleryViewState`] owns the working set of media for one page lifecycle and
//! the active [`SortOrder`]. Displayed like counts are never stored: they are
//! derived from the catalog baseline and the [`LikeStateStore`] every time they
//! are read, so the counter and the liked set cannot drift apart.
//!
//! Likes that could not be persisted (storage unavailable) are remembered for the
//! rest of the page lifecycle so the counter still moves exactly once.

use crate::domain::{Media, MediaId, SortOrder};
use crate::storage::LikeStateStore;
use std::collections::HashSet;

/// Result of a like request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    /// The media was already liked; nothing changed.
    AlreadyLiked,
    /// The id is not part of the working set.
    NotFound,
    /// The media is now liked.
    Liked {
        /// New displayed count of the liked media.
        displayed: u32,
        /// Recomputed total over the working set.
        total: u64,
    },
}

/// Ordered media list of a photographer page.
#[derive(Debug, Clone, Default)]
pub struct GalleryViewState {
    media: Vec<Media>,
    order: SortOrder,
    view: Vec<Media>,
    session_likes: HashSet<MediaId>,
}

impl GalleryViewState {
    /// Creates a view over `media` in the default order.
    #[must_use]
    pub fn new(media: Vec<Media>) -> Self {
        let mut state = Self::default();
        state.set_media(media);
        state
    }

    /// Replaces the working set and starts a new page lifecycle.
    pub fn set_media(&mut self, media: Vec<Media>) {
        tracing::debug!(count = media.len(), "gallery media replaced");
        self.media = media;
        self.session_likes.clear();
        self.view = self.sorted_view(self.order);
    }

    /// Returns the working set sorted by `order`. Pure: the working set is not touched.
    #[must_use]
    pub fn sorted_view(&self, order: SortOrder) -> Vec<Media> {
        order.apply(&self.media)
    }

    /// Makes `order` the active order and recomputes the view.
    pub fn set_order(&mut self, order: SortOrder) {
        tracing::debug!(order = %order, "gallery sort order changed");
        self.order = order;
        self.view = self.sorted_view(order);
    }

    /// The active sort order.
    #[must_use]
    pub const fn order(&self) -> SortOrder {
        self.order
    }

    /// The working set in the active order.
    #[must_use]
    pub fn view(&self) -> &[Media] {
        &self.view
    }

    /// Looks up a media of the working set.
    #[must_use]
    pub fn get(&self, id: MediaId) -> Option<&Media> {
        self.media.iter().find(|m| m.id == id)
    }

    fn is_liked(&self, id: MediaId, likes: &LikeStateStore) -> bool {
        self.session_likes.contains(&id) || likes.is_liked(id)
    }

    /// Returns `true` if the local viewer liked `media`.
    #[must_use]
    pub fn liked(&self, media: &Media, likes: &LikeStateStore) -> bool {
        self.is_liked(media.id, likes)
    }

    /// Like count shown for `media`: the baseline plus one if the viewer liked it.
    #[must_use]
    pub fn displayed_likes(&self, media: &Media, likes: &LikeStateStore) -> u32 {
        if self.is_liked(media.id, likes) {
            media.likes.saturating_add(1)
        } else {
            media.likes
        }
    }

    /// Sum of the displayed like counts over the working set.
    #[must_use]
    pub fn total_likes(&self, likes: &LikeStateStore) -> u64 {
        self.media
            .iter()
            .map(|m| u64::from(self.displayed_likes(m, likes)))
            .sum()
    }

    /// Likes `id` on behalf of the local viewer.
    ///
    /// At most once per media: a second like is reported as
    /// [`LikeOutcome::AlreadyLiked`] and changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use fisheye::app::{GalleryViewState, LikeOutcome};
    /// use fisheye::domain::{Media, MediaId};
    /// use fisheye::storage::{LikeStateStore, MemoryStore};
    ///
    /// let d = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap_or_default();
    /// let mut gallery = GalleryViewState::new(vec![Media::image(MediaId(1), 9, "Dune", 10, d)]);
    /// let mut likes = LikeStateStore::new(Box::new(MemoryStore::default()));
    ///
    /// assert_eq!(gallery.like(MediaId(1), &mut likes), LikeOutcome::Liked { displayed: 11, total: 11 });
    /// assert_eq!(gallery.like(MediaId(1), &mut likes), LikeOutcome::AlreadyLiked);
    /// ```
    pub fn like(&mut self, id: MediaId, likes: &mut LikeStateStore) -> LikeOutcome {
        let _span = tracing::debug_span!("gallery_like", media_id = %id).entered();

        let Some(baseline) = self.get(id).map(|m| m.likes) else {
            tracing::debug!("like ignored: media not in view");
            return LikeOutcome::NotFound;
        };

        if self.is_liked(id, likes) {
            return LikeOutcome::AlreadyLiked;
        }

        if !likes.mark_liked(id) {
            tracing::debug!("like not persisted, keeping it for this page");
            self.session_likes.insert(id);
        }

        let displayed = baseline.saturating_add(1);
        let total = self.total_likes(likes);
        tracing::debug!(displayed, total, "media liked");

        LikeOutcome::Liked { displayed, total }
    }
}
