//! Static photographer and media catalog.
//!
//! The catalog is a single JSON document read once at startup:
//!
//! ```json
//! {
//!   "photographers": [
//!     { "id": 243, "name": "Mimi Keel", "city": "London", "country": "UK",
//!       "tagline": "Voir le beau dans le quotidien", "price": 400, "portrait": "MimiKeel.jpg" }
//!   ],
//!   "media": [
//!     { "id": 342550, "photographerId": 243, "title": "Tricks in the air",
//!       "image": "Travel_Tricks_in_the_air.jpg", "likes": 150, "date": "2018-02-12", "price": 55 }
//!   ]
//! }
//! ```
//!
//! [`Catalog::load`] never fails: an unreadable or malformed document is logged and
//! replaced by an empty catalog, which the UI renders as an empty state.

use crate::domain::error::{FisheyeError, Result};
use crate::domain::media::{Media, MediaId, MediaKind};
use crate::domain::photographer::Photographer;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Media entry as it appears in the catalog document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MediaRecord {
    id: u64,
    photographer_id: u64,
    title: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    video: Option<String>,
    #[serde(default)]
    likes: u32,
    date: NaiveDate,
    #[serde(default)]
    price: u32,
}

impl MediaRecord {
    fn into_media(self) -> Option<Media> {
        let kind = match (self.image, self.video) {
            (Some(image), _) => MediaKind::Image(image),
            (None, Some(video)) => MediaKind::Video(video),
            (None, None) => return None,
        };

        Some(Media {
            id: MediaId(self.id),
            photographer_id: self.photographer_id,
            title: self.title,
            kind,
            likes: self.likes,
            date: self.date,
            price: self.price,
        })
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    photographers: Vec<Photographer>,
    #[serde(default)]
    media: Vec<MediaRecord>,
}

/// The loaded photographer and media dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    photographers: Vec<Photographer>,
    media: Vec<Media>,
}

impl Catalog {
    /// Builds a catalog from already-parsed parts.
    ///
    /// Media with an id already seen are dropped so ids stay unique.
    #[must_use]
    pub fn new(photographers: Vec<Photographer>, media: Vec<Media>) -> Self {
        let mut seen = HashSet::with_capacity(media.len());
        let media = media
            .into_iter()
            .filter(|m| {
                let fresh = seen.insert(m.id);
                if !fresh {
                    tracing::warn!(media_id = %m.id, "duplicate media id in catalog, skipping");
                }
                fresh
            })
            .collect();

        Self { photographers, media }
    }

    /// Parses a catalog document.
    ///
    /// Media entries with neither an `image` nor a `video` file are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`FisheyeError::Catalog`] if the document is not valid JSON or does
    /// not have the expected shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)
            .map_err(|e| FisheyeError::Catalog(format!("failed to parse catalog: {e}")))?;

        let media = document
            .media
            .into_iter()
            .filter_map(|record| {
                let id = record.id;
                let media = record.into_media();
                if media.is_none() {
                    tracing::warn!(media_id = id, "media has neither image nor video, skipping");
                }
                media
            })
            .collect();

        Ok(Self::new(document.photographers, media))
    }

    /// Reads and parses the catalog at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn read(path: &Path) -> Result<Self> {
        let _span = tracing::debug_span!("catalog_read", path = ?path).entered();

        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;

        tracing::debug!(
            photographers = catalog.photographers.len(),
            media = catalog.media.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Loads the catalog at `path`, falling back to an empty catalog on failure.
    ///
    /// No retry is attempted.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        Self::read(path).unwrap_or_else(|e| {
            tracing::warn!(path = ?path, error = %e, "catalog fetch failed, using empty catalog");
            Self::default()
        })
    }

    /// All photographers in document order.
    #[must_use]
    pub fn photographers(&self) -> &[Photographer] {
        &self.photographers
    }

    /// All media in document order.
    #[must_use]
    pub fn media(&self) -> &[Media] {
        &self.media
    }

    /// Looks up a photographer by id.
    #[must_use]
    pub fn photographer(&self, id: u64) -> Option<&Photographer> {
        self.photographers.iter().find(|p| p.id == id)
    }

    /// Media belonging to the given photographer, in document order.
    #[must_use]
    pub fn media_for(&self, photographer_id: u64) -> Vec<Media> {
        self.media
            .iter()
            .filter(|m| m.photographer_id == photographer_id)
            .cloned()
            .collect()
    }

    /// Returns `true` when the catalog holds no photographers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photographers.is_empty()
    }
}
