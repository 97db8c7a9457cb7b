//! Media domain model.
//!
//! A [`Media`] is one photo or video of a photographer. Media are immutable once
//! loaded from the catalog; the like count stored here is the catalog baseline and
//! never includes the local viewer's own like (see
//! [`GalleryViewState::displayed_likes`](crate::app::GalleryViewState::displayed_likes)).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Root directory holding every photographer's media folder.
pub const MEDIA_ROOT: &str = "assets/photographers";

/// Identifier of a media item, unique within the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(pub u64);

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of a media item together with its file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    /// Still image (`image` key in the catalog).
    Image(String),
    /// Video clip (`video` key in the catalog).
    Video(String),
}

impl MediaKind {
    /// File name of the underlying asset.
    #[must_use]
    pub fn file_name(&self) -> &str {
        match self {
            Self::Image(file) | Self::Video(file) => file,
        }
    }

    /// Short label used by the renderer.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Image(_) => "image",
            Self::Video(_) => "video",
        }
    }
}

/// A photo or video belonging to exactly one photographer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub id: MediaId,
    pub photographer_id: u64,
    pub title: String,
    pub kind: MediaKind,
    /// Baseline like count from the catalog.
    pub likes: u32,
    pub date: NaiveDate,
    /// Carried for completeness; nothing in the gallery reads it.
    pub price: u32,
}

impl Media {
    /// Builds an image media, mostly useful in tests and fixtures.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use fisheye::domain::{Media, MediaId};
    ///
    /// let date = NaiveDate::from_ymd_opt(2019, 4, 3).unwrap_or_default();
    /// let media = Media::image(MediaId(7), 82, "Sunset", 12, date);
    /// assert_eq!(media.kind.file_name(), "Sunset.jpg");
    /// ```
    #[must_use]
    pub fn image(id: MediaId, photographer_id: u64, title: &str, likes: u32, date: NaiveDate) -> Self {
        Self {
            id,
            photographer_id,
            title: title.to_string(),
            kind: MediaKind::Image(format!("{title}.jpg")),
            likes,
            date,
            price: 0,
        }
    }

    /// Returns the relative asset path of this media inside `folder`.
    ///
    /// `folder` is usually [`Photographer::asset_folder`](crate::domain::Photographer::asset_folder).
    #[must_use]
    pub fn asset_path(&self, folder: &str) -> String {
        format!("{MEDIA_ROOT}/{folder}/{}", self.kind.file_name())
    }

    /// Returns `true` for video media.
    #[must_use]
    pub const fn is_video(&self) -> bool {
        matches!(self.kind, MediaKind::Video(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date")
    }

    #[test]
    fn asset_path_uses_folder_and_file_name() {
        let media = Media {
            kind: MediaKind::Video("Surf.mp4".to_string()),
            ..Media::image(MediaId(1), 2, "Surf", 3, date())
        };

        assert_eq!(media.asset_path("Ellie Rose"), "assets/photographers/Ellie Rose/Surf.mp4");
        assert!(media.is_video());
    }

    #[test]
    fn media_id_displays_as_plain_integer() {
        assert_eq!(MediaId(342_550).to_string(), "342550");
    }
}
