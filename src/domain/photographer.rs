//! Photographer domain model.

use crate::domain::media::MEDIA_ROOT;
use serde::{Deserialize, Serialize};

/// Folder holding every photographer portrait.
const PORTRAIT_FOLDER: &str = "Photographers ID Photos";

/// A photographer listed in the catalog.
///
/// Field names follow the catalog document, so the type deserializes directly from
/// the `photographers` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photographer {
    pub id: u64,
    pub name: String,
    pub city: String,
    pub country: String,
    pub tagline: String,
    /// Daily rate in euros.
    pub price: u32,
    /// File name of the portrait picture.
    pub portrait: String,
}

impl Photographer {
    /// Returns the media folder name for this photographer.
    ///
    /// Media folders are named after the first given name, with hyphens turned into
    /// spaces: "Mimi Keel" lives in `Mimi`, "Ellie-Rose Wilkens" in `Ellie Rose`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fisheye::domain::Photographer;
    ///
    /// let photographer = Photographer {
    ///     id: 243,
    ///     name: "Ellie-Rose Wilkens".to_string(),
    ///     city: "Paris".to_string(),
    ///     country: "France".to_string(),
    ///     tagline: "Capturing complex compositions".to_string(),
    ///     price: 250,
    ///     portrait: "EllieRoseWilkens.jpg".to_string(),
    /// };
    /// assert_eq!(photographer.asset_folder(), "Ellie Rose");
    /// ```
    #[must_use]
    pub fn asset_folder(&self) -> String {
        self.name
            .split_whitespace()
            .next()
            .unwrap_or(&self.name)
            .replace('-', " ")
    }

    /// Relative path of the portrait picture.
    #[must_use]
    pub fn portrait_path(&self) -> String {
        format!("{MEDIA_ROOT}/{PORTRAIT_FOLDER}/{}", self.portrait)
    }

    /// "City, Country" line shown under the name.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    /// Daily rate label, e.g. `400€ / day`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("{}€ / day", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photographer(name: &str) -> Photographer {
        Photographer {
            id: 1,
            name: name.to_string(),
            city: "London".to_string(),
            country: "UK".to_string(),
            tagline: "Voir le beau dans le quotidien".to_string(),
            price: 400,
            portrait: "MimiKeel.jpg".to_string(),
        }
    }

    #[test]
    fn asset_folder_takes_first_name() {
        assert_eq!(photographer("Mimi Keel").asset_folder(), "Mimi");
        assert_eq!(photographer("Marcel Nikolic").asset_folder(), "Marcel");
    }

    #[test]
    fn asset_folder_replaces_hyphens() {
        assert_eq!(photographer("Ellie-Rose Wilkens").asset_folder(), "Ellie Rose");
    }

    #[test]
    fn labels_are_formatted() {
        let p = photographer("Mimi Keel");
        assert_eq!(p.location(), "London, UK");
        assert_eq!(p.price_label(), "400€ / day");
        assert_eq!(
            p.portrait_path(),
            "assets/photographers/Photographers ID Photos/MimiKeel.jpg"
        );
    }
}
