//! Gallery sort orders.
//!
//! [`SortOrder::apply`] is a pure function over a media slice: it returns a new
//! ordered vector and never touches its input. All orders are deterministic. Title
//! comparisons are case-sensitive lexicographic (`str` ordering).

use crate::domain::media::Media;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Ordering applied to the media of a photographer page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Likes descending, then title ascending.
    #[default]
    Popularity,
    /// Date descending (newest first), then id ascending.
    Date,
    /// Title ascending; equal titles keep their input order.
    Title,
}

impl SortOrder {
    /// Returns a sorted copy of `media`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use fisheye::domain::{Media, MediaId, SortOrder};
    ///
    /// let d = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default();
    /// let media = vec![
    ///     Media::image(MediaId(1), 1, "b", 3, d),
    ///     Media::image(MediaId(2), 1, "a", 5, d),
    ///     Media::image(MediaId(3), 1, "a", 3, d),
    /// ];
    /// let ids: Vec<u64> = SortOrder::Popularity.apply(&media).iter().map(|m| m.id.0).collect();
    /// assert_eq!(ids, vec![2, 3, 1]);
    /// ```
    #[must_use]
    pub fn apply(self, media: &[Media]) -> Vec<Media> {
        let mut sorted = media.to_vec();
        sorted.sort_by(|a, b| self.compare(a, b));
        sorted
    }

    fn compare(self, a: &Media, b: &Media) -> Ordering {
        match self {
            Self::Popularity => b.likes.cmp(&a.likes).then_with(|| a.title.cmp(&b.title)),
            Self::Date => b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)),
            Self::Title => a.title.cmp(&b.title),
        }
    }

    /// Cycles Popularity → Date → Title → Popularity.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Popularity => Self::Date,
            Self::Date => Self::Title,
            Self::Title => Self::Popularity,
        }
    }

    /// Label shown in the sort control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Popularity => "Popularity",
            Self::Date => "Date",
            Self::Title => "Title",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    /// Parses the sort control values `popularity`, `date` and `title`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "popularity" | "popularite" | "likes" => Ok(Self::Popularity),
            "date" => Ok(Self::Date),
            "title" | "titre" => Ok(Self::Title),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::MediaId;
    use chrono::NaiveDate;

    fn media(id: u64, title: &str, likes: u32, ymd: (i32, u32, u32)) -> Media {
        let date = NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).expect("valid date");
        Media::image(MediaId(id), 1, title, likes, date)
    }

    fn ids(list: &[Media]) -> Vec<u64> {
        list.iter().map(|m| m.id.0).collect()
    }

    #[test]
    fn popularity_breaks_ties_by_title() {
        let list = vec![
            media(1, "b", 3, (2020, 1, 1)),
            media(2, "a", 5, (2020, 1, 1)),
            media(3, "a", 3, (2020, 1, 1)),
        ];

        assert_eq!(ids(&SortOrder::Popularity.apply(&list)), vec![2, 3, 1]);
    }

    #[test]
    fn popularity_title_tie_break_is_case_sensitive() {
        let list = vec![media(1, "apple", 3, (2020, 1, 1)), media(2, "Zebra", 3, (2020, 1, 1))];

        assert_eq!(ids(&SortOrder::Popularity.apply(&list)), vec![2, 1]);
    }

    #[test]
    fn date_sorts_newest_first_then_by_id() {
        let list = vec![
            media(9, "old", 1, (2018, 5, 1)),
            media(7, "new-b", 1, (2022, 2, 2)),
            media(4, "new-a", 1, (2022, 2, 2)),
        ];

        assert_eq!(ids(&SortOrder::Date.apply(&list)), vec![4, 7, 9]);
    }

    #[test]
    fn title_sort_is_stable_for_equal_titles() {
        let list = vec![
            media(5, "Same", 1, (2020, 1, 1)),
            media(2, "Alpha", 1, (2020, 1, 1)),
            media(3, "Same", 9, (2021, 1, 1)),
        ];

        assert_eq!(ids(&SortOrder::Title.apply(&list)), vec![2, 5, 3]);
    }

    #[test]
    fn apply_does_not_mutate_input() {
        let list = vec![media(1, "b", 1, (2020, 1, 1)), media(2, "a", 2, (2020, 1, 1))];
        let before = list.clone();

        let _ = SortOrder::Title.apply(&list);

        assert_eq!(list, before);
    }

    #[test]
    fn parses_control_values() {
        assert_eq!("date".parse::<SortOrder>(), Ok(SortOrder::Date));
        assert_eq!(" Title ".parse::<SortOrder>(), Ok(SortOrder::Title));
        assert_eq!("popularity".parse::<SortOrder>(), Ok(SortOrder::Popularity));
        assert!("price".parse::<SortOrder>().is_err());
    }

    #[test]
    fn next_cycles_through_all_orders() {
        let order = SortOrder::Popularity;
        assert_eq!(order.next(), SortOrder::Date);
        assert_eq!(order.next().next(), SortOrder::Title);
        assert_eq!(order.next().next().next(), SortOrder::Popularity);
    }
}
