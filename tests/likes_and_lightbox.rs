use chrono::NaiveDate;
use fisheye::app::lightbox::LightboxState;
use fisheye::app::{GalleryViewState, Interaction, LightboxController, LikeOutcome};
use fisheye::storage::{LikeStateStore, MemoryStore};
use fisheye::{Media, MediaId, SortOrder};
use proptest::prelude::*;

const NOW: i64 = 1_700_000_000_000;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 4, d).unwrap_or_default()
}

fn likes() -> LikeStateStore {
    LikeStateStore::new(Box::new(MemoryStore::default()))
}

/// A(likes=3, "b"), B(likes=5, "a"), C(likes=3, "a").
fn abc() -> Vec<Media> {
    vec![
        Media::image(MediaId(1), 82, "b", 3, day(3)),
        Media::image(MediaId(2), 82, "a", 5, day(1)),
        Media::image(MediaId(3), 82, "a", 3, day(2)),
    ]
}

fn ids(media: &[Media]) -> Vec<u64> {
    media.iter().map(|m| m.id.0).collect()
}

fn open_lightbox_at(index: usize) -> LightboxController {
    let media = abc();
    let mut lightbox = LightboxController::new(2000);
    lightbox.set_media(media.clone());
    lightbox.record_interaction(Interaction::genuine(NOW));
    lightbox.activate(media[index].id, NOW);
    lightbox
}

#[test]
fn popularity_orders_by_likes_then_title() {
    let gallery = GalleryViewState::new(abc());
    assert_eq!(ids(&gallery.sorted_view(SortOrder::Popularity)), vec![2, 3, 1]);
}

#[test]
fn displayed_count_is_baseline_plus_own_like() {
    let mut store = likes();
    let mut gallery = GalleryViewState::new(abc());

    for media in gallery.view() {
        assert_eq!(gallery.displayed_likes(media, &store), media.likes);
    }

    let outcome = gallery.like(MediaId(1), &mut store);
    assert_eq!(outcome, LikeOutcome::Liked { displayed: 4, total: 12 });
    assert_eq!(gallery.like(MediaId(1), &mut store), LikeOutcome::AlreadyLiked);
    assert_eq!(gallery.like(MediaId(99), &mut store), LikeOutcome::NotFound);

    let a = gallery.get(MediaId(1)).cloned().expect("media 1 in view");
    assert_eq!(gallery.displayed_likes(&a, &store), 4);
    assert_eq!(gallery.total_likes(&store), 12);
}

#[test]
fn reset_forgets_every_like() {
    let mut store = likes();
    store.mark_liked(MediaId(1));
    store.mark_liked(MediaId(3));

    store.reset_all();

    assert!(!store.is_liked(MediaId(1)));
    assert!(!store.is_liked(MediaId(3)));
    assert!(store.liked_ids().is_empty());
}

#[test]
fn activating_an_unknown_id_changes_nothing() {
    let mut lightbox = LightboxController::new(2000);
    lightbox.set_media(abc());
    lightbox.record_interaction(Interaction::genuine(NOW));

    assert_eq!(lightbox.activate(MediaId(404), NOW), None);
    assert_eq!(lightbox.state(), LightboxState::Closed);

    let mut lightbox = open_lightbox_at(1);
    assert_eq!(lightbox.activate(MediaId(404), NOW), None);
    assert_eq!(lightbox.state(), LightboxState::Open { index: 1 });
}

#[test]
fn navigation_clamps_at_both_ends() {
    let mut lightbox = open_lightbox_at(0);
    assert_eq!(lightbox.previous(), None);
    assert_eq!(lightbox.state(), LightboxState::Open { index: 0 });

    let nav = lightbox.next().expect("moves forward");
    assert_eq!(nav.index, 1);
    assert!(nav.previous_enabled && nav.next_enabled);

    let mut lightbox = open_lightbox_at(2);
    assert_eq!(lightbox.next(), None);
    assert_eq!(lightbox.state(), LightboxState::Open { index: 2 });
    let nav = lightbox.navigation().expect("open");
    assert!(nav.previous_enabled);
    assert!(!nav.next_enabled);
}

#[test]
fn stale_or_synthetic_gestures_are_rejected() {
    let mut lightbox = LightboxController::new(2000);
    lightbox.set_media(abc());

    lightbox.record_interaction(Interaction::genuine(NOW));
    assert_eq!(lightbox.activate(MediaId(2), NOW + 2001), None);
    assert_eq!(lightbox.state(), LightboxState::Closed);

    lightbox.record_interaction(Interaction::synthetic(NOW));
    assert_eq!(lightbox.activate(MediaId(2), NOW + 10), None);
    assert_eq!(lightbox.state(), LightboxState::Closed);

    lightbox.record_interaction(Interaction::genuine(NOW));
    assert!(lightbox.activate(MediaId(2), NOW + 2000).is_some());
}

fn arb_media() -> impl Strategy<Value = Vec<Media>> {
    prop::collection::vec((0u32..5, "[a-c]{1,2}", 1u32..28), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (likes, title, d))| Media::image(MediaId(i as u64), 82, &title, likes, day(d)))
            .collect()
    })
}

proptest! {
    #[test]
    fn marking_twice_equals_marking_once(ids in prop::collection::vec(0u64..20, 1..10)) {
        let mut once = likes();
        let mut twice = likes();
        for &id in &ids {
            once.mark_liked(MediaId(id));
            twice.mark_liked(MediaId(id));
            prop_assert!(!twice.mark_liked(MediaId(id)));
        }
        prop_assert_eq!(once.liked_ids(), twice.liked_ids());
    }

    #[test]
    fn sorted_views_ignore_input_order(media in arb_media(), order in prop::sample::select(vec![
        SortOrder::Popularity,
        SortOrder::Date,
        SortOrder::Title,
    ])) {
        let mut reversed = media.clone();
        reversed.reverse();

        let forward = order.apply(&media);
        let backward = order.apply(&reversed);

        match order {
            // Date ties fall back to the unique id, so the order is total.
            SortOrder::Date => {
                prop_assert_eq!(ids(&forward), ids(&backward));
            }
            // Equal keys keep input order; only the key sequence is fixed.
            SortOrder::Popularity => {
                let keys = |v: &[Media]| v.iter().map(|m| (m.likes, m.title.clone())).collect::<Vec<_>>();
                prop_assert_eq!(keys(&forward), keys(&backward));
            }
            SortOrder::Title => {
                let titles = |v: &[Media]| v.iter().map(|m| m.title.clone()).collect::<Vec<_>>();
                prop_assert_eq!(titles(&forward), titles(&backward));
            }
        }
        prop_assert_eq!(order.apply(&media), forward);
    }

    #[test]
    fn displayed_likes_track_the_liked_set(media in arb_media(), liked in prop::collection::vec(0u64..12, 0..6)) {
        let mut store = likes();
        let mut gallery = GalleryViewState::new(media);
        for id in liked {
            gallery.like(MediaId(id), &mut store);
        }

        for m in gallery.view() {
            let expected = if store.is_liked(m.id) { m.likes + 1 } else { m.likes };
            prop_assert_eq!(gallery.displayed_likes(m, &store), expected);
        }
    }
}
