//! End-to-end tests for the listing-creation selection flow
//!
//! Covers forward narrowing, reverse resolution from a release, item
//! resolution, bypass mode and submission through a session.

mod common;

use common::*;
use std::sync::Arc;
use wax_listing::catalog::{Album, Artist, CatalogSnapshot, Item, MediaType, Release};
use wax_listing::listing::{
    AlbumSummary, ArtistSummary, ConcreteItem, DraftDefaults, DraftField, ListingSession,
    MemoryListingSink, Owner, Quality, ReleaseSummary, Selection, SelectionError,
    SelectionResolver, SubmissionError, Transition,
};

#[test]
fn test_radiohead_walkthrough() {
    let snapshot = Arc::new(
        CatalogSnapshot::build(vec![Artist {
            id: 1,
            name: "Radiohead".to_owned(),
            albums: vec![Album {
                id: 10,
                title: "OK Computer".to_owned(),
                releases: vec![Release {
                    id: 100,
                    variant: Some("UK Press".to_owned()),
                    media_type: MediaType::Vinyl,
                    items: vec![Item { id: 1000 }],
                }],
            }],
        }])
        .snapshot,
    );
    let mut resolver = SelectionResolver::with_snapshot(snapshot, DraftDefaults::default());

    resolver.select_artist(Some(1)).unwrap();
    let albums: Vec<u64> = resolver.view().album_options.iter().map(|o| o.id).collect();
    assert_eq!(albums, vec![10]);

    resolver.select_album(Some(10)).unwrap();
    let releases: Vec<u64> = resolver.view().release_options.iter().map(|o| o.id).collect();
    assert_eq!(releases, vec![100]);

    resolver.select_release(Some(100)).unwrap();
    let view = resolver.view();
    assert_eq!(
        view.selection,
        Selection {
            artist_id: Some(1),
            album_id: Some(10),
            release_id: Some(100)
        }
    );
    assert_eq!(view.draft.item_id, Some(1000));
    assert!(view.submittable);
}

#[test]
fn test_forward_narrowing_clears_descendants() {
    let mut resolver = make_resolver();
    resolver.select_artist(Some(ARTIST_1_ID)).unwrap();
    resolver.select_album(Some(ALBUM_1_ID)).unwrap();
    resolver.select_artist(Some(ARTIST_2_ID)).unwrap();

    let selection = resolver.selection();
    assert_eq!(selection.artist_id, Some(ARTIST_2_ID));
    assert_eq!(selection.album_id, None);
    assert_eq!(selection.release_id, None);
    assert_eq!(resolver.draft().item_id, None);
}

#[test]
fn test_album_of_other_artist_is_rejected() {
    let mut resolver = make_resolver();
    resolver.select_artist(Some(ARTIST_2_ID)).unwrap();
    let before = resolver.view();

    let result = resolver.select_album(Some(ALBUM_1_ID));
    assert_eq!(
        result,
        Err(SelectionError::AlbumNotUnderArtist {
            album_id: ALBUM_1_ID,
            artist_id: Some(ARTIST_2_ID)
        })
    );
    assert_eq!(resolver.view(), before);
}

#[test]
fn test_album_without_artist_is_rejected() {
    let mut resolver = make_resolver();
    let before = resolver.view();
    assert!(resolver.select_album(Some(ALBUM_1_ID)).is_err());
    assert_eq!(resolver.view(), before);
}

#[test]
fn test_reverse_resolution_for_every_release() {
    for (release_id, artist_id, album_id) in ALL_RELEASES {
        let mut resolver = make_resolver();
        resolver.select_release(Some(release_id)).unwrap();
        assert_eq!(
            resolver.selection(),
            Selection {
                artist_id: Some(artist_id),
                album_id: Some(album_id),
                release_id: Some(release_id)
            }
        );
    }
}

#[test]
fn test_first_item_is_taken() {
    let mut resolver = make_resolver();
    resolver.select_release(Some(RELEASE_2_ID)).unwrap();
    assert_eq!(resolver.draft().item_id, Some(ITEM_2_ID));
    assert!(resolver.is_submittable());
}

#[test]
fn test_release_without_items_is_selectable_but_not_submittable() {
    let mut resolver = make_resolver();
    assert_eq!(
        resolver.select_release(Some(RELEASE_3_ID)),
        Ok(Transition::Changed)
    );
    assert_eq!(resolver.selection().release_id, Some(RELEASE_3_ID));
    assert_eq!(resolver.draft().item_id, None);
    assert!(!resolver.view().submittable);
}

#[test]
fn test_reselection_is_idempotent() {
    let mut resolver = make_resolver();
    resolver.select_artist(Some(ARTIST_1_ID)).unwrap();
    resolver.select_album(Some(ALBUM_1_ID)).unwrap();
    resolver.select_release(Some(RELEASE_1_ID)).unwrap();
    resolver.update_draft_field(DraftField::Price(30.0));
    let before = serde_json::to_string(&resolver.view()).unwrap();

    assert_eq!(
        resolver.select_artist(Some(ARTIST_1_ID)),
        Ok(Transition::Unchanged)
    );
    assert_eq!(
        resolver.select_album(Some(ALBUM_1_ID)),
        Ok(Transition::Unchanged)
    );
    assert_eq!(
        resolver.select_release(Some(RELEASE_1_ID)),
        Ok(Transition::Unchanged)
    );
    assert_eq!(serde_json::to_string(&resolver.view()).unwrap(), before);
}

#[test]
fn test_bypass_mode_leaves_cascading_state_alone() {
    let mut resolver = SelectionResolver::new(
        None,
        DraftDefaults {
            seller_id: Some(SELLER_ID),
            ..Default::default()
        },
    );
    resolver.bind_to_concrete_item(ConcreteItem {
        id: ITEM_4_ID,
        owner: Owner {
            id: 3,
            username: "beth".to_owned(),
        },
        release: ReleaseSummary {
            id: RELEASE_4_ID,
            media_type: MediaType::Vinyl,
            variant: Some("Go! Beat".to_owned()),
        },
        album: AlbumSummary {
            id: ALBUM_3_ID,
            title: "Dummy".to_owned(),
        },
        artist: ArtistSummary {
            id: ARTIST_2_ID,
            name: "Portishead".to_owned(),
        },
    });

    let view = resolver.view();
    assert_eq!(view.selection, Selection::default());
    assert_eq!(view.draft.item_id, Some(ITEM_4_ID));
    assert_eq!(view.draft.seller_id, Some(3));
    assert!(view.submittable);
    assert_eq!(
        view.bound_item.map(|item| item.title()),
        Some("Portishead - Dummy".to_owned())
    );
}

#[tokio::test]
async fn test_submit_then_start_over() {
    let sink = Arc::new(MemoryListingSink::new());
    let mut session = ListingSession::new(make_resolver(), sink.clone());

    assert_eq!(session.submit().await, Err(SubmissionError::MissingItem));

    let resolver = session.resolver_mut();
    resolver.select_release(Some(RELEASE_4_ID)).unwrap();
    resolver.update_draft_field(DraftField::Quality(Some(Quality::VeryGood)));
    resolver.update_draft_field(DraftField::Price(35.0));
    resolver.update_draft_field(DraftField::Description("Original 1994 press".to_owned()));

    let listing = session.submit().await.unwrap();
    assert_eq!(listing.item_id, ITEM_4_ID);
    assert_eq!(listing.seller_id, SELLER_ID);
    assert_eq!(listing.quality, Quality::VeryGood);
    assert_eq!(session.resolver().selection(), Selection::default());
    assert_eq!(session.resolver().draft().description, "");

    let stored = sink.listings().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], listing);
}
