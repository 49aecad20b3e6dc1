use sposearch::types::{
    AlbumItem, ArtistItem, AudiobookAuthor, AudiobookItem, EpisodeItem, ExternalUrls, ItemArtist,
    Page, PlaylistItem, PlaylistOwner, PlaylistTracksRef, SearchKind, SearchResults, ShowItem,
    TrackAlbumRef, TrackItem,
};
use sposearch::utils::*;

// Helper functions to build response fragments

fn urls(id: &str) -> ExternalUrls {
    ExternalUrls {
        spotify: format!("https://open.spotify.com/{}", id),
    }
}

fn album(name: &str, artist: &str, date: &str) -> AlbumItem {
    AlbumItem {
        name: name.to_string(),
        release_date: date.to_string(),
        artists: vec![ItemArtist {
            name: artist.to_string(),
        }],
        external_urls: urls(name),
    }
}

fn artist(name: &str, genres: &[&str]) -> ArtistItem {
    ArtistItem {
        name: name.to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        external_urls: urls(name),
    }
}

fn playlist(name: &str, owner: &str, tracks: u64) -> PlaylistItem {
    PlaylistItem {
        name: name.to_string(),
        owner: PlaylistOwner {
            display_name: owner.to_string(),
        },
        tracks: PlaylistTracksRef { total: tracks },
        external_urls: urls(name),
    }
}

fn track(name: &str, artist: &str, album: &str) -> TrackItem {
    TrackItem {
        name: name.to_string(),
        artists: vec![ItemArtist {
            name: artist.to_string(),
        }],
        album: TrackAlbumRef {
            name: album.to_string(),
        },
        external_urls: urls(name),
    }
}

fn page<T>(items: Vec<T>) -> Option<Page<T>> {
    let total = items.len() as u64;
    Some(Page { total, items })
}

fn page_with_total<T>(items: Vec<T>, total: u64) -> Option<Page<T>> {
    Some(Page { total, items })
}

#[test]
fn test_join_kinds() {
    assert_eq!(join_kinds(&[SearchKind::Track]), "track");
    assert_eq!(
        join_kinds(&[SearchKind::Album, SearchKind::Artist, SearchKind::Show]),
        "album,artist,show"
    );
    assert_eq!(join_kinds(&[]), "");

    // The full set joins in declaration order
    assert_eq!(
        join_kinds(&SearchKind::ALL),
        "album,artist,playlist,track,show,episode,audiobook"
    );
}

#[test]
fn test_compose_caps_each_category_at_ten() {
    let albums: Vec<AlbumItem> = (0..15)
        .map(|i| album(&format!("Album {}", i), "Artist", "2024-01-01"))
        .collect();
    let artists: Vec<ArtistItem> = (0..3)
        .map(|i| artist(&format!("Artist {}", i), &["rock"]))
        .collect();

    let results = SearchResults {
        // Reported totals are far larger than what is shown
        albums: page_with_total(albums, 1500),
        artists: page(artists),
        playlists: page_with_total(vec![], 0),
        ..SearchResults::default()
    };

    let rows = compose_result_rows(&results);

    // Exactly 10 album rows (capped) followed by 3 artist rows
    assert_eq!(rows.len(), 13);
    assert!(rows[..10].iter().all(|r| r.kind == SearchKind::Album));
    assert!(rows[10..].iter().all(|r| r.kind == SearchKind::Artist));

    // No playlist rows, and the cap did not reorder anything
    assert_eq!(rows[0].name, "Album 0");
    assert_eq!(rows[9].name, "Album 9");
    assert_eq!(rows[10].name, "Artist 0");
}

#[test]
fn test_compose_fixed_category_order() {
    let results = SearchResults {
        // Deliberately fill categories "out of order" relative to the display
        tracks: page(vec![track("Lithium", "Nirvana", "Nevermind")]),
        albums: page(vec![album("Nevermind", "Nirvana", "1991-09-24")]),
        audiobooks: page(vec![AudiobookItem {
            name: "Heavier Than Heaven".to_string(),
            authors: vec![AudiobookAuthor {
                name: "Charles R. Cross".to_string(),
            }],
            external_urls: urls("book"),
        }]),
        artists: page(vec![artist("Nirvana", &["grunge", "rock"])]),
        shows: page(vec![ShowItem {
            name: "Band Stories".to_string(),
            publisher: "Podcasts Inc".to_string(),
            external_urls: urls("show"),
        }]),
        episodes: page(vec![EpisodeItem {
            name: "Episode 1".to_string(),
            release_date: "2020-05-01".to_string(),
            external_urls: urls("ep"),
        }]),
        playlists: page(vec![Some(playlist("Grunge Mix", "spotify", 50))]),
    };

    let kinds: Vec<SearchKind> = compose_result_rows(&results)
        .into_iter()
        .map(|r| r.kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            SearchKind::Album,
            SearchKind::Artist,
            SearchKind::Playlist,
            SearchKind::Track,
            SearchKind::Show,
            SearchKind::Episode,
            SearchKind::Audiobook,
        ]
    );
}

#[test]
fn test_compose_detail_texts() {
    let results = SearchResults {
        albums: page(vec![album("Nevermind", "Nirvana", "1991-09-24")]),
        artists: page(vec![artist("Nirvana", &["grunge", "rock"])]),
        playlists: page(vec![Some(playlist("Grunge Mix", "spotify", 50))]),
        tracks: page(vec![track("Lithium", "Nirvana", "Nevermind")]),
        ..SearchResults::default()
    };

    let rows = compose_result_rows(&results);

    assert_eq!(rows[0].detail, "by Nirvana · Released: 1991-09-24");
    assert_eq!(rows[1].detail, "Genres: grunge, rock");
    assert_eq!(rows[2].detail, "by spotify · 50 tracks");
    assert_eq!(rows[3].detail, "by Nirvana · Album: Nevermind");
}

#[test]
fn test_compose_absent_categories_contribute_nothing() {
    let results = SearchResults {
        tracks: page(vec![
            track("Lithium", "Nirvana", "Nevermind"),
            track("Come as You Are", "Nirvana", "Nevermind"),
        ]),
        ..SearchResults::default()
    };

    let rows = compose_result_rows(&results);

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.kind == SearchKind::Track));
}

#[test]
fn test_compose_skips_playlist_nulls_without_consuming_the_cap() {
    // 12 real playlists interleaved with nulls: the nulls must not count
    // toward the 10-row cap
    let mut items: Vec<Option<PlaylistItem>> = Vec::new();
    for i in 0..12 {
        items.push(None);
        items.push(Some(playlist(&format!("Playlist {}", i), "owner", i)));
    }

    let results = SearchResults {
        playlists: page_with_total(items, 24),
        ..SearchResults::default()
    };

    let rows = compose_result_rows(&results);

    assert_eq!(rows.len(), MAX_ITEMS_PER_CATEGORY);
    assert_eq!(rows[0].name, "Playlist 0");
    assert_eq!(rows[9].name, "Playlist 9");
}

#[test]
fn test_compose_joins_multiple_artists() {
    let mut t = track("Under Pressure", "Queen", "Hot Space");
    t.artists.push(ItemArtist {
        name: "David Bowie".to_string(),
    });

    let results = SearchResults {
        tracks: page(vec![t]),
        ..SearchResults::default()
    };

    let rows = compose_result_rows(&results);
    assert_eq!(rows[0].detail, "by Queen, David Bowie · Album: Hot Space");
}

#[test]
fn test_filter_row_indices() {
    let results = SearchResults {
        tracks: page(vec![
            track("Lithium", "Nirvana", "Nevermind"),
            track("Heart-Shaped Box", "Nirvana", "In Utero"),
            track("Come as You Are", "Nirvana", "Nevermind"),
        ]),
        ..SearchResults::default()
    };
    let rows = compose_result_rows(&results);

    // Empty filter matches everything, in order
    assert_eq!(filter_row_indices(&rows, ""), vec![0, 1, 2]);

    // Case-insensitive substring on the row name
    assert_eq!(filter_row_indices(&rows, "heart"), vec![1]);
    assert_eq!(filter_row_indices(&rows, "COME"), vec![2]);

    // No match
    assert!(filter_row_indices(&rows, "zeppelin").is_empty());
}
