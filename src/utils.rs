use crate::types::{ResultRow, SearchKind, SearchResults};

/// Display cap per category. A hard limit, not a pagination cursor.
pub const MAX_ITEMS_PER_CATEGORY: usize = 10;

pub fn join_kinds(kinds: &[SearchKind]) -> String {
    kinds
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

fn join_names(names: impl IntoIterator<Item = String>) -> String {
    names.into_iter().collect::<Vec<_>>().join(", ")
}

/// Flattens a decoded search response into the display sequence: fixed
/// category order (Album, Artist, Playlist, Track, Show, Episode,
/// Audiobook), at most [`MAX_ITEMS_PER_CATEGORY`] rows per category,
/// empty or absent categories contributing nothing.
pub fn compose_result_rows(results: &SearchResults) -> Vec<ResultRow> {
    let mut rows = Vec::new();

    if let Some(page) = &results.albums {
        for a in page.items.iter().take(MAX_ITEMS_PER_CATEGORY) {
            let artists = join_names(a.artists.iter().map(|ar| ar.name.clone()));
            rows.push(ResultRow {
                kind: SearchKind::Album,
                name: a.name.clone(),
                detail: format!("by {} · Released: {}", artists, a.release_date),
                url: a.external_urls.spotify.clone(),
            });
        }
    }

    if let Some(page) = &results.artists {
        for a in page.items.iter().take(MAX_ITEMS_PER_CATEGORY) {
            rows.push(ResultRow {
                kind: SearchKind::Artist,
                name: a.name.clone(),
                detail: format!("Genres: {}", a.genres.join(", ")),
                url: a.external_urls.spotify.clone(),
            });
        }
    }

    if let Some(page) = &results.playlists {
        // The live API pads playlist pages with nulls; skip them without
        // letting them eat into the cap.
        for p in page
            .items
            .iter()
            .filter_map(|p| p.as_ref())
            .take(MAX_ITEMS_PER_CATEGORY)
        {
            rows.push(ResultRow {
                kind: SearchKind::Playlist,
                name: p.name.clone(),
                detail: format!("by {} · {} tracks", p.owner.display_name, p.tracks.total),
                url: p.external_urls.spotify.clone(),
            });
        }
    }

    if let Some(page) = &results.tracks {
        for t in page.items.iter().take(MAX_ITEMS_PER_CATEGORY) {
            let artists = join_names(t.artists.iter().map(|ar| ar.name.clone()));
            rows.push(ResultRow {
                kind: SearchKind::Track,
                name: t.name.clone(),
                detail: format!("by {} · Album: {}", artists, t.album.name),
                url: t.external_urls.spotify.clone(),
            });
        }
    }

    if let Some(page) = &results.shows {
        for s in page.items.iter().take(MAX_ITEMS_PER_CATEGORY) {
            rows.push(ResultRow {
                kind: SearchKind::Show,
                name: s.name.clone(),
                detail: format!("by {}", s.publisher),
                url: s.external_urls.spotify.clone(),
            });
        }
    }

    if let Some(page) = &results.episodes {
        for e in page.items.iter().take(MAX_ITEMS_PER_CATEGORY) {
            rows.push(ResultRow {
                kind: SearchKind::Episode,
                name: e.name.clone(),
                detail: format!("Released: {}", e.release_date),
                url: e.external_urls.spotify.clone(),
            });
        }
    }

    if let Some(page) = &results.audiobooks {
        for b in page.items.iter().take(MAX_ITEMS_PER_CATEGORY) {
            let authors = join_names(b.authors.iter().map(|a| a.name.clone()));
            rows.push(ResultRow {
                kind: SearchKind::Audiobook,
                name: b.name.clone(),
                detail: format!("by {}", authors),
                url: b.external_urls.spotify.clone(),
            });
        }
    }

    rows
}

/// Case-insensitive substring filter over row names, preserving order.
/// An empty filter matches everything.
pub fn filter_row_indices(rows: &[ResultRow], filter: &str) -> Vec<usize> {
    if filter.is_empty() {
        return (0..rows.len()).collect();
    }

    let needle = filter.to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.name.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}
