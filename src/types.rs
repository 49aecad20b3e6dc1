use serde::{Deserialize, Serialize};

/// Cached bearer token. `expiration` is absolute unix seconds; the token is
/// usable iff `expiration >= now`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub expiration: u64,
}

impl Token {
    pub fn is_valid(&self, now: u64) -> bool {
        self.expiration >= now
    }
}

/// Raw body of a successful client-credentials exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// The fixed, ordered set of catalog search categories. The declaration
/// order is the composition order of the results view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Album,
    Artist,
    Playlist,
    Track,
    Show,
    Episode,
    Audiobook,
}

impl SearchKind {
    pub const ALL: [SearchKind; 7] = [
        SearchKind::Album,
        SearchKind::Artist,
        SearchKind::Playlist,
        SearchKind::Track,
        SearchKind::Show,
        SearchKind::Episode,
        SearchKind::Audiobook,
    ];

    /// Wire name used in the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Album => "album",
            SearchKind::Artist => "artist",
            SearchKind::Playlist => "playlist",
            SearchKind::Track => "track",
            SearchKind::Show => "show",
            SearchKind::Episode => "episode",
            SearchKind::Audiobook => "audiobook",
        }
    }

    /// Human-readable label for the query view and result rows.
    pub fn label(&self) -> &'static str {
        match self {
            SearchKind::Album => "Album",
            SearchKind::Artist => "Artist",
            SearchKind::Playlist => "Playlist",
            SearchKind::Track => "Track",
            SearchKind::Show => "Show",
            SearchKind::Episode => "Episode",
            SearchKind::Audiobook => "Audiobook",
        }
    }
}

/// One search invocation. `text` and `kinds` are required and validated
/// before dispatch; the optional fields are sent only when present.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub text: String,
    pub kinds: Vec<SearchKind>,
    pub market: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub include_external: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

/// One page of a category's results as returned by the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub total: u64,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumItem {
    pub name: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub artists: Vec<ItemArtist>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistItem {
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistOwner {
    #[serde(default)]
    pub display_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub name: String,
    #[serde(default)]
    pub owner: PlaylistOwner,
    #[serde(default)]
    pub tracks: PlaylistTracksRef,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackAlbumRef {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackItem {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ItemArtist>,
    #[serde(default)]
    pub album: TrackAlbumRef,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowItem {
    pub name: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeItem {
    pub name: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudiobookAuthor {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudiobookItem {
    pub name: String,
    #[serde(default)]
    pub authors: Vec<AudiobookAuthor>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

/// Decoded search response. Categories that were not requested are absent.
/// Playlist pages are known to carry JSON nulls in `items` on the live API,
/// so those items decode as options and are skipped during composition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    pub albums: Option<Page<AlbumItem>>,
    pub artists: Option<Page<ArtistItem>>,
    pub playlists: Option<Page<Option<PlaylistItem>>>,
    pub tracks: Option<Page<TrackItem>>,
    pub shows: Option<Page<ShowItem>>,
    pub episodes: Option<Page<EpisodeItem>>,
    pub audiobooks: Option<Page<AudiobookItem>>,
}

/// One flattened row of the results list, regardless of category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub kind: SearchKind,
    pub name: String,
    pub detail: String,
    pub url: String,
}
