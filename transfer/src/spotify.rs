use crate::TrackName;
use tracklift_spotify_api::{
    client::{
        api::{self, Client},
        playlist::Playlist,
        track::PlaylistItem,
    },
    Credentials,
};

pub use tracklift_spotify_api::{Error, Result};

pub const TRACKS_PER_PAGE: usize = 100;

pub struct Spotify {
    client: Client,
}

pub async fn new() -> Result<Spotify> {
    let credentials = Credentials::from_env();

    let mut client = api::new(Some(credentials)).await?;
    client.login().await?;

    Ok(Spotify { client })
}

impl Spotify {
    /// Fetch a playlist's metadata and every page of its items. The metadata
    /// reports the item total, so exactly `ceil(total / 100)` item batches
    /// follow.
    pub async fn playlist(&self, playlist_id: &str) -> Result<SpotifyFullPlaylist> {
        let spotify_playlist = self.client.playlist(playlist_id).await?;

        let mut all_items: Vec<PlaylistItem> = vec![];

        for offset in page_offsets(spotify_playlist.track_total()) {
            debug!("fetching playlist items at offset {}", offset);

            let page = self
                .client
                .playlist_items(playlist_id, TRACKS_PER_PAGE, offset)
                .await?;

            all_items.extend(page.items);
        }

        Ok(SpotifyFullPlaylist {
            spotify_playlist,
            all_items,
        })
    }
}

pub struct SpotifyFullPlaylist {
    spotify_playlist: Playlist,
    all_items: Vec<PlaylistItem>,
}

impl SpotifyFullPlaylist {
    pub fn name(&self) -> &str {
        &self.spotify_playlist.name
    }

    pub fn track_count(&self) -> usize {
        self.all_items.len()
    }

    /// Flatten every item into its display string, in playlist order.
    /// Removed items and non-track entries (episodes) are skipped.
    pub fn tracklist(&self) -> Vec<TrackName> {
        self.all_items
            .iter()
            .filter_map(|item| item.track.as_ref())
            .filter(|track| track.item_type.as_deref().unwrap_or("track") == "track")
            .map(|track| TrackName::new(track.display_title()))
            .collect::<Vec<TrackName>>()
    }
}

/// Offsets of the fixed-size batches needed to cover `total` items.
fn page_offsets(total: usize) -> Vec<usize> {
    (0..total).step_by(TRACKS_PER_PAGE).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracklift_spotify_api::client::track::{Artist, Track};

    #[test]
    fn empty_playlist_needs_no_batches() {
        assert!(page_offsets(0).is_empty());
    }

    #[test]
    fn one_batch_covers_up_to_a_hundred_items() {
        assert_eq!(page_offsets(1), vec![0]);
        assert_eq!(page_offsets(100), vec![0]);
    }

    #[test]
    fn a_hundred_and_fifty_items_take_two_batches() {
        assert_eq!(page_offsets(150), vec![0, 100]);
    }

    #[test]
    fn partial_last_batch_is_still_fetched() {
        assert_eq!(page_offsets(250), vec![0, 100, 200]);
    }

    fn item(track: Option<Track>) -> PlaylistItem {
        PlaylistItem {
            track,
            ..Default::default()
        }
    }

    #[test]
    fn tracklist_skips_removed_and_non_track_items() {
        let playlist = SpotifyFullPlaylist {
            spotify_playlist: Playlist::default(),
            all_items: vec![
                item(Some(Track {
                    name: "Paranoid".to_string(),
                    artists: vec![Artist {
                        id: None,
                        name: "Black Sabbath".to_string(),
                    }],
                    item_type: Some("track".to_string()),
                    ..Default::default()
                })),
                item(None),
                item(Some(Track {
                    name: "Some Podcast".to_string(),
                    item_type: Some("episode".to_string()),
                    ..Default::default()
                })),
            ],
        };

        let tracklist = playlist.tracklist();

        assert_eq!(tracklist.len(), 1);
        assert_eq!(tracklist[0].as_str(), "Paranoid - Black Sabbath");
    }
}
