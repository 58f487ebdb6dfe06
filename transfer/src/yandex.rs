use crate::TrackName;
use tracklift_yandex_api::{
    client::{
        api::{self, Client},
        playlist::Playlist,
        track::Track,
    },
    Credentials,
};

pub use tracklift_yandex_api::{Error, Result};

pub struct Yandex {
    client: Client,
}

pub async fn new() -> Result<Yandex> {
    let credentials = Credentials::from_env();

    let mut client = api::new(Some(credentials)).await?;
    client.init().await?;

    Ok(Yandex { client })
}

impl Yandex {
    pub async fn create_playlist(&self, title: &str) -> Result<YandexPlaylist> {
        Ok(YandexPlaylist(self.client.create_playlist(title).await?))
    }

    /// Best-match search. Yields a track only when the service's best hit is
    /// a track with at least one album to insert from.
    pub async fn search(&self, query: &TrackName) -> Result<Option<Track>> {
        debug!("searching for {}", query);

        let results = self.client.search(query.as_str()).await?;

        Ok(results.best_track().filter(|track| !track.albums.is_empty()))
    }

    /// Insert a track at the playlist's current revision, bumping the local
    /// counter to the service's expected next value on success.
    pub async fn add_track(&self, playlist: &mut YandexPlaylist, track: &Track) -> Result<()> {
        let composite = track.track_id();
        let album = track.albums.first().ok_or(Error::Api {
            message: "best match has no album".to_string(),
        })?;

        self.client
            .insert_track(
                playlist.kind(),
                catalog_id(&composite),
                album.id,
                playlist.revision(),
            )
            .await?;

        playlist.record_insert();

        Ok(())
    }
}

pub struct YandexPlaylist(Playlist);

impl YandexPlaylist {
    pub fn kind(&self) -> i64 {
        self.0.kind
    }

    pub fn revision(&self) -> i64 {
        self.0.revision
    }

    pub fn title(&self) -> &str {
        &self.0.title
    }

    // the service expects the next mutation at revision + 1
    fn record_insert(&mut self) {
        self.0.revision += 1;
    }
}

// The playlist diff wants the bare catalog id, not the `<track>:<album>`
// composite the service hands out.
fn catalog_id(composite: &str) -> &str {
    composite.split(':').next().unwrap_or(composite)
}
