use crate::client::track::Tracks;
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub collaborative: Option<bool>,
    pub description: Option<String>,
    pub id: String,
    pub name: String,
    pub owner: Option<Owner>,
    pub public: Option<bool>,
    pub snapshot_id: Option<String>,
    pub tracks: Tracks,
}

impl Playlist {
    pub fn track_total(&self) -> usize {
        self.tracks.total as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_playlist_response() {
        let json = r#"{
            "collaborative": false,
            "description": "songs",
            "id": "2IkvmS2LOZJCFa6n9yiA7Z",
            "name": "Road Trip",
            "owner": { "id": "user1", "display_name": "User One" },
            "public": true,
            "snapshot_id": "abc",
            "tracks": { "items": [], "limit": 100, "offset": 0, "total": 150 }
        }"#;

        let playlist: Playlist = serde_json::from_str(json).expect("failed to deserialize");

        assert_eq!(playlist.name, "Road Trip");
        assert_eq!(playlist.track_total(), 150);
    }
}
