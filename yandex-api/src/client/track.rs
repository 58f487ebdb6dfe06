use crate::client::{Album, Artist};
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    #[serde(default)]
    pub albums: Vec<Album>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    pub available: Option<bool>,
    pub duration_ms: Option<i64>,
    pub id: i64,
    pub real_id: Option<String>,
    pub title: String,
}

impl Track {
    /// Composite `<track>:<album>` id, the form the service hands out for
    /// tracks that belong to an album.
    pub fn track_id(&self) -> String {
        if let Some(album) = self.albums.first() {
            format!("{}:{}", self.id, album.id)
        } else {
            self.id.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_id_uses_the_first_album() {
        let track = Track {
            id: 12345,
            albums: vec![
                Album {
                    id: 678,
                    title: Some("First".to_string()),
                },
                Album {
                    id: 999,
                    title: Some("Second".to_string()),
                },
            ],
            ..Default::default()
        };

        assert_eq!(track.track_id(), "12345:678");
    }

    #[test]
    fn composite_id_without_albums_is_the_bare_id() {
        let track = Track {
            id: 12345,
            ..Default::default()
        };

        assert_eq!(track.track_id(), "12345");
    }

    #[test]
    fn deserializes_a_search_track() {
        let json = r#"{
            "id": 51422266,
            "realId": "51422266",
            "title": "Under Pressure",
            "available": true,
            "durationMs": 242000,
            "artists": [
                { "id": 5559, "name": "Queen" },
                { "id": 2233, "name": "David Bowie" }
            ],
            "albums": [ { "id": 7123, "title": "Hot Space" } ]
        }"#;

        let track: Track = serde_json::from_str(json).expect("failed to deserialize");

        assert_eq!(track.track_id(), "51422266:7123");
        assert_eq!(track.artists.len(), 2);
    }
}
