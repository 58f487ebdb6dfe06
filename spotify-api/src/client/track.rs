use serde::{Deserialize, Serialize};

/// One page of a playlist's items.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracks {
    pub items: Vec<PlaylistItem>,
    pub limit: i64,
    pub next: Option<String>,
    pub offset: i64,
    pub previous: Option<String>,
    pub total: i64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub added_at: Option<String>,
    pub is_local: Option<bool>,
    // null for items removed from the catalog
    pub track: Option<Track>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub artists: Vec<Artist>,
    pub duration_ms: Option<i64>,
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: Option<String>,
    pub name: String,
}

impl Track {
    /// Flatten a track into the `<title> - <artist1>, <artist2>` form used
    /// for searching and reporting.
    pub fn display_title(&self) -> String {
        let artists = self
            .artists
            .iter()
            .map(|artist| artist.name.as_str())
            .collect::<Vec<&str>>()
            .join(", ");

        format!("{} - {}", self.name, artists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(name: &str, artists: &[&str]) -> Track {
        Track {
            name: name.to_string(),
            artists: artists
                .iter()
                .map(|name| Artist {
                    id: None,
                    name: name.to_string(),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn displays_a_single_artist_track() {
        assert_eq!(
            track("Paranoid", &["Black Sabbath"]).display_title(),
            "Paranoid - Black Sabbath"
        );
    }

    #[test]
    fn displays_a_multi_artist_track() {
        assert_eq!(
            track("Under Pressure", &["Queen", "David Bowie"]).display_title(),
            "Under Pressure - Queen, David Bowie"
        );
    }

    #[test]
    fn deserializes_a_page_of_items() {
        let json = r#"{
            "items": [
                { "added_at": "2023-01-01T00:00:00Z", "is_local": false,
                  "track": { "artists": [{ "id": "a1", "name": "Queen" }],
                             "duration_ms": 1000, "id": "t1",
                             "name": "Under Pressure", "type": "track" } },
                { "track": null }
            ],
            "limit": 100,
            "offset": 0,
            "total": 150
        }"#;

        let page: Tracks = serde_json::from_str(json).expect("failed to deserialize");

        assert_eq!(page.total, 150);
        assert_eq!(page.items.len(), 2);
        assert!(page.items[1].track.is_none());
    }
}
