use crate::client::track::Track;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub search_request_id: Option<String>,
    pub text: Option<String>,
    pub best: Option<Best>,
}

/// The single highest-confidence hit for a query. The payload shape depends
/// on the sibling `type` tag, so it stays raw until the tag is checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Best {
    #[serde(rename = "type")]
    pub item_type: String,
    pub result: Value,
}

impl Best {
    /// Decode the payload when the best match is a track. Any other type
    /// (artist, album, podcast, ...) yields `None`.
    pub fn into_track(self) -> Option<Track> {
        if self.item_type == "track" {
            serde_json::from_value(self.result).ok()
        } else {
            None
        }
    }
}

impl SearchResults {
    pub fn best_track(self) -> Option<Track> {
        self.best.and_then(|best| best.into_track())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_track_best_match_decodes() {
        let json = r#"{
            "searchRequestId": "req-1",
            "text": "under pressure",
            "best": {
                "type": "track",
                "result": {
                    "id": 51422266,
                    "title": "Under Pressure",
                    "artists": [ { "id": 5559, "name": "Queen" } ],
                    "albums": [ { "id": 7123, "title": "Hot Space" } ]
                }
            }
        }"#;

        let results: SearchResults = serde_json::from_str(json).expect("failed to deserialize");
        let track = results.best_track().expect("expected a track");

        assert_eq!(track.title, "Under Pressure");
    }

    #[test]
    fn a_non_track_best_match_is_ignored() {
        let json = r#"{
            "text": "queen",
            "best": {
                "type": "artist",
                "result": { "id": 5559, "name": "Queen" }
            }
        }"#;

        let results: SearchResults = serde_json::from_str(json).expect("failed to deserialize");

        assert!(results.best_track().is_none());
    }

    #[test]
    fn no_best_match_yields_none() {
        let results: SearchResults = serde_json::from_str(r#"{ "text": "asdfgh" }"#)
            .expect("failed to deserialize");

        assert!(results.best_track().is_none());
    }
}
