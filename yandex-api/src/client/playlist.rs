use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub uid: i64,
    pub login: Option<String>,
    pub name: Option<String>,
}

/// A user playlist. `kind` identifies it within the owner's account and
/// `revision` is the optimistic-concurrency counter every mutation must
/// carry.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub kind: i64,
    pub title: String,
    pub revision: i64,
    #[serde(default)]
    pub track_count: i64,
    pub uid: Option<i64>,
    pub owner: Option<Owner>,
    pub visibility: Option<String>,
}
