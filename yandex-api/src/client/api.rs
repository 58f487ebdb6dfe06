use crate::{
    client::{playlist::Playlist, search_results::SearchResults, Status},
    Credentials, Error, Result,
};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Method, Response, StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct Client {
    credentials: Option<Credentials>,
    uid: Option<i64>,
    base_url: String,
    client: reqwest::Client,
}

pub async fn new(credentials: Option<Credentials>) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        "User-Agent",
        HeaderValue::from_str("Yandex-Music-API").unwrap(),
    );

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap();

    Ok(Client {
        client,
        credentials,
        uid: None,
        base_url: "https://api.music.yandex.net/".to_string(),
    })
}

#[non_exhaustive]
enum Endpoint {
    AccountStatus,
    Search,
    CreatePlaylist { uid: i64 },
    ChangePlaylist { uid: i64, kind: i64 },
}

impl Endpoint {
    fn url(&self, base_url: &str) -> String {
        match self {
            Endpoint::AccountStatus => format!("{base_url}account/status"),
            Endpoint::Search => format!("{base_url}search"),
            Endpoint::CreatePlaylist { uid } => {
                format!("{base_url}users/{uid}/playlists/create")
            }
            Endpoint::ChangePlaylist { uid, kind } => {
                format!("{base_url}users/{uid}/playlists/{kind}/change-relative")
            }
        }
    }
}

// Every payload arrives wrapped in `{"invocationInfo": …, "result": …}`.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    result: T,
}

macro_rules! call {
    ($self:ident, $method:expr, $endpoint:expr, $params:expr) => {
        match $self.make_call($method, $endpoint, $params).await {
            Ok(response) => match serde_json::from_str::<ApiResponse<_>>(response.as_str()) {
                Ok(envelope) => Ok(envelope.result),
                Err(error) => Err(Error::DeserializeJSON {
                    message: error.to_string(),
                }),
            },
            Err(error) => Err(Error::Api {
                message: error.to_string(),
            }),
        }
    };
}

impl Client {
    /// Fetch the account status and remember the account uid, which every
    /// user-scoped endpoint needs.
    pub async fn init(&mut self) -> Result<()> {
        let endpoint = Endpoint::AccountStatus.url(&self.base_url);
        let status: Result<Status> = call!(self, Method::GET, endpoint, None);

        match status {
            Ok(status) => match status.account.uid {
                Some(uid) => {
                    info!("authorized as uid {}", uid);
                    self.uid = Some(uid);
                    Ok(())
                }
                None => Err(Error::AccountStatus),
            },
            Err(_) => Err(Error::AccountStatus),
        }
    }

    fn uid(&self) -> Result<i64> {
        self.uid.ok_or(Error::Authorization)
    }

    /// Create an empty playlist owned by the authorized user.
    pub async fn create_playlist(&self, title: &str) -> Result<Playlist> {
        let endpoint = Endpoint::CreatePlaylist { uid: self.uid()? }.url(&self.base_url);
        let params = vec![("title", title), ("visibility", "public")];

        call!(self, Method::POST, endpoint, Some(params))
    }

    /// Free-text catalog search across all item types.
    pub async fn search(&self, text: &str) -> Result<SearchResults> {
        let endpoint = Endpoint::Search.url(&self.base_url);
        let params = vec![
            ("text", text),
            ("type", "all"),
            ("page", "0"),
            ("nocorrect", "false"),
        ];

        call!(self, Method::GET, endpoint, Some(params))
    }

    /// Insert a track at the top of a playlist. `revision` must match the
    /// service's current value or the call is rejected.
    pub async fn insert_track(
        &self,
        kind: i64,
        track_id: &str,
        album_id: i64,
        revision: i64,
    ) -> Result<Playlist> {
        let endpoint = Endpoint::ChangePlaylist {
            uid: self.uid()?,
            kind,
        }
        .url(&self.base_url);
        let kind_string = kind.to_string();
        let revision_string = revision.to_string();
        let diff = insert_diff(track_id, album_id);
        let params = vec![
            ("kind", kind_string.as_str()),
            ("revision", revision_string.as_str()),
            ("diff", diff.as_str()),
        ];

        call!(self, Method::POST, endpoint, Some(params))
    }

    // Call the api and retrieve the JSON payload
    async fn make_call(
        &self,
        method: Method,
        endpoint: String,
        params: Option<Vec<(&str, &str)>>,
    ) -> Result<String> {
        let mut headers = HeaderMap::new();

        if let Some(token) = self.credentials.as_ref().and_then(|c| c.token.as_ref()) {
            debug!("adding oauth token to request headers");
            headers.insert(
                "Authorization",
                HeaderValue::from_str(format!("OAuth {token}").as_str()).unwrap(),
            );
        } else {
            error!("no client token, request will be unauthorized");
        }

        debug!("calling {} endpoint", endpoint);
        let request = self
            .client
            .request(method.clone(), endpoint)
            .headers(headers);

        if let Some(p) = params {
            let response = if method == Method::GET {
                request.query(&p).send().await?
            } else {
                request.form(&p).send().await?
            };

            self.handle_response(response).await
        } else {
            let response = request.send().await?;
            self.handle_response(response).await
        }
    }

    // Handle a response retrieved from the api
    async fn handle_response(&self, response: Response) -> Result<String> {
        match response.status() {
            StatusCode::BAD_REQUEST => Err(Error::Api {
                message: "Bad request".to_string(),
            }),
            StatusCode::UNAUTHORIZED => Err(Error::Api {
                message: "Unauthorized request".to_string(),
            }),
            StatusCode::NOT_FOUND => Err(Error::Api {
                message: "Item not found".to_string(),
            }),
            StatusCode::PRECONDITION_FAILED => Err(Error::Api {
                message: "Stale playlist revision".to_string(),
            }),
            StatusCode::OK => {
                let res = response.text().await?;
                Ok(res)
            }
            status => Err(Error::Api {
                message: status.to_string(),
            }),
        }
    }
}

// The change-relative payload for a single-track insert.
fn insert_diff(track_id: &str, album_id: i64) -> String {
    serde_json::json!([{
        "op": "insert",
        "at": 0,
        "tracks": [{ "id": track_id, "albumId": album_id }]
    }])
    .to_string()
}
