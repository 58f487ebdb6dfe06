use crate::{
    client::{playlist::Playlist, track::Tracks},
    Credentials, Error, Result,
};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Method, Response, StatusCode,
};
use serde::Deserialize;

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

#[derive(Debug, Clone)]
pub struct Client {
    credentials: Option<Credentials>,
    access_token: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

pub async fn new(credentials: Option<Credentials>) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert("Accept", HeaderValue::from_str("application/json").unwrap());

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap();

    Ok(Client {
        client,
        credentials,
        access_token: None,
        base_url: "https://api.spotify.com/v1/".to_string(),
    })
}

#[non_exhaustive]
enum Endpoint {
    Playlist,
    PlaylistTracks,
}

impl Endpoint {
    fn url(&self, base_url: &str, playlist_id: &str) -> String {
        match self {
            Endpoint::Playlist => format!("{base_url}playlists/{playlist_id}"),
            Endpoint::PlaylistTracks => format!("{base_url}playlists/{playlist_id}/tracks"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[allow(unused)]
    token_type: String,
    expires_in: i64,
}

macro_rules! call {
    ($self:ident, $endpoint:expr, $params:expr) => {
        match $self.make_call($endpoint, $params).await {
            Ok(response) => match serde_json::from_str(response.as_str()) {
                Ok(item) => Ok(item),
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
    /// Fetch a bearer token via the client credentials flow.
    pub async fn login(&mut self) -> Result<()> {
        let credentials = self.credentials.as_ref().ok_or(Error::NoCredentials)?;
        let client_id = credentials.client_id.clone().ok_or(Error::NoClientId)?;
        let client_secret = credentials
            .client_secret
            .clone()
            .ok_or(Error::NoClientSecret)?;

        info!(
            "logging in with client id ({}) and secret **HIDDEN**",
            client_id
        );

        let params = vec![("grant_type", "client_credentials")];

        let response = self
            .client
            .post(TOKEN_URL)
            .basic_auth(client_id.as_str(), Some(client_secret.as_str()))
            .form(&params)
            .send()
            .await?;

        match self.handle_response(response).await {
            Ok(body) => match serde_json::from_str::<TokenResponse>(body.as_str()) {
                Ok(token) => {
                    info!(
                        "successfully logged in, token expires in {}s",
                        token.expires_in
                    );
                    self.access_token = Some(token.access_token);
                    Ok(())
                }
                Err(_) => Err(Error::Login),
            },
            Err(_) => Err(Error::Login),
        }
    }

    /// Retrieve a playlist. The response carries the playlist name and the
    /// reported track total alongside the first page of items.
    pub async fn playlist(&self, playlist_id: &str) -> Result<Playlist> {
        let endpoint = Endpoint::Playlist.url(&self.base_url, playlist_id);

        call!(self, endpoint, None)
    }

    /// Retrieve a single page of a playlist's tracks.
    pub async fn playlist_items(
        &self,
        playlist_id: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Tracks> {
        let endpoint = Endpoint::PlaylistTracks.url(&self.base_url, playlist_id);
        let limit_string = limit.to_string();
        let offset_string = offset.to_string();
        let params = vec![
            ("limit", limit_string.as_str()),
            ("offset", offset_string.as_str()),
        ];

        call!(self, endpoint, Some(params))
    }

    // Call the api and retrieve the JSON payload
    async fn make_call(
        &self,
        endpoint: String,
        params: Option<Vec<(&str, &str)>>,
    ) -> Result<String> {
        let mut headers = HeaderMap::new();

        if let Some(token) = &self.access_token {
            debug!("adding access token to request headers");
            headers.insert(
                "Authorization",
                HeaderValue::from_str(format!("Bearer {token}").as_str()).unwrap(),
            );
        } else {
            error!("no access token, request will be unauthorized");
        }

        debug!("calling {} endpoint", endpoint);
        let request = self.client.request(Method::GET, endpoint).headers(headers);

        if let Some(p) = params {
            let response = request.query(&p).send().await?;
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
