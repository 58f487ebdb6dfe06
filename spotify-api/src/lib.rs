use serde::{Deserialize, Serialize};
use snafu::prelude::*;
use std::env;

extern crate pretty_env_logger;
#[macro_use]
extern crate log;

pub mod client;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("No client id provided."))]
    NoClientId,
    #[snafu(display("No client secret provided."))]
    NoClientSecret,
    #[snafu(display("No client id or secret provided."))]
    NoCredentials,
    #[snafu(display("Failed to login."))]
    Login,
    #[snafu(display("Authorization missing."))]
    Authorization,
    #[snafu(display("{message}"))]
    Api { message: String },
    #[snafu(display("Failed to deserialize json: {message}"))]
    DeserializeJSON { message: String },
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        let status = error.status();

        match status {
            Some(status) => Error::Api {
                message: status.to_string(),
            },
            None => Error::Api {
                message: "Error calling the API".to_string(),
            },
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl Credentials {
    /// Read `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET` from the
    /// environment. Missing variables are surfaced at login time.
    pub fn from_env() -> Self {
        Self {
            client_id: env::var("SPOTIFY_CLIENT_ID").ok(),
            client_secret: env::var("SPOTIFY_CLIENT_SECRET").ok(),
        }
    }
}
