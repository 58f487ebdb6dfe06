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
    #[snafu(display("No client token provided."))]
    NoToken,
    #[snafu(display("Failed to fetch the account status."))]
    AccountStatus,
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
    pub token: Option<String>,
}

impl Credentials {
    /// Read `YANDEX_CLIENT_TOKEN` from the environment. A missing variable
    /// surfaces as an authorization error on the first call.
    pub fn from_env() -> Self {
        Self {
            token: env::var("YANDEX_CLIENT_TOKEN").ok(),
        }
    }
}
