use snafu::prelude::*;
extern crate pretty_env_logger;
#[macro_use]
extern crate log;

pub mod cli;
pub mod spotify;
pub mod yandex;

/// A source track flattened to `<title> - <artist1>, <artist2>`. Doubles as
/// the destination search query and the unavailable-report line.
#[derive(Hash, Clone, Debug, Eq, PartialEq)]
pub struct TrackName(String);

impl TrackName {
    pub fn new(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TrackName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Snafu, Debug)]
pub enum Error {
    ClientError { error: String },
}

impl From<spotify::Error> for Error {
    fn from(e: spotify::Error) -> Self {
        Error::ClientError {
            error: e.to_string(),
        }
    }
}

impl From<yandex::Error> for Error {
    fn from(e: yandex::Error) -> Self {
        Error::ClientError {
            error: e.to_string(),
        }
    }
}

impl From<cli::Error> for Error {
    fn from(e: cli::Error) -> Self {
        Error::ClientError {
            error: e.to_string(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
