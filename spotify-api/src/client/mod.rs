use snafu::prelude::*;

pub mod api;
pub mod playlist;
pub mod track;

#[derive(Snafu, Debug)]
pub enum PlaylistIdError {
    #[snafu(display("This url contains an unfamiliar domain."))]
    WrongDomain,
    #[snafu(display("the url contains an invalid path"))]
    InvalidPath,
    #[snafu(display("the id is empty"))]
    EmptyId,
}

pub type ParseIdResult<T, E = PlaylistIdError> = std::result::Result<T, E>;

/// Reduce user input to a bare playlist id. Accepts a plain id, a
/// `spotify:playlist:<id>` uri or an `open.spotify.com/playlist/<id>` url.
pub fn parse_playlist_id(input: &str) -> ParseIdResult<String> {
    let input = input.trim();

    if input.is_empty() {
        return Err(PlaylistIdError::EmptyId);
    }

    if let Some(rest) = input.strip_prefix("spotify:playlist:") {
        if rest.is_empty() {
            return Err(PlaylistIdError::EmptyId);
        }

        return Ok(rest.to_string());
    }

    if let Ok(url) = url::Url::parse(input) {
        if let (Some(host), Some(mut path)) = (url.host_str(), url.path_segments()) {
            if host == "open.spotify.com" || host == "play.spotify.com" {
                debug!("got a spotify url");

                return match path.next() {
                    Some("playlist") => match path.next() {
                        Some(id) if !id.is_empty() => Ok(id.to_string()),
                        _ => Err(PlaylistIdError::InvalidPath),
                    },
                    _ => Err(PlaylistIdError::InvalidPath),
                };
            } else {
                return Err(PlaylistIdError::WrongDomain);
            }
        }
    }

    Ok(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_bare_id() {
        assert_eq!(
            parse_playlist_id("2IkvmS2LOZJCFa6n9yiA7Z").unwrap(),
            "2IkvmS2LOZJCFa6n9yiA7Z"
        );
    }

    #[test]
    fn accepts_a_spotify_uri() {
        assert_eq!(
            parse_playlist_id("spotify:playlist:2IkvmS2LOZJCFa6n9yiA7Z").unwrap(),
            "2IkvmS2LOZJCFa6n9yiA7Z"
        );
    }

    #[test]
    fn accepts_an_open_spotify_url() {
        assert_eq!(
            parse_playlist_id(
                "https://open.spotify.com/playlist/2IkvmS2LOZJCFa6n9yiA7Z?si=abcdef"
            )
            .unwrap(),
            "2IkvmS2LOZJCFa6n9yiA7Z"
        );
    }

    #[test]
    fn rejects_other_domains() {
        assert!(matches!(
            parse_playlist_id("https://example.com/playlist/123"),
            Err(PlaylistIdError::WrongDomain)
        ));
    }

    #[test]
    fn rejects_non_playlist_paths() {
        assert!(matches!(
            parse_playlist_id("https://open.spotify.com/album/123"),
            Err(PlaylistIdError::InvalidPath)
        ));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            parse_playlist_id("  "),
            Err(PlaylistIdError::EmptyId)
        ));
    }
}
