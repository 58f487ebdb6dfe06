use crate::{spotify, yandex, TrackName};
use clap::Parser;
use console::Term;
use dialoguer::Input;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use snafu::Snafu;
use std::time::Duration;
use tracklift_spotify_api::client::parse_playlist_id;

const TITLE: &str = r#"
┌┬┐┬─┐┌─┐┌─┐┬┌─┬  ┬┌─┐┌┬┐
 │ ├┬┘├─┤│  ├┴┐│  │├┤  │
 ┴ ┴└─┴ ┴└─┘┴ ┴┴─┘┴└   ┴
"#;

#[derive(Parser)]
#[clap(name = TITLE, about = "spotify to yandex music playlist transfer", long_about = None)]
struct Cli {
    /// Spotify playlist to transfer (id, uri or url). Prompts when omitted.
    #[clap(short = 's', long = "spotify")]
    pub spotify_playlist: Option<String>,
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Client Error: {error}"))]
    SpotifyError { error: spotify::Error },
    #[snafu(display("Client Error: {error}"))]
    YandexError { error: yandex::Error },
    #[snafu(display("{message}"))]
    InvalidPlaylist { message: String },
}

impl From<spotify::Error> for Error {
    fn from(error: spotify::Error) -> Self {
        Error::SpotifyError { error }
    }
}

impl From<yandex::Error> for Error {
    fn from(error: yandex::Error) -> Self {
        Error::YandexError { error }
    }
}

pub async fn run() -> Result<(), Error> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    println!("{TITLE}");

    let input = match cli.spotify_playlist {
        Some(input) => input,
        None => Input::new()
            .with_prompt("Enter Spotify playlist id")
            .interact_text()
            .expect("failed to read playlist id"),
    };

    let playlist_id = parse_playlist_id(&input).map_err(|error| Error::InvalidPlaylist {
        message: error.to_string(),
    })?;

    let term = Term::stdout();
    let draw_target = ProgressDrawTarget::term(term, 15);
    let prog = MultiProgress::with_draw_target(draw_target);

    let spotify_prog = ProgressBar::new_spinner().with_prefix("spotify");
    spotify_prog.enable_steady_tick(Duration::from_secs(1));
    spotify_prog.set_style(
        ProgressStyle::default_spinner()
            .template("{prefix} {spinner} {wide_msg}")
            .unwrap(),
    );

    prog.add(spotify_prog.clone());
    spotify_prog.set_message("starting tracklist export");

    let spotify = spotify::new().await?;
    let spotify_playlist = spotify.playlist(&playlist_id).await?;
    let tracklist = spotify_playlist.tracklist();

    spotify_prog.finish_with_message("tracklist ready");

    let yandex_prog = ProgressBar::new_spinner().with_prefix("yandex ");
    yandex_prog.enable_steady_tick(Duration::from_secs(1));
    yandex_prog.set_style(
        ProgressStyle::default_spinner()
            .template("{prefix} {spinner} {wide_msg}")
            .unwrap(),
    );

    prog.add(yandex_prog.clone());
    yandex_prog.set_message("starting transfer");

    let yandex = yandex::new().await?;
    let mut yandex_playlist = yandex.create_playlist(spotify_playlist.name()).await?;

    yandex_prog.finish_with_message(format!("created playlist {}", yandex_playlist.title()));

    let total = tracklist.len();
    let progress = ProgressBar::new(total as u64);
    progress.set_style(ProgressStyle::default_bar().template("{msg}").unwrap());

    prog.add(progress.clone());

    let mut transferred = 0;
    let mut unavailable: Vec<TrackName> = vec![];

    for name in tracklist {
        match yandex.search(&name).await? {
            Some(track) => {
                yandex.add_track(&mut yandex_playlist, &track).await?;
                transferred += 1;
            }
            None => unavailable.push(name),
        }

        progress.set_message(progress_line(transferred, total, unavailable.len()));
        progress.inc(1);
    }

    progress.finish_with_message(summary_line(transferred, total));

    if !unavailable.is_empty() {
        println!("{}", unavailable_report(&unavailable));
    }

    println!("Done");

    Ok(())
}

fn progress_line(transferred: usize, total: usize, unavailable: usize) -> String {
    format!("Transferred {transferred} of {total}, {unavailable} unavailable")
}

fn summary_line(transferred: usize, total: usize) -> String {
    format!("Transferred {transferred} of {total}")
}

fn unavailable_report(unavailable: &[TrackName]) -> String {
    let names = unavailable
        .iter()
        .map(|name| name.to_string())
        .collect::<Vec<String>>()
        .join("\n");

    format!("{} unavailable:\n{}", unavailable.len(), names)
}
