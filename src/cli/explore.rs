use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::{Overrides, Settings},
    error,
    http::ResilientClient,
    info,
    pipeline::ArtistExplorer,
    success,
    types::{ArtistReport, AudioFeature, FeatureTableRow, SongRow, SongTableRow},
    utils, warning,
};

pub async fn explore(
    artist_name: String,
    feature: Option<AudioFeature>,
    json: bool,
    overrides: Overrides,
) {
    let settings = match Settings::from_env(overrides) {
        Ok(s) => s,
        Err(e) => error!("Please provide all required inputs. Err: {}", e),
    };

    if artist_name.trim().is_empty() {
        error!("Please provide all required inputs. Err: missing artist name");
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching data...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let client = match ResilientClient::with_user_agent() {
        Ok(c) => c,
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot set up HTTP client. Err: {}", e);
        }
    };

    let notice_pb = pb.clone();
    let client = client.on_retry(move |notice| {
        notice_pb.suspend(|| {
            warning!(
                "Error {}: {}. Retrying in {} seconds...",
                notice.status,
                notice.body,
                notice.delay.as_secs_f64()
            )
        });
    });

    let explorer = ArtistExplorer::with_client(settings, client);
    let report = match explorer.explore(&artist_name).await {
        Ok(report) => report,
        Err(e) => {
            pb.finish_and_clear();
            error!("{}", e);
        }
    };
    pb.finish_and_clear();

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{}", out),
            Err(e) => error!("Cannot serialize report. Err: {}", e),
        }
        return;
    }

    print_report(&report, feature);
}

fn print_report(report: &ArtistReport, feature: Option<AudioFeature>) {
    let artist = &report.artist;
    success!("Data for {} fetched successfully!", artist.name);
    info!("Artist: {}", artist.name);
    info!("Followers: {}", artist.followers);
    info!("Popularity: {}", artist.popularity);

    println!("\nSongs Data\n{}\n", Table::new(song_table_rows(&report.songs)));

    if let Some(feature) = feature {
        println!(
            "Valence vs {feature} of {name} songs\n{table}\n",
            feature = feature,
            name = artist.name,
            table = Table::new(feature_table_rows(&report.songs, feature))
        );
    }

    match &report.location {
        Some(location) if location.is_resolved() => info!(
            "Origin: {} ({}) at {:.4}, {:.4}",
            location.name, location.origin, location.lat, location.lon
        ),
        Some(location) => warning!(
            "Origin of {} ({}) could not be placed on the map.",
            location.name,
            location.origin
        ),
        None => warning!("Could not retrieve artist location."),
    }
}

fn song_table_rows(songs: &[SongRow]) -> Vec<SongTableRow> {
    songs
        .iter()
        .map(|s| SongTableRow {
            track_name: s.track_name.clone(),
            album_name: s.album_name.clone(),
            release_date: s.release_date.format("%Y-%m-%d").to_string(),
            duration: utils::format_duration(s.duration_ms),
            popularity: s.popularity,
        })
        .collect()
}

fn feature_table_rows(songs: &[SongRow], feature: AudioFeature) -> Vec<FeatureTableRow> {
    songs
        .iter()
        .map(|s| FeatureTableRow {
            track_name: s.track_name.clone(),
            album_name: s.album_name.clone(),
            valence: format!("{:.3}", s.features.valence),
            feature: format!("{:.3}", feature.value_of(&s.features)),
        })
        .collect()
}
