use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::Config,
    error, info,
    management::{SkipList, TokenManager},
    spotify, success,
    types::{MatchTableRow, TrackMatch},
    utils, warning,
};

pub async fn sync(path: PathBuf, playlist: Option<String>, force_token: bool, preview: bool) {
    let config = match Config::load().await {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    };

    let dir = match path.canonicalize() {
        Ok(dir) if dir.is_dir() => dir,
        _ => error!("{} is not a directory", path.display()),
    };

    let playlist_name = match playlist.or_else(|| utils::default_playlist_name(&dir)) {
        Some(name) => name,
        None => error!("Cannot derive a playlist name from {}, use --playlist", dir.display()),
    };

    let token = acquire_token(&config, force_token).await;

    let profile = match spotify::profile::get(&token).await {
        Ok(profile) => profile,
        Err(e) => error!("Failed to fetch profile: {}", e),
    };

    // Playlist acquisition comes before any search; a fatal listing failure
    // must abort the run before requests are spent.
    let playlist_id = if preview {
        None
    } else {
        Some(acquire_playlist(&token, &profile.id, &playlist_name).await)
    };

    let skiplist = SkipList::load().await;
    if !skiplist.is_empty() {
        info!("Skip list:");
        for entry in skiplist.iter() {
            println!("    {}", entry);
        }
    }

    let files = match utils::list_song_files(&dir) {
        Ok(files) => files,
        Err(e) => error!("Failed to read {}: {}", dir.display(), e),
    };

    let plan = utils::build_search_plan(&files, &skiplist);
    for file in &plan.unmatchable {
        warning!("Cannot derive a search query from '{}'", file);
    }

    let (matches, rows, misses) = search_tracks(&token, &plan).await;

    println!("{}", Table::new(rows));

    for query in &misses {
        warning!("No match for '{}'", query);
    }

    if preview {
        info!("Preview only. Nothing was sent to Spotify.");
        return;
    }

    let uris: Vec<String> = matches.iter().map(|m| m.uri.clone()).collect();
    let Some(playlist_id) = playlist_id else {
        return;
    };

    match spotify::playlist::add_tracks(&token, &playlist_id, &uris).await {
        Ok(Some(_)) => success!("Added {} tracks to '{}'", uris.len(), playlist_name),
        Ok(None) => info!("No tracks matched. Playlist left untouched."),
        Err(e) => error!("Failed to add tracks to '{}': {}", playlist_name, e),
    }
}

/// Cached token while it is fresh, a newly generated one otherwise.
async fn acquire_token(config: &Config, force_token: bool) -> String {
    if !force_token {
        match TokenManager::load().await {
            Some(manager) => match manager.valid_access_token() {
                Some(token) => return token.to_string(),
                None => info!("Access token has expired. Regenerating"),
            },
            None => info!("Access token not present. Generating"),
        }
    }

    spotify::auth::regenerate(config).await
}

/// Reuses the first playlist whose name matches exactly, creates a public
/// one otherwise. Both failure paths are fatal.
async fn acquire_playlist(token: &str, user_id: &str, name: &str) -> String {
    let playlists = match spotify::playlist::list(token, user_id).await {
        Ok(playlists) => playlists,
        Err(e) => error!("Failed to list playlists: {}", e),
    };

    match utils::find_playlist_by_name(&playlists, name) {
        Some(playlist) => {
            info!("Reusing existing playlist '{}'", playlist.name);
            playlist.id.clone()
        }
        None => match spotify::playlist::create(token, user_id, name).await {
            Ok(playlist) => {
                success!("Playlist '{}' created", playlist.name);
                playlist.id
            }
            Err(e) => error!("Failed to create playlist '{}': {}", name, e),
        },
    }
}

async fn search_tracks(
    token: &str,
    plan: &utils::SearchPlan,
) -> (Vec<TrackMatch>, Vec<MatchTableRow>, Vec<String>) {
    let mut matches: Vec<TrackMatch> = Vec::new();
    let mut rows: Vec<MatchTableRow> = Vec::new();
    let mut misses: Vec<String> = Vec::new();

    let pb = ProgressBar::new(plan.lookups.len() as u64);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {pos}/{len} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    for (file, query) in &plan.lookups {
        pb.set_message(format!("Searching '{}'...", query));

        match spotify::search::track(token, query).await {
            Ok(Some(track)) => {
                rows.push(MatchTableRow {
                    file: file.clone(),
                    query: query.clone(),
                    result: format!("{} - {}", track.artist, track.title),
                });
                matches.push(track);
            }
            Ok(None) => {
                rows.push(MatchTableRow {
                    file: file.clone(),
                    query: query.clone(),
                    result: "(no match)".to_string(),
                });
                misses.push(query.clone());
            }
            Err(e) => {
                pb.suspend(|| warning!("Search failed for '{}': {}", query, e));
                rows.push(MatchTableRow {
                    file: file.clone(),
                    query: query.clone(),
                    result: "(search failed)".to_string(),
                });
                misses.push(query.clone());
            }
        }

        pb.inc(1);
    }

    for (file, query) in &plan.skipped {
        rows.push(MatchTableRow {
            file: file.clone(),
            query: query.clone(),
            result: "(skipped)".to_string(),
        });
    }

    pb.finish_and_clear();

    (matches, rows, misses)
}
