use std::{fs, io, path::Path};

use crate::{management::SkipList, types::Playlist};

/// Turns a raw filename into a search query: strip the extension, drop
/// trailing dotted release tags, keep ASCII letters only, collapse spaces.
pub fn normalize_filename(filename: &str) -> String {
    let stem = match filename.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => filename,
    };

    let stem = strip_release_tags(stem);

    let cleaned: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphabetic() { c } else { ' ' })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

// A trailing run of dot-separated alphanumeric segments ending in a purely
// alphabetic one ("Name.2019.1080p.FLAC") is release-tag noise, not title.
// Truncates at the earliest dot whose tail matches that shape.
fn strip_release_tags(stem: &str) -> &str {
    for (idx, ch) in stem.char_indices() {
        if ch != '.' {
            continue;
        }

        let tail = &stem[idx + 1..];
        let mut segments = tail.split('.').peekable();
        let mut matches = segments.peek().is_some();

        while let Some(segment) = segments.next() {
            let is_last = segments.peek().is_none();
            let shape_ok = if is_last {
                !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphabetic())
            } else {
                !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric())
            };

            if !shape_ok {
                matches = false;
                break;
            }
        }

        if matches {
            return &stem[..idx];
        }
    }

    stem
}

pub fn default_playlist_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

/// First exact name match among the user's playlists wins; identity is
/// id-based from then on, which keeps acquisition idempotent across runs.
pub fn find_playlist_by_name<'a>(playlists: &'a [Playlist], name: &str) -> Option<&'a Playlist> {
    playlists.iter().find(|p| p.name == name)
}

/// Regular files of the folder in directory-listing order.
pub fn list_song_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(files)
}

pub struct SearchPlan {
    /// (file name, query) pairs that go to the catalog search.
    pub lookups: Vec<(String, String)>,
    /// Files whose normalized name is on the skip list; no search happens.
    pub skipped: Vec<(String, String)>,
    /// Files that normalized to an empty query.
    pub unmatchable: Vec<String>,
}

pub fn build_search_plan(files: &[String], skiplist: &SkipList) -> SearchPlan {
    let mut plan = SearchPlan {
        lookups: Vec::new(),
        skipped: Vec::new(),
        unmatchable: Vec::new(),
    };

    for file in files {
        let query = normalize_filename(file);
        if query.is_empty() {
            plan.unmatchable.push(file.clone());
        } else if skiplist.contains(&query) {
            plan.skipped.push((file.clone(), query));
        } else {
            plan.lookups.push((file.clone(), query));
        }
    }

    plan
}
