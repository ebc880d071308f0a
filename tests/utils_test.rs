use spofolcli::management::SkipList;
use spofolcli::types::Playlist;
use spofolcli::utils::*;
use std::path::Path;

// Helper function to create a test playlist
fn create_test_playlist(id: &str, name: &str) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn test_normalize_filename_strips_extension_and_symbols() {
    assert_eq!(normalize_filename("My Song (2021).mp3"), "My Song");

    // Digits and punctuation collapse into single spaces
    assert_eq!(normalize_filename("01 - Intro.flac"), "Intro");
    assert_eq!(normalize_filename("A_B__C.ogg"), "A B C");
}

#[test]
fn test_normalize_filename_strips_dotted_release_tags() {
    // Extension strip, then the trailing dotted chain goes away
    assert_eq!(normalize_filename("Track01.Remix.mp3"), "Track");
    assert_eq!(normalize_filename("Song.Name.2019.1080p.FLAC.mp3"), "Song");

    // A dot followed by a space is part of the title, not a release tag
    assert_eq!(normalize_filename("Mr. Brightside.mp3"), "Mr Brightside");
}

#[test]
fn test_normalize_filename_no_extension() {
    // Input without any dot is only cleaned, never truncated
    assert_eq!(normalize_filename("Plain Title"), "Plain Title");
    assert_eq!(normalize_filename("Track99"), "Track");
}

#[test]
fn test_normalize_filename_is_idempotent() {
    let inputs = [
        "My Song (2021)",
        "Track01.Remix",
        "Song.Name.2019.FLAC",
        "Mr. Brightside",
        "already clean",
    ];

    for input in inputs {
        let once = normalize_filename(input);
        let twice = normalize_filename(&once);
        assert_eq!(once, twice, "normalize is not idempotent for {:?}", input);
    }
}

#[test]
fn test_normalize_filename_empty_results() {
    assert_eq!(normalize_filename(""), "");
    assert_eq!(normalize_filename("12345.mp3"), "");
    assert_eq!(normalize_filename(".flac"), "");
}

#[test]
fn test_default_playlist_name() {
    // The full final path component, not a single trailing character
    assert_eq!(
        default_playlist_name(Path::new("/music/Summer Hits")),
        Some("Summer Hits".to_string())
    );

    // A trailing slash does not change the component
    assert_eq!(
        default_playlist_name(Path::new("/music/Summer Hits/")),
        Some("Summer Hits".to_string())
    );

    // The filesystem root has no final component
    assert_eq!(default_playlist_name(Path::new("/")), None);
}

#[test]
fn test_find_playlist_by_name_first_exact_match() {
    let playlists = vec![
        create_test_playlist("id1", "Road Trip"),
        create_test_playlist("id2", "Summer Hits"),
        create_test_playlist("id3", "Summer Hits"),
    ];

    // First exact name match wins
    let found = find_playlist_by_name(&playlists, "Summer Hits").unwrap();
    assert_eq!(found.id, "id2");

    // Selecting twice yields the same playlist id - acquisition stays
    // idempotent across runs
    let again = find_playlist_by_name(&playlists, "Summer Hits").unwrap();
    assert_eq!(found.id, again.id);
}

#[test]
fn test_find_playlist_by_name_exact_only() {
    let playlists = vec![create_test_playlist("id1", "Summer Hits")];

    assert!(find_playlist_by_name(&playlists, "summer hits").is_none());
    assert!(find_playlist_by_name(&playlists, "Summer").is_none());
    assert!(find_playlist_by_name(&playlists, "Summer Hits").is_some());
}

#[test]
fn test_build_search_plan_skip_set_suppresses_search() {
    let skiplist = SkipList::from_entries(["Interlude.mp3"]);
    let files = vec![
        "My Song.mp3".to_string(),
        "Interlude.mp3".to_string(),
        "Other Track.mp3".to_string(),
    ];

    let plan = build_search_plan(&files, &skiplist);

    // The skipped file never reaches the lookup list, so no search call
    // can be made for it
    let lookup_files: Vec<&str> = plan.lookups.iter().map(|(f, _)| f.as_str()).collect();
    assert_eq!(lookup_files, vec!["My Song.mp3", "Other Track.mp3"]);

    assert_eq!(plan.skipped.len(), 1);
    assert_eq!(plan.skipped[0].0, "Interlude.mp3");
    assert_eq!(plan.skipped[0].1, "Interlude");
}

#[test]
fn test_build_search_plan_unmatchable_files() {
    let skiplist = SkipList::from_entries(Vec::<String>::new());
    let files = vec!["12345.mp3".to_string(), "Real Song.mp3".to_string()];

    let plan = build_search_plan(&files, &skiplist);

    assert_eq!(plan.unmatchable, vec!["12345.mp3".to_string()]);
    assert_eq!(plan.lookups.len(), 1);
    assert_eq!(plan.lookups[0].1, "Real Song");
}

#[test]
fn test_build_search_plan_empty_folder() {
    let skiplist = SkipList::from_entries(Vec::<String>::new());
    let plan = build_search_plan(&[], &skiplist);

    assert!(plan.lookups.is_empty());
    assert!(plan.skipped.is_empty());
    assert!(plan.unmatchable.is_empty());
}

#[test]
fn test_list_song_files_regular_files_only() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.mp3"), b"x").unwrap();
    std::fs::write(dir.path().join("b.flac"), b"x").unwrap();
    std::fs::create_dir(dir.path().join("covers")).unwrap();

    let mut files = list_song_files(dir.path()).unwrap();
    files.sort();

    assert_eq!(files, vec!["a.mp3".to_string(), "b.flac".to_string()]);
}

#[test]
fn test_list_song_files_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    assert!(list_song_files(&missing).is_err());
}
