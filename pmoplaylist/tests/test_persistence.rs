use pmoplaylist::{persistence, Error, LoadOutcome, Playlist, Song};
use std::fs;
use tempfile::TempDir;

/// Crée un répertoire temporaire et le chemin du fichier de données
fn data_file() -> (TempDir, std::path::PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("playlist_data.txt");
    (temp_dir, path)
}

fn songs(pl: &Playlist) -> Vec<Song> {
    pl.iter().cloned().collect()
}

#[test]
fn test_save_format() {
    let (_temp_dir, path) = data_file();

    let mut pl = Playlist::new("Test");
    pl.append("Song A", "Artist X", 200);
    pl.append("Song B", "Artist Y", 125);
    persistence::save(&pl, &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "Song A|Artist X|200\nSong B|Artist Y|125\n");
}

#[test]
fn test_round_trip() {
    let (_temp_dir, path) = data_file();

    let mut original = Playlist::new("Test");
    original.append("Love Story", "Taylor Swift", 235);
    original.append("Yesterday", "The Beatles", 125);
    original.append("Yesterday", "Cover Band", 130);
    original.append("Long Title With Spaces", "Ärtist Ünicode", 0);
    persistence::save(&original, &path).unwrap();

    let mut restored = Playlist::new("Test");
    let outcome = persistence::load(&mut restored, &path).unwrap();

    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            loaded: 4,
            skipped: 0
        }
    );
    assert_eq!(songs(&original), songs(&restored));
}

#[test]
fn test_round_trip_empty() {
    let (_temp_dir, path) = data_file();

    let original = Playlist::new("Test");
    persistence::save(&original, &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");

    let mut restored = Playlist::new("Test");
    let outcome = persistence::load(&mut restored, &path).unwrap();
    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            loaded: 0,
            skipped: 0
        }
    );
    assert!(restored.is_empty());
}

#[test]
fn test_save_overwrites() {
    let (_temp_dir, path) = data_file();
    fs::write(&path, "Old|Stuff|1\nMore|Old|2\nEven|More|3\n").unwrap();

    let mut pl = Playlist::new("Test");
    pl.append("New", "Song", 42);
    persistence::save(&pl, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "New|Song|42\n");
}

#[test]
fn test_load_missing_file() {
    let (_temp_dir, path) = data_file();

    let mut pl = Playlist::new("Test");
    let outcome = persistence::load(&mut pl, &path).unwrap();

    assert_eq!(outcome, LoadOutcome::NoPriorData);
    assert!(pl.is_empty());
}

#[test]
fn test_load_skips_malformed_lines() {
    let (_temp_dir, path) = data_file();
    fs::write(
        &path,
        "Good One|Artist A|100\n\
         Short Line|No Duration\n\
         Bad Duration|Artist B|abc\n\
         \n\
         Good Two|Artist C|200\r\n\
         Too|Many|Fields|300\n\
         Negative|Artist D|-10\n\
         Good Three|Artist E|300",
    )
    .unwrap();

    let mut pl = Playlist::new("Test");
    let outcome = persistence::load(&mut pl, &path).unwrap();

    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            loaded: 3,
            skipped: 4
        }
    );
    let titles: Vec<&str> = pl.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Good One", "Good Two", "Good Three"]);
    assert_eq!(pl.list().total_duration(), 600);
}

#[test]
fn test_load_skips_invalid_utf8() {
    let (_temp_dir, path) = data_file();
    let mut bytes = b"Good|Artist|10\n".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, b'|', b'x', b'|', b'1', b'\n']);
    fs::write(&path, bytes).unwrap();

    let mut pl = Playlist::new("Test");
    let outcome = persistence::load(&mut pl, &path).unwrap();
    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            loaded: 1,
            skipped: 1
        }
    );
}

#[test]
fn test_load_appends_after_existing_songs() {
    let (_temp_dir, path) = data_file();
    fs::write(&path, "From File|Artist|60\n").unwrap();

    let mut pl = Playlist::new("Test");
    pl.append("In Memory", "Artist", 30);
    persistence::load(&mut pl, &path).unwrap();

    let titles: Vec<&str> = pl.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["In Memory", "From File"]);
}

#[test]
fn test_save_to_unwritable_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("missing_dir").join("playlist_data.txt");

    let mut pl = Playlist::new("Test");
    pl.append("Song A", "Artist X", 200);

    let err = persistence::save(&pl, &path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(pl.count(), 1);
}

#[test]
fn test_load_directory_is_io_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut pl = Playlist::new("Test");
    let result = persistence::load(&mut pl, temp_dir.path());
    assert!(matches!(result, Err(Error::Io { .. })));
    assert!(pl.is_empty());
}

#[test]
fn test_round_trip_various_sizes() {
    for size in [0usize, 1, 2, 50] {
        let (_temp_dir, path) = data_file();

        let mut original = Playlist::new("Test");
        for i in 0..size {
            original.append(
                format!("Title {i}"),
                format!("Artist {}", i % 7),
                (i * 37) as u32,
            );
        }
        persistence::save(&original, &path).unwrap();

        let mut restored = Playlist::new("Test");
        let outcome = persistence::load(&mut restored, &path).unwrap();

        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                loaded: size,
                skipped: 0
            },
            "size {size}"
        );
        assert_eq!(songs(&original), songs(&restored), "size {size}");
        assert_eq!(
            original.list().total_duration(),
            restored.list().total_duration()
        );
    }
}

#[test]
fn test_delimiter_in_field_is_skipped_on_reload() {
    let (_temp_dir, path) = data_file();

    let mut original = Playlist::new("Test");
    original.append("Before", "Artist A", 100);
    original.append("Either|Or", "Artist B", 200);
    original.append("After", "Artist C", 300);
    persistence::save(&original, &path).unwrap();

    // Le champ n'est pas échappé : la ligne contient quatre champs
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("Either|Or|Artist B|200\n"));

    let mut restored = Playlist::new("Test");
    let outcome = persistence::load(&mut restored, &path).unwrap();

    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            loaded: 2,
            skipped: 1
        }
    );
    let titles: Vec<&str> = restored.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Before", "After"]);
}
