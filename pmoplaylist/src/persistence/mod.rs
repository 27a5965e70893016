//! Persistance de la playlist dans un fichier texte
//!
//! Format : un morceau par ligne, `titre|artiste|durée`, durée en secondes
//! (entier base 10). Pas d'en-tête, pas d'échappement : un `|` dans un champ
//! produit un fichier que `load` rejettera pour cette ligne.

use crate::playlist::song::Song;
use crate::playlist::Playlist;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Séparateur de champs
pub const DELIMITER: char = '|';

/// Fichier de données par défaut (relatif au répertoire courant)
pub const DEFAULT_DATA_FILE: &str = "playlist_data.txt";

/// Issue d'un chargement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Aucun fichier : on démarre avec une playlist vide
    NoPriorData,
    /// Fichier lu ; les lignes mal formées ont été ignorées
    Loaded { loaded: usize, skipped: usize },
}

/// Sérialise un morceau en une ligne (sans le saut de ligne)
pub fn format_record(song: &Song) -> String {
    format!(
        "{}{DELIMITER}{}{DELIMITER}{}",
        song.title, song.artist, song.duration
    )
}

/// Analyse une ligne du fichier
///
/// `line_no` (à partir de 1) n'est utilisé que pour l'erreur.
pub fn parse_record(line: &str, line_no: usize) -> Result<Song> {
    let line = line.trim_end_matches(['\n', '\r']);
    let fields: Vec<&str> = line.split(DELIMITER).collect();

    let [title, artist, duration] = fields.as_slice() else {
        return Err(Error::Parse {
            line: line_no,
            reason: format!("expected 3 fields, found {}", fields.len()),
        });
    };

    let duration = duration.trim().parse::<u32>().map_err(|e| Error::Parse {
        line: line_no,
        reason: format!("invalid duration '{}': {}", duration, e),
    })?;

    Ok(Song::new(*title, *artist, duration))
}

/// Sauvegarde la playlist, en écrasant le fichier existant
///
/// La playlist en mémoire n'est jamais modifiée, même en cas d'échec.
pub fn save(playlist: &Playlist, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);

    for song in playlist.iter() {
        if song.title.contains(DELIMITER) || song.artist.contains(DELIMITER) {
            warn!(
                title = %song.title,
                "Field contains the delimiter, record will not reload cleanly"
            );
        }
        writeln!(writer, "{}", format_record(song)).map_err(|e| Error::io(path, e))?;
    }
    writer.flush().map_err(|e| Error::io(path, e))?;

    info!(path = %path.display(), count = playlist.count(), "Playlist saved");
    Ok(())
}

/// Charge le fichier et ajoute chaque morceau valide à la playlist
///
/// Un fichier absent n'est pas une erreur ([`LoadOutcome::NoPriorData`]).
/// Les lignes mal formées sont journalisées puis ignorées ; les lignes vides
/// sont ignorées sans avertissement.
pub fn load(playlist: &mut Playlist, path: impl AsRef<Path>) -> Result<LoadOutcome> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "No saved playlist found");
            return Ok(LoadOutcome::NoPriorData);
        }
        Err(e) => return Err(Error::io(path, e)),
    };

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut line_no = 0;
    let mut loaded = 0;
    let mut skipped = 0;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| Error::io(path, e))?;
        if n == 0 {
            break;
        }
        line_no += 1;

        let record = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim_end_matches(['\n', '\r']).is_empty() => continue,
            Ok(line) => parse_record(line, line_no),
            Err(e) => Err(Error::Parse {
                line: line_no,
                reason: format!("invalid UTF-8: {}", e),
            }),
        };

        match record {
            Ok(song) => {
                playlist.append(song.title, song.artist, song.duration);
                loaded += 1;
            }
            Err(e) => {
                warn!(error = %e, "Skipping malformed record");
                skipped += 1;
            }
        }
    }

    debug!(lines = line_no, "Finished reading playlist file");
    info!(path = %path.display(), loaded, skipped, "Playlist loaded");
    Ok(LoadOutcome::Loaded { loaded, skipped })
}
