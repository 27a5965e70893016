//! Boucle interactive : menu numéroté au-dessus de la playlist

use pmoplaylist::{format_duration, persistence, Error, LoadOutcome, Playlist};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{error, warn};

const SEPARATOR: &str =
    "---------------------------------------------------------------------------";

/// Suite à donner après une action du menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Shell interactif
///
/// Générique sur l'entrée et la sortie pour pouvoir être piloté en test.
pub struct Shell<R, W> {
    playlist: Playlist,
    data_path: PathBuf,
    input: R,
    output: W,
    /// Le chargement initial a échoué : ne pas écraser le fichier à la sortie
    load_failed: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(playlist: Playlist, data_path: PathBuf, input: R, output: W) -> Self {
        Self {
            playlist,
            data_path,
            input,
            output,
            load_failed: false,
        }
    }

    /// Charge l'état sauvegardé et rend compte du résultat
    pub fn start(&mut self) -> io::Result<()> {
        match persistence::load(&mut self.playlist, &self.data_path) {
            Ok(LoadOutcome::NoPriorData) => {
                writeln!(self.output, " [System] No saved playlist found. Starting fresh.")
            }
            Ok(LoadOutcome::Loaded { skipped, .. }) => {
                writeln!(
                    self.output,
                    " [System] Loaded {} songs from file.",
                    self.playlist.count()
                )?;
                if skipped > 0 {
                    writeln!(
                        self.output,
                        " [Warning] Skipped {} malformed line(s).",
                        skipped
                    )?;
                }
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to load playlist");
                self.load_failed = true;
                writeln!(self.output, " [Error] Could not load playlist: {}", e)
            }
        }
    }

    /// Boucle principale ; se termine sur « Save & Exit » ou fin d'entrée
    ///
    /// La sauvegarde finale est tentée même si la session s'interrompt sur
    /// une erreur d'entrée/sortie ; cette erreur est renvoyée ensuite.
    pub fn run(&mut self) -> io::Result<()> {
        let session = self.session();
        if let Err(e) = &session {
            warn!(error = %e, "Interactive session interrupted");
        }
        self.save_and_exit()?;
        session
    }

    fn session(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };

            let flow = match choice.trim().parse::<u32>() {
                Ok(1) => self.add_song()?,
                Ok(2) => self.remove_song()?,
                Ok(3) => {
                    self.display_playlist()?;
                    Flow::Continue
                }
                Ok(4) => self.search_song()?,
                Ok(5) => Flow::Exit,
                _ => {
                    writeln!(self.output, "Invalid choice! Try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }

        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== PMOSONGS PLAYLIST MANAGER ===")?;
        writeln!(self.output, "1. Add Song")?;
        writeln!(self.output, "2. Remove Song")?;
        writeln!(self.output, "3. View Playlist")?;
        writeln!(self.output, "4. Search Song")?;
        writeln!(self.output, "5. Save & Exit")?;
        write!(self.output, "Enter choice: ")?;
        self.output.flush()
    }

    /// Lit une ligne sans son terminateur ; `None` en fin d'entrée
    ///
    /// Les octets non UTF-8 sont remplacés par U+FFFD.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()
    }

    fn add_song(&mut self) -> io::Result<Flow> {
        let Some(title) = self.prompt("Enter Title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(artist) = self.prompt("Enter Artist: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(duration) = self.prompt("Enter Duration (seconds): ")? else {
            return Ok(Flow::Exit);
        };

        if title.is_empty() {
            writeln!(self.output, "Invalid title.")?;
            return Ok(Flow::Continue);
        }
        if artist.is_empty() {
            writeln!(self.output, "Invalid artist.")?;
            return Ok(Flow::Continue);
        }

        match duration.trim().parse::<i64>() {
            Ok(d) if d > 0 && d <= u32::MAX as i64 => {
                writeln!(self.output, " [Success] Added: '{}' by {}", title, artist)?;
                self.playlist.append(title, artist, d as u32);
            }
            _ => writeln!(self.output, "Invalid duration.")?,
        }
        Ok(Flow::Continue)
    }

    fn remove_song(&mut self) -> io::Result<Flow> {
        self.display_playlist()?;
        let Some(title) = self.prompt("Enter Title to Remove (exact or case-insensitive): ")?
        else {
            return Ok(Flow::Exit);
        };

        match self.playlist.remove_by_title(&title) {
            Ok(_) => writeln!(self.output, " [Success] Removed song: {}", title)?,
            Err(Error::EmptyPlaylist) => writeln!(self.output, " [Error] Playlist is empty!")?,
            Err(Error::SongNotFound(t)) => {
                writeln!(self.output, " [Error] Song not found: {}", t)?
            }
            Err(e) => writeln!(self.output, " [Error] {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn search_song(&mut self) -> io::Result<Flow> {
        let Some(keyword) = self.prompt("Enter Search Term (Artist or Title): ")? else {
            return Ok(Flow::Exit);
        };

        if self.playlist.is_empty() {
            writeln!(self.output, "Playlist is empty.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\n--- Search Results for '{}' ---", keyword)?;
        let mut found = false;
        for song in self.playlist.search(&keyword) {
            writeln!(
                self.output,
                " > {} by {} ({}m {}s)",
                song.title,
                song.artist,
                song.duration / 60,
                song.duration % 60
            )?;
            found = true;
        }
        if !found {
            writeln!(self.output, "No matches found.")?;
        }
        Ok(Flow::Continue)
    }

    fn display_playlist(&mut self) -> io::Result<()> {
        let listing = self.playlist.list();
        if listing.is_empty() {
            return writeln!(self.output, "\n--- Playlist: {} (Empty) ---", listing.name());
        }

        writeln!(
            self.output,
            "\n--- {} ({} Songs) ---",
            listing.name(),
            listing.count()
        )?;
        writeln!(self.output, "{:<30} {:<30} {:<10}", "Title", "Artist", "Duration")?;
        writeln!(self.output, "{}", SEPARATOR)?;
        for song in listing.songs() {
            writeln!(
                self.output,
                "{:<30} {:<30} {}",
                song.title,
                song.artist,
                format_duration(song.duration as u64)
            )?;
        }
        writeln!(self.output, "{}", SEPARATOR)?;

        let total = listing.total_duration();
        writeln!(
            self.output,
            "Total Playtime: {} min {} sec",
            total / 60,
            total % 60
        )
    }

    fn save_and_exit(&mut self) -> io::Result<()> {
        let saved = if self.load_failed {
            Err(None)
        } else {
            persistence::save(&self.playlist, &self.data_path).map_err(Some)
        };

        match saved {
            Err(None) => {
                warn!(path = %self.data_path.display(), "Startup load failed, skipping save");
                writeln!(
                    self.output,
                    " [Warning] Not saving: '{}' could not be loaded at startup.",
                    self.data_path.display()
                )?
            }
            Ok(()) => writeln!(
                self.output,
                " [System] Playlist saved to '{}'.",
                self.data_path.display()
            )?,
            Err(Some(e)) => {
                warn!(error = %e, "Failed to save playlist");
                writeln!(self.output, " [Error] Could not save playlist: {}", e)?
            }
        }

        self.playlist.release();
        writeln!(self.output, "Exiting... Goodbye!")?;
        self.output.flush()
    }
}
