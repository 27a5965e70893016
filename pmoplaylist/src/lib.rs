//! # pmoplaylist - Playlist ordonnée de morceaux avec persistance texte
//!
//! Cette crate fournit :
//! - Une playlist nommée, ordonnée par ordre d'insertion
//! - L'ajout en fin et la suppression par titre (insensible à la casse ASCII)
//! - La recherche par sous-chaîne sur titre ou artiste
//! - Le listing avec durée totale
//! - La persistance dans un fichier texte `titre|artiste|durée`
//!
//! # Architecture
//!
//! - **Playlist** : propriétaire exclusif de ses [`Song`]
//! - **persistence** : `save` / `load` vers le fichier de données
//! - **PlaylistConfigExt** : chemin du fichier et nom de playlist via pmoconfig
//!
//! # Exemple d'utilisation
//!
//! ```no_run
//! use pmoplaylist::{persistence, LoadOutcome, Playlist};
//!
//! # fn main() -> pmoplaylist::Result<()> {
//! let mut playlist = Playlist::new("My Favorites");
//!
//! if let LoadOutcome::NoPriorData = persistence::load(&mut playlist, "playlist_data.txt")? {
//!     println!("Starting fresh");
//! }
//!
//! playlist.append("Yesterday", "The Beatles", 125);
//! playlist.remove_by_title("yesterday")?;
//!
//! for song in playlist.search("Beat") {
//!     println!("{song}");
//! }
//!
//! persistence::save(&playlist, "playlist_data.txt")?;
//! # Ok(())
//! # }
//! ```

mod error;
pub mod persistence;
mod playlist;

#[cfg(feature = "pmoconfig")]
mod config_ext;

// Réexports publics
pub use error::{Error, Result};
pub use persistence::{LoadOutcome, DEFAULT_DATA_FILE};
pub use playlist::song::{format_duration, Song, SOFT_FIELD_LIMIT};
pub use playlist::{Listing, Playlist};

#[cfg(feature = "pmoconfig")]
pub use config_ext::PlaylistConfigExt;
