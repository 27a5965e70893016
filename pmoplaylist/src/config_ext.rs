//! Extension de pmoconfig pour la playlist

use crate::persistence::DEFAULT_DATA_FILE;
use serde_yaml::Value;
use std::path::PathBuf;

const DEFAULT_PLAYLIST_NAME: &str = "My Favorites";

/// Trait d'extension pour pmoconfig::Config
pub trait PlaylistConfigExt {
    /// Chemin du fichier de données de la playlist
    ///
    /// Un chemin relatif est résolu par rapport au répertoire courant du
    /// processus, pas au répertoire de configuration.
    fn playlist_data_path(&self) -> PathBuf;

    /// Nom d'affichage de la playlist
    fn playlist_name(&self) -> String;
}

impl PlaylistConfigExt for pmoconfig::Config {
    fn playlist_data_path(&self) -> PathBuf {
        match self.get_value(&["playlist", "data_file"]) {
            Ok(Value::String(s)) if !s.trim().is_empty() => PathBuf::from(s),
            _ => PathBuf::from(DEFAULT_DATA_FILE),
        }
    }

    fn playlist_name(&self) -> String {
        match self.get_value(&["playlist", "name"]) {
            Ok(Value::String(s)) if !s.is_empty() => s,
            _ => DEFAULT_PLAYLIST_NAME.to_string(),
        }
    }
}
