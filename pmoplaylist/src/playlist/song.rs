//! Song : un enregistrement titre / artiste / durée

use std::fmt;

/// Longueur indicative des champs texte (héritée du format de fichier d'origine)
///
/// Ce n'est pas une contrainte : un champ plus long est accepté et
/// signalé par un `warn!` au moment de l'ajout.
pub const SOFT_FIELD_LIMIT: usize = 99;

/// Un morceau de la playlist
///
/// Aucun identifiant : le titre sert de clé de recherche mais n'est pas
/// unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub artist: String,
    /// Durée en secondes
    pub duration: u32,
}

impl Song {
    /// Crée un nouveau morceau
    pub fn new(title: impl Into<String>, artist: impl Into<String>, duration: u32) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration,
        }
    }

    /// Comparaison du titre après repli de casse ASCII
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.eq_ignore_ascii_case(title)
    }

    /// Vrai si `keyword` est une sous-chaîne exacte du titre ou de l'artiste
    pub fn contains(&self, keyword: &str) -> bool {
        self.title.contains(keyword) || self.artist.contains(keyword)
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({})",
            self.title,
            self.artist,
            format_duration(self.duration as u64)
        )
    }
}

/// Formate une durée en secondes sous la forme `m:ss`
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
