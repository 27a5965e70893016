//! Playlist : séquence ordonnée de morceaux

pub mod song;

use self::song::{Song, SOFT_FIELD_LIMIT};
use crate::{Error, Result};
use std::collections::VecDeque;
use tracing::{debug, info, warn};

/// Playlist nommée
///
/// Les morceaux sont conservés dans l'ordre d'insertion ; le nombre de
/// morceaux est toujours dérivé de la séquence elle-même.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    name: String,
    songs: VecDeque<Song>,
}

impl Playlist {
    /// Crée une playlist vide
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            songs: VecDeque::new(),
        }
    }

    /// Nom d'affichage
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nombre de morceaux
    pub fn count(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Récupère un morceau par position
    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    /// Itère sur les morceaux dans l'ordre d'insertion
    pub fn iter(&self) -> impl Iterator<Item = &Song> + '_ {
        self.songs.iter()
    }

    /// Ajoute un morceau en fin de playlist
    ///
    /// Aucune validation n'est faite ici : refuser une durée nulle ou un
    /// titre vide est du ressort de l'appelant.
    pub fn append(&mut self, title: impl Into<String>, artist: impl Into<String>, duration: u32) {
        let song = Song::new(title, artist, duration);

        if song.title.chars().count() > SOFT_FIELD_LIMIT
            || song.artist.chars().count() > SOFT_FIELD_LIMIT
        {
            warn!(
                title = %song.title,
                limit = SOFT_FIELD_LIMIT,
                "Song field longer than the usual limit"
            );
        }

        info!(title = %song.title, artist = %song.artist, "Added song");
        self.songs.push_back(song);
    }

    /// Supprime le premier morceau dont le titre correspond (casse ASCII ignorée)
    ///
    /// Seule la première occurrence est retirée ; les homonymes suivants
    /// restent en place.
    pub fn remove_by_title(&mut self, title: &str) -> Result<Song> {
        if self.songs.is_empty() {
            return Err(Error::EmptyPlaylist);
        }

        let index = self
            .songs
            .iter()
            .position(|song| song.title_matches(title))
            .ok_or_else(|| Error::SongNotFound(title.to_string()))?;

        let removed = self
            .songs
            .remove(index)
            .ok_or_else(|| Error::SongNotFound(title.to_string()))?;

        debug!(title = %removed.title, index, remaining = self.songs.len(), "Removed song");
        Ok(removed)
    }

    /// Recherche paresseuse sur titre ou artiste (sous-chaîne, casse respectée)
    ///
    /// Un résultat vide n'est pas une erreur ; pour distinguer le cas
    /// « playlist vide », tester [`Playlist::is_empty`] au préalable.
    pub fn search<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = &'a Song> + 'a {
        debug!(keyword, "Searching playlist");
        self.songs.iter().filter(move |song| song.contains(keyword))
    }

    /// Vue complète de la playlist avec la durée totale
    pub fn list(&self) -> Listing<'_> {
        let total_duration = self.songs.iter().map(|s| s.duration as u64).sum();
        Listing {
            name: &self.name,
            songs: &self.songs,
            total_duration,
        }
    }

    /// Vide complètement la playlist (idempotent)
    pub fn release(&mut self) {
        let released = self.songs.len();
        self.songs.clear();
        debug!(released, "Released playlist");
    }
}

/// Résultat de [`Playlist::list`]
#[derive(Debug, Clone, Copy)]
pub struct Listing<'a> {
    name: &'a str,
    songs: &'a VecDeque<Song>,
    total_duration: u64,
}

impl<'a> Listing<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn songs(&self) -> impl Iterator<Item = &'a Song> + 'a {
        self.songs.iter()
    }

    pub fn count(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Somme des durées, en secondes
    pub fn total_duration(&self) -> u64 {
        self.total_duration
    }
}
