#![warn(clippy::restriction, clippy::pedantic)]
#![allow(
    clippy::blanket_clippy_restriction_lints,
    clippy::mod_module_files,
    clippy::self_named_module_files,

    clippy::implicit_return,
    clippy::shadow_reuse,
    clippy::match_ref_pats,
    clippy::float_cmp,
    clippy::arithmetic_side_effects,
)]

//! Media library types
//!
//! Every kind of item the library can hold is a variant of [`MediaItem`], so
//! asking "is this a movie?" is a match instead of a runtime type check.

pub mod thing;

use core::fmt;

use serde::{Deserialize, Serialize};

///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Movie {
    ///
    pub name: String,

    ///
    pub director: String,
}

impl Movie {
    ///
    #[must_use]
    #[inline]
    pub fn new(name: &str, director: &str) -> Self {
        Self {
            name: name.to_owned(),
            director: director.to_owned(),
        }
    }
}

///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Song {
    ///
    pub name: String,

    ///
    pub artist: String,
}

impl Song {
    ///
    #[must_use]
    #[inline]
    pub fn new(name: &str, artist: &str) -> Self {
        Self {
            name: name.to_owned(),
            artist: artist.to_owned(),
        }
    }
}

///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MediaItem {
    ///
    Movie(Movie),

    ///
    Song(Song),
}

impl MediaItem {
    /// Shared by every kind of item
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            &Self::Movie(ref movie) => &movie.name,
            &Self::Song(ref song) => &song.name,
        }
    }

    ///
    #[must_use]
    #[inline]
    pub const fn as_movie(&self) -> Option<&Movie> {
        match self {
            &Self::Movie(ref movie) => Some(movie),
            &Self::Song(_) => None,
        }
    }

    ///
    #[must_use]
    #[inline]
    pub const fn as_song(&self) -> Option<&Song> {
        match self {
            &Self::Song(ref song) => Some(song),
            &Self::Movie(_) => None,
        }
    }
}

impl From<Movie> for MediaItem {
    #[inline]
    fn from(value: Movie) -> Self {
        Self::Movie(value)
    }
}

impl From<Song> for MediaItem {
    #[inline]
    fn from(value: Song) -> Self {
        Self::Song(value)
    }
}

impl fmt::Display for MediaItem {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            &Self::Movie(ref movie) => {
                write!(f, "Movie: {}, director: {}", movie.name, movie.director)
            }
            &Self::Song(ref song) => write!(f, "Song: {}, by {}", song.name, song.artist),
        }
    }
}

///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct LibraryCounts {
    ///
    pub movies: usize,

    ///
    pub songs: usize,
}

impl fmt::Display for LibraryCounts {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Media Library contains {} movies and {} songs",
            self.movies, self.songs
        )
    }
}

///
#[must_use]
#[inline]
pub fn count_kinds(library: &[MediaItem]) -> LibraryCounts {
    library
        .iter()
        .fold(LibraryCounts::default(), |mut counts, item| {
            match item {
                &MediaItem::Movie(_) => counts.movies += 1,
                &MediaItem::Song(_) => counts.songs += 1,
            }
            counts
        })
}

///
#[must_use]
#[inline]
pub fn demo_library() -> Vec<MediaItem> {
    vec![
        Movie::new("Venom", "Ruben Fleischer").into(),
        Movie::new("Walking Dead", "Preston A. Whitmore II").into(),
        Song::new("Closer", "Chainsmokers").into(),
        Song::new("Rap God", "Eminem").into(),
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counts_demo_library() {
        let counts = count_kinds(&demo_library());

        assert_eq!(2, counts.movies);
        assert_eq!(2, counts.songs);
        assert_eq!(
            "Media Library contains 2 movies and 2 songs",
            counts.to_string()
        );
    }

    #[test]
    fn downcast_by_variant() {
        let library = demo_library();
        let first = library.first().expect("library is not empty");

        assert_eq!("Venom", first.name());
        assert_eq!(
            Some("Ruben Fleischer"),
            first.as_movie().map(|movie| movie.director.as_str())
        );
        assert!(first.as_song().is_none());
    }

    #[test]
    fn display() {
        let lines: Vec<String> = demo_library().iter().map(ToString::to_string).collect();

        assert_eq!(
            vec![
                "Movie: Venom, director: Ruben Fleischer",
                "Movie: Walking Dead, director: Preston A. Whitmore II",
                "Song: Closer, by Chainsmokers",
                "Song: Rap God, by Eminem",
            ],
            lines
        );
    }

    #[test]
    fn tagged_json() {
        let item: MediaItem = Song::new("Closer", "Chainsmokers").into();
        let value = serde_json::to_value(&item).expect("serializable");

        assert_eq!(Some("song"), value.get("kind").and_then(|kind| kind.as_str()));

        let back: MediaItem = serde_json::from_value(value).expect("deserializable");
        assert_eq!(item, back);
    }
}
