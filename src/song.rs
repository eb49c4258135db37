use serde::{Deserialize, Deserializer};
use std::fmt;

/// One row of a playlist export.
///
/// Columns are matched by position, so the struct field order must follow
/// [`Song::FIELDS`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Song {
    pub name: String,
    pub artist: String,
    pub album: String,
    pub genre: String,

    #[serde(deserialize_with = "integer")]
    pub size: i32,
    #[serde(deserialize_with = "integer")]
    pub time: i32,
    #[serde(deserialize_with = "integer")]
    pub year: i32,
    #[serde(deserialize_with = "integer")]
    pub plays: i32,
}

impl Song {
    /// Column names in file order.
    pub const FIELDS: [&'static str; 8] = [
        "Name", "Artist", "Album", "Genre", "Size", "Time", "Year", "Plays",
    ];

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        genre: impl Into<String>,
        size: i32,
        time: i32,
        year: i32,
        plays: i32,
    ) -> Self {
        Song {
            name: name.into(),
            artist: artist.into(),
            album: album.into(),
            genre: genre.into(),
            size,
            time,
            year,
            plays,
        }
    }

    /// Length of the name in characters, not bytes.
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }
}

/// Full one-line field dump used throughout the report.
impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Artist: {}, Album: {}, Genre: {}, Size: {}, Time: {}, Year: {}, Plays: {}",
            self.name,
            self.artist,
            self.album,
            self.genre,
            self.size,
            self.time,
            self.year,
            self.plays
        )
    }
}

// Surrounding whitespace is tolerated, a leading sign is optional.
fn integer<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim()
        .parse::<i32>()
        .map_err(|e| serde::de::Error::custom(format!("'{}' is not an integer: {}", raw, e)))
}
