use log::{debug, info};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::song::Song;

pub const TITLE: &str = "Music Analyzer Report\n\n";
pub const NO_DATA: &str = "No data is available.\n";

#[derive(Error, Debug)]
#[error("Unable to write report to {} ({source}).", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Filter constants for the report sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Songs with strictly more plays than this are listed.
    pub plays_over: i32,
    /// One count line per genre, exact match.
    pub genres: Vec<String>,
    pub album: String,
    /// Songs released strictly before this year are listed.
    pub before_year: i32,
    /// Names with more characters than this are listed.
    pub name_longer_than: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            plays_over: 200,
            genres: vec!["Alternative".to_string(), "Hip-Hop/Rap".to_string()],
            album: "Welcome to the Fishbowl".to_string(),
            before_year: 1970,
            name_longer_than: 85,
        }
    }
}

/// Builds the report with the default filters.
pub fn generate(songs: &[Song]) -> String {
    generate_with(songs, &ReportOptions::default())
}

/// Builds the full report text.
///
/// Every section reads the whole song list, never the output of another
/// section. Each one ends with a single blank line, whether or not anything
/// matched.
pub fn generate_with(songs: &[Song], options: &ReportOptions) -> String {
    let mut report = String::from(TITLE);

    if songs.is_empty() {
        info!("No songs to report on");
        report.push_str(NO_DATA);
        return report;
    }

    report.push_str(&high_plays(songs, options.plays_over));
    for genre in &options.genres {
        report.push_str(&genre_count(songs, genre));
    }
    report.push_str(&album_songs(songs, &options.album));
    report.push_str(&songs_before(songs, options.before_year));
    report.push_str(&long_names(songs, options.name_longer_than));
    report.push_str(&longest_songs(songs));

    debug!("Report is {} bytes", report.len());
    report
}

/// Writes the report in one go, replacing whatever was at `path`.
pub fn save(path: impl AsRef<Path>, report: &str) -> Result<(), WriteError> {
    let path = path.as_ref();
    std::fs::write(path, report).map_err(|source| WriteError {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Report written to {:?}", path);
    Ok(())
}

pub fn high_plays(songs: &[Song], plays_over: i32) -> String {
    dump_section(
        &format!("Songs that received more than {} plays:", plays_over),
        songs.iter().filter(|s| s.plays > plays_over),
    )
}

pub fn genre_count(songs: &[Song], genre: &str) -> String {
    let count = songs.iter().filter(|s| s.genre == genre).count();
    format!("Number of {} songs: {}\n\n", genre, count)
}

pub fn album_songs(songs: &[Song], album: &str) -> String {
    dump_section(
        &format!("Songs from the album {}:", album),
        songs.iter().filter(|s| s.album == album),
    )
}

pub fn songs_before(songs: &[Song], year: i32) -> String {
    dump_section(
        &format!("Songs from before {}:", year),
        songs.iter().filter(|s| s.year < year),
    )
}

pub fn long_names(songs: &[Song], longer_than: usize) -> String {
    let names: Vec<&str> = songs
        .iter()
        .filter(|s| s.name_len() > longer_than)
        .map(|s| s.name.as_str())
        .collect();

    let mut section = format!("Song names longer than {} characters:\n", longer_than);
    if !names.is_empty() {
        section.push_str(&names.join(" "));
        section.push('\n');
    }
    section.push('\n');
    section
}

/// Every song sharing the largest positive time. A time of zero or less never
/// counts as longest.
pub fn longest_songs(songs: &[Song]) -> String {
    let longest = songs.iter().map(|s| s.time).filter(|&t| t > 0).max();
    dump_section(
        "Longest song(s):",
        songs.iter().filter(|s| Some(s.time) == longest),
    )
}

fn dump_section<'a>(heading: &str, matches: impl Iterator<Item = &'a Song>) -> String {
    let mut section = String::new();
    section.push_str(heading);
    section.push('\n');
    for song in matches {
        section.push_str(&song.to_string());
        section.push('\n');
    }
    section.push('\n');
    section
}
