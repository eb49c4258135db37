use csv::StringRecord;
use log::{debug, info, trace};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::song::Song;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Unable to open {} ({source}).", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Row {line} contains {found} values. It should contain {expected}.")]
    RowShape {
        line: u64,
        found: usize,
        expected: usize,
    },

    #[error("Row {line} contains invalid data. ({reason})")]
    RowValue { line: u64, reason: String },
}

impl LoadError {
    /// 1-based line of the offending row, if the error is tied to one.
    pub fn line(&self) -> Option<u64> {
        match self {
            LoadError::FileAccess { .. } => None,
            LoadError::RowShape { line, .. } | LoadError::RowValue { line, .. } => Some(*line),
        }
    }
}

/// Loads every song from a tab-separated playlist export.
///
/// The first line is a header and is skipped without validation. The load
/// stops at the first bad row and nothing parsed before it is returned.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Song>, LoadError> {
    let path = path.as_ref();
    debug!("Opening {:?}", path);

    let file = File::open(path).map_err(|source| LoadError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    load_from_reader(file, path)
}

/// Same as [`load`], reading from any source. `source` only labels I/O errors.
///
/// Line 1 is skipped whatever it holds. Every later line, empty ones included,
/// must carry exactly eight tab-separated fields.
pub fn load_from_reader<R: Read>(rdr: R, source: &Path) -> Result<Vec<Song>, LoadError> {
    let reader = BufReader::new(rdr);
    let mut songs = Vec::new();

    for (idx, result) in reader.split(b'\n').enumerate() {
        let mut bytes = result.map_err(|e| LoadError::FileAccess {
            path: source.to_path_buf(),
            source: e,
        })?;
        if idx == 0 {
            continue;
        }

        let line = idx as u64 + 1;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        let text = String::from_utf8(bytes).map_err(|e| LoadError::RowValue {
            line,
            reason: format!("invalid UTF-8: {}", e.utf8_error()),
        })?;

        let fields: Vec<&str> = text.split('\t').collect();
        if fields.len() != Song::FIELDS.len() {
            return Err(LoadError::RowShape {
                line,
                found: fields.len(),
                expected: Song::FIELDS.len(),
            });
        }

        let song: Song = StringRecord::from(fields)
            .deserialize(None)
            .map_err(|e| row_value(line, e))?;
        trace!("Row {}: {}", line, song);
        songs.push(song);
    }

    info!("Loaded {} songs from {:?}", songs.len(), source);
    Ok(songs)
}

fn row_value(line: u64, err: csv::Error) -> LoadError {
    let reason = match err.into_kind() {
        csv::ErrorKind::Deserialize { err, .. } => match err.field() {
            Some(idx) => format!(
                "{}: {}",
                Song::FIELDS.get(idx as usize).unwrap_or(&"field"),
                err.kind()
            ),
            None => err.kind().to_string(),
        },
        other => format!("{:?}", other),
    };
    LoadError::RowValue { line, reason }
}
