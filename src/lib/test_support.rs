//! Fixtures shared by the library's unit tests.

use crate::audio::TagScheme;
use crate::error::TagReadError;
use crate::metadata::{leading_number, SongTags, TagReader};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Reads `disk:track:title` from the file body instead of real tags.
/// A body without colons counts as untagged.
pub struct ContentTagReader;

impl TagReader for ContentTagReader {
    fn read_tags(&self, path: &Path, _scheme: TagScheme) -> Result<SongTags, TagReadError> {
        let body = fs::read_to_string(path)?;
        let file_name = path.file_name().unwrap().to_string_lossy().into_owned();

        let mut fields = body.splitn(3, ':');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(disk), Some(track), Some(title)) => Ok(SongTags {
                track: leading_number(track),
                disk: leading_number(disk),
                title: title.trim().to_string(),
                tagged: true,
            }),
            _ => Ok(SongTags::untagged(&file_name)),
        }
    }
}

/// Reader that refuses every file.
pub struct BrokenTagReader;

impl TagReader for BrokenTagReader {
    fn read_tags(&self, path: &Path, _scheme: TagScheme) -> Result<SongTags, TagReadError> {
        Err(Box::new(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("corrupt tag in {}", path.display()),
        )))
    }
}

pub fn write_song(dir: &Path, name: &str, body: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(name);
    fs::write(&path, body)?;
    Ok(path)
}

/// Directory entries sorted by name, for comparisons that ignore listing order.
pub fn sorted_entries(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = fs::read_dir(dir)?
        .map(|e| e.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<io::Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}

/// In-memory sink for `tracing` output.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    /// Run `f` with a subscriber that writes into this buffer.
    pub fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn lines_containing(&self, needle: &str) -> Vec<String> {
        let output = String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned();
        output
            .lines()
            .filter(|line| line.contains(needle))
            .map(str::to_string)
            .collect()
    }
}
