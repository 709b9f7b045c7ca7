use crate::error::CategoriseError;

use log::trace;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};

/// Reads a file one line at a time. Both `\n` and `\r\n` end a line.
///
/// The file handle is held only while the source is open: [`close`]
/// releases it immediately, dropping the source releases it too.
///
/// [`close`]: LineSource::close
pub struct LineSource {
    path: PathBuf,
    lines: Option<Lines<BufReader<File>>>,
    lines_read: usize,
}

impl LineSource {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, CategoriseError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)
            .await
            .map_err(|e| CategoriseError::file_access(&path, e))?;

        Ok(Self {
            path,
            lines: Some(BufReader::new(file).lines()),
            lines_read: 0,
        })
    }

    /// Next line, or `None` once the file is exhausted or the source closed.
    /// Reaching the end closes the source.
    pub async fn next_line(&mut self) -> Result<Option<String>, CategoriseError> {
        let Some(lines) = self.lines.as_mut() else {
            return Ok(None);
        };

        match lines.next_line().await {
            Ok(Some(line)) => {
                self.lines_read += 1;
                trace!("{}:{}: {}", self.path.display(), self.lines_read, line);
                Ok(Some(line))
            }
            Ok(None) => {
                self.close();
                Ok(None)
            }
            Err(e) => {
                self.close();
                Err(CategoriseError::file_access(&self.path, e))
            }
        }
    }

    /// Stops reading and releases the file. Safe to call more than once.
    pub fn close(&mut self) {
        if self.lines.take().is_some() {
            trace!("Closed {} after {} lines", self.path.display(), self.lines_read);
        }
    }

    pub fn is_closed(&self) -> bool {
        self.lines.is_none()
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    async fn collect(source: &mut LineSource) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(line) = source.next_line().await.unwrap() {
            out.push(line);
        }
        out
    }

    #[tokio::test]
    async fn test_reads_lines_in_order() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(&temp_file, "header\nfirst\nsecond\n").unwrap();

        let mut source = LineSource::open(temp_file.path()).await.unwrap();

        assert_eq!(collect(&mut source).await, vec!["header", "first", "second"]);
        assert_eq!(source.lines_read(), 3);
        assert!(source.is_closed());
    }

    #[tokio::test]
    async fn test_crlf_and_missing_final_newline() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(&temp_file, "header\r\nfirst\r\nsecond").unwrap();

        let mut source = LineSource::open(temp_file.path()).await.unwrap();

        assert_eq!(collect(&mut source).await, vec!["header", "first", "second"]);
    }

    #[tokio::test]
    async fn test_close_stops_reading() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(&temp_file, "one\ntwo\nthree\n").unwrap();

        let mut source = LineSource::open(temp_file.path()).await.unwrap();
        assert_eq!(source.next_line().await.unwrap().as_deref(), Some("one"));

        source.close();
        source.close();

        assert!(source.is_closed());
        assert_eq!(source.next_line().await.unwrap(), None);
        assert_eq!(source.lines_read(), 1);
    }

    #[tokio::test]
    async fn test_open_missing_file() {
        let result = LineSource::open("nonexistent_file.csv").await;
        match result {
            Err(CategoriseError::FileAccess { path, .. }) => {
                assert_eq!(path, PathBuf::from("nonexistent_file.csv"));
            }
            _ => panic!("Expected FileAccess error"),
        }
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_a_read_error() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(&temp_file, b"header\n\xff\xfe\n").unwrap();

        let mut source = LineSource::open(temp_file.path()).await.unwrap();
        assert_eq!(source.next_line().await.unwrap().as_deref(), Some("header"));

        let result = source.next_line().await;
        assert!(matches!(result, Err(CategoriseError::FileAccess { .. })));
        assert!(source.is_closed());
    }
}
