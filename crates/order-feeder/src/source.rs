//! Line source for order instructions.
//!
//! Reads lazily, one line at a time, and hides whitespace-only lines from
//! the caller. A reader is consumed once; there is no rewind.

use std::fmt;
use std::path::PathBuf;

use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::debug;

use crate::error::FeedError;

/// Where order lines come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    /// Standard input. Used when no path is given.
    #[default]
    Stdin,
    Path(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

impl From<Option<PathBuf>> for InputSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map(InputSource::Path).unwrap_or_default()
    }
}

/// Boxed reader so file and stdin sources share one type.
pub type BoxedInput = Box<dyn AsyncBufRead + Unpin + Send>;

impl InputSource {
    /// Open the source for reading.
    pub async fn open(&self) -> Result<SourceReader<BoxedInput>, FeedError> {
        let reader: BoxedInput = match self {
            InputSource::Stdin => Box::new(BufReader::new(tokio::io::stdin())),
            InputSource::Path(path) => {
                let file = File::open(path).await.map_err(|e| FeedError::Source {
                    input: self.to_string(),
                    source: e,
                })?;
                Box::new(BufReader::new(file))
            }
        };
        debug!("Opened input {}", self);
        Ok(SourceReader::new(reader, self.to_string()))
    }
}

/// One non-blank input line and its 1-based position in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub line_no: usize,
    pub text: String,
}

pub struct SourceReader<R> {
    lines: Lines<R>,
    name: String,
    line_no: usize,
}

impl<R: AsyncBufRead + Unpin> SourceReader<R> {
    pub fn new(reader: R, name: impl Into<String>) -> Self {
        SourceReader {
            lines: reader.lines(),
            name: name.into(),
            line_no: 0,
        }
    }

    /// Next line with content, or `None` at end of input.
    pub async fn next_line(&mut self) -> Result<Option<SourceLine>, FeedError> {
        loop {
            let text = self
                .lines
                .next_line()
                .await
                .map_err(|e| FeedError::Source {
                    input: self.name.clone(),
                    source: e,
                })?;

            let Some(text) = text else {
                return Ok(None);
            };
            self.line_no += 1;

            if text.trim().is_empty() {
                continue;
            }
            return Ok(Some(SourceLine {
                line_no: self.line_no,
                text,
            }));
        }
    }
}
