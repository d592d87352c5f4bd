use crate::ingest::error::IngestError;
use crate::ingest::parse::{LineOutcome, parse_line};
use crate::ingest::types::{ParseStats, Record};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Turns raw log lines into [`Record`]s and counts how every line was classified.
///
/// Counters live on the instance, so separate parsers never interfere. Reuse a
/// parser across files by calling [`RecordParser::reset_stats`] in between.
#[derive(Debug, Default)]
pub struct RecordParser {
    stats: ParseStats,
}

impl RecordParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = ParseStats::default();
    }

    /// Classifies one line and updates the counters.
    pub fn classify(&mut self, line: &[u8]) -> LineOutcome {
        let outcome = parse_line(line);

        match &outcome {
            LineOutcome::Blank => {}
            LineOutcome::Parsed(_) => self.stats.parsed += 1,
            LineOutcome::Skipped(_) => self.stats.skipped += 1,
            LineOutcome::Errored(_) => self.stats.errored += 1,
        }

        outcome
    }

    /// Opens `path` and returns a lazy, single-pass session over its lines.
    pub fn parse_file(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<ParseSession<'_, BufReader<File>>, IngestError> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
        let meta = file.metadata().map_err(|e| IngestError::open(path, e))?;
        if !meta.is_file() {
            return Err(IngestError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        info!(path = %path.display(), bytes = meta.len(), "opened log file");

        Ok(self.parse_reader(BufReader::new(file), path))
    }

    /// Same as [`RecordParser::parse_file`] over an already open reader.
    /// `source` only labels diagnostics.
    pub fn parse_reader<R: BufRead>(
        &mut self,
        reader: R,
        source: impl Into<PathBuf>,
    ) -> ParseSession<'_, R> {
        ParseSession {
            parser: self,
            reader,
            source: source.into(),
            line_no: 0,
            buf: Vec::new(),
            done: false,
        }
    }
}

/// Forward-only iterator of records read from one source.
///
/// Malformed lines are counted and skipped. A read failure of the source is
/// yielded once as `Err` and ends the session.
pub struct ParseSession<'p, R> {
    parser: &'p mut RecordParser,
    reader: R,
    source: PathBuf,
    line_no: u64,
    buf: Vec<u8>,
    done: bool,
}

impl<R> ParseSession<'_, R> {
    pub fn stats(&self) -> ParseStats {
        self.parser.stats()
    }

    /// Number of lines consumed so far, blank ones included.
    pub fn lines_read(&self) -> u64 {
        self.line_no
    }
}

impl<R: BufRead> Iterator for ParseSession<'_, R> {
    type Item = Result<Record, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();

            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    let stats = self.parser.stats();
                    info!(
                        source = %self.source.display(),
                        lines = self.line_no,
                        parsed = stats.parsed,
                        skipped = stats.skipped,
                        errored = stats.errored,
                        "finished reading log source"
                    );
                }
                Ok(_) => {
                    self.line_no += 1;

                    match self.parser.classify(&self.buf) {
                        LineOutcome::Parsed(record) => return Some(Ok(record)),
                        LineOutcome::Blank => {}
                        LineOutcome::Skipped(reason) => {
                            debug!(line = self.line_no, %reason, "skipping log entry");
                        }
                        LineOutcome::Errored(error) => {
                            debug!(
                                source = %self.source.display(),
                                line = self.line_no,
                                %error,
                                "malformed log line"
                            );
                        }
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(IngestError::read(&self.source, self.line_no + 1, e)));
                }
            }
        }

        None
    }
}
