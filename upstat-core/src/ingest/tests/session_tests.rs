use crate::ingest::{IngestError, ParseStats, Record, RecordParser};
use pretty_assertions::assert_eq;
use std::fs;
use std::io::{self, BufRead, Cursor, Read};
use tempfile::tempdir;

//-----------------------------------------------------------------------------
// Helpers
//-----------------------------------------------------------------------------

const GOOD_LINE: &str = r#"{"timestamp":1446249499322,"stream":{"upstreams":{"pg":{"peers":[{"server":"10.0.0.2:15432","connect_time":1,"first_byte_time":2,"response_time":2}]}}}}"#;
const BAD_JSON_LINE: &str = r#"{"timestamp":1446249499322,"stream":"#;
const NO_TIMESTAMP_LINE: &str = r#"{"stream":{"upstreams":{"pg":{"peers":[{"connect_time":1}]}}}}"#;

fn collect(parser: &mut RecordParser, input: &str) -> Vec<Record> {
    parser
        .parse_reader(Cursor::new(input.to_string()), "test.log")
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

/// Serves `ok` bytes, then fails every read.
struct FailingReader {
    ok: Cursor<Vec<u8>>,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.ok.read(buf)?;
        if n == 0 {
            return Err(io::Error::other("disk on fire"));
        }
        Ok(n)
    }
}

impl BufRead for FailingReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.ok.position() as usize >= self.ok.get_ref().len() {
            return Err(io::Error::other("disk on fire"));
        }
        self.ok.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.ok.consume(amt)
    }
}

//-----------------------------------------------------------------------------
// Counters
//-----------------------------------------------------------------------------

#[test]
fn mixed_validity_counts_each_outcome_once() {
    // Arrange
    let input = format!("{GOOD_LINE}\n{BAD_JSON_LINE}\n{NO_TIMESTAMP_LINE}\n   \n");
    let mut parser = RecordParser::new();

    // Act
    let records = collect(&mut parser, &input);

    // Assert
    assert_eq!(records.len(), 1);
    assert_eq!(
        parser.stats(),
        ParseStats {
            parsed: 1,
            skipped: 1,
            errored: 1,
        }
    );
    assert_eq!(parser.stats().total(), 3);
}

#[test]
fn blank_only_input_yields_nothing() {
    let mut parser = RecordParser::new();

    let records = collect(&mut parser, "\n\n   \n\t\n");

    assert!(records.is_empty());
    assert_eq!(parser.stats(), ParseStats::default());
}

#[test]
fn last_line_without_newline_is_parsed() {
    let mut parser = RecordParser::new();

    let records = collect(&mut parser, &format!("\n{GOOD_LINE}"));

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].samples()[0].pool(), "pg");
}

#[test]
fn session_is_lazy() {
    // Arrange
    let input = format!("{GOOD_LINE}\n{BAD_JSON_LINE}\n{GOOD_LINE}\n");
    let mut parser = RecordParser::new();
    let mut session = parser.parse_reader(Cursor::new(input), "test.log");

    // Act
    let first = session.next();

    // Assert
    assert!(matches!(first, Some(Ok(_))));
    assert_eq!(session.lines_read(), 1);
    assert_eq!(session.stats().parsed, 1);
    assert_eq!(session.stats().errored, 0);

    assert!(matches!(session.next(), Some(Ok(_))));
    assert_eq!(session.lines_read(), 3);
    assert_eq!(session.stats().errored, 1);
    assert!(session.next().is_none());
}

#[test]
fn counters_accumulate_until_reset() {
    // Arrange
    let mut parser = RecordParser::new();
    collect(&mut parser, &format!("{GOOD_LINE}\n{BAD_JSON_LINE}\n"));
    collect(&mut parser, &format!("{GOOD_LINE}\n"));
    assert_eq!(parser.stats().parsed, 2);

    // Act
    parser.reset_stats();
    collect(&mut parser, &format!("{NO_TIMESTAMP_LINE}\n"));

    // Assert
    assert_eq!(
        parser.stats(),
        ParseStats {
            parsed: 0,
            skipped: 1,
            errored: 0,
        }
    );
}

#[test]
fn separate_parsers_do_not_share_counters() {
    let mut a = RecordParser::new();
    let mut b = RecordParser::new();

    collect(&mut a, &format!("{GOOD_LINE}\n{GOOD_LINE}\n"));
    collect(&mut b, &format!("{BAD_JSON_LINE}\n"));

    assert_eq!(a.stats().parsed, 2);
    assert_eq!(a.stats().errored, 0);
    assert_eq!(b.stats().parsed, 0);
    assert_eq!(b.stats().errored, 1);
}

//-----------------------------------------------------------------------------
// Source failures
//-----------------------------------------------------------------------------

#[test]
fn parse_file_reads_from_disk() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    fs::write(&path, format!("{GOOD_LINE}\n{NO_TIMESTAMP_LINE}\n")).unwrap();
    let mut parser = RecordParser::new();

    // Act
    let records = parser
        .parse_file(&path)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    // Assert
    assert_eq!(records.len(), 1);
    assert_eq!(parser.stats().skipped, 1);
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.log");
    let mut parser = RecordParser::new();

    let err = parser.parse_file(&path).err().unwrap();

    assert!(matches!(err, IngestError::NotFound { path: p } if p == path));
}

#[test]
fn directory_is_not_a_file() {
    let dir = tempdir().unwrap();
    let mut parser = RecordParser::new();

    let err = parser.parse_file(dir.path()).err().unwrap();

    assert!(matches!(err, IngestError::NotAFile { .. }));
}

#[test]
fn read_failure_ends_the_session() {
    // Arrange
    let reader = FailingReader {
        ok: Cursor::new(format!("{GOOD_LINE}\n").into_bytes()),
    };
    let mut parser = RecordParser::new();
    let mut session = parser.parse_reader(reader, "broken.log");

    // Act
    let first = session.next();
    let second = session.next();
    let third = session.next();

    // Assert
    assert!(matches!(first, Some(Ok(_))));
    assert!(matches!(second, Some(Err(IngestError::Read { line: 2, .. }))));
    assert!(third.is_none());
}
