//! reading of fasta files into a SequenceCollection.
//!
//! Parsing is done by needletail so compressed files (gz, bz2, xz) and fastq are also accepted.
//! Sequence lines of a record are concatenated as they are, no filtering of alphabet is done.
//! The whole file is loaded in memory before parsing.

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use super::idseq::{IdSeq, SequenceCollection};
use crate::errors::SeqJaccardError;

/// opens and parses a fasta file. The file is opened before parsing so that a missing or unreadable
/// file is reported as such and not as a format error.
pub fn read_sequences(path: &Path) -> Result<SequenceCollection, SeqJaccardError> {
    log::debug!("read_sequences, opening file {:?}", path);
    let file = File::open(path).map_err(|source| {
        log::error!("read_sequences could not open file {:?}", path);
        SeqJaccardError::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let collection = read_sequences_from(file, path)?;
    if collection.is_empty() {
        log::warn!("read_sequences, no record in file {:?}", path);
    }
    log::info!(
        "read_sequences, file {:?} : nb sequences {}, total length {}",
        path,
        collection.len(),
        collection.total_len()
    );
    Ok(collection)
} // end of read_sequences

/// returns true if data is plain fasta whose last non blank line is a header.
/// needletail rejects such a file at end of input, the last record must get an empty sequence.
fn ends_with_header(data: &[u8]) -> bool {
    if data.first() != Some(&b'>') {
        return false;
    }
    data.split(|&c| c == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .rev()
        .find(|line| !line.is_empty())
        .map_or(false, |line| line[0] == b'>')
}

/// parses records from any reader. path is only used in error messages.
///
/// A header followed by no sequence line gives a record with an empty sequence, wherever it is in the file.
pub fn read_sequences_from<R: Read>(
    mut reader: R,
    path: &Path,
) -> Result<SequenceCollection, SeqJaccardError> {
    let format_err = |msg: String| SeqJaccardError::Format {
        path: path.to_path_buf(),
        msg,
    };
    let mut data = Vec::<u8>::new();
    reader.read_to_end(&mut data).map_err(|source| {
        log::error!("read_sequences_from could not read {:?}", path);
        SeqJaccardError::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    })?;
    if ends_with_header(&data) {
        log::debug!("last record of {:?} has no sequence line", path);
        if !data.ends_with(b"\n") {
            data.push(b'\n');
        }
        data.push(b'\n');
    }
    let mut fastx =
        needletail::parse_fastx_reader(Cursor::new(data)).map_err(|e| format_err(e.to_string()))?;
    let mut collection = SequenceCollection::new();
    while let Some(record) = fastx.next() {
        let seqrec = record.map_err(|e| {
            log::error!("got bad record in file {:?} after {} records", path, collection.len());
            format_err(e.to_string())
        })?;
        let id = String::from_utf8(seqrec.id().to_vec()).map_err(|_| SeqJaccardError::NotUtf8 {
            id: String::from_utf8_lossy(seqrec.id()).into_owned(),
        })?;
        if id.is_empty() {
            return Err(format_err(format!("empty identifier at record {}", collection.len())));
        }
        let content = match String::from_utf8(seqrec.seq().into_owned()) {
            Ok(content) => content,
            Err(_) => return Err(SeqJaccardError::NotUtf8 { id }),
        };
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("read record {}, len {}", id, content.len());
        }
        collection.push(IdSeq::new(id, content))?;
    }
    Ok(collection)
} // end of read_sequences_from

//=========================================================

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn id_contents(collection: &SequenceCollection) -> Vec<(&str, &str)> {
        collection.sequences().iter().map(|s| (s.get_id(), s.get_content())).collect()
    }

    fn parse(text: &str) -> Result<SequenceCollection, SeqJaccardError> {
        read_sequences_from(Cursor::new(text.as_bytes().to_vec()), Path::new("test.fa"))
    }

    #[test]
    fn test_multiline_records_concatenated() {
        log_init_test();
        let collection = parse(">seq1 some description\nACGT\nTTGA\n>seq2\nCC\n").unwrap();
        assert_eq!(collection.len(), 2);
        let first = &collection.sequences()[0];
        assert_eq!(first.get_id(), "seq1 some description");
        assert_eq!(first.get_content(), "ACGTTTGA");
        assert_eq!(collection.sequences()[1].get_content(), "CC");
    }

    #[test]
    fn test_file_order_is_kept() {
        log_init_test();
        let collection = parse(">c\nAA\n>a\nCC\n>b\nGG\n").unwrap();
        let ids: Vec<&str> = collection.sequences().iter().map(|s| s.get_id()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_unicode_content() {
        log_init_test();
        let collection = parse(">greek\nαβγ\nδ\n").unwrap();
        assert_eq!(collection.sequences()[0].get_content(), "αβγδ");
        assert_eq!(collection.sequences()[0].get_len(), 4);
    }

    #[test]
    fn test_last_record_without_sequence() {
        log_init_test();
        let collection = parse(">a\nAC\n>b\n").unwrap();
        let records = id_contents(&collection);
        assert_eq!(records, vec![("a", "AC"), ("b", "")]);
        //
        let collection = parse(">a\n").unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.sequences()[0].get_content(), "");
        // no final newline
        let collection = parse(">a\n>b\nGG\n>c").unwrap();
        let records = id_contents(&collection);
        assert_eq!(records, vec![("a", ""), ("b", "GG"), ("c", "")]);
        // crlf
        let collection = parse(">a\r\nAC\r\n>b\r\n").unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.sequences()[1].get_content(), "");
    }

    #[test]
    fn test_ends_with_header() {
        assert!(ends_with_header(b">a\nAC\n>b\n"));
        assert!(ends_with_header(b">a\n\n>b"));
        assert!(!ends_with_header(b">a\nAC\n"));
        assert!(!ends_with_header(b">a\nAC\n>b\n\n>c\nGT"));
        assert!(!ends_with_header(b"@r\nAC\n+\nII\n"));
        assert!(!ends_with_header(b""));
    }

    #[test]
    fn test_content_before_header_rejected() {
        log_init_test();
        let res = parse("ACGT\n>seq1\nACGT\n");
        assert!(matches!(res, Err(SeqJaccardError::Format { .. })));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        log_init_test();
        let res = parse(">s\nAC\n>s\nGT\n");
        assert!(matches!(res, Err(SeqJaccardError::DuplicateId(_))));
    }

    #[test]
    fn test_missing_file() {
        log_init_test();
        let res = read_sequences(Path::new("/nonexistent/dir/no_such_file.fa"));
        assert!(matches!(res, Err(SeqJaccardError::FileAccess { .. })));
    }
} // end of mod tests
