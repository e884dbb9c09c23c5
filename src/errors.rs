//! errors returned by the library. Degenerate inputs (empty sequence, kmer size 0) are not errors, they get a null jaccard index.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeqJaccardError {
    /// input file does not exist or cannot be opened
    #[error("cannot access file {path:?}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// fasta parser rejected the file (content before first header, empty file ...)
    #[error("bad record file {path:?} : {msg}")]
    Format { path: PathBuf, msg: String },
    /// two records with the same identifier
    #[error("duplicate sequence identifier : {0}")]
    DuplicateId(String),
    #[error("record {id} is not valid utf-8")]
    NotUtf8 { id: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

//=========================================================

// end of mod tests
