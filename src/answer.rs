//! contains results of comparisons and the sinks they are written to.
//!
//! Results are streamed, a sink gets each row as soon as it is computed.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::errors::SeqJaccardError;

/// header of tsv output
pub const TSV_HEADER: [&str; 3] = ["s1", "s2", "jaccard_index"];

/// A comparison between 2 sequences identified by their fasta id.
/// When id_a == id_b it is the comparison of a sequence with itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    #[serde(rename = "s1")]
    pub id_a: String,
    #[serde(rename = "s2")]
    pub id_b: String,
    #[serde(rename = "jaccard_index")]
    pub score: f64,
}

impl ComparisonResult {
    pub fn new(id_a: &str, id_b: &str, score: f64) -> Self {
        ComparisonResult { id_a: id_a.to_string(), id_b: id_b.to_string(), score }
    }

    pub fn is_self(&self) -> bool {
        self.id_a == self.id_b
    }
} // end of impl ComparisonResult

/// Receives comparison results in the order they are computed
pub trait ResultSink {
    /// called once before any result
    fn write_header(&mut self) -> Result<(), SeqJaccardError> {
        Ok(())
    }

    fn write_result(&mut self, result: &ComparisonResult) -> Result<(), SeqJaccardError>;

    /// called once after last result
    fn flush(&mut self) -> Result<(), SeqJaccardError> {
        Ok(())
    }
} // end of trait ResultSink

//=========================================================

/// Tab separated output : s1 s2 jaccard_index.
/// Fields are written as they are (no quoting), score with default f64 formatting.
pub struct TsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TsvSink<W> {
    pub fn new(out: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(out);
        TsvSink { writer }
    }

    /// flushes and gives back the underlying writer
    pub fn into_inner(self) -> Result<W, SeqJaccardError> {
        self.writer
            .into_inner()
            .map_err(|e| {
                let kind = e.error().kind();
                SeqJaccardError::Io(std::io::Error::new(kind, e.error().to_string()))
            })
    }
} // end of impl TsvSink

impl<W: Write> ResultSink for TsvSink<W> {
    fn write_header(&mut self) -> Result<(), SeqJaccardError> {
        self.writer.write_record(TSV_HEADER)?;
        Ok(())
    }

    fn write_result(&mut self, result: &ComparisonResult) -> Result<(), SeqJaccardError> {
        let score = result.score.to_string();
        self.writer.write_record([result.id_a.as_str(), result.id_b.as_str(), score.as_str()])?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SeqJaccardError> {
        self.writer.flush()?;
        Ok(())
    }
} // end of impl ResultSink for TsvSink

//=========================================================

/// one json object by line : {"s1":..,"s2":..,"jaccard_index":..}
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        JsonSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for JsonSink<W> {
    fn write_result(&mut self, result: &ComparisonResult) -> Result<(), SeqJaccardError> {
        serde_json::to_writer(&mut self.writer, result)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SeqJaccardError> {
        self.writer.flush()?;
        Ok(())
    }
}

//=========================================================

/// keeps results in memory
#[derive(Default, Debug)]
pub struct VecSink {
    pub results: Vec<ComparisonResult>,
}

impl VecSink {
    pub fn new() -> Self {
        VecSink::default()
    }
}

impl ResultSink for VecSink {
    fn write_result(&mut self, result: &ComparisonResult) -> Result<(), SeqJaccardError> {
        self.results.push(result.clone());
        Ok(())
    }
}

//=========================================================

// end of mod tests
