//! structures related to processing parameters


use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::io::{BufReader, BufWriter, Write};

use serde::{Deserialize, Serialize};
use serde_json::{to_writer};
use strum_macros::{Display, EnumString};

use crate::errors::SeqJaccardError;

/// default kmer (n-gram) size
pub const DEFAULT_NGRAM: usize = 2;

/// Parameters of the jaccard computation. Dumped with the results to keep track of a run.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JaccardParams {
    /// kmer size, counted in unicode code points. 0 means every jaccard index is 0.
    ngram: usize,
}

impl Default for JaccardParams {
    fn default() -> Self {
        JaccardParams { ngram: DEFAULT_NGRAM }
    }
}

impl JaccardParams {
    pub fn new(ngram: usize) -> Self {
        JaccardParams { ngram }
    }

    /// Accepts the value as given in command line. Values less than 1 are kept as 0: they do not make
    /// the run fail, all jaccard index will be 0.
    pub fn from_arg(ngram: i64) -> Self {
        if ngram < 1 {
            log::warn!("ngram size {} < 1, all jaccard index will be 0", ngram);
        }
        JaccardParams { ngram: usize::try_from(ngram).unwrap_or(0) }
    }

    /// returns kmer size
    pub fn get_ngram(&self) -> usize {
        self.ngram
    }

    pub fn dump_json(&self, dirpath: &Path) -> Result<PathBuf, SeqJaccardError> {
        //
        let filepath = dirpath.join("parameters.json");
        //
        log::info!("dumping JaccardParams in json file : {:?}", filepath);
        //
        let fileres = OpenOptions::new().write(true).create(true).truncate(true).open(&filepath);
        let file = fileres.map_err(|source| {
            log::error!("JaccardParams dump : could not open file {:?}", filepath.as_os_str());
            SeqJaccardError::FileAccess { path: filepath.clone(), source }
        })?;
        //
        let mut writer = BufWriter::new(file);
        to_writer(&mut writer, &self)?;
        writer.flush()?;
        //
        Ok(filepath)
    } // end of dump_json

    /// reload from a json dump.
    pub fn reload_json(dirpath: &Path) -> Result<Self, SeqJaccardError> {
        log::info!("in reload_json");
        //
        let filepath = dirpath.join("parameters.json");
        let file = OpenOptions::new().read(true).open(&filepath).map_err(|source| {
            log::error!("JaccardParams reload_json : could not open file {:?}", filepath);
            SeqJaccardError::FileAccess { path: filepath.clone(), source }
        })?;
        //
        let reader = BufReader::new(file);
        let params: Self = serde_json::from_reader(reader)?;
        //
        log::info!("JaccardParams reload, ngram : {}", params.ngram);
        //
        Ok(params)
    } // end of reload_json
} // end of impl JaccardParams


//=====================================================================================

/// format of results
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Display, EnumString)]
pub enum OutputFormat {
    /// tab separated, with header s1 s2 jaccard_index
    #[default]
    #[strum(serialize = "tsv")]
    Tsv,
    /// one json object by line
    #[strum(serialize = "json")]
    Json,
}

/// Where and how results are written
#[derive(Clone, Debug, Default)]
pub struct OutputParams {
    /// None means stdout
    path: Option<PathBuf>,
    format: OutputFormat,
}

impl OutputParams {
    pub fn new(path: Option<PathBuf>, format: OutputFormat) -> Self {
        OutputParams { path, format }
    }

    pub fn get_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get_format(&self) -> OutputFormat {
        self.format
    }
} // end of impl OutputParams


//=====================================================================================

// end of mod tests
