//! Abstract scraper.
//!
//! Three batch stages that talk to each other through directories on disk:
//! fetch raw pages, extract the abstract text out of them, then build a
//! bag-of-words vocabulary and encode every abstract against it.

mod macros;

pub mod config;
pub mod corpus;
pub mod encode;
mod error;
pub mod parse;
pub mod process;
pub mod request;
pub mod stopwords;
pub mod text;
pub mod vocab;

pub use config::Config;
pub use error::{Error, ErrorKind, Result};

/// Catalog number of a document, used as the file name in every stage.
pub type DocId = u64;

const START_ID: DocId = 20_000_000;
const END_ID: DocId = 20_008_300;
const BASE_URL: &str = "http://www.ncbi.nlm.nih.gov/pubmed";
const USER_AGENT: &str = "Firefox";
const RAW_DIR: &str = "abstracts";
const TEXT_DIR: &str = "abstract_text";
const ABSTRACT_SELECTOR: &str = ".abstr";
/// Extracted text has to be strictly longer than this to count as an abstract.
const MIN_ABSTRACT_LEN: usize = 500;
const PUNCTUATION: &str = "()!@#%[]&^*$.,{}\"';:";
const CSV_PATH: &str = "abstracts.csv";
const VOCAB_PATH: &str = "vocabulary.txt";

/// What happened to each identifier a stage looked at.
#[derive(Debug, Default)]
pub struct StageReport {
    /// Identifiers whose output file was written.
    pub written: Vec<DocId>,
    /// Identifiers that were read fine but produced nothing worth keeping.
    pub discarded: Vec<DocId>,
    /// Identifiers that failed, with the reason. Nothing was written for them.
    pub skipped: Vec<(DocId, Error)>,
}

impl StageReport {
    pub fn skipped_with(&self, kind: ErrorKind) -> impl Iterator<Item = DocId> + '_ {
        self.skipped
            .iter()
            .filter(move |(_, e)| e.kind() == kind)
            .map(|(id, _)| *id)
    }
}
