use chrono::Local;

use crate::corpus::read_abstracts;
use crate::encode::abstracts_to_csv;
use crate::parse::extract_abstracts;
use crate::request::fetch_pages;
use crate::vocab::Vocabulary;
use crate::{info_time, Config, Result, StageReport};

/// What a full run produced.
#[derive(Debug)]
pub struct PipelineSummary {
    pub fetched: StageReport,
    pub extracted: StageReport,
    pub documents: usize,
    pub vocabulary: Vocabulary,
}

/// Fetches, extracts and encodes everything in `config.ids`.
pub async fn run_pipeline(config: &Config) -> Result<PipelineSummary> {
    let fetched = fetch_pages(config).await?;
    let extracted = extract_abstracts(config).await?;
    let (documents, vocabulary) = encode_corpus(config).await?;

    Ok(PipelineSummary {
        fetched,
        extracted,
        documents,
        vocabulary,
    })
}

/// Last stage on its own: loads the extracted abstracts, builds the vocabulary,
/// and writes both the encoded documents and the vocabulary file.
/// Returns the number of encoded documents and the vocabulary.
pub async fn encode_corpus(config: &Config) -> Result<(usize, Vocabulary)> {
    let corpus = read_abstracts(config).await;

    let start_time = Local::now();
    let mut vocab = Vocabulary::build(corpus.texts(), &config.text);
    if config.strip_numbers {
        vocab = vocab.strip_numbers();
    }
    info_time!(start_time, "Built vocabulary of {} tokens", vocab.len());

    let documents = abstracts_to_csv(corpus.texts(), &vocab, &config.csv_path, &config.text).await?;
    vocab.write_to(&config.vocab_path).await?;

    Ok((documents, vocab))
}
