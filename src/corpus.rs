use chrono::Local;

use crate::{info_time, Config, DocId, Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DocId,
    pub text: String,
}

/// Extracted abstracts in identifier order. Identifiers without a text file
/// are left out of `documents` and listed in `missing`.
#[derive(Debug, Default)]
pub struct Corpus {
    pub documents: Vec<Document>,
    pub missing: Vec<(DocId, Error)>,
}

impl Corpus {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|d| d.text.as_str())
    }

    pub fn ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.documents.iter().map(|d| d.id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Loads every `{text_dir}/{id}.txt` in `config.ids` into memory.
pub async fn read_abstracts(config: &Config) -> Corpus {
    let start_time = Local::now();
    let mut corpus = Corpus::default();

    for id in config.ids.clone() {
        match read_abstract(config, id).await {
            Ok(text) => {
                info_time!("adding abstract: {id}");
                corpus.documents.push(Document { id, text });
            }
            Err(e @ Error::NotFound(_)) => {
                info_time!("abstract with pmid: {id} not found");
                corpus.missing.push((id, e));
            }
            Err(e) => {
                info_time!("couldn't read abstract with pmid: {id}: {e}");
                corpus.missing.push((id, e));
            }
        }
    }

    info_time!(
        start_time,
        "Loaded {} abstracts, {} missing",
        corpus.documents.len(),
        corpus.missing.len()
    );
    corpus
}

pub async fn read_abstract(config: &Config, id: DocId) -> Result<String> {
    let path = config.text_path(id);
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| Error::from_io(&path, e))
}
