use std::path::Path;

use indexmap::IndexSet;
use tokio::{fs::File, io::AsyncWriteExt};

use crate::stopwords::is_stopword;
use crate::text::{is_number, tokens, TextConfig};
use crate::{info_time, Result};

/// Unique tokens in the order they were first seen.
/// Positions handed out by [`Vocabulary::index_of`] start at 1.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    tokens: IndexSet<String>,
}

impl Vocabulary {
    /// Scans `docs` in order and keeps every normalized token that is not a
    /// stopword, contains no hyphen, and was not seen before.
    pub fn build<I, S>(docs: I, config: &TextConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = IndexSet::new();
        for (n, doc) in docs.into_iter().enumerate() {
            info_time!("processing document: {}", n + 1);
            for token in tokens(doc.as_ref(), config) {
                if token.contains('-') || is_stopword(&token) {
                    continue;
                }
                vocab.insert(token);
            }
        }
        Self { tokens: vocab }
    }

    /// Drops every token that parses as a number.
    pub fn strip_numbers(self) -> Self {
        self.tokens.into_iter().filter(|t| !is_number(t)).collect()
    }

    /// 1-based position of `token`.
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.tokens.get_index_of(token).map(|i| i + 1)
    }

    /// Token at the 1-based `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.tokens.get_index(i))
            .map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Maps 1-based indices back to tokens, `None` for anything out of range.
    pub fn decode(&self, indices: &[usize]) -> Vec<Option<&str>> {
        indices.iter().map(|&i| self.get(i)).collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// One token per line, so line `n` holds index `n`.
    pub async fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut out = String::new();
        for token in self.iter() {
            out.push_str(token);
            out.push('\n');
        }
        let mut file = File::create(path).await?;
        file.write_all(out.as_bytes()).await?;
        file.flush().await?;
        info_time!("Wrote {} tokens to: {}", self.len(), path.display());
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    /// Keeps the first occurrence of repeated tokens. Does no filtering.
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Builds a vocabulary from `docs` with the default text settings.
pub fn vocabulary<I, S>(docs: I) -> Vocabulary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Vocabulary::build(docs, &TextConfig::default())
}

pub fn strip_numbers(vocab: Vocabulary) -> Vocabulary {
    vocab.strip_numbers()
}
