use std::path::Path;

use chrono::Local;
use tokio::{fs::File, io::AsyncWriteExt};

use crate::text::{tokens, TextConfig};
use crate::vocab::Vocabulary;
use crate::{info_time, Result};

/// Vocabulary positions of the in-vocabulary tokens of `doc`, in word order.
/// The first token of the document is never encoded.
pub fn encode_document(doc: &str, vocab: &Vocabulary, config: &TextConfig) -> Vec<usize> {
    tokens(doc, config)
        .iter()
        .skip(1)
        .filter_map(|t| vocab.index_of(t))
        .collect()
}

/// `1,2,1,\n`: every index is followed by a comma.
pub fn format_line(indices: &[usize]) -> String {
    indices.iter().map(|i| format!("{i},")).collect::<String>() + "\n"
}

/// Writes one line per abstract to `outfile`. Line order is the only link back to the input.
pub async fn abstracts_to_csv<I, S>(
    abstracts: I,
    vocab: &Vocabulary,
    outfile: impl AsRef<Path>,
    config: &TextConfig,
) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let start_time = Local::now();
    let outfile = outfile.as_ref();

    let mut out = String::new();
    let mut count = 0;
    for doc in abstracts {
        count += 1;
        info_time!("writing doc {} to csv", count);
        out.push_str(&format_line(&encode_document(doc.as_ref(), vocab, config)));
    }

    let mut file = File::create(outfile).await?;
    file.write_all(out.as_bytes()).await?;
    file.flush().await?;
    info_time!(start_time, "Wrote {} documents to: {}", count, outfile.display());

    Ok(count)
}
