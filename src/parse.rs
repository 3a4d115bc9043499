use std::path::PathBuf;

use chrono::Local;
use scraper::{Html, Selector};
use tokio::task::spawn_blocking;

use crate::{info_time, Config, DocId, Error, Result, StageReport};

/// Result of extracting a single page that could be read and parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    Written { path: PathBuf, len: usize },
    /// The text was too short to be a real abstract, nothing was written.
    Discarded { len: usize },
}

/// Runs the extractor over every identifier in `config.ids`.
/// Per-page failures are logged and collected in the report, only an invalid
/// selector or an unusable output directory fail the whole stage.
pub async fn extract_abstracts(config: &Config) -> Result<StageReport> {
    let start_time = Local::now();
    create_selector(&config.abstract_selector)?;
    tokio::fs::create_dir_all(&config.text_dir).await?;

    let mut report = StageReport::default();
    for id in config.ids.clone() {
        info_time!("processing document #: {id}");
        match extract_one(config, id).await {
            Ok(Extracted::Written { len, .. }) => {
                info_time!("kept abstract {id} ({len} chars)");
                report.written.push(id);
            }
            Ok(Extracted::Discarded { len }) => {
                info_time!("no abstract in {id} ({len} chars)");
                report.discarded.push(id);
            }
            Err(e) => {
                info_time!("error on index: {id}: {e}");
                report.skipped.push((id, e));
            }
        }
    }

    info_time!(
        start_time,
        "Extracted {} abstracts, discarded {}, skipped {}",
        report.written.len(),
        report.discarded.len(),
        report.skipped.len()
    );
    Ok(report)
}

/// Extracts the abstract of a single previously fetched page.
/// The text directory has to exist already.
pub async fn extract_one(config: &Config, id: DocId) -> Result<Extracted> {
    let raw_path = config.raw_path(id);
    let bytes = tokio::fs::read(&raw_path)
        .await
        .map_err(|e| Error::from_io(&raw_path, e))?;
    // Raw pages are stored as fetched, stray bytes become U+FFFD.
    let html = String::from_utf8_lossy(&bytes).into_owned();

    let text = spawn_blocking({
        let selector = config.abstract_selector.clone();
        move || extract_abstract(&html, &selector)
    })
    .await??;

    let len = text.chars().count();
    if len <= config.min_abstract_len {
        return Ok(Extracted::Discarded { len });
    }

    let path = config.text_path(id);
    tokio::fs::write(&path, text).await?;
    Ok(Extracted::Written { path, len })
}

/// Text of every element matching `selector`. Text nodes are joined with single
/// spaces, so markup never glues two words together.
pub fn extract_abstract(html: &str, selector: &str) -> Result<String> {
    let selector = create_selector(selector)?;
    let doc = Html::parse_document(html);

    let text = doc
        .select(&selector)
        .map(|el| {
            el.text()
                .flat_map(str::split_whitespace)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(text)
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::Selector(sel_str.into()))
}
