use chrono::Local;
use medline_scrap::{info_time, process::run_pipeline, Config, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();
    let summary = run_pipeline(&Config::default()).await?;
    info_time!(
        start_time,
        "Full program time: {} pages, {} abstracts, {} documents encoded, {} tokens",
        summary.fetched.written.len(),
        summary.extracted.written.len(),
        summary.documents,
        summary.vocabulary.len()
    );

    Ok(())
}
