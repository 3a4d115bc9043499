use std::path::PathBuf;

use chrono::Local;
use reqwest::Client;
use tokio::{fs::File, io::AsyncWriteExt};

use crate::{info_time, Config, DocId, Error, Result, StageReport};

/// Builds the client every page request goes through.
pub fn build_client(config: &Config) -> Result<Client> {
    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Requests every page in `config.ids`, one after another, and stores each body
/// as `{raw_dir}/{id}.html`. Failed identifiers are logged and skipped, never retried.
pub async fn fetch_pages(config: &Config) -> Result<StageReport> {
    let start_time = Local::now();
    let client = build_client(config)?;
    tokio::fs::create_dir_all(&config.raw_dir).await?;

    info_time!("Started fetching {} pages", config.ids.end.saturating_sub(config.ids.start));

    let mut report = StageReport::default();
    for id in config.ids.clone() {
        match fetch_page(&client, config, id).await {
            Ok(_) => {
                info_time!("processing pmid: {id}");
                report.written.push(id);
            }
            Err(e) => {
                info_time!("couldn't open pmid: {id}: {e}");
                report.skipped.push((id, e));
            }
        }
    }

    info_time!(
        start_time,
        "Fetched {} pages, skipped {}",
        report.written.len(),
        report.skipped.len()
    );
    Ok(report)
}

/// Requests a single page and writes the body verbatim.
/// Anything but a success status counts as a failure and nothing is written.
pub async fn fetch_page(client: &Client, config: &Config, id: DocId) -> Result<PathBuf> {
    let res = client
        .get(config.page_url(id))
        .send()
        .await
        .map_err(|source| Error::Network { id, source })?;

    let status = res.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            id,
            status: status.as_u16(),
        });
    }

    let body = res
        .bytes()
        .await
        .map_err(|source| Error::Network { id, source })?;

    let path = config.raw_path(id);
    let mut file = File::create(&path).await?;
    file.write_all(&body).await?;
    file.flush().await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    /// A loopback address nothing listens on.
    fn closed_port_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default()
            .with_root(dir.path())
            .with_base_url(closed_port_url())
            .with_ids(5..7);

        let report = fetch_pages(&config).await.unwrap();

        assert!(report.written.is_empty());
        assert_eq!(report.skipped_with(ErrorKind::Network).collect::<Vec<_>>(), vec![5, 6]);
        assert!(!config.raw_path(5).exists());
        assert!(!config.raw_path(6).exists());
    }

    #[tokio::test]
    async fn empty_range_fetches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default()
            .with_root(dir.path())
            .with_base_url(closed_port_url())
            .with_ids(5..5);

        let report = fetch_pages(&config).await.unwrap();
        assert!(report.written.is_empty());
        assert!(report.skipped.is_empty());
    }
}
