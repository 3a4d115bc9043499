use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use medline_scrap::process::run_pipeline;
use medline_scrap::request::fetch_pages;
use medline_scrap::text::{tokens, TextConfig};
use medline_scrap::{Config, DocId, ErrorKind};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Minimal HTTP server answering `GET /{id}` from `pages`, 404 for anything else.
/// Returns the base url and the user agents it saw.
async fn serve(pages: HashMap<DocId, String>) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let agents = Arc::new(Mutex::new(Vec::new()));

    tokio::spawn({
        let agents = agents.clone();
        async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }
                let request = String::from_utf8_lossy(&buf).to_string();

                for line in request.lines() {
                    if let Some((name, value)) = line.split_once(':') {
                        if name.eq_ignore_ascii_case("user-agent") {
                            agents.lock().unwrap().push(value.trim().to_string());
                        }
                    }
                }

                let page = request
                    .split_whitespace()
                    .nth(1)
                    .and_then(|path| path.trim_start_matches('/').parse::<DocId>().ok())
                    .and_then(|id| pages.get(&id));
                let response = match page {
                    Some(body) => format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    ),
                    None => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                        .to_string(),
                };
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        }
    });

    (format!("http://{addr}"), agents)
}

fn article(abstract_text: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>Article</title></head><body>
        <div class="rprt"><h1>A study</h1>
        <div class="abstr"><h3>Abstract</h3><div><p>{abstract_text}</p></div></div>
        <div class="aux">Similar articles</div></div></body></html>"#
    )
}

fn long_abstract(topic: &str) -> String {
    format!(
        "Background: {topic} is linked to glucose metabolism in adults. {}",
        "Patients with elevated insulin levels showed reduced response to treatment over 12 months. "
            .repeat(6)
    )
}

#[tokio::test]
async fn full_pipeline_over_a_local_server() {
    let pages = HashMap::from([
        (100, article(&long_abstract("Obesity"))),
        (101, article("Too short to count.")),
        (103, article(&long_abstract("Smoking"))),
        (104, article(&long_abstract("Outside the range"))),
    ]);
    let (base_url, agents) = serve(pages).await;

    let dir = tempfile::tempdir().unwrap();
    let config = Config::default()
        .with_root(dir.path())
        .with_base_url(base_url)
        .with_ids(100..104);

    let summary = run_pipeline(&config).await.unwrap();

    assert_eq!(summary.fetched.written, vec![100, 101, 103]);
    assert_eq!(summary.fetched.skipped_with(ErrorKind::Network).collect::<Vec<_>>(), vec![102]);
    assert!(!config.raw_path(102).exists());
    assert!(!config.raw_path(104).exists());

    assert_eq!(summary.extracted.written, vec![100, 103]);
    assert_eq!(summary.extracted.discarded, vec![101]);
    assert_eq!(summary.extracted.skipped_with(ErrorKind::NotFound).collect::<Vec<_>>(), vec![102]);
    assert!(!config.text_path(101).exists());
    assert!(!config.text_path(104).exists());

    assert!(agents.lock().unwrap().iter().all(|ua| ua == "Firefox"));

    // Every encoded index maps back onto the document's own tokens.
    assert_eq!(summary.documents, 2);
    let csv = std::fs::read_to_string(&config.csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    for (id, line) in [100, 103].into_iter().zip(lines) {
        assert!(line.ends_with(','));
        let indices: Vec<usize> = line
            .split(',')
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().unwrap())
            .collect();
        let decoded: Vec<&str> = summary
            .vocabulary
            .decode(&indices)
            .into_iter()
            .map(Option::unwrap)
            .collect();

        let text = std::fs::read_to_string(config.text_path(id)).unwrap();
        let expected: Vec<String> = tokens(&text, &TextConfig::default())
            .into_iter()
            .skip(1)
            .filter(|t| summary.vocabulary.contains(t))
            .collect();
        assert_eq!(decoded, expected);
    }

    assert!(summary.vocabulary.contains("obesity"));
    assert!(!summary.vocabulary.contains("12"));
    assert!(!summary.vocabulary.contains("the"));
}

#[tokio::test]
async fn fetching_twice_overwrites_with_same_content() {
    let body = article(&long_abstract("Asthma"));
    let (base_url, _) = serve(HashMap::from([(7, body.clone())])).await;

    let dir = tempfile::tempdir().unwrap();
    let config = Config::default()
        .with_root(dir.path())
        .with_base_url(base_url)
        .with_ids(7..8);

    let first = fetch_pages(&config).await.unwrap();
    let second = fetch_pages(&config).await.unwrap();

    assert_eq!(first.written, vec![7]);
    assert_eq!(second.written, vec![7]);
    assert_eq!(std::fs::read_to_string(config.raw_path(7)).unwrap(), body);
}

#[tokio::test]
async fn custom_user_agent_is_sent() {
    let (base_url, agents) = serve(HashMap::from([(1, article("x"))])).await;

    let dir = tempfile::tempdir().unwrap();
    let config = Config::default()
        .with_root(dir.path())
        .with_base_url(base_url)
        .with_user_agent("Mozilla/5.0 (X11; Linux x86_64; rv:127.0) Gecko/20100101 Firefox/127.0")
        .with_ids(1..2);

    fetch_pages(&config).await.unwrap();
    assert_eq!(
        agents.lock().unwrap().as_slice(),
        ["Mozilla/5.0 (X11; Linux x86_64; rv:127.0) Gecko/20100101 Firefox/127.0"]
    );
}
