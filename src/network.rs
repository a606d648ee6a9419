use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;

const USER_AGENT: &str = concat!("quakereport/", env!("CARGO_PKG_VERSION"));

pub fn make_new_client() -> Result<Client> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .build()?)
}

/// Downloads a feed document and returns its body.
pub fn fetch_feed(client: &Client, url: &str) -> Result<String> {
    log::debug!("GET {}", url);
    let resp = client
        .get(url)
        .send()
        .with_context(|| format!("unable to reach {}", url))?;
    resp.error_for_status_ref()?;

    Ok(resp.text()?)
}

/// Serves a single HTTP response on a loopback port and returns its URL.
#[cfg(test)]
pub(crate) fn serve_once(status: &'static str, body: &'static str) -> String {
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        // drain the request head
        while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
            line.clear();
        }
        let mut stream = reader.into_inner();
        write!(
            stream,
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
        .unwrap();
    });

    format!("http://{}/feed.geojson", addr)
}

#[test]
fn test_fetch_feed_ok() {
    let url = serve_once("200 OK", "{\"features\":[]}");
    let client = make_new_client().unwrap();
    assert_eq!(fetch_feed(&client, &url).unwrap(), "{\"features\":[]}");
}

#[test]
fn test_fetch_feed_not_found() {
    let url = serve_once("404 Not Found", "not here");
    let client = make_new_client().unwrap();
    let err = fetch_feed(&client, &url).unwrap_err();
    assert!(format!("{:#}", err).contains("404"));
}

#[test]
fn test_user_agent() {
    assert!(USER_AGENT.starts_with("quakereport/"));
    make_new_client().unwrap();
}
