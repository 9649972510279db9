use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

use crate::config::Config;
use crate::provider::*;
use crate::wordle::is_word;
use crate::words;

/// Serves one canned HTTP response per connection. `respond` gets the request number and path.
/// Returns the base URL and the request counter.
async fn serve<F>(respond: F) -> (String, Arc<AtomicUsize>)
where
    F: Fn(usize, &str) -> (u16, String) + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&requests);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let request = String::from_utf8_lossy(&request);
            let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

            let (status, body) = respond(counter.fetch_add(1, Ordering::SeqCst), &path);
            let reason = if status == 200 { "OK" } else { "Not Found" };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{}", addr), requests)
}

fn word_api_config(url: &str) -> Config {
    Config {
        word_api_url: Some(format!("{}/randomword", url)),
        api_key: Some("key".into()),
        fetch_timeout: Duration::from_secs(5),
        ..Default::default()
    }
}

#[test]
fn it_works() {
    assert_eq!(parse_random_word(r#"{"word": "crane"}"#).unwrap(), "CRANE");
}

#[test]
fn parses_all_response_shapes() {
    assert_eq!(
        parse_random_word(r#"{"word": ["plant", "music"]}"#).unwrap(),
        "PLANT"
    );
    assert_eq!(parse_random_word(r#"["house"]"#).unwrap(), "HOUSE");
    assert_eq!(parse_random_word(r#"{"word": " light "}"#).unwrap(), "LIGHT");

    assert!(parse_random_word(r#"{"word": []}"#).is_err());
    assert!(parse_random_word(r#"[]"#).is_err());
    assert!(parse_random_word(r#"{"words": "crane"}"#).is_err());
    assert!(parse_random_word("not json").is_err());
}

#[test]
fn embedded_lists_hold_words() {
    assert!(words::TARGET_WORDS.iter().all(|w| is_word(w)));
    assert!(words::EXTRA_VALID_WORDS.iter().all(|w| is_word(w)));
    assert!(is_word(words::random_target()));

    assert!(words::is_allowed("react"));
    assert!(words::is_allowed("SPARK"));
    assert!(!words::is_allowed("ZZZZZ"));
}

#[tokio::test]
async fn offline_provider_uses_local_lists() {
    let provider = RemoteWordProvider::offline();

    let word = provider.initial_word();
    assert!(words::TARGET_WORDS.iter().any(|w| *w == word));
    assert_eq!(provider.try_fetch_better_word().await, None);

    assert!(provider.is_valid("HOUSE", "REACT").await);
    assert!(provider.is_valid("spark", "REACT").await);
    assert!(!provider.is_valid("ZZZZZ", "REACT").await);
    assert!(!provider.is_valid("HOUS", "REACT").await);

    // The target is valid even when no list knows it.
    assert!(provider.is_valid("qxzvk", "QXZVK").await);
}

#[tokio::test]
async fn missing_api_key_skips_the_fetch() {
    let config = Config {
        word_api_url: Some("http://127.0.0.1:9/randomword".into()),
        ..Default::default()
    };
    let provider = RemoteWordProvider::new(&config).unwrap();
    assert_eq!(provider.try_fetch_better_word().await, None);
}

#[tokio::test]
async fn unreachable_services_fall_back() {
    // Nothing listens on the discard port, so every request fails fast.
    let config = Config {
        word_api_url: Some("http://127.0.0.1:9/randomword".into()),
        dictionary_url: Some("http://127.0.0.1:9/entries".into()),
        api_key: Some("key".into()),
        fetch_timeout: std::time::Duration::from_millis(500),
        validate_timeout: std::time::Duration::from_millis(500),
        ..Default::default()
    };
    let provider = RemoteWordProvider::new(&config).unwrap();

    assert_eq!(provider.try_fetch_better_word().await, None);
    assert!(provider.is_valid("HOUSE", "REACT").await);
    assert!(!provider.is_valid("QXZVK", "REACT").await);
}

#[tokio::test]
async fn fetch_retries_until_five_letters() {
    let (url, requests) = serve(|n, _| {
        let word = if n < 3 { "cat" } else { "crane" };
        (200, format!(r#"{{"word": "{}"}}"#, word))
    })
    .await;
    let provider = RemoteWordProvider::new(&word_api_config(&url)).unwrap();

    assert_eq!(provider.try_fetch_better_word().await, Some("CRANE".to_string()));
    assert_eq!(requests.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn fetch_gives_up_after_ten_requests() {
    let (url, requests) = serve(|_, _| (200, r#"{"word": "cat"}"#.to_string())).await;
    let provider = RemoteWordProvider::new(&word_api_config(&url)).unwrap();

    assert_eq!(provider.try_fetch_better_word().await, None);
    assert_eq!(requests.load(Ordering::SeqCst), MAX_FETCH_ATTEMPTS);
}

#[tokio::test]
async fn fetch_stops_on_error_status() {
    let (url, requests) = serve(|_, _| (404, String::new())).await;
    let provider = RemoteWordProvider::new(&word_api_config(&url)).unwrap();

    assert_eq!(provider.try_fetch_better_word().await, None);
    assert_eq!(requests.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn dictionary_status_decides_validity() {
    let (url, requests) = serve(|_, path| {
        if path.ends_with("/qxzvk") {
            (200, r#"[{"word": "qxzvk"}]"#.to_string())
        } else {
            (404, r#"{"title": "No Definitions Found"}"#.to_string())
        }
    })
    .await;
    let config = Config {
        dictionary_url: Some(format!("{}/entries/", url)),
        validate_timeout: Duration::from_secs(3),
        ..Default::default()
    };
    let provider = RemoteWordProvider::new(&config).unwrap();

    assert!(!words::is_allowed("QXZVK"));
    assert!(provider.is_valid("QXZVK", "REACT").await);
    assert!(!provider.is_valid("ZXQVB", "REACT").await);
    assert_eq!(requests.load(Ordering::SeqCst), 2);

    // Words on the local list never reach the dictionary.
    assert!(provider.is_valid("HOUSE", "REACT").await);
    assert_eq!(requests.load(Ordering::SeqCst), 2);
}
