/// The word provider supplies target words and decides whether a guess is a real word. Every
/// method has a local fallback, so none of them can fail from the caller's point of view.
use anyhow::Context;
use log::*;
use serde::Deserialize;
use std::{future::Future, time::Duration};

use crate::config::Config;
use crate::wordle::is_word;
use crate::words;

/// How many times the random word API is asked before giving up on a 5-letter word.
pub const MAX_FETCH_ATTEMPTS: usize = 10;

pub trait WordProvider: Send + Sync + 'static {
    /// Returns a target word immediately from the local list.
    fn initial_word(&self) -> String;

    /// Tries to get a target word from a richer source. Returns None on any failure.
    fn try_fetch_better_word(&self) -> impl Future<Output = Option<String>> + Send;

    /// Returns true if `word` is an acceptable guess. `target` is always acceptable.
    fn is_valid(&self, word: &str, target: &str) -> impl Future<Output = bool> + Send;
}

/// Some random word APIs answer with `{"word": "..."}`, some with `{"word": ["..."]}`, and some
/// with a bare `["..."]`.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum RandomWordResponse {
    Object { word: OneOrMany },
    List(Vec<String>),
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// `parse_random_word` extracts the word from a random word API response body, uppercased.
pub fn parse_random_word(body: &str) -> anyhow::Result<String> {
    let response: RandomWordResponse =
        serde_json::from_str(body).context("Error deserializing random word response")?;

    let word = match response {
        RandomWordResponse::Object {
            word: OneOrMany::One(word),
        } => Some(word),
        RandomWordResponse::Object {
            word: OneOrMany::Many(words),
        }
        | RandomWordResponse::List(words) => words.into_iter().next(),
    };

    word.map(|w| w.trim().to_ascii_uppercase())
        .ok_or_else(|| anyhow::anyhow!("random word response has no word"))
}

/// RemoteWordProvider asks a random word API for targets and a dictionary API for guesses,
/// falling back to the embedded lists. Leaving a URL unset disables that remote call.
#[derive(Debug, Clone)]
pub struct RemoteWordProvider {
    client: reqwest::Client,
    word_api_url: Option<String>,
    dictionary_url: Option<String>,
    api_key: Option<String>,
    fetch_timeout: Duration,
    validate_timeout: Duration,
}

impl RemoteWordProvider {
    pub fn new(config: &Config) -> anyhow::Result<RemoteWordProvider> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout.max(config.validate_timeout))
            .build()
            .context("Error building HTTP client")?;

        Ok(RemoteWordProvider {
            client,
            word_api_url: config.word_api_url.clone(),
            dictionary_url: config.dictionary_url.clone(),
            api_key: config.api_key.clone(),
            fetch_timeout: config.fetch_timeout,
            validate_timeout: config.validate_timeout,
        })
    }

    /// Provider that never leaves the process.
    pub fn offline() -> RemoteWordProvider {
        RemoteWordProvider {
            client: reqwest::Client::new(),
            word_api_url: None,
            dictionary_url: None,
            api_key: None,
            fetch_timeout: Duration::from_secs(5),
            validate_timeout: Duration::from_secs(3),
        }
    }

    async fn fetch_word(&self, url: &str, api_key: &str) -> anyhow::Result<String> {
        let body = self
            .client
            .get(url)
            .header("X-Api-Key", api_key)
            .timeout(self.fetch_timeout)
            .send()
            .await
            .context(format!("Error requesting {}", url))?
            .error_for_status()
            .context(format!("Error status from {}", url))?
            .text()
            .await
            .context(format!("Error reading response from {}", url))?;

        parse_random_word(&body)
    }

    async fn lookup(&self, url: &str, word: &str) -> anyhow::Result<bool> {
        let url = format!(
            "{}/{}",
            url.trim_end_matches('/'),
            word.to_ascii_lowercase()
        );
        let response = self
            .client
            .get(&url)
            .timeout(self.validate_timeout)
            .send()
            .await
            .context(format!("Error requesting {}", url))?;

        Ok(response.status().is_success())
    }
}

impl WordProvider for RemoteWordProvider {
    fn initial_word(&self) -> String {
        words::random_target().to_string()
    }

    async fn try_fetch_better_word(&self) -> Option<String> {
        let url = self.word_api_url.as_deref()?;
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("No API key for {}, keeping the local word", url);
            return None;
        };

        let fetch = async {
            for attempt in 1..=MAX_FETCH_ATTEMPTS {
                match self.fetch_word(url, api_key).await {
                    Ok(word) if is_word(&word) => return Some(word),
                    Ok(word) => debug!("Attempt {}: {:?} is not a usable word", attempt, word),
                    Err(e) => {
                        warn!("Error fetching word: {:#}", e);
                        return None;
                    }
                }
            }
            warn!("No usable word after {} attempts", MAX_FETCH_ATTEMPTS);
            None
        };

        match tokio::time::timeout(self.fetch_timeout, fetch).await {
            Ok(word) => word,
            Err(_) => {
                warn!("Timed out fetching word from {}", url);
                None
            }
        }
    }

    async fn is_valid(&self, word: &str, target: &str) -> bool {
        if word.eq_ignore_ascii_case(target) {
            return true;
        }
        if !is_word(word) {
            return false;
        }
        if words::is_allowed(word) {
            return true;
        }

        let Some(url) = self.dictionary_url.as_deref() else {
            return false;
        };

        // The allow-list already said no, so every failure below ends in false.
        match tokio::time::timeout(self.validate_timeout, self.lookup(url, word)).await {
            Ok(Ok(found)) => found,
            Ok(Err(e)) => {
                warn!("Dictionary lookup failed, using the local list: {:#}", e);
                false
            }
            Err(_) => {
                warn!("Dictionary lookup for {} timed out, using the local list", word);
                false
            }
        }
    }
}
