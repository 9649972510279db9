use std::{path::PathBuf, time::Duration};

use argh::FromArgs;

use crate::session::Player;

pub const DEFAULT_WORD_API_URL: &str = "https://api.api-ninjas.com/v1/randomword";
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Environment variable holding the credential for the random word API.
pub const API_KEY_VAR: &str = "WORDLE_API_KEY";

#[derive(FromArgs)]
/// Guess the 5-letter word in 6 tries.
pub struct Args {
    /// player identity to load and save games for; plays as guest if not set
    #[argh(option, short = 'p')]
    pub player: Option<String>,

    /// directory where games are saved, one JSON file per player
    #[argh(option, short = 's')]
    pub save_dir: Option<String>,

    /// endpoint returning a random word
    #[argh(option, default = "String::from(DEFAULT_WORD_API_URL)")]
    pub word_api_url: String,

    /// endpoint used to look up guesses, the word is appended as a path segment
    #[argh(option, default = "String::from(DEFAULT_DICTIONARY_URL)")]
    pub dictionary_url: String,

    /// never call remote services, use the embedded word lists only
    #[argh(switch)]
    pub offline: bool,

    /// timeout for fetching a target word, in milliseconds
    #[argh(option, default = "5000")]
    pub fetch_timeout_ms: u64,

    /// timeout for validating a guess, in milliseconds
    #[argh(option, default = "3000")]
    pub validate_timeout_ms: u64,
}

/// Config is the resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub player: Player,
    pub save_dir: Option<PathBuf>,
    pub word_api_url: Option<String>,
    pub dictionary_url: Option<String>,
    pub api_key: Option<String>,
    pub fetch_timeout: Duration,
    pub validate_timeout: Duration,
}

impl Default for Config {
    /// Offline guest configuration with the standard timeouts.
    fn default() -> Config {
        Config {
            player: Player::Guest,
            save_dir: None,
            word_api_url: None,
            dictionary_url: None,
            api_key: None,
            fetch_timeout: Duration::from_secs(5),
            validate_timeout: Duration::from_secs(3),
        }
    }
}

impl Config {
    /// Builds the configuration from parsed flags and the environment.
    pub fn from_args(args: Args) -> Config {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let non_empty = |s: String| {
            let s = s.trim().to_string();
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        };

        let (word_api_url, dictionary_url) = if args.offline {
            (None, None)
        } else {
            (non_empty(args.word_api_url), non_empty(args.dictionary_url))
        };

        Config {
            player: args
                .player
                .and_then(non_empty)
                .map(Player::User)
                .unwrap_or(Player::Guest),
            save_dir: args.save_dir.and_then(non_empty).map(PathBuf::from),
            word_api_url,
            dictionary_url,
            api_key,
            fetch_timeout: Duration::from_millis(args.fetch_timeout_ms),
            validate_timeout: Duration::from_millis(args.validate_timeout_ms),
        }
    }
}
