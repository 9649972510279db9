/// Session is the game controller. It keeps the game state for one player at a time, turns key
/// presses into state changes, validates attempts through the word provider, and persists the
/// game and score through the store.
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fmt::Display,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};
use tokio::{sync::RwLock, task::JoinHandle};

use crate::config::Config;
use crate::provider::WordProvider;
use crate::store::Store;
use crate::wordle::{Game, State, Wordle, WORD_LENGTH};
use crate::words;

/// Player selects the partition games and scores are saved in.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Player {
    Guest,
    User(String),
}

impl Player {
    /// The store key for this player's save data.
    pub fn key(&self) -> String {
        match self {
            Player::Guest => "wordle:guest".to_string(),
            Player::User(id) => format!("wordle:user:{}", id),
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Guest => write!(f, "guest"),
            Player::User(id) => write!(f, "{}", id),
        }
    }
}

/// Move is the outcome of submitting an attempt.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Move {
    /// The attempt was accepted and the game goes on.
    Valid,
    /// The current row doesn't have all its letters.
    InvalidLength,
    /// The word was rejected; the row is kept for correction.
    InvalidWord,
    Won,
    Lost,
    /// The game has already ended.
    GameOver,
    /// Another attempt is still being validated.
    Busy,
    /// The game was reset or the player switched while the attempt was being validated.
    Cancelled,
}

/// Score represents a player's score.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub games: u32,
    pub wins: u32,
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pct = if self.games == 0 {
            0.0
        } else {
            self.wins as f32 / self.games as f32 * 100.0
        };
        write!(f, "{:.0}% ({}/{})", pct, self.wins, self.games)
    }
}

/// SaveData represents the data that is saved for each player. Data is saved in JSON format.
#[derive(Serialize, Deserialize)]
struct SaveData {
    player: Player,
    #[serde(default)]
    score: Score,
    last_wordle: Option<Wordle>,
}

struct Inner {
    player: Player,
    wordle: Wordle,
    score: Score,
    /// Bumped whenever the game is replaced, so late results from older games are dropped.
    generation: u64,
}

/// Clears the submitting flag when the submission ends, however it ends.
struct SubmitGuard<'a>(&'a AtomicBool);

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct Session<P: WordProvider, S: Store> {
    provider: Arc<P>,
    store: Arc<S>,
    inner: Arc<RwLock<Inner>>,
    submitting: Arc<AtomicBool>,
    upgrade: Mutex<Option<JoinHandle<()>>>,
    validate_timeout: Duration,
}

impl<P: WordProvider, S: Store> Session<P, S> {
    /// Starts a session for the configured player, resuming their in-progress game if one was
    /// saved.
    pub async fn start(config: &Config, provider: P, store: S) -> Session<P, S> {
        let session = Session {
            provider: Arc::new(provider),
            store: Arc::new(store),
            inner: Arc::new(RwLock::new(Inner {
                player: config.player.clone(),
                wordle: Wordle::default(),
                score: Score::default(),
                generation: 0,
            })),
            submitting: Arc::new(AtomicBool::new(false)),
            upgrade: Mutex::new(None),
            validate_timeout: config.validate_timeout,
        };

        session.open(config.player.clone()).await;
        session
    }

    /// Returns a copy of the current game.
    pub async fn wordle(&self) -> Wordle {
        self.inner.read().await.wordle.clone()
    }

    /// Returns a renderable snapshot of the current game.
    pub async fn game(&self) -> Game {
        self.inner.read().await.wordle.game()
    }

    pub async fn score(&self) -> Score {
        self.inner.read().await.score.clone()
    }

    pub async fn player(&self) -> Player {
        self.inner.read().await.player.clone()
    }

    /// Returns true while an attempt is being validated.
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Types a letter into the current row. Returns false if nothing changed.
    pub async fn add_letter(&self, letter: char) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.inner.write().await.wordle.add_letter(letter)
    }

    /// Removes the last letter of the current row. Returns false if nothing changed.
    pub async fn delete_letter(&self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.inner.write().await.wordle.delete_letter()
    }

    /// Submits the current row as an attempt.
    pub async fn submit_attempt(&self) -> Move {
        if self.submitting.swap(true, Ordering::SeqCst) {
            return Move::Busy;
        }
        let _guard = SubmitGuard(&self.submitting);

        let (player, word, target, generation) = {
            let inner = self.inner.read().await;
            if !inner.wordle.is_playing() {
                return Move::GameOver;
            }
            if inner.wordle.current_input().len() != WORD_LENGTH {
                debug!(
                    "{} submitted {:?}, not enough letters",
                    inner.player,
                    inner.wordle.current_input()
                );
                return Move::InvalidLength;
            }
            (
                inner.player.clone(),
                inner.wordle.current_input().to_string(),
                inner.wordle.target_word().to_string(),
                inner.generation,
            )
        };

        // The target is always accepted, even if the provider is down or doesn't know it.
        let valid = word == target || self.validate(&word, &target).await;

        let mut inner = self.inner.write().await;
        if inner.generation != generation || inner.wordle.current_input() != word {
            info!("Discarding attempt {} from {}, the game changed", word, player);
            return Move::Cancelled;
        }

        if !valid {
            info!("{} guessed {}, which is not a valid word", player, word);
            return Move::InvalidWord;
        }

        let result = match inner.wordle.play_turn() {
            Ok(State::Playing) => {
                info!("{} guessed {}", player, word);
                Move::Valid
            }
            Ok(State::Won) => {
                inner.score.wins += 1;
                info!("{} won with {}", player, word);
                Move::Won
            }
            Ok(State::Lost) => {
                info!("{} lost with {} (target: {})", player, word, target);
                Move::Lost
            }
            Err(e) => {
                warn!("Error playing {} for {}: {:#}", word, player, e);
                Move::GameOver
            }
        };

        persist(&*self.store, &inner).await;
        result
    }

    /// Starts a new game for the current player.
    pub async fn reset_game(&self) {
        self.cancel_upgrade();

        let mut inner = self.inner.write().await;
        inner.generation += 1;
        inner.wordle = new_wordle(&*self.provider);
        inner.score.games += 1;
        info!("{} started a new game", inner.player);
        debug!("Target word: {}", inner.wordle.target_word());

        persist(&*self.store, &inner).await;
        self.spawn_upgrade(inner.generation);
    }

    /// Saves the current player's game and switches to another player's.
    pub async fn switch_player(&self, player: Player) {
        self.close().await;
        self.open(player).await;
    }

    /// Cancels background work and saves the game. Late results are discarded afterwards.
    pub async fn close(&self) {
        self.cancel_upgrade();

        let mut inner = self.inner.write().await;
        inner.generation += 1;
        persist(&*self.store, &inner).await;
    }

    async fn open(&self, player: Player) {
        let saved = load(&*self.store, &player).await;

        let mut inner = self.inner.write().await;
        inner.generation += 1;
        inner.player = player;

        let (score, last_wordle) = match saved {
            Some(save_data) => (save_data.score, save_data.last_wordle),
            None => (Score::default(), None),
        };
        inner.score = score;

        let resumed = last_wordle
            .and_then(|w| match w.restore() {
                Ok(w) => Some(w),
                Err(e) => {
                    warn!("Discarding saved game for {}: {:#}", inner.player, e);
                    None
                }
            })
            .filter(|w| w.is_playing());

        let fresh = match resumed {
            Some(wordle) => {
                info!(
                    "Resuming game for {} at row {}",
                    inner.player,
                    wordle.row()
                );
                inner.wordle = wordle;
                false
            }
            None => {
                inner.wordle = new_wordle(&*self.provider);
                inner.score.games += 1;
                info!("Starting new game with {}", inner.player);
                debug!("Target word: {}", inner.wordle.target_word());
                true
            }
        };

        persist(&*self.store, &inner).await;
        if fresh {
            self.spawn_upgrade(inner.generation);
        }
    }

    /// Validates `word` with a bounded wait, falling back to the local list.
    async fn validate(&self, word: &str, target: &str) -> bool {
        match tokio::time::timeout(self.validate_timeout, self.provider.is_valid(word, target))
            .await
        {
            Ok(valid) => valid,
            Err(_) => {
                warn!("Validating {} timed out, using the local list", word);
                words::is_allowed(word)
            }
        }
    }

    /// Fetches a better target in the background. It only lands if the game is the same one, no
    /// attempt has been made, and none is being validated.
    fn spawn_upgrade(&self, generation: u64) {
        let provider = Arc::clone(&self.provider);
        let store = Arc::clone(&self.store);
        let inner = Arc::clone(&self.inner);
        let submitting = Arc::clone(&self.submitting);

        let handle = tokio::spawn(async move {
            let Some(word) = provider.try_fetch_better_word().await else {
                return;
            };

            let mut inner = inner.write().await;
            if inner.generation != generation {
                debug!("Discarding fetched word, the game was replaced");
                return;
            }
            if submitting.load(Ordering::SeqCst) || !inner.wordle.replace_target(word.as_str()) {
                info!(
                    "Discarding fetched word, {} already started playing",
                    inner.player
                );
                return;
            }

            info!("Upgraded target word for {}", inner.player);
            debug!("Target word: {}", inner.wordle.target_word());
            persist(&*store, &inner).await;
        });

        let mut upgrade = self.upgrade.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = upgrade.replace(handle) {
            previous.abort();
        }
    }

    fn cancel_upgrade(&self) {
        let mut upgrade = self.upgrade.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = upgrade.take() {
            handle.abort();
        }
    }
}

impl<P: WordProvider, S: Store> Drop for Session<P, S> {
    fn drop(&mut self) {
        self.cancel_upgrade();
    }
}

/// Builds a game on the provider's instant word, or on a local word if that isn't usable.
fn new_wordle<P: WordProvider>(provider: &P) -> Wordle {
    let word = provider.initial_word();
    match Wordle::new(word.as_str()) {
        Ok(wordle) => wordle,
        Err(e) => {
            warn!("Initial word is unusable: {:#}", e);
            Wordle::new(words::random_target()).unwrap_or_default()
        }
    }
}

async fn load<S: Store>(store: &S, player: &Player) -> Option<SaveData> {
    let data = match store.load(&player.key()).await {
        Ok(Some(data)) => data,
        Ok(None) => return None,
        Err(e) => {
            warn!("No saved game state for {}: {:#}", player, e);
            return None;
        }
    };

    match serde_json::from_slice::<SaveData>(&data) {
        Ok(save_data) if save_data.player == *player => Some(save_data),
        Ok(save_data) => {
            warn!(
                "Saved game under {} belongs to {}, ignoring it",
                player.key(),
                save_data.player
            );
            None
        }
        Err(e) => {
            warn!("Error deserializing game state for {}: {}", player, e);
            None
        }
    }
}

async fn persist<S: Store>(store: &S, inner: &Inner) {
    let save_data = SaveData {
        player: inner.player.clone(),
        score: inner.score.clone(),
        last_wordle: Some(inner.wordle.clone()),
    };

    let data = match serde_json::to_vec(&save_data) {
        Ok(data) => data,
        Err(e) => {
            error!("Error serializing game state: {}", e);
            return;
        }
    };

    if let Err(e) = store.save(&inner.player.key(), data).await {
        error!("Error saving game state: {:#}", e);
    }
}
