/// Wordle is a game where you have to guess a word. The word is chosen by the game, and you
/// have 6 attempts to guess it. After each attempt, the game tells you which letters you
/// guessed correctly, and which letters are in the word but in the wrong position.
///
/// This module implements the game logic: scoring a guess against the target, the keyboard
/// annotation built up from those scores, and the playing/won/lost state machine.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of letters in every target word and attempt.
pub const WORD_LENGTH: usize = 5;

/// Number of attempts the player gets before the game is lost.
pub const MAX_ATTEMPTS: usize = 6;

/// State represents the current player state of a game.
#[derive(Deserialize, Serialize, Debug, Default, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum State {
    #[default]
    Playing,
    Won,
    Lost,
}

/// Verdict is the classification of one letter of an attempt. The declaration order is the
/// keyboard precedence: a later variant always wins over an earlier one.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

/// `evaluate` scores `guess` against `target`, one verdict per position.
///
/// A letter is `Present` whenever the target contains it anywhere, so a repeated guess letter
/// is marked on every occurrence even if the target holds it only once. Both words are expected
/// to be uppercase and `WORD_LENGTH` long; missing positions stay `Absent`.
pub fn evaluate(target: &str, guess: &str) -> [Verdict; WORD_LENGTH] {
    let mut verdicts = [Verdict::Absent; WORD_LENGTH];

    for ((i, c), t) in guess
        .chars()
        .enumerate()
        .take(WORD_LENGTH)
        .zip(target.chars())
    {
        verdicts[i] = if c == t {
            Verdict::Correct
        } else if target.contains(c) {
            Verdict::Present
        } else {
            Verdict::Absent
        };
    }

    verdicts
}

/// KeyboardStatus is the best-known verdict for every letter guessed so far. Letters that were
/// never guessed are not stored; they are "unused".
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct KeyboardStatus(BTreeMap<char, Verdict>);

impl KeyboardStatus {
    /// `fold` merges the verdicts of one attempt. A letter only ever moves up the
    /// absent < present < correct ladder.
    pub fn fold(&mut self, guess: &str, verdicts: &[Verdict; WORD_LENGTH]) {
        for (c, verdict) in guess.chars().zip(verdicts.iter().copied()) {
            self.0
                .entry(c)
                .and_modify(|known| {
                    if verdict > *known {
                        *known = verdict;
                    }
                })
                .or_insert(verdict);
        }
    }

    /// Returns the verdict for `letter`, or None if it was never guessed.
    pub fn get(&self, letter: char) -> Option<Verdict> {
        self.0.get(&letter.to_ascii_uppercase()).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Letter is a single scored letter of a committed attempt.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct Letter {
    pub ch: char,
    pub verdict: Verdict,
}

/// Game is a snapshot of a Wordle board that can be rendered and presented to the player.
#[derive(Debug)]
pub struct Game {
    pub state: State,
    pub attempts: Vec<Vec<Letter>>,
    pub current_input: String,
    pub row: usize,
}

/// `is_word` returns true if `word` is exactly `WORD_LENGTH` ASCII letters.
pub fn is_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Wordle represents a single Wordle game.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Wordle {
    /// The target word that the player is trying to guess.
    target_word: String,

    /// The words that the player has attempted so far.
    attempts: Vec<String>,

    /// The letters typed into the row being edited.
    #[serde(default)]
    current_input: String,

    /// Zero-based index of the row being edited.
    #[serde(default)]
    row: usize,

    #[serde(default)]
    state: State,

    #[serde(skip)]
    keyboard: KeyboardStatus,
}

impl Default for Wordle {
    /// A game on a fixed word, for when no other word is usable.
    fn default() -> Wordle {
        Wordle {
            target_word: "REACT".to_string(),
            attempts: Vec::new(),
            current_input: String::new(),
            row: 0,
            state: State::Playing,
            keyboard: KeyboardStatus::default(),
        }
    }
}

impl Wordle {
    /// `new` creates a new Wordle game with the given target word.
    pub fn new(target_word: impl Into<String>) -> anyhow::Result<Wordle> {
        let target_word = target_word.into().to_ascii_uppercase();
        if !is_word(&target_word) {
            anyhow::bail!(
                "target word must be {} letters long, got {:?}",
                WORD_LENGTH,
                target_word
            )
        }

        Ok(Wordle {
            target_word,
            attempts: Vec::new(),
            current_input: String::new(),
            row: 0,
            state: State::Playing,
            keyboard: KeyboardStatus::default(),
        })
    }

    /// `restore` checks a deserialized game and rebuilds the keyboard from its attempts.
    pub fn restore(mut self) -> anyhow::Result<Wordle> {
        if !is_word(&self.target_word) {
            anyhow::bail!("saved target word {:?} is not a word", self.target_word)
        }
        if self.attempts.len() > MAX_ATTEMPTS {
            anyhow::bail!("saved game has {} attempts", self.attempts.len())
        }
        if let Some(bad) = self.attempts.iter().find(|a| !is_word(a)) {
            anyhow::bail!("saved attempt {:?} is not a word", bad)
        }
        if self.current_input.len() > WORD_LENGTH
            || !self.current_input.chars().all(|c| c.is_ascii_alphabetic())
        {
            anyhow::bail!("saved input {:?} is not valid", self.current_input)
        }

        self.target_word.make_ascii_uppercase();
        self.attempts
            .iter_mut()
            .for_each(|a| a.make_ascii_uppercase());
        self.current_input.make_ascii_uppercase();

        // State and row are derived from the attempts, not taken from the save.
        self.state = if self.attempts.contains(&self.target_word) {
            State::Won
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            State::Lost
        } else {
            State::Playing
        };
        self.row = match self.state {
            State::Playing => self.attempts.len(),
            _ => self.attempts.len().saturating_sub(1),
        };
        if self.state != State::Playing {
            self.current_input.clear();
        }

        let mut keyboard = KeyboardStatus::default();
        for attempt in &self.attempts {
            keyboard.fold(attempt, &evaluate(&self.target_word, attempt));
        }
        self.keyboard = keyboard;

        Ok(self)
    }

    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    pub fn attempts(&self) -> &[String] {
        &self.attempts
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }

    pub fn is_playing(&self) -> bool {
        self.state == State::Playing
    }

    /// `add_letter` appends a letter to the current row. Returns false if nothing changed.
    pub fn add_letter(&mut self, letter: char) -> bool {
        if !self.is_playing()
            || !letter.is_ascii_alphabetic()
            || self.current_input.len() >= WORD_LENGTH
        {
            return false;
        }

        self.current_input.push(letter.to_ascii_uppercase());
        true
    }

    /// `delete_letter` removes the last letter of the current row. Returns false if nothing
    /// changed.
    pub fn delete_letter(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.current_input.pop().is_some()
    }

    /// `replace_target` swaps in a new target word, but only before the first attempt.
    pub fn replace_target(&mut self, target_word: impl Into<String>) -> bool {
        let target_word = target_word.into().to_ascii_uppercase();
        if !self.attempts.is_empty() || !self.is_playing() || !is_word(&target_word) {
            return false;
        }

        self.target_word = target_word;
        true
    }

    /// `game` returns a Game instance that can be rendered and presented to the player.
    pub fn game(&self) -> Game {
        let attempts = self
            .attempts
            .iter()
            .map(|a| {
                a.chars()
                    .zip(evaluate(&self.target_word, a))
                    .map(|(ch, verdict)| Letter { ch, verdict })
                    .collect()
            })
            .collect();

        Game {
            state: self.state,
            attempts,
            current_input: self.current_input.clone(),
            row: self.row,
        }
    }

    /// `play_turn` commits the current input as an attempt. The caller is responsible for
    /// validating the word first. Returns the state after the attempt.
    pub fn play_turn(&mut self) -> anyhow::Result<State> {
        if !self.is_playing() {
            anyhow::bail!("game is over")
        }
        if self.current_input.len() != WORD_LENGTH {
            anyhow::bail!("word must be {} characters long", WORD_LENGTH)
        }

        let word = std::mem::take(&mut self.current_input);
        let verdicts = evaluate(&self.target_word, &word);
        self.keyboard.fold(&word, &verdicts);
        self.attempts.push(word);

        if self.attempts.last() == Some(&self.target_word) {
            self.state = State::Won;
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            self.state = State::Lost;
        } else {
            self.row += 1;
        }

        Ok(self.state)
    }
}
