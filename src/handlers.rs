use log::*;

use crate::provider::WordProvider;
use crate::session::{Move, Session};
use crate::store::Store;
use crate::wordle::{self, KeyboardStatus, Verdict, MAX_ATTEMPTS, WORD_LENGTH};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Input is a single key press or command parsed from a line typed by the player.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Input {
    Letter(char),
    Delete,
    Submit,
    Command(Command),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    New,
    Score,
    Help,
    Quit,
    Unknown(String),
}

/// Action is what the terminal loop should do after handling a line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Action {
    Reply(String),
    Quit,
}

/// `parse_line` turns a line into key presses. Letters type, `-` deletes, and the end of the
/// line is Enter if anything was typed and the line doesn't end with a delete. Lines starting
/// with `/` are commands.
pub fn parse_line(line: &str) -> Vec<Input> {
    let line = line.trim();

    if let Some(command) = line.strip_prefix('/') {
        let command = match command.trim().to_ascii_lowercase().as_str() {
            "new" | "start" => Command::New,
            "score" => Command::Score,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        };
        return vec![Input::Command(command)];
    }

    let mut inputs: Vec<Input> = line
        .chars()
        .filter_map(|c| match c {
            '-' => Some(Input::Delete),
            c if c.is_ascii_alphabetic() => Some(Input::Letter(c.to_ascii_uppercase())),
            _ => None,
        })
        .collect();

    if !inputs.is_empty() && inputs.last() != Some(&Input::Delete) {
        inputs.push(Input::Submit);
    }
    inputs
}

fn tile(ch: char, verdict: Option<Verdict>) -> String {
    match verdict {
        Some(Verdict::Correct) => format!("[{}]", ch),
        Some(Verdict::Present) => format!("({})", ch),
        Some(Verdict::Absent) => format!(" {} ", ch.to_ascii_lowercase()),
        None => format!(" {} ", ch),
    }
}

/// render_game takes a wordle::Game and returns a string representation of the board.
/// `[X]` is in the right spot, `(X)` is in the word elsewhere, a lowercase letter is not in
/// the word.
pub fn render_game(game: &wordle::Game) -> String {
    let mut s = String::new();

    for row in 0..MAX_ATTEMPTS {
        let tiles: Vec<String> = if let Some(attempt) = game.attempts.get(row) {
            attempt
                .iter()
                .map(|letter| tile(letter.ch, Some(letter.verdict)))
                .collect()
        } else if row == game.row && game.state == wordle::State::Playing {
            let mut letters = game.current_input.chars();
            (0..WORD_LENGTH)
                .map(|_| tile(letters.next().unwrap_or('_'), None))
                .collect()
        } else {
            (0..WORD_LENGTH).map(|_| tile('.', None)).collect()
        };

        s.push_str(&tiles.join(" "));
        s.push('\n');
    }
    s
}

/// render_keyboard shows the QWERTY layout annotated with the best-known verdict per letter.
pub fn render_keyboard(keyboard: &KeyboardStatus) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: Vec<String> = row.chars().map(|c| tile(c, keyboard.get(c))).collect();
            format!("{}{}", " ".repeat(i * 2), keys.join(""))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `notice` is the message shown to the player after submitting, if any.
pub fn notice(turn: Move, target_word: &str) -> Option<String> {
    match turn {
        Move::Valid => None,
        Move::InvalidLength => Some("Not enough letters".into()),
        Move::InvalidWord => Some("Not a valid word!".into()),
        Move::Won => Some("Congratulations! Type /new to play again.".into()),
        Move::Lost => Some(format!(
            "Game Over! The word was {}. Type /new to play again.",
            target_word
        )),
        Move::GameOver => Some("The game is over. Type /new to play again.".into()),
        Move::Busy => Some("Still checking the last word...".into()),
        Move::Cancelled => None,
    }
}

pub fn help_text() -> String {
    format!(
        "Guess the word in {} tries. Each guess must be a valid {}-letter word.

Type letters and press Enter to submit, `-` deletes a letter.
[W] is in the word and in the correct spot, (I) is in the word but in the wrong spot, \
a lowercase letter is not in the word.

Commands: /new, /score, /help, /quit",
        MAX_ATTEMPTS, WORD_LENGTH
    )
}

/// `handle_line` applies one line of player input to the session and returns the reply.
pub async fn handle_line<P: WordProvider, S: Store>(
    session: &Session<P, S>,
    line: &str,
) -> Action {
    let mut notices = Vec::new();

    let mut inputs = parse_line(line);
    // A bare Enter submits a full row.
    if inputs.is_empty() && session.wordle().await.current_input().len() == WORD_LENGTH {
        inputs.push(Input::Submit);
    }

    for input in inputs {
        match input {
            Input::Letter(c) => {
                session.add_letter(c).await;
            }
            Input::Delete => {
                session.delete_letter().await;
            }
            Input::Submit => {
                let turn = session.submit_attempt().await;
                let target_word = session.wordle().await.target_word().to_string();
                notices.extend(notice(turn, &target_word));
            }
            Input::Command(command) => return handle_command(session, command).await,
        }
    }

    let mut reply = render(session).await;
    for n in notices {
        reply.push('\n');
        reply.push_str(&n);
    }
    Action::Reply(reply)
}

async fn handle_command<P: WordProvider, S: Store>(
    session: &Session<P, S>,
    command: Command,
) -> Action {
    let reply = match command {
        Command::New => {
            session.reset_game().await;
            format!(
                "New game! Guess the {}-letter word.\n\n{}",
                WORD_LENGTH,
                render(session).await
            )
        }
        Command::Score => format!(
            "{}'s score: {}",
            session.player().await,
            session.score().await
        ),
        Command::Help => help_text(),
        Command::Quit => {
            info!("Quitting");
            return Action::Quit;
        }
        Command::Unknown(other) => format!("I don't know the command /{}.", other),
    };

    Action::Reply(reply)
}

/// `render` draws the board followed by the keyboard.
pub async fn render<P: WordProvider, S: Store>(session: &Session<P, S>) -> String {
    let wordle = session.wordle().await;
    format!(
        "{}\n{}\n",
        render_game(&wordle.game()),
        render_keyboard(wordle.keyboard())
    )
}
