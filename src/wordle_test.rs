use crate::wordle::*;

use crate::wordle::Verdict::{Absent, Correct, Present};

fn type_word(wordle: &mut Wordle, word: &str) {
    for c in word.chars() {
        wordle.add_letter(c);
    }
}

fn play(wordle: &mut Wordle, word: &str) -> State {
    type_word(wordle, word);
    wordle.play_turn().unwrap()
}

#[test]
fn it_works() {
    let mut wordle = Wordle::new("hello").unwrap();
    play(&mut wordle, "bolle");

    let game = wordle.game();
    let first = &game.attempts[0];
    assert_eq!(first[0], Letter { ch: 'B', verdict: Absent });
    assert_eq!(first[1], Letter { ch: 'O', verdict: Present });
    assert_eq!(first[2], Letter { ch: 'L', verdict: Correct });
}

#[test]
fn evaluates_trace_against_react() {
    assert_eq!(
        evaluate("REACT", "TRACE"),
        [Present, Present, Correct, Correct, Present]
    );
}

#[test]
fn evaluates_exact_match_as_all_correct() {
    assert_eq!(evaluate("REACT", "REACT"), [Correct; WORD_LENGTH]);
}

#[test]
fn evaluate_is_deterministic() {
    for (target, guess) in [("REACT", "TRACE"), ("HELLO", "LLAMA"), ("CRANE", "ZZZZZ")] {
        assert_eq!(evaluate(target, guess), evaluate(target, guess));
    }
}

#[test]
fn repeated_letters_are_marked_on_every_occurrence() {
    // PLANT has a single L and a single A, both Ls and both As of LLAMA are reported.
    assert_eq!(
        evaluate("PLANT", "LLAMA"),
        [Present, Correct, Correct, Absent, Present]
    );

    // One E in REACT, all three Es of EERIE are present or correct.
    let verdicts = evaluate("REACT", "EERIE");
    assert_eq!(verdicts, [Present, Correct, Present, Absent, Present]);
    assert!(verdicts
        .iter()
        .zip("EERIE".chars())
        .filter(|(_, c)| *c == 'E')
        .all(|(v, _)| *v != Absent));
}

#[test]
fn absent_only_for_letters_not_in_target() {
    let target = "STORM";
    let guess = "QUIET";
    for (i, verdict) in evaluate(target, guess).iter().enumerate() {
        let c = guess.chars().nth(i).unwrap();
        assert_eq!(*verdict == Absent, !target.contains(c), "letter {}", c);
    }
}

#[test]
fn keyboard_never_downgrades_correct() {
    let mut keyboard = KeyboardStatus::default();
    keyboard.fold("REACT", &evaluate("REACT", "REACT"));
    assert_eq!(keyboard.get('R'), Some(Correct));

    // R moves to a wrong spot, E too.
    keyboard.fold("ERRED", &evaluate("REACT", "ERRED"));
    assert_eq!(keyboard.get('R'), Some(Correct));
    assert_eq!(keyboard.get('E'), Some(Correct));
    assert_eq!(keyboard.get('D'), Some(Absent));
    assert_eq!(keyboard.get('z'), None);
}

#[test]
fn keyboard_upgrades_present_to_correct() {
    let mut keyboard = KeyboardStatus::default();
    keyboard.fold("TRACE", &evaluate("REACT", "TRACE"));
    assert_eq!(keyboard.get('T'), Some(Present));

    keyboard.fold("REACT", &evaluate("REACT", "REACT"));
    assert_eq!(keyboard.get('T'), Some(Correct));
    assert_eq!(keyboard.get('E'), Some(Correct));
}

#[test]
fn keyboard_takes_best_verdict_within_one_attempt() {
    let mut keyboard = KeyboardStatus::default();
    // The first L is present, the second one correct.
    keyboard.fold("LLAMA", &evaluate("PLANT", "LLAMA"));
    assert_eq!(keyboard.get('L'), Some(Correct));
    assert_eq!(keyboard.get('A'), Some(Correct));
    assert_eq!(keyboard.get('M'), Some(Absent));
    assert_eq!(keyboard.get('P'), None);
}

#[test]
fn rejects_bad_target() {
    assert!(Wordle::new("four").is_err());
    assert!(Wordle::new("sixsix").is_err());
    assert!(Wordle::new("ab3de").is_err());
    assert_eq!(Wordle::new("react").unwrap().target_word(), "REACT");
}

#[test]
fn add_and_delete_letters() {
    let mut wordle = Wordle::new("REACT").unwrap();
    assert!(!wordle.delete_letter());

    type_word(&mut wordle, "crane");
    assert_eq!(wordle.current_input(), "CRANE");
    assert!(!wordle.add_letter('S'));
    assert_eq!(wordle.current_input(), "CRANE");

    assert!(wordle.delete_letter());
    assert_eq!(wordle.current_input(), "CRAN");
    assert!(!wordle.add_letter('1'));
    assert_eq!(wordle.current_input(), "CRAN");
}

#[test]
fn play_turn_needs_five_letters() {
    let mut wordle = Wordle::new("REACT").unwrap();
    type_word(&mut wordle, "CRA");
    assert!(wordle.play_turn().is_err());
    assert_eq!(wordle.current_input(), "CRA");
    assert!(wordle.attempts().is_empty());
}

#[test]
fn winning_guess_ends_the_game() {
    let mut wordle = Wordle::new("REACT").unwrap();
    assert_eq!(play(&mut wordle, "TRACE"), State::Playing);
    assert_eq!(wordle.row(), 1);

    assert_eq!(play(&mut wordle, "react"), State::Won);
    assert_eq!(wordle.row(), 1);
    assert_eq!(wordle.current_input(), "");
    assert!(wordle.game().attempts[1]
        .iter()
        .all(|l| l.verdict == Correct));
}

#[test]
fn six_misses_lose_the_game() {
    let mut wordle = Wordle::new("REACT").unwrap();
    let guesses = ["HOUSE", "PLANT", "MUSIC", "LIGHT", "WORLD", "ABOUT"];

    for (i, guess) in guesses.iter().enumerate() {
        let state = play(&mut wordle, guess);
        if i < guesses.len() - 1 {
            assert_eq!(state, State::Playing);
        } else {
            assert_eq!(state, State::Lost);
        }
    }

    assert_eq!(wordle.attempts().len(), MAX_ATTEMPTS);
    assert_eq!(wordle.row(), 5);

    // Nothing changes once the game is over.
    assert!(!wordle.add_letter('A'));
    assert!(!wordle.delete_letter());
    assert!(wordle.play_turn().is_err());
    assert_eq!(wordle.attempts().len(), MAX_ATTEMPTS);
    assert_eq!(wordle.state(), State::Lost);
}

#[test]
fn replace_target_only_before_first_attempt() {
    let mut wordle = Wordle::new("REACT").unwrap();
    assert!(!wordle.replace_target("toolong"));
    assert!(wordle.replace_target("house"));
    assert_eq!(wordle.target_word(), "HOUSE");

    play(&mut wordle, "PLANT");
    assert!(!wordle.replace_target("MUSIC"));
    assert_eq!(wordle.target_word(), "HOUSE");
}

#[test]
fn restore_rebuilds_derived_state() {
    let mut wordle = Wordle::new("REACT").unwrap();
    play(&mut wordle, "TRACE");
    type_word(&mut wordle, "HO");

    let json = serde_json::to_string(&wordle).unwrap();
    let restored: Wordle = serde_json::from_str(&json).unwrap();
    let restored = restored.restore().unwrap();

    assert_eq!(restored.attempts(), wordle.attempts());
    assert_eq!(restored.current_input(), "HO");
    assert_eq!(restored.row(), 1);
    assert_eq!(restored.state(), State::Playing);
    assert_eq!(restored.keyboard(), wordle.keyboard());
}

#[test]
fn restore_rejects_corrupt_games() {
    let bad_target: Wordle =
        serde_json::from_str(r#"{"target_word":"NOPE","attempts":[]}"#).unwrap();
    assert!(bad_target.restore().is_err());

    let bad_attempt: Wordle =
        serde_json::from_str(r#"{"target_word":"REACT","attempts":["AB"]}"#).unwrap();
    assert!(bad_attempt.restore().is_err());

    let won: Wordle =
        serde_json::from_str(r#"{"target_word":"REACT","attempts":["TRACE","REACT"],"state":"playing"}"#)
            .unwrap();
    let won = won.restore().unwrap();
    assert_eq!(won.state(), State::Won);
    assert_eq!(won.row(), 1);
}
