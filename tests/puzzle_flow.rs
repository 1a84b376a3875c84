use std::fs;
use std::time::Duration;

use cryptic::app::{App, ExitNavigator};
use cryptic::config::Config;
use cryptic::puzzle::config::PuzzleConfig;
use cryptic::puzzle::feedback::{BOUNCE_DURATION, BOUNCE_STAGGER, ToastKind, VIDEO_REVEAL_DELAY};
use cryptic::puzzle::layout::Slot;
use cryptic::puzzle::scheduler::TimerQueue;
use cryptic::puzzle::session::{CheckOutcome, PuzzleSession};
use cryptic::puzzle::video::extract_video_id;
use cryptic::ui::keypad::Control;
use cryptic::ui::theme::Theme;

fn load(dir: &tempfile::TempDir, name: &str, content: &str) -> PuzzleConfig {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    PuzzleConfig::load(&path).unwrap()
}

fn apply_due(session: &mut PuzzleSession, timers: &mut TimerQueue, now: Duration) {
    for effect in timers.drain_due(now) {
        session.apply(effect);
    }
}

#[test]
fn port_has_four_letters_and_no_spaces() {
    let session = PuzzleSession::new(PuzzleConfig::default());
    assert_eq!(session.layout().letter_count(), 4);
    assert_eq!(session.layout().space_count(), 0);
}

#[test]
fn ice_cream_splits_three_then_five() {
    let dir = tempfile::tempdir().unwrap();
    let config = load(
        &dir,
        "ice-cream.json",
        r#"{"solution": "icecream", "clue": "Cold treat", "wordBreaks": [3]}"#,
    );
    let session = PuzzleSession::new(config);
    let slots = session.layout().slots();
    assert_eq!(slots.len(), 9);
    assert!(slots[..3].iter().all(|s| matches!(s, Slot::Letter(_))));
    assert_eq!(slots[3], Slot::Space);
    assert!(slots[4..].iter().all(|s| matches!(s, Slot::Letter(_))));
    assert_eq!(session.clue_line(), "Cold treat (8)");
}

#[test]
fn typing_the_solution_solves_and_one_wrong_letter_fails() {
    let solution = "ICECREAM";
    for wrong_at in 0..solution.len() {
        let mut session = PuzzleSession::new(PuzzleConfig {
            solution: solution.to_string(),
            word_breaks: vec![3],
            ..PuzzleConfig::default()
        });
        let mut timers = TimerQueue::new();
        for (i, ch) in solution.chars().enumerate() {
            session.input_letter(if i == wrong_at { 'X' } else { ch });
        }
        assert_eq!(session.check(&mut timers), CheckOutcome::Mismatch);
        assert_eq!(
            session.feedback().latest_toast().map(|t| t.kind),
            Some(ToastKind::Error)
        );

        session.set_focus(wrong_at);
        session.input_letter(solution.chars().nth(wrong_at).unwrap());
        assert_eq!(session.check(&mut timers), CheckOutcome::Solved);
    }
}

#[test]
fn success_animation_and_video_from_toml_puzzle() {
    let dir = tempfile::tempdir().unwrap();
    let config = load(
        &dir,
        "reward.toml",
        r#"
solution = "TIDE"
clue = "Flow of the sea"
author = "A. Setter"
date = "2 July, 2025"
videoUrl = "https://www.youtube.com/watch?v=abc123&t=5"
"#,
    );
    let mut session = PuzzleSession::new(config);
    let mut timers = TimerQueue::new();
    for ch in "TIDE".chars() {
        session.input_letter(ch);
    }
    assert_eq!(session.check(&mut timers), CheckOutcome::Solved);

    // Last cell starts after three staggers and is still bouncing just before
    // its animation ends.
    let last_start = BOUNCE_STAGGER * 3;
    apply_due(&mut session, &mut timers, last_start);
    assert!(session.feedback().is_bouncing(3));
    apply_due(&mut session, &mut timers, last_start + BOUNCE_DURATION);
    assert!(!session.feedback().is_bouncing(3));

    apply_due(&mut session, &mut timers, VIDEO_REVEAL_DELAY);
    let video = session.feedback().video().unwrap();
    assert_eq!(video.video_id, "abc123");
    assert!(video.embed_url.ends_with("/abc123?autoplay=1"));
}

#[test]
fn video_id_scenarios() {
    assert_eq!(
        extract_video_id("https://www.youtube.com/watch?v=abc123&t=5").as_deref(),
        Ok("abc123")
    );
    assert_eq!(extract_video_id("https://youtu.be/xyz789").as_deref(), Ok("xyz789"));
    assert!(extract_video_id("https://example.com/notavideo").is_err());
}

#[test]
fn focus_and_length_invariants_under_random_walk() {
    let mut session = PuzzleSession::new(PuzzleConfig {
        solution: "CROSSWORD".to_string(),
        ..PuzzleConfig::default()
    });
    // Deterministic pseudo-random op stream.
    let mut state: u32 = 12345;
    for _ in 0..500 {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        match (state >> 16) % 4 {
            0 | 1 => session.input_letter((b'A' + ((state >> 8) % 26) as u8) as char),
            2 => session.backspace(),
            _ => {
                session.set_focus(((state >> 4) % 12) as usize);
            }
        }
        assert_eq!(session.answer().len(), 9);
        assert!(session.focus() < 9);
    }
}

#[test]
fn app_session_end_to_end() {
    let mut app = App::new(
        Config::default(),
        PuzzleConfig {
            video_url: Some("https://youtu.be/xyz789".to_string()),
            ..PuzzleConfig::default()
        },
        Theme::default(),
        ExitNavigator::default(),
    );

    app.tap(Control::Check);
    assert!(app.timers.len() == 1, "only the info toast dismissal is queued");

    for ch in "PORT".chars() {
        app.tap(Control::Key(ch));
    }
    app.tap(Control::Check);
    app.run_timers_at(VIDEO_REVEAL_DELAY);
    assert!(app.video_open());

    app.tap(Control::CloseVideo);
    assert!(!app.video_open());

    app.tap(Control::Back);
    assert_eq!(app.navigator.target.as_deref(), Some("index.html"));
    assert!(app.session.is_none());
}

#[test]
fn bundled_sample_puzzles_load() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("puzzles");

    let ice = PuzzleConfig::load(&dir.join("ice-cream.toml")).unwrap();
    assert_eq!(ice.solution, "ICECREAM");
    assert_eq!(ice.word_breaks, vec![3]);

    let port = PuzzleConfig::load(&dir.join("port.json")).unwrap();
    assert_eq!(port, PuzzleConfig::default());
}
