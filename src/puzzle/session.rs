use tracing::{debug, info, trace, warn};

use crate::puzzle::config::PuzzleConfig;
use crate::puzzle::feedback::{
    BOUNCE_DURATION, BOUNCE_STAGGER, Effect, FeedbackState, SHAKE_DURATION, ToastKind,
    VIDEO_REVEAL_DELAY, VideoOverlay,
};
use crate::puzzle::layout::GridLayout;
use crate::puzzle::scheduler::Scheduler;
use crate::puzzle::video::{self, DEFAULT_EMBED_BASE};

pub const SOLVED_MESSAGE: &str = "Correct! \u{1f389}";
pub const MISMATCH_MESSAGE: &str = "Not quite right. Try again!";
pub const INCOMPLETE_MESSAGE: &str = "Please complete the word first!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Some cell is still empty. Nothing changed.
    Incomplete,
    Solved,
    Mismatch,
}

/// One puzzle, from load until the host drops it.
pub struct PuzzleSession {
    config: PuzzleConfig,
    solution: Vec<char>,
    layout: GridLayout,
    answer: Vec<Option<char>>,
    focus: usize,
    feedback: FeedbackState,
    embed_base: String,
}

impl PuzzleSession {
    pub fn new(config: PuzzleConfig) -> Self {
        let solution: Vec<char> = config.solution.chars().collect();
        let layout = GridLayout::build(solution.len(), &config.word_breaks);
        let answer = vec![None; solution.len()];
        debug!(
            len = solution.len(),
            breaks = ?config.word_breaks,
            video = config.video_url.is_some(),
            "puzzle session created"
        );
        Self {
            config,
            solution,
            layout,
            answer,
            focus: 0,
            feedback: FeedbackState::default(),
            embed_base: DEFAULT_EMBED_BASE.to_string(),
        }
    }

    pub fn with_embed_base(mut self, base: impl Into<String>) -> Self {
        self.embed_base = base.into();
        self
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn feedback(&self) -> &FeedbackState {
        &self.feedback
    }

    pub fn len(&self) -> usize {
        self.solution.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solution.is_empty()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn cell(&self, index: usize) -> Option<char> {
        self.answer.get(index).copied().flatten()
    }

    pub fn answer(&self) -> &[Option<char>] {
        &self.answer
    }

    pub fn answer_text(&self) -> String {
        self.answer.iter().flatten().collect()
    }

    /// Drives the check button: enabled iff every cell holds a letter.
    pub fn is_complete(&self) -> bool {
        self.answer.iter().all(Option::is_some)
    }

    /// Clue followed by the answer length, e.g. `Frozen dessert (8)`.
    pub fn clue_line(&self) -> String {
        format!("{} ({})", self.config.clue, self.solution.len())
    }

    pub fn byline(&self) -> String {
        format!("By {}", self.config.author)
    }

    /// Write `ch` at the focus, then advance unless already on the last cell.
    pub fn input_letter(&mut self, ch: char) {
        let len = self.answer.len();
        if self.focus < len {
            self.answer[self.focus] = Some(ch);
            if self.focus + 1 < len {
                self.focus += 1;
            }
        }
        debug!(letter = %ch, focus = self.focus, "letter input");
    }

    /// Clear the focused cell if it holds a letter; otherwise step back one
    /// cell and clear that one.
    pub fn backspace(&mut self) {
        match self.answer.get(self.focus) {
            Some(Some(_)) => self.answer[self.focus] = None,
            Some(None) if self.focus > 0 => {
                self.focus -= 1;
                self.answer[self.focus] = None;
            }
            _ => {}
        }
        debug!(focus = self.focus, "backspace");
    }

    /// Move focus to a tapped cell. Returns false for an index with no cell.
    pub fn set_focus(&mut self, index: usize) -> bool {
        if index >= self.answer.len() {
            return false;
        }
        self.focus = index;
        true
    }

    pub fn check(&mut self, scheduler: &mut impl Scheduler) -> CheckOutcome {
        if !self.is_complete() {
            debug!("check ignored, answer incomplete");
            return CheckOutcome::Incomplete;
        }

        let guess = self.answer_text();
        if guess == self.config.solution {
            info!(answer = %guess, "puzzle solved");
            self.on_solved(scheduler);
            CheckOutcome::Solved
        } else {
            info!(answer = %guess, "wrong answer");
            self.on_mismatch(scheduler);
            CheckOutcome::Mismatch
        }
    }

    fn on_solved(&mut self, scheduler: &mut impl Scheduler) {
        self.feedback
            .push_toast(SOLVED_MESSAGE, ToastKind::Success, scheduler);

        let round = self.feedback.next_bounce_round();
        for (order, cell) in self.layout.letter_indices().enumerate() {
            let start = BOUNCE_STAGGER * order as u32;
            scheduler.schedule(start, Effect::StartBounce(cell, round));
            scheduler.schedule(start + BOUNCE_DURATION, Effect::EndBounce(cell, round));
        }

        if self.config.video_url.is_some() {
            scheduler.schedule(VIDEO_REVEAL_DELAY, Effect::RevealVideo);
        } else {
            debug!("no reward video configured");
        }
    }

    fn on_mismatch(&mut self, scheduler: &mut impl Scheduler) {
        self.feedback
            .push_toast(MISMATCH_MESSAGE, ToastKind::Error, scheduler);
        self.feedback.set_shaking(true);
        scheduler.schedule(SHAKE_DURATION, Effect::ClearShake);
    }

    /// Show a transient message.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        scheduler: &mut impl Scheduler,
    ) -> u64 {
        self.feedback.push_toast(message, kind, scheduler)
    }

    /// Apply a scheduled effect. Effects whose target no longer exists are
    /// dropped.
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::StartBounce(cell, round) if cell < self.answer.len() => {
                self.feedback.start_bounce(cell, round);
            }
            Effect::EndBounce(cell, round) => {
                if !self.feedback.end_bounce(cell, round) {
                    trace!(cell, round, "stale bounce end ignored");
                }
            }
            Effect::ClearShake => self.feedback.set_shaking(false),
            Effect::DismissToast(id) => {
                self.feedback.dismiss_toast(id);
            }
            Effect::RevealVideo => self.reveal_video(),
            Effect::StartBounce(cell, _) => debug!(cell, "bounce for missing cell dropped"),
        }
    }

    fn reveal_video(&mut self) {
        let Some(url) = self.config.video_url.as_deref() else {
            return;
        };
        match video::extract_video_id(url) {
            Ok(video_id) => {
                let embed_url = video::embed_url(&self.embed_base, &video_id);
                info!(%video_id, %embed_url, "showing reward video");
                self.feedback.show_video(VideoOverlay {
                    video_id,
                    embed_url,
                });
            }
            Err(err) => warn!(error = %err, "reward video skipped"),
        }
    }

    /// Dismiss the reward overlay. Returns false if none was open.
    pub fn close_video(&mut self) -> bool {
        self.feedback.close_video()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::puzzle::feedback::TOAST_DURATION;
    use crate::puzzle::scheduler::TimerQueue;

    fn session(solution: &str) -> PuzzleSession {
        PuzzleSession::new(PuzzleConfig {
            solution: solution.to_string(),
            ..PuzzleConfig::default()
        })
    }

    fn type_word(session: &mut PuzzleSession, word: &str) {
        for ch in word.chars() {
            session.input_letter(ch);
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let s = session("PORT");
        assert_eq!(s.len(), 4);
        assert_eq!(s.answer().len(), 4);
        assert_eq!(s.focus(), 0);
        assert!(!s.is_complete());
        assert_eq!(s.answer_text(), "");
    }

    #[test]
    fn test_clue_line_and_byline() {
        let s = session("PORT");
        assert_eq!(s.clue_line(), "Paddleboat's left side or its terminus!? (4)");
        assert_eq!(s.byline(), "By William Snow");
    }

    #[test]
    fn test_input_advances_then_saturates() {
        let mut s = session("PORT");
        s.input_letter('P');
        assert_eq!(s.focus(), 1);
        type_word(&mut s, "ORT");
        assert_eq!(s.focus(), 3);
        assert!(s.is_complete());

        // Typing on the last cell overwrites it in place.
        s.input_letter('X');
        assert_eq!(s.focus(), 3);
        assert_eq!(s.cell(3), Some('X'));
    }

    #[test]
    fn test_input_overwrites_filled_cell_after_tap() {
        let mut s = session("PORT");
        type_word(&mut s, "PORT");
        assert!(s.set_focus(1));
        s.input_letter('A');
        assert_eq!(s.answer_text(), "PART");
        assert_eq!(s.focus(), 2);
    }

    #[test]
    fn test_backspace_on_filled_cell_keeps_focus() {
        let mut s = session("PORT");
        type_word(&mut s, "PORT");
        assert_eq!(s.focus(), 3);
        s.backspace();
        assert_eq!(s.focus(), 3);
        assert_eq!(s.cell(3), None);
        assert_eq!(s.answer_text(), "POR");
    }

    #[test]
    fn test_backspace_on_empty_cell_steps_back_and_clears() {
        let mut s = session("PORT");
        type_word(&mut s, "PO");
        assert_eq!(s.focus(), 2);
        assert_eq!(s.cell(2), None);
        s.backspace();
        assert_eq!(s.focus(), 1);
        assert_eq!(s.cell(1), None);
        s.backspace();
        assert_eq!(s.focus(), 0);
        assert_eq!(s.cell(0), None);
        assert_eq!(s.answer_text(), "");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut s = session("PORT");
        s.backspace();
        assert_eq!(s.focus(), 0);
        assert_eq!(s.answer().len(), 4);
    }

    #[test]
    fn test_backspace_skips_nothing_when_predecessor_empty() {
        // Tap cell 3 with nothing typed: backspace moves to 2 and clears it.
        let mut s = session("PORT");
        s.set_focus(3);
        s.backspace();
        assert_eq!(s.focus(), 2);
    }

    #[test]
    fn test_set_focus_rejects_out_of_range() {
        let mut s = session("PORT");
        assert!(!s.set_focus(4));
        assert_eq!(s.focus(), 0);
        assert!(s.set_focus(3));
        assert_eq!(s.focus(), 3);
    }

    #[test]
    fn test_check_incomplete_changes_nothing() {
        let mut s = session("PORT");
        let mut timers = TimerQueue::new();
        type_word(&mut s, "PO");
        let before: Vec<Option<char>> = s.answer().to_vec();
        assert_eq!(s.check(&mut timers), CheckOutcome::Incomplete);
        assert_eq!(s.answer(), before.as_slice());
        assert_eq!(s.focus(), 2);
        assert!(timers.is_empty());
        assert!(s.feedback().toasts().is_empty());
    }

    #[test]
    fn test_second_check_mid_bounce_runs_full_duration() {
        let mut s = session("PORT");
        let mut timers = TimerQueue::new();
        type_word(&mut s, "PORT");
        s.check(&mut timers);
        for effect in timers.drain_due(Duration::from_millis(200)) {
            s.apply(effect);
        }
        // Cell 0 started at 0ms; check again at 200ms restarts it.
        s.check(&mut timers);
        for effect in timers.drain_due(Duration::from_millis(700)) {
            s.apply(effect);
        }
        assert!(s.feedback().is_bouncing(0));

        for effect in timers.drain_due(Duration::from_millis(800)) {
            s.apply(effect);
        }
        assert!(!s.feedback().is_bouncing(0));
    }

    #[test]
    fn test_check_solved_schedules_staggered_bounce() {
        let mut s = session("PORT");
        let mut timers = TimerQueue::new();
        type_word(&mut s, "PORT");
        assert_eq!(s.check(&mut timers), CheckOutcome::Solved);
        assert_eq!(
            s.feedback().latest_toast().map(|t| t.kind),
            Some(ToastKind::Success)
        );

        for effect in timers.drain_due(Duration::ZERO) {
            s.apply(effect);
        }
        assert!(s.feedback().is_bouncing(0));
        assert!(!s.feedback().is_bouncing(1));

        for effect in timers.drain_due(Duration::from_millis(300)) {
            s.apply(effect);
        }
        assert!((0..4).all(|i| s.feedback().is_bouncing(i)));

        for effect in timers.drain_due(Duration::from_millis(600)) {
            s.apply(effect);
        }
        assert!(!s.feedback().is_bouncing(0));
        assert!(s.feedback().is_bouncing(3));

        for effect in timers.drain_due(TOAST_DURATION) {
            s.apply(effect);
        }
        assert!((0..4).all(|i| !s.feedback().is_bouncing(i)));
        assert!(s.feedback().toasts().is_empty());
        assert!(s.feedback().video().is_none());
    }

    #[test]
    fn test_check_mismatch_shakes_and_keeps_answer() {
        let mut s = session("PORT");
        let mut timers = TimerQueue::new();
        type_word(&mut s, "PART");
        assert_eq!(s.check(&mut timers), CheckOutcome::Mismatch);
        assert!(s.feedback().is_shaking());
        assert_eq!(s.answer_text(), "PART");
        assert_eq!(
            s.feedback().latest_toast().map(|t| t.message.as_str()),
            Some(MISMATCH_MESSAGE)
        );

        for effect in timers.advance(SHAKE_DURATION) {
            s.apply(effect);
        }
        assert!(!s.feedback().is_shaking());
    }

    #[test]
    fn test_check_is_case_sensitive_after_normalization() {
        let mut s = PuzzleSession::new(
            PuzzleConfig {
                solution: "port".to_string(),
                ..PuzzleConfig::default()
            }
            .normalized(),
        );
        let mut timers = TimerQueue::new();
        type_word(&mut s, "port");
        assert_eq!(s.check(&mut timers), CheckOutcome::Mismatch);
        for i in 0..4 {
            s.set_focus(i);
            s.input_letter("PORT".chars().nth(i).unwrap());
        }
        assert_eq!(s.check(&mut timers), CheckOutcome::Solved);
    }

    #[test]
    fn test_bounce_follows_slot_order_with_spaces() {
        let mut s = PuzzleSession::new(PuzzleConfig {
            solution: "ICECREAM".to_string(),
            word_breaks: vec![3],
            ..PuzzleConfig::default()
        });
        let mut timers = TimerQueue::new();
        type_word(&mut s, "ICECREAM");
        s.check(&mut timers);
        for effect in timers.drain_due(Duration::from_millis(700)) {
            s.apply(effect);
        }
        // Cell 7 starts at 700ms; cell 0 ended at 600ms.
        assert!(s.feedback().is_bouncing(7));
        assert!(!s.feedback().is_bouncing(0));
    }

    #[test]
    fn test_reward_video_revealed_after_delay() {
        let mut s = PuzzleSession::new(PuzzleConfig {
            video_url: Some("https://www.youtube.com/watch?v=abc123&t=5".to_string()),
            ..PuzzleConfig::default()
        });
        let mut timers = TimerQueue::new();
        type_word(&mut s, "PORT");
        s.check(&mut timers);

        for effect in timers.drain_due(Duration::from_millis(999)) {
            s.apply(effect);
        }
        assert!(s.feedback().video().is_none());

        for effect in timers.drain_due(VIDEO_REVEAL_DELAY) {
            s.apply(effect);
        }
        let overlay = s.feedback().video().cloned().unwrap();
        assert_eq!(overlay.video_id, "abc123");
        assert_eq!(
            overlay.embed_url,
            "https://www.youtube.com/embed/abc123?autoplay=1"
        );
        assert!(s.close_video());
        assert!(s.feedback().video().is_none());
    }

    #[test]
    fn test_unparseable_video_shows_no_overlay() {
        let mut s = PuzzleSession::new(PuzzleConfig {
            video_url: Some("https://example.com/notavideo".to_string()),
            ..PuzzleConfig::default()
        });
        let mut timers = TimerQueue::new();
        type_word(&mut s, "PORT");
        assert_eq!(s.check(&mut timers), CheckOutcome::Solved);
        for effect in timers.advance(VIDEO_REVEAL_DELAY) {
            s.apply(effect);
        }
        assert!(s.feedback().video().is_none());
    }

    #[test]
    fn test_custom_embed_base() {
        let mut s = PuzzleSession::new(PuzzleConfig {
            video_url: Some("https://youtu.be/xyz789".to_string()),
            ..PuzzleConfig::default()
        })
        .with_embed_base("https://www.youtube-nocookie.com/embed");
        let mut timers = TimerQueue::new();
        type_word(&mut s, "PORT");
        s.check(&mut timers);
        for effect in timers.advance(VIDEO_REVEAL_DELAY) {
            s.apply(effect);
        }
        assert_eq!(
            s.feedback().video().map(|v| v.embed_url.as_str()),
            Some("https://www.youtube-nocookie.com/embed/xyz789?autoplay=1")
        );
    }

    #[test]
    fn test_stale_effects_are_harmless() {
        let mut s = session("PORT");
        s.apply(Effect::StartBounce(42, 1));
        s.apply(Effect::EndBounce(42, 1));
        s.apply(Effect::DismissToast(99));
        s.apply(Effect::ClearShake);
        s.apply(Effect::RevealVideo);
        assert!(!s.feedback().is_bouncing(42));
        assert!(s.feedback().video().is_none());
    }

    #[test]
    fn test_typing_continues_during_effects() {
        let mut s = session("PORT");
        let mut timers = TimerQueue::new();
        type_word(&mut s, "PART");
        s.check(&mut timers);
        s.set_focus(1);
        s.input_letter('O');
        assert_eq!(s.answer_text(), "PORT");
        assert!(s.feedback().is_shaking());
        assert_eq!(s.check(&mut timers), CheckOutcome::Solved);
    }

    #[test]
    fn test_invariants_hold_over_mixed_inputs() {
        let mut s = session("LOCK");
        let ops = "AB<<<CDEFG<H<<<<<IJ";
        for op in ops.chars() {
            if op == '<' {
                s.backspace();
            } else {
                s.input_letter(op);
            }
            assert_eq!(s.answer().len(), 4);
            assert!(s.focus() < 4);
        }
    }
}
