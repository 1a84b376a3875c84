use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tracing::{debug, info, trace};

use crate::config::Config;
use crate::input::KeyAction;
use crate::puzzle::config::PuzzleConfig;
use crate::puzzle::feedback::ToastKind;
use crate::puzzle::scheduler::TimerQueue;
use crate::puzzle::session::{CheckOutcome, INCOMPLETE_MESSAGE, PuzzleSession};
use crate::ui::components::{header, letter_grid, video_overlay, virtual_keyboard};
use crate::ui::keypad::{self, Control, KeypadCursor};
use crate::ui::layout::{PuzzleLayout, contains};
use crate::ui::theme::Theme;

/// Where the back action goes. The host page decides what that means.
pub trait Navigator {
    fn navigate(&mut self, target: &str);
}

/// Records the requested page; the binary reports it after leaving the
/// alternate screen.
#[derive(Debug, Default)]
pub struct ExitNavigator {
    pub target: Option<String>,
}

impl Navigator for ExitNavigator {
    fn navigate(&mut self, target: &str) {
        self.target = Some(target.to_string());
    }
}

pub struct App<N: Navigator = ExitNavigator> {
    pub session: Option<PuzzleSession>,
    pub timers: TimerQueue,
    pub theme: Theme,
    pub config: Config,
    pub cursor: KeypadCursor,
    pub navigator: N,
    pub should_quit: bool,
    /// Last drawn frame size, used to map mouse clicks onto controls.
    pub viewport: Rect,
    pub tick_count: u64,
    started_at: Instant,
}

impl<N: Navigator> App<N> {
    pub fn new(config: Config, puzzle: PuzzleConfig, theme: Theme, navigator: N) -> Self {
        let session = PuzzleSession::new(puzzle).with_embed_base(config.embed_base.clone());
        Self {
            session: Some(session),
            timers: TimerQueue::new(),
            theme,
            config,
            cursor: KeypadCursor::default(),
            navigator,
            should_quit: false,
            viewport: Rect::default(),
            tick_count: 0,
            started_at: Instant::now(),
        }
    }

    pub fn video_open(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.feedback().video().is_some())
    }

    pub fn handle_action(&mut self, action: KeyAction) {
        let now = self.started_at.elapsed();
        self.handle_action_at(action, now);
    }

    /// Dispatch `action` at `now`, measured from app start. The timer queue
    /// is caught up first so new delays count from the moment of input.
    pub fn handle_action_at(&mut self, action: KeyAction, now: Duration) {
        self.run_timers_at(now);
        match action {
            KeyAction::Tap(control) => self.tap(control),
            KeyAction::MoveCursor(movement) => self.cursor.apply(movement),
            KeyAction::PressCursor => self.tap(self.cursor.control()),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Suppressed => trace!("physical key suppressed"),
            KeyAction::Ignored => {}
        }
    }

    /// Route a tap on any on-screen control.
    pub fn tap(&mut self, control: Control) {
        match control {
            Control::Back => return self.go_back(),
            Control::Menu => return self.show_menu(),
            _ => {}
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };
        match control {
            Control::Key(ch) => session.input_letter(ch),
            Control::Backspace => session.backspace(),
            Control::Cell(index) => {
                session.set_focus(index);
            }
            Control::Check => {
                if session.check(&mut self.timers) == CheckOutcome::Incomplete {
                    session.notify(INCOMPLETE_MESSAGE, ToastKind::Info, &mut self.timers);
                }
            }
            Control::Info => {
                session.notify(
                    self.config.info_message.clone(),
                    ToastKind::Info,
                    &mut self.timers,
                );
            }
            Control::CloseVideo => {
                session.close_video();
            }
            Control::Back | Control::Menu => {}
        }
    }

    fn go_back(&mut self) {
        info!(target_page = %self.config.index_page, "navigating back");
        self.navigator.navigate(&self.config.index_page);
        self.close_session();
        self.should_quit = true;
    }

    fn show_menu(&mut self) {
        info!("opening menu");
    }

    /// Drop the session. Effects still queued become no-ops.
    pub fn close_session(&mut self) {
        if self.session.take().is_some() {
            debug!(pending = self.timers.len(), "session closed");
        }
    }

    pub fn on_tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Apply every effect due at wall-clock time.
    pub fn run_timers(&mut self) {
        let elapsed = self.started_at.elapsed();
        self.run_timers_at(elapsed);
    }

    /// Apply every effect due at `now`, measured from app start.
    pub fn run_timers_at(&mut self, now: Duration) {
        for effect in self.timers.drain_due(now) {
            if let Some(session) = self.session.as_mut() {
                session.apply(effect);
            }
        }
    }

    /// Horizontal grid offset for the current frame.
    pub fn shake_offset(&self) -> i16 {
        let shaking = self
            .session
            .as_ref()
            .is_some_and(|s| s.feedback().is_shaking());
        match (shaking, self.tick_count % 2) {
            (false, _) => 0,
            (true, 0) => -1,
            (true, _) => 1,
        }
    }

    /// The control under a mouse click in the last drawn frame.
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let session = self.session.as_ref()?;
        let area = self.viewport;

        // The overlay swallows every click except its close control.
        if session.feedback().video().is_some() {
            return contains(video_overlay::close_rect(area), column, row)
                .then_some(Control::CloseVideo);
        }

        let layout = PuzzleLayout::new(area);
        let mut targets = header::button_rects(layout.header);
        targets.extend(
            letter_grid::cell_rects(session.layout(), layout.grid)
                .into_iter()
                .map(|(i, rect)| (Control::Cell(i), rect)),
        );
        targets.extend(keypad::key_rects(virtual_keyboard::inner_area(
            layout.keyboard,
        )));
        targets.push((Control::Check, layout.check));

        targets
            .into_iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(control, _)| control)
    }
}
