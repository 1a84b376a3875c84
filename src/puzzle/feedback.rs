use std::collections::BTreeMap;
use std::time::Duration;

use crate::puzzle::scheduler::Scheduler;

pub const TOAST_DURATION: Duration = Duration::from_millis(2000);
pub const BOUNCE_STAGGER: Duration = Duration::from_millis(100);
pub const BOUNCE_DURATION: Duration = Duration::from_millis(600);
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);
pub const VIDEO_REVEAL_DELAY: Duration = Duration::from_millis(1000);

/// A deferred visual change. Applying one whose target is gone is a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Cell index and the bounce round that scheduled it.
    StartBounce(usize, u64),
    EndBounce(usize, u64),
    ClearShake,
    DismissToast(u64),
    RevealVideo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoOverlay {
    pub video_id: String,
    pub embed_url: String,
}

#[derive(Debug, Default)]
pub struct FeedbackState {
    toasts: Vec<Toast>,
    next_toast_id: u64,
    bouncing: BTreeMap<usize, u64>,
    bounce_round: u64,
    shaking: bool,
    video: Option<VideoOverlay>,
}

impl FeedbackState {
    pub fn push_toast(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        scheduler: &mut impl Scheduler,
    ) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        scheduler.schedule(TOAST_DURATION, Effect::DismissToast(id));
        id
    }

    pub fn dismiss_toast(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// The toast drawn on top.
    pub fn latest_toast(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    /// Begin a new bounce round. Ends from earlier rounds no longer apply.
    pub fn next_bounce_round(&mut self) -> u64 {
        self.bounce_round += 1;
        self.bounce_round
    }

    pub fn start_bounce(&mut self, cell: usize, round: u64) {
        self.bouncing.insert(cell, round);
    }

    /// Stop a cell's bounce, unless a later round has restarted it.
    pub fn end_bounce(&mut self, cell: usize, round: u64) -> bool {
        if self.bouncing.get(&cell) == Some(&round) {
            self.bouncing.remove(&cell);
            true
        } else {
            false
        }
    }

    pub fn is_bouncing(&self, cell: usize) -> bool {
        self.bouncing.contains_key(&cell)
    }

    pub fn set_shaking(&mut self, shaking: bool) {
        self.shaking = shaking;
    }

    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    pub fn show_video(&mut self, overlay: VideoOverlay) {
        self.video = Some(overlay);
    }

    pub fn close_video(&mut self) -> bool {
        self.video.take().is_some()
    }

    pub fn video(&self) -> Option<&VideoOverlay> {
        self.video.as_ref()
    }
}
