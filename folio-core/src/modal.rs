//! Modal dialog and copy confirmation state.
//!
//! Opening a modal is a two-step sequence: it is un-hidden first and gets its
//! centering class a few milliseconds later, so CSS transitions observe the
//! hidden -> visible change. Deferred steps carry a [`Ticket`]; a ticket issued
//! before a later `close`/`show` is stale and its step is dropped.

/// Identifies a deferred step.
pub type Ticket = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    /// Visible, waiting for the centering class
    Revealing,
    Open,
}

#[derive(Debug, Clone, Default)]
pub struct ModalState {
    phase: ModalPhase,
    ticket: Ticket,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// Start opening. Returns the ticket for the deferred centering step, or `None`
    /// if the modal is already open.
    pub fn open(&mut self) -> Option<Ticket> {
        if self.phase == ModalPhase::Open {
            return None;
        }
        self.ticket += 1;
        self.phase = ModalPhase::Revealing;
        Some(self.ticket)
    }

    /// Complete the opening sequence. Returns `false` for a stale ticket, in which
    /// case the centering class must not be applied.
    pub fn finish_open(&mut self, ticket: Ticket) -> bool {
        if self.phase != ModalPhase::Revealing || ticket != self.ticket {
            return false;
        }
        self.phase = ModalPhase::Open;
        true
    }

    pub fn close(&mut self) {
        self.ticket += 1;
        self.phase = ModalPhase::Closed;
    }
}

/// Transient "copied" confirmation.
///
/// Each successful copy restarts the countdown; only the most recent ticket may
/// hide the message again.
#[derive(Debug, Clone)]
pub struct CopyFlash {
    duration_ms: u32,
    visible: bool,
    ticket: Ticket,
}

impl CopyFlash {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            visible: false,
            ticket: 0,
        }
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the message. The returned ticket must be passed to [`CopyFlash::expire`]
    /// after [`CopyFlash::duration_ms`].
    pub fn show(&mut self) -> Ticket {
        self.ticket += 1;
        self.visible = true;
        self.ticket
    }

    /// Hide the message if `ticket` is the latest one. Returns whether it was hidden.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if !self.visible || ticket != self.ticket {
            return false;
        }
        self.visible = false;
        true
    }
}

/// A click closes a modal only when it lands on the backdrop itself, never on
/// anything inside the dialog content.
pub fn closes_on_click(state: &ModalState, target_is_backdrop: bool) -> bool {
    state.is_open() && target_is_backdrop
}
