//! Open/close sequencing for the project detail overlay.
//!
//! The machine never starts a timer itself. Every transition that needs a
//! delay returns a [`Deferred`] describing it, and the component schedules
//! it. Firing a deferred step with an outdated ticket does nothing, so a
//! timer that was superseded cannot move the overlay.

use super::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Time between mounting the overlay and starting its enter transition.
pub const OPEN_DELAY_MS: u32 = 50;
/// Length of the exit transition; the overlay unmounts after it.
pub const CLOSE_DELAY_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// A transition step the caller has to run after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    pub ticket: u64,
    pub delay_ms: u32,
}

pub struct ModalMachine<P> {
    phase: ModalPhase,
    is_open: bool,
    is_animating: bool,
    selected: Option<P>,
    generation: u64,
    lock: ScrollLock,
    guard: Option<ScrollLockGuard>,
}

impl<P> ModalMachine<P> {
    pub fn new(lock: ScrollLock) -> Self {
        Self {
            phase: ModalPhase::Closed,
            is_open: false,
            is_animating: false,
            selected: None,
            generation: 0,
            lock,
            guard: None,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn selected(&self) -> Option<&P> {
        self.selected.as_ref()
    }

    pub fn holds_scroll_lock(&self) -> bool {
        self.guard.is_some()
    }

    fn next_ticket(&mut self, delay_ms: u32) -> Deferred {
        self.generation += 1;
        Deferred {
            ticket: self.generation,
            delay_ms,
        }
    }

    /// Selects `project` and starts the enter sequence. Any pending step is
    /// superseded, so reopening while closing shows the new project.
    pub fn open(&mut self, project: P) -> Deferred {
        self.selected = Some(project);
        self.is_animating = true;
        self.phase = ModalPhase::Opening;
        self.next_ticket(OPEN_DELAY_MS)
    }

    /// Starts the exit sequence. Nothing to do when already closed or closing.
    pub fn close(&mut self) -> Option<Deferred> {
        match self.phase {
            ModalPhase::Opening | ModalPhase::Open => {
                self.is_animating = false;
                self.phase = ModalPhase::Closing;
                Some(self.next_ticket(CLOSE_DELAY_MS))
            }
            ModalPhase::Closed | ModalPhase::Closing => None,
        }
    }

    /// `Escape` closes only while the overlay is up.
    pub fn on_key(&mut self, key: &str) -> Option<Deferred> {
        if key == "Escape" && self.is_open {
            self.close()
        } else {
            None
        }
    }

    /// Applies the deferred step identified by `ticket`. Returns whether
    /// anything changed.
    pub fn elapsed(&mut self, ticket: u64) -> bool {
        if ticket != self.generation {
            return false;
        }
        match self.phase {
            ModalPhase::Opening => {
                self.is_open = true;
                self.phase = ModalPhase::Open;
                if self.guard.is_none() {
                    self.guard = Some(self.lock.acquire());
                }
                true
            }
            ModalPhase::Closing => {
                self.is_open = false;
                self.selected = None;
                self.phase = ModalPhase::Closed;
                self.guard = None;
                true
            }
            ModalPhase::Closed | ModalPhase::Open => false,
        }
    }

    /// Drops everything at once, for unmounting mid-sequence.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = ModalPhase::Closed;
        self.is_open = false;
        self.is_animating = false;
        self.selected = None;
        self.guard = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::scroll_lock::testing::CountingHost;

    fn machine() -> (ModalMachine<&'static str>, CountingHost) {
        let host = CountingHost::default();
        (ModalMachine::new(ScrollLock::new(host.clone())), host)
    }

    fn settle(m: &mut ModalMachine<&'static str>, step: Deferred) {
        assert!(m.elapsed(step.ticket));
    }

    #[test]
    fn open_then_close_returns_to_initial_state() {
        let (mut m, host) = machine();
        let opening = m.open("A");
        assert_eq!(opening.delay_ms, OPEN_DELAY_MS);
        assert_eq!(m.phase(), ModalPhase::Opening);
        assert!(m.is_animating());
        assert!(!m.is_open());
        assert_eq!(m.selected(), Some(&"A"));

        settle(&mut m, opening);
        assert_eq!(m.phase(), ModalPhase::Open);
        assert!(m.is_open());
        assert!(m.holds_scroll_lock());

        let closing = m.close().unwrap();
        assert_eq!(closing.delay_ms, CLOSE_DELAY_MS);
        assert!(!m.is_animating());
        assert!(m.is_open());
        assert_eq!(m.selected(), Some(&"A"));

        settle(&mut m, closing);
        assert_eq!(m.phase(), ModalPhase::Closed);
        assert!(!m.is_open());
        assert!(!m.is_animating());
        assert_eq!(m.selected(), None);
        assert!(host.balanced());
        assert_eq!(host.disabled.get(), 1);
    }

    #[test]
    fn reopen_during_close_shows_latest_project() {
        let (mut m, host) = machine();
        let first = m.open("P1");
        settle(&mut m, first);
        let closing = m.close().unwrap();
        let reopening = m.open("P2");

        // The superseded close fires late and must not apply.
        assert!(!m.elapsed(closing.ticket));
        assert_eq!(m.selected(), Some(&"P2"));

        settle(&mut m, reopening);
        assert_eq!(m.phase(), ModalPhase::Open);
        assert_eq!(m.selected(), Some(&"P2"));
        assert_eq!(host.disabled.get(), 1);
        assert_eq!(host.restored.get(), 0);

        drop(m);
        assert!(host.balanced());
    }

    #[test]
    fn close_during_opening_cancels_the_open() {
        let (mut m, host) = machine();
        let opening = m.open("A");
        let closing = m.close().unwrap();
        assert!(!m.elapsed(opening.ticket));
        assert!(!m.is_open());
        settle(&mut m, closing);
        assert_eq!(m.phase(), ModalPhase::Closed);
        assert_eq!(host.disabled.get(), 0);
        assert!(host.balanced());
    }

    #[test]
    fn escape_matches_the_close_button() {
        let (mut by_key, _) = machine();
        let (mut by_button, _) = machine();
        for m in [&mut by_key, &mut by_button] {
            let opening = m.open("A");
            settle(m, opening);
        }

        let key_step = by_key.on_key("Escape").unwrap();
        let button_step = by_button.close().unwrap();
        assert_eq!(key_step.delay_ms, button_step.delay_ms);
        settle(&mut by_key, key_step);
        settle(&mut by_button, button_step);

        assert_eq!(by_key.phase(), by_button.phase());
        assert_eq!(by_key.is_open(), by_button.is_open());
        assert_eq!(by_key.selected(), by_button.selected());
    }

    #[test]
    fn keys_are_ignored_unless_open() {
        let (mut m, _) = machine();
        assert_eq!(m.on_key("Escape"), None);
        let opening = m.open("A");
        assert_eq!(m.on_key("Escape"), None);
        settle(&mut m, opening);
        assert_eq!(m.on_key("Enter"), None);
        assert!(m.on_key("Escape").is_some());
        assert_eq!(m.on_key("Escape"), None);
    }

    #[test]
    fn close_when_closed_is_a_no_op() {
        let (mut m, _) = machine();
        assert_eq!(m.close(), None);
        assert_eq!(m.phase(), ModalPhase::Closed);
    }

    #[test]
    fn selection_is_present_while_open_or_animating() {
        let (mut m, _) = machine();
        let mut steps = vec![m.open("A")];
        settle(&mut m, steps.pop().unwrap());
        steps.push(m.close().unwrap());
        steps.push(m.open("B"));
        for step in steps {
            m.elapsed(step.ticket);
            if m.is_open() || m.is_animating() {
                assert!(m.selected().is_some());
            }
        }
    }

    #[derive(Clone, Copy, Debug)]
    enum Op {
        Open,
        Close,
        Escape,
        FireLatest,
        FireStale,
        Unmount,
    }

    const OPS: [Op; 6] = [
        Op::Open,
        Op::Close,
        Op::Escape,
        Op::FireLatest,
        Op::FireStale,
        Op::Unmount,
    ];

    // Every sequence of `len` ops, in base-6 counting order.
    fn sequences(len: u32) -> impl Iterator<Item = Vec<Op>> {
        (0..OPS.len().pow(len)).map(move |mut code| {
            (0..len)
                .map(|_| {
                    let op = OPS[code % OPS.len()];
                    code /= OPS.len();
                    op
                })
                .collect()
        })
    }

    fn run(ops: &[Op]) {
        let (mut m, host) = machine();
        let mut issued: Vec<Deferred> = Vec::new();
        for op in ops {
            match op {
                Op::Open => issued.push(m.open("P")),
                Op::Close => issued.extend(m.close()),
                Op::Escape => issued.extend(m.on_key("Escape")),
                Op::FireLatest => {
                    if let Some(step) = issued.last() {
                        m.elapsed(step.ticket);
                    }
                }
                Op::FireStale => {
                    if let Some(step) = issued.first() {
                        m.elapsed(step.ticket);
                    }
                }
                Op::Unmount => m.reset(),
            }
            let held = host.disabled.get() - host.restored.get();
            assert!(held <= 1, "lock taken twice after {:?}", ops);
            assert_eq!(held == 1, m.holds_scroll_lock(), "lock out of sync after {:?}", ops);
            if m.is_open() || m.is_animating() {
                assert!(m.selected().is_some(), "lost selection after {:?}", ops);
            }
        }
        drop(m);
        assert!(host.balanced(), "leaked scroll lock after {:?}", ops);
    }

    #[test]
    fn lock_is_balanced_for_any_sequence() {
        for len in 0..=6 {
            for ops in sequences(len) {
                run(&ops);
            }
        }
    }

    #[test]
    fn sequence_enumeration_is_exhaustive() {
        assert_eq!(sequences(0).count(), 1);
        assert_eq!(sequences(3).count(), 216);
        let distinct: std::collections::HashSet<String> =
            sequences(2).map(|ops| format!("{:?}", ops)).collect();
        assert_eq!(distinct.len(), 36);
    }
}
