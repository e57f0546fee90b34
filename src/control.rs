//! Shared transition cell.
//!
//! Holds the current/pending/static triad of a dispatcher. Every method
//! takes `&self` and runs inside a critical section, so the cell can sit in a
//! `static` and be touched from interrupt handlers, from actions and from the
//! driver loop at the same time.

use core::cell::Cell;

use critical_section::Mutex;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::StateId;

#[derive(Debug, Clone, Copy)]
struct Cursor<S> {
    idle: S,
    current: S,
    pending: S,
    /// Chain target of `current`, cached on entry
    chained: S,
    remembered: S,
}

/// Transition state shared between the driver loop and event sources.
///
/// The idle state doubles as the entry point and the fail-safe fallback.
pub struct StateControl<S> {
    inner: Mutex<Cell<Cursor<S>>>,
}

impl<S: StateId> StateControl<S> {
    /// Create a new control cell resting in `idle`
    pub const fn new(idle: S) -> Self {
        Self {
            inner: Mutex::new(Cell::new(Cursor {
                idle,
                current: idle,
                pending: idle,
                chained: idle,
                remembered: idle,
            })),
        }
    }

    fn read(&self) -> Cursor<S> {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }

    fn update<R>(&self, f: impl FnOnce(&mut Cursor<S>) -> R) -> R {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut cursor = cell.get();
            let result = f(&mut cursor);
            cell.set(cursor);
            result
        })
    }

    /// Request a transition to `state`.
    ///
    /// Accepted only while the dispatcher is idle, so a running sequence is
    /// never preempted. Returns `false` if the request was dropped.
    pub fn request_transition(&self, state: S) -> bool {
        let accepted = self.update(|cursor| {
            if cursor.current != cursor.idle {
                return false;
            }
            cursor.pending = state;
            true
        });

        #[cfg(feature = "esp32-log")]
        if !accepted {
            println!("[dispatcher] transition to {:?} dropped: busy", state);
        }

        accepted
    }

    /// Signal that the current state is done.
    ///
    /// Makes the chain target of the current state pending, which is the
    /// idle state unless the state was chained elsewhere.
    pub fn complete(&self) {
        self.update(|cursor| cursor.pending = cursor.chained);
    }

    /// Remember `state` in the static slot. Only takes effect while idle.
    pub fn set_static_state(&self, state: S) -> bool {
        self.update(|cursor| {
            if cursor.current != cursor.idle {
                return false;
            }
            cursor.remembered = state;
            true
        })
    }

    /// Last state remembered while idle
    pub fn static_state(&self) -> S {
        self.read().remembered
    }

    /// The idle (main) state given at construction
    pub fn idle_state(&self) -> S {
        self.read().idle
    }

    /// State whose action last ran
    pub fn current_state(&self) -> S {
        self.read().current
    }

    /// State that will run on the next poll
    pub fn pending_state(&self) -> S {
        self.read().pending
    }

    /// Returns `true` while the idle state is current
    pub fn is_idle(&self) -> bool {
        let cursor = self.read();
        cursor.current == cursor.idle
    }

    /// Move the pending state in, applying the stuck-state rule.
    ///
    /// `chain_of` resolves the chain target of the entered state. Returns the
    /// new current state.
    pub(crate) fn advance(&self, chain_of: impl FnOnce(S) -> S) -> S {
        let (entered, recovered) = self.update(|cursor| {
            let recovered = cursor.current == cursor.pending && cursor.current != cursor.idle;
            if cursor.current == cursor.pending {
                cursor.pending = cursor.idle;
            }
            cursor.current = cursor.pending;
            cursor.chained = chain_of(cursor.current);
            (cursor.current, recovered)
        });

        #[cfg(feature = "esp32-log")]
        if recovered {
            println!("[dispatcher] state never completed, back to {:?}", entered);
        }
        #[cfg(not(feature = "esp32-log"))]
        let _ = recovered;

        entered
    }

    /// Keep the cached chain target in sync when `primary` is re-chained
    pub(crate) fn rechain(&self, primary: S, secondary: S) {
        self.update(|cursor| {
            if cursor.current == primary {
                cursor.chained = secondary;
            }
        });
    }
}
