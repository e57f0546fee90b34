//! Interrupt to main-loop handoff for transition requests.
//!
//! Interrupt handlers post the state they want; the idle action forwards the
//! oldest request into the [`StateControl`] once the dispatcher is idle.
//! Built on `critical-section` and `heapless::Deque`, so it can live in a
//! `static`.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::StateId;
use crate::control::StateControl;
use crate::error::QueueFull;

/// Bounded FIFO of pending state requests.
pub struct RequestQueue<S, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<S, SIZE>>>,
}

impl<S: StateId, const SIZE: usize> RequestQueue<S, SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a posting handle, for interrupt handlers.
    pub const fn sender(&self) -> RequestSender<'_, S, SIZE> {
        RequestSender { queue: self }
    }

    /// Get a draining handle, for the idle action.
    pub const fn receiver(&self) -> RequestReceiver<'_, S, SIZE> {
        RequestReceiver { queue: self }
    }

    /// Queue a request.
    ///
    /// Returns `Err(QueueFull(state))` if the queue is full.
    pub fn try_post(&self, state: S) -> Result<(), QueueFull<S>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(state).map_err(QueueFull)
        })
    }

    /// Take the oldest request, if any.
    pub fn try_take(&self) -> Option<S> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Forward the oldest request to `control`.
    ///
    /// Does nothing while `control` is busy, so requests posted during a
    /// running sequence wait instead of being dropped. Returns the state that
    /// was made pending.
    pub fn forward_to(&self, control: &StateControl<S>) -> Option<S> {
        critical_section::with(|cs| {
            if !control.is_idle() {
                return None;
            }
            let state = self.inner.borrow(cs).borrow_mut().pop_front()?;
            control.request_transition(state).then_some(state)
        })
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: StateId, const SIZE: usize> Default for RequestQueue<S, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Posting handle for a [`RequestQueue`].
#[derive(Clone, Copy)]
pub struct RequestSender<'a, S, const SIZE: usize> {
    queue: &'a RequestQueue<S, SIZE>,
}

impl<S: StateId, const SIZE: usize> RequestSender<'_, S, SIZE> {
    /// See [`RequestQueue::try_post`].
    pub fn try_post(&self, state: S) -> Result<(), QueueFull<S>> {
        self.queue.try_post(state)
    }
}

/// Draining handle for a [`RequestQueue`].
#[derive(Clone, Copy)]
pub struct RequestReceiver<'a, S, const SIZE: usize> {
    queue: &'a RequestQueue<S, SIZE>,
}

impl<S: StateId, const SIZE: usize> RequestReceiver<'_, S, SIZE> {
    /// See [`RequestQueue::try_take`].
    pub fn try_take(&self) -> Option<S> {
        self.queue.try_take()
    }

    /// See [`RequestQueue::forward_to`].
    pub fn forward_to(&self, control: &StateControl<S>) -> Option<S> {
        self.queue.forward_to(control)
    }
}
