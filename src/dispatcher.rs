//! Table-driven state dispatcher
//!
//! The driver loop asks the dispatcher which action should run next. Actions
//! and event sources steer it through the shared [`StateControl`].

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::StateId;
use crate::control::StateControl;
use crate::error::{ChainError, RegisterError};
use crate::registry::Registry;

/// Registry capacity of the reference firmware
pub const DEFAULT_CAPACITY: usize = 128;

/// Type-erased action borrowed for the lifetime of the dispatcher
pub type DynAction<'a> = &'a mut dyn FnMut();

/// State dispatcher - maps states to actions and drives transitions
///
/// A is the action type, N is the registry capacity.
///
/// # Usage
///
/// ```ignore
/// static CONTROL: StateControl<u8> = StateControl::new(0);
///
/// let mut idle = || {
///     if let Some(state) = REQUESTS.try_take() {
///         CONTROL.request_transition(state);
///     }
/// };
/// let mut armed = || {
///     blink();
///     CONTROL.complete();
/// };
///
/// let mut dispatcher: StateDispatcher<'_, u8, DynAction<'_>, 8> =
///     StateDispatcher::new(&CONTROL, &mut idle);
/// let _ = dispatcher.register(1, &mut armed);
///
/// loop {
///     dispatcher.step();
/// }
/// ```
pub struct StateDispatcher<'a, S, A, const N: usize = DEFAULT_CAPACITY> {
    control: &'a StateControl<S>,
    idle_action: A,
    registry: Registry<S, A, N>,
}

impl<'a, S: StateId, A, const N: usize> StateDispatcher<'a, S, A, N> {
    /// Create a dispatcher driving `control`, with `idle_action` bound to
    /// the control's idle state
    pub const fn new(control: &'a StateControl<S>, idle_action: A) -> Self {
        Self {
            control,
            idle_action,
            registry: Registry::new(),
        }
    }

    /// Register `action` for `state`, chained back to the idle state.
    ///
    /// Returns the action if the registry is full.
    pub fn register(&mut self, state: S, action: A) -> Result<(), RegisterError<A>> {
        let result = self
            .registry
            .insert(state, action, self.control.idle_state());

        #[cfg(feature = "esp32-log")]
        if result.is_err() {
            println!("[dispatcher] registry full, state {:?} dropped", state);
        }

        result
    }

    /// Make `secondary` run once `primary` completes.
    ///
    /// Nothing changes if both states are equal or `primary` was never
    /// registered.
    pub fn chain(&mut self, primary: S, secondary: S) -> Result<(), ChainError> {
        let result = self.registry.chain(primary, secondary);
        match result {
            Ok(()) => self.control.rechain(primary, secondary),
            Err(_error) => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[dispatcher] chain {:?} -> {:?} ignored: {}",
                    primary, secondary, _error
                );
            }
        }
        result
    }

    /// Advance to the pending state and return its action.
    ///
    /// A state that is still pending after its action ran is treated as
    /// stuck and replaced by the idle state. Unregistered states resolve to
    /// the idle action.
    pub fn poll(&mut self) -> &mut A {
        let idle = self.control.idle_state();
        let registry = &self.registry;
        let current = self
            .control
            .advance(|state| registry.chained(state).unwrap_or(idle));

        match self.registry.action_mut(current) {
            Some(action) => action,
            None => &mut self.idle_action,
        }
    }

    /// Request a transition, see [`StateControl::request_transition`]
    pub fn request_transition(&self, state: S) -> bool {
        self.control.request_transition(state)
    }

    /// Complete the current state, see [`StateControl::complete`]
    pub fn complete(&self) {
        self.control.complete();
    }

    pub fn set_static_state(&self, state: S) -> bool {
        self.control.set_static_state(state)
    }

    pub fn static_state(&self) -> S {
        self.control.static_state()
    }

    pub fn idle_state(&self) -> S {
        self.control.idle_state()
    }

    pub fn current_state(&self) -> S {
        self.control.current_state()
    }

    pub fn pending_state(&self) -> S {
        self.control.pending_state()
    }

    pub fn is_idle(&self) -> bool {
        self.control.is_idle()
    }

    /// Returns `true` if an entry exists for `state`
    pub fn is_registered(&self, state: S) -> bool {
        self.registry.contains(state)
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Shared control cell, for handing to actions and event sources
    pub const fn control(&self) -> &'a StateControl<S> {
        self.control
    }
}

impl<S: StateId, A: FnMut(), const N: usize> StateDispatcher<'_, S, A, N> {
    /// Poll and run the returned action
    ///
    /// This is one iteration of the driver loop.
    pub fn step(&mut self) {
        (self.poll())();
    }
}
