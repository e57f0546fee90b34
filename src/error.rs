//! Error values returned by the dispatcher and its request queue.
//!
//! None of these are fatal. Each one means "the request changed nothing",
//! and where the caller handed over a value it is returned untouched.

use core::fmt;

/// Error returned when the registry has no free slot left.
///
/// Carries the rejected action back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterError<A>(pub A);

impl<A> RegisterError<A> {
    /// Take back the action that could not be registered
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> fmt::Display for RegisterError<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("state registry is full")
    }
}

/// Reason a chain request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    /// Primary and secondary state are the same
    SelfChain,
    /// No entry is registered for the primary state
    UnknownState,
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfChain => f.write_str("a state cannot be chained to itself"),
            Self::UnknownState => f.write_str("primary state is not registered"),
        }
    }
}

/// Error returned when trying to post into a full request queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull<S>(pub S);

impl<S> fmt::Display for QueueFull<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("request queue is full")
    }
}
