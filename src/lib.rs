#![no_std]

pub mod control;
pub mod dispatcher;
pub mod error;
pub mod pacing;
pub mod queue;
pub mod registry;

pub use control::StateControl;
pub use dispatcher::{DEFAULT_CAPACITY, DynAction, StateDispatcher};
pub use error::{ChainError, QueueFull, RegisterError};
pub use pacing::Interval;
pub use queue::{RequestQueue, RequestReceiver, RequestSender};
pub use registry::{Entry, Registry};

pub use embassy_time::{Duration, Instant};

/// State identifier
///
/// Any small comparable value works: integers, chars, fieldless enums.
/// Implemented automatically for every type meeting the bounds.
pub trait StateId: Copy + PartialEq + core::fmt::Debug {}

impl<T: Copy + PartialEq + core::fmt::Debug> StateId for T {}
