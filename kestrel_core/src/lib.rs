//! # KESTREL Core
//!
//! Shared plumbing for the KESTREL fleet stack: the unified error type and
//! the in-process communication link used to wire robot HALs to simulators
//! and test harnesses.

pub mod communication;
pub mod error;

pub use communication::{Link, LinkMetrics};
pub use error::{KestrelError, KestrelResult};
