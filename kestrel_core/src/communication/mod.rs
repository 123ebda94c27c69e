//! In-process communication primitives
//!
//! KESTREL wires robots to simulators and test harnesses through bounded
//! point-to-point links. The link layer is deliberately minimal: commands
//! out and sensor updates in are fire-and-forget, never blocking the
//! caller.

pub mod link;

pub use link::{Link, LinkMetrics};
