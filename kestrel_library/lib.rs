//! # KESTREL Library
//!
//! Domain layer of the KESTREL fleet stack: message types shared across
//! the fleet, pure geometry algorithms for path shaping and hazard
//! checking, and the per-robot hardware abstraction layer.
//!
//! # Organization
//!
//! - [`messages`] - value types carried over transports (`CmdVel`,
//!   `Pose2D`, `LaserScan`)
//! - [`algorithms`] - pure computation: path smoothing and
//!   collision/hazard checking
//! - [`hal`] - per-robot state, command gating, fault injection, and the
//!   motion transport abstraction

pub mod algorithms;
pub mod hal;
pub mod messages;

pub use algorithms::collision::{CollisionChecker, GridConfig, StickyZone};
pub use hal::transport::{LinkTransport, MotionTransport, SimTransport, TransportHarness};
pub use hal::{FaultKind, RobotHal, RobotStatus, StateSnapshot};
pub use messages::{CmdVel, LaserScan, Pose2D};
