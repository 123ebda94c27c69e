//! Message types shared across the KESTREL fleet
//!
//! Value types carried between robots, simulators, and the orchestration
//! layer. Fixed-size messages are `#[repr(C)]` PODs so they can cross a
//! zero-copy boundary unchanged.

pub mod cmd_vel;
pub mod pose;
pub mod scan;

pub use cmd_vel::CmdVel;
pub use pose::Pose2D;
pub use scan::LaserScan;
