//! # KESTREL - Fleet Hardware Abstraction and Geometry Core
//!
//! KESTREL coordinates small fleets of mobile robots sharing a 2D
//! workspace with a hazardous "sticky" region. It provides per-robot
//! hardware abstraction with fault injection, hazard/conflict checking,
//! and deterministic path smoothing.
//!
//! ## Quick Start
//!
//! ```rust
//! use kestrel::prelude::*;
//!
//! let hal = RobotHal::new("robot_1", SimTransport::new("robot_1"));
//! hal.set_target(6.0, 6.0);
//!
//! let mut checker = CollisionChecker::new();
//! checker.set_sticky_zone(5, 7, 5, 7);
//!
//! if checker.is_in_sticky_zone(6.0, 6.0) {
//!     hal.stop();
//! }
//! ```
//!
//! ## Features
//!
//! - **Per-robot HAL** with atomic state, command gating, and simulated
//!   faults for resilience testing
//! - **Runtime-injected transports** (simulated or wired) chosen at
//!   construction
//! - **Pure geometry**: hazard classification, fleet conflicts, spline
//!   smoothing, arc-length resampling

// Re-export core components
pub use kestrel_core::{self, *};

// Re-export standard library with alias
pub use kestrel_library as library;

/// The KESTREL prelude - everything you need to get started
pub mod prelude {
    // Error types
    pub use kestrel_core::error::{KestrelError, KestrelResult};
    pub type Result<T> = KestrelResult<T>;

    // Communication
    pub use kestrel_core::communication::{Link, LinkMetrics};

    // Robot HAL
    pub use kestrel_library::hal::{
        FaultKind, LinkTransport, MotionTransport, RobotHal, RobotStatus, SimTransport,
        StateSnapshot, TransportHarness,
    };

    // Geometry
    pub use kestrel_library::algorithms::collision::{CollisionChecker, GridConfig, StickyZone};
    pub use kestrel_library::algorithms::path_smoother;

    // Common std types
    pub use std::sync::Arc;
    pub use std::time::{Duration, Instant};

    // Common traits
    pub use serde::{Deserialize, Serialize};

    // Re-export anyhow for error handling
    pub use anyhow::{anyhow, bail, ensure, Context, Result as AnyResult};

    // Re-export all message types for convenience
    pub use kestrel_library::messages::*;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get KESTREL version
pub fn version() -> &'static str {
    VERSION
}
