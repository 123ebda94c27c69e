//! Pure computational algorithms for fleet geometry
//!
//! This module contains pure algorithmic implementations with no I/O
//! dependencies. All algorithms are fully tested and can be reused across
//! different nodes or applications.
//!
//! # Architecture
//!
//! - **No I/O**: Algorithms contain only computation logic
//! - **Deterministic**: Same input always produces the same output
//! - **Reusable**: Can be used by any orchestration layer or external code
//!
//! # Available Algorithms
//!
//! ## Path Shaping
//! - **path_smoother**: Catmull-Rom and Bezier smoothing, moving-average
//!   filtering, arc-length resampling, turn-sharpness classification
//!
//! ## Hazard & Conflict Checking
//! - **collision**: sticky-zone containment, grid bounds, batch waypoint
//!   classification, fleet target conflicts

pub mod collision;
pub mod path_smoother;
