use serde::{Deserialize, Serialize};

/// 2D pose update (position and heading)
///
/// Carried inbound from odometry sources. Mobile bases in this stack
/// operate in the plane, so orientation is a single yaw angle in radians,
/// normalized to `(-pi, pi]` when built from a quaternion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[repr(C)]
pub struct Pose2D {
    /// X position in meters
    pub x: f64,
    /// Y position in meters
    pub y: f64,
    /// Heading in radians
    pub yaw: f64,
    /// Timestamp in nanoseconds since epoch
    pub stamp_nanos: u64,
}

impl Pose2D {
    /// Create a new 2D pose with current timestamp
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self {
            x,
            y,
            yaw,
            stamp_nanos: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64,
        }
    }

    /// Create pose at origin
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Build a pose from a position and an orientation quaternion
    ///
    /// Extracts yaw from the `(x, y, z, w)` quaternion; roll and pitch are
    /// discarded for planar bases.
    pub fn from_quaternion(x: f64, y: f64, q: (f64, f64, f64, f64)) -> Self {
        let (qx, qy, qz, qw) = q;
        let siny_cosp = 2.0 * (qw * qz + qx * qy);
        let cosy_cosp = 1.0 - 2.0 * (qy * qy + qz * qz);
        Self::new(x, y, siny_cosp.atan2(cosy_cosp))
    }

    /// Calculate euclidean distance to another pose
    pub fn distance_to(&self, other: &Pose2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Check if values are finite
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.yaw.is_finite()
    }
}

// Enable zero-copy serialization with bytemuck
unsafe impl bytemuck::Pod for Pose2D {}
unsafe impl bytemuck::Zeroable for Pose2D {}
