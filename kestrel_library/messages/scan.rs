use serde::{Deserialize, Serialize};

/// Planar laser scan
///
/// Range readings swept counterclockwise from `angle_min` in steps of
/// `angle_increment`. Readings outside `[range_min, range_max]` are
/// sensor noise and are ignored by consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LaserScan {
    pub stamp_nanos: u64,
    pub angle_min: f32,
    pub angle_increment: f32,
    pub range_min: f32,
    pub range_max: f32,
    pub ranges: Vec<f32>,
}

impl LaserScan {
    /// Create a new scan with current timestamp
    pub fn new(angle_min: f32, angle_increment: f32, range_min: f32, range_max: f32, ranges: Vec<f32>) -> Self {
        Self {
            stamp_nanos: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64,
            angle_min,
            angle_increment,
            range_min,
            range_max,
            ranges,
        }
    }

    /// Closest valid reading in the scan, if any
    pub fn min_valid_range(&self) -> Option<f32> {
        self.ranges
            .iter()
            .copied()
            .filter(|r| r.is_finite() && *r >= self.range_min && *r <= self.range_max)
            .fold(None, |acc, r| match acc {
                Some(best) if best <= r => Some(best),
                _ => Some(r),
            })
    }
}
