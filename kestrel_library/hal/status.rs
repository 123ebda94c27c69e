use std::fmt;

/// Robot operational status
///
/// Transitions other than the fault path are driven entirely by the
/// orchestration layer; the HAL never infers navigation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotStatus {
    Idle,
    Navigating,
    Stuck,
    Recovering,
    Fault,
}

impl RobotStatus {
    /// Label table; exhaustive so a new status cannot be added without
    /// extending it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Navigating => "NAVIGATING",
            Self::Stuck => "STUCK",
            Self::Recovering => "RECOVERING",
            Self::Fault => "FAULT",
        }
    }

    pub(crate) fn into_u8(self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Navigating => 1,
            Self::Stuck => 2,
            Self::Recovering => 3,
            Self::Fault => 4,
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Idle,
            1 => Self::Navigating,
            2 => Self::Stuck,
            3 => Self::Recovering,
            _ => Self::Fault,
        }
    }
}

impl fmt::Display for RobotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fault types for hardware failure simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// No active fault
    None,
    /// Motors unresponsive; blocks every velocity command
    MotorTimeout,
    /// Random 50% command loss
    PacketDrop,
    /// Pose/scan ingestion stops; state retains last known values
    SensorFreeze,
}

impl FaultKind {
    /// Label table; exhaustive so a new fault cannot be added without
    /// extending it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::MotorTimeout => "MOTOR_TIMEOUT",
            Self::PacketDrop => "PACKET_DROP",
            Self::SensorFreeze => "SENSOR_FREEZE",
        }
    }

    /// Parse an injectable fault name, case-insensitively
    ///
    /// `None` has no injectable label; unknown names yield `Option::None`
    /// and injection treats them as a no-op.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "motor_timeout" => Some(Self::MotorTimeout),
            "packet_drop" => Some(Self::PacketDrop),
            "sensor_freeze" => Some(Self::SensorFreeze),
            _ => None,
        }
    }

    pub(crate) fn into_u8(self) -> u8 {
        match self {
            Self::None => 0,
            Self::MotorTimeout => 1,
            Self::PacketDrop => 2,
            Self::SensorFreeze => 3,
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::MotorTimeout,
            2 => Self::PacketDrop,
            3 => Self::SensorFreeze,
            _ => Self::None,
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
