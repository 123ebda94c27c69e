//! Motion transport abstraction
//!
//! A transport carries velocity commands out of a robot HAL and pose/scan
//! updates into it. The adapter is injected at HAL construction, so a
//! robot can be wired to a simulator, a test harness, or nothing at all
//! without rebuilding:
//!
//! - [`SimTransport`] - standalone operation; commands are logged and
//!   counted instead of transmitted, no inbound updates ever arrive.
//! - [`LinkTransport`] - in-process loopback over [`kestrel_core::Link`]
//!   channels, with a [`TransportHarness`] handle for the other end.
//!
//! Adapters are passive: the HAL's background pump polls them, so no
//! adapter needs its own thread and none of these calls block.

use crate::messages::{CmdVel, LaserScan, Pose2D};
use kestrel_core::{KestrelResult, Link};
use std::sync::atomic::{AtomicU64, Ordering};

/// Publish/subscribe channel between one robot HAL and the outside world
pub trait MotionTransport: Send + Sync {
    /// Forward a velocity command; fire-and-forget, never blocks
    fn publish(&self, cmd: CmdVel) -> KestrelResult<()>;

    /// Next pending pose update, if any
    fn poll_pose(&self) -> Option<Pose2D>;

    /// Next pending scan update, if any
    fn poll_scan(&self) -> Option<LaserScan>;

    /// Whether the transport is attached to anything live
    fn is_connected(&self) -> bool;
}

/// Standalone transport for operation without a robot or simulator
///
/// Immediately connected; commands are accepted, logged, and counted
/// rather than transmitted. No inbound updates ever arrive.
pub struct SimTransport {
    robot_id: String,
    commands_published: AtomicU64,
}

impl SimTransport {
    pub fn new(robot_id: &str) -> Self {
        log::info!("[{}] transport running in standalone mode", robot_id);
        Self {
            robot_id: robot_id.to_string(),
            commands_published: AtomicU64::new(0),
        }
    }

    /// Number of commands accepted so far
    pub fn commands_published(&self) -> u64 {
        self.commands_published.load(Ordering::Relaxed)
    }
}

impl MotionTransport for SimTransport {
    fn publish(&self, cmd: CmdVel) -> KestrelResult<()> {
        self.commands_published.fetch_add(1, Ordering::Relaxed);
        log::debug!(
            "[{}] cmd_vel: linear={:.3} angular={:.3}",
            self.robot_id,
            cmd.linear,
            cmd.angular
        );
        Ok(())
    }

    fn poll_pose(&self) -> Option<Pose2D> {
        None
    }

    fn poll_scan(&self) -> Option<LaserScan> {
        None
    }

    fn is_connected(&self) -> bool {
        true
    }
}

/// In-process loopback transport over bounded links
///
/// Created together with a [`TransportHarness`]; the transport side goes
/// into the HAL, the harness side into whatever plays the robot
/// (simulator, test, replay tool).
pub struct LinkTransport {
    cmd_link: Link<CmdVel>,
    pose_link: Link<Pose2D>,
    scan_link: Link<LaserScan>,
}

/// The far end of a [`LinkTransport`]
///
/// Feeds pose/scan updates toward the HAL and observes the commands it
/// publishes.
pub struct TransportHarness {
    cmd_link: Link<CmdVel>,
    pose_link: Link<Pose2D>,
    scan_link: Link<LaserScan>,
}

impl LinkTransport {
    /// Create a connected transport/harness pair for one robot
    pub fn create(robot_id: &str) -> (Self, TransportHarness) {
        let cmd_link = Link::new(&format!("{}/cmd_vel", robot_id));
        let pose_link = Link::new(&format!("{}/pose", robot_id));
        let scan_link = Link::new(&format!("{}/scan", robot_id));

        let harness = TransportHarness {
            cmd_link: cmd_link.clone(),
            pose_link: pose_link.clone(),
            scan_link: scan_link.clone(),
        };

        (
            Self {
                cmd_link,
                pose_link,
                scan_link,
            },
            harness,
        )
    }
}

impl MotionTransport for LinkTransport {
    fn publish(&self, cmd: CmdVel) -> KestrelResult<()> {
        self.cmd_link.try_send(cmd)
    }

    fn poll_pose(&self) -> Option<Pose2D> {
        self.pose_link.try_recv()
    }

    fn poll_scan(&self) -> Option<LaserScan> {
        self.scan_link.try_recv()
    }

    fn is_connected(&self) -> bool {
        true
    }
}

impl TransportHarness {
    /// Push a pose update toward the HAL
    pub fn send_pose(&self, pose: Pose2D) -> KestrelResult<()> {
        self.pose_link.try_send(pose)
    }

    /// Push a scan update toward the HAL
    pub fn send_scan(&self, scan: LaserScan) -> KestrelResult<()> {
        self.scan_link.try_send(scan)
    }

    /// Next command the HAL published, if any
    pub fn try_recv_cmd(&self) -> Option<CmdVel> {
        self.cmd_link.try_recv()
    }

    /// Drain every pending command
    pub fn drain_cmds(&self) -> Vec<CmdVel> {
        let mut cmds = Vec::new();
        while let Some(cmd) = self.cmd_link.try_recv() {
            cmds.push(cmd);
        }
        cmds
    }
}
