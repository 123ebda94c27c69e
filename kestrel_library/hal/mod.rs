//! Robot Hardware Abstraction Layer
//!
//! One [`RobotHal`] instance per robot. The HAL owns the robot's
//! observable state (pose, heading, target, status, fault), gates the
//! outbound velocity-command channel, and ingests pose/scan updates from
//! an injected [`MotionTransport`] on a dedicated background pump thread.
//!
//! # Concurrency
//!
//! Every state field is an independent atomic cell: reads and writes are
//! individually safe from any thread without locking, but a multi-field
//! read (pose x then y) can tear if a sensor update lands between the two
//! loads. [`RobotHal::snapshot`] is the explicit consistent read for
//! callers that need one; the per-field getters stay lock-free for hot
//! paths.
//!
//! The pump thread is the sole pose/yaw writer during normal operation
//! and is signalled and joined on drop, so no update is applied after the
//! instance is gone.
//!
//! # Fault simulation
//!
//! Three injectable faults exercise recovery behavior: `motor_timeout`
//! blocks every command and forces `FAULT` status, `packet_drop` loses
//! commands with probability 0.5 per call, and `sensor_freeze` discards
//! inbound updates so state stops advancing. The drop draw comes from a
//! per-instance RNG that can be seeded for deterministic tests.

pub mod status;
pub mod transport;

pub use status::{FaultKind, RobotStatus};
pub use transport::{LinkTransport, MotionTransport, SimTransport, TransportHarness};

use crate::messages::{CmdVel, LaserScan, Pose2D};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

#[inline]
fn store_f64(cell: &AtomicU64, value: f64) {
    cell.store(value.to_bits(), Ordering::Release);
}

#[inline]
fn load_f64(cell: &AtomicU64) -> f64 {
    f64::from_bits(cell.load(Ordering::Acquire))
}

/// Consistent multi-field state read
///
/// Returned by [`RobotHal::snapshot`]; unlike the per-field getters, all
/// fields in one snapshot belong to the same instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateSnapshot {
    pub pose: (f64, f64),
    pub yaw: f64,
    pub target: (f64, f64),
    pub status: RobotStatus,
    pub fault: FaultKind,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            pose: (0.0, 0.0),
            yaw: 0.0,
            target: (0.0, 0.0),
            status: RobotStatus::Idle,
            fault: FaultKind::None,
        }
    }
}

/// Shared state cell between the HAL surface and its pump thread
struct HalState {
    pose_x: AtomicU64,
    pose_y: AtomicU64,
    yaw: AtomicU64,
    target_x: AtomicU64,
    target_y: AtomicU64,
    min_scan_range: AtomicU64,
    status: AtomicU8,
    fault: AtomicU8,
    connected: AtomicBool,
    snapshot: Mutex<StateSnapshot>,
}

impl HalState {
    fn new() -> Self {
        Self {
            pose_x: AtomicU64::new(0.0_f64.to_bits()),
            pose_y: AtomicU64::new(0.0_f64.to_bits()),
            yaw: AtomicU64::new(0.0_f64.to_bits()),
            target_x: AtomicU64::new(0.0_f64.to_bits()),
            target_y: AtomicU64::new(0.0_f64.to_bits()),
            min_scan_range: AtomicU64::new(f64::INFINITY.to_bits()),
            status: AtomicU8::new(RobotStatus::Idle.into_u8()),
            fault: AtomicU8::new(FaultKind::None.into_u8()),
            connected: AtomicBool::new(false),
            snapshot: Mutex::new(StateSnapshot::default()),
        }
    }

    fn fault(&self) -> FaultKind {
        FaultKind::from_u8(self.fault.load(Ordering::Acquire))
    }

    fn status(&self) -> RobotStatus {
        RobotStatus::from_u8(self.status.load(Ordering::Acquire))
    }

    fn set_fault(&self, fault: FaultKind) {
        self.fault.store(fault.into_u8(), Ordering::Release);
        self.snapshot.lock().fault = fault;
    }

    fn set_status(&self, status: RobotStatus) {
        self.status.store(status.into_u8(), Ordering::Release);
        self.snapshot.lock().status = status;
    }

    fn set_target(&self, x: f64, y: f64) {
        store_f64(&self.target_x, x);
        store_f64(&self.target_y, y);
        self.snapshot.lock().target = (x, y);
    }

    fn apply_pose(&self, pose: Pose2D) {
        store_f64(&self.pose_x, pose.x);
        store_f64(&self.pose_y, pose.y);
        store_f64(&self.yaw, pose.yaw);

        let mut snap = self.snapshot.lock();
        snap.pose = (pose.x, pose.y);
        snap.yaw = pose.yaw;
    }

    fn apply_scan(&self, scan: &LaserScan) {
        if let Some(range) = scan.min_valid_range() {
            store_f64(&self.min_scan_range, range as f64);
        }
    }
}

/// Hardware abstraction for a single robot
///
/// ```rust
/// use kestrel_library::hal::{RobotHal, SimTransport};
///
/// let hal = RobotHal::new("robot_1", SimTransport::new("robot_1"));
/// assert!(hal.publish_cmd_vel(0.5, 0.0)); // Move forward
/// let (x, y) = hal.pose();                // Lock-free state access
/// # assert_eq!((x, y), (0.0, 0.0));
/// ```
pub struct RobotHal {
    robot_id: String,
    state: Arc<HalState>,
    transport: Arc<dyn MotionTransport>,
    rng: Mutex<StdRng>,
    shutdown: Arc<AtomicBool>,
    pump: Option<JoinHandle<()>>,
}

impl RobotHal {
    /// Construct a HAL for one robot with an entropy-seeded fault RNG
    pub fn new<T: MotionTransport + 'static>(robot_id: &str, transport: T) -> Self {
        Self::build(robot_id, Arc::new(transport), StdRng::from_entropy())
    }

    /// Construct a HAL whose fault RNG is seeded for deterministic tests
    pub fn with_seed<T: MotionTransport + 'static>(robot_id: &str, transport: T, seed: u64) -> Self {
        Self::build(robot_id, Arc::new(transport), StdRng::seed_from_u64(seed))
    }

    fn build(robot_id: &str, transport: Arc<dyn MotionTransport>, rng: StdRng) -> Self {
        log::info!("[{}] initializing robot HAL", robot_id);

        let state = Arc::new(HalState::new());
        state
            .connected
            .store(transport.is_connected(), Ordering::Release);

        let shutdown = Arc::new(AtomicBool::new(false));
        let pump = {
            let state = Arc::clone(&state);
            let transport = Arc::clone(&transport);
            let shutdown = Arc::clone(&shutdown);
            let id = robot_id.to_string();
            thread::Builder::new()
                .name(format!("hal-pump-{}", robot_id))
                .spawn(move || pump_loop(&id, &state, transport.as_ref(), &shutdown))
                .expect("failed to spawn HAL pump thread")
        };

        Self {
            robot_id: robot_id.to_string(),
            state,
            transport,
            rng: Mutex::new(rng),
            shutdown,
            pump: Some(pump),
        }
    }

    // =========================================================================
    // Command Publishing
    // =========================================================================

    /// Publish a velocity command
    ///
    /// Returns false when the command was gated by fault policy
    /// (`motor_timeout` blocks every call, `packet_drop` loses half of
    /// them) or the transport refused it. False means *not transmitted*,
    /// not an error.
    pub fn publish_cmd_vel(&self, linear: f64, angular: f64) -> bool {
        match self.state.fault() {
            FaultKind::MotorTimeout => {
                log::warn!("[{}] motor timeout active, command blocked", self.robot_id);
                return false;
            }
            FaultKind::PacketDrop => {
                // One independent uniform draw per call
                if self.rng.lock().gen::<f64>() < 0.5 {
                    log::debug!("[{}] packet dropped", self.robot_id);
                    return false;
                }
            }
            _ => {}
        }

        match self.transport.publish(CmdVel::new(linear, angular)) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("[{}] transport publish failed: {}", self.robot_id, err);
                false
            }
        }
    }

    /// Stop the robot immediately
    pub fn stop(&self) {
        self.publish_cmd_vel(0.0, 0.0);
    }

    // =========================================================================
    // State Getters
    // =========================================================================

    /// Current position in meters
    ///
    /// The x and y loads are individually atomic but not joint: a sensor
    /// update between them can tear the pair. Use [`Self::snapshot`] when
    /// a consistent pair matters.
    pub fn pose(&self) -> (f64, f64) {
        (load_f64(&self.state.pose_x), load_f64(&self.state.pose_y))
    }

    /// Current heading in radians
    pub fn yaw(&self) -> f64 {
        load_f64(&self.state.yaw)
    }

    /// Current operational status
    pub fn status(&self) -> RobotStatus {
        self.state.status()
    }

    /// Current navigation target
    ///
    /// Same tearing caveat as [`Self::pose`].
    pub fn target(&self) -> (f64, f64) {
        (
            load_f64(&self.state.target_x),
            load_f64(&self.state.target_y),
        )
    }

    /// Closest valid reading from the most recent scan, if any arrived
    pub fn min_scan_range(&self) -> Option<f64> {
        let range = load_f64(&self.state.min_scan_range);
        range.is_finite().then_some(range)
    }

    /// Whether the transport is attached and live
    pub fn is_connected(&self) -> bool {
        self.state.connected.load(Ordering::Acquire)
    }

    /// Robot identifier
    pub fn robot_id(&self) -> &str {
        &self.robot_id
    }

    /// Current fault state
    pub fn fault_state(&self) -> FaultKind {
        self.state.fault()
    }

    /// Check if any fault is active
    pub fn has_fault(&self) -> bool {
        self.state.fault() != FaultKind::None
    }

    /// Consistent multi-field read
    ///
    /// All fields in the returned snapshot belong to the same instant;
    /// costs one lock, so prefer the per-field getters on hot paths.
    pub fn snapshot(&self) -> StateSnapshot {
        *self.state.snapshot.lock()
    }

    // =========================================================================
    // Status Management
    // =========================================================================

    /// Set operational status
    ///
    /// Navigation progress is owned by the orchestration layer; the HAL
    /// only forces status itself on motor-timeout injection and fault
    /// clearing.
    pub fn set_status(&self, status: RobotStatus) {
        self.state.set_status(status);
    }

    /// Set navigation target
    pub fn set_target(&self, x: f64, y: f64) {
        self.state.set_target(x, y);
    }

    // =========================================================================
    // Fault Injection
    // =========================================================================

    /// Inject a simulated hardware fault by name, case-insensitively
    ///
    /// `motor_timeout` also forces `FAULT` status; `packet_drop` and
    /// `sensor_freeze` leave status untouched. Unknown names are logged
    /// and ignored.
    pub fn inject_fault(&self, fault_name: &str) {
        match FaultKind::parse(fault_name) {
            Some(kind) => {
                log::info!("[{}] injecting fault: {}", self.robot_id, kind);
                self.state.set_fault(kind);
                if kind == FaultKind::MotorTimeout {
                    self.state.set_status(RobotStatus::Fault);
                }
            }
            None => {
                log::warn!("[{}] unknown fault type: {}", self.robot_id, fault_name);
            }
        }
    }

    /// Clear all active faults
    ///
    /// Status resets to `IDLE` only when it was exactly `FAULT`; clearing
    /// while navigating or stuck leaves status untouched.
    pub fn clear_faults(&self) {
        log::info!("[{}] clearing faults", self.robot_id);
        self.state.set_fault(FaultKind::None);

        if self.state.status() == RobotStatus::Fault {
            self.state.set_status(RobotStatus::Idle);
        }
    }
}

impl Drop for RobotHal {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Release);
        if let Some(pump) = self.pump.take() {
            let _ = pump.join();
        }
        log::info!("[{}] robot HAL shut down", self.robot_id);
    }
}

/// Background loop servicing the inbound transport
///
/// Sole pose/yaw writer during normal operation. Updates are discarded
/// wholesale while `sensor_freeze` is active, so state retains the last
/// known values.
fn pump_loop(robot_id: &str, state: &HalState, transport: &dyn MotionTransport, shutdown: &AtomicBool) {
    while !shutdown.load(Ordering::Acquire) {
        let mut idle = true;

        while let Some(pose) = transport.poll_pose() {
            idle = false;
            if state.fault() == FaultKind::SensorFreeze {
                continue;
            }
            state.apply_pose(pose);
        }

        while let Some(scan) = transport.poll_scan() {
            idle = false;
            if state.fault() == FaultKind::SensorFreeze {
                continue;
            }
            state.apply_scan(&scan);
        }

        state
            .connected
            .store(transport.is_connected(), Ordering::Release);

        if idle {
            thread::sleep(Duration::from_millis(1));
        }
    }

    log::debug!("[{}] sensor pump stopped", robot_id);
}
