//! Cross-module fleet scenarios: HAL + transport pump, fault drills, and
//! the smoothing/checking pipeline an orchestration layer runs.

use kestrel_library::algorithms::collision::CollisionChecker;
use kestrel_library::algorithms::path_smoother::{
    path_length, resample_path, smooth_path,
};
use kestrel_library::hal::{LinkTransport, RobotHal, RobotStatus, SimTransport};
use kestrel_library::messages::{LaserScan, Pose2D};
use std::thread;
use std::time::{Duration, Instant};

fn wait_for<F: Fn() -> bool>(cond: F, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if cond() {
            return true;
        }
        thread::sleep(Duration::from_millis(2));
    }
    cond()
}

#[test]
fn motor_timeout_drill() {
    let (transport, harness) = LinkTransport::create("robot_1");
    let hal = RobotHal::with_seed("robot_1", transport, 42);

    hal.inject_fault("motor_timeout");
    assert_eq!(hal.status(), RobotStatus::Fault);

    for _ in 0..100 {
        assert!(!hal.publish_cmd_vel(0.5, 0.0));
    }
    assert!(
        harness.drain_cmds().is_empty(),
        "gated commands must not reach the transport"
    );

    hal.clear_faults();
    assert_eq!(hal.status(), RobotStatus::Idle);
    assert!(hal.publish_cmd_vel(0.5, 0.0));
    assert_eq!(harness.drain_cmds().len(), 1);
}

#[test]
fn packet_drop_rate_is_statistical_half() {
    let hal = RobotHal::with_seed("robot_1", SimTransport::new("robot_1"), 1234);
    hal.inject_fault("packet_drop");

    let total = 2000;
    let dropped = (0..total)
        .filter(|_| !hal.publish_cmd_vel(0.2, 0.0))
        .count();

    let rate = dropped as f64 / total as f64;
    assert!(
        (rate - 0.5).abs() <= 0.05,
        "empirical drop rate {} outside 0.5 +/- 0.05",
        rate
    );
}

#[test]
fn commands_flow_through_link_transport() {
    let (transport, harness) = LinkTransport::create("robot_1");
    let hal = RobotHal::with_seed("robot_1", transport, 7);

    assert!(hal.publish_cmd_vel(0.4, -0.2));
    let cmd = harness.try_recv_cmd().expect("command should arrive");
    assert_eq!(cmd.linear, 0.4);
    assert_eq!(cmd.angular, -0.2);

    hal.stop();
    let stop_cmd = harness.try_recv_cmd().expect("stop command should arrive");
    assert_eq!(stop_cmd.linear, 0.0);
    assert_eq!(stop_cmd.angular, 0.0);
}

#[test]
fn pump_ingests_pose_updates() {
    let (transport, harness) = LinkTransport::create("robot_1");
    let hal = RobotHal::with_seed("robot_1", transport, 8);

    harness.send_pose(Pose2D::new(1.5, 2.5, 0.4)).unwrap();
    assert!(
        wait_for(|| hal.pose() == (1.5, 2.5), Duration::from_secs(2)),
        "pose update should be applied by the pump"
    );
    assert_eq!(hal.yaw(), 0.4);

    let snap = hal.snapshot();
    assert_eq!(snap.pose, (1.5, 2.5));
    assert_eq!(snap.yaw, 0.4);
}

#[test]
fn sensor_freeze_suppresses_updates() {
    let (transport, harness) = LinkTransport::create("robot_1");
    let hal = RobotHal::with_seed("robot_1", transport, 9);

    harness.send_pose(Pose2D::new(1.0, 1.0, 0.0)).unwrap();
    assert!(wait_for(|| hal.pose() == (1.0, 1.0), Duration::from_secs(2)));

    hal.inject_fault("sensor_freeze");
    harness.send_pose(Pose2D::new(5.0, 5.0, 1.0)).unwrap();
    thread::sleep(Duration::from_millis(50));
    assert_eq!(hal.pose(), (1.0, 1.0), "frozen state must retain last known pose");
    assert_eq!(hal.yaw(), 0.0);

    // Commands still flow while sensors are frozen
    assert!(hal.publish_cmd_vel(0.1, 0.0));

    hal.clear_faults();
    harness.send_pose(Pose2D::new(6.0, 7.0, 0.2)).unwrap();
    assert!(
        wait_for(|| hal.pose() == (6.0, 7.0), Duration::from_secs(2)),
        "updates should resume after the fault clears"
    );
}

#[test]
fn pump_tracks_scan_minimum() {
    let (transport, harness) = LinkTransport::create("robot_1");
    let hal = RobotHal::with_seed("robot_1", transport, 10);

    assert_eq!(hal.min_scan_range(), None);

    harness
        .send_scan(LaserScan::new(-1.5, 0.1, 0.1, 10.0, vec![3.0, 0.5, 7.2]))
        .unwrap();
    assert!(
        wait_for(|| hal.min_scan_range() == Some(0.5), Duration::from_secs(2)),
        "scan minimum should be tracked by the pump"
    );
}

#[test]
fn route_pipeline_smooth_check_resample() {
    let mut checker = CollisionChecker::new();
    checker.set_grid_size(10, 10);
    checker.set_sticky_zone(5, 7, 5, 7);

    // Coarse route skirting the hazard
    let route = vec![(0.0, 0.0), (3.0, 1.0), (4.0, 4.0), (8.0, 8.0), (9.0, 9.0)];
    let smoothed = smooth_path(&route, 10);
    assert!(smoothed.len() > route.len());

    let flags = checker.check_waypoints(&smoothed);
    assert_eq!(flags.len(), smoothed.len());

    let first_sticky = checker.find_first_sticky_waypoint(&smoothed);
    assert_eq!(
        first_sticky,
        flags.iter().position(|&hazard| hazard),
        "first sticky index must agree with the batch classification"
    );

    // Resampling approximates the smoothed length within one step
    let spacing = 0.5;
    let resampled = resample_path(&smoothed, spacing);
    assert!((path_length(&smoothed) - path_length(&resampled)).abs() <= spacing);
    assert_eq!(resampled[0], smoothed[0]);
    assert_eq!(resampled.last(), smoothed.last());
}

#[test]
fn fleet_conflict_advisory() {
    use std::collections::HashMap;

    let checker = CollisionChecker::new();

    let mut positions = HashMap::new();
    positions.insert("robot_2".to_string(), (6.0, 6.0));
    positions.insert("robot_3".to_string(), (1.0, 1.0));

    let mut targets = HashMap::new();
    targets.insert("robot_3".to_string(), (2.0, 2.0));

    // Contested by robot_2's position
    assert!(checker.check_path_conflict("robot_1", 6.0, 6.0, &positions, &targets));
    // Contested by robot_3's declared target
    assert!(checker.check_path_conflict("robot_1", 2.0, 2.0, &positions, &targets));
    // Free cell
    assert!(!checker.check_path_conflict("robot_1", 9.0, 0.0, &positions, &targets));
    // Self never conflicts
    assert!(!checker.check_path_conflict("robot_2", 6.0, 6.0, &positions, &targets));
}
