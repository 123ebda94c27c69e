//! Path Smoothing Algorithms
//!
//! Stateless functions that convert sparse waypoint sequences into dense,
//! evenly spaced, curvature-aware trajectories.
//!
//! # Features
//!
//! - Catmull-Rom spline interpolation through waypoints
//! - Tension-based Bezier corner rounding
//! - Moving-average noise filtering
//! - Arc-length resampling at uniform spacing
//! - Turn-sharpness classification
//!
//! Malformed input degrades gracefully: sequences too short to smooth are
//! returned unchanged, never rejected.
//!
//! # Example
//!
//! ```rust
//! use kestrel_library::algorithms::path_smoother::{smooth_path, path_length};
//!
//! let route = vec![(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)];
//! let trajectory = smooth_path(&route, 10);
//!
//! assert!(trajectory.len() > route.len());
//! assert!(path_length(&trajectory) >= path_length(&route) - 1e-6);
//! ```

/// Smooth a path with Catmull-Rom spline interpolation
///
/// Fewer than 2 points are returned unchanged. Exactly 2 points produce a
/// linear interpolation of `points_per_segment + 1` evenly parametrized
/// points. With 3 or more points each consecutive pair is interpolated
/// using its neighbors as tangent guides, clamped at the boundaries, and
/// the exact final waypoint is appended once.
pub fn smooth_path(waypoints: &[(f64, f64)], points_per_segment: usize) -> Vec<(f64, f64)> {
    if waypoints.len() < 2 || points_per_segment == 0 {
        return waypoints.to_vec();
    }

    if waypoints.len() == 2 {
        // Linear interpolation for two points
        let (x0, y0) = waypoints[0];
        let (x1, y1) = waypoints[1];
        let mut result = Vec::with_capacity(points_per_segment + 1);

        for i in 0..=points_per_segment {
            let t = i as f64 / points_per_segment as f64;
            result.push((x0 + t * (x1 - x0), y0 + t * (y1 - y0)));
        }
        return result;
    }

    let mut result = Vec::with_capacity((waypoints.len() - 1) * points_per_segment + 1);

    for i in 0..waypoints.len() - 1 {
        // Four control points, clamped at the boundaries
        let p0 = if i == 0 { waypoints[0] } else { waypoints[i - 1] };
        let p1 = waypoints[i];
        let p2 = waypoints[i + 1];
        let p3 = if i == waypoints.len() - 2 {
            waypoints[i + 1]
        } else {
            waypoints[i + 2]
        };

        for j in 0..points_per_segment {
            let t = j as f64 / points_per_segment as f64;
            let t2 = t * t;
            let t3 = t2 * t;

            // Catmull-Rom basis functions
            let b0 = -0.5 * t3 + t2 - 0.5 * t;
            let b1 = 1.5 * t3 - 2.5 * t2 + 1.0;
            let b2 = -1.5 * t3 + 2.0 * t2 + 0.5 * t;
            let b3 = 0.5 * t3 - 0.5 * t2;

            result.push((
                b0 * p0.0 + b1 * p1.0 + b2 * p2.0 + b3 * p3.0,
                b0 * p0.1 + b1 * p1.1 + b2 * p2.1 + b3 * p3.1,
            ));
        }
    }

    // Add final point
    result.push(*waypoints.last().unwrap());

    result
}

/// Smooth corners with quadratic Bezier curves
///
/// For each interior waypoint a control point is derived by blending
/// toward the previous neighbor scaled by `tension`, and the approach
/// segment is rendered as a quadratic Bezier sampled at 5 sub-steps.
/// Exact-duplicate consecutive points are suppressed. First and last
/// input points are preserved exactly. Fewer than 3 points are returned
/// unchanged.
pub fn bezier_smooth(waypoints: &[(f64, f64)], tension: f64) -> Vec<(f64, f64)> {
    if waypoints.len() < 3 {
        return waypoints.to_vec();
    }

    let mut result = Vec::with_capacity(waypoints.len() * 5);
    result.push(waypoints[0]);

    for i in 1..waypoints.len() - 1 {
        let prev = waypoints[i - 1];
        let curr = waypoints[i];

        // Control point blended toward the previous neighbor
        let ctrl_x = curr.0 - tension * (curr.0 - prev.0);
        let ctrl_y = curr.1 - tension * (curr.1 - prev.1);

        for j in 1..=5 {
            let t = j as f64 / 5.0;
            let u = 1.0 - t;
            let x = u * u * prev.0 + 2.0 * u * t * ctrl_x + t * t * curr.0;
            let y = u * u * prev.1 + 2.0 * u * t * ctrl_y + t * t * curr.1;

            // Suppress exact duplicates
            if result.last() != Some(&(x, y)) {
                result.push((x, y));
            }
        }
    }

    result.push(*waypoints.last().unwrap());

    result
}

/// Smooth a path with a boundary-truncated moving average
///
/// Each output point is the mean of the input points within
/// `±(window_size / 2)` indices that exist; the window is truncated at
/// the ends, not wrapped or padded. First and last output points are
/// forced back to the original endpoints. Fewer than 3 points or a
/// window below 2 are returned unchanged.
pub fn moving_average_smooth(waypoints: &[(f64, f64)], window_size: usize) -> Vec<(f64, f64)> {
    if waypoints.len() < 3 || window_size < 2 {
        return waypoints.to_vec();
    }

    let half_window = (window_size / 2) as isize;
    let len = waypoints.len() as isize;
    let mut result = Vec::with_capacity(waypoints.len());

    for i in 0..len {
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut count = 0;

        for j in -half_window..=half_window {
            let idx = i + j;
            if idx >= 0 && idx < len {
                let (x, y) = waypoints[idx as usize];
                sum_x += x;
                sum_y += y;
                count += 1;
            }
        }

        result.push((sum_x / count as f64, sum_y / count as f64));
    }

    // Preserve start and end points exactly
    result[0] = waypoints[0];
    let last = result.len() - 1;
    result[last] = *waypoints.last().unwrap();

    result
}

/// Total length of a polyline in meters
///
/// Sum of consecutive Euclidean segment lengths; 0 for fewer than 2
/// points.
pub fn path_length(waypoints: &[(f64, f64)]) -> f64 {
    waypoints
        .windows(2)
        .map(|pair| {
            let dx = pair[1].0 - pair[0].0;
            let dy = pair[1].1 - pair[0].1;
            (dx * dx + dy * dy).sqrt()
        })
        .sum()
}

/// Resample a polyline at uniform arc-length spacing
///
/// Walks the path by accumulated arc length, emitting a linearly
/// interpolated point every `target_spacing` meters. Always starts with
/// the first input point; the final input point is appended unless it was
/// already emitted exactly. Fewer than 2 points are returned unchanged.
pub fn resample_path(waypoints: &[(f64, f64)], target_spacing: f64) -> Vec<(f64, f64)> {
    if waypoints.len() < 2 || target_spacing <= 0.0 {
        return waypoints.to_vec();
    }

    let total_length = path_length(waypoints);
    let num_points = ((total_length / target_spacing) as usize + 1).max(2);

    let mut result = Vec::with_capacity(num_points);
    result.push(waypoints[0]);

    let mut accumulated = 0.0;
    let mut next_target = target_spacing;

    for pair in waypoints.windows(2) {
        let dx = pair[1].0 - pair[0].0;
        let dy = pair[1].1 - pair[0].1;
        let segment_length = (dx * dx + dy * dy).sqrt();

        if segment_length > 0.0 {
            while accumulated + segment_length >= next_target && result.len() < num_points - 1 {
                let t = (next_target - accumulated) / segment_length;
                result.push((pair[0].0 + t * dx, pair[0].1 + t * dy));
                next_target += target_spacing;
            }
        }

        accumulated += segment_length;
    }

    // Ensure final point is included
    if *result.last().unwrap() != *waypoints.last().unwrap() {
        result.push(*waypoints.last().unwrap());
    }

    result
}

/// Classify the turn at `p2` as sharp or not
///
/// Computes the angle between the `p1 -> p2` and `p2 -> p3` unit
/// direction vectors; returns true iff it exceeds `threshold` radians.
/// Segments shorter than 1e-9 make the turn degenerate and never sharp.
pub fn is_sharp_turn(p1: (f64, f64), p2: (f64, f64), p3: (f64, f64), threshold: f64) -> bool {
    let v1x = p2.0 - p1.0;
    let v1y = p2.1 - p1.1;
    let v2x = p3.0 - p2.0;
    let v2y = p3.1 - p2.1;

    let len1 = (v1x * v1x + v1y * v1y).sqrt();
    let len2 = (v2x * v2x + v2y * v2y).sqrt();

    if len1 < 1e-9 || len2 < 1e-9 {
        return false; // Degenerate case
    }

    let dot = (v1x * v2x + v1y * v2y) / (len1 * len2);
    let angle = dot.clamp(-1.0, 1.0).acos();

    angle > threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_smooth_path_too_short() {
        assert!(smooth_path(&[], 10).is_empty());
        assert_eq!(smooth_path(&[(1.0, 2.0)], 10), vec![(1.0, 2.0)]);
    }

    #[test]
    fn test_smooth_path_two_points_linear() {
        let smoothed = smooth_path(&[(0.0, 0.0), (10.0, 0.0)], 10);

        assert_eq!(smoothed.len(), 11);
        assert_eq!(smoothed[0], (0.0, 0.0));
        assert_eq!(*smoothed.last().unwrap(), (10.0, 0.0));

        for (i, &(x, y)) in smoothed.iter().enumerate() {
            assert_relative_eq!(x, i as f64, epsilon = 1e-12);
            assert_relative_eq!(y, 0.0);
        }
    }

    #[test]
    fn test_smooth_path_spline_endpoints() {
        let route = [(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)];
        let smoothed = smooth_path(&route, 10);

        assert_eq!(smoothed.len(), 21);
        assert_eq!(smoothed[0], (0.0, 0.0));
        assert_eq!(*smoothed.last().unwrap(), (10.0, 0.0));
    }

    #[test]
    fn test_smooth_path_passes_through_waypoints() {
        // At t = 0 of each segment the spline evaluates to the segment start
        let route = [(0.0, 0.0), (2.0, 3.0), (5.0, 1.0), (8.0, 4.0)];
        let smoothed = smooth_path(&route, 5);

        for (k, wp) in route.iter().enumerate().take(route.len() - 1) {
            let (x, y) = smoothed[k * 5];
            assert_relative_eq!(x, wp.0, epsilon = 1e-9);
            assert_relative_eq!(y, wp.1, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_bezier_too_short() {
        let two = vec![(0.0, 0.0), (1.0, 1.0)];
        assert_eq!(bezier_smooth(&two, 0.5), two);
    }

    #[test]
    fn test_bezier_preserves_endpoints() {
        let route = [(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)];
        let smoothed = bezier_smooth(&route, 0.5);

        assert!(smoothed.len() > route.len());
        assert_eq!(smoothed[0], (0.0, 0.0));
        assert_eq!(*smoothed.last().unwrap(), (10.0, 0.0));
    }

    #[test]
    fn test_bezier_no_consecutive_duplicates() {
        let route = [(0.0, 0.0), (5.0, 5.0), (5.0, 5.0), (10.0, 0.0)];
        let smoothed = bezier_smooth(&route, 0.5);

        for pair in smoothed.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_moving_average_too_short() {
        let short = vec![(0.0, 0.0), (1.0, 1.0)];
        assert_eq!(moving_average_smooth(&short, 3), short);

        let route = vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)];
        assert_eq!(moving_average_smooth(&route, 1), route);
    }

    #[test]
    fn test_moving_average_preserves_endpoints() {
        let route = [(0.0, 0.0), (1.0, 4.0), (2.0, -4.0), (3.0, 4.0), (4.0, 0.0)];

        for window in 2..=5 {
            let smoothed = moving_average_smooth(&route, window);
            assert_eq!(smoothed.len(), route.len());
            assert_eq!(smoothed[0], route[0]);
            assert_eq!(*smoothed.last().unwrap(), *route.last().unwrap());
        }
    }

    #[test]
    fn test_moving_average_flattens_noise() {
        let route = [(0.0, 0.0), (1.0, 2.0), (2.0, 0.0), (3.0, 2.0), (4.0, 0.0)];
        let smoothed = moving_average_smooth(&route, 3);

        // Interior points are pulled toward the local mean
        assert_relative_eq!(smoothed[2].1, 4.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_path_length() {
        assert_eq!(path_length(&[]), 0.0);
        assert_eq!(path_length(&[(1.0, 1.0)]), 0.0);
        assert_relative_eq!(path_length(&[(0.0, 0.0), (3.0, 4.0)]), 5.0);
        assert_relative_eq!(path_length(&[(0.0, 0.0), (3.0, 4.0), (3.0, 10.0)]), 11.0);
    }

    #[test]
    fn test_resample_vertical_line() {
        let resampled = resample_path(&[(0.0, 0.0), (0.0, 10.0)], 2.0);

        assert_eq!(resampled.len(), 6);
        for (i, &(x, y)) in resampled.iter().enumerate() {
            assert_relative_eq!(x, 0.0);
            assert_relative_eq!(y, 2.0 * i as f64, epsilon = 1e-12);
        }
        assert_eq!(resampled[0], (0.0, 0.0));
        assert_eq!(*resampled.last().unwrap(), (0.0, 10.0));
    }

    #[test]
    fn test_resample_multi_segment() {
        let route = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)];
        let resampled = resample_path(&route, 1.0);

        assert_eq!(resampled[0], (0.0, 0.0));
        assert_eq!(*resampled.last().unwrap(), (4.0, 4.0));

        // Resampled length matches the original within one step
        let original = path_length(&route);
        let resampled_len = path_length(&resampled);
        assert!((original - resampled_len).abs() <= 1.0);
    }

    #[test]
    fn test_resample_skips_duplicate_points() {
        let route = [(0.0, 0.0), (0.0, 0.0), (0.0, 4.0)];
        let resampled = resample_path(&route, 2.0);

        assert!(resampled.iter().all(|p| p.0 == 0.0));
        assert_eq!(*resampled.last().unwrap(), (0.0, 4.0));
    }

    #[test]
    fn test_sharp_turn_right_angle() {
        assert!(is_sharp_turn((0.0, 0.0), (1.0, 0.0), (1.0, 1.0), FRAC_PI_4));
    }

    #[test]
    fn test_sharp_turn_straight_line() {
        assert!(!is_sharp_turn((0.0, 0.0), (1.0, 0.0), (2.0, 0.0), FRAC_PI_4));
    }

    #[test]
    fn test_sharp_turn_degenerate() {
        // Zero-length leading segment is never sharp
        assert!(!is_sharp_turn((1.0, 1.0), (1.0, 1.0), (2.0, 2.0), 0.1));
    }
}
