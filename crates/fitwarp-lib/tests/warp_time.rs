use fitwarp_lib::warp::{compute_warp_time, compute_warp_time_series, LinearSamples, AU_METERS};
use proptest::prelude::*;

/// Direct evaluation of the cruise branch, used as an oracle.
fn cruise_branch(warp: f64, subwarp: f64, distance: f64) -> f64 {
    let k_accel = warp;
    let k_decel = (warp / 3.0).min(2.0);
    let peak = warp * AU_METERS;
    let cruise = (distance - AU_METERS - peak / k_decel) / peak;
    cruise + (peak / k_accel).ln() / k_accel + (peak / (subwarp / 2.0)).ln() / k_decel
}

/// Direct evaluation of the short-distance branch.
fn short_branch(warp: f64, subwarp: f64, distance: f64) -> f64 {
    let k_accel = warp;
    let k_decel = (warp / 3.0).min(2.0);
    let peak = distance * k_accel * k_decel / (k_accel + k_decel);
    (peak / k_accel).ln() / k_accel + (peak / (subwarp / 2.0)).ln() / k_decel
}

fn branch_boundary(warp: f64) -> f64 {
    let k_decel = (warp / 3.0).min(2.0);
    AU_METERS + warp * AU_METERS / k_decel
}

#[test]
fn zero_distance_takes_no_time() {
    assert_eq!(compute_warp_time(5.0, 4000.0, 0.0), 0.0);
    assert_eq!(compute_warp_time(0.75, 120.0, 0.0), 0.0);
}

#[test]
fn hundred_au_warp_matches_reference_formula() {
    let distance = 14_959_787_070_000.0;
    assert_eq!(distance, 100.0 * AU_METERS);

    let time = compute_warp_time(5.0, 4000.0, distance);
    let expected = cruise_branch(5.0, 4000.0, distance);

    assert!(time > 0.0);
    assert!(
        (time - expected).abs() <= 1e-9 * expected,
        "expected {expected}, got {time}"
    );
    assert!(
        (time - 36.19).abs() < 0.01,
        "expected approx 36.19 s, got {time}"
    );
}

#[test]
fn sub_kilometer_warps_go_negative() {
    assert!(compute_warp_time(5.0, 4000.0, 1.0) < 0.0);
    assert!(compute_warp_time(5.0, 4000.0, 150_000.0) > 0.0);
}

#[test]
fn short_warps_use_reduced_peak_speed() {
    let distance = 2.0 * AU_METERS;
    assert!(distance < branch_boundary(5.0));

    let time = compute_warp_time(5.0, 4000.0, distance);
    let expected = short_branch(5.0, 4000.0, distance);
    assert!(
        (time - expected).abs() <= 1e-9 * expected,
        "expected {expected}, got {time}"
    );
}

#[test]
fn branches_agree_at_boundary() {
    for warp in [0.75, 1.5, 3.0, 5.0, 8.0, 12.0] {
        let boundary = branch_boundary(warp);
        let below = compute_warp_time(warp, 1500.0, boundary * (1.0 - 1e-12));
        let at = compute_warp_time(warp, 1500.0, boundary);
        let short = short_branch(warp, 1500.0, boundary);
        let cruise = cruise_branch(warp, 1500.0, boundary);

        assert!(
            (short - cruise).abs() <= 1e-9 * cruise.abs(),
            "warp {warp}: short {short} vs cruise {cruise}"
        );
        assert!(
            (below - at).abs() <= 1e-9 * at.abs(),
            "warp {warp}: below {below} vs at {at}"
        );
    }
}

#[test]
fn series_over_linear_scan_matches_pointwise() {
    let samples = LinearSamples::new(0.0, 50.0 * AU_METERS, 25);
    let series = compute_warp_time_series(3.0, 250.0, samples.clone());

    assert_eq!(series.len(), 26);
    for ((distance, time), expected_distance) in series.iter().zip(samples) {
        assert_eq!(distance, expected_distance);
        assert_eq!(time, compute_warp_time(3.0, 250.0, distance));
    }
    assert_eq!(series.times[0], 0.0);
}

// Distances start at 150 km, the shortest real warp. Below about 1 km the
// formula returns negative times, so monotonicity against t(0) = 0 fails there.
proptest! {
    #[test]
    fn warp_time_is_non_decreasing_in_distance(
        warp in 0.5f64..12.0,
        subwarp in 50.0f64..10_000.0,
        a in 150_000.0f64..(200.0 * AU_METERS),
        b in 150_000.0f64..(200.0 * AU_METERS),
    ) {
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        let t_near = compute_warp_time(warp, subwarp, near);
        let t_far = compute_warp_time(warp, subwarp, far);
        prop_assert!(
            t_near <= t_far + 1e-12 * t_far.abs(),
            "t({near}) = {t_near} > t({far}) = {t_far}"
        );
    }

    #[test]
    fn warp_time_is_positive_beyond_minimum_warp_range(
        warp in 0.5f64..12.0,
        subwarp in 50.0f64..10_000.0,
        distance in 150_000.0f64..(200.0 * AU_METERS),
    ) {
        prop_assert!(compute_warp_time(warp, subwarp, distance) > 0.0);
    }
}
