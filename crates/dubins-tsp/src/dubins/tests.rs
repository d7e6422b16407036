use std::f64::consts::{FRAC_PI_2, PI};

use proptest::prelude::*;

use super::words::Frame;
use super::*;
use crate::pose::wrap_pi;

fn pose(x: f64, y: f64, h: f64) -> Configuration {
    Configuration::new(x, y, h)
}

fn assert_reaches(path: &DubinsPath, target: &Configuration, tol: f64) {
    let end = path.endpoint();
    assert!(
        (end.position - target.position).norm() < tol,
        "{} ends at {:?}, wanted {:?}",
        path.word(),
        end,
        target
    );
    assert!(wrap_pi(end.heading - target.heading).abs() < tol);
}

#[test]
fn straight_ahead_is_euclidean() {
    let p = shortest_path(&pose(0.0, 0.0, 0.0), &pose(10.0, 0.0, 0.0), 1.0);
    assert_eq!(p.word(), PathWord::Lsl);
    assert!((p.length() - 10.0).abs() < 1e-12);
    let seg = p.segments();
    assert!(seg[0].abs() < 1e-12 && seg[2].abs() < 1e-12);
}

#[test]
fn identical_poses_cost_zero() {
    let a = pose(3.0, -2.0, 1.0);
    assert_eq!(cost(&a, &a, 1.0), 0.0);
    assert_eq!(cost(&a, &pose(3.0, -2.0, 1.0 + 2.0 * PI), 2.5), 0.0);
    assert_eq!(word_length(&a, &a, 1.0, PathWord::Rlr), Some(0.0));
}

#[test]
fn turn_in_place_is_positive() {
    let c = cost(&pose(0.0, 0.0, 0.0), &pose(0.0, 0.0, FRAC_PI_2), 1.0);
    assert!((c - 6.408513138347651).abs() < 1e-9);
    let p = shortest_path(&pose(0.0, 0.0, 0.0), &pose(0.0, 0.0, FRAC_PI_2), 1.0);
    assert_eq!(p.word(), PathWord::Lrl);
    assert_reaches(&p, &pose(0.0, 0.0, FRAC_PI_2), 1e-9);
}

#[test]
fn quarter_turn_is_single_arc() {
    let to = pose(1.0, 1.0, FRAC_PI_2);
    let p = shortest_path(&pose(0.0, 0.0, 0.0), &to, 1.0);
    assert!((p.length() - FRAC_PI_2).abs() < 1e-6);
    assert_reaches(&p, &to, 1e-6);
}

#[test]
fn known_lengths() {
    let o = pose(0.0, 0.0, 0.0);
    let cases = [
        (pose(0.0, 10.0, 0.0), 1.0, 11.392919856288785),
        (pose(-10.0, 0.0, 0.0), 1.0, 16.283185307179586),
        (pose(0.0, 5.0, 0.0), 0.5, 5.696459928144392),
        (pose(0.0, 5.0, 0.0), 1.0, 6.837115943543516),
        (pose(0.0, 5.0, 0.0), 2.0, 17.566370614359172),
        (pose(10.0, 0.0, 0.0), 1.0, 10.0),
    ];
    for (to, r, want) in cases {
        let got = cost(&o, &to, r);
        assert!((got - want).abs() < 1e-9, "to {:?} r {}: {} != {}", to, r, got, want);
    }
}

#[test]
fn cost_is_directional() {
    let a = pose(0.0, 0.0, 0.0);
    let b = pose(4.0, 0.0, FRAC_PI_2);
    let ab = cost(&a, &b, 1.0);
    let ba = cost(&b, &a, 1.0);
    assert!((ab - 4.746223366789356).abs() < 1e-9);
    assert!((ba - 7.874666640553069).abs() < 1e-9);
    assert!(ab != ba);
}

#[test]
fn word_length_matches_shortest() {
    let a = pose(0.0, 0.0, 0.3);
    let b = pose(6.0, -2.0, 2.0);
    let best = shortest_path(&a, &b, 1.5);
    let via_word = word_length(&a, &b, 1.5, best.word()).unwrap();
    assert!((via_word - best.length()).abs() < 1e-12);
    for w in PathWord::ALL {
        if let Some(len) = word_length(&a, &b, 1.5, w) {
            assert!(len >= best.length());
        }
    }
}

#[test]
fn ccc_words_vanish_when_far_apart() {
    let a = pose(0.0, 0.0, 0.0);
    let b = pose(100.0, 0.0, 1.0);
    assert!(word_length(&a, &b, 1.0, PathWord::Rlr).is_none());
    assert!(word_length(&a, &b, 1.0, PathWord::Lrl).is_none());
    assert!(word_length(&a, &b, 1.0, PathWord::Lsl).is_some());
}

#[test]
fn sample_walks_the_path() {
    let a = pose(0.0, 0.0, 0.0);
    let b = pose(0.0, 10.0, 0.0);
    let p = shortest_path(&a, &b, 1.0);
    assert!(p.sample(0.0).same_pose(&p.start()));
    let mid = p.sample(p.length() / 2.0);
    assert!(mid.distance(&a) > 0.0 && mid.distance(&b) > 0.0);
    // clamped past the end
    let past = p.sample(p.length() + 5.0);
    assert!((past.position - p.endpoint().position).norm() < 1e-12);
}

#[test]
fn word_metadata() {
    assert_eq!(PathWord::Lsr.to_string(), "LSR");
    assert!(PathWord::Rsl.is_csc());
    assert!(!PathWord::Lrl.is_csc());
    assert_eq!(
        PathWord::Rlr.segments(),
        [SegmentKind::Right, SegmentKind::Left, SegmentKind::Right]
    );
}

#[test]
fn tiny_offsets_keep_positive_cost() {
    let a = pose(0.0, 0.0, 0.0);
    let b = pose(1e-200, 0.0, 0.0);
    assert!(!a.same_pose(&b));
    let c = cost(&a, &b, 1.0);
    assert!(c > 0.0, "cost {c}");
    assert!(c >= a.distance(&b));
    assert_eq!(word_length(&a, &b, 1.0, PathWord::Lsr), None);

    let turned = pose(0.0, 0.0, 1e-200);
    assert!(!a.same_pose(&turned));
    assert!(cost(&a, &turned, 1.0) > 0.0);
}

#[test]
fn huge_offsets_stay_above_chord() {
    let a = pose(0.0, 0.0, 0.0);
    let b = pose(1e200, 1e200, 1.0);
    let c = cost(&a, &b, 1.0);
    assert!(c.is_finite());
    assert!(c >= a.distance(&b), "cost {c} below chord {}", a.distance(&b));

    // the offset itself overflows; no word may come out shorter than that
    let far = pose(-1e308, -1e308, 2.0);
    let near = pose(1e308, 1e308, 0.5);
    assert_eq!(cost(&far, &near, 1.0), f64::INFINITY);
}

fn arb_pose() -> impl Strategy<Value = Configuration> {
    (-20.0..20.0f64, -20.0..20.0f64, -7.0..7.0f64).prop_map(|(x, y, h)| pose(x, y, h))
}

proptest! {
    #[test]
    fn cost_bounded_below_by_euclidean(a in arb_pose(), b in arb_pose(), r in 0.1..5.0f64) {
        let c = cost(&a, &b, r);
        prop_assert!(c >= 0.0);
        prop_assert!(c + 1e-9 >= a.distance(&b));
        prop_assert!(c.is_finite());
    }

    #[test]
    fn zero_only_for_identical_poses(a in arb_pose(), b in arb_pose(), r in 0.1..5.0f64) {
        prop_assume!(!a.same_pose(&b));
        prop_assert!(cost(&a, &b, r) > 0.0);
        prop_assert_eq!(cost(&a, &a, r), 0.0);
    }

    #[test]
    fn positive_across_scales(exp in -300.0..300.0f64, angle in 0.0..7.0f64, h in -7.0..7.0f64) {
        let a = pose(0.0, 0.0, 0.0);
        let s = 10f64.powf(exp);
        let b = pose(s * angle.cos(), s * angle.sin(), h);
        prop_assume!(!a.same_pose(&b));
        let c = cost(&a, &b, 1.0);
        prop_assert!(c > 0.0 && c.is_finite(), "cost {}", c);
    }

    #[test]
    fn every_feasible_word_reaches_target(a in arb_pose(), b in arb_pose(), r in 0.1..5.0f64) {
        prop_assume!(!a.same_pose(&b));
        let frame = Frame::new(&a, &b, r);
        for w in PathWord::ALL {
            if let Some(params) = frame.solve(w) {
                prop_assert!(params.iter().all(|&p| p >= 0.0));
                let path = DubinsPath::new(a, w, params, r);
                let end = path.endpoint();
                // near-tangent words are clamped, so allow a little slack
                prop_assert!((end.position - b.position).norm() < 1e-4, "{} misses", w);
                prop_assert!(wrap_pi(end.heading - b.heading).abs() < 1e-4, "{} heading", w);
            }
        }
    }

    #[test]
    fn cost_non_decreasing_in_radius(a in arb_pose(), b in arb_pose(), r in 0.1..5.0f64, k in 1.0..3.0f64) {
        let small = cost(&a, &b, r);
        let large = cost(&a, &b, r * k);
        prop_assert!(large + 1e-7 >= small, "r={} -> {}, r={} -> {}", r, small, r * k, large);
    }

    #[test]
    fn nearby_positions_still_connect(a in arb_pose(), dx in -1.0..1.0f64, dy in -1.0..1.0f64, h in -7.0..7.0f64) {
        let b = pose(a.x() + dx, a.y() + dy, h);
        let p = shortest_path(&a, &b, 1.0);
        prop_assert!(p.length().is_finite());
        assert_reaches(&p, &b, 1e-4);
    }
}
