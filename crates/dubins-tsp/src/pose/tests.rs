use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::rand::{draw_sites, ReplayToken, SiteCfg};
use super::*;
use crate::error::Error;
use crate::tour::Site;

#[test]
fn mod2pi_canonical_range() {
    assert_eq!(mod2pi(0.0), 0.0);
    assert!((mod2pi(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-12);
    assert!((mod2pi(5.0 * PI) - PI).abs() < 1e-12);
    assert_eq!(mod2pi(TAU), 0.0);
    // tiny negative inputs must not round up to 2π
    let r = mod2pi(-1e-18);
    assert!((0.0..TAU).contains(&r));
}

#[test]
fn wrap_pi_symmetric_range() {
    assert!((wrap_pi(3.0 * FRAC_PI_2) + FRAC_PI_2).abs() < 1e-12);
    assert!((wrap_pi(FRAC_PI_2) - FRAC_PI_2).abs() < 1e-12);
    let r = wrap_pi(PI);
    assert!((-PI..PI).contains(&r));
}

#[test]
fn constructor_normalizes_heading() {
    let c = Configuration::new(1.0, 2.0, -FRAC_PI_2);
    assert!((c.heading - 3.0 * FRAC_PI_2).abs() < 1e-12);
    assert!(c.same_pose(&Configuration::new(1.0, 2.0, 3.0 * FRAC_PI_2)));
    assert!(!c.same_pose(&Configuration::new(1.0, 2.0, FRAC_PI_2)));
    assert_eq!(Configuration::default(), Configuration::origin());
}

#[test]
fn validate_rejects_non_finite() {
    assert!(Configuration::new(0.0, 1.0, 2.0).validate().is_ok());
    let bad = Configuration::new(f64::NAN, 0.0, 0.0);
    assert!(matches!(bad.validate(), Err(Error::InvalidInput(_))));
    let bad_heading = Configuration {
        heading: f64::INFINITY,
        ..Configuration::origin()
    };
    assert!(bad_heading.validate().is_err());
}

#[test]
fn distance_and_direction() {
    let a = Configuration::new(0.0, 0.0, FRAC_PI_2);
    let b = Configuration::new(3.0, 4.0, 0.0);
    assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    let d = a.direction();
    assert!(d.x.abs() < 1e-12 && (d.y - 1.0).abs() < 1e-12);
}

#[test]
fn sampler_is_reproducible_and_bounded() {
    let cfg = SiteCfg {
        count: 50,
        half_extent: 5.0,
        random_heading: true,
    };
    let a = draw_sites(cfg, ReplayToken::new(7, 0));
    let b = draw_sites(cfg, ReplayToken::new(7, 0));
    let c = draw_sites(cfg, ReplayToken::new(7, 1));
    assert_eq!(a.len(), 50);
    assert_eq!(a, b);
    assert_ne!(a, c);
    for (k, n) in a.iter().enumerate() {
        assert_eq!(n.id(), k);
        let q = n.configuration();
        assert!(q.x().abs() <= 5.0 && q.y().abs() <= 5.0);
        assert!((0.0..TAU).contains(&q.heading));
    }
}

#[test]
fn sampler_caps_unbounded_extent() {
    let cfg = SiteCfg {
        count: 8,
        half_extent: f64::INFINITY,
        random_heading: false,
    };
    let sites = draw_sites(cfg, ReplayToken::new(3, 0));
    assert_eq!(sites.len(), 8);
    assert!(sites.iter().all(|n| n.configuration().is_finite()));
}

#[test]
fn distance_survives_extreme_offsets() {
    let o = Configuration::origin();
    assert_eq!(o.distance(&Configuration::new(1e-200, 0.0, 0.0)), 1e-200);
    assert!(o.distance(&Configuration::new(1e200, 1e200, 0.0)).is_finite());
}

#[test]
fn sampler_fixed_heading() {
    let cfg = SiteCfg {
        count: 10,
        random_heading: false,
        ..SiteCfg::default()
    };
    let sites = draw_sites(cfg, ReplayToken::new(1, 2));
    assert!(sites.iter().all(|n| n.configuration().heading == 0.0));
}
