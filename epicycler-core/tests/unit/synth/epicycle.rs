use super::*;

use std::f64::consts::FRAC_PI_2;

fn unit_component(frequency: i64, amplitude: f64, phase: f64) -> FrequencyComponent {
    FrequencyComponent {
        frequency,
        amplitude,
        phase,
    }
}

#[test]
fn empty_components_stay_at_origin() {
    let origin = Point::new(250.0, 250.0);
    for time in [0.0, 1.0, -3.5, 1e6] {
        let syn = advance(&[], time, origin);
        assert!(syn.chain.is_empty());
        assert_eq!(syn.tip, origin);
    }
}

#[test]
fn single_component_rotates_around_origin() {
    let c = [unit_component(1, 10.0, 0.0)];

    let at0 = advance(&c, 0.0, Point::ZERO);
    assert_eq!(at0.tip, Point::new(10.0, 0.0));
    assert_eq!(at0.chain, vec![Point::new(10.0, 0.0)]);

    let quarter = advance(&c, FRAC_PI_2, Point::ZERO);
    assert!(quarter.tip.x.abs() < 1e-9);
    assert!((quarter.tip.y - 10.0).abs() < 1e-9);
}

#[test]
fn chain_endpoints_accumulate_in_order() {
    let cs = [unit_component(1, 3.0, 0.0), unit_component(2, 4.0, 0.0)];
    let syn = advance(&cs, 0.0, Point::new(1.0, 1.0));
    assert_eq!(
        syn.chain,
        vec![Point::new(4.0, 1.0), Point::new(8.0, 1.0)]
    );
    assert_eq!(syn.tip, *syn.chain.last().unwrap());
}

#[test]
fn phase_offsets_the_start_angle() {
    let c = [unit_component(2, 5.0, FRAC_PI_2)];
    let syn = advance(&c, 0.0, Point::ZERO);
    assert!(syn.tip.x.abs() < 1e-9);
    assert!((syn.tip.y - 5.0).abs() < 1e-9);
}

#[test]
fn frequency_scales_angular_speed() {
    // At time t the component of frequency f sits at angle f*t.
    let t = 0.3;
    for f in [1, 2, 5] {
        let syn = advance(&[unit_component(f, 2.0, 0.0)], t, Point::ZERO);
        let angle = (f as f64) * t;
        assert!((syn.tip.x - 2.0 * angle.cos()).abs() < 1e-12);
        assert!((syn.tip.y - 2.0 * angle.sin()).abs() < 1e-12);
    }
}

#[test]
fn reconstruction_converges_to_the_input_path() {
    // Analyze a closed curve, then resynthesize it: sampling the chain at
    // time 2*pi*t/T must land near input point t when (almost) the whole
    // spectrum is used.
    let n = 48;
    let pts = crate::oval_points(Point::new(5.0, -3.0), 20.0, 8.0, n);
    let freqs: Vec<i64> = (0..n as i64).collect();
    let spectrum = crate::analyze(&pts, &freqs).unwrap();

    for (t, expected) in pts.iter().enumerate() {
        let time = std::f64::consts::TAU * (t as f64) / (n as f64);
        let syn = advance(&spectrum, time, Point::ZERO);
        assert!(syn.tip.distance(*expected) < 1e-6, "t={t}");
    }
}

#[test]
fn trace_accumulates_and_clears() {
    let mut trace = Trace::new();
    assert!(trace.is_empty());

    let c = [unit_component(1, 10.0, 0.0)];
    for frame in 0..5u64 {
        let syn = advance(&c, frame as f64 * 0.1, Point::ZERO);
        trace.push(syn.tip);
    }
    assert_eq!(trace.len(), 5);
    assert_eq!(trace.points()[0], Point::new(10.0, 0.0));

    trace.clear();
    assert!(trace.is_empty());
    assert!(trace.points().is_empty());
}
