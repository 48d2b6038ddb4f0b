use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::Standard,
    Ease::EaseIn,
    Ease::EaseOut,
    Ease::EaseInOut,
    Ease::CubicBezier {
        x1: 0.1,
        y1: 0.7,
        x2: 1.0,
        y2: 0.1,
    },
    Ease::Elastic,
    Ease::BackOut,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-6, "{ease} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease} at 1");
    }
}

#[test]
fn css_curves_are_monotonic_spot_check() {
    for ease in [
        Ease::Linear,
        Ease::Standard,
        Ease::EaseIn,
        Ease::EaseOut,
        Ease::EaseInOut,
    ] {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease}");
        assert!(b < c, "{ease}");
    }
}

#[test]
fn ease_out_leads_linear_and_ease_in_lags() {
    assert!(Ease::EaseOut.apply(0.3) > 0.3);
    assert!(Ease::EaseIn.apply(0.3) < 0.3);
}

#[test]
fn standard_matches_known_css_sample() {
    // cubic-bezier(0.25, 0.1, 0.25, 1) at x = 0.5 is ~0.8024.
    assert!((Ease::Standard.apply(0.5) - 0.8024).abs() < 1e-3);
}

#[test]
fn elastic_and_back_out_overshoot() {
    let peak = (1..100)
        .map(|i| Ease::Elastic.apply(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
    assert!(Ease::BackOut.apply(0.6) > 1.0);
    assert!(Ease::Elastic.can_overshoot());
    assert!(Ease::BackOut.can_overshoot());
    assert!(!Ease::Standard.can_overshoot());
}

#[test]
fn parses_css_names_and_aliases() {
    assert_eq!("ease".parse::<Ease>().unwrap(), Ease::Standard);
    assert_eq!(" Ease-In-Out ".parse::<Ease>().unwrap(), Ease::EaseInOut);
    assert_eq!("easeout".parse::<Ease>().unwrap(), Ease::EaseOut);
    assert_eq!("backout".parse::<Ease>().unwrap(), Ease::BackOut);
    assert_eq!(
        "cubic-bezier(0.68, -0.55, 0.265, 1.55)"
            .parse::<Ease>()
            .unwrap(),
        Ease::CubicBezier {
            x1: 0.68,
            y1: -0.55,
            x2: 0.265,
            y2: 1.55
        }
    );
}

#[test]
fn rejects_unknown_and_malformed_names() {
    assert!("".parse::<Ease>().is_err());
    assert!("wobbly".parse::<Ease>().is_err());
    assert!("cubic-bezier(0.1, 0.2, 0.3)".parse::<Ease>().is_err());
    assert!("cubic-bezier(1.5, 0, 0.5, 1)".parse::<Ease>().is_err());
    assert!("cubic-bezier(a, 0, 0.5, 1)".parse::<Ease>().is_err());
}

#[test]
fn serde_uses_css_names() {
    let json = serde_json::to_string(&Ease::EaseInOut).unwrap();
    assert_eq!(json, "\"ease-in-out\"");
    let back: Ease = serde_json::from_str("\"cubic-bezier(0, 0, 1, 1)\"").unwrap();
    assert_eq!(back.css_name(), "cubic-bezier(0, 0, 1, 1)");
    assert!(serde_json::from_str::<Ease>("\"nope\"").is_err());
}

#[test]
fn only_morph_curves_are_not_css() {
    let non_css: Vec<Ease> = ALL
        .into_iter()
        .filter(|e| !e.is_css_timing_function())
        .collect();
    assert_eq!(non_css, vec![Ease::Elastic, Ease::BackOut]);
}
