use super::*;
use serde_json::json;

#[test]
fn defaults_match_widget_defaults() {
    let cfg = SliderConfig::new().unwrap();
    assert_eq!(cfg.speed, Millis(500));
    assert_eq!(cfg.easing, Ease::Standard);
    assert_eq!(cfg.paths.rect.d(), DEFAULT_RECT_PATH);
    assert_eq!(cfg.paths.curve.left.d(), DEFAULT_CURVE_LEFT_PATH);
    assert_eq!(cfg.paths.curve.right.d(), DEFAULT_CURVE_RIGHT_PATH);
}

#[test]
fn scalar_overrides_win_and_keep_default_paths() {
    let cfg = SliderConfig::from_json(json!({ "speed": 800, "easing": "ease-in-out" })).unwrap();
    assert_eq!(cfg.speed, Millis(800));
    assert_eq!(cfg.easing, Ease::EaseInOut);
    assert_eq!(cfg.paths.rect.d(), DEFAULT_RECT_PATH);
}

#[test]
fn paths_override_is_wholesale_not_deep() {
    let err = SliderConfig::from_json(json!({
        "paths": { "curve": { "left": DEFAULT_CURVE_LEFT_PATH, "right": DEFAULT_CURVE_RIGHT_PATH } }
    }))
    .unwrap_err();
    assert!(matches!(err, SlideFxError::Config(_)));
    assert!(err.to_string().contains("paths.rect"));
}

#[test]
fn partial_curve_override_is_rejected() {
    let err = SliderConfig::from_json(json!({
        "paths": { "rect": DEFAULT_RECT_PATH, "curve": { "left": DEFAULT_CURVE_LEFT_PATH } }
    }))
    .unwrap_err();
    assert!(err.to_string().contains("paths.curve.right"));
}

#[test]
fn full_paths_override_is_accepted() {
    let cfg = SliderConfig::from_json(json!({
        "paths": {
            "rect": "M0,0 L80,0 L80,60 L0,60 Z",
            "curve": {
                "left": "M0,0 L80,0 Q70,30 80,60 L0,60 Z",
                "right": "M0,0 L80,0 Q90,30 80,60 L0,60 Z"
            }
        }
    }))
    .unwrap();
    assert_eq!(cfg.speed, DEFAULT_SPEED);
    assert_eq!(cfg.paths.rect.d(), "M0,0 L80,0 L80,60 L0,60 Z");
}

#[test]
fn incompatible_curve_is_a_config_error() {
    let err = SliderConfig::from_json(json!({
        "paths": {
            "rect": "M0,0 L80,0 L80,60 L0,60 Z",
            "curve": { "left": "M0,0 L80,0 Z", "right": "M0,0 L80,0 L80,60 L0,60 Z" }
        }
    }))
    .unwrap_err();
    assert!(err.to_string().contains("paths.curve.left"));
}

#[test]
fn invalid_values_fail_construction() {
    assert!(SliderConfig::from_json(json!({ "speed": 0 })).is_err());
    assert!(SliderConfig::from_json(json!({ "speed": -5 })).is_err());
    assert!(SliderConfig::from_json(json!({ "easing": "wobbly" })).is_err());
    assert!(SliderConfig::from_json(json!({ "easing": "elastic" })).is_err());
    assert!(SliderConfig::from_json(json!("fast")).is_err());
    assert!(
        SliderConfig::from_json(json!({
            "paths": { "rect": "", "curve": { "left": "M0,0 L1,1", "right": "M0,0 L1,1" } }
        }))
        .is_err()
    );
}

#[test]
fn morph_only_curves_cannot_drive_the_slide() {
    for name in ["elastic", "back-out"] {
        let err = SliderConfig::from_json(json!({ "easing": name })).unwrap_err();
        assert!(matches!(err, SlideFxError::Config(_)));
        assert!(err.to_string().contains("not a CSS timing function"), "{err}");
    }
    let cfg = SliderConfig::from_json(json!({ "easing": "cubic-bezier(0.1, 0.7, 1, 0.1)" }));
    assert!(cfg.is_ok());
}

#[test]
fn unknown_keys_are_ignored() {
    let opts = SliderOptions::from_json(json!({ "autoplay": true, "speed": 300 })).unwrap();
    assert!(opts.unknown.contains_key("autoplay"));
    assert_eq!(opts.resolve().unwrap().speed, Millis(300));
}

#[test]
fn curve_for_picks_opposite_bow() {
    let cfg = SliderConfig::new().unwrap();
    assert_eq!(
        cfg.paths.curve_for(MorphDirection::Right).d(),
        DEFAULT_CURVE_LEFT_PATH
    );
    assert_eq!(
        cfg.paths.curve_for(MorphDirection::Left).d(),
        DEFAULT_CURVE_RIGHT_PATH
    );
}

#[test]
fn config_serializes_to_option_shape() {
    let cfg = SliderConfig::new().unwrap();
    let v = serde_json::to_value(&cfg).unwrap();
    assert_eq!(v["speed"], json!(500));
    assert_eq!(v["easing"], json!("ease"));
    assert_eq!(v["paths"]["curve"]["left"], json!(DEFAULT_CURVE_LEFT_PATH));

    let back = SliderConfig::from_json(v).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn typed_options_share_merge_rules() {
    let cfg = SliderOptions {
        speed: Some(Millis(250)),
        ..SliderOptions::default()
    }
    .resolve()
    .unwrap();
    assert_eq!(cfg.speed, Millis(250));

    let err = SliderOptions {
        paths: Some(PathOptions {
            rect: Some(DEFAULT_RECT_PATH.to_string()),
            curve: None,
        }),
        ..SliderOptions::default()
    }
    .resolve()
    .unwrap_err();
    assert!(err.to_string().contains("paths.curve"));
}
