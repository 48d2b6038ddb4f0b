use super::*;

fn line(x: f64) -> Shape {
    Shape::parse(&format!("M0,0 L{x},0")).unwrap()
}

fn end_x(els: &[PathEl]) -> f64 {
    match els[1] {
        PathEl::CurveTo(_, _, p) => p.x,
        other => panic!("expected cubic, got {other:?}"),
    }
}

fn phase(target: Shape, duration: u64, ease: Ease) -> MorphPhase {
    MorphPhase {
        item_index: 0,
        target,
        duration: Millis(duration),
        ease,
    }
}

#[test]
fn linear_track_samples_midpoint() {
    let from = line(0.0);
    let track = MorphTrack::start(
        from.elements(),
        phase(line(100.0), 200, Ease::Linear),
        Millis(1000),
    )
    .unwrap();

    assert_eq!(track.ends_at(), Millis(1200));
    assert!((end_x(&track.sample_elements(Millis(1000))) - 0.0).abs() < 1e-9);
    assert!((end_x(&track.sample_elements(Millis(1100))) - 50.0).abs() < 1e-9);
    assert!(!track.is_finished(Millis(1199)));
    assert!(track.is_finished(Millis(1200)));
    assert!((end_x(&track.sample_elements(Millis(5000))) - 100.0).abs() < 1e-9);
}

#[test]
fn elastic_track_overshoots_target() {
    let track = MorphTrack::start(
        line(0.0).elements(),
        phase(line(100.0), 1000, Ease::Elastic),
        Millis::ZERO,
    )
    .unwrap();
    assert!(end_x(&track.sample_elements(Millis(100))) > 100.0);
}

#[test]
fn zero_duration_jumps_to_target() {
    let track = MorphTrack::start(
        line(0.0).elements(),
        phase(line(10.0), 0, Ease::Linear),
        Millis(5),
    )
    .unwrap();
    assert_eq!(track.progress(Millis(5)), 1.0);
    assert!((end_x(&track.sample_elements(Millis(5))) - 10.0).abs() < 1e-9);
}

#[test]
fn incompatible_start_geometry_is_rejected() {
    let from = Shape::parse("M0,0 L1,0 L1,1 Z").unwrap();
    let err = MorphTrack::start(from.elements(), phase(line(5.0), 10, Ease::Linear), Millis(0))
        .unwrap_err();
    assert!(matches!(err, SlideFxError::Shape(_)));
}
