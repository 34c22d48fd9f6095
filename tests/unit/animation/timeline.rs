use super::*;
use crate::stage::model::{LayerId, Prop};

const MASK: LayerId = LayerId("mask");

#[test]
fn children_append_at_timeline_end() {
    let tl = Timeline::new()
        .to(TweenSpec::to(MASK).set(Prop::Rotate, 10.0).duration(1.5))
        .to(TweenSpec::to(MASK).set(Prop::Scale, 2.0).duration(1.0));
    assert_eq!(tl.offsets(), vec![0.0, 1.5]);
    assert!((tl.duration() - 2.5).abs() < 1e-12);
}

#[test]
fn negative_delay_overlaps_previous_child() {
    let tl = Timeline::new()
        .to(TweenSpec::to(MASK).duration(1.5))
        .to(TweenSpec::to(MASK).duration(1.0).delay(-0.5));
    assert_eq!(tl.offsets(), vec![0.0, 1.0]);
    assert!((tl.duration() - 2.0).abs() < 1e-12);
}

#[test]
fn children_before_zero_keep_their_offset() {
    // 1.5 - 1.8 puts the second child at -0.3.
    let tl = Timeline::new()
        .to(TweenSpec::to(MASK).duration(1.5))
        .to(TweenSpec::to(MASK).duration(1.5).delay(-1.8));
    let offsets = tl.offsets();
    assert_eq!(offsets[0], 0.0);
    assert!((offsets[1] + 0.3).abs() < 1e-12);
    assert!((tl.duration() - 1.5).abs() < 1e-12);
}

#[test]
fn empty_timeline_has_zero_duration() {
    let tl = Timeline::new();
    assert!(tl.is_empty());
    assert_eq!(tl.duration(), 0.0);
}
