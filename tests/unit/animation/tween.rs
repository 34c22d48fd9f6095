use super::*;
use crate::foundation::core::{Rect, Viewport};
use crate::stage::model::{Layer, LayerKind, LayerProps};

const BOX: LayerId = LayerId("box");

fn stage_with_box() -> Stage {
    let mut stage = Stage::new(Viewport::new(100.0, 100.0));
    stage
        .insert(
            Layer::new(BOX, LayerKind::Group, Rect::new(0.0, 0.0, 10.0, 10.0))
                .with_props(LayerProps::scaled_rotated(2.0, 10.0)),
        )
        .unwrap();
    stage
}

#[test]
fn builder_defaults_match_engine_defaults() {
    let spec = TweenSpec::to(BOX);
    assert_eq!(spec.duration, TweenSpec::DEFAULT_DURATION);
    assert_eq!(spec.delay, 0.0);
    assert_eq!(spec.ease, Ease::OutQuad);
    assert_eq!(spec.overwrite, Overwrite::None);
    assert!(spec.props.is_empty());
}

#[test]
fn setting_a_prop_twice_keeps_last_value() {
    let spec = TweenSpec::to(BOX).set(Prop::X, 1.0).set(Prop::X, 5.0);
    assert_eq!(spec.props, vec![PropTo { prop: Prop::X, to: 5.0 }]);
}

#[test]
fn validation_rejects_bad_numbers() {
    assert!(TweenSpec::to(BOX).duration(-1.0).validate().is_err());
    assert!(TweenSpec::to(BOX).duration(f64::NAN).validate().is_err());
    assert!(TweenSpec::to(BOX).delay(f64::INFINITY).validate().is_err());
    assert!(TweenSpec::to(BOX).set(Prop::X, f64::NAN).validate().is_err());
    assert!(TweenSpec::to(BOX).delay(-3.0).duration(0.0).validate().is_ok());
}

#[test]
fn render_interpolates_from_captured_start() {
    let mut stage = stage_with_box();
    let spec = TweenSpec::to(BOX)
        .set(Prop::Scale, 1.0)
        .duration(1.0)
        .ease(Ease::Linear);
    let mut tween = Tween::new(TweenId(0), spec, 0.0);
    let mut signals = Vec::new();

    tween.render(0.5, &mut stage, &mut signals);
    assert!((stage.props(BOX).unwrap().scale - 1.5).abs() < 1e-12);
    assert_eq!(tween.progress, Some(0.5));
    assert!(!tween.done);

    tween.render(1.0, &mut stage, &mut signals);
    assert_eq!(stage.props(BOX).unwrap().scale, 1.0);
    assert!(tween.done);
    // Rotation was never named, so it stays put.
    assert_eq!(stage.props(BOX).unwrap().rotate_deg, 10.0);
}

#[test]
fn render_before_start_is_a_no_op() {
    let mut stage = stage_with_box();
    let spec = TweenSpec::to(BOX).set(Prop::Scale, 1.0).duration(1.0);
    let mut tween = Tween::new(TweenId(0), spec, 2.0);
    tween.render(1.0, &mut stage, &mut Vec::new());
    assert_eq!(tween.progress, None);
    assert_eq!(stage.props(BOX).unwrap().scale, 2.0);
}

#[test]
fn callback_runs_against_missing_target_and_can_kill() {
    let mut stage = stage_with_box();
    let spec = TweenSpec::to(LayerId("ghost"))
        .set(Prop::Opacity, 0.0)
        .duration(1.0)
        .on_update(|ctx| {
            if ctx.progress() > 0.25 {
                ctx.stage_mut().remove(BOX);
                ctx.emit(Signal::ContentReady);
                ctx.kill();
            }
        });
    let mut tween = Tween::new(TweenId(3), spec, 0.0);
    let mut signals = Vec::new();

    tween.render(0.2, &mut stage, &mut signals);
    assert!(signals.is_empty());
    assert!(stage.contains(BOX));

    tween.render(0.3, &mut stage, &mut signals);
    assert_eq!(signals, vec![Signal::ContentReady]);
    assert!(!stage.contains(BOX));
    assert!(tween.done);
}

#[test]
fn zero_duration_completes_on_first_render() {
    let mut stage = stage_with_box();
    let spec = TweenSpec::to(BOX).set(Prop::X, 12.0).duration(0.0);
    let mut tween = Tween::new(TweenId(0), spec, 0.0);
    tween.render(0.0, &mut stage, &mut Vec::new());
    assert_eq!(stage.props(BOX).unwrap().x, 12.0);
    assert!(tween.done);
}

#[test]
fn release_reports_when_nothing_is_left() {
    let spec = TweenSpec::to(BOX).set(Prop::X, 1.0).set(Prop::Scale, 1.0);
    let mut tween = Tween::new(TweenId(0), spec, 0.0);
    assert!(!tween.release(&[PropTo { prop: Prop::X, to: 0.0 }]));
    assert!(tween.animates(Prop::Scale));
    assert!(tween.release(&[PropTo { prop: Prop::Scale, to: 0.0 }]));
}
