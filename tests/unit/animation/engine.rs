use super::*;
use crate::animation::ease::Ease;
use crate::foundation::core::{Rect, Viewport};
use crate::stage::model::{Layer, LayerKind, Prop};

const A: LayerId = LayerId("a");

fn stage() -> Stage {
    let mut stage = Stage::new(Viewport::new(100.0, 100.0));
    stage
        .insert(Layer::new(A, LayerKind::Group, Rect::new(0.0, 0.0, 10.0, 10.0)))
        .unwrap();
    stage
}

#[test]
fn scheduled_tween_renders_on_next_tick_and_retires() {
    let mut engine = Engine::new();
    let mut stage = stage();
    let id = engine
        .schedule(TweenSpec::to(A).set(Prop::X, 10.0).duration(1.0).ease(Ease::Linear))
        .unwrap();
    assert!(engine.is_active(id));
    assert_eq!(engine.progress(id), None);

    engine.tick(0.25, &mut stage);
    assert_eq!(engine.progress(id), Some(0.25));
    assert!((stage.props(A).unwrap().x - 2.5).abs() < 1e-12);

    engine.tick(1.0, &mut stage);
    assert!(!engine.is_active(id));
    assert_eq!(stage.props(A).unwrap().x, 10.0);
    assert_eq!(engine.active_count(), 0);
}

#[test]
fn negative_delay_starts_in_progress() {
    let mut engine = Engine::new();
    let mut stage = stage();
    let id = engine
        .schedule(
            TweenSpec::to(A)
                .set(Prop::X, 10.0)
                .duration(2.0)
                .delay(-1.0)
                .ease(Ease::Linear),
        )
        .unwrap();
    engine.tick(0.0, &mut stage);
    assert_eq!(engine.progress(id), Some(0.5));
    assert!((stage.props(A).unwrap().x - 5.0).abs() < 1e-12);
}

#[test]
fn later_tween_wins_without_overwrite() {
    let mut engine = Engine::new();
    let mut stage = stage();
    engine
        .schedule(TweenSpec::to(A).set(Prop::X, 100.0).duration(0.0))
        .unwrap();
    engine
        .schedule(TweenSpec::to(A).set(Prop::X, -100.0).duration(0.0))
        .unwrap();
    engine.tick(0.01, &mut stage);
    assert_eq!(stage.props(A).unwrap().x, -100.0);
}

#[test]
fn auto_overwrite_retires_older_tween_on_same_prop() {
    let mut engine = Engine::new();
    let mut stage = stage();
    let first = engine
        .schedule(TweenSpec::to(A).set(Prop::X, 100.0).overwrite(Overwrite::Auto))
        .unwrap();
    let keep = engine
        .schedule(TweenSpec::to(A).set(Prop::Scale, 3.0))
        .unwrap();
    let second = engine
        .schedule(TweenSpec::to(A).set(Prop::X, 50.0).overwrite(Overwrite::Auto))
        .unwrap();
    assert!(!engine.is_active(first));
    assert!(engine.is_active(keep));
    assert!(engine.is_active(second));
    assert_eq!(engine.tweens_on(A, Some(Prop::X)), 1);
    assert_eq!(engine.tweens_on(A, None), 2);
}

#[test]
fn timeline_children_are_anchored_at_now() {
    let mut engine = Engine::new();
    let mut stage = stage();
    engine.tick(5.0, &mut stage);
    let ids = engine
        .add_timeline(
            Timeline::new()
                .to(TweenSpec::to(A).set(Prop::X, 1.0).duration(1.0))
                .to(TweenSpec::to(A).set(Prop::Scale, 2.0).duration(1.0)),
        )
        .unwrap();
    assert_eq!(ids.len(), 2);
    engine.tick(0.5, &mut stage);
    assert!(engine.progress(ids[0]).is_some());
    assert_eq!(engine.progress(ids[1]), None);
    engine.tick(1.0, &mut stage);
    assert!(!engine.is_active(ids[0]));
    assert!(engine.progress(ids[1]).is_some());
}

#[test]
fn timeline_child_before_zero_starts_in_progress() {
    let mut engine = Engine::new();
    let mut stage = stage();
    let ids = engine
        .add_timeline(
            Timeline::new()
                .to(TweenSpec::to(A).set(Prop::Rotate, 10.0).duration(1.5))
                .to(
                    TweenSpec::to(A)
                        .set(Prop::Scale, 10.0)
                        .duration(1.5)
                        .delay(-1.8)
                        .ease(Ease::Linear),
                ),
        )
        .unwrap();
    engine.tick(0.1, &mut stage);
    let first = engine.progress(ids[0]).unwrap();
    let second = engine.progress(ids[1]).unwrap();
    assert!((first - 0.1 / 1.5).abs() < 1e-9, "{first}");
    assert!((second - 0.4 / 1.5).abs() < 1e-9, "{second}");
}

#[test]
fn invalid_timeline_child_schedules_nothing() {
    let mut engine = Engine::new();
    let result = engine.add_timeline(
        Timeline::new()
            .to(TweenSpec::to(A).duration(1.0))
            .to(TweenSpec::to(A).duration(f64::NAN)),
    );
    assert!(result.is_err());
    assert_eq!(engine.active_count(), 0);
}

#[test]
fn bogus_dt_does_not_move_the_clock() {
    let mut engine = Engine::new();
    let mut stage = stage();
    engine.tick(-1.0, &mut stage);
    engine.tick(f64::NAN, &mut stage);
    assert_eq!(engine.now(), 0.0);
}

#[test]
fn kill_and_kill_all() {
    let mut engine = Engine::new();
    let a = engine.schedule(TweenSpec::to(A).set(Prop::X, 1.0)).unwrap();
    let b = engine.schedule(TweenSpec::to(A).set(Prop::Scale, 1.0)).unwrap();
    assert!(engine.kill(a));
    assert!(!engine.kill(a));
    assert!(engine.is_active(b));
    engine.kill_all();
    assert_eq!(engine.active_count(), 0);
}
