use super::*;
use crate::animation::tween::TweenSpec;
use crate::foundation::core::Point;
use crate::stage::events::EventKind;

const ROOT: LayerId = LayerId("root");
const CHILD: LayerId = LayerId("child");
const LEAF: LayerId = LayerId("leaf");
const OTHER: LayerId = LayerId("other");

fn rect() -> Rect {
    Rect::new(0.0, 0.0, 100.0, 50.0)
}

fn tree() -> Stage {
    let mut stage = Stage::new(Viewport::new(200.0, 100.0));
    stage.insert(Layer::new(ROOT, LayerKind::Group, rect())).unwrap();
    stage
        .insert(Layer::new(CHILD, LayerKind::Group, rect()).child_of(ROOT))
        .unwrap();
    stage
        .insert(Layer::new(LEAF, LayerKind::Group, rect()).child_of(CHILD))
        .unwrap();
    stage.insert(Layer::new(OTHER, LayerKind::Group, rect())).unwrap();
    stage
}

#[test]
fn insert_rejects_duplicates_and_orphans() {
    let mut stage = tree();
    assert!(stage.insert(Layer::new(ROOT, LayerKind::Group, rect())).is_err());
    let orphan = Layer::new(LayerId("orphan"), LayerKind::Group, rect()).child_of(LayerId("nope"));
    assert!(stage.insert(orphan).is_err());
    assert_eq!(stage.len(), 4);
}

#[test]
fn remove_takes_the_subtree_and_is_idempotent() {
    let mut stage = tree();
    assert!(stage.remove(CHILD));
    assert!(!stage.contains(CHILD));
    assert!(!stage.contains(LEAF));
    assert!(stage.contains(ROOT));
    assert!(stage.contains(OTHER));
    assert!(!stage.remove(CHILD));
    assert_eq!(stage.len(), 2);
}

#[test]
fn document_order_and_children() {
    let stage = tree();
    let ids: Vec<_> = stage.layers().map(|l| l.id).collect();
    assert_eq!(ids, vec![ROOT, CHILD, LEAF, OTHER]);
    let roots: Vec<_> = stage.children(None).map(|l| l.id).collect();
    assert_eq!(roots, vec![ROOT, OTHER]);
    assert_eq!(stage.path_to_root(LEAF), vec![LEAF, CHILD, ROOT]);
    assert!(stage.path_to_root(LayerId("missing")).is_empty());
}

#[test]
fn opacity_is_clamped_on_write() {
    let mut props = LayerProps::default();
    props.set(Prop::Opacity, 1.5);
    assert_eq!(props.opacity, 1.0);
    props.set(Prop::Opacity, -0.5);
    assert_eq!(props.opacity, 0.0);
}

#[test]
fn transform_pivots_about_frame_center() {
    let frame = Rect::new(0.0, 0.0, 100.0, 50.0);
    let props = LayerProps::scaled_rotated(2.0, 0.0);
    let center = props.transform(frame) * Point::new(50.0, 25.0);
    assert!((center.x - 50.0).abs() < 1e-9 && (center.y - 25.0).abs() < 1e-9);
    let corner = props.transform(frame) * Point::new(0.0, 0.0);
    assert!((corner.x + 50.0).abs() < 1e-9 && (corner.y + 25.0).abs() < 1e-9);
}

#[test]
fn transform_applies_pixel_and_percent_offsets() {
    let frame = Rect::new(0.0, 0.0, 100.0, 50.0);
    let props = LayerProps {
        x: 5.0,
        x_percent: 10.0,
        ..LayerProps::default()
    };
    let p = props.transform(frame) * Point::new(0.0, 0.0);
    assert!((p.x - 15.0).abs() < 1e-9);
    assert!(p.y.abs() < 1e-9);
}

#[test]
fn pointer_moves_bubble_to_ancestors_only() {
    let stage = tree();
    let mut engine = Engine::new();
    let _on_root = stage.events().add_listener(
        ROOT,
        EventKind::PointerMove,
        Box::new(|_ev: &PointerEvent, ctx: &mut DispatchCtx<'_>| {
            ctx.engine
                .schedule(TweenSpec::to(ROOT).set(Prop::X, 1.0))
                .unwrap();
        }),
    );
    let _on_other = stage.events().add_listener(
        OTHER,
        EventKind::PointerMove,
        Box::new(|_ev: &PointerEvent, _ctx: &mut DispatchCtx<'_>| panic!("sibling subtree must not receive the event")),
    );

    let ev = PointerEvent::new(10.0, 10.0);
    assert_eq!(stage.dispatch_pointer_move(LEAF, &ev, &mut engine), 1);
    assert_eq!(engine.active_count(), 1);
    assert_eq!(stage.dispatch_pointer_move(LayerId("missing"), &ev, &mut engine), 0);
}
