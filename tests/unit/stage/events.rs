use std::cell::Cell;

use super::*;

const MAIN: LayerId = LayerId("main");

fn noop() -> PointerHandler {
    Box::new(|_ev: &PointerEvent, _ctx: &mut DispatchCtx<'_>| {})
}

#[test]
fn guard_drop_detaches() {
    let registry = EventRegistry::default();
    let guard = registry.add_listener(MAIN, EventKind::PointerMove, noop());
    let id = guard.id();
    assert!(registry.is_attached(id));
    assert_eq!(registry.listener_count(), 1);
    assert_eq!(registry.listeners_on(MAIN), 1);

    drop(guard);
    assert!(!registry.is_attached(id));
    assert_eq!(registry.listener_count(), 0);
}

#[test]
fn explicit_detach_only_removes_its_own_listener() {
    let registry = EventRegistry::default();
    let a = registry.add_listener(MAIN, EventKind::PointerMove, noop());
    let b = registry.add_listener(MAIN, EventKind::PointerMove, noop());
    let b_id = b.id();
    a.detach();
    assert_eq!(registry.listener_count(), 1);
    assert!(registry.is_attached(b_id));
}

#[test]
fn guard_outliving_registry_is_harmless() {
    let registry = EventRegistry::default();
    let guard = registry.add_listener(MAIN, EventKind::PointerMove, noop());
    drop(registry);
    drop(guard);
}

#[test]
fn handlers_for_follows_path_order() {
    let registry = EventRegistry::default();
    let hits = std::rc::Rc::new(Cell::new(0u32));
    let h = std::rc::Rc::clone(&hits);
    let _g = registry.add_listener(
        MAIN,
        EventKind::PointerMove,
        Box::new(move |_ev: &PointerEvent, _ctx: &mut DispatchCtx<'_>| {
            h.set(h.get() + 1)
        }),
    );
    assert_eq!(
        registry
            .handlers_for(&[LayerId("text"), MAIN], EventKind::PointerMove)
            .len(),
        1
    );
    assert!(registry
        .handlers_for(&[LayerId("text")], EventKind::PointerMove)
        .is_empty());
    assert_eq!(hits.get(), 0);
}
