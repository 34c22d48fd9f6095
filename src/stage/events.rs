//! Pointer listener registry.
//!
//! Listeners are owned through a [`ListenerGuard`]: the registration lives exactly as long as
//! the guard, so a component that holds its guard in a field is detached when it is dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::animation::engine::Engine;
use crate::foundation::core::Viewport;
use crate::stage::model::LayerId;

/// Pointer position in viewport coordinates (`clientX`, `clientY`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerEvent {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerMove,
}

/// What a handler may touch while an event is delivered.
pub struct DispatchCtx<'a> {
    pub viewport: Viewport,
    pub engine: &'a mut Engine,
}

pub type PointerHandler = Box<dyn FnMut(&PointerEvent, &mut DispatchCtx<'_>)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

struct Entry {
    id: ListenerId,
    target: LayerId,
    kind: EventKind,
    handler: Rc<RefCell<PointerHandler>>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

#[derive(Default)]
pub struct EventRegistry {
    inner: Rc<RefCell<Registry>>,
}

impl std::fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRegistry")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl EventRegistry {
    /// Register `handler` for `kind` events reaching `target`.
    pub fn add_listener(
        &self,
        target: LayerId,
        kind: EventKind,
        handler: PointerHandler,
    ) -> ListenerGuard {
        let mut reg = self.inner.borrow_mut();
        let id = ListenerId(reg.next_id);
        reg.next_id += 1;
        reg.entries.push(Entry {
            id,
            target,
            kind,
            handler: Rc::new(RefCell::new(handler)),
        });
        tracing::debug!(listener = id.0, %target, ?kind, "listener attached");
        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_attached(&self, id: ListenerId) -> bool {
        self.inner.borrow().entries.iter().any(|e| e.id == id)
    }

    /// Number of listeners registered directly on `target`.
    pub fn listeners_on(&self, target: LayerId) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|e| e.target == target)
            .count()
    }

    /// Handlers along a bubbling `path` (innermost first), in registration order per layer.
    pub(crate) fn handlers_for(
        &self,
        path: &[LayerId],
        kind: EventKind,
    ) -> Vec<Rc<RefCell<PointerHandler>>> {
        let reg = self.inner.borrow();
        path.iter()
            .flat_map(|layer| {
                reg.entries
                    .iter()
                    .filter(move |e| e.kind == kind && e.target == *layer)
                    .map(|e| Rc::clone(&e.handler))
            })
            .collect()
    }
}

/// Scoped registration returned by [`EventRegistry::add_listener`].
#[must_use = "dropping the guard detaches the listener immediately"]
#[derive(Debug)]
pub struct ListenerGuard {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Detach now. Equivalent to dropping the guard.
    pub fn detach(self) {}
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut reg = registry.borrow_mut();
        let before = reg.entries.len();
        reg.entries.retain(|e| e.id != self.id);
        if reg.entries.len() != before {
            tracing::debug!(listener = self.id.0, "listener detached");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/events.rs"]
mod tests;
