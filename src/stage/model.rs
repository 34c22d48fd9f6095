use std::collections::BTreeMap;

use crate::animation::engine::Engine;
use crate::foundation::core::{Affine, Rect, Vec2, Viewport};
use crate::foundation::error::{LandingError, LandingResult};
use crate::stage::events::{DispatchCtx, EventKind, EventRegistry, PointerEvent};

/// Stable element name, the equivalent of a class selector on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct LayerId(pub &'static str);

impl LayerId {
    /// Element name as written in the markup.
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Animatable layer property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Prop {
    /// Horizontal offset in pixels.
    X,
    /// Horizontal offset as a percentage of the layer's own width.
    XPercent,
    /// Uniform scale factor.
    Scale,
    /// Rotation in degrees, clockwise.
    Rotate,
    /// Opacity in `[0, 1]`.
    Opacity,
}

/// Current transform and opacity of a layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerProps {
    pub x: f64,
    pub x_percent: f64,
    pub scale: f64,
    pub rotate_deg: f64,
    pub opacity: f64,
}

impl Default for LayerProps {
    fn default() -> Self {
        Self {
            x: 0.0,
            x_percent: 0.0,
            scale: 1.0,
            rotate_deg: 0.0,
            opacity: 1.0,
        }
    }
}

impl LayerProps {
    /// Identity props with the given scale and rotation.
    pub fn scaled_rotated(scale: f64, rotate_deg: f64) -> Self {
        Self {
            scale,
            rotate_deg,
            ..Self::default()
        }
    }

    pub fn get(&self, prop: Prop) -> f64 {
        match prop {
            Prop::X => self.x,
            Prop::XPercent => self.x_percent,
            Prop::Scale => self.scale,
            Prop::Rotate => self.rotate_deg,
            Prop::Opacity => self.opacity,
        }
    }

    pub fn set(&mut self, prop: Prop, value: f64) {
        match prop {
            Prop::X => self.x = value,
            Prop::XPercent => self.x_percent = value,
            Prop::Scale => self.scale = value,
            Prop::Rotate => self.rotate_deg = value,
            Prop::Opacity => self.opacity = value.clamp(0.0, 1.0),
        }
    }

    /// Local transform for a layer occupying `frame`, pivoting about the frame center.
    pub fn transform(&self, frame: Rect) -> Affine {
        let pivot = frame.center().to_vec2();
        let dx = self.x + self.x_percent / 100.0 * frame.width();
        Affine::translate(Vec2::new(dx, 0.0))
            * Affine::translate(pivot)
            * Affine::rotate(self.rotate_deg.to_radians())
            * Affine::scale(self.scale)
            * Affine::translate(-pivot)
    }
}

/// Horizontal text alignment relative to a text layer's frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
}

/// One line of a text layer with its own horizontal indent (px).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextLine {
    pub text: String,
    pub indent: f64,
}

impl TextLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            indent: 0.0,
        }
    }

    pub fn indented(text: impl Into<String>, indent: f64) -> Self {
        Self {
            text: text.into(),
            indent,
        }
    }
}

/// What a layer draws.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum LayerKind {
    /// Pure container.
    Group,
    /// Solid color fill of the frame.
    Fill { color: String },
    /// Bitmap referenced by path, stretched to cover the frame.
    Image { href: String, alt: String },
    /// Bitmap shown only through the silhouette of the `mask` subtree.
    MaskedImage { href: String, mask: LayerId },
    /// Container whose children define a mask; never painted directly.
    Mask,
    /// Stacked text lines.
    Text {
        lines: Vec<TextLine>,
        font_size: f64,
        font_family: String,
        color: String,
        anchor: TextAnchor,
    },
    /// Filled call-to-action button.
    Button {
        label: String,
        fill: String,
        font_size: f64,
    },
}

/// A single element of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub id: LayerId,
    pub parent: Option<LayerId>,
    pub kind: LayerKind,
    /// Untransformed box in viewport coordinates.
    pub frame: Rect,
    pub props: LayerProps,
}

impl Layer {
    pub fn new(id: LayerId, kind: LayerKind, frame: Rect) -> Self {
        Self {
            id,
            parent: None,
            kind,
            frame,
            props: LayerProps::default(),
        }
    }

    pub fn child_of(mut self, parent: LayerId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_props(mut self, props: LayerProps) -> Self {
        self.props = props;
        self
    }
}

/// The live element tree of the view.
///
/// Layers are kept in document order: a layer always follows its parent, and siblings
/// paint in insertion order.
#[derive(Debug)]
pub struct Stage {
    viewport: Viewport,
    layers: BTreeMap<LayerId, Layer>,
    order: Vec<LayerId>,
    events: EventRegistry,
}

impl Stage {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: BTreeMap::new(),
            order: Vec::new(),
            events: EventRegistry::default(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Append a layer. Its parent, if any, must already be present.
    pub fn insert(&mut self, layer: Layer) -> LandingResult<()> {
        if self.layers.contains_key(&layer.id) {
            return Err(LandingError::stage(format!(
                "layer '{}' is already present",
                layer.id
            )));
        }
        if let Some(parent) = layer.parent
            && !self.layers.contains_key(&parent)
        {
            return Err(LandingError::stage(format!(
                "layer '{}' references missing parent '{parent}'",
                layer.id
            )));
        }
        self.order.push(layer.id);
        self.layers.insert(layer.id, layer);
        Ok(())
    }

    /// Remove a layer and its whole subtree. Returns `false` if it was not present.
    pub fn remove(&mut self, id: LayerId) -> bool {
        if !self.layers.contains_key(&id) {
            return false;
        }
        let mut doomed = vec![id];
        // Children always follow their parent in `order`, so one forward pass collects them.
        for &candidate in &self.order {
            if let Some(parent) = self.layers.get(&candidate).and_then(|l| l.parent)
                && doomed.contains(&parent)
                && !doomed.contains(&candidate)
            {
                doomed.push(candidate);
            }
        }
        self.order.retain(|l| !doomed.contains(l));
        for l in &doomed {
            self.layers.remove(l);
        }
        tracing::debug!(layer = %id, removed = doomed.len(), "removed layer subtree");
        true
    }

    pub fn contains(&self, id: LayerId) -> bool {
        self.layers.contains_key(&id)
    }

    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(&id)
    }

    pub fn get_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.get_mut(&id)
    }

    pub fn props(&self, id: LayerId) -> Option<LayerProps> {
        self.layers.get(&id).map(|l| l.props)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// All layers in document order.
    pub fn layers(&self) -> impl Iterator<Item = &Layer> + '_ {
        self.order.iter().filter_map(|id| self.layers.get(id))
    }

    /// Direct children of `parent` in document order; `None` yields the roots.
    pub fn children(&self, parent: Option<LayerId>) -> impl Iterator<Item = &Layer> + '_ {
        self.layers().filter(move |l| l.parent == parent)
    }

    /// `id` followed by its ancestors up to the root. Empty if `id` is absent.
    pub fn path_to_root(&self, id: LayerId) -> Vec<LayerId> {
        let mut path = Vec::new();
        let mut cur = self.layers.get(&id);
        while let Some(layer) = cur {
            path.push(layer.id);
            cur = layer.parent.and_then(|p| self.layers.get(&p));
        }
        path
    }

    pub fn events(&self) -> &EventRegistry {
        &self.events
    }

    /// Deliver a pointer-move at `target`, bubbling to its ancestors.
    ///
    /// Returns the number of handlers invoked. Absent targets reach nobody.
    pub fn dispatch_pointer_move(
        &self,
        target: LayerId,
        event: &PointerEvent,
        engine: &mut Engine,
    ) -> usize {
        let path = self.path_to_root(target);
        let handlers = self.events.handlers_for(&path, EventKind::PointerMove);
        let mut ctx = DispatchCtx {
            viewport: self.viewport,
            engine,
        };
        for handler in &handlers {
            let mut handler = handler.borrow_mut();
            (*handler)(event, &mut ctx);
        }
        handlers.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/model.rs"]
mod tests;
