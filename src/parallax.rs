//! Layered hero: settle into place, then follow the pointer horizontally.

use crate::animation::engine::Engine;
use crate::animation::tween::{TweenId, TweenSpec};
use crate::config::{EntryConfig, TrackingConfig};
use crate::markup::ids::{BG, CHARACTER, MAIN, SKY, TEXT};
use crate::stage::events::{DispatchCtx, EventKind, ListenerGuard, ListenerId, PointerEvent};
use crate::stage::model::{LayerId, Prop, Stage};

/// Per-target offsets derived from one pointer position.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ParallaxOffsets {
    /// `(x / width - 0.5) * amplitude`.
    pub base: f64,
    /// Percent of the text block's own width.
    pub text: f64,
    /// Pixels.
    pub sky: f64,
    /// Pixels.
    pub background: f64,
}

/// Offsets for a pointer at `client_x` in a viewport `viewport_width` wide.
///
/// Returns `None` for an empty viewport or non-finite input.
pub fn parallax_offsets(
    client_x: f64,
    viewport_width: f64,
    cfg: &TrackingConfig,
) -> Option<ParallaxOffsets> {
    if !client_x.is_finite() || !viewport_width.is_finite() || viewport_width <= 0.0 {
        return None;
    }
    let base = (client_x / viewport_width - 0.5) * cfg.amplitude;
    Some(ParallaxOffsets {
        base,
        text: base * cfg.text_factor,
        sky: base * cfg.sky_factor,
        background: base * cfg.background_factor,
    })
}

/// Smoothed retarget tweens for one set of offsets, in text, sky, background order.
pub fn tracking_tweens(offsets: ParallaxOffsets, cfg: &TrackingConfig) -> [TweenSpec; 3] {
    let smooth = |target: LayerId, prop: Prop, value: f64| {
        TweenSpec::to(target)
            .set(prop, value)
            .duration(cfg.smoothing_duration)
            .ease(cfg.smoothing_ease)
            .overwrite(cfg.overwrite)
    };
    [
        smooth(TEXT, Prop::XPercent, offsets.text),
        smooth(SKY, Prop::X, offsets.sky),
        smooth(BG, Prop::X, offsets.background),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum ScenePhase {
    /// Entry transitions are still running.
    Settling,
    /// Layers rest; only pointer tracking moves them.
    Tracking,
}

/// Mounted hero scene. Owns the pointer listener; dropping the scene detaches it.
#[derive(Debug)]
pub struct ParallaxScene {
    entry: Vec<TweenId>,
    listener: ListenerGuard,
}

impl ParallaxScene {
    /// Start the entry transitions and attach pointer tracking to the main container.
    ///
    /// Returns `None`, with nothing attached, when the main container is not on stage.
    pub fn enter(
        stage: &Stage,
        engine: &mut Engine,
        entry: &EntryConfig,
        tracking: &TrackingConfig,
    ) -> Option<Self> {
        if !stage.contains(MAIN) {
            tracing::warn!("main container missing; parallax scene not mounted");
            return None;
        }

        let settle = |target: LayerId, delay: f64| {
            TweenSpec::to(target)
                .set(Prop::Scale, 1.0)
                .set(Prop::Rotate, 0.0)
                .duration(entry.duration)
                .delay(delay)
                .ease(entry.ease)
        };
        let mut entry_ids = Vec::with_capacity(4);
        for (target, delay) in [
            (MAIN, entry.main_delay),
            (SKY, entry.layer_delay),
            (BG, entry.layer_delay),
            (CHARACTER, entry.layer_delay),
        ] {
            if !stage.contains(target) {
                continue;
            }
            match engine.schedule(settle(target, delay)) {
                Ok(id) => entry_ids.push(id),
                Err(err) => tracing::warn!(%target, %err, "entry transition skipped"),
            }
        }

        let cfg = tracking.clone();
        let listener = stage.events().add_listener(
            MAIN,
            EventKind::PointerMove,
            Box::new(move |ev: &PointerEvent, ctx: &mut DispatchCtx<'_>| {
                let Some(offsets) = parallax_offsets(ev.client_x, ctx.viewport.width, &cfg) else {
                    return;
                };
                for spec in tracking_tweens(offsets, &cfg) {
                    if let Err(err) = ctx.engine.schedule(spec) {
                        tracing::warn!(%err, "tracking tween rejected");
                    }
                }
            }),
        );
        tracing::info!(entry = entry_ids.len(), "parallax scene mounted");

        Some(Self {
            entry: entry_ids,
            listener,
        })
    }

    pub fn phase(&self, engine: &Engine) -> ScenePhase {
        if self.entry.iter().any(|id| engine.is_active(*id)) {
            ScenePhase::Settling
        } else {
            ScenePhase::Tracking
        }
    }

    pub fn entry_tweens(&self) -> &[TweenId] {
        &self.entry
    }

    pub fn listener_id(&self) -> ListenerId {
        self.listener.id()
    }

    /// Detach pointer tracking. Entry transitions already in flight are left to the engine.
    pub fn teardown(self) {
        tracing::info!(listener = ?self.listener.id(), "parallax scene torn down");
    }
}
