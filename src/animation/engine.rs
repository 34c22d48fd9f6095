use crate::animation::timeline::Timeline;
use crate::animation::tween::{Overwrite, Signal, Tween, TweenId, TweenSpec};
use crate::foundation::error::LandingResult;
use crate::stage::model::{LayerId, Prop, Stage};

/// Deterministic tween scheduler driven by explicit frame steps.
///
/// Tweens render in scheduling order on every [`Engine::tick`]; when two live tweens write
/// the same property of the same layer, the later one wins.
#[derive(Default)]
pub struct Engine {
    now: f64,
    next_id: u64,
    tweens: Vec<Tween>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("now", &self.now)
            .field("active", &self.tweens.len())
            .finish()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine clock in seconds.
    pub fn now(&self) -> f64 {
        self.now
    }

    fn alloc_id(&mut self) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        id
    }

    fn push(&mut self, spec: TweenSpec, start: f64) -> TweenId {
        if spec.overwrite == Overwrite::Auto {
            for older in self.tweens.iter_mut().filter(|t| t.target == spec.target) {
                if older.release(&spec.props) {
                    older.done = true;
                }
            }
            self.tweens.retain(|t| !t.done);
        }
        let id = self.alloc_id();
        tracing::debug!(
            tween = id.0,
            target = %spec.target,
            start,
            duration = spec.duration,
            "tween scheduled"
        );
        self.tweens.push(Tween::new(id, spec, start));
        id
    }

    /// Schedule a standalone tween starting `spec.delay` seconds from now.
    pub fn schedule(&mut self, spec: TweenSpec) -> LandingResult<TweenId> {
        spec.validate()?;
        let start = self.now + spec.delay;
        Ok(self.push(spec, start))
    }

    /// Schedule every child of `timeline`, anchored at the current engine time.
    ///
    /// Returns child ids in insertion order.
    pub fn add_timeline(&mut self, timeline: Timeline) -> LandingResult<Vec<TweenId>> {
        let children = timeline.into_children();
        for (_, spec) in &children {
            spec.validate()?;
        }
        let base = self.now;
        Ok(children
            .into_iter()
            .map(|(offset, spec)| self.push(spec, base + offset))
            .collect())
    }

    /// Advance the clock by `dt` seconds and render all live tweens.
    ///
    /// Negative or non-finite steps are treated as zero. Returns signals raised by callbacks
    /// during this frame, in emission order.
    pub fn tick(&mut self, dt: f64, stage: &mut Stage) -> Vec<Signal> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.now += dt;
        let mut signals = Vec::new();
        for tween in &mut self.tweens {
            if !tween.done {
                tween.render(self.now, stage, &mut signals);
            }
        }
        self.tweens.retain(|t| !t.done);
        signals
    }

    /// Stop a tween where it is. Returns `false` if it already finished.
    pub fn kill(&mut self, id: TweenId) -> bool {
        let before = self.tweens.len();
        self.tweens.retain(|t| t.id != id);
        let killed = self.tweens.len() != before;
        if killed {
            tracing::debug!(tween = id.0, "tween killed");
        }
        killed
    }

    pub fn kill_all(&mut self) {
        if !self.tweens.is_empty() {
            tracing::debug!(count = self.tweens.len(), "killing all tweens");
        }
        self.tweens.clear();
    }

    pub fn is_active(&self, id: TweenId) -> bool {
        self.tweens.iter().any(|t| t.id == id)
    }

    /// Last rendered progress of a live tween; `None` once it finished or before it started.
    pub fn progress(&self, id: TweenId) -> Option<f64> {
        self.tweens
            .iter()
            .find(|t| t.id == id)
            .and_then(|t| t.progress)
    }

    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }

    /// Live tweens targeting `target`, optionally restricted to one property.
    pub fn tweens_on(&self, target: LayerId, prop: Option<Prop>) -> usize {
        self.tweens
            .iter()
            .filter(|t| t.target == target && prop.is_none_or(|p| t.animates(p)))
            .count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/engine.rs"]
mod tests;
