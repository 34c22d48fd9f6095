use crate::animation::ease::Ease;
use crate::foundation::error::{LandingError, LandingResult};
use crate::stage::model::{LayerId, Prop, Stage};

/// Handle to a scheduled tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct TweenId(pub(crate) u64);

/// How a newly scheduled tween treats older tweens animating the same properties.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Overwrite {
    /// Leave older tweens alone; the newer one renders last and wins.
    #[default]
    None,
    /// Release the shared properties from older tweens on the same target.
    Auto,
}

/// Out-of-band notification raised by a progress callback and returned from a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Signal {
    /// The intro has handed off; main content may mount.
    ContentReady,
}

/// Target value for one property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropTo {
    pub prop: Prop,
    pub to: f64,
}

/// Progress callback invoked once per rendered frame.
pub type UpdateFn = Box<dyn FnMut(&mut UpdateCtx<'_>)>;

/// Everything a progress callback can see and do.
pub struct UpdateCtx<'a> {
    progress: f64,
    stage: &'a mut Stage,
    signals: &'a mut Vec<Signal>,
    killed: bool,
}

impl UpdateCtx<'_> {
    /// Linear completion of the tween in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn stage(&self) -> &Stage {
        &*self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut *self.stage
    }

    pub fn emit(&mut self, signal: Signal) {
        self.signals.push(signal);
    }

    /// Stop this tween after the current frame.
    pub fn kill(&mut self) {
        self.killed = true;
    }
}

/// Description of a property transition, built fluently:
///
/// ```
/// use landing_reveal::{Ease, LayerId, Prop, TweenSpec};
///
/// let spec = TweenSpec::to(LayerId("sky"))
///     .set(Prop::Scale, 1.0)
///     .set(Prop::Rotate, 0.0)
///     .duration(2.0)
///     .delay(-0.8)
///     .ease(Ease::InOutExpo);
/// assert_eq!(spec.props.len(), 2);
/// ```
pub struct TweenSpec {
    pub target: LayerId,
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
    pub props: Vec<PropTo>,
    pub overwrite: Overwrite,
    pub(crate) on_update: Option<UpdateFn>,
}

impl std::fmt::Debug for TweenSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenSpec")
            .field("target", &self.target)
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("ease", &self.ease)
            .field("props", &self.props)
            .field("overwrite", &self.overwrite)
            .field("on_update", &self.on_update.is_some())
            .finish()
    }
}

impl TweenSpec {
    /// Default duration for tweens that do not set one.
    pub const DEFAULT_DURATION: f64 = 0.5;

    /// Tween `target` from its current values, with engine defaults.
    pub fn to(target: LayerId) -> Self {
        Self {
            target,
            duration: Self::DEFAULT_DURATION,
            delay: 0.0,
            ease: Ease::default(),
            props: Vec::new(),
            overwrite: Overwrite::None,
            on_update: None,
        }
    }

    /// Animate `prop` to `value`. Setting the same prop twice keeps the last value.
    pub fn set(mut self, prop: Prop, value: f64) -> Self {
        match self.props.iter_mut().find(|p| p.prop == prop) {
            Some(existing) => existing.to = value,
            None => self.props.push(PropTo { prop, to: value }),
        }
        self
    }

    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = secs;
        self
    }

    /// Start offset in seconds. Negative values start the tween already in progress.
    pub fn delay(mut self, secs: f64) -> Self {
        self.delay = secs;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn on_update(mut self, f: impl FnMut(&mut UpdateCtx<'_>) + 'static) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    pub fn validate(&self) -> LandingResult<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(LandingError::animation(format!(
                "tween on '{}' has invalid duration {}",
                self.target, self.duration
            )));
        }
        if !self.delay.is_finite() {
            return Err(LandingError::animation(format!(
                "tween on '{}' has non-finite delay",
                self.target
            )));
        }
        if let Some(p) = self.props.iter().find(|p| !p.to.is_finite()) {
            return Err(LandingError::animation(format!(
                "tween on '{}' has non-finite target for {:?}",
                self.target, p.prop
            )));
        }
        Ok(())
    }
}

#[derive(Debug)]
struct PropTrack {
    prop: Prop,
    from: Option<f64>,
    to: f64,
}

/// A scheduled tween living inside the engine.
pub(crate) struct Tween {
    pub(crate) id: TweenId,
    pub(crate) target: LayerId,
    start: f64,
    duration: f64,
    ease: Ease,
    tracks: Vec<PropTrack>,
    on_update: Option<UpdateFn>,
    pub(crate) progress: Option<f64>,
    pub(crate) done: bool,
}

impl Tween {
    pub(crate) fn new(id: TweenId, spec: TweenSpec, start: f64) -> Self {
        Self {
            id,
            target: spec.target,
            start,
            duration: spec.duration,
            ease: spec.ease,
            tracks: spec
                .props
                .into_iter()
                .map(|p| PropTrack {
                    prop: p.prop,
                    from: None,
                    to: p.to,
                })
                .collect(),
            on_update: spec.on_update,
            progress: None,
            done: false,
        }
    }

    pub(crate) fn animates(&self, prop: Prop) -> bool {
        self.tracks.iter().any(|t| t.prop == prop)
    }

    /// Drop tracks for `props`. Returns `true` if that left the tween with nothing to animate.
    pub(crate) fn release(&mut self, props: &[PropTo]) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| !props.iter().any(|p| p.prop == t.prop));
        before > 0 && self.tracks.is_empty()
    }

    /// Render at absolute engine time `now`.
    pub(crate) fn render(&mut self, now: f64, stage: &mut Stage, signals: &mut Vec<Signal>) {
        let local = now - self.start;
        if local < 0.0 {
            return;
        }
        let p = if self.duration <= 0.0 {
            1.0
        } else {
            (local / self.duration).clamp(0.0, 1.0)
        };
        let eased = self.ease.apply(p);

        if let Some(layer) = stage.get_mut(self.target) {
            for track in &mut self.tracks {
                let from = *track.from.get_or_insert(layer.props.get(track.prop));
                let value = if p >= 1.0 {
                    track.to
                } else {
                    from + (track.to - from) * eased
                };
                layer.props.set(track.prop, value);
            }
        }
        self.progress = Some(p);

        if let Some(cb) = self.on_update.as_mut() {
            let mut ctx = UpdateCtx {
                progress: p,
                stage,
                signals,
                killed: false,
            };
            cb(&mut ctx);
            if ctx.killed {
                tracing::debug!(
                    tween = self.id.0,
                    target = %self.target,
                    progress = p,
                    "tween killed by its callback"
                );
                self.done = true;
                return;
            }
        }

        if p >= 1.0 {
            self.done = true;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
