//! One-shot reveal: the mask word tilts, then blows up and fades, uncovering the page.

use crate::animation::engine::Engine;
use crate::animation::timeline::Timeline;
use crate::animation::tween::{Signal, TweenId, TweenSpec};
use crate::config::IntroConfig;
use crate::foundation::error::LandingResult;
use crate::markup::ids::{INTRO, MASK_GROUP};
use crate::stage::model::Prop;

/// Handles for the two intro stages.
#[derive(Debug)]
pub struct IntroSequencer {
    rotate: TweenId,
    reveal: TweenId,
    threshold: f64,
}

impl IntroSequencer {
    /// Build the two-stage timeline and hand it to `engine`.
    ///
    /// Once the reveal stage reaches `cfg.reveal_threshold`, its callback removes the intro
    /// graphic, emits [`Signal::ContentReady`], and kills the reveal stage. The callback acts
    /// at most once.
    pub fn start(engine: &mut Engine, cfg: &IntroConfig) -> LandingResult<Self> {
        let threshold = cfg.reveal_threshold;
        let mut handed_off = false;

        let rotate = TweenSpec::to(MASK_GROUP)
            .set(Prop::Rotate, cfg.rotate_deg)
            .duration(cfg.rotate_duration)
            .ease(cfg.rotate_ease);
        let reveal = TweenSpec::to(MASK_GROUP)
            .set(Prop::Scale, cfg.reveal_scale)
            .set(Prop::Opacity, cfg.reveal_opacity)
            .duration(cfg.reveal_duration)
            .delay(cfg.reveal_delay)
            .ease(cfg.reveal_ease)
            .on_update(move |ctx| {
                if handed_off || ctx.progress() < threshold {
                    return;
                }
                handed_off = true;
                let removed = ctx.stage_mut().remove(INTRO);
                tracing::info!(progress = ctx.progress(), removed, "intro handed off");
                ctx.emit(Signal::ContentReady);
                ctx.kill();
            });

        let ids = engine.add_timeline(Timeline::new().to(rotate).to(reveal))?;
        tracing::info!(rotate = ?ids[0], reveal = ?ids[1], "intro started");
        Ok(Self {
            rotate: ids[0],
            reveal: ids[1],
            threshold,
        })
    }

    pub fn rotate_tween(&self) -> TweenId {
        self.rotate
    }

    pub fn reveal_tween(&self) -> TweenId {
        self.reveal
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Progress of the reveal stage; `None` before it starts and after it stopped.
    pub fn reveal_progress(&self, engine: &Engine) -> Option<f64> {
        engine.progress(self.reveal)
    }

    /// True once both stages have stopped, naturally or by handoff.
    pub fn is_finished(&self, engine: &Engine) -> bool {
        !engine.is_active(self.rotate) && !engine.is_active(self.reveal)
    }
}
