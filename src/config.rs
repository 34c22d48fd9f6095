//! Tunable timings, curves, and asset paths.
//!
//! Every field has a default matching the shipped page, so a config file only needs to name
//! the values it changes.

use std::path::Path;

use anyhow::Context as _;

use crate::animation::ease::Ease;
use crate::animation::tween::Overwrite;
use crate::foundation::core::{Fps, Viewport};
use crate::foundation::error::{LandingError, LandingResult};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub viewport: Viewport,
    pub fps: Fps,
    pub intro: IntroConfig,
    pub entry: EntryConfig,
    pub tracking: TrackingConfig,
    pub assets: AssetConfig,
}

/// Two-stage mask reveal.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    pub rotate_deg: f64,
    pub rotate_duration: f64,
    pub rotate_ease: Ease,
    pub reveal_scale: f64,
    pub reveal_opacity: f64,
    pub reveal_duration: f64,
    /// Offset from the end of the rotate stage; negative overlaps the two.
    pub reveal_delay: f64,
    pub reveal_ease: Ease,
    /// Reveal progress at which the intro hands off to the main content.
    pub reveal_threshold: f64,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            rotate_deg: 10.0,
            rotate_duration: 1.5,
            rotate_ease: Ease::InOutQuint,
            reveal_scale: 10.0,
            reveal_opacity: 0.0,
            reveal_duration: 1.5,
            reveal_delay: -1.8,
            reveal_ease: Ease::InOutExpo,
            reveal_threshold: 0.7,
        }
    }
}

/// Settling of the hero layers into their resting transform.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EntryConfig {
    pub duration: f64,
    pub ease: Ease,
    pub main_delay: f64,
    pub layer_delay: f64,
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            duration: 2.0,
            ease: Ease::InOutExpo,
            main_delay: -1.0,
            layer_delay: -0.8,
        }
    }
}

/// Pointer-driven horizontal offsets.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Full swing of the base offset across the viewport width.
    pub amplitude: f64,
    /// Text multiplier; applied as a percentage of the text block width.
    pub text_factor: f64,
    pub sky_factor: f64,
    pub background_factor: f64,
    pub smoothing_duration: f64,
    pub smoothing_ease: Ease,
    pub overwrite: Overwrite,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            amplitude: 40.0,
            text_factor: 0.4,
            sky_factor: 1.0,
            background_factor: 1.7,
            smoothing_duration: 0.5,
            smoothing_ease: Ease::OutQuad,
            overwrite: Overwrite::Auto,
        }
    }
}

/// Image references. Consumed as paths only; resolved against a resources dir at render time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub background: String,
    pub sky: String,
    pub character: String,
    pub console_icon: String,
    pub feature_image: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            background: "bg.png".to_owned(),
            sky: "sky.png".to_owned(),
            character: "girlbg.png".to_owned(),
            console_icon: "ps5.png".to_owned(),
            feature_image: "imag.png".to_owned(),
        }
    }
}

fn check_duration(name: &str, v: f64) -> LandingResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(LandingError::validation(format!(
            "{name} must be a finite, non-negative number of seconds (got {v})"
        )));
    }
    Ok(())
}

fn check_finite(name: &str, v: f64) -> LandingResult<()> {
    if !v.is_finite() {
        return Err(LandingError::validation(format!("{name} must be finite")));
    }
    Ok(())
}

impl LandingConfig {
    pub fn from_json_str(s: &str) -> LandingResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_path(path: &Path) -> LandingResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> LandingResult<()> {
        self.viewport.validate()?;
        self.fps.validate()?;

        let i = &self.intro;
        check_finite("intro.rotate_deg", i.rotate_deg)?;
        check_duration("intro.rotate_duration", i.rotate_duration)?;
        check_finite("intro.reveal_scale", i.reveal_scale)?;
        check_duration("intro.reveal_duration", i.reveal_duration)?;
        check_finite("intro.reveal_delay", i.reveal_delay)?;
        if !(0.0..=1.0).contains(&i.reveal_opacity) {
            return Err(LandingError::validation(
                "intro.reveal_opacity must be within [0, 1]",
            ));
        }
        if !(i.reveal_threshold > 0.0 && i.reveal_threshold <= 1.0) {
            return Err(LandingError::validation(
                "intro.reveal_threshold must be within (0, 1]",
            ));
        }

        let e = &self.entry;
        check_duration("entry.duration", e.duration)?;
        check_finite("entry.main_delay", e.main_delay)?;
        check_finite("entry.layer_delay", e.layer_delay)?;

        let t = &self.tracking;
        check_finite("tracking.amplitude", t.amplitude)?;
        check_finite("tracking.text_factor", t.text_factor)?;
        check_finite("tracking.sky_factor", t.sky_factor)?;
        check_finite("tracking.background_factor", t.background_factor)?;
        check_duration("tracking.smoothing_duration", t.smoothing_duration)?;
        Ok(())
    }
}
