use crate::foundation::error::{LandingError, LandingResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Absolute 0-based frame index in playback time.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> LandingResult<Self> {
        let fps = Self { num, den };
        fps.validate()?;
        Ok(fps)
    }

    /// Reject zero numerators and denominators.
    pub fn validate(self) -> LandingResult<()> {
        if self.den == 0 {
            return Err(LandingError::validation("Fps den must be > 0"));
        }
        if self.num == 0 {
            return Err(LandingError::validation("Fps num must be > 0"));
        }
        Ok(())
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Convert seconds to frame count using ceil semantics, so `secs` is always covered.
    pub fn secs_to_frames_ceil(self, secs: f64) -> u64 {
        (secs * self.as_f64() - 1e-9).ceil().max(0.0) as u64
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

/// Visible browser viewport, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels (`innerWidth`).
    pub width: f64,
    /// Height in pixels (`innerHeight`).
    pub height: f64,
}

impl Viewport {
    /// Create a viewport of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Reject empty or non-finite sizes.
    pub fn validate(self) -> LandingResult<()> {
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(LandingError::validation("viewport size must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(LandingError::validation("viewport size must be > 0"));
        }
        Ok(())
    }

    /// The full-screen rectangle `[0, width] x [0, height]`.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Integer pixel size for rasterization (at least 1x1).
    pub fn pixel_size(self) -> (u32, u32) {
        let w = self.width.ceil().max(1.0) as u32;
        let h = self.height.ceil().max(1.0) as u32;
        (w, h)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1440.0,
            height: 900.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
