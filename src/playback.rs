//! Frame-stepped driver for headless runs.

use std::str::FromStr;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{LandingError, LandingResult};
use crate::stage::events::PointerEvent;
use crate::view::LandingView;

/// A pointer move delivered once playback reaches `at` seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptedMove {
    pub at: f64,
    pub event: PointerEvent,
}

impl FromStr for ScriptedMove {
    type Err = LandingError;

    /// Parse `T:X` or `T:X:Y` (seconds, pixels).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let num = |v: &str| -> LandingResult<f64> {
            let n: f64 = v
                .parse()
                .map_err(|_| LandingError::validation(format!("invalid number '{v}' in '{s}'")))?;
            if !n.is_finite() {
                return Err(LandingError::validation(format!("non-finite value in '{s}'")));
            }
            Ok(n)
        };
        let (at, x, y) = match parts.as_slice() {
            [t, x] => (num(t)?, num(x)?, 0.0),
            [t, x, y] => (num(t)?, num(x)?, num(y)?),
            _ => {
                return Err(LandingError::validation(format!(
                    "expected T:X or T:X:Y, got '{s}'"
                )));
            }
        };
        if at < 0.0 {
            return Err(LandingError::validation(format!(
                "move time must be >= 0 in '{s}'"
            )));
        }
        Ok(Self {
            at,
            event: PointerEvent::new(x, y),
        })
    }
}

/// Pointer moves sorted by time. Moves sharing a time keep their given order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointerScript {
    moves: Vec<ScriptedMove>,
}

impl PointerScript {
    pub fn new(mut moves: Vec<ScriptedMove>) -> Self {
        moves.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { moves }
    }

    pub fn moves(&self) -> &[ScriptedMove] {
        &self.moves
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Per-frame report handed to the playback observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub frame: FrameIndex,
    pub time: f64,
    /// Handlers that ran for moves delivered this frame.
    pub handlers: usize,
}

pub struct Playback;

impl Playback {
    /// Longest run [`Playback::run`] accepts, in seconds.
    pub const MAX_DURATION: f64 = 3600.0;

    /// Mount `view` and step it at `view.config().fps` until `duration` seconds are covered.
    ///
    /// Scripted moves whose time has been reached are delivered before each frame's tick.
    /// `on_frame` sees the view after every tick.
    pub fn run(
        view: &mut LandingView,
        duration: f64,
        script: &PointerScript,
        mut on_frame: impl FnMut(FrameReport, &LandingView) -> LandingResult<()>,
    ) -> LandingResult<()> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(LandingError::validation(
                "playback duration must be a finite, non-negative number of seconds",
            ));
        }
        if duration > Self::MAX_DURATION {
            return Err(LandingError::validation(format!(
                "playback duration {duration}s exceeds the {}s limit",
                Self::MAX_DURATION
            )));
        }
        view.mount()?;
        let fps = view.config().fps;
        let dt = fps.frame_duration_secs();
        let frames = fps.secs_to_frames_ceil(duration);
        let mut pending = script.moves().iter().peekable();

        tracing::debug!(frames, dt, moves = script.moves().len(), "playback started");
        for f in 0..frames {
            let time = fps.frames_to_secs(f);
            let mut handlers = 0;
            while let Some(mv) = pending.next_if(|m| m.at <= time + 1e-9) {
                handlers += view.pointer_move(mv.event);
            }
            view.advance(dt)?;
            on_frame(
                FrameReport {
                    frame: FrameIndex(f),
                    time: fps.frames_to_secs(f + 1),
                    handlers,
                },
                view,
            )?;
        }
        Ok(())
    }
}
