//! Headless choreography for an animated landing page.
//!
//! A [`LandingView`] owns the element [`Stage`], the tween [`Engine`], and the single
//! "content visible" flag:
//!
//! - [`LandingView::mount`] plays the masked intro ([`IntroSequencer`])
//! - at the reveal threshold the intro removes itself and the hero mounts ([`ParallaxScene`])
//! - pointer moves then retarget the hero layers until [`LandingView::unmount`]
//!
//! Time only advances through [`LandingView::advance`], so every run is reproducible.
//! [`render`] turns a stage into SVG and pixels.
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod config;
pub mod intro;
pub mod markup;
pub mod parallax;
pub mod playback;
pub mod render;
pub mod stage;
pub mod view;

pub use crate::foundation::core::{Affine, Fps, FrameIndex, Point, Rect, Vec2, Viewport};
pub use crate::foundation::error::{LandingError, LandingResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::engine::Engine;
pub use crate::animation::timeline::Timeline;
pub use crate::animation::tween::{Overwrite, Signal, TweenId, TweenSpec, UpdateCtx};
pub use crate::config::{AssetConfig, EntryConfig, IntroConfig, LandingConfig, TrackingConfig};
pub use crate::intro::IntroSequencer;
pub use crate::parallax::{ParallaxOffsets, ParallaxScene, ScenePhase, parallax_offsets};
pub use crate::playback::{FrameReport, Playback, PointerScript, ScriptedMove};
pub use crate::render::raster::{FrameRGBA, Rasterizer};
pub use crate::render::svg::stage_to_svg;
pub use crate::stage::events::{EventKind, ListenerGuard, ListenerId, PointerEvent};
pub use crate::stage::model::{Layer, LayerId, LayerKind, LayerProps, Prop, Stage};
pub use crate::view::{LandingView, LayerSnapshot, Phase, ViewSnapshot};
