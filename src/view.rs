use crate::animation::engine::Engine;
use crate::animation::tween::Signal;
use crate::config::LandingConfig;
use crate::foundation::error::LandingResult;
use crate::intro::IntroSequencer;
use crate::markup::{self, ids};
use crate::parallax::{ParallaxScene, ScenePhase};
use crate::stage::events::PointerEvent;
use crate::stage::model::{LayerId, LayerProps, Stage};

/// Where the page is in its one-way lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Phase {
    NotStarted,
    IntroPlaying,
    ContentVisible(ScenePhase),
}

/// Top-level page state: the stage, the animation engine, and the single
/// "content visible" flag that gates the hero scene.
#[derive(Debug)]
pub struct LandingView {
    config: LandingConfig,
    stage: Stage,
    engine: Engine,
    content_visible: bool,
    intro: Option<IntroSequencer>,
    scene: Option<ParallaxScene>,
    mounted: bool,
    unmounted: bool,
}

impl LandingView {
    /// Lay out the intro graphic. Nothing animates until [`LandingView::mount`].
    #[tracing::instrument(skip(config), fields(width = config.viewport.width, height = config.viewport.height))]
    pub fn new(config: LandingConfig) -> LandingResult<Self> {
        config.validate()?;
        let mut stage = Stage::new(config.viewport);
        markup::insert_intro(&mut stage, &config.assets)?;
        Ok(Self {
            config,
            stage,
            engine: Engine::new(),
            content_visible: false,
            intro: None,
            scene: None,
            mounted: false,
            unmounted: false,
        })
    }

    /// Start the intro. Does nothing once mounted, or after [`LandingView::unmount`].
    #[tracing::instrument(skip(self))]
    pub fn mount(&mut self) -> LandingResult<()> {
        if self.mounted || self.unmounted {
            return Ok(());
        }
        self.mounted = true;
        self.intro = Some(IntroSequencer::start(&mut self.engine, &self.config.intro)?);
        Ok(())
    }

    /// Advance one frame of `dt` seconds and react to intro handoff.
    pub fn advance(&mut self, dt: f64) -> LandingResult<()> {
        if !self.mounted || self.unmounted {
            return Ok(());
        }
        for signal in self.engine.tick(dt, &mut self.stage) {
            match signal {
                Signal::ContentReady => self.show_content()?,
            }
        }
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(now = self.engine.now()))]
    fn show_content(&mut self) -> LandingResult<()> {
        if self.content_visible {
            return Ok(());
        }
        self.content_visible = true;
        markup::insert_main_content(&mut self.stage, &self.config.assets)?;
        self.scene = ParallaxScene::enter(
            &self.stage,
            &mut self.engine,
            &self.config.entry,
            &self.config.tracking,
        );
        tracing::info!(scene = self.scene.is_some(), "content visible");
        Ok(())
    }

    /// Topmost layer under the pointer: the intro overlay while it exists, else the hero.
    pub fn hit_target(&self) -> Option<LayerId> {
        [ids::INTRO, ids::MAIN]
            .into_iter()
            .find(|id| self.stage.contains(*id))
    }

    /// Deliver a pointer move to the topmost layer. Returns the number of handlers run.
    pub fn pointer_move(&mut self, event: PointerEvent) -> usize {
        match self.hit_target() {
            Some(target) => self.pointer_move_at(target, event),
            None => 0,
        }
    }

    /// Deliver a pointer move at a specific layer, bubbling to its ancestors.
    pub fn pointer_move_at(&mut self, target: LayerId, event: PointerEvent) -> usize {
        if self.unmounted {
            return 0;
        }
        self.stage
            .dispatch_pointer_move(target, &event, &mut self.engine)
    }

    /// Tear the page down: detach pointer tracking and stop every animation.
    #[tracing::instrument(skip(self))]
    pub fn unmount(&mut self) {
        if self.unmounted {
            return;
        }
        self.unmounted = true;
        if let Some(scene) = self.scene.take() {
            scene.teardown();
        }
        self.engine.kill_all();
        tracing::info!("view unmounted");
    }

    pub fn phase(&self) -> Phase {
        if self.content_visible {
            let scene = self
                .scene
                .as_ref()
                .map_or(ScenePhase::Tracking, |s| s.phase(&self.engine));
            Phase::ContentVisible(scene)
        } else if self.mounted {
            Phase::IntroPlaying
        } else {
            Phase::NotStarted
        }
    }

    pub fn content_visible(&self) -> bool {
        self.content_visible
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted && !self.unmounted
    }

    pub fn config(&self) -> &LandingConfig {
        &self.config
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn intro(&self) -> Option<&IntroSequencer> {
        self.intro.as_ref()
    }

    pub fn scene(&self) -> Option<&ParallaxScene> {
        self.scene.as_ref()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let layers = TRACKED_LAYERS
            .iter()
            .filter_map(|id| {
                self.stage.props(*id).map(|props| LayerSnapshot { id: *id, props })
            })
            .collect();
        ViewSnapshot {
            time: self.engine.now(),
            phase: self.phase(),
            content_visible: self.content_visible,
            listeners: self.stage.events().listener_count(),
            active_tweens: self.engine.active_count(),
            layers,
        }
    }
}

const TRACKED_LAYERS: [LayerId; 6] = [
    ids::MASK_GROUP,
    ids::MAIN,
    ids::SKY,
    ids::BG,
    ids::TEXT,
    ids::CHARACTER,
];

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayerSnapshot {
    pub id: LayerId,
    #[serde(flatten)]
    pub props: LayerProps,
}

/// Serializable state of the animated layers at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ViewSnapshot {
    pub time: f64,
    pub phase: Phase,
    pub content_visible: bool,
    pub listeners: usize,
    pub active_tweens: usize,
    pub layers: Vec<LayerSnapshot>,
}

impl ViewSnapshot {
    pub fn layer(&self, id: LayerId) -> Option<&LayerProps> {
        self.layers.iter().find(|l| l.id == id).map(|l| &l.props)
    }
}
