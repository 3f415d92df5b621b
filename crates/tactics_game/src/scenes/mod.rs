//! Scene layer: each screen owns its core state and reacts to input; the
//! `Director` swaps scenes when one asks for a change.
//!
//! MainMenu and GameOver are drawn entirely by the engine. Reaching either
//! one ends the session as far as this crate is concerned.

mod battle;
mod exploration;
mod select;

pub use battle::BattleScene;
pub use exploration::ExplorationScene;
pub use select::CharacterSelectScene;

use glam::Vec2;
use serde::Deserialize;
use std::path::Path;

use tactics_core::input::{InputState, MouseBtn};
use tactics_core::roster::{default_catalog, RosterEntry};
use tactics_core::time::FrameClock;

use crate::config::GameConfig;
use crate::world::load_world_from_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneId {
    MainMenu,
    CharacterSelect,
    Battle,
    Exploration,
    GameOver,
}

/// On-screen buttons the host UI can route to a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiButton {
    Attack,
    EndTurn,
    Continue,
}

/// A scene's request to hand over to another one.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneChange {
    Battle(Vec<RosterEntry>),
    Exploration,
    GameOver,
    MainMenu,
}

impl SceneChange {
    pub fn target(&self) -> SceneId {
        match self {
            Self::Battle(_) => SceneId::Battle,
            Self::Exploration => SceneId::Exploration,
            Self::GameOver => SceneId::GameOver,
            Self::MainMenu => SceneId::MainMenu,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    Ready(SceneId),
    Changed { from: SceneId, to: SceneId },
}

/// Outbound notifications for whoever hosts the scenes.
#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<SceneEvent>,
}

impl EventBus {
    pub fn emit(&mut self, event: SceneEvent) {
        log::debug!("Scene event: {:?}", event);
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }
}

pub trait Scene {
    fn id(&self) -> SceneId;

    fn on_enter(&mut self, bus: &mut EventBus) {
        bus.emit(SceneEvent::Ready(self.id()));
    }

    fn pointer_down(&mut self, _pointer: Vec2) {}

    fn button(&mut self, _button: UiButton) -> Option<SceneChange> {
        None
    }

    /// One fixed step.
    fn update(&mut self, input: &InputState, clock: &FrameClock) -> Option<SceneChange>;

    /// One-line state description for logs.
    fn summary(&self) -> String;
}

pub struct Director {
    config: GameConfig,
    active: Option<Box<dyn Scene>>,
    finished: Option<SceneId>,
    bus: EventBus,
}

impl Director {
    /// Build and enter the starting scene. Failing to build it is fatal.
    pub fn new(config: GameConfig, start: SceneId) -> Result<Self, String> {
        let mut director = Self {
            config,
            active: None,
            finished: None,
            bus: EventBus::default(),
        };
        match start {
            SceneId::CharacterSelect => {
                director.enter(Box::new(CharacterSelectScene::new(default_catalog())))
            }
            SceneId::Battle => director.apply(SceneChange::Battle(default_catalog()))?,
            SceneId::Exploration => director.apply(SceneChange::Exploration)?,
            SceneId::MainMenu | SceneId::GameOver => {
                return Err(format!(
                    "Cannot start a session in engine-owned scene {:?}",
                    start
                ))
            }
        }
        Ok(director)
    }

    pub fn active_id(&self) -> Option<SceneId> {
        self.active.as_ref().map(|scene| scene.id())
    }

    pub fn active_scene(&self) -> Option<&dyn Scene> {
        self.active.as_deref()
    }

    /// The engine-owned scene the session ended in, if it has ended.
    pub fn finished(&self) -> Option<SceneId> {
        self.finished
    }

    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        self.bus.drain()
    }

    pub fn button(&mut self, button: UiButton) -> Result<(), String> {
        let change = match self.active.as_mut() {
            Some(scene) => scene.button(button),
            None => None,
        };
        match change {
            Some(change) => self.apply(change),
            None => Ok(()),
        }
    }

    pub fn update(&mut self, input: &InputState, clock: &FrameClock) -> Result<(), String> {
        let Some(scene) = self.active.as_mut() else {
            return Ok(());
        };
        if input.is_mouse_just_pressed(MouseBtn::Left) {
            scene.pointer_down(input.pointer);
        }
        match scene.update(input, clock) {
            Some(change) => self.apply(change),
            None => Ok(()),
        }
    }

    fn apply(&mut self, change: SceneChange) -> Result<(), String> {
        let target = change.target();
        let from = self.active_id();
        if let Some(from) = from {
            self.bus.emit(SceneEvent::Changed { from, to: target });
            log::info!("Scene change: {:?} -> {:?}", from, target);
        }

        let scene: Box<dyn Scene> = match change {
            SceneChange::Battle(party) => Box::new(BattleScene::new(&party, self.config.battle)?),
            SceneChange::Exploration => {
                let world = load_world_from_path(Path::new(&self.config.world_path))?;
                Box::new(ExplorationScene::new(world, self.config.explore)?)
            }
            SceneChange::GameOver | SceneChange::MainMenu => {
                self.active = None;
                self.finished = Some(target);
                log::info!("Handing over to engine-owned scene {:?}", target);
                return Ok(());
            }
        };
        self.enter(scene);
        Ok(())
    }

    fn enter(&mut self, mut scene: Box<dyn Scene>) {
        scene.on_enter(&mut self.bus);
        log::info!("Entered {:?}: {}", scene.id(), scene.summary());
        self.active = Some(scene);
    }
}
