use glam::Vec2;

use tactics_core::explore::{MoveIntent, SPRITE_PREFIX};
use tactics_core::input::{InputState, Key};
use tactics_core::time::FrameClock;

use crate::animation::AnimationRegistry;
use crate::config::ExploreConfig;
use crate::controller::ExplorerBody;
use crate::world::TileWorld;

use super::{Scene, SceneChange, SceneId, UiButton};

/// Texture keys of the walkable party, in switch order.
const PARTY_TEXTURES: &[&str] = &["character1", "character2", "character3"];

pub struct ExplorationScene {
    world: TileWorld,
    config: ExploreConfig,
    animations: AnimationRegistry,
    /// Index 0 is the default explorer, followed by the party.
    bodies: Vec<ExplorerBody>,
    player: usize,
    debug_hitboxes: bool,
}

impl ExplorationScene {
    pub fn new(world: TileWorld, config: ExploreConfig) -> Result<Self, String> {
        let spawn = world.spawn_point()?;
        let size = Vec2::new(config.body_width, config.body_height);
        let bodies = std::iter::once(SPRITE_PREFIX)
            .chain(PARTY_TEXTURES.iter().copied())
            .map(|key| ExplorerBody::new(key, spawn, size))
            .collect();

        Ok(Self {
            world,
            animations: AnimationRegistry::with_walk_clips(config.walk_frame_rate),
            config,
            bodies,
            player: 0,
            debug_hitboxes: false,
        })
    }

    pub fn player(&self) -> &ExplorerBody {
        &self.bodies[self.player]
    }

    /// Hand control to party member `index`.
    pub fn select_character(&mut self, index: usize) {
        let target = index + 1;
        if target >= self.bodies.len() {
            log::debug!("No party member at index {}", index);
            return;
        }
        self.bodies[self.player].halt();
        self.player = target;
        log::info!("Now controlling '{}'", self.bodies[target].texture_key);
    }

    /// Player position clamped to the world bounds.
    pub fn camera_target(&self) -> Vec2 {
        self.player()
            .position()
            .clamp(Vec2::ZERO, self.world.size_px())
    }
}

impl Scene for ExplorationScene {
    fn id(&self) -> SceneId {
        SceneId::Exploration
    }

    fn button(&mut self, button: UiButton) -> Option<SceneChange> {
        match button {
            UiButton::Continue => Some(SceneChange::GameOver),
            UiButton::Attack | UiButton::EndTurn => None,
        }
    }

    fn update(&mut self, input: &InputState, clock: &FrameClock) -> Option<SceneChange> {
        if !self.debug_hitboxes && input.is_just_pressed(Key::D) {
            self.debug_hitboxes = true;
            log::info!("Debug hitboxes on");
        }
        if let Some(slot) = input.just_pressed_slot() {
            self.select_character(slot);
        }

        let intent = MoveIntent::from_input(input);
        let speed = self.config.walk_speed;
        self.bodies[self.player].step(
            intent,
            speed,
            clock.fixed_dt_us,
            &self.world,
            &self.animations,
        );
        None
    }

    fn summary(&self) -> String {
        let player = self.player();
        let pos = player.position();
        let camera = self.camera_target();
        format!(
            "'{}' at ({:.1}, {:.1}) showing {}, camera ({:.1}, {:.1}), hitboxes {}, {} solid tiles",
            player.texture_key,
            pos.x,
            pos.y,
            player.frame,
            camera.x,
            camera.y,
            if self.debug_hitboxes { "on" } else { "off" },
            self.world.solid_count()
        )
    }
}
