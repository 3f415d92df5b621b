use glam::Vec2;

use tactics_core::animation::AnimationState;
use tactics_core::explore::{idle_facing, Facing, MoveIntent};

use crate::animation::AnimationRegistry;
use crate::world::{Aabb, TileWorld};

/// One walkable character in the tile world.
#[derive(Debug, Clone)]
pub struct ExplorerBody {
    pub texture_key: String,
    pub aabb: Aabb,
    pub velocity: Vec2,
    /// Atlas frame currently shown.
    pub frame: String,
    playing: Option<AnimationState>,
}

impl ExplorerBody {
    pub fn new(texture_key: &str, center: Vec2, size: Vec2) -> Self {
        Self {
            texture_key: texture_key.to_string(),
            aabb: Aabb {
                center_x: center.x,
                center_y: center.y,
                half_w: size.x / 2.0,
                half_h: size.y / 2.0,
            },
            velocity: Vec2::ZERO,
            frame: Facing::Front.idle_frame(),
            playing: None,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.aabb.center()
    }

    pub fn playing_clip(&self) -> Option<&str> {
        self.playing.as_ref().map(|state| state.clip_name.as_str())
    }

    /// One fixed step: set velocity from intent, pick the sprite, then move.
    pub fn step(
        &mut self,
        intent: MoveIntent,
        speed: f32,
        dt_us: u64,
        world: &TileWorld,
        animations: &AnimationRegistry,
    ) {
        let previous_velocity = self.velocity;
        self.velocity = intent.velocity(speed);

        match intent.walk_facing() {
            Some(facing) => self.play(&facing.walk_clip(), dt_us, animations),
            None => {
                self.playing = None;
                if let Some(facing) = idle_facing(previous_velocity) {
                    self.frame = facing.idle_frame();
                }
            }
        }

        let dt = dt_us as f32 / 1_000_000.0;
        let result = world.move_and_collide(self.aabb, self.velocity.x * dt, self.velocity.y * dt);
        self.aabb = result.aabb;
        // Blocked axes lose their velocity, as with an arcade collider.
        if result.blocked_left || result.blocked_right {
            self.velocity.x = 0.0;
        }
        if result.blocked_up || result.blocked_down {
            self.velocity.y = 0.0;
        }
    }

    pub fn halt(&mut self) {
        self.velocity = Vec2::ZERO;
        self.playing = None;
    }

    /// Play `clip_name`, continuing it if it is already the playing clip.
    fn play(&mut self, clip_name: &str, dt_us: u64, animations: &AnimationRegistry) {
        let Some(clip) = animations.resolve_clip(clip_name) else {
            log::warn!("Animation '{}' not registered", clip_name);
            return;
        };
        if self.playing_clip() != Some(clip_name) {
            self.playing = Some(AnimationState::new(clip_name));
        }
        if let Some(state) = self.playing.as_mut() {
            self.frame = state.tick(dt_us, clip).to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{TileCell, WorldFile, WorldObject, SPAWN_POINT};

    const DT_US: u64 = 16_667;

    fn open_world(solids: Vec<TileCell>) -> TileWorld {
        TileWorld::from_file(WorldFile {
            version: "0.1".to_string(),
            world_id: "test".to_string(),
            tile_size: 32,
            width: 20,
            height: 20,
            solids,
            objects: vec![WorldObject {
                name: SPAWN_POINT.to_string(),
                x: 320.0,
                y: 320.0,
            }],
        })
    }

    fn right() -> MoveIntent {
        MoveIntent {
            right: true,
            ..MoveIntent::default()
        }
    }

    fn body() -> ExplorerBody {
        ExplorerBody::new("misa", Vec2::new(320.0, 320.0), Vec2::new(30.0, 40.0))
    }

    #[test]
    fn walking_plays_walk_clip_and_moves() {
        let world = open_world(vec![]);
        let animations = AnimationRegistry::with_walk_clips(10);
        let mut body = body();

        body.step(right(), 175.0, DT_US, &world, &animations);
        assert_eq!(body.playing_clip(), Some("misa-right-walk"));
        assert_eq!(body.frame, "misa-right-walk.000");
        assert!(body.position().x > 320.0);
    }

    #[test]
    fn continuing_same_clip_does_not_restart() {
        let world = open_world(vec![]);
        let animations = AnimationRegistry::with_walk_clips(10);
        let mut body = body();

        for _ in 0..7 {
            body.step(right(), 175.0, DT_US, &world, &animations);
        }
        // 7 * 16.667ms > 100ms, so the clip has moved past its first frame.
        assert_eq!(body.frame, "misa-right-walk.001");
    }

    #[test]
    fn stopping_shows_idle_frame_for_last_direction() {
        let world = open_world(vec![]);
        let animations = AnimationRegistry::with_walk_clips(10);
        let mut body = body();

        let up = MoveIntent {
            up: true,
            ..MoveIntent::default()
        };
        body.step(up, 175.0, DT_US, &world, &animations);
        body.step(MoveIntent::default(), 175.0, DT_US, &world, &animations);
        assert_eq!(body.playing_clip(), None);
        assert_eq!(body.frame, "misa-back");

        // Standing still a second frame keeps the frame.
        body.step(MoveIntent::default(), 175.0, DT_US, &world, &animations);
        assert_eq!(body.frame, "misa-back");
    }

    #[test]
    fn wall_stops_body_and_zeroes_velocity() {
        let world = open_world((0..20).map(|y| TileCell { x: 11, y }).collect());
        let animations = AnimationRegistry::with_walk_clips(10);
        let mut body = body();

        for _ in 0..120 {
            body.step(right(), 175.0, DT_US, &world, &animations);
        }
        assert!(body.aabb.center_x + body.aabb.half_w <= 352.0 + 0.001);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn halt_clears_motion() {
        let world = open_world(vec![]);
        let animations = AnimationRegistry::with_walk_clips(10);
        let mut body = body();
        body.step(right(), 175.0, DT_US, &world, &animations);
        body.halt();
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.playing_clip(), None);
    }
}
