//! Top-down movement intent, velocity and directional sprite lookup for the
//! exploration screen.

use glam::Vec2;

use crate::input::{InputState, Key};

pub const DEFAULT_WALK_SPEED: f32 = 175.0;

/// Atlas prefix shared by the explorer's frames and clips.
pub const SPRITE_PREFIX: &str = "misa";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Left,
    Right,
    Back,
    Front,
}

impl Facing {
    pub const ALL: &'static [Facing] = &[Facing::Left, Facing::Right, Facing::Back, Facing::Front];

    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Back => "back",
            Self::Front => "front",
        }
    }

    /// Looping walk clip name, e.g. `misa-left-walk`.
    pub fn walk_clip(self) -> String {
        format!("{SPRITE_PREFIX}-{}-walk", self.label())
    }

    /// Still frame shown when standing, e.g. `misa-left`.
    pub fn idle_frame(self) -> String {
        format!("{SPRITE_PREFIX}-{}", self.label())
    }
}

/// Arrow keys held this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MoveIntent {
    pub fn from_input(input: &InputState) -> Self {
        Self {
            left: input.is_held(Key::Left),
            right: input.is_held(Key::Right),
            up: input.is_held(Key::Up),
            down: input.is_held(Key::Down),
        }
    }

    /// Velocity for this intent. Left beats right and up beats down; the
    /// result is rescaled so diagonals are no faster than straight lines.
    pub fn velocity(&self, speed: f32) -> Vec2 {
        let x = if self.left {
            -speed
        } else if self.right {
            speed
        } else {
            0.0
        };
        let y = if self.up {
            -speed
        } else if self.down {
            speed
        } else {
            0.0
        };
        Vec2::new(x, y).normalize_or_zero() * speed
    }

    /// Walk direction to animate. Horizontal keys take precedence.
    pub fn walk_facing(&self) -> Option<Facing> {
        if self.left {
            Some(Facing::Left)
        } else if self.right {
            Some(Facing::Right)
        } else if self.up {
            Some(Facing::Back)
        } else if self.down {
            Some(Facing::Front)
        } else {
            None
        }
    }
}

/// Which way to stand after stopping, judged from last frame's velocity.
/// `None` means keep whatever frame is showing.
pub fn idle_facing(previous_velocity: Vec2) -> Option<Facing> {
    if previous_velocity.x < 0.0 {
        Some(Facing::Left)
    } else if previous_velocity.x > 0.0 {
        Some(Facing::Right)
    } else if previous_velocity.y < 0.0 {
        Some(Facing::Back)
    } else if previous_velocity.y > 0.0 {
        Some(Facing::Front)
    } else {
        None
    }
}
