//! Registry of named animation clips available to scenes.

use std::collections::HashMap;

use tactics_core::animation::AnimationClip;
use tactics_core::explore::Facing;

pub struct AnimationRegistry {
    clips: HashMap<String, AnimationClip>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self {
            clips: HashMap::new(),
        }
    }

    /// Registry holding the four looping walk clips, four frames each.
    pub fn with_walk_clips(frame_rate: u32) -> Self {
        let mut registry = Self::new();
        for &facing in Facing::ALL {
            let name = facing.walk_clip();
            let clip =
                AnimationClip::from_numbered_frames(&format!("{name}."), 0, 3, 3, frame_rate, true);
            registry.register(&name, clip);
        }
        registry
    }

    pub fn register(&mut self, name: &str, clip: AnimationClip) {
        if self.clips.insert(name.to_string(), clip).is_some() {
            log::warn!("Animation '{}' registered twice; keeping the newer clip", name);
        }
    }

    pub fn resolve_clip(&self, name: &str) -> Option<&AnimationClip> {
        self.clips.get(name)
    }
}

impl Default for AnimationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
