//! Input state tracking with both edge-triggered and level-triggered queries.
//!
//! - **Level-triggered (held):** `is_held(key)` is true every frame the key is
//!   down. Exploration movement reads this.
//!
//! - **Edge-triggered (just_pressed):** true from the press until the next
//!   `end_frame()`. Party picks, character switching and pointer clicks read
//!   these so one press acts once.

use std::collections::HashSet;

use glam::Vec2;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Enter,
    Escape,
    D,
    Digit1,
    Digit2,
    Digit3,
}

impl Key {
    /// Zero-based slot for the number-row keys.
    pub fn slot(self) -> Option<usize> {
        match self {
            Self::Digit1 => Some(0),
            Self::Digit2 => Some(1),
            Self::Digit3 => Some(2),
            _ => None,
        }
    }

    pub const SLOTS: &'static [Key] = &[Key::Digit1, Key::Digit2, Key::Digit3];

    pub const ALL: &'static [Key] = &[
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
        Key::Enter,
        Key::Escape,
        Key::D,
        Key::Digit1,
        Key::Digit2,
        Key::Digit3,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseBtn {
    Left,
}

pub struct InputState {
    held: HashSet<Key>,
    just_pressed: HashSet<Key>,

    mouse_held: HashSet<MouseBtn>,
    mouse_just_pressed: HashSet<MouseBtn>,

    pub pointer: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            just_pressed: HashSet::new(),
            mouse_held: HashSet::new(),
            mouse_just_pressed: HashSet::new(),
            pointer: Vec2::ZERO,
        }
    }

    pub fn key_down(&mut self, key: Key) {
        if self.held.insert(key) {
            self.just_pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn mouse_down(&mut self, btn: MouseBtn) {
        if self.mouse_held.insert(btn) {
            self.mouse_just_pressed.insert(btn);
        }
    }

    pub fn mouse_up(&mut self, btn: MouseBtn) {
        self.mouse_held.remove(&btn);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn is_just_pressed(&self, key: Key) -> bool {
        self.just_pressed.contains(&key)
    }

    pub fn is_mouse_just_pressed(&self, btn: MouseBtn) -> bool {
        self.mouse_just_pressed.contains(&btn)
    }

    /// First number-row key pressed this frame, as a zero-based slot.
    pub fn just_pressed_slot(&self) -> Option<usize> {
        Key::SLOTS
            .iter()
            .find(|&&key| self.is_just_pressed(key))
            .and_then(|key| key.slot())
    }

    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.mouse_just_pressed.clear();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_down_sets_held_and_just_pressed() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        assert!(input.is_held(Key::Left));
        assert!(input.is_just_pressed(Key::Left));
    }

    #[test]
    fn key_up_clears_held_but_not_pending_press() {
        let mut input = InputState::new();
        input.key_down(Key::Up);
        input.key_up(Key::Up);
        assert!(!input.is_held(Key::Up));
        // A tap inside one frame still reads as a press until end_frame.
        assert!(input.is_just_pressed(Key::Up));
        input.end_frame();
        assert!(!input.is_just_pressed(Key::Up));
    }

    #[test]
    fn end_frame_keeps_held_drops_edges() {
        let mut input = InputState::new();
        input.key_down(Key::Right);
        input.mouse_down(MouseBtn::Left);
        input.end_frame();
        assert!(input.is_held(Key::Right));
        assert!(!input.is_just_pressed(Key::Right));
        assert!(!input.is_mouse_just_pressed(MouseBtn::Left));
    }

    #[test]
    fn repeated_mouse_down_reports_one_press() {
        let mut input = InputState::new();
        input.mouse_down(MouseBtn::Left);
        input.end_frame();
        input.mouse_down(MouseBtn::Left);
        assert!(!input.is_mouse_just_pressed(MouseBtn::Left));
        input.mouse_up(MouseBtn::Left);
        input.mouse_down(MouseBtn::Left);
        assert!(input.is_mouse_just_pressed(MouseBtn::Left));
    }

    #[test]
    fn slot_keys_map_to_zero_based_index() {
        let mut input = InputState::new();
        assert_eq!(input.just_pressed_slot(), None);
        input.key_down(Key::Digit3);
        assert_eq!(input.just_pressed_slot(), Some(2));
        assert_eq!(Key::Enter.slot(), None);
    }
}
