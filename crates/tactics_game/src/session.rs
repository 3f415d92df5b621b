//! Headless host loop: feeds scripted frames through the input tracker and
//! fixed-step clock into the scene director.

use tactics_core::input::{InputState, Key, MouseBtn};
use tactics_core::time::FrameClock;

use crate::scenes::{Director, SceneId};
use crate::script::FrameInput;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub frames: u64,
    pub fixed_steps: u64,
    /// Active scene, or the engine-owned scene the session ended in.
    pub scene: Option<SceneId>,
    pub ended: bool,
    pub summary: String,
}

pub struct Session {
    director: Director,
    input: InputState,
    clock: FrameClock,
    frame_dt_us: u64,
}

impl Session {
    pub fn new(director: Director, fixed_dt_us: u64, frame_dt_us: u64) -> Self {
        Self {
            director,
            input: InputState::new(),
            clock: FrameClock::new(fixed_dt_us),
            frame_dt_us,
        }
    }

    /// Apply one host frame: sync device state, route buttons, then run
    /// however many fixed steps the clock hands out.
    pub fn frame(&mut self, frame: &FrameInput) -> Result<(), String> {
        for &key in Key::ALL {
            if !frame.keys.contains(&key) {
                self.input.key_up(key);
            }
        }
        self.input.mouse_up(MouseBtn::Left);
        for &key in &frame.keys {
            self.input.key_down(key);
        }
        if let Some(pointer) = frame.pointer_down {
            self.input.pointer = pointer;
            self.input.mouse_down(MouseBtn::Left);
        }

        if let Some(button) = frame.button {
            log::debug!("Button pressed: {:?}", button);
            self.director.button(button)?;
        }

        self.clock.begin_frame(self.frame_dt_us);
        while self.clock.should_step() {
            self.director.update(&self.input, &self.clock)?;
            // Edges act on the first step that sees them; held keys carry on.
            // A frame that runs no step keeps its edges for the next frame.
            self.input.end_frame();
        }
        for event in self.director.drain_events() {
            log::debug!("{:?}", event);
        }
        Ok(())
    }

    /// Run until the frames run out or the session hands over to an
    /// engine-owned scene.
    pub fn run(&mut self, frames: &[FrameInput]) -> Result<SessionReport, String> {
        for frame in frames {
            if self.director.finished().is_some() {
                break;
            }
            self.frame(frame)?;
        }
        Ok(self.report())
    }

    pub fn report(&self) -> SessionReport {
        let summary = match self.director.active_scene() {
            Some(scene) => scene.summary(),
            None => "session handed over to the engine".to_string(),
        };
        SessionReport {
            frames: self.clock.frame_count,
            fixed_steps: self.clock.fixed_step_count,
            scene: self.director.active_id().or(self.director.finished()),
            ended: self.director.finished().is_some(),
            summary,
        }
    }
}
